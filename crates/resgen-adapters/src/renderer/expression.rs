//! `${...}` expression renderer.
//!
//! # Template syntax
//!
//! | Form                   | Meaning                                        |
//! |------------------------|------------------------------------------------|
//! | `${name}`              | Value of `name`; lists are joined with `,`     |
//! | `${name[2]}`           | Third element of the list `name`               |
//! | `${name ?: fallback}`  | `fallback` (optionally quoted) when unbound    |
//! | `${> header.txt}`      | Sibling template rendered with the same context |
//!
//! Include paths stay inside the base directory: absolute paths and `..`
//! are rejected.
//! | `$${`                  | A literal `${`                                 |
//!
//! Substituted values are escaped for the template mode. In `javascript`
//! mode a whole list becomes an array literal; `css` mode has no list form.
//! `raw` templates are returned exactly as read.
//!
//! Templates are read from disk on every call. Nothing is cached.

use std::fs;
use std::path::{Component, Path};
use std::sync::OnceLock;

use regex::Regex;
use resgen_core::{
    application::{RenderError, ports::TemplateRenderer},
    domain::{Charset, PropertyValue, RenderContext, TemplateMode},
};
use tracing::{debug, instrument};

use super::escape;

/// Include nesting limit; deeper chains are almost certainly cycles.
pub const MAX_INCLUDE_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expression<'a> {
    Reference {
        name: &'a str,
        index: Option<usize>,
        fallback: Option<&'a str>,
    },
    Include {
        path: &'a str,
    },
}

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^\s*(?P<name>[A-Za-z_][A-Za-z0-9_.\-]*)\s*(?:\[\s*(?P<index>[0-9]+)\s*\])?\s*(?:\?:(?P<fallback>.*))?$",
        )
        .expect("reference pattern is a valid regex")
    })
}

impl<'a> Expression<'a> {
    fn parse(body: &'a str) -> Result<Self, String> {
        if let Some(path) = body.trim_start().strip_prefix('>') {
            let path = path.trim();
            if path.is_empty() {
                return Err("include without a file name".into());
            }
            return Ok(Self::Include { path });
        }

        if body.trim().is_empty() {
            return Err("empty expression".into());
        }

        let caps = reference_pattern()
            .captures(body)
            .ok_or_else(|| format!("malformed expression '{}'", body.trim()))?;

        let name = caps.name("name").map_or("", |m| m.as_str());
        let index = caps
            .name("index")
            .map(|m| {
                m.as_str()
                    .parse::<usize>()
                    .map_err(|_| format!("index '{}' is out of range", m.as_str()))
            })
            .transpose()?;
        let fallback = caps.name("fallback").map(|m| unquote(m.as_str().trim()));

        Ok(Self::Reference {
            name,
            index,
            fallback,
        })
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn syntax(template: &str, line: usize, message: impl Into<String>) -> RenderError {
    RenderError::Syntax {
        template: template.to_string(),
        line,
        message: message.into(),
    }
}

fn load(base: &Path, name: &str, charset: &Charset) -> Result<String, RenderError> {
    let path = base.join(name);
    let bytes = fs::read(&path).map_err(|source| RenderError::Load {
        path: path.clone(),
        source,
    })?;
    charset
        .decode(&bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| RenderError::Decoding {
            path,
            charset: charset.label().to_string(),
        })
}

/// File-based renderer for the `${...}` template dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionRenderer;

impl ExpressionRenderer {
    /// Create a new expression renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for ExpressionRenderer {
    #[instrument(skip_all, fields(template = %template_name, mode = %mode))]
    fn render(
        &self,
        template_name: &str,
        base_directory: &Path,
        mode: TemplateMode,
        charset: &Charset,
        context: &RenderContext,
    ) -> Result<String, RenderError> {
        let source = load(base_directory, template_name, charset)?;
        if mode == TemplateMode::Raw {
            return Ok(source);
        }

        let pass = RenderPass {
            base: base_directory,
            mode,
            charset,
            context,
        };
        pass.render(template_name, &source, 0)
    }
}

/// State shared by a template and everything it includes.
struct RenderPass<'a> {
    base: &'a Path,
    mode: TemplateMode,
    charset: &'a Charset,
    context: &'a RenderContext,
}

impl RenderPass<'_> {
    fn render(&self, template: &str, source: &str, depth: usize) -> Result<String, RenderError> {
        let mut out = String::with_capacity(source.len());
        let mut offset = 0;
        let mut line = 1;
        let mut counted = 0;

        while let Some(found) = source[offset..].find('$') {
            let start = offset + found;
            out.push_str(&source[offset..start]);
            let tail = &source[start..];

            if tail.starts_with("$${") {
                out.push_str("${");
                offset = start + 3;
            } else if let Some(rest) = tail.strip_prefix("${") {
                line += source[counted..start].matches('\n').count();
                counted = start;
                let close = rest
                    .find('}')
                    .ok_or_else(|| syntax(template, line, "unterminated expression"))?;
                let expr =
                    Expression::parse(&rest[..close]).map_err(|msg| syntax(template, line, msg))?;
                out.push_str(&self.evaluate(template, line, expr, depth)?);
                offset = start + 2 + close + 1;
            } else {
                out.push('$');
                offset = start + 1;
            }
        }

        out.push_str(&source[offset..]);
        Ok(out)
    }

    fn evaluate(
        &self,
        template: &str,
        line: usize,
        expr: Expression<'_>,
        depth: usize,
    ) -> Result<String, RenderError> {
        match expr {
            Expression::Include { path } => {
                if depth >= MAX_INCLUDE_DEPTH {
                    return Err(syntax(
                        template,
                        line,
                        format!("includes nested deeper than {MAX_INCLUDE_DEPTH} levels"),
                    ));
                }
                if !is_sibling(path) {
                    return Err(self.unsupported(
                        template,
                        line,
                        format!("include of '{path}' outside the template directory"),
                    ));
                }
                debug!(include = %path, depth = depth + 1, "Including sibling template");
                let source = load(self.base, path, self.charset)?;
                self.render(path, &source, depth + 1)
            }
            Expression::Reference {
                name,
                index,
                fallback,
            } => {
                let Some(value) = self.context.get(name) else {
                    return match fallback {
                        Some(text) => Ok(self.escape(text)),
                        None => Err(RenderError::UnresolvedReference {
                            template: template.to_string(),
                            name: name.to_string(),
                            line,
                        }),
                    };
                };

                match (value, index) {
                    (PropertyValue::Scalar(s), None) => Ok(self.escape(s)),
                    (PropertyValue::List(items), Some(i)) => items
                        .get(i)
                        .map(|item| self.escape(item))
                        .ok_or_else(|| RenderError::UnresolvedReference {
                            template: template.to_string(),
                            name: format!("{name}[{i}]"),
                            line,
                        }),
                    (PropertyValue::Scalar(_), Some(i)) => {
                        Err(self.unsupported(template, line, format!("{name}[{i}] on a scalar")))
                    }
                    (PropertyValue::List(items), None) => match self.mode {
                        TemplateMode::Javascript => Ok(escape::javascript_array(items)),
                        TemplateMode::Css => {
                            Err(self.unsupported(template, line, format!("list value '{name}'")))
                        }
                        _ => Ok(self.escape(&value.to_string())),
                    },
                }
            }
        }
    }

    fn escape(&self, text: &str) -> String {
        match self.mode {
            mode if mode.is_markup() => escape::markup(text),
            TemplateMode::Javascript => escape::javascript(text),
            TemplateMode::Css => escape::css(text),
            _ => text.to_string(),
        }
    }

    fn unsupported(&self, template: &str, line: usize, construct: String) -> RenderError {
        RenderError::UnsupportedConstruct {
            template: template.to_string(),
            mode: self.mode,
            construct,
            line,
        }
    }
}

fn is_sibling(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
