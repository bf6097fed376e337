//! Invocation configuration.
//!
//! A [`Configuration`] is built once from the invocation parameters and is
//! read-only afterwards. The builder validates everything that can be
//! checked without touching the filesystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{Charset, TemplateMode},
};

/// Explicitly configured properties, keyed by name.
///
/// A `None` value records a property that was declared without a value; the
/// property resolver rejects it.
pub type ExplicitProperties = BTreeMap<String, Option<String>>;

/// Everything one generation run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    template: PathBuf,
    output: PathBuf,
    properties: ExplicitProperties,
    mode: TemplateMode,
    charset: Charset,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Location of the template file.
    pub fn template(&self) -> &Path {
        &self.template
    }

    /// Requested output location, possibly relative.
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn properties(&self) -> &ExplicitProperties {
        &self.properties
    }

    pub fn mode(&self) -> TemplateMode {
        self.mode
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// File name the renderer resolves inside [`Self::template_dir`].
    pub fn template_name(&self) -> Option<&str> {
        self.template.file_name().and_then(|n| n.to_str())
    }

    /// Directory holding the template and any sibling includes.
    ///
    /// A bare file name lives in the current directory.
    pub fn template_dir(&self) -> &Path {
        match self.template.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Builder for [`Configuration`].
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    properties: ExplicitProperties,
    mode: Option<TemplateMode>,
    encoding: Option<String>,
}

impl ConfigurationBuilder {
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Add an explicit property. Later calls replace earlier ones.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), Some(value.into()));
        self
    }

    /// Declare an explicit property that has no value.
    pub fn declared_property(mut self, key: impl Into<String>) -> Self {
        self.properties.insert(key.into(), None);
        self
    }

    pub fn properties<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        self.properties
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn mode(mut self, mode: TemplateMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn build(self) -> Result<Configuration, DomainError> {
        let template = self
            .template
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(DomainError::MissingRequiredField { field: "template" })?;
        let output = self
            .output
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(DomainError::MissingRequiredField { field: "output" })?;

        if self.properties.keys().any(|k| k.trim().is_empty()) {
            return Err(DomainError::EmptyPropertyKey);
        }

        let charset = match self.encoding {
            Some(label) => Charset::for_label(&label)?,
            None => Charset::default(),
        };

        Ok(Configuration {
            template,
            output,
            properties: self.properties,
            mode: self.mode.unwrap_or_default(),
            charset,
        })
    }
}
