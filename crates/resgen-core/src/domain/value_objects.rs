//! Domain value objects: TemplateMode, Charset.
//!
//! Pure value types with equality-by-value and no identity. This file's only
//! job is to define the types, their string representations and their
//! parsers.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── TemplateMode ─────────────────────────────────────────────────────────────

/// The syntax dialect the template engine parses a template as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    Html,
    Xml,
    #[default]
    Text,
    Javascript,
    Css,
    Raw,
}

impl TemplateMode {
    pub const ALL: [TemplateMode; 6] = [
        Self::Html,
        Self::Xml,
        Self::Text,
        Self::Javascript,
        Self::Css,
        Self::Raw,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Text => "text",
            Self::Javascript => "javascript",
            Self::Css => "css",
            Self::Raw => "raw",
        }
    }

    /// Structured-markup modes escape substituted values as markup.
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Html | Self::Xml)
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "xml" => Ok(Self::Xml),
            "text" | "plain" | "plain-text" => Ok(Self::Text),
            "javascript" | "js" => Ok(Self::Javascript),
            "css" => Ok(Self::Css),
            "raw" => Ok(Self::Raw),
            _ => Err(DomainError::UnknownTemplateMode { value: s.into() }),
        }
    }
}

// ── Charset ──────────────────────────────────────────────────────────────────

/// A text encoding used to read templates and write resources.
///
/// Keeps the label exactly as configured so it can be reported and handed to
/// the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    label: String,
    encoding: &'static Encoding,
}

/// Content that cannot be represented in the target charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unencodable;

impl Charset {
    pub fn for_label(label: &str) -> Result<Self, DomainError> {
        let trimmed = label.trim();
        Encoding::for_label(trimmed.as_bytes())
            .map(|encoding| Self {
                label: trimmed.to_string(),
                encoding,
            })
            .ok_or_else(|| DomainError::UnknownCharset {
                label: label.into(),
            })
    }

    pub fn utf8() -> Self {
        Self {
            label: "UTF-8".into(),
            encoding: UTF_8,
        }
    }

    /// The label as configured.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The canonical encoding name.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Encode text, refusing to substitute characters the charset lacks.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, Unencodable> {
        if self.encoding == UTF_16LE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            ));
        }
        if self.encoding == UTF_16BE {
            return Ok(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            ));
        }

        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            Err(Unencodable)
        } else {
            Ok(bytes)
        }
    }

    /// Decode bytes; `None` when they are malformed for this charset.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for Charset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_mode_parses_upper_case_names() {
        assert_eq!("TEXT".parse::<TemplateMode>().unwrap(), TemplateMode::Text);
        assert_eq!("HTML".parse::<TemplateMode>().unwrap(), TemplateMode::Html);
        assert_eq!("js".parse::<TemplateMode>().unwrap(), TemplateMode::Javascript);
        assert!(matches!(
            "markdown".parse::<TemplateMode>(),
            Err(DomainError::UnknownTemplateMode { .. })
        ));
    }

    #[test]
    fn template_mode_display_round_trips_every_variant() {
        for mode in TemplateMode::ALL {
            assert_eq!(mode.to_string().parse::<TemplateMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_mode_is_text() {
        assert_eq!(TemplateMode::default(), TemplateMode::Text);
        assert!(TemplateMode::Xml.is_markup());
        assert!(!TemplateMode::Css.is_markup());
    }

    #[test]
    fn charset_keeps_configured_label() {
        let cs = Charset::for_label("utf8").unwrap();
        assert_eq!(cs.label(), "utf8");
        assert_eq!(cs.name(), "UTF-8");
    }

    #[test]
    fn unknown_charset_is_rejected() {
        assert!(matches!(
            Charset::for_label("klingon"),
            Err(DomainError::UnknownCharset { .. })
        ));
    }

    #[test]
    fn latin1_encodes_accented_text_in_one_byte() {
        let cs = Charset::for_label("ISO-8859-1").unwrap();
        assert_eq!(cs.encode("é").unwrap().as_ref(), &[0xE9]);
    }

    #[test]
    fn latin1_rejects_characters_it_cannot_represent() {
        let cs = Charset::for_label("ISO-8859-1").unwrap();
        assert_eq!(cs.encode("日本"), Err(Unencodable));
    }

    #[test]
    fn utf16le_is_encoded_explicitly() {
        let cs = Charset::for_label("UTF-16LE").unwrap();
        assert_eq!(cs.encode("A").unwrap().as_ref(), &[0x41, 0x00]);
    }

    #[test]
    fn decode_rejects_malformed_utf8() {
        assert!(Charset::utf8().decode(&[0xFF, 0xFE, 0xFD]).is_none());
        assert_eq!(Charset::utf8().decode(b"ok").unwrap(), "ok");
    }
}
