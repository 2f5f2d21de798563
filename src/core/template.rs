//! Visual template identifiers.
//!
//! A template selects presentation only; it has no effect on data semantics.
//! The actual layout lives in the external renderer (see [`crate::export`]).

use serde::{Deserialize, Serialize};

/// Closed set of visual template tags.
///
/// An unrecognized stored tag falls back to the minimal style rather than
/// failing the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    /// "template1" — classic layout, the default for new drafts.
    #[default]
    Classic,
    /// "template2" — modern layout.
    Modern,
    /// "template3" — minimal layout, also the fallback for unknown tags.
    Minimal,
    /// "template4" — compact layout.
    Compact,
}

impl Template {
    /// Stored tag string, e.g. "template1".
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Classic => "template1",
            Self::Modern => "template2",
            Self::Minimal => "template3",
            Self::Compact => "template4",
        }
    }

    /// Parse a tag string; unrecognized tags fall back to [`Template::Minimal`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "template1" => Self::Classic,
            "template2" => Self::Modern,
            "template3" => Self::Minimal,
            "template4" => Self::Compact,
            _ => Self::Minimal,
        }
    }
}

impl From<String> for Template {
    fn from(tag: String) -> Self {
        Template::from_tag(&tag)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.tag().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for template in [
            Template::Classic,
            Template::Modern,
            Template::Minimal,
            Template::Compact,
        ] {
            assert_eq!(Template::from_tag(template.tag()), template);
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_minimal() {
        assert_eq!(Template::from_tag("template9"), Template::Minimal);
        assert_eq!(Template::from_tag(""), Template::Minimal);
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(Template::default(), Template::Classic);
        assert_eq!(Template::default().tag(), "template1");
    }
}
