//! Declaration kinds and documentation tag vocabulary.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeclarationKind
// ---------------------------------------------------------------------------

/// Which declaration shape the classifier recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    TemplateClass,
    TemplateFunction,
    Constructor,
    Destructor,
    Function,
    Class,
}

impl DeclarationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TemplateClass => "template_class",
            Self::TemplateFunction => "template_function",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Function => "function",
            Self::Class => "class",
        }
    }

    /// Constructors and destructors never document a return value.
    #[must_use]
    pub const fn is_special_member(self) -> bool {
        matches!(self, Self::Constructor | Self::Destructor)
    }

    /// Kinds whose parameter list is documented.
    #[must_use]
    pub const fn has_parameters(self) -> bool {
        !matches!(self, Self::TemplateClass | Self::Class)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TagSigil
// ---------------------------------------------------------------------------

/// Prefix character for documentation commands: `@brief` or `\brief`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSigil {
    /// Javadoc style, `@`.
    #[default]
    At,
    /// Qt style, `\`.
    Backslash,
}

impl TagSigil {
    /// Select the sigil from the `javadoc` style switch.
    #[must_use]
    pub const fn from_javadoc(javadoc: bool) -> Self {
        if javadoc { Self::At } else { Self::Backslash }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::At => '@',
            Self::Backslash => '\\',
        }
    }
}

impl fmt::Display for TagSigil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// TagKind
// ---------------------------------------------------------------------------

/// Documentation commands emitted by the snippet assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Author,
    Date,
    Version,
    Copyright,
    Brief,
    Details,
    Tparam,
    Param,
    Return,
}

impl TagKind {
    /// The command name as written after the sigil.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Date => "date",
            Self::Version => "version",
            Self::Copyright => "copyright",
            Self::Brief => "brief",
            Self::Details => "details",
            Self::Tparam => "tparam",
            Self::Param => "param",
            Self::Return => "return",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sigil_follows_javadoc_switch() {
        assert_eq!(TagSigil::from_javadoc(true).as_char(), '@');
        assert_eq!(TagSigil::from_javadoc(false).as_char(), '\\');
        assert_eq!(TagSigil::default(), TagSigil::At);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&DeclarationKind::TemplateFunction).unwrap();
        assert_eq!(json, "\"template_function\"");
        assert_eq!(DeclarationKind::TemplateFunction.to_string(), "template_function");
    }

    #[test]
    fn special_members_and_parameters() {
        assert!(DeclarationKind::Constructor.is_special_member());
        assert!(DeclarationKind::Destructor.is_special_member());
        assert!(!DeclarationKind::Function.is_special_member());
        assert!(DeclarationKind::TemplateFunction.has_parameters());
        assert!(!DeclarationKind::TemplateClass.has_parameters());
        assert!(!DeclarationKind::Class.has_parameters());
    }

    #[test]
    fn tag_kind_displays_command_name() {
        assert_eq!(TagKind::Copyright.to_string(), "copyright");
        assert_eq!(TagKind::Tparam.as_str(), "tparam");
    }
}
