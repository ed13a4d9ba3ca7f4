//! General switches: generation on/off and tag style.

use dox_core::TagSigil;
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether comment generation runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Javadoc style (`@brief`) when true, Qt style (`\brief`) when false.
    #[serde(default = "default_true")]
    pub javadoc: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            javadoc: default_true(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub const fn tag_sigil(&self) -> TagSigil {
        TagSigil::from_javadoc(self.javadoc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.enabled);
        assert!(config.javadoc);
        assert_eq!(config.tag_sigil(), TagSigil::At);
    }

    #[test]
    fn qt_style_uses_backslash() {
        let config = GeneralConfig {
            javadoc: false,
            ..Default::default()
        };
        assert_eq!(config.tag_sigil().as_char(), '\\');
    }
}
