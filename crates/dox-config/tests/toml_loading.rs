//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use dox_config::{ConfigError, DoxConfig};
use dox_core::TagSigil;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

fn layered(path: &str) -> Figment {
    Figment::from(Serialized::defaults(DoxConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DOX_").split("__"))
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
enabled = false
javadoc = false

[header]
author = "Ada Lovelace"
copyright = "(c) Analytical Engines"
section_line_length = 80

[parser]
max_lines = 8
"#,
        )?;

        let config: DoxConfig = layered("config.toml").extract()?;

        assert!(!config.general.enabled);
        assert_eq!(config.tag_sigil(), TagSigil::Backslash);
        assert_eq!(config.header.author, "Ada Lovelace");
        assert_eq!(config.header.copyright, "(c) Analytical Engines");
        assert_eq!(config.header.section_line_length, 80);
        assert_eq!(config.parser.max_lines, 8);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[header]
author = "someone"
"#,
        )?;

        let config: DoxConfig = layered("config.toml").extract()?;

        assert_eq!(config.header.author, "someone");
        assert_eq!(config.header.copyright, "copyright-text");
        assert_eq!(config.header.section_line_length, 99);
        assert!(config.general.enabled);
        assert_eq!(config.parser.max_lines, 5);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("DOX_HEADER__AUTHOR", "from-env");
        jail.set_env("DOX_PARSER__MAX_LINES", "2");

        jail.create_file(
            "config.toml",
            r#"
[header]
author = "from-toml"
copyright = "toml-copyright"
"#,
        )?;

        let config: DoxConfig = layered("config.toml").extract()?;

        // Env should win over TOML
        assert_eq!(config.header.author, "from-env");
        assert_eq!(config.parser.max_lines, 2);
        // TOML value not overridden by env should remain
        assert_eq!(config.header.copyright, "toml-copyright");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dox")?;
        jail.create_file(
            ".dox/config.toml",
            r#"
[general]
javadoc = false
"#,
        )?;

        let config = DoxConfig::load().expect("config loads");
        assert_eq!(config.tag_sigil(), TagSigil::Backslash);
        Ok(())
    });
}

#[test]
fn invalid_banner_width_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("DOX_HEADER__SECTION_LINE_LENGTH", "1");

        let result = DoxConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn unavailable_configuration_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dox")?;
        jail.create_file(".dox/config.toml", "[parser]\nmax_lines = \"many\"\n")?;

        assert!(DoxConfig::load().is_err());

        let config = DoxConfig::load_or_default();
        assert_eq!(config.parser.max_lines, 5);
        assert!(config.general.enabled);
        Ok(())
    });
}
