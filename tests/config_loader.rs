mod common;

use common::{ms, temp_config};
use folio::config::{Config, ConfigError, Theme};

/// Defaults match the built-in animation cadence.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.theme, None);
    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.typewriter.delete_ms, 50);
    assert_eq!(config.typewriter.pause_ms, 2000);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());

    let timing = config.typewriter.timing();
    assert_eq!(timing.type_interval, ms(100));
    assert_eq!(timing.delete_interval, ms(50));
    assert_eq!(timing.pause, ms(2000));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("folio/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.typewriter.type_ms, 100);
}

/// Partial files keep defaults for everything they omit.
#[test]
fn test_partial_file_merges_with_defaults() {
    let (_dir, path) = temp_config(
        r#"
theme = "dark"

[typewriter]
pause_ms = 500
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme, Some(Theme::Dark));
    assert_eq!(config.typewriter.pause_ms, 500);
    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = temp_config("[typewriter]\ntype_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("typewriter.type_ms"));
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("theme = [not toml");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_dir, path) = temp_config("theme = \"sepia\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_phrase_override_replaces_content_focus() {
    let (_dir, path) = temp_config(
        r#"
[[typewriter.phrases]]
text = "Compilers"
style = "cyan"

[[typewriter.phrases]]
text = "Type Systems"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let fallback = folio::content::Content::builtin().focus;
    let phrases = config.typewriter.phrases_or(&fallback);
    assert_eq!(phrases.len(), 2);
    assert_eq!(phrases[0].style.as_deref(), Some("cyan"));
    assert_eq!(phrases[1].style, None);

    assert_eq!(Config::default().typewriter.phrases_or(&fallback), fallback);
}

#[test]
fn test_explicit_empty_phrase_list_fails_validation() {
    let (_dir, path) = temp_config("[typewriter]\nphrases = []\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[[typewriter.phrases]]\ntext = \"\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("typewriter.phrases[0]"));
        }
        other => panic!("expected ValidationError, got {:?}", other.map(|_| ())),
    }
}
