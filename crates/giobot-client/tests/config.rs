use std::time::Duration;

use giobot_client::config::DEFAULT_CONFIG_YAML;
use giobot_client::{ClientConfig, ConfigError};
use giobot_view::{Rgba, Theme, Viewport};
use tempfile::tempdir;

#[test]
fn template_matches_defaults() {
    let parsed: ClientConfig = serde_yaml::from_str(DEFAULT_CONFIG_YAML).unwrap();
    assert_eq!(parsed, ClientConfig::default());
}

#[test]
fn defaults_are_valid() {
    let config = ClientConfig::default();
    config.validate().unwrap();
    assert_eq!(config.tick_interval(), Duration::from_millis(100));
    assert_eq!(config.viewport(), Viewport::default());
    assert_eq!(config.theme().unwrap(), Theme::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giobot.yaml");
    std::fs::write(
        &path,
        "tick_interval_ms: 50\nkeys:\n  quit: x\ntheme:\n  fog: \"#101010\"\n",
    )
    .unwrap();

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.tick_interval_ms, 50);
    assert_eq!(config.keys.quit, "x");
    assert_eq!(config.keys.left, "a");
    assert_eq!(config.grid.cols, 18);
    assert_eq!(config.theme().unwrap().fog, Rgba::rgb(0x10, 0x10, 0x10));
}

#[test]
fn yaml_output_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.yaml");
    let mut config = ClientConfig::default();
    config.viewport.border = 10.0;
    std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

    assert_eq!(ClientConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_is_an_error_with_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(format!("{err:#}").contains("nope.yaml"));
    assert_eq!(ClientConfig::load_or_default(None).unwrap(), ClientConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    let mut config = ClientConfig::default();
    config.tick_interval_ms = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

    let mut config = ClientConfig::default();
    config.viewport.border = 400.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ViewportTooSmall { .. })
    ));

    let mut config = ClientConfig::default();
    config.grid.rows = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyGrid { cols: 18, rows: 0 })
    );

    let mut config = ClientConfig::default();
    config.theme.palette.push("#12345".into());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Color { field: "palette", .. })
    ));

    let mut config = ClientConfig::default();
    config.keys.cancel = "q".into();
    assert_eq!(config.validate(), Err(ConfigError::KeyConflict("q".into())));
}

#[test]
fn invalid_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "tick_interval_ms: 0\n").unwrap();

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(format!("{err:#}").contains("bad.yaml"));
    assert!(format!("{err:#}").contains("greater than zero"));
}
