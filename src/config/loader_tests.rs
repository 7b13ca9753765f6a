//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_ends_with_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("feedswipe") && path_str.ends_with("config.toml"),
            "Path should contain 'feedswipe' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_feedswipe_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("feedswipe.log"),
        "Default log path should end with 'feedswipe.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/feedswipe.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "feedswipe_test_config.toml",
        r#"
caption_cutoff = 120
caption_newline_limit = 3
momentum_threshold = 22.5
settle_delay_ms = 400
carousel_suppress_ms = 150
cell_height_px = 20.0

[author]
full_name = "Rida F'kih"
handle = "@ridafkih"
"#,
    );

    let config = load_config_file(&path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.caption_cutoff, Some(120));
    assert_eq!(config.caption_newline_limit, Some(3));
    assert_eq!(config.momentum_threshold, Some(22.5));
    assert_eq!(config.settle_delay_ms, Some(400));
    assert_eq!(config.carousel_suppress_ms, Some(150));
    assert_eq!(config.cell_height_px, Some(20.0));
    let author = config.author.expect("author table");
    assert_eq!(author.handle.as_deref(), Some("@ridafkih"));
    assert_eq!(author.avatar_url, None);

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_invalid_toml() {
    let path = write_temp_config("feedswipe_test_invalid.toml", "caption_cutoff = [");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("feedswipe_test_unknown.toml", "theme = \"monokai\"\n");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    fs::remove_file(path).ok();
}

#[test]
fn merge_config_without_file_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.caption_cutoff, 240);
    assert_eq!(resolved.caption_newline_limit, 6);
    assert_eq!(resolved.momentum_threshold, 15.0);
    assert_eq!(resolved.settle_delay_ms, 320);
    assert_eq!(resolved.carousel_suppress_ms, 200);
    assert_eq!(resolved.author.handle, "@helcim");
}

#[test]
fn merge_config_overrides_only_provided_fields() {
    let file = ConfigFile {
        caption_cutoff: Some(80),
        author: Some(AuthorSection {
            handle: Some("@me".to_string()),
            ..AuthorSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.caption_cutoff, 80);
    assert_eq!(resolved.caption_newline_limit, 6);
    assert_eq!(resolved.author.handle, "@me");
    assert_eq!(resolved.author.full_name, DEFAULT_AUTHOR_NAME);
    assert_eq!(
        resolved.author.avatar_url.as_deref(),
        Some(DEFAULT_AUTHOR_AVATAR)
    );
}

#[test]
fn resolved_config_converts_to_component_configs() {
    let resolved = ResolvedConfig {
        settle_delay_ms: 100,
        caption_cutoff: 10,
        ..ResolvedConfig::default()
    };
    assert_eq!(resolved.gesture().settle_delay, Duration::from_millis(100));
    assert_eq!(resolved.gesture().momentum_threshold, 15.0);
    assert_eq!(resolved.caption().cutoff, 10);
}

#[test]
fn cli_overrides_take_precedence() {
    let resolved = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(99),
        Some("@cli".to_string()),
    );
    assert_eq!(resolved.caption_cutoff, 99);
    assert_eq!(resolved.author.handle, "@cli");
}

#[test]
fn cli_overrides_absent_leave_config() {
    let resolved = apply_cli_overrides(ResolvedConfig::default(), None, None);
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
#[serial(feedswipe_env)]
fn env_overrides_apply_cutoff_and_handle() {
    env::set_var(CUTOFF_ENV, "50");
    env::set_var(HANDLE_ENV, "@env");

    let resolved = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(CUTOFF_ENV);
    env::remove_var(HANDLE_ENV);

    assert_eq!(resolved.caption_cutoff, 50);
    assert_eq!(resolved.author.handle, "@env");
}

#[test]
#[serial(feedswipe_env)]
fn env_override_ignores_unparsable_cutoff() {
    env::set_var(CUTOFF_ENV, "lots");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(CUTOFF_ENV);

    assert_eq!(resolved.caption_cutoff, DEFAULT_CUTOFF);
}

#[test]
#[serial(feedswipe_config)]
fn precedence_prefers_explicit_path_over_env() {
    let explicit = write_temp_config("feedswipe_test_explicit.toml", "caption_cutoff = 1\n");
    let from_env = write_temp_config("feedswipe_test_env.toml", "caption_cutoff = 2\n");
    env::set_var(CONFIG_ENV, from_env.to_str().unwrap());

    let loaded = load_config_with_precedence(Some(explicit.clone())).unwrap();

    env::remove_var(CONFIG_ENV);
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();

    assert_eq!(loaded.unwrap().caption_cutoff, Some(1));
}

#[test]
#[serial(feedswipe_config)]
fn precedence_uses_env_path_when_no_explicit_path() {
    let from_env = write_temp_config("feedswipe_test_env_only.toml", "caption_cutoff = 7\n");
    env::set_var(CONFIG_ENV, from_env.to_str().unwrap());

    let loaded = load_config_with_precedence(None).unwrap();

    env::remove_var(CONFIG_ENV);
    fs::remove_file(from_env).ok();

    assert_eq!(loaded.unwrap().caption_cutoff, Some(7));
}
