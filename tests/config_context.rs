// Tests for configuration loading and saving through a context.
use vlaginstructie::config::Config;
use vlaginstructie::context::{AppContext, TestContext};

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let cfg = Config::load_or_default(&ctx).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.next_horizon_days, 366);
}

#[test]
fn test_save_and_reload_roundtrip() {
    let ctx = TestContext::new();
    let cfg = Config {
        rows_file: Some("/tmp/rows.json".to_string()),
        next_horizon_days: 30,
        log_level: "debug".to_string(),
    };
    cfg.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_partial_file_uses_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.next_horizon_days, 366);
    assert!(cfg.rows_file.is_none());
}

#[test]
fn test_invalid_toml_is_not_a_missing_config() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "next_horizon_days = [").unwrap();

    let err = Config::load_or_default(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_rows_path_falls_back_to_data_dir() {
    let ctx = TestContext::new();
    let cfg = Config::default();
    let p = cfg.rows_path(&ctx).unwrap();
    assert!(p.starts_with(&ctx.root));
    assert!(p.ends_with("rows.json"));

    let cfg = Config {
        rows_file: Some("/srv/vlag/rows.json".to_string()),
        ..Config::default()
    };
    assert_eq!(
        cfg.rows_path(&ctx).unwrap(),
        std::path::PathBuf::from("/srv/vlag/rows.json")
    );
}

#[test]
fn test_test_context_cleans_up() {
    let root = {
        let ctx = TestContext::new();
        ctx.get_data_dir().unwrap();
        ctx.root.clone()
    };
    assert!(!root.exists());
}
