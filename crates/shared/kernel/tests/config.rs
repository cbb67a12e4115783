use ehub_domain::config::AppConfig;
use ehub_kernel::config::load_config;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn loads_config_from_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("shell.toml");
    fs::write(
        &path,
        r#"
[room]
title = "Phòng 202"

[chat]
capacity = 25
"#,
    )
    .expect("write config file");

    let cfg: AppConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.room.title, "Phòng 202");
    assert_eq!(cfg.chat.capacity, 25);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.exams.page_size, 3);
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let result: Result<AppConfig, _> = load_config(Some("does/not/exist"));
    assert!(result.is_err());
}
