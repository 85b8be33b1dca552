// tests/config_test.rs
use git_semantic::config::{load_config, Config};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
tag_prefix = "v"

[classification]
major = ["break", "epic"]
minor = ["feat", "feature"]

[push]
remote = "upstream"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.tag_prefix, "v");
    assert_eq!(config.classification.major, vec!["break", "epic"]);
    assert_eq!(config.classification.minor, vec!["feat", "feature"]);
    assert_eq!(config.classification.patch, vec!["fix", "ref", "perf"]);
    assert_eq!(config.push.remote, "upstream");
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[classification\nmajor = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path())).is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gitsemantic.toml"),
        "[classification]\npatch = [\"fix\", \"docs\"]\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.classification.patch, vec!["fix", "docs"]);
}

#[test]
#[serial]
fn test_local_file_takes_precedence_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("gitsemantic.toml"), "tag_prefix = \"rel-\"\n").unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.tag_prefix, "rel-");
    assert_eq!(config.classification, Config::default().classification);
}
