//! Settings environment overlay. Kept in its own test binary because it mutates the
//! process environment.

use std::path::PathBuf;

use nox_agents::config::SettingsLoader;

#[test]
fn environment_overrides_agents_dir() {
    std::env::remove_var("NOX__AGENTS_DIR");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "agents_dir = \"/from/file\"\n").unwrap();

    let from_file = SettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(from_file.agents_dir, Some(PathBuf::from("/from/file")));

    std::env::set_var("NOX__AGENTS_DIR", "/from/env");
    let result = SettingsLoader::load_from_file(&path);
    std::env::remove_var("NOX__AGENTS_DIR");

    assert_eq!(result.unwrap().agents_dir, Some(PathBuf::from("/from/env")));
}
