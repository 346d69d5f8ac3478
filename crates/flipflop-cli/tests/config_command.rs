//! `config show`, `config set`, `config path` and `config reset`.

use anyhow::Result;
use flipflop_testing::TestWorld;
use flipflop_testing::assertions::content_str;

#[test]
fn test_config_show_defaults_without_file() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "show", "--format", "json"])?;

    assert!(result.success(), "config show failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(content_str(&json, "group_name")?, "MyGroup");
    assert_eq!(content_str(&json, "shortcut_key")?, "F8");
    assert_eq!(json["content"]["enabled"], true);
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_config_set_then_show() -> Result<()> {
    let world = TestWorld::new();

    let set = world.run(&["config", "set", "--group-name", "Upscale", "--disable"])?;
    assert!(set.success(), "config set failed: {}", set.stderr());
    assert_eq!(
        set.line(),
        "Group positioner configured: Upscale -> F8 (disabled)"
    );

    let show = world.run(&["config", "show"])?;
    assert!(show.stdout().contains("group_name:   Upscale"));
    assert!(show.stdout().contains("enabled:      false"));
    Ok(())
}

#[test]
fn test_config_set_keeps_existing_fields() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config(
        r#"{
  "group_name": "Faces",
  "shortcut_key": "F2",
  "enabled": true,
  "debug_mode": false
}"#,
    )?;

    let result = world.run(&["config", "set", "--debug"])?;

    assert!(result.success());
    let config = world.read_config()?;
    assert_eq!(config["group_name"], "Faces");
    assert_eq!(config["shortcut_key"], "F2");
    assert_eq!(config["debug_mode"], true);
    Ok(())
}

#[test]
fn test_config_set_requires_a_change() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Nothing to update"));
    Ok(())
}

#[test]
fn test_config_set_rejects_enable_and_disable() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set", "--enable", "--disable"])?;

    assert!(!result.success());
    Ok(())
}

#[test]
fn test_config_set_rejects_blank_group() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set", "--group-name", " "])?;

    assert!(!result.success());
    assert!(result.stderr().contains("group name must not be empty"));
    Ok(())
}

#[test]
fn test_config_path_points_into_data_dir() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "path", "--format", "json"])?;

    let json = result.json()?;
    let expected = world.config_path().display().to_string();
    assert_eq!(content_str(&json, "path")?, expected);
    assert_eq!(json["content"]["exists"], false);
    Ok(())
}

#[test]
fn test_config_reset_removes_file() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config(r#"{"group_name": "Faces"}"#)?;

    let result = world.run(&["config", "reset"])?;

    assert!(result.success());
    assert!(!world.config_path().exists());
    assert!(result.stdout().contains("MyGroup -> F8 (enabled)"));
    Ok(())
}

#[test]
fn test_config_show_reports_corrupt_file() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("{broken")?;

    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error: JSON error"));
    Ok(())
}

#[test]
fn test_data_dir_from_environment() -> Result<()> {
    let world = TestWorld::new().without_data_dir_flag();
    let env_dir = world.temp_dir().join("from-env");
    let world = world.with_env("FLIPFLOP_PATH", env_dir.display().to_string());

    let path = world.run(&["config", "path"])?;
    assert!(path.success(), "config path failed: {}", path.stderr());
    let expected = env_dir.join("group_positioner.json");
    assert_eq!(path.line(), expected.display().to_string());

    let set = world.run(&["config", "set", "--shortcut-key", "F9"])?;
    assert!(set.success(), "config set failed: {}", set.stderr());
    assert!(expected.exists());
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_explicit_data_dir_beats_environment() -> Result<()> {
    let world = TestWorld::new();
    let env_dir = world.temp_dir().join("from-env");
    let world = world.with_env("FLIPFLOP_PATH", env_dir.display().to_string());

    let result = world.run(&["config", "path"])?;
    assert_eq!(result.line(), world.config_path().display().to_string());
    Ok(())
}
