//! `node list`, `node describe` and `node run`.

use anyhow::Result;
use flipflop_testing::TestWorld;
use flipflop_testing::assertions::assert_node_ids;
use flipflop_testing::fixtures::{SAMPLE_AT, SAMPLE_DEFAULT_RENDERED, SAMPLE_LEGACY_RENDERED};

#[test]
fn test_node_list_json() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "list", "--format", "json"])?;

    assert!(result.success(), "node list failed: {}", result.stderr());
    assert_node_ids(
        &result.json()?,
        &[
            "FlipFlop_Text",
            "FF Date to String",
            "FlipFlop_Group_Positioner",
        ],
    )?;
    Ok(())
}

#[test]
fn test_node_list_plain_shows_display_names() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "list"])?;

    assert!(result.stdout().contains("FF Group Positioner"));
    assert!(result.stdout().contains("FlipFlop/UI"));
    Ok(())
}

#[test]
fn test_node_describe_text_node() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "describe", "FlipFlop_Text"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.starts_with("FF Text (FlipFlop_Text)"));
    assert!(stdout.contains("format_string"));
    assert!(stdout.contains("\"%yyyy-MM-dd HH:mm:ss%\""));
    assert!(stdout.contains("time_string"));
    Ok(())
}

#[test]
fn test_node_describe_unknown() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "describe", "Missing"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown node: Missing"));
    Ok(())
}

#[test]
fn test_node_run_text_with_defaults() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "run", "FlipFlop_Text", "--at", SAMPLE_AT])?;

    assert_eq!(result.line(), SAMPLE_DEFAULT_RENDERED);
    Ok(())
}

#[test]
fn test_node_run_text_with_input() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "node",
        "run",
        "FlipFlop_Text",
        "--input",
        "format_string=img_%yyyyMMdd_HHmmss%",
        "--at",
        SAMPLE_AT,
    ])?;

    assert_eq!(result.line(), "img_20240307_130509");
    Ok(())
}

#[test]
fn test_node_run_legacy() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["node", "run", "FF Date to String", "--at", SAMPLE_AT])?;

    assert_eq!(result.line(), SAMPLE_LEGACY_RENDERED);
    Ok(())
}

#[test]
fn test_node_run_positioner_writes_config() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "node",
        "run",
        "FlipFlop_Group_Positioner",
        "-i",
        "group_name=Faces",
        "-i",
        "shortcut_key=Ctrl+G",
        "-i",
        "enabled=false",
    ])?;

    assert!(result.success(), "positioner failed: {}", result.stderr());
    assert_eq!(
        result.line(),
        "Group positioner configured: Faces -> Ctrl+G (disabled)"
    );

    let config = world.read_config()?;
    assert_eq!(config["group_name"], "Faces");
    assert_eq!(config["shortcut_key"], "Ctrl+G");
    assert_eq!(config["enabled"], false);
    assert_eq!(config["debug_mode"], false);
    Ok(())
}

#[test]
fn test_node_run_positioner_debug_logs_fields() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "node",
        "run",
        "FlipFlop_Group_Positioner",
        "-i",
        "debug_mode=true",
    ])?;

    assert!(result.line().ends_with("[DEBUG ON]"));
    assert!(result.stderr().contains("group name: MyGroup"));
    Ok(())
}

#[test]
fn test_node_run_rejects_bad_boolean() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "node",
        "run",
        "FlipFlop_Group_Positioner",
        "-i",
        "enabled=maybe",
    ])?;

    assert!(!result.success());
    assert!(result.stderr().contains("must be of type BOOLEAN"));
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_node_run_json_output() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "node",
        "run",
        "FlipFlop_Text",
        "--at",
        SAMPLE_AT,
        "--format",
        "json",
    ])?;

    let json = result.json()?;
    assert_eq!(json["content"]["node"], "FlipFlop_Text");
    assert_eq!(
        json["content"]["outputs"]["time_string"],
        SAMPLE_DEFAULT_RENDERED
    );
    Ok(())
}
