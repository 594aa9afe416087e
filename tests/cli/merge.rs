use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, io_error_filters};

#[test]
fn test_merge_top_level_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("target.json", r#"{"a": 1, "b": 2}"#)?;
    test.write_file("data.json", r#"{"b": 3, "c": 4}"#)?;

    let mut cmd = test.command();
    cmd.args(["merge", "target.json", "data.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated target.json (2 key(s) changed)

    ----- stderr -----
    ");

    let merged = test.read_json("target.json")?;
    assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
    Ok(())
}

#[test]
fn test_merge_empty_data_keeps_content() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("target.json", r#"{"a": {"nested": [1, 2]}}"#)?;
    test.write_file("data.json", "{}")?;

    let output = test
        .command()
        .args(["merge", "target.json", "data.json"])
        .output()?;

    assert!(output.status.success());
    let merged = test.read_json("target.json")?;
    assert_eq!(merged, json!({"a": {"nested": [1, 2]}}));
    Ok(())
}

#[test]
fn test_merge_missing_target_creates_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", r#"{"a": 1}"#)?;

    let mut cmd = test.command();
    cmd.args(["merge", "missing.json", "data.json"]);
    insta::with_settings!({ filters => io_error_filters() }, {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to read file: missing.json: [IO ERROR]
        ");
    });

    assert!(!test.root().join("missing.json").exists());
    Ok(())
}

#[test]
fn test_merge_rejects_non_object_data() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("target.json", r#"{"a": 1}"#)?;
    test.write_file("data.json", "[1, 2]")?;

    let mut cmd = test.command();
    cmd.args(["merge", "target.json", "data.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Root of JSON file must be an object: data.json
    ");

    assert_eq!(test.read_file("target.json")?, r#"{"a": 1}"#);
    Ok(())
}

#[test]
fn test_merge_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("target.json", r#"{"a": 1}"#)?;
    test.write_file("data.json", r#"{"a": 1, "b": 2}"#)?;

    let mut cmd = test.command();
    cmd.args(["merge", "target.json", "data.json", "--dry-run"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    target.json
      + b  added
    Would update 1 key(s) in 1 file(s).
    Run without --dry-run to write these changes.

    ----- stderr -----
    ");

    assert_eq!(test.read_file("target.json")?, r#"{"a": 1}"#);
    Ok(())
}
