use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created .proptoolrc.json"));

    let content = test.read_file(".proptoolrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["separator"], "=");
    assert_eq!(parsed["commentedOutMarker"], "==>");
    assert!(parsed["enabledChecks"].as_array().is_some_and(|c| c.len() == 13));
    assert!(parsed["checks"].get("key-format").is_some());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".proptoolrc.json", "{}")?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains(".proptoolrc.json already exists"));
    assert_eq!(test.read_file(".proptoolrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nfarewell = Tschüss\n")?;

    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    let out = run(test.check_command(&["-l", "de"]))?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    Ok(())
}
