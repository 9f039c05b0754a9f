use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

#[test]
fn test_clean_translation() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nfarewell = Tschüss\n")?;

    assert_cmd_snapshot!(test.check_command(&["-l", "de"]));
    Ok(())
}

#[test]
fn test_dangling_and_missing_keys() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nold = Alt\n")?;

    assert_cmd_snapshot!(test.check_command(&["-l", "de"]));
    Ok(())
}

#[test]
fn test_warnings_fail_only_with_fatal() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\n")?;

    assert_cmd_snapshot!(test.check_command(&["-l", "de"]));
    assert_cmd_snapshot!(test.check_command(&["-l", "de", "--fatal"]));
    Ok(())
}

#[test]
fn test_exit_code_counts_errors() -> Result<()> {
    let test = CliTest::with_reference()?;

    test.write_file(
        "messages_de.properties",
        "greeting = Hallo\nfarewell = Tschüss\nold = Alt\n",
    )?;
    let one = run(test.check_command(&["-l", "de"]))?;

    test.write_file(
        "messages_de.properties",
        "greeting = Hallo\nfarewell = Tschüss\nold = Alt\nolder = Älter\n",
    )?;
    let two = run(test.check_command(&["-l", "de"]))?;

    assert_eq!(one.code, Some(11), "stdout: {}", one.stdout);
    assert_eq!(two.code, Some(12), "stdout: {}", two.stdout);

    // Warnings only count in fatal mode.
    test.write_file("messages_de.properties", "old = Alt\n")?;
    assert_eq!(run(test.check_command(&["-l", "de"]))?.code, Some(11));
    assert_eq!(
        run(test.check_command(&["-l", "de", "--fatal"]))?.code,
        Some(13)
    );
    Ok(())
}

#[test]
fn test_commented_out_key_and_strict() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file(
        "messages_de.properties",
        "greeting = Hallo\n# ==> farewell =\n",
    )?;

    let out = run(test.check_command(&["-l", "de", "--fatal"]))?;
    assert_eq!(out.code, Some(0), "stdout: {}", out.stdout);

    let out = run(test.check_command(&["-l", "de", "--fatal", "--strict"]))?;
    assert_eq!(out.code, Some(11));
    assert!(out.stdout.contains("Missing translation."));
    Ok(())
}

#[test]
fn test_missing_translation_file() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nfarewell = Tschüss\n")?;

    // Remaining languages are still checked.
    assert_cmd_snapshot!(test.check_command(&["-l", "pl", "de"]));
    Ok(())
}

#[test]
fn test_translation_syntax_error_continues() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nbroken line\n")?;
    test.write_file("messages_pl.properties", "greeting = Cześć\nfarewell = Pa\n")?;

    assert_cmd_snapshot!(test.check_command(&["-l", "de", "pl"]));
    Ok(())
}

#[test]
fn test_reference_syntax_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages.properties", "greeting = Hello\n= orphan value\n")?;

    assert_cmd_snapshot!(test.check_command(&["-l", "de"]));
    Ok(())
}

#[test]
fn test_missing_reference_file() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.check_command(&["-l", "de"]))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("messages.properties"));
    Ok(())
}

#[test]
fn test_no_base_files() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("check");
        cmd
    })?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("No base files given"));
    Ok(())
}

#[test]
fn test_reference_self_check() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages.properties", "title = Unclosed (bracket\n")?;

    assert_cmd_snapshot!(test.check_command(&[]));
    Ok(())
}

#[test]
fn test_selected_checks_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages.properties", "title = Unclosed (bracket  \n")?;

    assert_cmd_snapshot!(test.check_command(&["--checks", "trailing-white-chars"]));
    Ok(())
}

#[test]
fn test_duplicated_reference_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages.properties", "a = 1\na = 2\n")?;

    assert_cmd_snapshot!(test.check_command(&[]));
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file(
        ".proptoolrc.json",
        r#"{
  "files": ["messages.properties"],
  "languages": ["de"],
  "enabledChecks": ["missing-translations"],
  "fatal": true
}"#,
    )?;
    test.write_file("messages_de.properties", "greeting = Hallo\n")?;

    let mut cmd = test.command();
    cmd.arg("check");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(11));
    assert!(out.stdout.contains("MissingTranslations"));
    Ok(())
}

#[test]
fn test_invalid_config_value() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file(".proptoolrc.json", r#"{ "separator": "-" }"#)?;

    let out = run(test.check_command(&[]))?;

    assert_eq!(out.code, Some(2));
    Ok(())
}

#[test]
fn test_quiet_success_prints_nothing() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\nfarewell = Tschüss\n")?;

    let out = run(test.check_command(&["-l", "de", "-q"]))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.is_empty(), "stdout: {}", out.stdout);
    Ok(())
}

#[test]
fn test_verbose_lists_checks() -> Result<()> {
    let test = CliTest::with_reference()?;

    let out = run(test.check_command(&["-v", "--checks", "brackets", "key-format"]))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Using default config"));
    assert!(out.stdout.contains("Checks: Brackets, KeyFormat"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));
    Ok(())
}
