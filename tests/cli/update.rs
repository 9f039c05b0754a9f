use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_update_rebuilds_from_reference() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "farewell = Tschüss\nextra = x\n")?;

    // Findings are reported for the file as it was before the rewrite.
    assert_cmd_snapshot!(test.check_command(&["-l", "de", "--update"]));
    assert_eq!(
        test.read_file("messages_de.properties")?,
        "# Greetings\n# ==> greeting =\n\nfarewell = Tschüss"
    );
    Ok(())
}

#[test]
fn test_update_with_reference_and_content() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\n")?;

    assert_cmd_snapshot!(test.check_command(&[
        "-l",
        "de",
        "--update",
        "--write-reference",
        "--write-content",
    ]));
    assert_eq!(
        test.read_file("messages_de.properties")?,
        "# Greetings\n# >> Hello\ngreeting = Hallo\n\n# >> Bye\n# ==> farewell = Bye"
    );
    Ok(())
}

#[test]
fn test_create_missing_translation() -> Result<()> {
    let test = CliTest::with_reference()?;

    assert_cmd_snapshot!(test.check_command(&["-l", "fr", "--create"]));
    assert_eq!(
        test.read_file("messages_fr.properties")?,
        "# Greetings\n# ==> greeting =\n\n# ==> farewell ="
    );
    Ok(())
}

#[test]
fn test_create_uses_configured_separator() -> Result<()> {
    let test = CliTest::with_reference()?;

    let out = run(test.check_command(&["-l", "fr", "--create", "--separator", ":"]))?;

    assert_eq!(out.code, Some(0));
    assert!(test.root().join("messages_fr.properties").exists());
    assert_eq!(
        test.read_file("messages_fr.properties")?,
        "# Greetings\n# ==> greeting :\n\n# ==> farewell :"
    );
    Ok(())
}

#[test]
fn test_update_is_stable() -> Result<()> {
    let test = CliTest::with_reference()?;
    test.write_file("messages_de.properties", "greeting = Hallo\n")?;

    run(test.check_command(&["-l", "de", "--update"]))?;
    let first = test.read_file("messages_de.properties")?;
    run(test.check_command(&["-l", "de", "--update"]))?;

    assert_eq!(test.read_file("messages_de.properties")?, first);
    Ok(())
}
