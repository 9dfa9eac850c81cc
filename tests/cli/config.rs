use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const SOURCE: &str = r#"let a = L10n.tr("a", comment: "x"); let b = NSLocalizedString("b", comment: "")"#;

fn project() -> Result<CliTest> {
    CliTest::with_swift(
        SOURCE,
        &[
            (
                r#"L10n.tr("a", comment: "x")"#,
                &[("", r#""a""#), ("comment", r#""x""#)],
            ),
            (
                r#"NSLocalizedString("b", comment: "")"#,
                &[("", r#""b""#), ("comment", r#""""#)],
            ),
        ],
    )
}

const ENTRY_A: &str = "/* x */\n\"a\" = \"a\";\n\n";
const ENTRY_B: &str = "/* No comment provided by engineer. */\n\"b\" = \"b\";\n\n";

#[test]
fn test_config_target_function() -> Result<()> {
    let test = project()?;
    test.write_file(".genstringsrc.json", r#"{ "targetFunction": "L10n.tr" }"#)?;

    let output = test.extract_command().arg("-v").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("Localizable.strings")?, ENTRY_A);
    assert!(stdout(&output).contains(".genstringsrc.json"));

    Ok(())
}

#[test]
fn test_flag_overrides_config() -> Result<()> {
    let test = project()?;
    test.write_file(".genstringsrc.json", r#"{ "targetFunction": "L10n.tr" }"#)?;

    let output = test
        .extract_command()
        .args(["--function", "NSLocalizedString"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("Localizable.strings")?, ENTRY_B);

    Ok(())
}

#[test]
fn test_config_truncate_mode() -> Result<()> {
    let test = project()?;
    test.write_file(".genstringsrc.json", r#"{ "writeMode": "truncate" }"#)?;
    test.write_file("Localizable.strings", "/* stale */\n\"old\" = \"old\";\n\n")?;

    test.extract_command().output()?;
    test.extract_command().output()?;

    assert_eq!(test.read_file("Localizable.strings")?, ENTRY_B);

    Ok(())
}

#[test]
fn test_config_found_in_parent_directory() -> Result<()> {
    let test = project()?;
    test.write_file(".genstringsrc.json", r#"{ "targetFunction": "L10n.tr" }"#)?;
    test.write_file("App/.keep", "")?;

    let output = test
        .command()
        .current_dir(test.root().join("App"))
        .args([
            "../Login.swift",
            "../Localizable.strings",
            "--structure",
            "../Login.json",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("Localizable.strings")?, ENTRY_A);

    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let test = project()?;
    test.write_file(".genstringsrc.json", r#"{ "writeMode": "overwrite" }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).starts_with("Error: Failed to parse config file"));
    assert!(!test.root().join("Localizable.strings").exists());

    Ok(())
}

#[test]
fn test_empty_function_flag_exit_code() -> Result<()> {
    let test = project()?;

    let output = test.extract_command().args(["--function", ""]).output()?;
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("'targetFunction' must not be empty"));

    Ok(())
}
