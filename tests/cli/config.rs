use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_config_languages() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("en", "Main", "\"a\" = \"A\";"),
        ("de", "Main", "\"a\" = \"A\";"),
    ])?;
    test.write_file(".lprojcheckrc.json", r#"{ "languages": ["en", "de"] }"#)?;

    assert_cmd_snapshot!(test.check_command(&[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("en", "Main", "\"a\" = \"A\";"),
        ("fr", "Main", "\"a\" = \"A\";"),
        ("fr", "InfoPlist", "\"CFBundleName\" = \"App\";"),
    ])?;
    test.write_file(".lprojcheckrc.json", r#"{ "ignores": ["Info*"] }"#)?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_in_resources_dir() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", "\"a\" = \"A\";"), ("fr", "Main", "")])?;
    test.write_file("Resources/.lprojcheckrc.json", r#"{ "languages": ["en", "fr"] }"#)?;

    assert_cmd_snapshot!(test.check_command(&[]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing key "a" in Resources/fr.lproj/Main.strings (found in Resources/en.lproj/Main.strings)
    "#);

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", ""), ("fr", "Main", "")])?;
    test.write_file("ci/lproj.json", r#"{ "languages": ["en", "fr"] }"#)?;

    assert_cmd_snapshot!(test.check_command(&[]).args(["--config", "ci/lproj.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", ""), ("fr", "Main", "")])?;
    test.write_file(".lprojcheckrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.check(&["en", "fr"])?;

    assert_eq!(output.code, Some(2));
    assert!(
        output.stderr.starts_with("error: Invalid glob pattern in 'ignores': \"[invalid\""),
        "{}",
        output.stderr
    );

    Ok(())
}
