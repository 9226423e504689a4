use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const SF1: &str = r#""key1" = "value1";
"key2" = "value2";
"#;

const SF2: &str = r#""key3" = "value3";
"key4" = "value4";
"#;

#[test]
fn test_all_good() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("A", "sf1", SF1),
        ("A", "sf2", SF2),
        ("B", "sf1", SF1),
        ("B", "sf2", SF2),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["A", "B"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_all_good_three_languages() -> Result<()> {
    let test = CliTest::with_tables(&[("A", "sf1", SF1), ("B", "sf1", SF1), ("C", "sf1", SF1)])?;

    assert_cmd_snapshot!(test.check_command(&["A", "B", "C"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("A", "sf1", SF1),
        ("A", "sf2", SF2),
        ("B", "sf1", SF1),
        (
            "B",
            "sf2",
            r#""key3" = "value3";
"key4" = "value4";
"key11" = "value11";
"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["A", "B"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing key "key11" in Resources/A.lproj/sf2.strings (found in Resources/B.lproj/sf2.strings)
    "#);

    Ok(())
}

#[test]
fn test_missing_table() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("A", "sf1", SF1),
        ("B", "sf1", SF1),
        ("C", "sf1", SF1),
        ("C", "sf3", ""),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["A", "B", "C"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing strings file in "Resources/A.lproj": "sf3"
    Missing strings file in "Resources/B.lproj": "sf3"
    "#);

    Ok(())
}

#[test]
fn test_missing_keys_both_directions() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("en", "Main", "\"shared\" = \"x\";\n\"only_en\" = \"x\";"),
        ("fr", "Main", "\"shared\" = \"x\";\n\"only_fr\" = \"x\";"),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["fr", "en"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing key "only_fr" in Resources/en.lproj/Main.strings (found in Resources/fr.lproj/Main.strings)
    Missing key "only_en" in Resources/fr.lproj/Main.strings (found in Resources/en.lproj/Main.strings)
    "#);

    Ok(())
}

#[test]
fn test_duplicate_key() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("en", "Main", "\"title\" = \"Title\";\n\"title\" = \"Other\";\n"),
        ("fr", "Main", "\"title\" = \"Titre\";\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Duplicate key "title" in Resources/en.lproj/Main.strings (defined in Resources/en.lproj/Main.strings:1 and Resources/en.lproj/Main.strings:2)
    "#);

    Ok(())
}

#[test]
fn test_repeated_language_reported_once() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1), ("fr", "Main", SF1)])?;
    test.write_table("fr", "Extra", "")?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr", "en", "en.lproj"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing strings file in "Resources/en.lproj": "Extra"
    "#);

    Ok(())
}

#[test]
fn test_lproj_suffix_is_optional() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1), ("fr", "Main", SF1)])?;

    assert_cmd_snapshot!(test.check_command(&["en.lproj", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_xml_plist_table() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1)])?;
    test.write_table(
        "fr",
        "Main",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>key1</key>
    <string>valeur1</string>
</dict>
</plist>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing key "key2" in Resources/fr.lproj/Main.strings (found in Resources/en.lproj/Main.strings)
    "#);

    Ok(())
}

#[test]
fn test_extension_option() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1), ("fr", "Main", SF1)])?;
    test.write_file(
        "Resources/en.lproj/Extra.plist",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0"><dict></dict></plist>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");

    assert_cmd_snapshot!(
        test.check_command(&["en", "fr"]).args(["-e", "strings", "-e", "plist"]),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Missing strings file in "Resources/fr.lproj": "Extra"
    "#
    );

    Ok(())
}

#[test]
fn test_nested_table_is_fatal() -> Result<()> {
    let test = CliTest::with_tables(&[
        ("en", "Main", "\"menu\" = { \"open\" = \"Open\"; };"),
        ("fr", "Main", SF1),
    ])?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Resources/en.lproj/Main.strings is not a flat strings table: line 1: expected a string value, found '{' (nested structures are not supported)
    ");

    Ok(())
}

#[test]
fn test_missing_language_directory_is_fatal() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1)])?;

    assert_cmd_snapshot!(test.check_command(&["en", "de"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Language directory 'Resources/de.lproj' does not exist.
    Hint: each language needs a '<language>.lproj' directory.
    ");

    Ok(())
}

#[test]
fn test_missing_root_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(&["en", "fr"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Directory 'Resources' does not exist.
    ");

    Ok(())
}

#[test]
fn test_single_language_is_rejected() -> Result<()> {
    let test = CliTest::with_tables(&[("en", "Main", SF1)])?;

    assert_cmd_snapshot!(test.check_command(&["en"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: At least 2 languages are required, got 1.
    Hint: list them after the directory, e.g. `lproj-check Resources en fr`.
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage: lproj-check"));
    assert!(output.stdout.contains("<DIRECTORY>"));
    assert!(output.stdout.contains("--extension"));

    Ok(())
}
