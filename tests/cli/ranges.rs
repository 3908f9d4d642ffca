use anyhow::Result;
use insta::{assert_snapshot, with_settings};
use pretty_assertions::assert_eq;

use crate::{CliTest, parse_table, stderr, stdout};

const NO_LABELS: &str = r#"{ "labels": [] }"#;

#[test]
fn test_missing_dir_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage: glyphrange [OPTIONS] [DIR]"));

    Ok(())
}

#[test]
fn test_corpus_with_label() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", r#"{ "labels": ["a"] }"#)?;
    test.write_file("lang/en.json", r#"{ "Common": { "first": "ab" } }"#)?;
    test.write_file("lang/fr.json", r#"{ "second": "bc", "count": 2 }"#)?;

    let output = test.command().arg("lang").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @"0x0061, 0x0063,");
    assert_eq!(
        stderr(&output),
        "\u{2713} Read 2 files, 3 codepoints in 1 range\n"
    );

    Ok(())
}

#[test]
fn test_gaps_and_singletons() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "title": "FACB" }"#)?;

    let output = test.command().arg("lang").output()?;

    assert_eq!(stdout(&output), "0x0041, 0x0043, 0x0046, 0x0046,\n");

    Ok(())
}

#[test]
fn test_default_labels_are_covered() -> Result<()> {
    let test = CliTest::with_file("lang/en.json", r#"{ "hello": "Hello" }"#)?;

    let output = test.command().arg("lang").output()?;
    assert!(output.status.success());

    let boundaries = parse_table(&stdout(&output))?;
    assert_eq!(boundaries.len() % 2, 0);
    let covered = |c: char| {
        boundaries
            .chunks(2)
            .any(|pair| (pair[0]..=pair[1]).contains(&u32::from(c)))
    };

    for text in ["Hello", "English", "NederlandsFrançais", "日本語", "한국어"] {
        for c in text.chars() {
            assert!(covered(c), "{:?} not covered", c);
        }
    }
    assert!(!covered('!'));

    Ok(())
}

#[test]
fn test_rows_wrap_at_sixteen() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    // Every other letter: 9 singletons, 18 boundaries.
    test.write_file("lang/en.json", r#"{ "k": "acegikmoq" }"#)?;

    let output = test.command().arg("lang").output()?;

    assert_snapshot!(stdout(&output), @r"
    0x0061, 0x0061, 0x0063, 0x0063, 0x0065, 0x0065, 0x0067, 0x0067, 0x0069, 0x0069, 0x006b, 0x006b, 0x006d, 0x006d, 0x006f, 0x006f,
    0x0071, 0x0071,
    ");

    Ok(())
}

#[test]
fn test_columns_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "k": "ace" }"#)?;

    let output = test.command().args(["lang", "--columns", "4"]).output()?;

    assert_eq!(
        stdout(&output),
        "0x0061, 0x0061, 0x0063, 0x0063,\n0x0065, 0x0065,\n"
    );

    Ok(())
}

#[test]
fn test_no_labels_empty_dir() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("lang"))?;

    let output = test.command().args(["lang", "--no-labels"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "\u{2713} Read 0 files, 0 codepoints in 0 ranges\n"
    );

    Ok(())
}

#[test]
fn test_scan_is_not_recursive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "k": "a" }"#)?;
    test.write_file("lang/old/en.json", r#"{ "k": "z" }"#)?;
    test.write_file("lang/readme.txt", "z")?;

    let output = test.command().arg("lang").output()?;

    assert_eq!(stdout(&output), "0x0061, 0x0061,\n");

    Ok(())
}

#[test]
fn test_malformed_file_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "k": "a" }"#)?;
    test.write_file("lang/xx.json", "{")?;

    let output = test.command().arg("lang").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x0061, 0x0061,\n");
    assert_snapshot!(stderr(&output), @r"
    warning: 1 file(s) could not be parsed (use -v for details)
    ✓ Read 1 file, 1 codepoint in 1 range
    ");

    Ok(())
}

#[test]
fn test_verbose_lists_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/b.json", r#"{ "k": "b" }"#)?;
    test.write_file("lang/a.json", r#"{ "k": "a" }"#)?;

    let output = test.command().args(["lang", "-v"]).output()?;

    with_settings!({filters => vec![(r"(\S*/)?lang/", "[LANG]/")]}, {
        assert_snapshot!(stderr(&output), @r"
        Reading [LANG]/a.json
        Reading [LANG]/b.json
        ✓ Read 2 files, 2 codepoints in 1 range
        ");
    });

    Ok(())
}

#[test]
fn test_missing_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nowhere").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: Messages directory 'nowhere' does not exist."));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Usage: glyphrange [OPTIONS] [DIR]"));
    assert!(help.contains("--no-labels"));

    Ok(())
}

#[test]
fn test_config_in_scanned_directory_is_not_read() -> Result<()> {
    let test = CliTest::with_file("lang/en.json", r#"{ "k": "A" }"#)?;

    let mut init = test.command();
    init.current_dir(test.root().join("lang"));
    assert!(init.arg("--init").output()?.status.success());
    assert!(test.root().join("lang/.glyphrangerc.json").exists());

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("lang"));
    let output = cmd.args([".", "--no-labels"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x0041, 0x0041,\n");

    Ok(())
}

#[test]
fn test_non_object_root_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "k": "a" }"#)?;
    test.write_file("lang/list.json", r#"["z"]"#)?;

    let output = test.command().args(["lang", "-v"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0x0061, 0x0061,\n");
    assert!(stderr(&output).contains("Expected a JSON object at the root, found an array"));

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_table_write_failure_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphrangerc.json", NO_LABELS)?;
    test.write_file("lang/en.json", r#"{ "k": "a" }"#)?;

    let output = test
        .command()
        .arg("lang")
        .stdout(std::fs::File::create("/dev/full")?)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to write table"));

    Ok(())
}
