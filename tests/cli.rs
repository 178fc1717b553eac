// End-to-end runs of the scrubmark binary. Clipboard subcommands are not
// exercised here; they need a display server.
#[path = "support/common.rs"]
mod common;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn scrubmark() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scrubmark"))
}

#[test]
fn scan_reports_findings_in_catalog_order() -> Result<()> {
    let output = scrubmark().args(["scan", common::SEEDED]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Watermark characters found:"));
    let positions: Vec<usize> = ["U+00A0", "U+200B", "U+FEFF"]
        .iter()
        .map(|label| stdout.find(label).expect("label present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn scan_clean_text_prints_notice() -> Result<()> {
    let output = scrubmark().args(["scan", "plain text"]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No watermark characters found."));
    Ok(())
}

#[test]
fn scan_json_emits_structured_findings() -> Result<()> {
    let output = scrubmark()
        .args(["scan", "--json", "Hello\u{00A0}World"])
        .output()?;

    assert!(output.status.success());
    let findings: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(findings[0]["label"], "U+00A0");
    assert_eq!(findings[0]["name"], "no-break space");
    Ok(())
}

#[test]
fn scan_all_reports_tag_spaces() -> Result<()> {
    let plain = scrubmark().args(["scan", "x\u{E0041}y"]).output()?;
    assert!(String::from_utf8(plain.stdout)?.contains("No watermark characters found."));

    let full = scrubmark().args(["scan", "--all", "x\u{E0041}y"]).output()?;
    assert!(String::from_utf8(full.stdout)?.contains("U+E0041"));
    Ok(())
}

#[test]
fn strip_writes_clean_text_to_stdout() -> Result<()> {
    let mut child = scrubmark()
        .arg("strip")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .context("child stdin")?
        .write_all("A\u{200B}B\u{2062}C".as_bytes())?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "ABC");
    Ok(())
}

#[test]
fn empty_stdin_is_reported() -> Result<()> {
    let mut child = scrubmark()
        .arg("scan")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    drop(child.stdin.take());
    let output = child.wait_with_output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("no text to process"));
    Ok(())
}

#[test]
fn file_subcommand_scrubs_in_place() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("notes.txt");
    fs::write(&path, "Hello\u{00A0}World")?;

    let output = scrubmark().arg("file").arg(&path).output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("U+00A0"));
    assert_eq!(fs::read_to_string(&path)?, "HelloWorld");
    Ok(())
}

#[test]
fn file_subcommand_rejects_unknown_extension() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("letter.docx");
    fs::write(&path, "body")?;

    let output = scrubmark().arg("file").arg(&path).output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unsupported file format"));
    assert_eq!(fs::read_to_string(&path)?, "body");
    Ok(())
}
