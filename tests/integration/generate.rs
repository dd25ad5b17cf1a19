// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::read_lines;

use anyhow::Result;
use assert_cmd::Command;
use pretty_assertions::assert_eq as pretty_assert_eq;
use sealed_test::prelude::*;

#[sealed_test]
fn generate_writes_both_fixture_files() -> Result<()> {
    let assert = Command::cargo_bin("fixgen")?.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("✓ Created test_input.txt"));
    assert!(stdout.contains("✓ Created expected_output.txt"));
    assert!(stdout.contains("HOW TO TEST:"));
    assert!(stdout.contains("OR test manually:"));

    let input = read_lines("test_input.txt")?;
    pretty_assert_eq!(input.len(), 11);
    pretty_assert_eq!(input.first().map(String::as_str), Some("5 + 3 * 2"));
    pretty_assert_eq!(input.last().map(String::as_str), Some("quit"));

    let expected = read_lines("expected_output.txt")?;
    pretty_assert_eq!(expected.len(), 12);
    pretty_assert_eq!(expected[0], "Expected Results:");
    pretty_assert_eq!(expected[1], "================");
    assert!(expected.iter().any(|line| line == "6 * 7 = 42"));

    Ok(())
}

#[sealed_test]
fn generate_is_idempotent() -> Result<()> {
    Command::cargo_bin("fixgen")?.assert().success();
    let first_input = std::fs::read("test_input.txt")?;
    let first_expected = std::fs::read("expected_output.txt")?;

    Command::cargo_bin("fixgen")?.assert().success();
    pretty_assert_eq!(std::fs::read("test_input.txt")?, first_input);
    pretty_assert_eq!(std::fs::read("expected_output.txt")?, first_expected);

    Ok(())
}
