// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Data model types.
//!
//! Contains the types that represent fixgen's data model. Currently, the [`TestCase`] pair type
//! and the built-in smoke suite that the fixture writer materializes are provided here.

use std::fmt;

/// Sentinel line signaling end-of-input to the interpreter under test.
pub const SENTINEL: &str = "quit";

/// Expression paired with the result its interpreter run must print.
///
/// Displays as the report line `<expression> = <expected>` used by the expected-output file.
///
/// # Invariants
///
/// - Expression and expected result are single-line text without trailing whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Expression text fed to the interpreter under test.
    pub expression: &'static str,

    /// Result text the interpreter is expected to print back.
    pub expected: &'static str,
}

impl TestCase {
    /// Construct new test case from expression and expected result pair.
    pub const fn new(expression: &'static str, expected: &'static str) -> Self {
        Self { expression, expected }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.expected)
    }
}

// INVARIANT: Order is significant. The input fixture emits expressions in this exact order, and
// the expected-output report pairs them line-for-line.
const SMOKE_SUITE: [TestCase; 10] = [
    TestCase::new("5 + 3 * 2", "11"),
    TestCase::new("10 - 4 + 2", "8"),
    TestCase::new("6 * 7", "42"),
    TestCase::new("15 / 3", "5"),
    TestCase::new("2 + 3 * 4", "14"),
    TestCase::new("(2 + 3) * 4", "20"),
    TestCase::new("10 / 2 + 3", "8"),
    TestCase::new("1 + 2 * 3 + 4", "11"),
    TestCase::new("20 / 4 / 2", "2.5"),
    TestCase::new("3.5 + 2.5", "6"),
];

/// Get built-in smoke suite in fixture emission order.
///
/// Covers operator precedence, grouping, left-associative division chains, and decimal results.
pub fn smoke_suite() -> &'static [TestCase] {
    &SMOKE_SUITE
}
