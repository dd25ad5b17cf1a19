// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Fixture file generation.
//!
//! This module renders and writes the two fixture files an interpreter smoke run is built from:
//! the input fixture fed to the program under test, and the expected-output report a human
//! compares the program's output against. Rendering is pure string assembly, so file contents can
//! be checked without touching the file system. Writing truncates and rewrites both files, so
//! repeated runs stay byte-identical.

use crate::{
    model::{TestCase, SENTINEL},
    Error, Result,
};

use std::{
    fmt::Write as FmtWrite,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument, trace};

/// Name of generated input fixture file.
pub const INPUT_FILENAME: &str = "test_input.txt";

/// Name of generated expected-output report file.
pub const EXPECTED_FILENAME: &str = "expected_output.txt";

// INVARIANT: Exactly two lines, each newline terminated by the renderer.
const REPORT_HEADER: [&str; 2] = ["Expected Results:", "================"];

/// Writer of interpreter smoke-test fixture files.
///
/// Borrows an ordered list of test cases, and materializes the input fixture and expected-output
/// report for them under a target directory.
///
/// # Invariants
///
/// - Case order is preserved in both files.
/// - The input fixture always ends with the sentinel line.
/// - Every emitted line is newline terminated.
#[derive(Debug)]
pub struct FixtureSet<'suite> {
    cases: &'suite [TestCase],
}

impl<'suite> FixtureSet<'suite> {
    /// Construct new fixture set over given test cases.
    pub fn new(cases: &'suite [TestCase]) -> Self {
        Self { cases }
    }

    /// Render contents of input fixture file.
    ///
    /// One expression per line in case order, terminated by the sentinel line.
    pub fn render_input(&self) -> String {
        let mut data = String::new();
        for case in self.cases {
            writeln!(&mut data, "{}", case.expression).unwrap();
        }
        writeln!(&mut data, "{SENTINEL}").unwrap();
        data
    }

    /// Render contents of expected-output report file.
    ///
    /// Two header lines followed by one `<expression> = <expected>` line per case in case order.
    pub fn render_expected(&self) -> String {
        let mut data = String::new();
        for line in REPORT_HEADER {
            writeln!(&mut data, "{line}").unwrap();
        }
        for case in self.cases {
            writeln!(&mut data, "{case}").unwrap();
        }
        data
    }

    /// Write both fixture files under given directory.
    ///
    /// Existing files are truncated and rewritten. The two writes carry no ordering dependency
    /// beyond both completing before the caller reports success.
    ///
    /// # Errors
    ///
    /// - Return [`Error::WriteFixture`] naming the first file that could not be created or
    ///   written in full.
    #[instrument(skip(self), level = "debug")]
    pub fn write_all(&self, dir: impl AsRef<Path> + std::fmt::Debug) -> Result<()> {
        trace!("Write fixture set for {} test cases", self.cases.len());
        write_fixture(dir.as_ref().join(INPUT_FILENAME), self.render_input())?;
        write_fixture(dir.as_ref().join(EXPECTED_FILENAME), self.render_expected())?;

        Ok(())
    }
}

fn write_fixture(path: PathBuf, contents: String) -> Result<()> {
    debug!("Write fixture {path:?}");
    fs::write(&path, contents).map_err(|source| Error::WriteFixture { path, source })
}
