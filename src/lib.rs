// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Internal library for fixgen tool.
//!
//! Fixgen prepares input for smoke testing an external arithmetic-expression interpreter. It
//! writes two plain-text fixture files into the current working directory: `test_input.txt`,
//! holding one expression per line terminated by the sentinel line `quit`, and
//! `expected_output.txt`, a human-readable report pairing each expression with the result the
//! interpreter is expected to print for it.
//!
//! The interpreter under test is consumed by convention only. It is expected to read expressions
//! line-by-line from standard input until it reads the sentinel line, printing one result per
//! expression. Fixgen never invokes that program, never parses its output, and never performs the
//! comparison itself. Feeding the input fixture to the program and diffing its output against the
//! report remain manual steps, and the guidance text fixgen prints on standard output walks
//! through them.

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]
#![doc(issue_tracker_base_url = "https://github.com/awkless/fixgen/issues")]

pub mod cmd;
pub mod fixture;
pub mod model;

use std::path::PathBuf;

/// Error variants for fixture generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fixture file could not be created or written in full.
    #[error("Failed to write fixture file {path:?}")]
    WriteFixture {
        /// Path of the file whose write failed.
        path: PathBuf,

        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias over crate-wide [`Error`] type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Map top-level error to process exit status.
///
/// Fixture write failures map to 74 (sysexits `EX_IOERR`). Anything else maps to 70
/// (`EX_SOFTWARE`).
pub fn exit_status_from_error(error: anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::WriteFixture { .. }) => 74,
        None => 70,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq as pretty_assert_eq;

    #[test]
    fn exit_status_write_failure() {
        let error = anyhow::Error::new(Error::WriteFixture {
            path: "test_input.txt".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        pretty_assert_eq!(exit_status_from_error(error), 74);
    }

    #[test]
    fn exit_status_generic_failure() {
        pretty_assert_eq!(exit_status_from_error(anyhow::anyhow!("should fail")), 70);
    }
}
