// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command set implementation.
//!
//! This module is the forward facing API of internal library. It is meant to be used in `main` of
//! the fixgen binary. The entire fixgen command set is implemented right there!

use crate::{
    fixture::{FixtureSet, EXPECTED_FILENAME, INPUT_FILENAME},
    model::smoke_suite,
};

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{info, instrument};

/// Fixgen public CLI.
///
/// Takes no arguments and no options. Fixture files always land in the current working directory
/// under fixed names.
#[derive(Debug, Clone, Parser)]
#[command(about, override_usage = "fixgen", version)]
pub struct Fixgen {}

impl Fixgen {
    /// Run fixture generation.
    ///
    /// # Errors
    ///
    /// Will fail if either fixture file cannot be written.
    pub fn run(self) -> Result<()> {
        run_generate()
    }
}

#[instrument(level = "debug")]
fn run_generate() -> Result<()> {
    let fixtures = FixtureSet::new(smoke_suite());
    fixtures.write_all(Path::new("."))?;
    info!("Fixture files generated");

    println!("✓ Created {INPUT_FILENAME}");
    println!("✓ Created {EXPECTED_FILENAME}");
    println!();
    println!("HOW TO TEST:");
    println!("1. Compile: g++ -o interpreter main.cpp");
    println!("2. Run: ./interpreter < {INPUT_FILENAME}");
    println!("3. Compare output with {EXPECTED_FILENAME}");
    println!();
    println!("OR test manually:");
    println!("1. Run: ./interpreter");
    println!("2. Type each expression from {INPUT_FILENAME}");
    println!("3. Check results match {EXPECTED_FILENAME}");

    Ok(())
}
