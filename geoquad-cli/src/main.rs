// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line tool for building and inspecting `geoquad` country lookup
//! trees against mock oracles.

mod cli;
mod commands;
mod error;
mod mock_oracle;

use clap::Parser;

use cli::{Cli, Command};
use error::Result;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Build(args) => commands::build::run(args),
        Command::Stats(args) => commands::stats::run(args),
        Command::Test(args) => commands::test::run(args),
    }
}
