// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::mock_oracle::MockOracleKind;

/// Build and inspect sparse quadtree country lookup tables.
#[derive(Debug, Parser)]
#[command(name = "geoquad", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a country lookup tree against a mock oracle.
    Build(BuildArgs),
    /// Print grid statistics for a precision without building anything.
    Stats(StatsArgs),
    /// Build a small test tree and print a byte-level summary.
    Test(TestArgs),
}

/// Arguments for `geoquad build`.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Quantization precision (decimal places).
    #[arg(short, long, default_value_t = 2)]
    pub precision: u32,

    /// Output path for the serialized tree blob (default:
    /// `country_lookup_p{precision}.bin`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of sample points checked per rectangle.
    #[arg(long, default_value_t = 16)]
    pub sample_k: usize,

    /// Maximum points in a rectangle the builder will brute-force verify.
    #[arg(long, default_value_t = 16_384)]
    pub brute_force_threshold: i64,

    /// Maximum recursion depth.
    #[arg(long, default_value_t = 64)]
    pub max_depth: u32,

    /// Global seed for deterministic sampling.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of points per oracle batch during brute-force verification.
    #[arg(long, default_value_t = 10_000)]
    pub batch_size: usize,

    /// Disable zlib compression of the tree blob.
    #[arg(long)]
    pub no_compress: bool,

    /// Mock oracle to build against.
    #[arg(long, value_enum)]
    pub mock_oracle: MockOracleKind,
}

/// Arguments for `geoquad stats`.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Quantization precision (decimal places).
    #[arg(short, long, default_value_t = 2)]
    pub precision: u32,
}

/// Arguments for `geoquad test`.
#[derive(Debug, Parser)]
pub struct TestArgs {
    /// Quantization precision (decimal places); kept low by default so
    /// the test tree builds quickly.
    #[arg(short, long, default_value_t = 1)]
    pub precision: u32,

    /// Mock oracle to build against.
    #[arg(long, value_enum, default_value = "hemisphere")]
    pub mock_oracle: MockOracleKind,

    /// Output path for the serialized tree blob; printed as a summary if
    /// omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
