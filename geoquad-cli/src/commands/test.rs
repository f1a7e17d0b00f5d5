// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use geoquad_build::{build_quadtree, BuilderConfig};
use geoquad_codec::serialize_tree;

use crate::cli::TestArgs;
use crate::error::{Error, Result};

/// Build a small tree against a mock oracle and either write it to
/// `output` or print a short byte-level summary, for quickly sanity
/// checking a decoder against a known-small tree.
pub fn run(args: &TestArgs) -> Result<()> {
    println!(
        "Generating test tree with precision {} against mock oracle {:?}...",
        args.precision, args.mock_oracle
    );

    let oracle = args.mock_oracle.build(args.precision);
    let config = BuilderConfig::new(args.precision)?;
    let (tree, stats) = build_quadtree(oracle.as_ref(), config)?;
    let blob = serialize_tree(&tree);

    if let Some(output) = &args.output {
        std::fs::write(output, &blob).map_err(|source| Error::Io {
            path: output.clone(),
            source,
        })?;
        println!("Wrote test tree to {}", output.display());
    } else {
        println!("nodes={} leaves={} bytes={}", stats.nodes_created, stats.leaves_created, blob.len());
        let preview_len = blob.len().min(32);
        let hex: Vec<String> = blob[..preview_len].iter().map(|b| format!("{b:02x}")).collect();
        println!("first {preview_len} bytes: {}", hex.join(" "));
    }

    Ok(())
}
