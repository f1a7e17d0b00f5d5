// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use log::info;

use geoquad_build::{build_quadtree, BuilderConfig};
use geoquad_codec::{compress, serialize_country_table, serialize_tree};

use crate::cli::BuildArgs;
use crate::error::{Error, Result};

fn write(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a tree against a mock oracle and write the serialized tree blob
/// and country code table next to it.
pub fn run(args: &BuildArgs) -> Result<()> {
    info!(
        "building country lookup tree at precision {} against mock oracle {:?}",
        args.precision, args.mock_oracle
    );
    let oracle = args.mock_oracle.build(args.precision);

    let config = BuilderConfig::new(args.precision)?
        .with_sample_k(args.sample_k)?
        .with_brute_force_threshold(args.brute_force_threshold)?
        .with_max_depth(args.max_depth)?
        .with_seed(args.seed)
        .with_batch_size(args.batch_size)?;

    let (tree, stats) = build_quadtree(oracle.as_ref(), config)?;

    println!("Build statistics:");
    println!("  Nodes created: {}", stats.nodes_created);
    println!("  Leaf nodes: {}", stats.leaves_created);
    println!("  Internal nodes: {}", stats.internal_nodes_created);
    println!("  Oracle calls: {}", stats.oracle_calls);
    println!(
        "  Brute force verifications: {}",
        stats.brute_force_verifications
    );
    println!("  Max depth reached: {}", stats.max_depth_reached);
    println!(
        "  Sampling detected mixed: {}",
        stats.sampling_detected_mixed
    );
    println!(
        "  Brute force detected mixed: {}",
        stats.brute_force_detected_mixed
    );

    let mut blob = serialize_tree(&tree);
    if !args.no_compress {
        blob = compress(&blob)?;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("country_lookup_p{}.bin", args.precision)));
    write(&output, &blob)?;
    println!("Wrote {} bytes to {}", blob.len(), output.display());

    let table = serialize_country_table(&oracle.country_codes(), 2)?;
    let table_path = output.with_extension("codes");
    write(&table_path, &table)?;
    println!("Wrote {} bytes to {}", table.len(), table_path.display());

    Ok(())
}
