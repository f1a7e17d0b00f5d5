// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Top-level error type for the `geoquad` command-line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// A builder configuration field was rejected.
    #[error(transparent)]
    Config(#[from] geoquad_build::Error),

    /// The wire format encoder/decoder rejected something.
    #[error(transparent)]
    Codec(#[from] geoquad_codec::Error),

    /// Reading or writing an output file failed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        /// The path that couldn't be read or written.
        path: std::path::PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results from this crate.
pub type Result<T> = std::result::Result<T, Error>;
