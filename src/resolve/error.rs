//! Resolution errors.

use smol_str::SmolStr;
use thiserror::Error;

use super::namer::NamerError;
use crate::base::TextRange;

/// Errors that make a file's imports unusable for resolution.
///
/// All of these are structural properties of the file (or of the resolver's
/// setup); retrying without changing either gives the same error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No package namer was supplied to the resolver.
    #[error("identifier resolver has no package namer configured")]
    MissingNamer,

    /// A dot-import brings names into scope without a qualifier.
    #[error("unsupported dot-import found for {path}")]
    DotImport { path: SmolStr, range: TextRange },

    /// Two imports share a local name.
    #[error("multiple packages using name {alias}: {first} and {second}")]
    DuplicateAlias {
        alias: SmolStr,
        first: SmolStr,
        second: SmolStr,
    },

    /// The package namer could not name an unaliased import.
    #[error("resolving package name for {path}: {source}")]
    Namer {
        path: SmolStr,
        #[source]
        source: NamerError,
    },
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
