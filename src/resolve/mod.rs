//! Qualified identifier resolution.
//!
//! Resolution is purely syntactic and file-local:
//!
//! 1. **Package naming** - a [`PackageNamer`] supplies the default name of an
//!    import written without an alias
//! 2. **Import tables** - [`build_import_table`] reads a file's import block
//!    into an alias → path map, rejecting dot-imports and duplicate names
//! 3. **Lookup** - [`IdentResolver`] recognizes `alias.Name` selectors and
//!    looks `alias` up in the file's cached table
//!
//! Nothing here inspects the imported packages themselves.

mod config;
mod error;
mod imports;
mod namer;
mod resolver;

pub use config::ResolverConfig;
pub use error::{ResolveError, ResolveResult};
pub use imports::{ImportTable, build_import_table};
pub use namer::{GuessNamer, MapNamer, NamerError, PackageNamer, guess_package_name};
pub use resolver::IdentResolver;
