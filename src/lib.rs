//! # qualident
//!
//! Resolves package-qualified identifiers (`alias.Name`) to the import path
//! that `alias` stands for, using nothing but the file's import block.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve → Import tables, package namers, the cached identifier resolver
//!   ↓
//! syntax  → Syntax tree handed in by the host (no parser here)
//!   ↓
//! base    → Primitives (FileId, TextRange)
//! ```
//!
//! ## Usage
//!
//! ```
//! use qualident::base::FileId;
//! use qualident::resolve::{IdentResolver, MapNamer};
//! use qualident::syntax::{Decl, Expr, Ident, ImportSpec, Node, SourceFile};
//!
//! let file = SourceFile::new(FileId::new(0), "main").with_decl(Decl::imports([
//!     ImportSpec::new("fmt"),
//!     ImportSpec::new("mypkg/util").named("u"),
//! ]));
//!
//! let resolver = IdentResolver::new().with_namer(MapNamer::new([("fmt", "fmt")]));
//!
//! let call = Expr::selector(Expr::ident("u"), "Helper");
//! let Expr::Selector(sel) = &call else { unreachable!() };
//! let path = resolver.resolve_ident(&file, Node::Expr(&call), &sel.sel).unwrap();
//! assert_eq!(path.as_deref(), Some("mypkg/util"));
//! ```

/// Foundation types: FileId, TextRange
pub mod base;

/// Syntax tree model: files, declarations, imports, expressions
pub mod syntax;

/// Import tables and qualified identifier resolution
pub mod resolve;

pub use base::{FileId, TextRange, TextSize};
pub use resolve::{
    IdentResolver, ImportTable, NamerError, PackageNamer, ResolveError, ResolveResult,
    ResolverConfig,
};
