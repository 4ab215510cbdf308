//! Syntax tree model.
//!
//! Producing trees from source text is the host's job; this module only
//! describes the shapes the resolver inspects, plus builders for assembling
//! trees by hand.

pub mod literal;
mod tree;
mod visit;

pub use tree::{
    BasicLit, BindingId, CallExpr, Decl, Expr, FuncDecl, GenDecl, GenKeyword, Ident,
    ImportAlias, ImportGroup, ImportSpec, Node, SelectorExpr, SourceFile,
};
pub use visit::walk_idents;
