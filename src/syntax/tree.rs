//! Syntax tree nodes.

use smol_str::SmolStr;

use super::literal;
use crate::base::{FileId, TextRange};

/// Identifies the local declaration an identifier was bound to by the parser.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BindingId(pub u32);

/// An identifier occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub name: SmolStr,
    /// The local declaration this identifier refers to, if the parser bound it.
    ///
    /// Unbound identifiers are free-standing references; only those can be
    /// package qualifiers.
    pub binding: Option<BindingId>,
    pub range: TextRange,
}

impl Ident {
    /// An unbound identifier.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            binding: None,
            range: TextRange::default(),
        }
    }

    /// An identifier bound to a local declaration.
    pub fn bound(name: impl Into<SmolStr>, binding: BindingId) -> Self {
        Self {
            binding: Some(binding),
            ..Self::new(name)
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

/// A literal as written in the source, quotes included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicLit {
    pub raw: SmolStr,
    pub range: TextRange,
}

impl BasicLit {
    /// A string literal holding `value`.
    pub fn string(value: &str) -> Self {
        Self::raw(literal::quote(value))
    }

    /// A literal with exactly the given source text.
    pub fn raw(raw: impl Into<SmolStr>) -> Self {
        Self {
            raw: raw.into(),
            range: TextRange::default(),
        }
    }
}

/// How an import spec names the imported package locally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImportAlias<'a> {
    /// No alias written; the package's own name is used.
    Implicit,
    /// `_ "path"`
    Blank,
    /// `. "path"`
    Dot,
    /// `name "path"`
    Named(&'a str),
}

/// One entry of an import declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub range: TextRange,
}

impl ImportSpec {
    /// Import `path` without an alias.
    pub fn new(path: &str) -> Self {
        Self::from_literal(BasicLit::string(path))
    }

    /// Import with the path literal exactly as written.
    pub fn from_literal(path: BasicLit) -> Self {
        Self {
            name: None,
            path,
            range: TextRange::default(),
        }
    }

    pub fn named(mut self, alias: impl Into<SmolStr>) -> Self {
        self.name = Some(Ident::new(alias));
        self
    }

    pub fn blank(self) -> Self {
        self.named("_")
    }

    pub fn dot(self) -> Self {
        self.named(".")
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn alias(&self) -> ImportAlias<'_> {
        match self.name.as_ref().map(|n| n.name.as_str()) {
            None => ImportAlias::Implicit,
            Some("_") => ImportAlias::Blank,
            Some(".") => ImportAlias::Dot,
            Some(name) => ImportAlias::Named(name),
        }
    }

    /// The decoded import path.
    ///
    /// # Panics
    /// Panics if the path literal cannot be decoded. A well-formed tree never
    /// contains such a literal.
    pub fn path_value(&self) -> String {
        match literal::unquote(&self.path.raw) {
            Some(path) => path,
            None => panic!("malformed import path literal {}", self.path.raw),
        }
    }
}

/// A parenthesized or single import declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportGroup {
    pub specs: Vec<ImportSpec>,
    pub range: TextRange,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenKeyword {
    Const,
    Var,
    Type,
}

/// A const, var or type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenDecl {
    pub keyword: GenKeyword,
    pub names: Vec<Ident>,
    pub values: Vec<Expr>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Ident,
    /// Expression statements of the body, in order.
    pub body: Vec<Expr>,
    pub range: TextRange,
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decl {
    Import(ImportGroup),
    Gen(GenDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn imports(specs: impl IntoIterator<Item = ImportSpec>) -> Self {
        Decl::Import(ImportGroup {
            specs: specs.into_iter().collect(),
            range: TextRange::default(),
        })
    }

    pub fn gen_decl(keyword: GenKeyword, names: impl IntoIterator<Item = Ident>) -> Self {
        Decl::Gen(GenDecl {
            keyword,
            names: names.into_iter().collect(),
            values: Vec::new(),
            range: TextRange::default(),
        })
    }

    pub fn func(name: impl Into<SmolStr>, body: impl IntoIterator<Item = Expr>) -> Self {
        Decl::Func(FuncDecl {
            name: Ident::new(name),
            body: body.into_iter().collect(),
            range: TextRange::default(),
        })
    }
}

/// `x.sel`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorExpr {
    pub x: Expr,
    pub sel: Ident,
}

/// `fun(args...)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Expr,
    pub args: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Ident(Ident),
    Selector(Box<SelectorExpr>),
    Call(Box<CallExpr>),
    Lit(BasicLit),
}

impl Expr {
    pub fn ident(name: impl Into<SmolStr>) -> Self {
        Expr::Ident(Ident::new(name))
    }

    pub fn selector(x: Expr, sel: impl Into<SmolStr>) -> Self {
        Expr::Selector(Box::new(SelectorExpr {
            x,
            sel: Ident::new(sel),
        }))
    }

    pub fn call(fun: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call(Box::new(CallExpr {
            fun,
            args: args.into_iter().collect(),
        }))
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Expr::Ident(ident)
    }
}

/// The root of one file's syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub id: FileId,
    pub package: Ident,
    pub decls: Vec<Decl>,
}

impl SourceFile {
    pub fn new(id: FileId, package: impl Into<SmolStr>) -> Self {
        Self {
            id,
            package: Ident::new(package),
            decls: Vec::new(),
        }
    }

    pub fn with_decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }
}

/// A borrowed reference to any node, used where a parent node is expected.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    File(&'a SourceFile),
    Decl(&'a Decl),
    ImportSpec(&'a ImportSpec),
    Expr(&'a Expr),
    Selector(&'a SelectorExpr),
    Call(&'a CallExpr),
    Ident(&'a Ident),
}

impl<'a> Node<'a> {
    /// The selector expression this node is, if any.
    pub fn as_selector(self) -> Option<&'a SelectorExpr> {
        match self {
            Node::Selector(sel) => Some(sel),
            Node::Expr(Expr::Selector(sel)) => Some(&**sel),
            _ => None,
        }
    }
}
