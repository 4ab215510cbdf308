//! Qualified identifier resolution with a per-file import table cache.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::config::ResolverConfig;
use super::error::{ResolveError, ResolveResult};
use super::imports::{ImportTable, build_import_table};
use super::namer::PackageNamer;
use crate::base::FileId;
use crate::syntax::{Expr, Ident, Node, SourceFile};

/// A file's cached table. Holding the slot lock covers the whole build.
type Slot = Arc<Mutex<Option<Arc<ImportTable>>>>;

/// Resolves `alias.Name` references to the import path behind `alias`.
///
/// Only the file's import block is consulted, so identifiers brought in by a
/// dot-import cannot be resolved; such files are rejected outright.
///
/// Import tables are built on first use and cached per [`FileId`] for the
/// lifetime of the resolver. The resolver is `Sync`; concurrent callers
/// asking about the same file wait for a single build and share its result,
/// while different files build independently. Failed builds are not cached.
pub struct IdentResolver {
    namer: Option<Arc<dyn PackageNamer>>,
    config: ResolverConfig,
    /// One slot per distinct file ever asked about, kept for the resolver's
    /// lifetime. Slots of failed builds stay empty.
    files: Mutex<FxHashMap<FileId, Slot>>,
}

impl IdentResolver {
    /// A resolver without a package namer. Every resolution fails with
    /// [`ResolveError::MissingNamer`] until one is supplied.
    pub fn new() -> Self {
        Self {
            namer: None,
            config: ResolverConfig::default(),
            files: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn with_namer(self, namer: impl PackageNamer + 'static) -> Self {
        self.with_shared_namer(Arc::new(namer))
    }

    pub fn with_shared_namer(mut self, namer: Arc<dyn PackageNamer>) -> Self {
        self.namer = Some(namer);
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `ident`, whose immediate parent is `parent`, to an import path.
    ///
    /// Returns `Ok(Some(path))` when `parent` is a selector `x.Sel` whose `x`
    /// is an unbound identifier naming one of the file's imports. Every other
    /// shape is not a package-qualified reference and yields `Ok(None)`.
    ///
    /// Errors come only from the file's import table (see [`Self::imports`]),
    /// which is consulted before the shape checks.
    pub fn resolve_ident(
        &self,
        file: &SourceFile,
        parent: Node<'_>,
        ident: &Ident,
    ) -> ResolveResult<Option<SmolStr>> {
        let imports = self.imports(file)?;

        let Some(selector) = parent.as_selector() else {
            return Ok(None);
        };
        let Expr::Ident(qualifier) = &selector.x else {
            return Ok(None);
        };
        if qualifier.is_bound() {
            // A local variable or type, not a package.
            return Ok(None);
        }

        let path = imports.get(&qualifier.name).cloned();
        trace!(
            file = %file.id,
            qualifier = %qualifier.name,
            ident = %ident.name,
            path = ?path,
            "resolved qualified identifier"
        );
        Ok(path)
    }

    /// The import table for `file`, built on first request.
    pub fn imports(&self, file: &SourceFile) -> ResolveResult<Arc<ImportTable>> {
        let namer = self.namer.as_deref().ok_or(ResolveError::MissingNamer)?;

        let slot = self.slot(file.id);
        let mut cached = slot.lock();
        if let Some(table) = cached.as_ref() {
            trace!(file = %file.id, "import table cache hit");
            return Ok(Arc::clone(table));
        }

        match build_import_table(file, namer, &self.config) {
            Ok(table) => {
                debug!(file = %file.id, imports = table.len(), "built import table");
                let table = Arc::new(table);
                *cached = Some(Arc::clone(&table));
                Ok(table)
            }
            Err(err) => {
                warn!(file = %file.id, error = %err, "failed to build import table");
                Err(err)
            }
        }
    }

    /// Build the import tables of `files` in parallel.
    ///
    /// Results are in the order of `files`.
    pub fn prime(&self, files: &[&SourceFile]) -> Vec<ResolveResult<Arc<ImportTable>>> {
        files.par_iter().map(|file| self.imports(file)).collect()
    }

    /// Number of files with a successfully built table.
    pub fn cached_files(&self) -> usize {
        let slots: Vec<Slot> = self.files.lock().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    fn slot(&self, file: FileId) -> Slot {
        Arc::clone(self.files.lock().entry(file).or_default())
    }
}

impl Default for IdentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentResolver")
            .field("has_namer", &self.namer.is_some())
            .field("config", &self.config)
            .field("cached_files", &self.cached_files())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::namer::{MapNamer, NamerError};
    use crate::syntax::{BindingId, Decl, ImportSpec, SelectorExpr};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_file(id: u32) -> SourceFile {
        SourceFile::new(FileId::new(id), "main").with_decl(Decl::imports([
            ImportSpec::new("fmt"),
            ImportSpec::new("mypkg/util").named("u"),
        ]))
    }

    fn resolver() -> IdentResolver {
        IdentResolver::new().with_namer(MapNamer::new([("fmt", "fmt")]))
    }

    fn selector(x: Ident, sel: &str) -> SelectorExpr {
        SelectorExpr {
            x: Expr::Ident(x),
            sel: Ident::new(sel),
        }
    }

    /// A namer that counts how often it is consulted.
    fn counting_namer(calls: Arc<AtomicUsize>) -> impl PackageNamer {
        move |path: &str| -> Result<SmolStr, NamerError> {
            calls.fetch_add(1, Ordering::SeqCst);
            MapNamer::new([("fmt", "fmt")]).resolve_package(path)
        }
    }

    #[test]
    fn test_missing_namer() {
        let resolver = IdentResolver::new();
        let file = sample_file(0);
        let sel = selector(Ident::new("fmt"), "Println");

        let err = resolver
            .resolve_ident(&file, Node::Selector(&sel), &sel.sel)
            .unwrap_err();
        assert!(matches!(err, ResolveError::MissingNamer));
        assert_eq!(resolver.cached_files(), 0);
    }

    #[test]
    fn test_resolves_qualifier() {
        let resolver = resolver();
        let file = sample_file(0);

        let sel = selector(Ident::new("fmt"), "Println");
        let path = resolver.resolve_ident(&file, Node::Selector(&sel), &sel.sel).unwrap();
        assert_eq!(path.as_deref(), Some("fmt"));

        let sel = selector(Ident::new("u"), "Helper");
        let path = resolver.resolve_ident(&file, Node::Selector(&sel), &sel.sel).unwrap();
        assert_eq!(path.as_deref(), Some("mypkg/util"));
    }

    #[test]
    fn test_non_selector_parent() {
        let resolver = resolver();
        let file = sample_file(0);
        let call = Expr::call(Expr::ident("Helper"), []);
        let Expr::Call(inner) = &call else { unreachable!() };
        let Expr::Ident(helper) = &inner.fun else { unreachable!() };

        let path = resolver.resolve_ident(&file, Node::Expr(&call), helper).unwrap();
        assert_eq!(path, None);
    }

    #[test]
    fn test_selector_on_non_ident_base() {
        let resolver = resolver();
        let file = sample_file(0);
        // fmt.Get().Println
        let expr = Expr::selector(
            Expr::call(Expr::selector(Expr::ident("fmt"), "Get"), []),
            "Println",
        );
        let sel = Node::Expr(&expr).as_selector().unwrap();

        assert_eq!(resolver.resolve_ident(&file, Node::Expr(&expr), &sel.sel).unwrap(), None);
    }

    #[test]
    fn test_bound_qualifier_is_not_a_package() {
        let resolver = resolver();
        let file = sample_file(0);
        let sel = selector(Ident::bound("u", BindingId(3)), "Helper");

        assert_eq!(resolver.resolve_ident(&file, Node::Selector(&sel), &sel.sel).unwrap(), None);
    }

    #[test]
    fn test_unknown_qualifier() {
        let resolver = resolver();
        let file = sample_file(0);
        let sel = selector(Ident::new("strings"), "Split");

        assert_eq!(resolver.resolve_ident(&file, Node::Selector(&sel), &sel.sel).unwrap(), None);
    }

    #[test]
    fn test_table_is_cached_per_file() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = IdentResolver::new().with_namer(counting_namer(Arc::clone(&calls)));
        let file = sample_file(0);

        let first = resolver.imports(&file).unwrap();
        let second = resolver.imports(&file).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        resolver.imports(&sample_file(1)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.cached_files(), 2);
    }

    #[test]
    fn test_failed_build_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = IdentResolver::new().with_namer(counting_namer(Arc::clone(&calls)));
        let file = SourceFile::new(FileId::new(0), "main")
            .with_decl(Decl::imports([ImportSpec::new("unknown/pkg")]));

        assert!(matches!(resolver.imports(&file), Err(ResolveError::Namer { .. })));
        assert!(matches!(resolver.imports(&file), Err(ResolveError::Namer { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.cached_files(), 0);
    }

    #[test]
    fn test_dot_import_fails_every_resolution() {
        let resolver = resolver();
        let file = SourceFile::new(FileId::new(0), "main").with_decl(Decl::imports([
            ImportSpec::new("fmt"),
            ImportSpec::new("mypkg/dotted").dot(),
        ]));
        let call = Expr::call(Expr::ident("Helper"), []);
        let Expr::Call(inner) = &call else { unreachable!() };
        let Expr::Ident(helper) = &inner.fun else { unreachable!() };

        // Even a non-selector parent reports the file's error.
        let err = resolver.resolve_ident(&file, Node::Expr(&call), helper).unwrap_err();
        assert!(matches!(err, ResolveError::DotImport { .. }));
    }

    #[test]
    fn test_debug_reports_built_tables_only() {
        let resolver = resolver();
        let bad = SourceFile::new(FileId::new(1), "main")
            .with_decl(Decl::imports([ImportSpec::new("x").dot()]));

        resolver.imports(&sample_file(0)).unwrap();
        assert!(resolver.imports(&bad).is_err());

        assert_eq!(resolver.cached_files(), 1);
        assert!(format!("{resolver:?}").contains("cached_files: 1"));
    }

    #[test]
    fn test_prime_builds_in_order() {
        let resolver = resolver();
        let good = sample_file(0);
        let bad = SourceFile::new(FileId::new(1), "main")
            .with_decl(Decl::imports([ImportSpec::new("x").dot()]));
        let other = sample_file(2);

        let results = resolver.prime(&[&good, &bad, &other]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 2);
        assert!(matches!(results[1], Err(ResolveError::DotImport { .. })));
        assert!(results[2].is_ok());
        assert_eq!(resolver.cached_files(), 2);
    }
}
