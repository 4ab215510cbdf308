//! Import tables — the local names a file's imports introduce.

use indexmap::IndexMap;
use indexmap::map::Entry;
use smol_str::SmolStr;
use tracing::trace;

use super::config::ResolverConfig;
use super::error::{ResolveError, ResolveResult};
use super::namer::PackageNamer;
use crate::syntax::{Decl, ImportAlias, SourceFile};

/// Local alias → import path for one file, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: IndexMap<SmolStr, SmolStr>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The import path bound to `alias`.
    pub fn get(&self, alias: &str) -> Option<&SmolStr> {
        self.entries.get(alias)
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Iterate over `(alias, path)` pairs in import order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(a, p)| (a.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, alias: SmolStr, path: SmolStr) -> ResolveResult<()> {
        match self.entries.entry(alias) {
            Entry::Occupied(existing) => Err(ResolveError::DuplicateAlias {
                alias: existing.key().clone(),
                first: existing.get().clone(),
                second: path,
            }),
            Entry::Vacant(slot) => {
                slot.insert(path);
                Ok(())
            }
        }
    }
}

/// Build the import table for `file`.
///
/// Reads top-level declarations in order and stops at the first one that is
/// not an import group, since imports must precede everything else. Blank
/// and pseudo imports are skipped. Any dot-import or repeated local name fails
/// the whole file, as does a namer failure.
pub fn build_import_table(
    file: &SourceFile,
    namer: &dyn PackageNamer,
    config: &ResolverConfig,
) -> ResolveResult<ImportTable> {
    let mut table = ImportTable::new();

    for decl in &file.decls {
        let Decl::Import(group) = decl else {
            break;
        };

        for spec in &group.specs {
            let path = SmolStr::from(spec.path_value());
            if config.is_pseudo_import(&path) {
                trace!(file = %file.id, %path, "skipping pseudo import");
                continue;
            }

            let alias = match spec.alias() {
                ImportAlias::Blank => {
                    trace!(file = %file.id, %path, "skipping blank import");
                    continue;
                }
                ImportAlias::Dot => {
                    return Err(ResolveError::DotImport {
                        path,
                        range: spec.range,
                    });
                }
                ImportAlias::Named(name) => SmolStr::from(name),
                ImportAlias::Implicit => namer
                    .resolve_package(&path)
                    .map_err(|source| ResolveError::Namer {
                        path: path.clone(),
                        source,
                    })?,
            };

            table.insert(alias, path)?;
        }
    }

    Ok(table)
}
