//! Package namers: the default local name of an import path.
//!
//! An import written without an alias is referred to by the name the imported
//! package declares for itself. Finding that name needs information outside the
//! importing file, so it is delegated to a [`PackageNamer`].

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

/// Errors reported by a [`PackageNamer`].
#[derive(Debug, Error)]
pub enum NamerError {
    #[error("no package name known for {path}")]
    Unresolvable { path: SmolStr },

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Maps an import path to the name its package is referred to by default.
///
/// Implementations should be pure: the same path always yields the same
/// result. Any caching is the implementation's own business.
pub trait PackageNamer: Send + Sync {
    fn resolve_package(&self, path: &str) -> Result<SmolStr, NamerError>;
}

impl<F> PackageNamer for F
where
    F: Fn(&str) -> Result<SmolStr, NamerError> + Send + Sync,
{
    fn resolve_package(&self, path: &str) -> Result<SmolStr, NamerError> {
        self(path)
    }
}

/// A namer that only knows the paths it was given.
#[derive(Clone, Debug, Default)]
pub struct MapNamer {
    names: FxHashMap<SmolStr, SmolStr>,
}

impl MapNamer {
    pub fn new<P, N>(names: impl IntoIterator<Item = (P, N)>) -> Self
    where
        P: Into<SmolStr>,
        N: Into<SmolStr>,
    {
        Self {
            names: names
                .into_iter()
                .map(|(path, name)| (path.into(), name.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, path: impl Into<SmolStr>, name: impl Into<SmolStr>) {
        self.names.insert(path.into(), name.into());
    }
}

impl PackageNamer for MapNamer {
    fn resolve_package(&self, path: &str) -> Result<SmolStr, NamerError> {
        self.names
            .get(path)
            .cloned()
            .ok_or_else(|| NamerError::Unresolvable { path: path.into() })
    }
}

/// A namer that guesses the name from the shape of the path.
///
/// Hints take precedence over the guess. Without a hint, the last path segment
/// is used, skipping a trailing major-version segment (`/v2`), dropping a
/// `go-` prefix and cutting at the first character that cannot appear in an
/// identifier.
#[derive(Clone, Debug, Default)]
pub struct GuessNamer {
    hints: FxHashMap<SmolStr, SmolStr>,
}

impl GuessNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, path: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        self.hints.insert(path.into(), name.into());
        self
    }
}

impl PackageNamer for GuessNamer {
    fn resolve_package(&self, path: &str) -> Result<SmolStr, NamerError> {
        if let Some(name) = self.hints.get(path) {
            return Ok(name.clone());
        }
        let name = guess_package_name(path);
        if name.is_empty() {
            return Err(NamerError::Unresolvable { path: path.into() });
        }
        Ok(name.into())
    }
}

/// Best-effort package name for an import path.
pub fn guess_package_name(path: &str) -> &str {
    let mut segments = path.rsplit('/');
    let mut base = segments.next().unwrap_or_default();
    if is_major_version(base) {
        if let Some(parent) = segments.next() {
            base = parent;
        }
    }
    let base = base.strip_prefix("go-").unwrap_or(base);
    let end = base
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(base.len(), |(i, _)| i);
    &base[..end]
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn is_ident_char(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}
