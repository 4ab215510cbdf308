//! Resolver configuration.

use smol_str::SmolStr;

/// Options controlling how import blocks are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Import paths that are not real packages and are skipped entirely.
    pub pseudo_imports: Vec<SmolStr>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            // cgo
            pseudo_imports: vec![SmolStr::new_static("C")],
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pseudo_import(mut self, path: impl Into<SmolStr>) -> Self {
        let path = path.into();
        if !self.pseudo_imports.contains(&path) {
            self.pseudo_imports.push(path);
        }
        self
    }

    pub fn is_pseudo_import(&self, path: &str) -> bool {
        self.pseudo_imports.iter().any(|p| p == path)
    }
}
