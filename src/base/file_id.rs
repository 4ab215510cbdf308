//! File identifiers for parsed source files.

use std::fmt;

/// Identity of one parsed source file.
///
/// `FileId` is a lightweight handle (just a u32) assigned by the host when it
/// parses a file. The resolver keys its import-table cache on it, so two trees
/// carrying the same `FileId` are treated as the same file regardless of their
/// contents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_identity() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(FileId::new(1));
        set.insert(FileId::new(2));
        set.insert(FileId::from(1)); // same file

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId::new(7).to_string(), "file#7");
        assert_eq!(format!("{:?}", FileId::new(7)), "FileId(7)");
    }
}
