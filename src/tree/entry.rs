//! Line records produced by the tree walk

/// One rendered line of the tree, below the root header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    Dir { name: String, depth: usize },
    File { name: String, depth: usize },
}

impl TreeEntry {
    pub fn name(&self) -> &str {
        match self {
            TreeEntry::Dir { name, .. } => name,
            TreeEntry::File { name, .. } => name,
        }
    }

    /// Nesting level, starting at 1 for the root's direct children.
    pub fn depth(&self) -> usize {
        match self {
            TreeEntry::Dir { depth, .. } => *depth,
            TreeEntry::File { depth, .. } => *depth,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeEntry::Dir { .. })
    }
}

/// Result of walking a root directory: its display name and every entry
/// beneath it in pre-order (each directory is followed by its subtree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeListing {
    pub root_name: String,
    pub entries: Vec<TreeEntry>,
}

impl TreeListing {
    /// Root name as shown in the header line.
    pub fn header(&self) -> String {
        self.root_name.to_uppercase()
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len() - self.dir_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let dir = TreeEntry::Dir {
            name: "src".to_string(),
            depth: 1,
        };
        let file = TreeEntry::File {
            name: "main.rs".to_string(),
            depth: 2,
        };

        assert_eq!(dir.name(), "src");
        assert_eq!(dir.depth(), 1);
        assert!(dir.is_dir());
        assert_eq!(file.name(), "main.rs");
        assert_eq!(file.depth(), 2);
        assert!(!file.is_dir());
    }

    #[test]
    fn test_listing_header_is_upper_case() {
        let listing = TreeListing {
            root_name: "MyProject".to_string(),
            entries: Vec::new(),
        };
        assert_eq!(listing.header(), "MYPROJECT");
    }

    #[test]
    fn test_listing_counts() {
        let listing = TreeListing {
            root_name: "root".to_string(),
            entries: vec![
                TreeEntry::Dir {
                    name: "a".to_string(),
                    depth: 1,
                },
                TreeEntry::File {
                    name: "b".to_string(),
                    depth: 2,
                },
                TreeEntry::File {
                    name: "c".to_string(),
                    depth: 1,
                },
            ],
        };
        assert_eq!(listing.dir_count(), 1);
        assert_eq!(listing.file_count(), 2);
    }
}
