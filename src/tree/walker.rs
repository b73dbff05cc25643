//! Recursive walk that turns a directory into a `TreeListing`

use std::path::Path;

use super::entry::{TreeEntry, TreeListing};
use super::utils::{Child, read_sorted_children, root_name};

/// Walk `root` and collect every entry beneath it in display order.
///
/// Directories that cannot be listed, including a root that is a file or
/// does not exist, contribute no children. The walk never fails.
pub fn walk_tree(root: &Path) -> TreeListing {
    let listing = TreeListing {
        root_name: root_name(root),
        entries: walk_dir(root, 1, &read_sorted_children),
    };
    tracing::debug!(
        root = %root.display(),
        dirs = listing.dir_count(),
        files = listing.file_count(),
        "walked tree"
    );
    listing
}

/// Walk one directory. `list` returns sorted children, or `None` when the
/// directory cannot be listed.
fn walk_dir<L>(path: &Path, depth: usize, list: &L) -> Vec<TreeEntry>
where
    L: Fn(&Path) -> Option<Vec<Child>>,
{
    let Some(children) = list(path) else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        if child.is_dir {
            entries.push(TreeEntry::Dir {
                name: child.name,
                depth,
            });
            entries.extend(walk_dir(&child.path, depth + 1, list));
        } else {
            entries.push(TreeEntry::File {
                name: child.name,
                depth,
            });
        }
    }
    entries
}
