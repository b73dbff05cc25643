//! Shared utility functions for tree walking

use std::path::{Component, Path, PathBuf};

/// Name that is dropped from every level of the tree, compared case-insensitively.
pub const EXCLUDED_NAME: &str = "thumbs.db";

/// A directory child as read from disk, before it becomes a `TreeEntry`.
#[derive(Debug)]
pub struct Child {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Check if an entry name should be left out of the tree.
pub fn is_excluded_name(name: &str) -> bool {
    name.to_lowercase() == EXCLUDED_NAME
}

/// Final segment of `path` after lexical normalization.
///
/// Trailing separators and `.` segments are dropped and `dir/..` pairs
/// collapse, so `a/b/` gives `b` and `a/b/..` gives `a`. A path that
/// normalizes to nothing is `.`, and a filesystem root has an empty name.
pub fn root_name(path: &Path) -> String {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is still `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    match parts.last() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        None => ".".to_string(),
        _ => String::new(),
    }
}

/// Read, filter, and sort the children of a directory.
///
/// Returns `None` when the directory cannot be listed. Directories come
/// first, then files; each group is ordered by lower-cased name, with the
/// raw name as a tie-breaker so the result never depends on `read_dir` order.
pub fn read_sorted_children(path: &Path) -> Option<Vec<Child>> {
    let entries = match std::fs::read_dir(path) {
        Ok(e) => e,
        Err(_) => return None,
    };

    let mut children: Vec<Child> = entries
        .filter_map(|e| e.ok())
        .map(|entry| {
            let path = entry.path();
            Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: path.is_dir(),
                path,
            }
        })
        .filter(|child| !is_excluded_name(&child.name))
        .collect();

    children.sort_by_cached_key(|c| (!c.is_dir, c.name.to_lowercase(), c.name.clone()));

    Some(children)
}
