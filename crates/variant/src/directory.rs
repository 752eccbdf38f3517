//! Directory handles
//!
//! A [`Directory`] describes a location under a build root. Creating one
//! never touches the filesystem.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Serialize, Serializer};

/// A directory under a build root, resolved on demand
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    root: Arc<PathBuf>,
    relative: String,
}

impl Directory {
    pub fn new(root: Arc<PathBuf>, relative: impl Into<String>) -> Self {
        Self {
            root,
            relative: relative.into(),
        }
    }

    /// Path relative to the build root, always `/`-separated
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of this directory
    pub fn to_path_buf(&self) -> PathBuf {
        if self.relative.is_empty() {
            return self.root.as_ref().clone();
        }
        self.relative
            .split('/')
            .fold(self.root.as_ref().clone(), |path, segment| path.join(segment))
    }

    /// Location of a file or directory inside this one
    pub fn file(&self, name: &str) -> PathBuf {
        self.to_path_buf().join(name)
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Directory({:?})", self.to_path_buf())
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_path_buf().serialize(serializer)
    }
}

/// Describes directories under a root
pub trait DirectoryProvider: Send + Sync + fmt::Debug {
    fn root(&self) -> &Path;

    /// Handle for `relative`, a `/`-separated path under the root
    fn dir(&self, relative: &str) -> Directory;
}

/// Build root of a project
#[derive(Debug, Clone)]
pub struct BuildDirectory {
    root: Arc<PathBuf>,
}

impl BuildDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }
}

impl DirectoryProvider for BuildDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn dir(&self, relative: &str) -> Directory {
        Directory::new(Arc::clone(&self.root), relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_paths() {
        let build = BuildDirectory::new("/project/app/build");
        let dir = build.dir("outputs/apk/free/debug");

        assert_eq!(dir.relative(), "outputs/apk/free/debug");
        assert_eq!(
            dir.to_path_buf(),
            PathBuf::from("/project/app/build/outputs/apk/free/debug")
        );
        assert_eq!(
            dir.file("app-free-debug.apk"),
            PathBuf::from("/project/app/build/outputs/apk/free/debug/app-free-debug.apk")
        );
    }

    #[test]
    fn test_handles_do_not_create_directories() {
        let tmp = std::env::temp_dir().join("r-droid-variant-never-created");
        let build = BuildDirectory::new(&tmp);
        let _ = build.dir("intermediates/apk");
        assert!(!tmp.exists());
    }
}
