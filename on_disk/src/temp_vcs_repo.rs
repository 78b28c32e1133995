use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::OnDiskRepo;

/// A `TempVcsRepo` creates a temporary, freshly-initialized repository on
/// the local file system. This is often used in unit tests that need a
/// real control directory to operate on.
///
/// Because this struct is intended for testing, its functions panic
/// instead of returning Result structs.
#[derive(Default)]
pub struct TempVcsRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: Option<tempfile::TempDir>,
    path: PathBuf,
}

impl TempVcsRepo {
    // Create a new, initialized repo in a temporary directory.
    // This directory will be deleted when the struct is dropped.
    pub fn new() -> TempVcsRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path: PathBuf = tempdir.path().to_path_buf();

        OnDiskRepo::init(&path).unwrap();

        TempVcsRepo {
            tempdir: Some(tempdir),
            path,
        }
    }

    // Create a new, initialized repo in the specified location.
    // WARNING: This will erase any content already at that path.
    // Use this only when you need to manually inspect the results
    // of the test run.
    pub fn new_at_path<P: Into<PathBuf>>(p: P) -> TempVcsRepo {
        let path = p.into();
        fs::remove_dir_all(&path).unwrap_or(());
        fs::create_dir_all(&path).unwrap();

        OnDiskRepo::init(&path).unwrap();

        TempVcsRepo { tempdir: None, path }
    }

    // Return the path for this repo's root (working directory).
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}
