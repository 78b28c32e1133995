use std::{env, path::Path};

use rsvcs_core::repo::Result;
use rsvcs_on_disk::OnDiskRepo;

// Discover a repository starting from the given path.
//
// Repo discovery may eventually grow configuration options and search
// algorithms (walking up parent directories, for example), which is why
// subcommands should go through this function rather than binding
// directly.
//
// For now, this handles only the most simple case where the `.vcs`
// directory is nested immediately within the given path.
#[allow(dead_code)] // TEMPORARY: Until other subcommands actually use this.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::new(path.as_ref())
}

// Discover a repository starting from the current working directory.
//
// See `from_path` for the search behavior.
#[allow(dead_code)] // TEMPORARY: Until other subcommands actually use this.
pub fn from_current_dir() -> Result<OnDiskRepo> {
    // We keep this as simple as possible because the execution
    // environment's working directory can't be pinned down under test.
    let path = env::current_dir()?;
    from_path(path)
}
