//! A repository that stores version-control metadata on the local file
//! system.
//!
//! The on-disk format is deliberately small: a `.vcs` control directory
//! holding four empty skeleton directories plus the `description` and
//! `HEAD` bootstrap files. Everything else is created later by other
//! subsystems.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rsvcs_core::repo::{Error, Repo, Result};

/// Implementation of `rsvcs_core::repo::Repo` that stores metadata on the
/// local file system.
///
/// The struct is bound to a worktree root at construction time. The
/// control directory path is derived from it exactly once and never
/// changes for the lifetime of the value; no other location is ever
/// treated as a control directory.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    vcs_dir: PathBuf,
}

impl OnDiskRepo {
    /// Bind to an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.vcs`
    /// directory must already exist at this path; use `init` to create an
    /// empty repository if necessary.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::NotAWorktree(work_dir));
        }

        let vcs_dir = work_dir.join(".vcs");
        if !vcs_dir.is_dir() {
            return Err(Error::NotARepository(vcs_dir));
        }

        Ok(OnDiskRepo { work_dir, vcs_dir })
    }

    /// Creates a new, empty repository on the local file system.
    ///
    /// `work_dir` must be an existing directory. The control directory may
    /// already exist only if it is empty; a non-empty control directory is
    /// rejected rather than merged into.
    ///
    /// This operation only ever creates. It never deletes or truncates
    /// pre-existing content and never touches anything outside the control
    /// directory. If a later step fails, earlier directories are left in
    /// place; a subsequent `init` will then see a non-empty control
    /// directory and reject.
    pub fn init(work_dir: &Path) -> Result<Self> {
        if !work_dir.is_dir() {
            return Err(Error::NotAWorktree(work_dir.to_path_buf()));
        }

        let vcs_dir = work_dir.join(".vcs");

        // The exclusive create is the single source of truth for claiming
        // the control directory. The emptiness check is only a secondary
        // diagnostic for a directory somebody else already created.
        match fs::create_dir(&vcs_dir) {
            Ok(()) => (),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                if fs::read_dir(&vcs_dir)?.next().is_some() {
                    return Err(Error::AlreadyInitialized(vcs_dir));
                }
            }
            Err(err) => return Err(err.into()),
        }

        let repo = OnDiskRepo {
            work_dir: work_dir.to_path_buf(),
            vcs_dir,
        };

        // All four skeleton directories must exist before any bootstrap
        // file is written.
        repo.resolve_path(&["branches"], true)?;
        repo.resolve_path(&["objects"], true)?;
        repo.resolve_path(&["refs", "tags"], true)?;
        repo.resolve_path(&["refs", "heads"], true)?;

        create_description(&repo.vcs_dir)?;
        create_head(&repo.vcs_dir)?;

        Ok(repo)
    }

    /// Resolve a path beneath the control directory.
    ///
    /// Joins the control directory with each segment in order. With
    /// `create == false` this is pure path computation: the file system is
    /// never inspected and the same segments always yield the same path.
    /// With `create == true`, every missing directory component along the
    /// resulting path is created; a path that already exists as a
    /// directory is a silent no-op, so repeated calls are idempotent.
    pub fn resolve_path<I, S>(&self, segments: I, create: bool) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.vcs_dir.clone();
        for segment in segments {
            path.push(segment.as_ref());
        }

        if create {
            fs::create_dir_all(&path)?;
        }

        Ok(path)
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.vcs` control directory.
    pub fn vcs_dir(&self) -> &Path {
        self.vcs_dir.as_path()
    }
}

impl Repo for OnDiskRepo {}

fn create_description(vcs_dir: &Path) -> Result<()> {
    let desc_path = vcs_dir.join("description");
    let desc_txt = "Unnamed repository; edit this file 'description' to name the repository.\n";

    fs::write(desc_path, desc_txt).map_err(|e| e.into())
}

fn create_head(vcs_dir: &Path) -> Result<()> {
    let head_path = vcs_dir.join("HEAD");
    let head_txt = "ref: refs/heads/master\n";

    fs::write(head_path, head_txt).map_err(|e| e.into())
}

#[cfg(test)]
mod tests;
