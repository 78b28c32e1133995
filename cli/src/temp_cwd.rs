use std::{
    env,
    path::{Path, PathBuf},
};

// A TempCwd temporarily changes the current working directory for the
// host process and restores the previous value when dropped.
//
// The working directory is process-global state, so any test that uses
// this struct must be marked #[serial].
//
// Because this struct is intended for testing, its functions panic
// instead of returning Result structs.
pub(crate) struct TempCwd {
    old_path: PathBuf,
}

impl TempCwd {
    pub fn new<P: AsRef<Path>>(path: P) -> TempCwd {
        let old_path = env::current_dir().unwrap();
        env::set_current_dir(path).unwrap();

        TempCwd { old_path }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.old_path).unwrap();
    }
}
