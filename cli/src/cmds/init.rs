use std::{env, io::Write};

use super::{App, Result};

use clap::{ArgMatches, SubCommand};
use rsvcs_on_disk::OnDiskRepo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init").about("Create an empty repository in the current directory")
}

pub(crate) fn run(app: &mut App, _init_matches: &ArgMatches) -> Result<()> {
    // The worktree root is resolved here, at the dispatch boundary.
    // The repo layer always receives it explicitly.
    let work_dir = env::current_dir()?;
    let repo = OnDiskRepo::init(&work_dir)?;

    writeln!(
        app,
        "Initialized empty repository in {}",
        repo.vcs_dir().display()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use crate::{temp_cwd::TempCwd, App};

    use rsvcs_on_disk::TempVcsRepo;
    use serial_test::serial;

    #[test]
    #[serial]
    fn initializes_current_directory() {
        let temp = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(temp.path());

        let vcs_dir = env::current_dir().unwrap().join(".vcs");
        let stdout = App::run_with_args(vec!["init"]).unwrap();

        let expected = format!("Initialized empty repository in {}\n", vcs_dir.display());
        assert_eq!(stdout, expected.as_bytes());

        assert_eq!(
            fs::read(vcs_dir.join("HEAD")).unwrap(),
            b"ref: refs/heads/master\n".to_vec()
        );
    }

    #[test]
    #[serial]
    fn matches_library_layout() {
        let tvr = TempVcsRepo::new();

        let temp = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(temp.path());
        App::run_with_args(vec!["init"]).unwrap();

        assert!(!dir_diff::is_different(tvr.path(), temp.path()).unwrap());
    }

    #[test]
    #[serial]
    fn error_already_initialized() {
        let temp = tempfile::tempdir().unwrap();
        let _cwd = TempCwd::new(temp.path());

        App::run_with_args(vec!["init"]).unwrap();
        let err = App::run_with_args(vec!["init"]).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("already exists and is not empty"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }

    #[test]
    fn error_too_many_args() {
        let err = App::run_with_args(vec!["init", "here"]).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("wasn't expected"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }
}
