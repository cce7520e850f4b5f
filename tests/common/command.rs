use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn working_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` under `name` in the working directory and returns
/// the file name for passing to the command line.
pub fn stage_file(dir: &Path, name: &str, content: &str) -> String {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    name.to_string()
}

pub fn run_sift_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sift").expect("Failed to find sift binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
