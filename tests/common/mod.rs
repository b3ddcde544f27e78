use assert_cmd::Command;
use std::path::Path;

pub fn clialgo_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clialgo").unwrap();
    cmd.env_remove("CLIALGO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--root").arg(root);
    cmd
}
