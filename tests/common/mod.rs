#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// `eden` pointed at `config_dir` instead of the platform config directory
pub fn eden_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eden").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config-dir").arg(config_dir);
    cmd
}
