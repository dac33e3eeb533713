use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd.arg("--root").arg(root);
    cmd
}

#[allow(dead_code)]
pub fn setup_journal(root: &Path, language: &str) {
    moodlog_cmd(root)
        .args(["setup", "--language", language, "--mode", "festinger"])
        .assert()
        .success();
}
