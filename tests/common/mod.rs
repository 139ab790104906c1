use assert_cmd::Command;

pub fn dayjot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayjot").unwrap();
    cmd.env_remove("DAYJOT_ROOT");
    cmd
}
