use assert_cmd::Command;

pub fn habitr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("habitr").unwrap();
    cmd.env_remove("HABITR_ROOT");
    cmd
}
