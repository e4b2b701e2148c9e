mod common;

use assert_cmd::Command;
use common::{FakeCgroupFs, INSTANCE};
use jailcg::Controller;
use predicates::prelude::*;

fn jailcg(fs: &FakeCgroupFs) -> Command {
    let mut cmd = Command::cargo_bin("jailcg").expect("Failed to find binary");
    cmd.arg("--root").arg(fs.root_path()).arg("--instance").arg(INSTANCE);
    cmd
}

#[test]
fn test_show_cpu_prints_json() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Cpu, "cpuacct.stat", "user 120\nsystem 45\n");
    fs.put(Controller::Cpu, "tasks", "5\n6\n");

    let output = jailcg(&fs).args(["show", "cpu"]).output().expect("Failed to run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(value["acct"]["user"], 120);
    assert_eq!(value["acct"]["system"], 45);
    assert_eq!(value["tasks"], serde_json::json!([5, 6]));
}

#[test]
fn test_show_all_includes_every_controller() {
    let fs = FakeCgroupFs::new();

    jailcg(&fs)
        .args(["show", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cpu\""))
        .stdout(predicate::str::contains("\"memory\""))
        .stdout(predicate::str::contains("\"ifpriomap\""))
        .stdout(predicate::str::contains("\"pids\""));
}

#[test]
fn test_attach_appends_pid() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Memory, "tasks", "10\n");

    jailcg(&fs).args(["attach", "memory", "20"]).assert().success();
    assert_eq!(fs.get(Controller::Memory, "tasks"), "10\n20\n");
}

#[test]
fn test_set_memory_limit() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Memory, "memory.limit_in_bytes", "0\n");

    jailcg(&fs)
        .args(["set-memory-limit", "104857600"])
        .assert()
        .success();
    assert_eq!(fs.get(Controller::Memory, "memory.limit_in_bytes"), "104857600");
}

#[test]
fn test_set_notify_and_release_agent() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Net, "notify_on_release", "0\n");
    fs.put(Controller::Net, "release_agent", "");

    jailcg(&fs).args(["set-notify", "net", "on"]).assert().success();
    jailcg(&fs)
        .args(["set-release-agent", "net", "/bin/agent"])
        .assert()
        .success();
    assert_eq!(fs.get(Controller::Net, "notify_on_release"), "1");
    assert_eq!(fs.get(Controller::Net, "release_agent"), "/bin/agent");
}

#[test]
fn test_set_prio_map() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Net, "net_prio.ifpriomap", "");

    jailcg(&fs).args(["set-prio-map", "eth1 4"]).assert().success();
    assert_eq!(fs.get(Controller::Net, "net_prio.ifpriomap"), "eth1 4");
}

#[test]
fn test_missing_file_tolerated_unless_strict() {
    let fs = FakeCgroupFs::new();

    jailcg(&fs).args(["attach", "cpu", "1"]).assert().success();
    jailcg(&fs)
        .args(["--strict", "attach", "cpu", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_unknown_controller_rejected() {
    let fs = FakeCgroupFs::new();

    jailcg(&fs).args(["attach", "blkio", "1"]).assert().failure();
}
