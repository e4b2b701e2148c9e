mod common;

use common::FakeCgroupFs;
use jailcg::{CgroupError, Controller};

#[test]
fn test_pids_read_cgroup_procs() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Pids, "cgroup.procs", "101\n102\n101\n");
    fs.put(Controller::Pids, "tasks", "999\n");

    assert_eq!(fs.cgroup().pids().pids(), vec![101, 102, 101]);
}

#[test]
fn test_pids_empty_when_missing() {
    let fs = FakeCgroupFs::new();
    assert!(fs.cgroup().pids().pids().is_empty());
}

#[test]
fn test_attach_rejects_pids_controller() {
    let fs = FakeCgroupFs::new();
    fs.put(Controller::Pids, "cgroup.procs", "");

    let result = fs.cgroup().attach(Controller::Pids, 5);
    assert!(matches!(result, Err(CgroupError::Unsupported(_))));
    assert_eq!(fs.get(Controller::Pids, "cgroup.procs"), "");
}
