//! Fake cgroupfs trees for integration tests
#![allow(dead_code)]

use jailcg::{Cgroup, CgroupConfig, Controller};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INSTANCE: &str = "jail/7";

/// A temporary cgroupfs root with every controller directory of one instance
pub struct FakeCgroupFs {
    pub root: TempDir,
}

impl FakeCgroupFs {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp directory");
        for controller in Controller::ALL {
            fs::create_dir_all(root.path().join(INSTANCE).join(controller.dir()))
                .expect("Failed to create controller directory");
        }
        Self { root }
    }

    pub fn config(&self, strict: bool) -> CgroupConfig {
        CgroupConfig {
            root: self.root.path().to_path_buf(),
            instance: INSTANCE.to_string(),
            strict,
        }
    }

    pub fn cgroup(&self) -> Cgroup {
        Cgroup::new(&self.config(false))
    }

    pub fn strict_cgroup(&self) -> Cgroup {
        Cgroup::new(&self.config(true))
    }

    pub fn path(&self, controller: Controller, file: &str) -> PathBuf {
        self.root.path().join(INSTANCE).join(controller.dir()).join(file)
    }

    pub fn put(&self, controller: Controller, file: &str, content: &str) {
        fs::write(self.path(controller, file), content).expect("Failed to write fixture");
    }

    pub fn get(&self, controller: Controller, file: &str) -> String {
        fs::read_to_string(self.path(controller, file)).expect("Failed to read fixture")
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
