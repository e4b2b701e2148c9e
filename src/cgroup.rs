/// Controller accessor for one cgroup-v1 instance
use crate::cpu::CpuController;
use crate::extract::{self, StatBlock};
use crate::fsio;
use crate::memory::MemoryController;
use crate::net::NetPrioController;
use crate::path::{Controller, ControllerContext};
use crate::pids::PidsController;
use crate::types::{CgroupConfig, CgroupError, CgroupSnapshot, Result};
use log::warn;
use std::io;
use std::path::PathBuf;

pub(crate) const NOTIFY_ON_RELEASE: &str = "notify_on_release";
pub(crate) const RELEASE_AGENT: &str = "release_agent";
pub(crate) const TASKS: &str = "tasks";

/// Entry point for reading and writing the controller files of a cgroup.
///
/// Holds no file content: every getter goes back to cgroupfs. Facets
/// carry their own copy of the context and never depend on each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cgroup {
    context: ControllerContext,
    strict_mode: bool,
}

impl Cgroup {
    pub fn new(config: &CgroupConfig) -> Self {
        Self {
            context: ControllerContext::from_config(config),
            strict_mode: config.strict,
        }
    }

    pub fn context(&self) -> &ControllerContext {
        &self.context
    }

    pub fn cpu(&self) -> CpuController {
        CpuController::new(&self.context, self.strict_mode)
    }

    pub fn memory(&self) -> MemoryController {
        MemoryController::new(&self.context, self.strict_mode)
    }

    pub fn net(&self) -> NetPrioController {
        NetPrioController::new(&self.context, self.strict_mode)
    }

    pub fn pids(&self) -> PidsController {
        PidsController::new(&self.context)
    }

    /// Append `pid` to the `tasks` file of a cpu, memory or net controller.
    ///
    /// The pids controller has no `tasks` file in this layout.
    pub fn attach(&self, controller: Controller, pid: i32) -> Result<()> {
        match controller {
            Controller::Cpu => self.cpu().add_proc(pid),
            Controller::Memory => self.memory().add_proc(pid),
            Controller::Net => self.net().add_proc(pid),
            Controller::Pids => Err(CgroupError::Unsupported(format!(
                "{} does not accept task writes",
                controller
            ))),
        }
    }

    /// Read every value exposed by the four facets
    pub fn snapshot(&self) -> CgroupSnapshot {
        CgroupSnapshot {
            cpu: self.cpu().snapshot(),
            memory: self.memory().snapshot(),
            net: self.net().snapshot(),
            pids: self.pids().pids(),
        }
    }
}

/// One controller directory of a cgroup, with the read and write plumbing
/// shared by all facets.
#[derive(Clone, Debug)]
pub(crate) struct Subsystem {
    context: ControllerContext,
    controller: Controller,
    strict_mode: bool,
}

impl Subsystem {
    pub(crate) fn new(context: &ControllerContext, controller: Controller, strict_mode: bool) -> Self {
        Self {
            context: context.clone(),
            controller,
            strict_mode,
        }
    }

    pub(crate) fn path(&self, file: &str) -> PathBuf {
        self.context.file(self.controller, file)
    }

    pub(crate) fn read(&self, file: &str) -> String {
        fsio::read_file(&self.path(file))
    }

    pub(crate) fn read_int(&self, file: &str) -> i64 {
        extract::parse_int(&self.read(file))
    }

    pub(crate) fn read_trimmed(&self, file: &str) -> String {
        extract::trim(&self.read(file)).to_string()
    }

    pub(crate) fn read_pids(&self, file: &str) -> Vec<i32> {
        extract::parse_pid_list(&self.read(file))
    }

    pub(crate) fn read_block(&self, file: &str, keys: &[&str]) -> StatBlock {
        StatBlock::extract(&self.read(file), keys)
    }

    pub(crate) fn overwrite(&self, file: &str, content: &str) -> Result<()> {
        let path = self.path(file);
        let outcome = fsio::write_file(&path, content);
        self.finish_write(path, outcome)
    }

    pub(crate) fn append(&self, file: &str, content: &str) -> Result<()> {
        let path = self.path(file);
        let outcome = fsio::append_file(&path, content);
        self.finish_write(path, outcome)
    }

    fn finish_write(&self, path: PathBuf, outcome: io::Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(source) if self.strict_mode => Err(CgroupError::Write { path, source }),
            Err(e) => {
                warn!("Skipping write to '{}': {}", path.display(), e);
                Ok(())
            }
        }
    }

    pub(crate) fn notify(&self) -> i64 {
        self.read_int(NOTIFY_ON_RELEASE)
    }

    pub(crate) fn set_notify(&self, flag: bool) -> Result<()> {
        self.overwrite(NOTIFY_ON_RELEASE, if flag { "1" } else { "0" })
    }

    pub(crate) fn release_agent(&self) -> String {
        self.read_trimmed(RELEASE_AGENT)
    }

    pub(crate) fn set_release_agent(&self, path: &str) -> Result<()> {
        self.overwrite(RELEASE_AGENT, path)
    }

    pub(crate) fn tasks(&self) -> Vec<i32> {
        self.read_pids(TASKS)
    }

    pub(crate) fn add_task(&self, pid: i32) -> Result<()> {
        self.append(TASKS, &format!("{}\n", pid))
    }
}
