/// Network interface priority (`net_cls,net_prio`)
use crate::cgroup::Subsystem;
use crate::extract::StatBlock;
use crate::path::{Controller, ControllerContext};
use crate::types::{NetPrioMap, NetSnapshot, Result};

const PRIOIDX: &str = "net_prio.prioidx";
const IFPRIOMAP: &str = "net_prio.ifpriomap";

/// Interfaces reported by [`NetPrioController::prio_map`]
pub const DEFAULT_INTERFACES: [&str; 3] = ["eth0", "eth1", "lo"];

#[derive(Clone, Debug)]
pub struct NetPrioController {
    subsystem: Subsystem,
}

impl NetPrioController {
    pub fn new(context: &ControllerContext, strict_mode: bool) -> Self {
        Self {
            subsystem: Subsystem::new(context, Controller::Net, strict_mode),
        }
    }

    /// Kernel-assigned index of the group in the priority tables
    pub fn prio_id(&self) -> i64 {
        self.subsystem.read_int(PRIOIDX)
    }

    /// Priorities of `eth0`, `eth1` and `lo`. Other interfaces in the file
    /// are ignored; missing ones report 0.
    pub fn prio_map(&self) -> NetPrioMap {
        self.prio_map_for(&DEFAULT_INTERFACES)
    }

    /// Priorities of exactly the given interfaces
    pub fn prio_map_for<S: AsRef<str>>(&self, interfaces: &[S]) -> NetPrioMap {
        let blob = self.subsystem.read(IFPRIOMAP);
        StatBlock::extract(&blob, interfaces)
            .iter()
            .map(|(name, prio)| (name.to_string(), prio))
            .collect()
    }

    pub fn notify(&self) -> i64 {
        self.subsystem.notify()
    }

    pub fn release_agent(&self) -> String {
        self.subsystem.release_agent()
    }

    pub fn procs(&self) -> Vec<i32> {
        self.subsystem.tasks()
    }

    /// Write one `"<iface> <priority>"` entry, e.g. `"eth0 2"`. The kernel
    /// updates only the named interface; the entry is not validated here.
    pub fn set_prio_map(&self, entry: &str) -> Result<()> {
        self.subsystem.overwrite(IFPRIOMAP, entry)
    }

    pub fn set_notify(&self, flag: bool) -> Result<()> {
        self.subsystem.set_notify(flag)
    }

    pub fn set_release_agent(&self, path: &str) -> Result<()> {
        self.subsystem.set_release_agent(path)
    }

    pub fn add_proc(&self, pid: i32) -> Result<()> {
        self.subsystem.add_task(pid)
    }

    pub fn snapshot(&self) -> NetSnapshot {
        NetSnapshot {
            prioidx: self.prio_id(),
            ifpriomap: self.prio_map(),
            notify_on_release: self.notify(),
            release_agent: self.release_agent(),
            tasks: self.procs(),
        }
    }
}
