/// Memory accounting, limits and OOM state (`memory`)
use crate::cgroup::Subsystem;
use crate::path::{Controller, ControllerContext};
use crate::types::{MemoryOomControl, MemorySnapshot, MemoryStat, Result};

const LIMIT_IN_BYTES: &str = "memory.limit_in_bytes";
const USAGE_IN_BYTES: &str = "memory.usage_in_bytes";
const MEMORY_STAT: &str = "memory.stat";
const OOM_CONTROL: &str = "memory.oom_control";

const STAT_KEYS: [&str; 5] = [
    "cache",
    "shmem",
    "mapped_file",
    "pgfault",
    "hierarchical_memory_limit",
];
const OOM_KEYS: [&str; 3] = ["oom_kill_disable", "under_oom", "oom_kill"];

#[derive(Clone, Debug)]
pub struct MemoryController {
    subsystem: Subsystem,
}

impl MemoryController {
    pub fn new(context: &ControllerContext, strict_mode: bool) -> Self {
        Self {
            subsystem: Subsystem::new(context, Controller::Memory, strict_mode),
        }
    }

    pub fn procs(&self) -> Vec<i32> {
        self.subsystem.tasks()
    }

    /// Hard limit on user memory, in bytes. An unlimited group reports a
    /// value close to `i64::MAX`.
    pub fn limit_in_bytes(&self) -> i64 {
        self.subsystem.read_int(LIMIT_IN_BYTES)
    }

    /// Current usage in bytes
    pub fn usage_in_bytes(&self) -> i64 {
        self.subsystem.read_int(USAGE_IN_BYTES)
    }

    /// Cache, shared memory, mapped file and page fault counters, plus the
    /// effective limit inherited through the hierarchy
    pub fn stat(&self) -> MemoryStat {
        let block = self.subsystem.read_block(MEMORY_STAT, &STAT_KEYS);
        MemoryStat {
            cache: block.get("cache"),
            shmem: block.get("shmem"),
            mapped_file: block.get("mapped_file"),
            pgfault: block.get("pgfault"),
            hierarchical_memory_limit: block.get("hierarchical_memory_limit"),
        }
    }

    pub fn oom_control(&self) -> MemoryOomControl {
        let block = self.subsystem.read_block(OOM_CONTROL, &OOM_KEYS);
        MemoryOomControl {
            oom_kill_disable: block.get("oom_kill_disable"),
            under_oom: block.get("under_oom"),
            oom_kill: block.get("oom_kill"),
        }
    }

    pub fn notify(&self) -> i64 {
        self.subsystem.notify()
    }

    pub fn release_agent(&self) -> String {
        self.subsystem.release_agent()
    }

    pub fn add_proc(&self, pid: i32) -> Result<()> {
        self.subsystem.add_task(pid)
    }

    /// Overwrite the limit. The value is written as given, without unit
    /// conversion; the kernel rounds it to a page multiple.
    pub fn set_limit_in_bytes(&self, bytes: i64) -> Result<()> {
        self.subsystem.overwrite(LIMIT_IN_BYTES, &bytes.to_string())
    }

    pub fn set_notify(&self, flag: bool) -> Result<()> {
        self.subsystem.set_notify(flag)
    }

    pub fn set_release_agent(&self, path: &str) -> Result<()> {
        self.subsystem.set_release_agent(path)
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            limit_in_bytes: self.limit_in_bytes(),
            usage_in_bytes: self.usage_in_bytes(),
            stat: self.stat(),
            oom_control: self.oom_control(),
            notify_on_release: self.notify(),
            release_agent: self.release_agent(),
            tasks: self.procs(),
        }
    }
}
