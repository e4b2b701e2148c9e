/// CPU accounting and scheduling (`cpu,cpuacct`)
use crate::cgroup::Subsystem;
use crate::path::{Controller, ControllerContext};
use crate::types::{CpuAcctStat, CpuSnapshot, CpuThrottleStat, Result};

const CPUACCT_STAT: &str = "cpuacct.stat";
const CPUACCT_USAGE: &str = "cpuacct.usage";
const CPU_STAT: &str = "cpu.stat";

#[derive(Clone, Debug)]
pub struct CpuController {
    subsystem: Subsystem,
}

impl CpuController {
    pub fn new(context: &ControllerContext, strict_mode: bool) -> Self {
        Self {
            subsystem: Subsystem::new(context, Controller::Cpu, strict_mode),
        }
    }

    /// User and system CPU time charged to the group, in USER_HZ ticks
    pub fn acct_stat(&self) -> CpuAcctStat {
        let block = self.subsystem.read_block(CPUACCT_STAT, &["user", "system"]);
        CpuAcctStat {
            user: block.get("user"),
            system: block.get("system"),
        }
    }

    /// Total CPU time consumed by the group, in nanoseconds
    pub fn usage(&self) -> i64 {
        self.subsystem.read_int(CPUACCT_USAGE)
    }

    /// Bandwidth enforcement periods and throttling counters
    pub fn stat(&self) -> CpuThrottleStat {
        let block = self
            .subsystem
            .read_block(CPU_STAT, &["nr_periods", "nr_throttled", "throttled_time"]);
        CpuThrottleStat {
            nr_periods: block.get("nr_periods"),
            nr_throttled: block.get("nr_throttled"),
            throttled_time: block.get("throttled_time"),
        }
    }

    /// `1` if the release agent runs when the group empties, `0` otherwise
    pub fn notify(&self) -> i64 {
        self.subsystem.notify()
    }

    pub fn release_agent(&self) -> String {
        self.subsystem.release_agent()
    }

    pub fn procs(&self) -> Vec<i32> {
        self.subsystem.tasks()
    }

    /// Move `pid` into the group by appending it to `tasks`
    pub fn add_proc(&self, pid: i32) -> Result<()> {
        self.subsystem.add_task(pid)
    }

    pub fn set_notify(&self, flag: bool) -> Result<()> {
        self.subsystem.set_notify(flag)
    }

    /// Program the kernel runs when the group becomes empty. Only takes
    /// effect with `notify_on_release` enabled.
    pub fn set_release_agent(&self, path: &str) -> Result<()> {
        self.subsystem.set_release_agent(path)
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            acct: self.acct_stat(),
            usage: self.usage(),
            throttling: self.stat(),
            notify_on_release: self.notify(),
            release_agent: self.release_agent(),
            tasks: self.procs(),
        }
    }
}
