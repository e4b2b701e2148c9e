//! jailcg: typed access to the cgroup-v1 controller files of a sandbox
//! Reads and writes cpu,cpuacct, memory, net_cls,net_prio and pids state without
//! callers touching raw cgroupfs paths or kernel text formats

pub mod cgroup;
pub mod cpu;
pub mod extract;
pub mod fsio;
pub mod memory;
pub mod net;
pub mod path;
pub mod pids;
pub mod types;

pub use cgroup::Cgroup;
pub use path::{Controller, ControllerContext};
pub use types::{CgroupConfig, CgroupError, Result};
