/// Core types and structures for the cgroup accessor
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default mount point of the cgroup-v1 hierarchy
pub const DEFAULT_CGROUP_ROOT: &str = "/sys/fs/cgroup";

/// Environment variable overriding the default cgroupfs root
pub const CGROUP_ROOT_ENV: &str = "JAILCG_CGROUP_ROOT";

/// Accessor configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CgroupConfig {
    /// Mount point of the cgroupfs hierarchy
    pub root: PathBuf,
    /// Per-instance subdirectory below the root (empty for the root itself)
    pub instance: String,
    /// Strict mode: report write failures instead of logging and skipping them
    pub strict: bool,
}

impl Default for CgroupConfig {
    fn default() -> Self {
        let root = std::env::var_os(CGROUP_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CGROUP_ROOT));
        Self {
            root,
            instance: String::new(),
            strict: false,
        }
    }
}

impl CgroupConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CgroupError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            CgroupError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// CPU time consumed by the group, as reported in `cpuacct.stat`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuAcctStat {
    pub user: i64,
    pub system: i64,
}

/// CFS bandwidth statistics from `cpu.stat`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuThrottleStat {
    pub nr_periods: i64,
    pub nr_throttled: i64,
    pub throttled_time: i64,
}

/// Subset of `memory.stat`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStat {
    pub cache: i64,
    pub shmem: i64,
    pub mapped_file: i64,
    pub pgfault: i64,
    pub hierarchical_memory_limit: i64,
}

/// OOM killer state from `memory.oom_control`.
///
/// The kernel reports each field as `0` or `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryOomControl {
    pub oom_kill_disable: i64,
    pub under_oom: i64,
    pub oom_kill: i64,
}

impl MemoryOomControl {
    pub fn kill_disabled(&self) -> bool {
        self.oom_kill_disable != 0
    }

    pub fn is_under_oom(&self) -> bool {
        self.under_oom != 0
    }
}

/// Interface name to priority, as read from `net_prio.ifpriomap`
pub type NetPrioMap = BTreeMap<String, i64>;

/// Read-only view of the CPU controller
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub acct: CpuAcctStat,
    pub usage: i64,
    pub throttling: CpuThrottleStat,
    pub notify_on_release: i64,
    pub release_agent: String,
    pub tasks: Vec<i32>,
}

/// Read-only view of the memory controller
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub limit_in_bytes: i64,
    pub usage_in_bytes: i64,
    pub stat: MemoryStat,
    pub oom_control: MemoryOomControl,
    pub notify_on_release: i64,
    pub release_agent: String,
    pub tasks: Vec<i32>,
}

/// Read-only view of the net_cls,net_prio controller
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetSnapshot {
    pub prioidx: i64,
    pub ifpriomap: NetPrioMap,
    pub notify_on_release: i64,
    pub release_agent: String,
    pub tasks: Vec<i32>,
}

/// Everything readable from one cgroup instance at a point in time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CgroupSnapshot {
    pub cpu: CpuSnapshot,
    pub memory: MemorySnapshot,
    pub net: NetSnapshot,
    pub pids: Vec<i32>,
}

/// Custom error types for the accessor
#[derive(Error, Debug)]
pub enum CgroupError {
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown controller: {0}")]
    UnknownController(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for accessor operations
pub type Result<T> = std::result::Result<T, CgroupError>;
