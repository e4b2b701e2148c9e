/// Path composition for cgroup-v1 controller files
use crate::types::{CgroupConfig, CgroupError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Co-mounted cgroup-v1 subsystem groups this crate talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Controller {
    Cpu,
    Memory,
    Net,
    Pids,
}

impl Controller {
    pub const ALL: [Controller; 4] = [
        Controller::Cpu,
        Controller::Memory,
        Controller::Net,
        Controller::Pids,
    ];

    /// Directory name of the subsystem group under the cgroupfs base
    pub fn dir(self) -> &'static str {
        match self {
            Controller::Cpu => "cpu,cpuacct",
            Controller::Memory => "memory",
            Controller::Net => "net_cls,net_prio",
            Controller::Pids => "pids",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

impl FromStr for Controller {
    type Err = CgroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" | "cpuacct" | "cpu,cpuacct" => Ok(Controller::Cpu),
            "memory" | "mem" => Ok(Controller::Memory),
            "net" | "net_cls" | "net_prio" | "net_cls,net_prio" => Ok(Controller::Net),
            "pids" => Ok(Controller::Pids),
            other => Err(CgroupError::UnknownController(other.to_string())),
        }
    }
}

/// Compose `<base>/<controller_dir>/<file>`. No I/O is performed.
pub fn resolve(base: &Path, controller_dir: &str, file: &str) -> PathBuf {
    base.join(controller_dir).join(file)
}

/// Resolved base directory of one cgroup instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerContext {
    base: PathBuf,
}

impl ControllerContext {
    /// Join `root` with the per-instance subdirectory. An empty instance
    /// addresses the root itself.
    pub fn new(root: impl AsRef<Path>, instance: &str) -> Self {
        let root = root.as_ref();
        let base = if instance.is_empty() {
            root.to_path_buf()
        } else {
            root.join(instance.trim_matches('/'))
        };
        Self { base }
    }

    pub fn from_config(config: &CgroupConfig) -> Self {
        Self::new(&config.root, &config.instance)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of `file` inside the given controller directory
    pub fn file(&self, controller: Controller, file: &str) -> PathBuf {
        resolve(&self.base, controller.dir(), file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_composes_controller_path() {
        let path = resolve(Path::new("/sys/fs/cgroup"), "cpu,cpuacct", "cpuacct.stat");
        assert_eq!(path, PathBuf::from("/sys/fs/cgroup/cpu,cpuacct/cpuacct.stat"));
    }

    #[test]
    fn test_context_with_instance() {
        let ctx = ControllerContext::new("/sys/fs/cgroup", "jail/42/");
        assert_eq!(ctx.base(), Path::new("/sys/fs/cgroup/jail/42"));
        assert_eq!(
            ctx.file(Controller::Net, "tasks"),
            PathBuf::from("/sys/fs/cgroup/jail/42/net_cls,net_prio/tasks")
        );
    }

    #[test]
    fn test_context_without_instance_is_root() {
        let ctx = ControllerContext::new("/sys/fs/cgroup", "");
        assert_eq!(
            ctx.file(Controller::Pids, "cgroup.procs"),
            PathBuf::from("/sys/fs/cgroup/pids/cgroup.procs")
        );
    }

    #[test]
    fn test_controller_from_str() {
        assert_eq!("cpu".parse::<Controller>().unwrap(), Controller::Cpu);
        assert_eq!("net_cls,net_prio".parse::<Controller>().unwrap(), Controller::Net);
        assert_eq!("memory".parse::<Controller>().unwrap(), Controller::Memory);
        assert!("blkio".parse::<Controller>().is_err());
    }
}
