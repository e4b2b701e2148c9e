/// Process membership from the `pids` controller
use crate::cgroup::Subsystem;
use crate::path::{Controller, ControllerContext};

const CGROUP_PROCS: &str = "cgroup.procs";

#[derive(Clone, Debug)]
pub struct PidsController {
    subsystem: Subsystem,
}

impl PidsController {
    pub fn new(context: &ControllerContext) -> Self {
        Self {
            subsystem: Subsystem::new(context, Controller::Pids, false),
        }
    }

    /// Thread-group ids in `cgroup.procs`, in file order. Unlike the
    /// per-subsystem `tasks` files this lists processes, not threads.
    pub fn pids(&self) -> Vec<i32> {
        self.subsystem.read_pids(CGROUP_PROCS)
    }
}
