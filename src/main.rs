/// jailcg: inspect and adjust the cgroup-v1 controllers of a sandbox
///
/// # Usage
/// ```bash
/// jailcg --instance jail/3 show all
/// jailcg --instance jail/3 attach memory 4242
/// jailcg --instance jail/3 set-memory-limit 104857600
/// RUST_LOG=debug jailcg --root /tmp/fakecg show cpu
/// ```
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jailcg::{Cgroup, CgroupConfig, Controller};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (root, instance, strict)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// cgroupfs mount point (defaults to $JAILCG_CGROUP_ROOT or /sys/fs/cgroup)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Per-instance subdirectory below the root
    #[arg(long, global = true)]
    instance: Option<String>,

    /// Strict mode: fail when a control file cannot be written
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Cpu,
    Memory,
    Net,
    Pids,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Print controller values as JSON
    Show {
        #[arg(value_enum, default_value = "all")]
        target: Target,
    },
    /// Append a PID to a controller's tasks file
    Attach {
        /// cpu, memory or net
        controller: Controller,
        pid: i32,
    },
    /// Overwrite memory.limit_in_bytes
    SetMemoryLimit {
        bytes: i64,
    },
    /// Enable or disable notify_on_release
    SetNotify {
        /// cpu, memory or net
        controller: Controller,
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Overwrite release_agent
    SetReleaseAgent {
        /// cpu, memory or net
        controller: Controller,
        path: String,
    },
    /// Write one "<iface> <priority>" entry to net_prio.ifpriomap
    SetPrioMap {
        entry: String,
    },
}

fn load_config(cli: &Cli) -> Result<CgroupConfig> {
    let mut config = match &cli.config {
        Some(path) => CgroupConfig::from_file(path)?,
        None => CgroupConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(instance) = &cli.instance {
        config.instance = instance.clone();
    }
    config.strict |= cli.strict;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let cgroup = Cgroup::new(&config);
    info!("Using cgroup base '{}'", cgroup.context().base().display());

    match cli.command {
        Commands::Show { target } => match target {
            Target::Cpu => print_json(&cgroup.cpu().snapshot()),
            Target::Memory => print_json(&cgroup.memory().snapshot()),
            Target::Net => print_json(&cgroup.net().snapshot()),
            Target::Pids => print_json(&cgroup.pids().pids()),
            Target::All => print_json(&cgroup.snapshot()),
        },
        Commands::Attach { controller, pid } => {
            cgroup.attach(controller, pid)?;
            Ok(())
        }
        Commands::SetMemoryLimit { bytes } => {
            cgroup.memory().set_limit_in_bytes(bytes)?;
            Ok(())
        }
        Commands::SetNotify { controller, state } => {
            let flag = matches!(state, Toggle::On);
            match controller {
                Controller::Cpu => cgroup.cpu().set_notify(flag)?,
                Controller::Memory => cgroup.memory().set_notify(flag)?,
                Controller::Net => cgroup.net().set_notify(flag)?,
                Controller::Pids => bail!("{} has no notify_on_release setting here", controller),
            }
            Ok(())
        }
        Commands::SetReleaseAgent { controller, path } => {
            match controller {
                Controller::Cpu => cgroup.cpu().set_release_agent(&path)?,
                Controller::Memory => cgroup.memory().set_release_agent(&path)?,
                Controller::Net => cgroup.net().set_release_agent(&path)?,
                Controller::Pids => bail!("{} has no release_agent setting here", controller),
            }
            Ok(())
        }
        Commands::SetPrioMap { entry } => {
            cgroup.net().set_prio_map(&entry)?;
            Ok(())
        }
    }
}
