use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nix::sys::signal::Signal;
use procscan::ProcFs;

/// Process discovery through the `/proc` filesystem
#[derive(Parser, Debug)]
#[command(name = "procscan", version)]
struct Args {
    /// Process information root; defaults to `$ROOTFS_MOUNT_PATH/proc` or `/proc`
    #[arg(long, env = "PROCSCAN_PROC_ROOT")]
    proc_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the devices cgroup path of a process
    Container { pid: i32 },
    /// Print the pids of processes with the given name
    Pidof {
        name: String,
        /// Print the pids as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Signal processes whose name matches a regular expression
    Pkill {
        pattern: String,
        /// Signal name (`TERM`, `SIGKILL`) or number
        #[arg(short, long, default_value = "TERM", value_parser = parse_signal)]
        signal: Signal,
    },
}

fn parse_signal(input: &str) -> Result<Signal, String> {
    procscan::signal::parse_signal(input).ok_or_else(|| format!("unknown signal `{input}`"))
}

/// Entry point for the procscan command line tool.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug procscan pidof nginx
/// procscan pkill --signal HUP 'nginx: master'
/// ROOTFS_MOUNT_PATH=/rootfs procscan container 1234
/// ```
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let procfs = match args.proc_root {
        Some(root) => ProcFs::new(root),
        None => ProcFs::from_env(),
    };

    match args.command {
        Command::Container { pid } => {
            println!("{}", procfs.full_container_name(pid)?);
        }
        Command::Pidof { name, json } => {
            let pids = procfs.pid_of(&name)?;
            if json {
                println!("{}", serde_json::to_string(&pids)?);
            } else {
                let pids: Vec<String> = pids.iter().map(i32::to_string).collect();
                println!("{}", pids.join(" "));
            }
        }
        Command::Pkill { pattern, signal } => {
            procfs.pkill(&pattern, signal)?;
        }
    }

    Ok(())
}
