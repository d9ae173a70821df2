use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use unitgen::args::{build_exec_command, CommandScope, PipelineOptions};
use unitgen::config::Config;
use unitgen::logging::init_tracing;
use unitgen::unit::{
    render_header, timeout_stop_sec, validate_restart_policy, HeaderInfo, RestartPolicy,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "unitgen")]
#[command(version = VERSION)]
#[command(about = "Turn a container run command into a systemd ExecStart line")]
struct Cli {
    /// Number of trailing arguments (entrypoint) never stripped of flags
    #[arg(long, default_value_t = 0)]
    arg_count: usize,

    /// Unit the command is generated for
    #[arg(long, value_enum, default_value_t = Scope::Container)]
    scope: Scope,

    /// Keep -d=false / --detach=false
    #[arg(long)]
    keep_detach: bool,

    /// Keep --replace=false
    #[arg(long)]
    keep_replace: bool,

    /// Service name; prints the unit header and [Service] section
    #[arg(long)]
    name: Option<String>,

    /// Omit the autogenerated comment block (also on when the config sets `no_header`)
    #[arg(long)]
    no_header: bool,

    /// Version shown in the autogenerated comment
    #[arg(long)]
    podman_version: Option<String>,

    /// Timestamp shown in the autogenerated comment
    #[arg(long)]
    timestamp: Option<String>,

    /// Storage graph root for RequiresMountsFor=
    #[arg(long)]
    graph_root: Option<String>,

    /// Storage run root for RequiresMountsFor=
    #[arg(long)]
    run_root: Option<String>,

    /// Restart= policy
    #[arg(long)]
    restart_policy: Option<String>,

    /// Container stop timeout in seconds
    #[arg(long)]
    stop_timeout: Option<u32>,

    /// Print JSON instead of unit text
    #[arg(long)]
    json: bool,

    /// Config file (default: ~/.config/unitgen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container command, e.g. `podman run --rm alpine top`
    #[arg(last = true, required = true)]
    command: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scope {
    Container,
    PodMember,
}

impl From<Scope> for CommandScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Container => CommandScope::Container,
            Scope::PodMember => CommandScope::PodMember,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    args: Vec<String>,
    exec_start: String,
    restart_policy: RestartPolicy,
    timeout_stop_sec: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<String>,
    warnings: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let restart = cli
        .restart_policy
        .as_deref()
        .unwrap_or(&config.defaults.restart_policy);
    let restart_policy = match validate_restart_policy(restart) {
        Ok(policy) => policy,
        Err(err) if cli.json => {
            let body = serde_json::json!({
                "error": {
                    "type": err.error_type(),
                    "message": err.to_string(),
                }
            });
            println!("{}", body);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let stop_timeout = cli.stop_timeout.unwrap_or(config.defaults.stop_timeout);
    let timeout = timeout_stop_sec(config.defaults.min_timeout_stop_sec, stop_timeout);

    let mut options = PipelineOptions::new().with_scope(cli.scope.into());
    if cli.keep_detach {
        options = options.keep_detach();
    }
    if cli.keep_replace {
        options = options.keep_replace();
    }

    let exec = build_exec_command(&cli.command, cli.arg_count, &options);
    for warning in &exec.warnings {
        eprintln!("Warning: {}", warning);
    }

    let header = cli.name.as_ref().map(|name| {
        render_header(&HeaderInfo {
            service_name: name.clone(),
            generate_no_header: cli.no_header || config.defaults.no_header,
            podman_version: cli
                .podman_version
                .clone()
                .unwrap_or_else(|| config.defaults.podman_version.clone()),
            time_stamp: cli.timestamp.clone(),
            graph_root: cli
                .graph_root
                .clone()
                .unwrap_or_else(|| config.storage.graph_root.clone()),
            run_root: cli
                .run_root
                .clone()
                .unwrap_or_else(|| config.storage.run_root.clone()),
        })
    });

    if cli.json {
        let output = JsonOutput {
            exec_start: exec.exec_start(),
            args: exec.args,
            restart_policy,
            timeout_stop_sec: timeout,
            header,
            warnings: exec.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match header {
        Some(header) => {
            print!("{}", header);
            println!();
            println!("[Service]");
            println!("Restart={}", restart_policy);
            println!("TimeoutStopSec={}", timeout);
            println!("ExecStart={}", exec.exec_start());
        }
        None => println!("{}", exec.exec_start()),
    }

    Ok(())
}
