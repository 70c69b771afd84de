use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::net::IpAddr;
use std::path::PathBuf;

use sdntopo::catalog::TopologyKind;
use sdntopo::config_loader::{resolve_options, ControllerOverrides};
use sdntopo::driver::{run_session, ExportDriver, ExportFormat, ExportTarget};

/// Build a fixed SDN testbed topology and hand it to the network emulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topology to build
    #[arg(short, long, value_enum)]
    topology: TopologyKind,

    /// Driver configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the network description here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format of the network description
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
    format: ExportFormat,

    /// Override the controller address
    #[arg(long)]
    controller_ip: Option<IpAddr>,

    /// Override the controller port
    #[arg(long)]
    controller_port: Option<u16>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Topology: {}", args.topology);

    let overrides = ControllerOverrides {
        ip: args.controller_ip,
        port: args.controller_port,
    };
    let options = resolve_options(args.config.as_deref(), &overrides)?;

    let topology = args
        .topology
        .build()
        .wrap_err_with(|| format!("Failed to build topology {}", args.topology))?;

    let target = match args.output {
        Some(path) => ExportTarget::File(path),
        None => ExportTarget::Stdout,
    };
    let mut driver = ExportDriver::new(args.format, target);
    run_session(&mut driver, &topology, &options)?;

    Ok(())
}
