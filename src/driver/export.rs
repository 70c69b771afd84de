//! Driver that hands the network to an external emulator as a file.
//!
//! `build` turns the topology into a [`NetworkDescription`], `start` renders
//! it as YAML or JSON to the chosen target, and the emulator takes over from
//! there.

use clap::ValueEnum;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::types::{DriverOptions, NetworkDescription};
use super::NetworkDriver;
use crate::topology::Topology;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

impl ExportFormat {
    pub fn render(self, description: &NetworkDescription) -> Result<String> {
        match self {
            Self::Yaml => serde_yaml::to_string(description).wrap_err("Failed to serialize network description as YAML"),
            Self::Json => serde_json::to_string_pretty(description)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .wrap_err("Failed to serialize network description as JSON"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Built,
    Started,
    Stopped,
}

#[derive(Debug)]
pub struct ExportDriver {
    format: ExportFormat,
    target: ExportTarget,
    description: Option<NetworkDescription>,
    state: State,
}

impl ExportDriver {
    pub fn new(format: ExportFormat, target: ExportTarget) -> Self {
        Self {
            format,
            target,
            description: None,
            state: State::Idle,
        }
    }

    /// Description produced by the last `build`
    pub fn description(&self) -> Option<&NetworkDescription> {
        self.description.as_ref()
    }

    fn write(&self, rendered: &str) -> Result<()> {
        match &self.target {
            ExportTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(rendered.as_bytes()).wrap_err("Failed to write network description to stdout")?;
                out.flush().wrap_err("Failed to flush stdout")
            }
            ExportTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .wrap_err_with(|| format!("Failed to create output directory '{}'", parent.display()))?;
                }
                fs::write(path, rendered)
                    .wrap_err_with(|| format!("Failed to write network description to '{}'", path.display()))
            }
        }
    }
}

impl NetworkDriver for ExportDriver {
    fn build(&mut self, topology: &Topology, options: &DriverOptions) -> Result<()> {
        if self.state != State::Idle {
            return Err(eyre!("Network {} was already built", topology.name()));
        }
        if options.controllers.is_empty() {
            warn!("No controllers configured; switches of {} will have no controller", topology.name());
        }
        for controller in &options.controllers {
            info!("Controller {} at {}", controller.name, controller.target());
        }
        self.description = Some(NetworkDescription::from_topology(topology, options));
        self.state = State::Built;
        info!("Built network description for topology {}", topology.name());
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        let description = match (&self.description, self.state) {
            (Some(description), State::Built) => description,
            _ => return Err(eyre!("Network must be built before it is started")),
        };
        let rendered = self.format.render(description)?;
        self.write(&rendered)?;
        self.state = State::Started;
        match &self.target {
            ExportTarget::Stdout => info!("Wrote {:?} network description to stdout", self.format),
            ExportTarget::File(path) => info!("Wrote {:?} network description to {:?}", self.format, path),
        }
        Ok(())
    }

    fn interact(&mut self) -> Result<()> {
        if self.state != State::Started {
            return Err(eyre!("Network must be started before handing it off"));
        }
        if let ExportTarget::File(path) = &self.target {
            info!("Ready to run the network with the emulator: {:?}", path);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.state == State::Stopped {
            return Ok(());
        }
        self.state = State::Stopped;
        info!("Network handoff complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::simple_topology;
    use crate::driver::run_session;

    #[test]
    fn test_start_requires_build() {
        let mut driver = ExportDriver::new(ExportFormat::Yaml, ExportTarget::Stdout);
        assert!(driver.start().is_err());
        assert!(driver.interact().is_err());
    }

    #[test]
    fn test_build_twice_fails() {
        let topo = simple_topology().unwrap();
        let options = DriverOptions::default();
        let mut driver = ExportDriver::new(ExportFormat::Json, ExportTarget::Stdout);
        driver.build(&topo, &options).unwrap();
        assert!(driver.build(&topo, &options).is_err());
    }

    #[test]
    fn test_session_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("simple.json");
        let topo = simple_topology().unwrap();
        let mut driver = ExportDriver::new(ExportFormat::Json, ExportTarget::File(path.clone()));
        run_session(&mut driver, &topo, &DriverOptions::default()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: NetworkDescription = serde_json::from_str(&content).unwrap();
        assert_eq!(Some(&parsed), driver.description());
    }

    #[test]
    fn test_yaml_render_names_controller() {
        let topo = simple_topology().unwrap();
        let description = NetworkDescription::from_topology(&topo, &DriverOptions::default());
        let yaml = ExportFormat::Yaml.render(&description).unwrap();
        assert!(yaml.contains("topology: simple"));
        assert!(yaml.contains("192.168.57.1"));
        assert!(yaml.contains("dpid: '0000000000000004'") || yaml.contains("dpid: \"0000000000000004\""));
    }
}
