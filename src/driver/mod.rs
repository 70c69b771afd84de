//! # Network Driver Handoff
//!
//! A topology does nothing on its own: a driver turns it into a running
//! emulated network, attaches the remote controllers, keeps it alive for an
//! interactive session and tears it down afterwards. This module defines
//! that contract and ships one driver, [`ExportDriver`], which hands the
//! network to an external emulator as a YAML or JSON description.
//!
//! ## Example Generated Structure
//!
//! ```yaml
//! topology: sequential
//! link: shaped
//! build: false
//! auto_set_macs: true
//! controllers:
//! - name: c0
//!   ip: 192.168.57.1
//!   port: 6653
//!   protocol: tcp
//! switches:
//! - name: s1
//!   dpid: '0000000000000001'
//! hosts:
//! - name: h1
//!   ip: 10.0.17.1/8
//!   mac: 00:00:00:00:00:01
//!   switch: s1
//! links:
//! - node1: h1
//!   port1: 0
//!   intf1: h1-eth0
//!   node2: s1
//!   port2: 1
//!   intf2: s1-eth1
//! ```

pub mod export;
pub mod types;

use color_eyre::Result;
use log::{error, info};

use crate::topology::Topology;

pub use export::{ExportDriver, ExportFormat, ExportTarget};
pub use types::{
    ControllerConfig, DriverOptions, HostEntry, LinkEntry, LinkKind, NetworkDescription, SwitchEntry,
    DEFAULT_CONTROLLER_IP, DEFAULT_CONTROLLER_NAME, DEFAULT_CONTROLLER_PORT,
};

/// Lifecycle of an emulated network.
pub trait NetworkDriver {
    /// Instantiate `topology` with `options`; called exactly once.
    fn build(&mut self, topology: &Topology, options: &DriverOptions) -> Result<()>;
    fn start(&mut self) -> Result<()>;
    /// Block for the interactive session, if the driver has one
    fn interact(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
}

/// Build, start, interact, stop.
///
/// Once `start` has succeeded, `stop` runs even if the session fails; the
/// session error wins over a stop error.
pub fn run_session<D: NetworkDriver + ?Sized>(
    driver: &mut D,
    topology: &Topology,
    options: &DriverOptions,
) -> Result<()> {
    info!("Building network for topology {}", topology.name());
    driver.build(topology, options)?;
    driver.start()?;
    info!("Network {} started", topology.name());

    let session = driver.interact();
    if let Err(e) = &session {
        error!("Session on {} failed: {}", topology.name(), e);
    }
    let stopped = driver.stop();
    info!("Network {} stopped", topology.name());
    session.and(stopped)
}

/// Hand `topology` to the emulator with default options, as YAML on stdout
pub fn launch(topology: &Topology) -> Result<()> {
    let mut driver = ExportDriver::new(ExportFormat::Yaml, ExportTarget::Stdout);
    run_session(&mut driver, topology, &DriverOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sequential_topology;
    use color_eyre::eyre::eyre;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        fail_start: bool,
        fail_interact: bool,
        fail_stop: bool,
    }

    impl NetworkDriver for Recorder {
        fn build(&mut self, _: &Topology, _: &DriverOptions) -> Result<()> {
            self.calls.push("build");
            Ok(())
        }

        fn start(&mut self) -> Result<()> {
            self.calls.push("start");
            if self.fail_start {
                return Err(eyre!("start failed"));
            }
            Ok(())
        }

        fn interact(&mut self) -> Result<()> {
            self.calls.push("interact");
            if self.fail_interact {
                return Err(eyre!("interact failed"));
            }
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.calls.push("stop");
            if self.fail_stop {
                return Err(eyre!("stop failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_session_order() {
        let topo = sequential_topology().unwrap();
        let mut driver = Recorder::default();
        run_session(&mut driver, &topo, &DriverOptions::default()).unwrap();
        assert_eq!(driver.calls, vec!["build", "start", "interact", "stop"]);
    }

    #[test]
    fn test_stop_runs_after_failed_session() {
        let topo = sequential_topology().unwrap();
        let mut driver = Recorder {
            fail_interact: true,
            fail_stop: true,
            ..Default::default()
        };
        let err = run_session(&mut driver, &topo, &DriverOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "interact failed");
        assert_eq!(driver.calls, vec!["build", "start", "interact", "stop"]);
    }

    #[test]
    fn test_no_stop_when_start_fails() {
        let topo = sequential_topology().unwrap();
        let mut driver = Recorder {
            fail_start: true,
            ..Default::default()
        };
        assert!(run_session(&mut driver, &topo, &DriverOptions::default()).is_err());
        assert_eq!(driver.calls, vec!["build", "start"]);
    }

    #[test]
    fn test_runs_through_trait_object() {
        let topo = sequential_topology().unwrap();
        let mut driver = Recorder::default();
        let dyn_driver: &mut dyn NetworkDriver = &mut driver;
        run_session(dyn_driver, &topo, &DriverOptions::default()).unwrap();
        assert_eq!(driver.calls.len(), 4);
    }
}
