//! # sdntopo - Static topologies for an SDN emulation testbed
//!
//! This library describes fixed network topologies (switches, hosts and the
//! links between them) and hands them to an external network emulator that
//! connects every switch to a remote SDN controller.
//!
//! ## Overview
//!
//! A topology is built once, in a single declarative pass, and is immutable
//! afterwards. Host addresses are derived from the attaching switch: the
//! `H`-th host on switch `sS` gets `10.0.((S << 4) | H).1`.
//!
//! Two topologies ship with the crate:
//!
//! - **sequential**: a chain `s1 - s2 - ... - s8` with two hosts on each end
//! - **simple**: a 7-switch mesh with four hosts on s1, s2 and s4
//!
//! ## Architecture
//!
//! - `topology`: data model, builder and invariant checks
//! - `ip`: host address derivation, address registry, automatic MACs
//! - `catalog`: the built-in topologies
//! - `driver`: the handoff contract to the emulator and the export driver
//! - `config` / `config_loader`: YAML driver configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sdntopo::catalog::TopologyKind;
//! use sdntopo::driver::{run_session, DriverOptions, ExportDriver, ExportFormat, ExportTarget};
//!
//! let topology = TopologyKind::Sequential.build()?;
//! let mut driver = ExportDriver::new(ExportFormat::Yaml, ExportTarget::Stdout);
//! run_session(&mut driver, &topology, &DriverOptions::default())?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Construction and configuration errors are typed (`TopologyError`,
//! `ConfigError`); the driver layer returns `color_eyre::Result` with
//! context attached.

pub mod catalog;
pub mod config;
pub mod config_loader;
pub mod driver;
pub mod error;
pub mod ip;
pub mod topology;

pub use error::{ConfigError, TopologyError};
