use crate::config::DriverConfig;
use crate::driver::DriverOptions;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::net::IpAddr;
use std::path::Path;

/// Load and parse a driver configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<DriverConfig> {
    info!("Loading driver configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)
        .wrap_err_with(|| format!("Failed to read configuration '{}'", config_path.display()))?;

    // An empty file means "all defaults"
    let config: DriverConfig = if content.trim().is_empty() {
        DriverConfig::default()
    } else {
        serde_yaml::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?
    };

    config.validate()?;

    Ok(config)
}

/// CLI arguments that override the controller settings from YAML
#[derive(Debug, Clone, Default)]
pub struct ControllerOverrides {
    pub ip: Option<IpAddr>,
    pub port: Option<u16>,
}

/// Apply CLI overrides to every configured controller
pub fn apply_controller_overrides(options: &mut DriverOptions, overrides: &ControllerOverrides) {
    for controller in &mut options.controllers {
        if let Some(ip) = overrides.ip {
            info!("Overriding controller {} address with {}", controller.name, ip);
            controller.ip = ip;
        }
        if let Some(port) = overrides.port {
            info!("Overriding controller {} port with {}", controller.name, port);
            controller.port = port;
        }
    }
}

/// Resolve driver options from an optional config file plus CLI overrides
pub fn resolve_options(config_path: Option<&Path>, overrides: &ControllerOverrides) -> Result<DriverOptions> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => DriverConfig::default(),
    };
    let mut options = config.into_options();
    apply_controller_overrides(&mut options, overrides);
    Ok(options)
}
