use serde::{Deserialize, Serialize};

use crate::driver::{ControllerConfig, DriverOptions, LinkKind};
use crate::error::ConfigError;

/// Driver configuration as read from YAML.
///
/// Every field is optional; whatever is missing keeps the value from
/// [`DriverOptions::default`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<ControllerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_set_macs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<bool>,
}

impl DriverConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(controller) = &self.controller {
            if controller.name.trim().is_empty() {
                return Err(ConfigError::EmptyControllerName);
            }
            if controller.port == 0 {
                return Err(ConfigError::ZeroControllerPort {
                    name: controller.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Merge onto the default driver options
    pub fn into_options(self) -> DriverOptions {
        let defaults = DriverOptions::default();
        DriverOptions {
            link: self.link.unwrap_or(defaults.link),
            build: self.build.unwrap_or(defaults.build),
            auto_set_macs: self.auto_set_macs.unwrap_or(defaults.auto_set_macs),
            controllers: match self.controller {
                Some(controller) => vec![controller],
                None => defaults.controllers,
            },
        }
    }
}
