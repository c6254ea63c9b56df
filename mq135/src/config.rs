//! Configuração de uma unidade MQ135 (`mq135.toml`)
//!
//! ```toml
//! channel = 0
//! rzero = 81.2
//!
//! [constants]
//! adc_full_scale = 4095
//! supply_voltage = 3.3
//! ```
//!
//! Campos ausentes assumem os valores padrão da biblioteca. Variáveis de
//! ambiente (`MQ135_RZERO`, ...) podem sobrepor o arquivo, ver
//! [`Mq135Config::with_env_overrides`].

use std::path::Path;

use mq135_core::config as env;
use mq135_core::traits::Channel;
use serde::{Deserialize, Serialize};

use crate::error::{Mq135Error, Mq135Result};
use crate::types::{Mq135Constants, RZERO};

/// Configuração persistida de uma unidade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mq135Config {
    /// Canal analógico do sensor
    #[serde(default)]
    pub channel: Channel,
    /// RZERO calibrado da unidade (kΩ)
    #[serde(default = "default_rzero")]
    pub rzero: f64,
    /// Constantes da placa e do datasheet
    #[serde(default)]
    pub constants: Mq135Constants,
}

impl Default for Mq135Config {
    fn default() -> Self {
        Self {
            channel: 0,
            rzero: default_rzero(),
            constants: Mq135Constants::default(),
        }
    }
}

fn default_rzero() -> f64 {
    RZERO
}

impl Mq135Config {
    /// Parse a configuration from TOML string
    pub fn from_str(content: &str) -> Mq135Result<Self> {
        toml::from_str(content).map_err(|e| {
            Mq135Error::InvalidConfiguration(format!("Failed to parse MQ135 config: {}", e))
        })
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Mq135Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Mq135Error::InvalidConfiguration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Serialize configuration to TOML string
    pub fn to_string(&self) -> Mq135Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            Mq135Error::InvalidConfiguration(format!("Failed to serialize MQ135 config: {}", e))
        })
    }

    /// Write configuration to a file path
    pub fn save(&self, path: &Path) -> Mq135Result<()> {
        let content = self.to_string()?;
        std::fs::write(path, content).map_err(|e| {
            Mq135Error::InvalidConfiguration(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Aplica overrides de ambiente / `.env` sobre a configuração
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(channel) = env::channel() {
            self.channel = channel;
        }
        if let Some(rzero) = env::rzero() {
            self.rzero = rzero;
        }
        if let Some(full_scale) = env::adc_full_scale() {
            self.constants.adc_full_scale = full_scale;
        }
        if let Some(load) = env::load_resistor() {
            self.constants.load_resistor = load;
        }
        if let Some(supply) = env::supply_voltage() {
            self.constants.supply_voltage = supply;
        }
        self
    }
}
