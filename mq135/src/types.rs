//! Tipos de dados e constantes empíricas do MQ135

use mq135_core::traits::{AdcResolution, Channel, RawSample};
use serde::{Deserialize, Serialize};

use crate::error::{Mq135Error, Mq135Result};

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTANTES PADRÃO
// ═══════════════════════════════════════════════════════════════════════════════

/// Resistor de carga da placa (kΩ)
pub const RLOAD: f64 = 10.0;
/// Fundo de escala do conversor (16 bits com sinal, single-ended)
pub const ADC_FULL_SCALE: RawSample = 32767;
/// Tensão de alimentação do divisor (V)
pub const SUPPLY_VOLTAGE: f64 = 5.0;
/// Resistência de referência de uma unidade típica (kΩ)
pub const RZERO: f64 = 76.63;
/// Coeficiente multiplicativo da curva de potência
pub const PARA: f64 = 116.6020682;
/// Expoente da curva de potência
pub const PARB: f64 = 2.769034857;
/// Coeficientes da curva de correção ambiental
pub const CORA: f64 = 0.00035;
pub const CORB: f64 = 0.02718;
pub const CORC: f64 = 1.39538;
pub const CORD: f64 = 0.0018;
/// CO2 atmosférico usado como ponto de calibração (ppm)
pub const ATMOCO2: f64 = 397.13;
/// Umidade relativa em que a curva de correção foi ajustada (%)
pub const REFERENCE_HUMIDITY: f64 = 33.0;

/// Constantes empíricas do sensor e da placa.
///
/// Os padrões vêm das curvas publicadas no datasheet do MQ135 para CO2 e de
/// uma placa com resistor de carga de 10 kΩ lida por um conversor de 16 bits.
/// `RZERO` não está aqui: ele é próprio de cada unidade física e vive no
/// estimador.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mq135Constants {
    /// Resistor de carga (kΩ)
    pub load_resistor: f64,
    /// Valor de fundo de escala do conversor
    pub adc_full_scale: RawSample,
    /// Tensão de alimentação (V)
    pub supply_voltage: f64,
    /// Concentração do ar de referência usado na calibração (ppm)
    pub atmospheric_co2: f64,
    pub para: f64,
    pub parb: f64,
    pub cora: f64,
    pub corb: f64,
    pub corc: f64,
    pub cord: f64,
}

impl Default for Mq135Constants {
    fn default() -> Self {
        Self {
            load_resistor: RLOAD,
            adc_full_scale: ADC_FULL_SCALE,
            supply_voltage: SUPPLY_VOLTAGE,
            atmospheric_co2: ATMOCO2,
            para: PARA,
            parb: PARB,
            cora: CORA,
            corb: CORB,
            corc: CORC,
            cord: CORD,
        }
    }
}

impl Mq135Constants {
    /// Ajusta a placa a outro conversor e tensão de alimentação
    pub fn with_adc(mut self, resolution: AdcResolution, supply_voltage: f64) -> Self {
        self.adc_full_scale = resolution.full_scale();
        self.supply_voltage = supply_voltage;
        self
    }

    /// Valida as constantes da placa.
    ///
    /// A curva precisa de `para > 0` e `parb >= 0` para dar ppm positivo e
    /// decrescente. `parb == 0` passa: o expoente zero só é fatal na
    /// calibração, que reporta o erro por conta própria.
    pub fn validate(&self) -> Mq135Result<()> {
        let finite = [
            ("load_resistor", self.load_resistor),
            ("supply_voltage", self.supply_voltage),
            ("atmospheric_co2", self.atmospheric_co2),
            ("para", self.para),
            ("parb", self.parb),
            ("cora", self.cora),
            ("corb", self.corb),
            ("corc", self.corc),
            ("cord", self.cord),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Mq135Error::InvalidConfiguration(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.load_resistor <= 0.0 {
            return Err(Mq135Error::InvalidConfiguration(
                "Load resistor must be positive".into(),
            ));
        }

        if self.adc_full_scale <= 0 {
            return Err(Mq135Error::InvalidConfiguration(
                "ADC full scale must be positive".into(),
            ));
        }

        if self.supply_voltage <= 0.0 {
            return Err(Mq135Error::InvalidConfiguration(
                "Supply voltage must be positive".into(),
            ));
        }

        if self.para <= 0.0 {
            return Err(Mq135Error::InvalidConfiguration(format!(
                "PARA must be positive, got {}",
                self.para
            )));
        }

        if self.parb < 0.0 {
            return Err(Mq135Error::InvalidConfiguration(format!(
                "PARB must not be negative, got {}",
                self.parb
            )));
        }

        Ok(())
    }
}

/// Condições ambientais no momento da leitura
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ambient {
    /// Temperatura (°C)
    pub temperature: f64,
    /// Umidade relativa (%)
    pub humidity: f64,
}

impl Ambient {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

/// Resultado de uma medição completa
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasReading {
    /// Canal lido
    pub channel: Channel,
    /// Amostra bruta do conversor
    pub raw: RawSample,
    /// Resistência do sensor (kΩ), já corrigida quando `ambient` existe
    pub resistance: f64,
    /// Concentração estimada de CO2 (ppm)
    pub ppm: f64,
    /// Condições usadas na correção, se houve
    pub ambient: Option<Ambient>,
}

impl GasReading {
    /// Leitura corrigida por temperatura/umidade?
    pub fn is_corrected(&self) -> bool {
        self.ambient.is_some()
    }
}
