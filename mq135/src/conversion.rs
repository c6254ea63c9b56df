//! Conversões puras: amostra → resistência → concentração, e o inverso
//!
//! Todas as funções dependem apenas dos argumentos e das constantes
//! recebidas. Nenhuma lê hardware nem guarda estado.
//!
//! ```text
//! amostra ──raw_to_resistance──▶ Rs ──corrected_resistance──▶ Rs'
//!                                 │                            │
//!                                 └──────resistance_to_ppm─────┘──▶ ppm
//!
//! Rs (em ar de referência) ──reference_resistance──▶ RZERO
//! ```

use mq135_core::traits::RawSample;

use crate::error::{Mq135Error, Mq135Result};
use crate::types::{Mq135Constants, REFERENCE_HUMIDITY};

/// Resistência do sensor (kΩ) a partir da amostra bruta.
///
/// O sensor forma um divisor de tensão com o resistor de carga; a amostra é
/// a fração do fundo de escala vista sobre a carga:
///
/// `Rs = ((fundo_de_escala / amostra) · tensão − 1) · RL`
///
/// Uma amostra zero não tem resistência finita e é rejeitada em vez de
/// devolver `inf`. Amostras negativas ou acima do fundo de escala não vêm de
/// uma leitura válida, nem as que dariam resistência negativa (placa com
/// `supply_voltage < 1`).
pub fn raw_to_resistance(constants: &Mq135Constants, sample: RawSample) -> Mq135Result<f64> {
    if sample == 0 {
        return Err(Mq135Error::DivisionByZero("raw sample is zero".into()));
    }
    if sample < 0 || sample > constants.adc_full_scale {
        return Err(Mq135Error::InvalidInput(format!(
            "raw sample {sample} outside 0..={}",
            constants.adc_full_scale
        )));
    }

    let ratio = constants.adc_full_scale as f64 / sample as f64;
    let resistance = (ratio * constants.supply_voltage - 1.0) * constants.load_resistor;
    // tensão de alimentação abaixo do fundo de escala do conversor
    if resistance < 0.0 {
        return Err(Mq135Error::InvalidInput(format!(
            "raw sample {sample} implies negative resistance {resistance}"
        )));
    }
    Ok(resistance)
}

/// Fator de correção para temperatura (°C) e umidade relativa (%).
///
/// `f = CORA·t² − CORB·t + CORC − (h − 33)·CORD`
///
/// A curva é um ajuste empírico das figuras do datasheet na umidade de 33%,
/// e o próprio datasheet é suspeito. Valores fora da faixa física (zero ou
/// negativos, em temperatura/umidade extremas) são devolvidos como estão;
/// quem chama decide se a leitura é aproveitável.
pub fn correction_factor(constants: &Mq135Constants, temperature: f64, humidity: f64) -> f64 {
    constants.cora * temperature * temperature - constants.corb * temperature + constants.corc
        - (humidity - REFERENCE_HUMIDITY) * constants.cord
}

/// Divide a resistência pelo fator de correção.
pub fn apply_correction(resistance: f64, factor: f64) -> Mq135Result<f64> {
    if factor == 0.0 {
        return Err(Mq135Error::DivisionByZero("correction factor is zero".into()));
    }
    Ok(resistance / factor)
}

/// Resistência corrigida para as condições ambientais.
pub fn corrected_resistance(
    constants: &Mq135Constants,
    temperature: f64,
    humidity: f64,
    resistance: f64,
) -> Mq135Result<f64> {
    apply_correction(resistance, correction_factor(constants, temperature, humidity))
}

/// Concentração de CO2 (ppm) pela curva de potência do datasheet.
///
/// `ppm = PARA · (Rs / RZERO)^(−PARB)`
///
/// Resistência maior significa ar mais limpo, portanto menos ppm.
pub fn resistance_to_ppm(constants: &Mq135Constants, resistance: f64, rzero: f64) -> Mq135Result<f64> {
    if !(resistance > 0.0) || !resistance.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "resistance must be positive and finite, got {resistance}"
        )));
    }
    if !(rzero > 0.0) || !rzero.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "RZERO must be positive and finite, got {rzero}"
        )));
    }

    let ppm = constants.para * (resistance / rzero).powf(-constants.parb);
    if !ppm.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "resistance ratio {} overflows the power law",
            resistance / rzero
        )));
    }
    Ok(ppm)
}

/// RZERO de uma unidade medida num ar de concentração conhecida.
///
/// Inverso de [`resistance_to_ppm`] resolvido para RZERO com
/// `ppm = reference_ppm`:
///
/// `RZERO = Rs · (ppm_ref / PARA)^(1 / PARB)`
///
/// Não altera nenhum estado: gravar o valor é decisão de quem chama.
pub fn reference_resistance(
    constants: &Mq135Constants,
    resistance: f64,
    reference_ppm: f64,
) -> Mq135Result<f64> {
    if constants.parb == 0.0 {
        return Err(Mq135Error::InvalidConfiguration(
            "PARB is zero, power law cannot be inverted".into(),
        ));
    }
    if !(constants.para > 0.0) {
        return Err(Mq135Error::InvalidConfiguration(format!(
            "PARA must be positive, got {}",
            constants.para
        )));
    }
    if !(resistance > 0.0) || !resistance.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "resistance must be positive and finite, got {resistance}"
        )));
    }
    if !(reference_ppm > 0.0) || !reference_ppm.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "reference concentration must be positive, got {reference_ppm}"
        )));
    }

    Ok(resistance * (reference_ppm / constants.para).powf(1.0 / constants.parb))
}
