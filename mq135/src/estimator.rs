//! Estimador de concentração de CO2 para uma unidade MQ135

use std::sync::atomic::{AtomicU64, Ordering};

use mq135_core::traits::{Channel, RawSample, SampleSource, SensorComponent};

use crate::config::Mq135Config;
use crate::conversion;
use crate::error::{Mq135Error, Mq135Result};
use crate::types::{Ambient, GasReading, Mq135Constants, RZERO};

/// Estimador de concentração de gás (CO2) de um sensor MQ135.
///
/// Guarda o canal (fixo após a construção), as constantes empíricas e o
/// RZERO da unidade. Todas as operações recebem `&self`: o estimador pode ser
/// compartilhado entre threads (`Arc<GasConcentrationEstimator>`) e o RZERO
/// republicado por uma recalibração em segundo plano sem travas. O valor é
/// guardado como bits de `f64` num `AtomicU64`, então uma leitura nunca vê
/// metade de uma escrita.
///
/// O conversor não pertence ao estimador: as variantes `read_*` recebem a
/// fonte de amostras no ponto de uso.
///
/// ```
/// use mq135::GasConcentrationEstimator;
/// use mq135_core::prelude::*;
///
/// let estimator = GasConcentrationEstimator::new(0);
/// let mut adc = |_: Channel| Ok::<_, SensorError>(16000);
///
/// let ppm = estimator.read_ppm(&mut adc)?;
/// assert!((ppm - 69.454).abs() < 1e-3);
/// # Ok::<(), mq135::Mq135Error>(())
/// ```
#[derive(Debug)]
pub struct GasConcentrationEstimator {
    channel: Channel,
    constants: Mq135Constants,
    rzero_bits: AtomicU64,
}

impl GasConcentrationEstimator {
    /// Cria estimador com as constantes e o RZERO padrão
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            constants: Mq135Constants::default(),
            rzero_bits: AtomicU64::new(RZERO.to_bits()),
        }
    }

    /// Cria estimador com constantes e RZERO específicos
    pub fn with_constants(
        channel: Channel,
        constants: Mq135Constants,
        rzero: f64,
    ) -> Mq135Result<Self> {
        constants.validate()?;
        check_rzero(rzero)?;

        Ok(Self {
            channel,
            constants,
            rzero_bits: AtomicU64::new(rzero.to_bits()),
        })
    }

    /// Cria estimador a partir de uma configuração carregada
    pub fn from_config(config: &Mq135Config) -> Mq135Result<Self> {
        Self::with_constants(config.channel, config.constants, config.rzero)
    }

    /// Constantes empíricas em uso
    pub fn constants(&self) -> &Mq135Constants {
        &self.constants
    }

    /// RZERO atual (kΩ)
    pub fn rzero(&self) -> f64 {
        f64::from_bits(self.rzero_bits.load(Ordering::Acquire))
    }

    /// Publica um novo RZERO e devolve o anterior.
    ///
    /// Normalmente recebe o resultado de [`Self::calibrate_reference_resistance`]
    /// ou de [`Self::read_rzero`]; nenhuma das duas grava por conta própria.
    pub fn set_rzero(&self, rzero: f64) -> Mq135Result<f64> {
        check_rzero(rzero)?;
        let previous = f64::from_bits(self.rzero_bits.swap(rzero.to_bits(), Ordering::AcqRel));
        tracing::info!(channel = self.channel, previous, rzero, "RZERO updated");
        Ok(previous)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONVERSÕES
    // ═══════════════════════════════════════════════════════════════════════════

    /// Resistência do sensor (kΩ) a partir de uma amostra bruta
    pub fn raw_to_resistance(&self, sample: RawSample) -> Mq135Result<f64> {
        conversion::raw_to_resistance(&self.constants, sample)
    }

    /// Fator de correção ambiental.
    ///
    /// Não é limitado: valores `<= 0` só geram um aviso no log.
    pub fn correction_factor(&self, temperature: f64, humidity: f64) -> f64 {
        let factor = conversion::correction_factor(&self.constants, temperature, humidity);
        if !(factor > 0.0) || !factor.is_finite() {
            tracing::warn!(
                temperature,
                humidity,
                factor,
                "correction factor outside physical range"
            );
        }
        factor
    }

    /// Resistência corrigida para temperatura e umidade
    pub fn corrected_resistance(
        &self,
        temperature: f64,
        humidity: f64,
        resistance: f64,
    ) -> Mq135Result<f64> {
        conversion::apply_correction(resistance, self.correction_factor(temperature, humidity))
    }

    /// Concentração de CO2 (ppm) para uma resistência
    pub fn resistance_to_ppm(&self, resistance: f64) -> Mq135Result<f64> {
        conversion::resistance_to_ppm(&self.constants, resistance, self.rzero())
    }

    /// Concentração de CO2 (ppm) com correção ambiental
    pub fn corrected_ppm(&self, temperature: f64, humidity: f64, resistance: f64) -> Mq135Result<f64> {
        let corrected = self.corrected_resistance(temperature, humidity, resistance)?;
        self.resistance_to_ppm(corrected)
    }

    /// RZERO que esta resistência teria no ar atmosférico de referência
    pub fn calibrate_reference_resistance(&self, resistance: f64) -> Mq135Result<f64> {
        conversion::reference_resistance(&self.constants, resistance, self.constants.atmospheric_co2)
    }

    /// RZERO com correção ambiental
    pub fn calibrate_corrected_reference_resistance(
        &self,
        temperature: f64,
        humidity: f64,
        resistance: f64,
    ) -> Mq135Result<f64> {
        let corrected = self.corrected_resistance(temperature, humidity, resistance)?;
        self.calibrate_reference_resistance(corrected)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LEITURAS AO VIVO
    // ═══════════════════════════════════════════════════════════════════════════

    /// Lê uma amostra do canal configurado
    pub fn read_raw<S>(&self, source: &mut S) -> Mq135Result<RawSample>
    where
        S: SampleSource + ?Sized,
    {
        Ok(source.read_raw(self.channel)?)
    }

    /// Lê e converte para resistência (kΩ)
    pub fn read_resistance<S>(&self, source: &mut S) -> Mq135Result<f64>
    where
        S: SampleSource + ?Sized,
    {
        let raw = self.read_raw(source)?;
        self.raw_to_resistance(raw)
    }

    /// Lê e estima a concentração (ppm) sem correção
    pub fn read_ppm<S>(&self, source: &mut S) -> Mq135Result<f64>
    where
        S: SampleSource + ?Sized,
    {
        let resistance = self.read_resistance(source)?;
        self.resistance_to_ppm(resistance)
    }

    /// Lê e estima a concentração (ppm) corrigida
    pub fn read_corrected_ppm<S>(&self, source: &mut S, temperature: f64, humidity: f64) -> Mq135Result<f64>
    where
        S: SampleSource + ?Sized,
    {
        let resistance = self.read_resistance(source)?;
        self.corrected_ppm(temperature, humidity, resistance)
    }

    /// Lê e calcula o RZERO no ar de referência (sem gravar)
    pub fn read_rzero<S>(&self, source: &mut S) -> Mq135Result<f64>
    where
        S: SampleSource + ?Sized,
    {
        let resistance = self.read_resistance(source)?;
        self.calibrate_reference_resistance(resistance)
    }

    /// Lê e calcula o RZERO corrigido (sem gravar)
    pub fn read_corrected_rzero<S>(&self, source: &mut S, temperature: f64, humidity: f64) -> Mq135Result<f64>
    where
        S: SampleSource + ?Sized,
    {
        let resistance = self.read_resistance(source)?;
        self.calibrate_corrected_reference_resistance(temperature, humidity, resistance)
    }

    /// Medição completa: uma leitura, resistência e ppm.
    ///
    /// Com `ambient` a resistência registrada já é a corrigida.
    pub fn measure<S>(&self, source: &mut S, ambient: Option<Ambient>) -> Mq135Result<GasReading>
    where
        S: SampleSource + ?Sized,
    {
        let raw = self.read_raw(source)?;
        let mut resistance = self.raw_to_resistance(raw)?;
        if let Some(Ambient { temperature, humidity }) = ambient {
            resistance = self.corrected_resistance(temperature, humidity, resistance)?;
        }
        let ppm = self.resistance_to_ppm(resistance)?;

        tracing::debug!(
            channel = self.channel,
            raw,
            resistance,
            ppm,
            corrected = ambient.is_some(),
            "MQ135 measurement"
        );

        Ok(GasReading {
            channel: self.channel,
            raw,
            resistance,
            ppm,
            ambient,
        })
    }
}

impl Clone for GasConcentrationEstimator {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel,
            constants: self.constants,
            rzero_bits: AtomicU64::new(self.rzero_bits.load(Ordering::Acquire)),
        }
    }
}

impl Default for GasConcentrationEstimator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SensorComponent for GasConcentrationEstimator {
    fn name(&self) -> &str {
        "MQ135"
    }

    fn channel(&self) -> Channel {
        self.channel
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}

fn check_rzero(rzero: f64) -> Mq135Result<()> {
    if !(rzero > 0.0) || !rzero.is_finite() {
        return Err(Mq135Error::InvalidInput(format!(
            "RZERO must be positive and finite, got {rzero}"
        )));
    }
    Ok(())
}
