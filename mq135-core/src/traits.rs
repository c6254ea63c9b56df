//! # 🎯 Traits — Abstrações de Sensores Analógicos
//!
//! Este módulo define os traits que separam a matemática dos sensores do
//! hardware que os lê:
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`SensorComponent`] | Identidade do componente (nome, canal, versão) |
//! | [`SampleSource`] | Conversor analógico-digital externo (`read_raw`) |
//!
//! ## Princípio de Design
//!
//! > *"Trait no core, implementação no módulo."*
//!
//! O driver do conversor (barramento, endereço, ganho) nunca vive aqui: ele é
//! injetado no ponto de uso por quem chama o estimador.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// ═══════════════════════════════════════════════════════════════════════════════
// TIPOS COMUNS
// ═══════════════════════════════════════════════════════════════════════════════

/// Identificador do canal analógico (entrada do conversor)
pub type Channel = u8;

/// Amostra bruta do conversor, em unidades do ADC
///
/// Conversores com sinal (ex.: 16 bits, fundo de escala 32767) podem
/// devolver valores negativos; por isso o tipo é assinado.
pub type RawSample = i32;

/// Resolução típica de conversores usados com sensores MQ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdcResolution {
    /// 10 bits sem sinal (0..=1023)
    Bits10,
    /// 12 bits sem sinal (0..=4095)
    Bits12,
    /// 16 bits com sinal (0..=32767 em modo single-ended)
    Signed16,
}

impl AdcResolution {
    /// Valor de fundo de escala do conversor
    pub fn full_scale(&self) -> RawSample {
        match self {
            AdcResolution::Bits10 => 1023,
            AdcResolution::Bits12 => 4095,
            AdcResolution::Signed16 => 32767,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAIT BASE
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait base para qualquer componente que leia um canal analógico.
///
/// # Exemplo
///
/// ```
/// use mq135_core::traits::{Channel, SensorComponent};
///
/// #[derive(Debug)]
/// struct Thermistor;
///
/// impl SensorComponent for Thermistor {
///     fn name(&self) -> &str { "ntc-10k" }
///     fn channel(&self) -> Channel { 1 }
/// }
///
/// assert!(Thermistor.is_ready());
/// ```
pub trait SensorComponent: Send + Sync + Debug {
    /// Nome único do componente (para logs e debug)
    fn name(&self) -> &str;

    /// Canal analógico lido por este componente
    fn channel(&self) -> Channel;

    /// Versão do componente
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// Componente está pronto para uso?
    fn is_ready(&self) -> bool {
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FONTE DE AMOSTRAS — Conversor externo
// ═══════════════════════════════════════════════════════════════════════════════

/// Erro de sensor / conversor
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor not initialized")]
    NotInitialized,
    #[error("Sensor read failed: {0}")]
    ReadFailed(String),
    #[error("Invalid channel: {0}")]
    InvalidChannel(Channel),
    #[error("Configuration invalid: {0}")]
    InvalidConfig(String),
    #[error("Hardware error: {0}")]
    Hardware(String),
    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

/// Capacidade externa de leitura do conversor analógico-digital.
///
/// A leitura é bloqueante e pertence inteiramente ao driver. Quem implementa
/// decide como tratar barramento, endereço e ganho.
///
/// Closures `FnMut(Channel) -> Result<RawSample, SensorError>` já implementam
/// o trait, o que permite passar a chamada do driver diretamente:
///
/// ```
/// use mq135_core::traits::{Channel, SampleSource, SensorError};
///
/// let mut source = |_channel: Channel| Ok::<_, SensorError>(16000);
/// assert_eq!(source.read_raw(0), Ok(16000));
/// ```
pub trait SampleSource {
    /// Lê uma amostra bruta do canal
    fn read_raw(&mut self, channel: Channel) -> Result<RawSample, SensorError>;
}

impl<F> SampleSource for F
where
    F: FnMut(Channel) -> Result<RawSample, SensorError>,
{
    fn read_raw(&mut self, channel: Channel) -> Result<RawSample, SensorError> {
        self(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedBoard {
        samples: [RawSample; 4],
    }

    impl SampleSource for FixedBoard {
        fn read_raw(&mut self, channel: Channel) -> Result<RawSample, SensorError> {
            self.samples
                .get(channel as usize)
                .copied()
                .ok_or(SensorError::InvalidChannel(channel))
        }
    }

    #[test]
    fn test_adc_resolution_full_scale() {
        assert_eq!(AdcResolution::Bits10.full_scale(), 1023);
        assert_eq!(AdcResolution::Bits12.full_scale(), 4095);
        assert_eq!(AdcResolution::Signed16.full_scale(), 32767);
    }

    #[test]
    fn test_struct_source() {
        let mut board = FixedBoard {
            samples: [100, 200, 300, 400],
        };
        assert_eq!(board.read_raw(2), Ok(300));
        assert_eq!(board.read_raw(7), Err(SensorError::InvalidChannel(7)));
    }

    #[test]
    fn test_closure_source_receives_channel() {
        let mut seen = Vec::new();
        let mut source = |channel: Channel| {
            seen.push(channel);
            Ok::<_, SensorError>(1234)
        };
        assert_eq!(source.read_raw(3), Ok(1234));
        assert_eq!(source.read_raw(1), Ok(1234));
        drop(source);
        assert_eq!(seen, vec![3, 1]);
    }

    #[test]
    fn test_closure_source_propagates_errors() {
        let mut source = |_: Channel| Err::<RawSample, _>(SensorError::Timeout(50));
        assert_eq!(source.read_raw(0), Err(SensorError::Timeout(50)));
    }

    #[test]
    fn test_sensor_error_display() {
        assert_eq!(SensorError::Timeout(5000).to_string(), "Timeout after 5000ms");
        assert_eq!(SensorError::InvalidChannel(4).to_string(), "Invalid channel: 4");
    }
}
