//! Erros específicos do estimador MQ135

use mq135_core::traits::SensorError;
use thiserror::Error;

pub type Mq135Result<T> = Result<T, Mq135Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Mq135Error {
    /// Amostra bruta zero ou fator de correção zero
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Resistência ou RZERO não positivos, amostra fora da faixa
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Constantes degeneradas (ex.: PARB = 0)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Falha do conversor externo
    #[error("Sample source failed: {0}")]
    Source(#[from] SensorError),
}

// Conversão para SensorError do core
impl From<Mq135Error> for SensorError {
    fn from(err: Mq135Error) -> Self {
        match err {
            Mq135Error::Source(inner) => inner,
            Mq135Error::InvalidConfiguration(msg) => SensorError::InvalidConfig(msg),
            other => SensorError::ReadFailed(other.to_string()),
        }
    }
}
