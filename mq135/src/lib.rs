//! # mq135 — Estimativa de CO2 com sensor resistivo MQ135
//!
//! Converte uma leitura analógica do sensor em concentração de CO2 (ppm),
//! com correção opcional por temperatura e umidade, e calcula o RZERO de uma
//! unidade a partir de uma leitura em ar de concentração conhecida.
//!
//! ## Cadeia de conversão
//!
//! 1. amostra bruta → resistência do sensor (divisor com o resistor de carga)
//! 2. temperatura/umidade → fator de correção empírico
//! 3. resistência / fator → resistência corrigida
//! 4. resistência / RZERO → ppm pela curva de potência `PARA·x^(−PARB)`
//! 5. inverso de (4): resistência em ar de referência → RZERO
//!
//! ## Limitação conhecida
//!
//! A curva de correção ambiental segue o datasheet, cujos gráficos são
//! duvidosos. Ela é aplicada literalmente e pode produzir fatores nulos ou
//! negativos em condições extremas; nada é limitado.
//!
//! ## Exemplo
//!
//! ```
//! use mq135::{Ambient, GasConcentrationEstimator};
//! use mq135_core::prelude::*;
//!
//! # fn main() -> Result<(), mq135::Mq135Error> {
//! let estimator = GasConcentrationEstimator::new(0);
//! let mut adc = |_: Channel| Ok::<_, SensorError>(16000);
//!
//! // Calibração ao ar livre: o valor só é usado se quem chama gravar
//! let rzero = estimator.read_rzero(&mut adc)?;
//! estimator.set_rzero(rzero)?;
//!
//! let reading = estimator.measure(&mut adc, Some(Ambient::new(21.0, 33.0)))?;
//! assert!(reading.ppm > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conversion;
pub mod error;
pub mod estimator;
pub mod types;

pub use config::Mq135Config;
pub use error::{Mq135Error, Mq135Result};
pub use estimator::GasConcentrationEstimator;
pub use types::{Ambient, GasReading, Mq135Constants};

// Re-export core types
pub use mq135_core::prelude::*;
