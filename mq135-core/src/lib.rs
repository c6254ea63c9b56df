//! # mq135-core — Abstrações de Sensores Analógicos
//!
//! Define o que um estimador precisa saber sobre o hardware, e nada mais:
//!
//! - [`traits::SampleSource`] — leitura bruta de um canal do conversor
//!   analógico-digital, fornecida pelo driver externo
//! - [`traits::SensorComponent`] — identidade do componente (nome, canal)
//! - [`traits::SensorError`] — falhas do driver
//! - [`config`] — overrides por variáveis de ambiente / `.env`
//!
//! ## Exemplo
//!
//! ```
//! use mq135_core::prelude::*;
//!
//! fn read_twice<S: SampleSource>(source: &mut S, channel: Channel) -> Result<RawSample, SensorError> {
//!     let first = source.read_raw(channel)?;
//!     let second = source.read_raw(channel)?;
//!     Ok((first + second) / 2)
//! }
//!
//! let mut adc = |_: Channel| Ok::<_, SensorError>(2048);
//! assert_eq!(read_twice(&mut adc, 0).unwrap(), 2048);
//! ```

pub mod config;
pub mod prelude;
pub mod traits;

pub use traits::{AdcResolution, Channel, RawSample, SampleSource, SensorComponent, SensorError};
