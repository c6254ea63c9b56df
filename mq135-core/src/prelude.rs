//! # Prelude — Re-exportações Convenientes
//!
//! Importação única para drivers e estimadores:
//!
//! ```
//! use mq135_core::prelude::*;
//! ```

pub use crate::traits::{
    AdcResolution,
    Channel,
    RawSample,
    SampleSource,
    SensorComponent,
    SensorError,
};
