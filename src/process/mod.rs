//! # Modelo de Datos
//! src/process/mod.rs
//!
//! Procesos de entrada, resultados por proceso y resumen de la corrida.

pub mod types;

pub use types::{Process, ProcessId, ProcessResult, RunSummary, Ticks};
