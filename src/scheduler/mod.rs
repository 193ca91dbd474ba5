//! # Planificador FCFS
//! src/scheduler/mod.rs
//!
//! El núcleo del simulador, compuesto por dos etapas secuenciales:
//!
//! ```text
//! procesos crudos → order() → procesos ordenados → simulate() → (resultados, resumen)
//! ```
//!
//! - `orderer`: orden estable por tiempo de llegada
//! - `timeline`: reloj lógico y métricas por proceso
//!
//! Todo es cómputo puro, sin I/O ni estado compartido entre corridas.

pub mod orderer;
pub mod timeline;

pub use orderer::order;
pub use timeline::{segments, simulate, TimelineSegment};

use crate::error::SchedError;
use crate::process::{Process, ProcessResult, RunSummary};

/// Ordena y simula en un solo paso: `simulate(order(processes))`
pub fn run(processes: Vec<Process>) -> Result<(Vec<ProcessResult>, RunSummary), SchedError> {
    let ordered = order(processes)?;
    simulate(&ordered)
}
