//! # FCFS Simulator
//! src/lib.rs
//!
//! Simulador de planificación de CPU First-Come-First-Served (FCFS) para
//! demostrar conceptos de sistemas operativos: tiempo de espera,
//! turnaround, tiempo ocioso de la CPU y orden de llegada.
//!
//! ## Arquitectura
//!
//! El núcleo está dividido en:
//! - `process`: modelo de datos (procesos, resultados, resumen)
//! - `scheduler`: orden por llegada y simulación de la línea de tiempo
//! - `metrics`: acumulación de totales y promedios
//! - `error`: errores de validación del núcleo
//!
//! Y los colaboradores que lo rodean:
//! - `input`: obtención de procesos (consola, CLI, JSON, aleatorio)
//! - `report`: tabla, JSON y diagrama de Gantt
//! - `config`: argumentos CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```
//! use fcfs_sim::{order, simulate, Process};
//!
//! let processes = vec![
//!     Process::new(1, 0, 4).unwrap(),
//!     Process::new(2, 1, 3).unwrap(),
//! ];
//! let ordered = order(processes).unwrap();
//! let (results, summary) = simulate(&ordered).unwrap();
//!
//! assert_eq!(results[1].completion_time, 7);
//! assert_eq!(summary.average_turnaround_time, 5.0);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod process;
pub mod report;
pub mod scheduler;

pub use error::{InvalidInput, SchedError};
pub use process::{Process, ProcessId, ProcessResult, RunSummary, Ticks};
pub use scheduler::{order, run, segments, simulate, TimelineSegment};
