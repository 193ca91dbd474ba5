//! # Sistema de Métricas
//! src/metrics/mod.rs
//!
//! Agregación de las métricas de planificación:
//! - Espera y turnaround promedio
//! - Tiempo ocioso total
//! - Utilización de CPU y throughput

pub mod collector;

pub use collector::RunTotals;
