//! # Reportes
//! src/report/mod.rs
//!
//! Colaborador externo que consume los resultados del planificador:
//! - `table`: tabla de texto con promedios
//! - `json`: documento JSON
//! - `gantt`: línea de tiempo de la CPU

pub mod gantt;
pub mod json;
pub mod table;

use serde::{Deserialize, Serialize};

/// Formato de salida del reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}
