//! # Reporte JSON
//! src/report/json.rs
//!
//! Documento JSON con los resultados, el resumen y la línea de tiempo,
//! pensado para que otras herramientas consuman la simulación.

use serde::{Deserialize, Serialize};

use crate::process::{ProcessResult, RunSummary};
use crate::scheduler::TimelineSegment;

/// Documento completo de una corrida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub algorithm: String,
    pub results: Vec<ProcessResult>,
    pub summary: RunSummary,
    pub timeline: Vec<TimelineSegment>,
}

impl Report {
    pub fn new(results: &[ProcessResult], summary: &RunSummary, timeline: &[TimelineSegment]) -> Self {
        Self {
            algorithm: "fcfs".to_string(),
            results: results.to_vec(),
            summary: *summary,
            timeline: timeline.to_vec(),
        }
    }
}

/// Serializa la corrida como JSON legible
pub fn render(
    results: &[ProcessResult],
    summary: &RunSummary,
    timeline: &[TimelineSegment],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report::new(results, summary, timeline))
}
