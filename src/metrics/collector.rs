//! # Acumulador de Métricas
//! src/metrics/collector.rs
//!
//! Acumula los totales de una corrida mientras el simulador recorre la
//! línea de tiempo y al final los reduce a un `RunSummary`.
//!
//! Pertenece a una sola llamada de `simulate`: no se comparte entre
//! corridas ni entre threads.

use crate::process::{ProcessResult, RunSummary, Ticks};

/// Totales parciales de una corrida
#[derive(Debug, Default, Clone)]
pub struct RunTotals {
    count: usize,
    total_waiting: u128,
    total_turnaround: u128,
    total_idle: Ticks,
    total_burst: Ticks,
    makespan: Ticks,
}

impl RunTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un proceso ya planificado
    pub fn record(&mut self, result: &ProcessResult) {
        self.count += 1;
        self.total_waiting += u128::from(result.waiting_time);
        self.total_turnaround += u128::from(result.turnaround_time);
        self.total_idle = self.total_idle.saturating_add(result.idle_time_before);
        self.total_burst = self.total_burst.saturating_add(result.burst_time);
        self.makespan = self.makespan.max(result.completion_time);
    }

    pub fn total_idle(&self) -> Ticks {
        self.total_idle
    }

    /// Calcula promedios y derivados
    ///
    /// Con cero procesos los promedios quedan en NaN en lugar de dividir
    /// por cero; `simulate` nunca llega aquí sin procesos.
    pub fn summarize(&self) -> RunSummary {
        let n = self.count as f64;
        let average = |total: u128| {
            if self.count == 0 {
                f64::NAN
            } else {
                total as f64 / n
            }
        };

        let (cpu_utilization, throughput) = if self.makespan == 0 {
            (0.0, 0.0)
        } else {
            let makespan = self.makespan as f64;
            (self.total_burst as f64 / makespan * 100.0, n / makespan)
        };

        RunSummary {
            process_count: self.count,
            average_waiting_time: average(self.total_waiting),
            average_turnaround_time: average(self.total_turnaround),
            average_response_time: average(self.total_waiting),
            total_idle_time: self.total_idle,
            total_burst_time: self.total_burst,
            makespan: self.makespan,
            cpu_utilization,
            throughput,
        }
    }
}
