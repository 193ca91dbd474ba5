//! # Reporte en Tabla
//! src/report/table.rs
//!
//! Formato de texto clásico: una fila por proceso en orden de ejecución
//! y al final los promedios (2 decimales) y el tiempo ocioso total.

use std::fmt::Write;

use crate::process::{ProcessResult, RunSummary};

const HEADER: &str = "Process number   Arrival time   Burst time   Completion time   Turnaround time   Waiting time   Idle time";

/// Renderiza la tabla completa
///
/// # Ejemplo
/// ```
/// use fcfs_sim::{run, Process};
/// use fcfs_sim::report::table;
///
/// let (results, summary) = run(vec![Process::new(1, 0, 5).unwrap()]).unwrap();
/// let text = table::render(&results, &summary);
/// assert!(text.contains("Average Waiting Time: 0.00"));
/// ```
pub fn render(results: &[ProcessResult], summary: &RunSummary) -> String {
    let rule = "-".repeat(HEADER.len());
    let mut out = String::new();

    // write! sobre String no falla
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "{}", rule);
    for r in results {
        let _ = writeln!(out, "{}", row(r));
    }
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Average Waiting Time: {:.2}", summary.average_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", summary.average_turnaround_time);
    let _ = writeln!(out, "Total Idle Time: {}", summary.total_idle_time);
    let _ = writeln!(out, "Average Response Time: {:.2}", summary.average_response_time);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", summary.cpu_utilization);
    let _ = writeln!(out, "Throughput: {:.4} processes/tick", summary.throughput);

    out
}

/// Una fila de la tabla, columnas alineadas a la izquierda
fn row(r: &ProcessResult) -> String {
    format!(
        "{:<15}{:<15}{:<12}{:<17}{:<18}{:<15}{:<10}",
        r.id,
        r.arrival_time,
        r.burst_time,
        r.completion_time,
        r.turnaround_time,
        r.waiting_time,
        r.idle_time_before
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;
    use crate::scheduler::run;

    #[test]
    fn test_row_layout() {
        let (results, _) = run(vec![Process::new(1, 0, 5).unwrap()]).unwrap();
        assert_eq!(
            row(&results[0]),
            "1              0              5           5                5                 0              0"
        );
    }

    #[test]
    fn test_render_summary_lines() {
        let (results, summary) = run(vec![
            Process::new(1, 0, 4).unwrap(),
            Process::new(2, 1, 3).unwrap(),
        ])
        .unwrap();
        let text = render(&results, &summary);

        assert!(text.starts_with(HEADER));
        assert!(text.contains("Average Waiting Time: 1.50\n"));
        assert!(text.contains("Average Turnaround Time: 5.00\n"));
        assert!(text.contains("Total Idle Time: 0\n"));
        assert!(text.contains("CPU Utilization: 100.00%"));
    }

    #[test]
    fn test_render_rows_in_simulated_order() {
        let (results, summary) = run(vec![
            Process::new(1, 9, 1).unwrap(),
            Process::new(2, 0, 1).unwrap(),
        ])
        .unwrap();
        let text = render(&results, &summary);
        let rows: Vec<&str> = text.lines().skip(2).take(2).collect();

        assert!(rows[0].starts_with("2 "));
        assert!(rows[1].starts_with("1 "));
        assert!(text.contains("Total Idle Time: 8\n"));
    }
}
