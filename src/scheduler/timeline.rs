//! # Simulador de Línea de Tiempo
//! src/scheduler/timeline.rs
//!
//! Recorre la lista ordenada una sola vez manteniendo un reloj lógico
//! (`cumulative_time`): el instante más temprano en que la CPU queda libre.
//!
//! Para cada proceso:
//! 1. `start = max(llegada, reloj)`
//! 2. Si la llegada es posterior al reloj, el hueco es tiempo ocioso
//! 3. `completion = start + ráfaga` y el reloj avanza hasta ahí
//! 4. `waiting = start - llegada`, `turnaround = completion - llegada`
//!
//! Una llegada exactamente igual al reloj no genera tiempo ocioso.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{InvalidInput, SchedError};
use crate::metrics::RunTotals;
use crate::process::{Process, ProcessId, ProcessResult, RunSummary, Ticks};

use super::orderer::validate_all;

/// Simula FCFS sobre procesos ya ordenados por llegada
///
/// Revalida la entrada y falla con `InvalidInput` si está vacía, si algún
/// proceso es inválido o si la lista no está ordenada.
///
/// # Ejemplo
/// ```
/// use fcfs_sim::{order, simulate, Process};
///
/// let ordered = order(vec![
///     Process::new(1, 0, 4).unwrap(),
///     Process::new(2, 1, 3).unwrap(),
/// ]).unwrap();
/// let (results, summary) = simulate(&ordered).unwrap();
/// assert_eq!(results[1].waiting_time, 3);
/// assert_eq!(summary.average_waiting_time, 1.5);
/// ```
pub fn simulate(ordered: &[Process]) -> Result<(Vec<ProcessResult>, RunSummary), SchedError> {
    validate_all(ordered)?;

    let mut cumulative_time: Ticks = 0;
    let mut totals = RunTotals::new();
    let mut results = Vec::with_capacity(ordered.len());
    let mut previous_arrival: Ticks = 0;

    for process in ordered {
        if process.arrival_time < previous_arrival {
            warn!(id = process.id, "process list is not ordered by arrival");
            return Err(InvalidInput::Unordered { id: process.id }.into());
        }
        previous_arrival = process.arrival_time;

        let start_time = process.arrival_time.max(cumulative_time);
        let idle_time_before = process.arrival_time.saturating_sub(cumulative_time);

        let completion_time = start_time
            .checked_add(process.burst_time)
            .ok_or(InvalidInput::ClockOverflow { id: process.id })?;
        cumulative_time = completion_time;

        let result = ProcessResult {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time: completion_time - process.arrival_time,
            waiting_time: start_time - process.arrival_time,
            idle_time_before,
        };

        debug!(
            id = result.id,
            start = result.start_time,
            completion = result.completion_time,
            waiting = result.waiting_time,
            idle = result.idle_time_before,
            "dispatched process"
        );

        totals.record(&result);
        results.push(result);
    }

    let summary = totals.summarize();
    info!(
        processes = summary.process_count,
        avg_waiting = summary.average_waiting_time,
        avg_turnaround = summary.average_turnaround_time,
        total_idle = summary.total_idle_time,
        "simulation finished"
    );

    Ok((results, summary))
}

/// Tramo de la línea de tiempo de la CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimelineSegment {
    /// CPU sin proceso listo
    Idle { start: Ticks, end: Ticks },

    /// CPU ejecutando un proceso
    Run { id: ProcessId, start: Ticks, end: Ticks },
}

impl TimelineSegment {
    pub fn start(&self) -> Ticks {
        match *self {
            TimelineSegment::Idle { start, .. } | TimelineSegment::Run { start, .. } => start,
        }
    }

    pub fn end(&self) -> Ticks {
        match *self {
            TimelineSegment::Idle { end, .. } | TimelineSegment::Run { end, .. } => end,
        }
    }

    pub fn len(&self) -> Ticks {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Construye la línea de tiempo (diagrama de Gantt) a partir de los
/// resultados en orden simulado. Los tramos son contiguos desde 0 hasta la
/// finalización del último proceso.
pub fn segments(results: &[ProcessResult]) -> Vec<TimelineSegment> {
    let mut timeline = Vec::with_capacity(results.len() * 2);

    for result in results {
        if result.idle_time_before > 0 {
            timeline.push(TimelineSegment::Idle {
                start: result.start_time - result.idle_time_before,
                end: result.start_time,
            });
        }
        timeline.push(TimelineSegment::Run {
            id: result.id,
            start: result.start_time,
            end: result.completion_time,
        });
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: u64, burst: u64) -> Process {
        Process::new(id, arrival, burst).unwrap()
    }

    // ==================== SIMULATE ====================

    #[test]
    fn test_single_process() {
        let (results, summary) = simulate(&[p(1, 0, 5)]).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start_time, 0);
        assert_eq!(results[0].completion_time, 5);
        assert_eq!(results[0].turnaround_time, 5);
        assert_eq!(results[0].waiting_time, 0);
        assert_eq!(results[0].idle_time_before, 0);
        assert_eq!(summary.average_waiting_time, 0.0);
        assert_eq!(summary.average_turnaround_time, 5.0);
        assert_eq!(summary.total_idle_time, 0);
    }

    #[test]
    fn test_idle_before_first_arrival() {
        let (results, summary) = simulate(&[p(1, 2, 3)]).unwrap();
        assert_eq!(results[0].idle_time_before, 2);
        assert_eq!(results[0].start_time, 2);
        assert_eq!(results[0].completion_time, 5);
        assert_eq!(results[0].waiting_time, 0);
        assert_eq!(results[0].turnaround_time, 3);
        assert_eq!(summary.total_idle_time, 2);
    }

    #[test]
    fn test_exact_arrival_is_not_idle() {
        let (results, summary) = simulate(&[p(1, 0, 3), p(2, 3, 2)]).unwrap();
        assert_eq!(results[1].idle_time_before, 0);
        assert_eq!(results[1].start_time, 3);
        assert_eq!(results[1].waiting_time, 0);
        assert_eq!(summary.total_idle_time, 0);
    }

    #[test]
    fn test_ties_run_in_given_order() {
        let (results, _) = simulate(&[p(1, 0, 2), p(2, 0, 3), p(3, 0, 1)]).unwrap();
        let starts: Vec<_> = results.iter().map(|r| (r.id, r.start_time)).collect();
        assert_eq!(starts, vec![(1, 0), (2, 2), (3, 5)]);
        assert!(results.iter().all(|r| r.idle_time_before == 0));
    }

    #[test]
    fn test_repeated_arrivals_with_gaps() {
        let input = [p(1, 1, 2), p(2, 1, 1), p(3, 6, 2), p(4, 6, 3), p(5, 20, 1)];
        let (results, summary) = simulate(&input).unwrap();

        let idle: Vec<_> = results.iter().map(|r| r.idle_time_before).collect();
        assert_eq!(idle, vec![1, 0, 2, 0, 9]);

        let completion: Vec<_> = results.iter().map(|r| r.completion_time).collect();
        assert_eq!(completion, vec![3, 4, 8, 11, 21]);

        assert_eq!(results[3].waiting_time, 2);
        assert_eq!(summary.total_idle_time, 12);
        assert_eq!(summary.makespan, 21);
    }

    // ==================== VALIDATION ====================

    #[test]
    fn test_simulate_empty() {
        let err = simulate(&[]).unwrap_err();
        assert_eq!(err.invalid_input(), Some(&InvalidInput::Empty));
    }

    #[test]
    fn test_simulate_rejects_unordered() {
        let err = simulate(&[p(1, 5, 1), p(2, 0, 1)]).unwrap_err();
        assert_eq!(err.invalid_input(), Some(&InvalidInput::Unordered { id: 2 }));
    }

    #[test]
    fn test_simulate_rejects_zero_burst() {
        let bad = Process {
            id: 1,
            arrival_time: 0,
            burst_time: 0,
        };
        assert!(simulate(&[bad]).is_err());
    }

    #[test]
    fn test_simulate_clock_overflow() {
        let err = simulate(&[p(1, u64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(err.invalid_input(), Some(&InvalidInput::ClockOverflow { id: 1 }));
    }

    // ==================== SEGMENTS ====================

    #[test]
    fn test_segments_with_gap() {
        let (results, _) = simulate(&[p(1, 0, 2), p(2, 5, 2)]).unwrap();
        assert_eq!(
            segments(&results),
            vec![
                TimelineSegment::Run { id: 1, start: 0, end: 2 },
                TimelineSegment::Idle { start: 2, end: 5 },
                TimelineSegment::Run { id: 2, start: 5, end: 7 },
            ]
        );
    }

    #[test]
    fn test_segments_are_contiguous() {
        let (results, summary) = simulate(&[p(1, 3, 2), p(2, 4, 1), p(3, 9, 4)]).unwrap();
        let timeline = segments(&results);

        assert_eq!(timeline.first().map(|s| s.start()), Some(0));
        assert_eq!(timeline.last().map(|s| s.end()), Some(summary.makespan));
        for pair in timeline.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        let idle: Ticks = timeline
            .iter()
            .filter(|s| matches!(s, TimelineSegment::Idle { .. }))
            .map(|s| s.len())
            .sum();
        assert_eq!(idle, summary.total_idle_time);
    }

    #[test]
    fn test_segment_json_tag() {
        let json = serde_json::to_string(&TimelineSegment::Idle { start: 0, end: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"idle","start":0,"end":2}"#);
    }
}
