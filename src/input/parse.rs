//! # Parsing de Procesos
//! src/input/parse.rs
//!
//! Interpreta procesos escritos como `LLEGADA:RÁFAGA` (ej: `0:5`).
//! Los ids se asignan 1..n según la posición en la lista.

use crate::process::{Process, ProcessId};

use super::InputError;

/// Parsea un proceso `LLEGADA:RÁFAGA` con el id dado
///
/// # Ejemplo
/// ```
/// use fcfs_sim::input::parse::parse_process_spec;
///
/// let p = parse_process_spec(1, "2:3").unwrap();
/// assert_eq!((p.arrival_time, p.burst_time), (2, 3));
/// ```
pub fn parse_process_spec(id: ProcessId, spec: &str) -> Result<Process, InputError> {
    let parse_error = |reason: &str| InputError::Parse {
        value: spec.to_string(),
        reason: reason.to_string(),
    };

    let (arrival, burst) = spec
        .split_once(':')
        .ok_or_else(|| parse_error("expected ARRIVAL:BURST"))?;

    let arrival: i64 = arrival
        .trim()
        .parse()
        .map_err(|_| parse_error("arrival time is not an integer"))?;
    let burst: i64 = burst
        .trim()
        .parse()
        .map_err(|_| parse_error("burst time is not an integer"))?;

    Ok(Process::from_signed(id, arrival, burst)?)
}

/// Parsea una lista de especificaciones asignando ids por posición
pub fn parse_process_specs<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Process>, InputError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| -> Result<Process, InputError> {
            let id = ProcessId::try_from(index + 1).map_err(|_| InputError::Parse {
                value: spec.as_ref().to_string(),
                reason: "too many processes".to_string(),
            })?;
            parse_process_spec(id, spec.as_ref())
        })
        .collect()
}
