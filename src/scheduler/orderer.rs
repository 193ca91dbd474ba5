//! # Ordenador por Llegada
//! src/scheduler/orderer.rs
//!
//! Ordena los procesos por tiempo de llegada ascendente. El orden es
//! estable: dos procesos con la misma llegada conservan su orden relativo
//! de entrada, que es el único desempate que tiene FCFS.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{InvalidInput, SchedError};
use crate::process::Process;

/// Ordena `processes` por llegada ascendente (estable)
///
/// Falla con `InvalidInput` si la lista está vacía, si algún proceso tiene
/// ráfaga 0 o id 0, o si hay ids repetidos.
///
/// # Ejemplo
/// ```
/// use fcfs_sim::{order, Process};
///
/// let input = vec![
///     Process::new(1, 4, 2).unwrap(),
///     Process::new(2, 0, 3).unwrap(),
/// ];
/// let ordered = order(input).unwrap();
/// assert_eq!(ordered[0].id, 2);
/// ```
pub fn order(mut processes: Vec<Process>) -> Result<Vec<Process>, SchedError> {
    validate_all(&processes)?;
    processes.sort_by_key(|p| p.arrival_time);
    Ok(processes)
}

/// Valida la lista completa: no vacía, procesos válidos e ids únicos
pub(crate) fn validate_all(processes: &[Process]) -> Result<(), SchedError> {
    if processes.is_empty() {
        warn!("rejected empty process list");
        return Err(InvalidInput::Empty.into());
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if let Err(e) = process.validate() {
            warn!(id = process.id, error = %e, "rejected process");
            return Err(e);
        }
        if !seen.insert(process.id) {
            warn!(id = process.id, "rejected duplicate process id");
            return Err(InvalidInput::DuplicateId(process.id).into());
        }
    }
    Ok(())
}
