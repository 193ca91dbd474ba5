//! # Carga de Trabajo Aleatoria
//! src/input/random.rs
//!
//! Genera procesos aleatorios para experimentar sin tener que escribirlos.
//! Con la misma semilla se obtiene siempre la misma carga.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{InvalidInput, SchedError};
use crate::process::{Process, ProcessId, Ticks};

use super::InputError;

/// Llegada máxima por defecto
pub const DEFAULT_MAX_ARRIVAL: Ticks = 10;

/// Ráfaga máxima por defecto (ráfagas en 1..=15)
pub const DEFAULT_MAX_BURST: Ticks = 15;

/// Genera `count` procesos con llegada en `0..=max_arrival` y ráfaga en
/// `1..=max_burst`. Los ids van de 1 a `count`.
///
/// Sin semilla se usa entropía del sistema.
pub fn generate(
    count: usize,
    seed: Option<u64>,
    max_arrival: Ticks,
    max_burst: Ticks,
) -> Result<Vec<Process>, InputError> {
    if count == 0 {
        return Err(SchedError::from(InvalidInput::Empty).into());
    }
    if max_burst == 0 {
        return Err(SchedError::burst(1, max_burst).into());
    }
    let last_id = ProcessId::try_from(count).map_err(|_| InputError::Parse {
        value: count.to_string(),
        reason: "too many processes".to_string(),
    })?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(count, ?seed, max_arrival, max_burst, "generating random workload");

    (1..=last_id)
        .map(|id| {
            let arrival = rng.gen_range(0..=max_arrival);
            let burst = rng.gen_range(1..=max_burst);
            Process::new(id, arrival, burst).map_err(InputError::from)
        })
        .collect()
}
