//! # Errores del Simulador
//! src/error.rs
//!
//! Taxonomía de errores del núcleo de planificación. El núcleo es cómputo
//! puro y determinista: no hay errores recuperables, cualquier falla se
//! devuelve de inmediato al llamador sin resultados parciales.

use crate::process::{ProcessId, Ticks};

/// Motivo concreto por el que una entrada fue rechazada
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// No hay procesos (n < 1)
    #[error("at least one process is required")]
    Empty,

    /// Tiempo de llegada negativo (solo ocurre antes de convertir a `Ticks`)
    #[error("process {id}: arrival time can't be negative (got {value})")]
    NegativeArrival { id: ProcessId, value: i64 },

    /// Ráfaga nula o negativa
    #[error("process {id}: burst time must be positive (got {value})")]
    NonPositiveBurst { id: ProcessId, value: i64 },

    /// El id 0 está reservado: los ids empiezan en 1
    #[error("process ids must be positive")]
    ZeroId,

    #[error("duplicate process id {0}")]
    DuplicateId(ProcessId),

    /// `simulate` recibió una lista que no está ordenada por llegada
    #[error("process {id} arrives before its predecessor; call order() first")]
    Unordered { id: ProcessId },

    /// El reloj lógico se saldría de `u64`
    #[error("process {id}: logical clock overflow")]
    ClockOverflow { id: ProcessId },
}

/// Error del núcleo de planificación
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl SchedError {
    /// Devuelve el motivo si es un error de entrada
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            SchedError::InvalidInput(reason) => Some(reason),
        }
    }

    /// Helper para construir errores de validación de ráfaga
    pub(crate) fn burst(id: ProcessId, value: Ticks) -> Self {
        SchedError::InvalidInput(InvalidInput::NonPositiveBurst {
            id,
            value: i64::try_from(value).unwrap_or(i64::MAX),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        let err = SchedError::from(InvalidInput::Empty);
        assert_eq!(err.to_string(), "invalid input: at least one process is required");
    }

    #[test]
    fn test_display_burst() {
        let err = SchedError::burst(3, 0);
        assert_eq!(
            err.to_string(),
            "invalid input: process 3: burst time must be positive (got 0)"
        );
    }

    #[test]
    fn test_invalid_input_accessor() {
        let err = SchedError::from(InvalidInput::DuplicateId(2));
        assert_eq!(err.invalid_input(), Some(&InvalidInput::DuplicateId(2)));
    }

    #[test]
    fn test_negative_arrival_message() {
        let reason = InvalidInput::NegativeArrival { id: 1, value: -4 };
        assert!(reason.to_string().contains("can't be negative"));
        assert!(reason.to_string().contains("-4"));
    }
}
