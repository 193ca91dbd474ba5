//! # Tipos de Procesos y Resultados
//! src/process/types.rs
//!
//! Define las dos formas de datos del simulador, conectadas por el id del
//! proceso:
//! - `Process`: la entrada cruda (id, llegada, ráfaga)
//! - `ProcessResult`: las métricas derivadas por el simulador
//!
//! Y el resumen agregado de una corrida (`RunSummary`).

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, SchedError};

/// Tiempo lógico del simulador (no es tiempo de pared)
pub type Ticks = u64;

/// Número de proceso, asignado 1..n en orden de entrada
pub type ProcessId = u32;

/// Proceso de entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Process {
    /// Crea un proceso validando que la ráfaga sea positiva
    ///
    /// # Ejemplo
    /// ```
    /// use fcfs_sim::Process;
    ///
    /// let p = Process::new(1, 0, 5).unwrap();
    /// assert_eq!(p.burst_time, 5);
    /// assert!(Process::new(2, 0, 0).is_err());
    /// ```
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Result<Self, SchedError> {
        let process = Self {
            id,
            arrival_time,
            burst_time,
        };
        process.validate()?;
        Ok(process)
    }

    /// Crea un proceso a partir de valores con signo, tal como los escribe
    /// un humano. Rechaza llegadas negativas y ráfagas <= 0.
    pub fn from_signed(id: ProcessId, arrival_time: i64, burst_time: i64) -> Result<Self, SchedError> {
        if arrival_time < 0 {
            return Err(InvalidInput::NegativeArrival {
                id,
                value: arrival_time,
            }
            .into());
        }
        if burst_time <= 0 {
            return Err(InvalidInput::NonPositiveBurst {
                id,
                value: burst_time,
            }
            .into());
        }
        Self::new(id, arrival_time as Ticks, burst_time as Ticks)
    }

    /// Verifica los invariantes de un proceso individual
    pub fn validate(&self) -> Result<(), SchedError> {
        if self.id == 0 {
            return Err(InvalidInput::ZeroId.into());
        }
        if self.burst_time == 0 {
            return Err(SchedError::burst(self.id, self.burst_time));
        }
        Ok(())
    }
}

/// Resultado de planificar un proceso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    /// CPU ociosa justo antes de que este proceso empezara
    pub idle_time_before: Ticks,
}

impl ProcessResult {
    /// En FCFS no expropiativo el tiempo de respuesta es igual a la espera
    pub fn response_time(&self) -> Ticks {
        self.waiting_time
    }
}

/// Resumen agregado de una corrida
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub process_count: usize,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    pub total_idle_time: Ticks,
    pub total_burst_time: Ticks,
    /// Instante en que termina el último proceso
    pub makespan: Ticks,
    /// Porcentaje del intervalo [0, makespan] en que la CPU estuvo ocupada
    pub cpu_utilization: f64,
    /// Procesos completados por unidad de tiempo
    pub throughput: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== PROCESS ====================

    #[test]
    fn test_process_new_valid() {
        let p = Process::new(1, 3, 4).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 4);
    }

    #[test]
    fn test_process_zero_burst() {
        let err = Process::new(1, 0, 0).unwrap_err();
        assert!(matches!(
            err.invalid_input(),
            Some(InvalidInput::NonPositiveBurst { id: 1, value: 0 })
        ));
    }

    #[test]
    fn test_process_zero_id() {
        let err = Process::new(0, 0, 1).unwrap_err();
        assert_eq!(err.invalid_input(), Some(&InvalidInput::ZeroId));
    }

    #[test]
    fn test_from_signed_negative_arrival() {
        let err = Process::from_signed(2, -1, 3).unwrap_err();
        assert_eq!(
            err.invalid_input(),
            Some(&InvalidInput::NegativeArrival { id: 2, value: -1 })
        );
    }

    #[test]
    fn test_from_signed_negative_burst() {
        let err = Process::from_signed(2, 0, -3).unwrap_err();
        assert_eq!(
            err.invalid_input(),
            Some(&InvalidInput::NonPositiveBurst { id: 2, value: -3 })
        );
    }

    #[test]
    fn test_from_signed_ok() {
        assert_eq!(Process::from_signed(4, 0, 1).unwrap(), Process::new(4, 0, 1).unwrap());
    }

    // ==================== SERDE ====================

    #[test]
    fn test_process_json_field_names() {
        let p = Process::new(1, 2, 3).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":1,"arrival_time":2,"burst_time":3}"#);
    }

    #[test]
    fn test_response_time_equals_waiting() {
        let r = ProcessResult {
            id: 1,
            arrival_time: 1,
            burst_time: 3,
            start_time: 4,
            completion_time: 7,
            turnaround_time: 6,
            waiting_time: 3,
            idle_time_before: 0,
        };
        assert_eq!(r.response_time(), 3);
    }
}
