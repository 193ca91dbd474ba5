//! # Carga desde Archivo
//! src/input/file.rs
//!
//! Lee procesos de un archivo JSON con un arreglo de objetos:
//!
//! ```json
//! [
//!   { "arrival_time": 0, "burst_time": 4 },
//!   { "id": 7, "arrival_time": 1, "burst_time": 3 }
//! ]
//! ```
//!
//! Si un objeto no trae `id`, se usa su posición en el arreglo (1..n).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::process::{Process, ProcessId};

use super::InputError;

/// Entrada cruda del archivo, antes de validar
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessEntry {
    id: Option<ProcessId>,
    arrival_time: i64,
    burst_time: i64,
}

/// Carga y valida los procesos de un archivo JSON
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, InputError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_json(&content)
}

/// Parsea el contenido JSON ya leído
pub fn parse_json(content: &str) -> Result<Vec<Process>, InputError> {
    let entries: Vec<ProcessEntry> = serde_json::from_str(content)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| -> Result<Process, InputError> {
            let id = match entry.id {
                Some(id) => id,
                None => ProcessId::try_from(index + 1).map_err(|_| InputError::Parse {
                    value: format!("entry #{}", index + 1),
                    reason: "too many processes".to_string(),
                })?,
            };
            Ok(Process::from_signed(id, entry.arrival_time, entry.burst_time)?)
        })
        .collect()
}
