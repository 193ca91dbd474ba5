//! # Entrada de Procesos
//! src/input/mod.rs
//!
//! Colaborador externo del núcleo: obtiene la lista de procesos ya
//! validada desde alguna fuente y se la entrega al planificador.
//!
//! Fuentes soportadas:
//! - `prompt`: interactiva por stdin, reintenta hasta recibir valores válidos
//! - `parse`: especificaciones `LLEGADA:RÁFAGA` desde la línea de comandos
//! - `file`: archivo JSON
//! - `random`: carga de trabajo aleatoria reproducible con semilla

pub mod file;
pub mod parse;
pub mod prompt;
pub mod random;

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::SchedError;
use crate::process::{Process, Ticks};

/// Error al obtener procesos de una fuente
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Texto que no se pudo interpretar como proceso
    #[error("can't parse '{value}': {reason}")]
    Parse { value: String, reason: String },

    /// La entrada terminó antes de completar los datos
    #[error("input ended before all processes were read")]
    UnexpectedEof,

    #[error(transparent)]
    Invalid(#[from] SchedError),
}

/// De dónde se leen los procesos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Preguntar por stdin, proceso por proceso
    Interactive,

    /// Archivo JSON
    File(PathBuf),

    /// Valores `LLEGADA:RÁFAGA` en orden de entrada
    Specs(Vec<String>),

    /// Generación aleatoria
    Random {
        count: usize,
        seed: Option<u64>,
        max_arrival: Ticks,
        max_burst: Ticks,
    },
}

impl InputSource {
    /// Carga los procesos de la fuente
    ///
    /// La fuente interactiva usa stdin/stdout del proceso.
    pub fn load(&self) -> Result<Vec<Process>, InputError> {
        let processes = match self {
            InputSource::Interactive => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                prompt::read_processes(&mut stdin.lock(), &mut stdout.lock())?
            }
            InputSource::File(path) => file::load_processes(path)?,
            InputSource::Specs(specs) => parse::parse_process_specs(specs)?,
            InputSource::Random {
                count,
                seed,
                max_arrival,
                max_burst,
            } => random::generate(*count, *seed, *max_arrival, *max_burst)?,
        };

        debug!(source = ?self, count = processes.len(), "loaded processes");
        Ok(processes)
    }
}
