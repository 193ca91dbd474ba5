//! # Configuración del Simulador
//! src/config.rs
//!
//! Este módulo define la configuración del simulador con soporte completo
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! # Modo interactivo (pregunta por stdin)
//! ./fcfs_sim
//!
//! # Procesos en la línea de comandos (LLEGADA:RÁFAGA)
//! ./fcfs_sim -p 0:4 -p 1:3 --gantt
//!
//! # Carga aleatoria reproducible en JSON
//! ./fcfs_sim --random 10 --seed 42 --format json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FCFS_INPUT=procesos.json FCFS_FORMAT=json ./fcfs_sim
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::input::random::{DEFAULT_MAX_ARRIVAL, DEFAULT_MAX_BURST};
use crate::input::InputSource;
use crate::process::Ticks;
use crate::report::ReportFormat;

/// Configuración del simulador FCFS
#[derive(Debug, Clone, Parser)]
#[command(name = "fcfs_sim")]
#[command(about = "Simulador de planificación FCFS para Principios de Sistemas Operativos")]
#[command(version = "0.1.0")]
pub struct Config {
    // === Fuentes de procesos ===

    /// Archivo JSON con los procesos
    #[arg(short, long, env = "FCFS_INPUT")]
    pub input: Option<PathBuf>,

    /// Proceso como LLEGADA:RÁFAGA (se puede repetir)
    #[arg(short = 'p', long = "process", value_name = "ARRIVAL:BURST")]
    pub processes: Vec<String>,

    /// Generar N procesos aleatorios
    #[arg(long, value_name = "N", env = "FCFS_RANDOM")]
    pub random: Option<usize>,

    /// Semilla para la generación aleatoria
    #[arg(long, env = "FCFS_SEED")]
    pub seed: Option<u64>,

    /// Llegada máxima de los procesos aleatorios
    #[arg(long = "max-arrival", default_value_t = DEFAULT_MAX_ARRIVAL, env = "FCFS_MAX_ARRIVAL")]
    pub max_arrival: Ticks,

    /// Ráfaga máxima de los procesos aleatorios
    #[arg(long = "max-burst", default_value_t = DEFAULT_MAX_BURST, env = "FCFS_MAX_BURST")]
    pub max_burst: Ticks,

    // === Salida ===

    /// Formato del reporte
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table, env = "FCFS_FORMAT")]
    pub format: ReportFormat,

    /// Mostrar también el diagrama de Gantt (solo formato tabla)
    #[arg(long, env = "FCFS_GANTT")]
    pub gantt: bool,

    /// Filtro de logs (ej: "debug", "fcfs_sim=trace")
    #[arg(long = "log-level", default_value = "warn", env = "FCFS_LOG")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos o fuentes en conflicto
    pub fn validate(&self) -> Result<(), String> {
        let sources = [
            self.input.is_some(),
            !self.processes.is_empty(),
            self.random.is_some(),
        ];
        if sources.iter().filter(|&&used| used).count() > 1 {
            return Err("Use only one of --input, --process or --random".to_string());
        }

        if self.random == Some(0) {
            return Err("Random process count must be >= 1".to_string());
        }
        if self.max_burst == 0 {
            return Err("Max burst must be >= 1".to_string());
        }
        if self.seed.is_some() && self.random.is_none() {
            return Err("Seed requires --random".to_string());
        }

        Ok(())
    }

    /// Resuelve de dónde se leen los procesos
    ///
    /// Sin fuente explícita se pregunta por stdin.
    pub fn source(&self) -> InputSource {
        if let Some(path) = &self.input {
            InputSource::File(path.clone())
        } else if !self.processes.is_empty() {
            InputSource::Specs(self.processes.clone())
        } else if let Some(count) = self.random {
            InputSource::Random {
                count,
                seed: self.seed,
                max_arrival: self.max_arrival,
                max_burst: self.max_burst,
            }
        } else {
            InputSource::Interactive
        }
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            input: None,
            processes: Vec::new(),
            random: None,
            seed: None,
            max_arrival: DEFAULT_MAX_ARRIVAL,
            max_burst: DEFAULT_MAX_BURST,
            format: ReportFormat::Table,
            gantt: false,
            log_level: "warn".to_string(),
        }
    }
}
