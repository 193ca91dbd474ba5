//! # FCFS Simulator - Entry Point
//! src/main.rs
//!
//! Punto de entrada del simulador: lee la configuración, obtiene los
//! procesos, corre el planificador e imprime el reporte.

use fcfs_sim::config::Config;
use fcfs_sim::report::{gantt, json, table, ReportFormat};
use fcfs_sim::{order, segments, simulate};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::new();

    // Logs a stderr para no mezclarlos con el reporte
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuración inválida: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(&config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = config.source();
    info!(?source, format = ?config.format, "starting simulation");

    let processes = source.load()?;
    let ordered = order(processes)?;
    let (results, summary) = simulate(&ordered)?;
    let timeline = segments(&results);

    match config.format {
        ReportFormat::Table => {
            println!();
            print!("{}", table::render(&results, &summary));
            if config.gantt {
                println!();
                print!("{}", gantt::render(&timeline));
            }
        }
        ReportFormat::Json => {
            println!("{}", json::render(&results, &summary, &timeline)?);
        }
    }

    Ok(())
}
