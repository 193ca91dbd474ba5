//! # Entrada Interactiva
//! src/input/prompt.rs
//!
//! Pide los procesos por consola:
//!
//! ```text
//! Enter the number of processes: 2
//! For process 1:
//! Enter arrival time: 0
//! Enter burst time: 4
//! ...
//! ```
//!
//! Los valores inválidos no abortan: se muestra un mensaje y se vuelve a
//! leer hasta obtener un valor válido. Se lee por tokens separados por
//! espacios, así que `0 4` en una misma línea responde dos preguntas.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::process::{Process, ProcessId};

use super::InputError;

const MSG_NOT_INTEGER: &str = "Invalid input. Enter a positive integer.";
const MSG_NEGATIVE_COUNT: &str = "The number of processes can't be negative.";
const MSG_NEGATIVE_ARRIVAL: &str = "Arrival time can't be negative.";
const MSG_NEGATIVE_BURST: &str = "Burst time can't be negative.";

/// Lector de tokens sobre un `BufRead`
struct Tokens<'a, R: BufRead> {
    reader: &'a mut R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Siguiente token, leyendo más líneas si hace falta
    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Descarta el resto de la línea actual
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Lee un entero, reintentando mientras el token no sea numérico
fn read_integer<R: BufRead, W: Write>(
    tokens: &mut Tokens<'_, R>,
    out: &mut W,
    prompt: &str,
) -> Result<i64, InputError> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    loop {
        let token = tokens.next_token()?;
        match token.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(out, "{}", MSG_NOT_INTEGER)?;
                tokens.discard_line();
            }
        }
    }
}

/// Lee un entero hasta que cumpla `accept`, mostrando `rejected` si no
fn read_until<R: BufRead, W: Write>(
    tokens: &mut Tokens<'_, R>,
    out: &mut W,
    prompt: &str,
    rejected: &str,
    accept: impl Fn(i64) -> bool,
) -> Result<i64, InputError> {
    loop {
        let value = read_integer(tokens, out, prompt)?;
        if accept(value) {
            return Ok(value);
        }
        writeln!(out, "{}", rejected)?;
    }
}

/// Pide la cantidad de procesos y luego llegada y ráfaga de cada uno
///
/// Los ids se asignan 1..n en el orden en que se ingresan.
pub fn read_processes<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
) -> Result<Vec<Process>, InputError> {
    let mut tokens = Tokens::new(reader);

    let count = read_until(
        &mut tokens,
        out,
        "Enter the number of processes: ",
        MSG_NEGATIVE_COUNT,
        |n| n > 0,
    )?;
    let count = ProcessId::try_from(count).map_err(|_| InputError::Parse {
        value: count.to_string(),
        reason: "too many processes".to_string(),
    })?;

    let mut processes = Vec::with_capacity((count as usize).min(1024));
    for id in 1..=count {
        writeln!(out, "For process {}:", id)?;
        let arrival = read_until(
            &mut tokens,
            out,
            "Enter arrival time: ",
            MSG_NEGATIVE_ARRIVAL,
            |v| v >= 0,
        )?;
        let burst = read_until(
            &mut tokens,
            out,
            "Enter burst time: ",
            MSG_NEGATIVE_BURST,
            |v| v > 0,
        )?;
        processes.push(Process::from_signed(id, arrival, burst)?);
    }

    Ok(processes)
}
