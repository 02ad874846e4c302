use log::debug;
use serialport::SerialPort;
use std::io::{ErrorKind, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("question {0:?} contains non-ASCII characters")]
    Encoding(String),
    #[error("answer {0:?} contains non-ASCII bytes")]
    Decoding(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Answer(String),
    NoAnswer,
}

/// Sends one question over the serial port and reports the last line
/// received before the read timeout (or `No answer`) on `out`.
///
/// The timeout bounds each individual read and restarts whenever data
/// arrives. A trailing fragment without a line terminator counts as a
/// final line.
///
/// # Errors
///
/// Will return `Err` if the question or the answer is not ASCII, or if the
/// serial port cannot be written to or read from.
pub fn run(
    serial_port: &mut Box<dyn SerialPort>,
    query: &str,
    out: &mut impl Write,
) -> Result<Outcome, ProbeError> {
    writeln!(out, "Send question \"{query}\"")?;

    send(serial_port, encode_query(query)?)?;

    let raw = drain(serial_port)?;
    let lines = split_lines(&raw);

    match lines.last() {
        Some(line) => {
            let answer = decode_answer(line)?;
            writeln!(out, "Receive answer \"{answer}\"")?;
            Ok(Outcome::Answer(answer))
        }
        None => {
            writeln!(out, "No answer")?;
            Ok(Outcome::NoAnswer)
        }
    }
}

fn encode_query(query: &str) -> Result<&[u8], ProbeError> {
    if !query.is_ascii() {
        return Err(ProbeError::Encoding(query.to_string()));
    }
    Ok(query.as_bytes())
}

fn send(serial_port: &mut Box<dyn SerialPort>, buf: &[u8]) -> Result<(), std::io::Error> {
    serial_port.write_all(buf)?;
    serial_port.flush()?;
    Ok(())
}

fn drain(serial_port: &mut Box<dyn SerialPort>) -> Result<Vec<u8>, std::io::Error> {
    let mut raw = Vec::new();
    let mut buf = [0; 1000];

    loop {
        match serial_port.read(&mut buf) {
            Ok(0) => break,
            Ok(bytes_read) => {
                debug!("{}", String::from_utf8_lossy(&buf[..bytes_read]));
                raw.extend_from_slice(&buf[..bytes_read]);
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => break,
            Err(e) => return Err(e),
        }
    }
    Ok(raw)
}

fn split_lines(raw: &[u8]) -> Vec<Vec<u8>> {
    raw.split_inclusive(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}

fn decode_answer(line: &[u8]) -> Result<String, ProbeError> {
    let trimmed = line.trim_ascii();
    if !trimmed.is_ascii() {
        return Err(ProbeError::Decoding(
            String::from_utf8_lossy(trimmed).into_owned(),
        ));
    }
    Ok(String::from_utf8_lossy(trimmed).into_owned())
}
