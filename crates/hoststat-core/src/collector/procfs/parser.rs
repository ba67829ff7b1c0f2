//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of `/proc` files
//! into structured data. They are designed to be easily testable with string inputs.

use thiserror::Error;

use crate::model::{CpuTimes, MemoryInfo};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Splits one `/proc/meminfo` line of the form `Key:    <number> kB`.
///
/// The `kB` suffix is optional (`HugePages_Total:` has none).
pub fn parse_meminfo_line(line: &str) -> Result<(&str, u64), ParseError> {
    let (key, rest) = line
        .split_once(':')
        .ok_or_else(|| ParseError::new(format!("missing ':' in {:?}", line)))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::new(format!("empty key in {:?}", line)));
    }

    let rest = rest.trim_end();
    let digits = rest.strip_suffix("kB").unwrap_or(rest).trim();
    let value = digits
        .parse()
        .map_err(|_| ParseError::new(format!("invalid value {:?} for {}", digits, key)))?;

    Ok((key, value))
}

/// Parses `/proc/meminfo` content.
///
/// Every non-blank line must be well formed. `MemTotal`, `MemFree` and
/// `MemAvailable` must all be present; other keys are ignored.
pub fn parse_meminfo(content: &str) -> Result<MemoryInfo, ParseError> {
    let mut total = None;
    let mut free = None;
    let mut available = None;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = parse_meminfo_line(line)
            .map_err(|e| ParseError::new(format!("line {}: {}", idx + 1, e.message)))?;

        match key {
            "MemTotal" => total = Some(value),
            "MemFree" => free = Some(value),
            "MemAvailable" => available = Some(value),
            _ => {}
        }
    }

    let require = |value: Option<u64>, key: &str| {
        value.ok_or_else(|| ParseError::new(format!("missing {}", key)))
    };

    Ok(MemoryInfo {
        total: require(total, "MemTotal")?,
        free: require(free, "MemFree")?,
        available: require(available, "MemAvailable")?,
    })
}

/// Parses the aggregate `cpu` line of `/proc/stat`.
///
/// Only the first line is examined. It must start with the `cpu` token
/// followed by at least four counters: user, nice, system, idle.
/// Later counters (iowait, irq, ...) are ignored.
pub fn parse_cpu_times(content: &str) -> Result<CpuTimes, ParseError> {
    let line = content
        .lines()
        .next()
        .ok_or_else(|| ParseError::new("empty stat"))?;

    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("cpu") => {}
        Some(other) => {
            return Err(ParseError::new(format!(
                "expected 'cpu' header, got {:?}",
                other
            )));
        }
        None => return Err(ParseError::new("missing 'cpu' header")),
    }

    let fields: Vec<&str> = parts.take(4).collect();
    if fields.len() < 4 {
        return Err(ParseError::new(format!(
            "not enough fields in cpu line: expected 4+, got {}",
            fields.len()
        )));
    }

    let parse_field = |idx: usize, name: &str| -> Result<u64, ParseError> {
        fields[idx]
            .parse()
            .map_err(|_| ParseError::new(format!("invalid {}: {:?}", name, fields[idx])))
    };

    Ok(CpuTimes {
        user: parse_field(0, "user")?,
        nice: parse_field(1, "nice")?,
        system: parse_field(2, "system")?,
        idle: parse_field(3, "idle")?,
    })
}
