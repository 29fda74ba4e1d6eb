use serde::Serialize;

use crate::input::ValidationError;

/// Cleans one calculator field as the user types.
///
/// Drops everything outside `[0-9.-]`, keeps `-` only in leading position,
/// and keeps the first `.` while joining the digit groups after it.
pub fn sanitize_numeric(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;

    for (i, c) in raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .enumerate()
    {
        match c {
            '-' if i == 0 => out.push(c),
            '-' => {}
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(c);
            }
            '.' => {}
            _ => out.push(c),
        }
    }

    out
}

/// Standard decimal parsing; `None` for empty, partial (`"-"`, `"."`) or non-finite input.
pub fn parse_finite(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// The two calculator fields after sanitization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NumericInputPair {
    pub number1: String,
    pub number2: String,
}

impl NumericInputPair {
    pub fn read(raw_a: &str, raw_b: &str) -> Self {
        Self {
            number1: sanitize_numeric(raw_a),
            number2: sanitize_numeric(raw_b),
        }
    }

    /// True iff both fields hold finite numbers.
    pub fn submit_enabled(&self) -> bool {
        self.parsed().is_ok()
    }

    pub fn parsed(&self) -> Result<(f64, f64), ValidationError> {
        match (parse_finite(&self.number1), parse_finite(&self.number2)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ValidationError::InvalidNumbers),
        }
    }
}
