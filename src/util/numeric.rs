// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Parsing and formatting of numeric set inputs.

use crate::error::InputError;
use crate::models::set_record::SetField;

/// Parse the text of a set input. Blank text means the field is unset.
pub fn parse_set_value(field: SetField, input: &str) -> Result<Option<f64>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber(trimmed.to_string()))?;
    if value < 0.0 {
        return Err(InputError::Negative(field.label()));
    }
    Ok(Some(value))
}

/// Render a stored value back into input text.
pub fn format_set_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}
