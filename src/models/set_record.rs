// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set record data structures.
//!
//! This module defines a single performed set (reps, weight, rest) and the
//! lenient decoding rules used when restoring older snapshots.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a set within one store instance.
pub type SetId = u64;

/// Largest id accepted from a snapshot: the largest integer a JSON number
/// holds exactly. Keeps the counter far away from `SetId::MAX`.
pub const MAX_SET_ID: SetId = (1 << 53) - 1;

/// Editable numeric field of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetField {
    Reps,
    Weight,
    Rest,
}

impl SetField {
    /// All fields in display order.
    pub const ALL: [SetField; 3] = [SetField::Reps, SetField::Weight, SetField::Rest];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            SetField::Reps => "Reps",
            SetField::Weight => "Weight",
            SetField::Rest => "Rest",
        }
    }

    /// Placeholder hint for an unset input.
    pub fn placeholder(self) -> &'static str {
        match self {
            SetField::Reps => "10",
            SetField::Weight => "15",
            SetField::Rest => "60",
        }
    }
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One performed set. Unset numeric fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub id: SetId,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rest: Option<f64>,
}

impl SetRecord {
    /// Create a record with the given id and field values.
    pub fn new(id: SetId, reps: Option<f64>, weight: Option<f64>, rest: Option<f64>) -> Self {
        Self {
            id,
            reps,
            weight,
            rest,
        }
    }

    /// Read a field.
    pub fn get(&self, field: SetField) -> Option<f64> {
        match field {
            SetField::Reps => self.reps,
            SetField::Weight => self.weight,
            SetField::Rest => self.rest,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: SetField, value: Option<f64>) {
        match field {
            SetField::Reps => self.reps = value,
            SetField::Weight => self.weight = value,
            SetField::Rest => self.rest = value,
        }
    }
}

/// Accepts a number, a numeric string, an empty string or null.
///
/// Input boxes used to hand their raw text to the snapshot, so older drafts
/// carry `"12"` or `""` where newer ones carry `12` or `null`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("'{trimmed}' is not a number")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_field_encodings() {
        let json = r#"{"id": 4, "reps": "12", "weight": 20.5, "rest": ""}"#;
        let record: SetRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 4);
        assert_eq!(record.reps, Some(12.0));
        assert_eq!(record.weight, Some(20.5));
        assert_eq!(record.rest, None);
    }

    #[test]
    fn test_decode_missing_and_null_fields() {
        let record: SetRecord = serde_json::from_str(r#"{"id": 1, "reps": null}"#).unwrap();
        assert_eq!(record, SetRecord::new(1, None, None, None));
    }

    #[test]
    fn test_decode_rejects_garbage_text() {
        let result: Result<SetRecord, _> = serde_json::from_str(r#"{"id": 1, "reps": "lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unset_fields_encode_as_null() {
        let json = serde_json::to_value(SetRecord::new(2, Some(8.0), None, None)).unwrap();
        assert_eq!(json["reps"], 8.0);
        assert!(json["weight"].is_null());
    }

    #[test]
    fn test_get_set_by_field() {
        let mut record = SetRecord::new(0, None, None, None);
        record.set(SetField::Weight, Some(32.5));
        assert_eq!(record.get(SetField::Weight), Some(32.5));
        assert_eq!(record.get(SetField::Reps), None);
    }

    #[test]
    fn test_long_fractions_survive_encoding() {
        for k in 0..20_000u32 {
            let value = f64::from(k) / 7.0 + 0.1;
            let record = SetRecord::new(u64::from(k), Some(value), Some(value * 1e-3), None);
            let json = serde_json::to_string(&record).unwrap();
            let decoded: SetRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, record, "{json}");
        }

        let decoded: SetRecord =
            serde_json::from_str(r#"{"id": 0, "weight": 108052.52857142857}"#).unwrap();
        assert_eq!(decoded.weight, Some(108052.52857142857));
    }
}
