// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exercise draft and form data.
//!
//! An `ExerciseDraft` is both the auto-saved snapshot of the form being
//! edited and an entry in the saved-exercise history.

use super::set_record::SetRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text form fields next to the set list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub brand: String,
    pub exercise_name: String,
    pub target_reps: String,
    /// Uploaded image as a data URL.
    pub image: Option<String>,
}

/// Complete exercise entry, as persisted.
///
/// Every field is optional when decoding: a missing field just means there
/// is nothing to restore for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDraft {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub target_reps: String,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ExerciseDraft {
    /// Assemble a draft from form state and sets, stamped with `timestamp`.
    pub fn assemble(form: &FormFields, sets: &[SetRecord], timestamp: DateTime<Utc>) -> Self {
        Self {
            brand: form.brand.clone(),
            exercise_name: form.exercise_name.clone(),
            target_reps: form.target_reps.clone(),
            sets: sets.to_vec(),
            image: form.image.clone(),
            timestamp: Some(timestamp),
        }
    }

    /// Decode a draft from its JSON snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode the draft as a compact JSON snapshot.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
