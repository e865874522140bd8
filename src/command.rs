// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Edits a user can make to the form.
//!
//! UI panels return these instead of touching the tracker, which keeps the
//! store and tracker free of egui types.

use crate::models::set_record::{SetField, SetId};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append an empty set.
    AddSet,
    RemoveSet(SetId),
    UpdateSet {
        id: SetId,
        field: SetField,
        value: Option<f64>,
    },
    SetBrand(String),
    SetExerciseName(String),
    SetTargetReps(String),
    /// Replace or clear the uploaded image (a data URL).
    SetImage(Option<String>),
    /// Discard the form and start again from defaults.
    Reset,
}
