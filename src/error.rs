// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User-facing error types.

use crate::models::set_record::SetId;
use thiserror::Error;

/// Reasons an exercise cannot be finalized. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an exercise name")]
    MissingExerciseName,
    #[error("Please add at least one set")]
    NoSets,
}

/// A numeric input box holds text that is not a usable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

/// Restored sets that cannot be taken over as-is. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("set id {0} is too large to restore")]
    IdOutOfRange(SetId),
}
