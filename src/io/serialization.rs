// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Saved-exercise history serialization.
//!
//! This module decodes the history list kept in storage and exports it
//! to YAML and JSON files.

use crate::models::draft::ExerciseDraft;
use anyhow::{Context, Result};
use std::path::Path;

/// Decode the stored history. An absent key means an empty history.
pub fn decode_history(raw: Option<&str>) -> Result<Vec<ExerciseDraft>> {
    match raw {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json).context("Saved exercise history is malformed"),
    }
}

/// Encode the history for storage.
pub fn encode_history(history: &[ExerciseDraft]) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}

/// Export history to YAML format.
pub fn export_yaml(history: &[ExerciseDraft], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(history)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export history to JSON format.
pub fn export_json(history: &[ExerciseDraft], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export history, picking the format from the file extension.
pub fn export_history(history: &[ExerciseDraft], path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(history, path),
        Some("json") => export_json(history, path),
        _ => anyhow::bail!("Unsupported file extension: {:?}", extension),
    }
}
