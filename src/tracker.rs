// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exercise tracker state.
//!
//! The tracker owns the set-list store, the form fields and the storage
//! backend. Every mutation goes through it so the auto-saved draft always
//! matches what is on screen. It also restores the previous draft on
//! startup, validates and appends finalized exercises to the history, and
//! clears stored data.

use crate::command::Command;
use crate::config::FormDefaults;
use crate::error::{RestoreError, ValidationError};
use crate::io::serialization::{decode_history, encode_history};
use crate::io::storage::{KeyValueStore, CURRENT_EXERCISE_KEY, SAVED_EXERCISES_KEY};
use crate::models::{
    draft::{ExerciseDraft, FormFields},
    set_list::SetList,
    set_record::{SetField, SetId, SetRecord},
};
use anyhow::Result;
use chrono::Utc;

pub struct Tracker {
    sets: SetList,
    form: FormFields,
    defaults: FormDefaults,
    storage: Box<dyn KeyValueStore>,
    /// Bumped whenever the store is replaced wholesale (restore or reset),
    /// since ids may then be handed out again.
    generation: u64,
}

impl Tracker {
    /// Open the tracker, restoring the auto-saved draft if there is one.
    ///
    /// An empty store afterwards is seeded with the default set.
    pub fn open(storage: Box<dyn KeyValueStore>, defaults: FormDefaults) -> Self {
        let mut tracker = Self {
            sets: SetList::new(),
            form: defaults.form_fields(),
            defaults,
            storage,
            generation: 0,
        };

        tracker.load_auto_saved();
        if tracker.sets.is_empty() {
            tracker.add_initial_set();
        }
        tracker
    }

    pub fn sets(&self) -> &SetList {
        &self.sets
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Apply a user edit and auto-save.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddSet => {
                self.add_set(None, None, None);
            }
            Command::RemoveSet(id) => self.remove_set(id),
            Command::UpdateSet { id, field, value } => self.update_field(id, field, value),
            Command::SetBrand(brand) => {
                self.form.brand = brand;
                self.auto_save();
            }
            Command::SetExerciseName(name) => {
                self.form.exercise_name = name;
                self.auto_save();
            }
            Command::SetTargetReps(target) => {
                self.form.target_reps = target;
                self.auto_save();
            }
            Command::SetImage(image) => {
                self.form.image = image;
                self.auto_save();
            }
            Command::Reset => self.reset_form(),
        }
    }

    /// Append a set and auto-save.
    pub fn add_set(
        &mut self,
        reps: Option<f64>,
        weight: Option<f64>,
        rest: Option<f64>,
    ) -> SetRecord {
        let record = self.sets.add_set(reps, weight, rest);
        log::debug!("Added set {}, total: {}", record.id, self.sets.len());
        self.auto_save();
        record
    }

    /// Remove a set (no-op for unknown ids) and auto-save.
    pub fn remove_set(&mut self, id: SetId) {
        if self.sets.remove_set(id) {
            log::debug!("Removed set {}, total: {}", id, self.sets.len());
        }
        self.auto_save();
    }

    /// Update a set field (no-op for unknown ids) and auto-save.
    pub fn update_field(&mut self, id: SetId, field: SetField, value: Option<f64>) {
        if !self.sets.update_field(id, field, value) {
            log::debug!("Ignoring update of {} on missing set {}", field, id);
        }
        self.auto_save();
    }

    /// Replace all sets. The caller decides when to write the snapshot;
    /// on error the store is left as it was.
    pub fn restore_from_snapshot(&mut self, sets: Vec<SetRecord>) -> Result<(), RestoreError> {
        self.sets.restore_from_snapshot(sets)?;
        self.generation += 1;
        Ok(())
    }

    /// Current form and sets as a draft stamped with the current time.
    pub fn draft(&self) -> ExerciseDraft {
        ExerciseDraft::assemble(&self.form, self.sets.sets(), Utc::now())
    }

    /// Validate the form for a save and return the draft to store.
    ///
    /// Sets with unset fields are accepted.
    pub fn finalize(&self) -> Result<ExerciseDraft, ValidationError> {
        if self.form.exercise_name.trim().is_empty() {
            return Err(ValidationError::MissingExerciseName);
        }
        if self.sets.is_empty() {
            return Err(ValidationError::NoSets);
        }
        Ok(self.draft())
    }

    /// Append a finalized draft to the history and reset the form.
    ///
    /// Returns the new history length. A history that cannot be decoded is
    /// left untouched and reported as an error.
    pub fn commit_saved(&mut self, draft: ExerciseDraft) -> Result<usize> {
        let mut history = self.saved_exercises()?;
        let name = draft.exercise_name.clone();
        history.push(draft);
        self.storage
            .set(SAVED_EXERCISES_KEY, &encode_history(&history)?)?;
        log::info!("Saved exercise '{}', history size: {}", name, history.len());

        self.reset_form();
        Ok(history.len())
    }

    /// All finalized exercises, oldest first.
    pub fn saved_exercises(&self) -> Result<Vec<ExerciseDraft>> {
        let raw = self.storage.get(SAVED_EXERCISES_KEY)?;
        decode_history(raw.as_deref())
    }

    /// Erase the auto-saved draft and the history.
    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.remove(SAVED_EXERCISES_KEY)?;
        self.storage.remove(CURRENT_EXERCISE_KEY)?;
        log::info!("Cleared all stored exercise data");
        Ok(())
    }

    /// Put the form back to its defaults with a fresh store and one set.
    pub fn reset_form(&mut self) {
        self.form = self.defaults.form_fields();
        self.sets = SetList::new();
        self.generation += 1;
        self.add_initial_set();
    }

    /// Restore form and sets from the auto-saved draft.
    ///
    /// Returns whether a draft was restored. Empty fields in the draft leave
    /// the current values alone; an empty set list keeps the current sets.
    /// A draft whose sets cannot be restored is skipped as a whole.
    pub fn load_auto_saved(&mut self) -> bool {
        let raw = match self.storage.get(CURRENT_EXERCISE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                log::error!("Error reading auto-saved data: {:#}", e);
                return false;
            }
        };

        let draft = match ExerciseDraft::from_json(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                log::error!("Error loading auto-saved data: {}", e);
                return false;
            }
        };

        if !draft.sets.is_empty() {
            if let Err(e) = self.restore_from_snapshot(draft.sets) {
                log::error!("Error loading auto-saved data: {}", e);
                return false;
            }
        }
        if !draft.brand.is_empty() {
            self.form.brand = draft.brand;
        }
        if !draft.exercise_name.is_empty() {
            self.form.exercise_name = draft.exercise_name;
        }
        if !draft.target_reps.is_empty() {
            self.form.target_reps = draft.target_reps;
        }
        if draft.image.is_some() {
            self.form.image = draft.image;
        }

        log::info!(
            "Restored auto-saved draft '{}' with {} sets",
            self.form.exercise_name,
            self.sets.len()
        );
        true
    }

    fn add_initial_set(&mut self) {
        let (reps, weight, rest) = self.defaults.initial_set;
        self.add_set(reps, weight, rest);
    }

    fn auto_save(&mut self) {
        let result = self
            .draft()
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set(CURRENT_EXERCISE_KEY, &json));
        if let Err(e) = result {
            log::error!("Auto-save failed: {:#}", e);
        }
    }
}
