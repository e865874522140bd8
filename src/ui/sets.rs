// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set list panel.
//!
//! The whole list is rendered from the store every frame; the last set is
//! highlighted as the active one. Inputs keep their own text while being
//! edited and are parsed only when editing ends, so a half-typed number
//! never reaches the store.

use crate::command::Command;
use crate::error::InputError;
use crate::models::{
    set_list::SetList,
    set_record::{SetField, SetId},
};
use crate::util::numeric::{format_set_value, parse_set_value};
use std::collections::HashMap;

/// Result of set list interaction.
pub enum SetsAction {
    None,
    Edit(Command),
    InvalidInput(InputError),
}

/// Text of the numeric inputs, keyed by set and field.
#[derive(Default)]
pub struct SetInputs {
    generation: u64,
    text: HashMap<(SetId, SetField), String>,
}

impl SetInputs {
    /// Drop buffers that no longer belong to the store being shown.
    fn sync(&mut self, sets: &SetList, generation: u64) {
        if generation != self.generation {
            self.text.clear();
            self.generation = generation;
        }
        self.text.retain(|(id, _), _| sets.get(*id).is_some());
    }
}

/// Display the set list and handle edits.
pub fn show(
    ui: &mut egui::Ui,
    sets: &SetList,
    inputs: &mut SetInputs,
    generation: u64,
) -> SetsAction {
    let mut action = SetsAction::None;
    inputs.sync(sets, generation);

    let active_id = sets.active().map(|s| s.id);

    for (index, record) in sets.sets().iter().enumerate() {
        let is_active = Some(record.id) == active_id;
        let stroke = if is_active {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 140, 0))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(80))
        };

        egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("Set {}", index + 1)).strong());
                ui.separator();

                for field in SetField::ALL {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(field.label()).small().weak());

                        let text = inputs
                            .text
                            .entry((record.id, field))
                            .or_insert_with(|| format_set_value(record.get(field)));
                        let response = ui.add(
                            egui::TextEdit::singleline(text)
                                .hint_text(field.placeholder())
                                .desired_width(60.0),
                        );

                        if response.lost_focus() {
                            match parse_set_value(field, text) {
                                Ok(value) => {
                                    if value != record.get(field) {
                                        action = SetsAction::Edit(Command::UpdateSet {
                                            id: record.id,
                                            field,
                                            value,
                                        });
                                    }
                                    *text = format_set_value(value);
                                }
                                Err(e) => {
                                    *text = format_set_value(record.get(field));
                                    action = SetsAction::InvalidInput(e);
                                }
                            }
                        }
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑").on_hover_text("Delete set").clicked() {
                        action = SetsAction::Edit(Command::RemoveSet(record.id));
                    }
                });
            });
        });
    }

    if sets.is_empty() {
        ui.label(egui::RichText::new("No sets yet").italics().weak());
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_drops_removed_sets() {
        let mut sets = SetList::new();
        let kept = sets.add_set(None, None, None);
        let removed = sets.add_set(None, None, None);

        let mut inputs = SetInputs::default();
        inputs.text.insert((kept.id, SetField::Reps), "8".into());
        inputs.text.insert((removed.id, SetField::Reps), "9".into());

        sets.remove_set(removed.id);
        inputs.sync(&sets, 0);

        assert!(inputs.text.contains_key(&(kept.id, SetField::Reps)));
        assert!(!inputs.text.contains_key(&(removed.id, SetField::Reps)));
    }

    #[test]
    fn test_sync_clears_on_new_generation() {
        let mut sets = SetList::new();
        let record = sets.add_set(None, None, None);

        let mut inputs = SetInputs::default();
        inputs.text.insert((record.id, SetField::Rest), "45".into());

        inputs.sync(&sets, 1);
        assert!(inputs.text.is_empty());
    }
}
