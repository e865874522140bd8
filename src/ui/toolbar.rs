// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Action bar below the set list.
//!
//! This module provides the buttons for adding a set, finalizing the
//! exercise and resetting the form.

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    AddSet,
    Save,
    Reset,
}

/// Display the action bar. `saving` disables the save button while a save is pending.
pub fn show(ui: &mut egui::Ui, saving: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("➕ Add set").clicked() {
            action = ToolbarAction::AddSet;
        }

        if ui.button("⟲ Reset").clicked() {
            action = ToolbarAction::Reset;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if saving { "SAVING..." } else { "ADD" };
            let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
                .min_size(egui::vec2(120.0, 32.0));
            if ui.add_enabled(!saving, button).clicked() {
                action = ToolbarAction::Save;
            }
            if saving {
                ui.spinner();
            }
        });
    });

    action
}
