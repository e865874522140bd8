// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Exercise details: image, brand, name and target reps.

use crate::command::Command;
use crate::models::draft::FormFields;

/// Result of form interaction.
pub enum FormAction {
    None,
    Edit(Command),
    PickImage,
}

/// Display the exercise details form.
pub fn show(
    ui: &mut egui::Ui,
    form: &FormFields,
    preview: Option<&egui::TextureHandle>,
    image_loading: bool,
) -> FormAction {
    let mut action = FormAction::None;

    // Image area
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            if image_loading {
                ui.add_space(10.0);
                ui.spinner();
                ui.label("Loading image...");
                ui.add_space(10.0);
            } else if let Some(texture) = preview {
                ui.add(egui::Image::new(texture).max_height(220.0).max_width(ui.available_width()));
                ui.horizontal(|ui| {
                    if ui.button("Change image...").clicked() {
                        action = FormAction::PickImage;
                    }
                    if ui.button("Remove image").clicked() {
                        action = FormAction::Edit(Command::SetImage(None));
                    }
                });
            } else {
                ui.add_space(20.0);
                let upload = ui.add(
                    egui::Button::new(
                        egui::RichText::new("📷  Upload exercise image")
                            .size(16.0)
                            .color(egui::Color32::from_gray(180)),
                    )
                    .frame(false),
                );
                if upload.clicked() {
                    action = FormAction::PickImage;
                }
                if form.image.is_some() {
                    // stored image that could not be decoded for preview
                    ui.label(egui::RichText::new("Saved image cannot be previewed").weak());
                    if ui.button("Remove image").clicked() {
                        action = FormAction::Edit(Command::SetImage(None));
                    }
                }
                ui.add_space(20.0);
            }
        });
    });

    ui.add_space(8.0);

    egui::Grid::new("exercise_fields")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Brand");
            let mut brand = form.brand.clone();
            if ui.text_edit_singleline(&mut brand).changed() {
                action = FormAction::Edit(Command::SetBrand(brand));
            }
            ui.end_row();

            ui.label("Exercise");
            let mut name = form.exercise_name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut name).hint_text("Exercise name"))
                .changed()
            {
                action = FormAction::Edit(Command::SetExerciseName(name));
            }
            ui.end_row();

            ui.label("Target reps");
            let mut target = form.target_reps.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut target).desired_width(60.0))
                .changed()
            {
                action = FormAction::Edit(Command::SetTargetReps(target));
            }
            ui.end_row();
        });

    action
}
