// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. Panels report what the user did; the app turns
//! that into tracker commands, runs background image loads and the
//! deferred save, and shows blocking messages.

use crate::command::Command;
use crate::config::Config;
use crate::deferred::{DeferredSave, SaveStatus};
use crate::io::{
    media::{self, LoadedImage},
    serialization,
    storage::{FileStore, KeyValueStore, MemoryStore},
};
use crate::tracker::Tracker;
use crate::ui::{form, sets, toolbar};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;

/// Blocking message shown in a modal window.
struct Notice {
    title: String,
    message: String,
}

/// Image preview texture and the data URL it was built from.
struct Preview {
    source: Option<String>,
    texture: Option<egui::TextureHandle>,
}

/// Main application state.
pub struct SetLogApp {
    config: Config,

    /// Form, set list and storage
    tracker: Tracker,

    /// Text of the set inputs while they are edited
    set_inputs: sets::SetInputs,

    preview: Preview,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Save waiting for its delay; survives a reset, dropped only on teardown
    pending_save: Option<DeferredSave>,

    notice: Option<Notice>,

    /// Clear-all confirmation dialog is open
    confirm_clear: bool,
}

impl SetLogApp {
    /// Create the application, restoring the last auto-saved draft.
    pub fn new(config: Config) -> Self {
        let storage: Box<dyn KeyValueStore> = match FileStore::open(&config.data_dir) {
            Ok(store) => {
                log::info!("Using data directory {}", store.dir().display());
                Box::new(store)
            }
            Err(e) => {
                log::error!("{:#}; changes will not survive a restart", e);
                Box::new(MemoryStore::new())
            }
        };
        let tracker = Tracker::open(storage, config.defaults.clone());

        Self {
            config,
            tracker,
            set_inputs: sets::SetInputs::default(),
            preview: Preview {
                source: None,
                texture: None,
            },
            image_loader: None,
            pending_save: None,
            notice: None,
            confirm_clear: false,
        }
    }

    fn show_notice(&mut self, title: &str, message: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.into(),
        });
    }

    /// A pending save keeps running across a reset; it appends the draft
    /// captured when ADD was pressed.
    fn apply(&mut self, command: Command) {
        self.tracker.apply(command);
    }

    /// Validate the form and start the deferred save.
    fn start_save(&mut self) {
        match self.tracker.finalize() {
            Ok(draft) => {
                log::info!("Saving exercise '{}'", draft.exercise_name);
                self.pending_save = Some(DeferredSave::spawn(draft, self.config.save_delay));
            }
            Err(e) => {
                log::warn!("Save rejected: {}", e);
                self.show_notice("Cannot save", e.to_string());
            }
        }
    }

    /// Append the draft to history once its delay has elapsed.
    fn poll_pending_save(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending_save.as_ref() else {
            return;
        };

        match pending.poll() {
            SaveStatus::Ready(draft) => {
                self.pending_save = None;
                let name = draft.exercise_name.clone();
                match self.tracker.commit_saved(draft) {
                    Ok(_) => {
                        self.show_notice(
                            "Saved",
                            format!("Exercise \"{}\" saved successfully!", name),
                        );
                    }
                    Err(e) => {
                        log::error!("Failed to save exercise: {:#}", e);
                        self.show_notice("Save failed", format!("{:#}", e));
                    }
                }
            }
            SaveStatus::Lost => {
                let name = pending.exercise_name().to_string();
                self.pending_save = None;
                log::error!("Save worker for '{}' exited without a result", name);
                self.show_notice(
                    "Save failed",
                    format!("Exercise \"{}\" could not be saved. Please try again.", name),
                );
            }
            SaveStatus::Pending => ctx.request_repaint_after(Duration::from_millis(50)),
        }
    }

    /// Load an image file on a background thread.
    fn load_image_file(&mut self, path: std::path::PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);

        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| format!("{:#}", e));
            if let Ok(ref loaded) = result {
                log::info!(
                    "Loaded image: {} ({}x{})",
                    path.display(),
                    loaded.width,
                    loaded.height
                );
            }
            let _ = sender.send(result);
        });
    }

    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(receiver) = self.image_loader.as_ref() else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(loaded)) => {
                self.image_loader = None;
                let texture = texture_from(ctx, &loaded);
                self.preview = Preview {
                    source: Some(loaded.data_url.clone()),
                    texture: Some(texture),
                };
                self.apply(Command::SetImage(Some(loaded.data_url)));
            }
            Ok(Err(e)) => {
                self.image_loader = None;
                log::error!("Failed to load image: {}", e);
                self.show_notice("Image not loaded", e);
            }
            Err(TryRecvError::Disconnected) => {
                self.image_loader = None;
                log::error!("Image loader exited without a result");
                self.show_notice("Image not loaded", "The image could not be loaded.");
            }
            Err(TryRecvError::Empty) => ctx.request_repaint(),
        }
    }

    /// Rebuild the preview when the draft's image changed by other means
    /// (restore, reset, removal).
    fn sync_preview(&mut self, ctx: &egui::Context) {
        let current = self.tracker.form().image.as_deref();
        if self.preview.source.as_deref() == current {
            return;
        }

        let texture = current.and_then(|url| match media::load_data_url(url) {
            Ok(loaded) => Some(texture_from(ctx, &loaded)),
            Err(e) => {
                log::warn!("Cannot preview stored image: {:#}", e);
                None
            }
        });
        self.preview = Preview {
            source: current.map(str::to_string),
            texture,
        };
    }

    fn export_history(&mut self, path: std::path::PathBuf) {
        let result = self
            .tracker
            .saved_exercises()
            .and_then(|history| serialization::export_history(&history, &path).map(|_| history.len()));

        match result {
            Ok(count) => log::info!("Exported {} exercises to {}", count, path.display()),
            Err(e) => {
                log::error!("Failed to export history: {:#}", e);
                self.show_notice("Export failed", format!("{:#}", e));
            }
        }
    }

    fn clear_all_data(&mut self) {
        match self.tracker.clear_all() {
            Ok(()) => self.show_notice("Data cleared", "All data cleared successfully!"),
            Err(e) => {
                log::error!("Failed to clear data: {:#}", e);
                self.show_notice("Clear failed", format!("{:#}", e));
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref notice) = self.notice {
            let mut dismissed = false;
            egui::Window::new(notice.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.notice = None;
            }
        }

        if self.confirm_clear {
            let mut confirmed = false;
            let mut cancelled = false;
            egui::Window::new("Clear all data")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(
                        "Are you sure you want to clear all saved exercises? This cannot be undone.",
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Clear").clicked() {
                            confirmed = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
            if confirmed {
                self.confirm_clear = false;
                self.clear_all_data();
            } else if cancelled {
                self.confirm_clear = false;
            }
        }
    }
}

fn texture_from(ctx: &egui::Context, loaded: &LoadedImage) -> egui::TextureHandle {
    let size = [loaded.width as usize, loaded.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
    ctx.load_texture("exercise_image", color_image, egui::TextureOptions::LINEAR)
}

impl eframe::App for SetLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);
        self.poll_pending_save(ctx);
        self.sync_preview(ctx);

        let modal_open = self.notice.is_some() || self.confirm_clear;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        ui.menu_button("Export History", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("exercises.yaml")
                                    .save_file()
                                {
                                    self.export_history(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("exercises.json")
                                    .save_file()
                                {
                                    self.export_history(path);
                                }
                                ui.close_menu();
                            }
                        });
                        ui.separator();
                        if ui.button("Clear All Data...").clicked() {
                            self.confirm_clear = true;
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
        });

        // Action bar
        let toolbar_action = egui::TopBottomPanel::bottom("toolbar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = ui
                    .add_enabled_ui(!modal_open, |ui| {
                        toolbar::show(ui, self.pending_save.is_some())
                    })
                    .inner;
                ui.add_space(4.0);
                action
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::AddSet => self.apply(Command::AddSet),
            toolbar::ToolbarAction::Save => self.start_save(),
            toolbar::ToolbarAction::Reset => self.apply(Command::Reset),
            toolbar::ToolbarAction::None => {}
        }

        // Form and sets (center)
        let (form_action, sets_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.heading("Add Exercise");
                            ui.add_space(8.0);

                            let form_action = form::show(
                                ui,
                                self.tracker.form(),
                                self.preview.texture.as_ref(),
                                self.image_loader.is_some(),
                            );

                            ui.add_space(12.0);
                            ui.label(egui::RichText::new("Sets").strong().size(16.0));

                            let sets_action = sets::show(
                                ui,
                                self.tracker.sets(),
                                &mut self.set_inputs,
                                self.tracker.generation(),
                            );
                            (form_action, sets_action)
                        })
                        .inner
                })
                .inner
            })
            .inner;

        match form_action {
            form::FormAction::Edit(command) => self.apply(command),
            form::FormAction::PickImage => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
                    .pick_file()
                {
                    self.load_image_file(path);
                }
            }
            form::FormAction::None => {}
        }

        match sets_action {
            sets::SetsAction::Edit(command) => self.apply(command),
            sets::SetsAction::InvalidInput(e) => self.show_notice("Invalid value", e.to_string()),
            sets::SetsAction::None => {}
        }

        self.show_dialogs(ctx);
    }
}
