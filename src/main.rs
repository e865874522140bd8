// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SETLOG - Exercise Set Logger
//!
//! A desktop form for recording the sets of an exercise, with an image,
//! an auto-saved draft and a local history of saved exercises.

mod app;
mod command;
mod config;
mod deferred;
mod error;
mod io;
mod models;
mod tracker;
mod ui;
mod util;

use anyhow::Result;
use app::SetLogApp;
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::from_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([380.0, 500.0])
            .with_title("SETLOG - Exercise Set Logger"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SETLOG",
        options,
        Box::new(|_cc| Ok(Box::new(SetLogApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
