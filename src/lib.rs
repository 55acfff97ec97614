// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod commands;
pub mod config;
pub mod fallback;
pub mod generation;
pub mod surface;
pub mod workflow;

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

use crate::commands::*;
use crate::config::Config;
use crate::generation::RemoteGenerator;
use crate::surface::WebviewSurface;
use crate::workflow::PoemWorkflow;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .setup(|app| {
            let config = Config::from_env();
            let surface = Arc::new(WebviewSurface::new(app.handle().clone()));
            let generator = Arc::new(RemoteGenerator::new(&config)?);
            let workflow = PoemWorkflow::new(generator, surface.clone(), surface, &config);
            app.manage(Arc::new(workflow));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            generate_poem,
            copy_poem,
            current_state
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
