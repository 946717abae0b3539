// src/gui/app.rs
use std::error::Error;
use std::time::Duration;

use eframe::egui;

use crate::{
    config::ApiConfig,
    search::SearchController,
    suggest::{AutocompleteProvider, NullAutocomplete},
};

use super::components;

/// Seed for the address box; same demo address the service docs use.
const DEFAULT_ADDRESS: &str = "1600 Amphitheatre Parkway, Mountain View, CA 94043";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let config = ApiConfig::from_env()?;
    eframe::run_native(
        "Homescout",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(config)))),
    )?;
    Ok(())
}

pub struct App {
    // address box contents (UI thread only)
    pub address_text: String,

    // search state machine; workers write through its shared state
    pub controller: SearchController,

    // external capability; Null when no maps key is configured
    pub autocomplete: Box<dyn AutocompleteProvider>,
}

impl App {
    pub fn new(config: ApiConfig) -> Self {
        // A real map-provider binding would be constructed from the key
        // here. Until one is wired in, both branches get the null
        // capability; the trait keeps the seam in place.
        let autocomplete: Box<dyn AutocompleteProvider> = Box::new(NullAutocomplete);
        if config.maps_key.is_none() {
            logf!("Init: autocomplete disabled (no maps key)");
        }

        Self {
            address_text: s!(DEFAULT_ADDRESS),
            controller: SearchController::new(config),
            autocomplete,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A committed autocomplete selection fires a search immediately.
        if let Some(addr) = self.autocomplete.take_selected() {
            self.address_text = addr;
            super::actions::search(self);
        }

        let snapshot = self.controller.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Property Search");
            ui.label("Make property decisions with confidence");
            ui.separator();

            components::search_bar::draw(ui, self, &snapshot);

            if let Some(msg) = snapshot.error_message() {
                ui.add_space(6.0);
                ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), msg);
            }

            if let Some(result) = &snapshot.result {
                components::property_card::draw(ui, result);
                components::schools_table::draw(ui, result);
            }
        });

        // The ticker and worker mutate shared state off-thread; keep frames
        // coming while a search is in flight so the bar visibly advances.
        if snapshot.is_loading {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}
