// src/gui/components/search_bar.rs
//
// Address box, search button, and the in-flight progress strip.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};
use crate::search::SearchState;

pub fn draw(ui: &mut egui::Ui, app: &mut App, snapshot: &SearchState) {
    let mut fire = false;

    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.address_text)
                .hint_text("Enter property address...")
                .desired_width(420.0),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            fire = true;
        }

        // Button stays disabled while a search runs; submissions are
        // serialized in the controller as well.
        let label = if snapshot.is_loading { "Searching..." } else { "Search" };
        if ui
            .add_enabled(!snapshot.is_loading, egui::Button::new(label))
            .clicked()
        {
            fire = true;
        }

        if snapshot.is_loading {
            ui.add(Spinner::new().size(16.0));
        }
    });

    // Advisory suggestions from the autocomplete capability; clicking one
    // commits it and searches right away.
    if app.autocomplete.is_enabled() && !snapshot.is_loading {
        let suggestions = app.autocomplete.suggestions(&app.address_text);
        for suggestion in suggestions {
            if ui.small_button(&suggestion).clicked() {
                app.address_text = suggestion;
                fire = true;
            }
        }
    }

    if fire && !snapshot.is_loading {
        actions::search(app);
    }

    if snapshot.is_loading {
        ui.add_space(6.0);
        ui.add(egui::ProgressBar::new(snapshot.progress as f32 / 100.0).show_percentage());
        ui.label(loading_message(snapshot.progress));
    } else if snapshot.result.is_some() {
        ui.add_space(6.0);
        ui.label("Found the perfect spot!");
    }
}

/// The bar is synthetic, so at least make the wait entertaining.
fn loading_message(progress: u8) -> &'static str {
    match progress {
        0..=19 => "Scanning the neighborhood...",
        20..=39 => "Peeking through windows...",
        40..=59 => "Hopping fences to find schools...",
        60..=79 => "Counting trees and parks...",
        80..=99 => "Interviewing local squirrels...",
        _ => "Almost there! Just measuring the sidewalks...",
    }
}
