// src/gui/components/schools_table.rs
//
// Nearby schools, best rating first. Purely a view; ordering comes from
// property::sort_schools.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::property::PropertyResult;

pub fn draw(ui: &mut egui::Ui, result: &PropertyResult) {
    ui.add_space(10.0);
    ui.label(RichText::new("Nearby Schools").heading());

    let schools = result.schools_by_rating();
    if schools.is_empty() {
        ui.label("No school data for this address.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::initial(70.0))
        .column(Column::initial(90.0))
        .column(Column::initial(90.0))
        .header(24.0, |mut header| {
            for title in ["Name", "Rating", "Distance", "Type"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, schools.len(), |mut row| {
                let school = &schools[row.index()];
                row.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.label(&school.name);
                    });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("{}/5", school.rating));
                    });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("{:.1} km", school.distance_km));
                    });
                });
                row.col(|ui| {
                    ui.label(capitalize(&school.kind));
                });
            });
        });
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => s!(),
    }
}
