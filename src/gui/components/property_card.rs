// src/gui/components/property_card.rs
//
// Summary block for a fetched property. Fields render verbatim apart from
// the localized value.

use eframe::egui::{self, RichText};

use crate::property::{self, PropertyResult};

pub fn draw(ui: &mut egui::Ui, result: &PropertyResult) {
    ui.add_space(10.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(&result.address).heading());
        ui.add_space(4.0);

        egui::Grid::new("property_details")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label("Size");
                ui.label(RichText::new(&result.details.size).strong());
                ui.end_row();

                ui.label("Value");
                ui.label(RichText::new(property::format_value(result.details.value)).strong());
                ui.end_row();

                ui.label("Last updated");
                ui.label(RichText::new(&result.details.last_updated).strong());
                ui.end_row();
            });
    });
}
