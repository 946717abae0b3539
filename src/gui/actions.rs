// src/gui/actions.rs
use crate::gui::app::App;

/// Kick off a search for whatever is in the address box. Validation and
/// serialization live in the controller; this is just the UI trigger.
pub fn search(app: &mut App) {
    let addr = app.address_text.clone();
    logf!("UI: search \"{}\"", addr);
    app.controller.search(&addr);
}
