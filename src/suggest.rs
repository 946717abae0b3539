// src/suggest.rs
//
// Address autocomplete lives in an external map provider; we only model the
// capability. Immediate-mode egui has no callback registry, so selection is
// polled once per frame instead of delivered through a callback.

/// Capability interface for the autocomplete collaborator.
pub trait AutocompleteProvider {
    /// Suggestions for the current input. May be empty or stale; purely
    /// advisory.
    fn suggestions(&self, input: &str) -> Vec<String>;

    /// The address the user committed to since the last poll, if any.
    /// Consuming: a selection is reported once and then cleared. The caller
    /// fires a search with the returned string.
    fn take_selected(&mut self) -> Option<String>;

    fn disable(&mut self);

    fn is_enabled(&self) -> bool;
}

/// Stand-in used when no map-provider key is configured. Manual address
/// entry and search are unaffected.
pub struct NullAutocomplete;

impl AutocompleteProvider for NullAutocomplete {
    fn suggestions(&self, _input: &str) -> Vec<String> {
        Vec::new()
    }
    fn take_selected(&mut self) -> Option<String> {
        None
    }
    fn disable(&mut self) {}
    fn is_enabled(&self) -> bool {
        false
    }
}
