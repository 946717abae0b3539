// src/gui/components/mod.rs
pub mod property_card;
pub mod schools_table;
pub mod search_bar;
