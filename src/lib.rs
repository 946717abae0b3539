// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod gui;
pub mod property;
pub mod search;
pub mod suggest;
pub mod validate;
