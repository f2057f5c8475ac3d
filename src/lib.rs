// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod recs;
pub mod scrape;
pub mod stocks;
pub mod taxonomy;
pub mod view;
