// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod aggregate;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod forms;
pub mod gui;
pub mod types;
pub mod views;

#[cfg(feature = "cli")]
pub mod cli;
