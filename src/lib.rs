// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;
pub mod error;
pub mod config;
pub mod core;
pub mod extract;

pub mod progress;
pub mod runner;
pub mod render;
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
