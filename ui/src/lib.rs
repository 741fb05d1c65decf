//! egui front end for the userboard directory screen.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod utils;
pub mod widgets;

pub use app::UserboardApp;
