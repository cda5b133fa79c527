//! Single-screen arcade round: steer a rectangle onto a target to win.

pub mod actors;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod systems;
pub mod ui;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::CrawlerError;
