pub mod crawler;

pub use crawler::{Bounds, Crawler};
