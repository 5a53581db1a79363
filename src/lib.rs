pub mod display;
pub mod error;
pub mod loader;
pub mod runner;
pub mod selection;
pub mod stats;
