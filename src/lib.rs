pub mod availability;
pub mod background;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod formatting;
pub mod injuries;
pub mod projector;
pub mod summary;
pub mod taxonomy;
pub mod tui;
pub mod types;
pub mod view;

pub use error::{Result, RosterError};
