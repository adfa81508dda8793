//! Usecase layer: application workflows + events.

pub mod config;
pub mod convert;
pub mod event;
pub mod parse;
pub mod stats;
pub mod validate;
