//! attentive-cli
//!
//! Command-line front end: scores screening input files, runs the
//! questionnaire interactively and writes reports.

pub mod config;
pub mod logging;
pub mod output;
pub mod score;
pub mod take;
