//! attentive-core
//!
//! Pure domain types for the adult ADHD self-report screening.
//! No scoring logic lives here: this is the shared vocabulary that the
//! instruments, export and CLI crates speak.

pub mod error;
pub mod models;
