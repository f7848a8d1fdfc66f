//! Balanced team generation for pickup basketball clubs.
//!
//! [`engine::generate_teams`] is the entry point: it derives per-player win
//! records from past events and splits the selected players into two or
//! three teams that are even on positions and on estimated strength.

pub mod config;
pub mod engine;
pub mod error;
pub mod roster;
pub mod service;
