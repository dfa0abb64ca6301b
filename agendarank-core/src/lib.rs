//! Core types for agendarank.
//!
//! This crate provides the pieces shared by both command-line tools:
//! - `event`, `ics` and `agenda` for filtering calendar blocks into a day-grouped agenda
//! - `song`, `ranked_list`, `ingest` and `output` for the ranked song importer
//! - `config`, `date_range` and `error` used by both

pub mod agenda;
pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod ics;
pub mod ingest;
pub mod output;
pub mod ranked_list;
pub mod song;

pub use error::{AgendaRankError, AgendaRankResult};
