//! Core library for the finals dashboard.
//!
//! Tracks exams with their study-topic checklists, persists the collection to
//! a local key-value store after every mutation, and computes live countdown
//! state for upcoming exams. Rendering is left entirely to consumers; the
//! bundled CLI is one such consumer.

pub mod countdown;
pub mod exams;
pub mod prefs;
pub mod storage;
