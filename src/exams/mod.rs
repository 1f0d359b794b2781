//! Exam tracking module
//!
//! This module provides:
//! - Exam records with date, location, priority, grade and notes
//! - Per-exam study topic checklists with completion tracking
//! - A store that persists the whole collection after every mutation

pub mod models;
pub mod store;

pub use models::*;
pub use store::{default_exams, ExamStore};
