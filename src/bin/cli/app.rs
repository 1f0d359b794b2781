use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use finals::exams::{Exam, ExamStore, Topic};
use finals::prefs::PrefsStore;
use finals::storage::KvStore;

/// Shared application state for CLI commands
pub struct App {
    pub store: ExamStore,
    pub prefs: PrefsStore,
}

impl App {
    /// Initialize from the given data directory, or the platform default
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => KvStore::default_data_dir().context("Failed to resolve data directory")?,
        };

        let kv = KvStore::new(data_dir);
        kv.init().context("Failed to initialize data directory")?;

        let store = ExamStore::load(kv.clone());
        let prefs = PrefsStore::new(kv);

        Ok(Self { store, prefs })
    }

    /// Find an exam by course name (case-insensitive prefix match)
    pub fn find_exam(&self, name: &str) -> Result<Exam> {
        let exams = self.store.exams();
        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(exam) = exams
            .iter()
            .find(|e| e.course_name.to_lowercase() == name_lower)
        {
            return Ok(exam.clone());
        }

        // Prefix match
        let matches: Vec<&Exam> = exams
            .iter()
            .filter(|e| e.course_name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No exam matching '{}'. Tracked courses:\n{}",
                name,
                exams
                    .iter()
                    .map(|e| format!("  - {}", e.course_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous course '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|e| format!("  - {}", e.course_name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Find a topic within an exam by its text (case-insensitive prefix match)
    pub fn find_topic(&self, exam: &Exam, text: &str) -> Result<Topic> {
        let text_lower = text.to_lowercase();

        if let Some(topic) = exam
            .topics
            .iter()
            .find(|t| t.text.to_lowercase() == text_lower)
        {
            return Ok(topic.clone());
        }

        let matches: Vec<&Topic> = exam
            .topics
            .iter()
            .filter(|t| t.text.to_lowercase().starts_with(&text_lower))
            .collect();

        match matches.len() {
            0 => bail!(
                "No topic matching '{}' in {}. Topics:\n{}",
                text,
                exam.course_name,
                exam.topics
                    .iter()
                    .map(|t| format!("  - {}", t.text))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous topic '{}'. Matches:\n{}",
                text,
                matches
                    .iter()
                    .map(|t| format!("  - {}", t.text))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}

/// Current wall-clock time in the zone-less local form exam dates use
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Combine separate date and time inputs into an exam timestamp
pub fn parse_exam_datetime(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .with_context(|| format!("Invalid time '{}', expected HH:MM", time))?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exam_datetime() {
        let dt = parse_exam_datetime("2025-01-12", "10:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%dT%H:%M").to_string(), "2025-01-12T10:00");

        assert!(parse_exam_datetime("12.01.2025", "10:00").is_err());
        assert!(parse_exam_datetime("2025-01-12", "10am").is_err());
        assert!(parse_exam_datetime("", "").is_err());
    }
}
