//! Exam store: the single authoritative collection, synchronized to disk
//!
//! The whole collection is written back under the `exams` key after every
//! mutation; last write wins. Absent or unreadable data loads as the default
//! seed instead of failing, so the dashboard always comes up.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::models::{Exam, ExamDraft, MutationOutcome, Topic, TopicToggle};
use crate::storage::{KvStore, Result};

/// Storage key holding the serialized exam collection
pub const EXAMS_KEY: &str = "exams";

pub struct ExamStore {
    kv: KvStore,
    exams: Vec<Exam>,
}

impl ExamStore {
    /// Load the persisted collection, seeding with the demo dataset
    pub fn load(kv: KvStore) -> Self {
        Self::load_with_defaults(kv, default_exams())
    }

    /// Load the persisted collection, substituting `defaults` when the
    /// stored data is absent or unparseable. Never fails hard.
    pub fn load_with_defaults(kv: KvStore, defaults: Vec<Exam>) -> Self {
        let exams = match kv.get(EXAMS_KEY) {
            Ok(Some(content)) => match serde_json::from_str(&content) {
                Ok(exams) => exams,
                Err(e) => {
                    log::warn!("Stored exams unreadable, using defaults: {}", e);
                    defaults
                }
            },
            Ok(None) => defaults,
            Err(e) => {
                log::warn!("Failed to read stored exams, using defaults: {}", e);
                defaults
            }
        };

        let store = Self { kv, exams };
        // Write back immediately so a seeded collection survives a session
        // with no mutations
        if let Err(e) = store.save() {
            log::warn!("Initial exam save failed: {}", e);
        }
        store
    }

    /// Persist the entire collection
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.exams)?;
        self.kv.set(EXAMS_KEY, &json)
    }

    // ===== Mutations =====

    /// Create an exam from `draft` with a fresh id and empty checklist
    pub fn add_exam(&mut self, draft: ExamDraft) -> Result<Exam> {
        let exam = Exam::new(draft);
        self.exams.push(exam.clone());
        self.save()?;
        Ok(exam)
    }

    /// Overwrite an exam's fields in place; a miss is a persisted-state no-op
    pub fn update_exam(&mut self, id: Uuid, draft: ExamDraft) -> Result<MutationOutcome> {
        match self.exams.iter_mut().find(|e| e.id == id) {
            Some(exam) => {
                exam.apply(draft);
                self.save()?;
                Ok(MutationOutcome::Applied)
            }
            None => Ok(MutationOutcome::NotFound),
        }
    }

    /// Delete an exam and, implicitly, its topics
    pub fn delete_exam(&mut self, id: Uuid) -> Result<MutationOutcome> {
        let len_before = self.exams.len();
        self.exams.retain(|e| e.id != id);
        if self.exams.len() == len_before {
            return Ok(MutationOutcome::NotFound);
        }
        self.save()?;
        Ok(MutationOutcome::Applied)
    }

    /// Append a topic to an exam's checklist. Rejected (store untouched)
    /// when `text` trims to empty or the exam is missing.
    pub fn add_topic(&mut self, exam_id: Uuid, text: &str) -> Result<Option<Topic>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let Some(exam) = self.exams.iter_mut().find(|e| e.id == exam_id) else {
            return Ok(None);
        };

        let topic = Topic::new(text.to_string());
        exam.topics.push(topic.clone());
        self.save()?;
        Ok(Some(topic))
    }

    /// Remove a topic from an exam's checklist
    pub fn remove_topic(&mut self, exam_id: Uuid, topic_id: Uuid) -> Result<MutationOutcome> {
        let Some(exam) = self.exams.iter_mut().find(|e| e.id == exam_id) else {
            return Ok(MutationOutcome::NotFound);
        };

        let len_before = exam.topics.len();
        exam.topics.retain(|t| t.id != topic_id);
        if exam.topics.len() == len_before {
            return Ok(MutationOutcome::NotFound);
        }
        self.save()?;
        Ok(MutationOutcome::Applied)
    }

    /// Flip a topic's completed flag, reporting whether the whole checklist
    /// is now done
    pub fn toggle_topic(&mut self, exam_id: Uuid, topic_id: Uuid) -> Result<Option<TopicToggle>> {
        let Some(exam) = self.exams.iter_mut().find(|e| e.id == exam_id) else {
            return Ok(None);
        };
        let Some(topic) = exam.topics.iter_mut().find(|t| t.id == topic_id) else {
            return Ok(None);
        };

        topic.completed = !topic.completed;
        let completed = topic.completed;
        let all_completed = !exam.topics.is_empty() && exam.topics.iter().all(|t| t.completed);
        self.save()?;
        Ok(Some(TopicToggle {
            completed,
            all_completed,
        }))
    }

    // ===== Queries =====

    /// All exams in insertion order
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn count(&self) -> usize {
        self.exams.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// All exams ordered by date ascending. `sort_by` is stable, so equal
    /// dates keep their insertion order.
    pub fn sorted_by_date(&self) -> Vec<Exam> {
        let mut sorted = self.exams.clone();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        sorted
    }

    /// Strictly-future exams, soonest first
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<Exam> {
        self.sorted_by_date()
            .into_iter()
            .filter(|e| e.date > now)
            .collect()
    }

    /// The hero target: the next exam still ahead of `now`
    pub fn next_exam(&self, now: NaiveDateTime) -> Option<Exam> {
        self.upcoming(now).into_iter().next()
    }
}

fn seed_date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

fn seed_exam(course: &str, date: NaiveDateTime, location: &str, topics: &[(&str, bool)]) -> Exam {
    let mut exam = Exam::new(ExamDraft {
        course_name: course.to_string(),
        date,
        location: location.to_string(),
        midterm_grade: None,
        priority: Default::default(),
        notes: None,
    });
    exam.topics = topics
        .iter()
        .map(|(text, completed)| {
            let mut topic = Topic::new((*text).to_string());
            topic.completed = *completed;
            topic
        })
        .collect();
    exam
}

/// Demo dataset seeded on first launch or after unreadable data
pub fn default_exams() -> Vec<Exam> {
    vec![
        seed_exam(
            "Yapay Zeka",
            seed_date(2025, 1, 12, 10, 0),
            "D-203 Amfi",
            &[
                ("Machine Learning Basics", true),
                ("Neural Networks", false),
                ("Reinforcement Learning", false),
                ("Genetic Algorithms", false),
            ],
        ),
        seed_exam(
            "Veri Yapıları",
            seed_date(2025, 1, 15, 13, 30),
            "D-105",
            &[
                ("Linked Lists", true),
                ("Trees & Graphs", true),
                ("Sorting Algorithms", false),
            ],
        ),
    ]
}
