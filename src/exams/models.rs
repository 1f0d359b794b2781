//! Data models for exams and study topics

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire format for exam dates: zone-less local time at minute precision,
/// e.g. `2025-01-12T10:00`. Seconds are tolerated on read.
pub mod exam_date {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Exam priority; drives card theming and urgency hints in consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

/// A single trackable study item belonging to one exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Topic {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// A scheduled exam with its study checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: Uuid,
    pub course_name: String,
    /// Scheduled start, zone-less local time (see [`exam_date`])
    #[serde(with = "exam_date")]
    pub date: NaiveDateTime,
    pub location: String,
    /// Absent means "not entered"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midterm_grade: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Insertion order defines display order
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Exam {
    /// Create a new exam from `draft` with a fresh id and empty checklist
    pub fn new(draft: ExamDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_name: draft.course_name,
            date: draft.date,
            location: draft.location,
            midterm_grade: draft.midterm_grade,
            priority: draft.priority,
            notes: draft.notes,
            topics: Vec::new(),
        }
    }

    /// Full field overwrite, keeping id and topics
    pub fn apply(&mut self, draft: ExamDraft) {
        self.course_name = draft.course_name;
        self.date = draft.date;
        self.location = draft.location;
        self.midterm_grade = draft.midterm_grade;
        self.priority = draft.priority;
        self.notes = draft.notes;
    }

    /// Completion progress over the topic checklist
    pub fn progress(&self) -> Progress {
        let total = self.topics.len();
        let completed = self.topics.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Progress {
            completed,
            total,
            percent,
        }
    }

    /// Whether the scheduled start is already behind `now`
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.date < now
    }
}

/// Field payload for creating or editing an exam
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDraft {
    pub course_name: String,
    #[serde(with = "exam_date")]
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub midterm_grade: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Topic completion summary for one exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Rounded whole percent; 0 when there are no topics
    pub percent: u8,
}

/// Result of toggling a topic's completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicToggle {
    /// The topic's new completed state
    pub completed: bool,
    /// True only when this toggle just checked off the last open topic of a
    /// non-empty list; callers use it to trigger a celebration
    pub all_completed: bool,
}

/// Whether a lookup-by-id mutation found its target.
///
/// Misses are no-ops rather than errors so stale references held by
/// consumers can never corrupt the store; callers that care can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
