use anyhow::{bail, Result};

use finals::exams::ExamDraft;

use crate::app::{local_now, parse_exam_datetime, App};
use crate::commands::list::exam_json;
use crate::{OutputFormat, PriorityArg};

/// Optional replacements for an exam's fields; anything unset keeps its
/// current value. Empty strings clear the optional fields.
pub struct EditFields {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub priority: Option<PriorityArg>,
    pub midterm: Option<String>,
    pub notes: Option<String>,
}

pub fn run(app: &mut App, course: &str, fields: EditFields, format: &OutputFormat) -> Result<()> {
    let exam = app.find_exam(course)?;

    // Merge onto the existing values, then overwrite the whole record
    let date = match (&fields.date, &fields.time) {
        (None, None) => exam.date,
        (date, time) => {
            let date = date.clone().unwrap_or_else(|| exam.date.format("%Y-%m-%d").to_string());
            let time = time.clone().unwrap_or_else(|| exam.date.format("%H:%M").to_string());
            parse_exam_datetime(&date, &time)?
        }
    };

    let draft = ExamDraft {
        course_name: fields.name.unwrap_or_else(|| exam.course_name.clone()),
        date,
        location: fields.location.unwrap_or_else(|| exam.location.clone()),
        midterm_grade: merge_optional(fields.midterm, exam.midterm_grade.clone()),
        priority: fields.priority.map(Into::into).unwrap_or(exam.priority),
        notes: merge_optional(fields.notes, exam.notes.clone()),
    };

    if !app.store.update_exam(exam.id, draft)?.applied() {
        bail!("Exam '{}' no longer exists", exam.course_name);
    }

    let updated = app
        .store
        .get(exam.id)
        .cloned()
        .unwrap_or_else(|| exam.clone());
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&exam_json(&updated, local_now()))?);
        }
        OutputFormat::Plain => {
            println!(
                "Updated {} — {} at {}",
                updated.course_name,
                updated.date.format("%Y-%m-%d %H:%M"),
                updated.location
            );
        }
    }

    Ok(())
}

/// New value wins; an empty new value clears the field; no new value keeps
/// the current one
fn merge_optional(new: Option<String>, current: Option<String>) -> Option<String> {
    match new {
        Some(s) if s.trim().is_empty() => None,
        Some(s) => Some(s),
        None => current,
    }
}
