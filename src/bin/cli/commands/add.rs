use anyhow::Result;

use finals::exams::ExamDraft;

use crate::app::{local_now, parse_exam_datetime, App};
use crate::commands::list::exam_json;
use crate::{OutputFormat, PriorityArg};

#[allow(clippy::too_many_arguments)]
pub fn run(
    app: &mut App,
    course: &str,
    date: &str,
    time: &str,
    location: &str,
    priority: PriorityArg,
    midterm: Option<String>,
    notes: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let date = parse_exam_datetime(date, time)?;

    let draft = ExamDraft {
        course_name: course.trim().to_string(),
        date,
        location: location.trim().to_string(),
        midterm_grade: midterm.filter(|g| !g.trim().is_empty()),
        priority: priority.into(),
        notes: notes.filter(|n| !n.trim().is_empty()),
    };

    let exam = app.store.add_exam(draft)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&exam_json(&exam, local_now()))?);
        }
        OutputFormat::Plain => {
            println!(
                "Added {} on {} at {}",
                exam.course_name,
                exam.date.format("%Y-%m-%d %H:%M"),
                exam.location
            );
        }
    }

    Ok(())
}
