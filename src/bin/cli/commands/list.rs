use anyhow::Result;

use finals::countdown::{breakdown, remaining, urgency, Countdown, Urgency};
use finals::exams::{Exam, Priority};

use crate::app::{local_now, App};
use crate::OutputFormat;

pub fn run(app: &mut App, upcoming_only: bool, all: bool, format: &OutputFormat) -> Result<()> {
    let now = local_now();
    let prefs = app.prefs.load();

    let mut exams = if upcoming_only {
        app.store.upcoming(now)
    } else {
        app.store.sorted_by_date()
    };

    if prefs.hide_completed && !all {
        exams.retain(|e| !e.is_past(now));
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = exams.iter().map(|e| exam_json(e, now)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if !prefs.has_seen_welcome {
                println!("Welcome to finals! Exams live in your local data dir;");
                println!("try `finals add`, `finals topic add`, and `finals watch`.\n");
                app.prefs.mark_welcome_seen()?;
            }

            if exams.is_empty() {
                println!("No exams tracked. Enjoy the break, or add one with `finals add`.");
                return Ok(());
            }

            for exam in &exams {
                print_exam_line(exam, now);
            }
            println!();
            println!(
                "{} exam{} tracked",
                app.store.count(),
                if app.store.count() == 1 { "" } else { "s" }
            );
        }
    }

    Ok(())
}

fn print_exam_line(exam: &Exam, now: chrono::NaiveDateTime) {
    let priority = match exam.priority {
        Priority::High => " [HIGH]",
        Priority::Low => " [low]",
        Priority::Normal => "",
    };

    println!(
        "{}{}  {}  {}",
        exam.course_name,
        priority,
        exam.date.format("%Y-%m-%d %H:%M"),
        exam.location
    );

    let ms = remaining(exam.date, now);
    let countdown = match breakdown(ms) {
        Countdown::Pending(b) => match urgency(ms) {
            Urgency::Urgent => format!("in {} (urgent)", b.compact()),
            Urgency::Normal => format!("in {}", b.compact()),
        },
        Countdown::Elapsed => "started".to_string(),
    };

    let progress = exam.progress();
    println!(
        "    {} · topics {}/{} ({}%)",
        countdown, progress.completed, progress.total, progress.percent
    );
}

pub fn exam_json(exam: &Exam, now: chrono::NaiveDateTime) -> serde_json::Value {
    let ms = remaining(exam.date, now);
    let progress = exam.progress();

    let countdown = match breakdown(ms) {
        Countdown::Pending(b) => serde_json::json!({
            "state": "pending",
            "remainingMs": ms,
            "breakdown": b,
            "urgency": urgency(ms),
        }),
        Countdown::Elapsed => serde_json::json!({
            "state": "elapsed",
            "remainingMs": ms,
        }),
    };

    serde_json::json!({
        "id": exam.id.to_string(),
        "courseName": exam.course_name,
        "date": exam.date.format("%Y-%m-%dT%H:%M").to_string(),
        "location": exam.location,
        "priority": exam.priority,
        "midtermGrade": exam.midterm_grade,
        "notes": exam.notes,
        "progress": progress,
        "countdown": countdown,
    })
}
