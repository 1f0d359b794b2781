use anyhow::Result;

use finals::countdown::{breakdown, remaining, Countdown};

use crate::app::{local_now, App};
use crate::commands::list::exam_json;
use crate::OutputFormat;

pub fn run(app: &App, course: &str, format: &OutputFormat) -> Result<()> {
    let exam = app.find_exam(course)?;
    let now = local_now();

    match format {
        OutputFormat::Json => {
            let mut value = exam_json(&exam, now);
            value["topics"] = serde_json::to_value(&exam.topics)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            println!("{}", exam.course_name);
            println!("  When:     {}", exam.date.format("%Y-%m-%d %H:%M"));
            println!("  Where:    {}", exam.location);
            println!("  Priority: {:?}", exam.priority);
            if let Some(grade) = &exam.midterm_grade {
                println!("  Midterm:  {}", grade);
            }
            if let Some(notes) = &exam.notes {
                println!("  Notes:    {}", notes);
            }

            match breakdown(remaining(exam.date, now)) {
                Countdown::Pending(b) => println!("  Left:     {}", b.clock()),
                Countdown::Elapsed => println!("  Left:     started"),
            }

            let progress = exam.progress();
            println!(
                "  Topics:   {}/{} ({}%)",
                progress.completed, progress.total, progress.percent
            );
            for topic in &exam.topics {
                let mark = if topic.completed { "x" } else { " " };
                println!("    [{}] {}", mark, topic.text);
            }
        }
    }

    Ok(())
}
