use anyhow::Result;

use finals::countdown::{breakdown, remaining, Countdown};

use crate::app::{local_now, App};
use crate::commands::list::exam_json;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let now = local_now();
    let next = app.store.next_exam(now);

    match format {
        OutputFormat::Json => {
            let value = match &next {
                Some(exam) => exam_json(exam, now),
                None => serde_json::Value::Null,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => match next {
            Some(exam) => {
                println!("Next: {} — {}", exam.course_name, exam.location);
                println!("      {}", exam.date.format("%Y-%m-%d %H:%M"));
                match breakdown(remaining(exam.date, now)) {
                    Countdown::Pending(b) => println!("      {}", b.clock()),
                    Countdown::Elapsed => println!("      started"),
                }
            }
            None => println!("No upcoming exams. Enjoy the break!"),
        },
    }

    Ok(())
}
