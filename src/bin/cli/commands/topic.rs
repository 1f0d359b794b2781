use anyhow::{bail, Result};

use crate::app::App;

pub fn run_add(app: &mut App, course: &str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Topic text cannot be empty");
    }

    let exam = app.find_exam(course)?;
    match app.store.add_topic(exam.id, text)? {
        Some(topic) => println!("Added '{}' to {}", topic.text, exam.course_name),
        None => bail!("Could not add topic to '{}'", exam.course_name),
    }

    Ok(())
}

pub fn run_done(app: &mut App, course: &str, topic: &str) -> Result<()> {
    let exam = app.find_exam(course)?;
    let topic = app.find_topic(&exam, topic)?;

    let Some(toggle) = app.store.toggle_topic(exam.id, topic.id)? else {
        bail!("Topic '{}' no longer exists", topic.text);
    };

    if toggle.completed {
        println!("Done: {}", topic.text);
    } else {
        println!("Reopened: {}", topic.text);
    }

    if toggle.all_completed {
        // The confetti moment
        println!("\u{1F389} All topics complete for {}!", exam.course_name);
    } else if let Some(exam) = app.store.get(exam.id) {
        let progress = exam.progress();
        println!(
            "{}/{} topics done ({}%)",
            progress.completed, progress.total, progress.percent
        );
    }

    Ok(())
}

pub fn run_remove(app: &mut App, course: &str, topic: &str) -> Result<()> {
    let exam = app.find_exam(course)?;
    let topic = app.find_topic(&exam, topic)?;

    if app.store.remove_topic(exam.id, topic.id)?.applied() {
        println!("Removed '{}' from {}", topic.text, exam.course_name);
    } else {
        println!("'{}' was already gone", topic.text);
    }

    Ok(())
}
