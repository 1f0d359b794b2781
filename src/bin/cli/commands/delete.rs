use anyhow::Result;

use crate::app::App;

pub fn run(app: &mut App, course: &str) -> Result<()> {
    let exam = app.find_exam(course)?;
    let topics = exam.topics.len();

    if app.store.delete_exam(exam.id)?.applied() {
        if topics > 0 {
            println!("Deleted {} and its {} topics", exam.course_name, topics);
        } else {
            println!("Deleted {}", exam.course_name);
        }
    } else {
        println!("{} was already gone", exam.course_name);
    }

    Ok(())
}
