use std::io::Write;
use std::sync::mpsc;

use anyhow::{Context, Result};

use finals::countdown::{breakdown, remaining, urgency, Countdown, Ticker, Urgency, TICK_INTERVAL};

use crate::app::{local_now, App};

/// Live countdown for one target, redrawn in place every second until the
/// exam starts or the user interrupts.
pub fn run(app: &App, course: Option<&str>) -> Result<()> {
    let exam = match course {
        Some(name) => app.find_exam(name)?,
        None => app
            .store
            .next_exam(local_now())
            .context("No upcoming exams to watch")?,
    };

    println!("{} — {}", exam.course_name, exam.location);
    println!("{}", exam.date.format("%Y-%m-%d %H:%M"));

    let target = exam.date;
    let (done_tx, done_rx) = mpsc::channel();

    let mut ticker = Ticker::start(TICK_INTERVAL, move || {
        let ms = remaining(target, local_now());
        match breakdown(ms) {
            Countdown::Pending(b) => {
                let marker = match urgency(ms) {
                    Urgency::Urgent => " !",
                    Urgency::Normal => "",
                };
                print!("\r{}{}          ", b.clock(), marker);
                let _ = std::io::stdout().flush();
            }
            Countdown::Elapsed => {
                println!("\rStarted!                ");
                let _ = done_tx.send(());
            }
        }
    });

    // Block until the countdown elapses; Ctrl-C ends the process directly
    let _ = done_rx.recv();
    ticker.stop();

    Ok(())
}
