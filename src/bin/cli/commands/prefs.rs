use anyhow::Result;

use finals::prefs::ViewMode;

use crate::app::App;

pub fn run_view(app: &App, mode: Option<ViewMode>) -> Result<()> {
    match mode {
        Some(mode) => {
            app.prefs.set_view_mode(mode)?;
            println!("View mode set to {}", mode.as_str());
        }
        None => {
            println!("{}", app.prefs.load().view_mode.as_str());
        }
    }
    Ok(())
}

pub fn run_hide_completed(app: &App, state: Option<bool>) -> Result<()> {
    match state {
        Some(hide) => {
            app.prefs.set_hide_completed(hide)?;
            if hide {
                println!("Started exams are now hidden from the dashboard");
            } else {
                println!("Started exams are shown again");
            }
        }
        None => {
            let hide = app.prefs.load().hide_completed;
            println!("{}", if hide { "on" } else { "off" });
        }
    }
    Ok(())
}
