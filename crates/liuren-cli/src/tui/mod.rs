mod app;
mod views;

use std::io;

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;

use liuren_core::{Divination, LunarCalendar};

use app::FormApp;

pub fn run<C: LunarCalendar>(divination: Divination<C>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = FormApp::new(divination, Local::now().naive_local());

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop<C: LunarCalendar>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut FormApp<C>,
) -> Result<(), String> {
    while !app.should_quit {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, Local::now().naive_local());
            }
            _ => {}
        }
    }
    Ok(())
}

pub(crate) fn draw<C: LunarCalendar>(frame: &mut Frame, app: &FormApp<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Fields
            Constraint::Length(1), // Actions
            Constraint::Min(0),    // Result
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_input_row(frame, app, chunks[0]);
    views::draw_actions(frame, chunks[1]);
    views::draw_result(frame, app, chunks[2]);
    views::draw_status_bar(frame, chunks[3]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
