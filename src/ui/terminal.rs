//! Terminal setup and the interactive event loop

use crate::core::error::Result;
use crate::display::RatingBands;
use crate::model::SkillComparisonModel;
use crate::ui::input::{handle_key, InputOutcome};
use crate::ui::render::draw;
use crate::ui::state::UiState;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the interactive comparison until the user quits
pub fn run(model: &mut SkillComparisonModel, bands: &RatingBands) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    tracing::info!("Terminal UI started");
    let result = event_loop(&mut terminal, model, bands);

    // restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("Terminal UI stopped");

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    model: &mut SkillComparisonModel,
    bands: &RatingBands,
) -> Result<()> {
    let mut ui = UiState::new();
    loop {
        terminal.draw(|f| draw(f, model, &ui, bands))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(model, &mut ui, key) == InputOutcome::Quit {
                return Ok(());
            }
        }
    }
}
