use std::{io, panic};
use strum::IntoEnumIterator;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tracing::info;

use crate::{
    app::{Portfolio, ui},
    models::DraftField,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputMode {
    #[default]
    Browse,
    Editing,
}

pub struct App {
    portfolio: Portfolio,
    table_state: TableState,
    mode: InputMode,
    focus: DraftField,
    show_help: bool,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            table_state: TableState::default(),
            mode: InputMode::Browse,
            focus: DraftField::Symbol,
            show_help: false,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn run(&mut self) -> Result<()> {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            default_hook(info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        restore_terminal()?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if !self.handle_key(key) {
                    info!("Quitting");
                    return Ok(());
                }
            }
        }
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.portfolio,
                &mut self.table_state,
                self.mode,
                self.focus,
                self.show_help,
            )
        })?;
        Ok(())
    }

    /// Applies one key press. Returns `false` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        if self.show_help {
            self.show_help = false;
            return true;
        }

        match self.mode {
            InputMode::Browse => self.handle_browse_key(key.code),
            InputMode::Editing => {
                self.handle_editing_key(key.code);
                true
            }
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('a') | KeyCode::Tab => {
                self.table_state.select(None);
                self.mode = InputMode::Editing;
            }
            KeyCode::Char('r') => self.portfolio.refresh_history(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down => {
                let rows = self.portfolio.holding_rows().len();
                if rows > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i >= rows - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                let rows = self.portfolio.holding_rows().len();
                if rows > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                rows - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            _ => {}
        }
        true
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Tab => self.focus = self.next_field(),
            KeyCode::BackTab => self.focus = self.previous_field(),
            KeyCode::Enter => {
                if self.portfolio.add_holding() {
                    self.focus = DraftField::Symbol;
                }
            }
            KeyCode::Backspace => self.portfolio.pop_draft_char(self.focus),
            KeyCode::Right if self.focus == DraftField::Symbol => {
                self.portfolio.cycle_draft_symbol(true)
            }
            KeyCode::Left if self.focus == DraftField::Symbol => {
                self.portfolio.cycle_draft_symbol(false)
            }
            KeyCode::Char(c) => self.portfolio.push_draft_char(self.focus, c),
            _ => {}
        }
    }

    fn next_field(&self) -> DraftField {
        let fields: Vec<DraftField> = DraftField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        fields[(i + 1) % fields.len()]
    }

    fn previous_field(&self) -> DraftField {
        let fields: Vec<DraftField> = DraftField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        fields[(i + fields.len() - 1) % fields.len()]
    }

    fn remove_selected(&mut self) {
        let rows = self.portfolio.holding_rows();
        let Some(i) = self.table_state.selected() else {
            return;
        };
        let Some(row) = rows.get(i) else {
            return;
        };

        self.portfolio.remove_holding(*row.holding().id());

        let remaining = self.portfolio.holding_rows().len();
        if remaining == 0 {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(i.min(remaining - 1)));
        }
    }
}

/// Leaves raw mode and the alternate screen. Also runs from the panic hook.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}
