//! Session loop: render, read a choice, apply it, repeat.
//!
//! [`App`] holds everything the loop needs; [`run_plain`] and [`run_keys`]
//! are the two front ends. Line mode works on any reader/writer pair, which
//! is what the integration tests drive.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::AppConfig;
use crate::core::Session;
use crate::input::{handle_key_event, parse_choice, MenuChoice};
use crate::journal::{Journal, TurnRecord};
use crate::term::{render_plain, Line, MenuView, Notice, TerminalRenderer};

/// Whether the loop should keep going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: Session,
    journal: Option<Journal>,
    notice: Option<Notice>,
}

impl App {
    /// Start a session. A journal that cannot be opened is reported and skipped.
    pub fn new(config: &AppConfig) -> Self {
        let journal = config.log_path.as_ref().and_then(|path| match Journal::open(path) {
            Ok(journal) => Some(journal),
            Err(e) => {
                eprintln!("[journal] {:#}; continuing without a journal", e);
                None
            }
        });
        Self::with_journal(Session::new(config.seed), journal)
    }

    pub fn with_journal(session: Session, journal: Option<Journal>) -> Self {
        Self {
            session,
            journal,
            notice: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn has_journal(&self) -> bool {
        self.journal.is_some()
    }

    /// Apply one validated choice; `None` means the input was not a menu option.
    pub fn handle(&mut self, choice: Option<MenuChoice>) -> Flow {
        let command = match choice {
            Some(MenuChoice::Quit) => return Flow::Quit,
            Some(MenuChoice::Run(command)) => command,
            None => {
                self.notice = Some(Notice::InvalidChoice);
                return Flow::Continue;
            }
        };

        let result = self.session.apply(command);
        self.notice = Some(Notice::from_result(result));

        if let Some(journal) = self.journal.as_mut() {
            let record = TurnRecord::new(command, &result, &self.session.snapshot());
            if let Err(e) = journal.write(&record) {
                eprintln!("[journal] {:#}; journal disabled", e);
                self.journal = None;
            }
        }
        Flow::Continue
    }

    pub fn render(&self, view: &MenuView) -> Vec<Line> {
        view.render(&self.session.snapshot(), self.notice.as_ref())
    }
}

/// Line mode: print the menu, read one line per turn. EOF quits.
pub fn run_plain<R: BufRead, W: Write>(app: &mut App, mut input: R, mut output: W) -> Result<()> {
    let view = MenuView::new(false);
    let mut line = Vec::new();
    loop {
        write!(output, "{}Choice: ", render_plain(&app.render(&view)))?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        // Bytes that are not UTF-8 become replacement chars and fail to parse.
        let choice = parse_choice(&String::from_utf8_lossy(&line));
        if app.handle(choice) == Flow::Quit {
            break;
        }
    }
    writeln!(output, "\nExiting...")?;
    output.flush()?;
    Ok(())
}

/// Key mode: raw terminal, one key press per turn.
pub fn run_keys(app: &mut App, term: &mut TerminalRenderer) -> Result<()> {
    let view = MenuView::default();
    loop {
        term.draw(&app.render(&view))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle(handle_key_event(key)) == Flow::Quit {
                    return Ok(());
                }
            }
            // Resize and everything else just triggers a redraw.
            _ => {}
        }
    }
}
