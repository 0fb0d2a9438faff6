//! Tetris Stack runner (default binary).
//!
//! Key mode (default) draws the menu on the alternate screen and reacts to
//! single key presses. Line mode (`TETRIS_STACK_PLAIN=1`) prints the menu and
//! reads one number per line, which also works with piped input.

use std::io;

use anyhow::Result;

use tetris_stack::term::TerminalRenderer;
use tetris_stack::{run_keys, run_plain, App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut app = App::new(&config);

    if config.plain {
        return run_plain(&mut app, io::stdin().lock(), io::stdout().lock());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_keys(&mut app, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    println!("Exiting...");
    result
}
