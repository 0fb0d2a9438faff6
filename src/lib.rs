//! Tetris Stack (workspace facade crate).
//!
//! The piece containers and rules live in dedicated crates under `crates/`;
//! this package re-exports them as `tetris_stack::{core,input,journal,term,types}`
//! and adds the pieces the binary needs on top: configuration and the session loop.

pub mod app;
pub mod config;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_journal as journal;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub use app::{run_keys, run_plain, App, Flow};
pub use config::AppConfig;
