//! Command implementations
//!
//! Each submodule handles one CLI command through an `execute` function.
//! Output goes through an [`OutputWriter`](crate::ui::OutputWriter) so the
//! handlers can be tested without a terminal.

pub mod browse;
pub mod categories;
pub mod config;
pub mod contact;
pub mod query;
