//! Text protocol adapter.
//!
//! - `parser`: decodes one input line into a `Command` or a game start
//! - `session`: runs decoded lines against the current game and reports
//!   summaries
//!
//! The engine itself never sees text beyond the deal string.

pub mod parser;
pub mod session;

pub use parser::{command_kind, parse_line, Input};
pub use session::Session;
