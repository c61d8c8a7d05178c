//! CLI domain: parse, route, and output only.
//! No domain orchestration; a single route table dispatches to the
//! generate, check, and watch operations.

mod output;
mod parse;
mod route;

pub use output::{format_check_outcome, format_generate_outcome, map_error};
pub use parse::{Cli, Commands};
pub use route::RunContext;
