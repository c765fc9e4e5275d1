mod debug_echo;
mod health_check;
mod helpers;
mod lead;

pub use debug_echo::debug_echo;
pub use health_check::health_check;
pub use helpers::{error_chain_fmt, json_error_handler};
pub use lead::*;
