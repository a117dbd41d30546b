/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("stats", "Summarized {} values", count);
/// log_status!("merge", "Merged {} keys", merged.len());
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod error;
pub mod output;
pub mod tty;
pub mod utils;

// Re-export common types and the utility modules for ergonomic library use
// Users can write `toolbelt::validate` instead of `toolbelt::utils::validate`
pub use error::{Error, ErrorCode, Result};
pub use utils::*;
