pub type CmdResult<T> = toolbelt::Result<(T, i32)>;

pub mod currency;
pub mod duplicates;
pub mod fibonacci;
pub mod merge;
pub mod stats;
pub mod temperature;
pub mod text;
pub mod validate;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        toolbelt::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (toolbelt::Result<serde_json::Value>, i32) {
    toolbelt::tty::status("toolbelt is working...");

    match command {
        crate::Commands::Validate(args) => dispatch!(args, validate),
        crate::Commands::Fibonacci(args) => dispatch!(args, fibonacci),
        crate::Commands::Text(args) => dispatch!(args, text),
        crate::Commands::Duplicates(args) => dispatch!(args, duplicates),
        crate::Commands::Merge(args) => dispatch!(args, merge),
        crate::Commands::Stats(args) => dispatch!(args, stats),
        crate::Commands::Currency(args) => dispatch!(args, currency),
        crate::Commands::Temperature(args) => dispatch!(args, temperature),
    }
}
