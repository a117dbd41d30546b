pub mod response;

pub use response::{map_cmd_result_to_json, print_json_result, print_success, CliError, CliResponse};
