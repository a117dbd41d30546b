use clap::Args;
use serde_json::{Map, Value};

use toolbelt::{log_status, merge, Error};

use super::CmdResult;

#[derive(Args)]
pub struct MergeArgs {
    /// Base JSON object
    pub base: String,

    /// Overlay JSON object; its values win on key conflicts
    pub overlay: String,
}

pub fn run(args: MergeArgs) -> CmdResult<Value> {
    let base = parse_object("base", &args.base)?;
    let overlay = parse_object("overlay", &args.overlay)?;

    let merged = merge::merge_dictionaries(&base, &overlay);
    log_status!("merge", "Merged {} keys", merged.len());

    Ok((Value::Object(merged), 0))
}

fn parse_object(field: &str, raw: &str) -> toolbelt::Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::validation_invalid_json(e, Some(format!("parse {}", field))))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::validation_invalid_argument(
            field,
            "Expected a JSON object",
            Some(other.to_string()),
            None,
        )),
    }
}
