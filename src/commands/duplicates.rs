use clap::Args;
use serde::Serialize;

use toolbelt::sequence;

use super::CmdResult;

#[derive(Args)]
pub struct DuplicatesArgs {
    /// Values to scan, compared verbatim
    pub items: Vec<String>,
}

#[derive(Serialize)]
pub struct DuplicatesOutput {
    pub scanned: usize,
    pub duplicates: Vec<String>,
}

pub fn run(args: DuplicatesArgs) -> CmdResult<DuplicatesOutput> {
    let duplicates = sequence::find_duplicates(&args.items);

    Ok((
        DuplicatesOutput {
            scanned: args.items.len(),
            duplicates,
        },
        0,
    ))
}
