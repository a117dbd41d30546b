use clap::Args;
use serde::Serialize;

use toolbelt::sequence;

use super::CmdResult;

#[derive(Args)]
pub struct FibonacciArgs {
    /// Number of leading terms to generate
    #[arg(allow_negative_numbers = true)]
    pub count: i64,
}

#[derive(Serialize)]
pub struct FibonacciOutput {
    pub count: usize,
    pub terms: Vec<u64>,
}

pub fn run(args: FibonacciArgs) -> CmdResult<FibonacciOutput> {
    let terms = sequence::calculate_fibonacci(args.count)?;

    Ok((
        FibonacciOutput {
            count: terms.len(),
            terms,
        },
        0,
    ))
}
