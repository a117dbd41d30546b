use clap::Args;

use toolbelt::log_status;
use toolbelt::stats::{self, Statistics};

use super::CmdResult;

#[derive(Args)]
pub struct StatsArgs {
    /// Numbers to summarize
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<f64>,
}

pub fn run(args: StatsArgs) -> CmdResult<Statistics> {
    let summary = stats::calculate_statistics(&args.numbers)?;
    log_status!("stats", "Summarized {} values", args.numbers.len());

    Ok((summary, 0))
}
