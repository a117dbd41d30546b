use clap::Args;
use serde::Serialize;

use toolbelt::currency;

use super::CmdResult;

#[derive(Args)]
pub struct CurrencyArgs {
    /// Amount to format
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency code selecting the symbol prefix
    #[arg(long, default_value = "USD")]
    pub code: String,
}

#[derive(Serialize)]
pub struct CurrencyOutput {
    pub amount: f64,
    pub code: String,
    pub formatted: String,
}

pub fn run(args: CurrencyArgs) -> CmdResult<CurrencyOutput> {
    let formatted = currency::format_currency(args.amount, &args.code);

    Ok((
        CurrencyOutput {
            amount: args.amount,
            code: args.code,
            formatted,
        },
        0,
    ))
}
