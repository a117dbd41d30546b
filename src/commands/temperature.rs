use clap::Args;
use serde::Serialize;

use toolbelt::temperature;

use super::CmdResult;

#[derive(Args)]
pub struct TemperatureArgs {
    /// Temperature value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Source unit code (C, F or K)
    pub from_unit: String,

    /// Target unit code (C, F or K)
    pub to_unit: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureOutput {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted: f64,
}

pub fn run(args: TemperatureArgs) -> CmdResult<TemperatureOutput> {
    let converted = temperature::convert_temperature(args.value, &args.from_unit, &args.to_unit)?;

    Ok((
        TemperatureOutput {
            value: args.value,
            from_unit: args.from_unit,
            to_unit: args.to_unit,
            converted,
        },
        0,
    ))
}
