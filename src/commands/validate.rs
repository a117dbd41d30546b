use clap::{Args, Subcommand};
use serde::Serialize;

use toolbelt::validate;

use super::CmdResult;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(subcommand)]
    pub command: ValidateCommands,
}

#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check an email address for conventional local@domain.tld shape
    Email(TargetArgs),
    /// Check a phone number for a plausible numbering-plan shape
    Phone(TargetArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Text to validate
    pub input: String,
}

#[derive(Serialize)]
pub struct ValidateOutput {
    pub input: String,
    pub kind: &'static str,
    pub valid: bool,
}

pub fn run(args: ValidateArgs) -> CmdResult<ValidateOutput> {
    let (input, kind, valid) = match args.command {
        ValidateCommands::Email(target) => {
            let valid = validate::validate_email(&target.input);
            (target.input, "email", valid)
        }
        ValidateCommands::Phone(target) => {
            let valid = validate::validate_phone_number(&target.input);
            (target.input, "phone", valid)
        }
    };

    Ok((ValidateOutput { input, kind, valid }, 0))
}
