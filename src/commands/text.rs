use clap::{Args, Subcommand};
use serde::Serialize;

use toolbelt::text;

use super::CmdResult;

#[derive(Args)]
pub struct TextArgs {
    #[command(subcommand)]
    pub command: TextCommands,
}

#[derive(Subcommand)]
pub enum TextCommands {
    /// Reverse the order of whitespace-delimited words
    Reverse(InputArgs),
    /// Check whether text reads the same forwards and backwards
    Palindrome(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Text to inspect
    pub text: String,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum TextOutput {
    Reversed { input: String, reversed: String },
    Palindrome { input: String, palindrome: bool },
}

pub fn run(args: TextArgs) -> CmdResult<TextOutput> {
    let output = match args.command {
        TextCommands::Reverse(input) => {
            let reversed = text::reverse_string(&input.text);
            TextOutput::Reversed {
                input: input.text,
                reversed,
            }
        }
        TextCommands::Palindrome(input) => {
            let palindrome = text::is_palindrome(&input.text);
            TextOutput::Palindrome {
                input: input.text,
                palindrome,
            }
        }
    };

    Ok((output, 0))
}
