use clap::{Parser, Subcommand};
use damm::AlphabetKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Damm check symbol tools", long_about = None)]
pub struct Args {
    /// Alphabet of the input (digit, upper-hex or lower-hex)
    #[arg(long, short, global = true, default_value = "digit")]
    pub alphabet: AlphabetKind,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the check symbol for an input
    Check {
        /// Symbols without a check symbol
        input: String,
    },
    /// Print the input followed by its check symbol
    Append {
        /// Symbols without a check symbol
        input: String,
    },
    /// Validate an input that ends with its check symbol
    Validate {
        /// Symbols including the trailing check symbol
        input: String,
    },
    /// Verify the registered quasigroup tables
    Tables,
}
