use clap::Parser;

/// Command-line arguments. Only presentation is configurable: the root
/// directory, extensions, and replacement table are fixed.
#[derive(Parser, Debug)]
#[command(name = "dediacritic")]
#[command(
    about = "Remove Romanian diacritics from text files under lib/",
    long_about = "Recursively scans ./lib for .dart, .yaml, .yml, .json, .md and .txt files \
                  and rewrites in place any file containing ă, â, î, ș or ț (either case)."
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "plain")]
    pub plain: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
