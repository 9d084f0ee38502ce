mod codec;
mod parse;

use crate::prelude::{eprintln, *};

pub use codec::{DecodeOptions, EncodeOptions};
pub use parse::ParseOptions;

#[derive(Debug, clap::Parser)]
#[command(name = "url")]
#[command(about = "Parse, percent-encode and percent-decode URLs")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Split a URL into scheme, authority, path, params, query and fragment
    #[clap(name = "parse")]
    Parse(ParseOptions),

    /// Percent-encode text
    #[clap(name = "encode")]
    Encode(EncodeOptions),

    /// Percent-decode text
    #[clap(name = "decode")]
    Decode(DecodeOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Running url command...");
    }

    match app.command {
        Commands::Parse(options) => parse::parse(options),
        Commands::Encode(options) => codec::encode(options),
        Commands::Decode(options) => codec::decode(options),
    }
}
