use crate::prelude::*;
use clap::Parser;

mod api;
mod error;
mod mcp;
mod prelude;
mod url;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Developer utilities for URIs: parse, percent-encode and percent-decode from the command line, over MCP, or over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "ITTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Parse, encode and decode URLs
    URL(crate::url::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),

    /// HTTP JSON API server
    API(crate::api::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::URL(sub_app) => crate::url::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
        SubCommands::API(sub_app) => crate::api::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
