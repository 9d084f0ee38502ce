use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use ittools_core::url::{
    encode_text, process_codec, CodecMode, CodecRequest, CodecResponse, UNRESERVED,
};
use std::io::IsTerminal;

#[derive(Debug, clap::Args, Clone)]
pub struct EncodeOptions {
    /// Text to percent-encode
    pub text: String,

    /// ASCII characters to leave unescaped besides letters and digits
    #[arg(long, env = "URL_SAFE", default_value = UNRESERVED)]
    pub safe: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct DecodeOptions {
    /// Text to percent-decode
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn encode(options: EncodeOptions) -> Result<()> {
    let response = encode_response(&options)?;
    output(&response, options.json)
}

pub fn decode(options: DecodeOptions) -> Result<()> {
    let response = run_codec(options.text, CodecMode::Decode)?;
    output(&response, options.json)
}

fn encode_response(options: &EncodeOptions) -> Result<CodecResponse> {
    let response = encode_text(&options.text, &options.safe).map_err(Error::from)?;
    Ok(response)
}

fn run_codec(text: String, mode: CodecMode) -> Result<CodecResponse> {
    let response = process_codec(&CodecRequest {
        text,
        mode: mode.to_string(),
    })
    .map_err(Error::from)?;

    Ok(response)
}

fn output(response: &CodecResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    if std::io::stdout().is_terminal() {
        let title = match response.mode {
            CodecMode::Encode => "PERCENT-ENCODED",
            CodecMode::Decode => "PERCENT-DECODED",
        };
        eprintln!("\n{}", "=".repeat(80).bright_cyan());
        eprintln!("{}", title.bright_cyan().bold());
        eprintln!("{}", "=".repeat(80).bright_cyan());
        eprintln!("\n{}: {}\n", "Input".green(), response.original.bright_white());
        println!("{}", response.result.bright_yellow());
    } else {
        println!("{}", response.result);
    }

    Ok(())
}
