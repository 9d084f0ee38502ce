use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use ittools_core::url::{parse_url, ParseRequest, ParseResponse};
use std::io::IsTerminal;

#[derive(Debug, clap::Args, Clone)]
pub struct ParseOptions {
    /// URL or URI reference to parse
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse(options: ParseOptions) -> Result<()> {
    let response = parse_url(&ParseRequest { url: options.url }).map_err(Error::from)?;

    log::debug!("parsed {:?} into {:?}", response.original_url, response);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        output_formatted(&response);
    }

    Ok(())
}

/// Rows of the component table, with `None` for absent optional values.
fn component_rows(response: &ParseResponse) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Scheme", Some(response.scheme.clone())),
        ("Netloc", Some(response.netloc.clone())),
        ("Username", response.username.clone()),
        ("Password", response.password.clone()),
        ("Hostname", response.hostname.clone()),
        ("Port", response.port.map(|port| port.to_string())),
        ("Path", Some(response.path.clone())),
        ("Params", Some(response.params.clone())),
        ("Query", Some(response.query.clone())),
        ("Fragment", Some(response.fragment.clone())),
    ]
}

fn output_formatted(response: &ParseResponse) {
    let is_tty = std::io::stdout().is_terminal();

    if is_tty {
        eprintln!("\n{}", "=".repeat(80).bright_cyan());
        eprintln!("{}", "URL COMPONENTS".bright_cyan().bold());
        eprintln!("{}", "=".repeat(80).bright_cyan());
        eprintln!(
            "\n{}: {}\n",
            "URL".green(),
            response.original_url.cyan().underline()
        );
    }

    let mut table = new_table();
    for (label, value) in component_rows(response) {
        let value = match value {
            Some(value) if value.is_empty() => "".to_string(),
            Some(value) => value.bright_white().to_string(),
            None => "-".bright_black().to_string(),
        };
        table.add_row(prettytable::row![label.bold().cyan(), value]);
    }
    table.printstd();

    if response.query_params.is_empty() {
        return;
    }

    println!("\n{}\n", "Query Parameters".bold().cyan());

    let mut table = new_table();
    table.add_row(prettytable::row!["Key".bold(), "Value".bold()]);
    for (key, values) in &response.query_params {
        for value in values {
            table.add_row(prettytable::row![key.green(), value]);
        }
    }
    table.printstd();
}
