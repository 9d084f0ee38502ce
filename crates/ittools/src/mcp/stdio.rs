use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }

    log::info!("MCP stdio transport ready");

    let reader = BufReader::new(tokio::io::stdin());
    let served = serve_lines(reader, tokio::io::stdout(), &global).await?;

    log::info!("stdin closed after {served} requests");

    Ok(())
}

/// Answer newline-delimited JSON-RPC requests until `reader` hits EOF.
///
/// Blank lines are skipped. Every other line gets exactly one response line.
/// Returns the number of requests answered.
pub async fn serve_lines<R, W>(
    mut reader: R,
    mut writer: W,
    global: &crate::Global,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let mut served = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if global.verbose {
            eprintln!("Received: {trimmed}");
        }

        let response = super::handle_request(trimmed, global).await;
        let response_json =
            serde_json::to_string(&response).context("Failed to serialize JSON-RPC response")?;

        if global.verbose {
            eprintln!("Sending: {response_json}");
        }

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        served += 1;
    }

    Ok(served)
}
