//! USD/BRL rate client.
//!
//! Asks the local rate server for the current quote under a 300 ms deadline and
//! writes it to a text file as `Dólar: <bid>`. Any failure (transport, deadline,
//! or a body that is not `{"valor": "..."}`) is printed and no file is written.
//!
//! Usage example (CLI):
//! ```bash
//! rate_client --url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;
mod output;
mod requester;
#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::output::persist_to_file;
use crate::requester::request_quote;
use clap::Parser;
use log::{error, info};
use rate_common::Result;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let client = Client::builder().build()?;
    run(&args, &client).await
}

/// Requests the quote and, only if that succeeds, writes the output file.
async fn run(args: &Args, client: &Client) -> Result<()> {
    let summary = request_quote(client, &args.url, args.deadline())
        .await
        .inspect_err(|e| error!("Quote request failed: {}", e))?;

    let path = args.output_path();
    persist_to_file(&summary, &path)
        .inspect_err(|e| error!("Writing {} failed: {}", path.display(), e))?;
    info!("Quote received and saved to {}: R$ {}", path.display(), summary.bid);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
