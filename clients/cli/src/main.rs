mod cli;
mod common;
mod config;
mod create_counter;
mod output;
mod show;
mod update_counter;

use crate::{cli::Cli, config::Config};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type CommandResult = Result<String, Error>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    solana_logger::setup_with_default("solana=info");

    let (cli, matches) =
        Cli::parse_with_matches(std::env::args_os()).unwrap_or_else(|err| err.exit());

    let mut wallet_manager = None;
    let config = Config::new(cli.clone(), matches.clone(), &mut wallet_manager)?;

    let output = cli
        .command
        .execute(&config, &matches, &mut wallet_manager)
        .await?;
    println!("{output}");

    Ok(())
}
