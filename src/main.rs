use anyhow::Context;
use capitoltrades::adapter::inbound::cli::command::Cli;
use capitoltrades::adapter::inbound::cli::run;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let command = format!("{:?}", cli.command);

    run::execute(cli)
        .await
        .with_context(|| format!("capitoltrades {command} failed"))
}
