use clap::Parser;
use vc_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    vc_cli::bootstrap::run(cli).await
}
