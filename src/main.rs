use clap::Parser as _;

mod cli;
mod config;
mod gateways;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Args {
        config: config_file,
        command,
    } = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(config_file.as_ref())?;
    cli::run(command, cfg).await
}
