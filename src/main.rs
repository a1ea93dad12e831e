use anyhow::Result;
use clap::Parser;
use config::FinderConfig;
use dotenvy::dotenv;
use finder::describe_nearest_stop;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod config;
mod fetch;
mod finder;
mod geocode;
mod model;
mod stops;

#[derive(Parser, Debug)]
#[command(about = "Finds the nearest MBTA subway station to a place")]
struct Args {
    /// Place name or street address to look up
    #[arg(default_value = "789 Somerville Avenue, Somerville, MA")]
    place: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    _ = dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let appender = tracing_appender::rolling::daily("./logs", "mbta_stop_finder.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);

    // A layer that logs events to rolling files, keeping stdout free for the result line.
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .pretty();

    Registry::default().with(file_log).with(env_filter).init();

    let args = Args::parse();
    let config = FinderConfig::from_env();

    let description = describe_nearest_stop(&config, &args.place).await?;

    println!("{description}");

    Ok(())
}
