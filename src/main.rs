use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rocket::routes;
use tokio::sync::mpsc::unbounded_channel;

mod bot;
use bot::Notifier;

mod config;
use config::NotifierConfig;

mod webhooks;
use webhooks::{github_webhook, EventSender};

#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Configuration file for octonotify
    #[arg(short, long)]
    config: PathBuf,
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();
    let config_file = File::open(&opts.config)
        .with_context(|| format!("couldn't open {}:", opts.config.display()))?;
    let config: NotifierConfig = serde_yaml::from_reader(BufReader::new(config_file))
        .context("couldn't parse config file")?;

    let (sender, receiver) = unbounded_channel();

    let notifier = Notifier::new(config);
    tokio::spawn(async move { notifier.run(receiver).await });

    let rocket = rocket::build()
        .mount("/", routes![github_webhook])
        .manage(EventSender(sender));
    rocket.launch().await.map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}
