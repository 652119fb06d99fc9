use std::{net::SocketAddr, path::PathBuf};

use anyhow::Result;
use dotenvy::dotenv;
use folio::config::Config;
use tracing_subscriber::EnvFilter;

mod command_parser;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine.
    dotenv().ok();

    let args = command_parser::arg_parser().get_matches();
    match args.subcommand() {
        Some(("config", _matches)) => {
            print!("{}", Config::default_as_string()?);
        }
        Some(("serve", matches)) => {
            let mut config = Config::read_config()?;
            if let Some(bind) = matches.get_one::<SocketAddr>("bind") {
                config.bind_address = *bind;
            }
            if let Some(path) = matches.get_one::<PathBuf>("catalog") {
                config.catalog_path = Some(path.clone());
            }
            let filter = match EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => EnvFilter::try_new(&config.log_filter)?,
            };
            tracing_subscriber::fmt().with_env_filter(filter).init();
            server::start(config).await?;
        }
        Some((name, _matches)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}
