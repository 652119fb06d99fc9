use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub bind_address:         SocketAddr,
    /// Seed file for the catalog, the built-in catalog is used when unset.
    pub catalog_path:         Option<PathBuf>,
    /// HS256 secret for access tokens. Empty means a random one per process.
    pub token_secret:         String,
    pub token_ttl_seconds:    i64,
    /// Status code answered to a login with bad credentials.
    pub invalid_login_status: u16,
    pub log_filter:           String,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed("FOLIO_")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address:         SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            catalog_path:         None,
            token_secret:         String::new(),
            token_ttl_seconds:    60 * 60,
            invalid_login_status: 208,
            log_filter:           "info".into(),
        }
    }
}
