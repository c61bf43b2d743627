//! Environment-driven server configuration.
//!
//! DESIGN
//! ======
//! Every setting has a default so the server starts with no environment at
//! all. A variable that is present but unparseable is an error rather than a
//! silent fallback, so a typo in `PORT` fails fast at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ServerError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory served as the static fallback (gallery images, QR code).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` or `BIND_ADDR` is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            assets_dir,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config { key, value: raw }),
    }
}
