//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use admin_client::util::page_config::normalize_api_base;

pub const PORT_VAR: &str = "PORT";
pub const BIND_ADDR_VAR: &str = "ADMIN_BIND_ADDR";
pub const API_BASE_VAR: &str = "ADMIN_API_BASE";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {PORT_VAR} value: {value}")]
    InvalidPort { value: String },
    #[error("invalid {BIND_ADDR_VAR} value: {value}")]
    InvalidBindAddr { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Remote content API handed to the browser; `None` enables demo login.
    pub api_base: Option<String>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_BIND_ADDR`: default `0.0.0.0`
    /// - `ADMIN_API_BASE`: absent or blank means demo mode
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_bind_addr(lookup(BIND_ADDR_VAR).as_deref())?,
            port: parse_port(lookup(PORT_VAR).as_deref())?,
            api_base: normalize_api_base(lookup(API_BASE_VAR).as_deref()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidBindAddr { value: value.to_owned() }),
    }
}
