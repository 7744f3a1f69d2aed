// backend/src/config.rs

use std::{env, net::IpAddr, net::SocketAddr};

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8871;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: IpAddr::from([0, 0, 0, 0]), port: DEFAULT_PORT }
    }
}

impl Config {
    /// Reads `HOST` and `PORT`; unset variables fall back to the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = host.as_deref().unwrap_or(DEFAULT_HOST);
        let host: IpAddr = host.parse().with_context(|| format!("invalid HOST: {host}"))?;
        let port = match port {
            Some(p) => p.parse().with_context(|| format!("invalid PORT: {p}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8871");
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_vars(Some("127.0.0.1".into()), Some("9000".into())).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_vars(None, Some("eighty".into())).unwrap_err();
        assert!(err.to_string().contains("invalid PORT"));
    }

    #[test]
    fn rejects_bad_host() {
        assert!(Config::from_vars(Some("not-an-ip".into()), None).is_err());
    }
}
