//! Server configuration.
//!
//! The listening address is the only setting. Binaries fill it from
//! `--host`/`--port` or the `HOST`/`PORT` environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Host used when none is configured.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Settings for [`crate::server::serve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// Builds a config listening on `host:port`.
    #[must_use]
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            listen: SocketAddr::new(host, port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_5000() {
        assert_eq!(ServerConfig::default().listen.to_string(), "127.0.0.1:5000");
    }
}
