use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration. Every flag can also come from the environment.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bank_api", version, about = "In-memory banking HTTP API")]
pub struct Config {
    /// Host address to bind the HTTP server to
    #[arg(long, env = "BANK_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "BANK_API_PORT", default_value_t = 8000)]
    pub port: u16,

    /// CSV file (id,pin,balance) replacing the built-in accounts
    #[arg(long, env = "BANK_API_ACCOUNTS")]
    pub accounts: Option<PathBuf>,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_localhost_8000() {
        let config = Config::try_parse_from(["bank_api"]).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert!(config.accounts.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bank_api",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--accounts",
            "seed.csv",
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.accounts, Some(PathBuf::from("seed.csv")));
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["bank_api", "--port", "70000"]).is_err());
    }
}
