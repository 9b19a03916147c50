use anyhow::{Context, Result, bail};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated admin API keys. Empty means no key is accepted.
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("API_KEYS").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        database_url: Option<String>,
        api_keys: Option<String>,
    ) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let Some(database_url) = database_url else {
            bail!("DATABASE_URL is required");
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url,
            api_keys: api_keys.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_and_port_default_when_unset() {
        let config =
            Config::from_vars(None, None, Some("postgres://localhost/cubes".into()), None)
                .unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_keys, "");
    }

    #[test]
    fn test_explicit_values_win() {
        let config = Config::from_vars(
            Some("127.0.0.1".into()),
            Some("3000".into()),
            Some("postgres://localhost/cubes".into()),
            Some("alpha,beta".into()),
        )
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_keys, "alpha,beta");
    }

    #[test]
    fn test_non_numeric_port_is_an_error() {
        let err = Config::from_vars(
            None,
            Some("http".into()),
            Some("postgres://localhost/cubes".into()),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(Config::from_vars(None, None, None, None).is_err());
    }
}
