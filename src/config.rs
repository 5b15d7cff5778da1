/*
 * Responsibility
 * - 環境変数や設定の読み込み (JWT secret / issuer / audience, port, timeouts)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - AuthConfig は起動時に一度だけ組み立て、以後は読み取り専用
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Token verification settings shared by every request.
///
/// The secret is not printable via Debug.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub leeway_seconds: u64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub auth: AuthConfig,

    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source (the process env in production).
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match var("APP_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("APP_PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("APP_PORT"))?;

        let app_env = AppEnv::parse(var("APP_ENV"));

        let secret_key = var("MIST_API_JWT_SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("MIST_API_JWT_SECRET_KEY"))?;

        let issuer =
            var("MIST_API_JWT_ISSUER").ok_or(ConfigError::Missing("MIST_API_JWT_ISSUER"))?;

        let audience =
            var("MIST_API_JWT_AUDIENCE").ok_or(ConfigError::Missing("MIST_API_JWT_AUDIENCE"))?;

        let leeway_seconds = var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let request_timeout = var("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let request_body_limit_bytes = var("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        Ok(Self {
            addr,
            app_env,
            auth: AuthConfig {
                secret_key,
                issuer,
                audience,
                leeway_seconds,
            },
            request_timeout,
            request_body_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("MIST_API_JWT_SECRET_KEY", "s1"),
        ("MIST_API_JWT_ISSUER", "mist-api"),
        ("MIST_API_JWT_AUDIENCE", "mist-io"),
    ];

    #[test]
    fn defaults_apply_when_only_auth_values_are_set() {
        let config = Config::from_vars(vars(&REQUIRED)).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.auth.secret_key, "s1");
        assert_eq!(config.auth.issuer, "mist-api");
        assert_eq!(config.auth.audience, "mist-io");
        assert_eq!(config.auth.leeway_seconds, 0);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn missing_secret_fails_startup() {
        let err = Config::from_vars(vars(&REQUIRED[1..])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MIST_API_JWT_SECRET_KEY"));
    }

    #[test]
    fn empty_secret_is_treated_as_missing() {
        let err = Config::from_vars(vars(&[
            ("MIST_API_JWT_SECRET_KEY", ""),
            ("MIST_API_JWT_ISSUER", "mist-api"),
            ("MIST_API_JWT_AUDIENCE", "mist-io"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("MIST_API_JWT_SECRET_KEY"));
    }

    #[test]
    fn missing_issuer_and_audience_are_reported_by_name() {
        let err = Config::from_vars(vars(&[("MIST_API_JWT_SECRET_KEY", "s1")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MIST_API_JWT_ISSUER"));

        let err = Config::from_vars(vars(&REQUIRED[..2])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MIST_API_JWT_AUDIENCE"));
    }

    #[test]
    fn non_numeric_port_is_invalid() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("APP_PORT", "eighty"));
        let err = Config::from_vars(vars(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("APP_PORT"));
    }

    #[test]
    fn overrides_are_honoured() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("APP_PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("ACCESS_TOKEN_LEEWAY_SECONDS", "5"),
            ("REQUEST_TIMEOUT_SECONDS", "3"),
            ("REQUEST_BODY_LIMIT_BYTES", "2048"),
        ]);
        let config = Config::from_vars(vars(&pairs)).unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.auth.leeway_seconds, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.request_body_limit_bytes, 2048);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = Config::from_vars(vars(&[
            ("MIST_API_JWT_SECRET_KEY", "very-secret-value"),
            ("MIST_API_JWT_ISSUER", "mist-api"),
            ("MIST_API_JWT_AUDIENCE", "mist-io"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("very-secret-value"));
        assert!(printed.contains("mist-api"));
    }
}
