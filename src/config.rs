use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const STAGING_BASE_URL: &str = "https://api.staging.shadowfax.in";
const PRODUCTION_BASE_URL: &str = "https://api.shadowfax.in";

/// Remote environments the Flash API is served from. No discovery, no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Staging => STAGING_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Staging => f.write_str("staging"),
            Environment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(Error::Config(format!("unknown environment: {other}"))),
        }
    }
}

/// Credentials and environment selection for an embedding application.
///
/// The client itself takes explicit values; this is for callers that wire
/// everything through process environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub credits_key: String,
    pub store_brand_id: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_key: require("SHADOWFAX_API_KEY")?,
            credits_key: require("SHADOWFAX_CREDITS_KEY")?,
            store_brand_id: require("SHADOWFAX_STORE_BRAND_ID")?,
            environment: parse_or_default("SHADOWFAX_ENVIRONMENT", Environment::Staging)?,
        })
    }
}

fn require(key: &str) -> Result<String, Error> {
    env::var(key).map_err(|_| Error::Config(format!("{key} is not set")))
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, Error>
where
    T: FromStr<Err = Error>,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>(),
        Err(_) => Ok(default),
    }
}
