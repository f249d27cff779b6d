//! Configuration for the genderapi client

use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Production endpoint of the service
pub const DEFAULT_BASE_URL: &str
  = "https://api.genderapi.io";

/// Per-request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GENDERAPI_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "GENDERAPI_BASE_URL";

fn default_base_url() -> String
{   DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64
{   DEFAULT_TIMEOUT_SECS
}

/// Client configuration, fixed for the lifetime of a client.
///
/// Neither the key nor the URL is validated locally; the service
/// rejects bad keys with an `errno` response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// Bearer token sent with every request
    pub api_key: String
  , /// Prefix for every endpoint path, used verbatim
    #[serde(default = "default_base_url")]
    pub base_url: String
  , /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64
}

impl ClientConfig
{   /// Create a configuration against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self
    {   ClientConfig
        {   api_key: api_key.into()
          , base_url: default_base_url()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
        }
    }

    /// Read `GENDERAPI_API_KEY` and optionally `GENDERAPI_BASE_URL`
    pub fn from_env() -> crate::error::Result<Self>
    {   let api_key = std::env::var(API_KEY_ENV)
          .map_err(|_| {
            crate::error::Error::InvalidConfiguration(
              format!("Environment variable {} not set", API_KEY_ENV)
            )
          })?;
        let mut config = ClientConfig::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV)
        {   config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self
    {   self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self
    {   self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for an endpoint path
    pub fn url_for(&self, endpoint: crate::Endpoint) -> String
    {   format!("{}{}", self.base_url, endpoint.path())
    }
}

// Keeps the key out of log lines that format the config.
impl fmt::Debug for ClientConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ClientConfig")
          .field("api_key", &"<redacted>")
          .field("base_url", &self.base_url)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}
