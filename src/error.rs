use std::fmt;

/// Custom error type for genderapi operations
/// Implements Clone so results can be stored and compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Connection failure, timeout or unreadable body
    Transport(String)
  , /// Service or intermediary unavailable (500, 502, 503, 504, 408)
    Server(u16)
  , /// Response body was not a JSON object
    Decode(String)
  , /// Caller input rejected before any request was sent
    InvalidArgument(String)
  , /// Client configuration could not be assembled
    InvalidConfiguration(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Transport(msg) => {
              write!(f, "Transport error: {}", msg)
            }
          , Error::Server(status) => {
              write!(f,
                "Server unavailable (HTTP {})",
                status
              )
            }
          , Error::Decode(msg) => {
              write!(f, "Decode error: {}", msg)
            }
          , Error::InvalidArgument(msg) => {
              write!(f, "Invalid argument: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   Error::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
