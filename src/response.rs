//! Response type and read-only helpers
//!
//! The client hands back the decoded body untouched. Success bodies carry
//! `status: true` plus prediction fields, service errors carry
//! `status: false` with `errno` and `errmsg`. Nothing here alters what a
//! lookup returns.

use serde_json::{Map, Value};

/// Decoded JSON object returned by every lookup
pub type ApiResponse = Map<String, Value>;

/// Documented `errno` values reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorCode
{   /// 50
    AccessDenied
  , /// 90
    InvalidCountry
  , /// 91
    MissingField
  , /// 92
    BulkLimitExceeded
  , /// 93
    CreditsExhausted
  , /// 94
    InvalidKey
  , /// 99
    KeyExpired
  , /// Anything undocumented
    Other(i64)
}

impl ServiceErrorCode
{   pub fn from_errno(errno: i64) -> Self
    {   match errno
        {   50 => ServiceErrorCode::AccessDenied
          , 90 => ServiceErrorCode::InvalidCountry
          , 91 => ServiceErrorCode::MissingField
          , 92 => ServiceErrorCode::BulkLimitExceeded
          , 93 => ServiceErrorCode::CreditsExhausted
          , 94 => ServiceErrorCode::InvalidKey
          , 99 => ServiceErrorCode::KeyExpired
          , n => ServiceErrorCode::Other(n)
        }
    }

    pub fn errno(&self) -> i64
    {   match self
        {   ServiceErrorCode::AccessDenied => 50
          , ServiceErrorCode::InvalidCountry => 90
          , ServiceErrorCode::MissingField => 91
          , ServiceErrorCode::BulkLimitExceeded => 92
          , ServiceErrorCode::CreditsExhausted => 93
          , ServiceErrorCode::InvalidKey => 94
          , ServiceErrorCode::KeyExpired => 99
          , ServiceErrorCode::Other(n) => *n
        }
    }
}

/// A `status: false` body, split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError
{   pub code: ServiceErrorCode
  , pub message: String
}

/// Accessors over an [`ApiResponse`]
pub trait ResponseExt
{   /// `true` only when the body says `status: true`
    fn is_success(&self) -> bool;
    fn errno(&self) -> Option<i64>;
    fn errmsg(&self) -> Option<&str>;
    /// The service-reported error, if the body is one
    fn service_error(&self) -> Option<ServiceError>;
}

impl ResponseExt for ApiResponse
{   fn is_success(&self) -> bool
    {   self.get("status").and_then(Value::as_bool) == Some(true)
    }

    fn errno(&self) -> Option<i64>
    {   self.get("errno").and_then(Value::as_i64)
    }

    fn errmsg(&self) -> Option<&str>
    {   self.get("errmsg").and_then(Value::as_str)
    }

    fn service_error(&self) -> Option<ServiceError>
    {   if self.is_success()
        {   return None;
        }
        let errno = self.errno()?;
        Some(ServiceError
        {   code: ServiceErrorCode::from_errno(errno)
          , message: self.errmsg().unwrap_or_default().to_string()
        })
    }
}
