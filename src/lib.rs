pub mod error;
pub mod config;
pub mod request;
pub mod response;
pub mod transport;
pub mod client;

pub use client::GenderClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use request::{
  BulkEmail, BulkId, BulkName, BulkUsername
, EmailLookup, NameLookup, UsernameLookup
};
pub use response::{ApiResponse, ResponseExt, ServiceError, ServiceErrorCode};

/*

genderapi: async client for the genderapi.io inference service.
Name, email and username lookups, single or bulk, each one POST
returning the decoded JSON body.

genderapi/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and the endpoint table
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Api key, base url, timeout
│   ├── client.rs       # GenderClient and its six lookups
│   ├── request.rs      # Wire payloads, bulk ceilings
│   ├── response.rs     # ApiResponse and errno helpers
│   └── transport.rs    # POST, status classification, decode
└── tests/              # wiremock-backed integration tests

*/

/// GENDERAPI ENDPOINTS:

/// Every endpoint the client posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint
{   /// `POST /api`
    Name
  , /// `POST /api/email`
    Email
  , /// `POST /api/username`
    Username
  , /// `POST /api/name/multi/country`
    NameBulk
  , /// `POST /api/email/multi/country`
    EmailBulk
  , /// `POST /api/username/multi/country`
    UsernameBulk
}

impl Endpoint
{   /// Path appended to the configured base URL
    pub fn path(&self) -> &'static str
    {   match self
        {   Endpoint::Name => "/api"
          , Endpoint::Email => "/api/email"
          , Endpoint::Username => "/api/username"
          , Endpoint::NameBulk => "/api/name/multi/country"
          , Endpoint::EmailBulk => "/api/email/multi/country"
          , Endpoint::UsernameBulk => "/api/username/multi/country"
        }
    }
}
