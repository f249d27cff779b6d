use log::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{
  BulkEmail, BulkItem, BulkName, BulkRequest, BulkUsername
, EmailLookup, NameLookup, UsernameLookup
};
use crate::response::ApiResponse;
use crate::Endpoint;

/// Client for the gender-inference service.
///
/// Every method sends exactly one request and returns the decoded body,
/// whether the service reports success or an `errno`. Only transport,
/// server-unavailable and decode failures surface as `Err`.
///
/// Holds no mutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct GenderClient
{   config: ClientConfig
  , http_client: reqwest::Client
}

impl GenderClient
{   pub fn new(config: ClientConfig) -> Self
    {   GenderClient::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn with_client(
      http_client: reqwest::Client
    , config: ClientConfig
    ) -> Self
    {   debug!("Creating GenderClient for {}", config.base_url);
        GenderClient
        {   config
          , http_client
        }
    }

    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    /// Predict gender from a first name
    pub async fn lookup_by_name(
      &self
    , lookup: impl Into<NameLookup>
    ) -> Result<ApiResponse>
    {   let lookup = lookup.into();
        debug!("lookup_by_name: {}", lookup.name);
        self.send(Endpoint::Name, &lookup).await
    }

    /// Predict gender from an email address
    pub async fn lookup_by_email(
      &self
    , lookup: impl Into<EmailLookup>
    ) -> Result<ApiResponse>
    {   let lookup = lookup.into();
        debug!("lookup_by_email");
        self.send(Endpoint::Email, &lookup).await
    }

    /// Predict gender from a username or nickname
    pub async fn lookup_by_username(
      &self
    , lookup: impl Into<UsernameLookup>
    ) -> Result<ApiResponse>
    {   let lookup = lookup.into();
        debug!("lookup_by_username: {}", lookup.username);
        self.send(Endpoint::Username, &lookup).await
    }

    /// Up to 100 names in one request
    pub async fn lookup_by_name_bulk(
      &self
    , items: Vec<BulkName>
    ) -> Result<ApiResponse>
    {   self.send_bulk(&items).await
    }

    /// Up to 50 emails in one request
    pub async fn lookup_by_email_bulk(
      &self
    , items: Vec<BulkEmail>
    ) -> Result<ApiResponse>
    {   self.send_bulk(&items).await
    }

    /// Up to 50 usernames in one request
    pub async fn lookup_by_username_bulk(
      &self
    , items: Vec<BulkUsername>
    ) -> Result<ApiResponse>
    {   self.send_bulk(&items).await
    }

    async fn send_bulk<T: BulkItem>(
      &self
    , items: &[T]
    ) -> Result<ApiResponse>
    {   debug!("bulk lookup of {} {}", items.len(), T::NOUN);
        // Rejects before any I/O.
        let request = BulkRequest::new(items)?;
        self.send(T::ENDPOINT, &request).await
    }

    async fn send<P: serde::Serialize>(
      &self
    , endpoint: Endpoint
    , payload: &P
    ) -> Result<ApiResponse>
    {   crate::transport::post_json(
          &self.http_client
        , &self.config
        , endpoint
        , payload
        ).await
    }
}
