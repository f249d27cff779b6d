//! Wire payloads for single and bulk lookups
//!
//! Optional fields are `None` unless the caller sets them and are left
//! out of the serialized body entirely. An explicit `false` is sent.

use serde::{Deserialize, Serialize};

/// Maximum names per bulk request
pub const NAME_BULK_LIMIT: usize = 100;
/// Maximum emails per bulk request
pub const EMAIL_BULK_LIMIT: usize = 50;
/// Maximum usernames per bulk request
pub const USERNAME_BULK_LIMIT: usize = 50;

// ===== Single lookups =====

/// Body of `POST /api`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameLookup
{   pub name: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(rename = "askToAI", skip_serializing_if = "Option::is_none")]
    pub ask_to_ai: Option<bool>
  , #[serde(rename = "forceToGenderize", skip_serializing_if = "Option::is_none")]
    pub force_to_genderize: Option<bool>
}

impl NameLookup
{   pub fn new(name: impl Into<String>) -> Self
    {   NameLookup
        {   name: name.into()
          , country: None
          , ask_to_ai: None
          , force_to_genderize: None
        }
    }

    /// Two-letter country code narrowing the prediction
    pub fn country(mut self, country: impl Into<String>) -> Self
    {   self.country = Some(country.into());
        self
    }

    pub fn ask_to_ai(mut self, ask_to_ai: bool) -> Self
    {   self.ask_to_ai = Some(ask_to_ai);
        self
    }

    pub fn force_to_genderize(mut self, force: bool) -> Self
    {   self.force_to_genderize = Some(force);
        self
    }
}

/// Body of `POST /api/email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailLookup
{   pub email: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(rename = "askToAI", skip_serializing_if = "Option::is_none")]
    pub ask_to_ai: Option<bool>
}

impl EmailLookup
{   pub fn new(email: impl Into<String>) -> Self
    {   EmailLookup
        {   email: email.into()
          , country: None
          , ask_to_ai: None
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self
    {   self.country = Some(country.into());
        self
    }

    pub fn ask_to_ai(mut self, ask_to_ai: bool) -> Self
    {   self.ask_to_ai = Some(ask_to_ai);
        self
    }
}

/// Body of `POST /api/username`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameLookup
{   pub username: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(rename = "askToAI", skip_serializing_if = "Option::is_none")]
    pub ask_to_ai: Option<bool>
  , #[serde(rename = "forceToGenderize", skip_serializing_if = "Option::is_none")]
    pub force_to_genderize: Option<bool>
}

impl UsernameLookup
{   pub fn new(username: impl Into<String>) -> Self
    {   UsernameLookup
        {   username: username.into()
          , country: None
          , ask_to_ai: None
          , force_to_genderize: None
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self
    {   self.country = Some(country.into());
        self
    }

    pub fn ask_to_ai(mut self, ask_to_ai: bool) -> Self
    {   self.ask_to_ai = Some(ask_to_ai);
        self
    }

    pub fn force_to_genderize(mut self, force: bool) -> Self
    {   self.force_to_genderize = Some(force);
        self
    }
}

impl From<&str> for NameLookup
{   fn from(name: &str) -> Self
    {   NameLookup::new(name)
    }
}

impl From<String> for NameLookup
{   fn from(name: String) -> Self
    {   NameLookup::new(name)
    }
}

impl From<&str> for EmailLookup
{   fn from(email: &str) -> Self
    {   EmailLookup::new(email)
    }
}

impl From<String> for EmailLookup
{   fn from(email: String) -> Self
    {   EmailLookup::new(email)
    }
}

impl From<&str> for UsernameLookup
{   fn from(username: &str) -> Self
    {   UsernameLookup::new(username)
    }
}

impl From<String> for UsernameLookup
{   fn from(username: String) -> Self
    {   UsernameLookup::new(username)
    }
}

// ===== Bulk lookups =====

/// Caller-chosen identifier echoed back next to each bulk result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulkId
{   Text(String)
  , Number(i64)
}

impl From<&str> for BulkId
{   fn from(id: &str) -> Self
    {   BulkId::Text(id.to_string())
    }
}

impl From<String> for BulkId
{   fn from(id: String) -> Self
    {   BulkId::Text(id)
    }
}

impl From<i64> for BulkId
{   fn from(id: i64) -> Self
    {   BulkId::Number(id)
    }
}

/// One entry of `POST /api/name/multi/country`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkName
{   pub name: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BulkId>
}

/// One entry of `POST /api/email/multi/country`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEmail
{   pub email: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BulkId>
}

/// One entry of `POST /api/username/multi/country`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUsername
{   pub username: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BulkId>
}

macro_rules! bulk_item_builders
{   ($ty:ident, $field:ident) => {
      impl $ty
      {   pub fn new($field: impl Into<String>) -> Self
          {   $ty
              {   $field: $field.into()
                , country: None
                , id: None
              }
          }

          pub fn country(mut self, country: impl Into<String>) -> Self
          {   self.country = Some(country.into());
              self
          }

          pub fn id(mut self, id: impl Into<BulkId>) -> Self
          {   self.id = Some(id.into());
              self
          }
      }
    };
}

bulk_item_builders!(BulkName, name);
bulk_item_builders!(BulkEmail, email);
bulk_item_builders!(BulkUsername, username);

/// Per-kind facts about a bulk entry type
pub trait BulkItem: Serialize
{   /// Ceiling on entries per request
    const LIMIT: usize;
    /// Endpoint the batch is posted to
    const ENDPOINT: crate::Endpoint;
    /// Plural noun used in error messages
    const NOUN: &'static str;
}

impl BulkItem for BulkName
{   const LIMIT: usize = NAME_BULK_LIMIT;
    const ENDPOINT: crate::Endpoint = crate::Endpoint::NameBulk;
    const NOUN: &'static str = "names";
}

impl BulkItem for BulkEmail
{   const LIMIT: usize = EMAIL_BULK_LIMIT;
    const ENDPOINT: crate::Endpoint = crate::Endpoint::EmailBulk;
    const NOUN: &'static str = "emails";
}

impl BulkItem for BulkUsername
{   const LIMIT: usize = USERNAME_BULK_LIMIT;
    const ENDPOINT: crate::Endpoint = crate::Endpoint::UsernameBulk;
    const NOUN: &'static str = "usernames";
}

/// Envelope `{ "data": [...] }` shared by the bulk endpoints
#[derive(Debug, Clone, Serialize)]
pub struct BulkRequest<'a, T: BulkItem>
{   pub data: &'a [T]
}

impl<'a, T: BulkItem> BulkRequest<'a, T>
{   /// Wrap a batch, rejecting it when it exceeds the kind's ceiling
    pub fn new(data: &'a [T]) -> crate::error::Result<Self>
    {   if data.len() > T::LIMIT
        {   return Err(crate::error::Error::InvalidArgument(
              format!(
                "at most {} {} per request, got {}",
                T::LIMIT, T::NOUN, data.len()
              )
            ));
        }
        Ok(BulkRequest { data })
    }
}
