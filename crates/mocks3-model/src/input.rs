//! Request option types for mock operations.
//!
//! All fields default to "unset" so call sites can write
//! `ListObjectsRequest::default()` for the plain case and reach for the
//! builder when they need more.

use std::collections::HashMap;

use typed_builder::TypedBuilder;

use crate::types::ObjectMetadata;

/// Options accepted by a put-object call.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct PutObjectOptions {
    /// The MIME type to record for the object.
    #[builder(default, setter(strip_option, into))]
    pub content_type: Option<String>,
    /// Content encoding to record.
    #[builder(default, setter(strip_option, into))]
    pub content_encoding: Option<String>,
    /// Content disposition to record.
    #[builder(default, setter(strip_option, into))]
    pub content_disposition: Option<String>,
    /// Cache control directives to record.
    #[builder(default, setter(strip_option, into))]
    pub cache_control: Option<String>,
    /// User-defined metadata headers.
    #[builder(default)]
    pub user_metadata: HashMap<String, String>,
}

impl PutObjectOptions {
    /// Convert the options into the metadata record stored with the object.
    #[must_use]
    pub fn into_metadata(self) -> ObjectMetadata {
        ObjectMetadata {
            content_type: self.content_type,
            content_encoding: self.content_encoding,
            content_disposition: self.content_disposition,
            cache_control: self.cache_control,
            user_metadata: self.user_metadata,
        }
    }
}

/// Parameters for a v1 object listing.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ListObjectsRequest {
    /// Limit the listing to keys beginning with this prefix.
    #[builder(default, setter(strip_option, into))]
    pub prefix: Option<String>,
    /// Group keys sharing a prefix up to this delimiter into common prefixes.
    #[builder(default, setter(strip_option, into))]
    pub delimiter: Option<String>,
    /// Return keys strictly after this marker.
    #[builder(default, setter(strip_option, into))]
    pub marker: Option<String>,
    /// Maximum number of keys to return (the service default is 1000).
    #[builder(default, setter(strip_option))]
    pub max_keys: Option<i32>,
}

/// Parameters for a v2 object listing.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ListObjectsV2Request {
    /// Limit the listing to keys beginning with this prefix.
    #[builder(default, setter(strip_option, into))]
    pub prefix: Option<String>,
    /// Group keys sharing a prefix up to this delimiter into common prefixes.
    #[builder(default, setter(strip_option, into))]
    pub delimiter: Option<String>,
    /// Return keys strictly after this key.
    #[builder(default, setter(strip_option, into))]
    pub start_after: Option<String>,
    /// Opaque token from a previous truncated listing. Takes precedence over
    /// `start_after`.
    #[builder(default, setter(strip_option, into))]
    pub continuation_token: Option<String>,
    /// Maximum number of keys to return (the service default is 1000).
    #[builder(default, setter(strip_option))]
    pub max_keys: Option<i32>,
    /// Whether to include owner information on each summary.
    #[builder(default)]
    pub fetch_owner: bool,
}
