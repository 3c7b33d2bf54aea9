/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors for Smithy codegen

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::collections::HashMap;
use std::fmt;

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field on the error metadata
    ///
    /// Typically, these will be accessed with an extension trait:
    /// ```rust
    /// use smithy_types::Error;
    /// const HOST_ID: &str = "host_id";
    /// trait S3ErrorExt {
    ///     fn extended_request_id(&self) -> Option<&str>;
    /// }
    ///
    /// impl S3ErrorExt for Error {
    ///     fn extended_request_id(&self) -> Option<&str> {
    ///         self.extra(HOST_ID)
    ///     }
    /// }
    ///
    /// let err = Error::builder().custom(HOST_ID, "x-1234").build();
    /// assert_eq!(err.extended_request_id(), Some("x-1234"));
    /// ```
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|k| k.as_str())
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        let mut extras: Vec<_> = self.extras.iter().collect();
        extras.sort();
        for (k, v) in extras {
            fmt.field(k, v);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// The reason an argument was rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// An empty string was given where an enumeration value was expected.
    EmptyValue,
    /// The value is not one of the enumeration's members.
    UnknownVariant,
    /// The key is already present in the map member.
    DuplicateKey,
}

/// An argument handed to a model type was rejected.
///
/// Returned when parsing an enumeration from a string that is empty or not one of its members,
/// and when a guarded map insertion is given a key that is already present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidArgumentError {
    kind: InvalidArgumentKind,
    shape: &'static str,
    value: String,
    message: String,
}

impl InvalidArgumentError {
    /// An empty string was given for the enumeration `shape`.
    pub fn empty_value(shape: &'static str) -> Self {
        Self {
            kind: InvalidArgumentKind::EmptyValue,
            shape,
            value: String::new(),
            message: format!("value cannot be empty for {}", shape),
        }
    }

    /// `value` is not a member of the enumeration `shape`.
    pub fn unknown_variant(shape: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind: InvalidArgumentKind::UnknownVariant,
            shape,
            message: format!("cannot create {} from `{}`: unknown value", shape, value),
            value,
        }
    }

    /// `key` is already present in the map member `member`.
    pub fn duplicate_key(member: &'static str, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: InvalidArgumentKind::DuplicateKey,
            shape: member,
            message: format!("duplicated key ({}) provided for {}", key, member),
            value: key,
        }
    }

    /// Returns why the argument was rejected.
    pub fn kind(&self) -> &InvalidArgumentKind {
        &self.kind
    }

    /// Returns the enumeration or map member that rejected the argument.
    pub fn shape(&self) -> &str {
        self.shape
    }

    /// Returns the rejected value (or key).
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use super::{Error, InvalidArgumentError, InvalidArgumentKind};
    use crate::retry::ProvideErrorKind;

    #[test]
    fn metadata_display() {
        let err = Error::builder()
            .code("NotFoundException")
            .message("Resource not found")
            .request_id("abc-123")
            .custom("extra", "value")
            .build();
        assert_eq!(
            err.to_string(),
            "Error { code: \"NotFoundException\", message: \"Resource not found\", request_id: \"abc-123\", extra: \"value\" }"
        );
        assert_eq!(err.extra("extra"), Some("value"));
        assert_eq!(ProvideErrorKind::code(&err), Some("NotFoundException"));
        assert_eq!(err.error_kind(), None);
    }

    #[test]
    fn into_builder_preserves_fields() {
        let err = Error::builder().code("Code").build();
        let err = err.into_builder().message("now with a message").build();
        assert_eq!(err.code(), Some("Code"));
        assert_eq!(err.message(), Some("now with a message"));
    }

    #[test]
    fn invalid_argument_messages() {
        let err = InvalidArgumentError::unknown_variant("CampaignStatus", "BOGUS");
        assert_eq!(err.kind(), &InvalidArgumentKind::UnknownVariant);
        assert_eq!(err.value(), "BOGUS");
        assert_eq!(
            err.to_string(),
            "cannot create CampaignStatus from `BOGUS`: unknown value"
        );

        let err = InvalidArgumentError::empty_value("JobStatus");
        assert_eq!(err.kind(), &InvalidArgumentKind::EmptyValue);
        assert_eq!(err.shape(), "JobStatus");

        let err = InvalidArgumentError::duplicate_key("Channels", "APNS");
        assert_eq!(err.kind(), &InvalidArgumentKind::DuplicateKey);
        assert_eq!(
            err.to_string(),
            "duplicated key (APNS) provided for Channels"
        );
    }
}
