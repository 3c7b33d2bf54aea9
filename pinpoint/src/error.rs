// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// All possible error types for this service.
#[non_exhaustive]
#[derive(::std::fmt::Debug)]
pub enum Error {
    /// <p>Provides information about an API request or response.</p>
    BadRequestException(crate::error::BadRequestException),
    /// <p>Provides information about an API request or response.</p>
    ConflictException(crate::error::ConflictException),
    /// <p>Provides information about an API request or response.</p>
    ForbiddenException(crate::error::ForbiddenException),
    /// <p>Provides information about an API request or response.</p>
    InternalServerErrorException(crate::error::InternalServerErrorException),
    /// <p>Provides information about an API request or response.</p>
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    /// <p>Provides information about an API request or response.</p>
    NotFoundException(crate::error::NotFoundException),
    /// <p>Provides information about an API request or response.</p>
    PayloadTooLargeException(crate::error::PayloadTooLargeException),
    /// <p>Provides information about an API request or response.</p>
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(::smithy_types::Error),
}
impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Error::BadRequestException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ConflictException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::ForbiddenException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InternalServerErrorException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::MethodNotAllowedException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::NotFoundException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::PayloadTooLargeException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::TooManyRequestsException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => ::std::fmt::Display::fmt(inner, f),
        }
    }
}
impl Error {
    /// Maps generic error metadata returned by the service onto the matching modeled error.
    ///
    /// Codes that are not modeled are kept as [`Error::Unhandled`].
    pub fn from_metadata(meta: ::smithy_types::Error) -> Self {
        match meta.code() {
            ::std::option::Option::Some("BadRequestException") => Error::BadRequestException(
                crate::error::BadRequestException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("ConflictException") => Error::ConflictException(
                crate::error::ConflictException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("ForbiddenException") => Error::ForbiddenException(
                crate::error::ForbiddenException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("InternalServerErrorException") => Error::InternalServerErrorException(
                crate::error::InternalServerErrorException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("MethodNotAllowedException") => Error::MethodNotAllowedException(
                crate::error::MethodNotAllowedException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("NotFoundException") => Error::NotFoundException(
                crate::error::NotFoundException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("PayloadTooLargeException") => Error::PayloadTooLargeException(
                crate::error::PayloadTooLargeException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            ::std::option::Option::Some("TooManyRequestsException") => Error::TooManyRequestsException(
                crate::error::TooManyRequestsException::builder()
                    .set_message(meta.message().map(::std::borrow::ToOwned::to_owned))
                    .set_request_id(meta.request_id().map(::std::borrow::ToOwned::to_owned))
                    .build(),
            ),
            _ => {
                ::tracing::debug!(code = ?meta.code(), "service returned an unmodeled error");
                Error::Unhandled(meta)
            }
        }
    }
    /// Returns the error message, if one was provided.
    pub fn message(&self) -> ::std::option::Option<&str> {
        match self {
            Error::BadRequestException(inner) => inner.message(),
            Error::ConflictException(inner) => inner.message(),
            Error::ForbiddenException(inner) => inner.message(),
            Error::InternalServerErrorException(inner) => inner.message(),
            Error::MethodNotAllowedException(inner) => inner.message(),
            Error::NotFoundException(inner) => inner.message(),
            Error::PayloadTooLargeException(inner) => inner.message(),
            Error::TooManyRequestsException(inner) => inner.message(),
            Error::Unhandled(inner) => inner.message(),
        }
    }
    /// Returns the request ID, if one was provided.
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        match self {
            Error::BadRequestException(inner) => inner.request_id(),
            Error::ConflictException(inner) => inner.request_id(),
            Error::ForbiddenException(inner) => inner.request_id(),
            Error::InternalServerErrorException(inner) => inner.request_id(),
            Error::MethodNotAllowedException(inner) => inner.request_id(),
            Error::NotFoundException(inner) => inner.request_id(),
            Error::PayloadTooLargeException(inner) => inner.request_id(),
            Error::TooManyRequestsException(inner) => inner.request_id(),
            Error::Unhandled(inner) => inner.request_id(),
        }
    }
    /// Returns `true` if the error kind is `Error::BadRequestException`.
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(self, Error::BadRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::ConflictException`.
    pub fn is_conflict_exception(&self) -> bool {
        matches!(self, Error::ConflictException(_))
    }
    /// Returns `true` if the error kind is `Error::ForbiddenException`.
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(self, Error::ForbiddenException(_))
    }
    /// Returns `true` if the error kind is `Error::InternalServerErrorException`.
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(self, Error::InternalServerErrorException(_))
    }
    /// Returns `true` if the error kind is `Error::MethodNotAllowedException`.
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(self, Error::MethodNotAllowedException(_))
    }
    /// Returns `true` if the error kind is `Error::NotFoundException`.
    pub fn is_not_found_exception(&self) -> bool {
        matches!(self, Error::NotFoundException(_))
    }
    /// Returns `true` if the error kind is `Error::PayloadTooLargeException`.
    pub fn is_payload_too_large_exception(&self) -> bool {
        matches!(self, Error::PayloadTooLargeException(_))
    }
    /// Returns `true` if the error kind is `Error::TooManyRequestsException`.
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(self, Error::TooManyRequestsException(_))
    }
}
impl ::smithy_types::retry::ProvideErrorKind for Error {
    fn error_kind(&self) -> ::std::option::Option<::smithy_types::retry::ErrorKind> {
        match self {
            Error::BadRequestException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::ConflictException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::ForbiddenException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::InternalServerErrorException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ServerError),
            Error::MethodNotAllowedException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::NotFoundException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::PayloadTooLargeException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ClientError),
            Error::TooManyRequestsException(_) => ::std::option::Option::Some(::smithy_types::retry::ErrorKind::ThrottlingError),
            Error::Unhandled(_) => ::std::option::Option::None,
        }
    }
    fn code(&self) -> ::std::option::Option<&str> {
        match self {
            Error::BadRequestException(_) => ::std::option::Option::Some("BadRequestException"),
            Error::ConflictException(_) => ::std::option::Option::Some("ConflictException"),
            Error::ForbiddenException(_) => ::std::option::Option::Some("ForbiddenException"),
            Error::InternalServerErrorException(_) => ::std::option::Option::Some("InternalServerErrorException"),
            Error::MethodNotAllowedException(_) => ::std::option::Option::Some("MethodNotAllowedException"),
            Error::NotFoundException(_) => ::std::option::Option::Some("NotFoundException"),
            Error::PayloadTooLargeException(_) => ::std::option::Option::Some("PayloadTooLargeException"),
            Error::TooManyRequestsException(_) => ::std::option::Option::Some("TooManyRequestsException"),
            Error::Unhandled(inner) => inner.code(),
        }
    }
}
impl ::std::error::Error for Error {
    fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::BadRequestException(inner) => ::std::option::Option::Some(inner),
            Error::ConflictException(inner) => ::std::option::Option::Some(inner),
            Error::ForbiddenException(inner) => ::std::option::Option::Some(inner),
            Error::InternalServerErrorException(inner) => ::std::option::Option::Some(inner),
            Error::MethodNotAllowedException(inner) => ::std::option::Option::Some(inner),
            Error::NotFoundException(inner) => ::std::option::Option::Some(inner),
            Error::PayloadTooLargeException(inner) => ::std::option::Option::Some(inner),
            Error::TooManyRequestsException(inner) => ::std::option::Option::Some(inner),
            Error::Unhandled(inner) => ::std::option::Option::Some(inner),
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct BadRequestException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl BadRequestException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`BadRequestException`](crate::error::BadRequestException).
    pub fn builder() -> crate::error::bad_request_exception::Builder {
        crate::error::bad_request_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::bad_request_exception::Builder {
        crate::error::bad_request_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for BadRequestException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for BadRequestException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "BadRequestException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for BadRequestException {}
/// See [`BadRequestException`](crate::error::BadRequestException).
pub mod bad_request_exception {

    /// A builder for [`BadRequestException`](crate::error::BadRequestException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`BadRequestException`](crate::error::BadRequestException).
        pub fn build(self) -> crate::error::BadRequestException {
            crate::error::BadRequestException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ConflictException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl ConflictException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ConflictException`](crate::error::ConflictException).
    pub fn builder() -> crate::error::conflict_exception::Builder {
        crate::error::conflict_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::conflict_exception::Builder {
        crate::error::conflict_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for ConflictException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for ConflictException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "ConflictException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for ConflictException {}
/// See [`ConflictException`](crate::error::ConflictException).
pub mod conflict_exception {

    /// A builder for [`ConflictException`](crate::error::ConflictException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`ConflictException`](crate::error::ConflictException).
        pub fn build(self) -> crate::error::ConflictException {
            crate::error::ConflictException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ForbiddenException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl ForbiddenException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ForbiddenException`](crate::error::ForbiddenException).
    pub fn builder() -> crate::error::forbidden_exception::Builder {
        crate::error::forbidden_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::forbidden_exception::Builder {
        crate::error::forbidden_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for ForbiddenException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for ForbiddenException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "ForbiddenException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for ForbiddenException {}
/// See [`ForbiddenException`](crate::error::ForbiddenException).
pub mod forbidden_exception {

    /// A builder for [`ForbiddenException`](crate::error::ForbiddenException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`ForbiddenException`](crate::error::ForbiddenException).
        pub fn build(self) -> crate::error::ForbiddenException {
            crate::error::ForbiddenException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct InternalServerErrorException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl InternalServerErrorException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InternalServerErrorException`](crate::error::InternalServerErrorException).
    pub fn builder() -> crate::error::internal_server_error_exception::Builder {
        crate::error::internal_server_error_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::internal_server_error_exception::Builder {
        crate::error::internal_server_error_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for InternalServerErrorException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for InternalServerErrorException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "InternalServerErrorException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for InternalServerErrorException {}
/// See [`InternalServerErrorException`](crate::error::InternalServerErrorException).
pub mod internal_server_error_exception {

    /// A builder for [`InternalServerErrorException`](crate::error::InternalServerErrorException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`InternalServerErrorException`](crate::error::InternalServerErrorException).
        pub fn build(self) -> crate::error::InternalServerErrorException {
            crate::error::InternalServerErrorException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MethodNotAllowedException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl MethodNotAllowedException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`MethodNotAllowedException`](crate::error::MethodNotAllowedException).
    pub fn builder() -> crate::error::method_not_allowed_exception::Builder {
        crate::error::method_not_allowed_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::method_not_allowed_exception::Builder {
        crate::error::method_not_allowed_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for MethodNotAllowedException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for MethodNotAllowedException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "MethodNotAllowedException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for MethodNotAllowedException {}
/// See [`MethodNotAllowedException`](crate::error::MethodNotAllowedException).
pub mod method_not_allowed_exception {

    /// A builder for [`MethodNotAllowedException`](crate::error::MethodNotAllowedException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`MethodNotAllowedException`](crate::error::MethodNotAllowedException).
        pub fn build(self) -> crate::error::MethodNotAllowedException {
            crate::error::MethodNotAllowedException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct NotFoundException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl NotFoundException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`NotFoundException`](crate::error::NotFoundException).
    pub fn builder() -> crate::error::not_found_exception::Builder {
        crate::error::not_found_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::not_found_exception::Builder {
        crate::error::not_found_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for NotFoundException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for NotFoundException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "NotFoundException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for NotFoundException {}
/// See [`NotFoundException`](crate::error::NotFoundException).
pub mod not_found_exception {

    /// A builder for [`NotFoundException`](crate::error::NotFoundException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`NotFoundException`](crate::error::NotFoundException).
        pub fn build(self) -> crate::error::NotFoundException {
            crate::error::NotFoundException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct PayloadTooLargeException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl PayloadTooLargeException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`PayloadTooLargeException`](crate::error::PayloadTooLargeException).
    pub fn builder() -> crate::error::payload_too_large_exception::Builder {
        crate::error::payload_too_large_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::payload_too_large_exception::Builder {
        crate::error::payload_too_large_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for PayloadTooLargeException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for PayloadTooLargeException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "PayloadTooLargeException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for PayloadTooLargeException {}
/// See [`PayloadTooLargeException`](crate::error::PayloadTooLargeException).
pub mod payload_too_large_exception {

    /// A builder for [`PayloadTooLargeException`](crate::error::PayloadTooLargeException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`PayloadTooLargeException`](crate::error::PayloadTooLargeException).
        pub fn build(self) -> crate::error::PayloadTooLargeException {
            crate::error::PayloadTooLargeException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TooManyRequestsException {
    /// <p>The message that's returned from the API.</p>
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the request or response.</p>
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl TooManyRequestsException {
    /// <p>The message that's returned from the API.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    /// <p>The unique identifier for the request or response.</p>
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TooManyRequestsException`](crate::error::TooManyRequestsException).
    pub fn builder() -> crate::error::too_many_requests_exception::Builder {
        crate::error::too_many_requests_exception::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::error::too_many_requests_exception::Builder {
        crate::error::too_many_requests_exception::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for TooManyRequestsException {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for TooManyRequestsException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "TooManyRequestsException")?;
        if let ::std::option::Option::Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        ::std::result::Result::Ok(())
    }
}
impl ::std::error::Error for TooManyRequestsException {}
/// See [`TooManyRequestsException`](crate::error::TooManyRequestsException).
pub mod too_many_requests_exception {

    /// A builder for [`TooManyRequestsException`](crate::error::TooManyRequestsException).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The message that's returned from the API.</p>
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The message that's returned from the API.</p>
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// <p>The unique identifier for the request or response.</p>
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`TooManyRequestsException`](crate::error::TooManyRequestsException).
        pub fn build(self) -> crate::error::TooManyRequestsException {
            crate::error::TooManyRequestsException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
