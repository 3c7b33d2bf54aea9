/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors.
//!
//! Modeled errors report what category of failure they represent so that the layer sending
//! requests can decide what to do with them. No retrying happens here.

/// The category of failure an error belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or a TLS negotiation failure.
    ///
    /// These are never modeled by a service; they are determined from the transport.
    TransientError,

    /// The service explicitly told the client to back off, such as a 429 HTTP error.
    ThrottlingError,

    /// The service failed to handle a request that was otherwise valid.
    ServerError,

    /// The request itself was at fault. Sending it again unchanged will fail again.
    ClientError,
}

impl ErrorKind {
    /// Returns `true` when an identical request may succeed if it is sent again later.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorKind::ClientError)
    }
}

/// Implemented by errors that know their code and category.
pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the kind depends
    /// on an HTTP status code), return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn only_client_errors_are_final() {
        assert!(ErrorKind::ThrottlingError.is_retryable());
        assert!(ErrorKind::ServerError.is_retryable());
        assert!(ErrorKind::TransientError.is_retryable());
        assert!(!ErrorKind::ClientError.is_retryable());
    }
}
