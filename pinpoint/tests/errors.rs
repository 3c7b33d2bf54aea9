/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::error::NotFoundException;
use pinpoint::Error;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn metadata(code: &str, message: &str) -> smithy_types::Error {
    smithy_types::Error::builder()
        .code(code)
        .message(message)
        .request_id("req-42")
        .build()
}

#[test]
fn modeled_codes_map_to_variants() {
    let err = Error::from_metadata(metadata("NotFoundException", "Resource not found"));
    assert!(err.is_not_found_exception());
    assert_eq!(err.code(), Some("NotFoundException"));
    assert_eq!(err.message(), Some("Resource not found"));
    assert_eq!(err.request_id(), Some("req-42"));
    assert_eq!(err.error_kind(), Some(ErrorKind::ClientError));
    assert_eq!(err.to_string(), "NotFoundException: Resource not found");
    assert!(std::error::Error::source(&err).is_some());

    match err {
        Error::NotFoundException(inner) => assert_eq!(
            inner,
            NotFoundException::builder()
                .message("Resource not found")
                .request_id("req-42")
                .build()
        ),
        other => panic!("unexpected variant: {:?}", other),
    }
}

#[test]
fn error_kinds() {
    let throttled = Error::from_metadata(metadata("TooManyRequestsException", "slow down"));
    assert!(throttled.is_too_many_requests_exception());
    assert_eq!(throttled.error_kind(), Some(ErrorKind::ThrottlingError));

    let server = Error::from_metadata(metadata("InternalServerErrorException", "oops"));
    assert_eq!(server.error_kind(), Some(ErrorKind::ServerError));

    let conflict = Error::from_metadata(metadata("ConflictException", "busy"));
    assert_eq!(conflict.error_kind(), Some(ErrorKind::ClientError));
}

#[test]
fn unmodeled_code_is_unhandled() {
    let err = Error::from_metadata(metadata("SomethingNew", "surprise"));
    assert!(matches!(err, Error::Unhandled(_)));
    assert_eq!(err.code(), Some("SomethingNew"));
    assert_eq!(err.message(), Some("surprise"));
    assert_eq!(err.error_kind(), None);
}

#[test]
fn exception_without_message() {
    let err = NotFoundException::builder().build();
    assert_eq!(err.to_string(), "NotFoundException");
    assert_eq!(err.message(), None);
}
