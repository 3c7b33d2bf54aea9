/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Binary Blob Type
///
/// Blobs represent protocol-agnostic binary content. Human readable formats (JSON) carry them as
/// base64 strings; binary formats carry the raw bytes.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    /// Creates a new blob from the given `input`.
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    /// Consumes the `Blob` and returns a `Vec<u8>` with its contents.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Blob::new(value)
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Blob::new(value)
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&base64::encode(&self.inner))
        } else {
            serializer.serialize_bytes(&self.inner)
        }
    }
}

struct HumanReadableBlobVisitor;

impl<'de> Visitor<'de> for HumanReadableBlobVisitor {
    type Value = Blob;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a base64 encoded string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        base64::decode(v)
            .map(Blob::new)
            .map_err(|err| E::custom(format!("invalid base64 blob: {}", err)))
    }
}

struct NotHumanReadableBlobVisitor;

impl<'de> Visitor<'de> for NotHumanReadableBlobVisitor {
    type Value = Blob;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a byte buffer")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Blob::new(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Blob::new(v))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HumanReadableBlobVisitor)
        } else {
            deserializer.deserialize_byte_buf(NotHumanReadableBlobVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Blob;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    struct ForTest {
        blob: Blob,
    }

    #[test]
    fn human_readable_blob() {
        let aws_in_base64 = r#"{"blob":"QVdT"}"#;
        let for_test = ForTest {
            blob: Blob::new(vec![b'A', b'W', b'S']),
        };
        assert_eq!(for_test, serde_json::from_str(aws_in_base64).unwrap());
        assert_eq!(serde_json::to_string(&for_test).unwrap(), aws_in_base64);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = serde_json::from_str::<ForTest>(r#"{"blob":"not base64!"}"#)
            .expect_err("invalid base64");
        assert!(err.to_string().contains("invalid base64 blob"), "{}", err);
    }

    #[test]
    fn blob_exposes_bytes() {
        let blob = Blob::from(&b"hello"[..]);
        assert_eq!(blob.as_ref(), b"hello");
        assert_eq!(blob.into_inner(), b"hello".to_vec());
    }
}
