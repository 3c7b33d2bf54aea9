/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support code for generated structures.
//!
//! Generated structures render, hash and populate their members through these helpers instead of
//! repeating the same logic for each type.

use crate::error::InvalidArgumentError;
use crate::Blob;
use std::collections::hash_map::{DefaultHasher, Entry};
use std::collections::HashMap;
use std::fmt::{self, Formatter};
use std::hash::{Hash, Hasher};

/// Replacement text for members marked as sensitive in the model.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// A value that can appear as a member of a generated structure.
///
/// Members are hashed structurally so that two structures that compare equal also hash equal,
/// including members that are floating point numbers or maps.
pub trait ShapeValue {
    /// Feeds this value into `state`.
    fn hash_value<H: Hasher>(&self, state: &mut H);

    /// Writes the human-readable form of this value.
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

impl ShapeValue for String {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_str(), state)
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! display_shape_value {
    ($($ty:ty),+) => {
        $(
            impl ShapeValue for $ty {
                fn hash_value<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }

                fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_shape_value!(bool, i32, i64);

impl ShapeValue for f64 {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must produce the same hash
        let normalized = if *self == 0.0 { 0.0_f64 } else { *self };
        state.write_u64(normalized.to_bits())
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ShapeValue for Blob {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&base64::encode(self.as_ref()))
    }
}

impl<T: ShapeValue> ShapeValue for Option<T> {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        match self {
            None => state.write_u8(0),
            Some(value) => {
                state.write_u8(1);
                value.hash_value(state);
            }
        }
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            None => f.write_str("null"),
            Some(value) => value.fmt_value(f),
        }
    }
}

impl<T: ShapeValue> ShapeValue for Vec<T> {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash_value(state);
        }
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<T: ShapeValue> ShapeValue for HashMap<String, T> {
    fn hash_value<H: Hasher>(&self, state: &mut H) {
        // iteration order is unspecified, so entries are combined with a commutative operation
        let mut combined: u64 = 0;
        for (key, value) in self {
            let mut entry = DefaultHasher::new();
            key.hash_value(&mut entry);
            value.hash_value(&mut entry);
            combined = combined.wrapping_add(entry.finish());
        }
        state.write_usize(self.len());
        state.write_u64(combined);
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.write_str("{")?;
        for (idx, (key, value)) in entries.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Renders a structure as `{Name: value, Other: value}`, skipping absent members.
///
/// Member names are the names used on the wire. This is meant for logs and debugging output, it is
/// not a serialization format.
pub struct DisplayShape<'a, 'b: 'a> {
    fmt: &'a mut Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> DisplayShape<'a, 'b> {
    /// Starts rendering a structure into `fmt`.
    pub fn new(fmt: &'a mut Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        DisplayShape {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Renders the member `name` if it is present.
    pub fn field<T: ShapeValue>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.write_name(name);
            }
            if self.result.is_ok() {
                self.result = value.fmt_value(self.fmt);
            }
        }
        self
    }

    /// Renders the member `name` with its value redacted if it is present.
    pub fn sensitive_field<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if value.is_some() {
            if self.result.is_ok() {
                self.result = self.write_name(name);
            }
            if self.result.is_ok() {
                self.result = self.fmt.write_str(REDACTED);
            }
        }
        self
    }

    /// Closes the structure and returns any error hit while rendering.
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.fmt.write_str("}"))
    }

    fn write_name(&mut self, name: &str) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(", ")?;
        }
        self.has_fields = true;
        write!(self.fmt, "{}: ", name)
    }
}

impl fmt::Debug for DisplayShape<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayShape")
            .field("result", &self.result)
            .field("has_fields", &self.has_fields)
            .finish()
    }
}

/// Inserts `key` into a map member, creating the map if needed.
///
/// Fails if `key` is already present; the existing entry is left untouched.
pub fn insert_unique<V>(
    map: &mut Option<HashMap<String, V>>,
    member: &'static str,
    key: String,
    value: V,
) -> Result<(), InvalidArgumentError> {
    match map.get_or_insert_with(HashMap::new).entry(key) {
        Entry::Occupied(existing) => {
            tracing::debug!(member = member, key = %existing.key(), "rejected duplicate map key");
            Err(InvalidArgumentError::duplicate_key(member, existing.key().as_str()))
        }
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::{insert_unique, DisplayShape, ShapeValue};
    use crate::error::InvalidArgumentKind;
    use crate::Blob;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::fmt;
    use std::hash::Hasher;
    use tracing_test::traced_test;

    fn hash_of<T: ShapeValue>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_value(&mut hasher);
        hasher.finish()
    }

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<HashMap<String, String>>,
        items: Option<Vec<String>>,
        secret: Option<String>,
        payload: Option<Blob>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut shape = DisplayShape::new(f);
            shape.field("Name", &self.name);
            shape.field("Count", &self.count);
            shape.field("Tags", &self.tags);
            shape.field("Items", &self.items);
            shape.sensitive_field("Secret", &self.secret);
            shape.field("Payload", &self.payload);
            shape.finish()
        }
    }

    #[test]
    fn display_skips_absent_members() {
        let sample = Sample {
            name: Some("campaign".into()),
            count: None,
            tags: Some(
                vec![("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
                    .into_iter()
                    .collect(),
            ),
            items: Some(vec!["x".into(), "y".into()]),
            secret: Some("hunter2".into()),
            payload: Some(Blob::new("AWS")),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: campaign, Tags: {a=1, b=2}, Items: [x, y], Secret: *** Sensitive Data Redacted ***, Payload: QVdT}"
        );
    }

    #[test]
    fn display_empty_structure() {
        let sample = Sample {
            name: None,
            count: None,
            tags: None,
            items: None,
            secret: None,
            payload: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }

    #[test]
    fn absent_and_empty_hash_differently() {
        let absent: Option<Vec<String>> = None;
        let empty: Option<Vec<String>> = Some(vec![]);
        assert_ne!(hash_of(&absent), hash_of(&empty));
    }

    #[test]
    fn signed_zero_hashes_equal() {
        assert_eq!(hash_of(&0.0_f64), hash_of(&-0.0_f64));
    }

    #[test]
    #[traced_test]
    fn insert_unique_rejects_duplicates() {
        let mut map: Option<HashMap<String, i32>> = None;
        insert_unique(&mut map, "Channels", "APNS".into(), 1).expect("first insert");
        insert_unique(&mut map, "Channels", "GCM".into(), 2).expect("distinct key");
        let err = insert_unique(&mut map, "Channels", "APNS".into(), 3).expect_err("duplicate");
        assert_eq!(err.kind(), &InvalidArgumentKind::DuplicateKey);
        assert_eq!(err.value(), "APNS");

        let map = map.expect("map was created");
        assert_eq!(map.len(), 2);
        assert_eq!(map["APNS"], 1);
        assert!(logs_contain("rejected duplicate map key"));
    }

    proptest! {
        #[test]
        fn map_hash_ignores_insertion_order(entries in proptest::collection::hash_map("[a-z]{1,8}", any::<i32>(), 0..16)) {
            let forward: HashMap<String, i32> = entries.clone().into_iter().collect();
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.reverse();
            let mut reversed = HashMap::with_capacity(1);
            for (k, v) in pairs {
                reversed.insert(k, v);
            }
            prop_assert_eq!(hash_of(&forward), hash_of(&reversed));
        }
    }
}
