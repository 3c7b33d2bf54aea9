// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>How a segment was created.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum SegmentType {
    #[allow(missing_docs)] // documentation missing in model
    Dimensional,
    #[allow(missing_docs)] // documentation missing in model
    Import,
}
impl SegmentType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Dimensional => "DIMENSIONAL",
            SegmentType::Import => "IMPORT",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["DIMENSIONAL", "IMPORT"]
    }
}
impl ::std::str::FromStr for SegmentType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "DIMENSIONAL" => ::std::result::Result::Ok(SegmentType::Dimensional),
            "IMPORT" => ::std::result::Result::Ok(SegmentType::Import),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("SegmentType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("SegmentType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for SegmentType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for SegmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for SegmentType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for SegmentType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Whether endpoints matching a dimension are included or excluded.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum DimensionType {
    #[allow(missing_docs)] // documentation missing in model
    Inclusive,
    #[allow(missing_docs)] // documentation missing in model
    Exclusive,
}
impl DimensionType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionType::Inclusive => "INCLUSIVE",
            DimensionType::Exclusive => "EXCLUSIVE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INCLUSIVE", "EXCLUSIVE"]
    }
}
impl ::std::str::FromStr for DimensionType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "INCLUSIVE" => ::std::result::Result::Ok(DimensionType::Inclusive),
            "EXCLUSIVE" => ::std::result::Result::Ok(DimensionType::Exclusive),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("DimensionType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("DimensionType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for DimensionType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for DimensionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for DimensionType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for DimensionType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for DimensionType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for DimensionType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How attribute values are compared to an attribute dimension.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum AttributeType {
    #[allow(missing_docs)] // documentation missing in model
    Inclusive,
    #[allow(missing_docs)] // documentation missing in model
    Exclusive,
    #[allow(missing_docs)] // documentation missing in model
    Contains,
    #[allow(missing_docs)] // documentation missing in model
    Before,
    #[allow(missing_docs)] // documentation missing in model
    After,
    #[allow(missing_docs)] // documentation missing in model
    On,
    #[allow(missing_docs)] // documentation missing in model
    Between,
}
impl AttributeType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Inclusive => "INCLUSIVE",
            AttributeType::Exclusive => "EXCLUSIVE",
            AttributeType::Contains => "CONTAINS",
            AttributeType::Before => "BEFORE",
            AttributeType::After => "AFTER",
            AttributeType::On => "ON",
            AttributeType::Between => "BETWEEN",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INCLUSIVE", "EXCLUSIVE", "CONTAINS", "BEFORE", "AFTER", "ON", "BETWEEN"]
    }
}
impl ::std::str::FromStr for AttributeType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "INCLUSIVE" => ::std::result::Result::Ok(AttributeType::Inclusive),
            "EXCLUSIVE" => ::std::result::Result::Ok(AttributeType::Exclusive),
            "CONTAINS" => ::std::result::Result::Ok(AttributeType::Contains),
            "BEFORE" => ::std::result::Result::Ok(AttributeType::Before),
            "AFTER" => ::std::result::Result::Ok(AttributeType::After),
            "ON" => ::std::result::Result::Ok(AttributeType::On),
            "BETWEEN" => ::std::result::Result::Ok(AttributeType::Between),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("AttributeType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("AttributeType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for AttributeType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for AttributeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for AttributeType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for AttributeType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>The window for a recency dimension.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum Duration {
    #[allow(missing_docs)] // documentation missing in model
    Hr24,
    #[allow(missing_docs)] // documentation missing in model
    Day7,
    #[allow(missing_docs)] // documentation missing in model
    Day14,
    #[allow(missing_docs)] // documentation missing in model
    Day30,
}
impl Duration {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::Hr24 => "HR_24",
            Duration::Day7 => "DAY_7",
            Duration::Day14 => "DAY_14",
            Duration::Day30 => "DAY_30",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["HR_24", "DAY_7", "DAY_14", "DAY_30"]
    }
}
impl ::std::str::FromStr for Duration {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "HR_24" => ::std::result::Result::Ok(Duration::Hr24),
            "DAY_7" => ::std::result::Result::Ok(Duration::Day7),
            "DAY_14" => ::std::result::Result::Ok(Duration::Day14),
            "DAY_30" => ::std::result::Result::Ok(Duration::Day30),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Duration")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Duration", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Duration {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Duration {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Duration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Duration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Whether a recency dimension matches active or inactive endpoints.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum RecencyType {
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Inactive,
}
impl RecencyType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecencyType::Active => "ACTIVE",
            RecencyType::Inactive => "INACTIVE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ACTIVE", "INACTIVE"]
    }
}
impl ::std::str::FromStr for RecencyType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ACTIVE" => ::std::result::Result::Ok(RecencyType::Active),
            "INACTIVE" => ::std::result::Result::Ok(RecencyType::Inactive),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("RecencyType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("RecencyType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for RecencyType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for RecencyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for RecencyType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for RecencyType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for RecencyType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for RecencyType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How segment groups are combined.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum Include {
    #[allow(missing_docs)] // documentation missing in model
    All,
    #[allow(missing_docs)] // documentation missing in model
    Any,
    #[allow(missing_docs)] // documentation missing in model
    None,
}
impl Include {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Include::All => "ALL",
            Include::Any => "ANY",
            Include::None => "NONE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ALL", "ANY", "NONE"]
    }
}
impl ::std::str::FromStr for Include {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => ::std::result::Result::Ok(Include::All),
            "ANY" => ::std::result::Result::Ok(Include::Any),
            "NONE" => ::std::result::Result::Ok(Include::None),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Include")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Include", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Include {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Include {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Include {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Include {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Include {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Include {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How the base segments of a group are combined.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum SourceType {
    #[allow(missing_docs)] // documentation missing in model
    All,
    #[allow(missing_docs)] // documentation missing in model
    Any,
    #[allow(missing_docs)] // documentation missing in model
    None,
}
impl SourceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::All => "ALL",
            SourceType::Any => "ANY",
            SourceType::None => "NONE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ALL", "ANY", "NONE"]
    }
}
impl ::std::str::FromStr for SourceType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => ::std::result::Result::Ok(SourceType::All),
            "ANY" => ::std::result::Result::Ok(SourceType::Any),
            "NONE" => ::std::result::Result::Ok(SourceType::None),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("SourceType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("SourceType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for SourceType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for SourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for SourceType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for SourceType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How the dimensions of a segment group are combined.</p>
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum Type {
    #[allow(missing_docs)] // documentation missing in model
    All,
    #[allow(missing_docs)] // documentation missing in model
    Any,
    #[allow(missing_docs)] // documentation missing in model
    None,
}
impl Type {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::All => "ALL",
            Type::Any => "ANY",
            Type::None => "NONE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ALL", "ANY", "NONE"]
    }
}
impl ::std::str::FromStr for Type {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => ::std::result::Result::Ok(Type::All),
            "ANY" => ::std::result::Result::Ok(Type::Any),
            "NONE" => ::std::result::Result::Ok(Type::None),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Type")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Type", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Type {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Type {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Type {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Provides information about the configuration, dimension, and other settings for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    /// <p>The dimension settings for the segment.</p>
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    /// <p>The settings for the import job that's associated with the segment.</p>
    #[serde(rename = "ImportDefinition", skip_serializing_if = "Option::is_none")]
    pub(crate) import_definition: ::std::option::Option<crate::model::SegmentImportResource>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentGroups", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_groups: ::std::option::Option<crate::model::SegmentGroupList>,
    #[serde(rename = "SegmentType", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_type: ::std::option::Option<crate::model::SegmentType>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl SegmentResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    /// <p>The dimension settings for the segment.</p>
    pub fn dimensions(&self) -> ::std::option::Option<&crate::model::SegmentDimensions> {
        self.dimensions.as_ref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The settings for the import job that's associated with the segment.</p>
    pub fn import_definition(&self) -> ::std::option::Option<&crate::model::SegmentImportResource> {
        self.import_definition.as_ref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn segment_groups(&self) -> ::std::option::Option<&crate::model::SegmentGroupList> {
        self.segment_groups.as_ref()
    }
    pub fn segment_type(&self) -> ::std::option::Option<&crate::model::SegmentType> {
        self.segment_type.as_ref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`SegmentResponse`](crate::model::SegmentResponse).
    pub fn builder() -> crate::model::segment_response::Builder {
        crate::model::segment_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_response::Builder {
        crate::model::segment_response::Builder {
            application_id: self.application_id,
            arn: self.arn,
            creation_date: self.creation_date,
            dimensions: self.dimensions,
            id: self.id,
            import_definition: self.import_definition,
            last_modified_date: self.last_modified_date,
            name: self.name,
            segment_groups: self.segment_groups,
            segment_type: self.segment_type,
            tags: self.tags,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for SegmentResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_definition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_groups, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for SegmentResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("Arn", &self.arn);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Dimensions", &self.dimensions);
        shape.field("Id", &self.id);
        shape.field("ImportDefinition", &self.import_definition);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Name", &self.name);
        shape.field("SegmentGroups", &self.segment_groups);
        shape.field("SegmentType", &self.segment_type);
        shape.field("tags", &self.tags);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentResponse`](crate::model::SegmentResponse).
pub mod segment_response {

    /// A builder for [`SegmentResponse`](crate::model::SegmentResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) import_definition: ::std::option::Option<crate::model::SegmentImportResource>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) segment_groups: ::std::option::Option<crate::model::SegmentGroupList>,
        pub(crate) segment_type: ::std::option::Option<crate::model::SegmentType>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) version: ::std::option::Option<i32>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.arn = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn get_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.arn
        }
        pub fn creation_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.creation_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn get_creation_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.creation_date
        }
        /// <p>The dimension settings for the segment.</p>
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = ::std::option::Option::Some(input);
            self
        }
        /// <p>The dimension settings for the segment.</p>
        pub fn set_dimensions(mut self, input: ::std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        /// <p>The dimension settings for the segment.</p>
        pub fn get_dimensions(&self) -> &::std::option::Option<crate::model::SegmentDimensions> {
            &self.dimensions
        }
        pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.id
        }
        /// <p>The settings for the import job that's associated with the segment.</p>
        pub fn import_definition(mut self, input: crate::model::SegmentImportResource) -> Self {
            self.import_definition = ::std::option::Option::Some(input);
            self
        }
        /// <p>The settings for the import job that's associated with the segment.</p>
        pub fn set_import_definition(mut self, input: ::std::option::Option<crate::model::SegmentImportResource>) -> Self {
            self.import_definition = input;
            self
        }
        /// <p>The settings for the import job that's associated with the segment.</p>
        pub fn get_import_definition(&self) -> &::std::option::Option<crate::model::SegmentImportResource> {
            &self.import_definition
        }
        pub fn last_modified_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn get_last_modified_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_date
        }
        pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.name
        }
        pub fn segment_groups(mut self, input: crate::model::SegmentGroupList) -> Self {
            self.segment_groups = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_groups(mut self, input: ::std::option::Option<crate::model::SegmentGroupList>) -> Self {
            self.segment_groups = input;
            self
        }
        pub fn get_segment_groups(&self) -> &::std::option::Option<crate::model::SegmentGroupList> {
            &self.segment_groups
        }
        pub fn segment_type(mut self, input: crate::model::SegmentType) -> Self {
            self.segment_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_type(mut self, input: ::std::option::Option<crate::model::SegmentType>) -> Self {
            self.segment_type = input;
            self
        }
        pub fn get_segment_type(&self) -> &::std::option::Option<crate::model::SegmentType> {
            &self.segment_type
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn tags(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.tags
        }
        /// Inserts a key-value pair into `tags`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_tags_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.tags, "tags", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = ::std::option::Option::Some(input);
            self
        }
        pub fn set_version(mut self, input: ::std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &::std::option::Option<i32> {
            &self.version
        }
        /// Consumes the builder and constructs a [`SegmentResponse`](crate::model::SegmentResponse).
        pub fn build(self) -> crate::model::SegmentResponse {
            crate::model::SegmentResponse {
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                dimensions: self.dimensions,
                id: self.id,
                import_definition: self.import_definition,
                last_modified_date: self.last_modified_date,
                name: self.name,
                segment_groups: self.segment_groups,
                segment_type: self.segment_type,
                tags: self.tags,
                version: self.version,
            }
        }
    }
}

/// <p>Provides information about all the segments that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::SegmentResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl SegmentsResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::SegmentResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentsResponse`](crate::model::SegmentsResponse).
    pub fn builder() -> crate::model::segments_response::Builder {
        crate::model::segments_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segments_response::Builder {
        crate::model::segments_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for SegmentsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for SegmentsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentsResponse`](crate::model::SegmentsResponse).
pub mod segments_response {

    /// A builder for [`SegmentsResponse`](crate::model::SegmentsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::SegmentResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::SegmentResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::SegmentResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::SegmentResponse>> {
            &self.item
        }
        pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_token = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`SegmentsResponse`](crate::model::SegmentsResponse).
        pub fn build(self) -> crate::model::SegmentsResponse {
            crate::model::SegmentsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Specifies the configuration, dimension, and other settings for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WriteSegmentRequest {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentGroups", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_groups: ::std::option::Option<crate::model::SegmentGroupList>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
}
impl WriteSegmentRequest {
    pub fn dimensions(&self) -> ::std::option::Option<&crate::model::SegmentDimensions> {
        self.dimensions.as_ref()
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn segment_groups(&self) -> ::std::option::Option<&crate::model::SegmentGroupList> {
        self.segment_groups.as_ref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`WriteSegmentRequest`](crate::model::WriteSegmentRequest).
    pub fn builder() -> crate::model::write_segment_request::Builder {
        crate::model::write_segment_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::write_segment_request::Builder {
        crate::model::write_segment_request::Builder {
            dimensions: self.dimensions,
            name: self.name,
            segment_groups: self.segment_groups,
            tags: self.tags,
        }
    }
}
impl ::std::hash::Hash for WriteSegmentRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_groups, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
    }
}
impl ::std::fmt::Display for WriteSegmentRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Dimensions", &self.dimensions);
        shape.field("Name", &self.name);
        shape.field("SegmentGroups", &self.segment_groups);
        shape.field("tags", &self.tags);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WriteSegmentRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WriteSegmentRequest`](crate::model::WriteSegmentRequest).
pub mod write_segment_request {

    /// A builder for [`WriteSegmentRequest`](crate::model::WriteSegmentRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) segment_groups: ::std::option::Option<crate::model::SegmentGroupList>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = ::std::option::Option::Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: ::std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn get_dimensions(&self) -> &::std::option::Option<crate::model::SegmentDimensions> {
            &self.dimensions
        }
        pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.name
        }
        pub fn segment_groups(mut self, input: crate::model::SegmentGroupList) -> Self {
            self.segment_groups = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_groups(mut self, input: ::std::option::Option<crate::model::SegmentGroupList>) -> Self {
            self.segment_groups = input;
            self
        }
        pub fn get_segment_groups(&self) -> &::std::option::Option<crate::model::SegmentGroupList> {
            &self.segment_groups
        }
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn tags(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.tags
        }
        /// Inserts a key-value pair into `tags`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_tags_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.tags, "tags", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`WriteSegmentRequest`](crate::model::WriteSegmentRequest).
        pub fn build(self) -> crate::model::WriteSegmentRequest {
            crate::model::WriteSegmentRequest {
                dimensions: self.dimensions,
                name: self.name,
                segment_groups: self.segment_groups,
                tags: self.tags,
            }
        }
    }
}

/// <p>Specifies the dimension settings for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentDimensions {
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
    #[serde(rename = "Behavior", skip_serializing_if = "Option::is_none")]
    pub(crate) behavior: ::std::option::Option<crate::model::SegmentBehaviors>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub(crate) demographic: ::std::option::Option<crate::model::SegmentDemographics>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub(crate) location: ::std::option::Option<crate::model::SegmentLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>,
    #[serde(rename = "UserAttributes", skip_serializing_if = "Option::is_none")]
    pub(crate) user_attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
}
impl SegmentDimensions {
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>> {
        self.attributes.as_ref()
    }
    pub fn behavior(&self) -> ::std::option::Option<&crate::model::SegmentBehaviors> {
        self.behavior.as_ref()
    }
    pub fn demographic(&self) -> ::std::option::Option<&crate::model::SegmentDemographics> {
        self.demographic.as_ref()
    }
    pub fn location(&self) -> ::std::option::Option<&crate::model::SegmentLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>> {
        self.metrics.as_ref()
    }
    pub fn user_attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>> {
        self.user_attributes.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentDimensions`](crate::model::SegmentDimensions).
    pub fn builder() -> crate::model::segment_dimensions::Builder {
        crate::model::segment_dimensions::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_dimensions::Builder {
        crate::model::segment_dimensions::Builder {
            attributes: self.attributes,
            behavior: self.behavior,
            demographic: self.demographic,
            location: self.location,
            metrics: self.metrics,
            user_attributes: self.user_attributes,
        }
    }
}
impl ::std::hash::Hash for SegmentDimensions {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.behavior, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.demographic, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.location, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user_attributes, state);
    }
}
impl ::std::fmt::Display for SegmentDimensions {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Attributes", &self.attributes);
        shape.field("Behavior", &self.behavior);
        shape.field("Demographic", &self.demographic);
        shape.field("Location", &self.location);
        shape.field("Metrics", &self.metrics);
        shape.field("UserAttributes", &self.user_attributes);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentDimensions {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentDimensions`](crate::model::SegmentDimensions).
pub mod segment_dimensions {

    /// A builder for [`SegmentDimensions`](crate::model::SegmentDimensions).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
        pub(crate) behavior: ::std::option::Option<crate::model::SegmentBehaviors>,
        pub(crate) demographic: ::std::option::Option<crate::model::SegmentDemographics>,
        pub(crate) location: ::std::option::Option<crate::model::SegmentLocation>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>,
        pub(crate) user_attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
    }
    impl Builder {
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::AttributeDimension) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn get_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>> {
            &self.attributes
        }
        /// Inserts a key-value pair into `attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::AttributeDimension,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.attributes, "Attributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn behavior(mut self, input: crate::model::SegmentBehaviors) -> Self {
            self.behavior = ::std::option::Option::Some(input);
            self
        }
        pub fn set_behavior(mut self, input: ::std::option::Option<crate::model::SegmentBehaviors>) -> Self {
            self.behavior = input;
            self
        }
        pub fn get_behavior(&self) -> &::std::option::Option<crate::model::SegmentBehaviors> {
            &self.behavior
        }
        pub fn demographic(mut self, input: crate::model::SegmentDemographics) -> Self {
            self.demographic = ::std::option::Option::Some(input);
            self
        }
        pub fn set_demographic(mut self, input: ::std::option::Option<crate::model::SegmentDemographics>) -> Self {
            self.demographic = input;
            self
        }
        pub fn get_demographic(&self) -> &::std::option::Option<crate::model::SegmentDemographics> {
            &self.demographic
        }
        pub fn location(mut self, input: crate::model::SegmentLocation) -> Self {
            self.location = ::std::option::Option::Some(input);
            self
        }
        pub fn set_location(mut self, input: ::std::option::Option<crate::model::SegmentLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn get_location(&self) -> &::std::option::Option<crate::model::SegmentLocation> {
            &self.location
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        ///
        pub fn metrics(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::MetricDimension) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn get_metrics(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>> {
            &self.metrics
        }
        /// Inserts a key-value pair into `metrics`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_metrics_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::MetricDimension,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.metrics, "Metrics", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Adds a key-value pair to `user_attributes`.
        ///
        /// To override the contents of this collection use [`set_user_attributes`](Self::set_user_attributes).
        ///
        pub fn user_attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::AttributeDimension) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.user_attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.user_attributes = input;
            self
        }
        pub fn get_user_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>> {
            &self.user_attributes
        }
        /// Inserts a key-value pair into `user_attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_user_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::AttributeDimension,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.user_attributes, "UserAttributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`SegmentDimensions`](crate::model::SegmentDimensions).
        pub fn build(self) -> crate::model::SegmentDimensions {
            crate::model::SegmentDimensions {
                attributes: self.attributes,
                behavior: self.behavior,
                demographic: self.demographic,
                location: self.location,
                metrics: self.metrics,
                user_attributes: self.user_attributes,
            }
        }
    }
}

/// <p>Specifies dimension settings for including or excluding endpoints from a segment based on how recently an endpoint was active.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentBehaviors {
    #[serde(rename = "Recency", skip_serializing_if = "Option::is_none")]
    pub(crate) recency: ::std::option::Option<crate::model::RecencyDimension>,
}
impl SegmentBehaviors {
    pub fn recency(&self) -> ::std::option::Option<&crate::model::RecencyDimension> {
        self.recency.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentBehaviors`](crate::model::SegmentBehaviors).
    pub fn builder() -> crate::model::segment_behaviors::Builder {
        crate::model::segment_behaviors::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_behaviors::Builder {
        crate::model::segment_behaviors::Builder {
            recency: self.recency,
        }
    }
}
impl ::std::hash::Hash for SegmentBehaviors {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.recency, state);
    }
}
impl ::std::fmt::Display for SegmentBehaviors {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Recency", &self.recency);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentBehaviors {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentBehaviors`](crate::model::SegmentBehaviors).
pub mod segment_behaviors {

    /// A builder for [`SegmentBehaviors`](crate::model::SegmentBehaviors).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) recency: ::std::option::Option<crate::model::RecencyDimension>,
    }
    impl Builder {
        pub fn recency(mut self, input: crate::model::RecencyDimension) -> Self {
            self.recency = ::std::option::Option::Some(input);
            self
        }
        pub fn set_recency(mut self, input: ::std::option::Option<crate::model::RecencyDimension>) -> Self {
            self.recency = input;
            self
        }
        pub fn get_recency(&self) -> &::std::option::Option<crate::model::RecencyDimension> {
            &self.recency
        }
        /// Consumes the builder and constructs a [`SegmentBehaviors`](crate::model::SegmentBehaviors).
        pub fn build(self) -> crate::model::SegmentBehaviors {
            crate::model::SegmentBehaviors {
                recency: self.recency,
            }
        }
    }
}

/// <p>Specifies criteria for including or excluding endpoints from a segment based on how recently an endpoint was active.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct RecencyDimension {
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub(crate) duration: ::std::option::Option<crate::model::Duration>,
    #[serde(rename = "RecencyType", skip_serializing_if = "Option::is_none")]
    pub(crate) recency_type: ::std::option::Option<crate::model::RecencyType>,
}
impl RecencyDimension {
    pub fn duration(&self) -> ::std::option::Option<&crate::model::Duration> {
        self.duration.as_ref()
    }
    pub fn recency_type(&self) -> ::std::option::Option<&crate::model::RecencyType> {
        self.recency_type.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`RecencyDimension`](crate::model::RecencyDimension).
    pub fn builder() -> crate::model::recency_dimension::Builder {
        crate::model::recency_dimension::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::recency_dimension::Builder {
        crate::model::recency_dimension::Builder {
            duration: self.duration,
            recency_type: self.recency_type,
        }
    }
}
impl ::std::hash::Hash for RecencyDimension {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.duration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.recency_type, state);
    }
}
impl ::std::fmt::Display for RecencyDimension {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Duration", &self.duration);
        shape.field("RecencyType", &self.recency_type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for RecencyDimension {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`RecencyDimension`](crate::model::RecencyDimension).
pub mod recency_dimension {

    /// A builder for [`RecencyDimension`](crate::model::RecencyDimension).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) duration: ::std::option::Option<crate::model::Duration>,
        pub(crate) recency_type: ::std::option::Option<crate::model::RecencyType>,
    }
    impl Builder {
        pub fn duration(mut self, input: crate::model::Duration) -> Self {
            self.duration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_duration(mut self, input: ::std::option::Option<crate::model::Duration>) -> Self {
            self.duration = input;
            self
        }
        pub fn get_duration(&self) -> &::std::option::Option<crate::model::Duration> {
            &self.duration
        }
        pub fn recency_type(mut self, input: crate::model::RecencyType) -> Self {
            self.recency_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_recency_type(mut self, input: ::std::option::Option<crate::model::RecencyType>) -> Self {
            self.recency_type = input;
            self
        }
        pub fn get_recency_type(&self) -> &::std::option::Option<crate::model::RecencyType> {
            &self.recency_type
        }
        /// Consumes the builder and constructs a [`RecencyDimension`](crate::model::RecencyDimension).
        pub fn build(self) -> crate::model::RecencyDimension {
            crate::model::RecencyDimension {
                duration: self.duration,
                recency_type: self.recency_type,
            }
        }
    }
}

/// <p>Specifies demographic-based dimension settings for including or excluding endpoints from a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentDemographics {
    #[serde(rename = "AppVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) app_version: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Channel", skip_serializing_if = "Option::is_none")]
    pub(crate) channel: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "DeviceType", skip_serializing_if = "Option::is_none")]
    pub(crate) device_type: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Make", skip_serializing_if = "Option::is_none")]
    pub(crate) make: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Model", skip_serializing_if = "Option::is_none")]
    pub(crate) model: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<crate::model::SetDimension>,
}
impl SegmentDemographics {
    pub fn app_version(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.app_version.as_ref()
    }
    pub fn channel(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.channel.as_ref()
    }
    pub fn device_type(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.device_type.as_ref()
    }
    pub fn make(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.make.as_ref()
    }
    pub fn model(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.model.as_ref()
    }
    pub fn platform(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.platform.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentDemographics`](crate::model::SegmentDemographics).
    pub fn builder() -> crate::model::segment_demographics::Builder {
        crate::model::segment_demographics::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_demographics::Builder {
        crate::model::segment_demographics::Builder {
            app_version: self.app_version,
            channel: self.channel,
            device_type: self.device_type,
            make: self.make,
            model: self.model,
            platform: self.platform,
        }
    }
}
impl ::std::hash::Hash for SegmentDemographics {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.app_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.device_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.make, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.model, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
    }
}
impl ::std::fmt::Display for SegmentDemographics {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AppVersion", &self.app_version);
        shape.field("Channel", &self.channel);
        shape.field("DeviceType", &self.device_type);
        shape.field("Make", &self.make);
        shape.field("Model", &self.model);
        shape.field("Platform", &self.platform);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentDemographics {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentDemographics`](crate::model::SegmentDemographics).
pub mod segment_demographics {

    /// A builder for [`SegmentDemographics`](crate::model::SegmentDemographics).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) channel: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) device_type: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) make: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) model: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) platform: ::std::option::Option<crate::model::SetDimension>,
    }
    impl Builder {
        pub fn app_version(mut self, input: crate::model::SetDimension) -> Self {
            self.app_version = ::std::option::Option::Some(input);
            self
        }
        pub fn set_app_version(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.app_version = input;
            self
        }
        pub fn get_app_version(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.app_version
        }
        pub fn channel(mut self, input: crate::model::SetDimension) -> Self {
            self.channel = ::std::option::Option::Some(input);
            self
        }
        pub fn set_channel(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.channel = input;
            self
        }
        pub fn get_channel(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.channel
        }
        pub fn device_type(mut self, input: crate::model::SetDimension) -> Self {
            self.device_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_device_type(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.device_type = input;
            self
        }
        pub fn get_device_type(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.device_type
        }
        pub fn make(mut self, input: crate::model::SetDimension) -> Self {
            self.make = ::std::option::Option::Some(input);
            self
        }
        pub fn set_make(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.make = input;
            self
        }
        pub fn get_make(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.make
        }
        pub fn model(mut self, input: crate::model::SetDimension) -> Self {
            self.model = ::std::option::Option::Some(input);
            self
        }
        pub fn set_model(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.model = input;
            self
        }
        pub fn get_model(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.model
        }
        pub fn platform(mut self, input: crate::model::SetDimension) -> Self {
            self.platform = ::std::option::Option::Some(input);
            self
        }
        pub fn set_platform(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.platform = input;
            self
        }
        pub fn get_platform(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.platform
        }
        /// Consumes the builder and constructs a [`SegmentDemographics`](crate::model::SegmentDemographics).
        pub fn build(self) -> crate::model::SegmentDemographics {
            crate::model::SegmentDemographics {
                app_version: self.app_version,
                channel: self.channel,
                device_type: self.device_type,
                make: self.make,
                model: self.model,
                platform: self.platform,
            }
        }
    }
}

/// <p>Specifies the dimension type and values for a segment dimension.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SetDimension {
    #[serde(rename = "DimensionType", skip_serializing_if = "Option::is_none")]
    pub(crate) dimension_type: ::std::option::Option<crate::model::DimensionType>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub(crate) values: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl SetDimension {
    pub fn dimension_type(&self) -> ::std::option::Option<&crate::model::DimensionType> {
        self.dimension_type.as_ref()
    }
    pub fn values(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.values.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SetDimension`](crate::model::SetDimension).
    pub fn builder() -> crate::model::set_dimension::Builder {
        crate::model::set_dimension::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::set_dimension::Builder {
        crate::model::set_dimension::Builder {
            dimension_type: self.dimension_type,
            values: self.values,
        }
    }
}
impl ::std::hash::Hash for SetDimension {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimension_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.values, state);
    }
}
impl ::std::fmt::Display for SetDimension {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DimensionType", &self.dimension_type);
        shape.field("Values", &self.values);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SetDimension {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SetDimension`](crate::model::SetDimension).
pub mod set_dimension {

    /// A builder for [`SetDimension`](crate::model::SetDimension).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimension_type: ::std::option::Option<crate::model::DimensionType>,
        pub(crate) values: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    }
    impl Builder {
        pub fn dimension_type(mut self, input: crate::model::DimensionType) -> Self {
            self.dimension_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_dimension_type(mut self, input: ::std::option::Option<crate::model::DimensionType>) -> Self {
            self.dimension_type = input;
            self
        }
        pub fn get_dimension_type(&self) -> &::std::option::Option<crate::model::DimensionType> {
            &self.dimension_type
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        pub fn values(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = ::std::option::Option::Some(v);
            self
        }
        pub fn set_values(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.values = input;
            self
        }
        pub fn get_values(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.values
        }
        /// Consumes the builder and constructs a [`SetDimension`](crate::model::SetDimension).
        pub fn build(self) -> crate::model::SetDimension {
            crate::model::SetDimension {
                dimension_type: self.dimension_type,
                values: self.values,
            }
        }
    }
}

/// <p>Specifies attribute-based criteria for including or excluding endpoints from a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct AttributeDimension {
    #[serde(rename = "AttributeType", skip_serializing_if = "Option::is_none")]
    pub(crate) attribute_type: ::std::option::Option<crate::model::AttributeType>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub(crate) values: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl AttributeDimension {
    pub fn attribute_type(&self) -> ::std::option::Option<&crate::model::AttributeType> {
        self.attribute_type.as_ref()
    }
    pub fn values(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.values.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`AttributeDimension`](crate::model::AttributeDimension).
    pub fn builder() -> crate::model::attribute_dimension::Builder {
        crate::model::attribute_dimension::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::attribute_dimension::Builder {
        crate::model::attribute_dimension::Builder {
            attribute_type: self.attribute_type,
            values: self.values,
        }
    }
}
impl ::std::hash::Hash for AttributeDimension {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.attribute_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.values, state);
    }
}
impl ::std::fmt::Display for AttributeDimension {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AttributeType", &self.attribute_type);
        shape.field("Values", &self.values);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for AttributeDimension {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`AttributeDimension`](crate::model::AttributeDimension).
pub mod attribute_dimension {

    /// A builder for [`AttributeDimension`](crate::model::AttributeDimension).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attribute_type: ::std::option::Option<crate::model::AttributeType>,
        pub(crate) values: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    }
    impl Builder {
        pub fn attribute_type(mut self, input: crate::model::AttributeType) -> Self {
            self.attribute_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_attribute_type(mut self, input: ::std::option::Option<crate::model::AttributeType>) -> Self {
            self.attribute_type = input;
            self
        }
        pub fn get_attribute_type(&self) -> &::std::option::Option<crate::model::AttributeType> {
            &self.attribute_type
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        pub fn values(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = ::std::option::Option::Some(v);
            self
        }
        pub fn set_values(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.values = input;
            self
        }
        pub fn get_values(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.values
        }
        /// Consumes the builder and constructs a [`AttributeDimension`](crate::model::AttributeDimension).
        pub fn build(self) -> crate::model::AttributeDimension {
            crate::model::AttributeDimension {
                attribute_type: self.attribute_type,
                values: self.values,
            }
        }
    }
}

/// <p>Specifies metric-based criteria for including or excluding endpoints from a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MetricDimension {
    /// <p>The operator to use when comparing metric values. Valid values are: GREATER_THAN, LESS_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN_OR_EQUAL, and EQUAL.</p>
    #[serde(rename = "ComparisonOperator", skip_serializing_if = "Option::is_none")]
    pub(crate) comparison_operator: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub(crate) value: ::std::option::Option<f64>,
}
impl MetricDimension {
    /// <p>The operator to use when comparing metric values. Valid values are: GREATER_THAN, LESS_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN_OR_EQUAL, and EQUAL.</p>
    pub fn comparison_operator(&self) -> ::std::option::Option<&str> {
        self.comparison_operator.as_deref()
    }
    pub fn value(&self) -> ::std::option::Option<f64> {
        self.value
    }
    /// Creates a new builder-style object to manufacture [`MetricDimension`](crate::model::MetricDimension).
    pub fn builder() -> crate::model::metric_dimension::Builder {
        crate::model::metric_dimension::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::metric_dimension::Builder {
        crate::model::metric_dimension::Builder {
            comparison_operator: self.comparison_operator,
            value: self.value,
        }
    }
}
impl ::std::hash::Hash for MetricDimension {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.comparison_operator, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.value, state);
    }
}
impl ::std::fmt::Display for MetricDimension {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ComparisonOperator", &self.comparison_operator);
        shape.field("Value", &self.value);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MetricDimension {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MetricDimension`](crate::model::MetricDimension).
pub mod metric_dimension {

    /// A builder for [`MetricDimension`](crate::model::MetricDimension).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comparison_operator: ::std::option::Option<::std::string::String>,
        pub(crate) value: ::std::option::Option<f64>,
    }
    impl Builder {
        /// <p>The operator to use when comparing metric values. Valid values are: GREATER_THAN, LESS_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN_OR_EQUAL, and EQUAL.</p>
        pub fn comparison_operator(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.comparison_operator = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The operator to use when comparing metric values. Valid values are: GREATER_THAN, LESS_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN_OR_EQUAL, and EQUAL.</p>
        pub fn set_comparison_operator(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.comparison_operator = input;
            self
        }
        /// <p>The operator to use when comparing metric values. Valid values are: GREATER_THAN, LESS_THAN, GREATER_THAN_OR_EQUAL, LESS_THAN_OR_EQUAL, and EQUAL.</p>
        pub fn get_comparison_operator(&self) -> &::std::option::Option<::std::string::String> {
            &self.comparison_operator
        }
        pub fn value(mut self, input: f64) -> Self {
            self.value = ::std::option::Option::Some(input);
            self
        }
        pub fn set_value(mut self, input: ::std::option::Option<f64>) -> Self {
            self.value = input;
            self
        }
        pub fn get_value(&self) -> &::std::option::Option<f64> {
            &self.value
        }
        /// Consumes the builder and constructs a [`MetricDimension`](crate::model::MetricDimension).
        pub fn build(self) -> crate::model::MetricDimension {
            crate::model::MetricDimension {
                comparison_operator: self.comparison_operator,
                value: self.value,
            }
        }
    }
}

/// <p>Specifies geographical dimension settings for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentLocation {
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub(crate) country: ::std::option::Option<crate::model::SetDimension>,
    #[serde(rename = "GPSPoint", skip_serializing_if = "Option::is_none")]
    pub(crate) gps_point: ::std::option::Option<crate::model::GPSPointDimension>,
}
impl SegmentLocation {
    pub fn country(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.country.as_ref()
    }
    pub fn gps_point(&self) -> ::std::option::Option<&crate::model::GPSPointDimension> {
        self.gps_point.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentLocation`](crate::model::SegmentLocation).
    pub fn builder() -> crate::model::segment_location::Builder {
        crate::model::segment_location::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_location::Builder {
        crate::model::segment_location::Builder {
            country: self.country,
            gps_point: self.gps_point,
        }
    }
}
impl ::std::hash::Hash for SegmentLocation {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.country, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.gps_point, state);
    }
}
impl ::std::fmt::Display for SegmentLocation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Country", &self.country);
        shape.field("GPSPoint", &self.gps_point);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentLocation {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentLocation`](crate::model::SegmentLocation).
pub mod segment_location {

    /// A builder for [`SegmentLocation`](crate::model::SegmentLocation).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) country: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) gps_point: ::std::option::Option<crate::model::GPSPointDimension>,
    }
    impl Builder {
        pub fn country(mut self, input: crate::model::SetDimension) -> Self {
            self.country = ::std::option::Option::Some(input);
            self
        }
        pub fn set_country(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.country = input;
            self
        }
        pub fn get_country(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.country
        }
        pub fn gps_point(mut self, input: crate::model::GPSPointDimension) -> Self {
            self.gps_point = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gps_point(mut self, input: ::std::option::Option<crate::model::GPSPointDimension>) -> Self {
            self.gps_point = input;
            self
        }
        pub fn get_gps_point(&self) -> &::std::option::Option<crate::model::GPSPointDimension> {
            &self.gps_point
        }
        /// Consumes the builder and constructs a [`SegmentLocation`](crate::model::SegmentLocation).
        pub fn build(self) -> crate::model::SegmentLocation {
            crate::model::SegmentLocation {
                country: self.country,
                gps_point: self.gps_point,
            }
        }
    }
}

/// <p>Specifies GPS-based criteria for including or excluding endpoints from a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct GPSPointDimension {
    #[serde(rename = "Coordinates", skip_serializing_if = "Option::is_none")]
    pub(crate) coordinates: ::std::option::Option<crate::model::GPSCoordinates>,
    #[serde(rename = "RangeInKilometers", skip_serializing_if = "Option::is_none")]
    pub(crate) range_in_kilometers: ::std::option::Option<f64>,
}
impl GPSPointDimension {
    pub fn coordinates(&self) -> ::std::option::Option<&crate::model::GPSCoordinates> {
        self.coordinates.as_ref()
    }
    pub fn range_in_kilometers(&self) -> ::std::option::Option<f64> {
        self.range_in_kilometers
    }
    /// Creates a new builder-style object to manufacture [`GPSPointDimension`](crate::model::GPSPointDimension).
    pub fn builder() -> crate::model::gps_point_dimension::Builder {
        crate::model::gps_point_dimension::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::gps_point_dimension::Builder {
        crate::model::gps_point_dimension::Builder {
            coordinates: self.coordinates,
            range_in_kilometers: self.range_in_kilometers,
        }
    }
}
impl ::std::hash::Hash for GPSPointDimension {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.coordinates, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.range_in_kilometers, state);
    }
}
impl ::std::fmt::Display for GPSPointDimension {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Coordinates", &self.coordinates);
        shape.field("RangeInKilometers", &self.range_in_kilometers);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GPSPointDimension {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GPSPointDimension`](crate::model::GPSPointDimension).
pub mod gps_point_dimension {

    /// A builder for [`GPSPointDimension`](crate::model::GPSPointDimension).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) coordinates: ::std::option::Option<crate::model::GPSCoordinates>,
        pub(crate) range_in_kilometers: ::std::option::Option<f64>,
    }
    impl Builder {
        pub fn coordinates(mut self, input: crate::model::GPSCoordinates) -> Self {
            self.coordinates = ::std::option::Option::Some(input);
            self
        }
        pub fn set_coordinates(mut self, input: ::std::option::Option<crate::model::GPSCoordinates>) -> Self {
            self.coordinates = input;
            self
        }
        pub fn get_coordinates(&self) -> &::std::option::Option<crate::model::GPSCoordinates> {
            &self.coordinates
        }
        pub fn range_in_kilometers(mut self, input: f64) -> Self {
            self.range_in_kilometers = ::std::option::Option::Some(input);
            self
        }
        pub fn set_range_in_kilometers(mut self, input: ::std::option::Option<f64>) -> Self {
            self.range_in_kilometers = input;
            self
        }
        pub fn get_range_in_kilometers(&self) -> &::std::option::Option<f64> {
            &self.range_in_kilometers
        }
        /// Consumes the builder and constructs a [`GPSPointDimension`](crate::model::GPSPointDimension).
        pub fn build(self) -> crate::model::GPSPointDimension {
            crate::model::GPSPointDimension {
                coordinates: self.coordinates,
                range_in_kilometers: self.range_in_kilometers,
            }
        }
    }
}

/// <p>Specifies the GPS coordinates of a location.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct GPSCoordinates {
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub(crate) latitude: ::std::option::Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub(crate) longitude: ::std::option::Option<f64>,
}
impl GPSCoordinates {
    pub fn latitude(&self) -> ::std::option::Option<f64> {
        self.latitude
    }
    pub fn longitude(&self) -> ::std::option::Option<f64> {
        self.longitude
    }
    /// Creates a new builder-style object to manufacture [`GPSCoordinates`](crate::model::GPSCoordinates).
    pub fn builder() -> crate::model::gps_coordinates::Builder {
        crate::model::gps_coordinates::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::gps_coordinates::Builder {
        crate::model::gps_coordinates::Builder {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
impl ::std::hash::Hash for GPSCoordinates {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.latitude, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.longitude, state);
    }
}
impl ::std::fmt::Display for GPSCoordinates {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Latitude", &self.latitude);
        shape.field("Longitude", &self.longitude);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GPSCoordinates {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GPSCoordinates`](crate::model::GPSCoordinates).
pub mod gps_coordinates {

    /// A builder for [`GPSCoordinates`](crate::model::GPSCoordinates).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) latitude: ::std::option::Option<f64>,
        pub(crate) longitude: ::std::option::Option<f64>,
    }
    impl Builder {
        pub fn latitude(mut self, input: f64) -> Self {
            self.latitude = ::std::option::Option::Some(input);
            self
        }
        pub fn set_latitude(mut self, input: ::std::option::Option<f64>) -> Self {
            self.latitude = input;
            self
        }
        pub fn get_latitude(&self) -> &::std::option::Option<f64> {
            &self.latitude
        }
        pub fn longitude(mut self, input: f64) -> Self {
            self.longitude = ::std::option::Option::Some(input);
            self
        }
        pub fn set_longitude(mut self, input: ::std::option::Option<f64>) -> Self {
            self.longitude = input;
            self
        }
        pub fn get_longitude(&self) -> &::std::option::Option<f64> {
            &self.longitude
        }
        /// Consumes the builder and constructs a [`GPSCoordinates`](crate::model::GPSCoordinates).
        pub fn build(self) -> crate::model::GPSCoordinates {
            crate::model::GPSCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            }
        }
    }
}

/// <p>Provides information about the import job that created a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentImportResource {
    /// <p>The number of channel types in the endpoint definitions that were imported to create the segment.</p>
    #[serde(rename = "ChannelCounts", skip_serializing_if = "Option::is_none")]
    pub(crate) channel_counts: ::std::option::Option<::std::collections::HashMap<::std::string::String, i32>>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub(crate) external_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub(crate) format: ::std::option::Option<crate::model::Format>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub(crate) s3_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub(crate) size: ::std::option::Option<i32>,
}
impl SegmentImportResource {
    /// <p>The number of channel types in the endpoint definitions that were imported to create the segment.</p>
    pub fn channel_counts(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, i32>> {
        self.channel_counts.as_ref()
    }
    pub fn external_id(&self) -> ::std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> ::std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> ::std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn size(&self) -> ::std::option::Option<i32> {
        self.size
    }
    /// Creates a new builder-style object to manufacture [`SegmentImportResource`](crate::model::SegmentImportResource).
    pub fn builder() -> crate::model::segment_import_resource::Builder {
        crate::model::segment_import_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_import_resource::Builder {
        crate::model::segment_import_resource::Builder {
            channel_counts: self.channel_counts,
            external_id: self.external_id,
            format: self.format,
            role_arn: self.role_arn,
            s3_url: self.s3_url,
            size: self.size,
        }
    }
}
impl ::std::hash::Hash for SegmentImportResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel_counts, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.external_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.format, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.s3_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.size, state);
    }
}
impl ::std::fmt::Display for SegmentImportResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ChannelCounts", &self.channel_counts);
        shape.field("ExternalId", &self.external_id);
        shape.field("Format", &self.format);
        shape.field("RoleArn", &self.role_arn);
        shape.field("S3Url", &self.s3_url);
        shape.field("Size", &self.size);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentImportResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentImportResource`](crate::model::SegmentImportResource).
pub mod segment_import_resource {

    /// A builder for [`SegmentImportResource`](crate::model::SegmentImportResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_counts: ::std::option::Option<::std::collections::HashMap<::std::string::String, i32>>,
        pub(crate) external_id: ::std::option::Option<::std::string::String>,
        pub(crate) format: ::std::option::Option<crate::model::Format>,
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
        pub(crate) s3_url: ::std::option::Option<::std::string::String>,
        pub(crate) size: ::std::option::Option<i32>,
    }
    impl Builder {
        /// Adds a key-value pair to `channel_counts`.
        ///
        /// To override the contents of this collection use [`set_channel_counts`](Self::set_channel_counts).
        ///
        /// <p>The number of channel types in the endpoint definitions that were imported to create the segment.</p>
        pub fn channel_counts(mut self, k: impl ::std::convert::Into<::std::string::String>, v: i32) -> Self {
            let mut hash_map = self.channel_counts.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.channel_counts = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>The number of channel types in the endpoint definitions that were imported to create the segment.</p>
        pub fn set_channel_counts(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, i32>>) -> Self {
            self.channel_counts = input;
            self
        }
        /// <p>The number of channel types in the endpoint definitions that were imported to create the segment.</p>
        pub fn get_channel_counts(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, i32>> {
            &self.channel_counts
        }
        /// Inserts a key-value pair into `channel_counts`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_channel_counts_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: i32,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.channel_counts, "ChannelCounts", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn external_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.external_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn get_external_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.external_id
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = ::std::option::Option::Some(input);
            self
        }
        pub fn set_format(mut self, input: ::std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn get_format(&self) -> &::std::option::Option<crate::model::Format> {
            &self.format
        }
        pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.role_arn = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.role_arn
        }
        pub fn s3_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.s3_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.s3_url = input;
            self
        }
        pub fn get_s3_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.s3_url
        }
        pub fn size(mut self, input: i32) -> Self {
            self.size = ::std::option::Option::Some(input);
            self
        }
        pub fn set_size(mut self, input: ::std::option::Option<i32>) -> Self {
            self.size = input;
            self
        }
        pub fn get_size(&self) -> &::std::option::Option<i32> {
            &self.size
        }
        /// Consumes the builder and constructs a [`SegmentImportResource`](crate::model::SegmentImportResource).
        pub fn build(self) -> crate::model::SegmentImportResource {
            crate::model::SegmentImportResource {
                channel_counts: self.channel_counts,
                external_id: self.external_id,
                format: self.format,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                size: self.size,
            }
        }
    }
}

/// <p>Specifies the settings that define the relationships between segment groups for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentGroupList {
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub(crate) groups: ::std::option::Option<::std::vec::Vec<crate::model::SegmentGroup>>,
    #[serde(rename = "Include", skip_serializing_if = "Option::is_none")]
    pub(crate) include: ::std::option::Option<crate::model::Include>,
}
impl SegmentGroupList {
    pub fn groups(&self) -> ::std::option::Option<&[crate::model::SegmentGroup]> {
        self.groups.as_deref()
    }
    pub fn include(&self) -> ::std::option::Option<&crate::model::Include> {
        self.include.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentGroupList`](crate::model::SegmentGroupList).
    pub fn builder() -> crate::model::segment_group_list::Builder {
        crate::model::segment_group_list::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_group_list::Builder {
        crate::model::segment_group_list::Builder {
            groups: self.groups,
            include: self.include,
        }
    }
}
impl ::std::hash::Hash for SegmentGroupList {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.groups, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.include, state);
    }
}
impl ::std::fmt::Display for SegmentGroupList {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Groups", &self.groups);
        shape.field("Include", &self.include);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentGroupList {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentGroupList`](crate::model::SegmentGroupList).
pub mod segment_group_list {

    /// A builder for [`SegmentGroupList`](crate::model::SegmentGroupList).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) groups: ::std::option::Option<::std::vec::Vec<crate::model::SegmentGroup>>,
        pub(crate) include: ::std::option::Option<crate::model::Include>,
    }
    impl Builder {
        /// Appends an item to `groups`.
        ///
        /// To override the contents of this collection use [`set_groups`](Self::set_groups).
        ///
        pub fn groups(mut self, input: crate::model::SegmentGroup) -> Self {
            let mut v = self.groups.unwrap_or_default();
            v.push(input);
            self.groups = ::std::option::Option::Some(v);
            self
        }
        pub fn set_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::SegmentGroup>>) -> Self {
            self.groups = input;
            self
        }
        pub fn get_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::SegmentGroup>> {
            &self.groups
        }
        pub fn include(mut self, input: crate::model::Include) -> Self {
            self.include = ::std::option::Option::Some(input);
            self
        }
        pub fn set_include(mut self, input: ::std::option::Option<crate::model::Include>) -> Self {
            self.include = input;
            self
        }
        pub fn get_include(&self) -> &::std::option::Option<crate::model::Include> {
            &self.include
        }
        /// Consumes the builder and constructs a [`SegmentGroupList`](crate::model::SegmentGroupList).
        pub fn build(self) -> crate::model::SegmentGroupList {
            crate::model::SegmentGroupList {
                groups: self.groups,
                include: self.include,
            }
        }
    }
}

/// <p>Specifies the base segments and dimensions for a segment, and the relationships between these base segments and dimensions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentGroup {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<::std::vec::Vec<crate::model::SegmentDimensions>>,
    #[serde(rename = "SourceSegments", skip_serializing_if = "Option::is_none")]
    pub(crate) source_segments: ::std::option::Option<::std::vec::Vec<crate::model::SegmentReference>>,
    #[serde(rename = "SourceType", skip_serializing_if = "Option::is_none")]
    pub(crate) source_type: ::std::option::Option<crate::model::SourceType>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub(crate) r#type: ::std::option::Option<crate::model::Type>,
}
impl SegmentGroup {
    pub fn dimensions(&self) -> ::std::option::Option<&[crate::model::SegmentDimensions]> {
        self.dimensions.as_deref()
    }
    pub fn source_segments(&self) -> ::std::option::Option<&[crate::model::SegmentReference]> {
        self.source_segments.as_deref()
    }
    pub fn source_type(&self) -> ::std::option::Option<&crate::model::SourceType> {
        self.source_type.as_ref()
    }
    pub fn r#type(&self) -> ::std::option::Option<&crate::model::Type> {
        self.r#type.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentGroup`](crate::model::SegmentGroup).
    pub fn builder() -> crate::model::segment_group::Builder {
        crate::model::segment_group::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_group::Builder {
        crate::model::segment_group::Builder {
            dimensions: self.dimensions,
            source_segments: self.source_segments,
            source_type: self.source_type,
            r#type: self.r#type,
        }
    }
}
impl ::std::hash::Hash for SegmentGroup {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.source_segments, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.source_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.r#type, state);
    }
}
impl ::std::fmt::Display for SegmentGroup {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Dimensions", &self.dimensions);
        shape.field("SourceSegments", &self.source_segments);
        shape.field("SourceType", &self.source_type);
        shape.field("Type", &self.r#type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentGroup {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentGroup`](crate::model::SegmentGroup).
pub mod segment_group {

    /// A builder for [`SegmentGroup`](crate::model::SegmentGroup).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: ::std::option::Option<::std::vec::Vec<crate::model::SegmentDimensions>>,
        pub(crate) source_segments: ::std::option::Option<::std::vec::Vec<crate::model::SegmentReference>>,
        pub(crate) source_type: ::std::option::Option<crate::model::SourceType>,
        pub(crate) r#type: ::std::option::Option<crate::model::Type>,
    }
    impl Builder {
        /// Appends an item to `dimensions`.
        ///
        /// To override the contents of this collection use [`set_dimensions`](Self::set_dimensions).
        ///
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            let mut v = self.dimensions.unwrap_or_default();
            v.push(input);
            self.dimensions = ::std::option::Option::Some(v);
            self
        }
        pub fn set_dimensions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::SegmentDimensions>>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn get_dimensions(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::SegmentDimensions>> {
            &self.dimensions
        }
        /// Appends an item to `source_segments`.
        ///
        /// To override the contents of this collection use [`set_source_segments`](Self::set_source_segments).
        ///
        pub fn source_segments(mut self, input: crate::model::SegmentReference) -> Self {
            let mut v = self.source_segments.unwrap_or_default();
            v.push(input);
            self.source_segments = ::std::option::Option::Some(v);
            self
        }
        pub fn set_source_segments(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::SegmentReference>>) -> Self {
            self.source_segments = input;
            self
        }
        pub fn get_source_segments(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::SegmentReference>> {
            &self.source_segments
        }
        pub fn source_type(mut self, input: crate::model::SourceType) -> Self {
            self.source_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_source_type(mut self, input: ::std::option::Option<crate::model::SourceType>) -> Self {
            self.source_type = input;
            self
        }
        pub fn get_source_type(&self) -> &::std::option::Option<crate::model::SourceType> {
            &self.source_type
        }
        pub fn r#type(mut self, input: crate::model::Type) -> Self {
            self.r#type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_type(mut self, input: ::std::option::Option<crate::model::Type>) -> Self {
            self.r#type = input;
            self
        }
        pub fn get_type(&self) -> &::std::option::Option<crate::model::Type> {
            &self.r#type
        }
        /// Consumes the builder and constructs a [`SegmentGroup`](crate::model::SegmentGroup).
        pub fn build(self) -> crate::model::SegmentGroup {
            crate::model::SegmentGroup {
                dimensions: self.dimensions,
                source_segments: self.source_segments,
                source_type: self.source_type,
                r#type: self.r#type,
            }
        }
    }
}

/// <p>Specifies the segment identifier and version of a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentReference {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl SegmentReference {
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`SegmentReference`](crate::model::SegmentReference).
    pub fn builder() -> crate::model::segment_reference::Builder {
        crate::model::segment_reference::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_reference::Builder {
        crate::model::segment_reference::Builder {
            id: self.id,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for SegmentReference {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for SegmentReference {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Id", &self.id);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentReference {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentReference`](crate::model::SegmentReference).
pub mod segment_reference {

    /// A builder for [`SegmentReference`](crate::model::SegmentReference).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<i32>,
    }
    impl Builder {
        pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.id
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = ::std::option::Option::Some(input);
            self
        }
        pub fn set_version(mut self, input: ::std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &::std::option::Option<i32> {
            &self.version
        }
        /// Consumes the builder and constructs a [`SegmentReference`](crate::model::SegmentReference).
        pub fn build(self) -> crate::model::SegmentReference {
            crate::model::SegmentReference {
                id: self.id,
                version: self.version,
            }
        }
    }
}
