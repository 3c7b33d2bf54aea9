// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>Specifies the mode for a campaign hook.</p>
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
pub enum Mode {
    #[allow(missing_docs)] // documentation missing in model
    Delivery,
    #[allow(missing_docs)] // documentation missing in model
    Filter,
}
impl Mode {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Delivery => "DELIVERY",
            Mode::Filter => "FILTER",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["DELIVERY", "FILTER"]
    }
}
impl ::std::str::FromStr for Mode {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "DELIVERY" => ::std::result::Result::Ok(Mode::Delivery),
            "FILTER" => ::std::result::Result::Ok(Mode::Filter),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Mode")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Mode", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Mode {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Mode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Mode {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Provides information about an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ApplicationResponse {
    /// <p>The Amazon Resource Name (ARN) of the application.</p>
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    /// <p>The display name of the application.</p>
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    /// <p>The date and time when the application was created.</p>
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
}
impl ApplicationResponse {
    /// <p>The Amazon Resource Name (ARN) of the application.</p>
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The display name of the application.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// <p>The date and time when the application was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ApplicationResponse`](crate::model::ApplicationResponse).
    pub fn builder() -> crate::model::application_response::Builder {
        crate::model::application_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::application_response::Builder {
        crate::model::application_response::Builder {
            arn: self.arn,
            id: self.id,
            name: self.name,
            tags: self.tags,
            creation_date: self.creation_date,
        }
    }
}
impl ::std::hash::Hash for ApplicationResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
    }
}
impl ::std::fmt::Display for ApplicationResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Arn", &self.arn);
        shape.field("Id", &self.id);
        shape.field("Name", &self.name);
        shape.field("tags", &self.tags);
        shape.field("CreationDate", &self.creation_date);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ApplicationResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ApplicationResponse`](crate::model::ApplicationResponse).
pub mod application_response {

    /// A builder for [`ApplicationResponse`](crate::model::ApplicationResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the application.</p>
        pub fn arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.arn = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the application.</p>
        pub fn set_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the application.</p>
        pub fn get_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.arn
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.id
        }
        /// <p>The display name of the application.</p>
        pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.name = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The display name of the application.</p>
        pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The display name of the application.</p>
        pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.name
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
        /// <p>The date and time when the application was created.</p>
        pub fn creation_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.creation_date = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The date and time when the application was created.</p>
        pub fn set_creation_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        /// <p>The date and time when the application was created.</p>
        pub fn get_creation_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.creation_date
        }
        /// Consumes the builder and constructs a [`ApplicationResponse`](crate::model::ApplicationResponse).
        pub fn build(self) -> crate::model::ApplicationResponse {
            crate::model::ApplicationResponse {
                arn: self.arn,
                id: self.id,
                name: self.name,
                tags: self.tags,
                creation_date: self.creation_date,
            }
        }
    }
}

/// <p>Provides information about all of your applications.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ApplicationsResponse {
    /// <p>An array of responses, one for each application that was returned.</p>
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ApplicationResponse>>,
    /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl ApplicationsResponse {
    /// <p>An array of responses, one for each application that was returned.</p>
    pub fn item(&self) -> ::std::option::Option<&[crate::model::ApplicationResponse]> {
        self.item.as_deref()
    }
    /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ApplicationsResponse`](crate::model::ApplicationsResponse).
    pub fn builder() -> crate::model::applications_response::Builder {
        crate::model::applications_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::applications_response::Builder {
        crate::model::applications_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for ApplicationsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for ApplicationsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ApplicationsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ApplicationsResponse`](crate::model::ApplicationsResponse).
pub mod applications_response {

    /// A builder for [`ApplicationsResponse`](crate::model::ApplicationsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ApplicationResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        /// <p>An array of responses, one for each application that was returned.</p>
        pub fn item(mut self, input: crate::model::ApplicationResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        /// <p>An array of responses, one for each application that was returned.</p>
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::ApplicationResponse>>) -> Self {
            self.item = input;
            self
        }
        /// <p>An array of responses, one for each application that was returned.</p>
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::ApplicationResponse>> {
            &self.item
        }
        /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
        pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
        pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
        pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`ApplicationsResponse`](crate::model::ApplicationsResponse).
        pub fn build(self) -> crate::model::ApplicationsResponse {
            crate::model::ApplicationsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Specifies the display name of an application and the tags to associate with the application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CreateApplicationRequest {
    /// <p>The display name of the application.</p>
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
}
impl CreateApplicationRequest {
    /// <p>The display name of the application.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateApplicationRequest`](crate::model::CreateApplicationRequest).
    pub fn builder() -> crate::model::create_application_request::Builder {
        crate::model::create_application_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::create_application_request::Builder {
        crate::model::create_application_request::Builder {
            name: self.name,
            tags: self.tags,
        }
    }
}
impl ::std::hash::Hash for CreateApplicationRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
    }
}
impl ::std::fmt::Display for CreateApplicationRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Name", &self.name);
        shape.field("tags", &self.tags);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateApplicationRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateApplicationRequest`](crate::model::CreateApplicationRequest).
pub mod create_application_request {

    /// A builder for [`CreateApplicationRequest`](crate::model::CreateApplicationRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    }
    impl Builder {
        /// <p>The display name of the application.</p>
        pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.name = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The display name of the application.</p>
        pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The display name of the application.</p>
        pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.name
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
        /// Consumes the builder and constructs a [`CreateApplicationRequest`](crate::model::CreateApplicationRequest).
        pub fn build(self) -> crate::model::CreateApplicationRequest {
            crate::model::CreateApplicationRequest {
                name: self.name,
                tags: self.tags,
            }
        }
    }
}

/// <p>Provides information about an application, including the default settings for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ApplicationSettingsResource {
    /// <p>The unique identifier for the application.</p>
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The settings for the AWS Lambda function to invoke by default as a code hook for campaigns in the application.</p>
    #[serde(rename = "CampaignHook", skip_serializing_if = "Option::is_none")]
    pub(crate) campaign_hook: ::std::option::Option<crate::model::CampaignHook>,
    /// <p>The date and time, in ISO 8601 format, when the application's settings were last modified.</p>
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    /// <p>The default sending limits for campaigns in the application.</p>
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
}
impl ApplicationSettingsResource {
    /// <p>The unique identifier for the application.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The settings for the AWS Lambda function to invoke by default as a code hook for campaigns in the application.</p>
    pub fn campaign_hook(&self) -> ::std::option::Option<&crate::model::CampaignHook> {
        self.campaign_hook.as_ref()
    }
    /// <p>The date and time, in ISO 8601 format, when the application's settings were last modified.</p>
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    /// <p>The default sending limits for campaigns in the application.</p>
    pub fn limits(&self) -> ::std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn quiet_time(&self) -> ::std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource).
    pub fn builder() -> crate::model::application_settings_resource::Builder {
        crate::model::application_settings_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::application_settings_resource::Builder {
        crate::model::application_settings_resource::Builder {
            application_id: self.application_id,
            campaign_hook: self.campaign_hook,
            last_modified_date: self.last_modified_date,
            limits: self.limits,
            quiet_time: self.quiet_time,
        }
    }
}
impl ::std::hash::Hash for ApplicationSettingsResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_hook, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.quiet_time, state);
    }
}
impl ::std::fmt::Display for ApplicationSettingsResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignHook", &self.campaign_hook);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Limits", &self.limits);
        shape.field("QuietTime", &self.quiet_time);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ApplicationSettingsResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource).
pub mod application_settings_resource {

    /// A builder for [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_hook: ::std::option::Option<crate::model::CampaignHook>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
    }
    impl Builder {
        /// <p>The unique identifier for the application.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The settings for the AWS Lambda function to invoke by default as a code hook for campaigns in the application.</p>
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = ::std::option::Option::Some(input);
            self
        }
        /// <p>The settings for the AWS Lambda function to invoke by default as a code hook for campaigns in the application.</p>
        pub fn set_campaign_hook(mut self, input: ::std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        /// <p>The settings for the AWS Lambda function to invoke by default as a code hook for campaigns in the application.</p>
        pub fn get_campaign_hook(&self) -> &::std::option::Option<crate::model::CampaignHook> {
            &self.campaign_hook
        }
        /// <p>The date and time, in ISO 8601 format, when the application's settings were last modified.</p>
        pub fn last_modified_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_date = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The date and time, in ISO 8601 format, when the application's settings were last modified.</p>
        pub fn set_last_modified_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        /// <p>The date and time, in ISO 8601 format, when the application's settings were last modified.</p>
        pub fn get_last_modified_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_date
        }
        /// <p>The default sending limits for campaigns in the application.</p>
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = ::std::option::Option::Some(input);
            self
        }
        /// <p>The default sending limits for campaigns in the application.</p>
        pub fn set_limits(mut self, input: ::std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        /// <p>The default sending limits for campaigns in the application.</p>
        pub fn get_limits(&self) -> &::std::option::Option<crate::model::CampaignLimits> {
            &self.limits
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = ::std::option::Option::Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: ::std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn get_quiet_time(&self) -> &::std::option::Option<crate::model::QuietTime> {
            &self.quiet_time
        }
        /// Consumes the builder and constructs a [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource).
        pub fn build(self) -> crate::model::ApplicationSettingsResource {
            crate::model::ApplicationSettingsResource {
                application_id: self.application_id,
                campaign_hook: self.campaign_hook,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}

/// <p>Specifies the default settings for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WriteApplicationSettingsRequest {
    #[serde(rename = "CampaignHook", skip_serializing_if = "Option::is_none")]
    pub(crate) campaign_hook: ::std::option::Option<crate::model::CampaignHook>,
    /// <p>Specifies whether to enable application-related alarms in Amazon CloudWatch.</p>
    #[serde(rename = "CloudWatchMetricsEnabled", skip_serializing_if = "Option::is_none")]
    pub(crate) cloud_watch_metrics_enabled: ::std::option::Option<bool>,
    #[serde(rename = "EventTaggingEnabled", skip_serializing_if = "Option::is_none")]
    pub(crate) event_tagging_enabled: ::std::option::Option<bool>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
}
impl WriteApplicationSettingsRequest {
    pub fn campaign_hook(&self) -> ::std::option::Option<&crate::model::CampaignHook> {
        self.campaign_hook.as_ref()
    }
    /// <p>Specifies whether to enable application-related alarms in Amazon CloudWatch.</p>
    pub fn cloud_watch_metrics_enabled(&self) -> ::std::option::Option<bool> {
        self.cloud_watch_metrics_enabled
    }
    pub fn event_tagging_enabled(&self) -> ::std::option::Option<bool> {
        self.event_tagging_enabled
    }
    pub fn limits(&self) -> ::std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn quiet_time(&self) -> ::std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest).
    pub fn builder() -> crate::model::write_application_settings_request::Builder {
        crate::model::write_application_settings_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::write_application_settings_request::Builder {
        crate::model::write_application_settings_request::Builder {
            campaign_hook: self.campaign_hook,
            cloud_watch_metrics_enabled: self.cloud_watch_metrics_enabled,
            event_tagging_enabled: self.event_tagging_enabled,
            limits: self.limits,
            quiet_time: self.quiet_time,
        }
    }
}
impl ::std::hash::Hash for WriteApplicationSettingsRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_hook, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.cloud_watch_metrics_enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_tagging_enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.quiet_time, state);
    }
}
impl ::std::fmt::Display for WriteApplicationSettingsRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignHook", &self.campaign_hook);
        shape.field("CloudWatchMetricsEnabled", &self.cloud_watch_metrics_enabled);
        shape.field("EventTaggingEnabled", &self.event_tagging_enabled);
        shape.field("Limits", &self.limits);
        shape.field("QuietTime", &self.quiet_time);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WriteApplicationSettingsRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest).
pub mod write_application_settings_request {

    /// A builder for [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_hook: ::std::option::Option<crate::model::CampaignHook>,
        pub(crate) cloud_watch_metrics_enabled: ::std::option::Option<bool>,
        pub(crate) event_tagging_enabled: ::std::option::Option<bool>,
        pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
    }
    impl Builder {
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_hook(mut self, input: ::std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        pub fn get_campaign_hook(&self) -> &::std::option::Option<crate::model::CampaignHook> {
            &self.campaign_hook
        }
        /// <p>Specifies whether to enable application-related alarms in Amazon CloudWatch.</p>
        pub fn cloud_watch_metrics_enabled(mut self, input: bool) -> Self {
            self.cloud_watch_metrics_enabled = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether to enable application-related alarms in Amazon CloudWatch.</p>
        pub fn set_cloud_watch_metrics_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.cloud_watch_metrics_enabled = input;
            self
        }
        /// <p>Specifies whether to enable application-related alarms in Amazon CloudWatch.</p>
        pub fn get_cloud_watch_metrics_enabled(&self) -> &::std::option::Option<bool> {
            &self.cloud_watch_metrics_enabled
        }
        pub fn event_tagging_enabled(mut self, input: bool) -> Self {
            self.event_tagging_enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_event_tagging_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.event_tagging_enabled = input;
            self
        }
        pub fn get_event_tagging_enabled(&self) -> &::std::option::Option<bool> {
            &self.event_tagging_enabled
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = ::std::option::Option::Some(input);
            self
        }
        pub fn set_limits(mut self, input: ::std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn get_limits(&self) -> &::std::option::Option<crate::model::CampaignLimits> {
            &self.limits
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = ::std::option::Option::Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: ::std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn get_quiet_time(&self) -> &::std::option::Option<crate::model::QuietTime> {
            &self.quiet_time
        }
        /// Consumes the builder and constructs a [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest).
        pub fn build(self) -> crate::model::WriteApplicationSettingsRequest {
            crate::model::WriteApplicationSettingsRequest {
                campaign_hook: self.campaign_hook,
                cloud_watch_metrics_enabled: self.cloud_watch_metrics_enabled,
                event_tagging_enabled: self.event_tagging_enabled,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}

/// <p>Specifies settings for invoking an AWS Lambda function that customizes a segment for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignHook {
    /// <p>The name or Amazon Resource Name (ARN) of the AWS Lambda function to invoke.</p>
    #[serde(rename = "LambdaFunctionName", skip_serializing_if = "Option::is_none")]
    pub(crate) lambda_function_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Mode", skip_serializing_if = "Option::is_none")]
    pub(crate) mode: ::std::option::Option<crate::model::Mode>,
    /// <p>The web URL that Amazon Pinpoint calls to invoke the AWS Lambda function over HTTPS.</p>
    #[serde(rename = "WebUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) web_url: ::std::option::Option<::std::string::String>,
}
impl CampaignHook {
    /// <p>The name or Amazon Resource Name (ARN) of the AWS Lambda function to invoke.</p>
    pub fn lambda_function_name(&self) -> ::std::option::Option<&str> {
        self.lambda_function_name.as_deref()
    }
    pub fn mode(&self) -> ::std::option::Option<&crate::model::Mode> {
        self.mode.as_ref()
    }
    /// <p>The web URL that Amazon Pinpoint calls to invoke the AWS Lambda function over HTTPS.</p>
    pub fn web_url(&self) -> ::std::option::Option<&str> {
        self.web_url.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignHook`](crate::model::CampaignHook).
    pub fn builder() -> crate::model::campaign_hook::Builder {
        crate::model::campaign_hook::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_hook::Builder {
        crate::model::campaign_hook::Builder {
            lambda_function_name: self.lambda_function_name,
            mode: self.mode,
            web_url: self.web_url,
        }
    }
}
impl ::std::hash::Hash for CampaignHook {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.lambda_function_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.mode, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.web_url, state);
    }
}
impl ::std::fmt::Display for CampaignHook {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("LambdaFunctionName", &self.lambda_function_name);
        shape.field("Mode", &self.mode);
        shape.field("WebUrl", &self.web_url);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignHook {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignHook`](crate::model::CampaignHook).
pub mod campaign_hook {

    /// A builder for [`CampaignHook`](crate::model::CampaignHook).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lambda_function_name: ::std::option::Option<::std::string::String>,
        pub(crate) mode: ::std::option::Option<crate::model::Mode>,
        pub(crate) web_url: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The name or Amazon Resource Name (ARN) of the AWS Lambda function to invoke.</p>
        pub fn lambda_function_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.lambda_function_name = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The name or Amazon Resource Name (ARN) of the AWS Lambda function to invoke.</p>
        pub fn set_lambda_function_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.lambda_function_name = input;
            self
        }
        /// <p>The name or Amazon Resource Name (ARN) of the AWS Lambda function to invoke.</p>
        pub fn get_lambda_function_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.lambda_function_name
        }
        pub fn mode(mut self, input: crate::model::Mode) -> Self {
            self.mode = ::std::option::Option::Some(input);
            self
        }
        pub fn set_mode(mut self, input: ::std::option::Option<crate::model::Mode>) -> Self {
            self.mode = input;
            self
        }
        pub fn get_mode(&self) -> &::std::option::Option<crate::model::Mode> {
            &self.mode
        }
        /// <p>The web URL that Amazon Pinpoint calls to invoke the AWS Lambda function over HTTPS.</p>
        pub fn web_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.web_url = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The web URL that Amazon Pinpoint calls to invoke the AWS Lambda function over HTTPS.</p>
        pub fn set_web_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.web_url = input;
            self
        }
        /// <p>The web URL that Amazon Pinpoint calls to invoke the AWS Lambda function over HTTPS.</p>
        pub fn get_web_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.web_url
        }
        /// Consumes the builder and constructs a [`CampaignHook`](crate::model::CampaignHook).
        pub fn build(self) -> crate::model::CampaignHook {
            crate::model::CampaignHook {
                lambda_function_name: self.lambda_function_name,
                mode: self.mode,
                web_url: self.web_url,
            }
        }
    }
}

/// <p>For a campaign, specifies limits on the messages that the campaign can send.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignLimits {
    /// <p>The maximum number of messages that a campaign can send to a single endpoint during a 24-hour period.</p>
    #[serde(rename = "Daily", skip_serializing_if = "Option::is_none")]
    pub(crate) daily: ::std::option::Option<i32>,
    /// <p>The maximum amount of time, in seconds, that a campaign can attempt to deliver a message after the scheduled start time.</p>
    #[serde(rename = "MaximumDuration", skip_serializing_if = "Option::is_none")]
    pub(crate) maximum_duration: ::std::option::Option<i32>,
    /// <p>The maximum number of messages that a campaign can send each second.</p>
    #[serde(rename = "MessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub(crate) messages_per_second: ::std::option::Option<i32>,
    /// <p>The maximum number of messages that a campaign can send to a single endpoint during the course of the campaign.</p>
    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    pub(crate) total: ::std::option::Option<i32>,
    #[serde(rename = "Session", skip_serializing_if = "Option::is_none")]
    pub(crate) session: ::std::option::Option<i32>,
}
impl CampaignLimits {
    /// <p>The maximum number of messages that a campaign can send to a single endpoint during a 24-hour period.</p>
    pub fn daily(&self) -> ::std::option::Option<i32> {
        self.daily
    }
    /// <p>The maximum amount of time, in seconds, that a campaign can attempt to deliver a message after the scheduled start time.</p>
    pub fn maximum_duration(&self) -> ::std::option::Option<i32> {
        self.maximum_duration
    }
    /// <p>The maximum number of messages that a campaign can send each second.</p>
    pub fn messages_per_second(&self) -> ::std::option::Option<i32> {
        self.messages_per_second
    }
    /// <p>The maximum number of messages that a campaign can send to a single endpoint during the course of the campaign.</p>
    pub fn total(&self) -> ::std::option::Option<i32> {
        self.total
    }
    pub fn session(&self) -> ::std::option::Option<i32> {
        self.session
    }
    /// Creates a new builder-style object to manufacture [`CampaignLimits`](crate::model::CampaignLimits).
    pub fn builder() -> crate::model::campaign_limits::Builder {
        crate::model::campaign_limits::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_limits::Builder {
        crate::model::campaign_limits::Builder {
            daily: self.daily,
            maximum_duration: self.maximum_duration,
            messages_per_second: self.messages_per_second,
            total: self.total,
            session: self.session,
        }
    }
}
impl ::std::hash::Hash for CampaignLimits {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.daily, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.maximum_duration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.messages_per_second, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.session, state);
    }
}
impl ::std::fmt::Display for CampaignLimits {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Daily", &self.daily);
        shape.field("MaximumDuration", &self.maximum_duration);
        shape.field("MessagesPerSecond", &self.messages_per_second);
        shape.field("Total", &self.total);
        shape.field("Session", &self.session);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignLimits {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignLimits`](crate::model::CampaignLimits).
pub mod campaign_limits {

    /// A builder for [`CampaignLimits`](crate::model::CampaignLimits).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily: ::std::option::Option<i32>,
        pub(crate) maximum_duration: ::std::option::Option<i32>,
        pub(crate) messages_per_second: ::std::option::Option<i32>,
        pub(crate) total: ::std::option::Option<i32>,
        pub(crate) session: ::std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during a 24-hour period.</p>
        pub fn daily(mut self, input: i32) -> Self {
            self.daily = ::std::option::Option::Some(input);
            self
        }
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during a 24-hour period.</p>
        pub fn set_daily(mut self, input: ::std::option::Option<i32>) -> Self {
            self.daily = input;
            self
        }
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during a 24-hour period.</p>
        pub fn get_daily(&self) -> &::std::option::Option<i32> {
            &self.daily
        }
        /// <p>The maximum amount of time, in seconds, that a campaign can attempt to deliver a message after the scheduled start time.</p>
        pub fn maximum_duration(mut self, input: i32) -> Self {
            self.maximum_duration = ::std::option::Option::Some(input);
            self
        }
        /// <p>The maximum amount of time, in seconds, that a campaign can attempt to deliver a message after the scheduled start time.</p>
        pub fn set_maximum_duration(mut self, input: ::std::option::Option<i32>) -> Self {
            self.maximum_duration = input;
            self
        }
        /// <p>The maximum amount of time, in seconds, that a campaign can attempt to deliver a message after the scheduled start time.</p>
        pub fn get_maximum_duration(&self) -> &::std::option::Option<i32> {
            &self.maximum_duration
        }
        /// <p>The maximum number of messages that a campaign can send each second.</p>
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = ::std::option::Option::Some(input);
            self
        }
        /// <p>The maximum number of messages that a campaign can send each second.</p>
        pub fn set_messages_per_second(mut self, input: ::std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        /// <p>The maximum number of messages that a campaign can send each second.</p>
        pub fn get_messages_per_second(&self) -> &::std::option::Option<i32> {
            &self.messages_per_second
        }
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during the course of the campaign.</p>
        pub fn total(mut self, input: i32) -> Self {
            self.total = ::std::option::Option::Some(input);
            self
        }
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during the course of the campaign.</p>
        pub fn set_total(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total = input;
            self
        }
        /// <p>The maximum number of messages that a campaign can send to a single endpoint during the course of the campaign.</p>
        pub fn get_total(&self) -> &::std::option::Option<i32> {
            &self.total
        }
        pub fn session(mut self, input: i32) -> Self {
            self.session = ::std::option::Option::Some(input);
            self
        }
        pub fn set_session(mut self, input: ::std::option::Option<i32>) -> Self {
            self.session = input;
            self
        }
        pub fn get_session(&self) -> &::std::option::Option<i32> {
            &self.session
        }
        /// Consumes the builder and constructs a [`CampaignLimits`](crate::model::CampaignLimits).
        pub fn build(self) -> crate::model::CampaignLimits {
            crate::model::CampaignLimits {
                daily: self.daily,
                maximum_duration: self.maximum_duration,
                messages_per_second: self.messages_per_second,
                total: self.total,
                session: self.session,
            }
        }
    }
}

/// <p>Specifies the start and end times that define a time range when messages aren't sent to endpoints.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct QuietTime {
    /// <p>The specific time when quiet time ends, in HH:MM format.</p>
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub(crate) end: ::std::option::Option<::std::string::String>,
    /// <p>The specific time when quiet time begins, in HH:MM format.</p>
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    pub(crate) start: ::std::option::Option<::std::string::String>,
}
impl QuietTime {
    /// <p>The specific time when quiet time ends, in HH:MM format.</p>
    pub fn end(&self) -> ::std::option::Option<&str> {
        self.end.as_deref()
    }
    /// <p>The specific time when quiet time begins, in HH:MM format.</p>
    pub fn start(&self) -> ::std::option::Option<&str> {
        self.start.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`QuietTime`](crate::model::QuietTime).
    pub fn builder() -> crate::model::quiet_time::Builder {
        crate::model::quiet_time::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::quiet_time::Builder {
        crate::model::quiet_time::Builder {
            end: self.end,
            start: self.start,
        }
    }
}
impl ::std::hash::Hash for QuietTime {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.end, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start, state);
    }
}
impl ::std::fmt::Display for QuietTime {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("End", &self.end);
        shape.field("Start", &self.start);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for QuietTime {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`QuietTime`](crate::model::QuietTime).
pub mod quiet_time {

    /// A builder for [`QuietTime`](crate::model::QuietTime).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end: ::std::option::Option<::std::string::String>,
        pub(crate) start: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The specific time when quiet time ends, in HH:MM format.</p>
        pub fn end(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.end = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The specific time when quiet time ends, in HH:MM format.</p>
        pub fn set_end(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.end = input;
            self
        }
        /// <p>The specific time when quiet time ends, in HH:MM format.</p>
        pub fn get_end(&self) -> &::std::option::Option<::std::string::String> {
            &self.end
        }
        /// <p>The specific time when quiet time begins, in HH:MM format.</p>
        pub fn start(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The specific time when quiet time begins, in HH:MM format.</p>
        pub fn set_start(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start = input;
            self
        }
        /// <p>The specific time when quiet time begins, in HH:MM format.</p>
        pub fn get_start(&self) -> &::std::option::Option<::std::string::String> {
            &self.start
        }
        /// Consumes the builder and constructs a [`QuietTime`](crate::model::QuietTime).
        pub fn build(self) -> crate::model::QuietTime {
            crate::model::QuietTime {
                end: self.end,
                start: self.start,
            }
        }
    }
}
