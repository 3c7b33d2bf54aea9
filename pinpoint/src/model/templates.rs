// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The kind of channel a message template is designed for.</p>
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
pub enum TemplateType {
    #[allow(missing_docs)] // documentation missing in model
    Email,
    #[allow(missing_docs)] // documentation missing in model
    Sms,
    #[allow(missing_docs)] // documentation missing in model
    Voice,
    #[allow(missing_docs)] // documentation missing in model
    Push,
    #[allow(missing_docs)] // documentation missing in model
    Inapp,
}
impl TemplateType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Email => "EMAIL",
            TemplateType::Sms => "SMS",
            TemplateType::Voice => "VOICE",
            TemplateType::Push => "PUSH",
            TemplateType::Inapp => "INAPP",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["EMAIL", "SMS", "VOICE", "PUSH", "INAPP"]
    }
}
impl ::std::str::FromStr for TemplateType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "EMAIL" => ::std::result::Result::Ok(TemplateType::Email),
            "SMS" => ::std::result::Result::Ok(TemplateType::Sms),
            "VOICE" => ::std::result::Result::Ok(TemplateType::Voice),
            "PUSH" => ::std::result::Result::Ok(TemplateType::Push),
            "INAPP" => ::std::result::Result::Ok(TemplateType::Inapp),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("TemplateType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("TemplateType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for TemplateType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for TemplateType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for TemplateType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for TemplateType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for TemplateType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Provides information about all the message templates that are associated with your Amazon Pinpoint account.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TemplatesResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::TemplateResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl TemplatesResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::TemplateResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TemplatesResponse`](crate::model::TemplatesResponse).
    pub fn builder() -> crate::model::templates_response::Builder {
        crate::model::templates_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::templates_response::Builder {
        crate::model::templates_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for TemplatesResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for TemplatesResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TemplatesResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TemplatesResponse`](crate::model::TemplatesResponse).
pub mod templates_response {

    /// A builder for [`TemplatesResponse`](crate::model::TemplatesResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::TemplateResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::TemplateResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::TemplateResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::TemplateResponse>> {
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
        /// Consumes the builder and constructs a [`TemplatesResponse`](crate::model::TemplatesResponse).
        pub fn build(self) -> crate::model::TemplatesResponse {
            crate::model::TemplatesResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Provides information about a message template that's associated with your Amazon Pinpoint account.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TemplateResponse {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) template_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl TemplateResponse {
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_substitutions(&self) -> ::std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> ::std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_type(&self) -> ::std::option::Option<&crate::model::TemplateType> {
        self.template_type.as_ref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TemplateResponse`](crate::model::TemplateResponse).
    pub fn builder() -> crate::model::template_response::Builder {
        crate::model::template_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::template_response::Builder {
        crate::model::template_response::Builder {
            arn: self.arn,
            creation_date: self.creation_date,
            default_substitutions: self.default_substitutions,
            last_modified_date: self.last_modified_date,
            tags: self.tags,
            template_description: self.template_description,
            template_name: self.template_name,
            template_type: self.template_type,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for TemplateResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for TemplateResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Arn", &self.arn);
        shape.field("CreationDate", &self.creation_date);
        shape.field("DefaultSubstitutions", &self.default_substitutions);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("tags", &self.tags);
        shape.field("TemplateDescription", &self.template_description);
        shape.field("TemplateName", &self.template_name);
        shape.field("TemplateType", &self.template_type);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TemplateResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TemplateResponse`](crate::model::TemplateResponse).
pub mod template_response {

    /// A builder for [`TemplateResponse`](crate::model::TemplateResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_description: ::std::option::Option<::std::string::String>,
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        pub fn default_substitutions(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_substitutions = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn get_default_substitutions(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_substitutions
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
        pub fn template_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn get_template_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_description
        }
        pub fn template_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn get_template_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_name
        }
        pub fn template_type(mut self, input: crate::model::TemplateType) -> Self {
            self.template_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_template_type(mut self, input: ::std::option::Option<crate::model::TemplateType>) -> Self {
            self.template_type = input;
            self
        }
        pub fn get_template_type(&self) -> &::std::option::Option<crate::model::TemplateType> {
            &self.template_type
        }
        pub fn version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.version
        }
        /// Consumes the builder and constructs a [`TemplateResponse`](crate::model::TemplateResponse).
        pub fn build(self) -> crate::model::TemplateResponse {
            crate::model::TemplateResponse {
                arn: self.arn,
                creation_date: self.creation_date,
                default_substitutions: self.default_substitutions,
                last_modified_date: self.last_modified_date,
                tags: self.tags,
                template_description: self.template_description,
                template_name: self.template_name,
                template_type: self.template_type,
                version: self.version,
            }
        }
    }
}

/// <p>Specifies the content and settings for a message template that can be used in messages that are sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailTemplateRequest {
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
    #[serde(rename = "HtmlPart", skip_serializing_if = "Option::is_none")]
    pub(crate) html_part: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub(crate) subject: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) template_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TextPart", skip_serializing_if = "Option::is_none")]
    pub(crate) text_part: ::std::option::Option<::std::string::String>,
}
impl EmailTemplateRequest {
    pub fn default_substitutions(&self) -> ::std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn html_part(&self) -> ::std::option::Option<&str> {
        self.html_part.as_deref()
    }
    pub fn recommender_id(&self) -> ::std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    pub fn subject(&self) -> ::std::option::Option<&str> {
        self.subject.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> ::std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn text_part(&self) -> ::std::option::Option<&str> {
        self.text_part.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EmailTemplateRequest`](crate::model::EmailTemplateRequest).
    pub fn builder() -> crate::model::email_template_request::Builder {
        crate::model::email_template_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_template_request::Builder {
        crate::model::email_template_request::Builder {
            default_substitutions: self.default_substitutions,
            html_part: self.html_part,
            recommender_id: self.recommender_id,
            subject: self.subject,
            tags: self.tags,
            template_description: self.template_description,
            text_part: self.text_part,
        }
    }
}
impl ::std::hash::Hash for EmailTemplateRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.html_part, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.recommender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.subject, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.text_part, state);
    }
}
impl ::std::fmt::Display for EmailTemplateRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DefaultSubstitutions", &self.default_substitutions);
        shape.field("HtmlPart", &self.html_part);
        shape.field("RecommenderId", &self.recommender_id);
        shape.field("Subject", &self.subject);
        shape.field("tags", &self.tags);
        shape.field("TemplateDescription", &self.template_description);
        shape.field("TextPart", &self.text_part);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailTemplateRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailTemplateRequest`](crate::model::EmailTemplateRequest).
pub mod email_template_request {

    /// A builder for [`EmailTemplateRequest`](crate::model::EmailTemplateRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
        pub(crate) html_part: ::std::option::Option<::std::string::String>,
        pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
        pub(crate) subject: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_description: ::std::option::Option<::std::string::String>,
        pub(crate) text_part: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn default_substitutions(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_substitutions = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn get_default_substitutions(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_substitutions
        }
        pub fn html_part(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.html_part = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_html_part(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.html_part = input;
            self
        }
        pub fn get_html_part(&self) -> &::std::option::Option<::std::string::String> {
            &self.html_part
        }
        pub fn recommender_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.recommender_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn get_recommender_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.recommender_id
        }
        pub fn subject(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.subject = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_subject(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.subject = input;
            self
        }
        pub fn get_subject(&self) -> &::std::option::Option<::std::string::String> {
            &self.subject
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
        pub fn template_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn get_template_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_description
        }
        pub fn text_part(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.text_part = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_text_part(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.text_part = input;
            self
        }
        pub fn get_text_part(&self) -> &::std::option::Option<::std::string::String> {
            &self.text_part
        }
        /// Consumes the builder and constructs a [`EmailTemplateRequest`](crate::model::EmailTemplateRequest).
        pub fn build(self) -> crate::model::EmailTemplateRequest {
            crate::model::EmailTemplateRequest {
                default_substitutions: self.default_substitutions,
                html_part: self.html_part,
                recommender_id: self.recommender_id,
                subject: self.subject,
                tags: self.tags,
                template_description: self.template_description,
                text_part: self.text_part,
            }
        }
    }
}

/// <p>Provides information about the content and settings for a message template that can be used in messages that are sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailTemplateResponse {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
    #[serde(rename = "HtmlPart", skip_serializing_if = "Option::is_none")]
    pub(crate) html_part: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub(crate) subject: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) template_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
    #[serde(rename = "TextPart", skip_serializing_if = "Option::is_none")]
    pub(crate) text_part: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl EmailTemplateResponse {
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_substitutions(&self) -> ::std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn html_part(&self) -> ::std::option::Option<&str> {
        self.html_part.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn recommender_id(&self) -> ::std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    pub fn subject(&self) -> ::std::option::Option<&str> {
        self.subject.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> ::std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_type(&self) -> ::std::option::Option<&crate::model::TemplateType> {
        self.template_type.as_ref()
    }
    pub fn text_part(&self) -> ::std::option::Option<&str> {
        self.text_part.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EmailTemplateResponse`](crate::model::EmailTemplateResponse).
    pub fn builder() -> crate::model::email_template_response::Builder {
        crate::model::email_template_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_template_response::Builder {
        crate::model::email_template_response::Builder {
            arn: self.arn,
            creation_date: self.creation_date,
            default_substitutions: self.default_substitutions,
            html_part: self.html_part,
            last_modified_date: self.last_modified_date,
            recommender_id: self.recommender_id,
            subject: self.subject,
            tags: self.tags,
            template_description: self.template_description,
            template_name: self.template_name,
            template_type: self.template_type,
            text_part: self.text_part,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for EmailTemplateResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.html_part, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.recommender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.subject, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.text_part, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for EmailTemplateResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Arn", &self.arn);
        shape.field("CreationDate", &self.creation_date);
        shape.field("DefaultSubstitutions", &self.default_substitutions);
        shape.field("HtmlPart", &self.html_part);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("RecommenderId", &self.recommender_id);
        shape.field("Subject", &self.subject);
        shape.field("tags", &self.tags);
        shape.field("TemplateDescription", &self.template_description);
        shape.field("TemplateName", &self.template_name);
        shape.field("TemplateType", &self.template_type);
        shape.field("TextPart", &self.text_part);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailTemplateResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailTemplateResponse`](crate::model::EmailTemplateResponse).
pub mod email_template_response {

    /// A builder for [`EmailTemplateResponse`](crate::model::EmailTemplateResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
        pub(crate) html_part: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
        pub(crate) subject: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_description: ::std::option::Option<::std::string::String>,
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
        pub(crate) text_part: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        pub fn default_substitutions(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_substitutions = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn get_default_substitutions(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_substitutions
        }
        pub fn html_part(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.html_part = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_html_part(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.html_part = input;
            self
        }
        pub fn get_html_part(&self) -> &::std::option::Option<::std::string::String> {
            &self.html_part
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
        pub fn recommender_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.recommender_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn get_recommender_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.recommender_id
        }
        pub fn subject(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.subject = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_subject(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.subject = input;
            self
        }
        pub fn get_subject(&self) -> &::std::option::Option<::std::string::String> {
            &self.subject
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
        pub fn template_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn get_template_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_description
        }
        pub fn template_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn get_template_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_name
        }
        pub fn template_type(mut self, input: crate::model::TemplateType) -> Self {
            self.template_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_template_type(mut self, input: ::std::option::Option<crate::model::TemplateType>) -> Self {
            self.template_type = input;
            self
        }
        pub fn get_template_type(&self) -> &::std::option::Option<crate::model::TemplateType> {
            &self.template_type
        }
        pub fn text_part(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.text_part = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_text_part(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.text_part = input;
            self
        }
        pub fn get_text_part(&self) -> &::std::option::Option<::std::string::String> {
            &self.text_part
        }
        pub fn version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.version
        }
        /// Consumes the builder and constructs a [`EmailTemplateResponse`](crate::model::EmailTemplateResponse).
        pub fn build(self) -> crate::model::EmailTemplateResponse {
            crate::model::EmailTemplateResponse {
                arn: self.arn,
                creation_date: self.creation_date,
                default_substitutions: self.default_substitutions,
                html_part: self.html_part,
                last_modified_date: self.last_modified_date,
                recommender_id: self.recommender_id,
                subject: self.subject,
                tags: self.tags,
                template_description: self.template_description,
                template_name: self.template_name,
                template_type: self.template_type,
                text_part: self.text_part,
                version: self.version,
            }
        }
    }
}

/// <p>Specifies the content and settings for a message template that can be used in text messages that are sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SMSTemplateRequest {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) template_description: ::std::option::Option<::std::string::String>,
}
impl SMSTemplateRequest {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn default_substitutions(&self) -> ::std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn recommender_id(&self) -> ::std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> ::std::option::Option<&str> {
        self.template_description.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SMSTemplateRequest`](crate::model::SMSTemplateRequest).
    pub fn builder() -> crate::model::sms_template_request::Builder {
        crate::model::sms_template_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::sms_template_request::Builder {
        crate::model::sms_template_request::Builder {
            body: self.body,
            default_substitutions: self.default_substitutions,
            recommender_id: self.recommender_id,
            tags: self.tags,
            template_description: self.template_description,
        }
    }
}
impl ::std::hash::Hash for SMSTemplateRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.recommender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_description, state);
    }
}
impl ::std::fmt::Display for SMSTemplateRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("DefaultSubstitutions", &self.default_substitutions);
        shape.field("RecommenderId", &self.recommender_id);
        shape.field("tags", &self.tags);
        shape.field("TemplateDescription", &self.template_description);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SMSTemplateRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SMSTemplateRequest`](crate::model::SMSTemplateRequest).
pub mod sms_template_request {

    /// A builder for [`SMSTemplateRequest`](crate::model::SMSTemplateRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
        pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_description: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn body(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.body = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_body(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn get_body(&self) -> &::std::option::Option<::std::string::String> {
            &self.body
        }
        pub fn default_substitutions(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_substitutions = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn get_default_substitutions(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_substitutions
        }
        pub fn recommender_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.recommender_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn get_recommender_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.recommender_id
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
        pub fn template_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn get_template_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_description
        }
        /// Consumes the builder and constructs a [`SMSTemplateRequest`](crate::model::SMSTemplateRequest).
        pub fn build(self) -> crate::model::SMSTemplateRequest {
            crate::model::SMSTemplateRequest {
                body: self.body,
                default_substitutions: self.default_substitutions,
                recommender_id: self.recommender_id,
                tags: self.tags,
                template_description: self.template_description,
            }
        }
    }
}

/// <p>Provides information about the content and settings for a message template that can be used in text messages that are sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SMSTemplateResponse {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultSubstitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RecommenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) template_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateType", skip_serializing_if = "Option::is_none")]
    pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl SMSTemplateResponse {
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_substitutions(&self) -> ::std::option::Option<&str> {
        self.default_substitutions.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn recommender_id(&self) -> ::std::option::Option<&str> {
        self.recommender_id.as_deref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_description(&self) -> ::std::option::Option<&str> {
        self.template_description.as_deref()
    }
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_type(&self) -> ::std::option::Option<&crate::model::TemplateType> {
        self.template_type.as_ref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SMSTemplateResponse`](crate::model::SMSTemplateResponse).
    pub fn builder() -> crate::model::sms_template_response::Builder {
        crate::model::sms_template_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::sms_template_response::Builder {
        crate::model::sms_template_response::Builder {
            arn: self.arn,
            body: self.body,
            creation_date: self.creation_date,
            default_substitutions: self.default_substitutions,
            last_modified_date: self.last_modified_date,
            recommender_id: self.recommender_id,
            tags: self.tags,
            template_description: self.template_description,
            template_name: self.template_name,
            template_type: self.template_type,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for SMSTemplateResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.recommender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for SMSTemplateResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Arn", &self.arn);
        shape.field("Body", &self.body);
        shape.field("CreationDate", &self.creation_date);
        shape.field("DefaultSubstitutions", &self.default_substitutions);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("RecommenderId", &self.recommender_id);
        shape.field("tags", &self.tags);
        shape.field("TemplateDescription", &self.template_description);
        shape.field("TemplateName", &self.template_name);
        shape.field("TemplateType", &self.template_type);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SMSTemplateResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SMSTemplateResponse`](crate::model::SMSTemplateResponse).
pub mod sms_template_response {

    /// A builder for [`SMSTemplateResponse`](crate::model::SMSTemplateResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) default_substitutions: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) recommender_id: ::std::option::Option<::std::string::String>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_description: ::std::option::Option<::std::string::String>,
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) template_type: ::std::option::Option<crate::model::TemplateType>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        pub fn body(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.body = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_body(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn get_body(&self) -> &::std::option::Option<::std::string::String> {
            &self.body
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
        pub fn default_substitutions(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_substitutions = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_substitutions(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_substitutions = input;
            self
        }
        pub fn get_default_substitutions(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_substitutions
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
        pub fn recommender_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.recommender_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_recommender_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.recommender_id = input;
            self
        }
        pub fn get_recommender_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.recommender_id
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
        pub fn template_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_description = input;
            self
        }
        pub fn get_template_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_description
        }
        pub fn template_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        pub fn get_template_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_name
        }
        pub fn template_type(mut self, input: crate::model::TemplateType) -> Self {
            self.template_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_template_type(mut self, input: ::std::option::Option<crate::model::TemplateType>) -> Self {
            self.template_type = input;
            self
        }
        pub fn get_template_type(&self) -> &::std::option::Option<crate::model::TemplateType> {
            &self.template_type
        }
        pub fn version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.version = input;
            self
        }
        pub fn get_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.version
        }
        /// Consumes the builder and constructs a [`SMSTemplateResponse`](crate::model::SMSTemplateResponse).
        pub fn build(self) -> crate::model::SMSTemplateResponse {
            crate::model::SMSTemplateResponse {
                arn: self.arn,
                body: self.body,
                creation_date: self.creation_date,
                default_substitutions: self.default_substitutions,
                last_modified_date: self.last_modified_date,
                recommender_id: self.recommender_id,
                tags: self.tags,
                template_description: self.template_description,
                template_name: self.template_name,
                template_type: self.template_type,
                version: self.version,
            }
        }
    }
}

/// <p>Provides information about a request to create a message template.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CreateTemplateMessageBody {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl CreateTemplateMessageBody {
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody).
    pub fn builder() -> crate::model::create_template_message_body::Builder {
        crate::model::create_template_message_body::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::create_template_message_body::Builder {
        crate::model::create_template_message_body::Builder {
            arn: self.arn,
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for CreateTemplateMessageBody {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for CreateTemplateMessageBody {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Arn", &self.arn);
        shape.field("Message", &self.message);
        shape.field("RequestID", &self.request_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateTemplateMessageBody {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody).
pub mod create_template_message_body {

    /// A builder for [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.message
        }
        pub fn request_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.request_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn get_request_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.request_id
        }
        /// Consumes the builder and constructs a [`CreateTemplateMessageBody`](crate::model::CreateTemplateMessageBody).
        pub fn build(self) -> crate::model::CreateTemplateMessageBody {
            crate::model::CreateTemplateMessageBody {
                arn: self.arn,
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
