// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The delivery outcome of a message.</p>
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
pub enum DeliveryStatus {
    #[allow(missing_docs)] // documentation missing in model
    Successful,
    #[allow(missing_docs)] // documentation missing in model
    Throttled,
    #[allow(missing_docs)] // documentation missing in model
    TemporaryFailure,
    #[allow(missing_docs)] // documentation missing in model
    PermanentFailure,
    #[allow(missing_docs)] // documentation missing in model
    UnknownFailure,
    #[allow(missing_docs)] // documentation missing in model
    OptOut,
    #[allow(missing_docs)] // documentation missing in model
    Duplicate,
}
impl DeliveryStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Successful => "SUCCESSFUL",
            DeliveryStatus::Throttled => "THROTTLED",
            DeliveryStatus::TemporaryFailure => "TEMPORARY_FAILURE",
            DeliveryStatus::PermanentFailure => "PERMANENT_FAILURE",
            DeliveryStatus::UnknownFailure => "UNKNOWN_FAILURE",
            DeliveryStatus::OptOut => "OPT_OUT",
            DeliveryStatus::Duplicate => "DUPLICATE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SUCCESSFUL", "THROTTLED", "TEMPORARY_FAILURE", "PERMANENT_FAILURE", "UNKNOWN_FAILURE", "OPT_OUT", "DUPLICATE"]
    }
}
impl ::std::str::FromStr for DeliveryStatus {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "SUCCESSFUL" => ::std::result::Result::Ok(DeliveryStatus::Successful),
            "THROTTLED" => ::std::result::Result::Ok(DeliveryStatus::Throttled),
            "TEMPORARY_FAILURE" => ::std::result::Result::Ok(DeliveryStatus::TemporaryFailure),
            "PERMANENT_FAILURE" => ::std::result::Result::Ok(DeliveryStatus::PermanentFailure),
            "UNKNOWN_FAILURE" => ::std::result::Result::Ok(DeliveryStatus::UnknownFailure),
            "OPT_OUT" => ::std::result::Result::Ok(DeliveryStatus::OptOut),
            "DUPLICATE" => ::std::result::Result::Ok(DeliveryStatus::Duplicate),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("DeliveryStatus")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("DeliveryStatus", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for DeliveryStatus {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for DeliveryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for DeliveryStatus {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for DeliveryStatus {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for DeliveryStatus {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Specifies the configuration and other settings for a message.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MessageRequest {
    #[serde(rename = "Addresses", skip_serializing_if = "Option::is_none")]
    pub(crate) addresses: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AddressConfiguration>>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "Endpoints", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoints: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointSendConfiguration>>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) message_configuration: ::std::option::Option<crate::model::DirectMessageConfiguration>,
    #[serde(rename = "TemplateConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
    #[serde(rename = "TraceId", skip_serializing_if = "Option::is_none")]
    pub(crate) trace_id: ::std::option::Option<::std::string::String>,
}
impl MessageRequest {
    pub fn addresses(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::AddressConfiguration>> {
        self.addresses.as_ref()
    }
    pub fn context(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.context.as_ref()
    }
    pub fn endpoints(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::EndpointSendConfiguration>> {
        self.endpoints.as_ref()
    }
    pub fn message_configuration(&self) -> ::std::option::Option<&crate::model::DirectMessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn template_configuration(&self) -> ::std::option::Option<&crate::model::TemplateConfiguration> {
        self.template_configuration.as_ref()
    }
    pub fn trace_id(&self) -> ::std::option::Option<&str> {
        self.trace_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`MessageRequest`](crate::model::MessageRequest).
    pub fn builder() -> crate::model::message_request::Builder {
        crate::model::message_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message_request::Builder {
        crate::model::message_request::Builder {
            addresses: self.addresses,
            context: self.context,
            endpoints: self.endpoints,
            message_configuration: self.message_configuration,
            template_configuration: self.template_configuration,
            trace_id: self.trace_id,
        }
    }
}
impl ::std::hash::Hash for MessageRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.addresses, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.context, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoints, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.trace_id, state);
    }
}
impl ::std::fmt::Display for MessageRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Addresses", &self.addresses);
        shape.field("Context", &self.context);
        shape.field("Endpoints", &self.endpoints);
        shape.field("MessageConfiguration", &self.message_configuration);
        shape.field("TemplateConfiguration", &self.template_configuration);
        shape.field("TraceId", &self.trace_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MessageRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MessageRequest`](crate::model::MessageRequest).
pub mod message_request {

    /// A builder for [`MessageRequest`](crate::model::MessageRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) addresses: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AddressConfiguration>>,
        pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) endpoints: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointSendConfiguration>>,
        pub(crate) message_configuration: ::std::option::Option<crate::model::DirectMessageConfiguration>,
        pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
        pub(crate) trace_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Adds a key-value pair to `addresses`.
        ///
        /// To override the contents of this collection use [`set_addresses`](Self::set_addresses).
        ///
        pub fn addresses(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::AddressConfiguration) -> Self {
            let mut hash_map = self.addresses.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.addresses = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_addresses(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AddressConfiguration>>) -> Self {
            self.addresses = input;
            self
        }
        pub fn get_addresses(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AddressConfiguration>> {
            &self.addresses
        }
        /// Inserts a key-value pair into `addresses`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_addresses_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::AddressConfiguration,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.addresses, "Addresses", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        ///
        pub fn context(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn get_context(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.context
        }
        /// Inserts a key-value pair into `context`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_context_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.context, "Context", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        /// Adds a key-value pair to `endpoints`.
        ///
        /// To override the contents of this collection use [`set_endpoints`](Self::set_endpoints).
        ///
        pub fn endpoints(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::EndpointSendConfiguration) -> Self {
            let mut hash_map = self.endpoints.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.endpoints = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_endpoints(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointSendConfiguration>>) -> Self {
            self.endpoints = input;
            self
        }
        pub fn get_endpoints(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointSendConfiguration>> {
            &self.endpoints
        }
        /// Inserts a key-value pair into `endpoints`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_endpoints_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::EndpointSendConfiguration,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.endpoints, "Endpoints", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn message_configuration(mut self, input: crate::model::DirectMessageConfiguration) -> Self {
            self.message_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: ::std::option::Option<crate::model::DirectMessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn get_message_configuration(&self) -> &::std::option::Option<crate::model::DirectMessageConfiguration> {
            &self.message_configuration
        }
        pub fn template_configuration(mut self, input: crate::model::TemplateConfiguration) -> Self {
            self.template_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_template_configuration(mut self, input: ::std::option::Option<crate::model::TemplateConfiguration>) -> Self {
            self.template_configuration = input;
            self
        }
        pub fn get_template_configuration(&self) -> &::std::option::Option<crate::model::TemplateConfiguration> {
            &self.template_configuration
        }
        pub fn trace_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.trace_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_trace_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.trace_id = input;
            self
        }
        pub fn get_trace_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.trace_id
        }
        /// Consumes the builder and constructs a [`MessageRequest`](crate::model::MessageRequest).
        pub fn build(self) -> crate::model::MessageRequest {
            crate::model::MessageRequest {
                addresses: self.addresses,
                context: self.context,
                endpoints: self.endpoints,
                message_configuration: self.message_configuration,
                template_configuration: self.template_configuration,
                trace_id: self.trace_id,
            }
        }
    }
}

/// <p>Specifies address-based configuration settings for a message that's sent directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct AddressConfiguration {
    #[serde(rename = "BodyOverride", skip_serializing_if = "Option::is_none")]
    pub(crate) body_override: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_content: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "TitleOverride", skip_serializing_if = "Option::is_none")]
    pub(crate) title_override: ::std::option::Option<::std::string::String>,
}
impl AddressConfiguration {
    pub fn body_override(&self) -> ::std::option::Option<&str> {
        self.body_override.as_deref()
    }
    pub fn channel_type(&self) -> ::std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn context(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.context.as_ref()
    }
    pub fn raw_content(&self) -> ::std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title_override(&self) -> ::std::option::Option<&str> {
        self.title_override.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`AddressConfiguration`](crate::model::AddressConfiguration).
    pub fn builder() -> crate::model::address_configuration::Builder {
        crate::model::address_configuration::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::address_configuration::Builder {
        crate::model::address_configuration::Builder {
            body_override: self.body_override,
            channel_type: self.channel_type,
            context: self.context,
            raw_content: self.raw_content,
            substitutions: self.substitutions,
            title_override: self.title_override,
        }
    }
}
impl ::std::hash::Hash for AddressConfiguration {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body_override, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.context, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_content, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title_override, state);
    }
}
impl ::std::fmt::Display for AddressConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("BodyOverride", &self.body_override);
        shape.field("ChannelType", &self.channel_type);
        shape.field("Context", &self.context);
        shape.field("RawContent", &self.raw_content);
        shape.field("Substitutions", &self.substitutions);
        shape.field("TitleOverride", &self.title_override);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for AddressConfiguration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`AddressConfiguration`](crate::model::AddressConfiguration).
pub mod address_configuration {

    /// A builder for [`AddressConfiguration`](crate::model::AddressConfiguration).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: ::std::option::Option<::std::string::String>,
        pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
        pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) raw_content: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) title_override: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.body_override = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        pub fn get_body_override(&self) -> &::std::option::Option<::std::string::String> {
            &self.body_override
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: ::std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn get_channel_type(&self) -> &::std::option::Option<crate::model::ChannelType> {
            &self.channel_type
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        ///
        pub fn context(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn get_context(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.context
        }
        /// Inserts a key-value pair into `context`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_context_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.context, "Context", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn raw_content(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.raw_content = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn get_raw_content(&self) -> &::std::option::Option<::std::string::String> {
            &self.raw_content
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn title_override(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title_override = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        pub fn get_title_override(&self) -> &::std::option::Option<::std::string::String> {
            &self.title_override
        }
        /// Consumes the builder and constructs a [`AddressConfiguration`](crate::model::AddressConfiguration).
        pub fn build(self) -> crate::model::AddressConfiguration {
            crate::model::AddressConfiguration {
                body_override: self.body_override,
                channel_type: self.channel_type,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}

/// <p>Specifies the content, including message variables and attributes, to use in a message that's sent directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointSendConfiguration {
    #[serde(rename = "BodyOverride", skip_serializing_if = "Option::is_none")]
    pub(crate) body_override: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Context", skip_serializing_if = "Option::is_none")]
    pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_content: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "TitleOverride", skip_serializing_if = "Option::is_none")]
    pub(crate) title_override: ::std::option::Option<::std::string::String>,
}
impl EndpointSendConfiguration {
    pub fn body_override(&self) -> ::std::option::Option<&str> {
        self.body_override.as_deref()
    }
    pub fn context(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.context.as_ref()
    }
    pub fn raw_content(&self) -> ::std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title_override(&self) -> ::std::option::Option<&str> {
        self.title_override.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration).
    pub fn builder() -> crate::model::endpoint_send_configuration::Builder {
        crate::model::endpoint_send_configuration::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_send_configuration::Builder {
        crate::model::endpoint_send_configuration::Builder {
            body_override: self.body_override,
            context: self.context,
            raw_content: self.raw_content,
            substitutions: self.substitutions,
            title_override: self.title_override,
        }
    }
}
impl ::std::hash::Hash for EndpointSendConfiguration {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body_override, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.context, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_content, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title_override, state);
    }
}
impl ::std::fmt::Display for EndpointSendConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("BodyOverride", &self.body_override);
        shape.field("Context", &self.context);
        shape.field("RawContent", &self.raw_content);
        shape.field("Substitutions", &self.substitutions);
        shape.field("TitleOverride", &self.title_override);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointSendConfiguration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration).
pub mod endpoint_send_configuration {

    /// A builder for [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: ::std::option::Option<::std::string::String>,
        pub(crate) context: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) raw_content: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) title_override: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.body_override = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        pub fn get_body_override(&self) -> &::std::option::Option<::std::string::String> {
            &self.body_override
        }
        /// Adds a key-value pair to `context`.
        ///
        /// To override the contents of this collection use [`set_context`](Self::set_context).
        ///
        pub fn context(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn get_context(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.context
        }
        /// Inserts a key-value pair into `context`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_context_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.context, "Context", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn raw_content(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.raw_content = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn get_raw_content(&self) -> &::std::option::Option<::std::string::String> {
            &self.raw_content
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn title_override(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title_override = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        pub fn get_title_override(&self) -> &::std::option::Option<::std::string::String> {
            &self.title_override
        }
        /// Consumes the builder and constructs a [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration).
        pub fn build(self) -> crate::model::EndpointSendConfiguration {
            crate::model::EndpointSendConfiguration {
                body_override: self.body_override,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}

/// <p>Specifies the settings and content for the default message and any default messages that you tailored for specific channels.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct DirectMessageConfiguration {
    #[serde(rename = "APNSMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) apns_message: ::std::option::Option<crate::model::APNSMessage>,
    #[serde(rename = "DefaultMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) default_message: ::std::option::Option<crate::model::DefaultMessage>,
    #[serde(rename = "DefaultPushNotificationMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) default_push_notification_message: ::std::option::Option<crate::model::DefaultPushNotificationMessage>,
    #[serde(rename = "EmailMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) email_message: ::std::option::Option<crate::model::EmailMessage>,
    #[serde(rename = "GCMMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) gcm_message: ::std::option::Option<crate::model::GCMMessage>,
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) sms_message: ::std::option::Option<crate::model::SMSMessage>,
}
impl DirectMessageConfiguration {
    pub fn apns_message(&self) -> ::std::option::Option<&crate::model::APNSMessage> {
        self.apns_message.as_ref()
    }
    pub fn default_message(&self) -> ::std::option::Option<&crate::model::DefaultMessage> {
        self.default_message.as_ref()
    }
    pub fn default_push_notification_message(&self) -> ::std::option::Option<&crate::model::DefaultPushNotificationMessage> {
        self.default_push_notification_message.as_ref()
    }
    pub fn email_message(&self) -> ::std::option::Option<&crate::model::EmailMessage> {
        self.email_message.as_ref()
    }
    pub fn gcm_message(&self) -> ::std::option::Option<&crate::model::GCMMessage> {
        self.gcm_message.as_ref()
    }
    pub fn sms_message(&self) -> ::std::option::Option<&crate::model::SMSMessage> {
        self.sms_message.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration).
    pub fn builder() -> crate::model::direct_message_configuration::Builder {
        crate::model::direct_message_configuration::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::direct_message_configuration::Builder {
        crate::model::direct_message_configuration::Builder {
            apns_message: self.apns_message,
            default_message: self.default_message,
            default_push_notification_message: self.default_push_notification_message,
            email_message: self.email_message,
            gcm_message: self.gcm_message,
            sms_message: self.sms_message,
        }
    }
}
impl ::std::hash::Hash for DirectMessageConfiguration {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_push_notification_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_message, state);
    }
}
impl ::std::fmt::Display for DirectMessageConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("APNSMessage", &self.apns_message);
        shape.field("DefaultMessage", &self.default_message);
        shape.field("DefaultPushNotificationMessage", &self.default_push_notification_message);
        shape.field("EmailMessage", &self.email_message);
        shape.field("GCMMessage", &self.gcm_message);
        shape.field("SMSMessage", &self.sms_message);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DirectMessageConfiguration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration).
pub mod direct_message_configuration {

    /// A builder for [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_message: ::std::option::Option<crate::model::APNSMessage>,
        pub(crate) default_message: ::std::option::Option<crate::model::DefaultMessage>,
        pub(crate) default_push_notification_message: ::std::option::Option<crate::model::DefaultPushNotificationMessage>,
        pub(crate) email_message: ::std::option::Option<crate::model::EmailMessage>,
        pub(crate) gcm_message: ::std::option::Option<crate::model::GCMMessage>,
        pub(crate) sms_message: ::std::option::Option<crate::model::SMSMessage>,
    }
    impl Builder {
        pub fn apns_message(mut self, input: crate::model::APNSMessage) -> Self {
            self.apns_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_apns_message(mut self, input: ::std::option::Option<crate::model::APNSMessage>) -> Self {
            self.apns_message = input;
            self
        }
        pub fn get_apns_message(&self) -> &::std::option::Option<crate::model::APNSMessage> {
            &self.apns_message
        }
        pub fn default_message(mut self, input: crate::model::DefaultMessage) -> Self {
            self.default_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_default_message(mut self, input: ::std::option::Option<crate::model::DefaultMessage>) -> Self {
            self.default_message = input;
            self
        }
        pub fn get_default_message(&self) -> &::std::option::Option<crate::model::DefaultMessage> {
            &self.default_message
        }
        pub fn default_push_notification_message(mut self, input: crate::model::DefaultPushNotificationMessage) -> Self {
            self.default_push_notification_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_default_push_notification_message(mut self, input: ::std::option::Option<crate::model::DefaultPushNotificationMessage>) -> Self {
            self.default_push_notification_message = input;
            self
        }
        pub fn get_default_push_notification_message(&self) -> &::std::option::Option<crate::model::DefaultPushNotificationMessage> {
            &self.default_push_notification_message
        }
        pub fn email_message(mut self, input: crate::model::EmailMessage) -> Self {
            self.email_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_message(mut self, input: ::std::option::Option<crate::model::EmailMessage>) -> Self {
            self.email_message = input;
            self
        }
        pub fn get_email_message(&self) -> &::std::option::Option<crate::model::EmailMessage> {
            &self.email_message
        }
        pub fn gcm_message(mut self, input: crate::model::GCMMessage) -> Self {
            self.gcm_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: ::std::option::Option<crate::model::GCMMessage>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn get_gcm_message(&self) -> &::std::option::Option<crate::model::GCMMessage> {
            &self.gcm_message
        }
        pub fn sms_message(mut self, input: crate::model::SMSMessage) -> Self {
            self.sms_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: ::std::option::Option<crate::model::SMSMessage>) -> Self {
            self.sms_message = input;
            self
        }
        pub fn get_sms_message(&self) -> &::std::option::Option<crate::model::SMSMessage> {
            &self.sms_message
        }
        /// Consumes the builder and constructs a [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration).
        pub fn build(self) -> crate::model::DirectMessageConfiguration {
            crate::model::DirectMessageConfiguration {
                apns_message: self.apns_message,
                default_message: self.default_message,
                default_push_notification_message: self.default_push_notification_message,
                email_message: self.email_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}

/// <p>Specifies the settings for a one-time message that's sent directly to an endpoint through the APNs (Apple Push Notification service) channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct APNSMessage {
    #[serde(rename = "APNSPushType", skip_serializing_if = "Option::is_none")]
    pub(crate) apns_push_type: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub(crate) action: ::std::option::Option<crate::model::Action>,
    #[serde(rename = "Badge", skip_serializing_if = "Option::is_none")]
    pub(crate) badge: ::std::option::Option<i32>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub(crate) category: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CollapseId", skip_serializing_if = "Option::is_none")]
    pub(crate) collapse_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) media_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "PreferredAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub(crate) preferred_authentication_method: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub(crate) priority: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_content: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub(crate) silent_push: ::std::option::Option<bool>,
    #[serde(rename = "Sound", skip_serializing_if = "Option::is_none")]
    pub(crate) sound: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "ThreadId", skip_serializing_if = "Option::is_none")]
    pub(crate) thread_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub(crate) time_to_live: ::std::option::Option<i32>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub(crate) title: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub(crate) url: ::std::option::Option<::std::string::String>,
}
impl APNSMessage {
    pub fn apns_push_type(&self) -> ::std::option::Option<&str> {
        self.apns_push_type.as_deref()
    }
    pub fn action(&self) -> ::std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn badge(&self) -> ::std::option::Option<i32> {
        self.badge
    }
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn category(&self) -> ::std::option::Option<&str> {
        self.category.as_deref()
    }
    pub fn collapse_id(&self) -> ::std::option::Option<&str> {
        self.collapse_id.as_deref()
    }
    pub fn data(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.data.as_ref()
    }
    pub fn media_url(&self) -> ::std::option::Option<&str> {
        self.media_url.as_deref()
    }
    pub fn preferred_authentication_method(&self) -> ::std::option::Option<&str> {
        self.preferred_authentication_method.as_deref()
    }
    pub fn priority(&self) -> ::std::option::Option<&str> {
        self.priority.as_deref()
    }
    pub fn raw_content(&self) -> ::std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn silent_push(&self) -> ::std::option::Option<bool> {
        self.silent_push
    }
    pub fn sound(&self) -> ::std::option::Option<&str> {
        self.sound.as_deref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn thread_id(&self) -> ::std::option::Option<&str> {
        self.thread_id.as_deref()
    }
    pub fn time_to_live(&self) -> ::std::option::Option<i32> {
        self.time_to_live
    }
    pub fn title(&self) -> ::std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> ::std::option::Option<&str> {
        self.url.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`APNSMessage`](crate::model::APNSMessage).
    pub fn builder() -> crate::model::apns_message::Builder {
        crate::model::apns_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::apns_message::Builder {
        crate::model::apns_message::Builder {
            apns_push_type: self.apns_push_type,
            action: self.action,
            badge: self.badge,
            body: self.body,
            category: self.category,
            collapse_id: self.collapse_id,
            data: self.data,
            media_url: self.media_url,
            preferred_authentication_method: self.preferred_authentication_method,
            priority: self.priority,
            raw_content: self.raw_content,
            silent_push: self.silent_push,
            sound: self.sound,
            substitutions: self.substitutions,
            thread_id: self.thread_id,
            time_to_live: self.time_to_live,
            title: self.title,
            url: self.url,
        }
    }
}
impl ::std::hash::Hash for APNSMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_push_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.action, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.badge, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.category, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.collapse_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.media_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.preferred_authentication_method, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.priority, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_content, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.silent_push, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sound, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.thread_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.time_to_live, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.url, state);
    }
}
impl ::std::fmt::Display for APNSMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("APNSPushType", &self.apns_push_type);
        shape.field("Action", &self.action);
        shape.field("Badge", &self.badge);
        shape.field("Body", &self.body);
        shape.field("Category", &self.category);
        shape.field("CollapseId", &self.collapse_id);
        shape.field("Data", &self.data);
        shape.field("MediaUrl", &self.media_url);
        shape.field("PreferredAuthenticationMethod", &self.preferred_authentication_method);
        shape.field("Priority", &self.priority);
        shape.field("RawContent", &self.raw_content);
        shape.field("SilentPush", &self.silent_push);
        shape.field("Sound", &self.sound);
        shape.field("Substitutions", &self.substitutions);
        shape.field("ThreadId", &self.thread_id);
        shape.field("TimeToLive", &self.time_to_live);
        shape.field("Title", &self.title);
        shape.field("Url", &self.url);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for APNSMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`APNSMessage`](crate::model::APNSMessage).
pub mod apns_message {

    /// A builder for [`APNSMessage`](crate::model::APNSMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_push_type: ::std::option::Option<::std::string::String>,
        pub(crate) action: ::std::option::Option<crate::model::Action>,
        pub(crate) badge: ::std::option::Option<i32>,
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) category: ::std::option::Option<::std::string::String>,
        pub(crate) collapse_id: ::std::option::Option<::std::string::String>,
        pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) media_url: ::std::option::Option<::std::string::String>,
        pub(crate) preferred_authentication_method: ::std::option::Option<::std::string::String>,
        pub(crate) priority: ::std::option::Option<::std::string::String>,
        pub(crate) raw_content: ::std::option::Option<::std::string::String>,
        pub(crate) silent_push: ::std::option::Option<bool>,
        pub(crate) sound: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) thread_id: ::std::option::Option<::std::string::String>,
        pub(crate) time_to_live: ::std::option::Option<i32>,
        pub(crate) title: ::std::option::Option<::std::string::String>,
        pub(crate) url: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn apns_push_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.apns_push_type = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_apns_push_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.apns_push_type = input;
            self
        }
        pub fn get_apns_push_type(&self) -> &::std::option::Option<::std::string::String> {
            &self.apns_push_type
        }
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = ::std::option::Option::Some(input);
            self
        }
        pub fn set_action(mut self, input: ::std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn get_action(&self) -> &::std::option::Option<crate::model::Action> {
            &self.action
        }
        pub fn badge(mut self, input: i32) -> Self {
            self.badge = ::std::option::Option::Some(input);
            self
        }
        pub fn set_badge(mut self, input: ::std::option::Option<i32>) -> Self {
            self.badge = input;
            self
        }
        pub fn get_badge(&self) -> &::std::option::Option<i32> {
            &self.badge
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
        pub fn category(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.category = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_category(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.category = input;
            self
        }
        pub fn get_category(&self) -> &::std::option::Option<::std::string::String> {
            &self.category
        }
        pub fn collapse_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.collapse_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_collapse_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.collapse_id = input;
            self
        }
        pub fn get_collapse_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.collapse_id
        }
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        ///
        pub fn data(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn get_data(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.data
        }
        /// Inserts a key-value pair into `data`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_data_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.data, "Data", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn media_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.media_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn get_media_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.media_url
        }
        pub fn preferred_authentication_method(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.preferred_authentication_method = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_preferred_authentication_method(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.preferred_authentication_method = input;
            self
        }
        pub fn get_preferred_authentication_method(&self) -> &::std::option::Option<::std::string::String> {
            &self.preferred_authentication_method
        }
        pub fn priority(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.priority = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.priority = input;
            self
        }
        pub fn get_priority(&self) -> &::std::option::Option<::std::string::String> {
            &self.priority
        }
        pub fn raw_content(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.raw_content = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn get_raw_content(&self) -> &::std::option::Option<::std::string::String> {
            &self.raw_content
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = ::std::option::Option::Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: ::std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn get_silent_push(&self) -> &::std::option::Option<bool> {
            &self.silent_push
        }
        pub fn sound(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.sound = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_sound(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.sound = input;
            self
        }
        pub fn get_sound(&self) -> &::std::option::Option<::std::string::String> {
            &self.sound
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn thread_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.thread_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_thread_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.thread_id = input;
            self
        }
        pub fn get_thread_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.thread_id
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = ::std::option::Option::Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: ::std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn get_time_to_live(&self) -> &::std::option::Option<i32> {
            &self.time_to_live
        }
        pub fn title(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_title(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn get_title(&self) -> &::std::option::Option<::std::string::String> {
            &self.title
        }
        pub fn url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.url = input;
            self
        }
        pub fn get_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.url
        }
        /// Consumes the builder and constructs a [`APNSMessage`](crate::model::APNSMessage).
        pub fn build(self) -> crate::model::APNSMessage {
            crate::model::APNSMessage {
                apns_push_type: self.apns_push_type,
                action: self.action,
                badge: self.badge,
                body: self.body,
                category: self.category,
                collapse_id: self.collapse_id,
                data: self.data,
                media_url: self.media_url,
                preferred_authentication_method: self.preferred_authentication_method,
                priority: self.priority,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                sound: self.sound,
                substitutions: self.substitutions,
                thread_id: self.thread_id,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}

/// <p>Specifies the settings for a one-time message that's sent directly to an endpoint through the GCM channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct GCMMessage {
    /// <p>The action to occur if the recipient taps the push notification.</p>
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub(crate) action: ::std::option::Option<crate::model::Action>,
    /// <p>The body of the notification message.</p>
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    /// <p>An arbitrary string that identifies a group of messages that can be collapsed to ensure that only the last message is sent when delivery can resume.</p>
    #[serde(rename = "CollapseKey", skip_serializing_if = "Option::is_none")]
    pub(crate) collapse_key: ::std::option::Option<::std::string::String>,
    /// <p>The JSON data payload to use for the push notification, if the notification is a silent push notification.</p>
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    /// <p>The icon image name of the asset saved in your app.</p>
    #[serde(rename = "IconReference", skip_serializing_if = "Option::is_none")]
    pub(crate) icon_reference: ::std::option::Option<::std::string::String>,
    /// <p>The URL of the large icon image to display in the content view of the push notification.</p>
    #[serde(rename = "ImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) image_icon_url: ::std::option::Option<::std::string::String>,
    /// <p>The URL of an image to display in the push notification.</p>
    #[serde(rename = "ImageUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) image_url: ::std::option::Option<::std::string::String>,
    /// <p>The priority of the notification message, either normal or high.</p>
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub(crate) priority: ::std::option::Option<::std::string::String>,
    /// <p>The raw, JSON-formatted string to use as the payload for the notification message.</p>
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_content: ::std::option::Option<::std::string::String>,
    /// <p>The package name of the application where registration tokens must match in order for the recipient to receive the message.</p>
    #[serde(rename = "RestrictedPackageName", skip_serializing_if = "Option::is_none")]
    pub(crate) restricted_package_name: ::std::option::Option<::std::string::String>,
    /// <p>Specifies whether the notification is a silent push notification.</p>
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub(crate) silent_push: ::std::option::Option<bool>,
    /// <p>The URL of the small icon image to display in the status bar and the content view of the push notification.</p>
    #[serde(rename = "SmallImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) small_image_icon_url: ::std::option::Option<::std::string::String>,
    /// <p>The sound to play when the recipient receives the push notification.</p>
    #[serde(rename = "Sound", skip_serializing_if = "Option::is_none")]
    pub(crate) sound: ::std::option::Option<::std::string::String>,
    /// <p>The default message variables to use in the notification message.</p>
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    /// <p>The amount of time, in seconds, that FCM should store and attempt to deliver the push notification, if the service is unable to deliver the notification the first time.</p>
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub(crate) time_to_live: ::std::option::Option<i32>,
    /// <p>The title to display above the notification message on the recipient's device.</p>
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub(crate) title: ::std::option::Option<::std::string::String>,
    /// <p>The URL to open in the recipient's default mobile browser, if a recipient taps the push notification and the value of the Action property is URL.</p>
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub(crate) url: ::std::option::Option<::std::string::String>,
}
impl GCMMessage {
    /// <p>The action to occur if the recipient taps the push notification.</p>
    pub fn action(&self) -> ::std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    /// <p>The body of the notification message.</p>
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    /// <p>An arbitrary string that identifies a group of messages that can be collapsed to ensure that only the last message is sent when delivery can resume.</p>
    pub fn collapse_key(&self) -> ::std::option::Option<&str> {
        self.collapse_key.as_deref()
    }
    /// <p>The JSON data payload to use for the push notification, if the notification is a silent push notification.</p>
    pub fn data(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.data.as_ref()
    }
    /// <p>The icon image name of the asset saved in your app.</p>
    pub fn icon_reference(&self) -> ::std::option::Option<&str> {
        self.icon_reference.as_deref()
    }
    /// <p>The URL of the large icon image to display in the content view of the push notification.</p>
    pub fn image_icon_url(&self) -> ::std::option::Option<&str> {
        self.image_icon_url.as_deref()
    }
    /// <p>The URL of an image to display in the push notification.</p>
    pub fn image_url(&self) -> ::std::option::Option<&str> {
        self.image_url.as_deref()
    }
    /// <p>The priority of the notification message, either normal or high.</p>
    pub fn priority(&self) -> ::std::option::Option<&str> {
        self.priority.as_deref()
    }
    /// <p>The raw, JSON-formatted string to use as the payload for the notification message.</p>
    pub fn raw_content(&self) -> ::std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    /// <p>The package name of the application where registration tokens must match in order for the recipient to receive the message.</p>
    pub fn restricted_package_name(&self) -> ::std::option::Option<&str> {
        self.restricted_package_name.as_deref()
    }
    /// <p>Specifies whether the notification is a silent push notification.</p>
    pub fn silent_push(&self) -> ::std::option::Option<bool> {
        self.silent_push
    }
    /// <p>The URL of the small icon image to display in the status bar and the content view of the push notification.</p>
    pub fn small_image_icon_url(&self) -> ::std::option::Option<&str> {
        self.small_image_icon_url.as_deref()
    }
    /// <p>The sound to play when the recipient receives the push notification.</p>
    pub fn sound(&self) -> ::std::option::Option<&str> {
        self.sound.as_deref()
    }
    /// <p>The default message variables to use in the notification message.</p>
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    /// <p>The amount of time, in seconds, that FCM should store and attempt to deliver the push notification, if the service is unable to deliver the notification the first time.</p>
    pub fn time_to_live(&self) -> ::std::option::Option<i32> {
        self.time_to_live
    }
    /// <p>The title to display above the notification message on the recipient's device.</p>
    pub fn title(&self) -> ::std::option::Option<&str> {
        self.title.as_deref()
    }
    /// <p>The URL to open in the recipient's default mobile browser, if a recipient taps the push notification and the value of the Action property is URL.</p>
    pub fn url(&self) -> ::std::option::Option<&str> {
        self.url.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GCMMessage`](crate::model::GCMMessage).
    pub fn builder() -> crate::model::gcm_message::Builder {
        crate::model::gcm_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::gcm_message::Builder {
        crate::model::gcm_message::Builder {
            action: self.action,
            body: self.body,
            collapse_key: self.collapse_key,
            data: self.data,
            icon_reference: self.icon_reference,
            image_icon_url: self.image_icon_url,
            image_url: self.image_url,
            priority: self.priority,
            raw_content: self.raw_content,
            restricted_package_name: self.restricted_package_name,
            silent_push: self.silent_push,
            small_image_icon_url: self.small_image_icon_url,
            sound: self.sound,
            substitutions: self.substitutions,
            time_to_live: self.time_to_live,
            title: self.title,
            url: self.url,
        }
    }
}
impl ::std::hash::Hash for GCMMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.action, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.collapse_key, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.icon_reference, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.image_icon_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.image_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.priority, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_content, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.restricted_package_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.silent_push, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.small_image_icon_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sound, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.time_to_live, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.url, state);
    }
}
impl ::std::fmt::Display for GCMMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Action", &self.action);
        shape.field("Body", &self.body);
        shape.field("CollapseKey", &self.collapse_key);
        shape.field("Data", &self.data);
        shape.field("IconReference", &self.icon_reference);
        shape.field("ImageIconUrl", &self.image_icon_url);
        shape.field("ImageUrl", &self.image_url);
        shape.field("Priority", &self.priority);
        shape.field("RawContent", &self.raw_content);
        shape.field("RestrictedPackageName", &self.restricted_package_name);
        shape.field("SilentPush", &self.silent_push);
        shape.field("SmallImageIconUrl", &self.small_image_icon_url);
        shape.field("Sound", &self.sound);
        shape.field("Substitutions", &self.substitutions);
        shape.field("TimeToLive", &self.time_to_live);
        shape.field("Title", &self.title);
        shape.field("Url", &self.url);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GCMMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GCMMessage`](crate::model::GCMMessage).
pub mod gcm_message {

    /// A builder for [`GCMMessage`](crate::model::GCMMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: ::std::option::Option<crate::model::Action>,
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) collapse_key: ::std::option::Option<::std::string::String>,
        pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) icon_reference: ::std::option::Option<::std::string::String>,
        pub(crate) image_icon_url: ::std::option::Option<::std::string::String>,
        pub(crate) image_url: ::std::option::Option<::std::string::String>,
        pub(crate) priority: ::std::option::Option<::std::string::String>,
        pub(crate) raw_content: ::std::option::Option<::std::string::String>,
        pub(crate) restricted_package_name: ::std::option::Option<::std::string::String>,
        pub(crate) silent_push: ::std::option::Option<bool>,
        pub(crate) small_image_icon_url: ::std::option::Option<::std::string::String>,
        pub(crate) sound: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) time_to_live: ::std::option::Option<i32>,
        pub(crate) title: ::std::option::Option<::std::string::String>,
        pub(crate) url: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The action to occur if the recipient taps the push notification.</p>
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = ::std::option::Option::Some(input);
            self
        }
        /// <p>The action to occur if the recipient taps the push notification.</p>
        pub fn set_action(mut self, input: ::std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        /// <p>The action to occur if the recipient taps the push notification.</p>
        pub fn get_action(&self) -> &::std::option::Option<crate::model::Action> {
            &self.action
        }
        /// <p>The body of the notification message.</p>
        pub fn body(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.body = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The body of the notification message.</p>
        pub fn set_body(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.body = input;
            self
        }
        /// <p>The body of the notification message.</p>
        pub fn get_body(&self) -> &::std::option::Option<::std::string::String> {
            &self.body
        }
        /// <p>An arbitrary string that identifies a group of messages that can be collapsed to ensure that only the last message is sent when delivery can resume.</p>
        pub fn collapse_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.collapse_key = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>An arbitrary string that identifies a group of messages that can be collapsed to ensure that only the last message is sent when delivery can resume.</p>
        pub fn set_collapse_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.collapse_key = input;
            self
        }
        /// <p>An arbitrary string that identifies a group of messages that can be collapsed to ensure that only the last message is sent when delivery can resume.</p>
        pub fn get_collapse_key(&self) -> &::std::option::Option<::std::string::String> {
            &self.collapse_key
        }
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        ///
        /// <p>The JSON data payload to use for the push notification, if the notification is a silent push notification.</p>
        pub fn data(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>The JSON data payload to use for the push notification, if the notification is a silent push notification.</p>
        pub fn set_data(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.data = input;
            self
        }
        /// <p>The JSON data payload to use for the push notification, if the notification is a silent push notification.</p>
        pub fn get_data(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.data
        }
        /// Inserts a key-value pair into `data`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_data_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.data, "Data", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        /// <p>The icon image name of the asset saved in your app.</p>
        pub fn icon_reference(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.icon_reference = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The icon image name of the asset saved in your app.</p>
        pub fn set_icon_reference(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.icon_reference = input;
            self
        }
        /// <p>The icon image name of the asset saved in your app.</p>
        pub fn get_icon_reference(&self) -> &::std::option::Option<::std::string::String> {
            &self.icon_reference
        }
        /// <p>The URL of the large icon image to display in the content view of the push notification.</p>
        pub fn image_icon_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.image_icon_url = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The URL of the large icon image to display in the content view of the push notification.</p>
        pub fn set_image_icon_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        /// <p>The URL of the large icon image to display in the content view of the push notification.</p>
        pub fn get_image_icon_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.image_icon_url
        }
        /// <p>The URL of an image to display in the push notification.</p>
        pub fn image_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.image_url = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The URL of an image to display in the push notification.</p>
        pub fn set_image_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        /// <p>The URL of an image to display in the push notification.</p>
        pub fn get_image_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.image_url
        }
        /// <p>The priority of the notification message, either normal or high.</p>
        pub fn priority(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.priority = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The priority of the notification message, either normal or high.</p>
        pub fn set_priority(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.priority = input;
            self
        }
        /// <p>The priority of the notification message, either normal or high.</p>
        pub fn get_priority(&self) -> &::std::option::Option<::std::string::String> {
            &self.priority
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message.</p>
        pub fn raw_content(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.raw_content = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message.</p>
        pub fn set_raw_content(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message.</p>
        pub fn get_raw_content(&self) -> &::std::option::Option<::std::string::String> {
            &self.raw_content
        }
        /// <p>The package name of the application where registration tokens must match in order for the recipient to receive the message.</p>
        pub fn restricted_package_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.restricted_package_name = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The package name of the application where registration tokens must match in order for the recipient to receive the message.</p>
        pub fn set_restricted_package_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.restricted_package_name = input;
            self
        }
        /// <p>The package name of the application where registration tokens must match in order for the recipient to receive the message.</p>
        pub fn get_restricted_package_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.restricted_package_name
        }
        /// <p>Specifies whether the notification is a silent push notification.</p>
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether the notification is a silent push notification.</p>
        pub fn set_silent_push(mut self, input: ::std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        /// <p>Specifies whether the notification is a silent push notification.</p>
        pub fn get_silent_push(&self) -> &::std::option::Option<bool> {
            &self.silent_push
        }
        /// <p>The URL of the small icon image to display in the status bar and the content view of the push notification.</p>
        pub fn small_image_icon_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.small_image_icon_url = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The URL of the small icon image to display in the status bar and the content view of the push notification.</p>
        pub fn set_small_image_icon_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.small_image_icon_url = input;
            self
        }
        /// <p>The URL of the small icon image to display in the status bar and the content view of the push notification.</p>
        pub fn get_small_image_icon_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.small_image_icon_url
        }
        /// <p>The sound to play when the recipient receives the push notification.</p>
        pub fn sound(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.sound = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The sound to play when the recipient receives the push notification.</p>
        pub fn set_sound(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.sound = input;
            self
        }
        /// <p>The sound to play when the recipient receives the push notification.</p>
        pub fn get_sound(&self) -> &::std::option::Option<::std::string::String> {
            &self.sound
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        /// <p>The default message variables to use in the notification message.</p>
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>The default message variables to use in the notification message.</p>
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// <p>The default message variables to use in the notification message.</p>
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// <p>The amount of time, in seconds, that FCM should store and attempt to deliver the push notification, if the service is unable to deliver the notification the first time.</p>
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = ::std::option::Option::Some(input);
            self
        }
        /// <p>The amount of time, in seconds, that FCM should store and attempt to deliver the push notification, if the service is unable to deliver the notification the first time.</p>
        pub fn set_time_to_live(mut self, input: ::std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        /// <p>The amount of time, in seconds, that FCM should store and attempt to deliver the push notification, if the service is unable to deliver the notification the first time.</p>
        pub fn get_time_to_live(&self) -> &::std::option::Option<i32> {
            &self.time_to_live
        }
        /// <p>The title to display above the notification message on the recipient's device.</p>
        pub fn title(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The title to display above the notification message on the recipient's device.</p>
        pub fn set_title(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title = input;
            self
        }
        /// <p>The title to display above the notification message on the recipient's device.</p>
        pub fn get_title(&self) -> &::std::option::Option<::std::string::String> {
            &self.title
        }
        /// <p>The URL to open in the recipient's default mobile browser, if a recipient taps the push notification and the value of the Action property is URL.</p>
        pub fn url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.url = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The URL to open in the recipient's default mobile browser, if a recipient taps the push notification and the value of the Action property is URL.</p>
        pub fn set_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// <p>The URL to open in the recipient's default mobile browser, if a recipient taps the push notification and the value of the Action property is URL.</p>
        pub fn get_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.url
        }
        /// Consumes the builder and constructs a [`GCMMessage`](crate::model::GCMMessage).
        pub fn build(self) -> crate::model::GCMMessage {
            crate::model::GCMMessage {
                action: self.action,
                body: self.body,
                collapse_key: self.collapse_key,
                data: self.data,
                icon_reference: self.icon_reference,
                image_icon_url: self.image_icon_url,
                image_url: self.image_url,
                priority: self.priority,
                raw_content: self.raw_content,
                restricted_package_name: self.restricted_package_name,
                silent_push: self.silent_push,
                small_image_icon_url: self.small_image_icon_url,
                sound: self.sound,
                substitutions: self.substitutions,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}

/// <p>Specifies the default message for all channels.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct DefaultMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
}
impl DefaultMessage {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DefaultMessage`](crate::model::DefaultMessage).
    pub fn builder() -> crate::model::default_message::Builder {
        crate::model::default_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::default_message::Builder {
        crate::model::default_message::Builder {
            body: self.body,
            substitutions: self.substitutions,
        }
    }
}
impl ::std::hash::Hash for DefaultMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
    }
}
impl ::std::fmt::Display for DefaultMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("Substitutions", &self.substitutions);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DefaultMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DefaultMessage`](crate::model::DefaultMessage).
pub mod default_message {

    /// A builder for [`DefaultMessage`](crate::model::DefaultMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
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
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`DefaultMessage`](crate::model::DefaultMessage).
        pub fn build(self) -> crate::model::DefaultMessage {
            crate::model::DefaultMessage {
                body: self.body,
                substitutions: self.substitutions,
            }
        }
    }
}

/// <p>Specifies the default settings and content for a push notification that's sent directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct DefaultPushNotificationMessage {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub(crate) action: ::std::option::Option<crate::model::Action>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub(crate) silent_push: ::std::option::Option<bool>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub(crate) title: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub(crate) url: ::std::option::Option<::std::string::String>,
}
impl DefaultPushNotificationMessage {
    pub fn action(&self) -> ::std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn data(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.data.as_ref()
    }
    pub fn silent_push(&self) -> ::std::option::Option<bool> {
        self.silent_push
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn title(&self) -> ::std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> ::std::option::Option<&str> {
        self.url.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage).
    pub fn builder() -> crate::model::default_push_notification_message::Builder {
        crate::model::default_push_notification_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::default_push_notification_message::Builder {
        crate::model::default_push_notification_message::Builder {
            action: self.action,
            body: self.body,
            data: self.data,
            silent_push: self.silent_push,
            substitutions: self.substitutions,
            title: self.title,
            url: self.url,
        }
    }
}
impl ::std::hash::Hash for DefaultPushNotificationMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.action, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.silent_push, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.url, state);
    }
}
impl ::std::fmt::Display for DefaultPushNotificationMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Action", &self.action);
        shape.field("Body", &self.body);
        shape.field("Data", &self.data);
        shape.field("SilentPush", &self.silent_push);
        shape.field("Substitutions", &self.substitutions);
        shape.field("Title", &self.title);
        shape.field("Url", &self.url);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DefaultPushNotificationMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage).
pub mod default_push_notification_message {

    /// A builder for [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: ::std::option::Option<crate::model::Action>,
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) data: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) silent_push: ::std::option::Option<bool>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) title: ::std::option::Option<::std::string::String>,
        pub(crate) url: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = ::std::option::Option::Some(input);
            self
        }
        pub fn set_action(mut self, input: ::std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn get_action(&self) -> &::std::option::Option<crate::model::Action> {
            &self.action
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
        /// Adds a key-value pair to `data`.
        ///
        /// To override the contents of this collection use [`set_data`](Self::set_data).
        ///
        pub fn data(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn get_data(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.data
        }
        /// Inserts a key-value pair into `data`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_data_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.data, "Data", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = ::std::option::Option::Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: ::std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn get_silent_push(&self) -> &::std::option::Option<bool> {
            &self.silent_push
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn title(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_title(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn get_title(&self) -> &::std::option::Option<::std::string::String> {
            &self.title
        }
        pub fn url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.url = input;
            self
        }
        pub fn get_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.url
        }
        /// Consumes the builder and constructs a [`DefaultPushNotificationMessage`](crate::model::DefaultPushNotificationMessage).
        pub fn build(self) -> crate::model::DefaultPushNotificationMessage {
            crate::model::DefaultPushNotificationMessage {
                action: self.action,
                body: self.body,
                data: self.data,
                silent_push: self.silent_push,
                substitutions: self.substitutions,
                title: self.title,
                url: self.url,
            }
        }
    }
}

/// <p>Specifies the default settings for a one-time SMS message that's sent directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SMSMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Keyword", skip_serializing_if = "Option::is_none")]
    pub(crate) keyword: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) media_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MessageType", skip_serializing_if = "Option::is_none")]
    pub(crate) message_type: ::std::option::Option<crate::model::MessageType>,
    #[serde(rename = "OriginationNumber", skip_serializing_if = "Option::is_none")]
    pub(crate) origination_number: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) sender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "EntityId", skip_serializing_if = "Option::is_none")]
    pub(crate) entity_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateId", skip_serializing_if = "Option::is_none")]
    pub(crate) template_id: ::std::option::Option<::std::string::String>,
}
impl SMSMessage {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn keyword(&self) -> ::std::option::Option<&str> {
        self.keyword.as_deref()
    }
    pub fn media_url(&self) -> ::std::option::Option<&str> {
        self.media_url.as_deref()
    }
    pub fn message_type(&self) -> ::std::option::Option<&crate::model::MessageType> {
        self.message_type.as_ref()
    }
    pub fn origination_number(&self) -> ::std::option::Option<&str> {
        self.origination_number.as_deref()
    }
    pub fn sender_id(&self) -> ::std::option::Option<&str> {
        self.sender_id.as_deref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    pub fn entity_id(&self) -> ::std::option::Option<&str> {
        self.entity_id.as_deref()
    }
    pub fn template_id(&self) -> ::std::option::Option<&str> {
        self.template_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SMSMessage`](crate::model::SMSMessage).
    pub fn builder() -> crate::model::sms_message::Builder {
        crate::model::sms_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::sms_message::Builder {
        crate::model::sms_message::Builder {
            body: self.body,
            keyword: self.keyword,
            media_url: self.media_url,
            message_type: self.message_type,
            origination_number: self.origination_number,
            sender_id: self.sender_id,
            substitutions: self.substitutions,
            entity_id: self.entity_id,
            template_id: self.template_id,
        }
    }
}
impl ::std::hash::Hash for SMSMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.keyword, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.media_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.origination_number, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.entity_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_id, state);
    }
}
impl ::std::fmt::Display for SMSMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("Keyword", &self.keyword);
        shape.field("MediaUrl", &self.media_url);
        shape.field("MessageType", &self.message_type);
        shape.field("OriginationNumber", &self.origination_number);
        shape.field("SenderId", &self.sender_id);
        shape.field("Substitutions", &self.substitutions);
        shape.field("EntityId", &self.entity_id);
        shape.field("TemplateId", &self.template_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SMSMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SMSMessage`](crate::model::SMSMessage).
pub mod sms_message {

    /// A builder for [`SMSMessage`](crate::model::SMSMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) keyword: ::std::option::Option<::std::string::String>,
        pub(crate) media_url: ::std::option::Option<::std::string::String>,
        pub(crate) message_type: ::std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: ::std::option::Option<::std::string::String>,
        pub(crate) sender_id: ::std::option::Option<::std::string::String>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) entity_id: ::std::option::Option<::std::string::String>,
        pub(crate) template_id: ::std::option::Option<::std::string::String>,
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
        pub fn keyword(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.keyword = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_keyword(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.keyword = input;
            self
        }
        pub fn get_keyword(&self) -> &::std::option::Option<::std::string::String> {
            &self.keyword
        }
        pub fn media_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.media_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn get_media_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.media_url
        }
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_type(mut self, input: ::std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn get_message_type(&self) -> &::std::option::Option<crate::model::MessageType> {
            &self.message_type
        }
        pub fn origination_number(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.origination_number = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_origination_number(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.origination_number = input;
            self
        }
        pub fn get_origination_number(&self) -> &::std::option::Option<::std::string::String> {
            &self.origination_number
        }
        pub fn sender_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.sender_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        pub fn get_sender_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.sender_id
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn entity_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.entity_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_entity_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.entity_id = input;
            self
        }
        pub fn get_entity_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.entity_id
        }
        pub fn template_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_id = input;
            self
        }
        pub fn get_template_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_id
        }
        /// Consumes the builder and constructs a [`SMSMessage`](crate::model::SMSMessage).
        pub fn build(self) -> crate::model::SMSMessage {
            crate::model::SMSMessage {
                body: self.body,
                keyword: self.keyword,
                media_url: self.media_url,
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
                substitutions: self.substitutions,
                entity_id: self.entity_id,
                template_id: self.template_id,
            }
        }
    }
}

/// <p>Specifies the default settings and content for a one-time email message that's sent directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "FeedbackForwardingAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) feedback_forwarding_address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) from_address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RawEmail", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_email: ::std::option::Option<crate::model::RawEmail>,
    #[serde(rename = "ReplyToAddresses", skip_serializing_if = "Option::is_none")]
    pub(crate) reply_to_addresses: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    #[serde(rename = "SimpleEmail", skip_serializing_if = "Option::is_none")]
    pub(crate) simple_email: ::std::option::Option<crate::model::SimpleEmail>,
    #[serde(rename = "Substitutions", skip_serializing_if = "Option::is_none")]
    pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
}
impl EmailMessage {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn feedback_forwarding_address(&self) -> ::std::option::Option<&str> {
        self.feedback_forwarding_address.as_deref()
    }
    pub fn from_address(&self) -> ::std::option::Option<&str> {
        self.from_address.as_deref()
    }
    pub fn raw_email(&self) -> ::std::option::Option<&crate::model::RawEmail> {
        self.raw_email.as_ref()
    }
    pub fn reply_to_addresses(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.reply_to_addresses.as_deref()
    }
    pub fn simple_email(&self) -> ::std::option::Option<&crate::model::SimpleEmail> {
        self.simple_email.as_ref()
    }
    pub fn substitutions(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.substitutions.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EmailMessage`](crate::model::EmailMessage).
    pub fn builder() -> crate::model::email_message::Builder {
        crate::model::email_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_message::Builder {
        crate::model::email_message::Builder {
            body: self.body,
            feedback_forwarding_address: self.feedback_forwarding_address,
            from_address: self.from_address,
            raw_email: self.raw_email,
            reply_to_addresses: self.reply_to_addresses,
            simple_email: self.simple_email,
            substitutions: self.substitutions,
        }
    }
}
impl ::std::hash::Hash for EmailMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.feedback_forwarding_address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.from_address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_email, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.reply_to_addresses, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.simple_email, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.substitutions, state);
    }
}
impl ::std::fmt::Display for EmailMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("FeedbackForwardingAddress", &self.feedback_forwarding_address);
        shape.field("FromAddress", &self.from_address);
        shape.field("RawEmail", &self.raw_email);
        shape.field("ReplyToAddresses", &self.reply_to_addresses);
        shape.field("SimpleEmail", &self.simple_email);
        shape.field("Substitutions", &self.substitutions);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailMessage`](crate::model::EmailMessage).
pub mod email_message {

    /// A builder for [`EmailMessage`](crate::model::EmailMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) feedback_forwarding_address: ::std::option::Option<::std::string::String>,
        pub(crate) from_address: ::std::option::Option<::std::string::String>,
        pub(crate) raw_email: ::std::option::Option<crate::model::RawEmail>,
        pub(crate) reply_to_addresses: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
        pub(crate) simple_email: ::std::option::Option<crate::model::SimpleEmail>,
        pub(crate) substitutions: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
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
        pub fn feedback_forwarding_address(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.feedback_forwarding_address = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_feedback_forwarding_address(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.feedback_forwarding_address = input;
            self
        }
        pub fn get_feedback_forwarding_address(&self) -> &::std::option::Option<::std::string::String> {
            &self.feedback_forwarding_address
        }
        pub fn from_address(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.from_address = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_from_address(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.from_address = input;
            self
        }
        pub fn get_from_address(&self) -> &::std::option::Option<::std::string::String> {
            &self.from_address
        }
        pub fn raw_email(mut self, input: crate::model::RawEmail) -> Self {
            self.raw_email = ::std::option::Option::Some(input);
            self
        }
        pub fn set_raw_email(mut self, input: ::std::option::Option<crate::model::RawEmail>) -> Self {
            self.raw_email = input;
            self
        }
        pub fn get_raw_email(&self) -> &::std::option::Option<crate::model::RawEmail> {
            &self.raw_email
        }
        /// Appends an item to `reply_to_addresses`.
        ///
        /// To override the contents of this collection use [`set_reply_to_addresses`](Self::set_reply_to_addresses).
        ///
        pub fn reply_to_addresses(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.reply_to_addresses.unwrap_or_default();
            v.push(input.into());
            self.reply_to_addresses = ::std::option::Option::Some(v);
            self
        }
        pub fn set_reply_to_addresses(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.reply_to_addresses = input;
            self
        }
        pub fn get_reply_to_addresses(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.reply_to_addresses
        }
        pub fn simple_email(mut self, input: crate::model::SimpleEmail) -> Self {
            self.simple_email = ::std::option::Option::Some(input);
            self
        }
        pub fn set_simple_email(mut self, input: ::std::option::Option<crate::model::SimpleEmail>) -> Self {
            self.simple_email = input;
            self
        }
        pub fn get_simple_email(&self) -> &::std::option::Option<crate::model::SimpleEmail> {
            &self.simple_email
        }
        /// Adds a key-value pair to `substitutions`.
        ///
        /// To override the contents of this collection use [`set_substitutions`](Self::set_substitutions).
        ///
        pub fn substitutions(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.substitutions = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn get_substitutions(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.substitutions
        }
        /// Inserts a key-value pair into `substitutions`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_substitutions_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.substitutions, "Substitutions", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`EmailMessage`](crate::model::EmailMessage).
        pub fn build(self) -> crate::model::EmailMessage {
            crate::model::EmailMessage {
                body: self.body,
                feedback_forwarding_address: self.feedback_forwarding_address,
                from_address: self.from_address,
                raw_email: self.raw_email,
                reply_to_addresses: self.reply_to_addresses,
                simple_email: self.simple_email,
                substitutions: self.substitutions,
            }
        }
    }
}

/// <p>Specifies the contents of an email message, represented as a raw MIME message.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct RawEmail {
    /// <p>The email message, represented as a raw MIME message. The entire message must be base64 encoded.</p>
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::smithy_types::Blob>,
}
impl RawEmail {
    /// <p>The email message, represented as a raw MIME message. The entire message must be base64 encoded.</p>
    pub fn data(&self) -> ::std::option::Option<&::smithy_types::Blob> {
        self.data.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`RawEmail`](crate::model::RawEmail).
    pub fn builder() -> crate::model::raw_email::Builder {
        crate::model::raw_email::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::raw_email::Builder {
        crate::model::raw_email::Builder {
            data: self.data,
        }
    }
}
impl ::std::hash::Hash for RawEmail {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
    }
}
impl ::std::fmt::Display for RawEmail {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Data", &self.data);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for RawEmail {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`RawEmail`](crate::model::RawEmail).
pub mod raw_email {

    /// A builder for [`RawEmail`](crate::model::RawEmail).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) data: ::std::option::Option<::smithy_types::Blob>,
    }
    impl Builder {
        /// <p>The email message, represented as a raw MIME message. The entire message must be base64 encoded.</p>
        pub fn data(mut self, input: ::smithy_types::Blob) -> Self {
            self.data = ::std::option::Option::Some(input);
            self
        }
        /// <p>The email message, represented as a raw MIME message. The entire message must be base64 encoded.</p>
        pub fn set_data(mut self, input: ::std::option::Option<::smithy_types::Blob>) -> Self {
            self.data = input;
            self
        }
        /// <p>The email message, represented as a raw MIME message. The entire message must be base64 encoded.</p>
        pub fn get_data(&self) -> &::std::option::Option<::smithy_types::Blob> {
            &self.data
        }
        /// Consumes the builder and constructs a [`RawEmail`](crate::model::RawEmail).
        pub fn build(self) -> crate::model::RawEmail {
            crate::model::RawEmail {
                data: self.data,
            }
        }
    }
}

/// <p>Specifies the contents of an email message, composed of a subject, a text part, and an HTML part.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SimpleEmail {
    #[serde(rename = "HtmlPart", skip_serializing_if = "Option::is_none")]
    pub(crate) html_part: ::std::option::Option<crate::model::SimpleEmailPart>,
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub(crate) subject: ::std::option::Option<crate::model::SimpleEmailPart>,
    #[serde(rename = "TextPart", skip_serializing_if = "Option::is_none")]
    pub(crate) text_part: ::std::option::Option<crate::model::SimpleEmailPart>,
}
impl SimpleEmail {
    pub fn html_part(&self) -> ::std::option::Option<&crate::model::SimpleEmailPart> {
        self.html_part.as_ref()
    }
    pub fn subject(&self) -> ::std::option::Option<&crate::model::SimpleEmailPart> {
        self.subject.as_ref()
    }
    pub fn text_part(&self) -> ::std::option::Option<&crate::model::SimpleEmailPart> {
        self.text_part.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SimpleEmail`](crate::model::SimpleEmail).
    pub fn builder() -> crate::model::simple_email::Builder {
        crate::model::simple_email::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::simple_email::Builder {
        crate::model::simple_email::Builder {
            html_part: self.html_part,
            subject: self.subject,
            text_part: self.text_part,
        }
    }
}
impl ::std::hash::Hash for SimpleEmail {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.html_part, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.subject, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.text_part, state);
    }
}
impl ::std::fmt::Display for SimpleEmail {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("HtmlPart", &self.html_part);
        shape.field("Subject", &self.subject);
        shape.field("TextPart", &self.text_part);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SimpleEmail {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SimpleEmail`](crate::model::SimpleEmail).
pub mod simple_email {

    /// A builder for [`SimpleEmail`](crate::model::SimpleEmail).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) html_part: ::std::option::Option<crate::model::SimpleEmailPart>,
        pub(crate) subject: ::std::option::Option<crate::model::SimpleEmailPart>,
        pub(crate) text_part: ::std::option::Option<crate::model::SimpleEmailPart>,
    }
    impl Builder {
        pub fn html_part(mut self, input: crate::model::SimpleEmailPart) -> Self {
            self.html_part = ::std::option::Option::Some(input);
            self
        }
        pub fn set_html_part(mut self, input: ::std::option::Option<crate::model::SimpleEmailPart>) -> Self {
            self.html_part = input;
            self
        }
        pub fn get_html_part(&self) -> &::std::option::Option<crate::model::SimpleEmailPart> {
            &self.html_part
        }
        pub fn subject(mut self, input: crate::model::SimpleEmailPart) -> Self {
            self.subject = ::std::option::Option::Some(input);
            self
        }
        pub fn set_subject(mut self, input: ::std::option::Option<crate::model::SimpleEmailPart>) -> Self {
            self.subject = input;
            self
        }
        pub fn get_subject(&self) -> &::std::option::Option<crate::model::SimpleEmailPart> {
            &self.subject
        }
        pub fn text_part(mut self, input: crate::model::SimpleEmailPart) -> Self {
            self.text_part = ::std::option::Option::Some(input);
            self
        }
        pub fn set_text_part(mut self, input: ::std::option::Option<crate::model::SimpleEmailPart>) -> Self {
            self.text_part = input;
            self
        }
        pub fn get_text_part(&self) -> &::std::option::Option<crate::model::SimpleEmailPart> {
            &self.text_part
        }
        /// Consumes the builder and constructs a [`SimpleEmail`](crate::model::SimpleEmail).
        pub fn build(self) -> crate::model::SimpleEmail {
            crate::model::SimpleEmail {
                html_part: self.html_part,
                subject: self.subject,
                text_part: self.text_part,
            }
        }
    }
}

/// <p>Specifies the subject or body of an email message, represented as textual email data and the applicable character set.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SimpleEmailPart {
    #[serde(rename = "Charset", skip_serializing_if = "Option::is_none")]
    pub(crate) charset: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::std::string::String>,
}
impl SimpleEmailPart {
    pub fn charset(&self) -> ::std::option::Option<&str> {
        self.charset.as_deref()
    }
    pub fn data(&self) -> ::std::option::Option<&str> {
        self.data.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SimpleEmailPart`](crate::model::SimpleEmailPart).
    pub fn builder() -> crate::model::simple_email_part::Builder {
        crate::model::simple_email_part::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::simple_email_part::Builder {
        crate::model::simple_email_part::Builder {
            charset: self.charset,
            data: self.data,
        }
    }
}
impl ::std::hash::Hash for SimpleEmailPart {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.charset, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
    }
}
impl ::std::fmt::Display for SimpleEmailPart {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Charset", &self.charset);
        shape.field("Data", &self.data);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SimpleEmailPart {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SimpleEmailPart`](crate::model::SimpleEmailPart).
pub mod simple_email_part {

    /// A builder for [`SimpleEmailPart`](crate::model::SimpleEmailPart).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) charset: ::std::option::Option<::std::string::String>,
        pub(crate) data: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn charset(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.charset = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_charset(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.charset = input;
            self
        }
        pub fn get_charset(&self) -> &::std::option::Option<::std::string::String> {
            &self.charset
        }
        pub fn data(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.data = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_data(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.data = input;
            self
        }
        pub fn get_data(&self) -> &::std::option::Option<::std::string::String> {
            &self.data
        }
        /// Consumes the builder and constructs a [`SimpleEmailPart`](crate::model::SimpleEmailPart).
        pub fn build(self) -> crate::model::SimpleEmailPart {
            crate::model::SimpleEmailPart {
                charset: self.charset,
                data: self.data,
            }
        }
    }
}

/// <p>Provides information about the results of a request to send a message to an endpoint address.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EndpointResult", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_result: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointMessageResult>>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub(crate) result: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MessageResult>>,
}
impl MessageResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_result(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::EndpointMessageResult>> {
        self.endpoint_result.as_ref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn result(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::MessageResult>> {
        self.result.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`MessageResponse`](crate::model::MessageResponse).
    pub fn builder() -> crate::model::message_response::Builder {
        crate::model::message_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message_response::Builder {
        crate::model::message_response::Builder {
            application_id: self.application_id,
            endpoint_result: self.endpoint_result,
            request_id: self.request_id,
            result: self.result,
        }
    }
}
impl ::std::hash::Hash for MessageResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_result, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.result, state);
    }
}
impl ::std::fmt::Display for MessageResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EndpointResult", &self.endpoint_result);
        shape.field("RequestId", &self.request_id);
        shape.field("Result", &self.result);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MessageResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MessageResponse`](crate::model::MessageResponse).
pub mod message_response {

    /// A builder for [`MessageResponse`](crate::model::MessageResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_result: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointMessageResult>>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
        pub(crate) result: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MessageResult>>,
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
        /// Adds a key-value pair to `endpoint_result`.
        ///
        /// To override the contents of this collection use [`set_endpoint_result`](Self::set_endpoint_result).
        ///
        pub fn endpoint_result(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::EndpointMessageResult) -> Self {
            let mut hash_map = self.endpoint_result.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.endpoint_result = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_endpoint_result(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointMessageResult>>) -> Self {
            self.endpoint_result = input;
            self
        }
        pub fn get_endpoint_result(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EndpointMessageResult>> {
            &self.endpoint_result
        }
        /// Inserts a key-value pair into `endpoint_result`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_endpoint_result_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::EndpointMessageResult,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.endpoint_result, "EndpointResult", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        /// Adds a key-value pair to `result`.
        ///
        /// To override the contents of this collection use [`set_result`](Self::set_result).
        ///
        pub fn result(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::MessageResult) -> Self {
            let mut hash_map = self.result.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.result = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_result(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MessageResult>>) -> Self {
            self.result = input;
            self
        }
        pub fn get_result(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MessageResult>> {
            &self.result
        }
        /// Inserts a key-value pair into `result`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_result_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::MessageResult,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.result, "Result", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`MessageResponse`](crate::model::MessageResponse).
        pub fn build(self) -> crate::model::MessageResponse {
            crate::model::MessageResponse {
                application_id: self.application_id,
                endpoint_result: self.endpoint_result,
                request_id: self.request_id,
                result: self.result,
            }
        }
    }
}

/// <p>Provides information about the delivery status and results of sending a message directly to an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointMessageResult {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub(crate) address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DeliveryStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) delivery_status: ::std::option::Option<crate::model::DeliveryStatus>,
    #[serde(rename = "MessageId", skip_serializing_if = "Option::is_none")]
    pub(crate) message_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub(crate) status_code: ::std::option::Option<i32>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) status_message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "UpdatedToken", skip_serializing_if = "Option::is_none")]
    pub(crate) updated_token: ::std::option::Option<::std::string::String>,
}
impl EndpointMessageResult {
    pub fn address(&self) -> ::std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn delivery_status(&self) -> ::std::option::Option<&crate::model::DeliveryStatus> {
        self.delivery_status.as_ref()
    }
    pub fn message_id(&self) -> ::std::option::Option<&str> {
        self.message_id.as_deref()
    }
    pub fn status_code(&self) -> ::std::option::Option<i32> {
        self.status_code
    }
    pub fn status_message(&self) -> ::std::option::Option<&str> {
        self.status_message.as_deref()
    }
    pub fn updated_token(&self) -> ::std::option::Option<&str> {
        self.updated_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointMessageResult`](crate::model::EndpointMessageResult).
    pub fn builder() -> crate::model::endpoint_message_result::Builder {
        crate::model::endpoint_message_result::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_message_result::Builder {
        crate::model::endpoint_message_result::Builder {
            address: self.address,
            delivery_status: self.delivery_status,
            message_id: self.message_id,
            status_code: self.status_code,
            status_message: self.status_message,
            updated_token: self.updated_token,
        }
    }
}
impl ::std::hash::Hash for EndpointMessageResult {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.delivery_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_code, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.updated_token, state);
    }
}
impl ::std::fmt::Display for EndpointMessageResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Address", &self.address);
        shape.field("DeliveryStatus", &self.delivery_status);
        shape.field("MessageId", &self.message_id);
        shape.field("StatusCode", &self.status_code);
        shape.field("StatusMessage", &self.status_message);
        shape.field("UpdatedToken", &self.updated_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointMessageResult {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointMessageResult`](crate::model::EndpointMessageResult).
pub mod endpoint_message_result {

    /// A builder for [`EndpointMessageResult`](crate::model::EndpointMessageResult).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: ::std::option::Option<::std::string::String>,
        pub(crate) delivery_status: ::std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: ::std::option::Option<::std::string::String>,
        pub(crate) status_code: ::std::option::Option<i32>,
        pub(crate) status_message: ::std::option::Option<::std::string::String>,
        pub(crate) updated_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn address(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.address = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_address(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn get_address(&self) -> &::std::option::Option<::std::string::String> {
            &self.address
        }
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = ::std::option::Option::Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: ::std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn get_delivery_status(&self) -> &::std::option::Option<crate::model::DeliveryStatus> {
            &self.delivery_status
        }
        pub fn message_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn get_message_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.message_id
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = ::std::option::Option::Some(input);
            self
        }
        pub fn set_status_code(mut self, input: ::std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn get_status_code(&self) -> &::std::option::Option<i32> {
            &self.status_code
        }
        pub fn status_message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.status_message = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn get_status_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.status_message
        }
        pub fn updated_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.updated_token = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        pub fn get_updated_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.updated_token
        }
        /// Consumes the builder and constructs a [`EndpointMessageResult`](crate::model::EndpointMessageResult).
        pub fn build(self) -> crate::model::EndpointMessageResult {
            crate::model::EndpointMessageResult {
                address: self.address,
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}

/// <p>Provides information about the results of sending a message directly to an endpoint address.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MessageResult {
    #[serde(rename = "DeliveryStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) delivery_status: ::std::option::Option<crate::model::DeliveryStatus>,
    #[serde(rename = "MessageId", skip_serializing_if = "Option::is_none")]
    pub(crate) message_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub(crate) status_code: ::std::option::Option<i32>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) status_message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "UpdatedToken", skip_serializing_if = "Option::is_none")]
    pub(crate) updated_token: ::std::option::Option<::std::string::String>,
}
impl MessageResult {
    pub fn delivery_status(&self) -> ::std::option::Option<&crate::model::DeliveryStatus> {
        self.delivery_status.as_ref()
    }
    pub fn message_id(&self) -> ::std::option::Option<&str> {
        self.message_id.as_deref()
    }
    pub fn status_code(&self) -> ::std::option::Option<i32> {
        self.status_code
    }
    pub fn status_message(&self) -> ::std::option::Option<&str> {
        self.status_message.as_deref()
    }
    pub fn updated_token(&self) -> ::std::option::Option<&str> {
        self.updated_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`MessageResult`](crate::model::MessageResult).
    pub fn builder() -> crate::model::message_result::Builder {
        crate::model::message_result::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message_result::Builder {
        crate::model::message_result::Builder {
            delivery_status: self.delivery_status,
            message_id: self.message_id,
            status_code: self.status_code,
            status_message: self.status_message,
            updated_token: self.updated_token,
        }
    }
}
impl ::std::hash::Hash for MessageResult {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.delivery_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_code, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.updated_token, state);
    }
}
impl ::std::fmt::Display for MessageResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DeliveryStatus", &self.delivery_status);
        shape.field("MessageId", &self.message_id);
        shape.field("StatusCode", &self.status_code);
        shape.field("StatusMessage", &self.status_message);
        shape.field("UpdatedToken", &self.updated_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MessageResult {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MessageResult`](crate::model::MessageResult).
pub mod message_result {

    /// A builder for [`MessageResult`](crate::model::MessageResult).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) delivery_status: ::std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: ::std::option::Option<::std::string::String>,
        pub(crate) status_code: ::std::option::Option<i32>,
        pub(crate) status_message: ::std::option::Option<::std::string::String>,
        pub(crate) updated_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = ::std::option::Option::Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: ::std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn get_delivery_status(&self) -> &::std::option::Option<crate::model::DeliveryStatus> {
            &self.delivery_status
        }
        pub fn message_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn get_message_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.message_id
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = ::std::option::Option::Some(input);
            self
        }
        pub fn set_status_code(mut self, input: ::std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn get_status_code(&self) -> &::std::option::Option<i32> {
            &self.status_code
        }
        pub fn status_message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.status_message = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn get_status_message(&self) -> &::std::option::Option<::std::string::String> {
            &self.status_message
        }
        pub fn updated_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.updated_token = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        pub fn get_updated_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.updated_token
        }
        /// Consumes the builder and constructs a [`MessageResult`](crate::model::MessageResult).
        pub fn build(self) -> crate::model::MessageResult {
            crate::model::MessageResult {
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}
