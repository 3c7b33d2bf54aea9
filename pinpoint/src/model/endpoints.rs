// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The delivery channel of an endpoint or address.</p>
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
pub enum ChannelType {
    #[allow(missing_docs)] // documentation missing in model
    Push,
    #[allow(missing_docs)] // documentation missing in model
    Gcm,
    #[allow(missing_docs)] // documentation missing in model
    Apns,
    #[allow(missing_docs)] // documentation missing in model
    ApnsSandbox,
    #[allow(missing_docs)] // documentation missing in model
    ApnsVoip,
    #[allow(missing_docs)] // documentation missing in model
    ApnsVoipSandbox,
    #[allow(missing_docs)] // documentation missing in model
    Adm,
    #[allow(missing_docs)] // documentation missing in model
    Sms,
    #[allow(missing_docs)] // documentation missing in model
    Voice,
    #[allow(missing_docs)] // documentation missing in model
    Email,
    #[allow(missing_docs)] // documentation missing in model
    Baidu,
    #[allow(missing_docs)] // documentation missing in model
    Custom,
    #[allow(missing_docs)] // documentation missing in model
    InApp,
}
impl ChannelType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Push => "PUSH",
            ChannelType::Gcm => "GCM",
            ChannelType::Apns => "APNS",
            ChannelType::ApnsSandbox => "APNS_SANDBOX",
            ChannelType::ApnsVoip => "APNS_VOIP",
            ChannelType::ApnsVoipSandbox => "APNS_VOIP_SANDBOX",
            ChannelType::Adm => "ADM",
            ChannelType::Sms => "SMS",
            ChannelType::Voice => "VOICE",
            ChannelType::Email => "EMAIL",
            ChannelType::Baidu => "BAIDU",
            ChannelType::Custom => "CUSTOM",
            ChannelType::InApp => "IN_APP",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["PUSH", "GCM", "APNS", "APNS_SANDBOX", "APNS_VOIP", "APNS_VOIP_SANDBOX", "ADM", "SMS", "VOICE", "EMAIL", "BAIDU", "CUSTOM", "IN_APP"]
    }
}
impl ::std::str::FromStr for ChannelType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "PUSH" => ::std::result::Result::Ok(ChannelType::Push),
            "GCM" => ::std::result::Result::Ok(ChannelType::Gcm),
            "APNS" => ::std::result::Result::Ok(ChannelType::Apns),
            "APNS_SANDBOX" => ::std::result::Result::Ok(ChannelType::ApnsSandbox),
            "APNS_VOIP" => ::std::result::Result::Ok(ChannelType::ApnsVoip),
            "APNS_VOIP_SANDBOX" => ::std::result::Result::Ok(ChannelType::ApnsVoipSandbox),
            "ADM" => ::std::result::Result::Ok(ChannelType::Adm),
            "SMS" => ::std::result::Result::Ok(ChannelType::Sms),
            "VOICE" => ::std::result::Result::Ok(ChannelType::Voice),
            "EMAIL" => ::std::result::Result::Ok(ChannelType::Email),
            "BAIDU" => ::std::result::Result::Ok(ChannelType::Baidu),
            "CUSTOM" => ::std::result::Result::Ok(ChannelType::Custom),
            "IN_APP" => ::std::result::Result::Ok(ChannelType::InApp),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("ChannelType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("ChannelType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for ChannelType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for ChannelType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for ChannelType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for ChannelType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for ChannelType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Specifies the channel type and other settings for an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointRequest {
    /// <p>The destination address for messages or push notifications that you send to the endpoint.</p>
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub(crate) address: ::std::option::Option<::std::string::String>,
    /// <p>One or more custom attributes that describe the endpoint by associating a name with an array of values.</p>
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub(crate) effective_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub(crate) opt_out: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
}
impl EndpointRequest {
    /// <p>The destination address for messages or push notifications that you send to the endpoint.</p>
    pub fn address(&self) -> ::std::option::Option<&str> {
        self.address.as_deref()
    }
    /// <p>One or more custom attributes that describe the endpoint by associating a name with an array of values.</p>
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> ::std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn demographic(&self) -> ::std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> ::std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> ::std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn location(&self) -> ::std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> ::std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> ::std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointRequest`](crate::model::EndpointRequest).
    pub fn builder() -> crate::model::endpoint_request::Builder {
        crate::model::endpoint_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_request::Builder {
        crate::model::endpoint_request::Builder {
            address: self.address,
            attributes: self.attributes,
            channel_type: self.channel_type,
            demographic: self.demographic,
            effective_date: self.effective_date,
            endpoint_status: self.endpoint_status,
            location: self.location,
            metrics: self.metrics,
            opt_out: self.opt_out,
            request_id: self.request_id,
            user: self.user,
        }
    }
}
impl ::std::hash::Hash for EndpointRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.demographic, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.effective_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.location, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.opt_out, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user, state);
    }
}
impl ::std::fmt::Display for EndpointRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Address", &self.address);
        shape.field("Attributes", &self.attributes);
        shape.field("ChannelType", &self.channel_type);
        shape.field("Demographic", &self.demographic);
        shape.field("EffectiveDate", &self.effective_date);
        shape.field("EndpointStatus", &self.endpoint_status);
        shape.field("Location", &self.location);
        shape.field("Metrics", &self.metrics);
        shape.field("OptOut", &self.opt_out);
        shape.field("RequestId", &self.request_id);
        shape.field("User", &self.user);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointRequest`](crate::model::EndpointRequest).
pub mod endpoint_request {

    /// A builder for [`EndpointRequest`](crate::model::EndpointRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: ::std::option::Option<::std::string::String>,
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
        pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
        pub(crate) opt_out: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
        pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        /// <p>The destination address for messages or push notifications that you send to the endpoint.</p>
        pub fn address(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.address = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The destination address for messages or push notifications that you send to the endpoint.</p>
        pub fn set_address(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.address = input;
            self
        }
        /// <p>The destination address for messages or push notifications that you send to the endpoint.</p>
        pub fn get_address(&self) -> &::std::option::Option<::std::string::String> {
            &self.address
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>One or more custom attributes that describe the endpoint by associating a name with an array of values.</p>
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>One or more custom attributes that describe the endpoint by associating a name with an array of values.</p>
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>One or more custom attributes that describe the endpoint by associating a name with an array of values.</p>
        pub fn get_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.attributes
        }
        /// Inserts a key-value pair into `attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.attributes, "Attributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = ::std::option::Option::Some(input);
            self
        }
        pub fn set_demographic(mut self, input: ::std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn get_demographic(&self) -> &::std::option::Option<crate::model::EndpointDemographic> {
            &self.demographic
        }
        pub fn effective_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.effective_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn get_effective_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.effective_date
        }
        pub fn endpoint_status(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_status = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn get_endpoint_status(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_status
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = ::std::option::Option::Some(input);
            self
        }
        pub fn set_location(mut self, input: ::std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn get_location(&self) -> &::std::option::Option<crate::model::EndpointLocation> {
            &self.location
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        ///
        pub fn metrics(mut self, k: impl ::std::convert::Into<::std::string::String>, v: f64) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn get_metrics(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, f64>> {
            &self.metrics
        }
        /// Inserts a key-value pair into `metrics`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_metrics_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: f64,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.metrics, "Metrics", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn opt_out(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.opt_out = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn get_opt_out(&self) -> &::std::option::Option<::std::string::String> {
            &self.opt_out
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
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = ::std::option::Option::Some(input);
            self
        }
        pub fn set_user(mut self, input: ::std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        pub fn get_user(&self) -> &::std::option::Option<crate::model::EndpointUser> {
            &self.user
        }
        /// Consumes the builder and constructs a [`EndpointRequest`](crate::model::EndpointRequest).
        pub fn build(self) -> crate::model::EndpointRequest {
            crate::model::EndpointRequest {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}

/// <p>Provides information about the channel type and other settings for an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointResponse {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub(crate) address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "CohortId", skip_serializing_if = "Option::is_none")]
    pub(crate) cohort_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub(crate) effective_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub(crate) opt_out: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
}
impl EndpointResponse {
    pub fn address(&self) -> ::std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> ::std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn cohort_id(&self) -> ::std::option::Option<&str> {
        self.cohort_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn demographic(&self) -> ::std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> ::std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> ::std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn location(&self) -> ::std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> ::std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> ::std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointResponse`](crate::model::EndpointResponse).
    pub fn builder() -> crate::model::endpoint_response::Builder {
        crate::model::endpoint_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_response::Builder {
        crate::model::endpoint_response::Builder {
            address: self.address,
            application_id: self.application_id,
            attributes: self.attributes,
            channel_type: self.channel_type,
            cohort_id: self.cohort_id,
            creation_date: self.creation_date,
            demographic: self.demographic,
            effective_date: self.effective_date,
            endpoint_status: self.endpoint_status,
            id: self.id,
            location: self.location,
            metrics: self.metrics,
            opt_out: self.opt_out,
            request_id: self.request_id,
            user: self.user,
        }
    }
}
impl ::std::hash::Hash for EndpointResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.cohort_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.demographic, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.effective_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.location, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.opt_out, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user, state);
    }
}
impl ::std::fmt::Display for EndpointResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Address", &self.address);
        shape.field("ApplicationId", &self.application_id);
        shape.field("Attributes", &self.attributes);
        shape.field("ChannelType", &self.channel_type);
        shape.field("CohortId", &self.cohort_id);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Demographic", &self.demographic);
        shape.field("EffectiveDate", &self.effective_date);
        shape.field("EndpointStatus", &self.endpoint_status);
        shape.field("Id", &self.id);
        shape.field("Location", &self.location);
        shape.field("Metrics", &self.metrics);
        shape.field("OptOut", &self.opt_out);
        shape.field("RequestId", &self.request_id);
        shape.field("User", &self.user);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointResponse`](crate::model::EndpointResponse).
pub mod endpoint_response {

    /// A builder for [`EndpointResponse`](crate::model::EndpointResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: ::std::option::Option<::std::string::String>,
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
        pub(crate) cohort_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
        pub(crate) opt_out: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
        pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
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
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn get_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.attributes
        }
        /// Inserts a key-value pair into `attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.attributes, "Attributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        pub fn cohort_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.cohort_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_cohort_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.cohort_id = input;
            self
        }
        pub fn get_cohort_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.cohort_id
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
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = ::std::option::Option::Some(input);
            self
        }
        pub fn set_demographic(mut self, input: ::std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn get_demographic(&self) -> &::std::option::Option<crate::model::EndpointDemographic> {
            &self.demographic
        }
        pub fn effective_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.effective_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn get_effective_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.effective_date
        }
        pub fn endpoint_status(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_status = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn get_endpoint_status(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_status
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
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = ::std::option::Option::Some(input);
            self
        }
        pub fn set_location(mut self, input: ::std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn get_location(&self) -> &::std::option::Option<crate::model::EndpointLocation> {
            &self.location
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        ///
        pub fn metrics(mut self, k: impl ::std::convert::Into<::std::string::String>, v: f64) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn get_metrics(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, f64>> {
            &self.metrics
        }
        /// Inserts a key-value pair into `metrics`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_metrics_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: f64,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.metrics, "Metrics", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn opt_out(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.opt_out = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn get_opt_out(&self) -> &::std::option::Option<::std::string::String> {
            &self.opt_out
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
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = ::std::option::Option::Some(input);
            self
        }
        pub fn set_user(mut self, input: ::std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        pub fn get_user(&self) -> &::std::option::Option<crate::model::EndpointUser> {
            &self.user
        }
        /// Consumes the builder and constructs a [`EndpointResponse`](crate::model::EndpointResponse).
        pub fn build(self) -> crate::model::EndpointResponse {
            crate::model::EndpointResponse {
                address: self.address,
                application_id: self.application_id,
                attributes: self.attributes,
                channel_type: self.channel_type,
                cohort_id: self.cohort_id,
                creation_date: self.creation_date,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}

/// <p>Provides information about all the endpoints that are associated with a user ID.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::EndpointResponse>>,
}
impl EndpointsResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::EndpointResponse]> {
        self.item.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointsResponse`](crate::model::EndpointsResponse).
    pub fn builder() -> crate::model::endpoints_response::Builder {
        crate::model::endpoints_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoints_response::Builder {
        crate::model::endpoints_response::Builder {
            item: self.item,
        }
    }
}
impl ::std::hash::Hash for EndpointsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
    }
}
impl ::std::fmt::Display for EndpointsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointsResponse`](crate::model::EndpointsResponse).
pub mod endpoints_response {

    /// A builder for [`EndpointsResponse`](crate::model::EndpointsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::EndpointResponse>>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::EndpointResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::EndpointResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::EndpointResponse>> {
            &self.item
        }
        /// Consumes the builder and constructs a [`EndpointsResponse`](crate::model::EndpointsResponse).
        pub fn build(self) -> crate::model::EndpointsResponse {
            crate::model::EndpointsResponse {
                item: self.item,
            }
        }
    }
}

/// <p>Specifies demographic information about an endpoint, such as the applicable time zone and platform.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointDemographic {
    #[serde(rename = "AppVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) app_version: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Locale", skip_serializing_if = "Option::is_none")]
    pub(crate) locale: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Make", skip_serializing_if = "Option::is_none")]
    pub(crate) make: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Model", skip_serializing_if = "Option::is_none")]
    pub(crate) model: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ModelVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) model_version: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<::std::string::String>,
    #[serde(rename = "PlatformVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) platform_version: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub(crate) timezone: ::std::option::Option<::std::string::String>,
}
impl EndpointDemographic {
    pub fn app_version(&self) -> ::std::option::Option<&str> {
        self.app_version.as_deref()
    }
    pub fn locale(&self) -> ::std::option::Option<&str> {
        self.locale.as_deref()
    }
    pub fn make(&self) -> ::std::option::Option<&str> {
        self.make.as_deref()
    }
    pub fn model(&self) -> ::std::option::Option<&str> {
        self.model.as_deref()
    }
    pub fn model_version(&self) -> ::std::option::Option<&str> {
        self.model_version.as_deref()
    }
    pub fn platform(&self) -> ::std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn platform_version(&self) -> ::std::option::Option<&str> {
        self.platform_version.as_deref()
    }
    pub fn timezone(&self) -> ::std::option::Option<&str> {
        self.timezone.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointDemographic`](crate::model::EndpointDemographic).
    pub fn builder() -> crate::model::endpoint_demographic::Builder {
        crate::model::endpoint_demographic::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_demographic::Builder {
        crate::model::endpoint_demographic::Builder {
            app_version: self.app_version,
            locale: self.locale,
            make: self.make,
            model: self.model,
            model_version: self.model_version,
            platform: self.platform,
            platform_version: self.platform_version,
            timezone: self.timezone,
        }
    }
}
impl ::std::hash::Hash for EndpointDemographic {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.app_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.locale, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.make, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.model, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.model_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timezone, state);
    }
}
impl ::std::fmt::Display for EndpointDemographic {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AppVersion", &self.app_version);
        shape.field("Locale", &self.locale);
        shape.field("Make", &self.make);
        shape.field("Model", &self.model);
        shape.field("ModelVersion", &self.model_version);
        shape.field("Platform", &self.platform);
        shape.field("PlatformVersion", &self.platform_version);
        shape.field("Timezone", &self.timezone);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointDemographic {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointDemographic`](crate::model::EndpointDemographic).
pub mod endpoint_demographic {

    /// A builder for [`EndpointDemographic`](crate::model::EndpointDemographic).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: ::std::option::Option<::std::string::String>,
        pub(crate) locale: ::std::option::Option<::std::string::String>,
        pub(crate) make: ::std::option::Option<::std::string::String>,
        pub(crate) model: ::std::option::Option<::std::string::String>,
        pub(crate) model_version: ::std::option::Option<::std::string::String>,
        pub(crate) platform: ::std::option::Option<::std::string::String>,
        pub(crate) platform_version: ::std::option::Option<::std::string::String>,
        pub(crate) timezone: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn app_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.app_version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_app_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.app_version = input;
            self
        }
        pub fn get_app_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.app_version
        }
        pub fn locale(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.locale = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_locale(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.locale = input;
            self
        }
        pub fn get_locale(&self) -> &::std::option::Option<::std::string::String> {
            &self.locale
        }
        pub fn make(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.make = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_make(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.make = input;
            self
        }
        pub fn get_make(&self) -> &::std::option::Option<::std::string::String> {
            &self.make
        }
        pub fn model(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.model = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_model(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.model = input;
            self
        }
        pub fn get_model(&self) -> &::std::option::Option<::std::string::String> {
            &self.model
        }
        pub fn model_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.model_version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_model_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.model_version = input;
            self
        }
        pub fn get_model_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.model_version
        }
        pub fn platform(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.platform = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn get_platform(&self) -> &::std::option::Option<::std::string::String> {
            &self.platform
        }
        pub fn platform_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.platform_version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_platform_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.platform_version = input;
            self
        }
        pub fn get_platform_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.platform_version
        }
        pub fn timezone(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.timezone = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        pub fn get_timezone(&self) -> &::std::option::Option<::std::string::String> {
            &self.timezone
        }
        /// Consumes the builder and constructs a [`EndpointDemographic`](crate::model::EndpointDemographic).
        pub fn build(self) -> crate::model::EndpointDemographic {
            crate::model::EndpointDemographic {
                app_version: self.app_version,
                locale: self.locale,
                make: self.make,
                model: self.model,
                model_version: self.model_version,
                platform: self.platform,
                platform_version: self.platform_version,
                timezone: self.timezone,
            }
        }
    }
}

/// <p>Specifies geographic information about an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointLocation {
    #[serde(rename = "City", skip_serializing_if = "Option::is_none")]
    pub(crate) city: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub(crate) country: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub(crate) latitude: ::std::option::Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub(crate) longitude: ::std::option::Option<f64>,
    #[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
    pub(crate) postal_code: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Region", skip_serializing_if = "Option::is_none")]
    pub(crate) region: ::std::option::Option<::std::string::String>,
}
impl EndpointLocation {
    pub fn city(&self) -> ::std::option::Option<&str> {
        self.city.as_deref()
    }
    pub fn country(&self) -> ::std::option::Option<&str> {
        self.country.as_deref()
    }
    pub fn latitude(&self) -> ::std::option::Option<f64> {
        self.latitude
    }
    pub fn longitude(&self) -> ::std::option::Option<f64> {
        self.longitude
    }
    pub fn postal_code(&self) -> ::std::option::Option<&str> {
        self.postal_code.as_deref()
    }
    pub fn region(&self) -> ::std::option::Option<&str> {
        self.region.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointLocation`](crate::model::EndpointLocation).
    pub fn builder() -> crate::model::endpoint_location::Builder {
        crate::model::endpoint_location::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_location::Builder {
        crate::model::endpoint_location::Builder {
            city: self.city,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            postal_code: self.postal_code,
            region: self.region,
        }
    }
}
impl ::std::hash::Hash for EndpointLocation {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.city, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.country, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.latitude, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.longitude, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.postal_code, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.region, state);
    }
}
impl ::std::fmt::Display for EndpointLocation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("City", &self.city);
        shape.field("Country", &self.country);
        shape.field("Latitude", &self.latitude);
        shape.field("Longitude", &self.longitude);
        shape.field("PostalCode", &self.postal_code);
        shape.field("Region", &self.region);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointLocation {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointLocation`](crate::model::EndpointLocation).
pub mod endpoint_location {

    /// A builder for [`EndpointLocation`](crate::model::EndpointLocation).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) city: ::std::option::Option<::std::string::String>,
        pub(crate) country: ::std::option::Option<::std::string::String>,
        pub(crate) latitude: ::std::option::Option<f64>,
        pub(crate) longitude: ::std::option::Option<f64>,
        pub(crate) postal_code: ::std::option::Option<::std::string::String>,
        pub(crate) region: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn city(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.city = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_city(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.city = input;
            self
        }
        pub fn get_city(&self) -> &::std::option::Option<::std::string::String> {
            &self.city
        }
        pub fn country(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.country = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_country(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.country = input;
            self
        }
        pub fn get_country(&self) -> &::std::option::Option<::std::string::String> {
            &self.country
        }
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
        pub fn postal_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.postal_code = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_postal_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.postal_code = input;
            self
        }
        pub fn get_postal_code(&self) -> &::std::option::Option<::std::string::String> {
            &self.postal_code
        }
        pub fn region(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.region = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_region(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn get_region(&self) -> &::std::option::Option<::std::string::String> {
            &self.region
        }
        /// Consumes the builder and constructs a [`EndpointLocation`](crate::model::EndpointLocation).
        pub fn build(self) -> crate::model::EndpointLocation {
            crate::model::EndpointLocation {
                city: self.city,
                country: self.country,
                latitude: self.latitude,
                longitude: self.longitude,
                postal_code: self.postal_code,
                region: self.region,
            }
        }
    }
}

/// <p>Specifies data for one or more attributes that describe the user who's associated with an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointUser {
    #[serde(rename = "UserAttributes", skip_serializing_if = "Option::is_none")]
    pub(crate) user_attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub(crate) user_id: ::std::option::Option<::std::string::String>,
}
impl EndpointUser {
    pub fn user_attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.user_attributes.as_ref()
    }
    pub fn user_id(&self) -> ::std::option::Option<&str> {
        self.user_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointUser`](crate::model::EndpointUser).
    pub fn builder() -> crate::model::endpoint_user::Builder {
        crate::model::endpoint_user::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_user::Builder {
        crate::model::endpoint_user::Builder {
            user_attributes: self.user_attributes,
            user_id: self.user_id,
        }
    }
}
impl ::std::hash::Hash for EndpointUser {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.user_attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user_id, state);
    }
}
impl ::std::fmt::Display for EndpointUser {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("UserAttributes", &self.user_attributes);
        shape.field("UserId", &self.user_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointUser {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointUser`](crate::model::EndpointUser).
pub mod endpoint_user {

    /// A builder for [`EndpointUser`](crate::model::EndpointUser).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) user_attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) user_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Adds a key-value pair to `user_attributes`.
        ///
        /// To override the contents of this collection use [`set_user_attributes`](Self::set_user_attributes).
        ///
        pub fn user_attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.user_attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.user_attributes = input;
            self
        }
        pub fn get_user_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.user_attributes
        }
        /// Inserts a key-value pair into `user_attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_user_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.user_attributes, "UserAttributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn user_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.user_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.user_id = input;
            self
        }
        pub fn get_user_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.user_id
        }
        /// Consumes the builder and constructs a [`EndpointUser`](crate::model::EndpointUser).
        pub fn build(self) -> crate::model::EndpointUser {
            crate::model::EndpointUser {
                user_attributes: self.user_attributes,
                user_id: self.user_id,
            }
        }
    }
}

/// <p>Specifies a batch of endpoints to create or update and the settings and attributes to set or change for each endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointBatchRequest {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::EndpointBatchItem>>,
}
impl EndpointBatchRequest {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::EndpointBatchItem]> {
        self.item.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointBatchRequest`](crate::model::EndpointBatchRequest).
    pub fn builder() -> crate::model::endpoint_batch_request::Builder {
        crate::model::endpoint_batch_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_batch_request::Builder {
        crate::model::endpoint_batch_request::Builder {
            item: self.item,
        }
    }
}
impl ::std::hash::Hash for EndpointBatchRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
    }
}
impl ::std::fmt::Display for EndpointBatchRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointBatchRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointBatchRequest`](crate::model::EndpointBatchRequest).
pub mod endpoint_batch_request {

    /// A builder for [`EndpointBatchRequest`](crate::model::EndpointBatchRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::EndpointBatchItem>>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::EndpointBatchItem) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::EndpointBatchItem>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::EndpointBatchItem>> {
            &self.item
        }
        /// Consumes the builder and constructs a [`EndpointBatchRequest`](crate::model::EndpointBatchRequest).
        pub fn build(self) -> crate::model::EndpointBatchRequest {
            crate::model::EndpointBatchRequest {
                item: self.item,
            }
        }
    }
}

/// <p>Specifies an endpoint to create or update and the settings and attributes to set or change for the endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointBatchItem {
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub(crate) address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
    #[serde(rename = "ChannelType", skip_serializing_if = "Option::is_none")]
    pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
    #[serde(rename = "Demographic", skip_serializing_if = "Option::is_none")]
    pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
    #[serde(rename = "EffectiveDate", skip_serializing_if = "Option::is_none")]
    pub(crate) effective_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EndpointStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
    #[serde(rename = "OptOut", skip_serializing_if = "Option::is_none")]
    pub(crate) opt_out: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "User", skip_serializing_if = "Option::is_none")]
    pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
}
impl EndpointBatchItem {
    pub fn address(&self) -> ::std::option::Option<&str> {
        self.address.as_deref()
    }
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
        self.attributes.as_ref()
    }
    pub fn channel_type(&self) -> ::std::option::Option<&crate::model::ChannelType> {
        self.channel_type.as_ref()
    }
    pub fn demographic(&self) -> ::std::option::Option<&crate::model::EndpointDemographic> {
        self.demographic.as_ref()
    }
    pub fn effective_date(&self) -> ::std::option::Option<&str> {
        self.effective_date.as_deref()
    }
    pub fn endpoint_status(&self) -> ::std::option::Option<&str> {
        self.endpoint_status.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn location(&self) -> ::std::option::Option<&crate::model::EndpointLocation> {
        self.location.as_ref()
    }
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn opt_out(&self) -> ::std::option::Option<&str> {
        self.opt_out.as_deref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub fn user(&self) -> ::std::option::Option<&crate::model::EndpointUser> {
        self.user.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EndpointBatchItem`](crate::model::EndpointBatchItem).
    pub fn builder() -> crate::model::endpoint_batch_item::Builder {
        crate::model::endpoint_batch_item::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_batch_item::Builder {
        crate::model::endpoint_batch_item::Builder {
            address: self.address,
            attributes: self.attributes,
            channel_type: self.channel_type,
            demographic: self.demographic,
            effective_date: self.effective_date,
            endpoint_status: self.endpoint_status,
            id: self.id,
            location: self.location,
            metrics: self.metrics,
            opt_out: self.opt_out,
            request_id: self.request_id,
            user: self.user,
        }
    }
}
impl ::std::hash::Hash for EndpointBatchItem {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.channel_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.demographic, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.effective_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.location, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.opt_out, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user, state);
    }
}
impl ::std::fmt::Display for EndpointBatchItem {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Address", &self.address);
        shape.field("Attributes", &self.attributes);
        shape.field("ChannelType", &self.channel_type);
        shape.field("Demographic", &self.demographic);
        shape.field("EffectiveDate", &self.effective_date);
        shape.field("EndpointStatus", &self.endpoint_status);
        shape.field("Id", &self.id);
        shape.field("Location", &self.location);
        shape.field("Metrics", &self.metrics);
        shape.field("OptOut", &self.opt_out);
        shape.field("RequestId", &self.request_id);
        shape.field("User", &self.user);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointBatchItem {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointBatchItem`](crate::model::EndpointBatchItem).
pub mod endpoint_batch_item {

    /// A builder for [`EndpointBatchItem`](crate::model::EndpointBatchItem).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: ::std::option::Option<::std::string::String>,
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>,
        pub(crate) channel_type: ::std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: ::std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_status: ::std::option::Option<::std::string::String>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) location: ::std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
        pub(crate) opt_out: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
        pub(crate) user: ::std::option::Option<crate::model::EndpointUser>,
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
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: ::std::vec::Vec<::std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn get_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::vec::Vec<::std::string::String>>> {
            &self.attributes
        }
        /// Inserts a key-value pair into `attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: ::std::vec::Vec<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.attributes, "Attributes", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = ::std::option::Option::Some(input);
            self
        }
        pub fn set_demographic(mut self, input: ::std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn get_demographic(&self) -> &::std::option::Option<crate::model::EndpointDemographic> {
            &self.demographic
        }
        pub fn effective_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.effective_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn get_effective_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.effective_date
        }
        pub fn endpoint_status(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_status = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn get_endpoint_status(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_status
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
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = ::std::option::Option::Some(input);
            self
        }
        pub fn set_location(mut self, input: ::std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn get_location(&self) -> &::std::option::Option<crate::model::EndpointLocation> {
            &self.location
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        ///
        pub fn metrics(mut self, k: impl ::std::convert::Into<::std::string::String>, v: f64) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn get_metrics(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, f64>> {
            &self.metrics
        }
        /// Inserts a key-value pair into `metrics`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_metrics_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: f64,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.metrics, "Metrics", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        pub fn opt_out(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.opt_out = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn get_opt_out(&self) -> &::std::option::Option<::std::string::String> {
            &self.opt_out
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
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = ::std::option::Option::Some(input);
            self
        }
        pub fn set_user(mut self, input: ::std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        pub fn get_user(&self) -> &::std::option::Option<crate::model::EndpointUser> {
            &self.user
        }
        /// Consumes the builder and constructs a [`EndpointBatchItem`](crate::model::EndpointBatchItem).
        pub fn build(self) -> crate::model::EndpointBatchItem {
            crate::model::EndpointBatchItem {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}

/// <p>Provides the status code and message that result from processing data for an endpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EndpointItemResponse {
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub(crate) status_code: ::std::option::Option<i32>,
}
impl EndpointItemResponse {
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn status_code(&self) -> ::std::option::Option<i32> {
        self.status_code
    }
    /// Creates a new builder-style object to manufacture [`EndpointItemResponse`](crate::model::EndpointItemResponse).
    pub fn builder() -> crate::model::endpoint_item_response::Builder {
        crate::model::endpoint_item_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::endpoint_item_response::Builder {
        crate::model::endpoint_item_response::Builder {
            message: self.message,
            status_code: self.status_code,
        }
    }
}
impl ::std::hash::Hash for EndpointItemResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_code, state);
    }
}
impl ::std::fmt::Display for EndpointItemResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Message", &self.message);
        shape.field("StatusCode", &self.status_code);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EndpointItemResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EndpointItemResponse`](crate::model::EndpointItemResponse).
pub mod endpoint_item_response {

    /// A builder for [`EndpointItemResponse`](crate::model::EndpointItemResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) status_code: ::std::option::Option<i32>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`EndpointItemResponse`](crate::model::EndpointItemResponse).
        pub fn build(self) -> crate::model::EndpointItemResponse {
            crate::model::EndpointItemResponse {
                message: self.message,
                status_code: self.status_code,
            }
        }
    }
}

/// <p>Provides information about an API request or response.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MessageBody {
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: ::std::option::Option<::std::string::String>,
}
impl MessageBody {
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> ::std::option::Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`MessageBody`](crate::model::MessageBody).
    pub fn builder() -> crate::model::message_body::Builder {
        crate::model::message_body::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message_body::Builder {
        crate::model::message_body::Builder {
            message: self.message,
            request_id: self.request_id,
        }
    }
}
impl ::std::hash::Hash for MessageBody {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.request_id, state);
    }
}
impl ::std::fmt::Display for MessageBody {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Message", &self.message);
        shape.field("RequestID", &self.request_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MessageBody {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MessageBody`](crate::model::MessageBody).
pub mod message_body {

    /// A builder for [`MessageBody`](crate::model::MessageBody).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: ::std::option::Option<::std::string::String>,
        pub(crate) request_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`MessageBody`](crate::model::MessageBody).
        pub fn build(self) -> crate::model::MessageBody {
            crate::model::MessageBody {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
