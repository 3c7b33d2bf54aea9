// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>Provides information about the general settings and status of all channels for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ChannelsResponse {
    /// <p>A map that contains a multipart response for each channel. For each item in this object, the ChannelType is the key and the Channel is the value.</p>
    #[serde(rename = "Channels", skip_serializing_if = "Option::is_none")]
    pub(crate) channels: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ChannelResponse>>,
}
impl ChannelsResponse {
    /// <p>A map that contains a multipart response for each channel. For each item in this object, the ChannelType is the key and the Channel is the value.</p>
    pub fn channels(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::ChannelResponse>> {
        self.channels.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ChannelsResponse`](crate::model::ChannelsResponse).
    pub fn builder() -> crate::model::channels_response::Builder {
        crate::model::channels_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::channels_response::Builder {
        crate::model::channels_response::Builder {
            channels: self.channels,
        }
    }
}
impl ::std::hash::Hash for ChannelsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.channels, state);
    }
}
impl ::std::fmt::Display for ChannelsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Channels", &self.channels);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ChannelsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ChannelsResponse`](crate::model::ChannelsResponse).
pub mod channels_response {

    /// A builder for [`ChannelsResponse`](crate::model::ChannelsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channels: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ChannelResponse>>,
    }
    impl Builder {
        /// Adds a key-value pair to `channels`.
        ///
        /// To override the contents of this collection use [`set_channels`](Self::set_channels).
        ///
        /// <p>A map that contains a multipart response for each channel. For each item in this object, the ChannelType is the key and the Channel is the value.</p>
        pub fn channels(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::ChannelResponse) -> Self {
            let mut hash_map = self.channels.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.channels = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>A map that contains a multipart response for each channel. For each item in this object, the ChannelType is the key and the Channel is the value.</p>
        pub fn set_channels(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ChannelResponse>>) -> Self {
            self.channels = input;
            self
        }
        /// <p>A map that contains a multipart response for each channel. For each item in this object, the ChannelType is the key and the Channel is the value.</p>
        pub fn get_channels(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ChannelResponse>> {
            &self.channels
        }
        /// Inserts a key-value pair into `channels`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_channels_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::ChannelResponse,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.channels, "Channels", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`ChannelsResponse`](crate::model::ChannelsResponse).
        pub fn build(self) -> crate::model::ChannelsResponse {
            crate::model::ChannelsResponse {
                channels: self.channels,
            }
        }
    }
}

/// <p>Provides information about the general settings and status of a channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub(crate) has_credential: ::std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub(crate) is_archived: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl ChannelResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> ::std::option::Option<bool> {
        self.has_credential
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> ::std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> ::std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`ChannelResponse`](crate::model::ChannelResponse).
    pub fn builder() -> crate::model::channel_response::Builder {
        crate::model::channel_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::channel_response::Builder {
        crate::model::channel_response::Builder {
            application_id: self.application_id,
            creation_date: self.creation_date,
            enabled: self.enabled,
            has_credential: self.has_credential,
            id: self.id,
            is_archived: self.is_archived,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for ChannelResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_archived, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_by, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for ChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Enabled", &self.enabled);
        shape.field("HasCredential", &self.has_credential);
        shape.field("Id", &self.id);
        shape.field("IsArchived", &self.is_archived);
        shape.field("LastModifiedBy", &self.last_modified_by);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ChannelResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ChannelResponse`](crate::model::ChannelResponse).
pub mod channel_response {

    /// A builder for [`ChannelResponse`](crate::model::ChannelResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) has_credential: ::std::option::Option<bool>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) is_archived: ::std::option::Option<bool>,
        pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
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
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn get_has_credential(&self) -> &::std::option::Option<bool> {
            &self.has_credential
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
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn get_is_archived(&self) -> &::std::option::Option<bool> {
            &self.is_archived
        }
        pub fn last_modified_by(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_by = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn get_last_modified_by(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_by
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
        /// Consumes the builder and constructs a [`ChannelResponse`](crate::model::ChannelResponse).
        pub fn build(self) -> crate::model::ChannelResponse {
            crate::model::ChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                enabled: self.enabled,
                has_credential: self.has_credential,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                version: self.version,
            }
        }
    }
}

/// <p>Specifies the status and settings of the APNs (Apple Push Notification service) channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::serde::Serialize, ::serde::Deserialize)]
pub struct APNSChannelRequest {
    #[serde(rename = "BundleId", skip_serializing_if = "Option::is_none")]
    pub(crate) bundle_id: ::std::option::Option<::std::string::String>,
    /// <p>The APNs client certificate that you received from Apple.</p>
    #[serde(rename = "Certificate", skip_serializing_if = "Option::is_none")]
    pub(crate) certificate: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    /// <p>The private key for the APNs client certificate.</p>
    #[serde(rename = "PrivateKey", skip_serializing_if = "Option::is_none")]
    pub(crate) private_key: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TeamId", skip_serializing_if = "Option::is_none")]
    pub(crate) team_id: ::std::option::Option<::std::string::String>,
    /// <p>The authentication key to use for APNs tokens.</p>
    #[serde(rename = "TokenKey", skip_serializing_if = "Option::is_none")]
    pub(crate) token_key: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TokenKeyId", skip_serializing_if = "Option::is_none")]
    pub(crate) token_key_id: ::std::option::Option<::std::string::String>,
}
impl APNSChannelRequest {
    pub fn bundle_id(&self) -> ::std::option::Option<&str> {
        self.bundle_id.as_deref()
    }
    /// <p>The APNs client certificate that you received from Apple.</p>
    pub fn certificate(&self) -> ::std::option::Option<&str> {
        self.certificate.as_deref()
    }
    pub fn default_authentication_method(&self) -> ::std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    /// <p>The private key for the APNs client certificate.</p>
    pub fn private_key(&self) -> ::std::option::Option<&str> {
        self.private_key.as_deref()
    }
    pub fn team_id(&self) -> ::std::option::Option<&str> {
        self.team_id.as_deref()
    }
    /// <p>The authentication key to use for APNs tokens.</p>
    pub fn token_key(&self) -> ::std::option::Option<&str> {
        self.token_key.as_deref()
    }
    pub fn token_key_id(&self) -> ::std::option::Option<&str> {
        self.token_key_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`APNSChannelRequest`](crate::model::APNSChannelRequest).
    pub fn builder() -> crate::model::apns_channel_request::Builder {
        crate::model::apns_channel_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::apns_channel_request::Builder {
        crate::model::apns_channel_request::Builder {
            bundle_id: self.bundle_id,
            certificate: self.certificate,
            default_authentication_method: self.default_authentication_method,
            enabled: self.enabled,
            private_key: self.private_key,
            team_id: self.team_id,
            token_key: self.token_key,
            token_key_id: self.token_key_id,
        }
    }
}
impl ::std::fmt::Debug for APNSChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("APNSChannelRequest");
        formatter.field("bundle_id", &self.bundle_id);
        formatter.field("certificate", &"*** Sensitive Data Redacted ***");
        formatter.field("default_authentication_method", &self.default_authentication_method);
        formatter.field("enabled", &self.enabled);
        formatter.field("private_key", &"*** Sensitive Data Redacted ***");
        formatter.field("team_id", &self.team_id);
        formatter.field("token_key", &"*** Sensitive Data Redacted ***");
        formatter.field("token_key_id", &self.token_key_id);
        formatter.finish()
    }
}
impl ::std::hash::Hash for APNSChannelRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.bundle_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.certificate, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_authentication_method, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.private_key, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.team_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token_key, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token_key_id, state);
    }
}
impl ::std::fmt::Display for APNSChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("BundleId", &self.bundle_id);
        shape.sensitive_field("Certificate", &self.certificate);
        shape.field("DefaultAuthenticationMethod", &self.default_authentication_method);
        shape.field("Enabled", &self.enabled);
        shape.sensitive_field("PrivateKey", &self.private_key);
        shape.field("TeamId", &self.team_id);
        shape.sensitive_field("TokenKey", &self.token_key);
        shape.field("TokenKeyId", &self.token_key_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for APNSChannelRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`APNSChannelRequest`](crate::model::APNSChannelRequest).
pub mod apns_channel_request {

    /// A builder for [`APNSChannelRequest`](crate::model::APNSChannelRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
    pub struct Builder {
        pub(crate) bundle_id: ::std::option::Option<::std::string::String>,
        pub(crate) certificate: ::std::option::Option<::std::string::String>,
        pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) private_key: ::std::option::Option<::std::string::String>,
        pub(crate) team_id: ::std::option::Option<::std::string::String>,
        pub(crate) token_key: ::std::option::Option<::std::string::String>,
        pub(crate) token_key_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn bundle_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.bundle_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_bundle_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.bundle_id = input;
            self
        }
        pub fn get_bundle_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.bundle_id
        }
        /// <p>The APNs client certificate that you received from Apple.</p>
        pub fn certificate(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.certificate = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The APNs client certificate that you received from Apple.</p>
        pub fn set_certificate(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.certificate = input;
            self
        }
        /// <p>The APNs client certificate that you received from Apple.</p>
        pub fn get_certificate(&self) -> &::std::option::Option<::std::string::String> {
            &self.certificate
        }
        pub fn default_authentication_method(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_authentication_method = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn get_default_authentication_method(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_authentication_method
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        /// <p>The private key for the APNs client certificate.</p>
        pub fn private_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.private_key = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The private key for the APNs client certificate.</p>
        pub fn set_private_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.private_key = input;
            self
        }
        /// <p>The private key for the APNs client certificate.</p>
        pub fn get_private_key(&self) -> &::std::option::Option<::std::string::String> {
            &self.private_key
        }
        pub fn team_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.team_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_team_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.team_id = input;
            self
        }
        pub fn get_team_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.team_id
        }
        /// <p>The authentication key to use for APNs tokens.</p>
        pub fn token_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token_key = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The authentication key to use for APNs tokens.</p>
        pub fn set_token_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token_key = input;
            self
        }
        /// <p>The authentication key to use for APNs tokens.</p>
        pub fn get_token_key(&self) -> &::std::option::Option<::std::string::String> {
            &self.token_key
        }
        pub fn token_key_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token_key_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_token_key_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token_key_id = input;
            self
        }
        pub fn get_token_key_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.token_key_id
        }
        /// Consumes the builder and constructs a [`APNSChannelRequest`](crate::model::APNSChannelRequest).
        pub fn build(self) -> crate::model::APNSChannelRequest {
            crate::model::APNSChannelRequest {
                bundle_id: self.bundle_id,
                certificate: self.certificate,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                private_key: self.private_key,
                team_id: self.team_id,
                token_key: self.token_key,
                token_key_id: self.token_key_id,
            }
        }
    }
    impl ::std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("bundle_id", &self.bundle_id);
            formatter.field("certificate", &"*** Sensitive Data Redacted ***");
            formatter.field("default_authentication_method", &self.default_authentication_method);
            formatter.field("enabled", &self.enabled);
            formatter.field("private_key", &"*** Sensitive Data Redacted ***");
            formatter.field("team_id", &self.team_id);
            formatter.field("token_key", &"*** Sensitive Data Redacted ***");
            formatter.field("token_key_id", &self.token_key_id);
            formatter.finish()
        }
    }
}

/// <p>Provides information about the status and settings of the APNs (Apple Push Notification service) channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct APNSChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub(crate) has_credential: ::std::option::Option<bool>,
    #[serde(rename = "HasTokenKey", skip_serializing_if = "Option::is_none")]
    pub(crate) has_token_key: ::std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub(crate) is_archived: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl APNSChannelResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn default_authentication_method(&self) -> ::std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> ::std::option::Option<bool> {
        self.has_credential
    }
    pub fn has_token_key(&self) -> ::std::option::Option<bool> {
        self.has_token_key
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> ::std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> ::std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn platform(&self) -> ::std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`APNSChannelResponse`](crate::model::APNSChannelResponse).
    pub fn builder() -> crate::model::apns_channel_response::Builder {
        crate::model::apns_channel_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::apns_channel_response::Builder {
        crate::model::apns_channel_response::Builder {
            application_id: self.application_id,
            creation_date: self.creation_date,
            default_authentication_method: self.default_authentication_method,
            enabled: self.enabled,
            has_credential: self.has_credential,
            has_token_key: self.has_token_key,
            id: self.id,
            is_archived: self.is_archived,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
            platform: self.platform,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for APNSChannelResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_authentication_method, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_token_key, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_archived, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_by, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for APNSChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CreationDate", &self.creation_date);
        shape.field("DefaultAuthenticationMethod", &self.default_authentication_method);
        shape.field("Enabled", &self.enabled);
        shape.field("HasCredential", &self.has_credential);
        shape.field("HasTokenKey", &self.has_token_key);
        shape.field("Id", &self.id);
        shape.field("IsArchived", &self.is_archived);
        shape.field("LastModifiedBy", &self.last_modified_by);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Platform", &self.platform);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for APNSChannelResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`APNSChannelResponse`](crate::model::APNSChannelResponse).
pub mod apns_channel_response {

    /// A builder for [`APNSChannelResponse`](crate::model::APNSChannelResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) has_credential: ::std::option::Option<bool>,
        pub(crate) has_token_key: ::std::option::Option<bool>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) is_archived: ::std::option::Option<bool>,
        pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) platform: ::std::option::Option<::std::string::String>,
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
        pub fn default_authentication_method(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_authentication_method = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn get_default_authentication_method(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_authentication_method
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn get_has_credential(&self) -> &::std::option::Option<bool> {
            &self.has_credential
        }
        pub fn has_token_key(mut self, input: bool) -> Self {
            self.has_token_key = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_token_key(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_token_key = input;
            self
        }
        pub fn get_has_token_key(&self) -> &::std::option::Option<bool> {
            &self.has_token_key
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
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn get_is_archived(&self) -> &::std::option::Option<bool> {
            &self.is_archived
        }
        pub fn last_modified_by(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_by = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn get_last_modified_by(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_by
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
        /// Consumes the builder and constructs a [`APNSChannelResponse`](crate::model::APNSChannelResponse).
        pub fn build(self) -> crate::model::APNSChannelResponse {
            crate::model::APNSChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                has_credential: self.has_credential,
                has_token_key: self.has_token_key,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
}

/// <p>Specifies the status and settings of the GCM channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::serde::Serialize, ::serde::Deserialize)]
pub struct GCMChannelRequest {
    /// <p>The Web API Key, also referred to as an API_KEY or server key, that you received from Google.</p>
    #[serde(rename = "ApiKey", skip_serializing_if = "Option::is_none")]
    pub(crate) api_key: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "ServiceJson", skip_serializing_if = "Option::is_none")]
    pub(crate) service_json: ::std::option::Option<::std::string::String>,
}
impl GCMChannelRequest {
    /// <p>The Web API Key, also referred to as an API_KEY or server key, that you received from Google.</p>
    pub fn api_key(&self) -> ::std::option::Option<&str> {
        self.api_key.as_deref()
    }
    pub fn default_authentication_method(&self) -> ::std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn service_json(&self) -> ::std::option::Option<&str> {
        self.service_json.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GCMChannelRequest`](crate::model::GCMChannelRequest).
    pub fn builder() -> crate::model::gcm_channel_request::Builder {
        crate::model::gcm_channel_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::gcm_channel_request::Builder {
        crate::model::gcm_channel_request::Builder {
            api_key: self.api_key,
            default_authentication_method: self.default_authentication_method,
            enabled: self.enabled,
            service_json: self.service_json,
        }
    }
}
impl ::std::fmt::Debug for GCMChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GCMChannelRequest");
        formatter.field("api_key", &"*** Sensitive Data Redacted ***");
        formatter.field("default_authentication_method", &self.default_authentication_method);
        formatter.field("enabled", &self.enabled);
        formatter.field("service_json", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl ::std::hash::Hash for GCMChannelRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.api_key, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_authentication_method, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.service_json, state);
    }
}
impl ::std::fmt::Display for GCMChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.sensitive_field("ApiKey", &self.api_key);
        shape.field("DefaultAuthenticationMethod", &self.default_authentication_method);
        shape.field("Enabled", &self.enabled);
        shape.sensitive_field("ServiceJson", &self.service_json);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GCMChannelRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GCMChannelRequest`](crate::model::GCMChannelRequest).
pub mod gcm_channel_request {

    /// A builder for [`GCMChannelRequest`](crate::model::GCMChannelRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
    pub struct Builder {
        pub(crate) api_key: ::std::option::Option<::std::string::String>,
        pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) service_json: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The Web API Key, also referred to as an API_KEY or server key, that you received from Google.</p>
        pub fn api_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.api_key = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The Web API Key, also referred to as an API_KEY or server key, that you received from Google.</p>
        pub fn set_api_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.api_key = input;
            self
        }
        /// <p>The Web API Key, also referred to as an API_KEY or server key, that you received from Google.</p>
        pub fn get_api_key(&self) -> &::std::option::Option<::std::string::String> {
            &self.api_key
        }
        pub fn default_authentication_method(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_authentication_method = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn get_default_authentication_method(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_authentication_method
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        pub fn service_json(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.service_json = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_service_json(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.service_json = input;
            self
        }
        pub fn get_service_json(&self) -> &::std::option::Option<::std::string::String> {
            &self.service_json
        }
        /// Consumes the builder and constructs a [`GCMChannelRequest`](crate::model::GCMChannelRequest).
        pub fn build(self) -> crate::model::GCMChannelRequest {
            crate::model::GCMChannelRequest {
                api_key: self.api_key,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                service_json: self.service_json,
            }
        }
    }
    impl ::std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("api_key", &"*** Sensitive Data Redacted ***");
            formatter.field("default_authentication_method", &self.default_authentication_method);
            formatter.field("enabled", &self.enabled);
            formatter.field("service_json", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}

/// <p>Provides information about the status and settings of the GCM channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::serde::Serialize, ::serde::Deserialize)]
pub struct GCMChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    /// <p>The Web API Key that you received from Google to communicate with Google services.</p>
    #[serde(rename = "Credential", skip_serializing_if = "Option::is_none")]
    pub(crate) credential: ::std::option::Option<::std::string::String>,
    #[serde(rename = "DefaultAuthenticationMethod", skip_serializing_if = "Option::is_none")]
    pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub(crate) has_credential: ::std::option::Option<bool>,
    #[serde(rename = "HasFcmServiceCredentials", skip_serializing_if = "Option::is_none")]
    pub(crate) has_fcm_service_credentials: ::std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub(crate) is_archived: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl GCMChannelResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    /// <p>The Web API Key that you received from Google to communicate with Google services.</p>
    pub fn credential(&self) -> ::std::option::Option<&str> {
        self.credential.as_deref()
    }
    pub fn default_authentication_method(&self) -> ::std::option::Option<&str> {
        self.default_authentication_method.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> ::std::option::Option<bool> {
        self.has_credential
    }
    pub fn has_fcm_service_credentials(&self) -> ::std::option::Option<bool> {
        self.has_fcm_service_credentials
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> ::std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> ::std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn platform(&self) -> ::std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`GCMChannelResponse`](crate::model::GCMChannelResponse).
    pub fn builder() -> crate::model::gcm_channel_response::Builder {
        crate::model::gcm_channel_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::gcm_channel_response::Builder {
        crate::model::gcm_channel_response::Builder {
            application_id: self.application_id,
            creation_date: self.creation_date,
            credential: self.credential,
            default_authentication_method: self.default_authentication_method,
            enabled: self.enabled,
            has_credential: self.has_credential,
            has_fcm_service_credentials: self.has_fcm_service_credentials,
            id: self.id,
            is_archived: self.is_archived,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
            platform: self.platform,
            version: self.version,
        }
    }
}
impl ::std::fmt::Debug for GCMChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GCMChannelResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("credential", &"*** Sensitive Data Redacted ***");
        formatter.field("default_authentication_method", &self.default_authentication_method);
        formatter.field("enabled", &self.enabled);
        formatter.field("has_credential", &self.has_credential);
        formatter.field("has_fcm_service_credentials", &self.has_fcm_service_credentials);
        formatter.field("id", &self.id);
        formatter.field("is_archived", &self.is_archived);
        formatter.field("last_modified_by", &self.last_modified_by);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("platform", &self.platform);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}
impl ::std::hash::Hash for GCMChannelResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_authentication_method, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_fcm_service_credentials, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_archived, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_by, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for GCMChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CreationDate", &self.creation_date);
        shape.sensitive_field("Credential", &self.credential);
        shape.field("DefaultAuthenticationMethod", &self.default_authentication_method);
        shape.field("Enabled", &self.enabled);
        shape.field("HasCredential", &self.has_credential);
        shape.field("HasFcmServiceCredentials", &self.has_fcm_service_credentials);
        shape.field("Id", &self.id);
        shape.field("IsArchived", &self.is_archived);
        shape.field("LastModifiedBy", &self.last_modified_by);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Platform", &self.platform);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GCMChannelResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GCMChannelResponse`](crate::model::GCMChannelResponse).
pub mod gcm_channel_response {

    /// A builder for [`GCMChannelResponse`](crate::model::GCMChannelResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) credential: ::std::option::Option<::std::string::String>,
        pub(crate) default_authentication_method: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) has_credential: ::std::option::Option<bool>,
        pub(crate) has_fcm_service_credentials: ::std::option::Option<bool>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) is_archived: ::std::option::Option<bool>,
        pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) platform: ::std::option::Option<::std::string::String>,
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
        /// <p>The Web API Key that you received from Google to communicate with Google services.</p>
        pub fn credential(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.credential = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The Web API Key that you received from Google to communicate with Google services.</p>
        pub fn set_credential(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.credential = input;
            self
        }
        /// <p>The Web API Key that you received from Google to communicate with Google services.</p>
        pub fn get_credential(&self) -> &::std::option::Option<::std::string::String> {
            &self.credential
        }
        pub fn default_authentication_method(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.default_authentication_method = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn get_default_authentication_method(&self) -> &::std::option::Option<::std::string::String> {
            &self.default_authentication_method
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn get_has_credential(&self) -> &::std::option::Option<bool> {
            &self.has_credential
        }
        pub fn has_fcm_service_credentials(mut self, input: bool) -> Self {
            self.has_fcm_service_credentials = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_fcm_service_credentials(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_fcm_service_credentials = input;
            self
        }
        pub fn get_has_fcm_service_credentials(&self) -> &::std::option::Option<bool> {
            &self.has_fcm_service_credentials
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
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn get_is_archived(&self) -> &::std::option::Option<bool> {
            &self.is_archived
        }
        pub fn last_modified_by(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_by = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn get_last_modified_by(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_by
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
        /// Consumes the builder and constructs a [`GCMChannelResponse`](crate::model::GCMChannelResponse).
        pub fn build(self) -> crate::model::GCMChannelResponse {
            crate::model::GCMChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                credential: self.credential,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                has_credential: self.has_credential,
                has_fcm_service_credentials: self.has_fcm_service_credentials,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
    impl ::std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("application_id", &self.application_id);
            formatter.field("creation_date", &self.creation_date);
            formatter.field("credential", &"*** Sensitive Data Redacted ***");
            formatter.field("default_authentication_method", &self.default_authentication_method);
            formatter.field("enabled", &self.enabled);
            formatter.field("has_credential", &self.has_credential);
            formatter.field("has_fcm_service_credentials", &self.has_fcm_service_credentials);
            formatter.field("id", &self.id);
            formatter.field("is_archived", &self.is_archived);
            formatter.field("last_modified_by", &self.last_modified_by);
            formatter.field("last_modified_date", &self.last_modified_date);
            formatter.field("platform", &self.platform);
            formatter.field("version", &self.version);
            formatter.finish()
        }
    }
}

/// <p>Specifies the enablement status and settings of the SMS channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SMSChannelRequest {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) sender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ShortCode", skip_serializing_if = "Option::is_none")]
    pub(crate) short_code: ::std::option::Option<::std::string::String>,
}
impl SMSChannelRequest {
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn sender_id(&self) -> ::std::option::Option<&str> {
        self.sender_id.as_deref()
    }
    pub fn short_code(&self) -> ::std::option::Option<&str> {
        self.short_code.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SMSChannelRequest`](crate::model::SMSChannelRequest).
    pub fn builder() -> crate::model::sms_channel_request::Builder {
        crate::model::sms_channel_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::sms_channel_request::Builder {
        crate::model::sms_channel_request::Builder {
            enabled: self.enabled,
            sender_id: self.sender_id,
            short_code: self.short_code,
        }
    }
}
impl ::std::hash::Hash for SMSChannelRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.short_code, state);
    }
}
impl ::std::fmt::Display for SMSChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Enabled", &self.enabled);
        shape.field("SenderId", &self.sender_id);
        shape.field("ShortCode", &self.short_code);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SMSChannelRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SMSChannelRequest`](crate::model::SMSChannelRequest).
pub mod sms_channel_request {

    /// A builder for [`SMSChannelRequest`](crate::model::SMSChannelRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) sender_id: ::std::option::Option<::std::string::String>,
        pub(crate) short_code: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
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
        pub fn short_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.short_code = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_short_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.short_code = input;
            self
        }
        pub fn get_short_code(&self) -> &::std::option::Option<::std::string::String> {
            &self.short_code
        }
        /// Consumes the builder and constructs a [`SMSChannelRequest`](crate::model::SMSChannelRequest).
        pub fn build(self) -> crate::model::SMSChannelRequest {
            crate::model::SMSChannelRequest {
                enabled: self.enabled,
                sender_id: self.sender_id,
                short_code: self.short_code,
            }
        }
    }
}

/// <p>Provides information about the status and settings of the SMS channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SMSChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub(crate) has_credential: ::std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub(crate) is_archived: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<::std::string::String>,
    #[serde(rename = "PromotionalMessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub(crate) promotional_messages_per_second: ::std::option::Option<i32>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) sender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ShortCode", skip_serializing_if = "Option::is_none")]
    pub(crate) short_code: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TransactionalMessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub(crate) transactional_messages_per_second: ::std::option::Option<i32>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl SMSChannelResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn has_credential(&self) -> ::std::option::Option<bool> {
        self.has_credential
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn is_archived(&self) -> ::std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> ::std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn platform(&self) -> ::std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn promotional_messages_per_second(&self) -> ::std::option::Option<i32> {
        self.promotional_messages_per_second
    }
    pub fn sender_id(&self) -> ::std::option::Option<&str> {
        self.sender_id.as_deref()
    }
    pub fn short_code(&self) -> ::std::option::Option<&str> {
        self.short_code.as_deref()
    }
    pub fn transactional_messages_per_second(&self) -> ::std::option::Option<i32> {
        self.transactional_messages_per_second
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`SMSChannelResponse`](crate::model::SMSChannelResponse).
    pub fn builder() -> crate::model::sms_channel_response::Builder {
        crate::model::sms_channel_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::sms_channel_response::Builder {
        crate::model::sms_channel_response::Builder {
            application_id: self.application_id,
            creation_date: self.creation_date,
            enabled: self.enabled,
            has_credential: self.has_credential,
            id: self.id,
            is_archived: self.is_archived,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
            platform: self.platform,
            promotional_messages_per_second: self.promotional_messages_per_second,
            sender_id: self.sender_id,
            short_code: self.short_code,
            transactional_messages_per_second: self.transactional_messages_per_second,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for SMSChannelResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_archived, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_by, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.promotional_messages_per_second, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.short_code, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.transactional_messages_per_second, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for SMSChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Enabled", &self.enabled);
        shape.field("HasCredential", &self.has_credential);
        shape.field("Id", &self.id);
        shape.field("IsArchived", &self.is_archived);
        shape.field("LastModifiedBy", &self.last_modified_by);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Platform", &self.platform);
        shape.field("PromotionalMessagesPerSecond", &self.promotional_messages_per_second);
        shape.field("SenderId", &self.sender_id);
        shape.field("ShortCode", &self.short_code);
        shape.field("TransactionalMessagesPerSecond", &self.transactional_messages_per_second);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SMSChannelResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SMSChannelResponse`](crate::model::SMSChannelResponse).
pub mod sms_channel_response {

    /// A builder for [`SMSChannelResponse`](crate::model::SMSChannelResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) has_credential: ::std::option::Option<bool>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) is_archived: ::std::option::Option<bool>,
        pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) platform: ::std::option::Option<::std::string::String>,
        pub(crate) promotional_messages_per_second: ::std::option::Option<i32>,
        pub(crate) sender_id: ::std::option::Option<::std::string::String>,
        pub(crate) short_code: ::std::option::Option<::std::string::String>,
        pub(crate) transactional_messages_per_second: ::std::option::Option<i32>,
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
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn get_has_credential(&self) -> &::std::option::Option<bool> {
            &self.has_credential
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
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn get_is_archived(&self) -> &::std::option::Option<bool> {
            &self.is_archived
        }
        pub fn last_modified_by(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_by = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn get_last_modified_by(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_by
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
        pub fn promotional_messages_per_second(mut self, input: i32) -> Self {
            self.promotional_messages_per_second = ::std::option::Option::Some(input);
            self
        }
        pub fn set_promotional_messages_per_second(mut self, input: ::std::option::Option<i32>) -> Self {
            self.promotional_messages_per_second = input;
            self
        }
        pub fn get_promotional_messages_per_second(&self) -> &::std::option::Option<i32> {
            &self.promotional_messages_per_second
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
        pub fn short_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.short_code = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_short_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.short_code = input;
            self
        }
        pub fn get_short_code(&self) -> &::std::option::Option<::std::string::String> {
            &self.short_code
        }
        pub fn transactional_messages_per_second(mut self, input: i32) -> Self {
            self.transactional_messages_per_second = ::std::option::Option::Some(input);
            self
        }
        pub fn set_transactional_messages_per_second(mut self, input: ::std::option::Option<i32>) -> Self {
            self.transactional_messages_per_second = input;
            self
        }
        pub fn get_transactional_messages_per_second(&self) -> &::std::option::Option<i32> {
            &self.transactional_messages_per_second
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
        /// Consumes the builder and constructs a [`SMSChannelResponse`](crate::model::SMSChannelResponse).
        pub fn build(self) -> crate::model::SMSChannelResponse {
            crate::model::SMSChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                enabled: self.enabled,
                has_credential: self.has_credential,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                promotional_messages_per_second: self.promotional_messages_per_second,
                sender_id: self.sender_id,
                short_code: self.short_code,
                transactional_messages_per_second: self.transactional_messages_per_second,
                version: self.version,
            }
        }
    }
}

/// <p>Specifies the status and settings of the email channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailChannelRequest {
    #[serde(rename = "ConfigurationSet", skip_serializing_if = "Option::is_none")]
    pub(crate) configuration_set: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) from_address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Identity", skip_serializing_if = "Option::is_none")]
    pub(crate) identity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
}
impl EmailChannelRequest {
    pub fn configuration_set(&self) -> ::std::option::Option<&str> {
        self.configuration_set.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn from_address(&self) -> ::std::option::Option<&str> {
        self.from_address.as_deref()
    }
    pub fn identity(&self) -> ::std::option::Option<&str> {
        self.identity.as_deref()
    }
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EmailChannelRequest`](crate::model::EmailChannelRequest).
    pub fn builder() -> crate::model::email_channel_request::Builder {
        crate::model::email_channel_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_channel_request::Builder {
        crate::model::email_channel_request::Builder {
            configuration_set: self.configuration_set,
            enabled: self.enabled,
            from_address: self.from_address,
            identity: self.identity,
            role_arn: self.role_arn,
        }
    }
}
impl ::std::hash::Hash for EmailChannelRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.configuration_set, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.from_address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.identity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
    }
}
impl ::std::fmt::Display for EmailChannelRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ConfigurationSet", &self.configuration_set);
        shape.field("Enabled", &self.enabled);
        shape.field("FromAddress", &self.from_address);
        shape.field("Identity", &self.identity);
        shape.field("RoleArn", &self.role_arn);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailChannelRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailChannelRequest`](crate::model::EmailChannelRequest).
pub mod email_channel_request {

    /// A builder for [`EmailChannelRequest`](crate::model::EmailChannelRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) configuration_set: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) from_address: ::std::option::Option<::std::string::String>,
        pub(crate) identity: ::std::option::Option<::std::string::String>,
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn configuration_set(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.configuration_set = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_configuration_set(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.configuration_set = input;
            self
        }
        pub fn get_configuration_set(&self) -> &::std::option::Option<::std::string::String> {
            &self.configuration_set
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
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
        pub fn identity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.identity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_identity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.identity = input;
            self
        }
        pub fn get_identity(&self) -> &::std::option::Option<::std::string::String> {
            &self.identity
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
        /// Consumes the builder and constructs a [`EmailChannelRequest`](crate::model::EmailChannelRequest).
        pub fn build(self) -> crate::model::EmailChannelRequest {
            crate::model::EmailChannelRequest {
                configuration_set: self.configuration_set,
                enabled: self.enabled,
                from_address: self.from_address,
                identity: self.identity,
                role_arn: self.role_arn,
            }
        }
    }
}

/// <p>Provides information about the status and settings of the email channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailChannelResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ConfigurationSet", skip_serializing_if = "Option::is_none")]
    pub(crate) configuration_set: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub(crate) enabled: ::std::option::Option<bool>,
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) from_address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "HasCredential", skip_serializing_if = "Option::is_none")]
    pub(crate) has_credential: ::std::option::Option<bool>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Identity", skip_serializing_if = "Option::is_none")]
    pub(crate) identity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "IsArchived", skip_serializing_if = "Option::is_none")]
    pub(crate) is_archived: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub(crate) messages_per_second: ::std::option::Option<i32>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub(crate) platform: ::std::option::Option<::std::string::String>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
}
impl EmailChannelResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn configuration_set(&self) -> ::std::option::Option<&str> {
        self.configuration_set.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }
    pub fn from_address(&self) -> ::std::option::Option<&str> {
        self.from_address.as_deref()
    }
    pub fn has_credential(&self) -> ::std::option::Option<bool> {
        self.has_credential
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn identity(&self) -> ::std::option::Option<&str> {
        self.identity.as_deref()
    }
    pub fn is_archived(&self) -> ::std::option::Option<bool> {
        self.is_archived
    }
    pub fn last_modified_by(&self) -> ::std::option::Option<&str> {
        self.last_modified_by.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn messages_per_second(&self) -> ::std::option::Option<i32> {
        self.messages_per_second
    }
    pub fn platform(&self) -> ::std::option::Option<&str> {
        self.platform.as_deref()
    }
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    /// Creates a new builder-style object to manufacture [`EmailChannelResponse`](crate::model::EmailChannelResponse).
    pub fn builder() -> crate::model::email_channel_response::Builder {
        crate::model::email_channel_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_channel_response::Builder {
        crate::model::email_channel_response::Builder {
            application_id: self.application_id,
            configuration_set: self.configuration_set,
            creation_date: self.creation_date,
            enabled: self.enabled,
            from_address: self.from_address,
            has_credential: self.has_credential,
            id: self.id,
            identity: self.identity,
            is_archived: self.is_archived,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
            messages_per_second: self.messages_per_second,
            platform: self.platform,
            role_arn: self.role_arn,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for EmailChannelResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.configuration_set, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.enabled, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.from_address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.has_credential, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.identity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_archived, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_by, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.messages_per_second, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.platform, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for EmailChannelResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("ConfigurationSet", &self.configuration_set);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Enabled", &self.enabled);
        shape.field("FromAddress", &self.from_address);
        shape.field("HasCredential", &self.has_credential);
        shape.field("Id", &self.id);
        shape.field("Identity", &self.identity);
        shape.field("IsArchived", &self.is_archived);
        shape.field("LastModifiedBy", &self.last_modified_by);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("MessagesPerSecond", &self.messages_per_second);
        shape.field("Platform", &self.platform);
        shape.field("RoleArn", &self.role_arn);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailChannelResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailChannelResponse`](crate::model::EmailChannelResponse).
pub mod email_channel_response {

    /// A builder for [`EmailChannelResponse`](crate::model::EmailChannelResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) configuration_set: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) enabled: ::std::option::Option<bool>,
        pub(crate) from_address: ::std::option::Option<::std::string::String>,
        pub(crate) has_credential: ::std::option::Option<bool>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) identity: ::std::option::Option<::std::string::String>,
        pub(crate) is_archived: ::std::option::Option<bool>,
        pub(crate) last_modified_by: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) messages_per_second: ::std::option::Option<i32>,
        pub(crate) platform: ::std::option::Option<::std::string::String>,
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
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
        pub fn configuration_set(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.configuration_set = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_configuration_set(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.configuration_set = input;
            self
        }
        pub fn get_configuration_set(&self) -> &::std::option::Option<::std::string::String> {
            &self.configuration_set
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
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = ::std::option::Option::Some(input);
            self
        }
        pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn get_enabled(&self) -> &::std::option::Option<bool> {
            &self.enabled
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
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = ::std::option::Option::Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: ::std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn get_has_credential(&self) -> &::std::option::Option<bool> {
            &self.has_credential
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
        pub fn identity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.identity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_identity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.identity = input;
            self
        }
        pub fn get_identity(&self) -> &::std::option::Option<::std::string::String> {
            &self.identity
        }
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn get_is_archived(&self) -> &::std::option::Option<bool> {
            &self.is_archived
        }
        pub fn last_modified_by(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.last_modified_by = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn get_last_modified_by(&self) -> &::std::option::Option<::std::string::String> {
            &self.last_modified_by
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
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = ::std::option::Option::Some(input);
            self
        }
        pub fn set_messages_per_second(mut self, input: ::std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        pub fn get_messages_per_second(&self) -> &::std::option::Option<i32> {
            &self.messages_per_second
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
        /// Consumes the builder and constructs a [`EmailChannelResponse`](crate::model::EmailChannelResponse).
        pub fn build(self) -> crate::model::EmailChannelResponse {
            crate::model::EmailChannelResponse {
                application_id: self.application_id,
                configuration_set: self.configuration_set,
                creation_date: self.creation_date,
                enabled: self.enabled,
                from_address: self.from_address,
                has_credential: self.has_credential,
                id: self.id,
                identity: self.identity,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                messages_per_second: self.messages_per_second,
                platform: self.platform,
                role_arn: self.role_arn,
                version: self.version,
            }
        }
    }
}
