// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>Specifies a batch of events to process.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventsRequest {
    /// <p>The batch of events to process. For each item in a batch, the endpoint ID acts as a key that has an EventsBatch object as its value.</p>
    #[serde(rename = "BatchItem", skip_serializing_if = "Option::is_none")]
    pub(crate) batch_item: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventsBatch>>,
}
impl EventsRequest {
    /// <p>The batch of events to process. For each item in a batch, the endpoint ID acts as a key that has an EventsBatch object as its value.</p>
    pub fn batch_item(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::EventsBatch>> {
        self.batch_item.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EventsRequest`](crate::model::EventsRequest).
    pub fn builder() -> crate::model::events_request::Builder {
        crate::model::events_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::events_request::Builder {
        crate::model::events_request::Builder {
            batch_item: self.batch_item,
        }
    }
}
impl ::std::hash::Hash for EventsRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.batch_item, state);
    }
}
impl ::std::fmt::Display for EventsRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("BatchItem", &self.batch_item);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventsRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventsRequest`](crate::model::EventsRequest).
pub mod events_request {

    /// A builder for [`EventsRequest`](crate::model::EventsRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) batch_item: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventsBatch>>,
    }
    impl Builder {
        /// Adds a key-value pair to `batch_item`.
        ///
        /// To override the contents of this collection use [`set_batch_item`](Self::set_batch_item).
        ///
        /// <p>The batch of events to process. For each item in a batch, the endpoint ID acts as a key that has an EventsBatch object as its value.</p>
        pub fn batch_item(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::EventsBatch) -> Self {
            let mut hash_map = self.batch_item.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.batch_item = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>The batch of events to process. For each item in a batch, the endpoint ID acts as a key that has an EventsBatch object as its value.</p>
        pub fn set_batch_item(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventsBatch>>) -> Self {
            self.batch_item = input;
            self
        }
        /// <p>The batch of events to process. For each item in a batch, the endpoint ID acts as a key that has an EventsBatch object as its value.</p>
        pub fn get_batch_item(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventsBatch>> {
            &self.batch_item
        }
        /// Inserts a key-value pair into `batch_item`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_batch_item_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::EventsBatch,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.batch_item, "BatchItem", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`EventsRequest`](crate::model::EventsRequest).
        pub fn build(self) -> crate::model::EventsRequest {
            crate::model::EventsRequest {
                batch_item: self.batch_item,
            }
        }
    }
}

/// <p>Specifies a batch of endpoints and events to process.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventsBatch {
    #[serde(rename = "Endpoint", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint: ::std::option::Option<crate::model::PublicEndpoint>,
    #[serde(rename = "Events", skip_serializing_if = "Option::is_none")]
    pub(crate) events: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Event>>,
}
impl EventsBatch {
    pub fn endpoint(&self) -> ::std::option::Option<&crate::model::PublicEndpoint> {
        self.endpoint.as_ref()
    }
    pub fn events(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::Event>> {
        self.events.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EventsBatch`](crate::model::EventsBatch).
    pub fn builder() -> crate::model::events_batch::Builder {
        crate::model::events_batch::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::events_batch::Builder {
        crate::model::events_batch::Builder {
            endpoint: self.endpoint,
            events: self.events,
        }
    }
}
impl ::std::hash::Hash for EventsBatch {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.events, state);
    }
}
impl ::std::fmt::Display for EventsBatch {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Endpoint", &self.endpoint);
        shape.field("Events", &self.events);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventsBatch {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventsBatch`](crate::model::EventsBatch).
pub mod events_batch {

    /// A builder for [`EventsBatch`](crate::model::EventsBatch).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint: ::std::option::Option<crate::model::PublicEndpoint>,
        pub(crate) events: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Event>>,
    }
    impl Builder {
        pub fn endpoint(mut self, input: crate::model::PublicEndpoint) -> Self {
            self.endpoint = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint(mut self, input: ::std::option::Option<crate::model::PublicEndpoint>) -> Self {
            self.endpoint = input;
            self
        }
        pub fn get_endpoint(&self) -> &::std::option::Option<crate::model::PublicEndpoint> {
            &self.endpoint
        }
        /// Adds a key-value pair to `events`.
        ///
        /// To override the contents of this collection use [`set_events`](Self::set_events).
        ///
        pub fn events(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::Event) -> Self {
            let mut hash_map = self.events.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.events = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_events(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Event>>) -> Self {
            self.events = input;
            self
        }
        pub fn get_events(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Event>> {
            &self.events
        }
        /// Inserts a key-value pair into `events`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_events_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::Event,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.events, "Events", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`EventsBatch`](crate::model::EventsBatch).
        pub fn build(self) -> crate::model::EventsBatch {
            crate::model::EventsBatch {
                endpoint: self.endpoint,
                events: self.events,
            }
        }
    }
}

/// <p>Specifies the properties and attributes of an endpoint that's associated with an event.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct PublicEndpoint {
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
impl PublicEndpoint {
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
    /// Creates a new builder-style object to manufacture [`PublicEndpoint`](crate::model::PublicEndpoint).
    pub fn builder() -> crate::model::public_endpoint::Builder {
        crate::model::public_endpoint::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::public_endpoint::Builder {
        crate::model::public_endpoint::Builder {
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
impl ::std::hash::Hash for PublicEndpoint {
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
impl ::std::fmt::Display for PublicEndpoint {
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
impl ::smithy_types::shape::ShapeValue for PublicEndpoint {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`PublicEndpoint`](crate::model::PublicEndpoint).
pub mod public_endpoint {

    /// A builder for [`PublicEndpoint`](crate::model::PublicEndpoint).
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
        /// Consumes the builder and constructs a [`PublicEndpoint`](crate::model::PublicEndpoint).
        pub fn build(self) -> crate::model::PublicEndpoint {
            crate::model::PublicEndpoint {
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

/// <p>Specifies information about an event that reports data to Amazon Pinpoint.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Event {
    #[serde(rename = "AppPackageName", skip_serializing_if = "Option::is_none")]
    pub(crate) app_package_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "AppTitle", skip_serializing_if = "Option::is_none")]
    pub(crate) app_title: ::std::option::Option<::std::string::String>,
    #[serde(rename = "AppVersionCode", skip_serializing_if = "Option::is_none")]
    pub(crate) app_version_code: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "ClientSdkVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) client_sdk_version: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EventType", skip_serializing_if = "Option::is_none")]
    pub(crate) event_type: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
    #[serde(rename = "SdkName", skip_serializing_if = "Option::is_none")]
    pub(crate) sdk_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Session", skip_serializing_if = "Option::is_none")]
    pub(crate) session: ::std::option::Option<crate::model::Session>,
    #[serde(rename = "Timestamp", skip_serializing_if = "Option::is_none")]
    pub(crate) timestamp: ::std::option::Option<::std::string::String>,
}
impl Event {
    pub fn app_package_name(&self) -> ::std::option::Option<&str> {
        self.app_package_name.as_deref()
    }
    pub fn app_title(&self) -> ::std::option::Option<&str> {
        self.app_title.as_deref()
    }
    pub fn app_version_code(&self) -> ::std::option::Option<&str> {
        self.app_version_code.as_deref()
    }
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.attributes.as_ref()
    }
    pub fn client_sdk_version(&self) -> ::std::option::Option<&str> {
        self.client_sdk_version.as_deref()
    }
    pub fn event_type(&self) -> ::std::option::Option<&str> {
        self.event_type.as_deref()
    }
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, f64>> {
        self.metrics.as_ref()
    }
    pub fn sdk_name(&self) -> ::std::option::Option<&str> {
        self.sdk_name.as_deref()
    }
    pub fn session(&self) -> ::std::option::Option<&crate::model::Session> {
        self.session.as_ref()
    }
    pub fn timestamp(&self) -> ::std::option::Option<&str> {
        self.timestamp.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Event`](crate::model::Event).
    pub fn builder() -> crate::model::event::Builder {
        crate::model::event::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event::Builder {
        crate::model::event::Builder {
            app_package_name: self.app_package_name,
            app_title: self.app_title,
            app_version_code: self.app_version_code,
            attributes: self.attributes,
            client_sdk_version: self.client_sdk_version,
            event_type: self.event_type,
            metrics: self.metrics,
            sdk_name: self.sdk_name,
            session: self.session,
            timestamp: self.timestamp,
        }
    }
}
impl ::std::hash::Hash for Event {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.app_package_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.app_title, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.app_version_code, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.client_sdk_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sdk_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.session, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timestamp, state);
    }
}
impl ::std::fmt::Display for Event {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AppPackageName", &self.app_package_name);
        shape.field("AppTitle", &self.app_title);
        shape.field("AppVersionCode", &self.app_version_code);
        shape.field("Attributes", &self.attributes);
        shape.field("ClientSdkVersion", &self.client_sdk_version);
        shape.field("EventType", &self.event_type);
        shape.field("Metrics", &self.metrics);
        shape.field("SdkName", &self.sdk_name);
        shape.field("Session", &self.session);
        shape.field("Timestamp", &self.timestamp);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Event {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Event`](crate::model::Event).
pub mod event {

    /// A builder for [`Event`](crate::model::Event).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_package_name: ::std::option::Option<::std::string::String>,
        pub(crate) app_title: ::std::option::Option<::std::string::String>,
        pub(crate) app_version_code: ::std::option::Option<::std::string::String>,
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) client_sdk_version: ::std::option::Option<::std::string::String>,
        pub(crate) event_type: ::std::option::Option<::std::string::String>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>,
        pub(crate) sdk_name: ::std::option::Option<::std::string::String>,
        pub(crate) session: ::std::option::Option<crate::model::Session>,
        pub(crate) timestamp: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn app_package_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.app_package_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_app_package_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.app_package_name = input;
            self
        }
        pub fn get_app_package_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.app_package_name
        }
        pub fn app_title(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.app_title = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_app_title(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.app_title = input;
            self
        }
        pub fn get_app_title(&self) -> &::std::option::Option<::std::string::String> {
            &self.app_title
        }
        pub fn app_version_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.app_version_code = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_app_version_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.app_version_code = input;
            self
        }
        pub fn get_app_version_code(&self) -> &::std::option::Option<::std::string::String> {
            &self.app_version_code
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn get_attributes(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.attributes
        }
        /// Inserts a key-value pair into `attributes`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_attributes_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.attributes, "Attributes", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        pub fn client_sdk_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.client_sdk_version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_client_sdk_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.client_sdk_version = input;
            self
        }
        pub fn get_client_sdk_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.client_sdk_version
        }
        pub fn event_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.event_type = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_event_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.event_type = input;
            self
        }
        pub fn get_event_type(&self) -> &::std::option::Option<::std::string::String> {
            &self.event_type
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
        pub fn sdk_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.sdk_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_sdk_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.sdk_name = input;
            self
        }
        pub fn get_sdk_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.sdk_name
        }
        pub fn session(mut self, input: crate::model::Session) -> Self {
            self.session = ::std::option::Option::Some(input);
            self
        }
        pub fn set_session(mut self, input: ::std::option::Option<crate::model::Session>) -> Self {
            self.session = input;
            self
        }
        pub fn get_session(&self) -> &::std::option::Option<crate::model::Session> {
            &self.session
        }
        pub fn timestamp(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.timestamp = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_timestamp(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.timestamp = input;
            self
        }
        pub fn get_timestamp(&self) -> &::std::option::Option<::std::string::String> {
            &self.timestamp
        }
        /// Consumes the builder and constructs a [`Event`](crate::model::Event).
        pub fn build(self) -> crate::model::Event {
            crate::model::Event {
                app_package_name: self.app_package_name,
                app_title: self.app_title,
                app_version_code: self.app_version_code,
                attributes: self.attributes,
                client_sdk_version: self.client_sdk_version,
                event_type: self.event_type,
                metrics: self.metrics,
                sdk_name: self.sdk_name,
                session: self.session,
                timestamp: self.timestamp,
            }
        }
    }
}

/// <p>Provides information about a session.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Session {
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub(crate) duration: ::std::option::Option<i32>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StartTimestamp", skip_serializing_if = "Option::is_none")]
    pub(crate) start_timestamp: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StopTimestamp", skip_serializing_if = "Option::is_none")]
    pub(crate) stop_timestamp: ::std::option::Option<::std::string::String>,
}
impl Session {
    pub fn duration(&self) -> ::std::option::Option<i32> {
        self.duration
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn start_timestamp(&self) -> ::std::option::Option<&str> {
        self.start_timestamp.as_deref()
    }
    pub fn stop_timestamp(&self) -> ::std::option::Option<&str> {
        self.stop_timestamp.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Session`](crate::model::Session).
    pub fn builder() -> crate::model::session::Builder {
        crate::model::session::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::session::Builder {
        crate::model::session::Builder {
            duration: self.duration,
            id: self.id,
            start_timestamp: self.start_timestamp,
            stop_timestamp: self.stop_timestamp,
        }
    }
}
impl ::std::hash::Hash for Session {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.duration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_timestamp, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.stop_timestamp, state);
    }
}
impl ::std::fmt::Display for Session {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Duration", &self.duration);
        shape.field("Id", &self.id);
        shape.field("StartTimestamp", &self.start_timestamp);
        shape.field("StopTimestamp", &self.stop_timestamp);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Session {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Session`](crate::model::Session).
pub mod session {

    /// A builder for [`Session`](crate::model::Session).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) duration: ::std::option::Option<i32>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) start_timestamp: ::std::option::Option<::std::string::String>,
        pub(crate) stop_timestamp: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn duration(mut self, input: i32) -> Self {
            self.duration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_duration(mut self, input: ::std::option::Option<i32>) -> Self {
            self.duration = input;
            self
        }
        pub fn get_duration(&self) -> &::std::option::Option<i32> {
            &self.duration
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
        pub fn start_timestamp(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start_timestamp = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_start_timestamp(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start_timestamp = input;
            self
        }
        pub fn get_start_timestamp(&self) -> &::std::option::Option<::std::string::String> {
            &self.start_timestamp
        }
        pub fn stop_timestamp(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.stop_timestamp = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_stop_timestamp(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.stop_timestamp = input;
            self
        }
        pub fn get_stop_timestamp(&self) -> &::std::option::Option<::std::string::String> {
            &self.stop_timestamp
        }
        /// Consumes the builder and constructs a [`Session`](crate::model::Session).
        pub fn build(self) -> crate::model::Session {
            crate::model::Session {
                duration: self.duration,
                id: self.id,
                start_timestamp: self.start_timestamp,
                stop_timestamp: self.stop_timestamp,
            }
        }
    }
}

/// <p>Provides information about endpoints and the events that they're associated with.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventsResponse {
    #[serde(rename = "Results", skip_serializing_if = "Option::is_none")]
    pub(crate) results: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ItemResponse>>,
}
impl EventsResponse {
    pub fn results(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::ItemResponse>> {
        self.results.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EventsResponse`](crate::model::EventsResponse).
    pub fn builder() -> crate::model::events_response::Builder {
        crate::model::events_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::events_response::Builder {
        crate::model::events_response::Builder {
            results: self.results,
        }
    }
}
impl ::std::hash::Hash for EventsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.results, state);
    }
}
impl ::std::fmt::Display for EventsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Results", &self.results);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventsResponse`](crate::model::EventsResponse).
pub mod events_response {

    /// A builder for [`EventsResponse`](crate::model::EventsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) results: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ItemResponse>>,
    }
    impl Builder {
        /// Adds a key-value pair to `results`.
        ///
        /// To override the contents of this collection use [`set_results`](Self::set_results).
        ///
        pub fn results(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::ItemResponse) -> Self {
            let mut hash_map = self.results.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.results = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_results(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ItemResponse>>) -> Self {
            self.results = input;
            self
        }
        pub fn get_results(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::ItemResponse>> {
            &self.results
        }
        /// Inserts a key-value pair into `results`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_results_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::ItemResponse,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.results, "Results", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`EventsResponse`](crate::model::EventsResponse).
        pub fn build(self) -> crate::model::EventsResponse {
            crate::model::EventsResponse {
                results: self.results,
            }
        }
    }
}

/// <p>Provides information about the results of a request to create or update an endpoint that's associated with an event.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ItemResponse {
    #[serde(rename = "EndpointItemResponse", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_item_response: ::std::option::Option<crate::model::EndpointItemResponse>,
    #[serde(rename = "EventsItemResponse", skip_serializing_if = "Option::is_none")]
    pub(crate) events_item_response: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventItemResponse>>,
}
impl ItemResponse {
    pub fn endpoint_item_response(&self) -> ::std::option::Option<&crate::model::EndpointItemResponse> {
        self.endpoint_item_response.as_ref()
    }
    pub fn events_item_response(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::EventItemResponse>> {
        self.events_item_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ItemResponse`](crate::model::ItemResponse).
    pub fn builder() -> crate::model::item_response::Builder {
        crate::model::item_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::item_response::Builder {
        crate::model::item_response::Builder {
            endpoint_item_response: self.endpoint_item_response,
            events_item_response: self.events_item_response,
        }
    }
}
impl ::std::hash::Hash for ItemResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_item_response, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.events_item_response, state);
    }
}
impl ::std::fmt::Display for ItemResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndpointItemResponse", &self.endpoint_item_response);
        shape.field("EventsItemResponse", &self.events_item_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ItemResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ItemResponse`](crate::model::ItemResponse).
pub mod item_response {

    /// A builder for [`ItemResponse`](crate::model::ItemResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint_item_response: ::std::option::Option<crate::model::EndpointItemResponse>,
        pub(crate) events_item_response: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventItemResponse>>,
    }
    impl Builder {
        pub fn endpoint_item_response(mut self, input: crate::model::EndpointItemResponse) -> Self {
            self.endpoint_item_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_item_response(mut self, input: ::std::option::Option<crate::model::EndpointItemResponse>) -> Self {
            self.endpoint_item_response = input;
            self
        }
        pub fn get_endpoint_item_response(&self) -> &::std::option::Option<crate::model::EndpointItemResponse> {
            &self.endpoint_item_response
        }
        /// Adds a key-value pair to `events_item_response`.
        ///
        /// To override the contents of this collection use [`set_events_item_response`](Self::set_events_item_response).
        ///
        pub fn events_item_response(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::EventItemResponse) -> Self {
            let mut hash_map = self.events_item_response.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.events_item_response = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_events_item_response(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventItemResponse>>) -> Self {
            self.events_item_response = input;
            self
        }
        pub fn get_events_item_response(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::EventItemResponse>> {
            &self.events_item_response
        }
        /// Inserts a key-value pair into `events_item_response`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_events_item_response_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::EventItemResponse,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.events_item_response, "EventsItemResponse", k.into(), v)?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`ItemResponse`](crate::model::ItemResponse).
        pub fn build(self) -> crate::model::ItemResponse {
            crate::model::ItemResponse {
                endpoint_item_response: self.endpoint_item_response,
                events_item_response: self.events_item_response,
            }
        }
    }
}

/// <p>Provides the status code and message that result from processing an event.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventItemResponse {
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub(crate) message: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    pub(crate) status_code: ::std::option::Option<i32>,
}
impl EventItemResponse {
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn status_code(&self) -> ::std::option::Option<i32> {
        self.status_code
    }
    /// Creates a new builder-style object to manufacture [`EventItemResponse`](crate::model::EventItemResponse).
    pub fn builder() -> crate::model::event_item_response::Builder {
        crate::model::event_item_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event_item_response::Builder {
        crate::model::event_item_response::Builder {
            message: self.message,
            status_code: self.status_code,
        }
    }
}
impl ::std::hash::Hash for EventItemResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.status_code, state);
    }
}
impl ::std::fmt::Display for EventItemResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Message", &self.message);
        shape.field("StatusCode", &self.status_code);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventItemResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventItemResponse`](crate::model::EventItemResponse).
pub mod event_item_response {

    /// A builder for [`EventItemResponse`](crate::model::EventItemResponse).
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
        /// Consumes the builder and constructs a [`EventItemResponse`](crate::model::EventItemResponse).
        pub fn build(self) -> crate::model::EventItemResponse {
            crate::model::EventItemResponse {
                message: self.message,
                status_code: self.status_code,
            }
        }
    }
}
