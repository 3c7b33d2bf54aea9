// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The status of a journey.</p>
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
pub enum State {
    #[allow(missing_docs)] // documentation missing in model
    Draft,
    #[allow(missing_docs)] // documentation missing in model
    Active,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Closed,
    #[allow(missing_docs)] // documentation missing in model
    Paused,
}
impl State {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Draft => "DRAFT",
            State::Active => "ACTIVE",
            State::Completed => "COMPLETED",
            State::Cancelled => "CANCELLED",
            State::Closed => "CLOSED",
            State::Paused => "PAUSED",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["DRAFT", "ACTIVE", "COMPLETED", "CANCELLED", "CLOSED", "PAUSED"]
    }
}
impl ::std::str::FromStr for State {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "DRAFT" => ::std::result::Result::Ok(State::Draft),
            "ACTIVE" => ::std::result::Result::Ok(State::Active),
            "COMPLETED" => ::std::result::Result::Ok(State::Completed),
            "CANCELLED" => ::std::result::Result::Ok(State::Cancelled),
            "CLOSED" => ::std::result::Result::Ok(State::Closed),
            "PAUSED" => ::std::result::Result::Ok(State::Paused),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("State")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("State", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for State {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for State {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for State {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for State {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for State {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How the conditions of a multiple-condition split are evaluated.</p>
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
pub enum Operator {
    #[allow(missing_docs)] // documentation missing in model
    All,
    #[allow(missing_docs)] // documentation missing in model
    Any,
}
impl Operator {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::All => "ALL",
            Operator::Any => "ANY",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ALL", "ANY"]
    }
}
impl ::std::str::FromStr for Operator {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => ::std::result::Result::Ok(Operator::All),
            "ANY" => ::std::result::Result::Ok(Operator::Any),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Operator")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Operator", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Operator {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Operator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Operator {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Operator {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Provides information about the status, configuration, and other settings for a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneyResponse {
    /// <p>A map that contains a set of Activity objects, one object for each activity in the journey. For each Activity object, the key is the unique identifier for the activity and the value is the settings for the activity.</p>
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    pub(crate) activities: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>,
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::JourneyLimits>,
    /// <p>Specifies whether the journey's scheduled start and end times use each participant's local time.</p>
    #[serde(rename = "LocalTime", skip_serializing_if = "Option::is_none")]
    pub(crate) local_time: ::std::option::Option<bool>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
    /// <p>The frequency with which Amazon Pinpoint evaluates segment and event data for the journey, as a duration in ISO 8601 format.</p>
    #[serde(rename = "RefreshFrequency", skip_serializing_if = "Option::is_none")]
    pub(crate) refresh_frequency: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::JourneySchedule>,
    #[serde(rename = "StartActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) start_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StartCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) start_condition: ::std::option::Option<crate::model::StartCondition>,
    /// <p>The current status of the journey.</p>
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<crate::model::State>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
}
impl JourneyResponse {
    /// <p>A map that contains a set of Activity objects, one object for each activity in the journey. For each Activity object, the key is the unique identifier for the activity and the value is the settings for the activity.</p>
    pub fn activities(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::Activity>> {
        self.activities.as_ref()
    }
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> ::std::option::Option<&crate::model::JourneyLimits> {
        self.limits.as_ref()
    }
    /// <p>Specifies whether the journey's scheduled start and end times use each participant's local time.</p>
    pub fn local_time(&self) -> ::std::option::Option<bool> {
        self.local_time
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn quiet_time(&self) -> ::std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    /// <p>The frequency with which Amazon Pinpoint evaluates segment and event data for the journey, as a duration in ISO 8601 format.</p>
    pub fn refresh_frequency(&self) -> ::std::option::Option<&str> {
        self.refresh_frequency.as_deref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::JourneySchedule> {
        self.schedule.as_ref()
    }
    pub fn start_activity(&self) -> ::std::option::Option<&str> {
        self.start_activity.as_deref()
    }
    pub fn start_condition(&self) -> ::std::option::Option<&crate::model::StartCondition> {
        self.start_condition.as_ref()
    }
    /// <p>The current status of the journey.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::model::State> {
        self.state.as_ref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`JourneyResponse`](crate::model::JourneyResponse).
    pub fn builder() -> crate::model::journey_response::Builder {
        crate::model::journey_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journey_response::Builder {
        crate::model::journey_response::Builder {
            activities: self.activities,
            application_id: self.application_id,
            creation_date: self.creation_date,
            id: self.id,
            last_modified_date: self.last_modified_date,
            limits: self.limits,
            local_time: self.local_time,
            name: self.name,
            quiet_time: self.quiet_time,
            refresh_frequency: self.refresh_frequency,
            schedule: self.schedule,
            start_activity: self.start_activity,
            start_condition: self.start_condition,
            state: self.state,
            tags: self.tags,
        }
    }
}
impl ::std::hash::Hash for JourneyResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.activities, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.local_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.quiet_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.refresh_frequency, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
    }
}
impl ::std::fmt::Display for JourneyResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Activities", &self.activities);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Id", &self.id);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Limits", &self.limits);
        shape.field("LocalTime", &self.local_time);
        shape.field("Name", &self.name);
        shape.field("QuietTime", &self.quiet_time);
        shape.field("RefreshFrequency", &self.refresh_frequency);
        shape.field("Schedule", &self.schedule);
        shape.field("StartActivity", &self.start_activity);
        shape.field("StartCondition", &self.start_condition);
        shape.field("State", &self.state);
        shape.field("tags", &self.tags);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneyResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneyResponse`](crate::model::JourneyResponse).
pub mod journey_response {

    /// A builder for [`JourneyResponse`](crate::model::JourneyResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>,
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) limits: ::std::option::Option<crate::model::JourneyLimits>,
        pub(crate) local_time: ::std::option::Option<bool>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
        pub(crate) refresh_frequency: ::std::option::Option<::std::string::String>,
        pub(crate) schedule: ::std::option::Option<crate::model::JourneySchedule>,
        pub(crate) start_activity: ::std::option::Option<::std::string::String>,
        pub(crate) start_condition: ::std::option::Option<crate::model::StartCondition>,
        pub(crate) state: ::std::option::Option<crate::model::State>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    }
    impl Builder {
        /// Adds a key-value pair to `activities`.
        ///
        /// To override the contents of this collection use [`set_activities`](Self::set_activities).
        ///
        /// <p>A map that contains a set of Activity objects, one object for each activity in the journey. For each Activity object, the key is the unique identifier for the activity and the value is the settings for the activity.</p>
        pub fn activities(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::Activity) -> Self {
            let mut hash_map = self.activities.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.activities = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>A map that contains a set of Activity objects, one object for each activity in the journey. For each Activity object, the key is the unique identifier for the activity and the value is the settings for the activity.</p>
        pub fn set_activities(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>) -> Self {
            self.activities = input;
            self
        }
        /// <p>A map that contains a set of Activity objects, one object for each activity in the journey. For each Activity object, the key is the unique identifier for the activity and the value is the settings for the activity.</p>
        pub fn get_activities(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>> {
            &self.activities
        }
        /// Inserts a key-value pair into `activities`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_activities_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::Activity,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.activities, "Activities", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        pub fn limits(mut self, input: crate::model::JourneyLimits) -> Self {
            self.limits = ::std::option::Option::Some(input);
            self
        }
        pub fn set_limits(mut self, input: ::std::option::Option<crate::model::JourneyLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn get_limits(&self) -> &::std::option::Option<crate::model::JourneyLimits> {
            &self.limits
        }
        /// <p>Specifies whether the journey's scheduled start and end times use each participant's local time.</p>
        pub fn local_time(mut self, input: bool) -> Self {
            self.local_time = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether the journey's scheduled start and end times use each participant's local time.</p>
        pub fn set_local_time(mut self, input: ::std::option::Option<bool>) -> Self {
            self.local_time = input;
            self
        }
        /// <p>Specifies whether the journey's scheduled start and end times use each participant's local time.</p>
        pub fn get_local_time(&self) -> &::std::option::Option<bool> {
            &self.local_time
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
        /// <p>The frequency with which Amazon Pinpoint evaluates segment and event data for the journey, as a duration in ISO 8601 format.</p>
        pub fn refresh_frequency(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.refresh_frequency = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The frequency with which Amazon Pinpoint evaluates segment and event data for the journey, as a duration in ISO 8601 format.</p>
        pub fn set_refresh_frequency(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.refresh_frequency = input;
            self
        }
        /// <p>The frequency with which Amazon Pinpoint evaluates segment and event data for the journey, as a duration in ISO 8601 format.</p>
        pub fn get_refresh_frequency(&self) -> &::std::option::Option<::std::string::String> {
            &self.refresh_frequency
        }
        pub fn schedule(mut self, input: crate::model::JourneySchedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::JourneySchedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::JourneySchedule> {
            &self.schedule
        }
        pub fn start_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_start_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start_activity = input;
            self
        }
        pub fn get_start_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.start_activity
        }
        pub fn start_condition(mut self, input: crate::model::StartCondition) -> Self {
            self.start_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_start_condition(mut self, input: ::std::option::Option<crate::model::StartCondition>) -> Self {
            self.start_condition = input;
            self
        }
        pub fn get_start_condition(&self) -> &::std::option::Option<crate::model::StartCondition> {
            &self.start_condition
        }
        /// <p>The current status of the journey.</p>
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = ::std::option::Option::Some(input);
            self
        }
        /// <p>The current status of the journey.</p>
        pub fn set_state(mut self, input: ::std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        /// <p>The current status of the journey.</p>
        pub fn get_state(&self) -> &::std::option::Option<crate::model::State> {
            &self.state
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
        /// Consumes the builder and constructs a [`JourneyResponse`](crate::model::JourneyResponse).
        pub fn build(self) -> crate::model::JourneyResponse {
            crate::model::JourneyResponse {
                activities: self.activities,
                application_id: self.application_id,
                creation_date: self.creation_date,
                id: self.id,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                local_time: self.local_time,
                name: self.name,
                quiet_time: self.quiet_time,
                refresh_frequency: self.refresh_frequency,
                schedule: self.schedule,
                start_activity: self.start_activity,
                start_condition: self.start_condition,
                state: self.state,
                tags: self.tags,
            }
        }
    }
}

/// <p>Provides information about the status, configuration, and other settings for all the journeys that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneysResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::JourneyResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl JourneysResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::JourneyResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`JourneysResponse`](crate::model::JourneysResponse).
    pub fn builder() -> crate::model::journeys_response::Builder {
        crate::model::journeys_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journeys_response::Builder {
        crate::model::journeys_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for JourneysResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for JourneysResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneysResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneysResponse`](crate::model::JourneysResponse).
pub mod journeys_response {

    /// A builder for [`JourneysResponse`](crate::model::JourneysResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::JourneyResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::JourneyResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::JourneyResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::JourneyResponse>> {
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
        /// Consumes the builder and constructs a [`JourneysResponse`](crate::model::JourneysResponse).
        pub fn build(self) -> crate::model::JourneysResponse {
            crate::model::JourneysResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Specifies the configuration and other settings for a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WriteJourneyRequest {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    pub(crate) activities: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::JourneyLimits>,
    #[serde(rename = "LocalTime", skip_serializing_if = "Option::is_none")]
    pub(crate) local_time: ::std::option::Option<bool>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
    #[serde(rename = "RefreshFrequency", skip_serializing_if = "Option::is_none")]
    pub(crate) refresh_frequency: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::JourneySchedule>,
    #[serde(rename = "StartActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) start_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StartCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) start_condition: ::std::option::Option<crate::model::StartCondition>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<crate::model::State>,
}
impl WriteJourneyRequest {
    pub fn activities(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::Activity>> {
        self.activities.as_ref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> ::std::option::Option<&crate::model::JourneyLimits> {
        self.limits.as_ref()
    }
    pub fn local_time(&self) -> ::std::option::Option<bool> {
        self.local_time
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn quiet_time(&self) -> ::std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    pub fn refresh_frequency(&self) -> ::std::option::Option<&str> {
        self.refresh_frequency.as_deref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::JourneySchedule> {
        self.schedule.as_ref()
    }
    pub fn start_activity(&self) -> ::std::option::Option<&str> {
        self.start_activity.as_deref()
    }
    pub fn start_condition(&self) -> ::std::option::Option<&crate::model::StartCondition> {
        self.start_condition.as_ref()
    }
    pub fn state(&self) -> ::std::option::Option<&crate::model::State> {
        self.state.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`WriteJourneyRequest`](crate::model::WriteJourneyRequest).
    pub fn builder() -> crate::model::write_journey_request::Builder {
        crate::model::write_journey_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::write_journey_request::Builder {
        crate::model::write_journey_request::Builder {
            activities: self.activities,
            creation_date: self.creation_date,
            last_modified_date: self.last_modified_date,
            limits: self.limits,
            local_time: self.local_time,
            name: self.name,
            quiet_time: self.quiet_time,
            refresh_frequency: self.refresh_frequency,
            schedule: self.schedule,
            start_activity: self.start_activity,
            start_condition: self.start_condition,
            state: self.state,
        }
    }
}
impl ::std::hash::Hash for WriteJourneyRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.activities, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.local_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.quiet_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.refresh_frequency, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
    }
}
impl ::std::fmt::Display for WriteJourneyRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Activities", &self.activities);
        shape.field("CreationDate", &self.creation_date);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Limits", &self.limits);
        shape.field("LocalTime", &self.local_time);
        shape.field("Name", &self.name);
        shape.field("QuietTime", &self.quiet_time);
        shape.field("RefreshFrequency", &self.refresh_frequency);
        shape.field("Schedule", &self.schedule);
        shape.field("StartActivity", &self.start_activity);
        shape.field("StartCondition", &self.start_condition);
        shape.field("State", &self.state);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WriteJourneyRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WriteJourneyRequest`](crate::model::WriteJourneyRequest).
pub mod write_journey_request {

    /// A builder for [`WriteJourneyRequest`](crate::model::WriteJourneyRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) limits: ::std::option::Option<crate::model::JourneyLimits>,
        pub(crate) local_time: ::std::option::Option<bool>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
        pub(crate) refresh_frequency: ::std::option::Option<::std::string::String>,
        pub(crate) schedule: ::std::option::Option<crate::model::JourneySchedule>,
        pub(crate) start_activity: ::std::option::Option<::std::string::String>,
        pub(crate) start_condition: ::std::option::Option<crate::model::StartCondition>,
        pub(crate) state: ::std::option::Option<crate::model::State>,
    }
    impl Builder {
        /// Adds a key-value pair to `activities`.
        ///
        /// To override the contents of this collection use [`set_activities`](Self::set_activities).
        ///
        pub fn activities(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::Activity) -> Self {
            let mut hash_map = self.activities.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.activities = ::std::option::Option::Some(hash_map);
            self
        }
        pub fn set_activities(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>>) -> Self {
            self.activities = input;
            self
        }
        pub fn get_activities(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::Activity>> {
            &self.activities
        }
        /// Inserts a key-value pair into `activities`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_activities_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: crate::model::Activity,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.activities, "Activities", k.into(), v)?;
            ::std::result::Result::Ok(self)
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
        pub fn limits(mut self, input: crate::model::JourneyLimits) -> Self {
            self.limits = ::std::option::Option::Some(input);
            self
        }
        pub fn set_limits(mut self, input: ::std::option::Option<crate::model::JourneyLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn get_limits(&self) -> &::std::option::Option<crate::model::JourneyLimits> {
            &self.limits
        }
        pub fn local_time(mut self, input: bool) -> Self {
            self.local_time = ::std::option::Option::Some(input);
            self
        }
        pub fn set_local_time(mut self, input: ::std::option::Option<bool>) -> Self {
            self.local_time = input;
            self
        }
        pub fn get_local_time(&self) -> &::std::option::Option<bool> {
            &self.local_time
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
        pub fn refresh_frequency(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.refresh_frequency = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_refresh_frequency(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.refresh_frequency = input;
            self
        }
        pub fn get_refresh_frequency(&self) -> &::std::option::Option<::std::string::String> {
            &self.refresh_frequency
        }
        pub fn schedule(mut self, input: crate::model::JourneySchedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::JourneySchedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::JourneySchedule> {
            &self.schedule
        }
        pub fn start_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_start_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start_activity = input;
            self
        }
        pub fn get_start_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.start_activity
        }
        pub fn start_condition(mut self, input: crate::model::StartCondition) -> Self {
            self.start_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_start_condition(mut self, input: ::std::option::Option<crate::model::StartCondition>) -> Self {
            self.start_condition = input;
            self
        }
        pub fn get_start_condition(&self) -> &::std::option::Option<crate::model::StartCondition> {
            &self.start_condition
        }
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = ::std::option::Option::Some(input);
            self
        }
        pub fn set_state(mut self, input: ::std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &::std::option::Option<crate::model::State> {
            &self.state
        }
        /// Consumes the builder and constructs a [`WriteJourneyRequest`](crate::model::WriteJourneyRequest).
        pub fn build(self) -> crate::model::WriteJourneyRequest {
            crate::model::WriteJourneyRequest {
                activities: self.activities,
                creation_date: self.creation_date,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                local_time: self.local_time,
                name: self.name,
                quiet_time: self.quiet_time,
                refresh_frequency: self.refresh_frequency,
                schedule: self.schedule,
                start_activity: self.start_activity,
                start_condition: self.start_condition,
                state: self.state,
            }
        }
    }
}

/// <p>Changes the status of a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneyStateRequest {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<crate::model::State>,
}
impl JourneyStateRequest {
    pub fn state(&self) -> ::std::option::Option<&crate::model::State> {
        self.state.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`JourneyStateRequest`](crate::model::JourneyStateRequest).
    pub fn builder() -> crate::model::journey_state_request::Builder {
        crate::model::journey_state_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journey_state_request::Builder {
        crate::model::journey_state_request::Builder {
            state: self.state,
        }
    }
}
impl ::std::hash::Hash for JourneyStateRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
    }
}
impl ::std::fmt::Display for JourneyStateRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("State", &self.state);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneyStateRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneyStateRequest`](crate::model::JourneyStateRequest).
pub mod journey_state_request {

    /// A builder for [`JourneyStateRequest`](crate::model::JourneyStateRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) state: ::std::option::Option<crate::model::State>,
    }
    impl Builder {
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = ::std::option::Option::Some(input);
            self
        }
        pub fn set_state(mut self, input: ::std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &::std::option::Option<crate::model::State> {
            &self.state
        }
        /// Consumes the builder and constructs a [`JourneyStateRequest`](crate::model::JourneyStateRequest).
        pub fn build(self) -> crate::model::JourneyStateRequest {
            crate::model::JourneyStateRequest {
                state: self.state,
            }
        }
    }
}

/// <p>Specifies limits on the messages that a journey can send and the number of times participants can enter a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneyLimits {
    #[serde(rename = "DailyCap", skip_serializing_if = "Option::is_none")]
    pub(crate) daily_cap: ::std::option::Option<i32>,
    #[serde(rename = "EndpointReentryCap", skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint_reentry_cap: ::std::option::Option<i32>,
    #[serde(rename = "MessagesPerSecond", skip_serializing_if = "Option::is_none")]
    pub(crate) messages_per_second: ::std::option::Option<i32>,
}
impl JourneyLimits {
    pub fn daily_cap(&self) -> ::std::option::Option<i32> {
        self.daily_cap
    }
    pub fn endpoint_reentry_cap(&self) -> ::std::option::Option<i32> {
        self.endpoint_reentry_cap
    }
    pub fn messages_per_second(&self) -> ::std::option::Option<i32> {
        self.messages_per_second
    }
    /// Creates a new builder-style object to manufacture [`JourneyLimits`](crate::model::JourneyLimits).
    pub fn builder() -> crate::model::journey_limits::Builder {
        crate::model::journey_limits::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journey_limits::Builder {
        crate::model::journey_limits::Builder {
            daily_cap: self.daily_cap,
            endpoint_reentry_cap: self.endpoint_reentry_cap,
            messages_per_second: self.messages_per_second,
        }
    }
}
impl ::std::hash::Hash for JourneyLimits {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.daily_cap, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_reentry_cap, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.messages_per_second, state);
    }
}
impl ::std::fmt::Display for JourneyLimits {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DailyCap", &self.daily_cap);
        shape.field("EndpointReentryCap", &self.endpoint_reentry_cap);
        shape.field("MessagesPerSecond", &self.messages_per_second);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneyLimits {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneyLimits`](crate::model::JourneyLimits).
pub mod journey_limits {

    /// A builder for [`JourneyLimits`](crate::model::JourneyLimits).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily_cap: ::std::option::Option<i32>,
        pub(crate) endpoint_reentry_cap: ::std::option::Option<i32>,
        pub(crate) messages_per_second: ::std::option::Option<i32>,
    }
    impl Builder {
        pub fn daily_cap(mut self, input: i32) -> Self {
            self.daily_cap = ::std::option::Option::Some(input);
            self
        }
        pub fn set_daily_cap(mut self, input: ::std::option::Option<i32>) -> Self {
            self.daily_cap = input;
            self
        }
        pub fn get_daily_cap(&self) -> &::std::option::Option<i32> {
            &self.daily_cap
        }
        pub fn endpoint_reentry_cap(mut self, input: i32) -> Self {
            self.endpoint_reentry_cap = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_reentry_cap(mut self, input: ::std::option::Option<i32>) -> Self {
            self.endpoint_reentry_cap = input;
            self
        }
        pub fn get_endpoint_reentry_cap(&self) -> &::std::option::Option<i32> {
            &self.endpoint_reentry_cap
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
        /// Consumes the builder and constructs a [`JourneyLimits`](crate::model::JourneyLimits).
        pub fn build(self) -> crate::model::JourneyLimits {
            crate::model::JourneyLimits {
                daily_cap: self.daily_cap,
                endpoint_reentry_cap: self.endpoint_reentry_cap,
                messages_per_second: self.messages_per_second,
            }
        }
    }
}

/// <p>Specifies the schedule settings for a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneySchedule {
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub(crate) end_time: ::std::option::Option<::std::string::String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub(crate) start_time: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub(crate) timezone: ::std::option::Option<::std::string::String>,
}
impl JourneySchedule {
    pub fn end_time(&self) -> ::std::option::Option<&str> {
        self.end_time.as_deref()
    }
    pub fn start_time(&self) -> ::std::option::Option<&str> {
        self.start_time.as_deref()
    }
    pub fn timezone(&self) -> ::std::option::Option<&str> {
        self.timezone.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`JourneySchedule`](crate::model::JourneySchedule).
    pub fn builder() -> crate::model::journey_schedule::Builder {
        crate::model::journey_schedule::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journey_schedule::Builder {
        crate::model::journey_schedule::Builder {
            end_time: self.end_time,
            start_time: self.start_time,
            timezone: self.timezone,
        }
    }
}
impl ::std::hash::Hash for JourneySchedule {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.end_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timezone, state);
    }
}
impl ::std::fmt::Display for JourneySchedule {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndTime", &self.end_time);
        shape.field("StartTime", &self.start_time);
        shape.field("Timezone", &self.timezone);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneySchedule {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneySchedule`](crate::model::JourneySchedule).
pub mod journey_schedule {

    /// A builder for [`JourneySchedule`](crate::model::JourneySchedule).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: ::std::option::Option<::std::string::String>,
        pub(crate) start_time: ::std::option::Option<::std::string::String>,
        pub(crate) timezone: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn end_time(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.end_time = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_end_time(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.end_time = input;
            self
        }
        pub fn get_end_time(&self) -> &::std::option::Option<::std::string::String> {
            &self.end_time
        }
        pub fn start_time(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start_time = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_start_time(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start_time = input;
            self
        }
        pub fn get_start_time(&self) -> &::std::option::Option<::std::string::String> {
            &self.start_time
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
        /// Consumes the builder and constructs a [`JourneySchedule`](crate::model::JourneySchedule).
        pub fn build(self) -> crate::model::JourneySchedule {
            crate::model::JourneySchedule {
                end_time: self.end_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}

/// <p>Specifies the conditions for the first activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct StartCondition {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub(crate) description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EventStartCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) event_start_condition: ::std::option::Option<crate::model::EventStartCondition>,
    #[serde(rename = "SegmentStartCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_start_condition: ::std::option::Option<crate::model::SegmentCondition>,
}
impl StartCondition {
    pub fn description(&self) -> ::std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn event_start_condition(&self) -> ::std::option::Option<&crate::model::EventStartCondition> {
        self.event_start_condition.as_ref()
    }
    pub fn segment_start_condition(&self) -> ::std::option::Option<&crate::model::SegmentCondition> {
        self.segment_start_condition.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`StartCondition`](crate::model::StartCondition).
    pub fn builder() -> crate::model::start_condition::Builder {
        crate::model::start_condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::start_condition::Builder {
        crate::model::start_condition::Builder {
            description: self.description,
            event_start_condition: self.event_start_condition,
            segment_start_condition: self.segment_start_condition,
        }
    }
}
impl ::std::hash::Hash for StartCondition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_start_condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_start_condition, state);
    }
}
impl ::std::fmt::Display for StartCondition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Description", &self.description);
        shape.field("EventStartCondition", &self.event_start_condition);
        shape.field("SegmentStartCondition", &self.segment_start_condition);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for StartCondition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`StartCondition`](crate::model::StartCondition).
pub mod start_condition {

    /// A builder for [`StartCondition`](crate::model::StartCondition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: ::std::option::Option<::std::string::String>,
        pub(crate) event_start_condition: ::std::option::Option<crate::model::EventStartCondition>,
        pub(crate) segment_start_condition: ::std::option::Option<crate::model::SegmentCondition>,
    }
    impl Builder {
        pub fn description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn get_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.description
        }
        pub fn event_start_condition(mut self, input: crate::model::EventStartCondition) -> Self {
            self.event_start_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_event_start_condition(mut self, input: ::std::option::Option<crate::model::EventStartCondition>) -> Self {
            self.event_start_condition = input;
            self
        }
        pub fn get_event_start_condition(&self) -> &::std::option::Option<crate::model::EventStartCondition> {
            &self.event_start_condition
        }
        pub fn segment_start_condition(mut self, input: crate::model::SegmentCondition) -> Self {
            self.segment_start_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_start_condition(mut self, input: ::std::option::Option<crate::model::SegmentCondition>) -> Self {
            self.segment_start_condition = input;
            self
        }
        pub fn get_segment_start_condition(&self) -> &::std::option::Option<crate::model::SegmentCondition> {
            &self.segment_start_condition
        }
        /// Consumes the builder and constructs a [`StartCondition`](crate::model::StartCondition).
        pub fn build(self) -> crate::model::StartCondition {
            crate::model::StartCondition {
                description: self.description,
                event_start_condition: self.event_start_condition,
                segment_start_condition: self.segment_start_condition,
            }
        }
    }
}

/// <p>Specifies the settings for an event that causes a journey activity to start.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventStartCondition {
    #[serde(rename = "EventFilter", skip_serializing_if = "Option::is_none")]
    pub(crate) event_filter: ::std::option::Option<crate::model::EventFilter>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
}
impl EventStartCondition {
    pub fn event_filter(&self) -> ::std::option::Option<&crate::model::EventFilter> {
        self.event_filter.as_ref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EventStartCondition`](crate::model::EventStartCondition).
    pub fn builder() -> crate::model::event_start_condition::Builder {
        crate::model::event_start_condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event_start_condition::Builder {
        crate::model::event_start_condition::Builder {
            event_filter: self.event_filter,
            segment_id: self.segment_id,
        }
    }
}
impl ::std::hash::Hash for EventStartCondition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_filter, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
    }
}
impl ::std::fmt::Display for EventStartCondition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EventFilter", &self.event_filter);
        shape.field("SegmentId", &self.segment_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventStartCondition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventStartCondition`](crate::model::EventStartCondition).
pub mod event_start_condition {

    /// A builder for [`EventStartCondition`](crate::model::EventStartCondition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) event_filter: ::std::option::Option<crate::model::EventFilter>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn event_filter(mut self, input: crate::model::EventFilter) -> Self {
            self.event_filter = ::std::option::Option::Some(input);
            self
        }
        pub fn set_event_filter(mut self, input: ::std::option::Option<crate::model::EventFilter>) -> Self {
            self.event_filter = input;
            self
        }
        pub fn get_event_filter(&self) -> &::std::option::Option<crate::model::EventFilter> {
            &self.event_filter
        }
        pub fn segment_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.segment_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn get_segment_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.segment_id
        }
        /// Consumes the builder and constructs a [`EventStartCondition`](crate::model::EventStartCondition).
        pub fn build(self) -> crate::model::EventStartCondition {
            crate::model::EventStartCondition {
                event_filter: self.event_filter,
                segment_id: self.segment_id,
            }
        }
    }
}

/// <p>Specifies the settings for an event that causes a campaign to be sent or a journey activity to be performed.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventFilter {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<crate::model::EventDimensions>,
    #[serde(rename = "FilterType", skip_serializing_if = "Option::is_none")]
    pub(crate) filter_type: ::std::option::Option<crate::model::FilterType>,
}
impl EventFilter {
    pub fn dimensions(&self) -> ::std::option::Option<&crate::model::EventDimensions> {
        self.dimensions.as_ref()
    }
    pub fn filter_type(&self) -> ::std::option::Option<&crate::model::FilterType> {
        self.filter_type.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EventFilter`](crate::model::EventFilter).
    pub fn builder() -> crate::model::event_filter::Builder {
        crate::model::event_filter::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event_filter::Builder {
        crate::model::event_filter::Builder {
            dimensions: self.dimensions,
            filter_type: self.filter_type,
        }
    }
}
impl ::std::hash::Hash for EventFilter {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.filter_type, state);
    }
}
impl ::std::fmt::Display for EventFilter {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Dimensions", &self.dimensions);
        shape.field("FilterType", &self.filter_type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventFilter {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventFilter`](crate::model::EventFilter).
pub mod event_filter {

    /// A builder for [`EventFilter`](crate::model::EventFilter).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: ::std::option::Option<crate::model::EventDimensions>,
        pub(crate) filter_type: ::std::option::Option<crate::model::FilterType>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::EventDimensions) -> Self {
            self.dimensions = ::std::option::Option::Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: ::std::option::Option<crate::model::EventDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn get_dimensions(&self) -> &::std::option::Option<crate::model::EventDimensions> {
            &self.dimensions
        }
        pub fn filter_type(mut self, input: crate::model::FilterType) -> Self {
            self.filter_type = ::std::option::Option::Some(input);
            self
        }
        pub fn set_filter_type(mut self, input: ::std::option::Option<crate::model::FilterType>) -> Self {
            self.filter_type = input;
            self
        }
        pub fn get_filter_type(&self) -> &::std::option::Option<crate::model::FilterType> {
            &self.filter_type
        }
        /// Consumes the builder and constructs a [`EventFilter`](crate::model::EventFilter).
        pub fn build(self) -> crate::model::EventFilter {
            crate::model::EventFilter {
                dimensions: self.dimensions,
                filter_type: self.filter_type,
            }
        }
    }
}

/// <p>Specifies a segment to associate with an activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SegmentCondition {
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
}
impl SegmentCondition {
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`SegmentCondition`](crate::model::SegmentCondition).
    pub fn builder() -> crate::model::segment_condition::Builder {
        crate::model::segment_condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::segment_condition::Builder {
        crate::model::segment_condition::Builder {
            segment_id: self.segment_id,
        }
    }
}
impl ::std::hash::Hash for SegmentCondition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
    }
}
impl ::std::fmt::Display for SegmentCondition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentId", &self.segment_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SegmentCondition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SegmentCondition`](crate::model::SegmentCondition).
pub mod segment_condition {

    /// A builder for [`SegmentCondition`](crate::model::SegmentCondition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn segment_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.segment_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn get_segment_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.segment_id
        }
        /// Consumes the builder and constructs a [`SegmentCondition`](crate::model::SegmentCondition).
        pub fn build(self) -> crate::model::SegmentCondition {
            crate::model::SegmentCondition {
                segment_id: self.segment_id,
            }
        }
    }
}

/// <p>Specifies the configuration and other settings for an activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Activity {
    #[serde(rename = "ConditionalSplit", skip_serializing_if = "Option::is_none")]
    pub(crate) conditional_split: ::std::option::Option<crate::model::ConditionalSplitActivity>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub(crate) description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EMAIL", skip_serializing_if = "Option::is_none")]
    pub(crate) email: ::std::option::Option<crate::model::EmailMessageActivity>,
    #[serde(rename = "Holdout", skip_serializing_if = "Option::is_none")]
    pub(crate) holdout: ::std::option::Option<crate::model::HoldoutActivity>,
    #[serde(rename = "RandomSplit", skip_serializing_if = "Option::is_none")]
    pub(crate) random_split: ::std::option::Option<crate::model::RandomSplitActivity>,
    #[serde(rename = "Wait", skip_serializing_if = "Option::is_none")]
    pub(crate) wait: ::std::option::Option<crate::model::WaitActivity>,
}
impl Activity {
    pub fn conditional_split(&self) -> ::std::option::Option<&crate::model::ConditionalSplitActivity> {
        self.conditional_split.as_ref()
    }
    pub fn description(&self) -> ::std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn email(&self) -> ::std::option::Option<&crate::model::EmailMessageActivity> {
        self.email.as_ref()
    }
    pub fn holdout(&self) -> ::std::option::Option<&crate::model::HoldoutActivity> {
        self.holdout.as_ref()
    }
    pub fn random_split(&self) -> ::std::option::Option<&crate::model::RandomSplitActivity> {
        self.random_split.as_ref()
    }
    pub fn wait(&self) -> ::std::option::Option<&crate::model::WaitActivity> {
        self.wait.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`Activity`](crate::model::Activity).
    pub fn builder() -> crate::model::activity::Builder {
        crate::model::activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::activity::Builder {
        crate::model::activity::Builder {
            conditional_split: self.conditional_split,
            description: self.description,
            email: self.email,
            holdout: self.holdout,
            random_split: self.random_split,
            wait: self.wait,
        }
    }
}
impl ::std::hash::Hash for Activity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.conditional_split, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.holdout, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.random_split, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.wait, state);
    }
}
impl ::std::fmt::Display for Activity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ConditionalSplit", &self.conditional_split);
        shape.field("Description", &self.description);
        shape.field("EMAIL", &self.email);
        shape.field("Holdout", &self.holdout);
        shape.field("RandomSplit", &self.random_split);
        shape.field("Wait", &self.wait);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Activity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Activity`](crate::model::Activity).
pub mod activity {

    /// A builder for [`Activity`](crate::model::Activity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) conditional_split: ::std::option::Option<crate::model::ConditionalSplitActivity>,
        pub(crate) description: ::std::option::Option<::std::string::String>,
        pub(crate) email: ::std::option::Option<crate::model::EmailMessageActivity>,
        pub(crate) holdout: ::std::option::Option<crate::model::HoldoutActivity>,
        pub(crate) random_split: ::std::option::Option<crate::model::RandomSplitActivity>,
        pub(crate) wait: ::std::option::Option<crate::model::WaitActivity>,
    }
    impl Builder {
        pub fn conditional_split(mut self, input: crate::model::ConditionalSplitActivity) -> Self {
            self.conditional_split = ::std::option::Option::Some(input);
            self
        }
        pub fn set_conditional_split(mut self, input: ::std::option::Option<crate::model::ConditionalSplitActivity>) -> Self {
            self.conditional_split = input;
            self
        }
        pub fn get_conditional_split(&self) -> &::std::option::Option<crate::model::ConditionalSplitActivity> {
            &self.conditional_split
        }
        pub fn description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn get_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.description
        }
        pub fn email(mut self, input: crate::model::EmailMessageActivity) -> Self {
            self.email = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email(mut self, input: ::std::option::Option<crate::model::EmailMessageActivity>) -> Self {
            self.email = input;
            self
        }
        pub fn get_email(&self) -> &::std::option::Option<crate::model::EmailMessageActivity> {
            &self.email
        }
        pub fn holdout(mut self, input: crate::model::HoldoutActivity) -> Self {
            self.holdout = ::std::option::Option::Some(input);
            self
        }
        pub fn set_holdout(mut self, input: ::std::option::Option<crate::model::HoldoutActivity>) -> Self {
            self.holdout = input;
            self
        }
        pub fn get_holdout(&self) -> &::std::option::Option<crate::model::HoldoutActivity> {
            &self.holdout
        }
        pub fn random_split(mut self, input: crate::model::RandomSplitActivity) -> Self {
            self.random_split = ::std::option::Option::Some(input);
            self
        }
        pub fn set_random_split(mut self, input: ::std::option::Option<crate::model::RandomSplitActivity>) -> Self {
            self.random_split = input;
            self
        }
        pub fn get_random_split(&self) -> &::std::option::Option<crate::model::RandomSplitActivity> {
            &self.random_split
        }
        pub fn wait(mut self, input: crate::model::WaitActivity) -> Self {
            self.wait = ::std::option::Option::Some(input);
            self
        }
        pub fn set_wait(mut self, input: ::std::option::Option<crate::model::WaitActivity>) -> Self {
            self.wait = input;
            self
        }
        pub fn get_wait(&self) -> &::std::option::Option<crate::model::WaitActivity> {
            &self.wait
        }
        /// Consumes the builder and constructs a [`Activity`](crate::model::Activity).
        pub fn build(self) -> crate::model::Activity {
            crate::model::Activity {
                conditional_split: self.conditional_split,
                description: self.description,
                email: self.email,
                holdout: self.holdout,
                random_split: self.random_split,
                wait: self.wait,
            }
        }
    }
}

/// <p>Specifies the settings for a yes/no split activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ConditionalSplitActivity {
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub(crate) condition: ::std::option::Option<crate::model::Condition>,
    #[serde(rename = "EvaluationWaitTime", skip_serializing_if = "Option::is_none")]
    pub(crate) evaluation_wait_time: ::std::option::Option<crate::model::WaitTime>,
    #[serde(rename = "FalseActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) false_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TrueActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) true_activity: ::std::option::Option<::std::string::String>,
}
impl ConditionalSplitActivity {
    pub fn condition(&self) -> ::std::option::Option<&crate::model::Condition> {
        self.condition.as_ref()
    }
    pub fn evaluation_wait_time(&self) -> ::std::option::Option<&crate::model::WaitTime> {
        self.evaluation_wait_time.as_ref()
    }
    pub fn false_activity(&self) -> ::std::option::Option<&str> {
        self.false_activity.as_deref()
    }
    pub fn true_activity(&self) -> ::std::option::Option<&str> {
        self.true_activity.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ConditionalSplitActivity`](crate::model::ConditionalSplitActivity).
    pub fn builder() -> crate::model::conditional_split_activity::Builder {
        crate::model::conditional_split_activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::conditional_split_activity::Builder {
        crate::model::conditional_split_activity::Builder {
            condition: self.condition,
            evaluation_wait_time: self.evaluation_wait_time,
            false_activity: self.false_activity,
            true_activity: self.true_activity,
        }
    }
}
impl ::std::hash::Hash for ConditionalSplitActivity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.evaluation_wait_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.false_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.true_activity, state);
    }
}
impl ::std::fmt::Display for ConditionalSplitActivity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Condition", &self.condition);
        shape.field("EvaluationWaitTime", &self.evaluation_wait_time);
        shape.field("FalseActivity", &self.false_activity);
        shape.field("TrueActivity", &self.true_activity);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ConditionalSplitActivity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ConditionalSplitActivity`](crate::model::ConditionalSplitActivity).
pub mod conditional_split_activity {

    /// A builder for [`ConditionalSplitActivity`](crate::model::ConditionalSplitActivity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) condition: ::std::option::Option<crate::model::Condition>,
        pub(crate) evaluation_wait_time: ::std::option::Option<crate::model::WaitTime>,
        pub(crate) false_activity: ::std::option::Option<::std::string::String>,
        pub(crate) true_activity: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn condition(mut self, input: crate::model::Condition) -> Self {
            self.condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_condition(mut self, input: ::std::option::Option<crate::model::Condition>) -> Self {
            self.condition = input;
            self
        }
        pub fn get_condition(&self) -> &::std::option::Option<crate::model::Condition> {
            &self.condition
        }
        pub fn evaluation_wait_time(mut self, input: crate::model::WaitTime) -> Self {
            self.evaluation_wait_time = ::std::option::Option::Some(input);
            self
        }
        pub fn set_evaluation_wait_time(mut self, input: ::std::option::Option<crate::model::WaitTime>) -> Self {
            self.evaluation_wait_time = input;
            self
        }
        pub fn get_evaluation_wait_time(&self) -> &::std::option::Option<crate::model::WaitTime> {
            &self.evaluation_wait_time
        }
        pub fn false_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.false_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_false_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.false_activity = input;
            self
        }
        pub fn get_false_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.false_activity
        }
        pub fn true_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.true_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_true_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.true_activity = input;
            self
        }
        pub fn get_true_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.true_activity
        }
        /// Consumes the builder and constructs a [`ConditionalSplitActivity`](crate::model::ConditionalSplitActivity).
        pub fn build(self) -> crate::model::ConditionalSplitActivity {
            crate::model::ConditionalSplitActivity {
                condition: self.condition,
                evaluation_wait_time: self.evaluation_wait_time,
                false_activity: self.false_activity,
                true_activity: self.true_activity,
            }
        }
    }
}

/// <p>Specifies the conditions to evaluate for an activity in a journey, and how to evaluate those conditions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Condition {
    #[serde(rename = "Conditions", skip_serializing_if = "Option::is_none")]
    pub(crate) conditions: ::std::option::Option<::std::vec::Vec<crate::model::SimpleCondition>>,
    #[serde(rename = "Operator", skip_serializing_if = "Option::is_none")]
    pub(crate) operator: ::std::option::Option<crate::model::Operator>,
}
impl Condition {
    pub fn conditions(&self) -> ::std::option::Option<&[crate::model::SimpleCondition]> {
        self.conditions.as_deref()
    }
    pub fn operator(&self) -> ::std::option::Option<&crate::model::Operator> {
        self.operator.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`Condition`](crate::model::Condition).
    pub fn builder() -> crate::model::condition::Builder {
        crate::model::condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::condition::Builder {
        crate::model::condition::Builder {
            conditions: self.conditions,
            operator: self.operator,
        }
    }
}
impl ::std::hash::Hash for Condition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.conditions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.operator, state);
    }
}
impl ::std::fmt::Display for Condition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Conditions", &self.conditions);
        shape.field("Operator", &self.operator);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Condition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Condition`](crate::model::Condition).
pub mod condition {

    /// A builder for [`Condition`](crate::model::Condition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) conditions: ::std::option::Option<::std::vec::Vec<crate::model::SimpleCondition>>,
        pub(crate) operator: ::std::option::Option<crate::model::Operator>,
    }
    impl Builder {
        /// Appends an item to `conditions`.
        ///
        /// To override the contents of this collection use [`set_conditions`](Self::set_conditions).
        ///
        pub fn conditions(mut self, input: crate::model::SimpleCondition) -> Self {
            let mut v = self.conditions.unwrap_or_default();
            v.push(input);
            self.conditions = ::std::option::Option::Some(v);
            self
        }
        pub fn set_conditions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::SimpleCondition>>) -> Self {
            self.conditions = input;
            self
        }
        pub fn get_conditions(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::SimpleCondition>> {
            &self.conditions
        }
        pub fn operator(mut self, input: crate::model::Operator) -> Self {
            self.operator = ::std::option::Option::Some(input);
            self
        }
        pub fn set_operator(mut self, input: ::std::option::Option<crate::model::Operator>) -> Self {
            self.operator = input;
            self
        }
        pub fn get_operator(&self) -> &::std::option::Option<crate::model::Operator> {
            &self.operator
        }
        /// Consumes the builder and constructs a [`Condition`](crate::model::Condition).
        pub fn build(self) -> crate::model::Condition {
            crate::model::Condition {
                conditions: self.conditions,
                operator: self.operator,
            }
        }
    }
}

/// <p>Specifies a condition to evaluate for an activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct SimpleCondition {
    #[serde(rename = "EventCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) event_condition: ::std::option::Option<crate::model::EventCondition>,
    #[serde(rename = "SegmentCondition", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_condition: ::std::option::Option<crate::model::SegmentCondition>,
    #[serde(rename = "segmentDimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
}
impl SimpleCondition {
    pub fn event_condition(&self) -> ::std::option::Option<&crate::model::EventCondition> {
        self.event_condition.as_ref()
    }
    pub fn segment_condition(&self) -> ::std::option::Option<&crate::model::SegmentCondition> {
        self.segment_condition.as_ref()
    }
    pub fn segment_dimensions(&self) -> ::std::option::Option<&crate::model::SegmentDimensions> {
        self.segment_dimensions.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SimpleCondition`](crate::model::SimpleCondition).
    pub fn builder() -> crate::model::simple_condition::Builder {
        crate::model::simple_condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::simple_condition::Builder {
        crate::model::simple_condition::Builder {
            event_condition: self.event_condition,
            segment_condition: self.segment_condition,
            segment_dimensions: self.segment_dimensions,
        }
    }
}
impl ::std::hash::Hash for SimpleCondition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_condition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_dimensions, state);
    }
}
impl ::std::fmt::Display for SimpleCondition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EventCondition", &self.event_condition);
        shape.field("SegmentCondition", &self.segment_condition);
        shape.field("segmentDimensions", &self.segment_dimensions);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SimpleCondition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SimpleCondition`](crate::model::SimpleCondition).
pub mod simple_condition {

    /// A builder for [`SimpleCondition`](crate::model::SimpleCondition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) event_condition: ::std::option::Option<crate::model::EventCondition>,
        pub(crate) segment_condition: ::std::option::Option<crate::model::SegmentCondition>,
        pub(crate) segment_dimensions: ::std::option::Option<crate::model::SegmentDimensions>,
    }
    impl Builder {
        pub fn event_condition(mut self, input: crate::model::EventCondition) -> Self {
            self.event_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_event_condition(mut self, input: ::std::option::Option<crate::model::EventCondition>) -> Self {
            self.event_condition = input;
            self
        }
        pub fn get_event_condition(&self) -> &::std::option::Option<crate::model::EventCondition> {
            &self.event_condition
        }
        pub fn segment_condition(mut self, input: crate::model::SegmentCondition) -> Self {
            self.segment_condition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_condition(mut self, input: ::std::option::Option<crate::model::SegmentCondition>) -> Self {
            self.segment_condition = input;
            self
        }
        pub fn get_segment_condition(&self) -> &::std::option::Option<crate::model::SegmentCondition> {
            &self.segment_condition
        }
        pub fn segment_dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.segment_dimensions = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_dimensions(mut self, input: ::std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.segment_dimensions = input;
            self
        }
        pub fn get_segment_dimensions(&self) -> &::std::option::Option<crate::model::SegmentDimensions> {
            &self.segment_dimensions
        }
        /// Consumes the builder and constructs a [`SimpleCondition`](crate::model::SimpleCondition).
        pub fn build(self) -> crate::model::SimpleCondition {
            crate::model::SimpleCondition {
                event_condition: self.event_condition,
                segment_condition: self.segment_condition,
                segment_dimensions: self.segment_dimensions,
            }
        }
    }
}

/// <p>Specifies the conditions to evaluate for an event that applies to an activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventCondition {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<crate::model::EventDimensions>,
    #[serde(rename = "MessageActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) message_activity: ::std::option::Option<::std::string::String>,
}
impl EventCondition {
    pub fn dimensions(&self) -> ::std::option::Option<&crate::model::EventDimensions> {
        self.dimensions.as_ref()
    }
    pub fn message_activity(&self) -> ::std::option::Option<&str> {
        self.message_activity.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EventCondition`](crate::model::EventCondition).
    pub fn builder() -> crate::model::event_condition::Builder {
        crate::model::event_condition::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event_condition::Builder {
        crate::model::event_condition::Builder {
            dimensions: self.dimensions,
            message_activity: self.message_activity,
        }
    }
}
impl ::std::hash::Hash for EventCondition {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_activity, state);
    }
}
impl ::std::fmt::Display for EventCondition {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Dimensions", &self.dimensions);
        shape.field("MessageActivity", &self.message_activity);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventCondition {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventCondition`](crate::model::EventCondition).
pub mod event_condition {

    /// A builder for [`EventCondition`](crate::model::EventCondition).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: ::std::option::Option<crate::model::EventDimensions>,
        pub(crate) message_activity: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::EventDimensions) -> Self {
            self.dimensions = ::std::option::Option::Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: ::std::option::Option<crate::model::EventDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn get_dimensions(&self) -> &::std::option::Option<crate::model::EventDimensions> {
            &self.dimensions
        }
        pub fn message_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.message_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_message_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.message_activity = input;
            self
        }
        pub fn get_message_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.message_activity
        }
        /// Consumes the builder and constructs a [`EventCondition`](crate::model::EventCondition).
        pub fn build(self) -> crate::model::EventCondition {
            crate::model::EventCondition {
                dimensions: self.dimensions,
                message_activity: self.message_activity,
            }
        }
    }
}

/// <p>Specifies the settings for an email activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EmailMessageActivity {
    #[serde(rename = "MessageConfig", skip_serializing_if = "Option::is_none")]
    pub(crate) message_config: ::std::option::Option<crate::model::JourneyEmailMessage>,
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) next_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateName", skip_serializing_if = "Option::is_none")]
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) template_version: ::std::option::Option<::std::string::String>,
}
impl EmailMessageActivity {
    pub fn message_config(&self) -> ::std::option::Option<&crate::model::JourneyEmailMessage> {
        self.message_config.as_ref()
    }
    pub fn next_activity(&self) -> ::std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn template_version(&self) -> ::std::option::Option<&str> {
        self.template_version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`EmailMessageActivity`](crate::model::EmailMessageActivity).
    pub fn builder() -> crate::model::email_message_activity::Builder {
        crate::model::email_message_activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::email_message_activity::Builder {
        crate::model::email_message_activity::Builder {
            message_config: self.message_config,
            next_activity: self.next_activity,
            template_name: self.template_name,
            template_version: self.template_version,
        }
    }
}
impl ::std::hash::Hash for EmailMessageActivity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_config, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_version, state);
    }
}
impl ::std::fmt::Display for EmailMessageActivity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageConfig", &self.message_config);
        shape.field("NextActivity", &self.next_activity);
        shape.field("TemplateName", &self.template_name);
        shape.field("TemplateVersion", &self.template_version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EmailMessageActivity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EmailMessageActivity`](crate::model::EmailMessageActivity).
pub mod email_message_activity {

    /// A builder for [`EmailMessageActivity`](crate::model::EmailMessageActivity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_config: ::std::option::Option<crate::model::JourneyEmailMessage>,
        pub(crate) next_activity: ::std::option::Option<::std::string::String>,
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) template_version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn message_config(mut self, input: crate::model::JourneyEmailMessage) -> Self {
            self.message_config = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_config(mut self, input: ::std::option::Option<crate::model::JourneyEmailMessage>) -> Self {
            self.message_config = input;
            self
        }
        pub fn get_message_config(&self) -> &::std::option::Option<crate::model::JourneyEmailMessage> {
            &self.message_config
        }
        pub fn next_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn get_next_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_activity
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
        pub fn template_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_version = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_version = input;
            self
        }
        pub fn get_template_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_version
        }
        /// Consumes the builder and constructs a [`EmailMessageActivity`](crate::model::EmailMessageActivity).
        pub fn build(self) -> crate::model::EmailMessageActivity {
            crate::model::EmailMessageActivity {
                message_config: self.message_config,
                next_activity: self.next_activity,
                template_name: self.template_name,
                template_version: self.template_version,
            }
        }
    }
}

/// <p>Specifies the "From" address for an email message that's sent to participants in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct JourneyEmailMessage {
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) from_address: ::std::option::Option<::std::string::String>,
}
impl JourneyEmailMessage {
    pub fn from_address(&self) -> ::std::option::Option<&str> {
        self.from_address.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`JourneyEmailMessage`](crate::model::JourneyEmailMessage).
    pub fn builder() -> crate::model::journey_email_message::Builder {
        crate::model::journey_email_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::journey_email_message::Builder {
        crate::model::journey_email_message::Builder {
            from_address: self.from_address,
        }
    }
}
impl ::std::hash::Hash for JourneyEmailMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.from_address, state);
    }
}
impl ::std::fmt::Display for JourneyEmailMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("FromAddress", &self.from_address);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for JourneyEmailMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`JourneyEmailMessage`](crate::model::JourneyEmailMessage).
pub mod journey_email_message {

    /// A builder for [`JourneyEmailMessage`](crate::model::JourneyEmailMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) from_address: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`JourneyEmailMessage`](crate::model::JourneyEmailMessage).
        pub fn build(self) -> crate::model::JourneyEmailMessage {
            crate::model::JourneyEmailMessage {
                from_address: self.from_address,
            }
        }
    }
}

/// <p>Specifies the settings for a holdout activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct HoldoutActivity {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) next_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Percentage", skip_serializing_if = "Option::is_none")]
    pub(crate) percentage: ::std::option::Option<i32>,
}
impl HoldoutActivity {
    pub fn next_activity(&self) -> ::std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn percentage(&self) -> ::std::option::Option<i32> {
        self.percentage
    }
    /// Creates a new builder-style object to manufacture [`HoldoutActivity`](crate::model::HoldoutActivity).
    pub fn builder() -> crate::model::holdout_activity::Builder {
        crate::model::holdout_activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::holdout_activity::Builder {
        crate::model::holdout_activity::Builder {
            next_activity: self.next_activity,
            percentage: self.percentage,
        }
    }
}
impl ::std::hash::Hash for HoldoutActivity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.percentage, state);
    }
}
impl ::std::fmt::Display for HoldoutActivity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("NextActivity", &self.next_activity);
        shape.field("Percentage", &self.percentage);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for HoldoutActivity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`HoldoutActivity`](crate::model::HoldoutActivity).
pub mod holdout_activity {

    /// A builder for [`HoldoutActivity`](crate::model::HoldoutActivity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: ::std::option::Option<::std::string::String>,
        pub(crate) percentage: ::std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn get_next_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_activity
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = ::std::option::Option::Some(input);
            self
        }
        pub fn set_percentage(mut self, input: ::std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        pub fn get_percentage(&self) -> &::std::option::Option<i32> {
            &self.percentage
        }
        /// Consumes the builder and constructs a [`HoldoutActivity`](crate::model::HoldoutActivity).
        pub fn build(self) -> crate::model::HoldoutActivity {
            crate::model::HoldoutActivity {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}

/// <p>Specifies the settings for a random split activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct RandomSplitActivity {
    #[serde(rename = "Branches", skip_serializing_if = "Option::is_none")]
    pub(crate) branches: ::std::option::Option<::std::vec::Vec<crate::model::RandomSplitEntry>>,
}
impl RandomSplitActivity {
    pub fn branches(&self) -> ::std::option::Option<&[crate::model::RandomSplitEntry]> {
        self.branches.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`RandomSplitActivity`](crate::model::RandomSplitActivity).
    pub fn builder() -> crate::model::random_split_activity::Builder {
        crate::model::random_split_activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::random_split_activity::Builder {
        crate::model::random_split_activity::Builder {
            branches: self.branches,
        }
    }
}
impl ::std::hash::Hash for RandomSplitActivity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.branches, state);
    }
}
impl ::std::fmt::Display for RandomSplitActivity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Branches", &self.branches);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for RandomSplitActivity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`RandomSplitActivity`](crate::model::RandomSplitActivity).
pub mod random_split_activity {

    /// A builder for [`RandomSplitActivity`](crate::model::RandomSplitActivity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) branches: ::std::option::Option<::std::vec::Vec<crate::model::RandomSplitEntry>>,
    }
    impl Builder {
        /// Appends an item to `branches`.
        ///
        /// To override the contents of this collection use [`set_branches`](Self::set_branches).
        ///
        pub fn branches(mut self, input: crate::model::RandomSplitEntry) -> Self {
            let mut v = self.branches.unwrap_or_default();
            v.push(input);
            self.branches = ::std::option::Option::Some(v);
            self
        }
        pub fn set_branches(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::RandomSplitEntry>>) -> Self {
            self.branches = input;
            self
        }
        pub fn get_branches(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::RandomSplitEntry>> {
            &self.branches
        }
        /// Consumes the builder and constructs a [`RandomSplitActivity`](crate::model::RandomSplitActivity).
        pub fn build(self) -> crate::model::RandomSplitActivity {
            crate::model::RandomSplitActivity {
                branches: self.branches,
            }
        }
    }
}

/// <p>Specifies the settings for a path in a random split activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct RandomSplitEntry {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) next_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Percentage", skip_serializing_if = "Option::is_none")]
    pub(crate) percentage: ::std::option::Option<i32>,
}
impl RandomSplitEntry {
    pub fn next_activity(&self) -> ::std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn percentage(&self) -> ::std::option::Option<i32> {
        self.percentage
    }
    /// Creates a new builder-style object to manufacture [`RandomSplitEntry`](crate::model::RandomSplitEntry).
    pub fn builder() -> crate::model::random_split_entry::Builder {
        crate::model::random_split_entry::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::random_split_entry::Builder {
        crate::model::random_split_entry::Builder {
            next_activity: self.next_activity,
            percentage: self.percentage,
        }
    }
}
impl ::std::hash::Hash for RandomSplitEntry {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.percentage, state);
    }
}
impl ::std::fmt::Display for RandomSplitEntry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("NextActivity", &self.next_activity);
        shape.field("Percentage", &self.percentage);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for RandomSplitEntry {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`RandomSplitEntry`](crate::model::RandomSplitEntry).
pub mod random_split_entry {

    /// A builder for [`RandomSplitEntry`](crate::model::RandomSplitEntry).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: ::std::option::Option<::std::string::String>,
        pub(crate) percentage: ::std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn get_next_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_activity
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = ::std::option::Option::Some(input);
            self
        }
        pub fn set_percentage(mut self, input: ::std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        pub fn get_percentage(&self) -> &::std::option::Option<i32> {
            &self.percentage
        }
        /// Consumes the builder and constructs a [`RandomSplitEntry`](crate::model::RandomSplitEntry).
        pub fn build(self) -> crate::model::RandomSplitEntry {
            crate::model::RandomSplitEntry {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}

/// <p>Specifies the settings for a wait activity in a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WaitActivity {
    #[serde(rename = "NextActivity", skip_serializing_if = "Option::is_none")]
    pub(crate) next_activity: ::std::option::Option<::std::string::String>,
    #[serde(rename = "WaitTime", skip_serializing_if = "Option::is_none")]
    pub(crate) wait_time: ::std::option::Option<crate::model::WaitTime>,
}
impl WaitActivity {
    pub fn next_activity(&self) -> ::std::option::Option<&str> {
        self.next_activity.as_deref()
    }
    pub fn wait_time(&self) -> ::std::option::Option<&crate::model::WaitTime> {
        self.wait_time.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`WaitActivity`](crate::model::WaitActivity).
    pub fn builder() -> crate::model::wait_activity::Builder {
        crate::model::wait_activity::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::wait_activity::Builder {
        crate::model::wait_activity::Builder {
            next_activity: self.next_activity,
            wait_time: self.wait_time,
        }
    }
}
impl ::std::hash::Hash for WaitActivity {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_activity, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.wait_time, state);
    }
}
impl ::std::fmt::Display for WaitActivity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("NextActivity", &self.next_activity);
        shape.field("WaitTime", &self.wait_time);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WaitActivity {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WaitActivity`](crate::model::WaitActivity).
pub mod wait_activity {

    /// A builder for [`WaitActivity`](crate::model::WaitActivity).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: ::std::option::Option<::std::string::String>,
        pub(crate) wait_time: ::std::option::Option<crate::model::WaitTime>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_activity = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn get_next_activity(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_activity
        }
        pub fn wait_time(mut self, input: crate::model::WaitTime) -> Self {
            self.wait_time = ::std::option::Option::Some(input);
            self
        }
        pub fn set_wait_time(mut self, input: ::std::option::Option<crate::model::WaitTime>) -> Self {
            self.wait_time = input;
            self
        }
        pub fn get_wait_time(&self) -> &::std::option::Option<crate::model::WaitTime> {
            &self.wait_time
        }
        /// Consumes the builder and constructs a [`WaitActivity`](crate::model::WaitActivity).
        pub fn build(self) -> crate::model::WaitActivity {
            crate::model::WaitActivity {
                next_activity: self.next_activity,
                wait_time: self.wait_time,
            }
        }
    }
}

/// <p>Specifies a duration or a date and time that indicates when Amazon Pinpoint determines whether an activity's conditions have been met.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WaitTime {
    #[serde(rename = "WaitFor", skip_serializing_if = "Option::is_none")]
    pub(crate) wait_for: ::std::option::Option<::std::string::String>,
    #[serde(rename = "WaitUntil", skip_serializing_if = "Option::is_none")]
    pub(crate) wait_until: ::std::option::Option<::std::string::String>,
}
impl WaitTime {
    pub fn wait_for(&self) -> ::std::option::Option<&str> {
        self.wait_for.as_deref()
    }
    pub fn wait_until(&self) -> ::std::option::Option<&str> {
        self.wait_until.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`WaitTime`](crate::model::WaitTime).
    pub fn builder() -> crate::model::wait_time::Builder {
        crate::model::wait_time::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::wait_time::Builder {
        crate::model::wait_time::Builder {
            wait_for: self.wait_for,
            wait_until: self.wait_until,
        }
    }
}
impl ::std::hash::Hash for WaitTime {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.wait_for, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.wait_until, state);
    }
}
impl ::std::fmt::Display for WaitTime {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("WaitFor", &self.wait_for);
        shape.field("WaitUntil", &self.wait_until);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WaitTime {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WaitTime`](crate::model::WaitTime).
pub mod wait_time {

    /// A builder for [`WaitTime`](crate::model::WaitTime).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) wait_for: ::std::option::Option<::std::string::String>,
        pub(crate) wait_until: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn wait_for(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.wait_for = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_wait_for(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.wait_for = input;
            self
        }
        pub fn get_wait_for(&self) -> &::std::option::Option<::std::string::String> {
            &self.wait_for
        }
        pub fn wait_until(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.wait_until = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_wait_until(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.wait_until = input;
            self
        }
        pub fn get_wait_until(&self) -> &::std::option::Option<::std::string::String> {
            &self.wait_until
        }
        /// Consumes the builder and constructs a [`WaitTime`](crate::model::WaitTime).
        pub fn build(self) -> crate::model::WaitTime {
            crate::model::WaitTime {
                wait_for: self.wait_for,
                wait_until: self.wait_until,
            }
        }
    }
}
