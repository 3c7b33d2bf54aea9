// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The current status of a campaign.</p>
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
pub enum CampaignStatus {
    #[allow(missing_docs)] // documentation missing in model
    Scheduled,
    #[allow(missing_docs)] // documentation missing in model
    Executing,
    #[allow(missing_docs)] // documentation missing in model
    PendingNextRun,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Paused,
    #[allow(missing_docs)] // documentation missing in model
    Deleted,
    #[allow(missing_docs)] // documentation missing in model
    Invalid,
}
impl CampaignStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Scheduled => "SCHEDULED",
            CampaignStatus::Executing => "EXECUTING",
            CampaignStatus::PendingNextRun => "PENDING_NEXT_RUN",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Deleted => "DELETED",
            CampaignStatus::Invalid => "INVALID",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SCHEDULED", "EXECUTING", "PENDING_NEXT_RUN", "COMPLETED", "PAUSED", "DELETED", "INVALID"]
    }
}
impl ::std::str::FromStr for CampaignStatus {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => ::std::result::Result::Ok(CampaignStatus::Scheduled),
            "EXECUTING" => ::std::result::Result::Ok(CampaignStatus::Executing),
            "PENDING_NEXT_RUN" => ::std::result::Result::Ok(CampaignStatus::PendingNextRun),
            "COMPLETED" => ::std::result::Result::Ok(CampaignStatus::Completed),
            "PAUSED" => ::std::result::Result::Ok(CampaignStatus::Paused),
            "DELETED" => ::std::result::Result::Ok(CampaignStatus::Deleted),
            "INVALID" => ::std::result::Result::Ok(CampaignStatus::Invalid),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("CampaignStatus")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("CampaignStatus", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for CampaignStatus {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for CampaignStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for CampaignStatus {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for CampaignStatus {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignStatus {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>How often a campaign or campaign treatment is sent.</p>
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
pub enum Frequency {
    #[allow(missing_docs)] // documentation missing in model
    Once,
    #[allow(missing_docs)] // documentation missing in model
    Hourly,
    #[allow(missing_docs)] // documentation missing in model
    Daily,
    #[allow(missing_docs)] // documentation missing in model
    Weekly,
    #[allow(missing_docs)] // documentation missing in model
    Monthly,
    #[allow(missing_docs)] // documentation missing in model
    Event,
    #[allow(missing_docs)] // documentation missing in model
    InAppEvent,
}
impl Frequency {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "ONCE",
            Frequency::Hourly => "HOURLY",
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Event => "EVENT",
            Frequency::InAppEvent => "IN_APP_EVENT",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ONCE", "HOURLY", "DAILY", "WEEKLY", "MONTHLY", "EVENT", "IN_APP_EVENT"]
    }
}
impl ::std::str::FromStr for Frequency {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "ONCE" => ::std::result::Result::Ok(Frequency::Once),
            "HOURLY" => ::std::result::Result::Ok(Frequency::Hourly),
            "DAILY" => ::std::result::Result::Ok(Frequency::Daily),
            "WEEKLY" => ::std::result::Result::Ok(Frequency::Weekly),
            "MONTHLY" => ::std::result::Result::Ok(Frequency::Monthly),
            "EVENT" => ::std::result::Result::Ok(Frequency::Event),
            "IN_APP_EVENT" => ::std::result::Result::Ok(Frequency::InAppEvent),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Frequency")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Frequency", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Frequency {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Frequency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Frequency {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>The kind of event filter applied to an event-based campaign.</p>
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
pub enum FilterType {
    #[allow(missing_docs)] // documentation missing in model
    System,
    #[allow(missing_docs)] // documentation missing in model
    Endpoint,
}
impl FilterType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::System => "SYSTEM",
            FilterType::Endpoint => "ENDPOINT",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SYSTEM", "ENDPOINT"]
    }
}
impl ::std::str::FromStr for FilterType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "SYSTEM" => ::std::result::Result::Ok(FilterType::System),
            "ENDPOINT" => ::std::result::Result::Ok(FilterType::Endpoint),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("FilterType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("FilterType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for FilterType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for FilterType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for FilterType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for FilterType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for FilterType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>The action that occurs when a recipient taps a push notification.</p>
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
pub enum Action {
    #[allow(missing_docs)] // documentation missing in model
    OpenApp,
    #[allow(missing_docs)] // documentation missing in model
    DeepLink,
    #[allow(missing_docs)] // documentation missing in model
    Url,
}
impl Action {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::OpenApp => "OPEN_APP",
            Action::DeepLink => "DEEP_LINK",
            Action::Url => "URL",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["OPEN_APP", "DEEP_LINK", "URL"]
    }
}
impl ::std::str::FromStr for Action {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "OPEN_APP" => ::std::result::Result::Ok(Action::OpenApp),
            "DEEP_LINK" => ::std::result::Result::Ok(Action::DeepLink),
            "URL" => ::std::result::Result::Ok(Action::Url),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Action")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Action", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Action {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Action {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Action {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>The kind of SMS message.</p>
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
pub enum MessageType {
    #[allow(missing_docs)] // documentation missing in model
    Transactional,
    #[allow(missing_docs)] // documentation missing in model
    Promotional,
}
impl MessageType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Transactional => "TRANSACTIONAL",
            MessageType::Promotional => "PROMOTIONAL",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["TRANSACTIONAL", "PROMOTIONAL"]
    }
}
impl ::std::str::FromStr for MessageType {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "TRANSACTIONAL" => ::std::result::Result::Ok(MessageType::Transactional),
            "PROMOTIONAL" => ::std::result::Result::Ok(MessageType::Promotional),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("MessageType")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("MessageType", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for MessageType {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for MessageType {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for MessageType {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for MessageType {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Provides information about the status, configuration, and other settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignResponse {
    /// <p>An array of responses, one for each treatment that you defined for the campaign, in addition to the default treatment.</p>
    #[serde(rename = "AdditionalTreatments", skip_serializing_if = "Option::is_none")]
    pub(crate) additional_treatments: ::std::option::Option<::std::vec::Vec<crate::model::TreatmentResource>>,
    /// <p>The unique identifier for the application that the campaign applies to.</p>
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the campaign.</p>
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    /// <p>The date, in ISO 8601 format, when the campaign was created.</p>
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    /// <p>The current status of the campaign's default treatment.</p>
    #[serde(rename = "DefaultState", skip_serializing_if = "Option::is_none")]
    pub(crate) default_state: ::std::option::Option<crate::model::CampaignState>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub(crate) description: ::std::option::Option<::std::string::String>,
    /// <p>The allocated percentage of users (segment members) who shouldn't receive messages from the campaign.</p>
    #[serde(rename = "HoldoutPercent", skip_serializing_if = "Option::is_none")]
    pub(crate) holdout_percent: ::std::option::Option<i32>,
    #[serde(rename = "Hook", skip_serializing_if = "Option::is_none")]
    pub(crate) hook: ::std::option::Option<crate::model::CampaignHook>,
    /// <p>The unique identifier for the campaign.</p>
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies whether the campaign is paused.</p>
    #[serde(rename = "IsPaused", skip_serializing_if = "Option::is_none")]
    pub(crate) is_paused: ::std::option::Option<bool>,
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
    /// <p>The unique identifier for the segment that's associated with the campaign.</p>
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    /// <p>The version number of the segment that's associated with the campaign.</p>
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_version: ::std::option::Option<i32>,
    /// <p>The current status of the campaign.</p>
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<crate::model::CampaignState>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
    /// <p>The version number of the campaign.</p>
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<i32>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub(crate) priority: ::std::option::Option<i32>,
}
impl CampaignResponse {
    /// <p>An array of responses, one for each treatment that you defined for the campaign, in addition to the default treatment.</p>
    pub fn additional_treatments(&self) -> ::std::option::Option<&[crate::model::TreatmentResource]> {
        self.additional_treatments.as_deref()
    }
    /// <p>The unique identifier for the application that the campaign applies to.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) of the campaign.</p>
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The date, in ISO 8601 format, when the campaign was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    /// <p>The current status of the campaign's default treatment.</p>
    pub fn default_state(&self) -> ::std::option::Option<&crate::model::CampaignState> {
        self.default_state.as_ref()
    }
    pub fn description(&self) -> ::std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The allocated percentage of users (segment members) who shouldn't receive messages from the campaign.</p>
    pub fn holdout_percent(&self) -> ::std::option::Option<i32> {
        self.holdout_percent
    }
    pub fn hook(&self) -> ::std::option::Option<&crate::model::CampaignHook> {
        self.hook.as_ref()
    }
    /// <p>The unique identifier for the campaign.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>Specifies whether the campaign is paused.</p>
    pub fn is_paused(&self) -> ::std::option::Option<bool> {
        self.is_paused
    }
    pub fn last_modified_date(&self) -> ::std::option::Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn limits(&self) -> ::std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn message_configuration(&self) -> ::std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    /// <p>The unique identifier for the segment that's associated with the campaign.</p>
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// <p>The version number of the segment that's associated with the campaign.</p>
    pub fn segment_version(&self) -> ::std::option::Option<i32> {
        self.segment_version
    }
    /// <p>The current status of the campaign.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::model::CampaignState> {
        self.state.as_ref()
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_configuration(&self) -> ::std::option::Option<&crate::model::TemplateConfiguration> {
        self.template_configuration.as_ref()
    }
    pub fn treatment_description(&self) -> ::std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> ::std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
    /// <p>The version number of the campaign.</p>
    pub fn version(&self) -> ::std::option::Option<i32> {
        self.version
    }
    pub fn priority(&self) -> ::std::option::Option<i32> {
        self.priority
    }
    /// Creates a new builder-style object to manufacture [`CampaignResponse`](crate::model::CampaignResponse).
    pub fn builder() -> crate::model::campaign_response::Builder {
        crate::model::campaign_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_response::Builder {
        crate::model::campaign_response::Builder {
            additional_treatments: self.additional_treatments,
            application_id: self.application_id,
            arn: self.arn,
            creation_date: self.creation_date,
            default_state: self.default_state,
            description: self.description,
            holdout_percent: self.holdout_percent,
            hook: self.hook,
            id: self.id,
            is_paused: self.is_paused,
            last_modified_date: self.last_modified_date,
            limits: self.limits,
            message_configuration: self.message_configuration,
            name: self.name,
            schedule: self.schedule,
            segment_id: self.segment_id,
            segment_version: self.segment_version,
            state: self.state,
            tags: self.tags,
            template_configuration: self.template_configuration,
            treatment_description: self.treatment_description,
            treatment_name: self.treatment_name,
            version: self.version,
            priority: self.priority,
        }
    }
}
impl ::std::hash::Hash for CampaignResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.additional_treatments, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_state, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.holdout_percent, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.hook, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_paused, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.last_modified_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.priority, state);
    }
}
impl ::std::fmt::Display for CampaignResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AdditionalTreatments", &self.additional_treatments);
        shape.field("ApplicationId", &self.application_id);
        shape.field("Arn", &self.arn);
        shape.field("CreationDate", &self.creation_date);
        shape.field("DefaultState", &self.default_state);
        shape.field("Description", &self.description);
        shape.field("HoldoutPercent", &self.holdout_percent);
        shape.field("Hook", &self.hook);
        shape.field("Id", &self.id);
        shape.field("IsPaused", &self.is_paused);
        shape.field("LastModifiedDate", &self.last_modified_date);
        shape.field("Limits", &self.limits);
        shape.field("MessageConfiguration", &self.message_configuration);
        shape.field("Name", &self.name);
        shape.field("Schedule", &self.schedule);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentVersion", &self.segment_version);
        shape.field("State", &self.state);
        shape.field("tags", &self.tags);
        shape.field("TemplateConfiguration", &self.template_configuration);
        shape.field("TreatmentDescription", &self.treatment_description);
        shape.field("TreatmentName", &self.treatment_name);
        shape.field("Version", &self.version);
        shape.field("Priority", &self.priority);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignResponse`](crate::model::CampaignResponse).
pub mod campaign_response {

    /// A builder for [`CampaignResponse`](crate::model::CampaignResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: ::std::option::Option<::std::vec::Vec<crate::model::TreatmentResource>>,
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) arn: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) default_state: ::std::option::Option<crate::model::CampaignState>,
        pub(crate) description: ::std::option::Option<::std::string::String>,
        pub(crate) holdout_percent: ::std::option::Option<i32>,
        pub(crate) hook: ::std::option::Option<crate::model::CampaignHook>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) is_paused: ::std::option::Option<bool>,
        pub(crate) last_modified_date: ::std::option::Option<::std::string::String>,
        pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_version: ::std::option::Option<i32>,
        pub(crate) state: ::std::option::Option<crate::model::CampaignState>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
        pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
        pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<i32>,
        pub(crate) priority: ::std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `additional_treatments`.
        ///
        /// To override the contents of this collection use [`set_additional_treatments`](Self::set_additional_treatments).
        ///
        /// <p>An array of responses, one for each treatment that you defined for the campaign, in addition to the default treatment.</p>
        pub fn additional_treatments(mut self, input: crate::model::TreatmentResource) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input);
            self.additional_treatments = ::std::option::Option::Some(v);
            self
        }
        /// <p>An array of responses, one for each treatment that you defined for the campaign, in addition to the default treatment.</p>
        pub fn set_additional_treatments(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::TreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        /// <p>An array of responses, one for each treatment that you defined for the campaign, in addition to the default treatment.</p>
        pub fn get_additional_treatments(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::TreatmentResource>> {
            &self.additional_treatments
        }
        /// <p>The unique identifier for the application that the campaign applies to.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application that the campaign applies to.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application that the campaign applies to.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The Amazon Resource Name (ARN) of the campaign.</p>
        pub fn arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.arn = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the campaign.</p>
        pub fn set_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the campaign.</p>
        pub fn get_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.arn
        }
        /// <p>The date, in ISO 8601 format, when the campaign was created.</p>
        pub fn creation_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.creation_date = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The date, in ISO 8601 format, when the campaign was created.</p>
        pub fn set_creation_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        /// <p>The date, in ISO 8601 format, when the campaign was created.</p>
        pub fn get_creation_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.creation_date
        }
        /// <p>The current status of the campaign's default treatment.</p>
        pub fn default_state(mut self, input: crate::model::CampaignState) -> Self {
            self.default_state = ::std::option::Option::Some(input);
            self
        }
        /// <p>The current status of the campaign's default treatment.</p>
        pub fn set_default_state(mut self, input: ::std::option::Option<crate::model::CampaignState>) -> Self {
            self.default_state = input;
            self
        }
        /// <p>The current status of the campaign's default treatment.</p>
        pub fn get_default_state(&self) -> &::std::option::Option<crate::model::CampaignState> {
            &self.default_state
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
        /// <p>The allocated percentage of users (segment members) who shouldn't receive messages from the campaign.</p>
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = ::std::option::Option::Some(input);
            self
        }
        /// <p>The allocated percentage of users (segment members) who shouldn't receive messages from the campaign.</p>
        pub fn set_holdout_percent(mut self, input: ::std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        /// <p>The allocated percentage of users (segment members) who shouldn't receive messages from the campaign.</p>
        pub fn get_holdout_percent(&self) -> &::std::option::Option<i32> {
            &self.holdout_percent
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = ::std::option::Option::Some(input);
            self
        }
        pub fn set_hook(mut self, input: ::std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn get_hook(&self) -> &::std::option::Option<crate::model::CampaignHook> {
            &self.hook
        }
        /// <p>The unique identifier for the campaign.</p>
        pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the campaign.</p>
        pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The unique identifier for the campaign.</p>
        pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.id
        }
        /// <p>Specifies whether the campaign is paused.</p>
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether the campaign is paused.</p>
        pub fn set_is_paused(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        /// <p>Specifies whether the campaign is paused.</p>
        pub fn get_is_paused(&self) -> &::std::option::Option<bool> {
            &self.is_paused
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
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: ::std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn get_message_configuration(&self) -> &::std::option::Option<crate::model::MessageConfiguration> {
            &self.message_configuration
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
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::Schedule> {
            &self.schedule
        }
        /// <p>The unique identifier for the segment that's associated with the campaign.</p>
        pub fn segment_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.segment_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the segment that's associated with the campaign.</p>
        pub fn set_segment_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// <p>The unique identifier for the segment that's associated with the campaign.</p>
        pub fn get_segment_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.segment_id
        }
        /// <p>The version number of the segment that's associated with the campaign.</p>
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = ::std::option::Option::Some(input);
            self
        }
        /// <p>The version number of the segment that's associated with the campaign.</p>
        pub fn set_segment_version(mut self, input: ::std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        /// <p>The version number of the segment that's associated with the campaign.</p>
        pub fn get_segment_version(&self) -> &::std::option::Option<i32> {
            &self.segment_version
        }
        /// <p>The current status of the campaign.</p>
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = ::std::option::Option::Some(input);
            self
        }
        /// <p>The current status of the campaign.</p>
        pub fn set_state(mut self, input: ::std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        /// <p>The current status of the campaign.</p>
        pub fn get_state(&self) -> &::std::option::Option<crate::model::CampaignState> {
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
        pub fn treatment_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn get_treatment_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_description
        }
        pub fn treatment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn get_treatment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_name
        }
        /// <p>The version number of the campaign.</p>
        pub fn version(mut self, input: i32) -> Self {
            self.version = ::std::option::Option::Some(input);
            self
        }
        /// <p>The version number of the campaign.</p>
        pub fn set_version(mut self, input: ::std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// <p>The version number of the campaign.</p>
        pub fn get_version(&self) -> &::std::option::Option<i32> {
            &self.version
        }
        pub fn priority(mut self, input: i32) -> Self {
            self.priority = ::std::option::Option::Some(input);
            self
        }
        pub fn set_priority(mut self, input: ::std::option::Option<i32>) -> Self {
            self.priority = input;
            self
        }
        pub fn get_priority(&self) -> &::std::option::Option<i32> {
            &self.priority
        }
        /// Consumes the builder and constructs a [`CampaignResponse`](crate::model::CampaignResponse).
        pub fn build(self) -> crate::model::CampaignResponse {
            crate::model::CampaignResponse {
                additional_treatments: self.additional_treatments,
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                default_state: self.default_state,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                id: self.id,
                is_paused: self.is_paused,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                state: self.state,
                tags: self.tags,
                template_configuration: self.template_configuration,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
                version: self.version,
                priority: self.priority,
            }
        }
    }
}

/// <p>Provides information about the configuration and other settings for all the campaigns that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignsResponse {
    /// <p>An array of responses, one for each campaign that's associated with the application.</p>
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::CampaignResponse>>,
    /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl CampaignsResponse {
    /// <p>An array of responses, one for each campaign that's associated with the application.</p>
    pub fn item(&self) -> ::std::option::Option<&[crate::model::CampaignResponse]> {
        self.item.as_deref()
    }
    /// <p>The string to use in a subsequent request to get the next page of results in a paginated response. This value is null if there are no additional pages.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignsResponse`](crate::model::CampaignsResponse).
    pub fn builder() -> crate::model::campaigns_response::Builder {
        crate::model::campaigns_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaigns_response::Builder {
        crate::model::campaigns_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for CampaignsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for CampaignsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignsResponse`](crate::model::CampaignsResponse).
pub mod campaigns_response {

    /// A builder for [`CampaignsResponse`](crate::model::CampaignsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::CampaignResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        /// <p>An array of responses, one for each campaign that's associated with the application.</p>
        pub fn item(mut self, input: crate::model::CampaignResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        /// <p>An array of responses, one for each campaign that's associated with the application.</p>
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::CampaignResponse>>) -> Self {
            self.item = input;
            self
        }
        /// <p>An array of responses, one for each campaign that's associated with the application.</p>
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::CampaignResponse>> {
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
        /// Consumes the builder and constructs a [`CampaignsResponse`](crate::model::CampaignsResponse).
        pub fn build(self) -> crate::model::CampaignsResponse {
            crate::model::CampaignsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Specifies the configuration and other settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WriteCampaignRequest {
    #[serde(rename = "AdditionalTreatments", skip_serializing_if = "Option::is_none")]
    pub(crate) additional_treatments: ::std::option::Option<::std::vec::Vec<crate::model::WriteTreatmentResource>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub(crate) description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "HoldoutPercent", skip_serializing_if = "Option::is_none")]
    pub(crate) holdout_percent: ::std::option::Option<i32>,
    #[serde(rename = "Hook", skip_serializing_if = "Option::is_none")]
    pub(crate) hook: ::std::option::Option<crate::model::CampaignHook>,
    #[serde(rename = "IsPaused", skip_serializing_if = "Option::is_none")]
    pub(crate) is_paused: ::std::option::Option<bool>,
    #[serde(rename = "Limits", skip_serializing_if = "Option::is_none")]
    pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_version: ::std::option::Option<i32>,
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    #[serde(rename = "TemplateConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub(crate) priority: ::std::option::Option<i32>,
}
impl WriteCampaignRequest {
    pub fn additional_treatments(&self) -> ::std::option::Option<&[crate::model::WriteTreatmentResource]> {
        self.additional_treatments.as_deref()
    }
    pub fn description(&self) -> ::std::option::Option<&str> {
        self.description.as_deref()
    }
    pub fn holdout_percent(&self) -> ::std::option::Option<i32> {
        self.holdout_percent
    }
    pub fn hook(&self) -> ::std::option::Option<&crate::model::CampaignHook> {
        self.hook.as_ref()
    }
    pub fn is_paused(&self) -> ::std::option::Option<bool> {
        self.is_paused
    }
    pub fn limits(&self) -> ::std::option::Option<&crate::model::CampaignLimits> {
        self.limits.as_ref()
    }
    pub fn message_configuration(&self) -> ::std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_version(&self) -> ::std::option::Option<i32> {
        self.segment_version
    }
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    pub fn template_configuration(&self) -> ::std::option::Option<&crate::model::TemplateConfiguration> {
        self.template_configuration.as_ref()
    }
    pub fn treatment_description(&self) -> ::std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> ::std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
    pub fn priority(&self) -> ::std::option::Option<i32> {
        self.priority
    }
    /// Creates a new builder-style object to manufacture [`WriteCampaignRequest`](crate::model::WriteCampaignRequest).
    pub fn builder() -> crate::model::write_campaign_request::Builder {
        crate::model::write_campaign_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::write_campaign_request::Builder {
        crate::model::write_campaign_request::Builder {
            additional_treatments: self.additional_treatments,
            description: self.description,
            holdout_percent: self.holdout_percent,
            hook: self.hook,
            is_paused: self.is_paused,
            limits: self.limits,
            message_configuration: self.message_configuration,
            name: self.name,
            schedule: self.schedule,
            segment_id: self.segment_id,
            segment_version: self.segment_version,
            tags: self.tags,
            template_configuration: self.template_configuration,
            treatment_description: self.treatment_description,
            treatment_name: self.treatment_name,
            priority: self.priority,
        }
    }
}
impl ::std::hash::Hash for WriteCampaignRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.additional_treatments, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.holdout_percent, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.hook, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_paused, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.limits, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.priority, state);
    }
}
impl ::std::fmt::Display for WriteCampaignRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("AdditionalTreatments", &self.additional_treatments);
        shape.field("Description", &self.description);
        shape.field("HoldoutPercent", &self.holdout_percent);
        shape.field("Hook", &self.hook);
        shape.field("IsPaused", &self.is_paused);
        shape.field("Limits", &self.limits);
        shape.field("MessageConfiguration", &self.message_configuration);
        shape.field("Name", &self.name);
        shape.field("Schedule", &self.schedule);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentVersion", &self.segment_version);
        shape.field("tags", &self.tags);
        shape.field("TemplateConfiguration", &self.template_configuration);
        shape.field("TreatmentDescription", &self.treatment_description);
        shape.field("TreatmentName", &self.treatment_name);
        shape.field("Priority", &self.priority);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WriteCampaignRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WriteCampaignRequest`](crate::model::WriteCampaignRequest).
pub mod write_campaign_request {

    /// A builder for [`WriteCampaignRequest`](crate::model::WriteCampaignRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: ::std::option::Option<::std::vec::Vec<crate::model::WriteTreatmentResource>>,
        pub(crate) description: ::std::option::Option<::std::string::String>,
        pub(crate) holdout_percent: ::std::option::Option<i32>,
        pub(crate) hook: ::std::option::Option<crate::model::CampaignHook>,
        pub(crate) is_paused: ::std::option::Option<bool>,
        pub(crate) limits: ::std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_version: ::std::option::Option<i32>,
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
        pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
        pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
        pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
        pub(crate) priority: ::std::option::Option<i32>,
    }
    impl Builder {
        /// Appends an item to `additional_treatments`.
        ///
        /// To override the contents of this collection use [`set_additional_treatments`](Self::set_additional_treatments).
        ///
        pub fn additional_treatments(mut self, input: crate::model::WriteTreatmentResource) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input);
            self.additional_treatments = ::std::option::Option::Some(v);
            self
        }
        pub fn set_additional_treatments(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::WriteTreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        pub fn get_additional_treatments(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::WriteTreatmentResource>> {
            &self.additional_treatments
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
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = ::std::option::Option::Some(input);
            self
        }
        pub fn set_holdout_percent(mut self, input: ::std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        pub fn get_holdout_percent(&self) -> &::std::option::Option<i32> {
            &self.holdout_percent
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = ::std::option::Option::Some(input);
            self
        }
        pub fn set_hook(mut self, input: ::std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn get_hook(&self) -> &::std::option::Option<crate::model::CampaignHook> {
            &self.hook
        }
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = ::std::option::Option::Some(input);
            self
        }
        pub fn set_is_paused(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        pub fn get_is_paused(&self) -> &::std::option::Option<bool> {
            &self.is_paused
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
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: ::std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn get_message_configuration(&self) -> &::std::option::Option<crate::model::MessageConfiguration> {
            &self.message_configuration
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
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::Schedule> {
            &self.schedule
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
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_version(mut self, input: ::std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        pub fn get_segment_version(&self) -> &::std::option::Option<i32> {
            &self.segment_version
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
        pub fn treatment_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn get_treatment_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_description
        }
        pub fn treatment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn get_treatment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_name
        }
        pub fn priority(mut self, input: i32) -> Self {
            self.priority = ::std::option::Option::Some(input);
            self
        }
        pub fn set_priority(mut self, input: ::std::option::Option<i32>) -> Self {
            self.priority = input;
            self
        }
        pub fn get_priority(&self) -> &::std::option::Option<i32> {
            &self.priority
        }
        /// Consumes the builder and constructs a [`WriteCampaignRequest`](crate::model::WriteCampaignRequest).
        pub fn build(self) -> crate::model::WriteCampaignRequest {
            crate::model::WriteCampaignRequest {
                additional_treatments: self.additional_treatments,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                is_paused: self.is_paused,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                tags: self.tags,
                template_configuration: self.template_configuration,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
                priority: self.priority,
            }
        }
    }
}

/// <p>Provides information about the status of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignState {
    /// <p>The current status of the campaign, or the current status of a treatment that belongs to an A/B test campaign.</p>
    #[serde(rename = "CampaignStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) campaign_status: ::std::option::Option<crate::model::CampaignStatus>,
}
impl CampaignState {
    /// <p>The current status of the campaign, or the current status of a treatment that belongs to an A/B test campaign.</p>
    pub fn campaign_status(&self) -> ::std::option::Option<&crate::model::CampaignStatus> {
        self.campaign_status.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignState`](crate::model::CampaignState).
    pub fn builder() -> crate::model::campaign_state::Builder {
        crate::model::campaign_state::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_state::Builder {
        crate::model::campaign_state::Builder {
            campaign_status: self.campaign_status,
        }
    }
}
impl ::std::hash::Hash for CampaignState {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_status, state);
    }
}
impl ::std::fmt::Display for CampaignState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignStatus", &self.campaign_status);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignState {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignState`](crate::model::CampaignState).
pub mod campaign_state {

    /// A builder for [`CampaignState`](crate::model::CampaignState).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_status: ::std::option::Option<crate::model::CampaignStatus>,
    }
    impl Builder {
        /// <p>The current status of the campaign, or the current status of a treatment that belongs to an A/B test campaign.</p>
        pub fn campaign_status(mut self, input: crate::model::CampaignStatus) -> Self {
            self.campaign_status = ::std::option::Option::Some(input);
            self
        }
        /// <p>The current status of the campaign, or the current status of a treatment that belongs to an A/B test campaign.</p>
        pub fn set_campaign_status(mut self, input: ::std::option::Option<crate::model::CampaignStatus>) -> Self {
            self.campaign_status = input;
            self
        }
        /// <p>The current status of the campaign, or the current status of a treatment that belongs to an A/B test campaign.</p>
        pub fn get_campaign_status(&self) -> &::std::option::Option<crate::model::CampaignStatus> {
            &self.campaign_status
        }
        /// Consumes the builder and constructs a [`CampaignState`](crate::model::CampaignState).
        pub fn build(self) -> crate::model::CampaignState {
            crate::model::CampaignState {
                campaign_status: self.campaign_status,
            }
        }
    }
}

/// <p>Specifies the settings for a campaign treatment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TreatmentResource {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
    /// <p>The allocated percentage of users (segment members) that the treatment is sent to.</p>
    #[serde(rename = "SizePercent", skip_serializing_if = "Option::is_none")]
    pub(crate) size_percent: ::std::option::Option<i32>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<crate::model::CampaignState>,
    #[serde(rename = "TemplateConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
}
impl TreatmentResource {
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn message_configuration(&self) -> ::std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    /// <p>The allocated percentage of users (segment members) that the treatment is sent to.</p>
    pub fn size_percent(&self) -> ::std::option::Option<i32> {
        self.size_percent
    }
    pub fn state(&self) -> ::std::option::Option<&crate::model::CampaignState> {
        self.state.as_ref()
    }
    pub fn template_configuration(&self) -> ::std::option::Option<&crate::model::TemplateConfiguration> {
        self.template_configuration.as_ref()
    }
    pub fn treatment_description(&self) -> ::std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> ::std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TreatmentResource`](crate::model::TreatmentResource).
    pub fn builder() -> crate::model::treatment_resource::Builder {
        crate::model::treatment_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::treatment_resource::Builder {
        crate::model::treatment_resource::Builder {
            id: self.id,
            message_configuration: self.message_configuration,
            schedule: self.schedule,
            size_percent: self.size_percent,
            state: self.state,
            template_configuration: self.template_configuration,
            treatment_description: self.treatment_description,
            treatment_name: self.treatment_name,
        }
    }
}
impl ::std::hash::Hash for TreatmentResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.size_percent, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_name, state);
    }
}
impl ::std::fmt::Display for TreatmentResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Id", &self.id);
        shape.field("MessageConfiguration", &self.message_configuration);
        shape.field("Schedule", &self.schedule);
        shape.field("SizePercent", &self.size_percent);
        shape.field("State", &self.state);
        shape.field("TemplateConfiguration", &self.template_configuration);
        shape.field("TreatmentDescription", &self.treatment_description);
        shape.field("TreatmentName", &self.treatment_name);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TreatmentResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TreatmentResource`](crate::model::TreatmentResource).
pub mod treatment_resource {

    /// A builder for [`TreatmentResource`](crate::model::TreatmentResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: ::std::option::Option<i32>,
        pub(crate) state: ::std::option::Option<crate::model::CampaignState>,
        pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
        pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
        pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
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
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: ::std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn get_message_configuration(&self) -> &::std::option::Option<crate::model::MessageConfiguration> {
            &self.message_configuration
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::Schedule> {
            &self.schedule
        }
        /// <p>The allocated percentage of users (segment members) that the treatment is sent to.</p>
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = ::std::option::Option::Some(input);
            self
        }
        /// <p>The allocated percentage of users (segment members) that the treatment is sent to.</p>
        pub fn set_size_percent(mut self, input: ::std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        /// <p>The allocated percentage of users (segment members) that the treatment is sent to.</p>
        pub fn get_size_percent(&self) -> &::std::option::Option<i32> {
            &self.size_percent
        }
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = ::std::option::Option::Some(input);
            self
        }
        pub fn set_state(mut self, input: ::std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        pub fn get_state(&self) -> &::std::option::Option<crate::model::CampaignState> {
            &self.state
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
        pub fn treatment_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn get_treatment_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_description
        }
        pub fn treatment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn get_treatment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_name
        }
        /// Consumes the builder and constructs a [`TreatmentResource`](crate::model::TreatmentResource).
        pub fn build(self) -> crate::model::TreatmentResource {
            crate::model::TreatmentResource {
                id: self.id,
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                state: self.state,
                template_configuration: self.template_configuration,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}

/// <p>Specifies the settings for a campaign treatment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct WriteTreatmentResource {
    #[serde(rename = "MessageConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
    #[serde(rename = "Schedule", skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
    #[serde(rename = "SizePercent", skip_serializing_if = "Option::is_none")]
    pub(crate) size_percent: ::std::option::Option<i32>,
    #[serde(rename = "TemplateConfiguration", skip_serializing_if = "Option::is_none")]
    pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
    #[serde(rename = "TreatmentDescription", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TreatmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
}
impl WriteTreatmentResource {
    pub fn message_configuration(&self) -> ::std::option::Option<&crate::model::MessageConfiguration> {
        self.message_configuration.as_ref()
    }
    pub fn schedule(&self) -> ::std::option::Option<&crate::model::Schedule> {
        self.schedule.as_ref()
    }
    pub fn size_percent(&self) -> ::std::option::Option<i32> {
        self.size_percent
    }
    pub fn template_configuration(&self) -> ::std::option::Option<&crate::model::TemplateConfiguration> {
        self.template_configuration.as_ref()
    }
    pub fn treatment_description(&self) -> ::std::option::Option<&str> {
        self.treatment_description.as_deref()
    }
    pub fn treatment_name(&self) -> ::std::option::Option<&str> {
        self.treatment_name.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`WriteTreatmentResource`](crate::model::WriteTreatmentResource).
    pub fn builder() -> crate::model::write_treatment_resource::Builder {
        crate::model::write_treatment_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::write_treatment_resource::Builder {
        crate::model::write_treatment_resource::Builder {
            message_configuration: self.message_configuration,
            schedule: self.schedule,
            size_percent: self.size_percent,
            template_configuration: self.template_configuration,
            treatment_description: self.treatment_description,
            treatment_name: self.treatment_name,
        }
    }
}
impl ::std::hash::Hash for WriteTreatmentResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.schedule, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.size_percent, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_configuration, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_description, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_name, state);
    }
}
impl ::std::fmt::Display for WriteTreatmentResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageConfiguration", &self.message_configuration);
        shape.field("Schedule", &self.schedule);
        shape.field("SizePercent", &self.size_percent);
        shape.field("TemplateConfiguration", &self.template_configuration);
        shape.field("TreatmentDescription", &self.treatment_description);
        shape.field("TreatmentName", &self.treatment_name);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for WriteTreatmentResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`WriteTreatmentResource`](crate::model::WriteTreatmentResource).
pub mod write_treatment_resource {

    /// A builder for [`WriteTreatmentResource`](crate::model::WriteTreatmentResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_configuration: ::std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: ::std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: ::std::option::Option<i32>,
        pub(crate) template_configuration: ::std::option::Option<crate::model::TemplateConfiguration>,
        pub(crate) treatment_description: ::std::option::Option<::std::string::String>,
        pub(crate) treatment_name: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: ::std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn get_message_configuration(&self) -> &::std::option::Option<crate::model::MessageConfiguration> {
            &self.message_configuration
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = ::std::option::Option::Some(input);
            self
        }
        pub fn set_schedule(mut self, input: ::std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn get_schedule(&self) -> &::std::option::Option<crate::model::Schedule> {
            &self.schedule
        }
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = ::std::option::Option::Some(input);
            self
        }
        pub fn set_size_percent(mut self, input: ::std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        pub fn get_size_percent(&self) -> &::std::option::Option<i32> {
            &self.size_percent
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
        pub fn treatment_description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_description = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn get_treatment_description(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_description
        }
        pub fn treatment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn get_treatment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_name
        }
        /// Consumes the builder and constructs a [`WriteTreatmentResource`](crate::model::WriteTreatmentResource).
        pub fn build(self) -> crate::model::WriteTreatmentResource {
            crate::model::WriteTreatmentResource {
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                template_configuration: self.template_configuration,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}

/// <p>Specifies the schedule settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Schedule {
    /// <p>The scheduled time, in ISO 8601 format, when the campaign ended or will end.</p>
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub(crate) end_time: ::std::option::Option<::std::string::String>,
    /// <p>The type of event that causes the campaign to be sent, if the value of the Frequency property is EVENT.</p>
    #[serde(rename = "EventFilter", skip_serializing_if = "Option::is_none")]
    pub(crate) event_filter: ::std::option::Option<crate::model::CampaignEventFilter>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub(crate) frequency: ::std::option::Option<crate::model::Frequency>,
    /// <p>Specifies whether the start and end times for the campaign schedule use each recipient's local time.</p>
    #[serde(rename = "IsLocalTime", skip_serializing_if = "Option::is_none")]
    pub(crate) is_local_time: ::std::option::Option<bool>,
    #[serde(rename = "QuietTime", skip_serializing_if = "Option::is_none")]
    pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
    /// <p>The scheduled time when the campaign began or will begin.</p>
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub(crate) start_time: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Timezone", skip_serializing_if = "Option::is_none")]
    pub(crate) timezone: ::std::option::Option<::std::string::String>,
}
impl Schedule {
    /// <p>The scheduled time, in ISO 8601 format, when the campaign ended or will end.</p>
    pub fn end_time(&self) -> ::std::option::Option<&str> {
        self.end_time.as_deref()
    }
    /// <p>The type of event that causes the campaign to be sent, if the value of the Frequency property is EVENT.</p>
    pub fn event_filter(&self) -> ::std::option::Option<&crate::model::CampaignEventFilter> {
        self.event_filter.as_ref()
    }
    pub fn frequency(&self) -> ::std::option::Option<&crate::model::Frequency> {
        self.frequency.as_ref()
    }
    /// <p>Specifies whether the start and end times for the campaign schedule use each recipient's local time.</p>
    pub fn is_local_time(&self) -> ::std::option::Option<bool> {
        self.is_local_time
    }
    pub fn quiet_time(&self) -> ::std::option::Option<&crate::model::QuietTime> {
        self.quiet_time.as_ref()
    }
    /// <p>The scheduled time when the campaign began or will begin.</p>
    pub fn start_time(&self) -> ::std::option::Option<&str> {
        self.start_time.as_deref()
    }
    pub fn timezone(&self) -> ::std::option::Option<&str> {
        self.timezone.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Schedule`](crate::model::Schedule).
    pub fn builder() -> crate::model::schedule::Builder {
        crate::model::schedule::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::schedule::Builder {
        crate::model::schedule::Builder {
            end_time: self.end_time,
            event_filter: self.event_filter,
            frequency: self.frequency,
            is_local_time: self.is_local_time,
            quiet_time: self.quiet_time,
            start_time: self.start_time,
            timezone: self.timezone,
        }
    }
}
impl ::std::hash::Hash for Schedule {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.end_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_filter, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.frequency, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.is_local_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.quiet_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start_time, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timezone, state);
    }
}
impl ::std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndTime", &self.end_time);
        shape.field("EventFilter", &self.event_filter);
        shape.field("Frequency", &self.frequency);
        shape.field("IsLocalTime", &self.is_local_time);
        shape.field("QuietTime", &self.quiet_time);
        shape.field("StartTime", &self.start_time);
        shape.field("Timezone", &self.timezone);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Schedule {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Schedule`](crate::model::Schedule).
pub mod schedule {

    /// A builder for [`Schedule`](crate::model::Schedule).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: ::std::option::Option<::std::string::String>,
        pub(crate) event_filter: ::std::option::Option<crate::model::CampaignEventFilter>,
        pub(crate) frequency: ::std::option::Option<crate::model::Frequency>,
        pub(crate) is_local_time: ::std::option::Option<bool>,
        pub(crate) quiet_time: ::std::option::Option<crate::model::QuietTime>,
        pub(crate) start_time: ::std::option::Option<::std::string::String>,
        pub(crate) timezone: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The scheduled time, in ISO 8601 format, when the campaign ended or will end.</p>
        pub fn end_time(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.end_time = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The scheduled time, in ISO 8601 format, when the campaign ended or will end.</p>
        pub fn set_end_time(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.end_time = input;
            self
        }
        /// <p>The scheduled time, in ISO 8601 format, when the campaign ended or will end.</p>
        pub fn get_end_time(&self) -> &::std::option::Option<::std::string::String> {
            &self.end_time
        }
        /// <p>The type of event that causes the campaign to be sent, if the value of the Frequency property is EVENT.</p>
        pub fn event_filter(mut self, input: crate::model::CampaignEventFilter) -> Self {
            self.event_filter = ::std::option::Option::Some(input);
            self
        }
        /// <p>The type of event that causes the campaign to be sent, if the value of the Frequency property is EVENT.</p>
        pub fn set_event_filter(mut self, input: ::std::option::Option<crate::model::CampaignEventFilter>) -> Self {
            self.event_filter = input;
            self
        }
        /// <p>The type of event that causes the campaign to be sent, if the value of the Frequency property is EVENT.</p>
        pub fn get_event_filter(&self) -> &::std::option::Option<crate::model::CampaignEventFilter> {
            &self.event_filter
        }
        pub fn frequency(mut self, input: crate::model::Frequency) -> Self {
            self.frequency = ::std::option::Option::Some(input);
            self
        }
        pub fn set_frequency(mut self, input: ::std::option::Option<crate::model::Frequency>) -> Self {
            self.frequency = input;
            self
        }
        pub fn get_frequency(&self) -> &::std::option::Option<crate::model::Frequency> {
            &self.frequency
        }
        /// <p>Specifies whether the start and end times for the campaign schedule use each recipient's local time.</p>
        pub fn is_local_time(mut self, input: bool) -> Self {
            self.is_local_time = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether the start and end times for the campaign schedule use each recipient's local time.</p>
        pub fn set_is_local_time(mut self, input: ::std::option::Option<bool>) -> Self {
            self.is_local_time = input;
            self
        }
        /// <p>Specifies whether the start and end times for the campaign schedule use each recipient's local time.</p>
        pub fn get_is_local_time(&self) -> &::std::option::Option<bool> {
            &self.is_local_time
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
        /// <p>The scheduled time when the campaign began or will begin.</p>
        pub fn start_time(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start_time = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The scheduled time when the campaign began or will begin.</p>
        pub fn set_start_time(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start_time = input;
            self
        }
        /// <p>The scheduled time when the campaign began or will begin.</p>
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
        /// Consumes the builder and constructs a [`Schedule`](crate::model::Schedule).
        pub fn build(self) -> crate::model::Schedule {
            crate::model::Schedule {
                end_time: self.end_time,
                event_filter: self.event_filter,
                frequency: self.frequency,
                is_local_time: self.is_local_time,
                quiet_time: self.quiet_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}

/// <p>Specifies the settings for events that cause a campaign to be sent.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignEventFilter {
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    pub(crate) dimensions: ::std::option::Option<crate::model::EventDimensions>,
    #[serde(rename = "FilterType", skip_serializing_if = "Option::is_none")]
    pub(crate) filter_type: ::std::option::Option<crate::model::FilterType>,
}
impl CampaignEventFilter {
    pub fn dimensions(&self) -> ::std::option::Option<&crate::model::EventDimensions> {
        self.dimensions.as_ref()
    }
    pub fn filter_type(&self) -> ::std::option::Option<&crate::model::FilterType> {
        self.filter_type.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignEventFilter`](crate::model::CampaignEventFilter).
    pub fn builder() -> crate::model::campaign_event_filter::Builder {
        crate::model::campaign_event_filter::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_event_filter::Builder {
        crate::model::campaign_event_filter::Builder {
            dimensions: self.dimensions,
            filter_type: self.filter_type,
        }
    }
}
impl ::std::hash::Hash for CampaignEventFilter {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.dimensions, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.filter_type, state);
    }
}
impl ::std::fmt::Display for CampaignEventFilter {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Dimensions", &self.dimensions);
        shape.field("FilterType", &self.filter_type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignEventFilter {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignEventFilter`](crate::model::CampaignEventFilter).
pub mod campaign_event_filter {

    /// A builder for [`CampaignEventFilter`](crate::model::CampaignEventFilter).
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
        /// Consumes the builder and constructs a [`CampaignEventFilter`](crate::model::CampaignEventFilter).
        pub fn build(self) -> crate::model::CampaignEventFilter {
            crate::model::CampaignEventFilter {
                dimensions: self.dimensions,
                filter_type: self.filter_type,
            }
        }
    }
}

/// <p>Specifies the dimensions for an event filter that determines when a campaign is sent or a journey activity is performed.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct EventDimensions {
    /// <p>One or more custom attributes that your application reports to Amazon Pinpoint.</p>
    #[serde(rename = "Attributes", skip_serializing_if = "Option::is_none")]
    pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
    /// <p>The name of the event that causes the campaign to be sent or the journey activity to be performed.</p>
    #[serde(rename = "EventType", skip_serializing_if = "Option::is_none")]
    pub(crate) event_type: ::std::option::Option<crate::model::SetDimension>,
    /// <p>One or more custom metrics that your application reports to Amazon Pinpoint.</p>
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>,
}
impl EventDimensions {
    /// <p>One or more custom attributes that your application reports to Amazon Pinpoint.</p>
    pub fn attributes(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>> {
        self.attributes.as_ref()
    }
    /// <p>The name of the event that causes the campaign to be sent or the journey activity to be performed.</p>
    pub fn event_type(&self) -> ::std::option::Option<&crate::model::SetDimension> {
        self.event_type.as_ref()
    }
    /// <p>One or more custom metrics that your application reports to Amazon Pinpoint.</p>
    pub fn metrics(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>> {
        self.metrics.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`EventDimensions`](crate::model::EventDimensions).
    pub fn builder() -> crate::model::event_dimensions::Builder {
        crate::model::event_dimensions::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::event_dimensions::Builder {
        crate::model::event_dimensions::Builder {
            attributes: self.attributes,
            event_type: self.event_type,
            metrics: self.metrics,
        }
    }
}
impl ::std::hash::Hash for EventDimensions {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.attributes, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.event_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.metrics, state);
    }
}
impl ::std::fmt::Display for EventDimensions {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Attributes", &self.attributes);
        shape.field("EventType", &self.event_type);
        shape.field("Metrics", &self.metrics);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for EventDimensions {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`EventDimensions`](crate::model::EventDimensions).
pub mod event_dimensions {

    /// A builder for [`EventDimensions`](crate::model::EventDimensions).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attributes: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>,
        pub(crate) event_type: ::std::option::Option<crate::model::SetDimension>,
        pub(crate) metrics: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>,
    }
    impl Builder {
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>One or more custom attributes that your application reports to Amazon Pinpoint.</p>
        pub fn attributes(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::AttributeDimension) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.attributes = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>One or more custom attributes that your application reports to Amazon Pinpoint.</p>
        pub fn set_attributes(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>One or more custom attributes that your application reports to Amazon Pinpoint.</p>
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
        /// <p>The name of the event that causes the campaign to be sent or the journey activity to be performed.</p>
        pub fn event_type(mut self, input: crate::model::SetDimension) -> Self {
            self.event_type = ::std::option::Option::Some(input);
            self
        }
        /// <p>The name of the event that causes the campaign to be sent or the journey activity to be performed.</p>
        pub fn set_event_type(mut self, input: ::std::option::Option<crate::model::SetDimension>) -> Self {
            self.event_type = input;
            self
        }
        /// <p>The name of the event that causes the campaign to be sent or the journey activity to be performed.</p>
        pub fn get_event_type(&self) -> &::std::option::Option<crate::model::SetDimension> {
            &self.event_type
        }
        /// Adds a key-value pair to `metrics`.
        ///
        /// To override the contents of this collection use [`set_metrics`](Self::set_metrics).
        ///
        /// <p>One or more custom metrics that your application reports to Amazon Pinpoint.</p>
        pub fn metrics(mut self, k: impl ::std::convert::Into<::std::string::String>, v: crate::model::MetricDimension) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.metrics = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>One or more custom metrics that your application reports to Amazon Pinpoint.</p>
        pub fn set_metrics(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, crate::model::MetricDimension>>) -> Self {
            self.metrics = input;
            self
        }
        /// <p>One or more custom metrics that your application reports to Amazon Pinpoint.</p>
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
        /// Consumes the builder and constructs a [`EventDimensions`](crate::model::EventDimensions).
        pub fn build(self) -> crate::model::EventDimensions {
            crate::model::EventDimensions {
                attributes: self.attributes,
                event_type: self.event_type,
                metrics: self.metrics,
            }
        }
    }
}

/// <p>Specifies the message configuration settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct MessageConfiguration {
    /// <p>The message that the campaign sends through the ADM (Amazon Device Messaging) channel.</p>
    #[serde(rename = "ADMMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) adm_message: ::std::option::Option<crate::model::Message>,
    /// <p>The message that the campaign sends through the APNs (Apple Push Notification service) channel.</p>
    #[serde(rename = "APNSMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) apns_message: ::std::option::Option<crate::model::Message>,
    #[serde(rename = "BaiduMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) baidu_message: ::std::option::Option<crate::model::Message>,
    #[serde(rename = "CustomMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) custom_message: ::std::option::Option<crate::model::CampaignCustomMessage>,
    /// <p>The default message that the campaign sends through all the channels that are configured for the campaign.</p>
    #[serde(rename = "DefaultMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) default_message: ::std::option::Option<crate::model::Message>,
    #[serde(rename = "EmailMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) email_message: ::std::option::Option<crate::model::CampaignEmailMessage>,
    #[serde(rename = "GCMMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) gcm_message: ::std::option::Option<crate::model::Message>,
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub(crate) sms_message: ::std::option::Option<crate::model::CampaignSmsMessage>,
}
impl MessageConfiguration {
    /// <p>The message that the campaign sends through the ADM (Amazon Device Messaging) channel.</p>
    pub fn adm_message(&self) -> ::std::option::Option<&crate::model::Message> {
        self.adm_message.as_ref()
    }
    /// <p>The message that the campaign sends through the APNs (Apple Push Notification service) channel.</p>
    pub fn apns_message(&self) -> ::std::option::Option<&crate::model::Message> {
        self.apns_message.as_ref()
    }
    pub fn baidu_message(&self) -> ::std::option::Option<&crate::model::Message> {
        self.baidu_message.as_ref()
    }
    pub fn custom_message(&self) -> ::std::option::Option<&crate::model::CampaignCustomMessage> {
        self.custom_message.as_ref()
    }
    /// <p>The default message that the campaign sends through all the channels that are configured for the campaign.</p>
    pub fn default_message(&self) -> ::std::option::Option<&crate::model::Message> {
        self.default_message.as_ref()
    }
    pub fn email_message(&self) -> ::std::option::Option<&crate::model::CampaignEmailMessage> {
        self.email_message.as_ref()
    }
    pub fn gcm_message(&self) -> ::std::option::Option<&crate::model::Message> {
        self.gcm_message.as_ref()
    }
    pub fn sms_message(&self) -> ::std::option::Option<&crate::model::CampaignSmsMessage> {
        self.sms_message.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`MessageConfiguration`](crate::model::MessageConfiguration).
    pub fn builder() -> crate::model::message_configuration::Builder {
        crate::model::message_configuration::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message_configuration::Builder {
        crate::model::message_configuration::Builder {
            adm_message: self.adm_message,
            apns_message: self.apns_message,
            baidu_message: self.baidu_message,
            custom_message: self.custom_message,
            default_message: self.default_message,
            email_message: self.email_message,
            gcm_message: self.gcm_message,
            sms_message: self.sms_message,
        }
    }
}
impl ::std::hash::Hash for MessageConfiguration {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.adm_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.baidu_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.custom_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.default_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_message, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_message, state);
    }
}
impl ::std::fmt::Display for MessageConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ADMMessage", &self.adm_message);
        shape.field("APNSMessage", &self.apns_message);
        shape.field("BaiduMessage", &self.baidu_message);
        shape.field("CustomMessage", &self.custom_message);
        shape.field("DefaultMessage", &self.default_message);
        shape.field("EmailMessage", &self.email_message);
        shape.field("GCMMessage", &self.gcm_message);
        shape.field("SMSMessage", &self.sms_message);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for MessageConfiguration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`MessageConfiguration`](crate::model::MessageConfiguration).
pub mod message_configuration {

    /// A builder for [`MessageConfiguration`](crate::model::MessageConfiguration).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) adm_message: ::std::option::Option<crate::model::Message>,
        pub(crate) apns_message: ::std::option::Option<crate::model::Message>,
        pub(crate) baidu_message: ::std::option::Option<crate::model::Message>,
        pub(crate) custom_message: ::std::option::Option<crate::model::CampaignCustomMessage>,
        pub(crate) default_message: ::std::option::Option<crate::model::Message>,
        pub(crate) email_message: ::std::option::Option<crate::model::CampaignEmailMessage>,
        pub(crate) gcm_message: ::std::option::Option<crate::model::Message>,
        pub(crate) sms_message: ::std::option::Option<crate::model::CampaignSmsMessage>,
    }
    impl Builder {
        /// <p>The message that the campaign sends through the ADM (Amazon Device Messaging) channel.</p>
        pub fn adm_message(mut self, input: crate::model::Message) -> Self {
            self.adm_message = ::std::option::Option::Some(input);
            self
        }
        /// <p>The message that the campaign sends through the ADM (Amazon Device Messaging) channel.</p>
        pub fn set_adm_message(mut self, input: ::std::option::Option<crate::model::Message>) -> Self {
            self.adm_message = input;
            self
        }
        /// <p>The message that the campaign sends through the ADM (Amazon Device Messaging) channel.</p>
        pub fn get_adm_message(&self) -> &::std::option::Option<crate::model::Message> {
            &self.adm_message
        }
        /// <p>The message that the campaign sends through the APNs (Apple Push Notification service) channel.</p>
        pub fn apns_message(mut self, input: crate::model::Message) -> Self {
            self.apns_message = ::std::option::Option::Some(input);
            self
        }
        /// <p>The message that the campaign sends through the APNs (Apple Push Notification service) channel.</p>
        pub fn set_apns_message(mut self, input: ::std::option::Option<crate::model::Message>) -> Self {
            self.apns_message = input;
            self
        }
        /// <p>The message that the campaign sends through the APNs (Apple Push Notification service) channel.</p>
        pub fn get_apns_message(&self) -> &::std::option::Option<crate::model::Message> {
            &self.apns_message
        }
        pub fn baidu_message(mut self, input: crate::model::Message) -> Self {
            self.baidu_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_baidu_message(mut self, input: ::std::option::Option<crate::model::Message>) -> Self {
            self.baidu_message = input;
            self
        }
        pub fn get_baidu_message(&self) -> &::std::option::Option<crate::model::Message> {
            &self.baidu_message
        }
        pub fn custom_message(mut self, input: crate::model::CampaignCustomMessage) -> Self {
            self.custom_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_custom_message(mut self, input: ::std::option::Option<crate::model::CampaignCustomMessage>) -> Self {
            self.custom_message = input;
            self
        }
        pub fn get_custom_message(&self) -> &::std::option::Option<crate::model::CampaignCustomMessage> {
            &self.custom_message
        }
        /// <p>The default message that the campaign sends through all the channels that are configured for the campaign.</p>
        pub fn default_message(mut self, input: crate::model::Message) -> Self {
            self.default_message = ::std::option::Option::Some(input);
            self
        }
        /// <p>The default message that the campaign sends through all the channels that are configured for the campaign.</p>
        pub fn set_default_message(mut self, input: ::std::option::Option<crate::model::Message>) -> Self {
            self.default_message = input;
            self
        }
        /// <p>The default message that the campaign sends through all the channels that are configured for the campaign.</p>
        pub fn get_default_message(&self) -> &::std::option::Option<crate::model::Message> {
            &self.default_message
        }
        pub fn email_message(mut self, input: crate::model::CampaignEmailMessage) -> Self {
            self.email_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_message(mut self, input: ::std::option::Option<crate::model::CampaignEmailMessage>) -> Self {
            self.email_message = input;
            self
        }
        pub fn get_email_message(&self) -> &::std::option::Option<crate::model::CampaignEmailMessage> {
            &self.email_message
        }
        pub fn gcm_message(mut self, input: crate::model::Message) -> Self {
            self.gcm_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: ::std::option::Option<crate::model::Message>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn get_gcm_message(&self) -> &::std::option::Option<crate::model::Message> {
            &self.gcm_message
        }
        pub fn sms_message(mut self, input: crate::model::CampaignSmsMessage) -> Self {
            self.sms_message = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: ::std::option::Option<crate::model::CampaignSmsMessage>) -> Self {
            self.sms_message = input;
            self
        }
        pub fn get_sms_message(&self) -> &::std::option::Option<crate::model::CampaignSmsMessage> {
            &self.sms_message
        }
        /// Consumes the builder and constructs a [`MessageConfiguration`](crate::model::MessageConfiguration).
        pub fn build(self) -> crate::model::MessageConfiguration {
            crate::model::MessageConfiguration {
                adm_message: self.adm_message,
                apns_message: self.apns_message,
                baidu_message: self.baidu_message,
                custom_message: self.custom_message,
                default_message: self.default_message,
                email_message: self.email_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}

/// <p>Specifies the content and settings for a push notification that's sent to recipients of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Message {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub(crate) action: ::std::option::Option<crate::model::Action>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ImageIconUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) image_icon_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ImageSmallIconUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) image_small_icon_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ImageUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) image_url: ::std::option::Option<::std::string::String>,
    /// <p>The JSON payload to use for a silent push notification.</p>
    #[serde(rename = "JsonBody", skip_serializing_if = "Option::is_none")]
    pub(crate) json_body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    pub(crate) media_url: ::std::option::Option<::std::string::String>,
    /// <p>The raw, JSON-formatted string to use as the payload for the notification message. If specified, this value overrides all other content for the message.</p>
    #[serde(rename = "RawContent", skip_serializing_if = "Option::is_none")]
    pub(crate) raw_content: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SilentPush", skip_serializing_if = "Option::is_none")]
    pub(crate) silent_push: ::std::option::Option<bool>,
    /// <p>The number of seconds that the push notification service should keep the message, if the service is unable to deliver the notification the first time.</p>
    #[serde(rename = "TimeToLive", skip_serializing_if = "Option::is_none")]
    pub(crate) time_to_live: ::std::option::Option<i32>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub(crate) title: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub(crate) url: ::std::option::Option<::std::string::String>,
}
impl Message {
    pub fn action(&self) -> ::std::option::Option<&crate::model::Action> {
        self.action.as_ref()
    }
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn image_icon_url(&self) -> ::std::option::Option<&str> {
        self.image_icon_url.as_deref()
    }
    pub fn image_small_icon_url(&self) -> ::std::option::Option<&str> {
        self.image_small_icon_url.as_deref()
    }
    pub fn image_url(&self) -> ::std::option::Option<&str> {
        self.image_url.as_deref()
    }
    /// <p>The JSON payload to use for a silent push notification.</p>
    pub fn json_body(&self) -> ::std::option::Option<&str> {
        self.json_body.as_deref()
    }
    pub fn media_url(&self) -> ::std::option::Option<&str> {
        self.media_url.as_deref()
    }
    /// <p>The raw, JSON-formatted string to use as the payload for the notification message. If specified, this value overrides all other content for the message.</p>
    pub fn raw_content(&self) -> ::std::option::Option<&str> {
        self.raw_content.as_deref()
    }
    pub fn silent_push(&self) -> ::std::option::Option<bool> {
        self.silent_push
    }
    /// <p>The number of seconds that the push notification service should keep the message, if the service is unable to deliver the notification the first time.</p>
    pub fn time_to_live(&self) -> ::std::option::Option<i32> {
        self.time_to_live
    }
    pub fn title(&self) -> ::std::option::Option<&str> {
        self.title.as_deref()
    }
    pub fn url(&self) -> ::std::option::Option<&str> {
        self.url.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Message`](crate::model::Message).
    pub fn builder() -> crate::model::message::Builder {
        crate::model::message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::message::Builder {
        crate::model::message::Builder {
            action: self.action,
            body: self.body,
            image_icon_url: self.image_icon_url,
            image_small_icon_url: self.image_small_icon_url,
            image_url: self.image_url,
            json_body: self.json_body,
            media_url: self.media_url,
            raw_content: self.raw_content,
            silent_push: self.silent_push,
            time_to_live: self.time_to_live,
            title: self.title,
            url: self.url,
        }
    }
}
impl ::std::hash::Hash for Message {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.action, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.image_icon_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.image_small_icon_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.image_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.json_body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.media_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.raw_content, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.silent_push, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.time_to_live, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.url, state);
    }
}
impl ::std::fmt::Display for Message {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Action", &self.action);
        shape.field("Body", &self.body);
        shape.field("ImageIconUrl", &self.image_icon_url);
        shape.field("ImageSmallIconUrl", &self.image_small_icon_url);
        shape.field("ImageUrl", &self.image_url);
        shape.field("JsonBody", &self.json_body);
        shape.field("MediaUrl", &self.media_url);
        shape.field("RawContent", &self.raw_content);
        shape.field("SilentPush", &self.silent_push);
        shape.field("TimeToLive", &self.time_to_live);
        shape.field("Title", &self.title);
        shape.field("Url", &self.url);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Message {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Message`](crate::model::Message).
pub mod message {

    /// A builder for [`Message`](crate::model::Message).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: ::std::option::Option<crate::model::Action>,
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) image_icon_url: ::std::option::Option<::std::string::String>,
        pub(crate) image_small_icon_url: ::std::option::Option<::std::string::String>,
        pub(crate) image_url: ::std::option::Option<::std::string::String>,
        pub(crate) json_body: ::std::option::Option<::std::string::String>,
        pub(crate) media_url: ::std::option::Option<::std::string::String>,
        pub(crate) raw_content: ::std::option::Option<::std::string::String>,
        pub(crate) silent_push: ::std::option::Option<bool>,
        pub(crate) time_to_live: ::std::option::Option<i32>,
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
        pub fn image_icon_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.image_icon_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_image_icon_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        pub fn get_image_icon_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.image_icon_url
        }
        pub fn image_small_icon_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.image_small_icon_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_image_small_icon_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.image_small_icon_url = input;
            self
        }
        pub fn get_image_small_icon_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.image_small_icon_url
        }
        pub fn image_url(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.image_url = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_image_url(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        pub fn get_image_url(&self) -> &::std::option::Option<::std::string::String> {
            &self.image_url
        }
        /// <p>The JSON payload to use for a silent push notification.</p>
        pub fn json_body(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.json_body = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The JSON payload to use for a silent push notification.</p>
        pub fn set_json_body(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.json_body = input;
            self
        }
        /// <p>The JSON payload to use for a silent push notification.</p>
        pub fn get_json_body(&self) -> &::std::option::Option<::std::string::String> {
            &self.json_body
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
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message. If specified, this value overrides all other content for the message.</p>
        pub fn raw_content(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.raw_content = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message. If specified, this value overrides all other content for the message.</p>
        pub fn set_raw_content(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the notification message. If specified, this value overrides all other content for the message.</p>
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
        /// <p>The number of seconds that the push notification service should keep the message, if the service is unable to deliver the notification the first time.</p>
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = ::std::option::Option::Some(input);
            self
        }
        /// <p>The number of seconds that the push notification service should keep the message, if the service is unable to deliver the notification the first time.</p>
        pub fn set_time_to_live(mut self, input: ::std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        /// <p>The number of seconds that the push notification service should keep the message, if the service is unable to deliver the notification the first time.</p>
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
        /// Consumes the builder and constructs a [`Message`](crate::model::Message).
        pub fn build(self) -> crate::model::Message {
            crate::model::Message {
                action: self.action,
                body: self.body,
                image_icon_url: self.image_icon_url,
                image_small_icon_url: self.image_small_icon_url,
                image_url: self.image_url,
                json_body: self.json_body,
                media_url: self.media_url,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}

/// <p>Specifies the content and "From" address for an email message that's sent to recipients of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignEmailMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "FromAddress", skip_serializing_if = "Option::is_none")]
    pub(crate) from_address: ::std::option::Option<::std::string::String>,
    #[serde(rename = "HtmlBody", skip_serializing_if = "Option::is_none")]
    pub(crate) html_body: ::std::option::Option<::std::string::String>,
    /// <p>The subject line, or title, of the email.</p>
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub(crate) title: ::std::option::Option<::std::string::String>,
}
impl CampaignEmailMessage {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
    }
    pub fn from_address(&self) -> ::std::option::Option<&str> {
        self.from_address.as_deref()
    }
    pub fn html_body(&self) -> ::std::option::Option<&str> {
        self.html_body.as_deref()
    }
    /// <p>The subject line, or title, of the email.</p>
    pub fn title(&self) -> ::std::option::Option<&str> {
        self.title.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignEmailMessage`](crate::model::CampaignEmailMessage).
    pub fn builder() -> crate::model::campaign_email_message::Builder {
        crate::model::campaign_email_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_email_message::Builder {
        crate::model::campaign_email_message::Builder {
            body: self.body,
            from_address: self.from_address,
            html_body: self.html_body,
            title: self.title,
        }
    }
}
impl ::std::hash::Hash for CampaignEmailMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.from_address, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.html_body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.title, state);
    }
}
impl ::std::fmt::Display for CampaignEmailMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("FromAddress", &self.from_address);
        shape.field("HtmlBody", &self.html_body);
        shape.field("Title", &self.title);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignEmailMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignEmailMessage`](crate::model::CampaignEmailMessage).
pub mod campaign_email_message {

    /// A builder for [`CampaignEmailMessage`](crate::model::CampaignEmailMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) from_address: ::std::option::Option<::std::string::String>,
        pub(crate) html_body: ::std::option::Option<::std::string::String>,
        pub(crate) title: ::std::option::Option<::std::string::String>,
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
        pub fn html_body(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.html_body = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_html_body(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.html_body = input;
            self
        }
        pub fn get_html_body(&self) -> &::std::option::Option<::std::string::String> {
            &self.html_body
        }
        /// <p>The subject line, or title, of the email.</p>
        pub fn title(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.title = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The subject line, or title, of the email.</p>
        pub fn set_title(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.title = input;
            self
        }
        /// <p>The subject line, or title, of the email.</p>
        pub fn get_title(&self) -> &::std::option::Option<::std::string::String> {
            &self.title
        }
        /// Consumes the builder and constructs a [`CampaignEmailMessage`](crate::model::CampaignEmailMessage).
        pub fn build(self) -> crate::model::CampaignEmailMessage {
            crate::model::CampaignEmailMessage {
                body: self.body,
                from_address: self.from_address,
                html_body: self.html_body,
                title: self.title,
            }
        }
    }
}

/// <p>Specifies the content and settings for an SMS message that's sent to recipients of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignSmsMessage {
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub(crate) body: ::std::option::Option<::std::string::String>,
    #[serde(rename = "MessageType", skip_serializing_if = "Option::is_none")]
    pub(crate) message_type: ::std::option::Option<crate::model::MessageType>,
    #[serde(rename = "OriginationNumber", skip_serializing_if = "Option::is_none")]
    pub(crate) origination_number: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub(crate) sender_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "EntityId", skip_serializing_if = "Option::is_none")]
    pub(crate) entity_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "TemplateId", skip_serializing_if = "Option::is_none")]
    pub(crate) template_id: ::std::option::Option<::std::string::String>,
}
impl CampaignSmsMessage {
    pub fn body(&self) -> ::std::option::Option<&str> {
        self.body.as_deref()
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
    pub fn entity_id(&self) -> ::std::option::Option<&str> {
        self.entity_id.as_deref()
    }
    pub fn template_id(&self) -> ::std::option::Option<&str> {
        self.template_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignSmsMessage`](crate::model::CampaignSmsMessage).
    pub fn builder() -> crate::model::campaign_sms_message::Builder {
        crate::model::campaign_sms_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_sms_message::Builder {
        crate::model::campaign_sms_message::Builder {
            body: self.body,
            message_type: self.message_type,
            origination_number: self.origination_number,
            sender_id: self.sender_id,
            entity_id: self.entity_id,
            template_id: self.template_id,
        }
    }
}
impl ::std::hash::Hash for CampaignSmsMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.body, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_type, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.origination_number, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sender_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.entity_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_id, state);
    }
}
impl ::std::fmt::Display for CampaignSmsMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Body", &self.body);
        shape.field("MessageType", &self.message_type);
        shape.field("OriginationNumber", &self.origination_number);
        shape.field("SenderId", &self.sender_id);
        shape.field("EntityId", &self.entity_id);
        shape.field("TemplateId", &self.template_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignSmsMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignSmsMessage`](crate::model::CampaignSmsMessage).
pub mod campaign_sms_message {

    /// A builder for [`CampaignSmsMessage`](crate::model::CampaignSmsMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: ::std::option::Option<::std::string::String>,
        pub(crate) message_type: ::std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: ::std::option::Option<::std::string::String>,
        pub(crate) sender_id: ::std::option::Option<::std::string::String>,
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
        /// Consumes the builder and constructs a [`CampaignSmsMessage`](crate::model::CampaignSmsMessage).
        pub fn build(self) -> crate::model::CampaignSmsMessage {
            crate::model::CampaignSmsMessage {
                body: self.body,
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
                entity_id: self.entity_id,
                template_id: self.template_id,
            }
        }
    }
}

/// <p>Specifies the contents of a message that's sent through a custom channel to recipients of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct CampaignCustomMessage {
    /// <p>The raw, JSON-formatted string to use as the payload for the message.</p>
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub(crate) data: ::std::option::Option<::std::string::String>,
}
impl CampaignCustomMessage {
    /// <p>The raw, JSON-formatted string to use as the payload for the message.</p>
    pub fn data(&self) -> ::std::option::Option<&str> {
        self.data.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`CampaignCustomMessage`](crate::model::CampaignCustomMessage).
    pub fn builder() -> crate::model::campaign_custom_message::Builder {
        crate::model::campaign_custom_message::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::campaign_custom_message::Builder {
        crate::model::campaign_custom_message::Builder {
            data: self.data,
        }
    }
}
impl ::std::hash::Hash for CampaignCustomMessage {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.data, state);
    }
}
impl ::std::fmt::Display for CampaignCustomMessage {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Data", &self.data);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CampaignCustomMessage {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CampaignCustomMessage`](crate::model::CampaignCustomMessage).
pub mod campaign_custom_message {

    /// A builder for [`CampaignCustomMessage`](crate::model::CampaignCustomMessage).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) data: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The raw, JSON-formatted string to use as the payload for the message.</p>
        pub fn data(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.data = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the message.</p>
        pub fn set_data(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.data = input;
            self
        }
        /// <p>The raw, JSON-formatted string to use as the payload for the message.</p>
        pub fn get_data(&self) -> &::std::option::Option<::std::string::String> {
            &self.data
        }
        /// Consumes the builder and constructs a [`CampaignCustomMessage`](crate::model::CampaignCustomMessage).
        pub fn build(self) -> crate::model::CampaignCustomMessage {
            crate::model::CampaignCustomMessage {
                data: self.data,
            }
        }
    }
}

/// <p>Specifies the message template to use for the message, for each type of channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TemplateConfiguration {
    #[serde(rename = "EmailTemplate", skip_serializing_if = "Option::is_none")]
    pub(crate) email_template: ::std::option::Option<crate::model::Template>,
    #[serde(rename = "PushTemplate", skip_serializing_if = "Option::is_none")]
    pub(crate) push_template: ::std::option::Option<crate::model::Template>,
    #[serde(rename = "SMSTemplate", skip_serializing_if = "Option::is_none")]
    pub(crate) sms_template: ::std::option::Option<crate::model::Template>,
    #[serde(rename = "VoiceTemplate", skip_serializing_if = "Option::is_none")]
    pub(crate) voice_template: ::std::option::Option<crate::model::Template>,
}
impl TemplateConfiguration {
    pub fn email_template(&self) -> ::std::option::Option<&crate::model::Template> {
        self.email_template.as_ref()
    }
    pub fn push_template(&self) -> ::std::option::Option<&crate::model::Template> {
        self.push_template.as_ref()
    }
    pub fn sms_template(&self) -> ::std::option::Option<&crate::model::Template> {
        self.sms_template.as_ref()
    }
    pub fn voice_template(&self) -> ::std::option::Option<&crate::model::Template> {
        self.voice_template.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`TemplateConfiguration`](crate::model::TemplateConfiguration).
    pub fn builder() -> crate::model::template_configuration::Builder {
        crate::model::template_configuration::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::template_configuration::Builder {
        crate::model::template_configuration::Builder {
            email_template: self.email_template,
            push_template: self.push_template,
            sms_template: self.sms_template,
            voice_template: self.voice_template,
        }
    }
}
impl ::std::hash::Hash for TemplateConfiguration {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_template, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.push_template, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_template, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.voice_template, state);
    }
}
impl ::std::fmt::Display for TemplateConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EmailTemplate", &self.email_template);
        shape.field("PushTemplate", &self.push_template);
        shape.field("SMSTemplate", &self.sms_template);
        shape.field("VoiceTemplate", &self.voice_template);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TemplateConfiguration {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TemplateConfiguration`](crate::model::TemplateConfiguration).
pub mod template_configuration {

    /// A builder for [`TemplateConfiguration`](crate::model::TemplateConfiguration).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_template: ::std::option::Option<crate::model::Template>,
        pub(crate) push_template: ::std::option::Option<crate::model::Template>,
        pub(crate) sms_template: ::std::option::Option<crate::model::Template>,
        pub(crate) voice_template: ::std::option::Option<crate::model::Template>,
    }
    impl Builder {
        pub fn email_template(mut self, input: crate::model::Template) -> Self {
            self.email_template = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_template(mut self, input: ::std::option::Option<crate::model::Template>) -> Self {
            self.email_template = input;
            self
        }
        pub fn get_email_template(&self) -> &::std::option::Option<crate::model::Template> {
            &self.email_template
        }
        pub fn push_template(mut self, input: crate::model::Template) -> Self {
            self.push_template = ::std::option::Option::Some(input);
            self
        }
        pub fn set_push_template(mut self, input: ::std::option::Option<crate::model::Template>) -> Self {
            self.push_template = input;
            self
        }
        pub fn get_push_template(&self) -> &::std::option::Option<crate::model::Template> {
            &self.push_template
        }
        pub fn sms_template(mut self, input: crate::model::Template) -> Self {
            self.sms_template = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_template(mut self, input: ::std::option::Option<crate::model::Template>) -> Self {
            self.sms_template = input;
            self
        }
        pub fn get_sms_template(&self) -> &::std::option::Option<crate::model::Template> {
            &self.sms_template
        }
        pub fn voice_template(mut self, input: crate::model::Template) -> Self {
            self.voice_template = ::std::option::Option::Some(input);
            self
        }
        pub fn set_voice_template(mut self, input: ::std::option::Option<crate::model::Template>) -> Self {
            self.voice_template = input;
            self
        }
        pub fn get_voice_template(&self) -> &::std::option::Option<crate::model::Template> {
            &self.voice_template
        }
        /// Consumes the builder and constructs a [`TemplateConfiguration`](crate::model::TemplateConfiguration).
        pub fn build(self) -> crate::model::TemplateConfiguration {
            crate::model::TemplateConfiguration {
                email_template: self.email_template,
                push_template: self.push_template,
                sms_template: self.sms_template,
                voice_template: self.voice_template,
            }
        }
    }
}

/// <p>Specifies the name and version of the message template to use for the message.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct Template {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub(crate) name: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier for the version of the message template to use for the message.</p>
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl Template {
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The unique identifier for the version of the message template to use for the message.</p>
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`Template`](crate::model::Template).
    pub fn builder() -> crate::model::template::Builder {
        crate::model::template::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::template::Builder {
        crate::model::template::Builder {
            name: self.name,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for Template {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for Template {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Name", &self.name);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for Template {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`Template`](crate::model::Template).
pub mod template {

    /// A builder for [`Template`](crate::model::Template).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// <p>The unique identifier for the version of the message template to use for the message.</p>
        pub fn version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.version = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the version of the message template to use for the message.</p>
        pub fn set_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// <p>The unique identifier for the version of the message template to use for the message.</p>
        pub fn get_version(&self) -> &::std::option::Option<::std::string::String> {
            &self.version
        }
        /// Consumes the builder and constructs a [`Template`](crate::model::Template).
        pub fn build(self) -> crate::model::Template {
            crate::model::Template {
                name: self.name,
                version: self.version,
            }
        }
    }
}

/// <p>Provides information about an activity that was performed by a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ActivityResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CampaignId", skip_serializing_if = "Option::is_none")]
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub(crate) end: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies whether the activity succeeded. Possible values are SUCCESS and FAIL.</p>
    #[serde(rename = "Result", skip_serializing_if = "Option::is_none")]
    pub(crate) result: ::std::option::Option<::std::string::String>,
    #[serde(rename = "ScheduledStart", skip_serializing_if = "Option::is_none")]
    pub(crate) scheduled_start: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    pub(crate) start: ::std::option::Option<::std::string::String>,
    /// <p>The current status of the activity.</p>
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub(crate) state: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SuccessfulEndpointCount", skip_serializing_if = "Option::is_none")]
    pub(crate) successful_endpoint_count: ::std::option::Option<i32>,
    #[serde(rename = "TimezonesCompletedCount", skip_serializing_if = "Option::is_none")]
    pub(crate) timezones_completed_count: ::std::option::Option<i32>,
    #[serde(rename = "TimezonesTotalCount", skip_serializing_if = "Option::is_none")]
    pub(crate) timezones_total_count: ::std::option::Option<i32>,
    #[serde(rename = "TotalEndpointCount", skip_serializing_if = "Option::is_none")]
    pub(crate) total_endpoint_count: ::std::option::Option<i32>,
    #[serde(rename = "TreatmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) treatment_id: ::std::option::Option<::std::string::String>,
}
impl ActivityResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn end(&self) -> ::std::option::Option<&str> {
        self.end.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>Specifies whether the activity succeeded. Possible values are SUCCESS and FAIL.</p>
    pub fn result(&self) -> ::std::option::Option<&str> {
        self.result.as_deref()
    }
    pub fn scheduled_start(&self) -> ::std::option::Option<&str> {
        self.scheduled_start.as_deref()
    }
    pub fn start(&self) -> ::std::option::Option<&str> {
        self.start.as_deref()
    }
    /// <p>The current status of the activity.</p>
    pub fn state(&self) -> ::std::option::Option<&str> {
        self.state.as_deref()
    }
    pub fn successful_endpoint_count(&self) -> ::std::option::Option<i32> {
        self.successful_endpoint_count
    }
    pub fn timezones_completed_count(&self) -> ::std::option::Option<i32> {
        self.timezones_completed_count
    }
    pub fn timezones_total_count(&self) -> ::std::option::Option<i32> {
        self.timezones_total_count
    }
    pub fn total_endpoint_count(&self) -> ::std::option::Option<i32> {
        self.total_endpoint_count
    }
    pub fn treatment_id(&self) -> ::std::option::Option<&str> {
        self.treatment_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ActivityResponse`](crate::model::ActivityResponse).
    pub fn builder() -> crate::model::activity_response::Builder {
        crate::model::activity_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::activity_response::Builder {
        crate::model::activity_response::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
            end: self.end,
            id: self.id,
            result: self.result,
            scheduled_start: self.scheduled_start,
            start: self.start,
            state: self.state,
            successful_endpoint_count: self.successful_endpoint_count,
            timezones_completed_count: self.timezones_completed_count,
            timezones_total_count: self.timezones_total_count,
            total_endpoint_count: self.total_endpoint_count,
            treatment_id: self.treatment_id,
        }
    }
}
impl ::std::hash::Hash for ActivityResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.end, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.result, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.scheduled_start, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.start, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.state, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.successful_endpoint_count, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timezones_completed_count, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.timezones_total_count, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_endpoint_count, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.treatment_id, state);
    }
}
impl ::std::fmt::Display for ActivityResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.field("End", &self.end);
        shape.field("Id", &self.id);
        shape.field("Result", &self.result);
        shape.field("ScheduledStart", &self.scheduled_start);
        shape.field("Start", &self.start);
        shape.field("State", &self.state);
        shape.field("SuccessfulEndpointCount", &self.successful_endpoint_count);
        shape.field("TimezonesCompletedCount", &self.timezones_completed_count);
        shape.field("TimezonesTotalCount", &self.timezones_total_count);
        shape.field("TotalEndpointCount", &self.total_endpoint_count);
        shape.field("TreatmentId", &self.treatment_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ActivityResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ActivityResponse`](crate::model::ActivityResponse).
pub mod activity_response {

    /// A builder for [`ActivityResponse`](crate::model::ActivityResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
        pub(crate) end: ::std::option::Option<::std::string::String>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) result: ::std::option::Option<::std::string::String>,
        pub(crate) scheduled_start: ::std::option::Option<::std::string::String>,
        pub(crate) start: ::std::option::Option<::std::string::String>,
        pub(crate) state: ::std::option::Option<::std::string::String>,
        pub(crate) successful_endpoint_count: ::std::option::Option<i32>,
        pub(crate) timezones_completed_count: ::std::option::Option<i32>,
        pub(crate) timezones_total_count: ::std::option::Option<i32>,
        pub(crate) total_endpoint_count: ::std::option::Option<i32>,
        pub(crate) treatment_id: ::std::option::Option<::std::string::String>,
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
        pub fn campaign_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.campaign_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn get_campaign_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.campaign_id
        }
        pub fn end(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.end = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_end(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.end = input;
            self
        }
        pub fn get_end(&self) -> &::std::option::Option<::std::string::String> {
            &self.end
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
        /// <p>Specifies whether the activity succeeded. Possible values are SUCCESS and FAIL.</p>
        pub fn result(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.result = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>Specifies whether the activity succeeded. Possible values are SUCCESS and FAIL.</p>
        pub fn set_result(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.result = input;
            self
        }
        /// <p>Specifies whether the activity succeeded. Possible values are SUCCESS and FAIL.</p>
        pub fn get_result(&self) -> &::std::option::Option<::std::string::String> {
            &self.result
        }
        pub fn scheduled_start(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.scheduled_start = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_scheduled_start(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.scheduled_start = input;
            self
        }
        pub fn get_scheduled_start(&self) -> &::std::option::Option<::std::string::String> {
            &self.scheduled_start
        }
        pub fn start(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.start = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_start(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.start = input;
            self
        }
        pub fn get_start(&self) -> &::std::option::Option<::std::string::String> {
            &self.start
        }
        /// <p>The current status of the activity.</p>
        pub fn state(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.state = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The current status of the activity.</p>
        pub fn set_state(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.state = input;
            self
        }
        /// <p>The current status of the activity.</p>
        pub fn get_state(&self) -> &::std::option::Option<::std::string::String> {
            &self.state
        }
        pub fn successful_endpoint_count(mut self, input: i32) -> Self {
            self.successful_endpoint_count = ::std::option::Option::Some(input);
            self
        }
        pub fn set_successful_endpoint_count(mut self, input: ::std::option::Option<i32>) -> Self {
            self.successful_endpoint_count = input;
            self
        }
        pub fn get_successful_endpoint_count(&self) -> &::std::option::Option<i32> {
            &self.successful_endpoint_count
        }
        pub fn timezones_completed_count(mut self, input: i32) -> Self {
            self.timezones_completed_count = ::std::option::Option::Some(input);
            self
        }
        pub fn set_timezones_completed_count(mut self, input: ::std::option::Option<i32>) -> Self {
            self.timezones_completed_count = input;
            self
        }
        pub fn get_timezones_completed_count(&self) -> &::std::option::Option<i32> {
            &self.timezones_completed_count
        }
        pub fn timezones_total_count(mut self, input: i32) -> Self {
            self.timezones_total_count = ::std::option::Option::Some(input);
            self
        }
        pub fn set_timezones_total_count(mut self, input: ::std::option::Option<i32>) -> Self {
            self.timezones_total_count = input;
            self
        }
        pub fn get_timezones_total_count(&self) -> &::std::option::Option<i32> {
            &self.timezones_total_count
        }
        pub fn total_endpoint_count(mut self, input: i32) -> Self {
            self.total_endpoint_count = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_endpoint_count(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_endpoint_count = input;
            self
        }
        pub fn get_total_endpoint_count(&self) -> &::std::option::Option<i32> {
            &self.total_endpoint_count
        }
        pub fn treatment_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.treatment_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_treatment_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.treatment_id = input;
            self
        }
        pub fn get_treatment_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.treatment_id
        }
        /// Consumes the builder and constructs a [`ActivityResponse`](crate::model::ActivityResponse).
        pub fn build(self) -> crate::model::ActivityResponse {
            crate::model::ActivityResponse {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                end: self.end,
                id: self.id,
                result: self.result,
                scheduled_start: self.scheduled_start,
                start: self.start,
                state: self.state,
                successful_endpoint_count: self.successful_endpoint_count,
                timezones_completed_count: self.timezones_completed_count,
                timezones_total_count: self.timezones_total_count,
                total_endpoint_count: self.total_endpoint_count,
                treatment_id: self.treatment_id,
            }
        }
    }
}

/// <p>Provides information about the activities that were performed by a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ActivitiesResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ActivityResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl ActivitiesResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::ActivityResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ActivitiesResponse`](crate::model::ActivitiesResponse).
    pub fn builder() -> crate::model::activities_response::Builder {
        crate::model::activities_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::activities_response::Builder {
        crate::model::activities_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for ActivitiesResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for ActivitiesResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ActivitiesResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ActivitiesResponse`](crate::model::ActivitiesResponse).
pub mod activities_response {

    /// A builder for [`ActivitiesResponse`](crate::model::ActivitiesResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ActivityResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::ActivityResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::ActivityResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::ActivityResponse>> {
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
        /// Consumes the builder and constructs a [`ActivitiesResponse`](crate::model::ActivitiesResponse).
        pub fn build(self) -> crate::model::ActivitiesResponse {
            crate::model::ActivitiesResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
