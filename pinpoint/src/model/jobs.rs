// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>The status of an import or export job.</p>
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
pub enum JobStatus {
    #[allow(missing_docs)] // documentation missing in model
    Created,
    #[allow(missing_docs)] // documentation missing in model
    PreparingForInitialization,
    #[allow(missing_docs)] // documentation missing in model
    Initializing,
    #[allow(missing_docs)] // documentation missing in model
    Processing,
    #[allow(missing_docs)] // documentation missing in model
    PendingJob,
    #[allow(missing_docs)] // documentation missing in model
    Completing,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Failing,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
}
impl JobStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Created => "CREATED",
            JobStatus::PreparingForInitialization => "PREPARING_FOR_INITIALIZATION",
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::PendingJob => "PENDING_JOB",
            JobStatus::Completing => "COMPLETING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["CREATED", "PREPARING_FOR_INITIALIZATION", "INITIALIZING", "PROCESSING", "PENDING_JOB", "COMPLETING", "COMPLETED", "FAILING", "FAILED"]
    }
}
impl ::std::str::FromStr for JobStatus {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "CREATED" => ::std::result::Result::Ok(JobStatus::Created),
            "PREPARING_FOR_INITIALIZATION" => ::std::result::Result::Ok(JobStatus::PreparingForInitialization),
            "INITIALIZING" => ::std::result::Result::Ok(JobStatus::Initializing),
            "PROCESSING" => ::std::result::Result::Ok(JobStatus::Processing),
            "PENDING_JOB" => ::std::result::Result::Ok(JobStatus::PendingJob),
            "COMPLETING" => ::std::result::Result::Ok(JobStatus::Completing),
            "COMPLETED" => ::std::result::Result::Ok(JobStatus::Completed),
            "FAILING" => ::std::result::Result::Ok(JobStatus::Failing),
            "FAILED" => ::std::result::Result::Ok(JobStatus::Failed),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("JobStatus")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("JobStatus", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for JobStatus {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for JobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for JobStatus {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for JobStatus {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>The format of endpoint definition files.</p>
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
pub enum Format {
    #[allow(missing_docs)] // documentation missing in model
    Csv,
    #[allow(missing_docs)] // documentation missing in model
    Json,
}
impl Format {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["CSV", "JSON"]
    }
}
impl ::std::str::FromStr for Format {
    type Err = ::smithy_types::error::InvalidArgumentError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "CSV" => ::std::result::Result::Ok(Format::Csv),
            "JSON" => ::std::result::Result::Ok(Format::Json),
            "" => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::empty_value("Format")),
            other => ::std::result::Result::Err(::smithy_types::error::InvalidArgumentError::unknown_variant("Format", other)),
        }
    }
}
impl ::std::convert::TryFrom<&str> for Format {
    type Error = ::smithy_types::error::InvalidArgumentError;

    fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl ::std::convert::AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Format {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::serde::Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
        value.parse::<Self>().map_err(<D::Error as ::serde::de::Error>::custom)
    }
}
impl ::smithy_types::shape::ShapeValue for Format {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// <p>Specifies the settings for a job that imports endpoint definitions from an Amazon Simple Storage Service (Amazon S3) bucket.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ImportJobRequest {
    #[serde(rename = "DefineSegment", skip_serializing_if = "Option::is_none")]
    pub(crate) define_segment: ::std::option::Option<bool>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub(crate) external_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub(crate) format: ::std::option::Option<crate::model::Format>,
    #[serde(rename = "RegisterEndpoints", skip_serializing_if = "Option::is_none")]
    pub(crate) register_endpoints: ::std::option::Option<bool>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub(crate) s3_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_name: ::std::option::Option<::std::string::String>,
}
impl ImportJobRequest {
    pub fn define_segment(&self) -> ::std::option::Option<bool> {
        self.define_segment
    }
    pub fn external_id(&self) -> ::std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> ::std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn register_endpoints(&self) -> ::std::option::Option<bool> {
        self.register_endpoints
    }
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> ::std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_name(&self) -> ::std::option::Option<&str> {
        self.segment_name.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ImportJobRequest`](crate::model::ImportJobRequest).
    pub fn builder() -> crate::model::import_job_request::Builder {
        crate::model::import_job_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::import_job_request::Builder {
        crate::model::import_job_request::Builder {
            define_segment: self.define_segment,
            external_id: self.external_id,
            format: self.format,
            register_endpoints: self.register_endpoints,
            role_arn: self.role_arn,
            s3_url: self.s3_url,
            segment_id: self.segment_id,
            segment_name: self.segment_name,
        }
    }
}
impl ::std::hash::Hash for ImportJobRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.define_segment, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.external_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.format, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.register_endpoints, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.s3_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_name, state);
    }
}
impl ::std::fmt::Display for ImportJobRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DefineSegment", &self.define_segment);
        shape.field("ExternalId", &self.external_id);
        shape.field("Format", &self.format);
        shape.field("RegisterEndpoints", &self.register_endpoints);
        shape.field("RoleArn", &self.role_arn);
        shape.field("S3Url", &self.s3_url);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentName", &self.segment_name);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ImportJobRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ImportJobRequest`](crate::model::ImportJobRequest).
pub mod import_job_request {

    /// A builder for [`ImportJobRequest`](crate::model::ImportJobRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: ::std::option::Option<bool>,
        pub(crate) external_id: ::std::option::Option<::std::string::String>,
        pub(crate) format: ::std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: ::std::option::Option<bool>,
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
        pub(crate) s3_url: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_name: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = ::std::option::Option::Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: ::std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn get_define_segment(&self) -> &::std::option::Option<bool> {
            &self.define_segment
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
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = ::std::option::Option::Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: ::std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn get_register_endpoints(&self) -> &::std::option::Option<bool> {
            &self.register_endpoints
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
        pub fn segment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.segment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        pub fn get_segment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.segment_name
        }
        /// Consumes the builder and constructs a [`ImportJobRequest`](crate::model::ImportJobRequest).
        pub fn build(self) -> crate::model::ImportJobRequest {
            crate::model::ImportJobRequest {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}

/// <p>Provides information about the resource settings for a job that imports endpoint definitions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ImportJobResource {
    #[serde(rename = "DefineSegment", skip_serializing_if = "Option::is_none")]
    pub(crate) define_segment: ::std::option::Option<bool>,
    #[serde(rename = "ExternalId", skip_serializing_if = "Option::is_none")]
    pub(crate) external_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub(crate) format: ::std::option::Option<crate::model::Format>,
    #[serde(rename = "RegisterEndpoints", skip_serializing_if = "Option::is_none")]
    pub(crate) register_endpoints: ::std::option::Option<bool>,
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "S3Url", skip_serializing_if = "Option::is_none")]
    pub(crate) s3_url: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentName", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_name: ::std::option::Option<::std::string::String>,
}
impl ImportJobResource {
    pub fn define_segment(&self) -> ::std::option::Option<bool> {
        self.define_segment
    }
    pub fn external_id(&self) -> ::std::option::Option<&str> {
        self.external_id.as_deref()
    }
    pub fn format(&self) -> ::std::option::Option<&crate::model::Format> {
        self.format.as_ref()
    }
    pub fn register_endpoints(&self) -> ::std::option::Option<bool> {
        self.register_endpoints
    }
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url(&self) -> ::std::option::Option<&str> {
        self.s3_url.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_name(&self) -> ::std::option::Option<&str> {
        self.segment_name.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ImportJobResource`](crate::model::ImportJobResource).
    pub fn builder() -> crate::model::import_job_resource::Builder {
        crate::model::import_job_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::import_job_resource::Builder {
        crate::model::import_job_resource::Builder {
            define_segment: self.define_segment,
            external_id: self.external_id,
            format: self.format,
            register_endpoints: self.register_endpoints,
            role_arn: self.role_arn,
            s3_url: self.s3_url,
            segment_id: self.segment_id,
            segment_name: self.segment_name,
        }
    }
}
impl ::std::hash::Hash for ImportJobResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.define_segment, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.external_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.format, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.register_endpoints, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.s3_url, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_name, state);
    }
}
impl ::std::fmt::Display for ImportJobResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("DefineSegment", &self.define_segment);
        shape.field("ExternalId", &self.external_id);
        shape.field("Format", &self.format);
        shape.field("RegisterEndpoints", &self.register_endpoints);
        shape.field("RoleArn", &self.role_arn);
        shape.field("S3Url", &self.s3_url);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentName", &self.segment_name);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ImportJobResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ImportJobResource`](crate::model::ImportJobResource).
pub mod import_job_resource {

    /// A builder for [`ImportJobResource`](crate::model::ImportJobResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: ::std::option::Option<bool>,
        pub(crate) external_id: ::std::option::Option<::std::string::String>,
        pub(crate) format: ::std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: ::std::option::Option<bool>,
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
        pub(crate) s3_url: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_name: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = ::std::option::Option::Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: ::std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn get_define_segment(&self) -> &::std::option::Option<bool> {
            &self.define_segment
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
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = ::std::option::Option::Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: ::std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn get_register_endpoints(&self) -> &::std::option::Option<bool> {
            &self.register_endpoints
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
        pub fn segment_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.segment_name = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        pub fn get_segment_name(&self) -> &::std::option::Option<::std::string::String> {
            &self.segment_name
        }
        /// Consumes the builder and constructs a [`ImportJobResource`](crate::model::ImportJobResource).
        pub fn build(self) -> crate::model::ImportJobResource {
            crate::model::ImportJobResource {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}

/// <p>Provides information about the status and settings of a job that imports endpoint definitions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ImportJobResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CompletedPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) completed_pieces: ::std::option::Option<i32>,
    #[serde(rename = "CompletionDate", skip_serializing_if = "Option::is_none")]
    pub(crate) completion_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Definition", skip_serializing_if = "Option::is_none")]
    pub(crate) definition: ::std::option::Option<crate::model::ImportJobResource>,
    #[serde(rename = "FailedPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) failed_pieces: ::std::option::Option<i32>,
    #[serde(rename = "Failures", skip_serializing_if = "Option::is_none")]
    pub(crate) failures: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "JobStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) job_status: ::std::option::Option<crate::model::JobStatus>,
    #[serde(rename = "TotalFailures", skip_serializing_if = "Option::is_none")]
    pub(crate) total_failures: ::std::option::Option<i32>,
    #[serde(rename = "TotalPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) total_pieces: ::std::option::Option<i32>,
    #[serde(rename = "TotalProcessed", skip_serializing_if = "Option::is_none")]
    pub(crate) total_processed: ::std::option::Option<i32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub(crate) r#type: ::std::option::Option<::std::string::String>,
}
impl ImportJobResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn completed_pieces(&self) -> ::std::option::Option<i32> {
        self.completed_pieces
    }
    pub fn completion_date(&self) -> ::std::option::Option<&str> {
        self.completion_date.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn definition(&self) -> ::std::option::Option<&crate::model::ImportJobResource> {
        self.definition.as_ref()
    }
    pub fn failed_pieces(&self) -> ::std::option::Option<i32> {
        self.failed_pieces
    }
    pub fn failures(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.failures.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn job_status(&self) -> ::std::option::Option<&crate::model::JobStatus> {
        self.job_status.as_ref()
    }
    pub fn total_failures(&self) -> ::std::option::Option<i32> {
        self.total_failures
    }
    pub fn total_pieces(&self) -> ::std::option::Option<i32> {
        self.total_pieces
    }
    pub fn total_processed(&self) -> ::std::option::Option<i32> {
        self.total_processed
    }
    pub fn r#type(&self) -> ::std::option::Option<&str> {
        self.r#type.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ImportJobResponse`](crate::model::ImportJobResponse).
    pub fn builder() -> crate::model::import_job_response::Builder {
        crate::model::import_job_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::import_job_response::Builder {
        crate::model::import_job_response::Builder {
            application_id: self.application_id,
            completed_pieces: self.completed_pieces,
            completion_date: self.completion_date,
            creation_date: self.creation_date,
            definition: self.definition,
            failed_pieces: self.failed_pieces,
            failures: self.failures,
            id: self.id,
            job_status: self.job_status,
            total_failures: self.total_failures,
            total_pieces: self.total_pieces,
            total_processed: self.total_processed,
            r#type: self.r#type,
        }
    }
}
impl ::std::hash::Hash for ImportJobResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.completed_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.completion_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.definition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.failed_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.failures, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.job_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_failures, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_processed, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.r#type, state);
    }
}
impl ::std::fmt::Display for ImportJobResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CompletedPieces", &self.completed_pieces);
        shape.field("CompletionDate", &self.completion_date);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Definition", &self.definition);
        shape.field("FailedPieces", &self.failed_pieces);
        shape.field("Failures", &self.failures);
        shape.field("Id", &self.id);
        shape.field("JobStatus", &self.job_status);
        shape.field("TotalFailures", &self.total_failures);
        shape.field("TotalPieces", &self.total_pieces);
        shape.field("TotalProcessed", &self.total_processed);
        shape.field("Type", &self.r#type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ImportJobResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ImportJobResponse`](crate::model::ImportJobResponse).
pub mod import_job_response {

    /// A builder for [`ImportJobResponse`](crate::model::ImportJobResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) completed_pieces: ::std::option::Option<i32>,
        pub(crate) completion_date: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) definition: ::std::option::Option<crate::model::ImportJobResource>,
        pub(crate) failed_pieces: ::std::option::Option<i32>,
        pub(crate) failures: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) job_status: ::std::option::Option<crate::model::JobStatus>,
        pub(crate) total_failures: ::std::option::Option<i32>,
        pub(crate) total_pieces: ::std::option::Option<i32>,
        pub(crate) total_processed: ::std::option::Option<i32>,
        pub(crate) r#type: ::std::option::Option<::std::string::String>,
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
        pub fn completed_pieces(mut self, input: i32) -> Self {
            self.completed_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_completed_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.completed_pieces = input;
            self
        }
        pub fn get_completed_pieces(&self) -> &::std::option::Option<i32> {
            &self.completed_pieces
        }
        pub fn completion_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.completion_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_completion_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.completion_date = input;
            self
        }
        pub fn get_completion_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.completion_date
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
        pub fn definition(mut self, input: crate::model::ImportJobResource) -> Self {
            self.definition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_definition(mut self, input: ::std::option::Option<crate::model::ImportJobResource>) -> Self {
            self.definition = input;
            self
        }
        pub fn get_definition(&self) -> &::std::option::Option<crate::model::ImportJobResource> {
            &self.definition
        }
        pub fn failed_pieces(mut self, input: i32) -> Self {
            self.failed_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_failed_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.failed_pieces = input;
            self
        }
        pub fn get_failed_pieces(&self) -> &::std::option::Option<i32> {
            &self.failed_pieces
        }
        /// Appends an item to `failures`.
        ///
        /// To override the contents of this collection use [`set_failures`](Self::set_failures).
        ///
        pub fn failures(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.failures.unwrap_or_default();
            v.push(input.into());
            self.failures = ::std::option::Option::Some(v);
            self
        }
        pub fn set_failures(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.failures = input;
            self
        }
        pub fn get_failures(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.failures
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
        pub fn job_status(mut self, input: crate::model::JobStatus) -> Self {
            self.job_status = ::std::option::Option::Some(input);
            self
        }
        pub fn set_job_status(mut self, input: ::std::option::Option<crate::model::JobStatus>) -> Self {
            self.job_status = input;
            self
        }
        pub fn get_job_status(&self) -> &::std::option::Option<crate::model::JobStatus> {
            &self.job_status
        }
        pub fn total_failures(mut self, input: i32) -> Self {
            self.total_failures = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_failures(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_failures = input;
            self
        }
        pub fn get_total_failures(&self) -> &::std::option::Option<i32> {
            &self.total_failures
        }
        pub fn total_pieces(mut self, input: i32) -> Self {
            self.total_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_pieces = input;
            self
        }
        pub fn get_total_pieces(&self) -> &::std::option::Option<i32> {
            &self.total_pieces
        }
        pub fn total_processed(mut self, input: i32) -> Self {
            self.total_processed = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_processed(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_processed = input;
            self
        }
        pub fn get_total_processed(&self) -> &::std::option::Option<i32> {
            &self.total_processed
        }
        pub fn r#type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.r#type = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        pub fn get_type(&self) -> &::std::option::Option<::std::string::String> {
            &self.r#type
        }
        /// Consumes the builder and constructs a [`ImportJobResponse`](crate::model::ImportJobResponse).
        pub fn build(self) -> crate::model::ImportJobResponse {
            crate::model::ImportJobResponse {
                application_id: self.application_id,
                completed_pieces: self.completed_pieces,
                completion_date: self.completion_date,
                creation_date: self.creation_date,
                definition: self.definition,
                failed_pieces: self.failed_pieces,
                failures: self.failures,
                id: self.id,
                job_status: self.job_status,
                total_failures: self.total_failures,
                total_pieces: self.total_pieces,
                total_processed: self.total_processed,
                r#type: self.r#type,
            }
        }
    }
}

/// <p>Provides information about the status and settings of all the import jobs that are associated with an application or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ImportJobsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ImportJobResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl ImportJobsResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::ImportJobResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ImportJobsResponse`](crate::model::ImportJobsResponse).
    pub fn builder() -> crate::model::import_jobs_response::Builder {
        crate::model::import_jobs_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::import_jobs_response::Builder {
        crate::model::import_jobs_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for ImportJobsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for ImportJobsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ImportJobsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ImportJobsResponse`](crate::model::ImportJobsResponse).
pub mod import_jobs_response {

    /// A builder for [`ImportJobsResponse`](crate::model::ImportJobsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ImportJobResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::ImportJobResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::ImportJobResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::ImportJobResponse>> {
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
        /// Consumes the builder and constructs a [`ImportJobsResponse`](crate::model::ImportJobsResponse).
        pub fn build(self) -> crate::model::ImportJobsResponse {
            crate::model::ImportJobsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}

/// <p>Specifies the settings for a job that exports endpoint definitions to an Amazon Simple Storage Service (Amazon S3) bucket.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ExportJobRequest {
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "S3UrlPrefix", skip_serializing_if = "Option::is_none")]
    pub(crate) s3_url_prefix: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_version: ::std::option::Option<i32>,
}
impl ExportJobRequest {
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url_prefix(&self) -> ::std::option::Option<&str> {
        self.s3_url_prefix.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_version(&self) -> ::std::option::Option<i32> {
        self.segment_version
    }
    /// Creates a new builder-style object to manufacture [`ExportJobRequest`](crate::model::ExportJobRequest).
    pub fn builder() -> crate::model::export_job_request::Builder {
        crate::model::export_job_request::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::export_job_request::Builder {
        crate::model::export_job_request::Builder {
            role_arn: self.role_arn,
            s3_url_prefix: self.s3_url_prefix,
            segment_id: self.segment_id,
            segment_version: self.segment_version,
        }
    }
}
impl ::std::hash::Hash for ExportJobRequest {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.s3_url_prefix, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_version, state);
    }
}
impl ::std::fmt::Display for ExportJobRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("RoleArn", &self.role_arn);
        shape.field("S3UrlPrefix", &self.s3_url_prefix);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentVersion", &self.segment_version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ExportJobRequest {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ExportJobRequest`](crate::model::ExportJobRequest).
pub mod export_job_request {

    /// A builder for [`ExportJobRequest`](crate::model::ExportJobRequest).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
        pub(crate) s3_url_prefix: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_version: ::std::option::Option<i32>,
    }
    impl Builder {
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
        pub fn s3_url_prefix(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.s3_url_prefix = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_s3_url_prefix(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.s3_url_prefix = input;
            self
        }
        pub fn get_s3_url_prefix(&self) -> &::std::option::Option<::std::string::String> {
            &self.s3_url_prefix
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
        /// Consumes the builder and constructs a [`ExportJobRequest`](crate::model::ExportJobRequest).
        pub fn build(self) -> crate::model::ExportJobRequest {
            crate::model::ExportJobRequest {
                role_arn: self.role_arn,
                s3_url_prefix: self.s3_url_prefix,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
            }
        }
    }
}

/// <p>Provides information about the resource settings for a job that exports endpoint definitions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ExportJobResource {
    #[serde(rename = "RoleArn", skip_serializing_if = "Option::is_none")]
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    #[serde(rename = "S3UrlPrefix", skip_serializing_if = "Option::is_none")]
    pub(crate) s3_url_prefix: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentId", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "SegmentVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) segment_version: ::std::option::Option<i32>,
}
impl ExportJobResource {
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn s3_url_prefix(&self) -> ::std::option::Option<&str> {
        self.s3_url_prefix.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn segment_version(&self) -> ::std::option::Option<i32> {
        self.segment_version
    }
    /// Creates a new builder-style object to manufacture [`ExportJobResource`](crate::model::ExportJobResource).
    pub fn builder() -> crate::model::export_job_resource::Builder {
        crate::model::export_job_resource::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::export_job_resource::Builder {
        crate::model::export_job_resource::Builder {
            role_arn: self.role_arn,
            s3_url_prefix: self.s3_url_prefix,
            segment_id: self.segment_id,
            segment_version: self.segment_version,
        }
    }
}
impl ::std::hash::Hash for ExportJobResource {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.role_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.s3_url_prefix, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_version, state);
    }
}
impl ::std::fmt::Display for ExportJobResource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("RoleArn", &self.role_arn);
        shape.field("S3UrlPrefix", &self.s3_url_prefix);
        shape.field("SegmentId", &self.segment_id);
        shape.field("SegmentVersion", &self.segment_version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ExportJobResource {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ExportJobResource`](crate::model::ExportJobResource).
pub mod export_job_resource {

    /// A builder for [`ExportJobResource`](crate::model::ExportJobResource).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) role_arn: ::std::option::Option<::std::string::String>,
        pub(crate) s3_url_prefix: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_version: ::std::option::Option<i32>,
    }
    impl Builder {
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
        pub fn s3_url_prefix(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.s3_url_prefix = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_s3_url_prefix(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.s3_url_prefix = input;
            self
        }
        pub fn get_s3_url_prefix(&self) -> &::std::option::Option<::std::string::String> {
            &self.s3_url_prefix
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
        /// Consumes the builder and constructs a [`ExportJobResource`](crate::model::ExportJobResource).
        pub fn build(self) -> crate::model::ExportJobResource {
            crate::model::ExportJobResource {
                role_arn: self.role_arn,
                s3_url_prefix: self.s3_url_prefix,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
            }
        }
    }
}

/// <p>Provides information about the status and settings of a job that exports endpoint definitions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ExportJobResponse {
    #[serde(rename = "ApplicationId", skip_serializing_if = "Option::is_none")]
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CompletedPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) completed_pieces: ::std::option::Option<i32>,
    #[serde(rename = "CompletionDate", skip_serializing_if = "Option::is_none")]
    pub(crate) completion_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub(crate) creation_date: ::std::option::Option<::std::string::String>,
    #[serde(rename = "Definition", skip_serializing_if = "Option::is_none")]
    pub(crate) definition: ::std::option::Option<crate::model::ExportJobResource>,
    #[serde(rename = "FailedPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) failed_pieces: ::std::option::Option<i32>,
    #[serde(rename = "Failures", skip_serializing_if = "Option::is_none")]
    pub(crate) failures: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: ::std::option::Option<::std::string::String>,
    #[serde(rename = "JobStatus", skip_serializing_if = "Option::is_none")]
    pub(crate) job_status: ::std::option::Option<crate::model::JobStatus>,
    #[serde(rename = "TotalFailures", skip_serializing_if = "Option::is_none")]
    pub(crate) total_failures: ::std::option::Option<i32>,
    #[serde(rename = "TotalPieces", skip_serializing_if = "Option::is_none")]
    pub(crate) total_pieces: ::std::option::Option<i32>,
    #[serde(rename = "TotalProcessed", skip_serializing_if = "Option::is_none")]
    pub(crate) total_processed: ::std::option::Option<i32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub(crate) r#type: ::std::option::Option<::std::string::String>,
}
impl ExportJobResponse {
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn completed_pieces(&self) -> ::std::option::Option<i32> {
        self.completed_pieces
    }
    pub fn completion_date(&self) -> ::std::option::Option<&str> {
        self.completion_date.as_deref()
    }
    pub fn creation_date(&self) -> ::std::option::Option<&str> {
        self.creation_date.as_deref()
    }
    pub fn definition(&self) -> ::std::option::Option<&crate::model::ExportJobResource> {
        self.definition.as_ref()
    }
    pub fn failed_pieces(&self) -> ::std::option::Option<i32> {
        self.failed_pieces
    }
    pub fn failures(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.failures.as_deref()
    }
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    pub fn job_status(&self) -> ::std::option::Option<&crate::model::JobStatus> {
        self.job_status.as_ref()
    }
    pub fn total_failures(&self) -> ::std::option::Option<i32> {
        self.total_failures
    }
    pub fn total_pieces(&self) -> ::std::option::Option<i32> {
        self.total_pieces
    }
    pub fn total_processed(&self) -> ::std::option::Option<i32> {
        self.total_processed
    }
    pub fn r#type(&self) -> ::std::option::Option<&str> {
        self.r#type.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ExportJobResponse`](crate::model::ExportJobResponse).
    pub fn builder() -> crate::model::export_job_response::Builder {
        crate::model::export_job_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::export_job_response::Builder {
        crate::model::export_job_response::Builder {
            application_id: self.application_id,
            completed_pieces: self.completed_pieces,
            completion_date: self.completion_date,
            creation_date: self.creation_date,
            definition: self.definition,
            failed_pieces: self.failed_pieces,
            failures: self.failures,
            id: self.id,
            job_status: self.job_status,
            total_failures: self.total_failures,
            total_pieces: self.total_pieces,
            total_processed: self.total_processed,
            r#type: self.r#type,
        }
    }
}
impl ::std::hash::Hash for ExportJobResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.completed_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.completion_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.creation_date, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.definition, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.failed_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.failures, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.job_status, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_failures, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_pieces, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.total_processed, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.r#type, state);
    }
}
impl ::std::fmt::Display for ExportJobResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CompletedPieces", &self.completed_pieces);
        shape.field("CompletionDate", &self.completion_date);
        shape.field("CreationDate", &self.creation_date);
        shape.field("Definition", &self.definition);
        shape.field("FailedPieces", &self.failed_pieces);
        shape.field("Failures", &self.failures);
        shape.field("Id", &self.id);
        shape.field("JobStatus", &self.job_status);
        shape.field("TotalFailures", &self.total_failures);
        shape.field("TotalPieces", &self.total_pieces);
        shape.field("TotalProcessed", &self.total_processed);
        shape.field("Type", &self.r#type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ExportJobResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ExportJobResponse`](crate::model::ExportJobResponse).
pub mod export_job_response {

    /// A builder for [`ExportJobResponse`](crate::model::ExportJobResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) completed_pieces: ::std::option::Option<i32>,
        pub(crate) completion_date: ::std::option::Option<::std::string::String>,
        pub(crate) creation_date: ::std::option::Option<::std::string::String>,
        pub(crate) definition: ::std::option::Option<crate::model::ExportJobResource>,
        pub(crate) failed_pieces: ::std::option::Option<i32>,
        pub(crate) failures: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
        pub(crate) id: ::std::option::Option<::std::string::String>,
        pub(crate) job_status: ::std::option::Option<crate::model::JobStatus>,
        pub(crate) total_failures: ::std::option::Option<i32>,
        pub(crate) total_pieces: ::std::option::Option<i32>,
        pub(crate) total_processed: ::std::option::Option<i32>,
        pub(crate) r#type: ::std::option::Option<::std::string::String>,
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
        pub fn completed_pieces(mut self, input: i32) -> Self {
            self.completed_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_completed_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.completed_pieces = input;
            self
        }
        pub fn get_completed_pieces(&self) -> &::std::option::Option<i32> {
            &self.completed_pieces
        }
        pub fn completion_date(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.completion_date = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_completion_date(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.completion_date = input;
            self
        }
        pub fn get_completion_date(&self) -> &::std::option::Option<::std::string::String> {
            &self.completion_date
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
        pub fn definition(mut self, input: crate::model::ExportJobResource) -> Self {
            self.definition = ::std::option::Option::Some(input);
            self
        }
        pub fn set_definition(mut self, input: ::std::option::Option<crate::model::ExportJobResource>) -> Self {
            self.definition = input;
            self
        }
        pub fn get_definition(&self) -> &::std::option::Option<crate::model::ExportJobResource> {
            &self.definition
        }
        pub fn failed_pieces(mut self, input: i32) -> Self {
            self.failed_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_failed_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.failed_pieces = input;
            self
        }
        pub fn get_failed_pieces(&self) -> &::std::option::Option<i32> {
            &self.failed_pieces
        }
        /// Appends an item to `failures`.
        ///
        /// To override the contents of this collection use [`set_failures`](Self::set_failures).
        ///
        pub fn failures(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.failures.unwrap_or_default();
            v.push(input.into());
            self.failures = ::std::option::Option::Some(v);
            self
        }
        pub fn set_failures(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.failures = input;
            self
        }
        pub fn get_failures(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.failures
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
        pub fn job_status(mut self, input: crate::model::JobStatus) -> Self {
            self.job_status = ::std::option::Option::Some(input);
            self
        }
        pub fn set_job_status(mut self, input: ::std::option::Option<crate::model::JobStatus>) -> Self {
            self.job_status = input;
            self
        }
        pub fn get_job_status(&self) -> &::std::option::Option<crate::model::JobStatus> {
            &self.job_status
        }
        pub fn total_failures(mut self, input: i32) -> Self {
            self.total_failures = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_failures(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_failures = input;
            self
        }
        pub fn get_total_failures(&self) -> &::std::option::Option<i32> {
            &self.total_failures
        }
        pub fn total_pieces(mut self, input: i32) -> Self {
            self.total_pieces = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_pieces(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_pieces = input;
            self
        }
        pub fn get_total_pieces(&self) -> &::std::option::Option<i32> {
            &self.total_pieces
        }
        pub fn total_processed(mut self, input: i32) -> Self {
            self.total_processed = ::std::option::Option::Some(input);
            self
        }
        pub fn set_total_processed(mut self, input: ::std::option::Option<i32>) -> Self {
            self.total_processed = input;
            self
        }
        pub fn get_total_processed(&self) -> &::std::option::Option<i32> {
            &self.total_processed
        }
        pub fn r#type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.r#type = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        pub fn get_type(&self) -> &::std::option::Option<::std::string::String> {
            &self.r#type
        }
        /// Consumes the builder and constructs a [`ExportJobResponse`](crate::model::ExportJobResponse).
        pub fn build(self) -> crate::model::ExportJobResponse {
            crate::model::ExportJobResponse {
                application_id: self.application_id,
                completed_pieces: self.completed_pieces,
                completion_date: self.completion_date,
                creation_date: self.creation_date,
                definition: self.definition,
                failed_pieces: self.failed_pieces,
                failures: self.failures,
                id: self.id,
                job_status: self.job_status,
                total_failures: self.total_failures,
                total_pieces: self.total_pieces,
                total_processed: self.total_processed,
                r#type: self.r#type,
            }
        }
    }
}

/// <p>Provides information about all the export jobs that are associated with an application or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct ExportJobsResponse {
    #[serde(rename = "Item", skip_serializing_if = "Option::is_none")]
    pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ExportJobResponse>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl ExportJobsResponse {
    pub fn item(&self) -> ::std::option::Option<&[crate::model::ExportJobResponse]> {
        self.item.as_deref()
    }
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ExportJobsResponse`](crate::model::ExportJobsResponse).
    pub fn builder() -> crate::model::export_jobs_response::Builder {
        crate::model::export_jobs_response::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::export_jobs_response::Builder {
        crate::model::export_jobs_response::Builder {
            item: self.item,
            next_token: self.next_token,
        }
    }
}
impl ::std::hash::Hash for ExportJobsResponse {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.item, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
    }
}
impl ::std::fmt::Display for ExportJobsResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("Item", &self.item);
        shape.field("NextToken", &self.next_token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ExportJobsResponse {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ExportJobsResponse`](crate::model::ExportJobsResponse).
pub mod export_jobs_response {

    /// A builder for [`ExportJobsResponse`](crate::model::ExportJobsResponse).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: ::std::option::Option<::std::vec::Vec<crate::model::ExportJobResponse>>,
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// Appends an item to `item`.
        ///
        /// To override the contents of this collection use [`set_item`](Self::set_item).
        ///
        pub fn item(mut self, input: crate::model::ExportJobResponse) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input);
            self.item = ::std::option::Option::Some(v);
            self
        }
        pub fn set_item(mut self, input: ::std::option::Option<::std::vec::Vec<crate::model::ExportJobResponse>>) -> Self {
            self.item = input;
            self
        }
        pub fn get_item(&self) -> &::std::option::Option<::std::vec::Vec<crate::model::ExportJobResponse>> {
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
        /// Consumes the builder and constructs a [`ExportJobsResponse`](crate::model::ExportJobsResponse).
        pub fn build(self) -> crate::model::ExportJobsResponse {
            crate::model::ExportJobsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
