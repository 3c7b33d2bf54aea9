// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>Creates an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateAppInput {
    pub(crate) create_application_request: ::std::option::Option<crate::model::CreateApplicationRequest>,
}
impl CreateAppInput {
    pub fn create_application_request(&self) -> ::std::option::Option<&crate::model::CreateApplicationRequest> {
        self.create_application_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateAppInput`](crate::input::CreateAppInput).
    pub fn builder() -> crate::input::create_app_input::Builder {
        crate::input::create_app_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_app_input::Builder {
        crate::input::create_app_input::Builder {
            create_application_request: self.create_application_request,
        }
    }
}
impl ::std::hash::Hash for CreateAppInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.create_application_request, state);
    }
}
impl ::std::fmt::Display for CreateAppInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CreateApplicationRequest", &self.create_application_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateAppInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateAppInput`](crate::input::CreateAppInput).
pub mod create_app_input {

    /// A builder for [`CreateAppInput`](crate::input::CreateAppInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) create_application_request: ::std::option::Option<crate::model::CreateApplicationRequest>,
    }
    impl Builder {
        pub fn create_application_request(mut self, input: crate::model::CreateApplicationRequest) -> Self {
            self.create_application_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_create_application_request(mut self, input: ::std::option::Option<crate::model::CreateApplicationRequest>) -> Self {
            self.create_application_request = input;
            self
        }
        pub fn get_create_application_request(&self) -> &::std::option::Option<crate::model::CreateApplicationRequest> {
            &self.create_application_request
        }
        /// Consumes the builder and constructs a [`CreateAppInput`](crate::input::CreateAppInput).
        pub fn build(self) -> crate::input::CreateAppInput {
            crate::input::CreateAppInput {
                create_application_request: self.create_application_request,
            }
        }
    }
}

/// <p>Deletes an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteAppInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl DeleteAppInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteAppInput`](crate::input::DeleteAppInput).
    pub fn builder() -> crate::input::delete_app_input::Builder {
        crate::input::delete_app_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_app_input::Builder {
        crate::input::delete_app_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for DeleteAppInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for DeleteAppInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteAppInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteAppInput`](crate::input::DeleteAppInput).
pub mod delete_app_input {

    /// A builder for [`DeleteAppInput`](crate::input::DeleteAppInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`DeleteAppInput`](crate::input::DeleteAppInput).
        pub fn build(self) -> crate::input::DeleteAppInput {
            crate::input::DeleteAppInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetAppInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetAppInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetAppInput`](crate::input::GetAppInput).
    pub fn builder() -> crate::input::get_app_input::Builder {
        crate::input::get_app_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_app_input::Builder {
        crate::input::get_app_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetAppInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetAppInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetAppInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetAppInput`](crate::input::GetAppInput).
pub mod get_app_input {

    /// A builder for [`GetAppInput`](crate::input::GetAppInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetAppInput`](crate::input::GetAppInput).
        pub fn build(self) -> crate::input::GetAppInput {
            crate::input::GetAppInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about all the applications that are associated with your Amazon Pinpoint account.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetAppsInput {
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetAppsInput {
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetAppsInput`](crate::input::GetAppsInput).
    pub fn builder() -> crate::input::get_apps_input::Builder {
        crate::input::get_apps_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_apps_input::Builder {
        crate::input::get_apps_input::Builder {
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetAppsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetAppsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetAppsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetAppsInput`](crate::input::GetAppsInput).
pub mod get_apps_input {

    /// A builder for [`GetAppsInput`](crate::input::GetAppsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetAppsInput`](crate::input::GetAppsInput).
        pub fn build(self) -> crate::input::GetAppsInput {
            crate::input::GetAppsInput {
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Retrieves information about the settings for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetApplicationSettingsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetApplicationSettingsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput).
    pub fn builder() -> crate::input::get_application_settings_input::Builder {
        crate::input::get_application_settings_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_application_settings_input::Builder {
        crate::input::get_application_settings_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetApplicationSettingsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetApplicationSettingsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetApplicationSettingsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput).
pub mod get_application_settings_input {

    /// A builder for [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput).
        pub fn build(self) -> crate::input::GetApplicationSettingsInput {
            crate::input::GetApplicationSettingsInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Updates the settings for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateApplicationSettingsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_application_settings_request: ::std::option::Option<crate::model::WriteApplicationSettingsRequest>,
}
impl UpdateApplicationSettingsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_application_settings_request(&self) -> ::std::option::Option<&crate::model::WriteApplicationSettingsRequest> {
        self.write_application_settings_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput).
    pub fn builder() -> crate::input::update_application_settings_input::Builder {
        crate::input::update_application_settings_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_application_settings_input::Builder {
        crate::input::update_application_settings_input::Builder {
            application_id: self.application_id,
            write_application_settings_request: self.write_application_settings_request,
        }
    }
}
impl ::std::hash::Hash for UpdateApplicationSettingsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_application_settings_request, state);
    }
}
impl ::std::fmt::Display for UpdateApplicationSettingsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("WriteApplicationSettingsRequest", &self.write_application_settings_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateApplicationSettingsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput).
pub mod update_application_settings_input {

    /// A builder for [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_application_settings_request: ::std::option::Option<crate::model::WriteApplicationSettingsRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn write_application_settings_request(mut self, input: crate::model::WriteApplicationSettingsRequest) -> Self {
            self.write_application_settings_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_application_settings_request(mut self, input: ::std::option::Option<crate::model::WriteApplicationSettingsRequest>) -> Self {
            self.write_application_settings_request = input;
            self
        }
        pub fn get_write_application_settings_request(&self) -> &::std::option::Option<crate::model::WriteApplicationSettingsRequest> {
            &self.write_application_settings_request
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput).
        pub fn build(self) -> crate::input::UpdateApplicationSettingsInput {
            crate::input::UpdateApplicationSettingsInput {
                application_id: self.application_id,
                write_application_settings_request: self.write_application_settings_request,
            }
        }
    }
}

/// <p>Creates a new campaign for an application or updates the settings of an existing campaign for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_campaign_request: ::std::option::Option<crate::model::WriteCampaignRequest>,
}
impl CreateCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_campaign_request(&self) -> ::std::option::Option<&crate::model::WriteCampaignRequest> {
        self.write_campaign_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateCampaignInput`](crate::input::CreateCampaignInput).
    pub fn builder() -> crate::input::create_campaign_input::Builder {
        crate::input::create_campaign_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_campaign_input::Builder {
        crate::input::create_campaign_input::Builder {
            application_id: self.application_id,
            write_campaign_request: self.write_campaign_request,
        }
    }
}
impl ::std::hash::Hash for CreateCampaignInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_campaign_request, state);
    }
}
impl ::std::fmt::Display for CreateCampaignInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("WriteCampaignRequest", &self.write_campaign_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateCampaignInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateCampaignInput`](crate::input::CreateCampaignInput).
pub mod create_campaign_input {

    /// A builder for [`CreateCampaignInput`](crate::input::CreateCampaignInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_campaign_request: ::std::option::Option<crate::model::WriteCampaignRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: ::std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        pub fn get_write_campaign_request(&self) -> &::std::option::Option<crate::model::WriteCampaignRequest> {
            &self.write_campaign_request
        }
        /// Consumes the builder and constructs a [`CreateCampaignInput`](crate::input::CreateCampaignInput).
        pub fn build(self) -> crate::input::CreateCampaignInput {
            crate::input::CreateCampaignInput {
                application_id: self.application_id,
                write_campaign_request: self.write_campaign_request,
            }
        }
    }
}

/// <p>Deletes a campaign from an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
}
impl DeleteCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteCampaignInput`](crate::input::DeleteCampaignInput).
    pub fn builder() -> crate::input::delete_campaign_input::Builder {
        crate::input::delete_campaign_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_campaign_input::Builder {
        crate::input::delete_campaign_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
        }
    }
}
impl ::std::hash::Hash for DeleteCampaignInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
    }
}
impl ::std::fmt::Display for DeleteCampaignInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteCampaignInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteCampaignInput`](crate::input::DeleteCampaignInput).
pub mod delete_campaign_input {

    /// A builder for [`DeleteCampaignInput`](crate::input::DeleteCampaignInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        /// Consumes the builder and constructs a [`DeleteCampaignInput`](crate::input::DeleteCampaignInput).
        pub fn build(self) -> crate::input::DeleteCampaignInput {
            crate::input::DeleteCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
}
impl GetCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignInput`](crate::input::GetCampaignInput).
    pub fn builder() -> crate::input::get_campaign_input::Builder {
        crate::input::get_campaign_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_campaign_input::Builder {
        crate::input::get_campaign_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
        }
    }
}
impl ::std::hash::Hash for GetCampaignInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
    }
}
impl ::std::fmt::Display for GetCampaignInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignInput`](crate::input::GetCampaignInput).
pub mod get_campaign_input {

    /// A builder for [`GetCampaignInput`](crate::input::GetCampaignInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        /// Consumes the builder and constructs a [`GetCampaignInput`](crate::input::GetCampaignInput).
        pub fn build(self) -> crate::input::GetCampaignInput {
            crate::input::GetCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for all the campaigns that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetCampaignsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignsInput`](crate::input::GetCampaignsInput).
    pub fn builder() -> crate::input::get_campaigns_input::Builder {
        crate::input::get_campaigns_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_campaigns_input::Builder {
        crate::input::get_campaigns_input::Builder {
            application_id: self.application_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetCampaignsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetCampaignsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignsInput`](crate::input::GetCampaignsInput).
pub mod get_campaigns_input {

    /// A builder for [`GetCampaignsInput`](crate::input::GetCampaignsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetCampaignsInput`](crate::input::GetCampaignsInput).
        pub fn build(self) -> crate::input::GetCampaignsInput {
            crate::input::GetCampaignsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Updates the configuration and other settings for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_campaign_request: ::std::option::Option<crate::model::WriteCampaignRequest>,
}
impl UpdateCampaignInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn write_campaign_request(&self) -> ::std::option::Option<&crate::model::WriteCampaignRequest> {
        self.write_campaign_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateCampaignInput`](crate::input::UpdateCampaignInput).
    pub fn builder() -> crate::input::update_campaign_input::Builder {
        crate::input::update_campaign_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_campaign_input::Builder {
        crate::input::update_campaign_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
            write_campaign_request: self.write_campaign_request,
        }
    }
}
impl ::std::hash::Hash for UpdateCampaignInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_campaign_request, state);
    }
}
impl ::std::fmt::Display for UpdateCampaignInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.field("WriteCampaignRequest", &self.write_campaign_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateCampaignInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateCampaignInput`](crate::input::UpdateCampaignInput).
pub mod update_campaign_input {

    /// A builder for [`UpdateCampaignInput`](crate::input::UpdateCampaignInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_campaign_request: ::std::option::Option<crate::model::WriteCampaignRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: ::std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        pub fn get_write_campaign_request(&self) -> &::std::option::Option<crate::model::WriteCampaignRequest> {
            &self.write_campaign_request
        }
        /// Consumes the builder and constructs a [`UpdateCampaignInput`](crate::input::UpdateCampaignInput).
        pub fn build(self) -> crate::input::UpdateCampaignInput {
            crate::input::UpdateCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                write_campaign_request: self.write_campaign_request,
            }
        }
    }
}

/// <p>Retrieves information about all the activities for a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignActivitiesInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetCampaignActivitiesInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput).
    pub fn builder() -> crate::input::get_campaign_activities_input::Builder {
        crate::input::get_campaign_activities_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_campaign_activities_input::Builder {
        crate::input::get_campaign_activities_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetCampaignActivitiesInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetCampaignActivitiesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignActivitiesInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput).
pub mod get_campaign_activities_input {

    /// A builder for [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput).
        pub fn build(self) -> crate::input::GetCampaignActivitiesInput {
            crate::input::GetCampaignActivitiesInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for a specific version of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignVersionInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl GetCampaignVersionInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput).
    pub fn builder() -> crate::input::get_campaign_version_input::Builder {
        crate::input::get_campaign_version_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_campaign_version_input::Builder {
        crate::input::get_campaign_version_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for GetCampaignVersionInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for GetCampaignVersionInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignVersionInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput).
pub mod get_campaign_version_input {

    /// A builder for [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        /// Consumes the builder and constructs a [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput).
        pub fn build(self) -> crate::input::GetCampaignVersionInput {
            crate::input::GetCampaignVersionInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                version: self.version,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for all versions of a campaign.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignVersionsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetCampaignVersionsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn campaign_id(&self) -> ::std::option::Option<&str> {
        self.campaign_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput).
    pub fn builder() -> crate::input::get_campaign_versions_input::Builder {
        crate::input::get_campaign_versions_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_campaign_versions_input::Builder {
        crate::input::get_campaign_versions_input::Builder {
            application_id: self.application_id,
            campaign_id: self.campaign_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetCampaignVersionsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetCampaignVersionsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("CampaignId", &self.campaign_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignVersionsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput).
pub mod get_campaign_versions_input {

    /// A builder for [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) campaign_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
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
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput).
        pub fn build(self) -> crate::input::GetCampaignVersionsInput {
            crate::input::GetCampaignVersionsInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Creates a new segment for an application or updates the configuration, dimension, and other settings for an existing segment that's associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_segment_request: ::std::option::Option<crate::model::WriteSegmentRequest>,
}
impl CreateSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_segment_request(&self) -> ::std::option::Option<&crate::model::WriteSegmentRequest> {
        self.write_segment_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateSegmentInput`](crate::input::CreateSegmentInput).
    pub fn builder() -> crate::input::create_segment_input::Builder {
        crate::input::create_segment_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_segment_input::Builder {
        crate::input::create_segment_input::Builder {
            application_id: self.application_id,
            write_segment_request: self.write_segment_request,
        }
    }
}
impl ::std::hash::Hash for CreateSegmentInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_segment_request, state);
    }
}
impl ::std::fmt::Display for CreateSegmentInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("WriteSegmentRequest", &self.write_segment_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateSegmentInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateSegmentInput`](crate::input::CreateSegmentInput).
pub mod create_segment_input {

    /// A builder for [`CreateSegmentInput`](crate::input::CreateSegmentInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_segment_request: ::std::option::Option<crate::model::WriteSegmentRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: ::std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        pub fn get_write_segment_request(&self) -> &::std::option::Option<crate::model::WriteSegmentRequest> {
            &self.write_segment_request
        }
        /// Consumes the builder and constructs a [`CreateSegmentInput`](crate::input::CreateSegmentInput).
        pub fn build(self) -> crate::input::CreateSegmentInput {
            crate::input::CreateSegmentInput {
                application_id: self.application_id,
                write_segment_request: self.write_segment_request,
            }
        }
    }
}

/// <p>Deletes a segment from an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
}
impl DeleteSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSegmentInput`](crate::input::DeleteSegmentInput).
    pub fn builder() -> crate::input::delete_segment_input::Builder {
        crate::input::delete_segment_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_segment_input::Builder {
        crate::input::delete_segment_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
        }
    }
}
impl ::std::hash::Hash for DeleteSegmentInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
    }
}
impl ::std::fmt::Display for DeleteSegmentInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSegmentInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSegmentInput`](crate::input::DeleteSegmentInput).
pub mod delete_segment_input {

    /// A builder for [`DeleteSegmentInput`](crate::input::DeleteSegmentInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// Consumes the builder and constructs a [`DeleteSegmentInput`](crate::input::DeleteSegmentInput).
        pub fn build(self) -> crate::input::DeleteSegmentInput {
            crate::input::DeleteSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            }
        }
    }
}

/// <p>Retrieves information about the configuration, dimension, and other settings for a specific segment that's associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
}
impl GetSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentInput`](crate::input::GetSegmentInput).
    pub fn builder() -> crate::input::get_segment_input::Builder {
        crate::input::get_segment_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segment_input::Builder {
        crate::input::get_segment_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
        }
    }
}
impl ::std::hash::Hash for GetSegmentInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
    }
}
impl ::std::fmt::Display for GetSegmentInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentInput`](crate::input::GetSegmentInput).
pub mod get_segment_input {

    /// A builder for [`GetSegmentInput`](crate::input::GetSegmentInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// Consumes the builder and constructs a [`GetSegmentInput`](crate::input::GetSegmentInput).
        pub fn build(self) -> crate::input::GetSegmentInput {
            crate::input::GetSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            }
        }
    }
}

/// <p>Retrieves information about the configuration, dimension, and other settings for all the segments that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetSegmentsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentsInput`](crate::input::GetSegmentsInput).
    pub fn builder() -> crate::input::get_segments_input::Builder {
        crate::input::get_segments_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segments_input::Builder {
        crate::input::get_segments_input::Builder {
            application_id: self.application_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetSegmentsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetSegmentsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentsInput`](crate::input::GetSegmentsInput).
pub mod get_segments_input {

    /// A builder for [`GetSegmentsInput`](crate::input::GetSegmentsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetSegmentsInput`](crate::input::GetSegmentsInput).
        pub fn build(self) -> crate::input::GetSegmentsInput {
            crate::input::GetSegmentsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Creates a new segment for an application or updates the configuration, dimension, and other settings for an existing segment that's associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_segment_request: ::std::option::Option<crate::model::WriteSegmentRequest>,
}
impl UpdateSegmentInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn write_segment_request(&self) -> ::std::option::Option<&crate::model::WriteSegmentRequest> {
        self.write_segment_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSegmentInput`](crate::input::UpdateSegmentInput).
    pub fn builder() -> crate::input::update_segment_input::Builder {
        crate::input::update_segment_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_segment_input::Builder {
        crate::input::update_segment_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
            write_segment_request: self.write_segment_request,
        }
    }
}
impl ::std::hash::Hash for UpdateSegmentInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_segment_request, state);
    }
}
impl ::std::fmt::Display for UpdateSegmentInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.field("WriteSegmentRequest", &self.write_segment_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSegmentInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSegmentInput`](crate::input::UpdateSegmentInput).
pub mod update_segment_input {

    /// A builder for [`UpdateSegmentInput`](crate::input::UpdateSegmentInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_segment_request: ::std::option::Option<crate::model::WriteSegmentRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: ::std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        pub fn get_write_segment_request(&self) -> &::std::option::Option<crate::model::WriteSegmentRequest> {
            &self.write_segment_request
        }
        /// Consumes the builder and constructs a [`UpdateSegmentInput`](crate::input::UpdateSegmentInput).
        pub fn build(self) -> crate::input::UpdateSegmentInput {
            crate::input::UpdateSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                write_segment_request: self.write_segment_request,
            }
        }
    }
}

/// <p>Retrieves information about the configuration, dimension, and other settings for a specific version of a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentVersionInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl GetSegmentVersionInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput).
    pub fn builder() -> crate::input::get_segment_version_input::Builder {
        crate::input::get_segment_version_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segment_version_input::Builder {
        crate::input::get_segment_version_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for GetSegmentVersionInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for GetSegmentVersionInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentVersionInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput).
pub mod get_segment_version_input {

    /// A builder for [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// Consumes the builder and constructs a [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput).
        pub fn build(self) -> crate::input::GetSegmentVersionInput {
            crate::input::GetSegmentVersionInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                version: self.version,
            }
        }
    }
}

/// <p>Retrieves information about the configuration, dimension, and other settings for all the versions of a specific segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentVersionsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetSegmentVersionsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput).
    pub fn builder() -> crate::input::get_segment_versions_input::Builder {
        crate::input::get_segment_versions_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segment_versions_input::Builder {
        crate::input::get_segment_versions_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetSegmentVersionsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetSegmentVersionsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentVersionsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput).
pub mod get_segment_versions_input {

    /// A builder for [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput).
        pub fn build(self) -> crate::input::GetSegmentVersionsInput {
            crate::input::GetSegmentVersionsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the import jobs for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentImportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetSegmentImportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput).
    pub fn builder() -> crate::input::get_segment_import_jobs_input::Builder {
        crate::input::get_segment_import_jobs_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segment_import_jobs_input::Builder {
        crate::input::get_segment_import_jobs_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetSegmentImportJobsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetSegmentImportJobsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentImportJobsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput).
pub mod get_segment_import_jobs_input {

    /// A builder for [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput).
        pub fn build(self) -> crate::input::GetSegmentImportJobsInput {
            crate::input::GetSegmentImportJobsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the export jobs for a segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentExportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) segment_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetSegmentExportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn segment_id(&self) -> ::std::option::Option<&str> {
        self.segment_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentExportJobsInput`](crate::input::GetSegmentExportJobsInput).
    pub fn builder() -> crate::input::get_segment_export_jobs_input::Builder {
        crate::input::get_segment_export_jobs_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_segment_export_jobs_input::Builder {
        crate::input::get_segment_export_jobs_input::Builder {
            application_id: self.application_id,
            segment_id: self.segment_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetSegmentExportJobsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetSegmentExportJobsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SegmentId", &self.segment_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentExportJobsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentExportJobsInput`](crate::input::GetSegmentExportJobsInput).
pub mod get_segment_export_jobs_input {

    /// A builder for [`GetSegmentExportJobsInput`](crate::input::GetSegmentExportJobsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) segment_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetSegmentExportJobsInput`](crate::input::GetSegmentExportJobsInput).
        pub fn build(self) -> crate::input::GetSegmentExportJobsInput {
            crate::input::GetSegmentExportJobsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Creates an import job for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateImportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) import_job_request: ::std::option::Option<crate::model::ImportJobRequest>,
}
impl CreateImportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn import_job_request(&self) -> ::std::option::Option<&crate::model::ImportJobRequest> {
        self.import_job_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateImportJobInput`](crate::input::CreateImportJobInput).
    pub fn builder() -> crate::input::create_import_job_input::Builder {
        crate::input::create_import_job_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_import_job_input::Builder {
        crate::input::create_import_job_input::Builder {
            application_id: self.application_id,
            import_job_request: self.import_job_request,
        }
    }
}
impl ::std::hash::Hash for CreateImportJobInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_job_request, state);
    }
}
impl ::std::fmt::Display for CreateImportJobInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("ImportJobRequest", &self.import_job_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateImportJobInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateImportJobInput`](crate::input::CreateImportJobInput).
pub mod create_import_job_input {

    /// A builder for [`CreateImportJobInput`](crate::input::CreateImportJobInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) import_job_request: ::std::option::Option<crate::model::ImportJobRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn import_job_request(mut self, input: crate::model::ImportJobRequest) -> Self {
            self.import_job_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_import_job_request(mut self, input: ::std::option::Option<crate::model::ImportJobRequest>) -> Self {
            self.import_job_request = input;
            self
        }
        pub fn get_import_job_request(&self) -> &::std::option::Option<crate::model::ImportJobRequest> {
            &self.import_job_request
        }
        /// Consumes the builder and constructs a [`CreateImportJobInput`](crate::input::CreateImportJobInput).
        pub fn build(self) -> crate::input::CreateImportJobInput {
            crate::input::CreateImportJobInput {
                application_id: self.application_id,
                import_job_request: self.import_job_request,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of a specific import job for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetImportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) job_id: ::std::option::Option<::std::string::String>,
}
impl GetImportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn job_id(&self) -> ::std::option::Option<&str> {
        self.job_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobInput`](crate::input::GetImportJobInput).
    pub fn builder() -> crate::input::get_import_job_input::Builder {
        crate::input::get_import_job_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_import_job_input::Builder {
        crate::input::get_import_job_input::Builder {
            application_id: self.application_id,
            job_id: self.job_id,
        }
    }
}
impl ::std::hash::Hash for GetImportJobInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.job_id, state);
    }
}
impl ::std::fmt::Display for GetImportJobInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JobId", &self.job_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetImportJobInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetImportJobInput`](crate::input::GetImportJobInput).
pub mod get_import_job_input {

    /// A builder for [`GetImportJobInput`](crate::input::GetImportJobInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) job_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.job_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.job_id
        }
        /// Consumes the builder and constructs a [`GetImportJobInput`](crate::input::GetImportJobInput).
        pub fn build(self) -> crate::input::GetImportJobInput {
            crate::input::GetImportJobInput {
                application_id: self.application_id,
                job_id: self.job_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of all the import jobs for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetImportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetImportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobsInput`](crate::input::GetImportJobsInput).
    pub fn builder() -> crate::input::get_import_jobs_input::Builder {
        crate::input::get_import_jobs_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_import_jobs_input::Builder {
        crate::input::get_import_jobs_input::Builder {
            application_id: self.application_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetImportJobsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetImportJobsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetImportJobsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetImportJobsInput`](crate::input::GetImportJobsInput).
pub mod get_import_jobs_input {

    /// A builder for [`GetImportJobsInput`](crate::input::GetImportJobsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetImportJobsInput`](crate::input::GetImportJobsInput).
        pub fn build(self) -> crate::input::GetImportJobsInput {
            crate::input::GetImportJobsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Creates an export job for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateExportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) export_job_request: ::std::option::Option<crate::model::ExportJobRequest>,
}
impl CreateExportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn export_job_request(&self) -> ::std::option::Option<&crate::model::ExportJobRequest> {
        self.export_job_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateExportJobInput`](crate::input::CreateExportJobInput).
    pub fn builder() -> crate::input::create_export_job_input::Builder {
        crate::input::create_export_job_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_export_job_input::Builder {
        crate::input::create_export_job_input::Builder {
            application_id: self.application_id,
            export_job_request: self.export_job_request,
        }
    }
}
impl ::std::hash::Hash for CreateExportJobInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.export_job_request, state);
    }
}
impl ::std::fmt::Display for CreateExportJobInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("ExportJobRequest", &self.export_job_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateExportJobInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateExportJobInput`](crate::input::CreateExportJobInput).
pub mod create_export_job_input {

    /// A builder for [`CreateExportJobInput`](crate::input::CreateExportJobInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) export_job_request: ::std::option::Option<crate::model::ExportJobRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn export_job_request(mut self, input: crate::model::ExportJobRequest) -> Self {
            self.export_job_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_export_job_request(mut self, input: ::std::option::Option<crate::model::ExportJobRequest>) -> Self {
            self.export_job_request = input;
            self
        }
        pub fn get_export_job_request(&self) -> &::std::option::Option<crate::model::ExportJobRequest> {
            &self.export_job_request
        }
        /// Consumes the builder and constructs a [`CreateExportJobInput`](crate::input::CreateExportJobInput).
        pub fn build(self) -> crate::input::CreateExportJobInput {
            crate::input::CreateExportJobInput {
                application_id: self.application_id,
                export_job_request: self.export_job_request,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of a specific export job for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetExportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) job_id: ::std::option::Option<::std::string::String>,
}
impl GetExportJobInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn job_id(&self) -> ::std::option::Option<&str> {
        self.job_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetExportJobInput`](crate::input::GetExportJobInput).
    pub fn builder() -> crate::input::get_export_job_input::Builder {
        crate::input::get_export_job_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_export_job_input::Builder {
        crate::input::get_export_job_input::Builder {
            application_id: self.application_id,
            job_id: self.job_id,
        }
    }
}
impl ::std::hash::Hash for GetExportJobInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.job_id, state);
    }
}
impl ::std::fmt::Display for GetExportJobInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JobId", &self.job_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetExportJobInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetExportJobInput`](crate::input::GetExportJobInput).
pub mod get_export_job_input {

    /// A builder for [`GetExportJobInput`](crate::input::GetExportJobInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) job_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn job_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.job_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        pub fn get_job_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.job_id
        }
        /// Consumes the builder and constructs a [`GetExportJobInput`](crate::input::GetExportJobInput).
        pub fn build(self) -> crate::input::GetExportJobInput {
            crate::input::GetExportJobInput {
                application_id: self.application_id,
                job_id: self.job_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of all the export jobs for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetExportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl GetExportJobsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetExportJobsInput`](crate::input::GetExportJobsInput).
    pub fn builder() -> crate::input::get_export_jobs_input::Builder {
        crate::input::get_export_jobs_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_export_jobs_input::Builder {
        crate::input::get_export_jobs_input::Builder {
            application_id: self.application_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for GetExportJobsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for GetExportJobsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetExportJobsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetExportJobsInput`](crate::input::GetExportJobsInput).
pub mod get_export_jobs_input {

    /// A builder for [`GetExportJobsInput`](crate::input::GetExportJobsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`GetExportJobsInput`](crate::input::GetExportJobsInput).
        pub fn build(self) -> crate::input::GetExportJobsInput {
            crate::input::GetExportJobsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Retrieves information about the settings and attributes of a specific endpoint for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
}
impl GetEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_id(&self) -> ::std::option::Option<&str> {
        self.endpoint_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetEndpointInput`](crate::input::GetEndpointInput).
    pub fn builder() -> crate::input::get_endpoint_input::Builder {
        crate::input::get_endpoint_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_endpoint_input::Builder {
        crate::input::get_endpoint_input::Builder {
            application_id: self.application_id,
            endpoint_id: self.endpoint_id,
        }
    }
}
impl ::std::hash::Hash for GetEndpointInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_id, state);
    }
}
impl ::std::fmt::Display for GetEndpointInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EndpointId", &self.endpoint_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEndpointInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEndpointInput`](crate::input::GetEndpointInput).
pub mod get_endpoint_input {

    /// A builder for [`GetEndpointInput`](crate::input::GetEndpointInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn endpoint_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        pub fn get_endpoint_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_id
        }
        /// Consumes the builder and constructs a [`GetEndpointInput`](crate::input::GetEndpointInput).
        pub fn build(self) -> crate::input::GetEndpointInput {
            crate::input::GetEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
            }
        }
    }
}

/// <p>Deletes an endpoint from an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
}
impl DeleteEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_id(&self) -> ::std::option::Option<&str> {
        self.endpoint_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
    pub fn builder() -> crate::input::delete_endpoint_input::Builder {
        crate::input::delete_endpoint_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_endpoint_input::Builder {
        crate::input::delete_endpoint_input::Builder {
            application_id: self.application_id,
            endpoint_id: self.endpoint_id,
        }
    }
}
impl ::std::hash::Hash for DeleteEndpointInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_id, state);
    }
}
impl ::std::fmt::Display for DeleteEndpointInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EndpointId", &self.endpoint_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEndpointInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
pub mod delete_endpoint_input {

    /// A builder for [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn endpoint_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        pub fn get_endpoint_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_id
        }
        /// Consumes the builder and constructs a [`DeleteEndpointInput`](crate::input::DeleteEndpointInput).
        pub fn build(self) -> crate::input::DeleteEndpointInput {
            crate::input::DeleteEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
            }
        }
    }
}

/// <p>Creates a new endpoint for an application or updates the settings and attributes of an existing endpoint for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
    pub(crate) endpoint_request: ::std::option::Option<crate::model::EndpointRequest>,
}
impl UpdateEndpointInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_id(&self) -> ::std::option::Option<&str> {
        self.endpoint_id.as_deref()
    }
    pub fn endpoint_request(&self) -> ::std::option::Option<&crate::model::EndpointRequest> {
        self.endpoint_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput).
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder {
            application_id: self.application_id,
            endpoint_id: self.endpoint_id,
            endpoint_request: self.endpoint_request,
        }
    }
}
impl ::std::hash::Hash for UpdateEndpointInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_request, state);
    }
}
impl ::std::fmt::Display for UpdateEndpointInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EndpointId", &self.endpoint_id);
        shape.field("EndpointRequest", &self.endpoint_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEndpointInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEndpointInput`](crate::input::UpdateEndpointInput).
pub mod update_endpoint_input {

    /// A builder for [`UpdateEndpointInput`](crate::input::UpdateEndpointInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_request: ::std::option::Option<crate::model::EndpointRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn endpoint_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.endpoint_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        pub fn get_endpoint_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.endpoint_id
        }
        pub fn endpoint_request(mut self, input: crate::model::EndpointRequest) -> Self {
            self.endpoint_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_request(mut self, input: ::std::option::Option<crate::model::EndpointRequest>) -> Self {
            self.endpoint_request = input;
            self
        }
        pub fn get_endpoint_request(&self) -> &::std::option::Option<crate::model::EndpointRequest> {
            &self.endpoint_request
        }
        /// Consumes the builder and constructs a [`UpdateEndpointInput`](crate::input::UpdateEndpointInput).
        pub fn build(self) -> crate::input::UpdateEndpointInput {
            crate::input::UpdateEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
                endpoint_request: self.endpoint_request,
            }
        }
    }
}

/// <p>Creates a new batch of endpoints for an application or updates the settings and attributes of a batch of existing endpoints for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEndpointsBatchInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) endpoint_batch_request: ::std::option::Option<crate::model::EndpointBatchRequest>,
}
impl UpdateEndpointsBatchInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn endpoint_batch_request(&self) -> ::std::option::Option<&crate::model::EndpointBatchRequest> {
        self.endpoint_batch_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput).
    pub fn builder() -> crate::input::update_endpoints_batch_input::Builder {
        crate::input::update_endpoints_batch_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_endpoints_batch_input::Builder {
        crate::input::update_endpoints_batch_input::Builder {
            application_id: self.application_id,
            endpoint_batch_request: self.endpoint_batch_request,
        }
    }
}
impl ::std::hash::Hash for UpdateEndpointsBatchInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_batch_request, state);
    }
}
impl ::std::fmt::Display for UpdateEndpointsBatchInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EndpointBatchRequest", &self.endpoint_batch_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEndpointsBatchInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput).
pub mod update_endpoints_batch_input {

    /// A builder for [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) endpoint_batch_request: ::std::option::Option<crate::model::EndpointBatchRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn endpoint_batch_request(mut self, input: crate::model::EndpointBatchRequest) -> Self {
            self.endpoint_batch_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_batch_request(mut self, input: ::std::option::Option<crate::model::EndpointBatchRequest>) -> Self {
            self.endpoint_batch_request = input;
            self
        }
        pub fn get_endpoint_batch_request(&self) -> &::std::option::Option<crate::model::EndpointBatchRequest> {
            &self.endpoint_batch_request
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput).
        pub fn build(self) -> crate::input::UpdateEndpointsBatchInput {
            crate::input::UpdateEndpointsBatchInput {
                application_id: self.application_id,
                endpoint_batch_request: self.endpoint_batch_request,
            }
        }
    }
}

/// <p>Retrieves information about all the endpoints that are associated with a specific user ID.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetUserEndpointsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) user_id: ::std::option::Option<::std::string::String>,
}
impl GetUserEndpointsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn user_id(&self) -> ::std::option::Option<&str> {
        self.user_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetUserEndpointsInput`](crate::input::GetUserEndpointsInput).
    pub fn builder() -> crate::input::get_user_endpoints_input::Builder {
        crate::input::get_user_endpoints_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_user_endpoints_input::Builder {
        crate::input::get_user_endpoints_input::Builder {
            application_id: self.application_id,
            user_id: self.user_id,
        }
    }
}
impl ::std::hash::Hash for GetUserEndpointsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user_id, state);
    }
}
impl ::std::fmt::Display for GetUserEndpointsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("UserId", &self.user_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetUserEndpointsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetUserEndpointsInput`](crate::input::GetUserEndpointsInput).
pub mod get_user_endpoints_input {

    /// A builder for [`GetUserEndpointsInput`](crate::input::GetUserEndpointsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) user_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// Consumes the builder and constructs a [`GetUserEndpointsInput`](crate::input::GetUserEndpointsInput).
        pub fn build(self) -> crate::input::GetUserEndpointsInput {
            crate::input::GetUserEndpointsInput {
                application_id: self.application_id,
                user_id: self.user_id,
            }
        }
    }
}

/// <p>Deletes all the endpoints that are associated with a specific user ID.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteUserEndpointsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) user_id: ::std::option::Option<::std::string::String>,
}
impl DeleteUserEndpointsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn user_id(&self) -> ::std::option::Option<&str> {
        self.user_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteUserEndpointsInput`](crate::input::DeleteUserEndpointsInput).
    pub fn builder() -> crate::input::delete_user_endpoints_input::Builder {
        crate::input::delete_user_endpoints_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_user_endpoints_input::Builder {
        crate::input::delete_user_endpoints_input::Builder {
            application_id: self.application_id,
            user_id: self.user_id,
        }
    }
}
impl ::std::hash::Hash for DeleteUserEndpointsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.user_id, state);
    }
}
impl ::std::fmt::Display for DeleteUserEndpointsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("UserId", &self.user_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteUserEndpointsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteUserEndpointsInput`](crate::input::DeleteUserEndpointsInput).
pub mod delete_user_endpoints_input {

    /// A builder for [`DeleteUserEndpointsInput`](crate::input::DeleteUserEndpointsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) user_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
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
        /// Consumes the builder and constructs a [`DeleteUserEndpointsInput`](crate::input::DeleteUserEndpointsInput).
        pub fn build(self) -> crate::input::DeleteUserEndpointsInput {
            crate::input::DeleteUserEndpointsInput {
                application_id: self.application_id,
                user_id: self.user_id,
            }
        }
    }
}

/// <p>Creates a new event to record for endpoints, or creates or updates endpoint data that existing events are associated with.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutEventsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) events_request: ::std::option::Option<crate::model::EventsRequest>,
}
impl PutEventsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn events_request(&self) -> ::std::option::Option<&crate::model::EventsRequest> {
        self.events_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`PutEventsInput`](crate::input::PutEventsInput).
    pub fn builder() -> crate::input::put_events_input::Builder {
        crate::input::put_events_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::put_events_input::Builder {
        crate::input::put_events_input::Builder {
            application_id: self.application_id,
            events_request: self.events_request,
        }
    }
}
impl ::std::hash::Hash for PutEventsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.events_request, state);
    }
}
impl ::std::fmt::Display for PutEventsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EventsRequest", &self.events_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for PutEventsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`PutEventsInput`](crate::input::PutEventsInput).
pub mod put_events_input {

    /// A builder for [`PutEventsInput`](crate::input::PutEventsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) events_request: ::std::option::Option<crate::model::EventsRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn events_request(mut self, input: crate::model::EventsRequest) -> Self {
            self.events_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_events_request(mut self, input: ::std::option::Option<crate::model::EventsRequest>) -> Self {
            self.events_request = input;
            self
        }
        pub fn get_events_request(&self) -> &::std::option::Option<crate::model::EventsRequest> {
            &self.events_request
        }
        /// Consumes the builder and constructs a [`PutEventsInput`](crate::input::PutEventsInput).
        pub fn build(self) -> crate::input::PutEventsInput {
            crate::input::PutEventsInput {
                application_id: self.application_id,
                events_request: self.events_request,
            }
        }
    }
}

/// <p>Creates and sends a direct message.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SendMessagesInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) message_request: ::std::option::Option<crate::model::MessageRequest>,
}
impl SendMessagesInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn message_request(&self) -> ::std::option::Option<&crate::model::MessageRequest> {
        self.message_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SendMessagesInput`](crate::input::SendMessagesInput).
    pub fn builder() -> crate::input::send_messages_input::Builder {
        crate::input::send_messages_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::send_messages_input::Builder {
        crate::input::send_messages_input::Builder {
            application_id: self.application_id,
            message_request: self.message_request,
        }
    }
}
impl ::std::hash::Hash for SendMessagesInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_request, state);
    }
}
impl ::std::fmt::Display for SendMessagesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("MessageRequest", &self.message_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SendMessagesInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SendMessagesInput`](crate::input::SendMessagesInput).
pub mod send_messages_input {

    /// A builder for [`SendMessagesInput`](crate::input::SendMessagesInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) message_request: ::std::option::Option<crate::model::MessageRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn message_request(mut self, input: crate::model::MessageRequest) -> Self {
            self.message_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_request(mut self, input: ::std::option::Option<crate::model::MessageRequest>) -> Self {
            self.message_request = input;
            self
        }
        pub fn get_message_request(&self) -> &::std::option::Option<crate::model::MessageRequest> {
            &self.message_request
        }
        /// Consumes the builder and constructs a [`SendMessagesInput`](crate::input::SendMessagesInput).
        pub fn build(self) -> crate::input::SendMessagesInput {
            crate::input::SendMessagesInput {
                application_id: self.application_id,
                message_request: self.message_request,
            }
        }
    }
}

/// <p>Retrieves information about the history and status of each channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetChannelsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetChannelsInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetChannelsInput`](crate::input::GetChannelsInput).
    pub fn builder() -> crate::input::get_channels_input::Builder {
        crate::input::get_channels_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_channels_input::Builder {
        crate::input::get_channels_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetChannelsInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetChannelsInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetChannelsInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetChannelsInput`](crate::input::GetChannelsInput).
pub mod get_channels_input {

    /// A builder for [`GetChannelsInput`](crate::input::GetChannelsInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetChannelsInput`](crate::input::GetChannelsInput).
        pub fn build(self) -> crate::input::GetChannelsInput {
            crate::input::GetChannelsInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the APNs channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetApnsChannelInput`](crate::input::GetApnsChannelInput).
    pub fn builder() -> crate::input::get_apns_channel_input::Builder {
        crate::input::get_apns_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_apns_channel_input::Builder {
        crate::input::get_apns_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetApnsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetApnsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetApnsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetApnsChannelInput`](crate::input::GetApnsChannelInput).
pub mod get_apns_channel_input {

    /// A builder for [`GetApnsChannelInput`](crate::input::GetApnsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetApnsChannelInput`](crate::input::GetApnsChannelInput).
        pub fn build(self) -> crate::input::GetApnsChannelInput {
            crate::input::GetApnsChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Enables the APNs channel for an application or updates the status and settings of the APNs channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) apns_channel_request: ::std::option::Option<crate::model::APNSChannelRequest>,
}
impl UpdateApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn apns_channel_request(&self) -> ::std::option::Option<&crate::model::APNSChannelRequest> {
        self.apns_channel_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput).
    pub fn builder() -> crate::input::update_apns_channel_input::Builder {
        crate::input::update_apns_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_apns_channel_input::Builder {
        crate::input::update_apns_channel_input::Builder {
            application_id: self.application_id,
            apns_channel_request: self.apns_channel_request,
        }
    }
}
impl ::std::hash::Hash for UpdateApnsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_channel_request, state);
    }
}
impl ::std::fmt::Display for UpdateApnsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("APNSChannelRequest", &self.apns_channel_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateApnsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput).
pub mod update_apns_channel_input {

    /// A builder for [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) apns_channel_request: ::std::option::Option<crate::model::APNSChannelRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn apns_channel_request(mut self, input: crate::model::APNSChannelRequest) -> Self {
            self.apns_channel_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_apns_channel_request(mut self, input: ::std::option::Option<crate::model::APNSChannelRequest>) -> Self {
            self.apns_channel_request = input;
            self
        }
        pub fn get_apns_channel_request(&self) -> &::std::option::Option<crate::model::APNSChannelRequest> {
            &self.apns_channel_request
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput).
        pub fn build(self) -> crate::input::UpdateApnsChannelInput {
            crate::input::UpdateApnsChannelInput {
                application_id: self.application_id,
                apns_channel_request: self.apns_channel_request,
            }
        }
    }
}

/// <p>Disables the APNs channel for an application and deletes any existing settings for the channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl DeleteApnsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput).
    pub fn builder() -> crate::input::delete_apns_channel_input::Builder {
        crate::input::delete_apns_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_apns_channel_input::Builder {
        crate::input::delete_apns_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for DeleteApnsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for DeleteApnsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteApnsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput).
pub mod delete_apns_channel_input {

    /// A builder for [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput).
        pub fn build(self) -> crate::input::DeleteApnsChannelInput {
            crate::input::DeleteApnsChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the GCM channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetGcmChannelInput`](crate::input::GetGcmChannelInput).
    pub fn builder() -> crate::input::get_gcm_channel_input::Builder {
        crate::input::get_gcm_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_gcm_channel_input::Builder {
        crate::input::get_gcm_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetGcmChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetGcmChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetGcmChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetGcmChannelInput`](crate::input::GetGcmChannelInput).
pub mod get_gcm_channel_input {

    /// A builder for [`GetGcmChannelInput`](crate::input::GetGcmChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetGcmChannelInput`](crate::input::GetGcmChannelInput).
        pub fn build(self) -> crate::input::GetGcmChannelInput {
            crate::input::GetGcmChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Enables the GCM channel for an application or updates the status and settings of the GCM channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) gcm_channel_request: ::std::option::Option<crate::model::GCMChannelRequest>,
}
impl UpdateGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn gcm_channel_request(&self) -> ::std::option::Option<&crate::model::GCMChannelRequest> {
        self.gcm_channel_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput).
    pub fn builder() -> crate::input::update_gcm_channel_input::Builder {
        crate::input::update_gcm_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_gcm_channel_input::Builder {
        crate::input::update_gcm_channel_input::Builder {
            application_id: self.application_id,
            gcm_channel_request: self.gcm_channel_request,
        }
    }
}
impl ::std::hash::Hash for UpdateGcmChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_channel_request, state);
    }
}
impl ::std::fmt::Display for UpdateGcmChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("GCMChannelRequest", &self.gcm_channel_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateGcmChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput).
pub mod update_gcm_channel_input {

    /// A builder for [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) gcm_channel_request: ::std::option::Option<crate::model::GCMChannelRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn gcm_channel_request(mut self, input: crate::model::GCMChannelRequest) -> Self {
            self.gcm_channel_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_channel_request(mut self, input: ::std::option::Option<crate::model::GCMChannelRequest>) -> Self {
            self.gcm_channel_request = input;
            self
        }
        pub fn get_gcm_channel_request(&self) -> &::std::option::Option<crate::model::GCMChannelRequest> {
            &self.gcm_channel_request
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput).
        pub fn build(self) -> crate::input::UpdateGcmChannelInput {
            crate::input::UpdateGcmChannelInput {
                application_id: self.application_id,
                gcm_channel_request: self.gcm_channel_request,
            }
        }
    }
}

/// <p>Disables the GCM channel for an application and deletes any existing settings for the channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl DeleteGcmChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput).
    pub fn builder() -> crate::input::delete_gcm_channel_input::Builder {
        crate::input::delete_gcm_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_gcm_channel_input::Builder {
        crate::input::delete_gcm_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for DeleteGcmChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for DeleteGcmChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteGcmChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput).
pub mod delete_gcm_channel_input {

    /// A builder for [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput).
        pub fn build(self) -> crate::input::DeleteGcmChannelInput {
            crate::input::DeleteGcmChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the SMS channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSmsChannelInput`](crate::input::GetSmsChannelInput).
    pub fn builder() -> crate::input::get_sms_channel_input::Builder {
        crate::input::get_sms_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_sms_channel_input::Builder {
        crate::input::get_sms_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetSmsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetSmsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSmsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSmsChannelInput`](crate::input::GetSmsChannelInput).
pub mod get_sms_channel_input {

    /// A builder for [`GetSmsChannelInput`](crate::input::GetSmsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetSmsChannelInput`](crate::input::GetSmsChannelInput).
        pub fn build(self) -> crate::input::GetSmsChannelInput {
            crate::input::GetSmsChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Enables the SMS channel for an application or updates the status and settings of the SMS channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) sms_channel_request: ::std::option::Option<crate::model::SMSChannelRequest>,
}
impl UpdateSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn sms_channel_request(&self) -> ::std::option::Option<&crate::model::SMSChannelRequest> {
        self.sms_channel_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSmsChannelInput`](crate::input::UpdateSmsChannelInput).
    pub fn builder() -> crate::input::update_sms_channel_input::Builder {
        crate::input::update_sms_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_sms_channel_input::Builder {
        crate::input::update_sms_channel_input::Builder {
            application_id: self.application_id,
            sms_channel_request: self.sms_channel_request,
        }
    }
}
impl ::std::hash::Hash for UpdateSmsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_channel_request, state);
    }
}
impl ::std::fmt::Display for UpdateSmsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("SMSChannelRequest", &self.sms_channel_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSmsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSmsChannelInput`](crate::input::UpdateSmsChannelInput).
pub mod update_sms_channel_input {

    /// A builder for [`UpdateSmsChannelInput`](crate::input::UpdateSmsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) sms_channel_request: ::std::option::Option<crate::model::SMSChannelRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn sms_channel_request(mut self, input: crate::model::SMSChannelRequest) -> Self {
            self.sms_channel_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_channel_request(mut self, input: ::std::option::Option<crate::model::SMSChannelRequest>) -> Self {
            self.sms_channel_request = input;
            self
        }
        pub fn get_sms_channel_request(&self) -> &::std::option::Option<crate::model::SMSChannelRequest> {
            &self.sms_channel_request
        }
        /// Consumes the builder and constructs a [`UpdateSmsChannelInput`](crate::input::UpdateSmsChannelInput).
        pub fn build(self) -> crate::input::UpdateSmsChannelInput {
            crate::input::UpdateSmsChannelInput {
                application_id: self.application_id,
                sms_channel_request: self.sms_channel_request,
            }
        }
    }
}

/// <p>Disables the SMS channel for an application and deletes any existing settings for the channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl DeleteSmsChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSmsChannelInput`](crate::input::DeleteSmsChannelInput).
    pub fn builder() -> crate::input::delete_sms_channel_input::Builder {
        crate::input::delete_sms_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_sms_channel_input::Builder {
        crate::input::delete_sms_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for DeleteSmsChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for DeleteSmsChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSmsChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSmsChannelInput`](crate::input::DeleteSmsChannelInput).
pub mod delete_sms_channel_input {

    /// A builder for [`DeleteSmsChannelInput`](crate::input::DeleteSmsChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`DeleteSmsChannelInput`](crate::input::DeleteSmsChannelInput).
        pub fn build(self) -> crate::input::DeleteSmsChannelInput {
            crate::input::DeleteSmsChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Retrieves information about the status and settings of the email channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl GetEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetEmailChannelInput`](crate::input::GetEmailChannelInput).
    pub fn builder() -> crate::input::get_email_channel_input::Builder {
        crate::input::get_email_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_email_channel_input::Builder {
        crate::input::get_email_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for GetEmailChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for GetEmailChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEmailChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEmailChannelInput`](crate::input::GetEmailChannelInput).
pub mod get_email_channel_input {

    /// A builder for [`GetEmailChannelInput`](crate::input::GetEmailChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`GetEmailChannelInput`](crate::input::GetEmailChannelInput).
        pub fn build(self) -> crate::input::GetEmailChannelInput {
            crate::input::GetEmailChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Enables the email channel for an application or updates the status and settings of the email channel for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) email_channel_request: ::std::option::Option<crate::model::EmailChannelRequest>,
}
impl UpdateEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn email_channel_request(&self) -> ::std::option::Option<&crate::model::EmailChannelRequest> {
        self.email_channel_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEmailChannelInput`](crate::input::UpdateEmailChannelInput).
    pub fn builder() -> crate::input::update_email_channel_input::Builder {
        crate::input::update_email_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_email_channel_input::Builder {
        crate::input::update_email_channel_input::Builder {
            application_id: self.application_id,
            email_channel_request: self.email_channel_request,
        }
    }
}
impl ::std::hash::Hash for UpdateEmailChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_channel_request, state);
    }
}
impl ::std::fmt::Display for UpdateEmailChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("EmailChannelRequest", &self.email_channel_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEmailChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEmailChannelInput`](crate::input::UpdateEmailChannelInput).
pub mod update_email_channel_input {

    /// A builder for [`UpdateEmailChannelInput`](crate::input::UpdateEmailChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) email_channel_request: ::std::option::Option<crate::model::EmailChannelRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn email_channel_request(mut self, input: crate::model::EmailChannelRequest) -> Self {
            self.email_channel_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_channel_request(mut self, input: ::std::option::Option<crate::model::EmailChannelRequest>) -> Self {
            self.email_channel_request = input;
            self
        }
        pub fn get_email_channel_request(&self) -> &::std::option::Option<crate::model::EmailChannelRequest> {
            &self.email_channel_request
        }
        /// Consumes the builder and constructs a [`UpdateEmailChannelInput`](crate::input::UpdateEmailChannelInput).
        pub fn build(self) -> crate::input::UpdateEmailChannelInput {
            crate::input::UpdateEmailChannelInput {
                application_id: self.application_id,
                email_channel_request: self.email_channel_request,
            }
        }
    }
}

/// <p>Disables the email channel for an application and deletes any existing settings for the channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
}
impl DeleteEmailChannelInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEmailChannelInput`](crate::input::DeleteEmailChannelInput).
    pub fn builder() -> crate::input::delete_email_channel_input::Builder {
        crate::input::delete_email_channel_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_email_channel_input::Builder {
        crate::input::delete_email_channel_input::Builder {
            application_id: self.application_id,
        }
    }
}
impl ::std::hash::Hash for DeleteEmailChannelInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
    }
}
impl ::std::fmt::Display for DeleteEmailChannelInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEmailChannelInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEmailChannelInput`](crate::input::DeleteEmailChannelInput).
pub mod delete_email_channel_input {

    /// A builder for [`DeleteEmailChannelInput`](crate::input::DeleteEmailChannelInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// Consumes the builder and constructs a [`DeleteEmailChannelInput`](crate::input::DeleteEmailChannelInput).
        pub fn build(self) -> crate::input::DeleteEmailChannelInput {
            crate::input::DeleteEmailChannelInput {
                application_id: self.application_id,
            }
        }
    }
}

/// <p>Creates a journey for an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_journey_request: ::std::option::Option<crate::model::WriteJourneyRequest>,
}
impl CreateJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn write_journey_request(&self) -> ::std::option::Option<&crate::model::WriteJourneyRequest> {
        self.write_journey_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateJourneyInput`](crate::input::CreateJourneyInput).
    pub fn builder() -> crate::input::create_journey_input::Builder {
        crate::input::create_journey_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_journey_input::Builder {
        crate::input::create_journey_input::Builder {
            application_id: self.application_id,
            write_journey_request: self.write_journey_request,
        }
    }
}
impl ::std::hash::Hash for CreateJourneyInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_journey_request, state);
    }
}
impl ::std::fmt::Display for CreateJourneyInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("WriteJourneyRequest", &self.write_journey_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateJourneyInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateJourneyInput`](crate::input::CreateJourneyInput).
pub mod create_journey_input {

    /// A builder for [`CreateJourneyInput`](crate::input::CreateJourneyInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_journey_request: ::std::option::Option<crate::model::WriteJourneyRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn write_journey_request(mut self, input: crate::model::WriteJourneyRequest) -> Self {
            self.write_journey_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_journey_request(mut self, input: ::std::option::Option<crate::model::WriteJourneyRequest>) -> Self {
            self.write_journey_request = input;
            self
        }
        pub fn get_write_journey_request(&self) -> &::std::option::Option<crate::model::WriteJourneyRequest> {
            &self.write_journey_request
        }
        /// Consumes the builder and constructs a [`CreateJourneyInput`](crate::input::CreateJourneyInput).
        pub fn build(self) -> crate::input::CreateJourneyInput {
            crate::input::CreateJourneyInput {
                application_id: self.application_id,
                write_journey_request: self.write_journey_request,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) journey_id: ::std::option::Option<::std::string::String>,
}
impl GetJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> ::std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetJourneyInput`](crate::input::GetJourneyInput).
    pub fn builder() -> crate::input::get_journey_input::Builder {
        crate::input::get_journey_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_journey_input::Builder {
        crate::input::get_journey_input::Builder {
            application_id: self.application_id,
            journey_id: self.journey_id,
        }
    }
}
impl ::std::hash::Hash for GetJourneyInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_id, state);
    }
}
impl ::std::fmt::Display for GetJourneyInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JourneyId", &self.journey_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetJourneyInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetJourneyInput`](crate::input::GetJourneyInput).
pub mod get_journey_input {

    /// A builder for [`GetJourneyInput`](crate::input::GetJourneyInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) journey_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn journey_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.journey_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        pub fn get_journey_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.journey_id
        }
        /// Consumes the builder and constructs a [`GetJourneyInput`](crate::input::GetJourneyInput).
        pub fn build(self) -> crate::input::GetJourneyInput {
            crate::input::GetJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
            }
        }
    }
}

/// <p>Retrieves information about the status, configuration, and other settings for all the journeys that are associated with an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListJourneysInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub(crate) token: ::std::option::Option<::std::string::String>,
}
impl ListJourneysInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
    pub fn token(&self) -> ::std::option::Option<&str> {
        self.token.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ListJourneysInput`](crate::input::ListJourneysInput).
    pub fn builder() -> crate::input::list_journeys_input::Builder {
        crate::input::list_journeys_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::list_journeys_input::Builder {
        crate::input::list_journeys_input::Builder {
            application_id: self.application_id,
            page_size: self.page_size,
            token: self.token,
        }
    }
}
impl ::std::hash::Hash for ListJourneysInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.token, state);
    }
}
impl ::std::fmt::Display for ListJourneysInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("PageSize", &self.page_size);
        shape.field("Token", &self.token);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListJourneysInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListJourneysInput`](crate::input::ListJourneysInput).
pub mod list_journeys_input {

    /// A builder for [`ListJourneysInput`](crate::input::ListJourneysInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) token: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn set_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// <p>The NextToken string that specifies which page of results to return in a paginated response.</p>
        pub fn get_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.token
        }
        /// Consumes the builder and constructs a [`ListJourneysInput`](crate::input::ListJourneysInput).
        pub fn build(self) -> crate::input::ListJourneysInput {
            crate::input::ListJourneysInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            }
        }
    }
}

/// <p>Updates the configuration and other settings for a journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) journey_id: ::std::option::Option<::std::string::String>,
    pub(crate) write_journey_request: ::std::option::Option<crate::model::WriteJourneyRequest>,
}
impl UpdateJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> ::std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    pub fn write_journey_request(&self) -> ::std::option::Option<&crate::model::WriteJourneyRequest> {
        self.write_journey_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateJourneyInput`](crate::input::UpdateJourneyInput).
    pub fn builder() -> crate::input::update_journey_input::Builder {
        crate::input::update_journey_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_journey_input::Builder {
        crate::input::update_journey_input::Builder {
            application_id: self.application_id,
            journey_id: self.journey_id,
            write_journey_request: self.write_journey_request,
        }
    }
}
impl ::std::hash::Hash for UpdateJourneyInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.write_journey_request, state);
    }
}
impl ::std::fmt::Display for UpdateJourneyInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JourneyId", &self.journey_id);
        shape.field("WriteJourneyRequest", &self.write_journey_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateJourneyInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateJourneyInput`](crate::input::UpdateJourneyInput).
pub mod update_journey_input {

    /// A builder for [`UpdateJourneyInput`](crate::input::UpdateJourneyInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) journey_id: ::std::option::Option<::std::string::String>,
        pub(crate) write_journey_request: ::std::option::Option<crate::model::WriteJourneyRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn journey_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.journey_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        pub fn get_journey_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.journey_id
        }
        pub fn write_journey_request(mut self, input: crate::model::WriteJourneyRequest) -> Self {
            self.write_journey_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_write_journey_request(mut self, input: ::std::option::Option<crate::model::WriteJourneyRequest>) -> Self {
            self.write_journey_request = input;
            self
        }
        pub fn get_write_journey_request(&self) -> &::std::option::Option<crate::model::WriteJourneyRequest> {
            &self.write_journey_request
        }
        /// Consumes the builder and constructs a [`UpdateJourneyInput`](crate::input::UpdateJourneyInput).
        pub fn build(self) -> crate::input::UpdateJourneyInput {
            crate::input::UpdateJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
                write_journey_request: self.write_journey_request,
            }
        }
    }
}

/// <p>Cancels (stops) an active journey.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateJourneyStateInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) journey_id: ::std::option::Option<::std::string::String>,
    pub(crate) journey_state_request: ::std::option::Option<crate::model::JourneyStateRequest>,
}
impl UpdateJourneyStateInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> ::std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    pub fn journey_state_request(&self) -> ::std::option::Option<&crate::model::JourneyStateRequest> {
        self.journey_state_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateJourneyStateInput`](crate::input::UpdateJourneyStateInput).
    pub fn builder() -> crate::input::update_journey_state_input::Builder {
        crate::input::update_journey_state_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_journey_state_input::Builder {
        crate::input::update_journey_state_input::Builder {
            application_id: self.application_id,
            journey_id: self.journey_id,
            journey_state_request: self.journey_state_request,
        }
    }
}
impl ::std::hash::Hash for UpdateJourneyStateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_state_request, state);
    }
}
impl ::std::fmt::Display for UpdateJourneyStateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JourneyId", &self.journey_id);
        shape.field("JourneyStateRequest", &self.journey_state_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateJourneyStateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateJourneyStateInput`](crate::input::UpdateJourneyStateInput).
pub mod update_journey_state_input {

    /// A builder for [`UpdateJourneyStateInput`](crate::input::UpdateJourneyStateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) journey_id: ::std::option::Option<::std::string::String>,
        pub(crate) journey_state_request: ::std::option::Option<crate::model::JourneyStateRequest>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn journey_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.journey_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        pub fn get_journey_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.journey_id
        }
        pub fn journey_state_request(mut self, input: crate::model::JourneyStateRequest) -> Self {
            self.journey_state_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_state_request(mut self, input: ::std::option::Option<crate::model::JourneyStateRequest>) -> Self {
            self.journey_state_request = input;
            self
        }
        pub fn get_journey_state_request(&self) -> &::std::option::Option<crate::model::JourneyStateRequest> {
            &self.journey_state_request
        }
        /// Consumes the builder and constructs a [`UpdateJourneyStateInput`](crate::input::UpdateJourneyStateInput).
        pub fn build(self) -> crate::input::UpdateJourneyStateInput {
            crate::input::UpdateJourneyStateInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
                journey_state_request: self.journey_state_request,
            }
        }
    }
}

/// <p>Deletes a journey from an application.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) journey_id: ::std::option::Option<::std::string::String>,
}
impl DeleteJourneyInput {
    /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }
    pub fn journey_id(&self) -> ::std::option::Option<&str> {
        self.journey_id.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteJourneyInput`](crate::input::DeleteJourneyInput).
    pub fn builder() -> crate::input::delete_journey_input::Builder {
        crate::input::delete_journey_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_journey_input::Builder {
        crate::input::delete_journey_input::Builder {
            application_id: self.application_id,
            journey_id: self.journey_id,
        }
    }
}
impl ::std::hash::Hash for DeleteJourneyInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_id, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_id, state);
    }
}
impl ::std::fmt::Display for DeleteJourneyInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationId", &self.application_id);
        shape.field("JourneyId", &self.journey_id);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteJourneyInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteJourneyInput`](crate::input::DeleteJourneyInput).
pub mod delete_journey_input {

    /// A builder for [`DeleteJourneyInput`](crate::input::DeleteJourneyInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: ::std::option::Option<::std::string::String>,
        pub(crate) journey_id: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.application_id = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// <p>The unique identifier for the application. This identifier is displayed as the <b>Project ID</b> on the Amazon Pinpoint console.</p>
        pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.application_id
        }
        pub fn journey_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.journey_id = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        pub fn get_journey_id(&self) -> &::std::option::Option<::std::string::String> {
            &self.journey_id
        }
        /// Consumes the builder and constructs a [`DeleteJourneyInput`](crate::input::DeleteJourneyInput).
        pub fn build(self) -> crate::input::DeleteJourneyInput {
            crate::input::DeleteJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
            }
        }
    }
}

/// <p>Creates a message template for messages that are sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateEmailTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) email_template_request: ::std::option::Option<crate::model::EmailTemplateRequest>,
}
impl CreateEmailTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn email_template_request(&self) -> ::std::option::Option<&crate::model::EmailTemplateRequest> {
        self.email_template_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput).
    pub fn builder() -> crate::input::create_email_template_input::Builder {
        crate::input::create_email_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_email_template_input::Builder {
        crate::input::create_email_template_input::Builder {
            template_name: self.template_name,
            email_template_request: self.email_template_request,
        }
    }
}
impl ::std::hash::Hash for CreateEmailTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_template_request, state);
    }
}
impl ::std::fmt::Display for CreateEmailTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("EmailTemplateRequest", &self.email_template_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateEmailTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput).
pub mod create_email_template_input {

    /// A builder for [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) email_template_request: ::std::option::Option<crate::model::EmailTemplateRequest>,
    }
    impl Builder {
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
        pub fn email_template_request(mut self, input: crate::model::EmailTemplateRequest) -> Self {
            self.email_template_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_template_request(mut self, input: ::std::option::Option<crate::model::EmailTemplateRequest>) -> Self {
            self.email_template_request = input;
            self
        }
        pub fn get_email_template_request(&self) -> &::std::option::Option<crate::model::EmailTemplateRequest> {
            &self.email_template_request
        }
        /// Consumes the builder and constructs a [`CreateEmailTemplateInput`](crate::input::CreateEmailTemplateInput).
        pub fn build(self) -> crate::input::CreateEmailTemplateInput {
            crate::input::CreateEmailTemplateInput {
                template_name: self.template_name,
                email_template_request: self.email_template_request,
            }
        }
    }
}

/// <p>Retrieves the content and settings of a message template for messages that are sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEmailTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl GetEmailTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput).
    pub fn builder() -> crate::input::get_email_template_input::Builder {
        crate::input::get_email_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_email_template_input::Builder {
        crate::input::get_email_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for GetEmailTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for GetEmailTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEmailTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput).
pub mod get_email_template_input {

    /// A builder for [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`GetEmailTemplateInput`](crate::input::GetEmailTemplateInput).
        pub fn build(self) -> crate::input::GetEmailTemplateInput {
            crate::input::GetEmailTemplateInput {
                template_name: self.template_name,
                version: self.version,
            }
        }
    }
}

/// <p>Updates an existing message template for messages that are sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEmailTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
    /// <p>Specifies whether to save the updates as a new version of the message template.</p>
    pub(crate) create_new_version: ::std::option::Option<bool>,
    pub(crate) email_template_request: ::std::option::Option<crate::model::EmailTemplateRequest>,
}
impl UpdateEmailTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// <p>Specifies whether to save the updates as a new version of the message template.</p>
    pub fn create_new_version(&self) -> ::std::option::Option<bool> {
        self.create_new_version
    }
    pub fn email_template_request(&self) -> ::std::option::Option<&crate::model::EmailTemplateRequest> {
        self.email_template_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEmailTemplateInput`](crate::input::UpdateEmailTemplateInput).
    pub fn builder() -> crate::input::update_email_template_input::Builder {
        crate::input::update_email_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_email_template_input::Builder {
        crate::input::update_email_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
            create_new_version: self.create_new_version,
            email_template_request: self.email_template_request,
        }
    }
}
impl ::std::hash::Hash for UpdateEmailTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.create_new_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_template_request, state);
    }
}
impl ::std::fmt::Display for UpdateEmailTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.field("CreateNewVersion", &self.create_new_version);
        shape.field("EmailTemplateRequest", &self.email_template_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEmailTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEmailTemplateInput`](crate::input::UpdateEmailTemplateInput).
pub mod update_email_template_input {

    /// A builder for [`UpdateEmailTemplateInput`](crate::input::UpdateEmailTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
        pub(crate) create_new_version: ::std::option::Option<bool>,
        pub(crate) email_template_request: ::std::option::Option<crate::model::EmailTemplateRequest>,
    }
    impl Builder {
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
        /// <p>Specifies whether to save the updates as a new version of the message template.</p>
        pub fn create_new_version(mut self, input: bool) -> Self {
            self.create_new_version = ::std::option::Option::Some(input);
            self
        }
        /// <p>Specifies whether to save the updates as a new version of the message template.</p>
        pub fn set_create_new_version(mut self, input: ::std::option::Option<bool>) -> Self {
            self.create_new_version = input;
            self
        }
        /// <p>Specifies whether to save the updates as a new version of the message template.</p>
        pub fn get_create_new_version(&self) -> &::std::option::Option<bool> {
            &self.create_new_version
        }
        pub fn email_template_request(mut self, input: crate::model::EmailTemplateRequest) -> Self {
            self.email_template_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_template_request(mut self, input: ::std::option::Option<crate::model::EmailTemplateRequest>) -> Self {
            self.email_template_request = input;
            self
        }
        pub fn get_email_template_request(&self) -> &::std::option::Option<crate::model::EmailTemplateRequest> {
            &self.email_template_request
        }
        /// Consumes the builder and constructs a [`UpdateEmailTemplateInput`](crate::input::UpdateEmailTemplateInput).
        pub fn build(self) -> crate::input::UpdateEmailTemplateInput {
            crate::input::UpdateEmailTemplateInput {
                template_name: self.template_name,
                version: self.version,
                create_new_version: self.create_new_version,
                email_template_request: self.email_template_request,
            }
        }
    }
}

/// <p>Deletes a message template for messages that were sent through the email channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEmailTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl DeleteEmailTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEmailTemplateInput`](crate::input::DeleteEmailTemplateInput).
    pub fn builder() -> crate::input::delete_email_template_input::Builder {
        crate::input::delete_email_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_email_template_input::Builder {
        crate::input::delete_email_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for DeleteEmailTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for DeleteEmailTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEmailTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEmailTemplateInput`](crate::input::DeleteEmailTemplateInput).
pub mod delete_email_template_input {

    /// A builder for [`DeleteEmailTemplateInput`](crate::input::DeleteEmailTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`DeleteEmailTemplateInput`](crate::input::DeleteEmailTemplateInput).
        pub fn build(self) -> crate::input::DeleteEmailTemplateInput {
            crate::input::DeleteEmailTemplateInput {
                template_name: self.template_name,
                version: self.version,
            }
        }
    }
}

/// <p>Creates a message template for messages that are sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSmsTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) sms_template_request: ::std::option::Option<crate::model::SMSTemplateRequest>,
}
impl CreateSmsTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn sms_template_request(&self) -> ::std::option::Option<&crate::model::SMSTemplateRequest> {
        self.sms_template_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateSmsTemplateInput`](crate::input::CreateSmsTemplateInput).
    pub fn builder() -> crate::input::create_sms_template_input::Builder {
        crate::input::create_sms_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::create_sms_template_input::Builder {
        crate::input::create_sms_template_input::Builder {
            template_name: self.template_name,
            sms_template_request: self.sms_template_request,
        }
    }
}
impl ::std::hash::Hash for CreateSmsTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_template_request, state);
    }
}
impl ::std::fmt::Display for CreateSmsTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("SMSTemplateRequest", &self.sms_template_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateSmsTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateSmsTemplateInput`](crate::input::CreateSmsTemplateInput).
pub mod create_sms_template_input {

    /// A builder for [`CreateSmsTemplateInput`](crate::input::CreateSmsTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) sms_template_request: ::std::option::Option<crate::model::SMSTemplateRequest>,
    }
    impl Builder {
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
        pub fn sms_template_request(mut self, input: crate::model::SMSTemplateRequest) -> Self {
            self.sms_template_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_template_request(mut self, input: ::std::option::Option<crate::model::SMSTemplateRequest>) -> Self {
            self.sms_template_request = input;
            self
        }
        pub fn get_sms_template_request(&self) -> &::std::option::Option<crate::model::SMSTemplateRequest> {
            &self.sms_template_request
        }
        /// Consumes the builder and constructs a [`CreateSmsTemplateInput`](crate::input::CreateSmsTemplateInput).
        pub fn build(self) -> crate::input::CreateSmsTemplateInput {
            crate::input::CreateSmsTemplateInput {
                template_name: self.template_name,
                sms_template_request: self.sms_template_request,
            }
        }
    }
}

/// <p>Retrieves the content and settings of a message template for messages that are sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSmsTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl GetSmsTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`GetSmsTemplateInput`](crate::input::GetSmsTemplateInput).
    pub fn builder() -> crate::input::get_sms_template_input::Builder {
        crate::input::get_sms_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::get_sms_template_input::Builder {
        crate::input::get_sms_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for GetSmsTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for GetSmsTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSmsTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSmsTemplateInput`](crate::input::GetSmsTemplateInput).
pub mod get_sms_template_input {

    /// A builder for [`GetSmsTemplateInput`](crate::input::GetSmsTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`GetSmsTemplateInput`](crate::input::GetSmsTemplateInput).
        pub fn build(self) -> crate::input::GetSmsTemplateInput {
            crate::input::GetSmsTemplateInput {
                template_name: self.template_name,
                version: self.version,
            }
        }
    }
}

/// <p>Updates an existing message template for messages that are sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSmsTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
    pub(crate) create_new_version: ::std::option::Option<bool>,
    pub(crate) sms_template_request: ::std::option::Option<crate::model::SMSTemplateRequest>,
}
impl UpdateSmsTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    pub fn create_new_version(&self) -> ::std::option::Option<bool> {
        self.create_new_version
    }
    pub fn sms_template_request(&self) -> ::std::option::Option<&crate::model::SMSTemplateRequest> {
        self.sms_template_request.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSmsTemplateInput`](crate::input::UpdateSmsTemplateInput).
    pub fn builder() -> crate::input::update_sms_template_input::Builder {
        crate::input::update_sms_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::update_sms_template_input::Builder {
        crate::input::update_sms_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
            create_new_version: self.create_new_version,
            sms_template_request: self.sms_template_request,
        }
    }
}
impl ::std::hash::Hash for UpdateSmsTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.create_new_version, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_template_request, state);
    }
}
impl ::std::fmt::Display for UpdateSmsTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.field("CreateNewVersion", &self.create_new_version);
        shape.field("SMSTemplateRequest", &self.sms_template_request);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSmsTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSmsTemplateInput`](crate::input::UpdateSmsTemplateInput).
pub mod update_sms_template_input {

    /// A builder for [`UpdateSmsTemplateInput`](crate::input::UpdateSmsTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
        pub(crate) create_new_version: ::std::option::Option<bool>,
        pub(crate) sms_template_request: ::std::option::Option<crate::model::SMSTemplateRequest>,
    }
    impl Builder {
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
        pub fn create_new_version(mut self, input: bool) -> Self {
            self.create_new_version = ::std::option::Option::Some(input);
            self
        }
        pub fn set_create_new_version(mut self, input: ::std::option::Option<bool>) -> Self {
            self.create_new_version = input;
            self
        }
        pub fn get_create_new_version(&self) -> &::std::option::Option<bool> {
            &self.create_new_version
        }
        pub fn sms_template_request(mut self, input: crate::model::SMSTemplateRequest) -> Self {
            self.sms_template_request = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_template_request(mut self, input: ::std::option::Option<crate::model::SMSTemplateRequest>) -> Self {
            self.sms_template_request = input;
            self
        }
        pub fn get_sms_template_request(&self) -> &::std::option::Option<crate::model::SMSTemplateRequest> {
            &self.sms_template_request
        }
        /// Consumes the builder and constructs a [`UpdateSmsTemplateInput`](crate::input::UpdateSmsTemplateInput).
        pub fn build(self) -> crate::input::UpdateSmsTemplateInput {
            crate::input::UpdateSmsTemplateInput {
                template_name: self.template_name,
                version: self.version,
                create_new_version: self.create_new_version,
                sms_template_request: self.sms_template_request,
            }
        }
    }
}

/// <p>Deletes a message template for messages that were sent through the SMS channel.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSmsTemplateInput {
    pub(crate) template_name: ::std::option::Option<::std::string::String>,
    pub(crate) version: ::std::option::Option<::std::string::String>,
}
impl DeleteSmsTemplateInput {
    pub fn template_name(&self) -> ::std::option::Option<&str> {
        self.template_name.as_deref()
    }
    pub fn version(&self) -> ::std::option::Option<&str> {
        self.version.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSmsTemplateInput`](crate::input::DeleteSmsTemplateInput).
    pub fn builder() -> crate::input::delete_sms_template_input::Builder {
        crate::input::delete_sms_template_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::delete_sms_template_input::Builder {
        crate::input::delete_sms_template_input::Builder {
            template_name: self.template_name,
            version: self.version,
        }
    }
}
impl ::std::hash::Hash for DeleteSmsTemplateInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_name, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.version, state);
    }
}
impl ::std::fmt::Display for DeleteSmsTemplateInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplateName", &self.template_name);
        shape.field("Version", &self.version);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSmsTemplateInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSmsTemplateInput`](crate::input::DeleteSmsTemplateInput).
pub mod delete_sms_template_input {

    /// A builder for [`DeleteSmsTemplateInput`](crate::input::DeleteSmsTemplateInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) template_name: ::std::option::Option<::std::string::String>,
        pub(crate) version: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`DeleteSmsTemplateInput`](crate::input::DeleteSmsTemplateInput).
        pub fn build(self) -> crate::input::DeleteSmsTemplateInput {
            crate::input::DeleteSmsTemplateInput {
                template_name: self.template_name,
                version: self.version,
            }
        }
    }
}

/// <p>Retrieves information about all the message templates that are associated with your Amazon Pinpoint account.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListTemplatesInput {
    /// <p>The string that specifies which page of results to return in a paginated response.</p>
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub(crate) page_size: ::std::option::Option<::std::string::String>,
    pub(crate) prefix: ::std::option::Option<::std::string::String>,
    pub(crate) template_type: ::std::option::Option<::std::string::String>,
}
impl ListTemplatesInput {
    /// <p>The string that specifies which page of results to return in a paginated response.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The maximum number of items to include in each page of a paginated response.</p>
    pub fn page_size(&self) -> ::std::option::Option<&str> {
        self.page_size.as_deref()
    }
    pub fn prefix(&self) -> ::std::option::Option<&str> {
        self.prefix.as_deref()
    }
    pub fn template_type(&self) -> ::std::option::Option<&str> {
        self.template_type.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ListTemplatesInput`](crate::input::ListTemplatesInput).
    pub fn builder() -> crate::input::list_templates_input::Builder {
        crate::input::list_templates_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::list_templates_input::Builder {
        crate::input::list_templates_input::Builder {
            next_token: self.next_token,
            page_size: self.page_size,
            prefix: self.prefix,
            template_type: self.template_type,
        }
    }
}
impl ::std::hash::Hash for ListTemplatesInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.next_token, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.page_size, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.prefix, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.template_type, state);
    }
}
impl ::std::fmt::Display for ListTemplatesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("NextToken", &self.next_token);
        shape.field("PageSize", &self.page_size);
        shape.field("Prefix", &self.prefix);
        shape.field("TemplateType", &self.template_type);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListTemplatesInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListTemplatesInput`](crate::input::ListTemplatesInput).
pub mod list_templates_input {

    /// A builder for [`ListTemplatesInput`](crate::input::ListTemplatesInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_token: ::std::option::Option<::std::string::String>,
        pub(crate) page_size: ::std::option::Option<::std::string::String>,
        pub(crate) prefix: ::std::option::Option<::std::string::String>,
        pub(crate) template_type: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        /// <p>The string that specifies which page of results to return in a paginated response.</p>
        pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.next_token = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The string that specifies which page of results to return in a paginated response.</p>
        pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The string that specifies which page of results to return in a paginated response.</p>
        pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
            &self.next_token
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn page_size(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.page_size = ::std::option::Option::Some(input.into());
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn set_page_size(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        /// <p>The maximum number of items to include in each page of a paginated response.</p>
        pub fn get_page_size(&self) -> &::std::option::Option<::std::string::String> {
            &self.page_size
        }
        pub fn prefix(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.prefix = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_prefix(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.prefix = input;
            self
        }
        pub fn get_prefix(&self) -> &::std::option::Option<::std::string::String> {
            &self.prefix
        }
        pub fn template_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.template_type = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_template_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.template_type = input;
            self
        }
        pub fn get_template_type(&self) -> &::std::option::Option<::std::string::String> {
            &self.template_type
        }
        /// Consumes the builder and constructs a [`ListTemplatesInput`](crate::input::ListTemplatesInput).
        pub fn build(self) -> crate::input::ListTemplatesInput {
            crate::input::ListTemplatesInput {
                next_token: self.next_token,
                page_size: self.page_size,
                prefix: self.prefix,
                template_type: self.template_type,
            }
        }
    }
}

/// <p>Retrieves all the tags (keys and values) that are associated with an application, campaign, message template, or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListTagsForResourceInput {
    pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
}
impl ListTagsForResourceInput {
    pub fn resource_arn(&self) -> ::std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder {
            resource_arn: self.resource_arn,
        }
    }
}
impl ::std::hash::Hash for ListTagsForResourceInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.resource_arn, state);
    }
}
impl ::std::fmt::Display for ListTagsForResourceInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ResourceArn", &self.resource_arn);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListTagsForResourceInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
pub mod list_tags_for_resource_input {

    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.resource_arn = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn get_resource_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.resource_arn
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
        pub fn build(self) -> crate::input::ListTagsForResourceInput {
            crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            }
        }
    }
}

/// <p>Adds one or more tags (keys and values) to an application, campaign, message template, or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct TagResourceInput {
    pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
    pub(crate) tags_model: ::std::option::Option<crate::model::TagsModel>,
}
impl TagResourceInput {
    pub fn resource_arn(&self) -> ::std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
    pub fn tags_model(&self) -> ::std::option::Option<&crate::model::TagsModel> {
        self.tags_model.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput).
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder {
            resource_arn: self.resource_arn,
            tags_model: self.tags_model,
        }
    }
}
impl ::std::hash::Hash for TagResourceInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.resource_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags_model, state);
    }
}
impl ::std::fmt::Display for TagResourceInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ResourceArn", &self.resource_arn);
        shape.field("TagsModel", &self.tags_model);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TagResourceInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TagResourceInput`](crate::input::TagResourceInput).
pub mod tag_resource_input {

    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
        pub(crate) tags_model: ::std::option::Option<crate::model::TagsModel>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.resource_arn = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn get_resource_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.resource_arn
        }
        pub fn tags_model(mut self, input: crate::model::TagsModel) -> Self {
            self.tags_model = ::std::option::Option::Some(input);
            self
        }
        pub fn set_tags_model(mut self, input: ::std::option::Option<crate::model::TagsModel>) -> Self {
            self.tags_model = input;
            self
        }
        pub fn get_tags_model(&self) -> &::std::option::Option<crate::model::TagsModel> {
            &self.tags_model
        }
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput).
        pub fn build(self) -> crate::input::TagResourceInput {
            crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags_model: self.tags_model,
            }
        }
    }
}

/// <p>Removes one or more tags (keys and values) from an application, campaign, message template, or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UntagResourceInput {
    pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
    /// <p>The key of the tag to remove from the resource.</p>
    pub(crate) tag_keys: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl UntagResourceInput {
    pub fn resource_arn(&self) -> ::std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
    /// <p>The key of the tag to remove from the resource.</p>
    pub fn tag_keys(&self) -> ::std::option::Option<&[::std::string::String]> {
        self.tag_keys.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput).
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder {
            resource_arn: self.resource_arn,
            tag_keys: self.tag_keys,
        }
    }
}
impl ::std::hash::Hash for UntagResourceInput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.resource_arn, state);
        ::smithy_types::shape::ShapeValue::hash_value(&self.tag_keys, state);
    }
}
impl ::std::fmt::Display for UntagResourceInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ResourceArn", &self.resource_arn);
        shape.field("TagKeys", &self.tag_keys);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UntagResourceInput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UntagResourceInput`](crate::input::UntagResourceInput).
pub mod untag_resource_input {

    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: ::std::option::Option<::std::string::String>,
        pub(crate) tag_keys: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.resource_arn = ::std::option::Option::Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn get_resource_arn(&self) -> &::std::option::Option<::std::string::String> {
            &self.resource_arn
        }
        /// Appends an item to `tag_keys`.
        ///
        /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
        ///
        /// <p>The key of the tag to remove from the resource.</p>
        pub fn tag_keys(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = ::std::option::Option::Some(v);
            self
        }
        /// <p>The key of the tag to remove from the resource.</p>
        pub fn set_tag_keys(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// <p>The key of the tag to remove from the resource.</p>
        pub fn get_tag_keys(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
            &self.tag_keys
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput).
        pub fn build(self) -> crate::input::UntagResourceInput {
            crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            }
        }
    }
}
