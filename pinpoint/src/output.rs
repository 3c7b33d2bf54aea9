// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateAppOutput {
    pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
}
impl CreateAppOutput {
    pub fn application_response(&self) -> ::std::option::Option<&crate::model::ApplicationResponse> {
        self.application_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateAppOutput`](crate::output::CreateAppOutput).
    pub fn builder() -> crate::output::create_app_output::Builder {
        crate::output::create_app_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_app_output::Builder {
        crate::output::create_app_output::Builder {
            application_response: self.application_response,
        }
    }
}
impl ::std::hash::Hash for CreateAppOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_response, state);
    }
}
impl ::std::fmt::Display for CreateAppOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationResponse", &self.application_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateAppOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateAppOutput`](crate::output::CreateAppOutput).
pub mod create_app_output {

    /// A builder for [`CreateAppOutput`](crate::output::CreateAppOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
    }
    impl Builder {
        pub fn application_response(mut self, input: crate::model::ApplicationResponse) -> Self {
            self.application_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_application_response(mut self, input: ::std::option::Option<crate::model::ApplicationResponse>) -> Self {
            self.application_response = input;
            self
        }
        pub fn get_application_response(&self) -> &::std::option::Option<crate::model::ApplicationResponse> {
            &self.application_response
        }
        /// Consumes the builder and constructs a [`CreateAppOutput`](crate::output::CreateAppOutput).
        pub fn build(self) -> crate::output::CreateAppOutput {
            crate::output::CreateAppOutput {
                application_response: self.application_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteAppOutput {
    pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
}
impl DeleteAppOutput {
    pub fn application_response(&self) -> ::std::option::Option<&crate::model::ApplicationResponse> {
        self.application_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteAppOutput`](crate::output::DeleteAppOutput).
    pub fn builder() -> crate::output::delete_app_output::Builder {
        crate::output::delete_app_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_app_output::Builder {
        crate::output::delete_app_output::Builder {
            application_response: self.application_response,
        }
    }
}
impl ::std::hash::Hash for DeleteAppOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_response, state);
    }
}
impl ::std::fmt::Display for DeleteAppOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationResponse", &self.application_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteAppOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteAppOutput`](crate::output::DeleteAppOutput).
pub mod delete_app_output {

    /// A builder for [`DeleteAppOutput`](crate::output::DeleteAppOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
    }
    impl Builder {
        pub fn application_response(mut self, input: crate::model::ApplicationResponse) -> Self {
            self.application_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_application_response(mut self, input: ::std::option::Option<crate::model::ApplicationResponse>) -> Self {
            self.application_response = input;
            self
        }
        pub fn get_application_response(&self) -> &::std::option::Option<crate::model::ApplicationResponse> {
            &self.application_response
        }
        /// Consumes the builder and constructs a [`DeleteAppOutput`](crate::output::DeleteAppOutput).
        pub fn build(self) -> crate::output::DeleteAppOutput {
            crate::output::DeleteAppOutput {
                application_response: self.application_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetAppOutput {
    pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
}
impl GetAppOutput {
    pub fn application_response(&self) -> ::std::option::Option<&crate::model::ApplicationResponse> {
        self.application_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetAppOutput`](crate::output::GetAppOutput).
    pub fn builder() -> crate::output::get_app_output::Builder {
        crate::output::get_app_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_app_output::Builder {
        crate::output::get_app_output::Builder {
            application_response: self.application_response,
        }
    }
}
impl ::std::hash::Hash for GetAppOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_response, state);
    }
}
impl ::std::fmt::Display for GetAppOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationResponse", &self.application_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetAppOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetAppOutput`](crate::output::GetAppOutput).
pub mod get_app_output {

    /// A builder for [`GetAppOutput`](crate::output::GetAppOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_response: ::std::option::Option<crate::model::ApplicationResponse>,
    }
    impl Builder {
        pub fn application_response(mut self, input: crate::model::ApplicationResponse) -> Self {
            self.application_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_application_response(mut self, input: ::std::option::Option<crate::model::ApplicationResponse>) -> Self {
            self.application_response = input;
            self
        }
        pub fn get_application_response(&self) -> &::std::option::Option<crate::model::ApplicationResponse> {
            &self.application_response
        }
        /// Consumes the builder and constructs a [`GetAppOutput`](crate::output::GetAppOutput).
        pub fn build(self) -> crate::output::GetAppOutput {
            crate::output::GetAppOutput {
                application_response: self.application_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetAppsOutput {
    pub(crate) applications_response: ::std::option::Option<crate::model::ApplicationsResponse>,
}
impl GetAppsOutput {
    pub fn applications_response(&self) -> ::std::option::Option<&crate::model::ApplicationsResponse> {
        self.applications_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetAppsOutput`](crate::output::GetAppsOutput).
    pub fn builder() -> crate::output::get_apps_output::Builder {
        crate::output::get_apps_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_apps_output::Builder {
        crate::output::get_apps_output::Builder {
            applications_response: self.applications_response,
        }
    }
}
impl ::std::hash::Hash for GetAppsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.applications_response, state);
    }
}
impl ::std::fmt::Display for GetAppsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationsResponse", &self.applications_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetAppsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetAppsOutput`](crate::output::GetAppsOutput).
pub mod get_apps_output {

    /// A builder for [`GetAppsOutput`](crate::output::GetAppsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) applications_response: ::std::option::Option<crate::model::ApplicationsResponse>,
    }
    impl Builder {
        pub fn applications_response(mut self, input: crate::model::ApplicationsResponse) -> Self {
            self.applications_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_applications_response(mut self, input: ::std::option::Option<crate::model::ApplicationsResponse>) -> Self {
            self.applications_response = input;
            self
        }
        pub fn get_applications_response(&self) -> &::std::option::Option<crate::model::ApplicationsResponse> {
            &self.applications_response
        }
        /// Consumes the builder and constructs a [`GetAppsOutput`](crate::output::GetAppsOutput).
        pub fn build(self) -> crate::output::GetAppsOutput {
            crate::output::GetAppsOutput {
                applications_response: self.applications_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetApplicationSettingsOutput {
    pub(crate) application_settings_resource: ::std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl GetApplicationSettingsOutput {
    pub fn application_settings_resource(&self) -> ::std::option::Option<&crate::model::ApplicationSettingsResource> {
        self.application_settings_resource.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput).
    pub fn builder() -> crate::output::get_application_settings_output::Builder {
        crate::output::get_application_settings_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_application_settings_output::Builder {
        crate::output::get_application_settings_output::Builder {
            application_settings_resource: self.application_settings_resource,
        }
    }
}
impl ::std::hash::Hash for GetApplicationSettingsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_settings_resource, state);
    }
}
impl ::std::fmt::Display for GetApplicationSettingsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationSettingsResource", &self.application_settings_resource);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetApplicationSettingsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput).
pub mod get_application_settings_output {

    /// A builder for [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: ::std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = ::std::option::Option::Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: ::std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        pub fn get_application_settings_resource(&self) -> &::std::option::Option<crate::model::ApplicationSettingsResource> {
            &self.application_settings_resource
        }
        /// Consumes the builder and constructs a [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput).
        pub fn build(self) -> crate::output::GetApplicationSettingsOutput {
            crate::output::GetApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateApplicationSettingsOutput {
    pub(crate) application_settings_resource: ::std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl UpdateApplicationSettingsOutput {
    pub fn application_settings_resource(&self) -> ::std::option::Option<&crate::model::ApplicationSettingsResource> {
        self.application_settings_resource.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput).
    pub fn builder() -> crate::output::update_application_settings_output::Builder {
        crate::output::update_application_settings_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_application_settings_output::Builder {
        crate::output::update_application_settings_output::Builder {
            application_settings_resource: self.application_settings_resource,
        }
    }
}
impl ::std::hash::Hash for UpdateApplicationSettingsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.application_settings_resource, state);
    }
}
impl ::std::fmt::Display for UpdateApplicationSettingsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ApplicationSettingsResource", &self.application_settings_resource);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateApplicationSettingsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput).
pub mod update_application_settings_output {

    /// A builder for [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: ::std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = ::std::option::Option::Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: ::std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        pub fn get_application_settings_resource(&self) -> &::std::option::Option<crate::model::ApplicationSettingsResource> {
            &self.application_settings_resource
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput).
        pub fn build(self) -> crate::output::UpdateApplicationSettingsOutput {
            crate::output::UpdateApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateCampaignOutput {
    pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
}
impl CreateCampaignOutput {
    pub fn campaign_response(&self) -> ::std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateCampaignOutput`](crate::output::CreateCampaignOutput).
    pub fn builder() -> crate::output::create_campaign_output::Builder {
        crate::output::create_campaign_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_campaign_output::Builder {
        crate::output::create_campaign_output::Builder {
            campaign_response: self.campaign_response,
        }
    }
}
impl ::std::hash::Hash for CreateCampaignOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_response, state);
    }
}
impl ::std::fmt::Display for CreateCampaignOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignResponse", &self.campaign_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateCampaignOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateCampaignOutput`](crate::output::CreateCampaignOutput).
pub mod create_campaign_output {

    /// A builder for [`CreateCampaignOutput`](crate::output::CreateCampaignOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: ::std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        pub fn get_campaign_response(&self) -> &::std::option::Option<crate::model::CampaignResponse> {
            &self.campaign_response
        }
        /// Consumes the builder and constructs a [`CreateCampaignOutput`](crate::output::CreateCampaignOutput).
        pub fn build(self) -> crate::output::CreateCampaignOutput {
            crate::output::CreateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteCampaignOutput {
    pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
}
impl DeleteCampaignOutput {
    pub fn campaign_response(&self) -> ::std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput).
    pub fn builder() -> crate::output::delete_campaign_output::Builder {
        crate::output::delete_campaign_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_campaign_output::Builder {
        crate::output::delete_campaign_output::Builder {
            campaign_response: self.campaign_response,
        }
    }
}
impl ::std::hash::Hash for DeleteCampaignOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_response, state);
    }
}
impl ::std::fmt::Display for DeleteCampaignOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignResponse", &self.campaign_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteCampaignOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput).
pub mod delete_campaign_output {

    /// A builder for [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: ::std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        pub fn get_campaign_response(&self) -> &::std::option::Option<crate::model::CampaignResponse> {
            &self.campaign_response
        }
        /// Consumes the builder and constructs a [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput).
        pub fn build(self) -> crate::output::DeleteCampaignOutput {
            crate::output::DeleteCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignOutput {
    pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
}
impl GetCampaignOutput {
    pub fn campaign_response(&self) -> ::std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignOutput`](crate::output::GetCampaignOutput).
    pub fn builder() -> crate::output::get_campaign_output::Builder {
        crate::output::get_campaign_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_campaign_output::Builder {
        crate::output::get_campaign_output::Builder {
            campaign_response: self.campaign_response,
        }
    }
}
impl ::std::hash::Hash for GetCampaignOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_response, state);
    }
}
impl ::std::fmt::Display for GetCampaignOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignResponse", &self.campaign_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignOutput`](crate::output::GetCampaignOutput).
pub mod get_campaign_output {

    /// A builder for [`GetCampaignOutput`](crate::output::GetCampaignOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: ::std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        pub fn get_campaign_response(&self) -> &::std::option::Option<crate::model::CampaignResponse> {
            &self.campaign_response
        }
        /// Consumes the builder and constructs a [`GetCampaignOutput`](crate::output::GetCampaignOutput).
        pub fn build(self) -> crate::output::GetCampaignOutput {
            crate::output::GetCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignsOutput {
    pub(crate) campaigns_response: ::std::option::Option<crate::model::CampaignsResponse>,
}
impl GetCampaignsOutput {
    pub fn campaigns_response(&self) -> ::std::option::Option<&crate::model::CampaignsResponse> {
        self.campaigns_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignsOutput`](crate::output::GetCampaignsOutput).
    pub fn builder() -> crate::output::get_campaigns_output::Builder {
        crate::output::get_campaigns_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_campaigns_output::Builder {
        crate::output::get_campaigns_output::Builder {
            campaigns_response: self.campaigns_response,
        }
    }
}
impl ::std::hash::Hash for GetCampaignsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaigns_response, state);
    }
}
impl ::std::fmt::Display for GetCampaignsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignsResponse", &self.campaigns_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignsOutput`](crate::output::GetCampaignsOutput).
pub mod get_campaigns_output {

    /// A builder for [`GetCampaignsOutput`](crate::output::GetCampaignsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: ::std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: ::std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        pub fn get_campaigns_response(&self) -> &::std::option::Option<crate::model::CampaignsResponse> {
            &self.campaigns_response
        }
        /// Consumes the builder and constructs a [`GetCampaignsOutput`](crate::output::GetCampaignsOutput).
        pub fn build(self) -> crate::output::GetCampaignsOutput {
            crate::output::GetCampaignsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateCampaignOutput {
    pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
}
impl UpdateCampaignOutput {
    pub fn campaign_response(&self) -> ::std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput).
    pub fn builder() -> crate::output::update_campaign_output::Builder {
        crate::output::update_campaign_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_campaign_output::Builder {
        crate::output::update_campaign_output::Builder {
            campaign_response: self.campaign_response,
        }
    }
}
impl ::std::hash::Hash for UpdateCampaignOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_response, state);
    }
}
impl ::std::fmt::Display for UpdateCampaignOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignResponse", &self.campaign_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateCampaignOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput).
pub mod update_campaign_output {

    /// A builder for [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: ::std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        pub fn get_campaign_response(&self) -> &::std::option::Option<crate::model::CampaignResponse> {
            &self.campaign_response
        }
        /// Consumes the builder and constructs a [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput).
        pub fn build(self) -> crate::output::UpdateCampaignOutput {
            crate::output::UpdateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignActivitiesOutput {
    pub(crate) activities_response: ::std::option::Option<crate::model::ActivitiesResponse>,
}
impl GetCampaignActivitiesOutput {
    pub fn activities_response(&self) -> ::std::option::Option<&crate::model::ActivitiesResponse> {
        self.activities_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput).
    pub fn builder() -> crate::output::get_campaign_activities_output::Builder {
        crate::output::get_campaign_activities_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_campaign_activities_output::Builder {
        crate::output::get_campaign_activities_output::Builder {
            activities_response: self.activities_response,
        }
    }
}
impl ::std::hash::Hash for GetCampaignActivitiesOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.activities_response, state);
    }
}
impl ::std::fmt::Display for GetCampaignActivitiesOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ActivitiesResponse", &self.activities_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignActivitiesOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput).
pub mod get_campaign_activities_output {

    /// A builder for [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities_response: ::std::option::Option<crate::model::ActivitiesResponse>,
    }
    impl Builder {
        pub fn activities_response(mut self, input: crate::model::ActivitiesResponse) -> Self {
            self.activities_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_activities_response(mut self, input: ::std::option::Option<crate::model::ActivitiesResponse>) -> Self {
            self.activities_response = input;
            self
        }
        pub fn get_activities_response(&self) -> &::std::option::Option<crate::model::ActivitiesResponse> {
            &self.activities_response
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput).
        pub fn build(self) -> crate::output::GetCampaignActivitiesOutput {
            crate::output::GetCampaignActivitiesOutput {
                activities_response: self.activities_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignVersionOutput {
    pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
}
impl GetCampaignVersionOutput {
    pub fn campaign_response(&self) -> ::std::option::Option<&crate::model::CampaignResponse> {
        self.campaign_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput).
    pub fn builder() -> crate::output::get_campaign_version_output::Builder {
        crate::output::get_campaign_version_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_campaign_version_output::Builder {
        crate::output::get_campaign_version_output::Builder {
            campaign_response: self.campaign_response,
        }
    }
}
impl ::std::hash::Hash for GetCampaignVersionOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaign_response, state);
    }
}
impl ::std::fmt::Display for GetCampaignVersionOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignResponse", &self.campaign_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignVersionOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput).
pub mod get_campaign_version_output {

    /// A builder for [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: ::std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: ::std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        pub fn get_campaign_response(&self) -> &::std::option::Option<crate::model::CampaignResponse> {
            &self.campaign_response
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput).
        pub fn build(self) -> crate::output::GetCampaignVersionOutput {
            crate::output::GetCampaignVersionOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetCampaignVersionsOutput {
    pub(crate) campaigns_response: ::std::option::Option<crate::model::CampaignsResponse>,
}
impl GetCampaignVersionsOutput {
    pub fn campaigns_response(&self) -> ::std::option::Option<&crate::model::CampaignsResponse> {
        self.campaigns_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput).
    pub fn builder() -> crate::output::get_campaign_versions_output::Builder {
        crate::output::get_campaign_versions_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_campaign_versions_output::Builder {
        crate::output::get_campaign_versions_output::Builder {
            campaigns_response: self.campaigns_response,
        }
    }
}
impl ::std::hash::Hash for GetCampaignVersionsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.campaigns_response, state);
    }
}
impl ::std::fmt::Display for GetCampaignVersionsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CampaignsResponse", &self.campaigns_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetCampaignVersionsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput).
pub mod get_campaign_versions_output {

    /// A builder for [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: ::std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: ::std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        pub fn get_campaigns_response(&self) -> &::std::option::Option<crate::model::CampaignsResponse> {
            &self.campaigns_response
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput).
        pub fn build(self) -> crate::output::GetCampaignVersionsOutput {
            crate::output::GetCampaignVersionsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSegmentOutput {
    pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
}
impl CreateSegmentOutput {
    pub fn segment_response(&self) -> ::std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateSegmentOutput`](crate::output::CreateSegmentOutput).
    pub fn builder() -> crate::output::create_segment_output::Builder {
        crate::output::create_segment_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_segment_output::Builder {
        crate::output::create_segment_output::Builder {
            segment_response: self.segment_response,
        }
    }
}
impl ::std::hash::Hash for CreateSegmentOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_response, state);
    }
}
impl ::std::fmt::Display for CreateSegmentOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentResponse", &self.segment_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateSegmentOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateSegmentOutput`](crate::output::CreateSegmentOutput).
pub mod create_segment_output {

    /// A builder for [`CreateSegmentOutput`](crate::output::CreateSegmentOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: ::std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        pub fn get_segment_response(&self) -> &::std::option::Option<crate::model::SegmentResponse> {
            &self.segment_response
        }
        /// Consumes the builder and constructs a [`CreateSegmentOutput`](crate::output::CreateSegmentOutput).
        pub fn build(self) -> crate::output::CreateSegmentOutput {
            crate::output::CreateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSegmentOutput {
    pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
}
impl DeleteSegmentOutput {
    pub fn segment_response(&self) -> ::std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput).
    pub fn builder() -> crate::output::delete_segment_output::Builder {
        crate::output::delete_segment_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_segment_output::Builder {
        crate::output::delete_segment_output::Builder {
            segment_response: self.segment_response,
        }
    }
}
impl ::std::hash::Hash for DeleteSegmentOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_response, state);
    }
}
impl ::std::fmt::Display for DeleteSegmentOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentResponse", &self.segment_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSegmentOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput).
pub mod delete_segment_output {

    /// A builder for [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: ::std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        pub fn get_segment_response(&self) -> &::std::option::Option<crate::model::SegmentResponse> {
            &self.segment_response
        }
        /// Consumes the builder and constructs a [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput).
        pub fn build(self) -> crate::output::DeleteSegmentOutput {
            crate::output::DeleteSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentOutput {
    pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
}
impl GetSegmentOutput {
    pub fn segment_response(&self) -> ::std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentOutput`](crate::output::GetSegmentOutput).
    pub fn builder() -> crate::output::get_segment_output::Builder {
        crate::output::get_segment_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segment_output::Builder {
        crate::output::get_segment_output::Builder {
            segment_response: self.segment_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentResponse", &self.segment_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentOutput`](crate::output::GetSegmentOutput).
pub mod get_segment_output {

    /// A builder for [`GetSegmentOutput`](crate::output::GetSegmentOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: ::std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        pub fn get_segment_response(&self) -> &::std::option::Option<crate::model::SegmentResponse> {
            &self.segment_response
        }
        /// Consumes the builder and constructs a [`GetSegmentOutput`](crate::output::GetSegmentOutput).
        pub fn build(self) -> crate::output::GetSegmentOutput {
            crate::output::GetSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentsOutput {
    pub(crate) segments_response: ::std::option::Option<crate::model::SegmentsResponse>,
}
impl GetSegmentsOutput {
    pub fn segments_response(&self) -> ::std::option::Option<&crate::model::SegmentsResponse> {
        self.segments_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentsOutput`](crate::output::GetSegmentsOutput).
    pub fn builder() -> crate::output::get_segments_output::Builder {
        crate::output::get_segments_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segments_output::Builder {
        crate::output::get_segments_output::Builder {
            segments_response: self.segments_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segments_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentsResponse", &self.segments_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentsOutput`](crate::output::GetSegmentsOutput).
pub mod get_segments_output {

    /// A builder for [`GetSegmentsOutput`](crate::output::GetSegmentsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: ::std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: ::std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        pub fn get_segments_response(&self) -> &::std::option::Option<crate::model::SegmentsResponse> {
            &self.segments_response
        }
        /// Consumes the builder and constructs a [`GetSegmentsOutput`](crate::output::GetSegmentsOutput).
        pub fn build(self) -> crate::output::GetSegmentsOutput {
            crate::output::GetSegmentsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSegmentOutput {
    pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
}
impl UpdateSegmentOutput {
    pub fn segment_response(&self) -> ::std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput).
    pub fn builder() -> crate::output::update_segment_output::Builder {
        crate::output::update_segment_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_segment_output::Builder {
        crate::output::update_segment_output::Builder {
            segment_response: self.segment_response,
        }
    }
}
impl ::std::hash::Hash for UpdateSegmentOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_response, state);
    }
}
impl ::std::fmt::Display for UpdateSegmentOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentResponse", &self.segment_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSegmentOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput).
pub mod update_segment_output {

    /// A builder for [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: ::std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        pub fn get_segment_response(&self) -> &::std::option::Option<crate::model::SegmentResponse> {
            &self.segment_response
        }
        /// Consumes the builder and constructs a [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput).
        pub fn build(self) -> crate::output::UpdateSegmentOutput {
            crate::output::UpdateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentVersionOutput {
    pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
}
impl GetSegmentVersionOutput {
    pub fn segment_response(&self) -> ::std::option::Option<&crate::model::SegmentResponse> {
        self.segment_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput).
    pub fn builder() -> crate::output::get_segment_version_output::Builder {
        crate::output::get_segment_version_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segment_version_output::Builder {
        crate::output::get_segment_version_output::Builder {
            segment_response: self.segment_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentVersionOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segment_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentVersionOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentResponse", &self.segment_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentVersionOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput).
pub mod get_segment_version_output {

    /// A builder for [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: ::std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: ::std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        pub fn get_segment_response(&self) -> &::std::option::Option<crate::model::SegmentResponse> {
            &self.segment_response
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput).
        pub fn build(self) -> crate::output::GetSegmentVersionOutput {
            crate::output::GetSegmentVersionOutput {
                segment_response: self.segment_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentVersionsOutput {
    pub(crate) segments_response: ::std::option::Option<crate::model::SegmentsResponse>,
}
impl GetSegmentVersionsOutput {
    pub fn segments_response(&self) -> ::std::option::Option<&crate::model::SegmentsResponse> {
        self.segments_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput).
    pub fn builder() -> crate::output::get_segment_versions_output::Builder {
        crate::output::get_segment_versions_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segment_versions_output::Builder {
        crate::output::get_segment_versions_output::Builder {
            segments_response: self.segments_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentVersionsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.segments_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentVersionsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SegmentsResponse", &self.segments_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentVersionsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput).
pub mod get_segment_versions_output {

    /// A builder for [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: ::std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: ::std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        pub fn get_segments_response(&self) -> &::std::option::Option<crate::model::SegmentsResponse> {
            &self.segments_response
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput).
        pub fn build(self) -> crate::output::GetSegmentVersionsOutput {
            crate::output::GetSegmentVersionsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentImportJobsOutput {
    pub(crate) import_jobs_response: ::std::option::Option<crate::model::ImportJobsResponse>,
}
impl GetSegmentImportJobsOutput {
    pub fn import_jobs_response(&self) -> ::std::option::Option<&crate::model::ImportJobsResponse> {
        self.import_jobs_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput).
    pub fn builder() -> crate::output::get_segment_import_jobs_output::Builder {
        crate::output::get_segment_import_jobs_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segment_import_jobs_output::Builder {
        crate::output::get_segment_import_jobs_output::Builder {
            import_jobs_response: self.import_jobs_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentImportJobsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_jobs_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentImportJobsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ImportJobsResponse", &self.import_jobs_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentImportJobsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput).
pub mod get_segment_import_jobs_output {

    /// A builder for [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: ::std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: ::std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        pub fn get_import_jobs_response(&self) -> &::std::option::Option<crate::model::ImportJobsResponse> {
            &self.import_jobs_response
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput).
        pub fn build(self) -> crate::output::GetSegmentImportJobsOutput {
            crate::output::GetSegmentImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSegmentExportJobsOutput {
    pub(crate) export_jobs_response: ::std::option::Option<crate::model::ExportJobsResponse>,
}
impl GetSegmentExportJobsOutput {
    pub fn export_jobs_response(&self) -> ::std::option::Option<&crate::model::ExportJobsResponse> {
        self.export_jobs_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentExportJobsOutput`](crate::output::GetSegmentExportJobsOutput).
    pub fn builder() -> crate::output::get_segment_export_jobs_output::Builder {
        crate::output::get_segment_export_jobs_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_segment_export_jobs_output::Builder {
        crate::output::get_segment_export_jobs_output::Builder {
            export_jobs_response: self.export_jobs_response,
        }
    }
}
impl ::std::hash::Hash for GetSegmentExportJobsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.export_jobs_response, state);
    }
}
impl ::std::fmt::Display for GetSegmentExportJobsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ExportJobsResponse", &self.export_jobs_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSegmentExportJobsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSegmentExportJobsOutput`](crate::output::GetSegmentExportJobsOutput).
pub mod get_segment_export_jobs_output {

    /// A builder for [`GetSegmentExportJobsOutput`](crate::output::GetSegmentExportJobsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) export_jobs_response: ::std::option::Option<crate::model::ExportJobsResponse>,
    }
    impl Builder {
        pub fn export_jobs_response(mut self, input: crate::model::ExportJobsResponse) -> Self {
            self.export_jobs_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_export_jobs_response(mut self, input: ::std::option::Option<crate::model::ExportJobsResponse>) -> Self {
            self.export_jobs_response = input;
            self
        }
        pub fn get_export_jobs_response(&self) -> &::std::option::Option<crate::model::ExportJobsResponse> {
            &self.export_jobs_response
        }
        /// Consumes the builder and constructs a [`GetSegmentExportJobsOutput`](crate::output::GetSegmentExportJobsOutput).
        pub fn build(self) -> crate::output::GetSegmentExportJobsOutput {
            crate::output::GetSegmentExportJobsOutput {
                export_jobs_response: self.export_jobs_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateImportJobOutput {
    pub(crate) import_job_response: ::std::option::Option<crate::model::ImportJobResponse>,
}
impl CreateImportJobOutput {
    pub fn import_job_response(&self) -> ::std::option::Option<&crate::model::ImportJobResponse> {
        self.import_job_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateImportJobOutput`](crate::output::CreateImportJobOutput).
    pub fn builder() -> crate::output::create_import_job_output::Builder {
        crate::output::create_import_job_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_import_job_output::Builder {
        crate::output::create_import_job_output::Builder {
            import_job_response: self.import_job_response,
        }
    }
}
impl ::std::hash::Hash for CreateImportJobOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_job_response, state);
    }
}
impl ::std::fmt::Display for CreateImportJobOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ImportJobResponse", &self.import_job_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateImportJobOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateImportJobOutput`](crate::output::CreateImportJobOutput).
pub mod create_import_job_output {

    /// A builder for [`CreateImportJobOutput`](crate::output::CreateImportJobOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: ::std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: ::std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        pub fn get_import_job_response(&self) -> &::std::option::Option<crate::model::ImportJobResponse> {
            &self.import_job_response
        }
        /// Consumes the builder and constructs a [`CreateImportJobOutput`](crate::output::CreateImportJobOutput).
        pub fn build(self) -> crate::output::CreateImportJobOutput {
            crate::output::CreateImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetImportJobOutput {
    pub(crate) import_job_response: ::std::option::Option<crate::model::ImportJobResponse>,
}
impl GetImportJobOutput {
    pub fn import_job_response(&self) -> ::std::option::Option<&crate::model::ImportJobResponse> {
        self.import_job_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobOutput`](crate::output::GetImportJobOutput).
    pub fn builder() -> crate::output::get_import_job_output::Builder {
        crate::output::get_import_job_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_import_job_output::Builder {
        crate::output::get_import_job_output::Builder {
            import_job_response: self.import_job_response,
        }
    }
}
impl ::std::hash::Hash for GetImportJobOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_job_response, state);
    }
}
impl ::std::fmt::Display for GetImportJobOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ImportJobResponse", &self.import_job_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetImportJobOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetImportJobOutput`](crate::output::GetImportJobOutput).
pub mod get_import_job_output {

    /// A builder for [`GetImportJobOutput`](crate::output::GetImportJobOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: ::std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: ::std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        pub fn get_import_job_response(&self) -> &::std::option::Option<crate::model::ImportJobResponse> {
            &self.import_job_response
        }
        /// Consumes the builder and constructs a [`GetImportJobOutput`](crate::output::GetImportJobOutput).
        pub fn build(self) -> crate::output::GetImportJobOutput {
            crate::output::GetImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetImportJobsOutput {
    pub(crate) import_jobs_response: ::std::option::Option<crate::model::ImportJobsResponse>,
}
impl GetImportJobsOutput {
    pub fn import_jobs_response(&self) -> ::std::option::Option<&crate::model::ImportJobsResponse> {
        self.import_jobs_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobsOutput`](crate::output::GetImportJobsOutput).
    pub fn builder() -> crate::output::get_import_jobs_output::Builder {
        crate::output::get_import_jobs_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_import_jobs_output::Builder {
        crate::output::get_import_jobs_output::Builder {
            import_jobs_response: self.import_jobs_response,
        }
    }
}
impl ::std::hash::Hash for GetImportJobsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.import_jobs_response, state);
    }
}
impl ::std::fmt::Display for GetImportJobsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ImportJobsResponse", &self.import_jobs_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetImportJobsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetImportJobsOutput`](crate::output::GetImportJobsOutput).
pub mod get_import_jobs_output {

    /// A builder for [`GetImportJobsOutput`](crate::output::GetImportJobsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: ::std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: ::std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        pub fn get_import_jobs_response(&self) -> &::std::option::Option<crate::model::ImportJobsResponse> {
            &self.import_jobs_response
        }
        /// Consumes the builder and constructs a [`GetImportJobsOutput`](crate::output::GetImportJobsOutput).
        pub fn build(self) -> crate::output::GetImportJobsOutput {
            crate::output::GetImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateExportJobOutput {
    pub(crate) export_job_response: ::std::option::Option<crate::model::ExportJobResponse>,
}
impl CreateExportJobOutput {
    pub fn export_job_response(&self) -> ::std::option::Option<&crate::model::ExportJobResponse> {
        self.export_job_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateExportJobOutput`](crate::output::CreateExportJobOutput).
    pub fn builder() -> crate::output::create_export_job_output::Builder {
        crate::output::create_export_job_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_export_job_output::Builder {
        crate::output::create_export_job_output::Builder {
            export_job_response: self.export_job_response,
        }
    }
}
impl ::std::hash::Hash for CreateExportJobOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.export_job_response, state);
    }
}
impl ::std::fmt::Display for CreateExportJobOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ExportJobResponse", &self.export_job_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateExportJobOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateExportJobOutput`](crate::output::CreateExportJobOutput).
pub mod create_export_job_output {

    /// A builder for [`CreateExportJobOutput`](crate::output::CreateExportJobOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) export_job_response: ::std::option::Option<crate::model::ExportJobResponse>,
    }
    impl Builder {
        pub fn export_job_response(mut self, input: crate::model::ExportJobResponse) -> Self {
            self.export_job_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_export_job_response(mut self, input: ::std::option::Option<crate::model::ExportJobResponse>) -> Self {
            self.export_job_response = input;
            self
        }
        pub fn get_export_job_response(&self) -> &::std::option::Option<crate::model::ExportJobResponse> {
            &self.export_job_response
        }
        /// Consumes the builder and constructs a [`CreateExportJobOutput`](crate::output::CreateExportJobOutput).
        pub fn build(self) -> crate::output::CreateExportJobOutput {
            crate::output::CreateExportJobOutput {
                export_job_response: self.export_job_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetExportJobOutput {
    pub(crate) export_job_response: ::std::option::Option<crate::model::ExportJobResponse>,
}
impl GetExportJobOutput {
    pub fn export_job_response(&self) -> ::std::option::Option<&crate::model::ExportJobResponse> {
        self.export_job_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetExportJobOutput`](crate::output::GetExportJobOutput).
    pub fn builder() -> crate::output::get_export_job_output::Builder {
        crate::output::get_export_job_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_export_job_output::Builder {
        crate::output::get_export_job_output::Builder {
            export_job_response: self.export_job_response,
        }
    }
}
impl ::std::hash::Hash for GetExportJobOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.export_job_response, state);
    }
}
impl ::std::fmt::Display for GetExportJobOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ExportJobResponse", &self.export_job_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetExportJobOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetExportJobOutput`](crate::output::GetExportJobOutput).
pub mod get_export_job_output {

    /// A builder for [`GetExportJobOutput`](crate::output::GetExportJobOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) export_job_response: ::std::option::Option<crate::model::ExportJobResponse>,
    }
    impl Builder {
        pub fn export_job_response(mut self, input: crate::model::ExportJobResponse) -> Self {
            self.export_job_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_export_job_response(mut self, input: ::std::option::Option<crate::model::ExportJobResponse>) -> Self {
            self.export_job_response = input;
            self
        }
        pub fn get_export_job_response(&self) -> &::std::option::Option<crate::model::ExportJobResponse> {
            &self.export_job_response
        }
        /// Consumes the builder and constructs a [`GetExportJobOutput`](crate::output::GetExportJobOutput).
        pub fn build(self) -> crate::output::GetExportJobOutput {
            crate::output::GetExportJobOutput {
                export_job_response: self.export_job_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetExportJobsOutput {
    pub(crate) export_jobs_response: ::std::option::Option<crate::model::ExportJobsResponse>,
}
impl GetExportJobsOutput {
    pub fn export_jobs_response(&self) -> ::std::option::Option<&crate::model::ExportJobsResponse> {
        self.export_jobs_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetExportJobsOutput`](crate::output::GetExportJobsOutput).
    pub fn builder() -> crate::output::get_export_jobs_output::Builder {
        crate::output::get_export_jobs_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_export_jobs_output::Builder {
        crate::output::get_export_jobs_output::Builder {
            export_jobs_response: self.export_jobs_response,
        }
    }
}
impl ::std::hash::Hash for GetExportJobsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.export_jobs_response, state);
    }
}
impl ::std::fmt::Display for GetExportJobsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ExportJobsResponse", &self.export_jobs_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetExportJobsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetExportJobsOutput`](crate::output::GetExportJobsOutput).
pub mod get_export_jobs_output {

    /// A builder for [`GetExportJobsOutput`](crate::output::GetExportJobsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) export_jobs_response: ::std::option::Option<crate::model::ExportJobsResponse>,
    }
    impl Builder {
        pub fn export_jobs_response(mut self, input: crate::model::ExportJobsResponse) -> Self {
            self.export_jobs_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_export_jobs_response(mut self, input: ::std::option::Option<crate::model::ExportJobsResponse>) -> Self {
            self.export_jobs_response = input;
            self
        }
        pub fn get_export_jobs_response(&self) -> &::std::option::Option<crate::model::ExportJobsResponse> {
            &self.export_jobs_response
        }
        /// Consumes the builder and constructs a [`GetExportJobsOutput`](crate::output::GetExportJobsOutput).
        pub fn build(self) -> crate::output::GetExportJobsOutput {
            crate::output::GetExportJobsOutput {
                export_jobs_response: self.export_jobs_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEndpointOutput {
    pub(crate) endpoint_response: ::std::option::Option<crate::model::EndpointResponse>,
}
impl GetEndpointOutput {
    pub fn endpoint_response(&self) -> ::std::option::Option<&crate::model::EndpointResponse> {
        self.endpoint_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetEndpointOutput`](crate::output::GetEndpointOutput).
    pub fn builder() -> crate::output::get_endpoint_output::Builder {
        crate::output::get_endpoint_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_endpoint_output::Builder {
        crate::output::get_endpoint_output::Builder {
            endpoint_response: self.endpoint_response,
        }
    }
}
impl ::std::hash::Hash for GetEndpointOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_response, state);
    }
}
impl ::std::fmt::Display for GetEndpointOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndpointResponse", &self.endpoint_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEndpointOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEndpointOutput`](crate::output::GetEndpointOutput).
pub mod get_endpoint_output {

    /// A builder for [`GetEndpointOutput`](crate::output::GetEndpointOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint_response: ::std::option::Option<crate::model::EndpointResponse>,
    }
    impl Builder {
        pub fn endpoint_response(mut self, input: crate::model::EndpointResponse) -> Self {
            self.endpoint_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_response(mut self, input: ::std::option::Option<crate::model::EndpointResponse>) -> Self {
            self.endpoint_response = input;
            self
        }
        pub fn get_endpoint_response(&self) -> &::std::option::Option<crate::model::EndpointResponse> {
            &self.endpoint_response
        }
        /// Consumes the builder and constructs a [`GetEndpointOutput`](crate::output::GetEndpointOutput).
        pub fn build(self) -> crate::output::GetEndpointOutput {
            crate::output::GetEndpointOutput {
                endpoint_response: self.endpoint_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEndpointOutput {
    pub(crate) endpoint_response: ::std::option::Option<crate::model::EndpointResponse>,
}
impl DeleteEndpointOutput {
    pub fn endpoint_response(&self) -> ::std::option::Option<&crate::model::EndpointResponse> {
        self.endpoint_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
    pub fn builder() -> crate::output::delete_endpoint_output::Builder {
        crate::output::delete_endpoint_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_endpoint_output::Builder {
        crate::output::delete_endpoint_output::Builder {
            endpoint_response: self.endpoint_response,
        }
    }
}
impl ::std::hash::Hash for DeleteEndpointOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoint_response, state);
    }
}
impl ::std::fmt::Display for DeleteEndpointOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndpointResponse", &self.endpoint_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEndpointOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
pub mod delete_endpoint_output {

    /// A builder for [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint_response: ::std::option::Option<crate::model::EndpointResponse>,
    }
    impl Builder {
        pub fn endpoint_response(mut self, input: crate::model::EndpointResponse) -> Self {
            self.endpoint_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoint_response(mut self, input: ::std::option::Option<crate::model::EndpointResponse>) -> Self {
            self.endpoint_response = input;
            self
        }
        pub fn get_endpoint_response(&self) -> &::std::option::Option<crate::model::EndpointResponse> {
            &self.endpoint_response
        }
        /// Consumes the builder and constructs a [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput).
        pub fn build(self) -> crate::output::DeleteEndpointOutput {
            crate::output::DeleteEndpointOutput {
                endpoint_response: self.endpoint_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEndpointOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl UpdateEndpointOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput).
    pub fn builder() -> crate::output::update_endpoint_output::Builder {
        crate::output::update_endpoint_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_endpoint_output::Builder {
        crate::output::update_endpoint_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for UpdateEndpointOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for UpdateEndpointOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEndpointOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput).
pub mod update_endpoint_output {

    /// A builder for [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput).
        pub fn build(self) -> crate::output::UpdateEndpointOutput {
            crate::output::UpdateEndpointOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEndpointsBatchOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl UpdateEndpointsBatchOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput).
    pub fn builder() -> crate::output::update_endpoints_batch_output::Builder {
        crate::output::update_endpoints_batch_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_endpoints_batch_output::Builder {
        crate::output::update_endpoints_batch_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for UpdateEndpointsBatchOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for UpdateEndpointsBatchOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEndpointsBatchOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput).
pub mod update_endpoints_batch_output {

    /// A builder for [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput).
        pub fn build(self) -> crate::output::UpdateEndpointsBatchOutput {
            crate::output::UpdateEndpointsBatchOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetUserEndpointsOutput {
    pub(crate) endpoints_response: ::std::option::Option<crate::model::EndpointsResponse>,
}
impl GetUserEndpointsOutput {
    pub fn endpoints_response(&self) -> ::std::option::Option<&crate::model::EndpointsResponse> {
        self.endpoints_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetUserEndpointsOutput`](crate::output::GetUserEndpointsOutput).
    pub fn builder() -> crate::output::get_user_endpoints_output::Builder {
        crate::output::get_user_endpoints_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_user_endpoints_output::Builder {
        crate::output::get_user_endpoints_output::Builder {
            endpoints_response: self.endpoints_response,
        }
    }
}
impl ::std::hash::Hash for GetUserEndpointsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoints_response, state);
    }
}
impl ::std::fmt::Display for GetUserEndpointsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndpointsResponse", &self.endpoints_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetUserEndpointsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetUserEndpointsOutput`](crate::output::GetUserEndpointsOutput).
pub mod get_user_endpoints_output {

    /// A builder for [`GetUserEndpointsOutput`](crate::output::GetUserEndpointsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoints_response: ::std::option::Option<crate::model::EndpointsResponse>,
    }
    impl Builder {
        pub fn endpoints_response(mut self, input: crate::model::EndpointsResponse) -> Self {
            self.endpoints_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoints_response(mut self, input: ::std::option::Option<crate::model::EndpointsResponse>) -> Self {
            self.endpoints_response = input;
            self
        }
        pub fn get_endpoints_response(&self) -> &::std::option::Option<crate::model::EndpointsResponse> {
            &self.endpoints_response
        }
        /// Consumes the builder and constructs a [`GetUserEndpointsOutput`](crate::output::GetUserEndpointsOutput).
        pub fn build(self) -> crate::output::GetUserEndpointsOutput {
            crate::output::GetUserEndpointsOutput {
                endpoints_response: self.endpoints_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteUserEndpointsOutput {
    pub(crate) endpoints_response: ::std::option::Option<crate::model::EndpointsResponse>,
}
impl DeleteUserEndpointsOutput {
    pub fn endpoints_response(&self) -> ::std::option::Option<&crate::model::EndpointsResponse> {
        self.endpoints_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteUserEndpointsOutput`](crate::output::DeleteUserEndpointsOutput).
    pub fn builder() -> crate::output::delete_user_endpoints_output::Builder {
        crate::output::delete_user_endpoints_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_user_endpoints_output::Builder {
        crate::output::delete_user_endpoints_output::Builder {
            endpoints_response: self.endpoints_response,
        }
    }
}
impl ::std::hash::Hash for DeleteUserEndpointsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.endpoints_response, state);
    }
}
impl ::std::fmt::Display for DeleteUserEndpointsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EndpointsResponse", &self.endpoints_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteUserEndpointsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteUserEndpointsOutput`](crate::output::DeleteUserEndpointsOutput).
pub mod delete_user_endpoints_output {

    /// A builder for [`DeleteUserEndpointsOutput`](crate::output::DeleteUserEndpointsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoints_response: ::std::option::Option<crate::model::EndpointsResponse>,
    }
    impl Builder {
        pub fn endpoints_response(mut self, input: crate::model::EndpointsResponse) -> Self {
            self.endpoints_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_endpoints_response(mut self, input: ::std::option::Option<crate::model::EndpointsResponse>) -> Self {
            self.endpoints_response = input;
            self
        }
        pub fn get_endpoints_response(&self) -> &::std::option::Option<crate::model::EndpointsResponse> {
            &self.endpoints_response
        }
        /// Consumes the builder and constructs a [`DeleteUserEndpointsOutput`](crate::output::DeleteUserEndpointsOutput).
        pub fn build(self) -> crate::output::DeleteUserEndpointsOutput {
            crate::output::DeleteUserEndpointsOutput {
                endpoints_response: self.endpoints_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutEventsOutput {
    pub(crate) events_response: ::std::option::Option<crate::model::EventsResponse>,
}
impl PutEventsOutput {
    pub fn events_response(&self) -> ::std::option::Option<&crate::model::EventsResponse> {
        self.events_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`PutEventsOutput`](crate::output::PutEventsOutput).
    pub fn builder() -> crate::output::put_events_output::Builder {
        crate::output::put_events_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::put_events_output::Builder {
        crate::output::put_events_output::Builder {
            events_response: self.events_response,
        }
    }
}
impl ::std::hash::Hash for PutEventsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.events_response, state);
    }
}
impl ::std::fmt::Display for PutEventsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EventsResponse", &self.events_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for PutEventsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`PutEventsOutput`](crate::output::PutEventsOutput).
pub mod put_events_output {

    /// A builder for [`PutEventsOutput`](crate::output::PutEventsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) events_response: ::std::option::Option<crate::model::EventsResponse>,
    }
    impl Builder {
        pub fn events_response(mut self, input: crate::model::EventsResponse) -> Self {
            self.events_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_events_response(mut self, input: ::std::option::Option<crate::model::EventsResponse>) -> Self {
            self.events_response = input;
            self
        }
        pub fn get_events_response(&self) -> &::std::option::Option<crate::model::EventsResponse> {
            &self.events_response
        }
        /// Consumes the builder and constructs a [`PutEventsOutput`](crate::output::PutEventsOutput).
        pub fn build(self) -> crate::output::PutEventsOutput {
            crate::output::PutEventsOutput {
                events_response: self.events_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SendMessagesOutput {
    pub(crate) message_response: ::std::option::Option<crate::model::MessageResponse>,
}
impl SendMessagesOutput {
    pub fn message_response(&self) -> ::std::option::Option<&crate::model::MessageResponse> {
        self.message_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`SendMessagesOutput`](crate::output::SendMessagesOutput).
    pub fn builder() -> crate::output::send_messages_output::Builder {
        crate::output::send_messages_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::send_messages_output::Builder {
        crate::output::send_messages_output::Builder {
            message_response: self.message_response,
        }
    }
}
impl ::std::hash::Hash for SendMessagesOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_response, state);
    }
}
impl ::std::fmt::Display for SendMessagesOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageResponse", &self.message_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for SendMessagesOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`SendMessagesOutput`](crate::output::SendMessagesOutput).
pub mod send_messages_output {

    /// A builder for [`SendMessagesOutput`](crate::output::SendMessagesOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_response: ::std::option::Option<crate::model::MessageResponse>,
    }
    impl Builder {
        pub fn message_response(mut self, input: crate::model::MessageResponse) -> Self {
            self.message_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_response(mut self, input: ::std::option::Option<crate::model::MessageResponse>) -> Self {
            self.message_response = input;
            self
        }
        pub fn get_message_response(&self) -> &::std::option::Option<crate::model::MessageResponse> {
            &self.message_response
        }
        /// Consumes the builder and constructs a [`SendMessagesOutput`](crate::output::SendMessagesOutput).
        pub fn build(self) -> crate::output::SendMessagesOutput {
            crate::output::SendMessagesOutput {
                message_response: self.message_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetChannelsOutput {
    pub(crate) channels_response: ::std::option::Option<crate::model::ChannelsResponse>,
}
impl GetChannelsOutput {
    pub fn channels_response(&self) -> ::std::option::Option<&crate::model::ChannelsResponse> {
        self.channels_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetChannelsOutput`](crate::output::GetChannelsOutput).
    pub fn builder() -> crate::output::get_channels_output::Builder {
        crate::output::get_channels_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_channels_output::Builder {
        crate::output::get_channels_output::Builder {
            channels_response: self.channels_response,
        }
    }
}
impl ::std::hash::Hash for GetChannelsOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.channels_response, state);
    }
}
impl ::std::fmt::Display for GetChannelsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("ChannelsResponse", &self.channels_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetChannelsOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetChannelsOutput`](crate::output::GetChannelsOutput).
pub mod get_channels_output {

    /// A builder for [`GetChannelsOutput`](crate::output::GetChannelsOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channels_response: ::std::option::Option<crate::model::ChannelsResponse>,
    }
    impl Builder {
        pub fn channels_response(mut self, input: crate::model::ChannelsResponse) -> Self {
            self.channels_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_channels_response(mut self, input: ::std::option::Option<crate::model::ChannelsResponse>) -> Self {
            self.channels_response = input;
            self
        }
        pub fn get_channels_response(&self) -> &::std::option::Option<crate::model::ChannelsResponse> {
            &self.channels_response
        }
        /// Consumes the builder and constructs a [`GetChannelsOutput`](crate::output::GetChannelsOutput).
        pub fn build(self) -> crate::output::GetChannelsOutput {
            crate::output::GetChannelsOutput {
                channels_response: self.channels_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetApnsChannelOutput {
    pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
}
impl GetApnsChannelOutput {
    pub fn apns_channel_response(&self) -> ::std::option::Option<&crate::model::APNSChannelResponse> {
        self.apns_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput).
    pub fn builder() -> crate::output::get_apns_channel_output::Builder {
        crate::output::get_apns_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_apns_channel_output::Builder {
        crate::output::get_apns_channel_output::Builder {
            apns_channel_response: self.apns_channel_response,
        }
    }
}
impl ::std::hash::Hash for GetApnsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_channel_response, state);
    }
}
impl ::std::fmt::Display for GetApnsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("APNSChannelResponse", &self.apns_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetApnsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput).
pub mod get_apns_channel_output {

    /// A builder for [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::APNSChannelResponse) -> Self {
            self.apns_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: ::std::option::Option<crate::model::APNSChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        pub fn get_apns_channel_response(&self) -> &::std::option::Option<crate::model::APNSChannelResponse> {
            &self.apns_channel_response
        }
        /// Consumes the builder and constructs a [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput).
        pub fn build(self) -> crate::output::GetApnsChannelOutput {
            crate::output::GetApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateApnsChannelOutput {
    pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
}
impl UpdateApnsChannelOutput {
    pub fn apns_channel_response(&self) -> ::std::option::Option<&crate::model::APNSChannelResponse> {
        self.apns_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput).
    pub fn builder() -> crate::output::update_apns_channel_output::Builder {
        crate::output::update_apns_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_apns_channel_output::Builder {
        crate::output::update_apns_channel_output::Builder {
            apns_channel_response: self.apns_channel_response,
        }
    }
}
impl ::std::hash::Hash for UpdateApnsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_channel_response, state);
    }
}
impl ::std::fmt::Display for UpdateApnsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("APNSChannelResponse", &self.apns_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateApnsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput).
pub mod update_apns_channel_output {

    /// A builder for [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::APNSChannelResponse) -> Self {
            self.apns_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: ::std::option::Option<crate::model::APNSChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        pub fn get_apns_channel_response(&self) -> &::std::option::Option<crate::model::APNSChannelResponse> {
            &self.apns_channel_response
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput).
        pub fn build(self) -> crate::output::UpdateApnsChannelOutput {
            crate::output::UpdateApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteApnsChannelOutput {
    pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
}
impl DeleteApnsChannelOutput {
    pub fn apns_channel_response(&self) -> ::std::option::Option<&crate::model::APNSChannelResponse> {
        self.apns_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput).
    pub fn builder() -> crate::output::delete_apns_channel_output::Builder {
        crate::output::delete_apns_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_apns_channel_output::Builder {
        crate::output::delete_apns_channel_output::Builder {
            apns_channel_response: self.apns_channel_response,
        }
    }
}
impl ::std::hash::Hash for DeleteApnsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.apns_channel_response, state);
    }
}
impl ::std::fmt::Display for DeleteApnsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("APNSChannelResponse", &self.apns_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteApnsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput).
pub mod delete_apns_channel_output {

    /// A builder for [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: ::std::option::Option<crate::model::APNSChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::APNSChannelResponse) -> Self {
            self.apns_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: ::std::option::Option<crate::model::APNSChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        pub fn get_apns_channel_response(&self) -> &::std::option::Option<crate::model::APNSChannelResponse> {
            &self.apns_channel_response
        }
        /// Consumes the builder and constructs a [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput).
        pub fn build(self) -> crate::output::DeleteApnsChannelOutput {
            crate::output::DeleteApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetGcmChannelOutput {
    pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
}
impl GetGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> ::std::option::Option<&crate::model::GCMChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput).
    pub fn builder() -> crate::output::get_gcm_channel_output::Builder {
        crate::output::get_gcm_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_gcm_channel_output::Builder {
        crate::output::get_gcm_channel_output::Builder {
            gcm_channel_response: self.gcm_channel_response,
        }
    }
}
impl ::std::hash::Hash for GetGcmChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_channel_response, state);
    }
}
impl ::std::fmt::Display for GetGcmChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("GCMChannelResponse", &self.gcm_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetGcmChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput).
pub mod get_gcm_channel_output {

    /// A builder for [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GCMChannelResponse) -> Self {
            self.gcm_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: ::std::option::Option<crate::model::GCMChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        pub fn get_gcm_channel_response(&self) -> &::std::option::Option<crate::model::GCMChannelResponse> {
            &self.gcm_channel_response
        }
        /// Consumes the builder and constructs a [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput).
        pub fn build(self) -> crate::output::GetGcmChannelOutput {
            crate::output::GetGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateGcmChannelOutput {
    pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
}
impl UpdateGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> ::std::option::Option<&crate::model::GCMChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput).
    pub fn builder() -> crate::output::update_gcm_channel_output::Builder {
        crate::output::update_gcm_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_gcm_channel_output::Builder {
        crate::output::update_gcm_channel_output::Builder {
            gcm_channel_response: self.gcm_channel_response,
        }
    }
}
impl ::std::hash::Hash for UpdateGcmChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_channel_response, state);
    }
}
impl ::std::fmt::Display for UpdateGcmChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("GCMChannelResponse", &self.gcm_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateGcmChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput).
pub mod update_gcm_channel_output {

    /// A builder for [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GCMChannelResponse) -> Self {
            self.gcm_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: ::std::option::Option<crate::model::GCMChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        pub fn get_gcm_channel_response(&self) -> &::std::option::Option<crate::model::GCMChannelResponse> {
            &self.gcm_channel_response
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput).
        pub fn build(self) -> crate::output::UpdateGcmChannelOutput {
            crate::output::UpdateGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteGcmChannelOutput {
    pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
}
impl DeleteGcmChannelOutput {
    pub fn gcm_channel_response(&self) -> ::std::option::Option<&crate::model::GCMChannelResponse> {
        self.gcm_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput).
    pub fn builder() -> crate::output::delete_gcm_channel_output::Builder {
        crate::output::delete_gcm_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_gcm_channel_output::Builder {
        crate::output::delete_gcm_channel_output::Builder {
            gcm_channel_response: self.gcm_channel_response,
        }
    }
}
impl ::std::hash::Hash for DeleteGcmChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.gcm_channel_response, state);
    }
}
impl ::std::fmt::Display for DeleteGcmChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("GCMChannelResponse", &self.gcm_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteGcmChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput).
pub mod delete_gcm_channel_output {

    /// A builder for [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: ::std::option::Option<crate::model::GCMChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GCMChannelResponse) -> Self {
            self.gcm_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: ::std::option::Option<crate::model::GCMChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        pub fn get_gcm_channel_response(&self) -> &::std::option::Option<crate::model::GCMChannelResponse> {
            &self.gcm_channel_response
        }
        /// Consumes the builder and constructs a [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput).
        pub fn build(self) -> crate::output::DeleteGcmChannelOutput {
            crate::output::DeleteGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSmsChannelOutput {
    pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
}
impl GetSmsChannelOutput {
    pub fn sms_channel_response(&self) -> ::std::option::Option<&crate::model::SMSChannelResponse> {
        self.sms_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSmsChannelOutput`](crate::output::GetSmsChannelOutput).
    pub fn builder() -> crate::output::get_sms_channel_output::Builder {
        crate::output::get_sms_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_sms_channel_output::Builder {
        crate::output::get_sms_channel_output::Builder {
            sms_channel_response: self.sms_channel_response,
        }
    }
}
impl ::std::hash::Hash for GetSmsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_channel_response, state);
    }
}
impl ::std::fmt::Display for GetSmsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SMSChannelResponse", &self.sms_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSmsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSmsChannelOutput`](crate::output::GetSmsChannelOutput).
pub mod get_sms_channel_output {

    /// A builder for [`GetSmsChannelOutput`](crate::output::GetSmsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
    }
    impl Builder {
        pub fn sms_channel_response(mut self, input: crate::model::SMSChannelResponse) -> Self {
            self.sms_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_channel_response(mut self, input: ::std::option::Option<crate::model::SMSChannelResponse>) -> Self {
            self.sms_channel_response = input;
            self
        }
        pub fn get_sms_channel_response(&self) -> &::std::option::Option<crate::model::SMSChannelResponse> {
            &self.sms_channel_response
        }
        /// Consumes the builder and constructs a [`GetSmsChannelOutput`](crate::output::GetSmsChannelOutput).
        pub fn build(self) -> crate::output::GetSmsChannelOutput {
            crate::output::GetSmsChannelOutput {
                sms_channel_response: self.sms_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSmsChannelOutput {
    pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
}
impl UpdateSmsChannelOutput {
    pub fn sms_channel_response(&self) -> ::std::option::Option<&crate::model::SMSChannelResponse> {
        self.sms_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSmsChannelOutput`](crate::output::UpdateSmsChannelOutput).
    pub fn builder() -> crate::output::update_sms_channel_output::Builder {
        crate::output::update_sms_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_sms_channel_output::Builder {
        crate::output::update_sms_channel_output::Builder {
            sms_channel_response: self.sms_channel_response,
        }
    }
}
impl ::std::hash::Hash for UpdateSmsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_channel_response, state);
    }
}
impl ::std::fmt::Display for UpdateSmsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SMSChannelResponse", &self.sms_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSmsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSmsChannelOutput`](crate::output::UpdateSmsChannelOutput).
pub mod update_sms_channel_output {

    /// A builder for [`UpdateSmsChannelOutput`](crate::output::UpdateSmsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
    }
    impl Builder {
        pub fn sms_channel_response(mut self, input: crate::model::SMSChannelResponse) -> Self {
            self.sms_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_channel_response(mut self, input: ::std::option::Option<crate::model::SMSChannelResponse>) -> Self {
            self.sms_channel_response = input;
            self
        }
        pub fn get_sms_channel_response(&self) -> &::std::option::Option<crate::model::SMSChannelResponse> {
            &self.sms_channel_response
        }
        /// Consumes the builder and constructs a [`UpdateSmsChannelOutput`](crate::output::UpdateSmsChannelOutput).
        pub fn build(self) -> crate::output::UpdateSmsChannelOutput {
            crate::output::UpdateSmsChannelOutput {
                sms_channel_response: self.sms_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSmsChannelOutput {
    pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
}
impl DeleteSmsChannelOutput {
    pub fn sms_channel_response(&self) -> ::std::option::Option<&crate::model::SMSChannelResponse> {
        self.sms_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSmsChannelOutput`](crate::output::DeleteSmsChannelOutput).
    pub fn builder() -> crate::output::delete_sms_channel_output::Builder {
        crate::output::delete_sms_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_sms_channel_output::Builder {
        crate::output::delete_sms_channel_output::Builder {
            sms_channel_response: self.sms_channel_response,
        }
    }
}
impl ::std::hash::Hash for DeleteSmsChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_channel_response, state);
    }
}
impl ::std::fmt::Display for DeleteSmsChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SMSChannelResponse", &self.sms_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSmsChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSmsChannelOutput`](crate::output::DeleteSmsChannelOutput).
pub mod delete_sms_channel_output {

    /// A builder for [`DeleteSmsChannelOutput`](crate::output::DeleteSmsChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sms_channel_response: ::std::option::Option<crate::model::SMSChannelResponse>,
    }
    impl Builder {
        pub fn sms_channel_response(mut self, input: crate::model::SMSChannelResponse) -> Self {
            self.sms_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_channel_response(mut self, input: ::std::option::Option<crate::model::SMSChannelResponse>) -> Self {
            self.sms_channel_response = input;
            self
        }
        pub fn get_sms_channel_response(&self) -> &::std::option::Option<crate::model::SMSChannelResponse> {
            &self.sms_channel_response
        }
        /// Consumes the builder and constructs a [`DeleteSmsChannelOutput`](crate::output::DeleteSmsChannelOutput).
        pub fn build(self) -> crate::output::DeleteSmsChannelOutput {
            crate::output::DeleteSmsChannelOutput {
                sms_channel_response: self.sms_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEmailChannelOutput {
    pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
}
impl GetEmailChannelOutput {
    pub fn email_channel_response(&self) -> ::std::option::Option<&crate::model::EmailChannelResponse> {
        self.email_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetEmailChannelOutput`](crate::output::GetEmailChannelOutput).
    pub fn builder() -> crate::output::get_email_channel_output::Builder {
        crate::output::get_email_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_email_channel_output::Builder {
        crate::output::get_email_channel_output::Builder {
            email_channel_response: self.email_channel_response,
        }
    }
}
impl ::std::hash::Hash for GetEmailChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_channel_response, state);
    }
}
impl ::std::fmt::Display for GetEmailChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EmailChannelResponse", &self.email_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEmailChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEmailChannelOutput`](crate::output::GetEmailChannelOutput).
pub mod get_email_channel_output {

    /// A builder for [`GetEmailChannelOutput`](crate::output::GetEmailChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
    }
    impl Builder {
        pub fn email_channel_response(mut self, input: crate::model::EmailChannelResponse) -> Self {
            self.email_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_channel_response(mut self, input: ::std::option::Option<crate::model::EmailChannelResponse>) -> Self {
            self.email_channel_response = input;
            self
        }
        pub fn get_email_channel_response(&self) -> &::std::option::Option<crate::model::EmailChannelResponse> {
            &self.email_channel_response
        }
        /// Consumes the builder and constructs a [`GetEmailChannelOutput`](crate::output::GetEmailChannelOutput).
        pub fn build(self) -> crate::output::GetEmailChannelOutput {
            crate::output::GetEmailChannelOutput {
                email_channel_response: self.email_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEmailChannelOutput {
    pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
}
impl UpdateEmailChannelOutput {
    pub fn email_channel_response(&self) -> ::std::option::Option<&crate::model::EmailChannelResponse> {
        self.email_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEmailChannelOutput`](crate::output::UpdateEmailChannelOutput).
    pub fn builder() -> crate::output::update_email_channel_output::Builder {
        crate::output::update_email_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_email_channel_output::Builder {
        crate::output::update_email_channel_output::Builder {
            email_channel_response: self.email_channel_response,
        }
    }
}
impl ::std::hash::Hash for UpdateEmailChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_channel_response, state);
    }
}
impl ::std::fmt::Display for UpdateEmailChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EmailChannelResponse", &self.email_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEmailChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEmailChannelOutput`](crate::output::UpdateEmailChannelOutput).
pub mod update_email_channel_output {

    /// A builder for [`UpdateEmailChannelOutput`](crate::output::UpdateEmailChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
    }
    impl Builder {
        pub fn email_channel_response(mut self, input: crate::model::EmailChannelResponse) -> Self {
            self.email_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_channel_response(mut self, input: ::std::option::Option<crate::model::EmailChannelResponse>) -> Self {
            self.email_channel_response = input;
            self
        }
        pub fn get_email_channel_response(&self) -> &::std::option::Option<crate::model::EmailChannelResponse> {
            &self.email_channel_response
        }
        /// Consumes the builder and constructs a [`UpdateEmailChannelOutput`](crate::output::UpdateEmailChannelOutput).
        pub fn build(self) -> crate::output::UpdateEmailChannelOutput {
            crate::output::UpdateEmailChannelOutput {
                email_channel_response: self.email_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEmailChannelOutput {
    pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
}
impl DeleteEmailChannelOutput {
    pub fn email_channel_response(&self) -> ::std::option::Option<&crate::model::EmailChannelResponse> {
        self.email_channel_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEmailChannelOutput`](crate::output::DeleteEmailChannelOutput).
    pub fn builder() -> crate::output::delete_email_channel_output::Builder {
        crate::output::delete_email_channel_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_email_channel_output::Builder {
        crate::output::delete_email_channel_output::Builder {
            email_channel_response: self.email_channel_response,
        }
    }
}
impl ::std::hash::Hash for DeleteEmailChannelOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_channel_response, state);
    }
}
impl ::std::fmt::Display for DeleteEmailChannelOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EmailChannelResponse", &self.email_channel_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEmailChannelOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEmailChannelOutput`](crate::output::DeleteEmailChannelOutput).
pub mod delete_email_channel_output {

    /// A builder for [`DeleteEmailChannelOutput`](crate::output::DeleteEmailChannelOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_channel_response: ::std::option::Option<crate::model::EmailChannelResponse>,
    }
    impl Builder {
        pub fn email_channel_response(mut self, input: crate::model::EmailChannelResponse) -> Self {
            self.email_channel_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_channel_response(mut self, input: ::std::option::Option<crate::model::EmailChannelResponse>) -> Self {
            self.email_channel_response = input;
            self
        }
        pub fn get_email_channel_response(&self) -> &::std::option::Option<crate::model::EmailChannelResponse> {
            &self.email_channel_response
        }
        /// Consumes the builder and constructs a [`DeleteEmailChannelOutput`](crate::output::DeleteEmailChannelOutput).
        pub fn build(self) -> crate::output::DeleteEmailChannelOutput {
            crate::output::DeleteEmailChannelOutput {
                email_channel_response: self.email_channel_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateJourneyOutput {
    pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
}
impl CreateJourneyOutput {
    pub fn journey_response(&self) -> ::std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateJourneyOutput`](crate::output::CreateJourneyOutput).
    pub fn builder() -> crate::output::create_journey_output::Builder {
        crate::output::create_journey_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_journey_output::Builder {
        crate::output::create_journey_output::Builder {
            journey_response: self.journey_response,
        }
    }
}
impl ::std::hash::Hash for CreateJourneyOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_response, state);
    }
}
impl ::std::fmt::Display for CreateJourneyOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneyResponse", &self.journey_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateJourneyOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateJourneyOutput`](crate::output::CreateJourneyOutput).
pub mod create_journey_output {

    /// A builder for [`CreateJourneyOutput`](crate::output::CreateJourneyOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: ::std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        pub fn get_journey_response(&self) -> &::std::option::Option<crate::model::JourneyResponse> {
            &self.journey_response
        }
        /// Consumes the builder and constructs a [`CreateJourneyOutput`](crate::output::CreateJourneyOutput).
        pub fn build(self) -> crate::output::CreateJourneyOutput {
            crate::output::CreateJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetJourneyOutput {
    pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
}
impl GetJourneyOutput {
    pub fn journey_response(&self) -> ::std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetJourneyOutput`](crate::output::GetJourneyOutput).
    pub fn builder() -> crate::output::get_journey_output::Builder {
        crate::output::get_journey_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_journey_output::Builder {
        crate::output::get_journey_output::Builder {
            journey_response: self.journey_response,
        }
    }
}
impl ::std::hash::Hash for GetJourneyOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_response, state);
    }
}
impl ::std::fmt::Display for GetJourneyOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneyResponse", &self.journey_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetJourneyOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetJourneyOutput`](crate::output::GetJourneyOutput).
pub mod get_journey_output {

    /// A builder for [`GetJourneyOutput`](crate::output::GetJourneyOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: ::std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        pub fn get_journey_response(&self) -> &::std::option::Option<crate::model::JourneyResponse> {
            &self.journey_response
        }
        /// Consumes the builder and constructs a [`GetJourneyOutput`](crate::output::GetJourneyOutput).
        pub fn build(self) -> crate::output::GetJourneyOutput {
            crate::output::GetJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListJourneysOutput {
    pub(crate) journeys_response: ::std::option::Option<crate::model::JourneysResponse>,
}
impl ListJourneysOutput {
    pub fn journeys_response(&self) -> ::std::option::Option<&crate::model::JourneysResponse> {
        self.journeys_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ListJourneysOutput`](crate::output::ListJourneysOutput).
    pub fn builder() -> crate::output::list_journeys_output::Builder {
        crate::output::list_journeys_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::list_journeys_output::Builder {
        crate::output::list_journeys_output::Builder {
            journeys_response: self.journeys_response,
        }
    }
}
impl ::std::hash::Hash for ListJourneysOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journeys_response, state);
    }
}
impl ::std::fmt::Display for ListJourneysOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneysResponse", &self.journeys_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListJourneysOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListJourneysOutput`](crate::output::ListJourneysOutput).
pub mod list_journeys_output {

    /// A builder for [`ListJourneysOutput`](crate::output::ListJourneysOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journeys_response: ::std::option::Option<crate::model::JourneysResponse>,
    }
    impl Builder {
        pub fn journeys_response(mut self, input: crate::model::JourneysResponse) -> Self {
            self.journeys_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journeys_response(mut self, input: ::std::option::Option<crate::model::JourneysResponse>) -> Self {
            self.journeys_response = input;
            self
        }
        pub fn get_journeys_response(&self) -> &::std::option::Option<crate::model::JourneysResponse> {
            &self.journeys_response
        }
        /// Consumes the builder and constructs a [`ListJourneysOutput`](crate::output::ListJourneysOutput).
        pub fn build(self) -> crate::output::ListJourneysOutput {
            crate::output::ListJourneysOutput {
                journeys_response: self.journeys_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateJourneyOutput {
    pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
}
impl UpdateJourneyOutput {
    pub fn journey_response(&self) -> ::std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput).
    pub fn builder() -> crate::output::update_journey_output::Builder {
        crate::output::update_journey_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_journey_output::Builder {
        crate::output::update_journey_output::Builder {
            journey_response: self.journey_response,
        }
    }
}
impl ::std::hash::Hash for UpdateJourneyOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_response, state);
    }
}
impl ::std::fmt::Display for UpdateJourneyOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneyResponse", &self.journey_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateJourneyOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput).
pub mod update_journey_output {

    /// A builder for [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: ::std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        pub fn get_journey_response(&self) -> &::std::option::Option<crate::model::JourneyResponse> {
            &self.journey_response
        }
        /// Consumes the builder and constructs a [`UpdateJourneyOutput`](crate::output::UpdateJourneyOutput).
        pub fn build(self) -> crate::output::UpdateJourneyOutput {
            crate::output::UpdateJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateJourneyStateOutput {
    pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
}
impl UpdateJourneyStateOutput {
    pub fn journey_response(&self) -> ::std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateJourneyStateOutput`](crate::output::UpdateJourneyStateOutput).
    pub fn builder() -> crate::output::update_journey_state_output::Builder {
        crate::output::update_journey_state_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_journey_state_output::Builder {
        crate::output::update_journey_state_output::Builder {
            journey_response: self.journey_response,
        }
    }
}
impl ::std::hash::Hash for UpdateJourneyStateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_response, state);
    }
}
impl ::std::fmt::Display for UpdateJourneyStateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneyResponse", &self.journey_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateJourneyStateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateJourneyStateOutput`](crate::output::UpdateJourneyStateOutput).
pub mod update_journey_state_output {

    /// A builder for [`UpdateJourneyStateOutput`](crate::output::UpdateJourneyStateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: ::std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        pub fn get_journey_response(&self) -> &::std::option::Option<crate::model::JourneyResponse> {
            &self.journey_response
        }
        /// Consumes the builder and constructs a [`UpdateJourneyStateOutput`](crate::output::UpdateJourneyStateOutput).
        pub fn build(self) -> crate::output::UpdateJourneyStateOutput {
            crate::output::UpdateJourneyStateOutput {
                journey_response: self.journey_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteJourneyOutput {
    pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
}
impl DeleteJourneyOutput {
    pub fn journey_response(&self) -> ::std::option::Option<&crate::model::JourneyResponse> {
        self.journey_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput).
    pub fn builder() -> crate::output::delete_journey_output::Builder {
        crate::output::delete_journey_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_journey_output::Builder {
        crate::output::delete_journey_output::Builder {
            journey_response: self.journey_response,
        }
    }
}
impl ::std::hash::Hash for DeleteJourneyOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.journey_response, state);
    }
}
impl ::std::fmt::Display for DeleteJourneyOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("JourneyResponse", &self.journey_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteJourneyOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput).
pub mod delete_journey_output {

    /// A builder for [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: ::std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: ::std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        pub fn get_journey_response(&self) -> &::std::option::Option<crate::model::JourneyResponse> {
            &self.journey_response
        }
        /// Consumes the builder and constructs a [`DeleteJourneyOutput`](crate::output::DeleteJourneyOutput).
        pub fn build(self) -> crate::output::DeleteJourneyOutput {
            crate::output::DeleteJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateEmailTemplateOutput {
    pub(crate) create_template_message_body: ::std::option::Option<crate::model::CreateTemplateMessageBody>,
}
impl CreateEmailTemplateOutput {
    pub fn create_template_message_body(&self) -> ::std::option::Option<&crate::model::CreateTemplateMessageBody> {
        self.create_template_message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput).
    pub fn builder() -> crate::output::create_email_template_output::Builder {
        crate::output::create_email_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_email_template_output::Builder {
        crate::output::create_email_template_output::Builder {
            create_template_message_body: self.create_template_message_body,
        }
    }
}
impl ::std::hash::Hash for CreateEmailTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.create_template_message_body, state);
    }
}
impl ::std::fmt::Display for CreateEmailTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CreateTemplateMessageBody", &self.create_template_message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateEmailTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput).
pub mod create_email_template_output {

    /// A builder for [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) create_template_message_body: ::std::option::Option<crate::model::CreateTemplateMessageBody>,
    }
    impl Builder {
        pub fn create_template_message_body(mut self, input: crate::model::CreateTemplateMessageBody) -> Self {
            self.create_template_message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_create_template_message_body(mut self, input: ::std::option::Option<crate::model::CreateTemplateMessageBody>) -> Self {
            self.create_template_message_body = input;
            self
        }
        pub fn get_create_template_message_body(&self) -> &::std::option::Option<crate::model::CreateTemplateMessageBody> {
            &self.create_template_message_body
        }
        /// Consumes the builder and constructs a [`CreateEmailTemplateOutput`](crate::output::CreateEmailTemplateOutput).
        pub fn build(self) -> crate::output::CreateEmailTemplateOutput {
            crate::output::CreateEmailTemplateOutput {
                create_template_message_body: self.create_template_message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetEmailTemplateOutput {
    pub(crate) email_template_response: ::std::option::Option<crate::model::EmailTemplateResponse>,
}
impl GetEmailTemplateOutput {
    pub fn email_template_response(&self) -> ::std::option::Option<&crate::model::EmailTemplateResponse> {
        self.email_template_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput).
    pub fn builder() -> crate::output::get_email_template_output::Builder {
        crate::output::get_email_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_email_template_output::Builder {
        crate::output::get_email_template_output::Builder {
            email_template_response: self.email_template_response,
        }
    }
}
impl ::std::hash::Hash for GetEmailTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.email_template_response, state);
    }
}
impl ::std::fmt::Display for GetEmailTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("EmailTemplateResponse", &self.email_template_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetEmailTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput).
pub mod get_email_template_output {

    /// A builder for [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) email_template_response: ::std::option::Option<crate::model::EmailTemplateResponse>,
    }
    impl Builder {
        pub fn email_template_response(mut self, input: crate::model::EmailTemplateResponse) -> Self {
            self.email_template_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_email_template_response(mut self, input: ::std::option::Option<crate::model::EmailTemplateResponse>) -> Self {
            self.email_template_response = input;
            self
        }
        pub fn get_email_template_response(&self) -> &::std::option::Option<crate::model::EmailTemplateResponse> {
            &self.email_template_response
        }
        /// Consumes the builder and constructs a [`GetEmailTemplateOutput`](crate::output::GetEmailTemplateOutput).
        pub fn build(self) -> crate::output::GetEmailTemplateOutput {
            crate::output::GetEmailTemplateOutput {
                email_template_response: self.email_template_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateEmailTemplateOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl UpdateEmailTemplateOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateEmailTemplateOutput`](crate::output::UpdateEmailTemplateOutput).
    pub fn builder() -> crate::output::update_email_template_output::Builder {
        crate::output::update_email_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_email_template_output::Builder {
        crate::output::update_email_template_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for UpdateEmailTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for UpdateEmailTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateEmailTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateEmailTemplateOutput`](crate::output::UpdateEmailTemplateOutput).
pub mod update_email_template_output {

    /// A builder for [`UpdateEmailTemplateOutput`](crate::output::UpdateEmailTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`UpdateEmailTemplateOutput`](crate::output::UpdateEmailTemplateOutput).
        pub fn build(self) -> crate::output::UpdateEmailTemplateOutput {
            crate::output::UpdateEmailTemplateOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteEmailTemplateOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl DeleteEmailTemplateOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteEmailTemplateOutput`](crate::output::DeleteEmailTemplateOutput).
    pub fn builder() -> crate::output::delete_email_template_output::Builder {
        crate::output::delete_email_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_email_template_output::Builder {
        crate::output::delete_email_template_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for DeleteEmailTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for DeleteEmailTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteEmailTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteEmailTemplateOutput`](crate::output::DeleteEmailTemplateOutput).
pub mod delete_email_template_output {

    /// A builder for [`DeleteEmailTemplateOutput`](crate::output::DeleteEmailTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`DeleteEmailTemplateOutput`](crate::output::DeleteEmailTemplateOutput).
        pub fn build(self) -> crate::output::DeleteEmailTemplateOutput {
            crate::output::DeleteEmailTemplateOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSmsTemplateOutput {
    pub(crate) create_template_message_body: ::std::option::Option<crate::model::CreateTemplateMessageBody>,
}
impl CreateSmsTemplateOutput {
    pub fn create_template_message_body(&self) -> ::std::option::Option<&crate::model::CreateTemplateMessageBody> {
        self.create_template_message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`CreateSmsTemplateOutput`](crate::output::CreateSmsTemplateOutput).
    pub fn builder() -> crate::output::create_sms_template_output::Builder {
        crate::output::create_sms_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::create_sms_template_output::Builder {
        crate::output::create_sms_template_output::Builder {
            create_template_message_body: self.create_template_message_body,
        }
    }
}
impl ::std::hash::Hash for CreateSmsTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.create_template_message_body, state);
    }
}
impl ::std::fmt::Display for CreateSmsTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("CreateTemplateMessageBody", &self.create_template_message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for CreateSmsTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`CreateSmsTemplateOutput`](crate::output::CreateSmsTemplateOutput).
pub mod create_sms_template_output {

    /// A builder for [`CreateSmsTemplateOutput`](crate::output::CreateSmsTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) create_template_message_body: ::std::option::Option<crate::model::CreateTemplateMessageBody>,
    }
    impl Builder {
        pub fn create_template_message_body(mut self, input: crate::model::CreateTemplateMessageBody) -> Self {
            self.create_template_message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_create_template_message_body(mut self, input: ::std::option::Option<crate::model::CreateTemplateMessageBody>) -> Self {
            self.create_template_message_body = input;
            self
        }
        pub fn get_create_template_message_body(&self) -> &::std::option::Option<crate::model::CreateTemplateMessageBody> {
            &self.create_template_message_body
        }
        /// Consumes the builder and constructs a [`CreateSmsTemplateOutput`](crate::output::CreateSmsTemplateOutput).
        pub fn build(self) -> crate::output::CreateSmsTemplateOutput {
            crate::output::CreateSmsTemplateOutput {
                create_template_message_body: self.create_template_message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetSmsTemplateOutput {
    pub(crate) sms_template_response: ::std::option::Option<crate::model::SMSTemplateResponse>,
}
impl GetSmsTemplateOutput {
    pub fn sms_template_response(&self) -> ::std::option::Option<&crate::model::SMSTemplateResponse> {
        self.sms_template_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`GetSmsTemplateOutput`](crate::output::GetSmsTemplateOutput).
    pub fn builder() -> crate::output::get_sms_template_output::Builder {
        crate::output::get_sms_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::get_sms_template_output::Builder {
        crate::output::get_sms_template_output::Builder {
            sms_template_response: self.sms_template_response,
        }
    }
}
impl ::std::hash::Hash for GetSmsTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.sms_template_response, state);
    }
}
impl ::std::fmt::Display for GetSmsTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("SMSTemplateResponse", &self.sms_template_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for GetSmsTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`GetSmsTemplateOutput`](crate::output::GetSmsTemplateOutput).
pub mod get_sms_template_output {

    /// A builder for [`GetSmsTemplateOutput`](crate::output::GetSmsTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sms_template_response: ::std::option::Option<crate::model::SMSTemplateResponse>,
    }
    impl Builder {
        pub fn sms_template_response(mut self, input: crate::model::SMSTemplateResponse) -> Self {
            self.sms_template_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_sms_template_response(mut self, input: ::std::option::Option<crate::model::SMSTemplateResponse>) -> Self {
            self.sms_template_response = input;
            self
        }
        pub fn get_sms_template_response(&self) -> &::std::option::Option<crate::model::SMSTemplateResponse> {
            &self.sms_template_response
        }
        /// Consumes the builder and constructs a [`GetSmsTemplateOutput`](crate::output::GetSmsTemplateOutput).
        pub fn build(self) -> crate::output::GetSmsTemplateOutput {
            crate::output::GetSmsTemplateOutput {
                sms_template_response: self.sms_template_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UpdateSmsTemplateOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl UpdateSmsTemplateOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`UpdateSmsTemplateOutput`](crate::output::UpdateSmsTemplateOutput).
    pub fn builder() -> crate::output::update_sms_template_output::Builder {
        crate::output::update_sms_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::update_sms_template_output::Builder {
        crate::output::update_sms_template_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for UpdateSmsTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for UpdateSmsTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UpdateSmsTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UpdateSmsTemplateOutput`](crate::output::UpdateSmsTemplateOutput).
pub mod update_sms_template_output {

    /// A builder for [`UpdateSmsTemplateOutput`](crate::output::UpdateSmsTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`UpdateSmsTemplateOutput`](crate::output::UpdateSmsTemplateOutput).
        pub fn build(self) -> crate::output::UpdateSmsTemplateOutput {
            crate::output::UpdateSmsTemplateOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSmsTemplateOutput {
    pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
}
impl DeleteSmsTemplateOutput {
    pub fn message_body(&self) -> ::std::option::Option<&crate::model::MessageBody> {
        self.message_body.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`DeleteSmsTemplateOutput`](crate::output::DeleteSmsTemplateOutput).
    pub fn builder() -> crate::output::delete_sms_template_output::Builder {
        crate::output::delete_sms_template_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::delete_sms_template_output::Builder {
        crate::output::delete_sms_template_output::Builder {
            message_body: self.message_body,
        }
    }
}
impl ::std::hash::Hash for DeleteSmsTemplateOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.message_body, state);
    }
}
impl ::std::fmt::Display for DeleteSmsTemplateOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("MessageBody", &self.message_body);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for DeleteSmsTemplateOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`DeleteSmsTemplateOutput`](crate::output::DeleteSmsTemplateOutput).
pub mod delete_sms_template_output {

    /// A builder for [`DeleteSmsTemplateOutput`](crate::output::DeleteSmsTemplateOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: ::std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = ::std::option::Option::Some(input);
            self
        }
        pub fn set_message_body(mut self, input: ::std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        pub fn get_message_body(&self) -> &::std::option::Option<crate::model::MessageBody> {
            &self.message_body
        }
        /// Consumes the builder and constructs a [`DeleteSmsTemplateOutput`](crate::output::DeleteSmsTemplateOutput).
        pub fn build(self) -> crate::output::DeleteSmsTemplateOutput {
            crate::output::DeleteSmsTemplateOutput {
                message_body: self.message_body,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListTemplatesOutput {
    pub(crate) templates_response: ::std::option::Option<crate::model::TemplatesResponse>,
}
impl ListTemplatesOutput {
    pub fn templates_response(&self) -> ::std::option::Option<&crate::model::TemplatesResponse> {
        self.templates_response.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ListTemplatesOutput`](crate::output::ListTemplatesOutput).
    pub fn builder() -> crate::output::list_templates_output::Builder {
        crate::output::list_templates_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::list_templates_output::Builder {
        crate::output::list_templates_output::Builder {
            templates_response: self.templates_response,
        }
    }
}
impl ::std::hash::Hash for ListTemplatesOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.templates_response, state);
    }
}
impl ::std::fmt::Display for ListTemplatesOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TemplatesResponse", &self.templates_response);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListTemplatesOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListTemplatesOutput`](crate::output::ListTemplatesOutput).
pub mod list_templates_output {

    /// A builder for [`ListTemplatesOutput`](crate::output::ListTemplatesOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) templates_response: ::std::option::Option<crate::model::TemplatesResponse>,
    }
    impl Builder {
        pub fn templates_response(mut self, input: crate::model::TemplatesResponse) -> Self {
            self.templates_response = ::std::option::Option::Some(input);
            self
        }
        pub fn set_templates_response(mut self, input: ::std::option::Option<crate::model::TemplatesResponse>) -> Self {
            self.templates_response = input;
            self
        }
        pub fn get_templates_response(&self) -> &::std::option::Option<crate::model::TemplatesResponse> {
            &self.templates_response
        }
        /// Consumes the builder and constructs a [`ListTemplatesOutput`](crate::output::ListTemplatesOutput).
        pub fn build(self) -> crate::output::ListTemplatesOutput {
            crate::output::ListTemplatesOutput {
                templates_response: self.templates_response,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListTagsForResourceOutput {
    pub(crate) tags_model: ::std::option::Option<crate::model::TagsModel>,
}
impl ListTagsForResourceOutput {
    pub fn tags_model(&self) -> ::std::option::Option<&crate::model::TagsModel> {
        self.tags_model.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder {
            tags_model: self.tags_model,
        }
    }
}
impl ::std::hash::Hash for ListTagsForResourceOutput {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags_model, state);
    }
}
impl ::std::fmt::Display for ListTagsForResourceOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("TagsModel", &self.tags_model);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for ListTagsForResourceOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
pub mod list_tags_for_resource_output {

    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) tags_model: ::std::option::Option<crate::model::TagsModel>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tags_model: self.tags_model,
            }
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct TagResourceOutput {
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput).
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder {}
    }
}
impl ::std::hash::Hash for TagResourceOutput {
    fn hash<H: ::std::hash::Hasher>(&self, _state: &mut H) {
    }
}
impl ::std::fmt::Display for TagResourceOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TagResourceOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput).
pub mod tag_resource_output {

    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput).
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {}
        }
    }
}

#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UntagResourceOutput {
}
impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput).
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder {}
    }
}
impl ::std::hash::Hash for UntagResourceOutput {
    fn hash<H: ::std::hash::Hasher>(&self, _state: &mut H) {
    }
}
impl ::std::fmt::Display for UntagResourceOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for UntagResourceOutput {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput).
pub mod untag_resource_output {

    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput).
        pub fn build(self) -> crate::output::UntagResourceOutput {
            crate::output::UntagResourceOutput {}
        }
    }
}
