/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration for Amazon Pinpoint.

use aws_types::os_shim_internal::Env;
use aws_types::region::{EnvironmentProvider, Region, SigningRegion};
use aws_types::SigningService;

/// Endpoint used when no region could be resolved.
pub const DEFAULT_ENDPOINT: &str = "https://pinpoint.us-east-1.amazonaws.com";

const SIGNING_SERVICE: SigningService = SigningService::from_static("mobiletargeting");

/// Configuration for Amazon Pinpoint requests.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint_url: Option<String>,
    pub(crate) app_name: Option<String>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Loads the configuration from the process environment.
    ///
    /// The region is read from `AWS_REGION`, then `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    /// The URL requests are sent to.
    ///
    /// An explicit override wins. Otherwise the URL is derived from the region, and without a
    /// region the service's default endpoint is used.
    pub fn endpoint_url(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => format!("https://pinpoint.{}.amazonaws.com", region),
            (None, None) => DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn signing_region(&self) -> Option<SigningRegion> {
        self.region.clone().map(SigningRegion::from)
    }

    pub fn signing_service(&self) -> SigningService {
        SIGNING_SERVICE
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    app_name: Option<String>,
    env: Option<Env>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region explicitly. The environment is not consulted when a region is set.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Overrides the endpoint derived from the region.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Replaces the process environment used to find a region.
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Config {
        let region = match self.region {
            Some(region) => Some(region),
            None => EnvironmentProvider::with_env(self.env.unwrap_or_default()).region(),
        };
        match &region {
            Some(region) => tracing::debug!(region = %region, "resolved region"),
            None if self.endpoint_url.is_none() => {
                tracing::warn!(endpoint = DEFAULT_ENDPOINT, "no region configured, using the default endpoint")
            }
            None => {}
        }
        Config {
            region,
            endpoint_url: self.endpoint_url,
            app_name: self.app_name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, DEFAULT_ENDPOINT};
    use aws_types::os_shim_internal::Env;
    use aws_types::region::Region;
    use tracing_test::traced_test;

    #[test]
    fn endpoint_from_region() {
        let config = Config::builder()
            .region(Region::from_static("eu-central-1"))
            .build();
        assert_eq!(
            config.endpoint_url(),
            "https://pinpoint.eu-central-1.amazonaws.com"
        );
        assert_eq!(
            config.signing_region().as_ref().map(|r| r.as_ref()),
            Some("eu-central-1")
        );
        assert_eq!(config.signing_service().as_ref(), "mobiletargeting");
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = Config::builder()
            .region(Region::from_static("us-west-2"))
            .endpoint_url("http://localhost:8000")
            .app_name("campaign-tool")
            .build();
        assert_eq!(config.endpoint_url(), "http://localhost:8000");
        assert_eq!(config.app_name(), Some("campaign-tool"));
    }

    #[test]
    #[traced_test]
    fn region_loaded_from_env() {
        let config = Config::builder()
            .env(Env::from_slice(&[("AWS_DEFAULT_REGION", "ap-northeast-1")]))
            .build();
        assert_eq!(config.region(), Some(&Region::new("ap-northeast-1")));
        assert!(logs_contain("resolved region"));
    }

    #[test]
    fn padded_env_region_builds_clean_endpoint() {
        let config = Config::builder()
            .env(Env::from_slice(&[("AWS_REGION", " us-west-2 ")]))
            .build();
        assert_eq!(
            config.endpoint_url(),
            "https://pinpoint.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn explicit_region_ignores_env() {
        let config = Config::builder()
            .region(Region::from_static("us-east-2"))
            .env(Env::from_slice(&[("AWS_REGION", "eu-west-1")]))
            .build();
        assert_eq!(config.region(), Some(&Region::from_static("us-east-2")));
    }

    #[test]
    #[traced_test]
    fn missing_region_uses_default_endpoint() {
        let config = Config::builder().env(Env::from_slice(&[])).build();
        assert_eq!(config.region(), None);
        assert_eq!(config.endpoint_url(), DEFAULT_ENDPOINT);
        assert!(logs_contain("no region configured"));
    }
}
