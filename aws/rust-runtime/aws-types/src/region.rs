/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Loads a [`Region`] from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    /// Reads from the real process environment.
    pub fn new() -> Self {
        Self::with_env(Env::real())
    }

    /// Reads from `env`, usually a fake environment in tests.
    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }

    pub fn region(&self) -> Option<Region> {
        for var in ["AWS_REGION", "AWS_DEFAULT_REGION"] {
            let value = match self.env.get(var) {
                Ok(value) => value,
                Err(_) => continue,
            };
            let region = value.trim();
            if region.is_empty() {
                tracing::warn!(source = var, "ignoring empty region");
                continue;
            }
            tracing::debug!(source = var, region = %region, "loaded region from environment");
            return Some(Region::new(region.to_string()));
        }
        None
    }
}

/// The region to use when signing requests
///
/// Generally, user code will not need to interact with `SigningRegion`. See [`Region`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

#[cfg(test)]
mod test {
    use super::{EnvironmentProvider, Region, SigningRegion};
    use crate::os_shim_internal::Env;
    use tracing_test::traced_test;

    fn provider(vars: &[(&str, &str)]) -> EnvironmentProvider {
        EnvironmentProvider::with_env(Env::from_slice(vars))
    }

    #[test]
    fn no_region() {
        assert_eq!(provider(&[]).region(), None);
    }

    #[test]
    fn prefer_aws_region() {
        let region = provider(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-east-2"),
        ])
        .region();
        assert_eq!(region, Some(Region::new("eu-west-1")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let region = provider(&[("AWS_DEFAULT_REGION", "us-east-2")]).region();
        assert_eq!(region, Some(Region::from_static("us-east-2")));
    }

    #[test]
    #[traced_test]
    fn empty_region_is_ignored() {
        let region = provider(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "ap-south-1")]).region();
        assert_eq!(region, Some(Region::new("ap-south-1")));
        assert!(logs_contain("ignoring empty region"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let region = provider(&[("AWS_REGION", " us-west-2\n")]).region();
        assert_eq!(region, Some(Region::from_static("us-west-2")));
        let blank = provider(&[("AWS_REGION", "   "), ("AWS_DEFAULT_REGION", "eu-north-1")]).region();
        assert_eq!(blank, Some(Region::from_static("eu-north-1")));
    }

    #[test]
    fn signing_region_matches_region() {
        let signing: SigningRegion = Region::from_static("us-west-2").into();
        assert_eq!(signing.as_ref(), "us-west-2");
    }
}
