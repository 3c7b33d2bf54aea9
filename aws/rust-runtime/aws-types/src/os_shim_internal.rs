/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstraction over the process environment so that configuration loading can be tested without
//! touching global state.

use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process, and, as such, are difficult to test with a multi-
/// threaded test runner like Rust's. This enables loading environment variables either from the
/// actual process environment ([`std::env::var`]) or from a hash map.
///
/// Cloning is cheap: a faked environment is shared behind an `Arc`.
#[derive(Clone)]
pub struct Env(Arc<Inner>);

enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            Inner::Real => f.write_str("Env::Real"),
            // values may hold secrets, only print the names
            Inner::Fake(vars) => {
                let mut names: Vec<_> = vars.keys().collect();
                names.sort();
                f.debug_tuple("Env::Fake").field(&names).finish()
            }
        }
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[
    ///     ("HOME", "/home/myname"),
    ///     ("AWS_REGION", "us-west-2")
    /// ]);
    /// assert_eq!(mock_env.get("AWS_REGION").unwrap(), "us-west-2");
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that uses the real process environment
    ///
    /// Calls will be delegated to [`std::env::var`].
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(Inner::Fake(hash_map)))
    }
}

#[cfg(test)]
mod test {
    use super::Env;
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn fake_env() {
        let env = Env::from_slice(&[("FOO", "BAR")]);
        assert_eq!(env.get("FOO").unwrap(), "BAR");
        assert_eq!(
            env.get("OTHER").expect_err("not present"),
            VarError::NotPresent
        )
    }

    #[test]
    fn debug_hides_values() {
        let mut vars = HashMap::new();
        vars.insert("AWS_SECRET_ACCESS_KEY".to_string(), "shh".to_string());
        let env = Env::from(vars);
        let rendered = format!("{:?}", env);
        assert!(rendered.contains("AWS_SECRET_ACCESS_KEY"));
        assert!(!rendered.contains("shh"));
    }
}
