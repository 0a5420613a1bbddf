//! Environment configuration for the integration manager job.
//!
//! All inputs arrive as environment variables, the way the job is wired into
//! its Kubernetes manifest. `ACCESS_KEY`, `SECRET_KEY`, `CLUSTER_ID` and
//! `INTEGRATION_FLOW` are required; `IS_PROD` defaults to false and
//! `APP_API_URL` to the production API.

use crate::error::JobError;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default Firefly API base URL
pub const DEFAULT_API_URL: &str = "https://prodapi.gofirefly.io";

/// Which direction to drive the integration record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationFlow {
    /// Ensure the integration record is present
    Onboard,
    /// Ensure the integration record is absent
    Offboard,
}

impl FromStr for IntegrationFlow {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "onboard" => Ok(Self::Onboard),
            "offboard" => Ok(Self::Offboard),
            other => Err(JobError::InvalidConfig(format!(
                "INTEGRATION_FLOW must be one of: onboard, offboard (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for IntegrationFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onboard => write!(f, "onboard"),
            Self::Offboard => write!(f, "offboard"),
        }
    }
}

/// Job configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Firefly API base URL
    pub app_api_url: String,
    /// Access key issued by Firefly
    pub access_key: String,
    /// Secret key issued by Firefly
    pub secret_key: String,
    /// Unique cluster identifier
    pub cluster_id: String,
    /// Whether the cluster is a production environment
    pub is_prod: bool,
    /// Selected flow
    pub flow: IntegrationFlow,
}

impl Config {
    /// Load the configuration from environment variables.
    pub fn from_env() -> Result<Self, JobError> {
        Ok(Self {
            app_api_url: optional_var("APP_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_key: required_var("ACCESS_KEY")?,
            secret_key: required_var("SECRET_KEY")?,
            cluster_id: required_var("CLUSTER_ID")?,
            is_prod: parse_bool_var("IS_PROD", env::var("IS_PROD").ok())?,
            flow: required_var("INTEGRATION_FLOW")?.parse()?,
        })
    }
}

fn required_var(name: &str) -> Result<String, JobError> {
    env::var(name).map_err(|_| {
        JobError::InvalidConfig(format!("{name} environment variable is required"))
    })
}

/// An unset or empty variable both mean "use the default"
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_bool_var(name: &str, value: Option<String>) -> Result<bool, JobError> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(JobError::InvalidConfig(format!(
                "{name} must be a boolean (got {other:?})"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_parses_case_insensitively() {
        assert_eq!("onboard".parse::<IntegrationFlow>().unwrap(), IntegrationFlow::Onboard);
        assert_eq!("OFFBOARD".parse::<IntegrationFlow>().unwrap(), IntegrationFlow::Offboard);
    }

    #[test]
    fn test_unknown_flow_is_rejected() {
        let err = "reconcile".parse::<IntegrationFlow>().unwrap_err();
        assert!(matches!(err, JobError::InvalidConfig(_)));
    }

    #[test]
    fn test_is_prod_defaults_to_false() {
        assert!(!parse_bool_var("IS_PROD", None).unwrap());
        assert!(!parse_bool_var("IS_PROD", Some(String::new())).unwrap());
    }

    #[test]
    fn test_is_prod_accepts_common_spellings() {
        assert!(parse_bool_var("IS_PROD", Some("true".to_string())).unwrap());
        assert!(parse_bool_var("IS_PROD", Some("TRUE".to_string())).unwrap());
        assert!(parse_bool_var("IS_PROD", Some("1".to_string())).unwrap());
        assert!(!parse_bool_var("IS_PROD", Some("false".to_string())).unwrap());
        assert!(!parse_bool_var("IS_PROD", Some("0".to_string())).unwrap());
    }

    #[test]
    fn test_is_prod_rejects_garbage() {
        let err = parse_bool_var("IS_PROD", Some("yes please".to_string())).unwrap_err();
        assert!(matches!(err, JobError::InvalidConfig(_)));
    }
}
