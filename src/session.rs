//! Session State
//!
//! Authentication flag and profile record of the current user. The
//! dashboard only reads this; whoever owns sign-in passes it in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Current user session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Profile record. Every field except the name may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Membership start rendered as "<Month> <Year>"
    pub fn joined(mut self, date: NaiveDate) -> Self {
        self.member_since = Some(date.format("%B %Y").to_string());
        self
    }
}

impl Session {
    /// Authenticated session for a freshly signed-in user
    pub fn sign_in(name: impl Into<String>, joined: NaiveDate) -> Self {
        Self::authenticated(UserProfile::new(name).joined(joined))
    }

    pub fn authenticated(profile: UserProfile) -> Self {
        Self {
            authenticated: true,
            profile: Some(profile),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Decode a persisted session
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Profile, but only while authenticated
    pub fn user(&self) -> Option<&UserProfile> {
        if self.authenticated {
            self.profile.as_ref()
        } else {
            None
        }
    }
}
