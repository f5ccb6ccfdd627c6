use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Portfolio payload --

/// A link to one of the owner's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Profile, projects and social links as submitted by the entry form.
///
/// Only values produced by [`crate::validate::validate_portfolio`] should be
/// handed to storage; the type itself does not enforce the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub name: String,
    pub short_bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    pub projects: Vec<Project>,
    pub social_media: Vec<SocialMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl PortfolioData {
    /// Skills as rendered on the page: comma-separated, trimmed, blanks dropped.
    pub fn skill_list(&self) -> Vec<&str> {
        split_list(self.skills.as_deref())
    }

    pub fn interest_list(&self) -> Vec<&str> {
        split_list(self.interests.as_deref())
    }
}

fn split_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

// -- Contact --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated contact form bound to the portfolio it was sent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub portfolio_id: i64,
    pub form: ContactForm,
}

// -- Persisted entities --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: i64,
    pub user_id: Option<i64>,
    pub data: PortfolioData,
}

/// Contact messages are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub portfolio_id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioData {
        PortfolioData {
            name: "Ada".into(),
            short_bio: "Engineer".into(),
            full_bio: None,
            profile_picture: None,
            skills: Some("Rust, , SQL ,Go".into()),
            interests: None,
            projects: vec![Project {
                title: "X".into(),
                description: "Y".into(),
                image: None,
                github: Some(String::new()),
            }],
            social_media: vec![],
            contact_email: None,
        }
    }

    #[test]
    fn skill_list_trims_and_drops_blanks() {
        let data = sample();
        assert_eq!(data.skill_list(), vec!["Rust", "SQL", "Go"]);
        assert!(data.interest_list().is_empty());
    }

    #[test]
    fn portfolio_serializes_camel_case_and_omits_absent_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["shortBio"], "Engineer");
        assert_eq!(value["socialMedia"], serde_json::json!([]));
        assert!(value.get("fullBio").is_none());
        assert_eq!(value["projects"][0]["github"], "");
        assert!(value["projects"][0].get("image").is_none());
    }

    #[test]
    fn user_password_is_never_serialized() {
        let user = User {
            id: 1,
            username: "ada".into(),
            password: "hunter2".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "ada");
    }
}
