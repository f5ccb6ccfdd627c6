//! Field rules for every payload the entry form and the API accept.
//!
//! Validators read untyped JSON and never stop at the first failure: every
//! violated field is collected into one [`ValidationError`] so the form can
//! show all inline errors at once. Field paths use `key`, `list[0].key`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{ContactForm, NewUser, PortfolioData, Project, SocialMedia};

// Local part from [A-Z0-9_'+-.], last char not a dot, dotted domain, 2+ letter TLD.
// Leading dots and ".." are rejected separately since `regex` has no lookaround.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

const REQUIRED: &str = "Required";
const INVALID_URL: &str = "Must be a valid URL";
const INVALID_EMAIL: &str = "Must be a valid email";

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation for a single payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Paths of the failing fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation error: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if err.field.is_empty() {
                f.write_str(&err.message)?;
            } else {
                write!(f, "{} at \"{}\"", err.message, err.field)?;
            }
        }
        Ok(())
    }
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

pub fn validate_portfolio(raw: &Value) -> Result<PortfolioData, ValidationError> {
    let mut v = Validator::default();
    let Some(obj) = v.object("", raw) else {
        return v.finish(None);
    };

    let name = v.text(obj, "", "name", "Name is required");
    let short_bio = v.text(obj, "", "shortBio", "Short bio is required");
    let full_bio = v.optional_string(obj, "", "fullBio");
    let profile_picture = v.optional_url(obj, "", "profilePicture");
    let skills = v.optional_string(obj, "", "skills");
    let interests = v.optional_string(obj, "", "interests");

    let mut projects = Vec::new();
    if let Some(items) = v.array(obj, "", "projects") {
        if items.is_empty() {
            v.push("projects", "At least one project is required");
        }
        for (i, item) in items.iter().enumerate() {
            let path = format!("projects[{}]", i);
            if let Some(project) = v.object(&path, item) {
                projects.push(Project {
                    title: v.text(project, &path, "title", "Project title is required"),
                    description: v.text(
                        project,
                        &path,
                        "description",
                        "Project description is required",
                    ),
                    image: v.optional_url(project, &path, "image"),
                    github: v.optional_url(project, &path, "github"),
                });
            }
        }
    }

    let mut social_media = Vec::new();
    if let Some(items) = v.array(obj, "", "socialMedia") {
        for (i, item) in items.iter().enumerate() {
            let path = format!("socialMedia[{}]", i);
            if let Some(entry) = v.object(&path, item) {
                social_media.push(SocialMedia {
                    name: v.text(entry, &path, "name", "Platform name is required"),
                    url: v.url(entry, &path, "url"),
                });
            }
        }
    }

    let contact_email = v.optional_email(obj, "", "contactEmail");

    v.finish(Some(PortfolioData {
        name,
        short_bio,
        full_bio,
        profile_picture,
        skills,
        interests,
        projects,
        social_media,
        contact_email,
    }))
}

pub fn validate_contact_form(raw: &Value) -> Result<ContactForm, ValidationError> {
    let mut v = Validator::default();
    let Some(obj) = v.object("", raw) else {
        return v.finish(None);
    };

    let name = v.text(obj, "", "name", "Name is required");
    let email = v.email(obj, "", "email");
    let message = v.text(obj, "", "message", "Message is required");

    v.finish(Some(ContactForm {
        name,
        email,
        message,
    }))
}

/// Usernames and passwords only need to be present; uniqueness is the
/// caller's concern.
pub fn validate_new_user(raw: &Value) -> Result<NewUser, ValidationError> {
    let mut v = Validator::default();
    let Some(obj) = v.object("", raw) else {
        return v.finish(None);
    };

    let username = v.string(obj, "", "username").unwrap_or_default();
    let password = v.string(obj, "", "password").unwrap_or_default();

    v.finish(Some(NewUser { username, password }))
}

/// Accumulates field errors while reading a JSON object.
///
/// Readers return a placeholder after recording an error; the placeholder is
/// discarded by [`Validator::finish`] whenever any error was recorded.
#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError {
                errors: self.errors,
            }),
        }
    }

    fn object<'a>(&mut self, path: &str, value: &'a Value) -> Option<&'a Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.push(path, format!("Expected object, received {}", type_name(other)));
                None
            }
        }
    }

    /// Required string of any content.
    fn string(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> Option<String> {
        let path = join(parent, key);
        match obj.get(key) {
            None => {
                self.push(path, REQUIRED);
                None
            }
            Some(value) => self.as_string(path, value),
        }
    }

    /// Absent is fine; present must be a string.
    fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<String> {
        obj.get(key)
            .and_then(|value| self.as_string(join(parent, key), value))
    }

    fn as_string(&mut self, path: String, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.push(path, format!("Expected string, received {}", type_name(other)));
                None
            }
        }
    }

    /// Required non-empty string.
    fn text(&mut self, obj: &Map<String, Value>, parent: &str, key: &str, message: &str) -> String {
        let value = self.string(obj, parent, key).unwrap_or_default();
        if obj.get(key).is_some_and(Value::is_string) && value.is_empty() {
            self.push(join(parent, key), message);
        }
        value
    }

    fn url(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> String {
        let value = self.string(obj, parent, key);
        if let Some(s) = &value {
            if !is_valid_url(s) {
                self.push(join(parent, key), INVALID_URL);
            }
        }
        value.unwrap_or_default()
    }

    /// Absent, empty, or a valid URL.
    fn optional_url(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<String> {
        let value = self.optional_string(obj, parent, key)?;
        if !value.is_empty() && !is_valid_url(&value) {
            self.push(join(parent, key), INVALID_URL);
        }
        Some(value)
    }

    fn email(&mut self, obj: &Map<String, Value>, parent: &str, key: &str) -> String {
        let value = self.string(obj, parent, key);
        if let Some(s) = &value {
            if !is_valid_email(s) {
                self.push(join(parent, key), INVALID_EMAIL);
            }
        }
        value.unwrap_or_default()
    }

    /// Absent, empty, or a valid email.
    fn optional_email(
        &mut self,
        obj: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<String> {
        let value = self.optional_string(obj, parent, key)?;
        if !value.is_empty() && !is_valid_email(&value) {
            self.push(join(parent, key), INVALID_EMAIL);
        }
        Some(value)
    }

    fn array<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<&'a Vec<Value>> {
        let path = join(parent, key);
        match obj.get(key) {
            None => {
                self.push(path, REQUIRED);
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.push(path, format!("Expected array, received {}", type_name(other)));
                None
            }
        }
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
