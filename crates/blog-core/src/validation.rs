//! Explicit input validation.
//!
//! Length/shape constraints live here as plain functions invoked by the
//! router before any store call, producing structured per-field messages.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// One failed field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulates per-field failures and yields `DomainError::Validation`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.trim().is_empty() => {}
            _ => self.fail(field, format!("{field} is required")),
        }
        self
    }

    pub fn length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        max: Option<usize>,
    ) -> &mut Self {
        let len = value.trim().chars().count();
        if len < min {
            self.fail(field, format!("{field} must be at least {min} characters"));
        } else if let Some(max) = max
            && len > max
        {
            self.fail(field, format!("{field} must be at most {max} characters"));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !EMAIL_RE.is_match(value.trim()) {
            self.fail(field, "invalid email format".to_string());
        }
        self
    }

    pub fn fail(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }

    pub fn finish(&mut self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("name", Some(name)).length("name", name, 2, Some(50));
    v.require("email", Some(email)).email("email", email);
    v.require("password", Some(password));
    validate_password_field(&mut v, "password", password);
    v.finish()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("email", Some(email)).email("email", email);
    v.require("password", Some(password));
    v.finish()
}

pub fn validate_password_change(current: &str, new: &str) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("currentPassword", Some(current));
    v.require("newPassword", Some(new));
    validate_password_field(&mut v, "newPassword", new);
    v.finish()
}

fn validate_password_field(v: &mut Validator, field: &'static str, password: &str) {
    if !password.is_empty() && password.chars().count() < 6 {
        v.fail(field, format!("{field} must be at least 6 characters"));
    }
}

pub fn validate_article(title: &str, content: &str, description: Option<&str>) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("title", Some(title)).length("title", title, 5, Some(200));
    v.require("content", Some(content)).length("content", content, 50, None);
    if let Some(description) = description {
        v.length("description", description, 0, Some(500));
    }
    v.finish()
}

/// Partial-update variant: only present fields are checked.
pub fn validate_article_update(
    title: Option<&str>,
    content: Option<&str>,
    description: Option<&str>,
) -> Result<(), DomainError> {
    let mut v = Validator::new();
    if let Some(title) = title {
        v.length("title", title, 5, Some(200));
    }
    if let Some(content) = content {
        v.length("content", content, 50, None);
    }
    if let Some(description) = description
        && !description.trim().is_empty()
    {
        v.length("description", description, 0, Some(500));
    }
    v.finish()
}

pub fn validate_comment(content: &str) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("content", Some(content)).length("content", content, 1, Some(1000));
    v.finish()
}

pub fn validate_portfolio(title: &str, content: &str) -> Result<(), DomainError> {
    let mut v = Validator::new();
    v.require("title", Some(title)).length("title", title, 3, Some(100));
    v.require("content", Some(content)).length("content", content, 20, None);
    v.finish()
}

/// Partial-update variant: only present fields are checked.
pub fn validate_portfolio_update(
    title: Option<&str>,
    content: Option<&str>,
) -> Result<(), DomainError> {
    let mut v = Validator::new();
    if let Some(title) = title {
        v.length("title", title, 3, Some(100));
    }
    if let Some(content) = content {
        v.length("content", content, 20, None);
    }
    v.finish()
}

pub fn validate_profile_update(name: Option<&str>, email: Option<&str>) -> Result<(), DomainError> {
    let mut v = Validator::new();
    if let Some(name) = name {
        v.length("name", name, 2, Some(50));
    }
    if let Some(email) = email {
        v.email("email", email);
    }
    v.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: DomainError) -> Vec<&'static str> {
        match err {
            DomainError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn registration_happy_path() {
        assert!(validate_registration("Ana", "ana@x.com", "secret1").is_ok());
    }

    #[test]
    fn registration_collects_every_bad_field() {
        let err = validate_registration("A", "not-an-email", "123").unwrap_err();
        assert_eq!(fields(err), vec!["name", "email", "password"]);
    }

    #[test]
    fn missing_fields_are_required() {
        let err = validate_registration("", "", "").unwrap_err();
        let fields = fields(err);
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn email_shape() {
        assert!(validate_login("ana@x.com", "p").is_ok());
        assert!(validate_login("ana@x", "p").is_err());
        assert!(validate_login("ana x@y.com", "p").is_err());
    }

    #[test]
    fn article_limits() {
        let long_enough = "x".repeat(50);
        assert!(validate_article("Valid Title", &long_enough, None).is_ok());
        assert_eq!(
            fields(validate_article("Hey", "too short", None).unwrap_err()),
            vec!["title", "content"]
        );
        let over = "d".repeat(501);
        assert_eq!(
            fields(validate_article("Valid Title", &long_enough, Some(&over)).unwrap_err()),
            vec!["description"]
        );
    }

    #[test]
    fn comment_limits() {
        assert!(validate_comment("hi").is_ok());
        assert!(validate_comment("   ").is_err());
        assert!(validate_comment(&"c".repeat(1001)).is_err());
    }

    #[test]
    fn profile_update_checks_only_present_fields() {
        assert!(validate_profile_update(None, None).is_ok());
        assert!(validate_profile_update(Some("A"), None).is_err());
        assert!(validate_profile_update(None, Some("bad")).is_err());
    }
}
