//! Contact form model: field validation and the submit state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same `validate` runs in the browser before posting and on the server
//! in `POST /api/contact`, so both sides agree on what a valid request is.
//!
//! STATE MACHINE
//! =============
//! `Idle | Failed --begin_submit(valid)--> Submitting`
//! `Submitting --complete(Ok)--> Success` (fields cleared)
//! `Submitting --complete(Err)--> Failed` (fields kept, server field errors shown)
//! `Success --expire_success, SUCCESS_DISPLAY_MS later--> Idle`
//!
//! Every accepted submit gets a sequence number; completions and resets carry
//! it so a stale timer can never touch a newer submission.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::DoctorProfile;

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const SERVICE_UNKNOWN: &str = "Unknown service";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

/// Field-scoped validation messages.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw form values as typed. Also the JSON body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Selected service title; empty means "no preference".
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }
}

/// `<meta>` name the server uses to hand its policy to the hydrated form.
pub const POLICY_META_NAME: &str = "contact-phone-required";

/// Which optional rules apply.
///
/// The server owns the value. It renders it into the page head with
/// `meta_content`, and the browser reads it back with `from_meta_content`,
/// so both validators run the same rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPolicy {
    pub phone_required: bool,
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self { phone_required: true }
    }
}

impl ContactPolicy {
    #[must_use]
    pub fn meta_content(self) -> &'static str {
        if self.phone_required { "true" } else { "false" }
    }

    /// Missing or unrecognised content falls back to the default policy.
    #[must_use]
    pub fn from_meta_content(content: Option<&str>) -> Self {
        match content.map(str::trim) {
            Some("false") => Self { phone_required: false },
            Some("true") => Self { phone_required: true },
            _ => Self::default(),
        }
    }
}

/// A validated, trimmed request ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

/// Check every field and collect all failures.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(
    fields: &ContactFields,
    policy: ContactPolicy,
    profile: &DoctorProfile,
) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED.to_owned());
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED.to_owned());
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID.to_owned());
    }

    let phone = fields.phone.trim();
    if phone.is_empty() && policy.phone_required {
        errors.insert(Field::Phone, PHONE_REQUIRED.to_owned());
    }

    let service = fields.service.trim();
    if !service.is_empty() && !profile.offers_service(service) {
        errors.insert(Field::Service, SERVICE_UNKNOWN.to_owned());
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED.to_owned());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: non_empty(phone),
        service: non_empty(service),
        message: message.to_owned(),
    })
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Delivery failed; the message is shown above the submit button.
    Failed(String),
}

/// Why a delivery attempt failed: banner text plus any field errors the
/// server reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitFailure {
    pub message: String,
    pub errors: FieldErrors,
}

impl SubmitFailure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), errors: FieldErrors::new() }
    }
}

impl std::fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return f.write_str(&self.message);
        }
        let fields = self.errors.keys().map(|field| field.as_str()).collect::<Vec<_>>();
        write!(f, "{} ({})", self.message, fields.join(", "))
    }
}

/// A submission accepted by `begin_submit`, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub seq: u64,
    pub submission: ContactSubmission,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    seq: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field. Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and, if everything passes, move to `Submitting`.
    ///
    /// Returns `None` while a submission is already in flight or when
    /// validation fails (errors are recorded on the form).
    pub fn begin_submit(&mut self, policy: ContactPolicy, profile: &DoctorProfile) -> Option<PendingSubmission> {
        if self.is_submitting() {
            return None;
        }
        match validate(&self.fields, policy, profile) {
            Ok(submission) => {
                self.errors.clear();
                self.seq += 1;
                self.status = SubmitStatus::Submitting;
                Some(PendingSubmission { seq: self.seq, submission })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the delivery outcome for submission `seq`.
    ///
    /// On failure the server's field errors replace the local ones so the
    /// offending inputs are highlighted. Returns `false` if `seq` is not the
    /// in-flight submission.
    pub fn complete(&mut self, seq: u64, outcome: Result<(), SubmitFailure>) -> bool {
        if seq != self.seq || !self.is_submitting() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors.clear();
                self.status = SubmitStatus::Success;
            }
            Err(failure) => {
                self.errors = failure.errors;
                self.status = SubmitStatus::Failed(failure.message);
            }
        }
        true
    }

    /// Drop back to `Idle` if submission `seq` is still showing success.
    pub fn expire_success(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.status != SubmitStatus::Success {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}
