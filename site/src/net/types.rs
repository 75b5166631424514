//! Wire types for `POST /api/contact`.
//!
//! The request body is `state::contact::ContactFields`; this module holds the
//! response envelope both the handler and the browser agree on.

use serde::{Deserialize, Serialize};

use crate::state::contact::FieldErrors;

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, ..Self::default() }
    }

    #[must_use]
    pub fn invalid(errors: FieldErrors) -> Self {
        Self { ok: false, errors, message: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { ok: false, errors: FieldErrors::new(), message: Some(message.into()) }
    }
}
