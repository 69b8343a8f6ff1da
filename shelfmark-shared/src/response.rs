//! What the backend answers to borrow/return/delete/logout and to the auth forms
//!
//! The backend answers every action with a JSON object and uses the presence of a key to say
//! what happened. It is turned into an outcome here, checked in this order:
//! 1. `redirect`: navigate there (e.g. to the login page for anonymous users)
//! 2. `log_error`: hard error; show the generic message, the detail goes to the console
//! 3. `modal_error`: soft error; show the message as it is
//! 4. anything else: success
//!
//! A non-2xx status is never a success, whatever the body says.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::GENERIC_ERROR_MESSAGE;

/// The raw answer to a modal action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub log_error: Option<String>,
    #[serde(default)]
    pub modal_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Redirect(String),
    /// The message for the user is always [`GENERIC_ERROR_MESSAGE`]; this holds the detail
    HardError(String),
    SoftError(String),
    Success,
}
impl ActionOutcome {
    /// Classify an answer together with the HTTP status it came with
    pub fn from_reply(status: u16, reply: ActionResponse) -> Self {
        match Self::from(reply) {
            Self::Success if !is_success_status(status) => {
                Self::HardError(format!("Backend answered with status {status}"))
            }
            outcome => outcome,
        }
    }
}
impl From<ActionResponse> for ActionOutcome {
    fn from(value: ActionResponse) -> Self {
        if let Some(url) = value.redirect {
            Self::Redirect(url)
        } else if let Some(detail) = value.log_error {
            Self::HardError(detail)
        } else if let Some(msg) = value.modal_error {
            Self::SoftError(msg)
        } else {
            Self::Success
        }
    }
}

/// What the modal does with an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    Navigate(String),
    /// The page shows stale data after a successful action
    Reload,
    /// Stay open with `message`; `log` goes to the console
    Show {
        message: String,
        log: Option<String>,
    },
}
impl From<ActionOutcome> for ModalEffect {
    fn from(value: ActionOutcome) -> Self {
        match value {
            ActionOutcome::Redirect(url) => Self::Navigate(url),
            ActionOutcome::HardError(detail) => Self::Show {
                message: GENERIC_ERROR_MESSAGE.to_string(),
                log: Some(detail),
            },
            ActionOutcome::SoftError(message) => Self::Show { message, log: None },
            ActionOutcome::Success => Self::Reload,
        }
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The raw answer to a login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// field name -> the first error message for it
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Redirect(String),
    /// Validation errors per form field
    FieldErrors(BTreeMap<String, String>),
    HardError(String),
}
impl From<AuthResponse> for AuthOutcome {
    fn from(value: AuthResponse) -> Self {
        match (value.success, value.redirect_url) {
            (true, Some(url)) => Self::Redirect(url),
            (true, None) => Self::Redirect("/".to_string()),
            (false, _) if !value.errors.is_empty() => Self::FieldErrors(value.errors),
            (false, _) => Self::HardError("The backend rejected the form without naming a field".to_string()),
        }
    }
}

impl AuthOutcome {
    /// Classify an answer together with the HTTP status it came with
    ///
    /// Validation errors come with a 4xx status, so only a claimed success is rejected.
    pub fn from_reply(status: u16, reply: AuthResponse) -> Self {
        match Self::from(reply) {
            Self::Redirect(_) if !is_success_status(status) => {
                Self::HardError(format!("Backend answered with status {status}"))
            }
            outcome => outcome,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn outcome(json: &str) -> ActionOutcome {
        serde_json::from_str::<ActionResponse>(json)
            .expect("valid test json")
            .into()
    }

    #[test]
    fn modal_error_is_shown_verbatim() {
        let o = outcome(r#"{"success": false, "modal_error": "x"}"#);
        assert_eq!(o, ActionOutcome::SoftError("x".to_string()));
    }

    #[test]
    fn unknown_answer_is_success() {
        assert_eq!(outcome("{}"), ActionOutcome::Success);
        assert_eq!(outcome(r#"{"success": true, "other": 1}"#), ActionOutcome::Success);
    }

    fn effect(json: &str) -> ModalEffect {
        outcome(json).into()
    }

    #[test]
    fn modal_error_stays_open_without_reload() {
        assert_eq!(
            effect(r#"{"success": false, "modal_error": "x"}"#),
            ModalEffect::Show {
                message: "x".to_string(),
                log: None
            }
        );
    }

    #[test]
    fn unrecognised_answer_reloads() {
        assert_eq!(effect("{}"), ModalEffect::Reload);
        assert_eq!(effect(r#"{"success": true, "other": 1}"#), ModalEffect::Reload);
        assert_eq!(
            effect(r#"{"redirect": "/login/?next=/library/"}"#),
            ModalEffect::Navigate("/login/?next=/library/".to_string())
        );
    }

    #[test]
    fn hard_error_logs_the_detail() {
        assert_eq!(
            effect(r#"{"log_error": "boom"}"#),
            ModalEffect::Show {
                message: GENERIC_ERROR_MESSAGE.to_string(),
                log: Some("boom".to_string())
            }
        );
        // a failed request without recognised keys must not reload either
        assert!(matches!(
            ModalEffect::from(ActionOutcome::from_reply(400, ActionResponse::default())),
            ModalEffect::Show { log: Some(_), .. }
        ));
    }

    #[test]
    fn failed_status_is_never_success() {
        let reply: ActionResponse =
            serde_json::from_str(r#"{"error": "User is not authenticated"}"#)
                .expect("valid test json");
        let o = ActionOutcome::from_reply(400, reply.clone());
        assert!(matches!(o, ActionOutcome::HardError(_)), "got {o:?}");
        assert!(matches!(
            ModalEffect::from(o),
            ModalEffect::Show { message, .. } if message == GENERIC_ERROR_MESSAGE
        ));
        assert_eq!(
            ActionOutcome::from_reply(500, ActionResponse::default()),
            ActionOutcome::HardError("Backend answered with status 500".to_string())
        );
        assert_eq!(ActionOutcome::from_reply(200, reply), ActionOutcome::Success);

        // keys the backend sets still count on an error status
        let soft: ActionResponse =
            serde_json::from_str(r#"{"modal_error": "x"}"#).expect("valid test json");
        assert_eq!(
            ActionOutcome::from_reply(403, soft),
            ActionOutcome::SoftError("x".to_string())
        );
    }

    #[test]
    fn auth_validation_errors_keep_their_status() {
        let bad: AuthResponse =
            serde_json::from_str(r#"{"success": false, "errors": {"username": "Taken"}}"#)
                .expect("valid test json");
        assert!(matches!(
            AuthOutcome::from_reply(400, bad),
            AuthOutcome::FieldErrors(_)
        ));
        let claimed: AuthResponse =
            serde_json::from_str(r#"{"success": true}"#).expect("valid test json");
        assert!(matches!(
            AuthOutcome::from_reply(500, claimed),
            AuthOutcome::HardError(_)
        ));
    }

    #[test]
    fn redirect_wins() {
        // deleting a book answers with success and a redirect to the library
        assert_eq!(
            outcome(r#"{"success": true, "redirect": "/library/"}"#),
            ActionOutcome::Redirect("/library/".to_string())
        );
        assert_eq!(
            outcome(r#"{"redirect": "/login/", "modal_error": "x"}"#),
            ActionOutcome::Redirect("/login/".to_string())
        );
    }

    #[test]
    fn log_error_hides_the_detail() {
        let o = outcome(r#"{"log_error": "An error has occurred!\nboom", "modal_error": "x"}"#);
        assert_eq!(o, ActionOutcome::HardError("An error has occurred!\nboom".to_string()));
        assert_eq!(
            ModalEffect::from(o),
            ModalEffect::Show {
                message: "An error has occurred!".to_string(),
                log: Some("An error has occurred!\nboom".to_string())
            }
        );
    }

    #[test]
    fn auth_answers() {
        let ok: AuthResponse =
            serde_json::from_str(r#"{"success": true, "redirect_url": "/your-borrows"}"#)
                .expect("valid test json");
        assert_eq!(
            AuthOutcome::from(ok),
            AuthOutcome::Redirect("/your-borrows".to_string())
        );

        let bad: AuthResponse = serde_json::from_str(
            r#"{"success": false, "errors": {"password": "Invalid username or password"}}"#,
        )
        .expect("valid test json");
        match AuthOutcome::from(bad) {
            AuthOutcome::FieldErrors(errs) => {
                assert_eq!(errs.get("password").map(String::as_str), Some("Invalid username or password"))
            }
            other => panic!("expected field errors, got {other:?}"),
        }

        assert!(matches!(
            AuthOutcome::from(AuthResponse::default()),
            AuthOutcome::HardError(_)
        ));
    }
}
