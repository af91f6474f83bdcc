use std::future::Future;

use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

pub const SAVED_NOTICE: &str = "Saved successfully.";

/// Inline state of one create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `form` locally, then runs `action`.
    ///
    /// Returns the created/updated entity on success. On failure the
    /// message lands in `error` and `None` is returned, so the caller stays
    /// on the form. A second submit while one is running is ignored.
    pub async fn submit<V, T, F, Fut>(&mut self, form: &V, action: F) -> Option<T>
    where
        V: Validate,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if self.submitting {
            return None;
        }
        self.notice = None;

        if let Err(errors) = form.validate() {
            self.error = Some(validation_message(&errors));
            return None;
        }

        let result = {
            let _submitting = Submitting::begin(&mut self.submitting);
            action().await
        };

        match result {
            Ok(value) => {
                self.error = None;
                self.notice = Some(SAVED_NOTICE.to_string());
                Some(value)
            }
            Err(e) => {
                warn!("Form submission failed: {}", e);
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Clears messages, e.g. after navigating back to a fresh form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Holds `submitting` up until the action finishes or is dropped.
struct Submitting<'a>(&'a mut bool);

impl<'a> Submitting<'a> {
    fn begin(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Flattens field errors into one banner string, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, messages)| messages)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate(form: &impl Validate) -> Result<(), ApiError> {
    form.validate()
        .map_err(|errors| ApiError::Validation(validation_message(&errors)))
}
