//! Iterable response bodies, modelled as optional-field structures.
//!
//! Every field is optional; a body that does not fit the shape at all is
//! treated as carrying no detail instead of being an error. A single known
//! field of the wrong type is dropped on its own so the remaining rejection
//! lists still apply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a bulk track / bulk user-update response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterableBulkResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub success_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fail_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_user_ids: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub disallowed_event_names: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub failed_updates: Option<FailedUpdates>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedUpdates {
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_user_ids: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub not_found_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub not_found_user_ids: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub forgotten_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub forgotten_user_ids: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub conflict_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub conflict_user_ids: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_data_emails: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub invalid_data_user_ids: Option<Vec<Value>>,
}

/// Field-level fallback: a value of the wrong type reads as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value::<Option<T>>(value) {
        Ok(parsed) => Ok(parsed),
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Ignoring mistyped field in Iterable bulk response"
            );
            Ok(None)
        }
    }
}

/// Rejected identifiers found under one response path
pub type LabeledList<'a> = (&'static str, &'a [Value]);

impl IterableBulkResponse {
    /// Parse a raw body; `None` when the body does not match the shape
    pub fn parse(body: &Value) -> Option<Self> {
        match serde_json::from_value(body.clone()) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "Iterable bulk response did not match the expected shape; no per-item detail available"
                );
                None
            }
        }
    }

    /// The destination explicitly reported zero failures
    pub fn reports_no_failures(&self) -> bool {
        self.fail_count == Some(0)
    }

    pub fn user_id_lists(&self) -> Vec<LabeledList<'_>> {
        let failed = self.failed_updates.as_ref();
        present([
            ("invalidUserIds", self.invalid_user_ids.as_deref()),
            (
                "failedUpdates.invalidUserIds",
                failed.and_then(|f| f.invalid_user_ids.as_deref()),
            ),
            (
                "failedUpdates.notFoundUserIds",
                failed.and_then(|f| f.not_found_user_ids.as_deref()),
            ),
            (
                "failedUpdates.forgottenUserIds",
                failed.and_then(|f| f.forgotten_user_ids.as_deref()),
            ),
            (
                "failedUpdates.conflictUserIds",
                failed.and_then(|f| f.conflict_user_ids.as_deref()),
            ),
            (
                "failedUpdates.invalidDataUserIds",
                failed.and_then(|f| f.invalid_data_user_ids.as_deref()),
            ),
        ])
    }

    pub fn email_lists(&self) -> Vec<LabeledList<'_>> {
        let failed = self.failed_updates.as_ref();
        present([
            ("invalidEmails", self.invalid_emails.as_deref()),
            (
                "failedUpdates.invalidEmails",
                failed.and_then(|f| f.invalid_emails.as_deref()),
            ),
            (
                "failedUpdates.notFoundEmails",
                failed.and_then(|f| f.not_found_emails.as_deref()),
            ),
            (
                "failedUpdates.forgottenEmails",
                failed.and_then(|f| f.forgotten_emails.as_deref()),
            ),
            (
                "failedUpdates.conflictEmails",
                failed.and_then(|f| f.conflict_emails.as_deref()),
            ),
            (
                "failedUpdates.invalidDataEmails",
                failed.and_then(|f| f.invalid_data_emails.as_deref()),
            ),
        ])
    }

    pub fn event_name_lists(&self) -> Vec<LabeledList<'_>> {
        present([(
            "disallowedEventNames",
            self.disallowed_event_names.as_deref(),
        )])
    }
}

fn present<'a, const N: usize>(lists: [(&'static str, Option<&'a [Value]>); N]) -> Vec<LabeledList<'a>> {
    lists
        .into_iter()
        .filter_map(|(path, list)| list.map(|values| (path, values)))
        .collect()
}

/// Error body of a failed call; the first truthy field wins, in field order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IterableErrorResponse {
    pub params: Option<Value>,
    pub msg: Option<Value>,
    pub message: Option<Value>,
}

impl IterableErrorResponse {
    pub fn parse(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    /// Representative error detail rendered as a string
    pub fn error_detail(&self) -> Option<String> {
        [&self.params, &self.msg, &self.message]
            .into_iter()
            .flatten()
            .find(|value| is_truthy(value))
            .map(render_value)
    }
}

/// Null, `false`, `0` and `""` carry no detail
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings are used verbatim, anything else as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
