//! # Per-Item Error Checking
//!
//! A [`BatchErrorChecker`] is built once per destination response. Building it
//! parses the response body and indexes every rejected identifier by the
//! response paths it was reported under, so checking an item is a handful of
//! hash lookups no matter how many items the batch holds.
//!
//! An item is abortable when the destination named its `userId`, `email` or
//! `eventName` in one of the rejection lists. Items the response does not
//! mention are implicitly delivered, even when the aggregate `failCount` is
//! non-zero because of other items.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::iterable_response::{IterableBulkResponse, LabeledList};
use crate::constants::UNKNOWN_ERROR_FORMAT;
use crate::models::DestinationResponse;

/// Verdict for a single item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCheck {
    pub is_abortable: bool,
    pub error_msg: String,
}

impl ItemCheck {
    fn delivered() -> Self {
        Self::default()
    }

    /// An abortable verdict never carries an empty message
    fn abortable(error_msg: String) -> Self {
        let error_msg = if error_msg.trim().is_empty() {
            UNKNOWN_ERROR_FORMAT.to_string()
        } else {
            error_msg
        };

        Self {
            is_abortable: true,
            error_msg,
        }
    }
}

/// Rejected identifier -> response paths that named it, in path order
type PathIndex = HashMap<String, Vec<&'static str>>;

#[derive(Debug, Default)]
struct FailureIndex {
    user_ids: PathIndex,
    emails: PathIndex,
    event_names: PathIndex,
}

impl FailureIndex {
    fn build(response: &IterableBulkResponse) -> Self {
        Self {
            user_ids: index_lists(&response.user_id_lists()),
            emails: index_lists(&response.email_lists()),
            event_names: index_lists(&response.event_name_lists()),
        }
    }

    fn is_empty(&self) -> bool {
        self.user_ids.is_empty() && self.emails.is_empty() && self.event_names.is_empty()
    }
}

fn index_lists(lists: &[LabeledList<'_>]) -> PathIndex {
    let mut index = PathIndex::new();
    for (path, values) in lists {
        for key in values.iter().filter_map(identifier_key) {
            let paths = index.entry(key).or_default();
            if !paths.contains(path) {
                paths.push(*path);
            }
        }
    }
    index
}

/// Identifiers match on JSON type and value, so `42` and `"42"` stay distinct.
/// Only strings and numbers can identify an item.
fn identifier_key(value: &Value) -> Option<String> {
    match value {
        Value::String(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}

/// Identifier as shown in an error message
fn identifier_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Per-item abortability predicate for one destination response
#[derive(Debug)]
pub struct BatchErrorChecker {
    index: Option<FailureIndex>,
}

impl BatchErrorChecker {
    pub fn new(destination_response: &DestinationResponse) -> Self {
        let index = IterableBulkResponse::parse(&destination_response.response)
            .filter(|parsed| !parsed.reports_no_failures())
            .map(|parsed| FailureIndex::build(&parsed))
            .filter(|index| !index.is_empty());

        if let Some(index) = &index {
            tracing::debug!(
                status = destination_response.status,
                rejected_user_ids = index.user_ids.len(),
                rejected_emails = index.emails.len(),
                rejected_event_names = index.event_names.len(),
                "Built batch error index from destination response"
            );
        }

        Self { index }
    }

    /// True when no item of this response can be abortable
    pub fn is_clean(&self) -> bool {
        self.index.is_none()
    }

    pub fn check(&self, item: &Value) -> ItemCheck {
        let Some(index) = &self.index else {
            return ItemCheck::delivered();
        };

        let mut error_msg = String::new();
        let mut matched = false;

        for (field, paths_by_key) in [
            ("userId", &index.user_ids),
            ("email", &index.emails),
            ("eventName", &index.event_names),
        ] {
            let Some(value) = item.get(field) else {
                continue;
            };
            let Some(key) = identifier_key(value) else {
                continue;
            };

            if let Some(paths) = paths_by_key.get(&key) {
                matched = true;
                error_msg.push_str(&format!(
                    "{field} error:\"{}\" in \"{}\".",
                    identifier_text(value),
                    paths.join(",")
                ));
            }
        }

        if matched {
            ItemCheck::abortable(error_msg)
        } else {
            ItemCheck::delivered()
        }
    }
}
