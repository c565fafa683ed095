//! Result Envelope - the single response shape for every endpoint
//!
//! Every handler outcome, success or failure, is normalized into
//! [`Envelope<T>`] before it crosses the HTTP boundary. The serialized
//! shape is stable regardless of the branch taken: a `payload` field and
//! an `errors` field are always present, with `payload` being `null`
//! in the failure case.

use serde::Serialize;

/// Normalized handler outcome.
///
/// Invariant: the success constructor always leaves `errors` empty, and
/// every failure constructor leaves `payload` unset. No endpoint returns
/// a bare value or a bare error.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Success payload, `null` when the request failed
    pub payload: Option<T>,
    /// Human-readable error messages, empty on success, order preserved
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    /// Success: payload set, errors empty.
    pub fn success(payload: T) -> Self {
        Self {
            payload: Some(payload),
            errors: Vec::new(),
        }
    }

    /// Failure with a single error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            payload: None,
            errors: vec![error.into()],
        }
    }

    /// Failure with an ordered list of error messages.
    pub fn failures(errors: Vec<String>) -> Self {
        Self {
            payload: None,
            errors,
        }
    }

    /// True if this envelope carries a payload.
    pub fn is_success(&self) -> bool {
        self.payload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_leaves_errors_empty() {
        let env = Envelope::success(42);
        assert_eq!(env.payload, Some(42));
        assert!(env.errors.is_empty());
        assert!(env.is_success());
    }

    #[test]
    fn failure_leaves_payload_unset() {
        let env = Envelope::<i32>::failure("boom");
        assert!(env.payload.is_none());
        assert_eq!(env.errors, vec!["boom".to_string()]);
        assert!(!env.is_success());
    }

    #[test]
    fn failures_preserve_order() {
        let env = Envelope::<()>::failures(vec!["first".into(), "second".into()]);
        assert_eq!(env.errors, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn both_fields_always_serialized() {
        let ok = serde_json::to_value(Envelope::success("x")).unwrap();
        assert_eq!(ok["payload"], "x");
        assert_eq!(ok["errors"], serde_json::json!([]));

        let err = serde_json::to_value(Envelope::<String>::failure("bad")).unwrap();
        assert!(err["payload"].is_null());
        assert_eq!(err["errors"], serde_json::json!(["bad"]));
        // Failure serializes with the payload key present, not absent
        assert!(err.as_object().unwrap().contains_key("payload"));
    }
}
