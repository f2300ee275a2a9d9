//! The one place response payloads are turned into the canonical record.
//!
//! Two deployment shapes occur in the wild: the query service envelopes its
//! payload under `getActiveNews`, while the workflow webhook answers with
//! the bare object. The image key also varies between `image_url` and
//! `imageUrl`. Everything past this module only ever sees [`NewsView`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope key used by the query service's enveloped deployment shape.
const WRAPPER_KEY: &str = "getActiveNews";

/// The canonical client-side record, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsView {
    pub headline: String,
    pub description: String,
    pub image_url: String,
}

/// Normalize a response payload into the canonical record.
///
/// A null payload in either shape means the store holds nothing yet and
/// maps to `None`. Missing fields come back as empty strings rather than
/// an error.
pub fn normalize(payload: &Value) -> Option<NewsView> {
    let inner = payload.get(WRAPPER_KEY).unwrap_or(payload);
    if inner.is_null() {
        return None;
    }

    // snake_case first, camelCase second
    let image = inner
        .get("image_url")
        .or_else(|| inner.get("imageUrl"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    Some(NewsView {
        headline: str_field(inner, "headline"),
        description: str_field(inner, "description"),
        image_url: image.to_string(),
    })
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enveloped_shape_is_unwrapped() {
        let payload = json!({
            "getActiveNews": {
                "headline": "H",
                "description": "D",
                "image_url": "U"
            }
        });

        let view = normalize(&payload).unwrap();
        assert_eq!(view.headline, "H");
        assert_eq!(view.description, "D");
        assert_eq!(view.image_url, "U");
    }

    #[test]
    fn bare_shape_normalizes_to_the_same_view() {
        let enveloped = json!({
            "getActiveNews": {"headline": "H", "description": "D", "image_url": "U"}
        });
        let bare = json!({"headline": "H", "description": "D", "imageUrl": "U"});

        assert_eq!(normalize(&enveloped), normalize(&bare));
    }

    #[test]
    fn camel_case_image_key_is_accepted() {
        let payload = json!({"headline": "A", "description": "B", "imageUrl": "C.png"});

        let view = normalize(&payload).unwrap();
        assert_eq!(view.image_url, "C.png");
    }

    #[test]
    fn snake_case_image_key_wins_when_both_are_present() {
        let payload = json!({
            "headline": "A",
            "description": "B",
            "image_url": "snake.png",
            "imageUrl": "camel.png"
        });

        assert_eq!(normalize(&payload).unwrap().image_url, "snake.png");
    }

    #[test]
    fn null_envelope_payload_is_the_empty_state() {
        let payload = json!({"getActiveNews": null});
        assert!(normalize(&payload).is_none());
    }

    #[test]
    fn bare_null_is_the_empty_state() {
        assert!(normalize(&Value::Null).is_none());
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let payload = json!({"headline": "only this"});

        let view = normalize(&payload).unwrap();
        assert_eq!(view.headline, "only this");
        assert_eq!(view.description, "");
        assert_eq!(view.image_url, "");
    }

    #[test]
    fn non_string_fields_degrade_to_empty_strings() {
        let payload = json!({"headline": 42, "description": ["a"], "image_url": true});

        let view = normalize(&payload).unwrap();
        assert_eq!(view.headline, "");
        assert_eq!(view.description, "");
        assert_eq!(view.image_url, "");
    }
}
