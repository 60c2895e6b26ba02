//! Persisted widget state
//!
//! A `SavedState` survives widget re-creation (configuration change, process
//! restore). The host passes its own opaque per-view blob in `base` and gets
//! it back unchanged on restore.
//!
//! The encoded form is JSON with a `version` field. Newer writers may add keys
//! under `extensions`; older readers carry them through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Current encoding version
pub const SAVED_STATE_VERSION: u32 = 1;

/// Snapshot of an indicator's persistent state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Encoding version of the writer
    pub version: u32,
    /// Host view state, opaque to the widget
    #[serde(default)]
    pub base: Vec<u8>,
    /// Page that was current when the state was saved
    pub current_page: usize,
    /// Reserved for fields added by later versions
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
}

impl SavedState {
    /// Create a state record at the current version
    pub fn new(base: Vec<u8>, current_page: usize) -> Self {
        Self {
            version: SAVED_STATE_VERSION,
            base,
            current_page,
            extensions: Map::new(),
        }
    }

    /// Encode to bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from bytes produced by `encode`
    ///
    /// Records written by a newer version are accepted as long as the fields
    /// this version knows about are present.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let state: SavedState = serde_json::from_slice(bytes)?;
        if state.version > SAVED_STATE_VERSION {
            tracing::warn!(
                version = state.version,
                supported = SAVED_STATE_VERSION,
                "Decoding saved state from a newer version"
            );
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    #[test]
    fn test_encode_decode_keeps_page_and_base() {
        let state = SavedState::new(vec![1, 2, 3], 4);
        let decoded = SavedState::decode(&state.encode().unwrap()).unwrap();

        assert_eq!(decoded.current_page, 4);
        assert_eq!(decoded.base, vec![1, 2, 3]);
        assert_eq!(decoded.version, SAVED_STATE_VERSION);
    }

    #[test]
    fn test_decode_newer_version_with_extensions() {
        let bytes = br#"{"version":7,"current_page":2,"extensions":{"snap_page":3}}"#;
        let state = SavedState::decode(bytes).unwrap();

        assert_eq!(state.version, 7);
        assert_eq!(state.current_page, 2);
        assert!(state.base.is_empty());
        assert_eq!(state.extensions.get("snap_page"), Some(&Value::from(3)));

        // Extensions survive a re-encode
        let again = SavedState::decode(&state.encode().unwrap()).unwrap();
        assert_eq!(again.extensions, state.extensions);
    }

    #[test]
    fn test_decode_rejects_missing_page() {
        let err = SavedState::decode(br#"{"version":1}"#).unwrap_err();
        assert!(matches!(err, IndicatorError::Codec(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(SavedState::decode(b"not json").is_err());
    }
}
