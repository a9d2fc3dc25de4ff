//! Per-run session context

/// Mutable state for one invocation.
///
/// Replaces the scattered flags of the original tool with a single value
/// that is created at startup, threaded through each handling step, and
/// cleared in full on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// True once a non-empty credential is available from any source
    pub ready: bool,
    /// Credential for the current run
    pub api_key: Option<String>,
    /// Base64-encoded audio payload, set after upload validation
    pub audio_b64: Option<String>,
    /// True once the user has explicitly submitted a credential
    pub submitted: bool,
}

impl Session {
    /// Create a fresh session with nothing resolved yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a credential and mark the session ready.
    /// Empty strings are ignored.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.api_key = Some(key);
        self.ready = true;
    }

    /// Record an explicit credential submission.
    /// Blank values are rejected and leave the session untouched.
    pub fn submit_api_key(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key.trim().is_empty() {
            return false;
        }
        self.set_api_key(key);
        self.submitted = true;
        true
    }

    /// Store the encoded audio payload
    pub fn set_audio_payload(&mut self, b64: String) {
        self.audio_b64 = Some(b64);
    }

    /// Clear all session state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
