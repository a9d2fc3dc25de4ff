//! Instruction prompt value object

/// Built-in instruction used when no prompt file is present
const DEFAULT_INSTRUCTION: &str = "Please transcribe this Telugu audio to English text.";

/// Value object holding the instruction text sent with every request.
/// Loaded once per run from an optional prompt file, else the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionPrompt {
    content: String,
}

impl InstructionPrompt {
    /// Create a prompt from file contents, used verbatim
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for InstructionPrompt {
    fn default() -> Self {
        Self::from_text(DEFAULT_INSTRUCTION)
    }
}
