pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Everything the outbound call needs, resolved once at startup and handed
/// to the chat widget as a prop. The call site never reads ambient state.
#[derive(Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    /// The key is baked in at compile time; a CSR bundle has no process
    /// environment to read at runtime.
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: GEMINI_API_BASE.to_string(),
            api_key: option_env!("GEMINI_API_KEY").unwrap_or_default().to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }
}
