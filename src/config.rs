pub const DEFAULT_ENDPOINT: &str = "https://wishcarebd.com";

/// Where the event goes. No request timeout is set: the client waits for the
/// endpoint as long as the transport allows.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderConfig {
    pub endpoint: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SenderConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}
