use wasm_bindgen::JsValue;

/// Failures of the browser host
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter")]
    Adapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("failed to get current texture: {0}")]
    Frame(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
