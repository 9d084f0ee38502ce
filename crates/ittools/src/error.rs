#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Tool(#[from] ittools_core::ToolError),

    #[error("Failed to bind to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server error: {0}")]
    Server(String),
}
