/// Errors surfaced by the client data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status; the body text is
    /// carried verbatim as the message.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The transport failed before a response arrived.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token store could not be read or written.
    #[error("Token store error: {0}")]
    Store(#[from] std::io::Error),

    /// A response body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// An operation that needs a logged-in session was called without one.
    #[error("Not authenticated")]
    NotAuthenticated,
}
