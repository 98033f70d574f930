/// Reasons a raw backend reply yields no JSON candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    /// The backend acknowledged the job but returned no result.
    #[error("Backend replied with an asynchronous acknowledgement ('{marker}') instead of a result")]
    AsyncAcknowledgement { marker: String },

    #[error("No JSON object found in response")]
    NoJsonFound,
}
