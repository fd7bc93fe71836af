use super::fee::FeeError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("Fee calculation failed for transaction {hash}: {source}")]
    Fee {
        hash: String,
        #[source]
        source: FeeError,
    },

    #[error("Failed to parse transaction data: {0}")]
    ParseError(String),
}
