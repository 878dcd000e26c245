use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("tab id is not defined")]
    MissingId,

    #[error("tab doesn't exist: {0}")]
    NotFound(String),

    #[error("unknown active tab: {0}")]
    UnknownActiveTab(String),
}
