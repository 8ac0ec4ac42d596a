use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("Unknown script type: {0}")]
    UnknownScript(String),
}

pub type Result<T> = std::result::Result<T, DuelError>;
