use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("no account name given")]
    EmptyAccount,
}

pub type Result<T> = std::result::Result<T, TallyError>;
