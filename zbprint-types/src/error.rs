//! Type conversion errors

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown {subsystem} code: {code:?}")]
    UnknownCode {
        subsystem: &'static str,
        code: char,
    },
}
