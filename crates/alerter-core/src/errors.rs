use anyhow::Error;
use std::fmt;

/// Broad category of an [`AppError`].
///
/// Controllers match on the kind to decide whether a failure is a
/// user-visible rejection (the operation aborts and control returns to the
/// previous menu) or something that ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record with the same unique key already exists.
    Conflict,
    /// Credentials did not match any registered user.
    Unauthorized,
    /// The input stream reached end of file.
    InputClosed,
    /// Anything else, usually an I/O failure on the console.
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unauthorized, err)
    }

    pub fn input_closed() -> Self {
        Self::new(ErrorKind::InputClosed, anyhow::anyhow!("Input stream closed"))
    }

    /// Returns true for errors that abort a single operation but leave the
    /// session usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, ErrorKind::Conflict | ErrorKind::Unauthorized)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
