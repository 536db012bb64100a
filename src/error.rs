use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Configuration errors: mistakes in how the caller described the problem.
///
/// An unsatisfiable problem is *not* an error; it is reported through the
/// normal return values of the solving phases (`false` from arc consistency,
/// `Ok(None)` from search).
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("edge references variable `{0}` which has no domain")]
    UnknownVariable(String),
    #[error("variable `{0}` is listed but has no domain")]
    MissingDomain(String),
    #[error("edge connects variable `{0}` to itself")]
    SelfLoopEdge(String),
    #[error("cannot search a problem with no variables")]
    EmptyProblem,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
