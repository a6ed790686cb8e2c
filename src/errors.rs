//! Error values and the policy deciding whether a reported error is fatal.
//!
//! Errors are values: `Node::build` returns them, boolean operators embed
//! them in the resulting [`Geometry`](crate::mesh::Geometry). A missing
//! error (`None` / `Ok(())`) is the "no error" state.

use std::fmt::Display;

/// Everything that can go wrong inside the kernel or its I/O adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A BSP subtree reached the configured maximum depth while building.
    #[error("maximum recursion level {limit} reached")]
    Recursion { limit: usize },
    /// Unknown file format, primitive, or a topology the kernel cannot represent.
    #[error("not supported: {0}")]
    NotSupported(String),
    /// Opening, reading or writing a file failed.
    #[error("file system error: {0}")]
    FileSystem(String),
    /// Malformed textual input.
    #[error("malformed input at line {line}: {message}")]
    FileFormat { line: usize, message: String },
}

/// Copyable tag of an [`Error`], handy for comparisons and structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Recursion,
    NotSupported,
    FileSystem,
    FileFormat,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Recursion { .. } => ErrorKind::Recursion,
            Error::NotSupported(_) => ErrorKind::NotSupported,
            Error::FileSystem(_) => ErrorKind::FileSystem,
            Error::FileFormat { .. } => ErrorKind::FileFormat,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::FileSystem(value.to_string())
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Recursion => "RecursionError",
            ErrorKind::NotSupported => "NotSupportedError",
            ErrorKind::FileSystem => "FileSystemError",
            ErrorKind::FileFormat => "FileFormatError",
        };
        f.write_str(name)
    }
}

/// How operators react to a reported error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it.
    #[default]
    Fail,
    /// Log the error and keep going with whatever partial result exists.
    LogAndContinue,
}

/// Logging channel an error is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Node,
    Operator,
    Io,
    Shapes,
}

/// Logs `message` together with `error` on `category`.
///
/// Returns `true` when the caller has to treat the error as fatal, which
/// depends on `policy`.
pub fn report_error(
    category: LogCategory,
    error: &Error,
    message: &str,
    policy: ErrorPolicy,
) -> bool {
    let kind = error.kind();
    match category {
        LogCategory::Node => {
            tracing::warn!(target: "bspcsg::node", %kind, ?policy, "{message}, the reported error is {error}")
        },
        LogCategory::Operator => {
            tracing::warn!(target: "bspcsg::operator", %kind, ?policy, "{message}, the reported error is {error}")
        },
        LogCategory::Io => {
            tracing::warn!(target: "bspcsg::io", %kind, ?policy, "{message}, the reported error is {error}")
        },
        LogCategory::Shapes => {
            tracing::warn!(target: "bspcsg::shapes", %kind, ?policy, "{message}, the reported error is {error}")
        },
    }

    policy == ErrorPolicy::Fail
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Error::Recursion { limit: 3 }.kind(), ErrorKind::Recursion);
        assert_eq!(Error::NotSupported("x".into()).kind(), ErrorKind::NotSupported);
        assert_eq!(Error::FileSystem("x".into()).kind(), ErrorKind::FileSystem);
        assert_eq!(
            Error::FileFormat { line: 2, message: "x".into() }.kind(),
            ErrorKind::FileFormat
        );
        assert_eq!(ErrorKind::Recursion.to_string(), "RecursionError");
    }

    #[test]
    fn policy_decides_fatality() {
        let error = Error::Recursion { limit: 1 };
        assert!(report_error(LogCategory::Node, &error, "build failed", ErrorPolicy::Fail));
        assert!(!report_error(
            LogCategory::Node,
            &error,
            "build failed",
            ErrorPolicy::LogAndContinue
        ));
    }

    #[test]
    fn io_errors_become_file_system_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.off");
        let error: Error = io.into();
        assert_eq!(error.kind(), ErrorKind::FileSystem);
        assert!(error.to_string().contains("missing.off"));
    }
}
