use std::fmt;

/// Error type for enumeration parsing failures.
///
/// Role, module, and permission values arrive from the session layer as
/// plain strings. A value that does not name a known variant produces this
/// error; callers that sit on the trust boundary (route guards, CLI input)
/// must treat it as zero access, never as a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not name a known role.
    UnknownRole(String),
    /// The string does not name a known module.
    UnknownModule(String),
    /// The string does not name a known permission.
    UnknownPermission(String),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRole(value) => write!(f, "unknown role: '{}'", value),
            Self::UnknownModule(value) => write!(f, "unknown module: '{}'", value),
            Self::UnknownPermission(value) => write!(f, "unknown permission: '{}'", value),
        }
    }
}
