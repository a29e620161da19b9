//! The diagnostic record carried through the client library.

use std::fmt;

/// Originating scope of a diagnostic.
///
/// Identifies which layer of the library reported the event. Absence of a
/// diagnostic is modeled by the sink slot being empty, not by a scope
/// variant, so a constructed `Diagnostic` always names a real scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageScope {
    /// Library-wide client message (context-scoped).
    ClientLibrary,
    /// Client message tied to a single connection.
    ClientLibraryConnection,
    /// Core-services layer (configuration, shared plumbing).
    CoreServices,
    /// Message reported by the server.
    Server,
}

impl fmt::Display for MessageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ClientLibrary => "client-library",
            Self::ClientLibraryConnection => "client-library-connection",
            Self::CoreServices => "core-services",
            Self::Server => "server",
        };
        f.write_str(name)
    }
}

/// One reported diagnostic event.
///
/// `code` and `text` are meaningful together with `scope`; codes are stable
/// 32-bit values reproduced bit-exact for existing integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Scope the event was raised against.
    pub scope: MessageScope,
    /// Stable numeric code.
    pub code: u32,
    /// Human-readable message text.
    pub text: String,
}

impl Diagnostic {
    /// Create a new diagnostic record.
    pub fn new(scope: MessageScope, code: u32, text: impl Into<String>) -> Self {
        Self {
            scope,
            code,
            text: text.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:#010x}: {}", self.scope, self.code, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(MessageScope::CoreServices, 0x0201_0106, "bad buflen");
        let s = diag.to_string();
        assert!(s.contains("core-services"));
        assert!(s.contains("0x02010106"));
        assert!(s.contains("bad buflen"));
    }

    #[test]
    fn test_scope_names_distinct() {
        let scopes = [
            MessageScope::ClientLibrary,
            MessageScope::ClientLibraryConnection,
            MessageScope::CoreServices,
            MessageScope::Server,
        ];
        for (i, a) in scopes.iter().enumerate() {
            for b in &scopes[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
