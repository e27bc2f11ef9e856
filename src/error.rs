use crate::intent::ACCEPTED_INTENTS;

/// Errors produced while parsing, constructing, or advancing a [Version](crate::Version).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The text does not match the version grammar.
    #[error(
        "Version string `{version_string}` is not a valid version (expected something like \
         `1.2.3`, `v1.2`, `1.0.0-beta2`, or `1.0.0.rc.1`)"
    )]
    Unparseable {
        /// The offending text
        version_string: String,
    },

    /// A stable version was requested with a non-zero metaver.
    #[error("Stable versions cannot carry a metaver, but got metaver `{metaver}`")]
    StableWithMetaver {
        /// The rejected metaver
        metaver: u32,
    },

    /// An intent outside of the fixed set was passed to [Version::increase](crate::Version::increase).
    #[error("Unknown intent `{intent}`, expected one of: {}", ACCEPTED_INTENTS)]
    UnknownIntent {
        /// The unrecognized intent token
        intent: String,
    },

    /// Incrementing a component would overflow it.
    #[error("Incrementing `{field}` would overflow")]
    Overflow {
        /// The name of the component that could not be incremented
        field: &'static str,
    },
}
