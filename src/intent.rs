use crate::error::VersionError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The accepted intent tokens, in the order they are reported to users.
pub(crate) const ACCEPTED_INTENTS: &str = "patch, minor, major, alpha, beta, rc, stable, next";

/// A symbolic request describing what kind of next version to produce with
/// [Version::increase_by](crate::Version::increase_by).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Intent {
    /// Bump the patch, or the metaver when on an unstable metaver track.
    Patch,
    /// Start the next minor as a stable release.
    Minor,
    /// Start the next major as a stable release, or promote the current major line if unstable.
    Major,
    /// Move to the alpha tier.
    Alpha,
    /// Move to the beta tier.
    Beta,
    /// Move to the release candidate tier.
    Rc,
    /// Release as stable.
    Stable,
    /// The smallest sensible step forward.
    Next,
}

impl Intent {
    /// All intents, in the order of [ACCEPTED_INTENTS].
    pub const ALL: [Intent; 8] = [
        Intent::Patch,
        Intent::Minor,
        Intent::Major,
        Intent::Alpha,
        Intent::Beta,
        Intent::Rc,
        Intent::Stable,
        Intent::Next,
    ];

    /// The token for this intent.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Patch => "patch",
            Intent::Minor => "minor",
            Intent::Major => "major",
            Intent::Alpha => "alpha",
            Intent::Beta => "beta",
            Intent::Rc => "rc",
            Intent::Stable => "stable",
            Intent::Next => "next",
        }
    }
}

impl FromStr for Intent {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|intent| intent.name() == s)
            .copied()
            .ok_or_else(|| VersionError::UnknownIntent {
                intent: s.to_owned(),
            })
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_accepted_list() {
        let joined = Intent::ALL
            .iter()
            .map(Intent::name)
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(ACCEPTED_INTENTS, joined);
    }

    #[test]
    fn test_from_str_roundtrips_names() {
        for intent in Intent::ALL {
            assert_eq!(Ok(intent), intent.name().parse());
        }
    }

    #[test]
    fn test_unknown_intent() {
        let err = "build".parse::<Intent>().unwrap_err();
        assert_eq!(
            VersionError::UnknownIntent {
                intent: "build".to_owned()
            },
            err
        );
        let message = err.to_string();
        assert!(message.contains("`build`"));
        assert!(message.contains(ACCEPTED_INTENTS));
    }

    #[test]
    fn test_tokens_are_exact() {
        assert!("Patch".parse::<Intent>().is_err());
        assert!(" patch".parse::<Intent>().is_err());
        assert!("".parse::<Intent>().is_err());
    }
}
