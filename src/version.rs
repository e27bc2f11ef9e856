use crate::{error::VersionError, stability::Stability};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A Version represents a single concrete release: `major.minor.patch`, plus a [Stability] tier and
/// a *metaver* (the iteration counter within a pre-release tier, like the `2` in `beta2`).
///
/// Versions are immutable. Every transformation ([Version::increase],
/// [Version::next_candidates]) returns new versions and leaves the receiver untouched.
///
/// Every version upholds these rules, no matter how it was created:
///
/// - A version with major `0` is always `alpha` with metaver `1`. Pre-1.0 versions are never tagged
///   with a richer stability scheme, so requested tiers are silently dropped.
/// - A stable version has metaver `0`. Asking for anything else is an error.
///
/// Versions [display](Version::to_string) as their *canonical text*: `1.2.3` for stable and pre-1.0
/// versions, and `1.2.3-BETA2` otherwise. Two versions are equal exactly when their canonical text
/// is equal.
///
/// # Examples
///
/// ```
/// use stagever::prelude::*;
///
/// let version = Version::parse("v1.0.0.beta.2").unwrap();
/// assert_eq!("1.0.0-BETA2", version.to_string());
/// assert_eq!(Stability::Beta, version.stability());
/// assert_eq!(2, version.metaver());
///
/// let pre = Version::new(0, 4, 1, Stability::Rc, 7).unwrap();
/// assert_eq!("0.4.1", pre.to_string());
/// assert_eq!(Stability::Alpha, pre.stability());
/// assert_eq!(1, pre.metaver());
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    stability: Stability,
    metaver: u32,
    canonical: String,
}

impl Version {
    /// Creates a new version, enforcing the invariants described on [Version].
    ///
    /// All other ways of creating a version funnel through here.
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::StableWithMetaver] if `stability` is [Stability::Stable] and
    ///   `metaver` is not `0` (after pre-1.0 normalization).
    pub fn new(
        major: u32,
        minor: u32,
        patch: u32,
        stability: Stability,
        metaver: u32,
    ) -> Result<Self, VersionError> {
        let (stability, metaver) = if major == 0 {
            (Stability::Alpha, 1)
        } else {
            (stability, metaver)
        };

        if stability.is_stable() && metaver > 0 {
            return Err(VersionError::StableWithMetaver { metaver });
        }

        let canonical = if major == 0 || stability.is_stable() {
            format!("{major}.{minor}.{patch}")
        } else {
            format!("{major}.{minor}.{patch}-{}{metaver}", stability.label())
        };

        Ok(Self {
            major,
            minor,
            patch,
            stability,
            metaver,
            canonical,
        })
    }

    /// Parses a version string.
    ///
    /// The grammar is case-insensitive and accepts an optional leading `v`:
    ///
    /// ```text
    /// major '.' minor ('.' patch)? ( [-.]? stability ( [.-]? metaver )? )?
    /// ```
    ///
    /// `patch` defaults to `0`. `stability` is one of `alpha`, `beta`, `rc`, or `stable`, and
    /// defaults to `stable` when the whole suffix is omitted. `metaver` defaults to `0`. The entire
    /// string must match; build metadata like `+build.1` is not supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use stagever::Version;
    ///
    /// assert_eq!("1.2.0", Version::parse("1.2").unwrap().to_string());
    /// assert_eq!("1.2.3-RC1", Version::parse("V1.2.3rc-1").unwrap().to_string());
    /// assert!(Version::parse("1.2.3+build.1").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::Unparseable] if the string does not match the grammar.
    /// - Returns [VersionError::StableWithMetaver] for strings like `1.0.0-stable2`.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let (major, minor, patch, stability, metaver) =
            parse_fields(version_str).ok_or_else(|| VersionError::Unparseable {
                version_string: version_str.to_owned(),
            })?;
        Self::new(major, minor, patch, stability, metaver)
    }

    /// The major component.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// The stability tier.
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// The iteration counter within the stability tier. Always `0` for stable versions.
    pub fn metaver(&self) -> u32 {
        self.metaver
    }

    /// Returns true if this version's tier is [Stability::Stable].
    pub fn is_stable(&self) -> bool {
        self.stability.is_stable()
    }

    /// Returns true if this version is below [Stability::Stable]. All pre-1.0 versions are.
    pub fn is_prerelease(&self) -> bool {
        !self.is_stable()
    }

    /// The canonical text of this version.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    fn cmp_key(&self) -> (u32, u32, u32, Stability, u32) {
        (
            self.major,
            self.minor,
            self.patch,
            self.stability,
            self.metaver,
        )
    }
}

type Fields = (u32, u32, u32, Stability, u32);

fn parse_fields(text: &str) -> Option<Fields> {
    let text = text
        .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'v'))
        .unwrap_or(text);

    let (major, rest) = parse_number(text)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, rest) = parse_number(rest)?;
    let (patch, rest) = rest
        .strip_prefix('.')
        .and_then(parse_number)
        .unwrap_or((0, rest));

    if rest.is_empty() {
        return Some((major, minor, patch, Stability::Stable, 0));
    }

    let rest = strip_separator(rest);
    let (stability, rest) = Stability::strip_prefix(rest)?;
    if rest.is_empty() {
        return Some((major, minor, patch, stability, 0));
    }

    let (metaver, rest) = parse_number(strip_separator(rest))?;
    rest.is_empty()
        .then_some((major, minor, patch, stability, metaver))
}

/// Consumes a run of ASCII digits. Fails if there are none, or if they overflow a `u32`.
fn parse_number(text: &str) -> Option<(u32, &str)> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let (digits, rest) = text.split_at(len);
    digits.parse().ok().map(|value| (value, rest))
}

/// Consumes at most one `-` or `.`.
fn strip_separator(text: &str) -> &str {
    text.strip_prefix(['-', '.'].as_slice()).unwrap_or(text)
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    /// Writes the canonical text
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Orders by major, minor, and patch, then by stability tier, then by metaver. So
    /// `1.0.0-ALPHA2 < 1.0.0-BETA1 < 1.0.0-RC1 < 1.0.0 < 1.0.1`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_key().cmp(&other.cmp_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn v(version_str: &str) -> Version {
        Version::parse(version_str).unwrap()
    }

    #[rstest]
    #[case("1.2.3", (1, 2, 3, Stability::Stable, 0))]
    #[case("1.2", (1, 2, 0, Stability::Stable, 0))]
    #[case("v1.2.3", (1, 2, 3, Stability::Stable, 0))]
    #[case("V1.2.3", (1, 2, 3, Stability::Stable, 0))]
    #[case("1.0.0-beta2", (1, 0, 0, Stability::Beta, 2))]
    #[case("1.0.0-BETA2", (1, 0, 0, Stability::Beta, 2))]
    #[case("1.0.0.beta.2", (1, 0, 0, Stability::Beta, 2))]
    #[case("1.0.0beta-2", (1, 0, 0, Stability::Beta, 2))]
    #[case("1.0.0-rc", (1, 0, 0, Stability::Rc, 0))]
    #[case("1.0-Alpha3", (1, 0, 0, Stability::Alpha, 3))]
    #[case("1.0.alpha3", (1, 0, 0, Stability::Alpha, 3))]
    #[case("2.1.0-stable", (2, 1, 0, Stability::Stable, 0))]
    #[case("2.1.0-stable0", (2, 1, 0, Stability::Stable, 0))]
    #[case("10.20.30", (10, 20, 30, Stability::Stable, 0))]
    #[case("1.02.003", (1, 2, 3, Stability::Stable, 0))]
    fn test_parse_fields(#[case] version_str: &str, #[case] expected: Fields) {
        let version = v(version_str);
        assert_eq!(expected, version.cmp_key());
    }

    #[rstest]
    #[case("x")]
    #[case("")]
    #[case("1")]
    #[case("1.")]
    #[case("1.2.")]
    #[case("1.2.3.4")]
    #[case("1.2.3+build.1")]
    #[case("1.2.3-beta+build.1")]
    #[case("1.2.3-gamma1")]
    #[case("1.2.3--beta1")]
    #[case("1.2.3-beta--1")]
    #[case("1.2.3-beta1x")]
    #[case("1.2.3-")]
    #[case(" 1.2.3")]
    #[case("1.2.3 ")]
    #[case("vv1.2.3")]
    #[case("-1.2.3")]
    #[case("99999999999.0.0")]
    fn test_parse_rejects(#[case] version_str: &str) {
        assert_eq!(
            Err(VersionError::Unparseable {
                version_string: version_str.to_owned()
            }),
            Version::parse(version_str)
        );
    }

    #[test]
    fn test_parse_error_message() {
        let message = Version::parse("x").unwrap_err().to_string();
        assert!(message.contains("`x`"));
        assert!(message.contains("1.2.3"));
    }

    #[test]
    fn test_parse_stable_with_metaver() {
        assert_eq!(
            Err(VersionError::StableWithMetaver { metaver: 2 }),
            Version::parse("1.0.0-stable2")
        );
    }

    #[rstest]
    #[case("0.1.0")]
    #[case("0.0.0")]
    #[case("1.0.0")]
    #[case("1.2.3")]
    #[case("1.0.0-ALPHA1")]
    #[case("1.0.0-BETA0")]
    #[case("3.1.0-RC12")]
    fn test_canonical_roundtrip(#[case] canonical: &str) {
        assert_eq!(canonical, v(canonical).to_string());
        assert_eq!(canonical, v(canonical).as_str());
    }

    #[rstest]
    #[case("0.1.0-beta3")]
    #[case("0.1.0-rc")]
    #[case("0.1.0-stable")]
    #[case("0.1.0-stable4")]
    #[case("0.1.0-alpha9")]
    #[case("v0.1")]
    fn test_pre_one_collapses(#[case] version_str: &str) {
        let version = v(version_str);
        assert_eq!(Stability::Alpha, version.stability());
        assert_eq!(1, version.metaver());
        assert_eq!("0.1.0", version.to_string());
        assert!(version.is_prerelease());
    }

    #[test]
    fn test_new_stable_with_metaver_fails() {
        for metaver in [1, 2, u32::MAX] {
            assert_eq!(
                Err(VersionError::StableWithMetaver { metaver }),
                Version::new(1, 0, 0, Stability::Stable, metaver)
            );
        }
    }

    #[test]
    fn test_new_pre_one_normalizes_before_stable_check() {
        let version = Version::new(0, 1, 0, Stability::Stable, 4).unwrap();
        assert_eq!("0.1.0", version.to_string());
        assert_eq!(Stability::Alpha, version.stability());
        assert_eq!(1, version.metaver());
    }

    #[test]
    fn test_new_formats_label() {
        let version = Version::new(2, 3, 4, Stability::Rc, 5).unwrap();
        assert_eq!("2.3.4-RC5", version.to_string());
        assert_eq!((2, 3, 4), (version.major(), version.minor(), version.patch()));
        assert!(!version.is_stable());
    }

    #[test]
    fn test_equality_is_canonical_text_equality() {
        let versions = [
            v("0.1.0"),
            v("0.1.0-beta7"),
            v("1.0.0"),
            v("v1.0"),
            v("1.0.0-beta1"),
            v("1.0.0.BETA.1"),
            v("1.0.0-rc1"),
        ];
        for a in &versions {
            for b in &versions {
                assert_eq!(a.to_string() == b.to_string(), a == b);
            }
        }
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set: HashSet<Version> = ["1.0", "1.0.0", "v1.0.0-stable", "1.0.0-beta1"]
            .iter()
            .map(|s| v(s))
            .collect();
        assert_eq!(2, set.len());
    }

    #[test]
    fn test_ordering() {
        let ordered = [
            "0.1.0",
            "0.1.1",
            "0.2.0",
            "1.0.0-ALPHA1",
            "1.0.0-ALPHA2",
            "1.0.0-BETA1",
            "1.0.0-RC1",
            "1.0.0",
            "1.0.1",
            "1.1.0-BETA1",
            "1.1.0",
            "2.0.0-ALPHA1",
        ];
        let versions: Vec<Version> = ordered.iter().map(|s| v(s)).collect();
        let mut shuffled = versions.clone();
        shuffled.reverse();
        shuffled.sort();
        assert_eq!(versions, shuffled);
    }

    #[test]
    fn test_from_str() {
        let version: Version = "1.4".parse().unwrap();
        assert_eq!("1.4.0", version.to_string());
    }
}
