use crate::{error::VersionError, intent::Intent, stability::Stability, version::Version};
use tracing::{debug, trace};

fn incr(value: u32, field: &'static str) -> Result<u32, VersionError> {
    value
        .checked_add(1)
        .ok_or(VersionError::Overflow { field })
}

impl Version {
    /// Returns the versions that may legally be released after this one, ordered by increasing
    /// scope of change.
    ///
    /// - Pre-1.0 versions offer a patch bump, a minor bump, `1.0.0-BETA1`, and `1.0.0`.
    /// - Unstable versions offer the next metaver in the same tier, the first iteration of the next
    ///   tier up when that is still a pre-release, and the stable release.
    /// - Stable versions offer a patch bump, the next minor as `BETA1` and as stable, and the next
    ///   major as `ALPHA1`, `BETA1`, and stable.
    ///
    /// Release candidates are only suggested as the step up from beta. From stable and pre-1.0
    /// versions they can still be reached with [Intent::Rc].
    ///
    /// # Examples
    ///
    /// ```
    /// use stagever::Version;
    ///
    /// let candidates: Vec<String> = Version::parse("1.0.0-ALPHA1")
    ///     .unwrap()
    ///     .next_candidates()
    ///     .unwrap()
    ///     .iter()
    ///     .map(|v| v.to_string())
    ///     .collect();
    /// assert_eq!(vec!["1.0.0-ALPHA2", "1.0.0-BETA1", "1.0.0"], candidates);
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::Overflow] if a candidate would need a component past `u32::MAX`.
    pub fn next_candidates(&self) -> Result<Vec<Version>, VersionError> {
        let (major, minor, patch) = (self.major(), self.minor(), self.patch());

        if major == 0 {
            debug!(version = %self, "offering pre-1.0 candidates");
            return Ok(vec![
                Version::new(0, minor, incr(patch, "patch")?, Stability::Alpha, 1)?,
                Version::new(0, incr(minor, "minor")?, 0, Stability::Alpha, 1)?,
                Version::new(1, 0, 0, Stability::Beta, 1)?,
                Version::new(1, 0, 0, Stability::Stable, 0)?,
            ]);
        }

        if self.is_prerelease() {
            debug!(version = %self, "offering unstable candidates");
            let mut candidates = vec![self.bump_metaver()?];
            if let Some(tier) = self.stability().promoted().filter(|t| !t.is_stable()) {
                candidates.push(Version::new(major, minor, patch, tier, 1)?);
            }
            candidates.push(Version::new(major, minor, patch, Stability::Stable, 0)?);
            return Ok(candidates);
        }

        debug!(version = %self, "offering stable candidates");
        let next_minor = incr(minor, "minor")?;
        let next_major = incr(major, "major")?;
        Ok(vec![
            Version::new(major, minor, incr(patch, "patch")?, Stability::Stable, 0)?,
            Version::new(major, next_minor, 0, Stability::Beta, 1)?,
            Version::new(major, next_minor, 0, Stability::Stable, 0)?,
            Version::new(next_major, 0, 0, Stability::Alpha, 1)?,
            Version::new(next_major, 0, 0, Stability::Beta, 1)?,
            Version::new(next_major, 0, 0, Stability::Stable, 0)?,
        ])
    }

    /// Parses `intent` and applies it with [Version::increase_by].
    ///
    /// # Examples
    ///
    /// ```
    /// use stagever::Version;
    ///
    /// let beta = Version::parse("1.0.0-BETA1").unwrap();
    /// assert_eq!("1.0.0-BETA2", beta.increase("patch").unwrap().to_string());
    /// assert_eq!("1.0.0", beta.increase("stable").unwrap().to_string());
    /// assert!(beta.increase("sideways").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::UnknownIntent] if `intent` is not one of `patch`, `minor`, `major`,
    ///   `alpha`, `beta`, `rc`, `stable`, or `next`.
    /// - Returns [VersionError::Overflow] if a component would need to go past `u32::MAX`.
    pub fn increase(&self, intent: &str) -> Result<Version, VersionError> {
        self.increase_by(intent.parse()?)
    }

    /// Returns the version produced by applying `intent` to this one.
    ///
    /// - `minor`: the next minor, stable.
    /// - `patch`: the next metaver when on an unstable metaver track (see `next`), otherwise the
    ///   next patch, stable.
    /// - `major`: when unstable, the stable release of the current major line (at least `1`);
    ///   otherwise the next major, stable.
    /// - `alpha`, `beta`, `rc`: the next metaver when already in that tier; the first iteration of
    ///   that tier when it is more stable than the current one; otherwise the first iteration of
    ///   that tier on the next minor. Stability never regresses within a minor.
    /// - `stable`: when unstable, the stable release of the current major line (at least `1`);
    ///   otherwise the next minor, stable.
    /// - `next`: the next metaver when unstable and major is not `0`; otherwise the next minor,
    ///   stable.
    ///
    /// # Errors
    ///
    /// - Returns [VersionError::Overflow] if a component would need to go past `u32::MAX`.
    pub fn increase_by(&self, intent: Intent) -> Result<Version, VersionError> {
        trace!(version = %self, %intent, "applying intent");
        let (major, minor, patch) = (self.major(), self.minor(), self.patch());

        match intent {
            Intent::Minor => Version::new(major, incr(minor, "minor")?, 0, Stability::Stable, 0),
            Intent::Patch => {
                if major > 0 && self.metaver() > 0 {
                    self.increase_by(Intent::Next)
                } else {
                    Version::new(major, minor, incr(patch, "patch")?, Stability::Stable, 0)
                }
            }
            Intent::Major => {
                if self.is_prerelease() {
                    self.release_major_line()
                } else {
                    Version::new(incr(major, "major")?, 0, 0, Stability::Stable, 0)
                }
            }
            Intent::Alpha => self.advance_to_tier(Stability::Alpha),
            Intent::Beta => self.advance_to_tier(Stability::Beta),
            Intent::Rc => self.advance_to_tier(Stability::Rc),
            Intent::Stable => {
                if self.is_prerelease() {
                    self.release_major_line()
                } else {
                    Version::new(major, incr(minor, "minor")?, 0, Stability::Stable, 0)
                }
            }
            Intent::Next => {
                if major > 0 && self.is_prerelease() {
                    self.bump_metaver()
                } else {
                    Version::new(major, incr(minor, "minor")?, 0, Stability::Stable, 0)
                }
            }
        }
    }

    /// The next iteration in the current tier, keeping every other component.
    fn bump_metaver(&self) -> Result<Version, VersionError> {
        Version::new(
            self.major(),
            self.minor(),
            self.patch(),
            self.stability(),
            incr(self.metaver(), "metaver")?,
        )
    }

    /// Moves to `tier` without letting stability regress within the current minor.
    fn advance_to_tier(&self, tier: Stability) -> Result<Version, VersionError> {
        let (major, minor) = (self.major(), self.minor());
        if tier == self.stability() {
            Version::new(
                major,
                minor,
                self.patch(),
                tier,
                incr(self.metaver(), "metaver")?,
            )
        } else if tier > self.stability() {
            Version::new(major, minor, 0, tier, 1)
        } else {
            Version::new(major, incr(minor, "minor")?, 0, tier, 1)
        }
    }

    /// The stable release of the current major line. Pre-1.0 lines release as `1.0.0`.
    fn release_major_line(&self) -> Result<Version, VersionError> {
        Version::new(self.major().max(1), 0, 0, Stability::Stable, 0)
    }
}
