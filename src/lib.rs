//! # stagever
//!
//! A version type for projects that release through a fixed stability progression
//! (alpha → beta → rc → stable), and a planner for what may come next.
//!
//! Versions look like SemVer (`1.2.3`) with an optional stability tier and *metaver* (`1.0.0-BETA2`).
//! Given a version, this library can list the versions that are legal next releases, or compute
//! the result of a specific release [intent](Intent) like "bump patch" or "promote to beta".
//!
//! ## Examples
//!
//! Offer a user a menu of next versions:
//!
//! ```
//! use stagever::prelude::*;
//!
//! let version = Version::parse("1.0.0").unwrap();
//! let menu: Vec<String> = version
//!     .next_candidates()
//!     .unwrap()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(
//!     menu,
//!     ["1.0.1", "1.1.0-BETA1", "1.1.0", "2.0.0-ALPHA1", "2.0.0-BETA1", "2.0.0"]
//! );
//! ```
//!
//! Or apply an intent directly:
//!
//! ```
//! use stagever::prelude::*;
//!
//! let beta = Version::parse("v1.0.0-beta1").unwrap();
//! let next = beta.increase_by(Intent::Next).unwrap();
//! assert_eq!("1.0.0-BETA2", next.to_string());
//! assert!(beta < next);
//!
//! let released = next.increase("stable").unwrap();
//! assert_eq!("1.0.0", released.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Stability tier**: One of alpha, beta, rc, or stable, modeled by [`Stability`]. Alpha is the
//!   least stable.
//! - **Metaver**: The counter of releases within a tier. `1.0.0-BETA2` has metaver `2`. Stable
//!   versions have metaver `0`.
//! - **Canonical text**: The unique string form of a [`Version`], like `1.0.0-BETA2`. Versions are
//!   equal when their canonical text is.
//! - **Intent**: A symbolic request for the kind of next version, modeled by [`Intent`].
//! - **Candidate**: A version that policy allows as the next release.
//!
//! ## Pre-1.0
//!
//! Versions with major `0` do not use stability tiers: they are always rendered as plain
//! `0.minor.patch`, and any requested tier is ignored.
//!
//! ```
//! use stagever::prelude::*;
//!
//! let version = Version::parse("0.3.0-rc2").unwrap();
//! assert_eq!("0.3.0", version.to_string());
//! ```
//!
//! ## Prelude
//!
//! stagever provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use stagever::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod intent;
mod progression;
mod stability;
mod version;

pub use crate::error::VersionError;
pub use crate::intent::Intent;
pub use crate::stability::Stability;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use stagever::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Intent;
    #[doc(no_inline)]
    pub use crate::Stability;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
