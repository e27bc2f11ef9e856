use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A stability tier. Tiers are totally ordered from least to most stable:
/// `Alpha < Beta < Rc < Stable`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Stability {
    /// The least stable tier.
    Alpha,
    /// More stable than alpha, less stable than a release candidate.
    Beta,
    /// A release candidate.
    Rc,
    /// A final release. Stable versions never carry a metaver.
    Stable,
}

/// Name, label, and tier for each stability, in rank order.
static TABLE: [(&str, &str, Stability); 4] = [
    ("alpha", "ALPHA", Stability::Alpha),
    ("beta", "BETA", Stability::Beta),
    ("rc", "RC", Stability::Rc),
    ("stable", "STABLE", Stability::Stable),
];

impl Stability {
    /// All tiers, from least to most stable.
    pub const ALL: [Stability; 4] = [
        Stability::Alpha,
        Stability::Beta,
        Stability::Rc,
        Stability::Stable,
    ];

    /// The rank of this tier. Higher is more stable.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The lower-case name of this tier, as accepted by the parser.
    pub fn name(&self) -> &'static str {
        TABLE[self.rank() as usize].0
    }

    /// The upper-case label of this tier, as rendered in canonical version text.
    pub fn label(&self) -> &'static str {
        TABLE[self.rank() as usize].1
    }

    /// Returns true for [Stability::Stable].
    pub fn is_stable(&self) -> bool {
        matches!(self, Stability::Stable)
    }

    /// The tier one step more stable than this one, or `None` for [Stability::Stable].
    pub fn promoted(&self) -> Option<Stability> {
        Self::ALL.get(self.rank() as usize + 1).copied()
    }

    /// Matches a tier name at the start of `text`, case-insensitively. Returns the tier and the
    /// remaining text.
    pub(crate) fn strip_prefix(text: &str) -> Option<(Stability, &str)> {
        TABLE.iter().find_map(|(name, _, stability)| {
            let head = text.get(..name.len())?;
            if head.eq_ignore_ascii_case(name) {
                Some((*stability, &text[name.len()..]))
            } else {
                None
            }
        })
    }
}

impl FromStr for Stability {
    type Err = String;

    /// Parses a tier name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::strip_prefix(s) {
            Some((stability, "")) => Ok(stability),
            _ => Err(format!("unknown stability `{s}`")),
        }
    }
}

impl Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
