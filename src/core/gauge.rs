/// Sanity display helpers — bucket a sanity value for the two rendering
/// surfaces (status text and gauge color). Both mappings are monotonic:
/// lower sanity never maps to a milder bucket.
use serde::{Deserialize, Serialize};

/// Status text bucket shown next to the sanity value.
///
/// Variants are ordered mildest first so `Ord` reflects severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SanityLabel {
    Stable,
    Nervous,
    Anxious,
    Disturbed,
    Breaking,
}

impl SanityLabel {
    pub fn from_sanity(sanity: i32) -> Self {
        if sanity > 80 {
            Self::Stable
        } else if sanity > 60 {
            Self::Nervous
        } else if sanity > 40 {
            Self::Anxious
        } else if sanity > 20 {
            Self::Disturbed
        } else {
            Self::Breaking
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Stable => "Estable",
            Self::Nervous => "Nervioso",
            Self::Anxious => "Ansioso",
            Self::Disturbed => "Perturbado",
            Self::Breaking => "Al borde de la locura",
        }
    }
}

/// Visual severity bucket for the sanity gauge. Independent of
/// `SanityLabel` (different thresholds, different surface) but ordered
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GaugeSeverity {
    Calm,
    Uneasy,
    Alarming,
    Critical,
}

impl GaugeSeverity {
    pub fn from_sanity(sanity: i32) -> Self {
        if sanity > 70 {
            Self::Calm
        } else if sanity > 40 {
            Self::Uneasy
        } else if sanity > 20 {
            Self::Alarming
        } else {
            Self::Critical
        }
    }

    /// Style class for the gauge fill on the rendering surface.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Calm => "bg-green-500",
            Self::Uneasy => "bg-amber-500",
            Self::Alarming => "bg-destructive",
            Self::Critical => "bg-red-900",
        }
    }
}
