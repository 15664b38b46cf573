//! Score-to-tier classification for the report components.
//!
//! Two independent threshold tables: the overall ATS panel and the per-category
//! score badge partition the 0-100 range differently (the badge's lowest band
//! starts at 39, the panel's at 49). They are intentionally distinct tables
//! and must not be unified.

/// Visual tier of the overall ATS score panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTier {
    Good,
    Warning,
    Bad,
}

/// Visual tier of a category score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    Good,
    Mid,
    Low,
}

/// Descending `(lower bound exclusive, tier)` bands. A score claims the first
/// band it strictly exceeds; anything at or below every bound takes the floor.
const PANEL_BANDS: &[(u32, PanelTier)] = &[(69, PanelTier::Good), (49, PanelTier::Warning)];
const PANEL_FLOOR: PanelTier = PanelTier::Bad;

const BADGE_BANDS: &[(u32, BadgeTier)] = &[(69, BadgeTier::Good), (39, BadgeTier::Mid)];
const BADGE_FLOOR: BadgeTier = BadgeTier::Low;

fn classify_in<T: Copy>(score: u32, bands: &[(u32, T)], floor: T) -> T {
    for &(lower_exclusive, tier) in bands {
        if score > lower_exclusive {
            return tier;
        }
    }
    floor
}

impl PanelTier {
    /// Total over u32: no validation, out-of-range scores fall through the
    /// same strict comparisons as everything else.
    pub fn classify(score: u32) -> Self {
        classify_in(score, PANEL_BANDS, PANEL_FLOOR)
    }

    /// Tailwind gradient start for the panel background.
    pub fn gradient_class(self) -> &'static str {
        match self {
            PanelTier::Good => "from-green-100",
            PanelTier::Warning => "from-yellow-100",
            PanelTier::Bad => "from-red-100",
        }
    }

    /// Asset path of the panel header icon. Resolution is an asset-serving
    /// concern outside this service.
    pub fn icon(self) -> &'static str {
        match self {
            PanelTier::Good => "/icons/ats-good.svg",
            PanelTier::Warning => "/icons/ats-warning.svg",
            PanelTier::Bad => "/icons/ats-bad.svg",
        }
    }
}

impl BadgeTier {
    pub fn classify(score: u32) -> Self {
        classify_in(score, BADGE_BANDS, BADGE_FLOOR)
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            BadgeTier::Good => "bg-green-100",
            BadgeTier::Mid => "bg-yellow-100",
            BadgeTier::Low => "bg-red-100",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            BadgeTier::Good => "text-green-700",
            BadgeTier::Mid => "text-yellow-700",
            BadgeTier::Low => "text-red-700",
        }
    }

    /// Only the Good badge carries the checkmark glyph.
    pub fn shows_check(self) -> bool {
        matches!(self, BadgeTier::Good)
    }
}
