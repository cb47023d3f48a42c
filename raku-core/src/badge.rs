//! Level badge colours
//!
//! Badges use traditional Japanese colour names. Textbook levels cycle
//! through an eight-colour palette; JLPT levels are grouped into three
//! tiers so adjacent exam levels read as related.

use crate::level::CanonicalLevel;
use serde::Serialize;

/// A named badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeColor {
    pub name: &'static str,
    pub hex: &'static str,
}

impl BadgeColor {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }
}

/// Palette for textbook levels, indexed by `(level - 1) % len`
pub const NUMERIC_PALETTE: [BadgeColor; 8] = [
    BadgeColor::new("uguisu", "#558B2F"),
    BadgeColor::new("ruri", "#1565C0"),
    BadgeColor::new("murasaki", "#8E24AA"),
    BadgeColor::new("botan", "#D81B60"),
    BadgeColor::new("yamabuki", "#F9A825"),
    BadgeColor::new("seiji", "#00897B"),
    BadgeColor::new("kon", "#3949AB"),
    BadgeColor::new("cha", "#6D4C41"),
];

/// N5 and N4
pub const JLPT_BEGINNER: BadgeColor = BadgeColor::new("asagi", "#00838F");
/// N3
pub const JLPT_INTERMEDIATE: BadgeColor = BadgeColor::new("kaki", "#EF6C00");
/// N2 and N1
pub const JLPT_ADVANCED: BadgeColor = BadgeColor::new("akane", "#C62828");

/// Colour for labels that match no level scheme
pub const FALLBACK: BadgeColor = BadgeColor::new("kurumi", "#8D6E63");

/// Pick the badge colour for a level
pub fn badge_color(level: &CanonicalLevel) -> BadgeColor {
    match level {
        CanonicalLevel::Numeric(n) => {
            let index = (n.saturating_sub(1) as usize) % NUMERIC_PALETTE.len();
            NUMERIC_PALETTE[index]
        }
        CanonicalLevel::Jlpt(4..=5) => JLPT_BEGINNER,
        CanonicalLevel::Jlpt(3) => JLPT_INTERMEDIATE,
        CanonicalLevel::Jlpt(_) => JLPT_ADVANCED,
        CanonicalLevel::Opaque(_) => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_palette_cycles() {
        assert_eq!(badge_color(&CanonicalLevel::Numeric(1)), NUMERIC_PALETTE[0]);
        assert_eq!(badge_color(&CanonicalLevel::Numeric(8)), NUMERIC_PALETTE[7]);
        assert_eq!(badge_color(&CanonicalLevel::Numeric(9)), NUMERIC_PALETTE[0]);
        assert_eq!(badge_color(&CanonicalLevel::Numeric(18)), NUMERIC_PALETTE[1]);
    }

    #[test]
    fn test_jlpt_tiers() {
        assert_eq!(badge_color(&CanonicalLevel::Jlpt(5)), JLPT_BEGINNER);
        assert_eq!(badge_color(&CanonicalLevel::Jlpt(4)), JLPT_BEGINNER);
        assert_eq!(badge_color(&CanonicalLevel::Jlpt(3)), JLPT_INTERMEDIATE);
        assert_eq!(badge_color(&CanonicalLevel::Jlpt(2)), JLPT_ADVANCED);
        assert_eq!(badge_color(&CanonicalLevel::Jlpt(1)), JLPT_ADVANCED);
    }

    #[test]
    fn test_opaque_uses_fallback() {
        assert_eq!(
            badge_color(&CanonicalLevel::Opaque("extra".to_string())),
            FALLBACK
        );
    }
}
