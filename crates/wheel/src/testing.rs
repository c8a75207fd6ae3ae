use plutchik::{Catalog, Color, EmotionId};
use std::sync::Arc;

pub const WHEEL_EN: &str = include_str!("../../../data/emotions-en.json");

/// `joy`, its opposite and its intensities, plus the `lust` blend of
/// `trust` and `joy`.
pub const SCENARIO: &str = r##"{
    "joy": {
        "display-name": "joy", "petal-color": "#FFD700", "color": "#FFE552",
        "intensity": "High", "opposite": "sadness", "+intense": "ecstasy",
        "similar-words": "happy, glad", "message": "Keep this"
    },
    "sadness": {
        "display-name": "sadness", "petal-color": "#5B7ED6", "color": "#7F9BDF",
        "intensity": "Medium", "opposite": "joy"
    },
    "ecstasy": {
        "display-name": "ecstasy", "petal-color": "#FFC400", "color": "#FFD034",
        "intensity": "Very high", "opposite": "sadness", "-intense": "joy"
    },
    "trust": {
        "display-name": "trust", "petal-color": "#8FD14F", "color": "#A9DC78",
        "intensity": "Medium", "opposite": "sadness"
    },
    "lust": {
        "display-name": "lust", "color": "#AA3366", "combo-emotion-0": "trust",
        "combo-emotion-1": "joy", "combo-explanation": "Trust and joy together"
    }
}"##;

pub fn scenario() -> Arc<Catalog> {
    Arc::new(Catalog::load(SCENARIO).unwrap())
}

pub fn wheel() -> Arc<Catalog> {
    Arc::new(Catalog::load(WHEEL_EN).unwrap())
}

pub fn id(s: &str) -> EmotionId {
    EmotionId::new(s)
}

pub fn grey() -> Color {
    Color::new(0xD3, 0xD3, 0xD3)
}
