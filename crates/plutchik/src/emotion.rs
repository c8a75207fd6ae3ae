use crate::color::Color;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Stable, locale-independent emotion identifier (the wheel's region name).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct EmotionId(String);

crate::impl_string_newtype!(EmotionId);

impl From<&str> for EmotionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Optional descriptive text shown under the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    SimilarWords,
    Sensations,
    Message,
    Purpose,
}

impl Section {
    pub fn as_index(&self) -> usize {
        *self as usize
    }
}

/// A relation the user can follow from the current selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    EnumCount,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum NavSlot {
    #[strum(to_string = "opposite", serialize = "o")]
    Opposite,
    #[strum(to_string = "increase", serialize = "up", serialize = "+")]
    Increase,
    #[strum(to_string = "decrease", serialize = "down", serialize = "-")]
    Decrease,
    #[strum(to_string = "component-a", serialize = "a")]
    ComponentA,
    #[strum(to_string = "component-b", serialize = "b")]
    ComponentB,
}

impl NavSlot {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    /// Name of the dataset field that feeds this slot.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Opposite => "opposite",
            Self::Increase => "+intense",
            Self::Decrease => "-intense",
            Self::ComponentA => "combo-emotion-0",
            Self::ComponentB => "combo-emotion-1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    Base,
    Intermediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error(
        "needs either `intensity` and `opposite`, or `combo-emotion-0`, `combo-emotion-1` and `combo-explanation`"
    )]
    Neither,
    #[error("has both base and blend fields")]
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEmotion {
    pub petal_color: Color,
    pub color: Color,
    pub intensity: String,
    pub opposite: EmotionId,
    pub more_intense: Option<EmotionId>,
    pub less_intense: Option<EmotionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendEmotion {
    pub color: Color,
    pub components: [EmotionId; 2],
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionKind {
    Base(BaseEmotion),
    Intermediate(BlendEmotion),
}

impl EmotionKind {
    pub fn variant(&self) -> Variant {
        match self {
            Self::Base(_) => Variant::Base,
            Self::Intermediate(_) => Variant::Intermediate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionRecord {
    pub id: EmotionId,
    pub display_name: String,
    sections: [Option<String>; 4],
    pub kind: EmotionKind,
}

impl EmotionRecord {
    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections[section.as_index()].as_deref()
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// Button color used when another emotion links to this one.
    pub fn color(&self) -> Color {
        match &self.kind {
            EmotionKind::Base(base) => base.color,
            EmotionKind::Intermediate(blend) => blend.color,
        }
    }

    /// Color of the title bar when this emotion is selected.
    pub fn title_color(&self) -> Color {
        match &self.kind {
            EmotionKind::Base(base) => base.petal_color,
            EmotionKind::Intermediate(blend) => blend.color,
        }
    }

    /// The emotion reached by following `slot`, if this record has one.
    pub fn target(&self, slot: NavSlot) -> Option<&EmotionId> {
        match (&self.kind, slot) {
            (EmotionKind::Base(base), NavSlot::Opposite) => Some(&base.opposite),
            (EmotionKind::Base(base), NavSlot::Increase) => base.more_intense.as_ref(),
            (EmotionKind::Base(base), NavSlot::Decrease) => base.less_intense.as_ref(),
            (EmotionKind::Intermediate(blend), NavSlot::ComponentA) => Some(&blend.components[0]),
            (EmotionKind::Intermediate(blend), NavSlot::ComponentB) => Some(&blend.components[1]),
            _ => None,
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = (NavSlot, &EmotionId)> {
        NavSlot::iter().filter_map(|slot| self.target(slot).map(|id| (slot, id)))
    }
}

/// A record exactly as it appears in the dataset, before classification.
///
/// `K` is the type used for references to other records: [`EmotionId`] for
/// datasets keyed by identifier, `String` for datasets keyed by translated
/// display names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct RawRecord<K> {
    pub display_name: Option<String>,
    similar_words: Option<String>,
    sensations: Option<String>,
    message: Option<String>,
    purpose: Option<String>,
    petal_color: Option<Color>,
    color: Option<Color>,
    intensity: Option<String>,
    opposite: Option<K>,
    #[serde(rename = "+intense")]
    more_intense: Option<K>,
    #[serde(rename = "-intense")]
    less_intense: Option<K>,
    #[serde(rename = "combo-emotion-0")]
    component_a: Option<K>,
    #[serde(rename = "combo-emotion-1")]
    component_b: Option<K>,
    combo_explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordError {
    Classification(ClassificationError),
    MissingField(&'static str),
}

impl<K> RawRecord<K> {
    fn is_base(&self) -> bool {
        self.intensity.is_some() && self.opposite.is_some()
    }

    fn is_blend(&self) -> bool {
        self.component_a.is_some() && self.component_b.is_some() && self.combo_explanation.is_some()
    }

    pub fn classify(&self) -> Result<Variant, ClassificationError> {
        match (self.is_base(), self.is_blend()) {
            (true, false) => Ok(Variant::Base),
            (false, true) => Ok(Variant::Intermediate),
            (true, true) => Err(ClassificationError::Both),
            (false, false) => Err(ClassificationError::Neither),
        }
    }

    /// Rewrites every reference, stopping at the first one `f` rejects.
    pub fn map_references<T, E>(
        self,
        mut f: impl FnMut(NavSlot, K) -> Result<T, E>,
    ) -> Result<RawRecord<T>, E> {
        let mut map = |slot, key: Option<K>| key.map(|k| f(slot, k)).transpose();
        Ok(RawRecord {
            opposite: map(NavSlot::Opposite, self.opposite)?,
            more_intense: map(NavSlot::Increase, self.more_intense)?,
            less_intense: map(NavSlot::Decrease, self.less_intense)?,
            component_a: map(NavSlot::ComponentA, self.component_a)?,
            component_b: map(NavSlot::ComponentB, self.component_b)?,
            display_name: self.display_name,
            similar_words: self.similar_words,
            sensations: self.sensations,
            message: self.message,
            purpose: self.purpose,
            petal_color: self.petal_color,
            color: self.color,
            intensity: self.intensity,
            combo_explanation: self.combo_explanation,
        })
    }
}

impl RawRecord<EmotionId> {
    pub fn into_record(
        self,
        id: EmotionId,
        display_name: String,
    ) -> Result<EmotionRecord, RecordError> {
        let variant = self.classify().map_err(RecordError::Classification)?;
        let color = self.color.ok_or(RecordError::MissingField("color"))?;

        let kind = match variant {
            Variant::Base => EmotionKind::Base(BaseEmotion {
                petal_color: self
                    .petal_color
                    .ok_or(RecordError::MissingField("petal-color"))?,
                color,
                intensity: self.intensity.ok_or(RecordError::MissingField("intensity"))?,
                opposite: self.opposite.ok_or(RecordError::MissingField("opposite"))?,
                more_intense: self.more_intense,
                less_intense: self.less_intense,
            }),
            Variant::Intermediate => EmotionKind::Intermediate(BlendEmotion {
                color,
                components: [
                    self.component_a
                        .ok_or(RecordError::MissingField("combo-emotion-0"))?,
                    self.component_b
                        .ok_or(RecordError::MissingField("combo-emotion-1"))?,
                ],
                explanation: self
                    .combo_explanation
                    .ok_or(RecordError::MissingField("combo-explanation"))?,
            }),
        };

        Ok(EmotionRecord {
            id,
            display_name,
            sections: [
                self.similar_words,
                self.sensations,
                self.message,
                self.purpose,
            ],
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawRecord<EmotionId> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_nav_slot_parsing() {
        let cases = vec![
            ("\"opposite\"", NavSlot::Opposite),
            ("\"O\"", NavSlot::Opposite),
            ("\"up\"", NavSlot::Increase),
            ("\"+\"", NavSlot::Increase),
            ("\"Decrease\"", NavSlot::Decrease),
            ("\"-\"", NavSlot::Decrease),
            ("\"a\"", NavSlot::ComponentA),
            ("\"component-b\"", NavSlot::ComponentB),
        ];

        for (json, expected) in cases {
            let deserialized: NavSlot = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert_eq!(NavSlot::ComponentA.to_string(), "component-a");
    }

    #[test]
    fn test_nav_slot_indices_fill_count() {
        let indices: Vec<_> = NavSlot::iter().map(|slot| slot.as_index()).collect();
        assert_eq!(indices, (0..NavSlot::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_section_names_match_dataset_keys() {
        let names: Vec<_> = Section::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["similar-words", "sensations", "message", "purpose"]);
    }

    #[test]
    fn test_classify_base() {
        let record = raw(
            r##"{"petal-color": "#FFD700", "color": "#FFE552", "intensity": "High",
                "opposite": "sadness", "+intense": "ecstasy", "message": "Keep it"}"##,
        )
        .into_record(EmotionId::new("joy"), "Joy".into())
        .unwrap();

        assert_eq!(record.variant(), Variant::Base);
        assert_eq!(record.title_color().to_string(), "#FFD700");
        assert_eq!(record.color().to_string(), "#FFE552");
        assert_eq!(record.section(Section::Message), Some("Keep it"));
        assert_eq!(record.section(Section::Purpose), None);

        let targets: Vec<_> = record.targets().collect();
        assert_eq!(
            targets,
            vec![
                (NavSlot::Opposite, &EmotionId::new("sadness")),
                (NavSlot::Increase, &EmotionId::new("ecstasy")),
            ]
        );
    }

    #[test]
    fn test_classify_blend() {
        let record = raw(
            r##"{"color": "#AA3366", "combo-emotion-0": "trust",
                "combo-emotion-1": "joy", "combo-explanation": "Trust + joy"}"##,
        )
        .into_record(EmotionId::new("love"), "Love".into())
        .unwrap();

        assert_eq!(record.variant(), Variant::Intermediate);
        assert_eq!(record.target(NavSlot::ComponentB), Some(&EmotionId::new("joy")));
        assert_eq!(record.target(NavSlot::Opposite), None);
    }

    #[test]
    fn test_classification_errors() {
        let neither = raw(r##"{"color": "#AA3366", "intensity": "High"}"##);
        assert_eq!(neither.classify(), Err(ClassificationError::Neither));

        let both = raw(
            r##"{"intensity": "High", "opposite": "x", "combo-emotion-0": "a",
                "combo-emotion-1": "b", "combo-explanation": "?"}"##,
        );
        assert_eq!(both.classify(), Err(ClassificationError::Both));
    }

    #[test]
    fn test_missing_companion_field() {
        let err = raw(r##"{"color": "#FFE552", "intensity": "High", "opposite": "sadness"}"##)
            .into_record(EmotionId::new("joy"), "Joy".into())
            .unwrap_err();
        assert_eq!(err, RecordError::MissingField("petal-color"));
    }
}
