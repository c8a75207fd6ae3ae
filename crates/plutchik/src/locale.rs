use crate::emotion::EmotionId;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::collections::{BTreeMap, HashMap};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Region identifiers of the wheel, petal by petal from the inside out,
/// followed by the blends between neighbouring petals.
pub const WHEEL_IDS: &[&str] = &[
    "ecstasy", "joy", "serenity",
    "admiration", "trust", "acceptance",
    "terror", "fear", "apprehension",
    "amazement", "surprise", "distraction",
    "grief", "sadness", "pensiveness",
    "loathing", "disgust", "boredom",
    "rage", "anger", "annoyance",
    "vigilance", "anticipation", "interest",
    "love", "submission", "awe", "disapproval",
    "remorse", "contempt", "aggressiveness", "optimism",
];

const SPANISH: &[(&str, &str)] = &[
    ("serenity", "serenidad"),
    ("joy", "alegría"),
    ("ecstasy", "éxtasis"),
    ("acceptance", "aceptación"),
    ("trust", "confianza"),
    ("admiration", "admiración"),
    ("apprehension", "aprehensión"),
    ("fear", "miedo"),
    ("terror", "terror"),
    ("distraction", "distracción"),
    ("surprise", "sorpresa"),
    ("amazement", "asombro"),
    ("pensiveness", "pensativo"),
    ("sadness", "tristeza"),
    ("grief", "dolor"),
    ("boredom", "aburrimiento"),
    ("disgust", "asco"),
    ("loathing", "repugnancia"),
    ("annoyance", "molestia"),
    ("anger", "rabia"),
    ("rage", "ira"),
    ("interest", "interés"),
    ("anticipation", "anticipación"),
    ("vigilance", "vigilancia"),
    ("aggressiveness", "agresividad"),
    ("optimism", "optimismo"),
    ("contempt", "desprecio"),
    ("awe", "temor"),
    ("love", "amor"),
    ("remorse", "remordimiento"),
    ("disapproval", "desaprobación"),
    ("submission", "sumisión"),
];

const ITALIAN: &[(&str, &str)] = &[
    ("serenity", "serenità"),
    ("joy", "gioia"),
    ("ecstasy", "estasi"),
    ("acceptance", "accettazione"),
    ("trust", "fiducia"),
    ("admiration", "ammirazione"),
    ("apprehension", "apprensione"),
    ("fear", "paura"),
    ("terror", "terrore"),
    ("distraction", "distrazione"),
    ("surprise", "sorpresa"),
    ("amazement", "stupore"),
    ("pensiveness", "pensierosità"),
    ("sadness", "tristezza"),
    ("grief", "angoscia"),
    ("boredom", "noia"),
    ("disgust", "disgusto"),
    ("loathing", "odio"),
    ("annoyance", "irritazione"),
    ("anger", "rabbia"),
    ("rage", "collera"),
    ("interest", "interesse"),
    ("anticipation", "aspettativa"),
    ("vigilance", "vigilanza"),
    ("aggressiveness", "aggressività"),
    ("optimism", "ottimismo"),
    ("contempt", "disprezzo"),
    ("awe", "soggezione"),
    ("love", "amore"),
    ("remorse", "rimorso"),
    ("disapproval", "disapprovazione"),
    ("submission", "sottomissione"),
];

/// Language a dataset is written in.
///
/// Datasets in a non-English locale may key their records by translated
/// display name; the locale's [`LocaleTable`] maps those names back to
/// stable identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[strum(to_string = "en", serialize = "english")]
    En,
    #[strum(to_string = "es", serialize = "spanish", serialize = "español")]
    Es,
    #[strum(to_string = "it", serialize = "italian", serialize = "italiano")]
    It,
}

impl Locale {
    pub fn table(&self) -> Result<LocaleTable, LocaleError> {
        match self {
            Self::En => LocaleTable::new(WHEEL_IDS.iter().map(|id| (EmotionId::new(*id), *id))),
            Self::Es => LocaleTable::new(SPANISH.iter().map(|(id, name)| (EmotionId::new(*id), *name))),
            Self::It => LocaleTable::new(ITALIAN.iter().map(|(id, name)| (EmotionId::new(*id), *name))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("emotion `{0}` is listed twice")]
    DuplicateId(EmotionId),
    #[error("`{name}` is used for both `{first}` and `{second}`")]
    DuplicateName {
        name: String,
        first: EmotionId,
        second: EmotionId,
    },
}

/// Two-way mapping between identifiers and the display names of one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    names: BTreeMap<EmotionId, String>,
    ids: HashMap<String, EmotionId>,
}

impl LocaleTable {
    /// Builds a table, rejecting any identifier or name that appears twice.
    pub fn new<N: Into<String>>(
        pairs: impl IntoIterator<Item = (EmotionId, N)>,
    ) -> Result<Self, LocaleError> {
        let mut table = Self::default();

        for (id, name) in pairs {
            let name = name.into();
            if table.names.contains_key(&id) {
                return Err(LocaleError::DuplicateId(id));
            }
            if let Some(first) = table.ids.get(&name) {
                return Err(LocaleError::DuplicateName {
                    name,
                    first: first.clone(),
                    second: id,
                });
            }
            table.ids.insert(name.clone(), id.clone());
            table.names.insert(id, name);
        }

        Ok(table)
    }

    pub fn resolve(&self, name: &str) -> Option<&EmotionId> {
        self.ids.get(name)
    }

    pub fn name(&self, id: &EmotionId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_tables_cover_the_wheel() {
        assert_eq!(Locale::iter().count(), 3);
        for locale in Locale::iter() {
            let table = locale.table().unwrap();
            assert_eq!(table.len(), WHEEL_IDS.len(), "{locale}");
            for id in WHEEL_IDS {
                assert!(table.name(&EmotionId::new(*id)).is_some(), "{locale}: {id}");
            }
        }
    }

    #[test]
    fn test_spanish_lookup() {
        let table = Locale::Es.table().unwrap();
        assert_eq!(table.resolve("alegría"), Some(&EmotionId::new("joy")));
        assert_eq!(table.name(&EmotionId::new("awe")), Some("temor"));
        assert_eq!(table.resolve("joy"), None);
    }

    #[test]
    fn test_italian_lookup() {
        let table = Locale::It.table().unwrap();
        assert_eq!(table.resolve("gioia"), Some(&EmotionId::new("joy")));
        assert_eq!(table.name(&EmotionId::new("awe")), Some("soggezione"));
        assert_eq!(table.resolve("pensierosità"), Some(&EmotionId::new("pensiveness")));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = LocaleTable::new([
            (EmotionId::new("awe"), "temor"),
            (EmotionId::new("fear"), "temor"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            LocaleError::DuplicateName {
                name: "temor".into(),
                first: EmotionId::new("awe"),
                second: EmotionId::new("fear"),
            }
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = LocaleTable::new([
            (EmotionId::new("joy"), "alegría"),
            (EmotionId::new("joy"), "gozo"),
        ])
        .unwrap_err();
        assert_eq!(err, LocaleError::DuplicateId(EmotionId::new("joy")));
    }

    #[test]
    fn test_locale_deserialization() {
        let cases = vec![
            ("\"en\"", Locale::En),
            ("\"EN\"", Locale::En),
            ("\"es\"", Locale::Es),
            ("\"Spanish\"", Locale::Es),
            ("\"it\"", Locale::It),
            ("\"Italiano\"", Locale::It),
        ];

        for (json, expected) in cases {
            let deserialized: Locale = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }
}
