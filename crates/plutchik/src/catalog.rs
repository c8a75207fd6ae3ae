use crate::emotion::{ClassificationError, EmotionId, EmotionRecord, NavSlot, RawRecord, RecordError};
use crate::locale::{LocaleError, LocaleTable};
use fs_err as fs;
use std::collections::BTreeMap;
use std::path::Path;
use strum::Display as StrumDisplay;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum LoadErrorKind {
    #[strum(to_string = "unreadable source")]
    UnreadableSource,
    #[strum(to_string = "malformed data")]
    MalformedData,
    #[strum(to_string = "unclassifiable record")]
    UnclassifiableRecord,
    #[strum(to_string = "dangling reference")]
    DanglingReference,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read emotion data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed emotion data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("emotion `{id}` is missing `{field}`")]
    MissingField { id: EmotionId, field: &'static str },
    #[error("`{name}` has no entry in the locale name table")]
    UnknownName { name: String },
    #[error("invalid locale name table: {0}")]
    Locale(#[from] LocaleError),
    #[error("emotion `{id}` {source}")]
    Unclassifiable {
        id: EmotionId,
        source: ClassificationError,
    },
    #[error("emotion `{id}` points at unknown emotion `{target}` through `{}`", .slot.field())]
    DanglingReference {
        id: EmotionId,
        slot: NavSlot,
        target: String,
    },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Io(_) => LoadErrorKind::UnreadableSource,
            Self::Malformed(_)
            | Self::MissingField { .. }
            | Self::UnknownName { .. }
            | Self::Locale(_) => LoadErrorKind::MalformedData,
            Self::Unclassifiable { .. } => LoadErrorKind::UnclassifiableRecord,
            Self::DanglingReference { .. } => LoadErrorKind::DanglingReference,
        }
    }

    fn from_record(id: EmotionId, err: RecordError) -> Self {
        match err {
            RecordError::Classification(source) => Self::Unclassifiable { id, source },
            RecordError::MissingField(field) => Self::MissingField { id, field },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no emotion `{0}` in the catalog")]
pub struct NotFoundError(pub EmotionId);

/// Immutable set of validated emotion records, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<EmotionId, EmotionRecord>,
}

impl Catalog {
    /// Loads a dataset keyed by [`EmotionId`], where every record carries
    /// its own `display-name`.
    pub fn load(source: &str) -> Result<Self, LoadError> {
        let raw: BTreeMap<EmotionId, RawRecord<EmotionId>> = serde_json::from_str(source)?;

        let records = raw
            .into_iter()
            .map(|(id, raw)| {
                let display_name = raw.display_name.clone().ok_or_else(|| LoadError::MissingField {
                    id: id.clone(),
                    field: "display-name",
                })?;
                let record = raw
                    .into_record(id.clone(), display_name)
                    .map_err(|e| LoadError::from_record(id.clone(), e))?;
                Ok((id, record))
            })
            .collect::<Result<_, LoadError>>()?;

        Self::validated(records)
    }

    /// Loads a dataset keyed by translated display names, translating keys
    /// and references to identifiers through `table`.
    ///
    /// The key doubles as the display name unless the record sets one.
    pub fn load_localized(source: &str, table: &LocaleTable) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, RawRecord<String>> = serde_json::from_str(source)?;

        let records = raw
            .into_iter()
            .map(|(name, raw)| {
                let id = table
                    .resolve(&name)
                    .cloned()
                    .ok_or_else(|| LoadError::UnknownName { name: name.clone() })?;

                let raw = raw.map_references(|slot, target| {
                    table
                        .resolve(&target)
                        .cloned()
                        .ok_or_else(|| LoadError::DanglingReference {
                            id: id.clone(),
                            slot,
                            target,
                        })
                })?;

                let display_name = raw.display_name.clone().unwrap_or(name);
                let record = raw
                    .into_record(id.clone(), display_name)
                    .map_err(|e| LoadError::from_record(id.clone(), e))?;
                Ok((id, record))
            })
            .collect::<Result<_, LoadError>>()?;

        Self::validated(records)
    }

    pub fn from_path(path: impl AsRef<Path>, table: Option<&LocaleTable>) -> Result<Self, LoadError> {
        let source = fs::read_to_string(path.as_ref())?;
        match table {
            Some(table) => Self::load_localized(&source, table),
            None => Self::load(&source),
        }
    }

    fn validated(records: BTreeMap<EmotionId, EmotionRecord>) -> Result<Self, LoadError> {
        for record in records.values() {
            if let Some((slot, target)) = record
                .targets()
                .find(|(_, target)| !records.contains_key(*target))
            {
                return Err(LoadError::DanglingReference {
                    id: record.id.clone(),
                    slot,
                    target: target.to_string(),
                });
            }
        }

        log::debug!("Loaded {} emotion records", records.len());
        Ok(Self { records })
    }

    pub fn get(&self, id: &EmotionId) -> Result<&EmotionRecord, NotFoundError> {
        self.records
            .get(id)
            .ok_or_else(|| NotFoundError(id.clone()))
    }

    pub fn contains(&self, id: &EmotionId) -> bool {
        self.records.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &EmotionId> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmotionRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
