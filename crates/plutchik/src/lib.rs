//! Data model for the Plutchik emotion wheel.
//!
//! A [`Catalog`] is loaded once from a static JSON document, validated as a
//! whole, and never mutated afterwards. Every record in a loaded catalog is
//! either a base emotion or an intermediate (blend) emotion, and every
//! relation it names resolves to another record of the same catalog.

pub mod catalog;
pub mod color;
pub mod emotion;
pub mod locale;
mod macros;

pub use catalog::{Catalog, LoadError, LoadErrorKind, NotFoundError};
pub use color::{Color, ColorError};
pub use emotion::{
    BaseEmotion, BlendEmotion, ClassificationError, EmotionId, EmotionKind, EmotionRecord,
    NavSlot, Section, Variant,
};
pub use locale::{Locale, LocaleError, LocaleTable};
