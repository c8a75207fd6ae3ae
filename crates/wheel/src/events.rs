use plutchik::{Catalog, EmotionId, LoadError, NavSlot};

#[derive(Debug)]
pub enum AppEvent {
    CatalogLoaded(Result<Catalog, LoadError>),
    RegionClicked(EmotionId),
    RegionHovered(Option<EmotionId>),
    NavigationClicked(NavSlot),
    Shutdown,
}
