use plutchik::NavSlot;
use strum::EnumCount;

pub mod model;
pub mod view;

pub use model::{NavTargets, SelectionController, SelectionState};
pub use view::{ArrowView, ButtonView, PanelView, RenderInstruction, SectionView, capitalize};

pub const SLOT_COUNT: usize = NavSlot::COUNT;
