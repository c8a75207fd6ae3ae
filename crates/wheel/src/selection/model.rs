use super::SLOT_COUNT;
use super::view::RenderInstruction;
use plutchik::{Catalog, Color, EmotionId, EmotionRecord, NavSlot, NotFoundError, Variant};
use std::sync::Arc;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum SelectionState {
    Unselected,
    BaseSelected,
    IntermediateSelected,
}

/// Where each navigation control currently leads, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTargets([Option<EmotionId>; SLOT_COUNT]);

impl NavTargets {
    pub fn from_record(record: &EmotionRecord) -> Self {
        let mut targets = Self::default();
        for (slot, id) in record.targets() {
            targets.0[slot.as_index()] = Some(id.clone());
        }
        targets
    }

    pub fn get(&self, slot: NavSlot) -> Option<&EmotionId> {
        self.0[slot.as_index()].as_ref()
    }
}

pub struct SelectionController {
    catalog: Arc<Catalog>,
    disabled_color: Color,
    current: Option<EmotionId>,
    state: SelectionState,
    targets: NavTargets,
}

impl SelectionController {
    pub fn new(catalog: Arc<Catalog>, disabled_color: Color) -> Self {
        Self {
            catalog,
            disabled_color,
            current: None,
            state: SelectionState::Unselected,
            targets: NavTargets::default(),
        }
    }

    /// Shows `id` and points the navigation controls at its relations.
    ///
    /// Leaves the controller untouched on error.
    pub fn select(&mut self, id: &EmotionId) -> Result<RenderInstruction, NotFoundError> {
        let record = self.catalog.get(id)?;
        let instruction = RenderInstruction::build(&self.catalog, record, self.disabled_color)?;

        self.targets = NavTargets::from_record(record);
        self.state = match record.variant() {
            Variant::Base => SelectionState::BaseSelected,
            Variant::Intermediate => SelectionState::IntermediateSelected,
        };
        self.current = Some(record.id.clone());

        log::debug!("Selected {} ({})", id, self.state);
        Ok(instruction)
    }

    /// Follows `slot` from the current emotion. Returns `None` without
    /// touching any state when the slot leads nowhere.
    pub fn activate(&mut self, slot: NavSlot) -> Result<Option<RenderInstruction>, NotFoundError> {
        match self.targets.get(slot).cloned() {
            Some(id) => self.select(&id).map(Some),
            None => {
                log::debug!("Navigation slot {} is empty", slot);
                Ok(None)
            }
        }
    }

    /// Highlight color for a hovered region: blends light up in their own
    /// color, petals don't.
    pub fn hover_color(&self, id: &EmotionId) -> Result<Option<Color>, NotFoundError> {
        let record = self.catalog.get(id)?;
        Ok((record.variant() == Variant::Intermediate).then(|| record.color()))
    }

    pub fn current(&self) -> Option<&EmotionId> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn target(&self, slot: NavSlot) -> Option<&EmotionId> {
        self.targets.get(slot)
    }

    pub fn targets(&self) -> &NavTargets {
        &self.targets
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::PanelView;
    use crate::testing::{self, grey, id};
    use strum::IntoEnumIterator;

    #[test]
    fn test_starts_unselected() {
        let controller = SelectionController::new(testing::scenario(), grey());
        assert_eq!(controller.state(), SelectionState::Unselected);
        assert_eq!(controller.current(), None);
        assert!(NavSlot::iter().all(|slot| controller.target(slot).is_none()));
    }

    #[test]
    fn test_select_base_then_opposite() {
        let mut controller = SelectionController::new(testing::scenario(), grey());

        let view = controller.select(&id("joy")).unwrap();
        assert_eq!(view.variant(), Variant::Base);
        assert_eq!(view.title_color.to_string(), "#FFD700");
        let PanelView::Base {
            opposite, increase, ..
        } = &view.panel
        else {
            panic!("expected a base panel");
        };
        assert_eq!(opposite.label, "Sadness");
        assert!(increase.enabled);

        assert_eq!(controller.state(), SelectionState::BaseSelected);
        assert_eq!(controller.target(NavSlot::Opposite), Some(&id("sadness")));
        assert_eq!(controller.target(NavSlot::Increase), Some(&id("ecstasy")));
        assert_eq!(controller.target(NavSlot::Decrease), None);
        assert_eq!(controller.target(NavSlot::ComponentA), None);

        let view = controller.activate(NavSlot::Opposite).unwrap().unwrap();
        assert_eq!(view.id, id("sadness"));
        assert_eq!(controller.current(), Some(&id("sadness")));
    }

    #[test]
    fn test_select_intermediate() {
        let mut controller = SelectionController::new(testing::scenario(), grey());

        let view = controller.select(&id("lust")).unwrap();
        assert_eq!(view.variant(), Variant::Intermediate);
        assert_eq!(controller.state(), SelectionState::IntermediateSelected);
        assert_eq!(controller.target(NavSlot::ComponentA), Some(&id("trust")));
        assert_eq!(controller.target(NavSlot::ComponentB), Some(&id("joy")));
        assert_eq!(controller.target(NavSlot::Opposite), None);
        assert_eq!(controller.target(NavSlot::Increase), None);

        controller.activate(NavSlot::ComponentB).unwrap();
        assert_eq!(controller.current(), Some(&id("joy")));
        assert_eq!(controller.state(), SelectionState::BaseSelected);
    }

    #[test]
    fn test_empty_slot_is_a_no_op() {
        let mut controller = SelectionController::new(testing::scenario(), grey());
        controller.select(&id("sadness")).unwrap();
        let before = controller.targets().clone();

        assert_eq!(controller.activate(NavSlot::Increase).unwrap(), None);
        assert_eq!(controller.current(), Some(&id("sadness")));
        assert_eq!(controller.targets(), &before);

        let mut fresh = SelectionController::new(testing::scenario(), grey());
        assert_eq!(fresh.activate(NavSlot::Opposite).unwrap(), None);
        assert_eq!(fresh.state(), SelectionState::Unselected);
    }

    #[test]
    fn test_unknown_id_leaves_state_untouched() {
        let mut controller = SelectionController::new(testing::scenario(), grey());
        controller.select(&id("joy")).unwrap();

        let err = controller.select(&id("rage")).unwrap_err();
        assert_eq!(err, NotFoundError(id("rage")));
        assert_eq!(controller.current(), Some(&id("joy")));
        assert_eq!(controller.target(NavSlot::Opposite), Some(&id("sadness")));
    }

    #[test]
    fn test_opposite_round_trip_on_every_petal() {
        let catalog = testing::wheel();
        let mut controller = SelectionController::new(catalog.clone(), grey());

        for record in catalog.iter().filter(|r| r.variant() == Variant::Base) {
            controller.select(&record.id).unwrap();
            controller.activate(NavSlot::Opposite).unwrap().unwrap();
            assert_ne!(controller.current(), Some(&record.id));
            controller.activate(NavSlot::Opposite).unwrap().unwrap();
            assert_eq!(controller.current(), Some(&record.id));
        }
    }

    #[test]
    fn test_intensity_walk() {
        let mut controller = SelectionController::new(testing::wheel(), grey());
        controller.select(&id("serenity")).unwrap();

        controller.activate(NavSlot::Increase).unwrap().unwrap();
        controller.activate(NavSlot::Increase).unwrap().unwrap();
        assert_eq!(controller.current(), Some(&id("ecstasy")));
        assert_eq!(controller.activate(NavSlot::Increase).unwrap(), None);

        controller.activate(NavSlot::Decrease).unwrap().unwrap();
        assert_eq!(controller.current(), Some(&id("joy")));
    }

    #[test]
    fn test_hover_color() {
        let controller = SelectionController::new(testing::scenario(), grey());
        assert_eq!(
            controller.hover_color(&id("lust")).unwrap(),
            Some(Color::new(0xAA, 0x33, 0x66))
        );
        assert_eq!(controller.hover_color(&id("joy")).unwrap(), None);
        assert!(controller.hover_color(&id("rage")).is_err());
    }
}
