use crate::events::AppEvent;
use crate::selection::{RenderInstruction, SelectionController};
use crate::ui::Renderer;
use async_channel::Receiver;
use plutchik::{Catalog, Color, EmotionId, LoadError, NavSlot, NotFoundError};
use std::sync::Arc;
use thiserror::Error;

/// Anything that makes the wheel unusable for the rest of the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not load emotions: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

enum Phase {
    Loading,
    Ready(SelectionController),
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the controller for one session and applies a single policy to every
/// data error: log it, drop to static mode, ignore all further input.
pub struct Session<R: Renderer> {
    renderer: R,
    phase: Phase,
    disabled_color: Color,
    placeholder_visible: bool,
    hovered: Option<EmotionId>,
}

impl<R: Renderer> Session<R> {
    pub fn new(mut renderer: R, disabled_color: Color) -> Self {
        renderer.show_placeholder();
        Self {
            renderer,
            phase: Phase::Loading,
            disabled_color,
            placeholder_visible: true,
            hovered: None,
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Shutdown => return Flow::Exit,
            AppEvent::CatalogLoaded(result) => self.catalog_loaded(result),
            AppEvent::RegionClicked(id) => {
                if let Some(controller) = self.controller_mut("click") {
                    let result = controller.select(&id).map(Some);
                    self.apply(result);
                }
            }
            AppEvent::NavigationClicked(slot) => self.navigate(slot),
            AppEvent::RegionHovered(id) => self.hover(id),
        }
        Flow::Continue
    }

    fn catalog_loaded(&mut self, result: Result<Catalog, LoadError>) {
        if !matches!(self.phase, Phase::Loading) {
            log::warn!("Ignoring a second catalog; the loaded one stays in use");
            return;
        }
        match result {
            Ok(catalog) => {
                log::info!("Emotion catalog ready ({} emotions)", catalog.len());
                self.phase = Phase::Ready(SelectionController::new(
                    Arc::new(catalog),
                    self.disabled_color,
                ));
            }
            Err(e) => self.escape(e.into()),
        }
    }

    fn navigate(&mut self, slot: NavSlot) {
        if let Some(controller) = self.controller_mut("navigation") {
            let result = controller.activate(slot);
            self.apply(result);
        }
    }

    fn hover(&mut self, id: Option<EmotionId>) {
        let Phase::Ready(controller) = &self.phase else {
            return;
        };

        let highlight = match &id {
            Some(id) => match controller.hover_color(id) {
                Ok(color) => Some((id.clone(), color)),
                Err(e) => return self.escape(e.into()),
            },
            None => None,
        };

        if let Some(previous) = self.hovered.take() {
            self.renderer.highlight_region(&previous, None);
        }
        if let Some((id, color)) = highlight {
            self.renderer.highlight_region(&id, color);
            self.hovered = Some(id);
        }
    }

    fn controller_mut(&mut self, what: &str) -> Option<&mut SelectionController> {
        match &mut self.phase {
            Phase::Ready(controller) => Some(controller),
            Phase::Loading => {
                log::warn!("Ignoring {} while the catalog is loading", what);
                None
            }
            Phase::Static => None,
        }
    }

    fn apply(&mut self, result: Result<Option<RenderInstruction>, NotFoundError>) {
        match result {
            Ok(Some(instruction)) => {
                if self.placeholder_visible {
                    self.renderer.hide_placeholder();
                    self.placeholder_visible = false;
                }
                self.renderer.render(&instruction);
            }
            Ok(None) => {}
            Err(e) => self.escape(e.into()),
        }
    }

    fn escape(&mut self, err: SessionError) {
        log::error!("{}", err);
        if !matches!(self.phase, Phase::Static) {
            self.phase = Phase::Static;
            self.renderer.escape_to_static_mode(&err.to_string());
        }
    }

    /// Handles events in arrival order until shutdown or until every sender
    /// is gone.
    pub fn run_blocking(&mut self, rx: &Receiver<AppEvent>) {
        while let Ok(event) = rx.recv_blocking() {
            if self.handle(event) == Flow::Exit {
                break;
            }
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.phase, Phase::Static)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn controller(&self) -> Option<&SelectionController> {
        match &self.phase {
            Phase::Ready(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
