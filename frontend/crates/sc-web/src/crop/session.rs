use crate::crop::{CropHandle, CropTarget};

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropState {
    Idle,
    /// Modal shown, widget not initialized yet
    ModalOpen { target: CropTarget },
    Cropping {
        target: CropTarget,
        handle: CropHandle,
    },
}

/// Crop state for one page load.
///
/// Holds at most one widget handle per target. `generation` changes on every
/// open and close so a deferred initialization can tell it was superseded.
#[derive(Debug, Default)]
pub struct CropSession {
    current: Option<CropTarget>,
    generation: u64,
    widgets: HashMap<CropTarget, CropHandle>,
}

impl CropSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `target` current. Returns the target's previous handle, which the
    /// caller must destroy, and the generation of the new session.
    pub fn open(&mut self, target: CropTarget) -> (Option<CropHandle>, u64) {
        let prior = self.widgets.remove(&target);
        self.current = Some(target);
        self.generation += 1;
        (prior, self.generation)
    }

    pub fn is_current(&self, target: CropTarget, generation: u64) -> bool {
        self.current == Some(target) && self.generation == generation
    }

    /// Record the widget for `target`, returning any handle it replaces
    pub fn attach(&mut self, target: CropTarget, handle: CropHandle) -> Option<CropHandle> {
        self.widgets.insert(target, handle)
    }

    /// Current target and its widget, if initialized
    pub fn live(&self) -> Option<(CropTarget, CropHandle)> {
        let target = self.current?;
        self.widgets.get(&target).map(|handle| (target, *handle))
    }

    /// End the session. Returns every handle, all of which must be destroyed.
    pub fn close(&mut self) -> Vec<CropHandle> {
        self.current = None;
        self.generation += 1;
        self.widgets.drain().map(|(_, handle)| handle).collect()
    }

    /// Changes on every open and close
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<CropTarget> {
        self.current
    }

    pub fn state(&self) -> CropState {
        match (self.current, self.live()) {
            (_, Some((target, handle))) => CropState::Cropping { target, handle },
            (Some(target), None) => CropState::ModalOpen { target },
            (None, None) => CropState::Idle,
        }
    }
}
