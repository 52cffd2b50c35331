use wasm_bindgen::prelude::*;

use crate::collision::{CollisionEvent, StepContacts};

/// What one `tick` did
///
/// `event` is the audio cue: at most one per tick, however many contacts.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub(super) substeps: u32,
    pub(super) wall_hits: u32,
    pub(super) pair_hits: u32,
    pub(super) event: CollisionEvent,
    pub(super) consumed_ms: f64,
}

impl TickReport {
    pub(super) fn record(&mut self, contacts: StepContacts) {
        self.wall_hits += contacts.wall as u32;
        self.pair_hits += contacts.pair as u32;
        self.event = self.event.merge(contacts);
    }
}

#[wasm_bindgen]
impl TickReport {
    /// Fixed sub-steps executed
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn pair_hits(&self) -> u32 { self.pair_hits }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.wall_hits + self.pair_hits }
    #[wasm_bindgen(getter)]
    pub fn event(&self) -> CollisionEvent { self.event }
    /// Frame time banked after clamping
    #[wasm_bindgen(getter)]
    pub fn consumed_ms(&self) -> f64 { self.consumed_ms }
    /// True when the audio side should play a clack
    #[wasm_bindgen(getter)]
    pub fn clack(&self) -> bool { self.event.is_some() }
}
