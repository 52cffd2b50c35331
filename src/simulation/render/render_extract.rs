use serde::Serialize;

use crate::body::Body;

use super::SimulationCore;

/// One block as the canvas side sees it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyView {
    pub mass: f64,
    pub position: f64,
    pub size: f64,
    pub velocity: f64,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        BodyView {
            mass: body.mass(),
            position: body.position,
            size: body.size(),
            velocity: body.velocity,
        }
    }
}

/// Everything a frame render needs, copied out of the core
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub left: BodyView,
    pub right: BodyView,
    pub collision_count: u64,
    pub status: &'static str,
}

pub(super) fn snapshot(sim: &SimulationCore) -> RenderSnapshot {
    RenderSnapshot {
        left: BodyView::from(&sim.bodies.left),
        right: BodyView::from(&sim.bodies.right),
        collision_count: sim.collision_count,
        status: sim.status.as_str(),
    }
}

pub(super) fn snapshot_json(sim: &SimulationCore) -> String {
    serde_json::to_string(&snapshot(sim)).unwrap_or_else(|_| "{}".to_string())
}
