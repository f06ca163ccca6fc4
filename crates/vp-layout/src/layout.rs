//! Physical vertiport layout: FATOs, holding points, and gates.

use serde::{Deserialize, Serialize};

use vp_core::{FatoId, GateId, HoldingPointId, Vec3};

use crate::{LayoutError, LayoutResult};

// ── Fato ─────────────────────────────────────────────────────────────────────

/// A Final Approach and Take-off area — one exclusive landing pad.
///
/// `approach_path` is the ordered waypoint chain connecting the holding
/// point to the pad; its first element doubles as the holding position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fato {
    pub id: FatoId,
    pub position: Vec3,
    pub approach_path: Vec<Vec3>,
}

// ── HoldingPoint ─────────────────────────────────────────────────────────────

/// A queueing fix where arriving drones await landing clearance.
///
/// The `fato` association is informational in the current scope: the engine
/// derives the holding position from the approach path, and no per-holding
/// occupancy is tracked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldingPoint {
    pub id: HoldingPointId,
    pub position: Vec3,
    /// The FATO this holding point serves.
    pub fato: FatoId,
}

// ── Gate ─────────────────────────────────────────────────────────────────────

/// An airspace entry/exit fix at the vertiport boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: GateId,
    pub position: Vec3,
    pub is_entry: bool,
    pub is_exit: bool,
}

// ── VertiportLayout ──────────────────────────────────────────────────────────

/// The complete immutable vertiport description.
///
/// Lists are ordered; plan generation assigns drones to FATOs and gates by
/// list position, so the ordering is part of the scenario's identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertiportLayout {
    pub fatos: Vec<Fato>,
    pub holding_points: Vec<HoldingPoint>,
    pub gates: Vec<Gate>,
}

impl VertiportLayout {
    /// Entry gates, in declaration order.
    pub fn entry_gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter().filter(|g| g.is_entry)
    }

    /// Exit gates, in declaration order.
    pub fn exit_gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter().filter(|g| g.is_exit)
    }

    pub fn fato_count(&self) -> usize {
        self.fatos.len()
    }

    pub fn holding_point_count(&self) -> usize {
        self.holding_points.len()
    }

    /// Check every count constraint and cross-reference.
    ///
    /// A layout that passes is safe for plan generation: at least one FATO,
    /// at least one entry and one exit gate, every approach path non-empty,
    /// and every holding point referencing a declared FATO.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.fatos.is_empty() {
            return Err(LayoutError::Config("layout declares no FATOs".into()));
        }
        if self.holding_points.is_empty() {
            return Err(LayoutError::Config("layout declares no holding points".into()));
        }
        if self.gates.is_empty() {
            return Err(LayoutError::Config("layout declares no gates".into()));
        }
        if self.entry_gates().next().is_none() {
            return Err(LayoutError::Config("layout declares no entry gates".into()));
        }
        if self.exit_gates().next().is_none() {
            return Err(LayoutError::Config("layout declares no exit gates".into()));
        }

        for fato in &self.fatos {
            if fato.approach_path.is_empty() {
                return Err(LayoutError::Config(format!(
                    "{} has an empty approach path",
                    fato.id
                )));
            }
        }

        for hp in &self.holding_points {
            if !self.fatos.iter().any(|f| f.id == hp.fato) {
                return Err(LayoutError::Config(format!(
                    "{} references undeclared {}",
                    hp.id, hp.fato
                )));
            }
        }

        Ok(())
    }
}
