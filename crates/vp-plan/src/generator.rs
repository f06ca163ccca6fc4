//! Round-robin plan generation from a vertiport layout.

use vp_core::{DroneId, FatoId, Vec3};
use vp_layout::{Gate, VertiportLayout};

use crate::{FlightPlan, PlanError, PlanResult};

/// One arrival and one departure plan per drone, plus the FATO assignment
/// rule, generated once per engine construction.
///
/// Both vectors are indexed by `DroneId` and have exactly `drone_count`
/// elements.
#[derive(Clone, Debug)]
pub struct PlanSet {
    arrivals: Vec<FlightPlan>,
    departures: Vec<FlightPlan>,
    fato_count: usize,
}

impl PlanSet {
    /// Generate plans for `drone_count` drones from `layout`.
    ///
    /// Deterministic: drone *i* is assigned FATO `i mod F`, entry gate
    /// `i mod G_in`, and exit gate `i mod G_out`, all in layout declaration
    /// order.
    ///
    /// # Errors
    ///
    /// Fails when the layout has no FATOs, no entry gates, no exit gates, or
    /// when `drone_count` is zero.  A layout that passed
    /// [`VertiportLayout::validate`] can only trip the zero-drone check.
    pub fn generate(layout: &VertiportLayout, drone_count: usize) -> PlanResult<Self> {
        if drone_count == 0 {
            return Err(PlanError::NoDrones);
        }
        if layout.fatos.is_empty() {
            return Err(PlanError::NoFatos);
        }
        let entry_gates: Vec<&Gate> = layout.entry_gates().collect();
        if entry_gates.is_empty() {
            return Err(PlanError::NoEntryGates);
        }
        let exit_gates: Vec<&Gate> = layout.exit_gates().collect();
        if exit_gates.is_empty() {
            return Err(PlanError::NoExitGates);
        }

        let mut arrivals = Vec::with_capacity(drone_count);
        let mut departures = Vec::with_capacity(drone_count);

        for i in 0..drone_count {
            let fato = &layout.fatos[i % layout.fatos.len()];
            let entry = entry_gates[i % entry_gates.len()];
            let exit = exit_gates[i % exit_gates.len()];

            // Arrival: entry gate, approach waypoints, pad.
            let mut inbound: Vec<Vec3> =
                Vec::with_capacity(fato.approach_path.len() + 2);
            inbound.push(entry.position);
            inbound.extend(fato.approach_path.iter().copied());
            inbound.push(fato.position);
            arrivals.push(FlightPlan::new(inbound));

            // Departure: pad, approach waypoints in reverse, exit gate.
            let mut outbound: Vec<Vec3> =
                Vec::with_capacity(fato.approach_path.len() + 2);
            outbound.push(fato.position);
            outbound.extend(fato.approach_path.iter().rev().copied());
            outbound.push(exit.position);
            departures.push(FlightPlan::new(outbound));
        }

        Ok(Self {
            arrivals,
            departures,
            fato_count: layout.fatos.len(),
        })
    }

    /// The arrival plan for `drone`.
    #[inline]
    pub fn arrival(&self, drone: DroneId) -> &FlightPlan {
        &self.arrivals[drone.index()]
    }

    /// The departure plan for `drone`.
    #[inline]
    pub fn departure(&self, drone: DroneId) -> &FlightPlan {
        &self.departures[drone.index()]
    }

    /// The FATO assigned to `drone` by the round-robin rule.
    #[inline]
    pub fn assigned_fato(&self, drone: DroneId) -> FatoId {
        FatoId((drone.index() % self.fato_count) as u16)
    }

    pub fn drone_count(&self) -> usize {
        self.arrivals.len()
    }

    pub fn fato_count(&self) -> usize {
        self.fato_count
    }
}
