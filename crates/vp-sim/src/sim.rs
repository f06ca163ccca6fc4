//! The `VertiportSim` engine and its tick pipeline.

use vp_core::{Action, DroneId, FlightState, SimClock, SimParams, Tick, Vec3};
use vp_events::{EventKind, EventLog};
use vp_layout::ScenarioConfig;
use vp_plan::PlanSet;

use crate::{DistanceMatrix, DroneStore, SimError, SimResult, Snapshot};

/// Numerical guard for near-zero distances in the motion pass.  Below this,
/// no unit direction is computed and the drone holds position.
const DIST_EPS: f64 = 1e-8;

/// The discrete-time vertiport engine.
///
/// Owns the full state of one episode — flight plans, drone store, pad
/// occupancy, event log, clock — exclusively.  See the crate docs for the
/// pipeline order; the clock advances at the start of each `step`, so every
/// event recorded during step *k* carries the end-of-step timestamp `k × Δt`
/// and the returned snapshot's tick equals the number of completed steps.
pub struct VertiportSim {
    params: SimParams,
    plans: PlanSet,
    drones: DroneStore,
    /// One flag per FATO; `true` iff some drone holds that pad.  Contended
    /// only through the sequential advance pass — no lock needed or wanted.
    fato_occupancy: Vec<bool>,
    clock: SimClock,
    log: EventLog,
}

impl VertiportSim {
    /// Build an engine from a scenario and bring it to its initial state.
    ///
    /// Validates the configuration, generates one arrival/departure plan
    /// pair per drone, and performs the first `reset` so the engine is
    /// immediately steppable.
    pub fn new(config: &ScenarioConfig) -> SimResult<Self> {
        config.validate()?;
        let drone_count = config.traffic.max_drones;
        let plans = PlanSet::generate(&config.vertiport, drone_count)?;
        let fato_count = plans.fato_count();

        let mut sim = Self {
            params: config.simulation.clone(),
            plans,
            drones: DroneStore::new(drone_count),
            fato_occupancy: vec![false; fato_count],
            clock: SimClock::new(config.simulation.time_step),
            log: EventLog::new(),
        };
        sim.reset();
        Ok(sim)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Re-initialize the episode completely.  Never partial: every drone
    /// returns to the first arrival waypoint with zeroed kinematics, pad
    /// occupancy and residual ground time are cleared, the clock rewinds,
    /// and the event log starts fresh with one `MissionStarted` per drone.
    pub fn reset(&mut self) -> Snapshot {
        self.clock.rewind();
        self.log.clear();
        self.fato_occupancy.fill(false);

        for i in 0..self.drones.count {
            let drone = DroneId(i as u32);
            self.drones.positions[i] = self.plans.arrival(drone).first();
            self.drones.velocities[i] = Vec3::ZERO;
            self.drones.accelerations[i] = Vec3::ZERO;
            self.drones.waypoint_indices[i] = 1;
            self.drones.states[i] = FlightState::EnRouteToEntry;
            self.drones.hovering[i] = false;
            self.drones.hover_counts[i] = 0;
            self.drones.clearance_granted[i] = false;
            self.drones.ground_times[i] = 0.0;

            self.log.record_for(0.0, EventKind::MissionStarted, drone);
        }

        self.snapshot()
    }

    /// Advance the simulation by one tick.
    ///
    /// `actions` must hold exactly one entry per drone.
    ///
    /// # Errors
    ///
    /// [`SimError::ActionCountMismatch`] on a malformed action vector;
    /// [`SimError::Invariant`] if the post-tick occupancy check fails (a
    /// defect, not a recoverable condition).
    pub fn step(&mut self, actions: &[Action]) -> SimResult<Snapshot> {
        let n = self.drones.count;
        if actions.len() != n {
            return Err(SimError::ActionCountMismatch { expected: n, got: actions.len() });
        }

        self.clock.advance();
        let dt = self.params.time_step;
        let prev_velocities = self.drones.velocities.clone();

        // ── ① Clearance pass ──────────────────────────────────────────────
        //
        // Before motion, so a clearance granted this tick can be consumed
        // by the advance pass this same tick.
        for i in 0..n {
            if actions[i] == Action::GrantClearance
                && self.drones.states[i] == FlightState::AwaitingClearance
            {
                self.drones.clearance_granted[i] = true;
            }
        }

        // ── ② Motion pass ─────────────────────────────────────────────────
        for i in 0..n {
            if self.drones.states[i].holds_position() {
                // Pinned regardless of the commanded action.
                self.drones.velocities[i] = Vec3::ZERO;
                self.drones.hovering[i] = true;
                continue;
            }

            match actions[i] {
                Action::Hover => {
                    self.drones.velocities[i] = Vec3::ZERO;
                    // Count hover episodes, not hover ticks.
                    if !self.drones.hovering[i] {
                        self.drones.hover_counts[i] += 1;
                    }
                    self.drones.hovering[i] = true;
                }
                Action::Continue => {
                    let target = self.target_waypoint(i);
                    let position = self.drones.positions[i];
                    let distance = position.distance(target);

                    self.drones.velocities[i] = if distance > self.params.arrival_radius {
                        match position.unit_toward(target, DIST_EPS) {
                            Some(unit) => unit * self.params.drone_speed,
                            None => Vec3::ZERO,
                        }
                    } else {
                        // Within the arrival radius: wait in place for the
                        // advance pass.
                        Vec3::ZERO
                    };
                    self.drones.hovering[i] = false;
                }
                // Unmapped actions (and a GrantClearance aimed at a moving
                // drone) leave velocity and the hovering flag untouched.
                Action::Reserved2 | Action::Reserved3 | Action::GrantClearance => {}
            }
        }

        // ── ③ Kinematics ──────────────────────────────────────────────────
        for i in 0..n {
            self.drones.accelerations[i] =
                (self.drones.velocities[i] - prev_velocities[i]) * (1.0 / dt);
            let delta = self.drones.velocities[i] * dt;
            self.drones.positions[i] += delta;
        }

        // ── ④ Ground-time accrual ─────────────────────────────────────────
        for i in 0..n {
            if self.drones.states[i] == FlightState::OnPad {
                self.drones.ground_times[i] += dt;
            }
        }

        // ── ⑤ Arrival-and-advance pass ────────────────────────────────────
        //
        // Ascending index order is the tie-break: when two drones become
        // eligible for the same FATO in one tick, the lower index wins and
        // the other is deferred to a later tick.
        for i in 0..n {
            if self.drones.states[i] == FlightState::Finished {
                continue;
            }
            let target = self.target_waypoint(i);
            // Inclusive bound: the motion pass stops moving a drone once the
            // remaining distance is not strictly greater than the radius, so
            // landing exactly on the radius must still count as arrival.
            if self.drones.positions[i].distance(target) <= self.params.arrival_radius {
                self.advance_mission(i);
            }
        }

        // ── ⑥ Invariant check ─────────────────────────────────────────────
        self.check_occupancy_invariant()?;

        Ok(self.snapshot())
    }

    /// Project the current state without stepping.
    pub fn snapshot(&self) -> Snapshot {
        let n = self.drones.count;
        let distances = DistanceMatrix::compute(&self.drones.positions);
        let collision = distances.any_collision(self.params.drone_radius);
        let target_waypoints = (0..n).map(|i| self.target_waypoint(i)).collect();

        Snapshot {
            tick: self.clock.current_tick,
            positions: self.drones.positions.clone(),
            velocities: self.drones.velocities.clone(),
            accelerations: self.drones.accelerations.clone(),
            target_waypoints,
            states: self.drones.states.clone(),
            fato_occupancy: self.fato_occupancy.clone(),
            distances,
            collision,
            hovering: self.drones.hovering.clone(),
            hover_counts: self.drones.hover_counts.clone(),
            clearance_granted: self.drones.clearance_granted.clone(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn drone_count(&self) -> usize {
        self.drones.count
    }

    pub fn fato_count(&self) -> usize {
        self.fato_occupancy.len()
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Simulated seconds elapsed since the last reset.
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Mutable access for the layer above — the reward projector appends
    /// collision and procedure-violation events to the same per-instance log.
    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The waypoint drone `i` is currently flying toward.
    ///
    /// Pinned states (`Inactive`, `OnPad`, `Finished`, and the reserved
    /// `EnRouteToPad`) target the drone's own position, which keeps the
    /// advance pass's distance gate trivially satisfied for `OnPad` — the
    /// ground-time condition alone decides when departure begins.
    fn target_waypoint(&self, i: usize) -> Vec3 {
        let drone = DroneId(i as u32);
        let wp = self.drones.waypoint_indices[i];
        match self.drones.states[i] {
            s if s.on_arrival_leg() => self.plans.arrival(drone).waypoint(wp),
            FlightState::EnRouteToExit => self.plans.departure(drone).waypoint(wp),
            _ => self.drones.positions[i],
        }
    }

    /// Advance drone `i`'s mission after it reached its target waypoint.
    fn advance_mission(&mut self, i: usize) {
        let drone = DroneId(i as u32);
        let now = self.clock.elapsed_secs();
        let wp = self.drones.waypoint_indices[i];

        match self.drones.states[i] {
            FlightState::EnRouteToEntry => {
                if wp == self.plans.arrival(drone).holding_index() {
                    self.drones.states[i] = FlightState::AwaitingClearance;
                    self.log.record_for(now, EventKind::HoldingPointReached, drone);
                } else {
                    self.drones.waypoint_indices[i] += 1;
                }
            }

            FlightState::AwaitingClearance => {
                // Holds position until the flag is latched; the motion pass
                // already pins it.
                if self.drones.clearance_granted[i] {
                    self.drones.states[i] = FlightState::ClearedToLand;
                    self.drones.clearance_granted[i] = false;
                    self.drones.waypoint_indices[i] += 1;
                    self.log.record_for(now, EventKind::ClearanceGranted, drone);
                }
            }

            FlightState::ClearedToLand => {
                if wp == self.plans.arrival(drone).last_index() {
                    let fato = self.plans.assigned_fato(drone);
                    if !self.fato_occupancy[fato.index()] {
                        self.fato_occupancy[fato.index()] = true;
                        self.drones.states[i] = FlightState::OnPad;
                        self.log.record(
                            now,
                            EventKind::FatoOccupied,
                            Some(drone),
                            Some(format!("FATO_{}", fato.0)),
                        );
                    }
                    // Pad occupied: queue at the threshold; re-checked every
                    // tick until the occupant vacates.
                } else {
                    self.drones.waypoint_indices[i] += 1;
                }
            }

            FlightState::OnPad => {
                if self.drones.ground_times[i] >= self.params.ground_time {
                    let fato = self.plans.assigned_fato(drone);
                    self.fato_occupancy[fato.index()] = false;
                    self.drones.states[i] = FlightState::EnRouteToExit;
                    // The single waypoint-index reset of the mission.
                    self.drones.waypoint_indices[i] = 1;
                    self.drones.ground_times[i] = 0.0;
                    self.log.record(
                        now,
                        EventKind::FatoVacated,
                        Some(drone),
                        Some(format!("FATO_{}", fato.0)),
                    );
                }
            }

            FlightState::EnRouteToExit => {
                if wp >= self.plans.departure(drone).last_index() {
                    self.drones.states[i] = FlightState::Finished;
                    self.log.record_for(now, EventKind::MissionCompleted, drone);
                } else {
                    self.drones.waypoint_indices[i] += 1;
                }
            }

            FlightState::Inactive | FlightState::EnRouteToPad | FlightState::Finished => {}
        }
    }

    /// Verify FATO mutual exclusion after the advance pass.
    fn check_occupancy_invariant(&self) -> SimResult<()> {
        let mut occupants = vec![0usize; self.fato_occupancy.len()];
        for i in 0..self.drones.count {
            if self.drones.states[i] == FlightState::OnPad {
                occupants[self.plans.assigned_fato(DroneId(i as u32)).index()] += 1;
            }
        }

        for (f, (&count, &flag)) in occupants.iter().zip(&self.fato_occupancy).enumerate() {
            if count > 1 {
                return Err(SimError::Invariant(format!(
                    "FATO_{f} occupied by {count} drones"
                )));
            }
            if (count == 1) != flag {
                return Err(SimError::Invariant(format!(
                    "FATO_{f} occupancy flag {flag} disagrees with {count} occupant(s)"
                )));
            }
        }
        Ok(())
    }
}
