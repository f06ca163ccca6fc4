//! Integration tests for vp-sim.

use vp_core::{Action, DroneId, FatoId, FlightState, GateId, HoldingPointId, SimParams, Vec3};
use vp_events::EventKind;
use vp_layout::{
    Fato, Gate, HoldingPoint, ScenarioConfig, TrafficProfile, TrafficProfileType,
    VertiportLayout,
};

use crate::{Snapshot, VertiportSim};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Scenario with one FATO and a colinear corridor along x:
///
/// ```text
/// entry(-20) → wp(-10) → holding(-5) → pad(0)      exit(+20)
/// ```
///
/// At the default 5 m/s and Δt = 0.1 s, a drone covers 0.5 m per tick.
fn corridor_config(drones: usize) -> ScenarioConfig {
    ScenarioConfig {
        vertiport: VertiportLayout {
            fatos: vec![Fato {
                id: FatoId(0),
                position: Vec3::ZERO,
                approach_path: vec![Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0)],
            }],
            holding_points: vec![HoldingPoint {
                id: HoldingPointId(0),
                position: Vec3::new(-5.0, 0.0, 0.0),
                fato: FatoId(0),
            }],
            gates: vec![
                Gate {
                    id: GateId(0),
                    position: Vec3::new(-20.0, 0.0, 0.0),
                    is_entry: true,
                    is_exit: false,
                },
                Gate {
                    id: GateId(1),
                    position: Vec3::new(20.0, 0.0, 0.0),
                    is_entry: false,
                    is_exit: true,
                },
            ],
        },
        traffic: TrafficProfile {
            profile_type: TrafficProfileType::SteadyFlow,
            arrival_rate: 0.5,
            max_drones: drones,
            spawn_interval: 10,
        },
        simulation: SimParams::default(),
    }
}

/// Procedural action script: `Continue` everywhere, `GrantClearance` for any
/// drone currently holding.  Drives a full mission without a controller.
fn auto_actions(snapshot: &Snapshot) -> Vec<Action> {
    snapshot
        .states
        .iter()
        .map(|s| match s {
            FlightState::AwaitingClearance => Action::GrantClearance,
            _ => Action::Continue,
        })
        .collect()
}

/// Step with `auto_actions` until `pred` holds, up to `max_ticks`.
///
/// Panics if the predicate never fires — a hung mission is a test failure.
fn run_until(
    sim: &mut VertiportSim,
    max_ticks: usize,
    pred: impl Fn(&Snapshot) -> bool,
) -> Snapshot {
    let mut snapshot = sim.snapshot();
    for _ in 0..max_ticks {
        if pred(&snapshot) {
            return snapshot;
        }
        snapshot = sim.step(&auto_actions(&snapshot)).unwrap();
    }
    panic!("predicate not reached within {max_ticks} ticks");
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn new_validates_config() {
        let mut config = corridor_config(1);
        config.vertiport.fatos.clear();
        assert!(VertiportSim::new(&config).is_err());
    }

    #[test]
    fn new_rejects_bad_params() {
        let mut config = corridor_config(1);
        config.simulation.time_step = 0.0;
        assert!(VertiportSim::new(&config).is_err());
    }

    #[test]
    fn new_is_immediately_steppable() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        assert_eq!(sim.drone_count(), 2);
        assert_eq!(sim.fato_count(), 1);
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.count_in_state(FlightState::EnRouteToEntry), 2);
        assert!(snapshot.positions.iter().all(|&p| p == Vec3::new(-20.0, 0.0, 0.0)));
        assert!(snapshot.fato_occupancy.iter().all(|&o| !o));
        sim.step(&[Action::Continue, Action::Continue]).unwrap();
    }

    #[test]
    fn action_count_mismatch_errors() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        let result = sim.step(&[Action::Continue]);
        assert!(matches!(
            result,
            Err(crate::SimError::ActionCountMismatch { expected: 2, got: 1 })
        ));
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;

    #[test]
    fn round_trip_reset_restores_initial_snapshot() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        let initial = sim.snapshot();

        // Run the episode well past landing, then reset.
        run_until(&mut sim, 400, |s| s.count_in_state(FlightState::OnPad) > 0);
        let after_reset = sim.reset();

        assert_eq!(after_reset, initial);
        assert_eq!(sim.current_tick(), vp_core::Tick::ZERO);
    }

    #[test]
    fn reset_emits_fresh_mission_started_events() {
        let mut sim = VertiportSim::new(&corridor_config(3)).unwrap();
        run_until(&mut sim, 100, |s| {
            s.count_in_state(FlightState::AwaitingClearance) > 0
        });
        assert!(sim.log().len() > 3, "mid-episode log should hold extra events");

        sim.reset();
        assert_eq!(sim.log().len(), 3);
        assert_eq!(sim.log().count(EventKind::MissionStarted), 3);
    }

    #[test]
    fn reset_clears_occupancy_and_ground_time() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let landed = run_until(&mut sim, 400, |s| s.fato_occupancy[0]);
        assert!(landed.fato_occupancy[0]);

        let snapshot = sim.reset();
        assert!(!snapshot.fato_occupancy[0]);
        // The drone departs on schedule after re-landing, which it could not
        // if residual ground time survived the reset.
        let relanded = run_until(&mut sim, 400, |s| s.fato_occupancy[0]);
        assert_eq!(relanded.states[0], FlightState::OnPad);
    }
}

// ── Motion pass ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn continue_moves_at_cruise_speed() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let snapshot = sim.step(&[Action::Continue]).unwrap();
        // One tick toward (-10, 0, 0) at 5 m/s × 0.1 s.
        assert_eq!(snapshot.velocities[0], Vec3::new(5.0, 0.0, 0.0));
        assert!((snapshot.positions[0].x - (-19.5)).abs() < 1e-9);
        assert!(!snapshot.hovering[0]);
    }

    #[test]
    fn acceleration_is_velocity_delta_over_dt() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s1 = sim.step(&[Action::Continue]).unwrap();
        // From rest to 5 m/s in one 0.1 s tick.
        assert!((s1.accelerations[0].x - 50.0).abs() < 1e-9);
        let s2 = sim.step(&[Action::Continue]).unwrap();
        // Constant velocity: zero acceleration.
        assert!(s2.accelerations[0].norm() < 1e-9);
    }

    #[test]
    fn hover_counts_rising_edges_only() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s = sim.step(&[Action::Hover]).unwrap();
        assert_eq!(s.hover_counts[0], 1);
        assert!(s.hovering[0]);
        assert_eq!(s.velocities[0], Vec3::ZERO);

        // Sustained hover: no further increments.
        let s = sim.step(&[Action::Hover]).unwrap();
        assert_eq!(s.hover_counts[0], 1);

        // Break the hover, then hover again: second episode.
        sim.step(&[Action::Continue]).unwrap();
        let s = sim.step(&[Action::Hover]).unwrap();
        assert_eq!(s.hover_counts[0], 2);
    }

    #[test]
    fn reserved_actions_leave_velocity_untouched() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s1 = sim.step(&[Action::Continue]).unwrap();
        let v = s1.velocities[0];
        assert!(v.norm() > 0.0);

        // Reserved action: the drone coasts at its previous velocity.
        let s2 = sim.step(&[Action::Reserved2]).unwrap();
        assert_eq!(s2.velocities[0], v);
        assert!((s2.positions[0].x - (-19.0)).abs() < 1e-9);
        assert!(s2.accelerations[0].norm() < 1e-9);

        let s3 = sim.step(&[Action::Reserved3]).unwrap();
        assert_eq!(s3.velocities[0], v);
    }

    #[test]
    fn awaiting_clearance_is_pinned() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        run_until(&mut sim, 100, |s| {
            s.states[0] == FlightState::AwaitingClearance
        });

        // Continue is ignored while holding.
        let s = sim.step(&[Action::Continue]).unwrap();
        assert_eq!(s.states[0], FlightState::AwaitingClearance);
        assert_eq!(s.velocities[0], Vec3::ZERO);
        assert!(s.hovering[0]);
    }

    #[test]
    fn continue_within_arrival_radius_waits_in_place() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        // Reach the holding point, grant, and land: on each waypoint arrival
        // the velocity for the arriving tick was forced to zero once within
        // the radius.  Verify at the holding point specifically.
        let s = run_until(&mut sim, 100, |s| {
            s.states[0] == FlightState::AwaitingClearance
        });
        let d = s.positions[0].distance(Vec3::new(-5.0, 0.0, 0.0));
        assert!(d <= sim.params().arrival_radius);
    }
}

// ── Clearance protocol ────────────────────────────────────────────────────────

#[cfg(test)]
mod clearance {
    use super::*;

    fn drive_to_holding(sim: &mut VertiportSim) {
        run_until(sim, 100, |s| s.states[0] == FlightState::AwaitingClearance);
    }

    #[test]
    fn grant_ignored_outside_awaiting() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s = sim.step(&[Action::GrantClearance]).unwrap();
        assert_eq!(s.states[0], FlightState::EnRouteToEntry);
        assert!(!s.clearance_granted[0]);
    }

    #[test]
    fn same_tick_grant_is_consumed_same_tick() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        drive_to_holding(&mut sim);

        let s = sim.step(&[Action::GrantClearance]).unwrap();
        // Clearance pass runs before the advance pass, so one tick suffices.
        assert_eq!(s.states[0], FlightState::ClearedToLand);
        // Consumed on transition — the flag never survives it.
        assert!(!s.clearance_granted[0]);
        assert_eq!(sim.log().count(EventKind::ClearanceGranted), 1);
    }

    #[test]
    fn no_grant_means_indefinite_hold() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        drive_to_holding(&mut sim);

        for _ in 0..50 {
            let s = sim.step(&[Action::Continue]).unwrap();
            assert_eq!(s.states[0], FlightState::AwaitingClearance);
        }
        assert_eq!(sim.log().count(EventKind::ClearanceGranted), 0);
    }

    #[test]
    fn clearance_flag_true_only_while_awaiting() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let mut snapshot = sim.snapshot();
        for _ in 0..400 {
            for (i, &granted) in snapshot.clearance_granted.iter().enumerate() {
                if granted {
                    assert_eq!(snapshot.states[i], FlightState::AwaitingClearance);
                }
            }
            if snapshot.all_finished() {
                return;
            }
            snapshot = sim.step(&auto_actions(&snapshot)).unwrap();
        }
        panic!("mission did not finish");
    }
}

// ── Pad allocation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pads {
    use super::*;

    #[test]
    fn ground_time_gates_departure() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        run_until(&mut sim, 400, |s| s.states[0] == FlightState::OnPad);

        // ground_time = 5.0 s at Δt = 0.1 s → 50 ticks on the pad, counting
        // the landing tick (which accrues nothing).
        let mut on_pad_ticks = 1;
        loop {
            let s = sim.step(&[Action::Continue]).unwrap();
            if s.states[0] != FlightState::OnPad {
                assert_eq!(s.states[0], FlightState::EnRouteToExit);
                break;
            }
            on_pad_ticks += 1;
            assert!(on_pad_ticks < 100, "drone never vacated");
        }
        assert_eq!(on_pad_ticks, 50);
        assert_eq!(sim.log().count(EventKind::FatoVacated), 1);
    }

    #[test]
    fn tie_break_lower_index_wins() {
        // Both drones share the gate and FATO and fly in lockstep, so both
        // become pad-eligible in the same advance pass.
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        let s = run_until(&mut sim, 400, |s| {
            s.count_in_state(FlightState::OnPad) > 0
        });

        assert_eq!(s.states[0], FlightState::OnPad);
        assert_eq!(s.states[1], FlightState::ClearedToLand);
        assert!(s.fato_occupancy[0]);

        let occupied_events: Vec<_> = sim
            .log()
            .events()
            .iter()
            .filter(|e| e.kind == EventKind::FatoOccupied)
            .collect();
        assert_eq!(occupied_events.len(), 1);
        assert_eq!(occupied_events[0].drone, Some(DroneId(0)));
    }

    #[test]
    fn deferred_drone_lands_once_pad_frees() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        run_until(&mut sim, 400, |s| s.states[0] == FlightState::OnPad);

        // Drone 1 queues in ClearedToLand for drone 0's full ground time.
        let s = run_until(&mut sim, 100, |s| s.states[1] == FlightState::OnPad);

        // The advance pass is sequential by index, so the vacate (drone 0)
        // and the acquisition (drone 1) land in the same tick.
        assert_eq!(s.states[0], FlightState::EnRouteToExit);
        assert!(s.fato_occupancy[0]);
        assert_eq!(sim.log().count(EventKind::FatoOccupied), 2);
        assert_eq!(sim.log().count(EventKind::FatoVacated), 1);
    }

    #[test]
    fn occupancy_flag_tracks_occupant_exactly() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();
        let mut snapshot = sim.snapshot();
        for _ in 0..700 {
            let on_pad = snapshot.count_in_state(FlightState::OnPad);
            let occupied = snapshot.fato_occupancy.iter().filter(|&&o| o).count();
            assert!(on_pad <= 1, "single FATO can hold at most one drone");
            assert_eq!(on_pad, occupied);
            if snapshot.all_finished() {
                return;
            }
            snapshot = sim.step(&auto_actions(&snapshot)).unwrap();
        }
        panic!("mission did not finish");
    }
}

// ── Waypoint progress ─────────────────────────────────────────────────────────

#[cfg(test)]
mod waypoints {
    use super::*;

    #[test]
    fn target_advances_through_arrival_plan() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s0 = sim.snapshot();
        assert_eq!(s0.target_waypoints[0], Vec3::new(-10.0, 0.0, 0.0));

        let s = run_until(&mut sim, 100, |s| {
            s.states[0] == FlightState::AwaitingClearance
        });
        // Holding: target is the holding waypoint itself.
        assert_eq!(s.target_waypoints[0], Vec3::new(-5.0, 0.0, 0.0));

        let s = sim.step(&[Action::GrantClearance]).unwrap();
        assert_eq!(s.target_waypoints[0], Vec3::ZERO);
    }

    #[test]
    fn on_pad_targets_own_position() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s = run_until(&mut sim, 400, |s| s.states[0] == FlightState::OnPad);
        assert_eq!(s.target_waypoints[0], s.positions[0]);
    }

    #[test]
    fn mission_completes_and_stays_finished() {
        let mut sim = VertiportSim::new(&corridor_config(1)).unwrap();
        let s = run_until(&mut sim, 400, |s| s.all_finished());
        assert_eq!(sim.log().count(EventKind::MissionCompleted), 1);
        // Finished drones target their own position and never move again.
        assert_eq!(s.target_waypoints[0], s.positions[0]);
        let s2 = sim.step(&[Action::Continue]).unwrap();
        assert_eq!(s2.positions[0], s.positions[0]);
        assert_eq!(s2.states[0], FlightState::Finished);
    }
}

// ── Separation monitoring ─────────────────────────────────────────────────────

#[cfg(test)]
mod separation {
    use super::*;
    use crate::{DistanceMatrix, DISTANCE_SENTINEL};

    #[test]
    fn self_distance_is_sentinel() {
        let m = DistanceMatrix::compute(&[Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)]);
        assert_eq!(m.get(0, 0), DISTANCE_SENTINEL);
        assert_eq!(m.get(1, 1), DISTANCE_SENTINEL);
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
        assert_eq!(m.get(0, 1), m.get(1, 0));
    }

    #[test]
    fn lone_drone_never_collides_with_itself() {
        let m = DistanceMatrix::compute(&[Vec3::ZERO]);
        assert!(!m.any_collision(0.5));
        assert!(m.pairs_below(6.0).is_empty());
    }

    #[test]
    fn non_finite_distance_clamped() {
        let m = DistanceMatrix::compute(&[Vec3::ZERO, Vec3::new(f64::NAN, 0.0, 0.0)]);
        assert_eq!(m.get(0, 1), DISTANCE_SENTINEL);
    }

    #[test]
    fn pairs_below_lists_unordered_pairs_once() {
        let positions = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(100.0, 0.0, 0.0)];
        let m = DistanceMatrix::compute(&positions);
        let pairs = m.pairs_below(6.0);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].0, pairs[0].1), (0, 1));
        assert!((pairs[0].2 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn stacked_drones_raise_collision_flag() {
        // Both drones spawn at the shared entry gate: zero separation.
        let sim = VertiportSim::new(&corridor_config(2)).unwrap();
        let snapshot = sim.snapshot();
        assert!(snapshot.collision);
        assert_eq!(snapshot.distances.get(0, 1), 0.0);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn identical_action_sequences_reproduce_snapshots() {
        let config = corridor_config(2);
        let mut a = VertiportSim::new(&config).unwrap();
        let mut b = VertiportSim::new(&config).unwrap();

        let mut snap_a = a.snapshot();
        for _ in 0..300 {
            let actions = auto_actions(&snap_a);
            snap_a = a.step(&actions).unwrap();
            let snap_b = b.step(&actions).unwrap();
            assert_eq!(snap_a, snap_b);
        }
    }

    #[test]
    fn acquisition_order_reproducible_across_resets() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();

        let first_occupant = |sim: &mut VertiportSim| {
            run_until(sim, 400, |s| s.count_in_state(FlightState::OnPad) > 0);
            sim.log()
                .events()
                .iter()
                .find(|e| e.kind == EventKind::FatoOccupied)
                .and_then(|e| e.drone)
                .unwrap()
        };

        let winner1 = first_occupant(&mut sim);
        sim.reset();
        let winner2 = first_occupant(&mut sim);
        assert_eq!(winner1, winner2);
        assert_eq!(winner1, DroneId(0));
    }
}

// ── Concrete two-drone scenario ───────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use super::*;

    /// One FATO, one entry gate, one exit gate, 2-waypoint approach, two
    /// drones.  Drone 0 flies the full procedure; drone 1 starts one tick
    /// later.  Drone 0 must land first, drone 1 must queue in ClearedToLand
    /// until the vacate, and each drone contributes one occupied/vacated
    /// pair by episode end.
    #[test]
    fn staggered_pair_lands_in_sequence() {
        let mut sim = VertiportSim::new(&corridor_config(2)).unwrap();

        // Tick 1: drone 1 waits out its stagger.
        let mut snapshot = sim.step(&[Action::Continue, Action::Hover]).unwrap();

        let mut saw_queued_follower = false;
        for _ in 0..800 {
            if snapshot.all_finished() {
                break;
            }
            if snapshot.states[0] == FlightState::OnPad
                && snapshot.states[1] == FlightState::ClearedToLand
            {
                saw_queued_follower = true;
            }
            snapshot = sim.step(&auto_actions(&snapshot)).unwrap();
        }

        assert!(snapshot.all_finished(), "both missions should complete");
        assert!(
            saw_queued_follower,
            "drone 1 should have queued in ClearedToLand while drone 0 held the pad"
        );

        // One occupied/vacated pair per drone.
        assert_eq!(sim.log().count(EventKind::FatoOccupied), 2);
        assert_eq!(sim.log().count(EventKind::FatoVacated), 2);
        assert_eq!(sim.log().count(EventKind::MissionCompleted), 2);

        // Drone 0 acquired first.
        let first = sim
            .log()
            .events()
            .iter()
            .find(|e| e.kind == EventKind::FatoOccupied)
            .unwrap();
        assert_eq!(first.drone, Some(DroneId(0)));
    }
}
