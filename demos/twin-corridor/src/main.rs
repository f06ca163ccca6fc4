//! twin-corridor — smallest runnable demo for the vertisim framework.
//!
//! Two drones fly complete arrival/landing/departure missions down two
//! parallel approach corridors 50 m apart, under first-come-first-served
//! tower control.  The episode's event log lands in
//! `output/twin-corridor/events.csv`, and a short evaluation batch shows the
//! aggregate statistics a training harness would consume.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use vp_env::{evaluate, run_episode, Difficulty, FcfsController, VertiportEnv};
use vp_events::CsvEventWriter;
use vp_layout::ScenarioConfig;

// ── Constants ─────────────────────────────────────────────────────────────────

const DIFFICULTY: Difficulty = Difficulty::Hard;
const EVAL_EPISODES: usize = 5;

// ── Scenario ──────────────────────────────────────────────────────────────────

// Two FATOs with mirrored corridors at y = 0 and y = 50: entry gate at
// x = −20, two approach waypoints, pad at x = 0, exit gate at x = +20.
// Round-robin assignment gives each drone its own corridor.
const SCENARIO_JSON: &str = r#"{
    "vertiport": {
        "fatos": [
            { "id": 0, "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
              "approach_path": [ { "x": -10.0, "y": 0.0, "z": 0.0 },
                                 { "x": -5.0, "y": 0.0, "z": 0.0 } ] },
            { "id": 1, "position": { "x": 0.0, "y": 50.0, "z": 0.0 },
              "approach_path": [ { "x": -10.0, "y": 50.0, "z": 0.0 },
                                 { "x": -5.0, "y": 50.0, "z": 0.0 } ] }
        ],
        "holding_points": [
            { "id": 0, "position": { "x": -5.0, "y": 0.0, "z": 0.0 }, "fato": 0 },
            { "id": 1, "position": { "x": -5.0, "y": 50.0, "z": 0.0 }, "fato": 1 }
        ],
        "gates": [
            { "id": 0, "position": { "x": -20.0, "y": 0.0, "z": 0.0 },
              "is_entry": true, "is_exit": false },
            { "id": 1, "position": { "x": 20.0, "y": 0.0, "z": 0.0 },
              "is_entry": false, "is_exit": true },
            { "id": 2, "position": { "x": -20.0, "y": 50.0, "z": 0.0 },
              "is_entry": true, "is_exit": false },
            { "id": 3, "position": { "x": 20.0, "y": 50.0, "z": 0.0 },
              "is_entry": false, "is_exit": true }
        ]
    },
    "traffic": { "profile_type": "steady_flow", "arrival_rate": 0.5,
                 "max_drones": 2, "spawn_interval": 10 },
    "simulation": { "time_step": 0.1, "min_separation": 6.0 }
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== twin-corridor — vertisim demo ===");

    // 1. Load the embedded scenario.
    let config = ScenarioConfig::from_json_reader(Cursor::new(SCENARIO_JSON))?;
    println!(
        "Scenario: {} drones | {} FATOs | {} gates | Δt = {} s",
        config.traffic.max_drones,
        config.vertiport.fato_count(),
        config.vertiport.gates.len(),
        config.simulation.time_step,
    );
    println!();

    // 2. One fully logged episode under FCFS control.
    std::fs::create_dir_all("output/twin-corridor")?;
    let events_path = Path::new("output/twin-corridor/events.csv");
    let writer = CsvEventWriter::create(events_path)?;

    let mut env =
        VertiportEnv::new(&config, DIFFICULTY)?.with_event_writer(Box::new(writer));
    let mut controller = FcfsController;

    let t0 = Instant::now();
    let stats = run_episode(&mut env, &mut controller, 0)?;
    let elapsed = t0.elapsed();

    println!("Episode complete in {:.3} s wall time", elapsed.as_secs_f64());
    println!("  length              : {} ticks", stats.episode_length);
    println!("  total reward        : {:.2}", stats.total_reward);
    println!("  missions completed  : {}", stats.missions_completed);
    println!("  collisions          : {}", stats.collisions);
    println!("  LOS pair-ticks      : {}", stats.los_violations);
    println!("  throughput          : {:.4} missions/s", stats.throughput);
    println!("  event log           : {} rows → {}", env.sim().log().len(), events_path.display());
    println!();

    // 3. Final drone state table.
    let snapshot = env.last_snapshot();
    println!("{:<8} {:<20} {:<24}", "Drone", "State", "Position");
    println!("{}", "-".repeat(52));
    for i in 0..snapshot.drone_count() {
        println!(
            "{:<8} {:<20} {:<24}",
            i,
            snapshot.states[i].to_string(),
            snapshot.positions[i].to_string(),
        );
    }
    println!();

    // 4. A short evaluation batch (fresh environment per episode).
    let summary = evaluate(&config, DIFFICULTY, EVAL_EPISODES, |_| {
        Box::new(FcfsController)
    })?;
    println!("Evaluation over {} episodes:", summary.episodes);
    println!("  mean length         : {:.1} ticks", summary.mean_episode_length);
    println!(
        "  mean reward         : {:.2} (σ = {:.2})",
        summary.mean_total_reward, summary.std_total_reward
    );
    println!("  completion rate     : {:.2} missions/episode", summary.completion_rate);
    println!("  success rate        : {:.0} %", summary.success_rate * 100.0);

    Ok(())
}
