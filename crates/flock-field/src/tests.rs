//! Unit tests for the flocking integrator.

use flock_agent::BehaviorStore;
use flock_core::{AgentId, AgentState, Tick, Vec2};

use crate::{FlockConfig, FrameBuffer, Integrator};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn buffer_at(positions: Vec<Vec2>) -> FrameBuffer {
    let n = positions.len();
    FrameBuffer::new(positions, vec![Vec2::ZERO; n])
}

fn step_once(cfg: &FlockConfig, behavior: &BehaviorStore, frames: &mut FrameBuffer) {
    Integrator::step(cfg, behavior, frames, Tick(1));
    frames.publish();
}

// ── Frame buffer ─────────────────────────────────────────────────────────────

#[test]
fn publish_swaps_front_and_back() {
    let mut frames = buffer_at(vec![Vec2::new(1.0, 1.0)]);
    {
        let (_, back) = frames.split();
        back.positions[0] = Vec2::new(9.0, 9.0);
    }
    // Not yet published: consumers still see the old front.
    assert_eq!(frames.front().positions[0], Vec2::new(1.0, 1.0));
    frames.publish();
    assert_eq!(frames.front().positions[0], Vec2::new(9.0, 9.0));
}

#[test]
fn front_is_stale_until_publish() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(2);
    let mut frames = buffer_at(vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)]);

    let before = frames.front().positions.clone();
    Integrator::step(&cfg, &behavior, &mut frames, Tick(1));
    // Integration happened into the back frame only.
    assert_eq!(frames.front().positions, before);
    frames.publish();
    assert_ne!(frames.front().positions, before);
    assert_eq!(frames.front().tick, Tick(1));
}

// ── Per-state rules ──────────────────────────────────────────────────────────

#[test]
fn inactive_agents_do_not_move() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.states[0] = AgentState::Inactive;
    let mut frames = FrameBuffer::new(vec![Vec2::new(2.0, 3.0)], vec![Vec2::new(1.0, 1.0)]);

    step_once(&cfg, &behavior, &mut frames);
    assert_eq!(frames.front().positions[0], Vec2::new(2.0, 3.0));
    assert_eq!(frames.front().velocities[0], Vec2::ZERO);
}

#[test]
fn frozen_holds_position_and_exposes_facing() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.set_frozen(AgentId(0), Vec2::new(0.0, -1.0));
    let mut frames = buffer_at(vec![Vec2::new(4.0, 4.0)]);

    for _ in 0..10 {
        step_once(&cfg, &behavior, &mut frames);
    }
    // Zero net displacement over any number of steps.
    assert_eq!(frames.front().positions[0], Vec2::new(4.0, 4.0));
    // Velocity slot carries the orientation hint.
    assert_eq!(frames.front().velocities[0], Vec2::new(0.0, -1.0));
}

#[test]
fn frozen_degenerate_facing_keeps_previous_heading() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.set_frozen(AgentId(0), Vec2::ZERO);
    let mut frames = FrameBuffer::new(vec![Vec2::ZERO], vec![Vec2::new(0.3, 0.4)]);

    step_once(&cfg, &behavior, &mut frames);
    assert_eq!(frames.front().velocities[0], Vec2::new(0.3, 0.4));
}

#[test]
fn seeking_moves_toward_target_at_boosted_speed() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.set_seeking(AgentId(0), Vec2::new(10.0, 0.0));
    let mut frames = buffer_at(vec![Vec2::ZERO]);

    step_once(&cfg, &behavior, &mut frames);
    let v = frames.front().velocities[0];
    let expected = cfg.base_speed * cfg.seek_multiplier;
    assert!((v.length() - expected).abs() < 1e-6);
    assert!(v.x > 0.0 && v.z.abs() < 1e-6);
    assert_eq!(frames.front().positions[0], Vec2::new(expected, 0.0));
}

#[test]
fn seeking_holds_inside_arrival_radius() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.set_seeking(AgentId(0), Vec2::new(0.1, 0.0)); // within 0.2
    let mut frames = buffer_at(vec![Vec2::ZERO]);

    step_once(&cfg, &behavior, &mut frames);
    assert_eq!(frames.front().positions[0], Vec2::ZERO);
}

#[test]
fn seeking_without_target_holds() {
    let cfg = FlockConfig::default();
    let mut behavior = BehaviorStore::new(1);
    behavior.states[0] = AgentState::Seeking; // target stays None
    let mut frames = buffer_at(vec![Vec2::new(1.0, 2.0)]);

    step_once(&cfg, &behavior, &mut frames);
    assert_eq!(frames.front().positions[0], Vec2::new(1.0, 2.0));
}

// ── Flocking rules ───────────────────────────────────────────────────────────

#[test]
fn flocking_speed_is_exactly_base_speed() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(3);
    let mut frames = FrameBuffer::new(
        vec![Vec2::ZERO, Vec2::new(0.5, 0.0), Vec2::new(-0.3, 0.4)],
        vec![Vec2::new(0.02, 0.01), Vec2::new(-0.05, 0.0), Vec2::ZERO],
    );

    for _ in 0..25 {
        step_once(&cfg, &behavior, &mut frames);
        for &v in &frames.front().velocities {
            assert!(
                (v.length() - cfg.base_speed).abs() < 1e-5,
                "speed {} drifted from base {}",
                v.length(),
                cfg.base_speed
            );
        }
    }
}

#[test]
fn zero_velocity_falls_back_to_forward_heading() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(1);
    // Lone agent at the origin, zero velocity, no forces: degenerate sum.
    let mut frames = buffer_at(vec![Vec2::ZERO]);

    step_once(&cfg, &behavior, &mut frames);
    let v = frames.front().velocities[0];
    assert!((v.z - cfg.base_speed).abs() < 1e-6);
    assert!(v.x.abs() < 1e-6);
}

#[test]
fn separation_pushes_crowded_agents_apart() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(2);
    let mut frames = FrameBuffer::new(
        vec![Vec2::new(-0.2, 0.0), Vec2::new(0.2, 0.0)],
        // Both drifting +z so separation is the only x-axis influence.
        vec![Vec2::new(0.0, 0.05), Vec2::new(0.0, 0.05)],
    );

    let gap_before = frames.front().positions[0].distance_sq(frames.front().positions[1]);
    step_once(&cfg, &behavior, &mut frames);
    let gap_after = frames.front().positions[0].distance_sq(frames.front().positions[1]);
    assert!(gap_after > gap_before, "{gap_after} <= {gap_before}");
}

#[test]
fn coincident_neighbors_do_not_produce_nan() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(2);
    let mut frames = buffer_at(vec![Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)]);

    step_once(&cfg, &behavior, &mut frames);
    for &p in &frames.front().positions {
        assert!(p.x.is_finite() && p.z.is_finite());
    }
    for &v in &frames.front().velocities {
        assert!(v.x.is_finite() && v.z.is_finite());
        assert!((v.length() - cfg.base_speed).abs() < 1e-5);
    }
}

#[test]
fn containment_turns_escapees_back() {
    let mut cfg = FlockConfig::default();
    cfg.arena_half_size = 5.0;
    let behavior = BehaviorStore::new(1);
    // Outside the square, drifting along the boundary.
    let mut frames = FrameBuffer::new(
        vec![Vec2::new(6.0, 0.0)],
        vec![Vec2::new(0.0, cfg.base_speed)],
    );

    // Containment accumulates against the outward heading each step until
    // the agent turns around.
    let mut turned = false;
    for _ in 0..200 {
        step_once(&cfg, &behavior, &mut frames);
        if frames.front().velocities[0].x < 0.0 {
            turned = true;
            break;
        }
    }
    assert!(turned, "agent never turned back toward the arena");
}

#[test]
fn inside_arena_no_containment_force() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(1);
    let mut frames = FrameBuffer::new(
        vec![Vec2::new(3.0, 3.0)],
        vec![Vec2::new(0.0, cfg.base_speed)],
    );

    step_once(&cfg, &behavior, &mut frames);
    // Heading unchanged: renormalization of an unchanged velocity.
    let v = frames.front().velocities[0];
    assert!(v.x.abs() < 1e-6);
    assert!((v.z - cfg.base_speed).abs() < 1e-6);
}

// ── Determinism ──────────────────────────────────────────────────────────────

#[test]
fn integration_is_deterministic() {
    let cfg = FlockConfig::default();
    let behavior = BehaviorStore::new(8);
    let spawn: Vec<Vec2> = (0..8)
        .map(|i| Vec2::new(i as f32 * 0.4 - 1.6, (i % 3) as f32 * 0.5))
        .collect();

    let mut a = buffer_at(spawn.clone());
    let mut b = buffer_at(spawn);
    for _ in 0..50 {
        step_once(&cfg, &behavior, &mut a);
        step_once(&cfg, &behavior, &mut b);
    }
    assert_eq!(a.front().positions, b.front().positions);
    assert_eq!(a.front().velocities, b.front().velocities);
}
