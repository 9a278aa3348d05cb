//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PoiId, USER_AGENT};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(PoiId(100) > PoiId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(PoiId::INVALID.0, u16::MAX);
    }

    #[test]
    fn user_agent_is_index_zero() {
        assert_eq!(USER_AGENT, AgentId(0));
        assert_eq!(USER_AGENT.index(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn squared_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vec2::new(0.0, 10.0).normalized_or(Vec2::FALLBACK);
        assert!((v.z - 1.0).abs() < 1e-6);
        assert!(v.x.abs() < 1e-6);
    }

    #[test]
    fn degenerate_falls_back_to_fixed_axis() {
        let v = Vec2::ZERO.normalized_or(Vec2::FALLBACK);
        assert_eq!(v, Vec2::FALLBACK);
        assert!(Vec2::new(1e-4, 0.0).is_degenerate());
        assert!(!Vec2::new(0.5, 0.0).is_degenerate());
    }

    #[test]
    fn with_speed_renormalizes() {
        let v = Vec2::new(3.0, 4.0).with_speed(0.05, Vec2::FALLBACK);
        assert!((v.length() - 0.05).abs() < 1e-6);
        // degenerate input gets the fallback heading at full speed
        let f = Vec2::ZERO.with_speed(0.05, Vec2::FALLBACK);
        assert!((f.z - 0.05).abs() < 1e-6);
    }

    #[test]
    fn never_produces_nan() {
        let v = Vec2::ZERO.normalized_or(Vec2::FALLBACK);
        assert!(v.x.is_finite() && v.z.is_finite());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, StepClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_now_ms() {
        let mut clock = StepClock::new(16);
        assert_eq!(clock.now_ms(), 0);
        clock.advance();
        assert_eq!(clock.now_ms(), 16);
        clock.advance();
        assert_eq!(clock.now_ms(), 32);
    }

    #[test]
    fn ticks_for_duration_round_up() {
        let clock = StepClock::new(16);
        assert_eq!(clock.ticks_for_ms(16), 1);
        assert_eq!(clock.ticks_for_ms(17), 2);
        assert_eq!(clock.ticks_for_secs(1), 63); // ceil(1000 / 16)
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            agent_count: 10,
            tick_duration_ms: 16,
            total_ticks: 1_000,
            seed: 42,
            snapshot_interval_ticks: 0,
        };
        assert_eq!(cfg.end_tick(), Tick(1_000));
    }
}

#[cfg(test)]
mod state {
    use crate::AgentState;

    #[test]
    fn default_is_flocking() {
        assert_eq!(AgentState::default(), AgentState::Flocking);
    }

    #[test]
    fn mobility() {
        assert!(AgentState::Flocking.is_mobile());
        assert!(AgentState::Seeking.is_mobile());
        assert!(!AgentState::Frozen.is_mobile());
        assert!(!AgentState::Inactive.is_mobile());
    }

    #[test]
    fn labels() {
        assert_eq!(AgentState::Frozen.as_str(), "frozen");
        assert_eq!(AgentState::Inactive.to_string(), "inactive");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(7));
        let mut b = AgentRng::new(42, AgentId(7));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1_000), b.gen_range(0u32..1_000));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(1));
        let mut b = AgentRng::new(42, AgentId(2));
        let seq_a: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // out-of-range p is clamped, not a panic
        assert!(rng.gen_bool(2.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u8]), Some(&5));
    }

    #[test]
    fn sim_rng_children_are_deterministic() {
        let mut root_a = SimRng::new(9);
        let mut root_b = SimRng::new(9);
        let mut child_a = root_a.child(3);
        let mut child_b = root_b.child(3);
        assert_eq!(
            child_a.gen_range(0u64..u64::MAX),
            child_b.gen_range(0u64..u64::MAX)
        );
    }
}
