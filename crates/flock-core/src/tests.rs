//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn cell_id_rejects_overflow() {
        assert!(CellId::try_from(70_000usize).is_err());
        assert_eq!(CellId::try_from(8usize).unwrap(), CellId(8));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(CellId(3).to_string(), "CellId(3)");
    }
}

#[cfg(test)]
mod vector {
    use crate::Vec2;

    const EPS: f32 = 1e-5;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));

        let mut c = a;
        c += b;
        c -= Vec2::new(1.0, 1.0);
        assert_eq!(c, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn norm_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.norm() - 5.0).abs() < EPS);
        assert!((v.norm_squared() - 25.0).abs() < EPS);
        assert!((Vec2::ZERO.distance(v) - 5.0).abs() < EPS);
        assert!((Vec2::ZERO.distance_squared(v) - 25.0).abs() < EPS);
    }

    #[test]
    fn normalize_gives_unit_vector() {
        let u = Vec2::new(-7.0, 24.0).normalize().unwrap();
        assert!((u.norm() - 1.0).abs() < EPS, "got {}", u.norm());
        assert!((u.x + 7.0 / 25.0).abs() < EPS);
        assert!((u.y - 24.0 / 25.0).abs() < EPS);
    }

    #[test]
    fn normalize_zero_is_degenerate() {
        let err = Vec2::ZERO.normalize().unwrap_err();
        assert_eq!(err.x, 0.0);
        assert_eq!(err.y, 0.0);
    }

    #[test]
    fn normalize_non_finite_is_degenerate() {
        assert!(Vec2::new(f32::NAN, 1.0).normalize().is_err());
        assert!(Vec2::new(f32::INFINITY, 0.0).normalize().is_err());
    }

    #[test]
    fn heading_follows_atan2() {
        assert!((Vec2::new(1.0, 0.0).heading()).abs() < EPS);
        assert!((Vec2::new(0.0, 1.0).heading() - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert!((Vec2::new(-1.0, 0.0).heading() - std::f32::consts::PI).abs() < EPS);
    }

    #[test]
    fn clamp_length() {
        let v = Vec2::new(30.0, 40.0).clamp_length(5.0);
        assert!((v.norm() - 5.0).abs() < EPS);
        assert_eq!(Vec2::new(1.0, 0.0).clamp_length(5.0), Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::ZERO.clamp_length(5.0), Vec2::ZERO);
    }

    #[test]
    fn sum_of_iterator() {
        let total: Vec2 = [Vec2::new(1.0, 1.0), Vec2::new(2.0, -3.0)].into_iter().sum();
        assert_eq!(total, Vec2::new(3.0, -2.0));
    }
}

#[cfg(test)]
mod geo {
    use crate::{Rect, Vec2};

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_origin_size(Vec2::new(10.0, 20.0), 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(14.9, 24.9)));
        assert!(!r.contains(Vec2::new(15.0, 22.0)));
        assert!(!r.contains(Vec2::new(12.0, 25.0)));
    }

    #[test]
    fn dimensions() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.center(), Vec2::new(2.0, 1.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }
}

#[cfg(test)]
mod config {
    use crate::{ALLOWED_CELL_COUNTS, ConfigError, FlockConfig, IntegrationPolicy};

    #[test]
    fn default_is_valid() {
        let cfg = FlockConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.agents_per_cell(), 10);
        assert_eq!(cfg.integration_policy, IntegrationPolicy::VelocityAccumulating);
    }

    #[test]
    fn every_allowed_count_accepted() {
        for &cells in &ALLOWED_CELL_COUNTS {
            let cfg = FlockConfig { cell_count: cells, total_agent_count: cells * 3, ..FlockConfig::default() };
            assert!(cfg.validate().is_ok(), "cell count {cells} rejected");
        }
    }

    #[test]
    fn ten_cells_rejected() {
        let cfg = FlockConfig { cell_count: 10, total_agent_count: 90, ..FlockConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::UnsupportedCellCount(10)));
    }

    #[test]
    fn zero_cells_rejected() {
        let cfg = FlockConfig { cell_count: 0, ..FlockConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::UnsupportedCellCount(0)));
    }

    #[test]
    fn uneven_split_rejected() {
        let cfg = FlockConfig { cell_count: 9, total_agent_count: 91, ..FlockConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnevenAgentSplit { agents: 91, cells: 9 })
        );
    }

    #[test]
    fn non_positive_values_rejected() {
        let cfg = FlockConfig { vision_radius: 0.0, ..FlockConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { what: "vision_radius", .. })
        ));

        let cfg = FlockConfig { world_height: -1.0, ..FlockConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { what: "world_height", .. })
        ));

        let cfg = FlockConfig { world_width: f32::NAN, ..FlockConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn policy_display() {
        assert_eq!(IntegrationPolicy::DirectDisplacement.to_string(), "direct-displacement");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, Rect, Vec2};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn point_in_stays_inside() {
        let rect = Rect::from_origin_size(Vec2::new(100.0, 200.0), 50.0, 25.0);
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..1000 {
            assert!(rect.contains(rng.point_in(&rect)));
        }
    }

    #[test]
    fn symmetric_vec_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.symmetric_vec(30.0);
            assert!(v.x.abs() <= 30.0 && v.y.abs() <= 30.0);
        }
        assert_eq!(rng.symmetric_vec(0.0), Vec2::ZERO);
    }
}
