//! Unit tests for ca-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BuildingId, SceneryId};

    #[test]
    fn index_roundtrip() {
        let id = SceneryId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SceneryId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(BuildingId(3).to_string(), "BuildingId(3)");
    }
}

#[cfg(test)]
mod coord {
    use crate::{TileCoord, Vec3f};

    #[test]
    fn center_is_offset_by_half() {
        let c = TileCoord::new(2, 3, 4).center();
        assert_eq!(c, Vec3f::new(2.5, 3.5, 4.5));
        assert_eq!(c.tile(), TileCoord::new(2, 3, 4));
    }

    #[test]
    fn tile_floors_negative_components() {
        assert_eq!(Vec3f::new(-0.5, 0.2, 1.9).tile(), TileCoord::new(-1, 0, 1));
    }

    #[test]
    fn within_one_is_per_axis() {
        let a = TileCoord::new(5, 5, 5);
        assert!(a.is_within_one(a));
        assert!(a.is_within_one(TileCoord::new(6, 4, 5)));
        assert!(a.is_within_one(TileCoord::new(4, 4, 4)));
        assert!(!a.is_within_one(TileCoord::new(7, 5, 5)));
        assert!(!a.is_within_one(TileCoord::new(5, 5, 3)));
    }

    #[test]
    fn manhattan_and_distance() {
        let a = TileCoord::new(0, 0, 0);
        let b = TileCoord::new(3, 4, 0);
        assert_eq!(a.manhattan_distance(b), 7);
        assert!((a.center().distance(b.center()) - 5.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, TileCoord};

    #[test]
    fn unit_displacements_map_to_documented_codes() {
        let cases = [
            ((0, -1, 0), 0),
            ((1, 0, 0), 1),
            ((0, 1, 0), 2),
            ((-1, 0, 0), 3),
            ((0, 0, 1), 4),
            ((0, 0, -1), 5),
        ];
        for ((dx, dy, dz), code) in cases {
            let dir = Direction::from_displacement(dx, dy, dz).expect("unit step");
            assert_eq!(dir.code(), code, "displacement ({dx},{dy},{dz})");
            assert_eq!(dir.offset(), (dx, dy, dz));
        }
    }

    #[test]
    fn other_displacements_have_no_code() {
        for (dx, dy, dz) in [(0, 0, 0), (1, 1, 0), (2, 0, 0), (0, -2, 0), (1, 0, -1), (-1, -1, -1)] {
            assert!(
                Direction::from_displacement(dx, dy, dz).is_none(),
                "({dx},{dy},{dz}) must be rejected"
            );
        }
    }

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn between_tiles() {
        let a = TileCoord::new(1, 1, 1);
        assert_eq!(Direction::between(a, a.offset(0, 0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(a, a.offset(1, 1, 0)), None);
    }

    #[test]
    fn from_code_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(6), None);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn clock_advances_by_stride() {
        let mut clock = SimClock::new(4);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(8));
    }
}

#[cfg(test)]
mod config {
    use crate::{NavConfig, SimConfig};

    #[test]
    fn nav_defaults() {
        let nav = NavConfig::default();
        assert_eq!(nav.path_overhead_allowance, 1.25);
        assert_eq!(nav.max_path_iterations, 1000);
        assert_eq!(nav.deep_descent_bonus, -50.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = SimConfig::default();
        cfg.agent_speed = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.ticks_per_step = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.nav.path_overhead_allowance = 0.5;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.nav.max_path_iterations = 0;
        assert!(cfg.validate().is_err());
    }
}
