//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floors {
    use crate::Floor;

    #[test]
    fn sentinel_is_below_every_real_floor() {
        assert!(Floor::NONE.is_none());
        assert!(!Floor::GROUND.is_none());
        assert!(Floor::NONE < Floor::GROUND);
        assert!(Floor::GROUND < Floor(2));
    }

    #[test]
    fn neighbours() {
        assert_eq!(Floor(3).above(), Floor(4));
        assert_eq!(Floor(3).below(), Floor(2));
        assert_eq!(Floor::GROUND.above(), Floor(2));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(6)), 4);
        assert_eq!(Floor(6).distance(Floor(2)), 4);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "F7");
    }
}

#[cfg(test)]
mod rounds {
    use crate::Round;

    #[test]
    fn ordering_and_offset() {
        assert!(Round::ZERO < Round(1));
        assert_eq!(Round(2).offset(3), Round(5));
    }

    #[test]
    fn display() {
        assert_eq!(Round(4).to_string(), "R4");
    }
}

#[cfg(test)]
mod directions {
    use crate::Direction;

    #[test]
    fn is_moving() {
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
        assert!(!Direction::Stay.is_moving());
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Stay.to_string(), "stay");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn default_is_stay() {
        assert_eq!(Direction::default(), Direction::Stay);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<u32> = (0..16).map(|_| r1.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..16).map(|_| r2.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b, "streams from different seeds should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1..=5u32);
            assert!((1..=5).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9u8]), Some(&9));
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, Floor, SimConfig};

    fn valid() -> SimConfig {
        SimConfig {
            num_floors: 5,
            num_elevators: 2,
            elevator_capacity: 1,
            seed: 42,
            visualize: false,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().top_floor(), Floor(5));
    }

    #[test]
    fn too_few_floors_rejected() {
        let cfg = SimConfig { num_floors: 1, ..valid() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotEnoughFloors { got: 1 })
        ));
    }

    #[test]
    fn zero_elevators_rejected() {
        let cfg = SimConfig { num_elevators: 0, ..valid() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoElevators)));
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = SimConfig { elevator_capacity: 0, ..valid() };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroCapacity)));
    }
}
