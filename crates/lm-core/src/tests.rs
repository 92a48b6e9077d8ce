//! Unit tests for lm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LaneHandle, LaneId};

    #[test]
    fn index_roundtrip() {
        let h = LaneHandle(42);
        assert_eq!(h.index(), 42);
        assert_eq!(LaneHandle::try_from(42usize).unwrap(), h);
    }

    #[test]
    fn ordering() {
        assert!(LaneHandle(0) < LaneHandle(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LaneHandle::INVALID.0, u32::MAX);
        assert_eq!(LaneHandle::default(), LaneHandle::INVALID);
    }

    #[test]
    fn lane_id_borrow_lookup() {
        use std::collections::HashMap;
        let mut m: HashMap<LaneId, u32> = HashMap::new();
        m.insert(LaneId::from("l20"), 7);
        // Borrow<str> lets us query without allocating a LaneId.
        assert_eq!(m.get("l20"), Some(&7));
        assert_eq!(m.get("l500"), None);
    }

    #[test]
    fn display() {
        assert_eq!(LaneHandle(7).to_string(), "LaneHandle(7)");
        assert_eq!(LaneId::from("l20").to_string(), "l20");
    }
}

#[cfg(test)]
mod point {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{angle_diff, lerp_angle, normalize_angle, Point2};

    #[test]
    fn vector_ops() {
        let a = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, 2.0);
        assert_eq!((a + b), Point2::new(4.0, 6.0));
        assert_eq!((a - b), Point2::new(2.0, 2.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.distance(b), (4.0f64 + 4.0).sqrt());
    }

    #[test]
    fn cross_sign_is_left_positive() {
        let forward = Point2::new(1.0, 0.0);
        let left = Point2::new(0.0, 1.0);
        let right = Point2::new(0.0, -1.0);
        assert!(forward.cross(left) > 0.0);
        assert!(forward.cross(right) < 0.0);
    }

    #[test]
    fn from_heading_is_unit() {
        let v = Point2::from_heading(0.7);
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.y.atan2(v.x) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_into_half_open_pi() {
        assert_eq!(normalize_angle(0.25), 0.25);
        assert!((normalize_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-12);
        assert!((normalize_angle(-2.0 * PI - 0.25) + 0.25).abs() < 1e-12);
        // The interval is half-open: both ±π map to +π.
        assert_eq!(normalize_angle(PI), PI);
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn angle_diff_shortest_arc() {
        // 350° vs 10° differ by 20°, not 340°.
        let a = (-10.0f64).to_radians();
        let b = 10.0f64.to_radians();
        assert!((angle_diff(a, b) + 20.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn lerp_angle_across_wrap() {
        // Halfway between 170° and -170° is 180°, not 0°.
        let from = 170.0f64.to_radians();
        let to = -170.0f64.to_radians();
        let mid = lerp_angle(from, to, 0.5);
        assert!((mid.abs() - PI).abs() < 1e-12, "got {mid}");
        // t=0 and t=1 hit the endpoints.
        assert!((lerp_angle(0.0, FRAC_PI_2, 0.0)).abs() < 1e-12);
        assert!((lerp_angle(0.0, FRAC_PI_2, 1.0) - FRAC_PI_2).abs() < 1e-12);
    }
}

#[cfg(test)]
mod turn {
    use crate::TurnType;

    #[test]
    fn wire_values_match_map_store_convention() {
        assert_eq!(TurnType::Unknown as u8, 0);
        assert_eq!(TurnType::Straight as u8, 1);
        assert_eq!(TurnType::Left as u8, 2);
        assert_eq!(TurnType::Right as u8, 3);
        assert_eq!(TurnType::UTurn as u8, 4);
    }

    #[test]
    fn default_is_straight() {
        assert_eq!(TurnType::default(), TurnType::Straight);
    }

    #[test]
    fn display() {
        assert_eq!(TurnType::UTurn.to_string(), "u-turn");
    }
}
