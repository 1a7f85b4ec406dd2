//! Unit tests for cg-core primitives.

#[cfg(test)]
mod ids {
    use crate::ids::IdSyntaxError;
    use crate::{NodeId, NodePos};

    #[test]
    fn parse_plain_and_negative() {
        assert_eq!("42".parse::<NodeId>(), Ok(NodeId(42)));
        assert_eq!("-7".parse::<NodeId>(), Ok(NodeId(-7)));
        assert_eq!("007".parse::<NodeId>(), Ok(NodeId(7)));
    }

    #[test]
    fn parse_rejects_bad_syntax() {
        for bad in ["", "-", "+3", " 3", "3 ", "1.0", "12a", "--1", "0x10"] {
            assert_eq!(bad.parse::<NodeId>(), Err(IdSyntaxError::Syntax), "{bad:?}");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!("2147483648".parse::<NodeId>(), Err(IdSyntaxError::Overflow));
        assert_eq!("-2147483648".parse::<NodeId>(), Ok(NodeId(i32::MIN)));
    }

    #[test]
    fn pos_index_roundtrip() {
        let p = NodePos(42);
        assert_eq!(p.index(), 42);
        assert_eq!(NodePos::try_from(42usize).unwrap(), p);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(-3).to_string(), "-3");
        assert_eq!(NodePos(7).to_string(), "7");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CgError, GeoPoint, deg_to_rad, haversine_m, valid_lat, valid_lon};

    #[test]
    fn deg_to_rad_known_values() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((deg_to_rad(-90.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_at_equator() {
        let d = haversine_m(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ((48.8566, 2.3522), (51.5074, -0.1278)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
            ((90.0, 0.0), (-90.0, 0.0)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];
        for ((la1, lo1), (la2, lo2)) in pairs {
            let ab = haversine_m(la1, lo1, la2, lo2);
            let ba = haversine_m(la2, lo2, la1, lo1);
            assert!((ab - ba).abs() < 1e-6, "{ab} vs {ba}");
        }
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_m(90.0, 0.0, -90.0, 0.0);
        let half = std::f64::consts::PI * crate::EARTH_RADIUS_M;
        assert!((d - half).abs() < 1.0, "got {d}");
    }

    #[test]
    fn dateline_crossing_is_short() {
        // 0.2 degrees of longitude across the antimeridian, not 359.8.
        let d = haversine_m(0.0, 179.9, 0.0, -179.9);
        assert!(d < 25_000.0, "got {d}");
    }

    #[test]
    fn range_checks() {
        assert!(valid_lat(90.0) && valid_lat(-90.0));
        assert!(!valid_lat(90.000_001) && !valid_lat(f64::NAN));
        assert!(valid_lon(180.0) && valid_lon(-180.0));
        assert!(!valid_lon(-180.5) && !valid_lon(f64::INFINITY));
    }

    #[test]
    fn checked_constructor() {
        assert!(GeoPoint::checked(45.0, 90.0).is_ok());
        assert_eq!(GeoPoint::checked(91.0, 0.0), Err(CgError::InvalidLatitude(91.0)));
        assert_eq!(GeoPoint::checked(0.0, 181.0), Err(CgError::InvalidLongitude(181.0)));
    }

    #[test]
    fn display_seven_places() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.5000000, -2.2500000)");
    }
}

#[cfg(test)]
mod config {
    use crate::LoadConfig;

    #[test]
    fn defaults() {
        let cfg = LoadConfig::default();
        assert_eq!(cfg.initial_node_capacity, 100);
        assert_eq!(cfg.max_name_len, 255);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_limits() {
        assert!(LoadConfig::default().with_max_name_len(0).validate().is_err());
        let cfg = LoadConfig { initial_node_capacity: 0, ..LoadConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
