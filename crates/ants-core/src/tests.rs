//! Unit tests for ants-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PheromoneId};

    #[test]
    fn ordering() {
        assert!(AgentId(1) < AgentId(2));
        assert!(PheromoneId(100) > PheromoneId(99));
    }

    #[test]
    fn next_and_first() {
        assert_eq!(PheromoneId::FIRST, PheromoneId(1));
        assert_eq!(PheromoneId(41).next(), PheromoneId(42));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(PheromoneId(3).to_string(), "PheromoneId(3)");
    }
}

#[cfg(test)]
mod values {
    use crate::{CoreError, Distance, Orientation, Turn};

    #[test]
    fn orientation_bounds() {
        assert!(Orientation::new(0.0).is_ok());
        assert!(Orientation::new(359.9).is_ok());
        assert_eq!(Orientation::new(360.0), Err(CoreError::Orientation(360.0)));
        assert_eq!(Orientation::new(-0.5), Err(CoreError::Orientation(-0.5)));
        assert!(Orientation::new(f32::NAN).is_err());
    }

    #[test]
    fn turn_bounds() {
        assert!(Turn::new(-359.0).is_ok());
        assert!(Turn::new(359.0).is_ok());
        assert!(Turn::new(360.0).is_err());
        assert!(Turn::new(-360.0).is_err());
    }

    #[test]
    fn turn_wraps_both_ways() {
        let o = Orientation::new(350.0).unwrap();
        assert_eq!(o.turn(Turn::new(20.0).unwrap()), Orientation::new(10.0).unwrap());

        let o = Orientation::new(10.0).unwrap();
        assert_eq!(o.turn(Turn::new(-20.0).unwrap()), Orientation::new(350.0).unwrap());

        let o = Orientation::new(0.0).unwrap();
        assert_eq!(o.turn(Turn::new(-359.5).unwrap()), Orientation::new(0.5).unwrap());
    }

    #[test]
    fn reversed_is_half_turn() {
        assert_eq!(Orientation::NORTH.reversed(), Orientation::SOUTH);
        assert_eq!(Orientation::WEST.reversed(), Orientation::EAST);
        assert_eq!(Orientation::new(200.0).unwrap().reversed(), Orientation::new(20.0).unwrap());
    }

    #[test]
    fn distance_rejects_negative_and_nan() {
        assert!(Distance::new(0.0).is_ok());
        assert_eq!(Distance::new(-1.0), Err(CoreError::Distance(-1.0)));
        assert!(Distance::new(f32::NAN).is_err());
    }

    #[test]
    fn distance_is_ordered() {
        let a = Distance::new(1.0).unwrap();
        let b = Distance::new(2.0).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(b.checked_sub(a).unwrap(), a);
        assert!(a.checked_sub(b).is_err());
    }
}

#[cfg(test)]
mod geo {
    use crate::{
        CoreError, Distance, Orientation, PositionDelta, WorldPosition, bearing_to, distance,
        movement, segment_distance,
    };

    const EPS: f32 = 0.001;

    fn d(raw: f32) -> Distance {
        Distance::new(raw).unwrap()
    }

    fn o(degrees: f32) -> Orientation {
        Orientation::new(degrees).unwrap()
    }

    fn p(x: f32, y: f32) -> WorldPosition {
        WorldPosition::new(x, y)
    }

    fn assert_delta(got: PositionDelta, dx: f32, dy: f32) {
        assert!((got.dx - dx).abs() < EPS, "dx: got {got:?}, want ({dx}, {dy})");
        assert!((got.dy - dy).abs() < EPS, "dy: got {got:?}, want ({dx}, {dy})");
    }

    #[test]
    fn zero_distance_never_moves() {
        for deg in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 12.5, 359.0] {
            assert_delta(movement(o(deg), Distance::ZERO), 0.0, 0.0);
        }
    }

    #[test]
    fn axis_aligned_movement_is_exact() {
        for raw in [1.0, 2.0, 7.25] {
            assert_eq!(movement(Orientation::NORTH, d(raw)), PositionDelta::new(0.0, -raw));
            assert_eq!(movement(Orientation::EAST, d(raw)), PositionDelta::new(raw, 0.0));
            assert_eq!(movement(Orientation::SOUTH, d(raw)), PositionDelta::new(0.0, raw));
            assert_eq!(movement(Orientation::WEST, d(raw)), PositionDelta::new(-raw, 0.0));
        }
    }

    #[test]
    fn diagonal_movement() {
        let root2 = d(2.0f32.sqrt());
        assert_delta(movement(o(45.0), root2), 1.0, -1.0);
        assert_delta(movement(o(135.0), root2), 1.0, 1.0);
        assert_delta(movement(o(225.0), root2), -1.0, 1.0);
        assert_delta(movement(o(315.0), root2), -1.0, -1.0);
    }

    #[test]
    fn movement_length_matches_distance() {
        for deg in [3.0, 77.0, 101.0, 199.0, 260.0, 301.0, 350.0] {
            let delta = movement(o(deg), d(5.0));
            let len = delta.dx.hypot(delta.dy);
            assert!((len - 5.0).abs() < EPS, "{deg}° gave length {len}");
        }
    }

    #[test]
    fn bearing_axis_cases_are_exact() {
        let origin = p(0.0, 0.0);
        assert_eq!(bearing_to(origin, p(0.0, -42.0)).unwrap(), Orientation::NORTH);
        assert_eq!(bearing_to(origin, p(39.0, 0.0)).unwrap(), Orientation::EAST);
        assert_eq!(bearing_to(origin, p(0.0, 3.0)).unwrap(), Orientation::SOUTH);
        assert_eq!(bearing_to(origin, p(-123.0, 0.0)).unwrap(), Orientation::WEST);
    }

    #[test]
    fn bearing_diagonals() {
        let origin = p(0.0, 0.0);
        for (to, want) in [
            (p(12.0, -12.0), 45.0),
            (p(12.0, 12.0), 135.0),
            (p(-12.0, 12.0), 225.0),
            (p(-12.0, -12.0), 315.0),
        ] {
            let got = bearing_to(origin, to).unwrap().degrees();
            assert!((got - want).abs() < EPS, "towards {to}: got {got}, want {want}");
        }
    }

    #[test]
    fn bearing_then_movement_reaches_target_direction() {
        let from = p(10.0, 10.0);
        let to = p(13.0, 14.0);
        let step = movement(bearing_to(from, to).unwrap(), d(5.0));
        assert_delta(step, 3.0, 4.0);
    }

    #[test]
    fn bearing_between_identical_points_fails() {
        let a = p(5.0, 5.0);
        assert_eq!(bearing_to(a, a), Err(CoreError::IdenticalPoints(a)));
    }

    #[test]
    fn point_distance() {
        assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), d(5.0));
        assert_eq!(distance(p(1.0, 1.0), p(1.0, 1.0)), Distance::ZERO);
    }

    #[test]
    fn segment_distance_closed_forms() {
        let diag = (p(0.0, 0.0), p(1.0, 1.0));
        let flat = (p(0.0, 0.0), p(2.0, 0.0));
        let shifted = (p(-3.0, -2.0), p(-1.0, -2.0));

        let cases = [
            (diag, p(0.0, 0.0), 0.0),
            (diag, p(1.0, 1.0), 0.0),
            (flat, p(0.0, 1.0), 1.0),
            (flat, p(0.0, 2.0), 2.0),
            (flat, p(2.0, 2.0), 2.0),
            (flat, p(3.0, 0.0), 1.0),
            (flat, p(1.0, 1.0), 1.0),
            (flat, p(1.0, -1.0), 1.0),
            (shifted, p(-2.0, -3.0), 1.0),
            (shifted, p(-4.0, -2.0), 1.0),
            (shifted, p(0.0, -2.0), 1.0),
            (diag, p(1.0, 0.0), 0.5f32.sqrt()),
        ];
        for (segment, point, want) in cases {
            let got = segment_distance(segment, point).raw();
            assert!((got - want).abs() < EPS, "{segment:?} to {point}: got {got}, want {want}");
        }
    }

    #[test]
    fn degenerate_segment_falls_back_to_endpoint() {
        let a = p(4.0, 4.0);
        let got = segment_distance((a, p(4.01, 4.0)), p(4.0, 7.0)).raw();
        assert!((got - 3.0).abs() < EPS);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AntRng, ConstantRng, CoreError, RandomSource};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AntRng::seeded(12345);
        let mut r2 = AntRng::seeded(12345);
        for _ in 0..100 {
            let (a, n1) = r1.next_long();
            let (b, n2) = r2.next_long();
            assert_eq!(a, b);
            r1 = n1;
            r2 = n2;
        }
    }

    #[test]
    fn different_seeds_differ() {
        let (a, _) = AntRng::seeded(1).next_long();
        let (b, _) = AntRng::seeded(2).next_long();
        assert_ne!(a, b);
    }

    #[test]
    fn replaying_a_cloned_generator_replays_the_stream() {
        let rng = AntRng::seeded(9).next_long().1;
        let (a, _) = rng.clone().next_f32_in(-10.0, 10.0);
        let (b, _) = rng.next_f32_in(-10.0, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn non_negative_long_shifts_negatives() {
        assert_eq!(ConstantRng(-1).next_non_negative_long().0, i64::MAX);
        assert_eq!(ConstantRng(i64::MIN).next_non_negative_long().0, 0);
        assert_eq!(ConstantRng(5).next_non_negative_long().0, 5);
    }

    #[test]
    fn unit_float_stays_below_one() {
        assert_eq!(ConstantRng(0).next_unit_f32().0, 0.0);
        assert_eq!(ConstantRng(1).next_unit_f32().0, 0.0);
        let (top, _) = ConstantRng(i64::MAX).next_unit_f32();
        assert!(top < 1.0);
        assert!(top > 0.999);

        let mut rng = AntRng::seeded(0);
        for _ in 0..1_000 {
            let (v, next) = rng.next_unit_f32();
            assert!((0.0..1.0).contains(&v));
            rng = next;
        }
    }

    #[test]
    fn range_in_bounds() {
        let mut rng = AntRng::seeded(3);
        for _ in 0..1_000 {
            let (v, next) = rng.next_f32_in(-10.0, 10.0);
            assert!((-10.0..10.0).contains(&v), "{v}");
            rng = next;
        }
        assert_eq!(ConstantRng(0).next_f32_in(-10.0, 10.0).0, -10.0);
    }

    #[test]
    fn probability_extremes_do_not_draw() {
        let (b, rng) = ConstantRng(7).next_bool_with_probability(0.0).unwrap();
        assert!(!b);
        assert_eq!(rng, ConstantRng(7));
        assert!(ConstantRng(i64::MAX).next_bool_with_probability(1.0).unwrap().0);
    }

    #[test]
    fn probability_compares_unit_draw() {
        // Unit draw 0.0 < 0.5, unit draw ~1.0 >= 0.5.
        assert!(ConstantRng(0).next_bool_with_probability(0.5).unwrap().0);
        assert!(!ConstantRng(i64::MAX).next_bool_with_probability(0.5).unwrap().0);
    }

    #[test]
    fn probability_outside_unit_interval_fails() {
        assert_eq!(
            ConstantRng(0).next_bool_with_probability(1.5).map(|(b, _)| b),
            Err(CoreError::Probability(1.5))
        );
        assert!(ConstantRng(0).next_bool_with_probability(-0.1).is_err());
    }
}

#[cfg(test)]
mod params {
    use crate::{SimParams, World, WorldPosition};

    #[test]
    fn defaults_are_valid() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn world_contains_is_half_open() {
        let w = World::default();
        assert!(w.contains(WorldPosition::new(0.0, 0.0)));
        assert!(w.contains(WorldPosition::new(1023.9, 1023.9)));
        assert!(!w.contains(WorldPosition::new(1024.0, 10.0)));
        assert!(!w.contains(WorldPosition::new(10.0, -0.1)));
        assert_eq!(w.center(), WorldPosition::new(512.0, 512.0));
    }

    #[test]
    fn rejects_bad_probability() {
        let p = SimParams { outside_probability: 1.2, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_bad_turn_magnitude() {
        let p = SimParams { turn_magnitude: 360.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_distances() {
        let p = SimParams { move_distance: -2.0, ..SimParams::default() };
        assert!(p.validate().is_err());
        let p = SimParams { detection_radius: f32::NAN, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_zero_delays_and_mailbox() {
        assert!(SimParams { agent_tick_ms: 0, ..SimParams::default() }.validate().is_err());
        assert!(SimParams { mailbox_capacity: 0, ..SimParams::default() }.validate().is_err());
    }

    #[test]
    fn rejects_empty_world() {
        let p = SimParams { world: World::new(0.0, 10.0), ..SimParams::default() };
        assert!(p.validate().is_err());
    }
}
