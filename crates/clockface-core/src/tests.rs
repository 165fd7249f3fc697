#[cfg(test)]
mod tests {
    use crate::convert::*;
    use crate::error::PickerError;
    use crate::geometry::*;
    use crate::selection::*;
    use crate::snap::*;

    fn at_angle(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
        let rad = degrees.to_radians();
        Vec2::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
    }

    #[test]
    fn test_polar_cardinal_points() {
        let c = Vec2::new(50.0, 50.0);
        assert_eq!(polar(Vec2::new(50.0, 0.0), c).degrees, 0);
        assert_eq!(polar(Vec2::new(100.0, 50.0), c).degrees, 90);
        assert_eq!(polar(Vec2::new(50.0, 100.0), c).degrees, 180);
        assert_eq!(polar(Vec2::new(0.0, 50.0), c).degrees, 270);

        let p = polar(Vec2::new(80.0, 90.0), c);
        assert!((p.distance - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_polar_every_whole_degree() {
        let c = Vec2::new(120.0, 120.0);
        for d in 0..360u16 {
            let p = polar(at_angle(c, 100.0, d as f32), c);
            assert_eq!(p.degrees, d, "angle {d}");
        }
    }

    #[test]
    fn test_polar_rounds_half_up_and_stays_below_360() {
        let c = Vec2::default();
        assert_eq!(polar(at_angle(c, 100.0, 10.6), c).degrees, 11);
        assert_eq!(polar(at_angle(c, 100.0, 10.4), c).degrees, 10);
        // Just left of north rounds back up to 0 rather than 360.
        assert_eq!(polar(at_angle(c, 100.0, 359.7), c).degrees, 0);
        assert_eq!(polar(at_angle(c, 100.0, 359.2), c).degrees, 359);
    }

    #[test]
    fn test_circular_diff() {
        assert_eq!(circular_diff(58, 2, 60), 4);
        assert_eq!(circular_diff(2, 58, 60), 4);
        assert_eq!(circular_diff(10, 40, 60), 30);
        assert_eq!(circular_diff(7, 7, 60), 0);
    }

    #[test]
    fn test_snap_table_outputs_are_ordered_minute_positions() {
        let table = SnapTable::build();
        assert_eq!(table.entries().len(), 361);
        let mut prev = 0;
        for d in 0..=360u16 {
            let s = table.snap(d);
            assert_eq!(s % DEGREES_FOR_ONE_MINUTE, 0, "input {d}");
            assert!(s >= prev, "input {d} snapped to {s}, below {prev}");
            prev = s;
        }
        // Numbered positions own their own angle.
        for d in (0..=360u16).step_by(DEGREES_FOR_ONE_HOUR as usize) {
            assert_eq!(table.snap(d), d, "numbered position {d}");
        }
    }

    #[test]
    fn test_snap_table_band_widths() {
        let table = SnapTable::build();
        assert_eq!(table.inputs_for(0).collect::<Vec<_>>(), (0..=7).collect::<Vec<_>>());
        assert_eq!(
            table.inputs_for(360).collect::<Vec<_>>(),
            (354..=360).collect::<Vec<_>>()
        );
        for out in (6..360).step_by(6) {
            let width = table.inputs_for(out).count();
            if out % DEGREES_FOR_ONE_HOUR == 0 {
                assert_eq!(width, 14, "numbered position {out}");
            } else {
                assert_eq!(width, 4, "unnumbered position {out}");
            }
        }
    }

    #[test]
    fn test_snap_table_known_values() {
        let table = SnapTable::shared();
        assert_eq!(table.snap(7), 0);
        assert_eq!(table.snap(8), 6);
        assert_eq!(table.snap(23), 24);
        assert_eq!(table.snap(24), 30);
        assert_eq!(table.snap(37), 30);
        assert_eq!(table.snap(38), 36);
        assert_eq!(table.snap(353), 354);
        assert_eq!(table.snap(354), 360);
        assert_eq!(table.snap(360), 360);
        assert!(std::ptr::eq(table, SnapTable::shared()));
    }

    #[test]
    fn test_snap_to_hour_bias() {
        assert_eq!(snap_to_hour(44, SnapBias::Nearest), 30);
        assert_eq!(snap_to_hour(45, SnapBias::Nearest), 60);
        assert_eq!(snap_to_hour(46, SnapBias::Nearest), 60);
        assert_eq!(snap_to_hour(350, SnapBias::Nearest), 360);
        assert_eq!(snap_to_hour(31, SnapBias::Up), 60);
        assert_eq!(snap_to_hour(59, SnapBias::Down), 30);
        assert_eq!(snap_to_hour(60, SnapBias::Down), 30);
        assert_eq!(snap_to_hour(0, SnapBias::Down), -30);
    }

    #[test]
    fn test_minute_round_trip() {
        let conv = ValueConverter::default();
        for m in 0..60u8 {
            assert_eq!(conv.minute_for_degrees(conv.degrees_for_minute(m)), m);
        }
    }

    #[test]
    fn test_hour_round_trip_24h() {
        let conv = ValueConverter::new(true, AmPm::Am);
        for h in 0..24u8 {
            let d = conv.degrees_for_hour(h);
            assert_eq!(d % 30, 0);
            assert_eq!(conv.hour_for_degrees(d, conv.inner_circle_for_hour(h)), h);
        }
    }

    #[test]
    fn test_hour_round_trip_12h() {
        for h in 1..=12u8 {
            let conv = ValueConverter::new(false, AmPm::for_hour(h));
            let d = conv.degrees_for_hour(h);
            assert!(!conv.inner_circle_for_hour(h));
            assert_eq!(conv.hour_for_degrees(d, false), h);
        }
        for h in 13..24u8 {
            let conv = ValueConverter::new(false, AmPm::Pm);
            assert_eq!(conv.hour_for_degrees(conv.degrees_for_hour(h), false), h);
        }
    }

    #[test]
    fn test_midnight_and_one_pm_in_24h() {
        let conv = ValueConverter::new(true, AmPm::Am);
        assert!(conv.inner_circle_for_hour(0));
        assert_eq!(conv.degrees_for_hour(0), 0);
        assert_eq!(conv.hour_for_degrees(0, true), 0);
        assert_eq!(conv.hour_for_degrees(0, false), 12);

        assert!(conv.inner_circle_for_hour(13));
        assert_eq!(conv.degrees_for_hour(13), 30);
        assert_eq!(conv.hour_for_degrees(30, true), 13);
        assert_eq!(conv.hour_for_degrees(30, false), 1);
        assert!(!conv.inner_circle_for_hour(12));
    }

    #[test]
    fn test_noon_and_midnight_share_top_in_12h() {
        let am = ValueConverter::new(false, AmPm::Am);
        let pm = ValueConverter::new(false, AmPm::Pm);
        assert_eq!(am.degrees_for_hour(12), 0);
        assert_eq!(am.degrees_for_hour(0), 0);
        assert_eq!(am.hour_for_degrees(0, false), 0);
        assert_eq!(pm.hour_for_degrees(0, false), 12);
    }

    #[test]
    fn test_hour_12_and_24_forms() {
        let am = ValueConverter::new(false, AmPm::Am);
        let pm = ValueConverter::new(false, AmPm::Pm);
        assert_eq!(am.hour_24_to_12(0), 12);
        assert_eq!(am.hour_24_to_12(12), 12);
        assert_eq!(am.hour_24_to_12(17), 5);
        assert_eq!(am.hour_12_to_24(12), 0);
        assert_eq!(pm.hour_12_to_24(12), 12);
        assert_eq!(pm.hour_12_to_24(5), 17);
    }

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(ClockTime::new(24, 0), Err(PickerError::HourOutOfRange(24)));
        assert_eq!(ClockTime::new(3, 60), Err(PickerError::MinuteOutOfRange(60)));

        let now = ClockTime::now_utc();
        assert!(now.hour() < 24 && now.minute() < 60);
    }

    #[test]
    fn test_selection_derives_am_pm_and_ring() {
        let sel = TimeSelection::new(ClockTime::new(13, 25).unwrap(), true);
        assert_eq!(sel.degrees(PickerType::Hours), 30);
        assert_eq!(sel.degrees(PickerType::Minutes), 150);
        assert!(sel.is_on_inner_circle());
        assert_eq!(sel.am_pm(), AmPm::Pm);
        assert_eq!(sel.hour(), 13);
        assert_eq!(sel.minute(), 25);

        let sel = TimeSelection::new(ClockTime::new(13, 25).unwrap(), false);
        assert!(!sel.is_on_inner_circle());
        assert_eq!(sel.hour(), 13);
    }

    #[test]
    fn test_selection_mode_switch_keeps_hour() {
        let mut sel = TimeSelection::new(ClockTime::new(0, 0).unwrap(), false);
        assert_eq!(sel.hour(), 0);
        sel.set_24_hour(true);
        assert!(sel.is_on_inner_circle());
        assert_eq!(sel.hour(), 0);
        sel.set_24_hour(false);
        assert!(!sel.is_on_inner_circle());
        assert_eq!(sel.hour(), 0);
    }

    #[test]
    fn test_selection_apply_snapped_reports_changes() {
        let mut sel = TimeSelection::new(ClockTime::new(1, 0).unwrap(), true);
        assert!(!sel.apply_snapped(PickerType::Hours, 30, false));
        assert!(sel.apply_snapped(PickerType::Hours, 30, true));
        assert_eq!(sel.hour(), 13);
        assert!(sel.apply_snapped(PickerType::Minutes, 12, true));
        assert_eq!(sel.minute(), 2);
        assert!(sel.is_on_inner_circle());
    }

    #[test]
    #[should_panic(expected = "hour 24 is outside 0..24")]
    fn test_selection_rejects_bad_hour() {
        let mut sel = TimeSelection::new(ClockTime::new(1, 0).unwrap(), true);
        sel.set_hour(24);
    }
}
