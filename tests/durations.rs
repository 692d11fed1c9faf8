#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use hallpass::libs::duration::{compare_durations, parse_instant, CalendarDuration};
    use hallpass::libs::error::HallPassError;
    use hallpass::libs::formatter::format_duration_digital;
    use std::cmp::Ordering;

    fn at(value: &str) -> hallpass::libs::duration::Instant {
        parse_instant(value).unwrap()
    }

    #[test]
    fn test_between_same_instant_is_zero() {
        let t = at("2022-01-01T08:30:00Z");
        let duration = CalendarDuration::between(t, t);

        assert!(duration.is_zero());
        assert_eq!(format_duration_digital(&duration), "00:00");
    }

    #[test]
    fn test_between_sixty_one_seconds() {
        let start = at("2022-01-01T08:30:00Z");
        let duration = CalendarDuration::between(start, start + TimeDelta::seconds(61));

        assert_eq!(
            duration,
            CalendarDuration {
                minutes: 1,
                seconds: 1,
                ..CalendarDuration::zero()
            }
        );
    }

    #[test]
    fn test_between_three_months() {
        let duration = CalendarDuration::between(at("2022-01-01T00:00:00Z"), at("2022-04-01T00:00:00Z"));

        assert_eq!(
            duration,
            CalendarDuration {
                months: 3,
                ..CalendarDuration::zero()
            }
        );
    }

    #[test]
    fn test_between_never_produces_weeks() {
        let duration = CalendarDuration::between(at("2022-01-01T00:00:00Z"), at("2022-01-20T06:00:00Z"));

        assert_eq!(duration.weeks, 0);
        assert_eq!(duration.days, 19);
        assert_eq!(duration.hours, 6);
    }

    #[test]
    fn test_between_truncates_sub_seconds() {
        let duration = CalendarDuration::between(at("2022-01-01T08:00:00Z"), at("2022-01-01T08:00:09.999Z"));

        assert_eq!(duration.seconds, 9);
    }

    #[test]
    fn test_between_end_before_start_is_zero() {
        let duration = CalendarDuration::between(at("2022-01-01T08:05:00Z"), at("2022-01-01T08:00:00Z"));

        assert!(duration.is_zero());
    }

    #[test]
    fn test_elapsed_uses_now_for_open_interval() {
        let start = at("2022-01-01T08:00:00Z");
        let now = start + TimeDelta::seconds(90);

        let open = CalendarDuration::elapsed(start, None, now);
        assert_eq!(open.minutes, 1);
        assert_eq!(open.seconds, 30);

        let closed = CalendarDuration::elapsed(start, Some(start + TimeDelta::seconds(30)), now);
        assert_eq!(closed.minutes, 0);
        assert_eq!(closed.seconds, 30);
    }

    #[test]
    fn test_offsets_are_normalized_to_utc() {
        let duration = CalendarDuration::between(at("2022-01-01T10:00:00+02:00"), at("2022-01-01T08:04:05Z"));

        assert_eq!(duration.minutes, 4);
        assert_eq!(duration.seconds, 5);
    }

    #[test]
    fn test_compare_durations_largest_unit_wins() {
        let day = CalendarDuration {
            days: 1,
            ..CalendarDuration::zero()
        };
        let hours = CalendarDuration {
            hours: 23,
            minutes: 59,
            ..CalendarDuration::zero()
        };

        assert_eq!(compare_durations(&day, &hours), Ordering::Greater);
        assert_eq!(compare_durations(&hours, &day), Ordering::Less);
        assert_eq!(compare_durations(&day, &day), Ordering::Equal);
    }

    #[test]
    fn test_add_with_carry() {
        let anchor = at("2022-03-01T00:00:00Z");
        let a = CalendarDuration {
            minutes: 45,
            ..CalendarDuration::zero()
        };
        let b = CalendarDuration {
            minutes: 30,
            ..CalendarDuration::zero()
        };

        let sum = a.add(&b, anchor).unwrap();
        assert_eq!(
            sum,
            CalendarDuration {
                hours: 1,
                minutes: 15,
                ..CalendarDuration::zero()
            }
        );
    }

    #[test]
    fn test_parse_duration_input() {
        let parsed: CalendarDuration = "1h5m".parse().unwrap();
        assert_eq!(parsed.hours, 1);
        assert_eq!(parsed.minutes, 5);

        let parsed: CalendarDuration = "04:05".parse().unwrap();
        assert_eq!(parsed.minutes, 4);
        assert_eq!(parsed.seconds, 5);

        assert!(matches!("5 minutes".parse::<CalendarDuration>(), Err(HallPassError::InvalidInput(_))));
        assert!(matches!("12".parse::<CalendarDuration>(), Err(HallPassError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_duration_overflow_is_rejected() {
        assert!(matches!("4294967295m1m".parse::<CalendarDuration>(), Err(HallPassError::InvalidInput(_))));
        assert!(matches!("4294967295s4294967295s".parse::<CalendarDuration>(), Err(HallPassError::InvalidInput(_))));
        assert!(matches!("4294967296h".parse::<CalendarDuration>(), Err(HallPassError::InvalidInput(_))));

        let parsed: CalendarDuration = "4294967295d".parse().unwrap();
        assert_eq!(parsed.days, u32::MAX);
    }

    #[test]
    fn test_malformed_instant_is_rejected() {
        assert!(matches!(parse_instant("yesterday"), Err(HallPassError::InvalidInput(_))));
        assert!(matches!(parse_instant("2022-13-01T00:00:00Z"), Err(HallPassError::InvalidInput(_))));
        assert!(parse_instant("2022-01-01 08:30").is_ok());
    }
}
