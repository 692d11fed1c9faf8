#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use hallpass::db::passes::Passes;
    use hallpass::db::students::Students;
    use hallpass::libs::duration::{parse_instant, CalendarDuration, Instant};
    use hallpass::libs::error::HallPassError;
    use hallpass::libs::student::Student;
    use rusqlite::params;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct PassTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
        student_id: i64,
    }

    impl TestContext for PassTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            let student_id = Students::new().unwrap().insert(&Student::new("Alice", "Young", "A1", "")).unwrap();
            PassTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
                student_id,
            }
        }
    }

    fn at(value: &str) -> Instant {
        parse_instant(value).unwrap()
    }

    fn expect_error(err: anyhow::Error) -> HallPassError {
        err.downcast::<HallPassError>().unwrap()
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_open_and_close(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:30:00Z");

        let pass = passes.open(ctx.student_id, true, "  Drink  ", start).unwrap();
        assert!(pass.is_open());
        assert_eq!(pass.reason, "Drink");
        assert_eq!(pass.start_at, start);
        assert_eq!(passes.fetch_open().unwrap().len(), 1);

        let closed = passes.close(ctx.student_id, start + TimeDelta::seconds(245)).unwrap();
        assert_eq!(closed.id, pass.id);
        assert_eq!(closed.elapsed(start).minutes, 4);
        assert_eq!(closed.elapsed(start).seconds, 5);
        assert!(passes.fetch_open().unwrap().is_empty());

        let stored = passes.get_by_id(pass.id).unwrap().unwrap();
        assert_eq!(stored.end_at, Some(start + TimeDelta::seconds(245)));
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_second_open_pass_is_rejected(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:30:00Z");
        passes.open(ctx.student_id, true, "", start).unwrap();

        let err = passes.open(ctx.student_id, false, "", start + TimeDelta::minutes(1)).unwrap_err();
        assert_eq!(expect_error(err), HallPassError::PassAlreadyOpen(ctx.student_id));
        assert_eq!(passes.fetch_for_student(ctx.student_id).unwrap().len(), 1);
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_close_without_open_pass(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();

        let err = passes.close(ctx.student_id, at("2022-01-01T08:30:00Z")).unwrap_err();
        assert_eq!(expect_error(err), HallPassError::NoOpenPass(ctx.student_id));
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_open_for_unknown_student(_ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();

        let err = passes.open(404, true, "", at("2022-01-01T08:30:00Z")).unwrap_err();
        assert_eq!(expect_error(err), HallPassError::StudentNotFound(404));
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_edit_duration_and_kind(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:30:00Z");
        let mut pass = passes.open(ctx.student_id, true, "", start).unwrap();

        let duration: CalendarDuration = "4m5s".parse().unwrap();
        pass.end_at = duration.shift(pass.start_at);
        pass.is_personal = false;
        pass.reason = "Nurse".to_string();
        passes.update(&pass).unwrap();

        let stored = passes.get_by_id(pass.id).unwrap().unwrap();
        assert_eq!(stored.end_at, Some(at("2022-01-01T08:34:05Z")));
        assert!(!stored.is_personal);
        assert_eq!(stored.reason, "Nurse");
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_edit_end_before_start(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:30:00Z");
        let mut pass = passes.open(ctx.student_id, true, "", start).unwrap();

        pass.end_at = Some(start - TimeDelta::minutes(1));
        let err = passes.update(&pass).unwrap_err();
        assert!(matches!(expect_error(err), HallPassError::EndBeforeStart { .. }));
        assert!(passes.get_by_id(pass.id).unwrap().unwrap().is_open());
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_reopen_conflicts_with_open_pass(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:30:00Z");
        passes.open(ctx.student_id, true, "", start).unwrap();
        let mut first = passes.close(ctx.student_id, start + TimeDelta::minutes(2)).unwrap();
        passes.open(ctx.student_id, true, "", start + TimeDelta::minutes(5)).unwrap();

        first.end_at = None;
        let err = passes.update(&first).unwrap_err();
        assert_eq!(expect_error(err), HallPassError::PassAlreadyOpen(ctx.student_id));
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_delete(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let pass = passes.open(ctx.student_id, true, "", at("2022-01-01T08:30:00Z")).unwrap();

        passes.delete(pass.id).unwrap();
        assert!(passes.get_by_id(pass.id).unwrap().is_none());

        let err = passes.delete(pass.id).unwrap_err();
        assert_eq!(expect_error(err), HallPassError::PassNotFound(pass.id));
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_log_is_most_recent_first(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        let start = at("2022-01-01T08:00:00Z");
        for i in 0..3 {
            let out = start + TimeDelta::hours(i);
            passes.open(ctx.student_id, i % 2 == 0, "", out).unwrap();
            passes.close(ctx.student_id, out + TimeDelta::minutes(3)).unwrap();
        }

        let log = passes.fetch_for_student(ctx.student_id).unwrap();
        let starts: Vec<Instant> = log.iter().map(|p| p.start_at).collect();
        assert_eq!(starts, vec![start + TimeDelta::hours(2), start + TimeDelta::hours(1), start]);
    }

    #[test_context(PassTestContext)]
    #[test]
    fn test_malformed_stored_instant_fails(ctx: &mut PassTestContext) {
        let mut passes = Passes::new().unwrap();
        passes
            .conn
            .execute(
                "INSERT INTO passes (student_id, start_at, is_personal, reason) VALUES (?1, 'not a date', 1, '')",
                params![ctx.student_id],
            )
            .unwrap();

        let err = passes.fetch_all().unwrap_err();
        assert!(matches!(expect_error(err), HallPassError::InvalidInput(_)));
    }
}
