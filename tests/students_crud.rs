#[cfg(test)]
mod tests {
    use hallpass::db::passes::Passes;
    use hallpass::db::students::Students;
    use hallpass::libs::config::Config;
    use hallpass::libs::error::HallPassError;
    use hallpass::libs::student::Student;
    use chrono::Utc;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests redirect HOME, so they must not overlap.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StudentTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StudentTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StudentTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_student_insert_and_fetch(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        students.insert(&Student::new("carol", "Zed", "B5", "")).unwrap();
        students.insert(&Student::new(" Alice ", "Young", "A1", "Left-handed")).unwrap();
        students.insert(&Student::new("Bob", "Xavier", "A2", "")).unwrap();

        let roster = students.fetch().unwrap();
        let names: Vec<String> = roster.iter().map(|s| s.full_name()).collect();
        assert_eq!(names, vec!["Alice Young", "Bob Xavier", "carol Zed"]);
        assert_eq!(roster[0].notes, "Left-handed");
        assert!(roster.iter().all(|s| s.id.is_some() && s.created_at.is_some()));
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_student_update(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let id = students.insert(&Student::new("Alice", "Young", "A1", "")).unwrap();

        let mut student = students.get_by_id(id).unwrap().unwrap();
        student.period = "B8".to_string();
        student.notes = "Moved".to_string();
        students.update(&student).unwrap();

        let updated = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.period, "B8");
        assert_eq!(updated.notes, "Moved");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_student_update_missing(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let mut ghost = Student::new("Ghost", "Cadet", "A1", "");
        ghost.id = Some(404);

        let err = students.update(&ghost).unwrap_err();
        assert_eq!(err.downcast_ref::<HallPassError>(), Some(&HallPassError::StudentNotFound(404)));
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_student_delete_cascades_to_passes(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let id = students.insert(&Student::new("Alice", "Young", "A1", "")).unwrap();
        let other = students.insert(&Student::new("Bob", "Xavier", "A2", "")).unwrap();

        let mut passes = Passes::new().unwrap();
        passes.open(id, true, "Drink", Utc::now()).unwrap();
        passes.open(other, false, "", Utc::now()).unwrap();

        students.delete(id).unwrap();

        assert!(students.get_by_id(id).unwrap().is_none());
        assert!(passes.fetch_for_student(id).unwrap().is_empty());
        assert_eq!(passes.fetch_all().unwrap().len(), 1);

        let err = students.delete(id).unwrap_err();
        assert_eq!(err.downcast_ref::<HallPassError>(), Some(&HallPassError::StudentNotFound(id)));
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_student_delete_all(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        for i in 1..=4 {
            students.insert(&Student::new(&format!("Cadet {}", i), "Test", "A1", "")).unwrap();
        }

        assert_eq!(students.delete_all().unwrap(), 4);
        assert!(students.fetch().unwrap().is_empty());
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_unknown_period_is_rejected(_ctx: &mut StudentTestContext) {
        let config = Config::read().unwrap();

        assert!(config.check_period("A1").is_ok());
        assert!(matches!(config.check_period("Z9"), Err(HallPassError::UnknownPeriod { .. })));
    }
}
