//! Every user-facing message of the application.
//!
//! Text lives in [`display`](super::display); variants only carry the data
//! interpolated into it.

#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentCreated(String, i64), // name, id
    StudentUpdated(String),
    StudentDeleted(String),
    StudentsDeletedCount(usize),
    StudentNotFound(i64),
    StudentsHeader,
    NoStudents,
    ConfirmDeleteStudent(String),
    ConfirmDeleteAllStudents(usize),
    NoChangesProvided,

    // === PASS MESSAGES ===
    PassStarted(String, String), // name, kind
    PassEnded(String, String),   // name, duration
    PassUpdated(i64),
    PassDeleted(i64),
    PassNotFound(i64),
    PassLogHeader(String), // name
    NoPasses(String),      // name
    ConfirmDeletePass(i64),
    PassEditNeedsChange,
    PassEndAndDurationConflict,

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // time
    CadetsOut(usize),
    NoCadetsOut,
    OxygenDepleted(String), // name

    // === REPORT MESSAGES ===
    CadetReportHeader,
    WalkReportHeader,
    NoReportData,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportNoData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleThresholds,
    ConfigModulePeriods,
    SettingsHeader,
    SettingsRejected(String), // reason

    // === PROMPTS ===
    PromptSelectModules,
    PromptWarningMinutes,
    PromptCriticalMinutes,
    PromptExpandPassLog,
    PromptPeriods,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    DatabaseVersion(u32),
    DatabaseUpToDate(u32),
    DatabaseNeedsUpdate(u32, u32), // current, latest
    MigrationHistory,
    NoMigrationsApplied,
}
