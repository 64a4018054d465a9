#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    ConfigModuleTodoist,
    ConfigModuleClaude,
    TodoistNotConfigured,
    ClaudeNotConfigured,

    // === CREDENTIAL MESSAGES ===
    TokenNotFoundInEnv(String, String), // token name, env var
    ValidatingToken(String),            // token name
    TokenValidated(String),             // token name
    TokenValidationFailed(String),      // token name
    EmptyToken,

    // === TASK MESSAGES ===
    OpenTasksHeader,
    NoOpenTasks,
    CompletedTasksHeader(String, String), // week, project name
    NoCompletedTasks(String),             // week
    ProjectFetchFailed(String, String),   // project name, error

    // === SUMMARY MESSAGES ===
    SummaryHeader(String),      // week
    WeekOf(String),             // Monday date
    CompletedTaskCount(usize),
    KeyCategories(String),
    ProductivityTrends(String),
    TrendsHeader,
    NoContentInResponse,
    SummaryParseFailed,
}
