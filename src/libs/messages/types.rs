/// All user-facing message variants, converted to text by the `Display`
/// implementation in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(u64),
    TaskReopened(u64),
    TaskUpdated(u64),
    TaskDeleted(u64),
    TaskNotFoundWithId(u64),
    TaskTextEmpty,
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    OperationCancelled,
    EditingTask(String),
    PromptTaskText,

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    SearchNoMatches(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptSelectModules,
    ConfigModuleStorage,
    ConfigModuleDisplay,
    PromptStorageDir,
    PromptDoneMark,
    PromptPendingMark,

    // === EXPORT MESSAGES ===
    ExportingData(String),
    ExportCompleted(String),
    NoTasksToExport,
}
