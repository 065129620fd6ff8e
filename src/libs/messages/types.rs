/// Every message the application can show, grouped by the part of the
/// program that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === SHELL MESSAGES ===
    Welcome,
    MenuPrompt,
    PromptTitle,
    PromptDescription,
    NoOptionDetected,
    UnrecognizedCommand,
    ListingTasks,
    AddTaskIntro,
    CompleteTaskIntro,
    Goodbye,
    UnexpectedError(String),

    // === TASK MESSAGES ===
    TasksNotFound,
    TasksResetToEmpty,
    TaskLine {
        title: Option<String>,
        status: Option<String>,
    },
    TaskAdded(String),
    TaskNotFound(String),
    TaskCompleted(String),
    TaskTitleRequired,
    TaskAddFailed(String),
    TaskCompleteFailed(String),

    // === STORE MESSAGES ===
    StoreFileNotFound(String),
    StoreFileCorrupted(String),
    StoreReadFailed(String),
}
