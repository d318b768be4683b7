#[derive(Debug, Clone)]
pub enum Message {
    // === WEEK MESSAGES ===
    WeekTitle(String), // formatted date range

    // === PLAN MESSAGES ===
    PlanAdded(String, usize),           // task name, placements
    PlanNothingPlaced(String),          // task name
    PlanInvalidHighImpact,
    PlanInvalidRange(String, String),   // start, end
    PlanCancelled,

    // === CHECK MESSAGES ===
    TaskChecked(String),                // task name
    TaskUnchecked(String),              // task name
    TasksNotFoundForDate(String),       // day key
    TaskNotFoundAtIndex(usize, String), // index, day key
    PastDayReadOnly(String),            // day key

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleUpdate,

    // === UPDATE MESSAGES ===
    UpdateAvailable,
    NoUpdateRequired,
    UpdateCompleted,
    UpdateFailed(String),   // error output
    UpdateRepoNotFound,
    RestartFailed(String),  // error message

    // === PROMPTS ===
    PromptStartDate,
    PromptRetryPlan,
    PromptEndDate,
    PromptTaskName,
    PromptPauseDays,
    PromptMuscleGroup,
    PromptSelectModules,
    PromptDataFile,
    PromptUpdateRemote,
    PromptUpdateBranch,
    PromptUpdateRepoDir,

    // === GENERAL MESSAGES ===
    InvalidDate(String), // entered value
    OperationCancelled,
}
