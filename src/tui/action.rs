use chrono::{DateTime, Utc};

/// Global actions - like Redux actions
///
/// All state changes in the roster view happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - The refresh ticker
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Search box
    /// Start editing the search query
    EnterSearch,
    /// Append a character to the query (live filtering)
    SearchInput(char),
    SearchBackspace,
    /// Leave edit mode, keeping the query (Enter)
    CommitSearch,
    /// Leave edit mode and clear the query (Esc)
    CancelSearch,

    // Facets
    NextSquad,
    PrevSquad,
    NextPosition,
    PrevPosition,
    NextAvailability,
    ClearFilters,

    // View and pagination
    ToggleView,
    NextPage,
    PrevPage,
    IncreasePageSize,
    DecreasePageSize,

    // Injuries screen
    /// Switch between the roster and the injuries screen
    ToggleInjuries,
    NextMetric,
    PrevMetric,
    NextSeason,
    PrevSeason,
    NextCategory,
    PrevCategory,

    // System actions
    /// Refresh ticker fired at the given time
    Tick(DateTime<Utc>),
    Quit,
}
