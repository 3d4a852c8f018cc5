use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::AppError;

/// Fresh, migrated in-memory SQLite database per call.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::InMemory).build().await
}

/// State with no database: every storage call fails.
pub async fn build_test_state_without_db() -> Result<AppState, AppError> {
    build_state().build().await
}
