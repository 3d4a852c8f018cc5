use sea_orm::DatabaseConnection;

/// Application state shared by every actix worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool; `None` only when built without a profile (tests)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State with no database; every storage call fails with DB_UNAVAILABLE
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
