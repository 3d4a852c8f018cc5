//! DTOs for ranking_sea adapter.

/// DTO for inserting a ranking row.
#[derive(Debug, Clone)]
pub struct RankingCreate {
    pub name: String,
    pub stars: i16,
    pub level: String,
}

/// DTO for raising an existing row to a better result.
#[derive(Debug, Clone)]
pub struct RankingUpgrade {
    pub id: i64,
    pub stars: i16,
    pub level: String,
}
