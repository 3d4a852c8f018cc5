//! Ranking repository functions for the domain layer.

use quiz_core::Stars;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::ranking_sea as ranking_adapter;
use crate::entities::ranking;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Persisted leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub stars: Stars,
    pub level: String,
    #[serde(skip)]
    pub recorded_at: OffsetDateTime,
}

/// Top `limit` entries, best first
pub async fn find_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<RankingEntry>, DomainError> {
    let rows = ranking_adapter::find_top(conn, limit).await?;
    rows.into_iter().map(RankingEntry::try_from).collect()
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<RankingEntry>, DomainError> {
    let row = ranking_adapter::find_by_name(conn, name).await?;
    row.map(RankingEntry::try_from).transpose()
}

/// Insert a new entry. A concurrent insert of the same name surfaces as
/// `Conflict(DuplicateName)`.
pub async fn create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    stars: Stars,
    level: &str,
) -> Result<RankingEntry, DomainError> {
    let dto = ranking_adapter::RankingCreate {
        name: name.to_string(),
        stars: i16::from(stars.count()),
        level: level.to_string(),
    };
    let row = ranking_adapter::create_entry(conn, dto).await?;
    RankingEntry::try_from(row)
}

pub async fn upgrade_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    stars: Stars,
    level: &str,
) -> Result<RankingEntry, DomainError> {
    let dto = ranking_adapter::RankingUpgrade {
        id,
        stars: i16::from(stars.count()),
        level: level.to_string(),
    };
    let row = ranking_adapter::upgrade_entry(conn, dto).await?;
    RankingEntry::try_from(row)
}

impl TryFrom<ranking::Model> for RankingEntry {
    type Error = DomainError;

    fn try_from(model: ranking::Model) -> Result<Self, Self::Error> {
        let stars = u8::try_from(model.stars)
            .map_err(|_| model.stars.to_string())
            .and_then(Stars::try_from)
            .map_err(|e| {
                DomainError::infra(
                    InfraErrorKind::Other("DataCorruption".into()),
                    format!("ranking row {} has invalid stars: {e}", model.id),
                )
            })?;

        Ok(Self {
            id: model.id,
            name: model.name,
            stars,
            level: model.level,
            recorded_at: model.recorded_at,
        })
    }
}
