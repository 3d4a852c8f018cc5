//! SeaORM adapter for the ranking table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::ranking;

pub mod dto;

pub use dto::{RankingCreate, RankingUpgrade};

/// Top `limit` rows: stars DESC, recorded_at ASC, id ASC
pub async fn find_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<ranking::Model>, sea_orm::DbErr> {
    ranking::Entity::find()
        .order_by(ranking::Column::Stars, Order::Desc)
        .order_by(ranking::Column::RecordedAt, Order::Asc)
        .order_by(ranking::Column::Id, Order::Asc)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<ranking::Model>, sea_orm::DbErr> {
    ranking::Entity::find()
        .filter(ranking::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RankingCreate,
) -> Result<ranking::Model, sea_orm::DbErr> {
    let entry = ranking::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
        stars: Set(dto.stars),
        level: Set(dto.level),
        recorded_at: Set(time::OffsetDateTime::now_utc()),
    };

    entry.insert(conn).await
}

/// Overwrite stars, level and recorded_at of an existing row
pub async fn upgrade_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RankingUpgrade,
) -> Result<ranking::Model, sea_orm::DbErr> {
    let entry = ranking::ActiveModel {
        id: sea_orm::Unchanged(dto.id),
        name: sea_orm::NotSet,
        stars: Set(dto.stars),
        level: Set(dto.level),
        recorded_at: Set(time::OffsetDateTime::now_utc()),
    };

    entry.update(conn).await
}
