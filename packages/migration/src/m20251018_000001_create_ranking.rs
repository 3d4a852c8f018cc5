use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Ranking {
    Table,
    Id,
    Name,
    Stars,
    Level,
    RecordedAt,
}

const UX_RANKING_NAME: &str = "ux_ranking_name";
const IX_RANKING_ORDER: &str = "ix_ranking_stars_recorded_at";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ranking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ranking::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ranking::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Ranking::Stars).small_integer().not_null())
                    .col(ColumnDef::new(Ranking::Level).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Ranking::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Ranking::Stars).between(1, 3))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UX_RANKING_NAME)
                    .table(Ranking::Table)
                    .col(Ranking::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads: stars DESC, recorded_at ASC
        manager
            .create_index(
                Index::create()
                    .name(IX_RANKING_ORDER)
                    .table(Ranking::Table)
                    .col((Ranking::Stars, IndexOrder::Desc))
                    .col((Ranking::RecordedAt, IndexOrder::Asc))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ranking::Table).if_exists().to_owned())
            .await
    }
}
