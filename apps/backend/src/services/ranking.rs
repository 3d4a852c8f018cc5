//! Ranking domain service: best result per player, top ten leaderboard.

use quiz_core::Stars;
use sea_orm::{ConnectionTrait, DatabaseTransaction, TransactionTrait};
use tracing::{debug, info};

use crate::domain::submission::ValidSubmission;
use crate::errors::domain::DomainError;
use crate::logging::pii::mask_name;
use crate::repos::ranking::{self as ranking_repo, RankingEntry};

pub const LEADERBOARD_LIMIT: u64 = 10;

/// What a submission did to the stored ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// First result for this name
    Inserted { entry: RankingEntry },
    /// Strictly more stars than before; stars, level and timestamp replaced
    Updated {
        entry: RankingEntry,
        previous_stars: Stars,
    },
    /// Not better than the stored result; `entry` is what remains stored
    Unchanged { entry: RankingEntry },
}

impl SubmitOutcome {
    pub fn entry(&self) -> &RankingEntry {
        match self {
            SubmitOutcome::Inserted { entry }
            | SubmitOutcome::Updated { entry, .. }
            | SubmitOutcome::Unchanged { entry } => entry,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmitOutcome::Inserted { .. } => "inserted",
            SubmitOutcome::Updated { .. } => "updated",
            SubmitOutcome::Unchanged { .. } => "unchanged",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Inserted { .. } => "Novo jogador inserido no ranking!",
            SubmitOutcome::Updated { .. } => "Recorde atualizado com sucesso!",
            SubmitOutcome::Unchanged { .. } => "Pontuação mantida (não foi um novo recorde).",
        }
    }

    pub fn stored_stars(&self) -> Stars {
        self.entry().stars
    }
}

/// Ranking domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    /// Up to [`LEADERBOARD_LIMIT`] entries: stars desc, then oldest first.
    pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<RankingEntry>, DomainError> {
        ranking_repo::find_top(conn, LEADERBOARD_LIMIT).await
    }

    /// Insert or raise the stored result for `submission.name`.
    ///
    /// Runs inside the caller's transaction. A racing insert of the same
    /// name is caught through the unique index and resolved by re-reading
    /// once and applying the same update-if-better rule.
    pub async fn submit(
        &self,
        txn: &DatabaseTransaction,
        submission: ValidSubmission,
    ) -> Result<SubmitOutcome, DomainError> {
        let seen = ranking_repo::find_by_name(txn, &submission.name).await?;
        let outcome = self.store(txn, seen, &submission).await?;

        info!(
            name = %mask_name(&submission.name),
            stars = submission.stars.count(),
            outcome = outcome.kind(),
            "ranking submission"
        );
        Ok(outcome)
    }

    /// Apply `submission` given what the lookup saw. When the lookup saw no
    /// row but one has been inserted since, the insert hits the unique index
    /// and the row is re-read once.
    async fn store(
        &self,
        txn: &DatabaseTransaction,
        seen: Option<RankingEntry>,
        submission: &ValidSubmission,
    ) -> Result<SubmitOutcome, DomainError> {
        if let Some(existing) = seen {
            return self.upgrade_if_better(txn, existing, submission).await;
        }

        match self.try_insert(txn, submission).await {
            Ok(entry) => Ok(SubmitOutcome::Inserted { entry }),
            Err(e) if e.is_duplicate_name() => {
                debug!(name = %mask_name(&submission.name), "insert raced; re-reading");
                let existing = ranking_repo::find_by_name(txn, &submission.name)
                    .await?
                    .ok_or(e)?;
                self.upgrade_if_better(txn, existing, submission).await
            }
            Err(e) => Err(e),
        }
    }

    /// Insert under a savepoint so a unique violation leaves the outer
    /// transaction usable (Postgres aborts the whole transaction otherwise).
    async fn try_insert(
        &self,
        txn: &DatabaseTransaction,
        submission: &ValidSubmission,
    ) -> Result<RankingEntry, DomainError> {
        let savepoint = txn.begin().await?;
        match ranking_repo::create_entry(
            &savepoint,
            &submission.name,
            submission.stars,
            &submission.level,
        )
        .await
        {
            Ok(entry) => {
                savepoint.commit().await?;
                Ok(entry)
            }
            Err(e) => {
                savepoint.rollback().await?;
                Err(e)
            }
        }
    }

    async fn upgrade_if_better(
        &self,
        txn: &DatabaseTransaction,
        existing: RankingEntry,
        submission: &ValidSubmission,
    ) -> Result<SubmitOutcome, DomainError> {
        if submission.stars > existing.stars {
            let previous_stars = existing.stars;
            let entry = ranking_repo::upgrade_entry(
                txn,
                existing.id,
                submission.stars,
                &submission.level,
            )
            .await?;
            Ok(SubmitOutcome::Updated {
                entry,
                previous_stars,
            })
        } else {
            Ok(SubmitOutcome::Unchanged { entry: existing })
        }
    }
}
