use backend::db::txn::with_txn;
use backend::domain::submission::{Submission, ValidSubmission};
use backend::services::ranking::{RankingService, SubmitOutcome};
use backend::state::app_state::AppState;
use backend::AppError;
use quiz_core::Stars;

use crate::support::test_state::build_test_state;

fn valid(name: &str, stars: i64, level: &str) -> ValidSubmission {
    Submission {
        name: Some(name.to_string()),
        stars: Some(stars),
        level: Some(level.to_string()),
    }
    .validate()
    .unwrap()
}

async fn submit(state: &AppState, submission: ValidSubmission) -> Result<SubmitOutcome, AppError> {
    with_txn(state, move |txn| {
        Box::pin(async move { Ok(RankingService::new().submit(txn, submission).await?) })
    })
    .await
}

async fn leaderboard(state: &AppState) -> Vec<(String, Stars, String)> {
    with_txn(state, |txn| {
        Box::pin(async move { Ok(RankingService::new().leaderboard(txn).await?) })
    })
    .await
    .unwrap()
    .into_iter()
    .map(|e| (e.name, e.stars, e.level))
    .collect()
}

#[tokio::test]
async fn insert_then_worse_then_better() {
    let state = build_test_state().await.unwrap();

    let first = submit(&state, valid("Ana", 2, "Médio")).await.unwrap();
    assert!(matches!(first, SubmitOutcome::Inserted { .. }));

    let worse = submit(&state, valid("Ana", 1, "Fácil")).await.unwrap();
    assert!(matches!(worse, SubmitOutcome::Unchanged { .. }));
    assert_eq!(worse.stored_stars(), Stars::Two);
    assert_eq!(
        leaderboard(&state).await,
        vec![("Ana".to_string(), Stars::Two, "Médio".to_string())]
    );

    let better = submit(&state, valid("Ana", 3, "Difícil")).await.unwrap();
    match &better {
        SubmitOutcome::Updated {
            entry,
            previous_stars,
        } => {
            assert_eq!(*previous_stars, Stars::Two);
            assert_eq!(entry.stars, Stars::Three);
            assert_eq!(entry.level, "Difícil");
        }
        other => panic!("expected Updated, got {other:?}"),
    }
    assert_eq!(
        leaderboard(&state).await,
        vec![("Ana".to_string(), Stars::Three, "Difícil".to_string())]
    );
}

#[tokio::test]
async fn update_refreshes_recorded_at() {
    let state = build_test_state().await.unwrap();

    let first = submit(&state, valid("Davi", 1, "Fácil")).await.unwrap();
    let before = first.entry().recorded_at;
    let better = submit(&state, valid("Davi", 2, "Médio")).await.unwrap();
    assert!(better.entry().recorded_at >= before);
    assert_eq!(better.entry().id, first.entry().id);
}

#[tokio::test]
async fn one_row_per_name_under_concurrent_submissions() {
    let state = build_test_state().await.unwrap();

    let attempts = [1, 3, 2, 3, 1]
        .into_iter()
        .map(|stars| submit(&state, valid("Eva", stars, "Médio")));
    for result in futures_util::future::join_all(attempts).await {
        result.unwrap();
    }

    let rows = leaderboard(&state).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, Stars::Three);
}

#[tokio::test]
async fn sqlite_file_profile_persists_between_states() {
    use backend::config::db::DbProfile;
    use backend::infra::state::build_state;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ranking.sqlite").to_string_lossy().into_owned();

    let state = build_state()
        .with_db(DbProfile::SqliteFile { file: file.clone() })
        .build()
        .await
        .unwrap();
    submit(&state, valid("Fábio", 2, "Médio")).await.unwrap();
    drop(state);

    // Reopen: migrations are idempotent and the row is still there
    let reopened = build_state()
        .with_db(DbProfile::SqliteFile { file })
        .build()
        .await
        .unwrap();
    let rows = leaderboard(&reopened).await;
    assert_eq!(rows, vec![("Fábio".to_string(), Stars::Two, "Médio".to_string())]);
}

#[tokio::test]
async fn sqlite_file_accepts_overlapping_submissions() {
    use backend::config::db::DbProfile;
    use backend::infra::state::build_state;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ranking.sqlite").to_string_lossy().into_owned();
    let state = build_state()
        .with_db(DbProfile::SqliteFile { file })
        .build()
        .await
        .unwrap();

    // Distinct names and repeats of one name, all in flight together
    let mut submissions: Vec<ValidSubmission> = (0..5)
        .map(|i| valid(&format!("P{i}"), 2, "Médio"))
        .collect();
    submissions.extend([1, 3, 2, 3, 1].map(|stars| valid("Eva", stars, "Médio")));

    let attempts = submissions
        .into_iter()
        .map(|submission| submit(&state, submission));
    for result in futures_util::future::join_all(attempts).await {
        result.unwrap();
    }

    let rows = leaderboard(&state).await;
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], ("Eva".to_string(), Stars::Three, "Médio".to_string()));
}
