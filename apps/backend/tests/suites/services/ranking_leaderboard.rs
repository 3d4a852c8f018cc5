use backend::db::txn::with_txn;
use backend::domain::submission::Submission;
use backend::repos::ranking::RankingEntry;
use backend::services::ranking::{RankingService, LEADERBOARD_LIMIT};
use backend::state::app_state::AppState;
use proptest::prelude::*;
use quiz_core::Stars;

use crate::support::test_state::build_test_state;

async fn submit(state: &AppState, name: String, stars: i64) {
    let submission = Submission {
        name: Some(name),
        stars: Some(stars),
        level: Some("Médio".to_string()),
    }
    .validate()
    .unwrap();

    with_txn(state, move |txn| {
        Box::pin(async move { Ok(RankingService::new().submit(txn, submission).await?) })
    })
    .await
    .unwrap();
}

async fn leaderboard(state: &AppState) -> Vec<RankingEntry> {
    with_txn(state, |txn| {
        Box::pin(async move { Ok(RankingService::new().leaderboard(txn).await?) })
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn empty_database_yields_empty_leaderboard() {
    let state = build_test_state().await.unwrap();
    assert!(leaderboard(&state).await.is_empty());
}

#[tokio::test]
async fn ties_are_broken_by_submission_order() {
    let state = build_test_state().await.unwrap();
    for name in ["Gil", "Hugo", "Iara"] {
        submit(&state, name.to_string(), 2).await;
    }
    submit(&state, "Júlia".to_string(), 3).await;

    let names: Vec<String> = leaderboard(&state).await.into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Júlia", "Gil", "Hugo", "Iara"]);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, ..ProptestConfig::default() })]

    /// Whatever is submitted, the leaderboard holds at most ten distinct
    /// names, each with its best stars, sorted best first.
    #[test]
    fn leaderboard_keeps_best_per_name(
        submissions in prop::collection::vec((0usize..15, 1i64..=3), 1..40)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        let rows = rt.block_on(async {
            let state = build_test_state().await.unwrap();
            for (player, stars) in &submissions {
                submit(&state, format!("Jogador {player}"), *stars).await;
            }
            leaderboard(&state).await
        });

        let mut best = std::collections::HashMap::new();
        for (player, stars) in &submissions {
            let entry = best.entry(format!("Jogador {player}")).or_insert(0i64);
            *entry = (*entry).max(*stars);
        }

        prop_assert!(rows.len() as u64 <= LEADERBOARD_LIMIT);
        prop_assert_eq!(rows.len(), best.len().min(LEADERBOARD_LIMIT as usize));
        for row in &rows {
            prop_assert_eq!(i64::from(row.stars.count()), best[&row.name]);
        }
        prop_assert!(rows.windows(2).all(|w| w[0].stars >= w[1].stars));

        // Nobody left out has more stars than the last one shown
        if let Some(last) = rows.last() {
            let shown: std::collections::HashSet<&str> =
                rows.iter().map(|r| r.name.as_str()).collect();
            for (name, stars) in &best {
                if !shown.contains(name.as_str()) {
                    prop_assert!(Stars::try_from(*stars as u8).unwrap() <= last.stars);
                }
            }
        }
    }
}
