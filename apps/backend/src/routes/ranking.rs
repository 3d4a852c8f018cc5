use actix_web::{web, HttpResponse};
use quiz_core::Stars;
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::submission::Submission;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::ranking::RankingEntry;
use crate::services::ranking::{RankingService, SubmitOutcome};
use crate::state::app_state::AppState;

/// Body of `POST /ranking`. The browser client sends Portuguese keys.
#[derive(Debug, Deserialize)]
pub struct SubmitRankingRequest {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default, alias = "estrelas")]
    pub stars: Option<i64>,
    #[serde(default, alias = "nivel")]
    pub level: Option<String>,
}

impl From<SubmitRankingRequest> for Submission {
    fn from(req: SubmitRankingRequest) -> Self {
        Submission {
            name: req.name,
            stars: req.stars,
            level: req.level,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitRankingResponse {
    pub message: &'static str,
    pub outcome: &'static str,
    pub entry: RankingEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_stars: Option<Stars>,
}

impl From<SubmitOutcome> for SubmitRankingResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        let message = outcome.message();
        let kind = outcome.kind();
        let (entry, previous_stars) = match outcome {
            SubmitOutcome::Inserted { entry } | SubmitOutcome::Unchanged { entry } => (entry, None),
            SubmitOutcome::Updated {
                entry,
                previous_stars,
            } => (entry, Some(previous_stars)),
        };
        Self {
            message,
            outcome: kind,
            entry,
            previous_stars,
        }
    }
}

async fn get_ranking(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = RankingService::new();

    let entries = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(service.leaderboard(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}

async fn submit_ranking(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SubmitRankingRequest>,
) -> Result<HttpResponse, AppError> {
    // Validation happens before any connection is taken
    let submission = Submission::from(body.into_inner()).validate()?;
    let service = RankingService::new();

    let outcome = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(service.submit(txn, submission).await?) })
    })
    .await?;

    let mut builder = match outcome {
        SubmitOutcome::Inserted { .. } => HttpResponse::Created(),
        SubmitOutcome::Updated { .. } | SubmitOutcome::Unchanged { .. } => HttpResponse::Ok(),
    };
    Ok(builder.json(SubmitRankingResponse::from(outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_ranking))
        .route("", web::post().to(submit_ranking));
}
