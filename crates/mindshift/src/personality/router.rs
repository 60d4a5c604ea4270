use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::AnswerSet;
use super::catalog::Question;
use super::scoring::{PersonalityScorer, ScoreResult, TieBreak};
use super::types::{PersonalityType, TypeProfile};

/// Quiz submission. Without `question_order` the canonical order is assumed.
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub question_order: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    #[serde(flatten)]
    pub profile: TypeProfile,
    pub tie_break: TieBreak,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListing {
    pub count: usize,
    pub questions: &'static [Question],
}

/// Router builder exposing the question bank and the scoring endpoint.
pub fn personality_router(scorer: Arc<PersonalityScorer>) -> Router {
    Router::new()
        .route("/api/v1/personality/questions", get(questions_handler))
        .route("/api/v1/personality/score", post(score_handler))
        .route("/api/v1/personality/types/:code", get(type_handler))
        .with_state(scorer)
}

pub(crate) async fn questions_handler(
    State(scorer): State<Arc<PersonalityScorer>>,
) -> Json<QuestionListing> {
    let questions = scorer.bank().questions();
    Json(QuestionListing {
        count: questions.len(),
        questions,
    })
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<PersonalityScorer>>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let ScoreRequest {
        answers,
        question_order,
    } = request;

    let result = match question_order {
        Some(order) => scorer.score(&answers, &order),
        None => scorer.score(&answers, &scorer.bank().texts()),
    };

    Json(ScoreResponse {
        profile: TypeProfile::from(result.personality_type),
        tie_break: scorer.tie_break(),
        scored_at: Utc::now(),
        result,
    })
}

pub(crate) async fn type_handler(Path(code): Path<String>) -> Response {
    match code.parse::<PersonalityType>() {
        Ok(personality_type) => {
            (StatusCode::OK, Json(TypeProfile::from(personality_type))).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
