use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::sync::Arc;

use crate::personality::{
    personality_router, AnswerSet, PersonalityScorer, QuestionBank, TieBreak,
};

pub(super) fn canonical_texts() -> Vec<&'static str> {
    QuestionBank::standard().texts()
}

/// Every slot answered with the same value.
pub(super) fn uniform_answers(value: i64) -> AnswerSet {
    (1..=24).map(|slot| (AnswerSet::slot_key(slot), value)).collect()
}

/// Strong agreement with the three E items, strong disagreement with the three
/// I items, neutral elsewhere.
pub(super) fn extravert_answers() -> AnswerSet {
    let mut answers = uniform_answers(3);
    for slot in 1..=3 {
        answers.insert(AnswerSet::slot_key(slot), 5);
    }
    for slot in 4..=6 {
        answers.insert(AnswerSet::slot_key(slot), 1);
    }
    answers
}

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn router(tie_break: TieBreak) -> axum::Router {
    personality_router(Arc::new(PersonalityScorer::new(tie_break)))
}

pub(super) fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn json_body(response: Response, expected: StatusCode) -> Value {
    assert_eq!(response.status(), expected);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
