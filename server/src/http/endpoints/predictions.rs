use super::ApiResource;
use crate::persistence::Prediction;

impl ApiResource for Prediction {
    const PATH: &'static str = "/api/Predictions";
    const LABEL: &'static str = "Prediction";
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::super::test_support::{app, rels, send};
    use crate::persistence::sqlite::fixtures::{self, seed_status_risk, seed_user};
    use crate::persistence::sqlite::Database;
    use crate::persistence::{DailyLog, Repository, Score};

    /// One log and one score for each of users 1 and 2; returns the score ids.
    async fn seeded() -> (Database, [i64; 2]) {
        let db = Database::new_in_memory().await.unwrap();
        seed_status_risk(&db, 3, "Medium").await;
        let mut scores = [0; 2];
        for (i, user) in [1, 2].into_iter().enumerate() {
            seed_user(&db, user).await;
            let mut session = db.session().await.unwrap();
            let log = session
                .repository::<DailyLog>()
                .add(&fixtures::log(user, 10, 5))
                .await
                .unwrap();
            scores[i] = session
                .repository::<Score>()
                .add(&fixtures::score(user, log, 3, 5))
                .await
                .unwrap();
        }
        (db, scores)
    }

    fn new_prediction(id_user: i64, id_scores: i64, message: &str) -> serde_json::Value {
        json!({
            "stressPredicted": 67.0,
            "message": message,
            "datePredicted": "2025-11-29T08:30:00Z",
            "idUser": id_user,
            "idScores": id_scores,
            "idStatusRisk": 3
        })
    }

    #[tokio::test]
    async fn test_create_and_fetch_prediction() {
        let (db, scores) = seeded().await;
        let app = app(&db);

        let (status, location, created) = send(
            &app,
            Method::POST,
            "/api/Predictions",
            Some(new_prediction(1, scores[0], "Keep meetings short tomorrow")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["data"]["idPrediction"].as_i64().unwrap();
        assert_eq!(location, Some(format!("/api/Predictions/{id}")));

        let (status, _, fetched) =
            send(&app, Method::GET, &format!("/api/Predictions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["data"]["message"], "Keep meetings short tomorrow");
        assert_eq!(fetched["data"]["idScores"], scores[0]);
    }

    #[tokio::test]
    async fn test_search_by_user_and_score() {
        let (db, scores) = seeded().await;
        let app = app(&db);
        for (user, score) in [(1, scores[0]), (1, scores[0]), (2, scores[1])] {
            send(
                &app,
                Method::POST,
                "/api/Predictions",
                Some(new_prediction(user, score, "Rest")),
            )
            .await;
        }

        let (status, _, body) =
            send(&app, Method::GET, "/api/Predictions/search?IDUSER=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageInfo"]["totalItems"], 2);

        let uri = format!("/api/Predictions/search?idScores={}&idUser=2", scores[1]);
        let (_, _, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["pageInfo"]["totalItems"], 1);
        assert_eq!(body["items"][0]["data"]["idUser"], 2);
    }

    #[tokio::test]
    async fn test_get_all_lists_every_prediction() {
        let (db, scores) = seeded().await;
        let app = app(&db);
        for score in scores {
            send(
                &app,
                Method::POST,
                "/api/Predictions",
                Some(new_prediction(1, score, "Rest")),
            )
            .await;
        }

        let (status, _, body) = send(&app, Method::GET, "/api/Predictions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["pageInfo"]["totalPages"], 1);
        assert_eq!(rels(&body["_links"]), ["self", "search", "create"]);
    }

    #[tokio::test]
    async fn test_missing_prediction_error_type() {
        let db = Database::new_in_memory().await.unwrap();
        let app = app(&db);
        let (status, _, body) = send(&app, Method::GET, "/api/Predictions/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorType"], "PredictionNotFound");
    }
}
