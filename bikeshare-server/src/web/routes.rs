//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{error, warn};

use crate::recommend::{RecommendError, Recommender};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/recommend", get(recommend))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station trips start from, for populating selection widgets.
async fn list_stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    let recommender = Recommender::new(state.trips.as_ref(), &state.config);
    let stations = recommender.start_stations()?;

    Ok(Json(StationsResponse { stations }))
}

/// Recommend destinations from a start station.
async fn recommend(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<RecommendResponse>, AppError> {
    let request = query.into_request().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let recommender = Recommender::new(state.trips.as_ref(), &state.config);
    let recommendations = recommender.recommend(&request)?;

    Ok(Json(RecommendResponse {
        start: request.start,
        recommendations: recommendations.iter().map(RecommendationResult::from).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<RecommendError> for AppError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::InvalidRequest(message) => AppError::BadRequest { message },
            RecommendError::Estimate { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
            RecommendError::Source(source) => source.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CachedTripSource};
    use crate::domain::TripRecord;
    use crate::recommend::RecommenderConfig;
    use crate::store::TripStore;

    fn state() -> AppState {
        let store = TripStore::new(vec![
            TripRecord::new("Hilltop", "Market", 300),
            TripRecord::new("Hilltop", "Market", 420),
            TripRecord::new("Hilltop", "Market", 600),
            TripRecord::new("Hilltop", "Park", 1800),
            TripRecord::new("Depot", "Hilltop", 240),
        ]);
        AppState::new(
            CachedTripSource::new(store, &CacheConfig::default()),
            RecommenderConfig::default(),
        )
    }

    fn query(start: &str, time_low: i64, time_high: i64) -> RecommendQuery {
        RecommendQuery {
            start: start.to_string(),
            time_low,
            time_high,
            riding_level: 0,
            sex: None,
            limit: None,
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_start_stations() {
        let Json(response) = list_stations(State(state())).await.unwrap();
        assert_eq!(response.stations, vec!["Depot", "Hilltop"]);
    }

    #[tokio::test]
    async fn recommends_in_window() {
        let Json(response) = recommend(State(state()), Query(query("Hilltop", 6, 8)))
            .await
            .unwrap();

        assert_eq!(response.start, "Hilltop");
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].destination, "Market");
        assert!((response.recommendations[0].eta - 440.0 / 60.0).abs() < 1e-9);
        assert_eq!(response.recommendations[0].distance, None);
    }

    #[tokio::test]
    async fn unknown_start_is_empty_list() {
        let Json(response) = recommend(State(state()), Query(query("Nowhere", 0, 60)))
            .await
            .unwrap();
        assert!(response.recommendations.is_empty());
    }

    #[tokio::test]
    async fn bad_codes_are_bad_request() {
        let mut q = query("Hilltop", 0, 60);
        q.riding_level = 4;
        let err = recommend(State(state()), Query(q)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn inverted_window_is_bad_request() {
        let err = recommend(State(state()), Query(query("Hilltop", 10, 5)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn error_status_codes() {
        let resp = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Unprocessable {
            message: "thin data".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn recommend_errors_map_to_app_errors() {
        let err: AppError = RecommendError::InvalidRequest("nope".into()).into();
        assert!(matches!(err, AppError::BadRequest { message } if message == "nope"));

        let err: AppError = RecommendError::Source(StoreError::Unavailable {
            message: "down".into(),
        })
        .into();
        assert!(matches!(err, AppError::Internal { .. }));

        let err: AppError = RecommendError::Estimate {
            destination: "Market".into(),
            source: crate::estimate::EstimateError::EmptySample,
        }
        .into();
        assert!(matches!(err, AppError::Unprocessable { message } if message.contains("Market")));
    }
}
