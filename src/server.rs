//! The axum HTTP surface for nearest-road lookups.
//!
//! `POST /` takes `{ "latitude": number, "longitude": number }` and answers with a
//! [`RoadResponse`](../road/struct.RoadResponse.html) on 200, or `{ "error": string }`
//! with 400 (invalid input), 404 (no road found) or 500 (provider failure).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::async_impl::{nearest_road, ReverseGeocode, SnapToRoad};
use crate::road::{LocationRequest, LookupError};

/// The JSON error body paired with a non-2xx status
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        let (status, message) = match err {
            LookupError::InvalidInput => (StatusCode::BAD_REQUEST, err.to_string()),
            LookupError::NoRoadFound => (StatusCode::NOT_FOUND, err.to_string()),
            LookupError::Provider(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", e),
            ),
        };
        ApiError { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// Build the router around a provider implementing both lookup capabilities
pub fn router<P>(provider: P) -> Router
where
    P: SnapToRoad<f64> + ReverseGeocode<f64> + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(lookup::<P>))
        .route("/health", get(health))
        .with_state(Arc::new(provider))
}

async fn health() -> &'static str {
    "OK"
}

async fn lookup<P>(
    State(provider): State<Arc<P>>,
    payload: Result<Json<LocationRequest<f64>>, JsonRejection>,
) -> Response
where
    P: SnapToRoad<f64> + ReverseGeocode<f64> + Send + Sync,
{
    // a body that doesn't parse into a LocationRequest is invalid input too
    let Ok(Json(request)) = payload else {
        return ApiError::from(LookupError::InvalidInput).into_response();
    };
    tracing::debug!(
        latitude = request.latitude,
        longitude = request.longitude,
        "nearest-road lookup"
    );
    match nearest_road(provider.as_ref(), &request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            if let LookupError::Provider(ref cause) = err {
                tracing::warn!("provider lookup failed: {}", cause);
            }
            ApiError::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::google::{
        AddressComponent, GeocodeLocation, GeocodingResult, Geometry, LatLng, SnappedPoint,
    };
    use crate::{Point, ProviderError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubProvider {
        snapped: Vec<SnappedPoint<f64>>,
        results: Vec<GeocodingResult<f64>>,
        fail: bool,
    }

    #[async_trait]
    impl SnapToRoad<f64> for StubProvider {
        async fn snap_to_road(
            &self,
            _point: &Point<f64>,
        ) -> Result<Vec<SnappedPoint<f64>>, ProviderError> {
            if self.fail {
                return Err(ProviderError::Api("REQUEST_DENIED".to_string()));
            }
            Ok(self.snapped.clone())
        }
    }

    #[async_trait]
    impl ReverseGeocode<f64> for StubProvider {
        async fn reverse_geocode(
            &self,
            _point: &Point<f64>,
        ) -> Result<Vec<GeocodingResult<f64>>, ProviderError> {
            Ok(self.results.clone())
        }
    }

    fn provider_with_road() -> StubProvider {
        StubProvider {
            snapped: vec![SnappedPoint {
                location: LatLng {
                    latitude: -35.27801,
                    longitude: 149.12958,
                },
                original_index: Some(0),
                place_id: "ChIJr_xl0GdNFmsRsUtUbW7qABM".to_string(),
            }],
            results: vec![GeocodingResult {
                address_components: vec![AddressComponent {
                    long_name: "Northbourne Avenue".to_string(),
                    short_name: "Northbourne Ave".to_string(),
                    types: vec!["route".to_string()],
                }],
                formatted_address: "Northbourne Ave, Canberra ACT, Australia".to_string(),
                geometry: Geometry {
                    location: GeocodeLocation {
                        lat: -35.27801,
                        lng: 149.12958,
                    },
                    location_type: "GEOMETRIC_CENTER".to_string(),
                },
                place_id: "ChIJr_xl0GdNFmsRsUtUbW7qABM".to_string(),
                types: vec!["route".to_string()],
            }],
            fail: false,
        }
    }

    async fn post_lookup(
        provider: StubProvider,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let app = router(provider);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lookup_succeeds_with_road_details() {
        let (status, body) = post_lookup(
            provider_with_road(),
            r#"{"latitude": -35.27810, "longitude": 149.12958}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unit"], "meters");
        assert_eq!(body["road"]["roadName"], "Northbourne Avenue");
        assert!(body["road"]["roadType"].is_null());
        assert_eq!(body["snappedLatitude"], -35.27801);
        assert_eq!(body["snappedLongitude"], 149.12958);
        assert!(body["distanceMeters"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn lookup_without_roads_is_404() {
        let (status, body) = post_lookup(
            StubProvider::default(),
            r#"{"latitude": 0.0, "longitude": 0.0}"#,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No nearby roads found");
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_400() {
        let (status, body) = post_lookup(
            provider_with_road(),
            r#"{"latitude": 91.0, "longitude": 0.0}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid coordinates provided");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let (status, body) = post_lookup(provider_with_road(), r#"{"latitude": "north"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid coordinates provided");
    }

    #[tokio::test]
    async fn provider_failure_is_500() {
        let provider = StubProvider {
            fail: true,
            ..StubProvider::default()
        };
        let (status, body) =
            post_lookup(provider, r#"{"latitude": 0.0, "longitude": 0.0}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Internal server error:"));
        assert!(message.contains("REQUEST_DENIED"));
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let app = router(StubProvider::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
