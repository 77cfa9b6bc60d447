use async_trait::async_trait;
use num_traits::Float;

use crate::distance::haversine;
use crate::google::{GeocodingResult, SnappedPoint};
use crate::road::{LocationRequest, LookupError, RoadDetails, RoadResponse};
use crate::{Point, ProviderError};

pub mod google;

/// Snap a coordinate onto the nearest road.
#[async_trait]
pub trait SnapToRoad<T>
where
    T: Float + Send + Sync,
{
    // NOTE TO IMPLEMENTERS: Point coordinates are lon, lat (x, y)
    // You may have to provide these coordinates in reverse order,
    // depending on the provider's requirements (Google expects lat, lng)
    async fn snap_to_road(&self, point: &Point<T>) -> Result<Vec<SnappedPoint<T>>, ProviderError>;
}

/// Reverse-geocode a coordinate into structured address results.
#[async_trait]
pub trait ReverseGeocode<T>
where
    T: Float + Send + Sync,
{
    // NOTE TO IMPLEMENTERS: Point coordinates are lon, lat (x, y)
    async fn reverse_geocode(
        &self,
        point: &Point<T>,
    ) -> Result<Vec<GeocodingResult<T>>, ProviderError>;
}

/// Find the nearest road to a coordinate and how far away it is.
///
/// Async twin of [`blocking::nearest_road`](../blocking/fn.nearest_road.html):
/// validate, snap, measure with the haversine formula, reverse-geocode the
/// snapped point for the road's name and type.
pub async fn nearest_road<T, P>(
    provider: &P,
    request: &LocationRequest<T>,
) -> Result<RoadResponse<T>, LookupError>
where
    T: Float + Send + Sync,
    P: SnapToRoad<T> + ReverseGeocode<T> + Sync,
{
    if !request.is_valid() {
        return Err(LookupError::InvalidInput);
    }
    let origin = request.point();
    let snapped = provider.snap_to_road(&origin).await?;
    let nearest = snapped.first().ok_or(LookupError::NoRoadFound)?;
    let road_point = nearest.location.point();
    let distance = haversine(&origin, &road_point);
    let results = provider.reverse_geocode(&road_point).await?;
    let road = RoadDetails::from_results(&results);
    Ok(RoadResponse::new(distance, road, &road_point))
}
