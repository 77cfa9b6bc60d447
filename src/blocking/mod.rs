pub mod google;

use crate::distance::haversine;
use crate::google::{GeocodingResult, SnappedPoint};
use crate::road::{LocationRequest, LookupError, RoadDetails, RoadResponse};
use crate::{Point, ProviderError};
use num_traits::Float;

/// Snap a coordinate onto the nearest road.
///
/// This trait represents the first provider capability the lookup needs:
/// zero or more points on known road geometry, nearest first.
pub trait SnapToRoad<T>
where
    T: Float,
{
    // NOTE TO IMPLEMENTERS: Point coordinates are lon, lat (x, y)
    // You may have to provide these coordinates in reverse order,
    // depending on the provider's requirements (Google expects lat, lng)
    fn snap_to_road(&self, point: &Point<T>) -> Result<Vec<SnappedPoint<T>>, ProviderError>;
}

/// Reverse-geocode a coordinate into structured address results.
///
/// This trait represents the second provider capability the lookup needs:
/// each result exposes a list of typed address components.
pub trait ReverseGeocode<T>
where
    T: Float,
{
    // NOTE TO IMPLEMENTERS: Point coordinates are lon, lat (x, y)
    fn reverse_geocode(&self, point: &Point<T>) -> Result<Vec<GeocodingResult<T>>, ProviderError>;
}

/// Find the nearest road to a coordinate and how far away it is.
///
/// Validates the request, snaps it onto the nearest road, measures the
/// haversine distance to the snapped point, and reverse-geocodes that point
/// for the road's name and type. Generic over the provider so the logic can
/// be driven by a stub in tests.
pub fn nearest_road<T, P>(
    provider: &P,
    request: &LocationRequest<T>,
) -> Result<RoadResponse<T>, LookupError>
where
    T: Float,
    P: SnapToRoad<T> + ReverseGeocode<T>,
{
    if !request.is_valid() {
        return Err(LookupError::InvalidInput);
    }
    let origin = request.point();
    let snapped = provider.snap_to_road(&origin)?;
    let nearest = snapped.first().ok_or(LookupError::NoRoadFound)?;
    let road_point = nearest.location.point();
    let distance = haversine(&origin, &road_point);
    let results = provider.reverse_geocode(&road_point)?;
    let road = RoadDetails::from_results(&results);
    Ok(RoadResponse::new(distance, road, &road_point))
}
