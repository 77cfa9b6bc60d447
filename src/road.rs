//! Request/response types and the pure pieces of the nearest-road lookup.

use crate::google::GeocodingResult;
use crate::{Point, ProviderError};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address component type tag carrying a road name
static ROUTE_TYPE: &str = "route";
/// Address component type tag the original service keyed the road type on
static STREET_ADDRESS_TYPE: &str = "street_address";

/// Why a lookup could not produce a response
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid coordinates provided")]
    InvalidInput,
    #[error("No nearby roads found")]
    NoRoadFound,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// The coordinate pair a lookup starts from
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct LocationRequest<T>
where
    T: Float,
{
    pub latitude: T,
    pub longitude: T,
}

impl<T> LocationRequest<T>
where
    T: Float,
{
    /// Whether the coordinates lie within valid WGS84 ranges.
    ///
    /// Latitude must be within `[-90, 90]`, longitude within `[-180, 180]`;
    /// NaN fails both checks.
    pub fn is_valid(&self) -> bool {
        let ninety = T::from(90.0).unwrap();
        let one_eighty = T::from(180.0).unwrap();
        self.latitude >= -ninety
            && self.latitude <= ninety
            && self.longitude >= -one_eighty
            && self.longitude <= one_eighty
    }

    /// The request as a `Point` in `[Longitude, Latitude]` (`x, y`) order
    pub fn point(&self) -> Point<T> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Name and type of the road a point snapped onto, if reverse geocoding found them
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadDetails {
    pub road_name: Option<String>,
    pub road_type: Option<String>,
}

impl RoadDetails {
    /// Extract road details from reverse-geocoding results.
    ///
    /// Only the first result is consulted: the road name is the long form of a
    /// component typed `route`, and the road type is the first type string of a
    /// component typed `street_address`. Either is absent when no such
    /// component exists, and both are absent when there are no results at all.
    ///
    /// Keying the road type on `street_address` rather than a road
    /// classification matches the service this replaces; see DESIGN.md.
    pub fn from_results<T>(results: &[GeocodingResult<T>]) -> Self
    where
        T: Float,
    {
        let mut details = RoadDetails::default();
        let components = match results.first() {
            Some(result) => &result.address_components,
            None => return details,
        };
        for component in components {
            if component.is_type(ROUTE_TYPE) {
                details.road_name = Some(component.long_name.clone());
            }
            if component.is_type(STREET_ADDRESS_TYPE) {
                details.road_type = component.types.first().cloned();
            }
        }
        details
    }
}

/// The answer to a nearest-road lookup
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadResponse<T>
where
    T: Float,
{
    pub distance_meters: T,
    pub unit: String,
    pub road: RoadDetails,
    pub snapped_latitude: T,
    pub snapped_longitude: T,
}

impl<T> RoadResponse<T>
where
    T: Float,
{
    /// Assemble a response; `snapped` is `[Longitude, Latitude]` (`x, y`) order
    pub fn new(distance_meters: T, road: RoadDetails, snapped: &Point<T>) -> Self {
        RoadResponse {
            distance_meters,
            unit: "meters".to_string(),
            road,
            snapped_latitude: snapped.y(),
            snapped_longitude: snapped.x(),
        }
    }
}
