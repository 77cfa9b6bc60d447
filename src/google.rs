//! Shared wire types for the Google Maps Roads and Geocoding APIs.
//!
//! The Roads API serializes camelCase, the Geocoding API snake_case; the structs
//! here mirror the two formats so responses deserialize without renaming glue in
//! the clients.

use crate::Point;
use num_traits::Float;
use serde::{Deserialize, Serialize};

macro_rules! add_optional_param {
    ($query:expr, $param:expr, $name:expr) => {
        if let Some(p) = $param {
            $query.push(($name, p))
        }
    };
}

/// Optional query parameters forwarded to the Geocoding API.
///
/// Please see the [API documentation](https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding)
/// for details.
#[derive(Default)]
pub struct Parameters<'a> {
    pub language: Option<&'a str>,
    pub region: Option<&'a str>,
}

impl<'a> Parameters<'a> {
    pub fn as_query(&self) -> Vec<(&'a str, &'a str)> {
        let mut query = vec![];
        add_optional_param!(query, self.language, "language");
        add_optional_param!(query, self.region, "region");
        query
    }
}

/// The top-level response returned by a `snapToRoads` request
///
/// See [the documentation](https://developers.google.com/maps/documentation/roads/snap) for more details
///
///```json
///{
///  "snappedPoints": [
///    {
///      "location": {
///        "latitude": -35.27801,
///        "longitude": 149.12958
///      },
///      "originalIndex": 0,
///      "placeId": "ChIJr_xl0GdNFmsRsUtUbW7qABM"
///    }
///  ]
///}
///```
///
/// When no road lies within the API's search radius the body is an empty
/// object, so `snapped_points` defaults to an empty `Vec`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapToRoadsResponse<T>
where
    T: Float,
{
    #[serde(default = "Vec::new")]
    pub snapped_points: Vec<SnappedPoint<T>>,
    pub warning_message: Option<String>,
}

/// A single point snapped onto the nearest road geometry
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnappedPoint<T>
where
    T: Float,
{
    pub location: LatLng<T>,
    pub original_index: Option<usize>,
    pub place_id: String,
}

/// A latitude/longitude pair as the Roads API serializes it
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LatLng<T>
where
    T: Float,
{
    pub latitude: T,
    pub longitude: T,
}

impl<T> LatLng<T>
where
    T: Float,
{
    /// Convert into a `Point` in `[Longitude, Latitude]` (`x, y`) order
    pub fn point(&self) -> Point<T> {
        Point::new(self.longitude, self.latitude)
    }
}

/// The top-level response returned by a reverse-geocoding request
///
/// See [the documentation](https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding) for more details
///
///```json
///{
///  "results": [
///    {
///      "address_components": [
///        {
///          "long_name": "277",
///          "short_name": "277",
///          "types": ["street_number"]
///        },
///        {
///          "long_name": "Bedford Avenue",
///          "short_name": "Bedford Ave",
///          "types": ["route"]
///        }
///      ],
///      "formatted_address": "277 Bedford Ave, Brooklyn, NY 11211, USA",
///      "geometry": {
///        "location": {
///          "lat": 40.714232,
///          "lng": -73.9612889
///        },
///        "location_type": "ROOFTOP"
///      },
///      "place_id": "ChIJd8BlQ2BZwokRAFUEcm_qrcA",
///      "types": ["street_address"]
///    }
///  ],
///  "status": "OK"
///}
///```
#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodingResponse<T>
where
    T: Float,
{
    pub status: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<GeocodingResult<T>>,
    pub error_message: Option<String>,
}

/// A single reverse-geocoding result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodingResult<T>
where
    T: Float,
{
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: String,
    pub geometry: Geometry<T>,
    pub place_id: String,
    pub types: Vec<String>,
}

/// One typed component of an address, e.g. a street number or a route
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component carries the given type tag
    pub fn is_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// Geometry of a geocoding result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry<T>
where
    T: Float,
{
    pub location: GeocodeLocation<T>,
    pub location_type: String,
}

/// A latitude/longitude pair as the Geocoding API serializes it
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeocodeLocation<T>
where
    T: Float,
{
    pub lat: T,
    pub lng: T,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_snap_to_roads_response() {
        let body = r#"{
            "snappedPoints": [
                {
                    "location": {
                        "latitude": -35.27801,
                        "longitude": 149.12958
                    },
                    "originalIndex": 0,
                    "placeId": "ChIJr_xl0GdNFmsRsUtUbW7qABM"
                }
            ]
        }"#;
        let res: SnapToRoadsResponse<f64> = serde_json::from_str(body).unwrap();
        assert_eq!(res.snapped_points.len(), 1);
        let point = res.snapped_points[0].location.point();
        assert_eq!(point.x(), 149.12958);
        assert_eq!(point.y(), -35.27801);
        assert_eq!(res.snapped_points[0].original_index, Some(0));
    }

    #[test]
    fn parse_empty_snap_to_roads_response() {
        // no nearby road: the API answers with an empty object
        let res: SnapToRoadsResponse<f64> = serde_json::from_str("{}").unwrap();
        assert!(res.snapped_points.is_empty());
        assert!(res.warning_message.is_none());
    }

    #[test]
    fn parse_geocoding_response() {
        let body = r#"{
            "results": [
                {
                    "address_components": [
                        {
                            "long_name": "Bedford Avenue",
                            "short_name": "Bedford Ave",
                            "types": ["route"]
                        }
                    ],
                    "formatted_address": "Bedford Ave, Brooklyn, NY 11211, USA",
                    "geometry": {
                        "location": {
                            "lat": 40.714232,
                            "lng": -73.9612889
                        },
                        "location_type": "GEOMETRIC_CENTER"
                    },
                    "place_id": "ChIJd8BlQ2BZwokRAFUEcm_qrcA",
                    "types": ["route"]
                }
            ],
            "status": "OK"
        }"#;
        let res: GeocodingResponse<f64> = serde_json::from_str(body).unwrap();
        assert_eq!(res.status, "OK");
        let result = &res.results[0];
        assert!(result.address_components[0].is_type("route"));
        assert_eq!(result.address_components[0].long_name, "Bedford Avenue");
    }

    #[test]
    fn parse_zero_results_geocoding_response() {
        let res: GeocodingResponse<f64> =
            serde_json::from_str(r#"{"results": [], "status": "ZERO_RESULTS"}"#).unwrap();
        assert_eq!(res.status, "ZERO_RESULTS");
        assert!(res.results.is_empty());
    }

    #[test]
    fn parameters_as_query() {
        let parameters = Parameters {
            language: Some("en"),
            ..Parameters::default()
        };
        assert_eq!(parameters.as_query(), vec![("language", "en")]);
    }
}
