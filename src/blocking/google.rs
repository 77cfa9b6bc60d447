//! The [Google Maps](https://developers.google.com/maps) provider.
//!
//! Combines the [Roads API](https://developers.google.com/maps/documentation/roads/snap)
//! for road-snapping with the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding)
//! for reverse geocoding. Both endpoints are billed per request and require an
//! API key with the respective APIs enabled.
//!
//! ### Example
//!
//! ```no_run
//! use nearest_road::blocking::SnapToRoad;
//! use nearest_road::{GoogleMaps, Point};
//!
//! let gm = GoogleMaps::new("<api key>".to_string());
//! // lon, lat (x, y) order
//! let p = Point::new(149.12958, -35.27801);
//! let snapped = gm.snap_to_road(&p).unwrap();
//! println!("nearest road point: {:?}", snapped.first());
//! ```
use crate::blocking::{ReverseGeocode, SnapToRoad};
use crate::google::{GeocodingResponse, GeocodingResult, Parameters, SnapToRoadsResponse, SnappedPoint};
use crate::{Point, ProviderError, UA_STRING};
use num_traits::Float;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

/// An instance of the Google Maps geolocation service
pub struct GoogleMaps<'a> {
    api_key: String,
    client: reqwest::blocking::Client,
    roads_endpoint: String,
    geocoding_endpoint: String,
    pub parameters: Parameters<'a>,
}

impl<'a> GoogleMaps<'a> {
    /// Create a new Google Maps instance using the default API endpoints
    pub fn new(api_key: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(UA_STRING));
        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Couldn't build a client!");
        GoogleMaps {
            api_key,
            client,
            roads_endpoint: "https://roads.googleapis.com/".to_string(),
            geocoding_endpoint: "https://maps.googleapis.com/maps/api/geocode/".to_string(),
            parameters: Parameters::default(),
        }
    }

    /// Set a custom Roads API endpoint
    ///
    /// Endpoint should include a trailing slash (i.e. "https://roads.googleapis.com/")
    pub fn with_roads_endpoint(mut self, endpoint: &str) -> Self {
        self.roads_endpoint = endpoint.to_owned();
        self
    }

    /// Set a custom Geocoding API endpoint
    ///
    /// Endpoint should include a trailing slash (i.e. "https://maps.googleapis.com/maps/api/geocode/")
    pub fn with_geocoding_endpoint(mut self, endpoint: &str) -> Self {
        self.geocoding_endpoint = endpoint.to_owned();
        self
    }

    /// Snap a point onto the nearest road, returning the full typed response.
    ///
    /// This method passes the `interpolate=false` parameter to the API, so only
    /// input points are snapped and no intermediate geometry is synthesized.
    pub fn snap_full<T>(&self, point: &Point<T>) -> Result<SnapToRoadsResponse<T>, ProviderError>
    where
        T: Float,
        for<'de> T: Deserialize<'de>,
    {
        let path = format!(
            "{},{}",
            // the Roads API expects lat, lng order
            point.y().to_f64().unwrap(),
            point.x().to_f64().unwrap()
        );
        let resp = self
            .client
            .get(format!("{}v1/snapToRoads", self.roads_endpoint))
            .query(&[
                ("path", path.as_str()),
                ("interpolate", "false"),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?;
        let res: SnapToRoadsResponse<T> = resp.json()?;
        Ok(res)
    }

    /// A reverse lookup of a point, returning the full typed response.
    ///
    /// Forwards any configured [`Parameters`](../google/struct.Parameters.html)
    /// to the API. A `ZERO_RESULTS` status is not an error; any other non-`OK`
    /// status is surfaced as [`ProviderError::Api`](../enum.ProviderError.html).
    pub fn reverse_full<T>(&self, point: &Point<T>) -> Result<GeocodingResponse<T>, ProviderError>
    where
        T: Float,
        for<'de> T: Deserialize<'de>,
    {
        let latlng = format!(
            "{},{}",
            // the Geocoding API expects lat, lng order
            point.y().to_f64().unwrap(),
            point.x().to_f64().unwrap()
        );
        let mut query = vec![
            ("latlng", latlng.as_str()),
            ("key", self.api_key.as_str()),
        ];
        query.extend(self.parameters.as_query());

        let resp = self
            .client
            .get(format!("{}json", self.geocoding_endpoint))
            .query(&query)
            .send()?
            .error_for_status()?;
        let res: GeocodingResponse<T> = resp.json()?;
        if res.status == "OK" || res.status == "ZERO_RESULTS" {
            return Ok(res);
        }
        Err(match res.error_message {
            Some(message) => ProviderError::Api(format!("{} ({})", message, res.status)),
            None => ProviderError::Api(res.status),
        })
    }
}

impl<T> SnapToRoad<T> for GoogleMaps<'_>
where
    T: Float,
    for<'de> T: Deserialize<'de>,
{
    /// Snap a point onto the nearest road. Please see
    /// [the documentation](https://developers.google.com/maps/documentation/roads/snap) for details.
    fn snap_to_road(&self, point: &Point<T>) -> Result<Vec<SnappedPoint<T>>, ProviderError> {
        Ok(self.snap_full(point)?.snapped_points)
    }
}

impl<T> ReverseGeocode<T> for GoogleMaps<'_>
where
    T: Float,
    for<'de> T: Deserialize<'de>,
{
    /// A reverse lookup of a point. Please see
    /// [the documentation](https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding) for details.
    fn reverse_geocode(&self, point: &Point<T>) -> Result<Vec<GeocodingResult<T>>, ProviderError> {
        Ok(self.reverse_full(point)?.results)
    }
}
