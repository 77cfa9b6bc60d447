//! This crate answers one question: how far is a coordinate from the nearest road?
//!
//! It delegates road-snapping and reverse-geocoding to the Google Maps
//! [Roads API](https://developers.google.com/maps/documentation/roads/snap) and
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding), computes the
//! great-circle distance between the input point and the snapped road point with the
//! haversine formula, and shapes the result into a small JSON-friendly response.
//!
//! The provider is modelled as a pair of capability traits, `SnapToRoad` and
//! `ReverseGeocode`, with blocking and async implementations for the
//! [`GoogleMaps`](struct.GoogleMaps.html) client. The `nearest_road` pipeline is generic
//! over those traits, so the distance and response-shaping logic can be exercised
//! without network access.
//!
//! With the `server` feature (on by default) the crate also ships an axum HTTP endpoint
//! exposing the lookup as `POST /`; see the [`server`](server/index.html) module and the
//! `nearest-road-server` binary.
//!
//! ### A note on Coordinate Order
//! The Google APIs speak `latitude, longitude`, but [`Point`](struct.Point.html) data is
//! always `[Longitude, Latitude]` (`x, y`) order, in keeping with geo-types conventions.
//! The wire types in [`google`](google/index.html) convert at the boundary.
//!
//! ### Usage of rustls
//!
//! If you like to use [rustls](https://github.com/ctz/rustls) instead of OpenSSL
//! you can enable the `rustls-tls` feature in your `Cargo.toml`:
//!
//!```toml
//![dependencies]
//!nearest-road = { version = "*", default-features = false, features = ["rustls-tls"] }
//!```

static UA_STRING: &str = "Rust-Nearest-Road";

pub use geo_types::{Coordinate, Point};
use thiserror::Error;

pub mod distance;
pub mod google;
pub mod road;

#[cfg(feature = "async")]
pub mod async_impl;
#[cfg(feature = "blocking")]
pub mod blocking;
#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "blocking")]
pub use crate::blocking::google::GoogleMaps;

/// Errors that can occur while talking to the geolocation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Snap-to-roads lookup failed")]
    Snap,
    #[error("Reverse geocoding failed")]
    Reverse,
    #[error("Geocoding API error: {0}")]
    Api(String),
    #[error("HTTP request error")]
    Request(#[from] reqwest::Error),
}
