//! Great-circle distance between two points on the Earth's surface.

use crate::Point;
use num_traits::Float;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// The haversine distance between two points, in meters.
///
/// Points are `[Longitude, Latitude]` (`x, y`) order, coordinates in degrees.
///
/// # Examples
///
/// ```
/// use nearest_road::distance::haversine;
/// use nearest_road::Point;
///
/// // one degree of longitude at the equator
/// let d: f64 = haversine(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine<T>(from: &Point<T>, to: &Point<T>) -> T
where
    T: Float,
{
    let radius = T::from(EARTH_RADIUS_METERS).unwrap();
    let two = T::one() + T::one();

    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();
    let dlat = (to.y() - from.y()).to_radians();
    let dlon = (to.x() - from.x()).to_radians();

    let a = (dlat / two).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / two).sin().powi(2);
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());
    radius * c
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let p = Point::new(11.5884858, 48.1700887);
        assert_eq!(haversine(&p, &p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(2.12870, 41.40139);
        let b = Point::new(-0.1380693, 51.5198926);
        assert_eq!(haversine(&a, &b), haversine(&b, &a));
    }

    #[test]
    fn one_degree_at_equator() {
        // (lat 0, lon 0) to (lat 0, lon 1) is roughly 111.195 km
        let d = haversine(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn one_degree_of_latitude() {
        // a degree of latitude spans the same arc anywhere on the sphere
        let at_equator = haversine(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
        let further_north = haversine(&Point::new(13.5, 52.0), &Point::new(13.5, 53.0));
        assert!((at_equator - further_north).abs() < 1e-6);
    }

    #[test]
    fn known_city_pair() {
        // Berlin to Munich, roughly 504 km
        let berlin = Point::new(13.404954, 52.520008);
        let munich = Point::new(11.576124, 48.137154);
        let d = haversine(&berlin, &munich);
        assert!((d - 504_000.0).abs() < 1_000.0, "got {}", d);
    }

    #[test]
    fn works_with_f32() {
        let d: f32 = haversine(&Point::new(0.0f32, 0.0), &Point::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0);
    }
}
