//! Great-circle distance math shared by the scorer and planner.
//!
//! The planner only ever compares distances between nearby points, so the
//! plain haversine formula on a spherical Earth is accurate enough; no
//! ellipsoidal correction is applied.

use ::geo::Coord;

/// Mean Earth radius in meters used by [`haversine_distance`].
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle (haversine) distance between two WGS84 coordinates, in
/// meters.
///
/// The function is symmetric: `haversine_distance(a, b)` equals
/// `haversine_distance(b, a)`. Non-finite coordinates are a caller
/// contract violation and are not handled defensively.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::geo::haversine_distance;
///
/// let george_town = Coord { x: 100.3327, y: 5.4164 };
/// let kek_lok_si = Coord { x: 100.2734, y: 5.3992 };
/// let d = haversine_distance(george_town, kek_lok_si);
/// assert!(d > 6_000.0 && d < 8_000.0);
/// ```
#[must_use]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * half_chord.sqrt().asin()
}

/// Mean latitude/longitude of a set of coordinates.
///
/// Returns `None` for an empty iterator. The result is a filtering aid,
/// not itself a point of interest.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::geo::centroid;
///
/// let mid = centroid([
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 2.0, y: 4.0 },
/// ]);
/// assert_eq!(mid, Some(Coord { x: 1.0, y: 2.0 }));
/// ```
pub fn centroid<I>(points: I) -> Option<Coord<f64>>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    let mut count = 0_u32;
    let mut sum = Coord { x: 0.0, y: 0.0 };
    for point in points {
        sum.x += point.x;
        sum.y += point.y;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = f64::from(count);
    Some(Coord {
        x: sum.x / n,
        y: sum.y / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn zero_distance_for_identical_points() {
        let p = Coord { x: 101.7, y: 3.15 };
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 0.0, y: 1.0 };
        let d = haversine_distance(a, b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[rstest]
    fn centroid_of_empty_set_is_none() {
        assert_eq!(centroid(std::iter::empty()), None);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lon_a in -180.0_f64..180.0,
            lat_a in -90.0_f64..90.0,
            lon_b in -180.0_f64..180.0,
            lat_b in -90.0_f64..90.0,
        ) {
            let a = Coord { x: lon_a, y: lat_a };
            let b = Coord { x: lon_b, y: lat_b };
            let forward = haversine_distance(a, b);
            let backward = haversine_distance(b, a);
            prop_assert!((forward - backward).abs() < 1e-6);
            prop_assert!(forward >= 0.0);
        }
    }
}
