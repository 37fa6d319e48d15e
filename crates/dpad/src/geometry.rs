use derive_more::{Deref, Display, From, Into};
use kurbo::{BezPath, Point, Shape, Vec2};
use serde::{Deserialize, Serialize};

/// Flattening tolerance for arcs and stroked outlines, in local units.
pub const TOLERANCE: f64 = 0.1;

/// An angle in degrees. Positive values run clockwise on a y-down surface, so
/// wedges built by the pad carry negative angles.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Wraps into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(360.0))
    }
}

impl std::ops::Add for Degrees {
    type Output = Degrees;

    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Degrees {
    type Output = Degrees;

    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Degrees {
    type Output = Degrees;

    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

/// A closed planar region tested with the nonzero winding rule.
#[derive(Debug, Clone, Default)]
pub struct Region {
    path: BezPath,
}

impl Region {
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn contains(&self, point: Point) -> bool {
        self.path.contains(point)
    }
}

impl From<BezPath> for Region {
    fn from(path: BezPath) -> Self {
        Self::new(path)
    }
}

pub fn point_in_region(region: &Region, point: Point) -> bool {
    region.contains(point)
}

pub fn distance(a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    dx.hypot(dy)
}

/// Pulls `point` back onto the closed disk of `max_radius` around `center`,
/// keeping its direction from `center`.
///
/// Points too far away for their distance to be finite land on the rim along
/// their direction; an infinite coordinate counts as that axis alone. A NaN
/// coordinate has no direction and yields `center`.
pub fn clamp_to_disk(center: Point, point: Point, max_radius: f64) -> Point {
    let offset = point - center;
    if offset.x.is_nan() || offset.y.is_nan() {
        return center;
    }

    let dist = offset.hypot();
    if dist <= max_radius || dist == 0.0 {
        return point;
    }
    if dist.is_finite() {
        return center + offset * (max_radius / dist);
    }

    let unit = if offset.x.is_infinite() || offset.y.is_infinite() {
        let axis = |v: f64| if v.is_infinite() { v.signum() } else { 0.0 };
        Vec2::new(axis(offset.x), axis(offset.y))
    } else {
        offset / offset.x.abs().max(offset.y.abs())
    };
    center + unit * (max_radius / unit.hypot())
}

/// The point at `radius` from `center` along `angle`.
pub fn polar(center: Point, radius: f64, angle: Degrees) -> Point {
    let theta = angle.to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_distance() {
        assert!(approx(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0));
        assert!(approx(distance(Point::ZERO, Point::ZERO), 0.0));
    }

    #[test]
    fn test_clamp_inside_is_untouched() {
        let center = Point::new(10.0, 10.0);
        let p = Point::new(13.0, 14.0);
        assert_eq!(clamp_to_disk(center, p, 5.0), p);
        assert_eq!(clamp_to_disk(center, p, 6.0), p);
    }

    #[test]
    fn test_clamp_outside_keeps_direction() {
        let center = Point::new(200.0, 200.0);
        let p = Point::new(200.0 + 300.0, 200.0 - 400.0);
        let clamped = clamp_to_disk(center, p, 47.0);

        assert!(approx(distance(center, clamped), 47.0));
        let (a, b) = (p - center, clamped - center);
        assert!(approx(a.y.atan2(a.x), b.y.atan2(b.x)));
    }

    #[test]
    fn test_clamp_at_center() {
        let center = Point::new(3.0, 4.0);
        assert_eq!(clamp_to_disk(center, center, 10.0), center);
        assert_eq!(clamp_to_disk(center, center, 0.0), center);
    }

    #[test]
    fn test_clamp_far_away_points() {
        let center = Point::new(200.0, 200.0);

        let clamped = clamp_to_disk(center, Point::new(f64::INFINITY, 200.0), 47.0);
        assert!(approx(clamped.x, 247.0) && approx(clamped.y, 200.0));

        let clamped = clamp_to_disk(center, Point::new(0.0, f64::NEG_INFINITY), 47.0);
        assert!(approx(clamped.x, 200.0) && approx(clamped.y, 153.0));

        let clamped = clamp_to_disk(center, Point::new(f64::INFINITY, f64::INFINITY), 10.0);
        assert!(approx(distance(center, clamped), 10.0));
        assert!(approx(clamped.x, clamped.y));

        for p in [
            Point::new(f64::MAX, f64::MAX),
            Point::new(-f64::MAX, f64::MAX),
            Point::new(f64::MAX, 0.0),
        ] {
            let clamped = clamp_to_disk(center, p, 47.0);
            assert!(clamped.x.is_finite() && clamped.y.is_finite());
            assert!(approx(distance(center, clamped), 47.0));
        }
        let clamped = clamp_to_disk(center, Point::new(-f64::MAX, f64::MAX), 47.0);
        assert!(clamped.x < center.x && clamped.y > center.y);
    }

    #[test]
    fn test_clamp_nan_falls_back_to_center() {
        let center = Point::new(1.0, 2.0);
        assert_eq!(clamp_to_disk(center, Point::new(f64::NAN, 5.0), 3.0), center);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let center = Point::new(-20.0, 35.0);
        for (i, radius) in [0.0, 1.0, 33.3, 47.0, 120.5].into_iter().enumerate() {
            let p = polar(center, 10.0 + 90.0 * i as f64, Degrees::new(17.0 * i as f64 - 60.0));
            let once = clamp_to_disk(center, p, radius);
            let twice = clamp_to_disk(center, once, radius);
            assert!(approx(once.x, twice.x) && approx(once.y, twice.y));
            assert!(distance(center, once) <= radius + 1e-9);
        }
    }

    #[test]
    fn test_degrees() {
        assert!(approx(Degrees::new(180.0).to_radians(), std::f64::consts::PI));
        assert_eq!(Degrees::new(-45.0).normalized(), Degrees::new(315.0));
        assert_eq!(Degrees::new(405.0).normalized(), Degrees::new(45.0));
        assert_eq!(-(Degrees::new(10.0) + Degrees::new(5.0)), Degrees::new(-15.0));
    }

    #[test]
    fn test_polar_is_y_down() {
        let p = polar(Point::ZERO, 10.0, Degrees::new(-90.0));
        assert!(approx(p.x, 0.0) && approx(p.y, -10.0));
    }
}
