/// Axis-aligned bounding box over `Point3`.
///
/// Inverted input is **reordered**, not rejected: every constructor takes the
/// componentwise min and max of what it is given, so `min <= max` holds on
/// every axis of every box and `merge` is total. The only constructor that
/// can fail is `from_slice`, which rejects wrong lengths and coordinates that
/// have no ordering (NaN, infinities).
///
/// `new`, `from_corners` and `from_points` do not validate: a NaN coordinate
/// loses to the other corner's value on that axis (`new(NaN, 0, 0, 1, 1, 1)`
/// spans x = 1..1). Use `from_slice` for untrusted input.

use std::fmt;
use glam::DVec3;
use crate::error::{Error, Result};
use crate::kernel_bail;
use crate::math::{Matrix4, Point3, Vector3};

const SOURCE: &str = "view3d::AxisAlignedBoundingBox";

/// Min/max interval per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBoundingBox {
    min: Point3,
    max: Point3,
}

/// Short name used by the scene side
pub type AABB = AxisAlignedBoundingBox;

impl AxisAlignedBoundingBox {
    /// Flat-scalar constructor; swapped bounds are reordered per axis
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self::from_corners(
            Point3::new(min_x, min_y, min_z),
            Point3::new(max_x, max_y, max_z),
        )
    }

    /// Box spanned by two opposite corners, in any order
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tightest box around the points, `None` when there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_corners(first, first), |acc, p| acc.expanded_to(p)))
    }

    /// Six flat values: min x, y, z then max x, y, z
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - `values.len() != 6`
    /// * `InvalidBounds` - a value is NaN or infinite
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != 6 {
            kernel_bail!(SOURCE, Error::DimensionMismatch {
                expected: 6,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            kernel_bail!(SOURCE, Error::InvalidBounds(format!(
                "coordinate {} is {}",
                index, values[index]
            )));
        }
        Ok(Self::new(values[0], values[1], values[2], values[3], values[4], values[5]))
    }

    pub fn min(&self) -> Point3 {
        self.min
    }

    pub fn max(&self) -> Point3 {
        self.max
    }

    /// `(min + max) / 2` per axis
    pub fn center(&self) -> Point3 {
        self.min.midpoint(self.max)
    }

    /// `max - min` per axis, never negative
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Boundary inclusive
    pub fn contains(&self, point: Point3) -> bool {
        let p = point.0;
        p.cmpge(self.min.0).all() && p.cmple(self.max.0).all()
    }

    pub fn contains_xyz(&self, x: f64, y: f64, z: f64) -> bool {
        self.contains(Point3::new(x, y, z))
    }

    /// Whether `other` lies entirely within this box
    pub fn contains_box(&self, other: &Self) -> bool {
        self.min.0.cmple(other.min.0).all() && self.max.0.cmpge(other.max.0).all()
    }

    /// Whether the boxes overlap or touch
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.0.cmple(other.max.0).all() && self.max.0.cmpge(other.min.0).all()
    }

    /// Smallest box containing both. Commutative, associative, never fails.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Smallest box containing this one and `point`
    pub fn expanded_to(&self, point: Point3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// The 8 corners; bit 0 of the index picks max x, bit 1 max y, bit 2 max z
    pub fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min.0, self.max.0);
        std::array::from_fn(|i| {
            Point3(DVec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            ))
        })
    }

    /// Box around this box after an affine transform.
    ///
    /// Arvo's method: each matrix axis is scaled by the min and max extent
    /// of that axis and the smaller/larger products are summed, which gives
    /// the same result as transforming all 8 corners.
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let translation = matrix.0.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.0.col(i).truncate();
            let a = axis * self.min.0[i];
            let b = axis * self.max.0[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Self {
            min: Point3(new_min),
            max: Point3(new_max),
        }
    }
}

impl fmt::Display for AxisAlignedBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisAlignedBoundingBox(min={}, max={})", self.min, self.max)
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
