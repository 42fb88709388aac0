use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// Maximum edge length of a partition cell in Angstroms.
pub const PARTITION_GRANULARITY: f64 = 3.0;

/// Declarative description of a search box, as found in a run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoxSpec {
    /// Box center in Angstroms.
    pub center: [f64; 3],
    /// Box edge lengths in Angstroms.
    pub size: [f64; 3],
}

impl BoxSpec {
    /// Parses a `BoxSpec` from a TOML document with `center` and `size` arrays.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// An axis-aligned search box overlaid with a 3D partition layout.
///
/// Each axis is split into `max(1, ceil(span / PARTITION_GRANULARITY))` equal
/// partitions, so cells never exceed the granularity on any edge. The box is
/// the sole owner of cell corner geometry; consumers query corners and
/// projected distances rather than recomputing cell bounds themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct DockingBox {
    center: Point3<f64>,
    corner_min: Point3<f64>,
    corner_max: Point3<f64>,
    num_partitions: [usize; 3],
    partition_size: Vector3<f64>,
}

impl DockingBox {
    /// Creates a box from its center and per-axis edge lengths in Angstroms.
    pub fn new(center: Point3<f64>, span: Vector3<f64>) -> Self {
        let mut corner_min = Point3::origin();
        let mut corner_max = Point3::origin();
        let mut num_partitions = [0usize; 3];
        let mut partition_size = Vector3::zeros();
        for k in 0..3 {
            let n = (span[k] / PARTITION_GRANULARITY).ceil().max(1.0) as usize;
            num_partitions[k] = n;
            partition_size[k] = span[k] / n as f64;
            corner_min[k] = center[k] - span[k] * 0.5;
            corner_max[k] = corner_min[k] + span[k];
        }
        Self {
            center,
            corner_min,
            corner_max,
            num_partitions,
            partition_size,
        }
    }

    /// Creates a box from a deserialized [`BoxSpec`].
    pub fn from_spec(spec: &BoxSpec) -> Self {
        Self::new(
            Point3::from(spec.center),
            Vector3::from(spec.size),
        )
    }

    /// Returns the box center.
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Returns the lower corner of the box.
    pub fn corner_min(&self) -> Point3<f64> {
        self.corner_min
    }

    /// Returns the upper corner of the box.
    pub fn corner_max(&self) -> Point3<f64> {
        self.corner_max
    }

    /// Returns the number of partitions along each axis.
    pub fn num_partitions(&self) -> [usize; 3] {
        self.num_partitions
    }

    /// Returns true if the point lies inside the box (lower bound closed,
    /// upper bound open).
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (0..3).all(|k| self.corner_min[k] <= p[k] && p[k] < self.corner_max[k])
    }

    /// Returns the lower corner of the partition cell at `index`.
    ///
    /// An axis value may equal the partition count on that axis, which yields
    /// the far corner of the last cell.
    pub fn partition_corner(&self, index: [usize; 3]) -> Point3<f64> {
        Point3::new(
            self.corner_min[0] + self.partition_size[0] * index[0] as f64,
            self.corner_min[1] + self.partition_size[1] * index[1] as f64,
            self.corner_min[2] + self.partition_size[2] * index[2] as f64,
        )
    }

    /// Returns the squared distance from a point to the box, 0 when inside.
    pub fn projected_distance_sqr(&self, p: &Point3<f64>) -> f64 {
        Self::projected_distance_sqr_to_region(&self.corner_min, &self.corner_max, p)
    }

    /// Returns the squared distance from a point to an axis-aligned region
    /// bounded by two opposite corners, 0 when inside.
    pub fn projected_distance_sqr_to_region(
        corner1: &Point3<f64>,
        corner2: &Point3<f64>,
        p: &Point3<f64>,
    ) -> f64 {
        let mut sum = 0.0;
        for k in 0..3 {
            let d = if p[k] < corner1[k] {
                corner1[k] - p[k]
            } else if p[k] > corner2[k] {
                p[k] - corner2[k]
            } else {
                0.0
            };
            sum += d * d;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_counts_respect_granularity() {
        let b = DockingBox::new(Point3::origin(), Vector3::new(6.0, 7.0, 1.0));
        assert_eq!(b.num_partitions(), [2, 3, 1]);
    }

    #[test]
    fn partition_corners_span_the_box() {
        let b = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        assert_eq!(b.partition_corner([0, 0, 0]), b.corner_min());
        assert_eq!(b.partition_corner([2, 2, 2]), b.corner_max());
        let mid = b.partition_corner([1, 1, 1]);
        assert!((mid - Point3::origin()).norm() < 1e-12);
    }

    #[test]
    fn projected_distance_is_zero_inside() {
        let b = DockingBox::new(Point3::origin(), Vector3::new(10.0, 10.0, 10.0));
        assert_eq!(b.projected_distance_sqr(&Point3::origin()), 0.0);
        assert_eq!(b.projected_distance_sqr(&Point3::new(4.9, -4.9, 0.0)), 0.0);
    }

    #[test]
    fn projected_distance_accumulates_per_axis() {
        let b = DockingBox::new(Point3::origin(), Vector3::new(10.0, 10.0, 10.0));
        // 3 beyond the +x face, 4 beyond the -y face.
        let p = Point3::new(8.0, -9.0, 0.0);
        assert!((b.projected_distance_sqr(&p) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_half_open() {
        let b = DockingBox::new(Point3::origin(), Vector3::new(10.0, 10.0, 10.0));
        assert!(b.contains(&Point3::new(-5.0, 0.0, 0.0)));
        assert!(!b.contains(&Point3::new(5.0, 0.0, 0.0)));
        assert!(!b.contains(&Point3::new(0.0, 0.0, 5.1)));
    }

    #[test]
    fn from_spec_parses_toml_configuration() {
        let spec = BoxSpec::from_toml_str(
            "center = [1.0, 2.0, 3.0]\nsize = [20.0, 22.0, 24.0]",
        )
        .unwrap();
        let b = DockingBox::from_spec(&spec);
        assert_eq!(b.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(b.corner_min(), Point3::new(-9.0, -9.0, -9.0));
        assert_eq!(b.num_partitions(), [7, 8, 8]);
    }

    #[test]
    fn from_toml_str_rejects_missing_fields() {
        assert!(BoxSpec::from_toml_str("center = [0.0, 0.0, 0.0]").is_err());
    }
}
