use nalgebra::{Matrix3, Point3, Quaternion, Vector3};

/// Returns the square norm of a quaternion.
pub fn norm_sqr(q: &Quaternion<f64>) -> f64 {
    q.w * q.w + q.i * q.i + q.j * q.j + q.k * q.k
}

/// Returns the norm of a quaternion.
pub fn norm(q: &Quaternion<f64>) -> f64 {
    norm_sqr(q).sqrt()
}

/// Returns true if the quaternion is normalized, within 1e-5 on the square norm.
pub fn is_normalized(q: &Quaternion<f64>) -> bool {
    (norm_sqr(q) - 1.0).abs() < 1e-5
}

/// Returns the normalized copy of a quaternion. The zero quaternion is not
/// guarded; callers must not pass it.
pub fn normalize(q: &Quaternion<f64>) -> Quaternion<f64> {
    let norm_inv = 1.0 / norm(q);
    Quaternion::new(q.w * norm_inv, q.i * norm_inv, q.j * norm_inv, q.k * norm_inv)
}

/// Constructs a unit quaternion from a normalized axis and an angle in radians.
/// The axis is assumed to be unit length; this is not checked.
pub fn axis_angle_to_quaternion(axis: &Vector3<f64>, angle: f64) -> Quaternion<f64> {
    let s = (angle * 0.5).sin();
    Quaternion::new((angle * 0.5).cos(), s * axis[0], s * axis[1], s * axis[2])
}

/// Constructs a unit quaternion from a rotation vector, whose norm is the
/// rotation angle and whose direction is the rotation axis. A zero vector maps
/// exactly to the identity quaternion.
pub fn rotation_vector_to_quaternion(rotation: &Vector3<f64>) -> Quaternion<f64> {
    if rotation == &Vector3::zeros() {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    } else {
        let angle = rotation.norm();
        let axis = rotation / angle;
        axis_angle_to_quaternion(&axis, angle)
    }
}

/// Returns the Hamilton product of two quaternions. Non-commutative; when the
/// result is used to rotate a vector, `q2` applies first and `q1` second.
pub fn quaternion_mul(q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(
        q1.w * q2.w - q1.i * q2.i - q1.j * q2.j - q1.k * q2.k,
        q1.w * q2.i + q1.i * q2.w + q1.j * q2.k - q1.k * q2.j,
        q1.w * q2.j - q1.i * q2.k + q1.j * q2.w + q1.k * q2.i,
        q1.w * q2.k + q1.i * q2.j - q1.j * q2.i + q1.k * q2.w,
    )
}

/// Converts a unit quaternion into a 3x3 rotation matrix, e.g. the identity
/// quaternion maps to the identity matrix. The input is assumed normalized;
/// quaternions accumulated through repeated multiplication drift from unit
/// norm and must be normalized first.
pub fn quaternion_to_matrix(q: &Quaternion<f64>) -> Matrix3<f64> {
    let aa = q.w * q.w;
    let ab = q.w * q.i;
    let ac = q.w * q.j;
    let ad = q.w * q.k;
    let bb = q.i * q.i;
    let bc = q.i * q.j;
    let bd = q.i * q.k;
    let cc = q.j * q.j;
    let cd = q.j * q.k;
    let dd = q.k * q.k;
    Matrix3::new(
        aa + bb - cc - dd,
        2.0 * (-ad + bc),
        2.0 * (ac + bd),
        2.0 * (ad + bc),
        aa - bb + cc - dd,
        2.0 * (-ab + cd),
        2.0 * (-ac + bd),
        2.0 * (ab + cd),
        aa - bb - cc + dd,
    )
}

/// Transforms a vector by a 3x3 matrix.
pub fn rotate_vector(m: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    m * v
}

/// Transforms a point by a 3x3 matrix.
pub fn rotate_point(m: &Matrix3<f64>, p: &Point3<f64>) -> Point3<f64> {
    m * p
}
