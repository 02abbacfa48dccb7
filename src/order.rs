//! Orientational order analysis over an ensemble of bodies.
//!
//! The director of an elongated body is the principal axis of its
//! moment-of-inertia tensor with the *smallest* eigenvalue (mass is spread
//! along that axis, so resistance to rotation about it is lowest). An
//! ensemble of directors condenses into the orientational order tensor
//! `Q = ⟨(3 d⊗d − I)/2⟩`, whose largest eigenvalue is the nematic order
//! parameter S2: 1 for perfect alignment, 0 for an isotropic ensemble.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};

/// Unit eigenvector of the smallest eigenvalue: the body's long axis.
///
/// The sign of the returned vector is arbitrary, as a director is a
/// headless axis.
pub fn director(inertia: &Matrix3<f64>) -> Vector3<f64> {
    let eigen = SymmetricEigen::new(*inertia);
    let mut smallest = 0;
    for i in 1..3 {
        if eigen.eigenvalues[i] < eigen.eigenvalues[smallest] {
            smallest = i;
        }
    }
    eigen.eigenvectors.column(smallest).into_owned()
}

/// Orientational order tensor of an ensemble of (unit) directors.
///
/// Returns the zero matrix for an empty ensemble.
pub fn order_tensor(directors: &[Vector3<f64>]) -> Matrix3<f64> {
    if directors.is_empty() {
        return Matrix3::zeros();
    }
    let mut q = Matrix3::zeros();
    for d in directors {
        let outer = d * d.transpose();
        q += (outer * 3.0 - Matrix3::identity()) / 2.0;
    }
    q / directors.len() as f64
}

/// Nematic order parameter S2: the largest eigenvalue of the order tensor.
pub fn nematic_order(q: &Matrix3<f64>) -> f64 {
    let eigen = SymmetricEigen::new(*q);
    eigen.eigenvalues.max()
}

/// Angle between two vectors, in degrees.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let cos = a.dot(b) / (a.norm() * b.norm());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}
