// Re-export glam for convenience
pub use glam::*;
pub use num_complex::Complex64;

// Toro math types
mod bounds;
mod quartic;
mod ray;
mod solver;
mod transform;

pub use bounds::BoundingSphere;
pub use quartic::{Quartic, QuarticError};
pub use ray::Ray;
pub use solver::{find_roots, real_roots, SolverError, SolverResult, EPSILON, MAX_ITERATIONS};
pub use transform::Mat4Ext;

