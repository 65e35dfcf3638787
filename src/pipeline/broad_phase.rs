use crate::dynamics::{RigidBodyHandle, RigidBodySet};

/// Trait implemented by algorithms finding the pairs of bodies that may collide.
pub trait BroadPhase {
    /// Pushes to `out` the ordered pairs of `handles` that need an exact overlap test.
    ///
    /// Handles not found in `bodies` are ignored.
    fn find_pairs(
        &mut self,
        handles: &[RigidBodyHandle],
        bodies: &RigidBodySet,
        out: &mut Vec<(RigidBodyHandle, RigidBodyHandle)>,
    );
}

/// A broad-phase that reports every ordered pair of distinct bodies with a collider.
///
/// Both `(a, b)` and `(b, a)` are reported, in the order of `handles`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BroadPhaseBruteForce;

impl BroadPhaseBruteForce {
    /// Creates a new brute-force broad-phase.
    pub fn new() -> Self {
        Self
    }
}

impl BroadPhase for BroadPhaseBruteForce {
    fn find_pairs(
        &mut self,
        handles: &[RigidBodyHandle],
        bodies: &RigidBodySet,
        out: &mut Vec<(RigidBodyHandle, RigidBodyHandle)>,
    ) {
        let has_collider = |handle: &RigidBodyHandle| {
            bodies
                .get(*handle)
                .is_some_and(|body| body.collider().is_some())
        };

        for (i, handle1) in handles.iter().enumerate() {
            if !has_collider(handle1) {
                continue;
            }

            for (j, handle2) in handles.iter().enumerate() {
                if i != j && has_collider(handle2) {
                    out.push((*handle1, *handle2));
                }
            }
        }
    }
}
