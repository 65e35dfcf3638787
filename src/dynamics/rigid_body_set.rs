use crate::dynamics::RigidBody;
use slab::Slab;
use std::ops::{Index, IndexMut};

/// The unique identifier of a rigid body added to a [`RigidBodySet`].
///
/// Handles are never reused: a handle of a removed body stays invalid even if its
/// slot is taken by another body. The index is the slot of the body in the set, stored
/// as-is so every slot of the underlying arena is addressable.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RigidBodyHandle {
    index: usize,
    generation: u32,
}

impl RigidBodyHandle {
    /// Builds a handle from its index and generation.
    #[inline]
    pub fn from_raw_parts(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The index and generation of this handle.
    #[inline]
    pub fn into_raw_parts(self) -> (usize, u32) {
        (self.index, self.generation)
    }
}

/// A set of rigid bodies, identified by their [`RigidBodyHandle`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct RigidBodySet {
    bodies: Slab<(u32, RigidBody)>,
    next_generation: u32,
}

impl RigidBodySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of bodies in this set.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Adds a body to this set and attaches its collider to it.
    pub fn insert(&mut self, mut body: RigidBody) -> RigidBodyHandle {
        let entry = self.bodies.vacant_entry();
        let handle = RigidBodyHandle::from_raw_parts(entry.key(), self.next_generation);
        self.next_generation = self.next_generation.wrapping_add(1);

        body.set_handle(Some(handle));
        let _ = entry.insert((handle.generation, body));
        handle
    }

    /// Removes a body from this set.
    ///
    /// The returned body, and its collider, no longer refer to `handle`.
    pub fn remove(&mut self, handle: RigidBodyHandle) -> Option<RigidBody> {
        if !self.contains(handle) {
            return None;
        }

        let (_, mut body) = self.bodies.remove(handle.index);
        body.set_handle(None);
        Some(body)
    }

    /// Does this set contain a body with the given handle?
    pub fn contains(&self, handle: RigidBodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// The body with the given handle.
    pub fn get(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies
            .get(handle.index)
            .filter(|(generation, _)| *generation == handle.generation)
            .map(|(_, body)| body)
    }

    /// A mutable reference to the body with the given handle.
    pub fn get_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies
            .get_mut(handle.index)
            .filter(|(generation, _)| *generation == handle.generation)
            .map(|(_, body)| body)
    }

    /// Mutable references to two distinct bodies.
    ///
    /// Returns `None` if both handles are equal or if any of them is invalid.
    pub fn get_pair_mut(
        &mut self,
        handle1: RigidBodyHandle,
        handle2: RigidBodyHandle,
    ) -> Option<(&mut RigidBody, &mut RigidBody)> {
        if handle1.index == handle2.index {
            return None;
        }

        let ((generation1, body1), (generation2, body2)) = self
            .bodies
            .get2_mut(handle1.index, handle2.index)?;

        if *generation1 != handle1.generation || *generation2 != handle2.generation {
            return None;
        }

        Some((body1, body2))
    }

    /// Iterates through all the bodies of this set, with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (RigidBodyHandle, &RigidBody)> {
        self.bodies.iter().map(|(index, (generation, body))| {
            (RigidBodyHandle::from_raw_parts(index, *generation), body)
        })
    }

    /// Iterates mutably through all the bodies of this set, with their handles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (RigidBodyHandle, &mut RigidBody)> {
        self.bodies.iter_mut().map(|(index, (generation, body))| {
            (RigidBodyHandle::from_raw_parts(index, *generation), body)
        })
    }
}

impl Index<RigidBodyHandle> for RigidBodySet {
    type Output = RigidBody;

    fn index(&self, handle: RigidBodyHandle) -> &RigidBody {
        match self.get(handle) {
            Some(body) => body,
            None => panic!("Invalid rigid-body handle {:?}.", handle),
        }
    }
}

impl IndexMut<RigidBodyHandle> for RigidBodySet {
    fn index_mut(&mut self, handle: RigidBodyHandle) -> &mut RigidBody {
        match self.get_mut(handle) {
            Some(body) => body,
            None => panic!("Invalid rigid-body handle {:?}.", handle),
        }
    }
}
