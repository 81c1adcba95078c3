//! Strongly-typed identifiers into the global lattice tables.
//!
//! Ids are 1-based, matching the external node/edge/loop tables the mesh
//! builder produces. The raw value `0` is reserved for "not assigned".

use serde::{Deserialize, Serialize};

/// 1-based index into the global node table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// 1-based index into the global edge table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// 1-based index into a loop table (one table per multigrid level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoopId(pub u32);

macro_rules! impl_one_based_id {
    ($name:ident) => {
        impl $name {
            /// Placeholder value for slots that have been sized but not filled.
            pub const UNASSIGNED: Self = Self(0);

            /// Builds an id from a 0-based table position.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self(index as u32 + 1)
            }

            /// Returns the 0-based table position.
            ///
            /// # Panics
            /// Panics if the id is unassigned.
            #[inline]
            pub fn index(self) -> usize {
                assert!(self.is_assigned(), concat!(stringify!($name), " is unassigned"));
                (self.0 - 1) as usize
            }

            #[inline]
            pub fn is_assigned(self) -> bool {
                self.0 != 0
            }
        }

        impl From<u32> for $name {
            fn from(val: u32) -> Self {
                Self(val)
            }
        }
    };
}

impl_one_based_id!(NodeId);
impl_one_based_id!(EdgeId);
impl_one_based_id!(LoopId);
