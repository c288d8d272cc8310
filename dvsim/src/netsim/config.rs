// DvSim: Distance-Vector Routing Simulation with Poisoned Reverse
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Topology changes
//! This module represents changes to the links of the network, applied between two phases.
//!
//! - [`LinkChange`]: A modification of a single link. A link is either set (added, or re-costed if
//!   it already exists) or removed on both endpoints.
//! - [`TopologyPatch`]: An ordered batch of [`LinkChange`], applied one after the other.
//!
//! # Example Usage
//!
//! ```rust
//! use dvsim::netsim::config::{LinkChange, TopologyPatch};
//! use dvsim::netsim::{Network, NetworkError};
//!
//! fn main() -> Result<(), NetworkError> {
//!     let mut net = Network::new();
//!     net.add_router("A")?;
//!     net.add_router("B")?;
//!     net.add_router("C")?;
//!     net.set_link("A", "B", 1)?;
//!     net.set_link("A", "C", 1)?;
//!
//!     let mut patch = TopologyPatch::new();
//!     patch.add(LinkChange::Set { a: "B".into(), b: "C".into(), weight: 4 });
//!     patch.add(LinkChange::Remove { a: "C".into(), b: "A".into() });
//!     net.apply_patch(&patch)?;
//!
//!     assert_eq!(net.get_link_weight("B", "C"), Some(4));
//!     assert_eq!(net.get_link_weight("A", "C"), None);
//!     Ok(())
//! }
//! ```

use crate::netsim::LinkWeight;

/// # Link Change
/// Single modification of a link. Both variants are symmetric, they affect both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkChange {
    /// Add the link `a -- b`, or change its cost if it already exists.
    Set {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
        /// New cost of the link
        weight: LinkWeight,
    },
    /// Remove the link `a -- b`.
    Remove {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
    },
}

impl LinkChange {
    /// Returns both endpoints of the affected link.
    pub fn endpoints(&self) -> (&str, &str) {
        match self {
            Self::Set { a, b, .. } | Self::Remove { a, b } => (a.as_str(), b.as_str()),
        }
    }
}

/// # Topology Patch
/// Ordered batch of link changes. In contrast to the routers' neighbor maps, the patch remembers
/// the order in which the changes were given, since a later change of the same link overrides an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyPatch {
    /// All link changes, in the order they are applied
    pub changes: Vec<LinkChange>,
}

impl TopologyPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self { changes: Vec::new() }
    }

    /// Append a single change to the end of the patch
    pub fn add(&mut self, change: LinkChange) {
        self.changes.push(change);
    }

    /// Returns the number of changes in the patch
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if the patch contains no changes
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns an iterator over all changes, in the order in which they are applied.
    pub fn iter(&self) -> std::slice::Iter<'_, LinkChange> {
        self.changes.iter()
    }
}

impl From<Vec<LinkChange>> for TopologyPatch {
    fn from(changes: Vec<LinkChange>) -> Self {
        Self { changes }
    }
}
