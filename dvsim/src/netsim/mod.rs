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

#![deny(missing_docs, missing_debug_implementations)]

//! # NetSim
//!
//! This is a library for simulating the distance-vector routing protocol with poisoned reverse on
//! a static network of named routers.
//!
//! Every [`Router`](router::Router) keeps a distance vector, the chosen next hop for every
//! destination, and the full table of costs via each neighbor. The [`Network`] runs the protocol
//! in synchronous rounds until no router changes anymore.
//!
//! ## Example usage
//!
//! The following example generates a triangle of routers `A`, `B` and `C`, where the direct link
//! between `A` and `C` is more expensive than the detour via `B`.
//!
//! ```rust
//! use dvsim::netsim::{Network, Phase, Cost, NoopObserver};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut net = Network::new();
//!
//!     net.add_router("A")?;
//!     net.add_router("B")?;
//!     net.add_router("C")?;
//!
//!     net.set_link("A", "B", 1)?;
//!     net.set_link("B", "C", 1)?;
//!     net.set_link("A", "C", 5)?;
//!
//!     net.run_phase(Phase::Start, &mut NoopObserver)?;
//!
//!     let a = net.get_router("A")?;
//!     assert_eq!(a.cost("C"), Cost::Finite(2));
//!     assert_eq!(a.next_hop("C"), Some("B"));
//!     assert_eq!(net.get_route("A", "C")?, vec!["A", "B", "C"]);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub(crate) mod network;
pub mod observer;
pub mod printer;
pub mod router;
pub(crate) mod types;

pub use network::{Exports, Network};
pub use observer::{ConvergenceObserver, NoopObserver};
pub use router::Router;
pub use types::{
    Cost, DeviceError, DistanceVector, LinkGraph, LinkWeight, NetworkError, NodeId, Phase,
};
