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

//! Networks for testing

use crate::netsim::{Network, NetworkError};
use crate::topology::Scenario;

mod triangle;
pub use triangle::TriangleNet;

mod count_to_infinity;
pub use count_to_infinity::CountToInfinityNet;

mod link_removal;
pub use link_removal::LinkRemovalNet;

mod tie_break;
pub use tie_break::TieBreakNet;

mod random;
pub use random::RandomNet;

/// Trait for easier access to example networks.
pub trait ExampleNetwork {
    /// Get the scenario, containing the initial topology and the link changes.
    fn scenario() -> Scenario;

    /// Get the network with the initial topology. The routing tables are not yet built.
    fn net() -> Result<Network, NetworkError> {
        Self::scenario().build_network()
    }
}
