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

//! # Tie-Break Network

use super::ExampleNetwork;
use crate::netsim::config::LinkChange;
use crate::topology::Scenario;

/// # Tie Break
///
/// Square, where `A` and `D` reach each other with the same cost via `B` and via `C`. Both choose
/// `B`, since it is the alphabetically smaller neighbor. After the update, the path via `C` is
/// cheaper.
///
/// ```text
///   A --- B
///   |     |
///   C --- D
/// ```
///
/// All links have cost 1. The update sets `A -- B` to 3.
pub struct TieBreakNet {}

impl ExampleNetwork for TieBreakNet {
    fn scenario() -> Scenario {
        let mut s = Scenario::new();
        // declared in reverse order to show that the declaration order does not matter
        s.add_router("D");
        s.add_router("C");
        s.add_router("B");
        s.add_router("A");
        s.add_link("A", "B", 1);
        s.add_link("A", "C", 1);
        s.add_link("B", "D", 1);
        s.add_link("C", "D", 1);
        s.add_update(LinkChange::Set { a: "A".into(), b: "B".into(), weight: 3 });
        s
    }
}
