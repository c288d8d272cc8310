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

//! # Count-to-Infinity Network

use super::ExampleNetwork;
use crate::netsim::config::LinkChange;
use crate::topology::Scenario;

/// # Count to Infinity
///
/// Line of three routers. Without poisoned reverse, increasing the cost of `B -- C` lets `A` and
/// `B` slowly count up their cost towards `C`.
///
/// ```text
/// A --- B --- C
///    1     1      (update: B -- C = 60)
/// ```
pub struct CountToInfinityNet {}

impl ExampleNetwork for CountToInfinityNet {
    fn scenario() -> Scenario {
        let mut s = Scenario::new();
        s.add_router("A");
        s.add_router("B");
        s.add_router("C");
        s.add_link("A", "B", 1);
        s.add_link("B", "C", 1);
        s.add_update(LinkChange::Set { a: "B".into(), b: "C".into(), weight: 60 });
        s
    }
}
