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

use dvsim::example_networks::{self, ExampleNetwork};
use dvsim::topology::Scenario;
use std::fmt;

use clap::ValueEnum;

/// Prepared scenarios of the library
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Topology {
    /// Triangle with an expensive direct link, which becomes cheap after the update
    Triangle,
    /// Line of three routers, where the cost of the last link increases
    CountToInfinity,
    /// Triangle, where one link is removed
    LinkRemoval,
    /// Square with two equally good paths
    TieBreak,
}

impl Topology {
    /// Returns the scenario of the selected topology
    pub fn scenario(&self) -> Scenario {
        match self {
            Topology::Triangle => example_networks::TriangleNet::scenario(),
            Topology::CountToInfinity => example_networks::CountToInfinityNet::scenario(),
            Topology::LinkRemoval => example_networks::LinkRemovalNet::scenario(),
            Topology::TieBreak => example_networks::TieBreakNet::scenario(),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topology::Triangle => write!(f, "Triangle"),
            Topology::CountToInfinity => write!(f, "CountToInfinity"),
            Topology::LinkRemoval => write!(f, "LinkRemoval"),
            Topology::TieBreak => write!(f, "TieBreak"),
        }
    }
}
