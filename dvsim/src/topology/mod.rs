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

//! # Topology Description
//!
//! This module reads the textual description of a network (see [`parser`]) and turns it into a
//! [`Scenario`]: the declared routers, the initial links and the batch of link changes applied
//! after the first phase has converged.

mod error;
pub mod parser;

pub use error::TopologyError;
pub use parser::parse_scenario;

use crate::netsim::config::{LinkChange, TopologyPatch};
use crate::netsim::{LinkWeight, Network, NetworkError};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// # Scenario
/// Complete input of a simulation. All router names referenced by the links are declared in
/// `routers`, and no link connects a router to itself. Both properties are checked by the parser;
/// [`Scenario::build_network`] still reports a [`NetworkError`] if they are violated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    /// Names of all routers, in the order they were declared
    pub routers: Vec<String>,
    /// Links of the initial topology as `(a, b, cost)`
    pub initial_links: Vec<(String, String, LinkWeight)>,
    /// Changes applied before the second phase
    pub updates: TopologyPatch,
}

impl Scenario {
    /// Create an empty scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a scenario from any buffered reader, for instance from standard input.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TopologyError> {
        parse_scenario(reader)
    }

    /// Read a scenario from a file.
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, TopologyError> {
        let file = File::open(filename.as_ref())?;
        parse_scenario(BufReader::new(file))
    }

    /// Declare a new router
    pub fn add_router(&mut self, name: impl Into<String>) {
        self.routers.push(name.into());
    }

    /// Add a link to the initial topology
    pub fn add_link(&mut self, a: impl Into<String>, b: impl Into<String>, weight: LinkWeight) {
        self.initial_links.push((a.into(), b.into(), weight));
    }

    /// Add a link change, applied after the initial topology has converged
    pub fn add_update(&mut self, change: LinkChange) {
        self.updates.add(change);
    }

    /// Build the network with all routers and the initial links. The routing tables are still
    /// empty; they are built at the start of the first phase.
    pub fn build_network(&self) -> Result<Network, NetworkError> {
        let mut net = Network::new();
        for router in self.routers.iter() {
            net.add_router(router.as_str())?;
        }
        for (a, b, weight) in self.initial_links.iter() {
            net.set_link(a, b, *weight)?;
        }
        Ok(net)
    }
}

impl FromStr for Scenario {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scenario(s.as_bytes())
    }
}
