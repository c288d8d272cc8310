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

//! Module containing all type definitions

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Undirected;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;
use thiserror::Error;

type IndexType = u32;
/// Node index of a router inside the link graph
pub type NodeId = NodeIndex<IndexType>;
/// Cost of a single link. Links can only have non-negative integer costs.
pub type LinkWeight = u32;
/// Undirected graph containing all links and their weights. Node weights are the router names.
pub type LinkGraph = StableGraph<String, LinkWeight, Undirected, IndexType>;
/// Distance vector, mapping each destination to the cost of reaching it.
pub type DistanceVector = BTreeMap<String, Cost>;

/// # Cost
/// Cost to reach a destination. The derived ordering places every finite cost before `Infinite`,
/// which is used to represent unreachable destinations.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Cost {
    /// Destination is reachable with the given cost
    Finite(LinkWeight),
    /// Destination is unreachable
    Infinite,
}

impl Cost {
    /// Returns true if the cost is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true if the cost is infinite.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Maps the cost to an option, with `Some(c)` only if the cost is finite.
    pub fn finite(self) -> Option<LinkWeight> {
        match self {
            Self::Finite(c) => Some(c),
            Self::Infinite => None,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::Infinite
    }
}

impl From<LinkWeight> for Cost {
    fn from(weight: LinkWeight) -> Self {
        Self::Finite(weight)
    }
}

impl Add for Cost {
    type Output = Cost;

    /// Adding anything to `Infinite` stays `Infinite`. An overflow also results in `Infinite`.
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => {
                a.checked_add(b).map_or(Self::Infinite, Self::Finite)
            }
            _ => Self::Infinite,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Finite(c) => write!(f, "{}", c),
            Self::Infinite => write!(f, "INF"),
        }
    }
}

/// # Phase
/// A phase is one run to convergence. The first phase runs on the initial topology, the second one
/// after a batch of link changes was applied.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Phase {
    /// Convergence on the initial topology
    Start,
    /// Convergence after the topology was updated
    Update,
}

impl Phase {
    /// Returns the label describing the event that triggered the phase.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "initial topology established",
            Self::Update => "topology updated",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Update => write!(f, "UPDATE"),
        }
    }
}

/// Router Errors
#[derive(Error, Debug, PartialEq)]
pub enum DeviceError {
    /// The router has no direct link to the router whose vector it should merge
    #[error("Router {0} is not a neighbor")]
    NotANeighbor(String),
}

/// Network Errors
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// Device Error which cannot be handled
    #[error("Device Error: {0}")]
    DeviceError(#[from] DeviceError),
    /// Router name is not present in the topology
    #[error("Router name was not found in topology: {0}")]
    RouterNameNotFound(String),
    /// A router with the same name is already present
    #[error("Router {0} does already exist")]
    RouterAlreadyExists(String),
    /// Links from a router to itself are not allowed
    #[error("Cannot connect router {0} to itself")]
    SelfLink(String),
    /// The link does not exist
    #[error("Network link does not exist: {0} -- {1}")]
    LinkNotFound(String, String),
    /// A router did not export any vector to one of its neighbors
    #[error("Router {0} has no exported vector for {1}")]
    MissingExport(String, String),
    /// Convergence Problem
    #[error("Network did not converge within {0} rounds!")]
    NoConvergence(usize),
    /// Forwarding loop detected
    #[error("Forwarding Loop occurred! path: {0:?}")]
    ForwardingLoop(Vec<String>),
    /// Black hole detected
    #[error("Black hole occurred! path: {0:?}")]
    ForwardingBlackHole(Vec<String>),
}
