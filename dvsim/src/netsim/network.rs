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

//! # Top-level Network module
//!
//! This module represents the network topology, keeps the link costs of both endpoints in sync,
//! and runs the synchronous rounds of the distance-vector protocol.

use crate::error::Error;
use crate::netsim::config::{LinkChange, TopologyPatch};
use crate::netsim::observer::ConvergenceObserver;
use crate::netsim::router::Router;
use crate::netsim::types::{LinkGraph, NodeId};
use crate::netsim::{Cost, DistanceVector, LinkWeight, NetworkError, Phase};

use log::*;
use petgraph::algo::dijkstra;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Vectors exported in a single round, mapping the sending router to the vector it advertises to
/// each of its neighbors.
pub type Exports = HashMap<String, HashMap<String, DistanceVector>>;

#[derive(Debug, Clone)]
/// # Network struct
/// The struct contains all information about the underlying physical network (links and their
/// costs), and manages all routers. Links are undirected: changing a link always changes the view
/// of both endpoints.
///
/// ## Rounds
///
/// The protocol runs in synchronous rounds. In each round, every router first computes the
/// poisoned vector for each of its neighbors, based on the state left by the previous round. Only
/// after all vectors are computed, every router merges the vectors it received. No router can ever
/// see a partially updated state of the same round. The network has converged as soon as a round
/// does not change any router.
///
/// ## Phases
///
/// A phase resets the tables of every router (using only the direct links), and runs the rounds
/// until convergence. See [`Network::run_phase`].
pub struct Network {
    net: LinkGraph,
    nodes: HashMap<String, NodeId>,
    routers: BTreeMap<String, Router>,
    round_limit: Option<usize>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Generate an empty Network
    pub fn new() -> Self {
        Self {
            net: LinkGraph::default(),
            nodes: HashMap::new(),
            routers: BTreeMap::new(),
            round_limit: None,
        }
    }

    /// Add a new router to the topology. The name must be unique.
    pub fn add_router<S: Into<String>>(&mut self, name: S) -> Result<(), NetworkError> {
        let name = name.into();
        if self.routers.contains_key(&name) {
            return Err(NetworkError::RouterAlreadyExists(name));
        }
        let node = self.net.add_node(name.clone());
        self.nodes.insert(name.clone(), node);
        self.routers.insert(name.clone(), Router::new(name));
        Ok(())
    }

    /// Add the link `a -- b` with the given cost, or change the cost if the link already exists.
    /// Returns the previous cost of the link, if it existed.
    ///
    /// The tables of the routers are not touched. They will only pick up the change at the start of
    /// the next phase.
    pub fn set_link(
        &mut self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
        weight: LinkWeight,
    ) -> Result<Option<LinkWeight>, NetworkError> {
        let (a, b) = (a.as_ref(), b.as_ref());
        let (node_a, node_b) = self.get_link_nodes(a, b)?;
        let old_weight = match self.net.find_edge(node_a, node_b) {
            Some(edge) => self.net.edge_weight_mut(edge).map(|w| std::mem::replace(w, weight)),
            None => {
                self.net.add_edge(node_a, node_b, weight);
                None
            }
        };
        self.get_router_mut(a)?.neighbors.insert(b.to_string(), weight);
        self.get_router_mut(b)?.neighbors.insert(a.to_string(), weight);
        debug!("Set link {} -- {} to {} (was {:?})", a, b, weight, old_weight);
        Ok(old_weight)
    }

    /// Remove the link `a -- b` on both endpoints. Returns the cost the link had.
    pub fn remove_link(
        &mut self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
    ) -> Result<LinkWeight, NetworkError> {
        let (a, b) = (a.as_ref(), b.as_ref());
        let (node_a, node_b) = self.get_link_nodes(a, b)?;
        let weight = self
            .net
            .find_edge(node_a, node_b)
            .and_then(|edge| self.net.remove_edge(edge))
            .ok_or_else(|| NetworkError::LinkNotFound(a.to_string(), b.to_string()))?;
        self.get_router_mut(a)?.neighbors.remove(b);
        self.get_router_mut(b)?.neighbors.remove(a);
        debug!("Removed link {} -- {} (cost {})", a, b, weight);
        Ok(weight)
    }

    /// Apply a single link change.
    pub fn apply_change(&mut self, change: &LinkChange) -> Result<(), NetworkError> {
        match change {
            LinkChange::Set { a, b, weight } => self.set_link(a, b, *weight).map(|_| ()),
            LinkChange::Remove { a, b } => self.remove_link(a, b).map(|_| ()),
        }
    }

    /// Apply all changes of the patch in order. If one change cannot be applied, the error is
    /// returned, and all changes before it remain applied.
    pub fn apply_patch(&mut self, patch: &TopologyPatch) -> Result<(), NetworkError> {
        for change in patch.iter() {
            self.apply_change(change)?;
        }
        Ok(())
    }

    /// Configure the network to give up after the given number of rounds in a single phase. If set
    /// to `None` (the default), the rounds continue until the network has converged.
    pub fn set_round_limit(&mut self, round_limit: Option<usize>) {
        self.round_limit = round_limit;
    }

    // ************************
    // * Protocol Execution *
    // ************************

    /// Reset the tables of every router, using only the links that currently exist.
    pub fn reset_tables(&mut self) {
        let names: Vec<String> = self.routers.keys().cloned().collect();
        for router in self.routers.values_mut() {
            router.init_tables(names.iter().map(String::as_str));
        }
    }

    /// Compute the poisoned vector of every router for each of its neighbors.
    pub fn exported_vectors(&self) -> Exports {
        self.routers
            .values()
            .map(|r| {
                let vectors =
                    r.neighbors.keys().map(|n| (n.clone(), r.poisoned_vector(Some(n)))).collect();
                (r.name().to_string(), vectors)
            })
            .collect()
    }

    /// Execute a single synchronous round. All vectors are exported before the first one is
    /// merged. Returns `Ok(true)` if any router has changed.
    pub fn run_round(&mut self) -> Result<bool, NetworkError> {
        let exports = self.exported_vectors();

        let mut updated = false;
        for router in self.routers.values_mut() {
            let neighbors: Vec<String> = router.neighbors.keys().cloned().collect();
            for neighbor in neighbors {
                let vector = exports
                    .get(&neighbor)
                    .and_then(|vectors| vectors.get(router.name()))
                    .ok_or_else(|| {
                        NetworkError::MissingExport(neighbor.clone(), router.name().to_string())
                    })?;
                if router.merge_vector(&neighbor, vector)? {
                    updated = true;
                }
            }
        }
        Ok(updated)
    }

    /// Execute rounds until a round does not change anything. The observer is notified at the
    /// start of every round and once the network has converged. Returns the number of rounds
    /// executed, including the last one which did not change anything.
    pub fn converge<O>(&mut self, observer: &mut O) -> Result<usize, Error>
    where
        O: ConvergenceObserver + ?Sized,
    {
        let mut round: usize = 0;
        loop {
            if let Some(limit) = self.round_limit {
                if round >= limit {
                    warn!("Network did not converge within {} rounds", limit);
                    return Err(NetworkError::NoConvergence(limit).into());
                }
            }
            observer.round_started(self, round)?;
            if !self.run_round()? {
                break;
            }
            debug!("Round {} changed the routing state", round);
            round += 1;
        }
        let rounds = round + 1;
        debug!("Network converged after {} rounds", rounds);
        observer.converged(self, rounds)?;
        Ok(rounds)
    }

    /// Run a complete phase: reset all tables from the current links and converge. Returns the
    /// number of rounds executed.
    pub fn run_phase<O>(&mut self, phase: Phase, observer: &mut O) -> Result<usize, Error>
    where
        O: ConvergenceObserver + ?Sized,
    {
        info!("{} phase: {}", phase, phase.label());
        self.reset_tables();
        observer.phase_started(self, phase)?;
        let rounds = self.converge(observer)?;
        info!("{} phase converged after {} rounds", phase, rounds);
        Ok(rounds)
    }

    // ********************
    // * Helper Functions *
    // ********************

    /// Returns a reference to the link graph (PetGraph struct)
    pub fn get_topology(&self) -> &LinkGraph {
        &self.net
    }

    /// Returns the number of routers in the network
    pub fn num_routers(&self) -> usize {
        self.routers.len()
    }

    /// Returns the names of all routers, in alphabetical order
    pub fn get_router_names(&self) -> Vec<&str> {
        self.routers.keys().map(String::as_str).collect()
    }

    /// Returns an iterator over all routers, in alphabetical order
    pub fn routers(&self) -> impl Iterator<Item = &Router> {
        self.routers.values()
    }

    /// Returns a reference to the router with the given name.
    pub fn get_router(&self, name: impl AsRef<str>) -> Result<&Router, NetworkError> {
        self.routers
            .get(name.as_ref())
            .ok_or_else(|| NetworkError::RouterNameNotFound(name.as_ref().to_string()))
    }

    /// Returns the cost of the link `a -- b`, or `None` if there is no such link.
    pub fn get_link_weight(&self, a: impl AsRef<str>, b: impl AsRef<str>) -> Option<LinkWeight> {
        let node_a = self.nodes.get(a.as_ref())?;
        let node_b = self.nodes.get(b.as_ref())?;
        self.net.find_edge(*node_a, *node_b).and_then(|e| self.net.edge_weight(e)).copied()
    }

    /// Returns all links as `(a, b, cost)`, with `a < b`, sorted by the names of the endpoints.
    pub fn links(&self) -> Vec<(&str, &str, LinkWeight)> {
        let mut links: Vec<(&str, &str, LinkWeight)> = self
            .net
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.net.edge_endpoints(e)?;
                let (a, b) = (self.net[a].as_str(), self.net[b].as_str());
                Some(if a < b { (a, b, self.net[e]) } else { (b, a, self.net[e]) })
            })
            .collect();
        links.sort_unstable();
        links
    }

    /// Compute the cost of the shortest path from `source` to every router, independent of the
    /// distance-vector protocol. Unreachable routers have cost `Infinite`.
    pub fn shortest_path_costs(
        &self,
        source: impl AsRef<str>,
    ) -> Result<BTreeMap<String, Cost>, NetworkError> {
        let start = self.get_node_id(source.as_ref())?;
        let distances = dijkstra(&self.net, start, None, |e| *e.weight());
        Ok(self
            .routers
            .keys()
            .map(|name| {
                let cost = self
                    .nodes
                    .get(name)
                    .and_then(|node| distances.get(node))
                    .map_or(Cost::Infinite, |c| Cost::Finite(*c));
                (name.clone(), cost)
            })
            .collect())
    }

    /// Return the path from `source` to `destination`, following the next hops chosen by the
    /// routers, as a list of router names, starting at the source and ending at the destination.
    pub fn get_route(
        &self,
        source: impl AsRef<str>,
        destination: impl AsRef<str>,
    ) -> Result<Vec<String>, NetworkError> {
        let destination = destination.as_ref();
        self.get_router(destination)?;
        let mut visited: HashSet<String> = HashSet::new();
        let mut path: Vec<String> = Vec::new();
        let mut current = source.as_ref().to_string();
        loop {
            let router = self.get_router(&current)?;
            path.push(current.clone());
            if current == destination {
                return Ok(path);
            }
            if !visited.insert(current.clone()) {
                debug!("Forwarding Loop detected: {:?}", path);
                return Err(NetworkError::ForwardingLoop(path));
            }
            current = match router.next_hop(destination) {
                // a direct neighbor that was not yet confirmed by any advertisement
                Some(hop) if hop == router.name() => destination.to_string(),
                Some(hop) => hop.to_string(),
                None => {
                    debug!("Black hole detected: {:?}", path);
                    return Err(NetworkError::ForwardingBlackHole(path));
                }
            };
        }
    }

    fn get_node_id(&self, name: &str) -> Result<NodeId, NetworkError> {
        self.nodes
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::RouterNameNotFound(name.to_string()))
    }

    fn get_link_nodes(&self, a: &str, b: &str) -> Result<(NodeId, NodeId), NetworkError> {
        if a == b {
            return Err(NetworkError::SelfLink(a.to_string()));
        }
        Ok((self.get_node_id(a)?, self.get_node_id(b)?))
    }

    fn get_router_mut(&mut self, name: &str) -> Result<&mut Router, NetworkError> {
        self.routers
            .get_mut(name)
            .ok_or_else(|| NetworkError::RouterNameNotFound(name.to_string()))
    }
}
