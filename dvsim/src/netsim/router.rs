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

//! Module defining a router running distance-vector routing with poisoned reverse.

use crate::netsim::{Cost, DeviceError, DistanceVector, LinkWeight};
use log::*;
use std::collections::BTreeMap;

/// # Distance-Vector Router
///
/// The router keeps its local view of the network. All maps are ordered by router name, which makes
/// every iteration (and thereby the tie-break between equally good neighbors) deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    /// Name of the router
    name: String,
    /// Cost of the direct link to every neighbor
    pub(crate) neighbors: BTreeMap<String, LinkWeight>,
    /// Current best cost to every destination in the network
    pub(crate) distance_vector: DistanceVector,
    /// Chosen next hop for every destination, or `None` if the destination is unreachable
    pub(crate) next_hop: BTreeMap<String, Option<String>>,
    /// Table containing all known routes. It maps each destination to another map, which maps the
    /// neighbor to the cost of reaching the destination via this neighbor.
    pub(crate) route_table: BTreeMap<String, BTreeMap<String, Cost>>,
}

impl Router {
    pub(crate) fn new(name: String) -> Router {
        Router {
            name,
            neighbors: BTreeMap::new(),
            distance_vector: BTreeMap::new(),
            next_hop: BTreeMap::new(),
            route_table: BTreeMap::new(),
        }
    }

    /// Return the name of the Router
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Returns the direct neighbors together with the link cost.
    pub fn neighbors(&self) -> &BTreeMap<String, LinkWeight> {
        &self.neighbors
    }

    /// Returns the cost of the direct link to `neighbor`, if it exists.
    pub fn link_weight(&self, neighbor: impl AsRef<str>) -> Option<LinkWeight> {
        self.neighbors.get(neighbor.as_ref()).copied()
    }

    /// Returns the current distance vector.
    pub fn distance_vector(&self) -> &DistanceVector {
        &self.distance_vector
    }

    /// Returns the best known cost to reach `destination`. Unknown destinations are unreachable.
    pub fn cost(&self, destination: impl AsRef<str>) -> Cost {
        self.distance_vector.get(destination.as_ref()).copied().unwrap_or(Cost::Infinite)
    }

    /// Returns the chosen next hop towards `destination`.
    pub fn next_hop(&self, destination: impl AsRef<str>) -> Option<&str> {
        self.next_hop.get(destination.as_ref()).and_then(|hop| hop.as_deref())
    }

    /// Returns the route to `destination` as a tuple `(next_hop, cost)`, or `None` if it is not
    /// reachable.
    pub fn route(&self, destination: impl AsRef<str>) -> Option<(&str, LinkWeight)> {
        let cost = self.cost(destination.as_ref()).finite()?;
        self.next_hop(destination).map(|hop| (hop, cost))
    }

    /// Returns the full table, mapping each destination to the cost via every neighbor.
    pub fn route_table(&self) -> &BTreeMap<String, BTreeMap<String, Cost>> {
        &self.route_table
    }

    /// Returns the learned cost of reaching `destination` via `neighbor`.
    pub fn cost_via(&self, destination: impl AsRef<str>, neighbor: impl AsRef<str>) -> Cost {
        self.route_table
            .get(destination.as_ref())
            .and_then(|via| via.get(neighbor.as_ref()))
            .copied()
            .unwrap_or(Cost::Infinite)
    }

    /// Reset the distance vector, the next hops and the route table, and rebuild them using only
    /// the direct links. `routers` must contain the names of all routers in the network.
    ///
    /// Direct neighbors start with the router itself as next hop. This placeholder is resolved in
    /// the first call to [`Router::merge_vector`].
    pub(crate) fn init_tables<'a, I>(&mut self, routers: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.distance_vector.clear();
        self.next_hop.clear();
        self.route_table.clear();

        for dest in routers {
            let (cost, hop) = if dest == self.name {
                (Cost::Finite(0), Some(self.name.clone()))
            } else if let Some(weight) = self.neighbors.get(dest) {
                (Cost::Finite(*weight), Some(self.name.clone()))
            } else {
                (Cost::Infinite, None)
            };
            self.distance_vector.insert(dest.to_string(), cost);
            self.next_hop.insert(dest.to_string(), hop);

            let via = self
                .neighbors
                .iter()
                .map(|(n, w)| {
                    (n.clone(), if n == dest { Cost::Finite(*w) } else { Cost::Infinite })
                })
                .collect();
            self.route_table.insert(dest.to_string(), via);
        }
    }

    /// Generate the distance vector advertised to `target`. Every destination which is reached via
    /// `target` (except `target` itself) is advertised with infinite cost. If `target` is `None`,
    /// the distance vector is returned unchanged.
    pub fn poisoned_vector(&self, target: Option<&str>) -> DistanceVector {
        self.distance_vector
            .iter()
            .map(|(dest, cost)| {
                let poisoned = match target {
                    Some(t) => dest != t && self.next_hop(dest) == Some(t),
                    None => false,
                };
                (dest.clone(), if poisoned { Cost::Infinite } else { *cost })
            })
            .collect()
    }

    /// Merge the distance vector advertised by `neighbor` into the route table, and update the
    /// distance vector and the next hops. Returns `Ok(true)` if any cost has decreased.
    ///
    /// If multiple neighbors reach a destination with the same minimal cost, the neighbor with the
    /// alphabetically smallest name is chosen.
    pub(crate) fn merge_vector(
        &mut self,
        neighbor: &str,
        vector: &DistanceVector,
    ) -> Result<bool, DeviceError> {
        let link_cost = match self.neighbors.get(neighbor) {
            Some(w) => Cost::Finite(*w),
            None => return Err(DeviceError::NotANeighbor(neighbor.to_string())),
        };

        let mut updated = false;
        for (dest, via) in self.route_table.iter_mut() {
            if *dest == self.name {
                continue;
            }

            let candidate = link_cost + vector.get(dest).copied().unwrap_or(Cost::Infinite);
            let entry = via.entry(neighbor.to_string()).or_insert(Cost::Infinite);
            if candidate < *entry {
                trace!("{}: {} via {} now costs {}", self.name, dest, neighbor, candidate);
                *entry = candidate;
                updated = true;
            }

            let min_cost = via.values().min().copied().unwrap_or(Cost::Infinite);
            let current = self.distance_vector.get(dest).copied().unwrap_or(Cost::Infinite);
            let placeholder =
                matches!(self.next_hop.get(dest), Some(Some(hop)) if *hop == self.name);
            let improved = min_cost < current;
            if improved || (placeholder && min_cost.is_finite() && min_cost == current) {
                // the table is ordered by name, so the first match is the alphabetically smallest
                let hop = via.iter().find(|(_, c)| **c == min_cost).map(|(n, _)| n.clone());
                self.distance_vector.insert(dest.clone(), min_cost);
                self.next_hop.insert(dest.clone(), hop);
                updated |= improved;
            }
        }
        Ok(updated)
    }
}
