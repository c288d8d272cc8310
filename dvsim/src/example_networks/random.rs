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

//! # Random Networks

use super::ExampleNetwork;
use crate::netsim::config::LinkChange;
use crate::netsim::LinkWeight;
use crate::topology::Scenario;

use rand::distributions::Uniform;
use rand::prelude::*;
use std::collections::BTreeSet;

/// # Random connected network
///
/// Generates a random, connected topology. First, a random spanning tree connects all routers,
/// then every other pair of routers is connected with probability `link_prob`. Each link has a cost
/// drawn uniformly from `1..=max_cost`.
///
/// The update phase changes the cost of one random link, and removes one of the links which are
/// not part of the spanning tree (if any), such that the network stays connected.
///
/// Router names are zero-padded (`R00`, `R01`, ...), such that the alphabetical order is the same
/// as the numerical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomNet {
    /// Number of routers
    pub size: usize,
    /// Largest cost of a link
    pub max_cost: LinkWeight,
    /// Probability that two routers are connected by a link outside of the spanning tree
    pub link_prob: f64,
}

impl Default for RandomNet {
    fn default() -> Self {
        Self { size: 8, max_cost: 10, link_prob: 0.3 }
    }
}

impl RandomNet {
    /// Create a new generator for networks of the given size
    pub fn new(size: usize, max_cost: LinkWeight) -> Self {
        Self { size, max_cost: max_cost.max(1), ..Self::default() }
    }

    /// Set the probability for additional links
    pub fn link_prob(mut self, link_prob: f64) -> Self {
        self.link_prob = link_prob.max(0.0).min(1.0);
        self
    }

    /// Returns the name of the router with the given index
    pub fn router_name(&self, idx: usize) -> String {
        let width = self.size.saturating_sub(1).to_string().len().max(2);
        format!("R{:0width$}", idx, width = width)
    }

    /// Generate a scenario using a generator seeded with `seed`.
    pub fn seeded(&self, seed: u64) -> Scenario {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate a scenario using the given random number generator.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Scenario {
        let mut s = Scenario::new();
        let names: Vec<String> = (0..self.size).map(|i| self.router_name(i)).collect();
        names.iter().for_each(|n| s.add_router(n.as_str()));

        let weights = Uniform::new_inclusive(1, self.max_cost.max(1));
        let mut links: BTreeSet<(usize, usize)> = BTreeSet::new();
        let mut extra: Vec<(usize, usize)> = Vec::new();
        for i in 1..self.size {
            links.insert((rng.gen_range(0, i), i));
        }
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if !links.contains(&(i, j)) && rng.gen_bool(self.link_prob) {
                    extra.push((i, j));
                }
            }
        }
        links.extend(extra.iter().copied());

        for (i, j) in links.iter() {
            let weight = weights.sample(rng);
            s.add_link(names[*i].as_str(), names[*j].as_str(), weight);
        }

        let all_links: Vec<&(usize, usize)> = links.iter().collect();
        if let Some((i, j)) = all_links.choose(rng) {
            let weight = weights.sample(rng);
            s.add_update(LinkChange::Set { a: names[*i].clone(), b: names[*j].clone(), weight });
        }
        if let Some((i, j)) = extra.choose(rng) {
            s.add_update(LinkChange::Remove { a: names[*i].clone(), b: names[*j].clone() });
        }

        s
    }
}

impl ExampleNetwork for RandomNet {
    fn scenario() -> Scenario {
        Self::default().seeded(42)
    }
}
