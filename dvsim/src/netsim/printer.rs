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

//! # Helper (printer) functions for the Network
//! Module containing helper functions to get formatted strings and print information about the
//! network.

use crate::netsim::network::Network;
use crate::netsim::observer::ConvergenceObserver;
use crate::netsim::router::Router;
use crate::netsim::{NetworkError, Phase};
use itertools::Itertools;
use std::io::{self, Write};

/// Get a vector of strings, which represent the distance table of the router. The first line is
/// the header with the name of every other router. Each following line represents one destination
/// (except the router itself), listing the learned cost via every other router. Routers which are
/// not neighbors are listed with `INF`.
///
/// ```text
///   Y  Z
/// Y 3 INF
/// Z INF 9
/// ```
pub fn distance_table(net: &Network, router: &Router) -> Vec<String> {
    let others: Vec<&str> =
        net.get_router_names().into_iter().filter(|name| *name != router.name()).collect();

    let mut result: Vec<String> = Vec::with_capacity(others.len() + 1);
    result.push(others.iter().map(|via| format!("  {}", via)).join(""));
    for dest in others.iter() {
        let row = std::iter::once(dest.to_string())
            .chain(others.iter().map(|via| router.cost_via(dest, via).to_string()))
            .join(" ");
        result.push(row);
    }
    result
}

/// Get a vector of strings, which represent the routing table of the router. Each line contains
/// the destination, the next hop and the cost, or `INF, INF` if the destination is unreachable.
///
/// ```text
/// X, X, 0
/// Y, Y, 3
/// Z, Y, 7
/// ```
pub fn routing_table(router: &Router) -> Vec<String> {
    router
        .distance_vector()
        .keys()
        .map(|dest| match router.route(dest) {
            Some((next_hop, cost)) => format!("{}, {}, {}", dest, next_hop, cost),
            None => format!("{}, INF, INF", dest),
        })
        .collect()
}

/// Returns the banner introducing a phase.
pub fn phase_banner(phase: Phase) -> String {
    format!("----- {} Phase ({}) -----", phase, phase.label())
}

/// Returns the route as a formatted string, or the reason why there is no route.
pub fn route(net: &Network, source: &str, destination: &str) -> Result<String, NetworkError> {
    Ok(match net.get_route(source, destination) {
        Ok(path) => path.join(" => "),
        Err(NetworkError::ForwardingLoop(path)) => {
            format!("{} FORWARDING LOOP!", path.join(" => "))
        }
        Err(NetworkError::ForwardingBlackHole(path)) => {
            format!("{} BLACK HOLE!", path.join(" => "))
        }
        Err(e) => return Err(e),
    })
}

/// Print the distance tables of all routers at the given round.
pub fn print_distance_tables(net: &Network, round: usize) -> io::Result<()> {
    TablePrinter::new(io::stdout()).write_distance_tables(net, round)
}

/// Print the routing tables of all routers.
pub fn print_routing_tables(net: &Network) -> io::Result<()> {
    TablePrinter::new(io::stdout()).write_routing_tables(net)
}

/// # Table Printer
/// Observer writing the distance tables of every round and the final routing tables to the given
/// writer.
#[derive(Debug)]
pub struct TablePrinter<W: Write> {
    out: W,
    routing_only: bool,
}

impl<W: Write> TablePrinter<W> {
    /// Create a new printer writing into `out`.
    pub fn new(out: W) -> Self {
        Self { out, routing_only: false }
    }

    /// If set, the distance tables of the individual rounds are skipped.
    pub fn routing_only(mut self, routing_only: bool) -> Self {
        self.routing_only = routing_only;
        self
    }

    /// Consume the printer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the distance tables of all routers at the given round.
    pub fn write_distance_tables(&mut self, net: &Network, round: usize) -> io::Result<()> {
        for router in net.routers() {
            writeln!(self.out, "Distance Table of router {} at t={}:", router.name(), round)?;
            for line in distance_table(net, router) {
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write the routing tables of all routers.
    pub fn write_routing_tables(&mut self, net: &Network) -> io::Result<()> {
        for router in net.routers() {
            writeln!(self.out, "Routing Table of router {}:", router.name())?;
            for line in routing_table(router) {
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> ConvergenceObserver for TablePrinter<W> {
    fn phase_started(&mut self, _net: &Network, phase: Phase) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", phase_banner(phase))?;
        writeln!(self.out)
    }

    fn round_started(&mut self, net: &Network, round: usize) -> io::Result<()> {
        if self.routing_only {
            return Ok(());
        }
        self.write_distance_tables(net, round)
    }

    fn converged(&mut self, net: &Network, _rounds: usize) -> io::Result<()> {
        self.write_routing_tables(net)
    }
}
