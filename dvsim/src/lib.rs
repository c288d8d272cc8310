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

#![deny(missing_docs)]

//! # DvSim: Distance-Vector Routing Simulation with Poisoned Reverse
//! This is a library for simulating how a network of routers running a distance-vector routing
//! protocol with poisoned reverse converges, first on an initial topology, and again after a batch
//! of link changes.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`NetSim`](netsim)**: Network simulator, running the protocol in synchronous rounds. See the
//!   main structure [`Network`](netsim::Network), and the [`Router`](netsim::Router).
//!
//! - **[`Topology`](topology)**: Reads the textual description of a network (routers, initial
//!   links and link changes) into a [`Scenario`](topology::Scenario).
//!
//! - **[`Printer`](netsim::printer)**: Formats the distance tables and routing tables of the
//!   routers. The [`TablePrinter`](netsim::printer::TablePrinter) prints them while the network
//!   converges.
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared scenarios, and a generator
//!   for random connected networks.
//!
//! ## Usage
//!
//! ```
//! use dvsim::simulate;
//! use dvsim::netsim::printer::TablePrinter;
//! use dvsim::topology::Scenario;
//!
//! fn main() -> Result<(), dvsim::Error> {
//!     let input = "X\nY\nZ\nSTART\nX Y 2\nY Z 3\nX Z 7\nUPDATE\nX Y -1\nEND";
//!     let scenario: Scenario = input.parse()?;
//!
//!     let mut printer = TablePrinter::new(Vec::new()).routing_only(true);
//!     let (net, report) = simulate(&scenario, &mut printer)?;
//!
//!     assert_eq!(net.get_route("X", "Z")?, vec!["X", "Z"]);
//!     assert_eq!(net.get_route("X", "Y")?, vec!["X", "Z", "Y"]);
//!     assert!(report.update_rounds >= 1);
//!
//!     let output = String::from_utf8(printer.into_inner()).unwrap();
//!     assert!(output.contains("Routing Table of router X:"));
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_networks;
mod test;

mod error;
pub mod netsim;
pub mod topology;

mod simulate;
pub use simulate::{simulate, simulate_on, SimulationReport};

pub use error::Error;
