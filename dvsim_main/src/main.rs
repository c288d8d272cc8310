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

use dvsim::example_networks::RandomNet;
use dvsim::netsim::printer::TablePrinter;
use dvsim::topology::Scenario;
use dvsim::simulate_on;

use clap::{Parser, Subcommand};
use log::*;
use rand::prelude::*;
use std::error::Error;
use std::io::{self, Write};

mod example_scenarios;
use example_scenarios::*;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    // get the scenario
    let scenario = match args.cmd {
        MainCommand::Run { input: Some(filename) } => {
            info!("Reading the topology from {}", filename);
            Scenario::from_file(filename)?
        }
        MainCommand::Run { input: None } => {
            info!("Reading the topology from stdin");
            let stdin = io::stdin();
            Scenario::from_reader(stdin.lock())?
        }
        MainCommand::Example { topology } => {
            info!("Using the example topology {}", topology);
            topology.scenario()
        }
        MainCommand::Random { size, seed, max_cost } => {
            let seed = seed.unwrap_or_else(|| thread_rng().gen());
            info!("Generating a random network with {} routers (seed: {})", size, seed);
            RandomNet::new(size, max_cost).seeded(seed)
        }
    };

    info!(
        "Scenario has {} routers, {} links and {} link changes",
        scenario.routers.len(),
        scenario.initial_links.len(),
        scenario.updates.len()
    );

    let mut net = scenario.build_network()?;
    net.set_round_limit(args.max_rounds);

    // simulate and print the tables to stdout
    let stdout = io::stdout();
    let mut printer = TablePrinter::new(stdout.lock()).routing_only(args.routing_only);
    let report = simulate_on(&mut net, &scenario, &mut printer)?;
    printer.into_inner().flush()?;

    info!(
        "Converged after {} rounds (START) and {} rounds (UPDATE)",
        report.start_rounds, report.update_rounds
    );

    Ok(())
}

/// Simulate distance-vector routing with poisoned reverse. The distance tables of every round and
/// the routing tables after convergence are printed to stdout. Set `RUST_LOG` to control the log
/// output on stderr.
#[derive(Parser, Debug)]
#[clap(author, version)]
struct CommandLineArguments {
    /// Give up if a phase did not converge after this number of rounds
    #[clap(short = 'm', long)]
    max_rounds: Option<usize>,
    /// Only print the routing tables after convergence, not the distance tables of every round
    #[clap(short = 'r', long)]
    routing_only: bool,
    /// Source of the topology
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Read the topology description from a file or from stdin
    #[clap(name = "run")]
    Run {
        /// Topology file to read. If omitted, the topology is read from stdin.
        #[clap(short = 'i', long)]
        input: Option<String>,
    },
    /// Use an example scenario, provided by dvsim
    #[clap(name = "example")]
    Example {
        /// Scenario to use
        #[clap(value_enum)]
        topology: Topology,
    },
    /// Generate a random connected network
    #[clap(name = "random")]
    Random {
        /// Number of routers
        #[clap(short = 'n', long, default_value = "8")]
        size: usize,
        /// Random seed, to get reproducable networks
        #[clap(short = 's', long)]
        seed: Option<u64>,
        /// Largest cost of a link
        #[clap(short = 'c', long, default_value = "10")]
        max_cost: u32,
    },
}
