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

//! Two-phase simulation of a scenario.

use crate::netsim::{ConvergenceObserver, Network, Phase};
use crate::topology::Scenario;
use crate::Error;

use log::*;

/// Number of rounds needed by each phase of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Rounds until the initial topology has converged
    pub start_rounds: usize,
    /// Rounds until the updated topology has converged
    pub update_rounds: usize,
}

/// # Simulate a scenario
/// Build the network, let it converge on the initial topology, apply all link changes, and let it
/// converge again. Both phases start from freshly reset tables. Returns the network in its final
/// state together with the number of rounds of each phase.
///
/// ```
/// use dvsim::simulate;
/// use dvsim::netsim::{Cost, NoopObserver};
/// use dvsim::topology::Scenario;
///
/// fn main() -> Result<(), dvsim::Error> {
///     let scenario: Scenario = "A\nB\nC\nSTART\nA B 1\nB C 1\nUPDATE\nB C 60\nEND".parse()?;
///     let (net, report) = simulate(&scenario, &mut NoopObserver)?;
///     assert_eq!(net.get_router("A")?.cost("C"), Cost::Finite(61));
///     assert_eq!(report.start_rounds, 2);
///     Ok(())
/// }
/// ```
pub fn simulate<O>(
    scenario: &Scenario,
    observer: &mut O,
) -> Result<(Network, SimulationReport), Error>
where
    O: ConvergenceObserver + ?Sized,
{
    let mut net = scenario.build_network()?;
    simulate_on(&mut net, scenario, observer).map(|report| (net, report))
}

/// Same as [`simulate`], but uses the prepared network (for instance with a round limit). The
/// network must contain all routers and the initial links of the scenario.
pub fn simulate_on<O>(
    net: &mut Network,
    scenario: &Scenario,
    observer: &mut O,
) -> Result<SimulationReport, Error>
where
    O: ConvergenceObserver + ?Sized,
{
    let start_rounds = net.run_phase(Phase::Start, observer)?;

    debug!("Applying {} link changes", scenario.updates.len());
    net.apply_patch(&scenario.updates)?;

    let update_rounds = net.run_phase(Phase::Update, observer)?;
    Ok(SimulationReport { start_rounds, update_rounds })
}
