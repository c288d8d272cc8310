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

//! Test complete simulations of the example scenarios.

use crate::example_networks::*;
use crate::netsim::{Cost, Network, NoopObserver};
use crate::topology::Scenario;
use crate::{simulate, simulate_on, Error, SimulationReport};
use maplit::btreemap;

fn run<T: ExampleNetwork>() -> (Network, Network, SimulationReport) {
    let scenario = T::scenario();
    let mut net = scenario.build_network().unwrap();
    let start_rounds = net.run_phase(crate::netsim::Phase::Start, &mut NoopObserver).unwrap();
    let start = net.clone();
    net.apply_patch(&scenario.updates).unwrap();
    let update_rounds = net.run_phase(crate::netsim::Phase::Update, &mut NoopObserver).unwrap();
    (start, net, SimulationReport { start_rounds, update_rounds })
}

#[test]
fn test_triangle() {
    let (start, end, _) = run::<TriangleNet>();
    assert_eq!(start.get_router("A").unwrap().route("C"), Some(("B", 2)));
    assert_eq!(start.get_router("C").unwrap().route("A"), Some(("B", 2)));
    assert_eq!(start.get_route("A", "C").unwrap(), vec!["A", "B", "C"]);

    assert_eq!(end.get_router("A").unwrap().route("C"), Some(("C", 1)));
    assert_eq!(end.get_router("C").unwrap().route("A"), Some(("A", 1)));
    assert_eq!(end.get_route("A", "C").unwrap(), vec!["A", "C"]);
}

#[test]
fn test_count_to_infinity() {
    let (start, end, report) = run::<CountToInfinityNet>();
    assert_eq!(start.get_router("A").unwrap().route("C"), Some(("B", 2)));

    assert_eq!(end.get_router("A").unwrap().route("C"), Some(("B", 61)));
    assert_eq!(end.get_router("B").unwrap().route("C"), Some(("C", 60)));
    assert_eq!(end.get_router("C").unwrap().route("A"), Some(("B", 61)));
    // the routers do not count up slowly
    assert!(report.update_rounds <= 3);
}

#[test]
fn test_count_to_infinity_within_phase() {
    // A reaches C via B, so B never learns any route to C via A.
    let mut net = CountToInfinityNet::net().unwrap();
    let scenario = CountToInfinityNet::scenario();
    net.run_phase(crate::netsim::Phase::Start, &mut NoopObserver).unwrap();
    assert_eq!(net.get_router("B").unwrap().cost_via("C", "A"), Cost::Infinite);
    net.apply_patch(&scenario.updates).unwrap();
    net.run_phase(crate::netsim::Phase::Update, &mut NoopObserver).unwrap();
    assert_eq!(net.get_router("B").unwrap().cost_via("C", "A"), Cost::Infinite);
    assert_eq!(net.get_router("B").unwrap().cost("C"), Cost::Finite(60));
}

#[test]
fn test_link_removal() {
    let (start, end, _) = run::<LinkRemovalNet>();
    assert_eq!(start.get_router("A").unwrap().route("C"), Some(("C", 1)));

    let a = end.get_router("A").unwrap();
    assert_eq!(a.route("C"), Some(("B", 2)));
    assert_eq!(a.link_weight("C"), None);
    // there is no entry via the removed neighbor anymore
    assert!(a.route_table().values().all(|via| !via.contains_key("C")));
    assert_eq!(a.cost_via("C", "C"), Cost::Infinite);
    assert_eq!(end.get_route("C", "A").unwrap(), vec!["C", "B", "A"]);

    let c = end.get_router("C").unwrap();
    assert_eq!(c.route("A"), Some(("B", 2)));
    assert_eq!(c.link_weight("A"), None);
    assert!(c.route_table().values().all(|via| !via.contains_key("A")));

    // B keeps both of its links
    let b = end.get_router("B").unwrap();
    assert_eq!(b.neighbors(), start.get_router("B").unwrap().neighbors());
    assert_eq!(b.neighbors(), &btreemap! {"A".to_string() => 1, "C".to_string() => 1});
    assert_eq!(b.route("A"), Some(("A", 1)));
    assert_eq!(b.route("C"), Some(("C", 1)));
}

#[test]
fn test_tie_break() {
    let (start, end, _) = run::<TieBreakNet>();
    assert_eq!(start.get_router("A").unwrap().route("D"), Some(("B", 2)));
    assert_eq!(start.get_router("D").unwrap().route("A"), Some(("B", 2)));
    assert_eq!(start.get_router("B").unwrap().route("C"), Some(("A", 2)));
    assert_eq!(start.get_router("C").unwrap().route("B"), Some(("A", 2)));

    assert_eq!(end.get_router("A").unwrap().route("D"), Some(("C", 2)));
    assert_eq!(end.get_router("D").unwrap().route("A"), Some(("C", 2)));
    // both A and D reach each other with cost 3
    assert_eq!(end.get_router("B").unwrap().route("A"), Some(("A", 3)));
    assert_eq!(end.get_router("B").unwrap().route("C"), Some(("D", 2)));
}

#[test]
fn test_simulate_matches_manual_run() {
    let scenario = TieBreakNet::scenario();
    let (net, report) = simulate(&scenario, &mut NoopObserver).unwrap();
    let (_, expected, expected_report) = run::<TieBreakNet>();
    assert_eq!(report, expected_report);
    assert_eq!(net.routers().collect::<Vec<_>>(), expected.routers().collect::<Vec<_>>());
}

#[test]
fn test_simulate_from_text() {
    let scenario: Scenario = "X\nY\nZ\nSTART\nX Y 3\nX Z 9\nY Z 2\nUPDATE\nY Z 10\nX Z -1\nEND\n"
        .parse()
        .unwrap();
    let (net, _) = simulate(&scenario, &mut NoopObserver).unwrap();
    assert_eq!(net.get_router("X").unwrap().route("Z"), Some(("Y", 13)));
    assert_eq!(net.get_router("Z").unwrap().route("X"), Some(("Y", 13)));
    assert_eq!(net.get_link_weight("X", "Z"), None);
}

#[test]
fn test_simulate_isolated_router() {
    let scenario: Scenario = "A\nB\nC\nSTART\nA B 1\nEND".parse().unwrap();
    let (net, report) = simulate(&scenario, &mut NoopObserver).unwrap();
    assert_eq!(report, SimulationReport { start_rounds: 1, update_rounds: 1 });
    assert_eq!(net.get_router("C").unwrap().route("A"), None);
    assert_eq!(net.get_router("C").unwrap().route("C"), Some(("C", 0)));
    assert_eq!(net.get_router("A").unwrap().cost("C"), Cost::Infinite);
    assert_eq!(net.get_router("A").unwrap().route("B"), Some(("B", 1)));
}

#[test]
fn test_invalid_update() {
    let scenario: Scenario = "A\nB\nC\nSTART\nA B 1\nUPDATE\nA C -1\nEND".parse().unwrap();
    assert!(matches!(
        simulate(&scenario, &mut NoopObserver),
        Err(Error::NetworkError(crate::netsim::NetworkError::LinkNotFound(_, _)))
    ));

    // a prepared network must contain all routers of the scenario
    let mut net = Network::new();
    assert!(simulate_on(&mut net, &scenario, &mut NoopObserver).is_err());
}
