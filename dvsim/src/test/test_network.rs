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

//! Test the simple functionality of the network, without checking the converged state in detail.

use crate::netsim::config::{LinkChange, TopologyPatch};
use crate::netsim::{Cost::*, Network, NetworkError, NoopObserver, Phase};
use crate::topology::Scenario;
use lazy_static::lazy_static;
use maplit::btreemap;

lazy_static! {
    /// # Test network
    ///
    /// ```text
    /// E1 ---- R1 ---- R2
    ///         |    .-'|
    ///         | .-'   |
    ///         R3 ---- R4 ---- E4
    /// ```
    ///
    /// All links have cost 1, except the one between R1 and R2, which has cost 5.
    static ref TEST_SCENARIO: Scenario = "E1\nR1\nR2\nR3\nR4\nE4\nSTART\n\
                                          E1 R1 1\nR1 R2 5\nR1 R3 1\nR2 R3 1\n\
                                          R2 R4 1\nR3 R4 1\nR4 E4 1\nEND\n"
        .parse()
        .unwrap();
}

fn get_test_net() -> Network {
    TEST_SCENARIO.build_network().unwrap()
}

fn get_converged_test_net() -> Network {
    let mut net = get_test_net();
    net.run_phase(Phase::Start, &mut NoopObserver).unwrap();
    net
}

#[test]
fn test_build_network() {
    let net = get_test_net();
    assert_eq!(net.num_routers(), 6);
    assert_eq!(net.get_router_names(), vec!["E1", "E4", "R1", "R2", "R3", "R4"]);
    assert_eq!(net.get_topology().node_count(), 6);
    assert_eq!(net.get_topology().edge_count(), 7);
    assert_eq!(
        net.links(),
        vec![
            ("E1", "R1", 1),
            ("E4", "R4", 1),
            ("R1", "R2", 5),
            ("R1", "R3", 1),
            ("R2", "R3", 1),
            ("R2", "R4", 1),
            ("R3", "R4", 1),
        ]
    );
    assert_eq!(
        net.get_router("R1").unwrap().neighbors(),
        &btreemap! {"E1".to_string() => 1, "R2".to_string() => 5, "R3".to_string() => 1}
    );
}

#[test]
fn test_add_router() {
    let mut net = get_test_net();
    assert_eq!(net.add_router("R1"), Err(NetworkError::RouterAlreadyExists("R1".to_string())));
    assert_eq!(net.add_router("X"), Ok(()));
    assert_eq!(net.num_routers(), 7);
    assert!(net.get_router("X").unwrap().neighbors().is_empty());
    assert_eq!(
        net.get_router("Y").map(|r| r.name().to_string()),
        Err(NetworkError::RouterNameNotFound("Y".to_string()))
    );
}

#[test]
fn test_set_link() {
    let mut net = get_test_net();

    // change the cost of an existing link
    assert_eq!(net.set_link("R2", "R1", 2), Ok(Some(5)));
    assert_eq!(net.get_link_weight("R1", "R2"), Some(2));
    assert_eq!(net.get_link_weight("R2", "R1"), Some(2));
    assert_eq!(net.get_router("R1").unwrap().link_weight("R2"), Some(2));
    assert_eq!(net.get_router("R2").unwrap().link_weight("R1"), Some(2));
    assert_eq!(net.get_topology().edge_count(), 7);

    // add a new link
    assert_eq!(net.set_link("E1", "E4", 10), Ok(None));
    assert_eq!(net.get_link_weight("E4", "E1"), Some(10));
    assert_eq!(net.get_router("E4").unwrap().link_weight("E1"), Some(10));
    assert_eq!(net.get_topology().edge_count(), 8);

    // invalid links
    assert_eq!(net.set_link("E1", "E1", 1), Err(NetworkError::SelfLink("E1".to_string())));
    assert_eq!(net.set_link("E1", "X", 1), Err(NetworkError::RouterNameNotFound("X".to_string())));
    assert_eq!(net.get_link_weight("E1", "X"), None);
}

#[test]
fn test_remove_link() {
    let mut net = get_test_net();
    assert_eq!(net.remove_link("R3", "R1"), Ok(1));
    assert_eq!(net.get_link_weight("R1", "R3"), None);
    assert_eq!(net.get_router("R1").unwrap().link_weight("R3"), None);
    assert_eq!(net.get_router("R3").unwrap().link_weight("R1"), None);
    assert_eq!(net.get_topology().edge_count(), 6);

    assert_eq!(
        net.remove_link("R1", "R3"),
        Err(NetworkError::LinkNotFound("R1".to_string(), "R3".to_string()))
    );
    assert_eq!(
        net.remove_link("E1", "E4"),
        Err(NetworkError::LinkNotFound("E1".to_string(), "E4".to_string()))
    );
    assert_eq!(net.remove_link("R1", "R1"), Err(NetworkError::SelfLink("R1".to_string())));
}

#[test]
fn test_apply_patch() {
    let mut net = get_test_net();
    let patch = TopologyPatch::from(vec![
        LinkChange::Set { a: "R1".into(), b: "R2".into(), weight: 1 },
        LinkChange::Remove { a: "R3".into(), b: "R4".into() },
        LinkChange::Set { a: "E1".into(), b: "E4".into(), weight: 7 },
    ]);
    assert_eq!(net.apply_patch(&patch), Ok(()));
    assert_eq!(net.get_link_weight("R1", "R2"), Some(1));
    assert_eq!(net.get_link_weight("R3", "R4"), None);
    assert_eq!(net.get_link_weight("E1", "E4"), Some(7));
}

#[test]
fn test_apply_patch_stops_at_error() {
    let mut net = get_test_net();
    let patch = TopologyPatch::from(vec![
        LinkChange::Set { a: "R1".into(), b: "R2".into(), weight: 1 },
        LinkChange::Remove { a: "E1".into(), b: "E4".into() },
        LinkChange::Set { a: "E1".into(), b: "E4".into(), weight: 7 },
    ]);
    assert_eq!(
        net.apply_patch(&patch),
        Err(NetworkError::LinkNotFound("E1".to_string(), "E4".to_string()))
    );
    assert_eq!(net.get_link_weight("R1", "R2"), Some(1));
    assert_eq!(net.get_link_weight("E1", "E4"), None);
}

#[test]
fn test_shortest_path_costs() {
    let net = get_test_net();
    assert_eq!(
        net.shortest_path_costs("E1"),
        Ok(btreemap! {
            "E1".to_string() => Finite(0),
            "E4".to_string() => Finite(4),
            "R1".to_string() => Finite(1),
            "R2".to_string() => Finite(3),
            "R3".to_string() => Finite(2),
            "R4".to_string() => Finite(3),
        })
    );
    assert_eq!(
        net.shortest_path_costs("X"),
        Err(NetworkError::RouterNameNotFound("X".to_string()))
    );
}

#[test]
fn test_shortest_path_costs_unreachable() {
    let mut net = get_test_net();
    net.add_router("X").unwrap();
    let costs = net.shortest_path_costs("E1").unwrap();
    assert_eq!(costs.get("X"), Some(&Infinite));
    let costs = net.shortest_path_costs("X").unwrap();
    assert_eq!(costs.get("X"), Some(&Finite(0)));
    assert_eq!(costs.get("E1"), Some(&Infinite));
}

#[test]
fn test_route_before_convergence() {
    let net = get_test_net();
    assert_eq!(net.get_route("E1", "E1"), Ok(vec!["E1".to_string()]));
    assert_eq!(
        net.get_route("E1", "E4"),
        Err(NetworkError::ForwardingBlackHole(vec!["E1".to_string()]))
    );
    assert_eq!(
        net.get_route("E1", "X"),
        Err(NetworkError::RouterNameNotFound("X".to_string()))
    );
}

#[test]
fn test_route() {
    let net = get_converged_test_net();
    assert_eq!(net.get_route("E1", "E4").unwrap(), vec!["E1", "R1", "R3", "R4", "E4"]);
    assert_eq!(net.get_route("E4", "E1").unwrap(), vec!["E4", "R4", "R3", "R1", "E1"]);
    assert_eq!(net.get_route("R2", "E1").unwrap(), vec!["R2", "R3", "R1", "E1"]);
    assert_eq!(net.get_route("R1", "R2").unwrap(), vec!["R1", "R3", "R2"]);
    assert_eq!(net.get_route("R2", "R4").unwrap(), vec!["R2", "R4"]);
}

#[test]
fn test_route_to_isolated_router() {
    let mut net = get_test_net();
    net.add_router("X").unwrap();
    net.run_phase(Phase::Start, &mut NoopObserver).unwrap();
    assert_eq!(
        net.get_route("E1", "X"),
        Err(NetworkError::ForwardingBlackHole(vec!["E1".to_string()]))
    );
    assert_eq!(
        net.get_route("X", "E1"),
        Err(NetworkError::ForwardingBlackHole(vec!["X".to_string()]))
    );
    assert_eq!(net.get_router("E1").unwrap().cost("X"), Infinite);
    assert_eq!(net.get_router("X").unwrap().cost("X"), Finite(0));
}

#[test]
fn test_link_change_needs_new_phase() {
    let mut net = get_converged_test_net();
    assert_eq!(net.get_router("R1").unwrap().route("R2"), Some(("R3", 2)));
    net.set_link("R1", "R2", 1).unwrap();
    // the tables are only rebuilt at the start of a phase
    assert_eq!(net.get_router("R1").unwrap().route("R2"), Some(("R3", 2)));
    net.run_phase(Phase::Update, &mut NoopObserver).unwrap();
    assert_eq!(net.get_router("R1").unwrap().route("R2"), Some(("R2", 1)));
}

#[test]
fn test_exported_vectors() {
    let net = get_converged_test_net();
    let exports = net.exported_vectors();
    assert_eq!(exports.len(), 6);
    for router in net.routers() {
        let vectors = exports.get(router.name()).unwrap();
        assert_eq!(vectors.len(), router.neighbors().len());
        for neighbor in router.neighbors().keys() {
            let expected = router.poisoned_vector(Some(neighbor.as_str()));
            assert_eq!(vectors.get(neighbor), Some(&expected));
        }
    }
    // R3 reaches E1 via R1, so it hides E1 from R1
    assert_eq!(exports["R3"]["R1"]["E1"], Infinite);
    assert_eq!(exports["R3"]["R2"]["E1"], Finite(2));
}

#[test]
fn test_run_round_without_tables() {
    let mut net = get_test_net();
    // no phase was started, so the routers do not know any destination
    assert_eq!(net.run_round(), Ok(false));
    assert!(net.routers().all(|r| r.distance_vector().is_empty()));
}

#[test]
fn test_link_change_endpoints() {
    let set = LinkChange::Set { a: "R1".into(), b: "R2".into(), weight: 1 };
    let remove = LinkChange::Remove { a: "E4".into(), b: "R4".into() };
    assert_eq!(set.endpoints(), ("R1", "R2"));
    assert_eq!(remove.endpoints(), ("E4", "R4"));

    let mut net = get_test_net();
    net.apply_change(&remove).unwrap();
    let (a, b) = remove.endpoints();
    assert_eq!(net.get_link_weight(a, b), None);
    assert!(net.get_router("E4").unwrap().neighbors().is_empty());
    assert!(net.shortest_path_costs("E1").unwrap()["E4"].is_infinite());
}
