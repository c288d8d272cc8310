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

//! Parses the line-oriented topology description.
//!
//! ```text
//! X
//! Y
//! Z
//! START
//! X Y 3
//! X Z 9
//! UPDATE
//! Y Z 1
//! X Z -1
//! END
//! ```
//!
//! The description starts with one router name per line, followed by the initial links after
//! `START`, and the link changes after `UPDATE`. A cost of `-1` in the update section removes the
//! link. Reading stops at `END` or at the end of the input. Empty lines are ignored.

use super::error::TopologyError;
use super::Scenario;
use crate::netsim::config::LinkChange;
use crate::netsim::LinkWeight;

use log::*;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::io::BufRead;

/// Cost that removes a link in the update section
pub const REMOVE_LINK: i64 = -1;

/// Parse a scenario from the given reader.
pub fn parse_scenario<R: BufRead>(reader: R) -> Result<Scenario, TopologyError> {
    let mut scenario = Scenario::new();
    let mut known: HashSet<String> = HashSet::new();
    let mut section = Section::Routers;

    for (i, line) in reader.lines().enumerate() {
        let line_nr = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        section = match (section, line) {
            (Section::Routers, "START") => Section::Start,
            (Section::Start, "UPDATE") => Section::Update,
            (_, "END") => break,
            (_, "START") | (_, "UPDATE") => {
                return Err(TopologyError::UnexpectedToken {
                    line: line_nr,
                    content: String::from(line),
                })
            }
            (Section::Routers, name) => {
                if name.split_whitespace().count() != 1 {
                    return Err(TopologyError::MalformedRouter {
                        line: line_nr,
                        content: String::from(line),
                    });
                }
                if known.insert(name.to_string()) {
                    scenario.add_router(name);
                } else {
                    warn!("Router {} is declared twice (line {})! Ignore it.", name, line_nr);
                }
                Section::Routers
            }
            (Section::Start, link) => {
                let (a, b, cost) = parse_link(link, line_nr, &known)?;
                scenario.add_link(a, b, link_weight(cost, line_nr)?);
                Section::Start
            }
            (Section::Update, link) => {
                let (a, b, cost) = parse_link(link, line_nr, &known)?;
                let change = if cost == REMOVE_LINK {
                    LinkChange::Remove { a: a.to_string(), b: b.to_string() }
                } else {
                    let weight = link_weight(cost, line_nr)?;
                    LinkChange::Set { a: a.to_string(), b: b.to_string(), weight }
                };
                scenario.add_update(change);
                Section::Update
            }
        };
    }

    if section == Section::Routers {
        debug!("Topology description ended before START");
    }

    Ok(scenario)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Routers,
    Start,
    Update,
}

/// Split a link line into both endpoints and the (signed) cost, and check that both endpoints are
/// known and different.
fn parse_link<'a>(
    line: &'a str,
    line_nr: usize,
    known: &HashSet<String>,
) -> Result<(&'a str, &'a str, i64), TopologyError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (a, b, cost) = match tokens.as_slice() {
        [a, b, cost] => (*a, *b, *cost),
        _ => {
            return Err(TopologyError::MalformedLink { line: line_nr, content: String::from(line) })
        }
    };
    for name in [a, b].iter() {
        if !known.contains(*name) {
            return Err(TopologyError::UnknownRouter { line: line_nr, name: name.to_string() });
        }
    }
    if a == b {
        return Err(TopologyError::SelfLink { line: line_nr, name: a.to_string() });
    }
    let cost: i64 = cost
        .parse()
        .map_err(|_| TopologyError::InvalidCost { line: line_nr, cost: cost.to_string() })?;
    Ok((a, b, cost))
}

/// Only non-negative costs that fit into a `LinkWeight` describe a link.
fn link_weight(cost: i64, line_nr: usize) -> Result<LinkWeight, TopologyError> {
    LinkWeight::try_from(cost)
        .map_err(|_| TopologyError::InvalidCost { line: line_nr, cost: cost.to_string() })
}
