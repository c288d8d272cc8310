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

//! Module that contains definitios for the error class

use thiserror::Error;

/// Error while reading a topology description. Every line number is 1-based.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// A section keyword appeared in the wrong place
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// A router name contains whitespace
    #[error("Invalid router name on line {line}: {content}")]
    MalformedRouter {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// A link line does not consist of exactly two names and a cost
    #[error("Expected `<router> <router> <cost>` on line {line}, found: {content}")]
    MalformedLink {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// A link references a router that was never declared
    #[error("Unknown router on line {line}: {name}")]
    UnknownRouter {
        /// line number
        line: usize,
        /// name of the router
        name: String,
    },
    /// A link connects a router to itself
    #[error("Link from router {name} to itself on line {line}")]
    SelfLink {
        /// line number
        line: usize,
        /// name of the router
        name: String,
    },
    /// The cost is not a non-negative integer (or the removal sentinel, in the update section)
    #[error("Invalid cost on line {line}: {cost}")]
    InvalidCost {
        /// line number
        line: usize,
        /// the cost as written in the input
        cost: String,
    },
}
