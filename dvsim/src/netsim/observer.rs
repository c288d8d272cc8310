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

//! # Convergence Observer
//!
//! The network reports the progress of every phase to a [`ConvergenceObserver`]. This is the only
//! way for the outside to see the intermediate states of the round-based convergence.

use crate::netsim::{Network, Phase};
use std::io;

/// Trait receiving the intermediate and final states of a phase. Every method has an empty default
/// implementation.
pub trait ConvergenceObserver {
    /// Called after the routers were reset, before the first round of `phase` is executed.
    fn phase_started(&mut self, _net: &Network, _phase: Phase) -> io::Result<()> {
        Ok(())
    }

    /// Called at the start of every round, with the state left by the previous round.
    fn round_started(&mut self, _net: &Network, _round: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called once the network has converged, after `rounds` rounds were executed.
    fn converged(&mut self, _net: &Network, _rounds: usize) -> io::Result<()> {
        Ok(())
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ConvergenceObserver for NoopObserver {}
