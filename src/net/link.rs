// SfcRoute: Routing and Admission Control for Service Function Chains
// Copyright (C) 2026  SfcRoute Developers
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

//! Link model: bandwidth accounting, delay and operational cost of one
//! undirected physical edge.

use crate::error::NetworkError;
use crate::net::types::ServerId;

/// An undirected physical link. The endpoints live in the topology graph;
/// the link itself only carries the resource counters.
///
/// Invariant: `allocated <= bandwidth` at all times on the live topology.
/// Allocations that would violate this are rejected, never clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    bandwidth: f64,
    allocated: f64,
    delay: f64,
    op_cost: f64,
}

impl Link {
    /// Create a new link with no allocated bandwidth.
    pub(crate) fn new(bandwidth: f64, delay: f64, op_cost: f64) -> Self {
        Self { bandwidth, allocated: 0.0, delay, op_cost }
    }

    /// Total bandwidth capacity.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Bandwidth currently committed to admitted requests.
    pub fn allocated(&self) -> f64 {
        self.allocated
    }

    /// Capacity minus committed allocation; the quantity gating every
    /// feasibility check.
    pub fn residual(&self) -> f64 {
        self.bandwidth - self.allocated
    }

    /// Fraction of the capacity in use, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.bandwidth <= 0.0 {
            1.0
        } else {
            self.allocated / self.bandwidth
        }
    }

    /// Propagation delay of this link.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Flat operational cost of carrying one request over this link.
    pub fn op_cost(&self) -> f64 {
        self.op_cost
    }

    /// Allocate bandwidth on this link. Fails without modifying the link if
    /// the residual is insufficient. The endpoints are only used to report
    /// the error.
    pub(crate) fn allocate(
        &mut self,
        bw: f64,
        a: ServerId,
        b: ServerId,
    ) -> Result<(), NetworkError> {
        if bw > self.residual() {
            return Err(NetworkError::BandwidthExceeded(a, b, bw, self.residual()));
        }
        self.allocated += bw;
        Ok(())
    }

    /// Release previously allocated bandwidth. Fails if more would be freed
    /// than is currently allocated.
    pub(crate) fn free(&mut self, bw: f64, a: ServerId, b: ServerId) -> Result<(), NetworkError> {
        if bw > self.allocated {
            return Err(NetworkError::FreeingUnallocated(a, b, bw, self.allocated));
        }
        self.allocated -= bw;
        Ok(())
    }

    /// Drop all allocations, restoring the full capacity.
    pub(crate) fn reset(&mut self) {
        self.allocated = 0.0;
    }
}
