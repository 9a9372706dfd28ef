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

//! Module containing all error types.
//!
//! Note that a rejected request is *not* an error. Routing surfaces every
//! infeasibility (unreachable index, delay bound, capacity shortfall during
//! replay) as a rejection [`RouteResult`](crate::routing::RouteResult), so
//! that admission control stays a pure decision function. The types below
//! only cover construction-time mistakes and topology invariant violations.

use crate::net::{FunctionId, ServerId};
use thiserror::Error;

/// Errors raised when validating a [`Request`](crate::net::Request). All of
/// these fail fast at construction time, before any routing is attempted.
#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    /// The service chain contains no function at all.
    #[error("Service chain must contain at least one function")]
    EmptyChain,
    /// The service chain is longer than the function catalog.
    #[error("Service chain of length {0} exceeds the catalog size {1}")]
    ChainTooLong(usize, usize),
    /// The same function type appears twice in the chain.
    #[error("Function {0:?} appears more than once in the service chain")]
    DuplicateFunction(FunctionId),
    /// The function type is not present in the catalog.
    #[error("Function {0:?} is not part of the function catalog")]
    UnknownFunction(FunctionId),
}

/// Errors raised by mutating operations on the physical topology.
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// The server id does not exist in the topology.
    #[error("Server was not found in the topology: {0:?}")]
    ServerNotFound(ServerId),
    /// The two servers are not adjacent.
    #[error("Network link does not exist: {0:?} -- {1:?}")]
    LinkNotFound(ServerId, ServerId),
    /// A link between the two servers already exists.
    #[error("Network link already exists: {0:?} -- {1:?}")]
    LinkAlreadyExists(ServerId, ServerId),
    /// Physical self-loops are not allowed. No-op transitions only exist as
    /// self-edges of the auxiliary graph.
    #[error("Cannot create a physical link from {0:?} to itself")]
    SelfLink(ServerId),
    /// Installing the VM would exceed the server's computing capacity.
    #[error("Server {0:?} cannot host {1:?}: requires {2}, only {3} remaining")]
    CapacityExceeded(ServerId, FunctionId, f64, f64),
    /// Allocating the bandwidth would exceed the link's capacity. The
    /// allocation is rejected, never clamped.
    #[error("Link {0:?} -- {1:?} cannot carry {2} more: only {3} residual")]
    BandwidthExceeded(ServerId, ServerId, f64, f64),
    /// Freeing more bandwidth than is currently allocated.
    #[error("Link {0:?} -- {1:?} cannot free {2}: only {3} allocated")]
    FreeingUnallocated(ServerId, ServerId, f64, f64),
    /// The function type is not present in the catalog.
    #[error("Function {0:?} is not part of the function catalog")]
    UnknownFunction(FunctionId),
}
