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

#![deny(missing_docs)]

//! # SfcRoute: Routing and Admission Control for Service Function Chains
//!
//! This is a library for embedding virtual network function (VNF) service
//! chains onto a shared physical network. Given a request with a source, a
//! destination, a bandwidth demand, a delay bound and an ordered chain of
//! distinct function types, it decides whether the chain can be placed on
//! the current network state, along which concrete path of servers and
//! links, and reserves the resources the placement consumes.
//!
//! ## Structure
//!
//! - **[`net`]**: The physical topology: [`Network`](net::Network),
//!   [`Server`](net::Server), [`Link`](net::Link), and the validated
//!   [`Request`](net::Request).
//!
//! - **[`cost`]**: Pluggable [`CostFunction`](cost::CostFunction) variants,
//!   from flat operational costs to exponential congestion pricing.
//!
//! - **[`routing`]**: The engine. A per-request
//!   [`PathIndex`](routing::PathIndex) of bandwidth-feasible shortest paths,
//!   the layered [`AuxGraph`](routing::AuxGraph), the LARAC
//!   [delay-constrained search](routing::delay_constrained_path), and the
//!   [admission](routing::admission) evaluator that re-prices a candidate
//!   path under sequential allocation before committing it.
//!
//! - **[`config`]**: The function-type catalog and every tunable (admission
//!   threshold, congestion bases, iteration caps), threaded explicitly into
//!   the components that need them.
//!
//! - **[`topologies`]**: Fixture networks and random generators for tests
//!   and Monte-Carlo experiments.
//!
//! ## Usage
//!
//! ```
//! use sfcroute::config::{uniform_catalog, Config};
//! use sfcroute::net::{FunctionId, Request};
//! use sfcroute::route_min_cost;
//! use sfcroute::topologies::diamond;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (mut net, [s0, s1, s2, s3]) = diamond();
//!     let mut cfg = Config::new(uniform_catalog(2, 1.0, 0.0));
//!     cfg.creation_allowed = false;
//!
//!     // pre-seed the two functions of the chain
//!     net.install_vm(s1, FunctionId(0), &cfg)?;
//!     net.install_vm(s2, FunctionId(1), &cfg)?;
//!
//!     let request =
//!         Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0), FunctionId(1)], &cfg)?;
//!     let result = route_min_cost(&mut net, &request, &cfg);
//!
//!     assert!(result.admitted);
//!     assert_eq!(result.path, vec![s0, s1, s2, s3]);
//!     Ok(())
//! }
//! ```
//!
//! ## Processing model
//!
//! Routing a single request is synchronous and sequential: index, auxiliary
//! graph, search, evaluation, commit. Requests sharing one topology must be
//! processed in order, because every admitted request changes the capacity
//! state the next one sees. Independent trials own independent topologies
//! and may run in parallel; nothing in this crate is global.

// test modules
mod test;

pub mod config;
pub mod cost;
mod error;
pub mod net;
pub mod routing;
pub mod topologies;

pub use error::{NetworkError, RequestError};
pub use routing::{route_max_throughput, route_min_cost, RouteResult};
