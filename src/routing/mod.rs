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

//! # Routing and admission engine
//!
//! One request is processed synchronously and in five stages: build the
//! [shortest-path index](sp_index), derive the [auxiliary layered
//! graph](aux_graph), run the [delay-constrained search](larac) on top of
//! the [layered shortest path](path_search), re-price the candidate under
//! [sequential replay](admission), and finally commit the reservations if
//! the request is admitted. Rejection at any stage surfaces as a
//! [`RouteResult`] sentinel and leaves the topology untouched.

pub mod admission;
pub mod aux_graph;
pub mod larac;
pub mod path_search;
pub mod sp_index;

pub use aux_graph::{AuxEdge, AuxGraph};
pub use larac::delay_constrained_path;
pub use sp_index::{IndexedPath, PathIndex};

use crate::config::Config;
use crate::cost::CostFunction;
use crate::net::{Network, Request, ServerId};

use log::*;

/// Outcome of routing one request.
///
/// A rejection carries an empty path, infinite cost and `admitted = false`;
/// it is a value, never an error, so the simulation driver can fold it into
/// acceptance statistics without touching an error channel.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// The chosen path of servers: source, one host per chain function, and
    /// destination. Empty on rejection.
    pub path: Vec<ServerId>,
    /// Evaluated total cost of the path, `f64::INFINITY` on rejection.
    pub cost: f64,
    /// Whether the request was admitted and its reservations committed.
    pub admitted: bool,
}

impl RouteResult {
    /// The rejection sentinel.
    pub fn rejected() -> Self {
        Self { path: Vec::new(), cost: f64::INFINITY, admitted: false }
    }

    fn accepted(path: Vec<ServerId>, cost: f64) -> Self {
        Self { path, cost, admitted: true }
    }
}

/// Route a request at minimum operational cost, honoring its delay bound.
/// On admission, the reservations are committed against the topology; on
/// rejection, nothing is mutated.
pub fn route_min_cost(net: &mut Network, request: &Request, cfg: &Config) -> RouteResult {
    route_with_cost(net, request, cfg, &CostFunction::Operational)
}

/// Route a request under a congestion-sensitive cost function, spreading
/// load to maximize the throughput admitted over a request sequence. Same
/// mutation contract as [`route_min_cost`].
pub fn route_max_throughput(
    net: &mut Network,
    request: &Request,
    cfg: &Config,
    cost_fn: &CostFunction,
) -> RouteResult {
    route_with_cost(net, request, cfg, cost_fn)
}

fn route_with_cost(
    net: &mut Network,
    request: &Request,
    cfg: &Config,
    cost_fn: &CostFunction,
) -> RouteResult {
    let index = match PathIndex::build(net, request, cost_fn, cfg) {
        Some(index) => index,
        None => {
            debug!("rejected: no bandwidth-feasible shortest-path index");
            return RouteResult::rejected();
        }
    };
    let aux = match AuxGraph::build(net, request, &index, cost_fn, cfg) {
        Some(aux) => aux,
        None => {
            debug!("rejected: empty candidate layer in the auxiliary graph");
            return RouteResult::rejected();
        }
    };
    let path = match delay_constrained_path(&aux, request.delay_bound(), cfg.larac_max_iter) {
        Some(path) => path,
        None => {
            debug!("rejected: no path within delay bound {}", request.delay_bound());
            return RouteResult::rejected();
        }
    };

    let cost = admission::evaluate_path(net, request, &path, &index, cost_fn, cfg);
    let threshold = cfg.admission_threshold(net);
    if !cost.is_finite() || cost >= threshold {
        debug!("rejected: evaluated cost {} vs threshold {}", cost, threshold);
        return RouteResult::rejected();
    }

    if let Err(e) = admission::commit_path(net, request, &path, &index, cfg) {
        // evaluate_path vouched for the path; a failing commit means the
        // topology changed underneath us
        error!("commit failed after successful evaluation: {}", e);
        return RouteResult::rejected();
    }
    debug!("admitted with cost {} over {} nodes", cost, path.len());
    RouteResult::accepted(path, cost)
}
