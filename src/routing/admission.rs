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

//! # Admission control
//!
//! The auxiliary graph prices every layer transition against a *disjoint*
//! per-pair snapshot of the topology: when the index was built, none of the
//! path's own allocations existed yet. Before committing anything, the
//! candidate path is therefore re-priced by replaying its allocations
//! sequentially on trial copies of the traversed servers and links. A path
//! that is infeasible under that self-consistent replay gets cost infinity.
//!
//! The replay order is part of the contract: all chain functions are placed
//! first, then the bandwidth of every physical hop is allocated, in path
//! order. Admission decisions are order-sensitive near saturation, so this
//! order must not be rearranged.

use crate::config::Config;
use crate::cost::CostFunction;
use crate::error::NetworkError;
use crate::net::{Link, Network, Request, Server, ServerId};
use crate::routing::sp_index::PathIndex;

use itertools::Itertools;
use log::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Key of a trial link copy: endpoint ids in normalized order, so that both
/// directions of the undirected link share one counter.
fn link_key(a: ServerId, b: ServerId) -> (ServerId, ServerId) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Compute the true cost of a candidate path against the live, uncommitted
/// topology, by replaying the allocation sequence on trial copies.
///
/// The path must be a layered path: `source, host_1, .., host_L,
/// destination`. Returns `f64::INFINITY` as soon as any server lacks the
/// capacity for its VM or any physical hop lacks the residual bandwidth; a
/// rejection here is expected and common, not an internal error. The live
/// topology is never touched.
pub fn evaluate_path(
    net: &Network,
    request: &Request,
    path: &[ServerId],
    index: &PathIndex,
    cost_fn: &CostFunction,
    cfg: &Config,
) -> f64 {
    if path.len() != request.chain_len() + 2 {
        return f64::INFINITY;
    }
    let n = net.num_servers();
    let mut total = 0.0;

    // place the chain functions on trial server copies, in path order
    let mut trial_servers: HashMap<ServerId, Server> = HashMap::new();
    for (k, &id) in path[1..path.len() - 1].iter().enumerate() {
        let function = request.chain()[k];
        let spec = match cfg.function(function) {
            Ok(spec) => spec,
            Err(_) => return f64::INFINITY,
        };
        let server = match trial_servers.entry(id) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => match net.server(id) {
                Ok(s) => e.insert(s.clone()),
                Err(_) => return f64::INFINITY,
            },
        };
        total += cost_fn.server_cost(server, function, n, cfg);
        if let Err(e) = server.install_vm(function, spec.resource) {
            trace!("replay rejects the path: {}", e);
            return f64::INFINITY;
        }
    }

    // then allocate the bandwidth of every physical hop behind every
    // synthetic edge, on trial link copies
    let mut trial_links: HashMap<(ServerId, ServerId), Link> = HashMap::new();
    for (u, v) in path.iter().tuple_windows() {
        if u == v {
            continue;
        }
        let physical = match index.path(*u, *v) {
            Some(p) => &p.nodes,
            None => return f64::INFINITY,
        };
        for (a, b) in physical.iter().tuple_windows() {
            let link = match trial_links.entry(link_key(*a, *b)) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => match net.link(*a, *b) {
                    Ok(l) => e.insert(l.clone()),
                    Err(_) => return f64::INFINITY,
                },
            };
            total += cost_fn.link_cost(link, request.bandwidth(), n, cfg);
            if let Err(e) = link.allocate(request.bandwidth(), *a, *b) {
                trace!("replay rejects the path: {}", e);
                return f64::INFINITY;
            }
        }
    }

    total
}

/// Commit the allocation sequence of an admitted path against the live
/// topology: install the VMs of every interior path node, then allocate the
/// request's bandwidth on every physical hop of every synthetic edge.
///
/// Must only be called after [`evaluate_path`] returned a finite cost for
/// the same path on the same topology state; under that precondition every
/// step succeeds.
pub fn commit_path(
    net: &mut Network,
    request: &Request,
    path: &[ServerId],
    index: &PathIndex,
    cfg: &Config,
) -> Result<(), NetworkError> {
    debug_assert_eq!(path.len(), request.chain_len() + 2);
    let interior = path.get(1..path.len().saturating_sub(1)).unwrap_or(&[]);
    for (k, &id) in interior.iter().enumerate() {
        net.install_vm(id, request.chain()[k], cfg)?;
    }
    for (u, v) in path.iter().tuple_windows() {
        if u == v {
            continue;
        }
        let physical = index
            .path(*u, *v)
            .map(|p| p.nodes.clone())
            .ok_or(NetworkError::LinkNotFound(*u, *v))?;
        for (a, b) in physical.iter().tuple_windows() {
            net.allocate_bandwidth(*a, *b, request.bandwidth())?;
        }
    }
    debug!("committed reservations for a path of {} nodes", path.len());
    Ok(())
}
