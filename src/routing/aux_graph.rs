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

//! # Auxiliary layered graph
//!
//! Per-request DAG reducing service-chain placement to shortest path: layer 0
//! holds the source, layer `k` (for `1 <= k <= L`) the candidate servers for
//! the `k`-th chain function, layer `L + 1` the destination. Cross-layer
//! edges carry the precomputed shortest-path aggregates from the
//! [`PathIndex`] as weights; a self-edge (same server in consecutive layers)
//! carries zero transport cost and delay, only the hosting cost of the layer
//! it enters.
//!
//! Invariant: a successfully built graph has exactly `chain length + 2`
//! layers, so every source-to-destination path through it has exactly
//! `chain length + 2` nodes.

use crate::config::Config;
use crate::cost::CostFunction;
use crate::net::{Network, Request, ServerId};
use crate::routing::sp_index::PathIndex;

use itertools::Itertools;
use log::*;
use std::collections::HashMap;

/// Synthetic edge of the auxiliary graph. Its cost and delay are shortest
/// path aggregates over the physical topology (plus the server cost of the
/// placement the edge enters), not properties of a physical adjacency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxEdge {
    /// Transport cost of the underlying physical path, plus the hosting cost
    /// at the target when the edge enters a function layer.
    pub cost: f64,
    /// Aggregate propagation delay of the underlying physical path.
    pub delay: f64,
}

/// The layered auxiliary DAG of one request. Derived, never persisted beyond
/// the routing decision.
#[derive(Debug, Clone)]
pub struct AuxGraph {
    /// Candidate servers per layer, sorted by id. `layers[0]` and the last
    /// layer are singletons (source and destination).
    pub(crate) layers: Vec<Vec<ServerId>>,
    /// `edges[k]` connects `layers[k]` to `layers[k + 1]`.
    pub(crate) edges: Vec<HashMap<(ServerId, ServerId), AuxEdge>>,
}

impl AuxGraph {
    /// Build the auxiliary graph for a request from its shortest-path index.
    ///
    /// A server is a candidate for chain position `k` if it already hosts a
    /// VM of that type (reuse, always eligible), or, when
    /// `cfg.creation_allowed` is set, if its spare capacity fits a new
    /// instance. Returns `None` if any candidate layer comes out empty; the
    /// caller must treat this as a rejection.
    pub fn build(
        net: &Network,
        request: &Request,
        index: &PathIndex,
        cost_fn: &CostFunction,
        cfg: &Config,
    ) -> Option<Self> {
        let n = net.num_servers();
        let mut layers: Vec<Vec<ServerId>> = Vec::with_capacity(request.chain_len() + 2);
        layers.push(vec![request.source()]);
        for f in request.chain() {
            let mut candidates = net.servers_hosting(*f);
            if cfg.creation_allowed {
                match net.servers_creatable(*f, cfg) {
                    Ok(creatable) => candidates.extend(creatable),
                    Err(e) => {
                        warn!("cannot determine candidates for {:?}: {}", f, e);
                        return None;
                    }
                }
            }
            if candidates.is_empty() {
                debug!("no candidate server for chain function {:?}", f);
                return None;
            }
            layers.push(candidates.into_iter().sorted().collect());
        }
        layers.push(vec![request.destination()]);

        let mut edges: Vec<HashMap<(ServerId, ServerId), AuxEdge>> =
            Vec::with_capacity(layers.len() - 1);
        for k in 0..layers.len() - 1 {
            let mut layer_edges = HashMap::new();
            for &u in &layers[k] {
                for &v in &layers[k + 1] {
                    let (mut cost, delay) = if u == v {
                        (0.0, 0.0)
                    } else {
                        match index.path(u, v) {
                            Some(p) => (p.cost, p.delay),
                            // the index build guarantees all pairs; a missing
                            // pair just means no edge here
                            None => continue,
                        }
                    };
                    if k + 1 < layers.len() - 1 {
                        let server = net.server(v).ok()?;
                        cost += cost_fn.server_cost(server, request.chain()[k], n, cfg);
                    }
                    layer_edges.insert((u, v), AuxEdge { cost, delay });
                }
            }
            edges.push(layer_edges);
        }

        Some(Self { layers, edges })
    }

    /// Number of layers, always `chain length + 2` for a built graph.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Candidate servers per layer.
    pub fn layers(&self) -> &[Vec<ServerId>] {
        &self.layers
    }

    /// The edge from `u` in layer `k` to `v` in layer `k + 1`, if present.
    pub fn edge(&self, k: usize, u: ServerId, v: ServerId) -> Option<&AuxEdge> {
        self.edges.get(k).and_then(|m| m.get(&(u, v)))
    }

    /// Sum of an arbitrary edge weight along a layered path. Returns
    /// infinity if the path does not fit the layer structure or uses an
    /// absent edge.
    pub fn path_weight<W: Fn(&AuxEdge) -> f64>(&self, path: &[ServerId], weight: W) -> f64 {
        if path.len() != self.layers.len() {
            return f64::INFINITY;
        }
        path.iter()
            .tuple_windows()
            .enumerate()
            .map(|(k, (u, v))| self.edge(k, *u, *v).map(&weight).unwrap_or(f64::INFINITY))
            .sum()
    }

    /// Total cost of a layered path.
    pub fn path_cost(&self, path: &[ServerId]) -> f64 {
        self.path_weight(path, |e| e.cost)
    }

    /// Total delay of a layered path.
    pub fn path_delay(&self, path: &[ServerId]) -> f64 {
        self.path_weight(path, |e| e.delay)
    }
}
