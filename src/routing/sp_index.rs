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

//! # Shortest-path index
//!
//! Per-request, per-cost-function index of the minimum-cost physical path
//! (and its cumulative delay) between every ordered pair of servers, under a
//! bandwidth feasibility filter. The auxiliary graph uses these aggregates as
//! its virtual edge weights.

use crate::config::Config;
use crate::cost::CostFunction;
use crate::net::{Network, Request, ServerId};

use log::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// One entry of the index: a concrete physical path with its aggregate cost
/// and delay.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPath {
    /// Physical servers of the path, endpoints included. A self pair holds
    /// the single endpoint.
    pub nodes: Vec<ServerId>,
    /// Aggregate cost of the path under the cost function the index was
    /// built with.
    pub cost: f64,
    /// Aggregate propagation delay of the path.
    pub delay: f64,
}

/// All-pairs index of bandwidth-feasible minimum-cost paths.
#[derive(Debug, Clone)]
pub struct PathIndex {
    paths: HashMap<(ServerId, ServerId), IndexedPath>,
}

/// Entry of the Dijkstra frontier, ordered by tentative cost (reversed, so
/// that the std max-heap pops the cheapest node first). Node index breaks
/// cost ties to keep the expansion order reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: f64,
    node: ServerId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathIndex {
    /// Build the index for one request under one cost function.
    ///
    /// Links whose residual bandwidth is below `request bandwidth * chain
    /// length` are skipped entirely (conservative reservation proxy: in the
    /// worst case every leg of the chain rides the same link). If any
    /// ordered pair of servers stays unreachable under that filter, no
    /// feasible auxiliary graph exists and the whole build returns `None`;
    /// the caller must treat this as an immediate rejection.
    pub fn build(
        net: &Network,
        request: &Request,
        cost_fn: &CostFunction,
        cfg: &Config,
    ) -> Option<Self> {
        let min_residual = request.bandwidth() * request.chain_len() as f64;
        let n = net.num_servers();
        let mut paths = HashMap::with_capacity(n * n);

        for source in net.servers() {
            let reached = single_source(net, source, min_residual, request.bandwidth(), cost_fn, cfg);
            if reached.len() < n {
                debug!(
                    "index build failed: {} of {} servers reachable from {:?} with residual >= {}",
                    reached.len(),
                    n,
                    source,
                    min_residual
                );
                return None;
            }
            for (target, entry) in reached {
                paths.insert((source, target), entry);
            }
        }

        Some(Self { paths })
    }

    /// Look up the indexed path between an ordered pair of servers.
    pub fn path(&self, a: ServerId, b: ServerId) -> Option<&IndexedPath> {
        self.paths.get(&(a, b))
    }

    /// Cost of the indexed path between an ordered pair, infinite if absent.
    pub fn cost(&self, a: ServerId, b: ServerId) -> f64 {
        self.path(a, b).map(|p| p.cost).unwrap_or(f64::INFINITY)
    }

    /// Delay of the indexed path between an ordered pair, infinite if absent.
    pub fn delay(&self, a: ServerId, b: ServerId) -> f64 {
        self.path(a, b).map(|p| p.delay).unwrap_or(f64::INFINITY)
    }
}

/// Dijkstra relaxation from one source. Costs are non-negative for every
/// cost function variant, so the first time a node is popped its label is
/// final. Returns the reached targets with their reconstructed paths.
fn single_source(
    net: &Network,
    source: ServerId,
    min_residual: f64,
    bandwidth: f64,
    cost_fn: &CostFunction,
    cfg: &Config,
) -> HashMap<ServerId, IndexedPath> {
    let n = net.num_servers();
    let mut dist: HashMap<ServerId, f64> = HashMap::with_capacity(n);
    let mut delay: HashMap<ServerId, f64> = HashMap::with_capacity(n);
    let mut prev: HashMap<ServerId, ServerId> = HashMap::with_capacity(n);
    let mut heap: BinaryHeap<Frontier> = BinaryHeap::new();

    dist.insert(source, 0.0);
    delay.insert(source, 0.0);
    heap.push(Frontier { cost: 0.0, node: source });

    while let Some(Frontier { cost, node }) = heap.pop() {
        // stale frontier entry
        if cost > dist.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for (neighbor, link) in net.links_from(node) {
            if link.residual() < min_residual {
                continue;
            }
            let next_cost = cost + cost_fn.link_cost(link, bandwidth, n, cfg);
            if next_cost < dist.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                dist.insert(neighbor, next_cost);
                delay.insert(neighbor, delay[&node] + link.delay());
                prev.insert(neighbor, node);
                heap.push(Frontier { cost: next_cost, node: neighbor });
            }
        }
    }

    dist.keys()
        .map(|target| {
            let mut nodes = vec![*target];
            let mut at = *target;
            while let Some(p) = prev.get(&at) {
                nodes.push(*p);
                at = *p;
            }
            nodes.reverse();
            (*target, IndexedPath { nodes, cost: dist[target], delay: delay[target] })
        })
        .collect()
}
