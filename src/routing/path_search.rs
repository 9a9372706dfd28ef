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

//! # Layered shortest path
//!
//! Dynamic program over the auxiliary DAG, generic in the edge weight. The
//! same search serves the plain-cost, plain-delay and combined Lagrangian
//! weights of the delay-constrained router, which is why the weight is a
//! selector closure rather than the weight the graph was built with.

use crate::net::ServerId;
use crate::routing::aux_graph::{AuxEdge, AuxGraph};

use std::collections::HashMap;

impl AuxGraph {
    /// Compute the minimum-weight source-to-destination path.
    ///
    /// Layers are processed in order; every node keeps its cheapest
    /// predecessor. Nodes without any reachable predecessor are excluded
    /// from propagation entirely, so an absent edge can never masquerade as
    /// a zero-weight one. Ties keep the first minimum under the sorted layer
    /// order, which makes results reproducible.
    ///
    /// Returns the path as server ids, one per layer, or `None` if the
    /// destination is unreachable.
    pub fn shortest_path<W: Fn(&AuxEdge) -> f64>(&self, weight: W) -> Option<Vec<ServerId>> {
        // best[k][v] = (accumulated weight, predecessor in layer k - 1)
        let mut best: Vec<HashMap<ServerId, (f64, Option<ServerId>)>> =
            Vec::with_capacity(self.layers.len());

        let source = *self.layers.first()?.first()?;
        let mut first = HashMap::new();
        first.insert(source, (0.0, None));
        best.push(first);

        for k in 1..self.layers.len() {
            let mut layer_best: HashMap<ServerId, (f64, Option<ServerId>)> = HashMap::new();
            for &v in &self.layers[k] {
                let mut min: Option<(f64, ServerId)> = None;
                for &u in &self.layers[k - 1] {
                    let cost_u = match best[k - 1].get(&u) {
                        Some((c, _)) => *c,
                        None => continue,
                    };
                    let edge = match self.edge(k - 1, u, v) {
                        Some(e) => e,
                        None => continue,
                    };
                    let candidate = cost_u + weight(edge);
                    if min.map_or(true, |(m, _)| candidate < m) {
                        min = Some((candidate, u));
                    }
                }
                if let Some((cost, pred)) = min {
                    layer_best.insert(v, (cost, Some(pred)));
                }
            }
            best.push(layer_best);
        }

        // walk the predecessor pointers back from the destination
        let destination = *self.layers.last()?.first()?;
        best.last()?.get(&destination)?;
        let mut path = Vec::with_capacity(self.layers.len());
        let mut at = destination;
        for k in (0..self.layers.len()).rev() {
            path.push(at);
            if let Some((_, Some(pred))) = best[k].get(&at) {
                at = *pred;
            }
        }
        path.reverse();
        Some(path)
    }
}
