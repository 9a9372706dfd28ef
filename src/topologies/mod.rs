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

//! # Prepared topologies
//!
//! Small fixture networks and random generators used by the tests and by
//! Monte-Carlo experiments. Real deployments build their [`Network`] from an
//! external import instead; the routing engine only ever sees the finished
//! topology.

use crate::error::NetworkError;
use crate::net::{Network, ServerId};

use rand::Rng;

/// # Diamond network
///
/// ```text
///        s1
///   8 .-'  '-. 15
///   s0        s3
///  10 '-.  .-' 2
///        s2
/// ```
///
/// Four servers of capacity 10, link bandwidth 10, link delay 1, and the
/// operational link costs annotated above. Returns the network and the four
/// server ids in order.
pub fn diamond() -> (Network, [ServerId; 4]) {
    let mut net = Network::new();
    let s0 = net.add_server(10.0);
    let s1 = net.add_server(10.0);
    let s2 = net.add_server(10.0);
    let s3 = net.add_server(10.0);

    // the builder only fails on duplicate or dangling links; none here
    let mut build = || -> Result<(), NetworkError> {
        net.add_link(s0, s1, 10.0, 1.0, 8.0)?;
        net.add_link(s0, s2, 10.0, 1.0, 10.0)?;
        net.add_link(s1, s3, 10.0, 1.0, 15.0)?;
        net.add_link(s2, s3, 10.0, 1.0, 2.0)?;
        Ok(())
    };
    build().unwrap();

    (net, [s0, s1, s2, s3])
}

/// Generate a connected random topology with `n` servers and independent
/// link probability `p`. Server capacities, link bandwidths, delays and
/// costs are drawn uniformly from the given ranges. Regenerates until the
/// topology is connected, so very small `p` may take several attempts.
pub fn random_topology<R: Rng>(
    rng: &mut R,
    n: usize,
    p: f64,
    capacity: (f64, f64),
    bandwidth: (f64, f64),
    delay: (f64, f64),
    op_cost: (f64, f64),
) -> Network {
    loop {
        let mut net = Network::new();
        let ids: Vec<ServerId> =
            (0..n).map(|_| net.add_server(rng.gen_range(capacity.0, capacity.1))).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(p) {
                    let _ = net.add_link(
                        ids[i],
                        ids[j],
                        rng.gen_range(bandwidth.0, bandwidth.1),
                        rng.gen_range(delay.0, delay.1),
                        rng.gen_range(op_cost.0, op_cost.1),
                    );
                }
            }
        }
        if net.is_connected() {
            return net;
        }
    }
}

/// Generate a Barabási–Albert preferential-attachment topology: start from a
/// small clique of `m` servers, then attach every new server to `m` existing
/// ones, chosen with probability proportional to their current degree. The
/// result is always connected.
pub fn barabasi_albert<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    capacity: (f64, f64),
    bandwidth: (f64, f64),
    delay: (f64, f64),
    op_cost: (f64, f64),
) -> Network {
    let m = m.max(1).min(n.saturating_sub(1).max(1));
    let mut net = Network::new();
    let mut ids: Vec<ServerId> = Vec::with_capacity(n);
    // every link endpoint appears once in here, so sampling uniformly from
    // this list is sampling proportional to degree
    let mut endpoints: Vec<ServerId> = Vec::new();

    for i in 0..n {
        let id = net.add_server(rng.gen_range(capacity.0, capacity.1));
        let targets: Vec<ServerId> = if i <= m {
            ids.clone()
        } else {
            let mut chosen = Vec::with_capacity(m);
            while chosen.len() < m {
                let candidate = endpoints[rng.gen_range(0, endpoints.len())];
                if !chosen.contains(&candidate) {
                    chosen.push(candidate);
                }
            }
            chosen
        };
        for t in targets {
            let _ = net.add_link(
                id,
                t,
                rng.gen_range(bandwidth.0, bandwidth.1),
                rng.gen_range(delay.0, delay.1),
                rng.gen_range(op_cost.0, op_cost.1),
            );
            endpoints.push(id);
            endpoints.push(t);
        }
        ids.push(id);
    }
    net
}
