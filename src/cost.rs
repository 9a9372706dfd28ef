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

//! # Cost functions
//!
//! Pluggable, congestion-sensitive weights for links and servers. The
//! variants form a closed enum dispatched exhaustively, so adding a variant
//! forces every evaluation site to handle it.
//!
//! Every variant is monotonically non-decreasing in the allocated load. The
//! admission evaluator replays allocations sequentially along a candidate
//! path and re-reads costs as it goes; with a non-monotone function that
//! replay could price a path *below* the index estimate and break the
//! threshold comparison.

use crate::config::Config;
use crate::net::{FunctionId, Link, Server};

/// Strategy for pricing a link hop or a server placement under the current
/// utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostFunction {
    /// Flat operational cost: the link's configured cost, and the catalog's
    /// per-function cost on servers. Ignores utilization entirely.
    Operational,
    /// Cost proportional to the utilization fraction *after* the prospective
    /// allocation. Reusing a VM prices the server at its current load;
    /// creating one adds the function's resource requirement first.
    Linear,
    /// Congestion cost growing exponentially in the utilization fraction,
    /// scaled by the topology size. Biases routing away from nearly
    /// saturated resources long before a hard capacity check would fail.
    Exponential,
}

impl CostFunction {
    /// Cost of carrying `bandwidth` more over `link`. Non-negative for every
    /// variant.
    pub fn link_cost(&self, link: &Link, bandwidth: f64, net_size: usize, cfg: &Config) -> f64 {
        match self {
            Self::Operational => link.op_cost(),
            Self::Linear => {
                if link.bandwidth() <= 0.0 {
                    return f64::INFINITY;
                }
                (link.allocated() + bandwidth) / link.bandwidth()
            }
            Self::Exponential => {
                if link.bandwidth() <= 0.0 {
                    return f64::INFINITY;
                }
                let u = (link.allocated() + bandwidth) / link.bandwidth();
                congestion(u, cfg.exp_link_base, net_size)
            }
        }
    }

    /// Cost of serving `function` on `server`, either by reusing an
    /// installed VM or by instantiating a new one.
    pub fn server_cost(
        &self,
        server: &Server,
        function: FunctionId,
        net_size: usize,
        cfg: &Config,
    ) -> f64 {
        let spec = match cfg.function(function) {
            Ok(spec) => spec,
            Err(_) => return f64::INFINITY,
        };
        let reuse = server.has_vm(function);
        match self {
            Self::Operational => {
                if reuse {
                    spec.op_cost
                } else {
                    spec.op_cost + spec.init_cost
                }
            }
            Self::Linear => {
                if server.capacity() <= 0.0 {
                    return f64::INFINITY;
                }
                let used = if reuse {
                    server.used_capacity()
                } else {
                    server.used_capacity() + spec.resource
                };
                used / server.capacity()
            }
            Self::Exponential => {
                if server.capacity() <= 0.0 {
                    return f64::INFINITY;
                }
                let used = if reuse {
                    server.used_capacity()
                } else {
                    server.used_capacity() + spec.resource
                };
                congestion(used / server.capacity(), cfg.exp_server_base, net_size)
            }
        }
    }
}

/// Exponential congestion shape `n * (base^u - 1) / (base - 1)`: zero when
/// idle, `n` at full utilization, steepest near saturation.
fn congestion(utilization: f64, base: f64, net_size: usize) -> f64 {
    let n = net_size as f64;
    n * (base.powf(utilization) - 1.0) / (base - 1.0)
}
