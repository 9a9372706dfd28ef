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

//! # Delay-constrained routing (LARAC)
//!
//! Lagrangian Relaxation based Aggregated Cost: find the minimum-cost path
//! through the auxiliary DAG whose total delay stays within the request's
//! bound, by bracketing between the cheapest path (which may be too slow)
//! and the fastest path (which may be expensive), repeatedly re-searching
//! under the combined weight `cost + lambda * delay`.
//!
//! The result is near-optimal with a provable bound rather than always
//! globally optimal; this is the accepted trade-off of the Lagrangian
//! method, not a defect of the implementation.

use crate::net::ServerId;
use crate::routing::aux_graph::AuxGraph;

use log::*;

/// Tolerance used to detect convergence of the Lagrangian dual.
const EPSILON: f64 = 1e-9;

/// Find a minimum-cost path with delay within `delay_bound`, or prove the
/// instance infeasible (`None`).
///
/// `max_iter` caps the bracketing loop. The procedure is finite because each
/// iteration strictly improves one bracket, but floating-point arithmetic
/// can stall the improvement in pathological instances; hitting the cap
/// returns the best delay-feasible path found so far.
pub fn delay_constrained_path(
    aux: &AuxGraph,
    delay_bound: f64,
    max_iter: usize,
) -> Option<Vec<ServerId>> {
    // cheapest path overall; optimal if it already meets the bound
    let mut path_c = aux.shortest_path(|e| e.cost)?;
    if aux.path_delay(&path_c) <= delay_bound {
        trace!("minimum-cost path meets the delay bound, no relaxation needed");
        return Some(path_c);
    }

    // fastest path overall; if even this one is too slow, no path exists
    let mut path_d = aux.shortest_path(|e| e.delay)?;
    if aux.path_delay(&path_d) > delay_bound {
        debug!(
            "infeasible delay bound {}: fastest path has delay {}",
            delay_bound,
            aux.path_delay(&path_d)
        );
        return None;
    }

    let mut iter = 0;
    loop {
        if iter >= max_iter {
            warn!("LARAC reached its iteration cap, returning the best feasible path");
            break;
        }
        let (cost_c, delay_c) = (aux.path_cost(&path_c), aux.path_delay(&path_c));
        let (cost_d, delay_d) = (aux.path_cost(&path_d), aux.path_delay(&path_d));
        if (delay_d - delay_c).abs() <= EPSILON {
            break;
        }
        let lambda = (cost_c - cost_d) / (delay_d - delay_c);
        trace!("LARAC iteration {}: lambda = {}", iter, lambda);

        let combined = |cost: f64, delay: f64| cost + lambda * delay;
        let path_r = aux.shortest_path(|e| combined(e.cost, e.delay))?;
        let combined_r = combined(aux.path_cost(&path_r), aux.path_delay(&path_r));
        let combined_c = combined(cost_c, delay_c);

        // dual converged: the relaxed search cannot beat the bracket anymore
        if (combined_r - combined_c).abs() <= EPSILON {
            break;
        }
        if aux.path_delay(&path_r) <= delay_bound {
            path_d = path_r;
        } else {
            path_c = path_r;
        }
        iter += 1;
    }

    Some(path_d)
}
