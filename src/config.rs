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

//! Function catalog and tunable parameters.
//!
//! Every component that needs the per-function-type tables or one of the
//! tunables gets a `&Config` threaded in explicitly. There is no process-wide
//! parameter state, which is what allows independent trials to run in
//! parallel on independent topologies.

use crate::error::NetworkError;
use crate::net::{FunctionId, Network};

/// Read-only description of one network function type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    /// Computing resources one VM of this type consumes on its server.
    pub resource: f64,
    /// Service rate of one VM instance (requests per unit time).
    pub service_rate: f64,
    /// Flat operational cost of serving a request on an existing VM.
    pub op_cost: f64,
    /// One-time cost of instantiating a new VM of this type.
    pub init_cost: f64,
}

/// Catalog of function types plus the tunables of the routing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Per-type parameters, indexed by [`FunctionId`].
    functions: Vec<FunctionSpec>,
    /// When set, a server with enough spare capacity qualifies as a candidate
    /// even if it does not yet host the required VM ("offline" placement
    /// mode). When unset, only VM reuse is eligible.
    pub creation_allowed: bool,
    /// Admission threshold per server; a request is admitted iff its
    /// evaluated cost is below `threshold_coefficient * num_servers`.
    pub threshold_coefficient: f64,
    /// Exponent base of the congestion cost on links.
    pub exp_link_base: f64,
    /// Exponent base of the congestion cost on servers.
    pub exp_server_base: f64,
    /// Iteration cap of the delay-constrained router, guarding against
    /// floating-point non-convergence of the Lagrangian bracketing.
    pub larac_max_iter: usize,
}

impl Config {
    /// Create a configuration for the given function catalog, with all
    /// tunables set to their defaults.
    pub fn new(functions: Vec<FunctionSpec>) -> Self {
        Self {
            functions,
            creation_allowed: true,
            threshold_coefficient: 10.0,
            exp_link_base: 10.0,
            exp_server_base: 10.0,
            larac_max_iter: 50,
        }
    }

    /// Number of known function types.
    pub fn num_functions(&self) -> usize {
        self.functions.len()
    }

    /// Look up the parameters of a function type.
    pub fn function(&self, function: FunctionId) -> Result<&FunctionSpec, NetworkError> {
        self.functions.get(function.0).ok_or(NetworkError::UnknownFunction(function))
    }

    /// Returns true iff the function type is part of the catalog.
    pub fn knows_function(&self, function: FunctionId) -> bool {
        function.0 < self.functions.len()
    }

    /// Admission threshold for the given topology. The threshold scales with
    /// the topology size so that the same coefficient is meaningful across
    /// differently sized networks.
    pub fn admission_threshold(&self, net: &Network) -> f64 {
        self.threshold_coefficient * net.num_servers() as f64
    }
}

/// Convenience catalog of `n` identical function types, mainly used by tests
/// and generated experiments.
pub fn uniform_catalog(n: usize, resource: f64, op_cost: f64) -> Vec<FunctionSpec> {
    (0..n)
        .map(|_| FunctionSpec { resource, service_rate: 1.0, op_cost, init_cost: 0.0 })
        .collect()
}
