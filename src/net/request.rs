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

//! Request model: one service chain embedding demand.

use crate::config::Config;
use crate::error::RequestError;
use crate::net::types::{FunctionId, ServerId};
use std::collections::HashSet;

/// A validated, immutable service chain request: route `bandwidth` from
/// `source` to `destination` through one VM of every function type in
/// `chain`, in order, within `delay_bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    source: ServerId,
    destination: ServerId,
    bandwidth: f64,
    delay_bound: f64,
    chain: Vec<FunctionId>,
}

impl Request {
    /// Validate and construct a request. The chain must be non-empty, no
    /// longer than the function catalog, free of repeated types, and every
    /// type must be known to the catalog. Invalid chains fail fast here,
    /// before any routing is attempted; they are never silently coerced.
    pub fn new(
        source: ServerId,
        destination: ServerId,
        bandwidth: f64,
        delay_bound: f64,
        chain: Vec<FunctionId>,
        cfg: &Config,
    ) -> Result<Self, RequestError> {
        if chain.is_empty() {
            return Err(RequestError::EmptyChain);
        }
        if chain.len() > cfg.num_functions() {
            return Err(RequestError::ChainTooLong(chain.len(), cfg.num_functions()));
        }
        let mut seen: HashSet<FunctionId> = HashSet::new();
        for f in chain.iter() {
            if !cfg.knows_function(*f) {
                return Err(RequestError::UnknownFunction(*f));
            }
            if !seen.insert(*f) {
                return Err(RequestError::DuplicateFunction(*f));
            }
        }
        Ok(Self { source, destination, bandwidth, delay_bound, chain })
    }

    /// Ingress server of the flow.
    pub fn source(&self) -> ServerId {
        self.source
    }

    /// Egress server of the flow.
    pub fn destination(&self) -> ServerId {
        self.destination
    }

    /// Bandwidth demand, reserved on every physical hop of the chosen path.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// End-to-end delay ceiling.
    pub fn delay_bound(&self) -> f64 {
        self.delay_bound
    }

    /// The ordered service chain.
    pub fn chain(&self) -> &[FunctionId] {
        &self.chain
    }

    /// Length of the service chain.
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }
}
