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

//! # Top-level Network arena
//!
//! The [`Network`] owns every server and link. It is the one piece of shared
//! mutable state of the system: every admitted request commits VM
//! installations and bandwidth allocations against it, and that mutation is
//! visible to all requests processed afterwards. Requests sharing a topology
//! must therefore be processed strictly sequentially; independent trials on
//! independent `Network` values may run in parallel.

use crate::config::Config;
use crate::error::NetworkError;
use crate::net::link::Link;
use crate::net::server::Server;
use crate::net::types::{FunctionId, PhysicalGraph, ServerId};

use itertools::Itertools;
use log::*;
use petgraph::visit::{Dfs, EdgeRef};
use std::collections::HashMap;

/// Physical network topology of servers and undirected links.
#[derive(Debug, Clone)]
pub struct Network {
    graph: PhysicalGraph,
    servers: HashMap<ServerId, Server>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Generate an empty network.
    pub fn new() -> Self {
        Self { graph: PhysicalGraph::default(), servers: HashMap::new() }
    }

    /// Add a new server with the given computing capacity (0 for a pure
    /// switch). Returns its id, used to reference it everywhere else.
    pub fn add_server(&mut self, capacity: f64) -> ServerId {
        let new_server = Server::new(self.graph.add_node(()), capacity);
        let id = new_server.id();
        self.servers.insert(id, new_server);
        id
    }

    /// Create a link between two existing servers. Self-loops and duplicate
    /// links are rejected.
    pub fn add_link(
        &mut self,
        a: ServerId,
        b: ServerId,
        bandwidth: f64,
        delay: f64,
        op_cost: f64,
    ) -> Result<(), NetworkError> {
        if a == b {
            return Err(NetworkError::SelfLink(a));
        }
        if !self.servers.contains_key(&a) {
            return Err(NetworkError::ServerNotFound(a));
        }
        if !self.servers.contains_key(&b) {
            return Err(NetworkError::ServerNotFound(b));
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(NetworkError::LinkAlreadyExists(a, b));
        }
        self.graph.add_edge(a, b, Link::new(bandwidth, delay, op_cost));
        Ok(())
    }

    /// Number of servers in the topology.
    pub fn num_servers(&self) -> usize {
        self.servers.len()
    }

    /// Number of links in the topology.
    pub fn num_links(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all server ids in ascending index order.
    pub fn servers(&self) -> impl Iterator<Item = ServerId> + '_ {
        self.graph.node_indices()
    }

    /// Get a server by id.
    pub fn server(&self, id: ServerId) -> Result<&Server, NetworkError> {
        self.servers.get(&id).ok_or(NetworkError::ServerNotFound(id))
    }

    /// Get a server by id, mutably.
    pub(crate) fn server_mut(&mut self, id: ServerId) -> Result<&mut Server, NetworkError> {
        self.servers.get_mut(&id).ok_or(NetworkError::ServerNotFound(id))
    }

    /// Get the link connecting two adjacent servers.
    pub fn link(&self, a: ServerId, b: ServerId) -> Result<&Link, NetworkError> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .ok_or(NetworkError::LinkNotFound(a, b))
    }

    /// Get the link connecting two adjacent servers, mutably.
    pub(crate) fn link_mut(&mut self, a: ServerId, b: ServerId) -> Result<&mut Link, NetworkError> {
        match self.graph.find_edge(a, b) {
            Some(e) => self.graph.edge_weight_mut(e).ok_or(NetworkError::LinkNotFound(a, b)),
            None => Err(NetworkError::LinkNotFound(a, b)),
        }
    }

    /// Iterate over all links incident to the given server, as pairs of the
    /// neighboring server id and the link.
    pub fn links_from(&self, id: ServerId) -> impl Iterator<Item = (ServerId, &Link)> {
        self.graph.edges(id).map(move |e| {
            let other = if e.source() == id { e.target() } else { e.source() };
            (other, e.weight())
        })
    }

    /// All neighbors reachable from `id` over a link with at least `bw`
    /// residual bandwidth.
    pub fn neighbors_with_bandwidth(&self, id: ServerId, bw: f64) -> Vec<ServerId> {
        self.links_from(id)
            .filter(|(_, link)| link.residual() >= bw)
            .map(|(n, _)| n)
            .sorted()
            .collect()
    }

    /// All servers already hosting a VM of the given function type (reuse
    /// candidates), in ascending id order.
    pub fn servers_hosting(&self, function: FunctionId) -> Vec<ServerId> {
        self.servers
            .values()
            .filter(|s| s.has_vm(function))
            .map(|s| s.id())
            .sorted()
            .collect()
    }

    /// All servers with enough spare capacity to instantiate a new VM of the
    /// given function type, in ascending id order. Servers already hosting
    /// the type are not listed here; they are reuse candidates.
    pub fn servers_creatable(
        &self,
        function: FunctionId,
        cfg: &Config,
    ) -> Result<Vec<ServerId>, NetworkError> {
        let resource = cfg.function(function)?.resource;
        Ok(self
            .servers
            .values()
            .filter(|s| !s.has_vm(function) && s.can_create(resource))
            .map(|s| s.id())
            .sorted()
            .collect())
    }

    /// Install a VM of the given function type on a server, looking up its
    /// resource requirement in the catalog. Returns `Ok(true)` if a new
    /// instance was created, `Ok(false)` on reuse. Also used to pre-seed
    /// placements before any request is routed.
    pub fn install_vm(
        &mut self,
        id: ServerId,
        function: FunctionId,
        cfg: &Config,
    ) -> Result<bool, NetworkError> {
        let resource = cfg.function(function)?.resource;
        self.server_mut(id)?.install_vm(function, resource)
    }

    /// Allocate bandwidth on the link between two adjacent servers.
    pub fn allocate_bandwidth(
        &mut self,
        a: ServerId,
        b: ServerId,
        bw: f64,
    ) -> Result<(), NetworkError> {
        self.link_mut(a, b)?.allocate(bw, a, b)
    }

    /// Release previously allocated bandwidth on the link between two
    /// adjacent servers.
    pub fn free_bandwidth(&mut self, a: ServerId, b: ServerId, bw: f64) -> Result<(), NetworkError> {
        self.link_mut(a, b)?.free(bw, a, b)
    }

    /// Check whether the topology is connected (ignoring any capacity state).
    pub fn is_connected(&self) -> bool {
        let start = match self.graph.node_indices().next() {
            Some(n) => n,
            None => return true,
        };
        let mut dfs = Dfs::new(&self.graph, start);
        let mut seen = 0;
        while dfs.next(&self.graph).is_some() {
            seen += 1;
        }
        seen == self.graph.node_count()
    }

    /// Remove every VM and every bandwidth allocation, restoring the
    /// topology to its freshly generated state. Used between trials.
    pub fn reset(&mut self) {
        debug!("resetting all allocations on the topology");
        for server in self.servers.values_mut() {
            server.clear_vms();
        }
        for e in self.graph.edge_indices().collect::<Vec<_>>() {
            if let Some(link) = self.graph.edge_weight_mut(e) {
                link.reset();
            }
        }
    }
}
