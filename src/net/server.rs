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

//! Server model: computing capacity plus the set of installed VM instances.

use crate::error::NetworkError;
use crate::net::types::{FunctionId, ServerId};
use std::collections::HashMap;

/// One installed VM (VNF instance) of a single function type. There is at
/// most one VM per function type per server; repeated demand for the same
/// type reuses the existing instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Vm {
    /// Function type this instance serves.
    pub function: FunctionId,
    /// Computing resources this instance occupies on its server. Copied from
    /// the catalog at install time, so a `Server` clone is self-contained.
    pub resource: f64,
}

/// A server of the physical topology. A server with zero computing capacity
/// is a pure switch: it forwards traffic but can never host a VM.
///
/// Cloning a server yields an independent VM map and no references into the
/// topology, which is what the admission evaluator relies on when it replays
/// allocations on trial copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    id: ServerId,
    capacity: f64,
    vms: HashMap<FunctionId, Vm>,
}

impl Server {
    /// Create a new server with the given computing capacity and no VMs.
    pub(crate) fn new(id: ServerId, capacity: f64) -> Self {
        Self { id, capacity, vms: HashMap::new() }
    }

    /// Stable identifier of this server within its topology.
    pub fn id(&self) -> ServerId {
        self.id
    }

    /// Total computing capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of the resource requirements of all installed VMs.
    pub fn used_capacity(&self) -> f64 {
        self.vms.values().map(|vm| vm.resource).sum()
    }

    /// Capacity not yet consumed by installed VMs.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.used_capacity()
    }

    /// Returns true iff a VM of the given function type is installed.
    pub fn has_vm(&self, function: FunctionId) -> bool {
        self.vms.contains_key(&function)
    }

    /// Returns true iff a new VM with the given resource requirement would
    /// fit into the remaining capacity.
    pub fn can_create(&self, resource: f64) -> bool {
        self.remaining_capacity() >= resource
    }

    /// Install a VM of the given function type. If a VM of that type is
    /// already present, this is a no-op reuse and returns `Ok(false)`. If a
    /// new instance is created, returns `Ok(true)`. Fails without modifying
    /// the server if the remaining capacity is insufficient.
    pub fn install_vm(&mut self, function: FunctionId, resource: f64) -> Result<bool, NetworkError> {
        if self.vms.contains_key(&function) {
            return Ok(false);
        }
        if !self.can_create(resource) {
            return Err(NetworkError::CapacityExceeded(
                self.id,
                function,
                resource,
                self.remaining_capacity(),
            ));
        }
        self.vms.insert(function, Vm { function, resource });
        Ok(true)
    }

    /// Iterate over the installed VMs (unspecified order).
    pub fn vms(&self) -> impl Iterator<Item = &Vm> {
        self.vms.values()
    }

    /// Remove all installed VMs, restoring the full capacity.
    pub(crate) fn clear_vms(&mut self) {
        self.vms.clear();
    }
}
