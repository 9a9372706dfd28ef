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

//! Module containing the basic type definitions of the topology.

use crate::net::link::Link;
use petgraph::prelude::*;
use petgraph::stable_graph::StableUnGraph;

type IndexType = u32;

/// Server identification (and index into the topology graph).
pub type ServerId = NodeIndex<IndexType>;

/// Identifier of a network function type, indexing into the function catalog
/// of the [`Config`](crate::config::Config).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct FunctionId(pub usize);

/// Underlying physical graph. Node weights are empty; the
/// [`Server`](crate::net::Server) records live in a map next to the graph,
/// keyed by the node index. Edges carry the [`Link`] resource counters.
pub type PhysicalGraph = StableUnGraph<(), Link, IndexType>;
