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

//! # Physical topology
//!
//! This module contains the in-memory model of the physical network: servers
//! (which may host VM instances of network functions), undirected links with
//! bandwidth, delay and operational cost, and the [`Network`] arena tying
//! them together.
//!
//! Servers and links are addressed by stable indices into a
//! [`petgraph`](petgraph) graph, never by reference. This keeps the structure
//! acyclic from an ownership point of view, and makes the clone-for-trial
//! copies taken during admission evaluation plain value copies.

pub mod link;
pub mod network;
pub mod request;
pub mod server;
pub(crate) mod types;

pub use link::Link;
pub use network::Network;
pub use request::Request;
pub use server::{Server, Vm};
pub use types::{FunctionId, PhysicalGraph, ServerId};
