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

//! Test the layered auxiliary graph: layer structure, candidate selection
//! under both placement modes, and the synthetic edge weights.

use crate::config::{uniform_catalog, Config};
use crate::cost::CostFunction;
use crate::net::{FunctionId, Network, Request};
use crate::routing::{AuxGraph, PathIndex};
use crate::topologies::diamond;
use assert_approx_eq::assert_approx_eq;

const OP: CostFunction = CostFunction::Operational;

fn reuse_only_cfg() -> Config {
    let mut cfg = Config::new(uniform_catalog(2, 1.0, 0.0));
    cfg.creation_allowed = false;
    cfg
}

/// Diamond with fn0 pre-seeded at server 1 and fn1 at server 2.
fn seeded_diamond(cfg: &Config) -> (Network, Request) {
    let (mut net, [s0, s1, s2, s3]) = diamond();
    net.install_vm(s1, FunctionId(0), cfg).unwrap();
    net.install_vm(s2, FunctionId(1), cfg).unwrap();
    let request =
        Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0), FunctionId(1)], cfg).unwrap();
    (net, request)
}

#[test]
fn test_layer_structure() {
    let cfg = reuse_only_cfg();
    let (net, request) = seeded_diamond(&cfg);
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();

    let (_, [s0, s1, s2, s3]) = diamond();
    assert_eq!(aux.num_layers(), request.chain_len() + 2);
    assert_eq!(aux.layers().to_vec(), vec![vec![s0], vec![s1], vec![s2], vec![s3]]);
}

#[test]
fn test_edge_weights_match_index() {
    let cfg = reuse_only_cfg();
    let (net, request) = seeded_diamond(&cfg);
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();
    let (_, [s0, s1, s2, s3]) = diamond();

    assert_approx_eq!(aux.edge(0, s0, s1).unwrap().cost, index.cost(s0, s1));
    assert_approx_eq!(aux.edge(0, s0, s1).unwrap().cost, 8.0);
    assert_approx_eq!(aux.edge(1, s1, s2).unwrap().cost, 17.0);
    assert_approx_eq!(aux.edge(1, s1, s2).unwrap().delay, 2.0);
    assert_approx_eq!(aux.edge(2, s2, s3).unwrap().cost, 2.0);
}

#[test]
fn test_self_edge_is_free() {
    let cfg = reuse_only_cfg();
    let (mut net, [s0, _s1, s2, s3]) = diamond();
    // source hosts fn0 itself
    net.install_vm(s0, FunctionId(0), &cfg).unwrap();
    net.install_vm(s2, FunctionId(1), &cfg).unwrap();
    let request =
        Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0), FunctionId(1)], &cfg).unwrap();
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();

    assert_eq!(aux.layers()[1], vec![s0]);
    let self_edge = aux.edge(0, s0, s0).unwrap();
    assert_approx_eq!(self_edge.cost, 0.0);
    assert_approx_eq!(self_edge.delay, 0.0);
    // unrelated cross edge still carries the physical path weight
    assert_approx_eq!(aux.edge(1, s0, s2).unwrap().cost, 10.0);
}

#[test]
fn test_missing_candidates_fail_build() {
    let cfg = reuse_only_cfg();
    let (net, [s0, _, _, s3]) = diamond();
    // nothing hosts fn0 and creation is not allowed
    let request = Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0)], &cfg).unwrap();
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    assert!(AuxGraph::build(&net, &request, &index, &OP, &cfg).is_none());
}

#[test]
fn test_creation_mode_widens_layers() {
    let mut cfg = reuse_only_cfg();
    cfg.creation_allowed = true;
    let (net, [s0, s1, s2, s3]) = diamond();
    // no VM anywhere, but every server has spare capacity
    let request = Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0)], &cfg).unwrap();
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();

    assert_eq!(aux.num_layers(), 3);
    assert_eq!(aux.layers()[1], vec![s0, s1, s2, s3]);
}

#[test]
fn test_server_cost_enters_function_edges() {
    // non-zero operational function cost: charged on edges entering the two
    // service layers, but not on the edge to the destination
    let mut cfg = Config::new(uniform_catalog(2, 1.0, 3.0));
    cfg.creation_allowed = false;
    let (net, request) = seeded_diamond(&cfg);
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();
    let (_, [s0, s1, s2, s3]) = diamond();

    assert_approx_eq!(aux.edge(0, s0, s1).unwrap().cost, 8.0 + 3.0);
    assert_approx_eq!(aux.edge(1, s1, s2).unwrap().cost, 17.0 + 3.0);
    assert_approx_eq!(aux.edge(2, s2, s3).unwrap().cost, 2.0);
}

#[test]
fn test_path_weight_helpers() {
    let cfg = reuse_only_cfg();
    let (net, request) = seeded_diamond(&cfg);
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let aux = AuxGraph::build(&net, &request, &index, &OP, &cfg).unwrap();
    let (_, [s0, s1, s2, s3]) = diamond();

    let path = vec![s0, s1, s2, s3];
    assert_approx_eq!(aux.path_cost(&path), 27.0);
    assert_approx_eq!(aux.path_delay(&path), 4.0);
    // a path that does not fit the layer structure is infeasible
    assert_eq!(aux.path_cost(&[s0, s3]), f64::INFINITY);
}
