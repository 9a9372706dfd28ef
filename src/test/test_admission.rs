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

//! Test the admission evaluator: clone-replay pricing, its idempotence, the
//! no-mutation-on-rejection contract and the monotonicity of commits.

use crate::config::{uniform_catalog, Config};
use crate::cost::CostFunction;
use crate::net::{FunctionId, Network, Request, ServerId};
use crate::routing::admission::{commit_path, evaluate_path};
use crate::routing::PathIndex;
use crate::{route_min_cost, RouteResult};
use assert_approx_eq::assert_approx_eq;

const OP: CostFunction = CostFunction::Operational;

fn reuse_only_cfg() -> Config {
    let mut cfg = Config::new(uniform_catalog(2, 1.0, 0.0));
    cfg.creation_allowed = false;
    cfg
}

fn regression_fixture(cfg: &Config) -> (Network, Request, [ServerId; 4]) {
    let (mut net, ids) = crate::topologies::diamond();
    net.install_vm(ids[1], FunctionId(0), cfg).unwrap();
    net.install_vm(ids[2], FunctionId(1), cfg).unwrap();
    let request =
        Request::new(ids[0], ids[3], 1.0, 100.0, vec![FunctionId(0), FunctionId(1)], cfg)
            .unwrap();
    (net, request, ids)
}

/// Snapshot of every mutable resource counter, for field-by-field
/// comparisons around evaluation and rejection.
fn state_snapshot(net: &Network, links: &[(ServerId, ServerId)]) -> (Vec<f64>, Vec<f64>) {
    let servers = net.servers().map(|id| net.server(id).unwrap().used_capacity()).collect();
    let allocs = links.iter().map(|(a, b)| net.link(*a, *b).unwrap().allocated()).collect();
    (servers, allocs)
}

#[test]
fn test_evaluation_is_idempotent_and_pure() {
    let cfg = reuse_only_cfg();
    let (net, request, [s0, s1, s2, s3]) = regression_fixture(&cfg);
    let links = [(s0, s1), (s0, s2), (s1, s3), (s2, s3)];
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let path = vec![s0, s1, s2, s3];

    let before = state_snapshot(&net, &links);
    let first = evaluate_path(&net, &request, &path, &index, &OP, &cfg);
    let second = evaluate_path(&net, &request, &path, &index, &OP, &cfg);

    assert_approx_eq!(first, 27.0);
    assert_approx_eq!(first, second);
    assert_eq!(state_snapshot(&net, &links), before);
}

#[test]
fn test_replay_catches_shared_hop_overcommit() {
    // out-and-back over a 3-server line: both legs of the path ride the
    // same two links, which the disjoint per-pair index cannot see. The
    // sequential replay must price the path as infeasible.
    let cfg = reuse_only_cfg();
    let mut net = Network::new();
    let s0 = net.add_server(10.0);
    let s1 = net.add_server(10.0);
    let s2 = net.add_server(10.0);
    net.add_link(s0, s1, 10.0, 1.0, 1.0).unwrap();
    net.add_link(s1, s2, 10.0, 1.0, 1.0).unwrap();
    net.install_vm(s2, FunctionId(0), &cfg).unwrap();
    let request = Request::new(s0, s0, 6.0, 100.0, vec![FunctionId(0)], &cfg).unwrap();

    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let path = vec![s0, s2, s0];
    assert_eq!(evaluate_path(&net, &request, &path, &index, &OP, &cfg), f64::INFINITY);

    // and the full pipeline rejects without mutating anything
    let result = route_min_cost(&mut net, &request, &cfg);
    assert_eq!(result, RouteResult::rejected());
    assert_approx_eq!(net.link(s0, s1).unwrap().allocated(), 0.0);
    assert_approx_eq!(net.link(s1, s2).unwrap().allocated(), 0.0);
}

#[test]
fn test_threshold_rejection_has_no_side_effects() {
    let mut cfg = reuse_only_cfg();
    // threshold 0.1 * 4 servers = 0.4, far below the evaluated cost of 27
    cfg.threshold_coefficient = 0.1;
    let (mut net, request, [s0, s1, s2, s3]) = regression_fixture(&cfg);
    let links = [(s0, s1), (s0, s2), (s1, s3), (s2, s3)];
    let before = state_snapshot(&net, &links);

    let result = route_min_cost(&mut net, &request, &cfg);

    assert_eq!(result, RouteResult::rejected());
    assert_eq!(state_snapshot(&net, &links), before);
    assert!(net.server(s0).unwrap().vms().count() == 0);
}

#[test]
fn test_commit_reserves_every_physical_hop() {
    let cfg = reuse_only_cfg();
    let (mut net, request, [s0, s1, s2, s3]) = regression_fixture(&cfg);
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let path = vec![s0, s1, s2, s3];

    commit_path(&mut net, &request, &path, &index, &cfg).unwrap();

    // leg 1 -> 2 rides 1-3-2, so link 2-3 carries two legs of the chain
    assert_approx_eq!(net.link(s0, s1).unwrap().allocated(), 1.0);
    assert_approx_eq!(net.link(s1, s3).unwrap().allocated(), 1.0);
    assert_approx_eq!(net.link(s2, s3).unwrap().allocated(), 2.0);
    assert_approx_eq!(net.link(s0, s2).unwrap().allocated(), 0.0);
}

#[test]
fn test_admission_is_monotone() {
    let cfg = reuse_only_cfg();
    let (mut net, request, [s0, s1, s2, s3]) = regression_fixture(&cfg);
    let links = [(s0, s1), (s0, s2), (s1, s3), (s2, s3)];
    let (servers_before, allocs_before) = state_snapshot(&net, &links);

    let result = route_min_cost(&mut net, &request, &cfg);
    assert!(result.admitted);

    let (servers_after, allocs_after) = state_snapshot(&net, &links);
    for (b, a) in servers_before.iter().zip(servers_after.iter()) {
        assert!(a >= b, "server usage decreased from {} to {}", b, a);
    }
    for (b, a) in allocs_before.iter().zip(allocs_after.iter()) {
        assert!(a >= b, "link allocation decreased from {} to {}", b, a);
    }
}

#[test]
fn test_evaluation_matches_committed_cost() {
    let cfg = reuse_only_cfg();
    let (mut net, request, _) = regression_fixture(&cfg);
    let result = route_min_cost(&mut net, &request, &cfg);
    assert!(result.admitted);

    // re-evaluating the admitted path on the mutated topology still prices
    // the same under a load-independent cost function
    let index = PathIndex::build(&net, &request, &OP, &cfg).unwrap();
    let cost = evaluate_path(&net, &request, &result.path, &index, &OP, &cfg);
    assert_approx_eq!(cost, result.cost);
}
