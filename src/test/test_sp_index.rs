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

//! Test the all-pairs shortest-path index: costs, delays, the bandwidth
//! feasibility filter and the fail-the-whole-build contract.

use crate::config::{uniform_catalog, Config};
use crate::cost::CostFunction;
use crate::net::{FunctionId, Request};
use crate::routing::PathIndex;
use crate::topologies::diamond;
use assert_approx_eq::assert_approx_eq;

fn get_cfg() -> Config {
    Config::new(uniform_catalog(2, 1.0, 0.0))
}

fn two_function_request(cfg: &Config) -> Request {
    let (_, [s0, _, _, s3]) = diamond();
    Request::new(s0, s3, 1.0, 100.0, vec![FunctionId(0), FunctionId(1)], cfg).unwrap()
}

#[test]
fn test_operational_costs() {
    let cfg = get_cfg();
    let (net, [s0, s1, s2, s3]) = diamond();
    let request = two_function_request(&cfg);
    let index = PathIndex::build(&net, &request, &CostFunction::Operational, &cfg).unwrap();

    // cheapest 0 -> 3 rides the bottom of the diamond
    assert_approx_eq!(index.cost(s0, s3), 12.0);
    assert_eq!(index.path(s0, s3).unwrap().nodes, vec![s0, s2, s3]);
    assert_approx_eq!(index.delay(s0, s3), 2.0);

    // 1 -> 2 has no direct link; the detour over 3 beats the one over 0
    assert_approx_eq!(index.cost(s1, s2), 17.0);
    assert_eq!(index.path(s1, s2).unwrap().nodes, vec![s1, s3, s2]);

    // index is directional but symmetric on an undirected topology
    assert_approx_eq!(index.cost(s2, s1), 17.0);
    assert_eq!(index.path(s2, s1).unwrap().nodes, vec![s2, s3, s1]);
}

#[test]
fn test_self_pairs() {
    let cfg = get_cfg();
    let (net, [s0, _, _, _]) = diamond();
    let request = two_function_request(&cfg);
    let index = PathIndex::build(&net, &request, &CostFunction::Operational, &cfg).unwrap();

    assert_approx_eq!(index.cost(s0, s0), 0.0);
    assert_approx_eq!(index.delay(s0, s0), 0.0);
    assert_eq!(index.path(s0, s0).unwrap().nodes, vec![s0]);
}

#[test]
fn test_bandwidth_filter_reroutes() {
    let cfg = get_cfg();
    let (mut net, [s0, s1, s2, s3]) = diamond();
    let request = two_function_request(&cfg);

    // chain length 2 and bandwidth 1 require residual >= 2 on every usable
    // link; squeezing 0-2 below that forces 0 -> 3 over the top
    net.allocate_bandwidth(s0, s2, 9.0).unwrap();
    let index = PathIndex::build(&net, &request, &CostFunction::Operational, &cfg).unwrap();

    assert_approx_eq!(index.cost(s0, s3), 23.0);
    assert_eq!(index.path(s0, s3).unwrap().nodes, vec![s0, s1, s3]);
}

#[test]
fn test_unreachable_pair_fails_build() {
    let cfg = get_cfg();
    let (mut net, [s0, s1, s2, _]) = diamond();
    let request = two_function_request(&cfg);

    // cut s0 off entirely under the filter
    net.allocate_bandwidth(s0, s1, 9.0).unwrap();
    net.allocate_bandwidth(s0, s2, 9.0).unwrap();
    assert!(PathIndex::build(&net, &request, &CostFunction::Operational, &cfg).is_none());
}

#[test]
fn test_linear_costs_follow_utilization() {
    let cfg = get_cfg();
    let (mut net, [s0, s1, s2, s3]) = diamond();
    let request = two_function_request(&cfg);

    let index = PathIndex::build(&net, &request, &CostFunction::Linear, &cfg).unwrap();
    // every link prices at (0 + 1) / 10 before any allocation
    assert_approx_eq!(index.cost(s0, s1), 0.1);

    // load on 0-1 makes the direct hop cost 0.6; the three-hop detour over
    // the idle bottom of the diamond is now cheaper at 0.3
    net.allocate_bandwidth(s0, s1, 5.0).unwrap();
    let index = PathIndex::build(&net, &request, &CostFunction::Linear, &cfg).unwrap();
    assert_approx_eq!(index.cost(s0, s1), 0.3);
    assert_eq!(index.path(s0, s1).unwrap().nodes, vec![s0, s2, s3, s1]);
}
