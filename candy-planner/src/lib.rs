//! Greedy route planner for Candy Rush.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`RoutePlanner`](candy_core::RoutePlanner) trait, and [`plan_route`], the
//! same ordering as a pure function over an in-memory candidate list.
//!
//! The ordering favours candy preference over travel distance: at every step
//! the planner walks to the remaining house with the highest score, using
//! proximity to the current position only to break ties. It is not a
//! shortest-path solver; it produces one deterministic, good-enough order.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use greedy::{GreedyPlanner, GreedyPlannerConfig, plan_route};
