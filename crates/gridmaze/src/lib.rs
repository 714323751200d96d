//! Random planar grid-graph scenarios for pathfinding visualizers.
//!
//! [`maze::generate`] builds a graph of non-crossing straight edges over an
//! integer grid, picks a start and goal node, and only returns once the goal is
//! reachable from the start.

pub mod config;
pub mod maze;
