pub mod builder;
pub mod demo;
pub mod error;
pub mod graph;
pub mod node;
pub mod state;

pub use builder::GraphBuilder;
pub use demo::{build_graph, node_a, node_b, run_demo, DemoState, DemoStateUpdate};
pub use error::{GraphError, Result};
pub use graph::{CompiledGraph, RunOutput, StepRecord};
pub use node::{node_fn, FnNode, Node};
pub use state::GraphState;
