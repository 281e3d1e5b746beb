use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::CompiledGraph;
use crate::node::{node_fn, Node};
use crate::state::GraphState;

/// Builder for a linear graph: nodes run in the order they are added.
pub struct GraphBuilder<S: GraphState> {
    nodes: Vec<Box<dyn Node<S>>>,
}

impl<S: GraphState> GraphBuilder<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node after the current last one
    pub fn then<N>(mut self, node: N) -> Self
    where
        N: Node<S> + 'static,
    {
        self.nodes.push(Box::new(node));
        self
    }

    /// Append a function as a named node
    pub fn then_fn<F>(self, name: impl Into<String>, func: F) -> Self
    where
        S: 'static,
        F: Fn(&S) -> S::Update + Send + Sync + 'static,
    {
        self.then(node_fn(name, func))
    }

    /// Validate the sequence and freeze it into a runnable graph
    pub fn compile(self) -> Result<CompiledGraph<S>> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.name()) {
                return Err(GraphError::DuplicateNode(node.name().to_string()));
            }
        }

        tracing::debug!(nodes = self.nodes.len(), "Compiled graph");
        Ok(CompiledGraph::new(self.nodes))
    }
}

impl<S: GraphState> Default for GraphBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
