use std::time::Instant;

use serde::Serialize;

use crate::node::Node;
use crate::state::GraphState;

/// Timing for one node execution inside a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub node: String,
    pub duration_ms: u64,
}

/// Final state of a run plus what happened along the way
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput<S> {
    pub run_id: String,
    /// Epoch milliseconds
    pub started_at: i64,
    pub state: S,
    pub steps: Vec<StepRecord>,
    pub total_duration_ms: u64,
}

/// Validated, immutable node sequence. Reusable across runs.
pub struct CompiledGraph<S: GraphState> {
    nodes: Vec<Box<dyn Node<S>>>,
}

impl<S: GraphState> CompiledGraph<S> {
    pub(crate) fn new(nodes: Vec<Box<dyn Node<S>>>) -> Self {
        Self { nodes }
    }

    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a graph produced by `GraphBuilder::compile`
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run every node in order and return the final state
    pub fn invoke(&self, input: S) -> S {
        let state = self.execute(input, |_| {});
        tracing::info!(nodes = self.nodes.len(), "Graph run finished");
        state
    }

    /// Like [`invoke`](Self::invoke), but also records a run id and per-step timings
    pub fn invoke_traced(&self, input: S) -> RunOutput<S> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().timestamp_millis();
        let start_time = Instant::now();

        let mut steps = Vec::with_capacity(self.nodes.len());
        let state = self.execute(input, |step| steps.push(step));

        let total_duration_ms = start_time.elapsed().as_millis() as u64;
        tracing::info!(run_id = %run_id, steps = steps.len(), total_duration_ms, "Graph run finished");

        RunOutput {
            run_id,
            started_at,
            state,
            steps,
            total_duration_ms,
        }
    }

    fn execute(&self, mut state: S, mut on_step: impl FnMut(StepRecord)) -> S {
        for (index, node) in self.nodes.iter().enumerate() {
            let node_start = Instant::now();

            let update = node.run(&state);
            state.apply(update);

            let duration_ms = node_start.elapsed().as_millis() as u64;
            tracing::debug!(step = index, node = node.name(), duration_ms, "Node executed");

            on_step(StepRecord {
                index,
                node: node.name().to_string(),
                duration_ms,
            });
        }

        state
    }
}
