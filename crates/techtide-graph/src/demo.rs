//! Two-node demo graph: start -> node_a -> node_b -> end.
//!
//! Each node appends one character to `text`, so a run from an empty record
//! always ends with `{"text": "AB"}`.

use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::error::Result;
use crate::graph::CompiledGraph;
use crate::state::GraphState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoState {
    pub text: String,
}

impl DemoState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Fields a node wants to overwrite; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoStateUpdate {
    pub text: Option<String>,
}

impl GraphState for DemoState {
    type Update = DemoStateUpdate;

    fn apply(&mut self, update: DemoStateUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
    }
}

pub fn node_a(state: &DemoState) -> DemoStateUpdate {
    DemoStateUpdate {
        text: Some(format!("{}A", state.text)),
    }
}

pub fn node_b(state: &DemoState) -> DemoStateUpdate {
    DemoStateUpdate {
        text: Some(format!("{}B", state.text)),
    }
}

pub fn build_graph() -> Result<CompiledGraph<DemoState>> {
    GraphBuilder::<DemoState>::new()
        .then_fn("node_a", node_a)
        .then_fn("node_b", node_b)
        .compile()
}

/// Run the demo graph from an empty record.
pub fn run_demo() -> Result<DemoState> {
    let app = build_graph()?;
    Ok(app.invoke(DemoState::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_append_single_letter() {
        let state = DemoState::new("x");
        assert_eq!(node_a(&state).text.as_deref(), Some("xA"));
        assert_eq!(node_b(&state).text.as_deref(), Some("xB"));
    }

    #[test]
    fn test_empty_update_keeps_text() {
        let mut state = DemoState::new("keep");
        state.apply(DemoStateUpdate::default());
        assert_eq!(state.text, "keep");
    }

    #[test]
    fn test_topology() {
        let graph = build_graph().unwrap();
        assert_eq!(graph.node_names(), vec!["node_a", "node_b"]);
    }
}
