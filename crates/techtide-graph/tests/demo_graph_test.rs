use techtide_graph::{build_graph, run_demo, DemoState, GraphBuilder, GraphState, Node};

#[test]
fn test_run_demo_returns_ab() {
    assert_eq!(run_demo().unwrap(), DemoState::new("AB"));
}

#[test]
fn test_run_demo_is_deterministic() {
    let runs: Vec<_> = (0..5).map(|_| run_demo().unwrap()).collect();
    assert!(runs.iter().all(|s| s.text == "AB"));
}

#[test]
fn test_prior_content_is_preserved() {
    let graph = build_graph().unwrap();
    assert_eq!(graph.invoke(DemoState::new("X")).text, "XAB");
}

#[test]
fn test_graph_is_not_idempotent() {
    let graph = build_graph().unwrap();
    let once = graph.invoke(DemoState::default());
    let twice = graph.invoke(once.clone());

    assert_eq!(once.text, "AB");
    assert_eq!(twice.text, "ABAB");
    assert_ne!(once, twice);
}

#[test]
fn test_compiled_graph_is_reusable() {
    let graph = build_graph().unwrap();
    assert_eq!(graph.invoke(DemoState::default()).text, "AB");
    assert_eq!(graph.invoke(DemoState::new("Z")).text, "ZAB");
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_traced_run_records_steps_in_order() {
    let graph = build_graph().unwrap();
    let output = graph.invoke_traced(DemoState::default());

    assert_eq!(output.state.text, "AB");
    assert_eq!(output.steps.len(), 2);
    assert_eq!(output.steps[0].index, 0);
    assert_eq!(output.steps[0].node, "node_a");
    assert_eq!(output.steps[1].node, "node_b");
    assert_eq!(output.run_id.len(), 36);
    assert!(output.started_at > 0);

    let other = graph.invoke_traced(DemoState::default());
    assert_ne!(output.run_id, other.run_id);
}

#[test]
fn test_final_record_serializes_as_json_object() {
    let state = run_demo().unwrap();
    assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"text":"AB"}"#);
}

struct Suffix(&'static str);

impl Node<DemoState> for Suffix {
    fn name(&self) -> &str {
        self.0
    }

    fn run(&self, state: &DemoState) -> <DemoState as GraphState>::Update {
        techtide_graph::DemoStateUpdate {
            text: Some(format!("{}{}", state.text, self.0)),
        }
    }
}

#[test]
fn test_custom_node_impl() {
    let graph = GraphBuilder::<DemoState>::new()
        .then(Suffix("1"))
        .then(Suffix("2"))
        .then(Suffix("3"))
        .compile()
        .unwrap();

    assert_eq!(graph.invoke(DemoState::default()).text, "123");
}
