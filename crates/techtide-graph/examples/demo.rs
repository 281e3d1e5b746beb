use techtide_graph::{build_graph, node_a, node_fn, DemoState, DemoStateUpdate, GraphBuilder, GraphError};

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let graph = build_graph()?;
    println!("Topology: {}", graph.node_names().join(" -> "));

    let output = graph.invoke_traced(DemoState::default());
    println!("Run {} finished in {}ms", output.run_id, output.total_duration_ms);
    for step in &output.steps {
        println!("  [{}] {} ({}ms)", step.index, step.node, step.duration_ms);
    }
    println!("Final state: {:?}", output.state);

    // Same compiled graph, fresh input
    println!("From \"X\": {:?}", graph.invoke(DemoState::new("X")).text);

    // Custom sequences go through the same builder
    let shout = GraphBuilder::<DemoState>::new()
        .then_fn("node_a", node_a)
        .then(node_fn("exclaim", |s: &DemoState| DemoStateUpdate {
            text: Some(format!("{}!", s.text)),
        }))
        .compile()?;
    println!("Custom graph: {:?}", shout.invoke(DemoState::default()).text);

    Ok(())
}
