/// State threaded through every node of a graph.
///
/// Nodes never mutate the state directly. They return an `Update`, which the
/// graph merges with [`GraphState::apply`] before the next node runs.
pub trait GraphState: Clone + Send + Sync {
    type Update;

    fn apply(&mut self, update: Self::Update);
}
