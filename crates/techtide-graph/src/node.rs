use crate::state::GraphState;
use std::fmt;
use std::marker::PhantomData;

/// Core abstraction for a unit of computation in the graph
pub trait Node<S: GraphState>: Send + Sync {
    fn name(&self) -> &str;

    /// Compute a partial update from the current state
    fn run(&self, state: &S) -> S::Update;
}

/// Node backed by a plain function or closure
pub struct FnNode<S, F> {
    name: String,
    func: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, F> Node<S> for FnNode<S, F>
where
    S: GraphState,
    F: Fn(&S) -> S::Update + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, state: &S) -> S::Update {
        (self.func)(state)
    }
}

impl<S, F> fmt::Debug for FnNode<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNode").field("name", &self.name).finish()
    }
}

/// Wrap a function as a named node.
pub fn node_fn<S, F>(name: impl Into<String>, func: F) -> FnNode<S, F>
where
    S: GraphState,
    F: Fn(&S) -> S::Update + Send + Sync,
{
    FnNode {
        name: name.into(),
        func,
        _state: PhantomData,
    }
}
