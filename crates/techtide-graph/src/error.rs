use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
