mod flow;
mod layered;

pub use flow::{CompactedFiles, Direction, FlowEdge, FlowNode, Flowchart, ROOT_ID};
