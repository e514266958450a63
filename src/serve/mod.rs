mod assets;
mod data;
mod routes;

pub use data::{FlowchartData, FlowchartMetadata};
pub use routes::{ServeState, serve};
