pub mod build_graph;
pub mod edge_set;
