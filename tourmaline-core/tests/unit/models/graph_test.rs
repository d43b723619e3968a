use super::*;
use crate::helpers::*;

fn get_neighbors(graph: &AdjacencyGraph<TestNode>, node: TestNode) -> Vec<(TestNode, Distance)> {
    graph.neighbors(&node).collect()
}

#[test]
fn can_create_endpoints_when_edge_is_added() {
    let mut graph = AdjacencyGraph::default();

    graph.add_edge("A", "B", 1.);

    assert!(graph.has_node(&"A"));
    assert!(graph.has_node(&"B"));
    assert_eq!(get_neighbors(&graph, "A"), vec![("B", 1.)]);
    assert!(get_neighbors(&graph, "B").is_empty());
}

#[test]
fn can_return_empty_neighbors_for_unknown_node() {
    let graph = create_sample_graph();

    assert!(get_neighbors(&graph, "Z").is_empty());
    assert!(!graph.has_node(&"Z"));
}

#[test]
fn can_add_undirected_edges() {
    let mut graph = AdjacencyGraph::default();

    graph.add_undirected_edge("A", "B", 2.5);

    assert_eq!(get_neighbors(&graph, "A"), vec![("B", 2.5)]);
    assert_eq!(get_neighbors(&graph, "B"), vec![("A", 2.5)]);
}

#[test]
fn can_keep_parallel_edges_in_insertion_order() {
    let mut graph = AdjacencyGraph::default();

    graph.add_edge("A", "B", 3.);
    graph.add_edge("A", "B", 1.);

    assert_eq!(get_neighbors(&graph, "A"), vec![("B", 3.), ("B", 1.)]);
}

#[test]
fn can_remove_node_with_referencing_edges() {
    let mut graph = create_sample_graph();

    graph.remove_node(&"D");

    assert!(!graph.has_node(&"D"));
    assert_eq!(graph.size(), 5);
    graph.nodes().for_each(|node| {
        assert!(graph.neighbors(&node).all(|(neighbor, _)| neighbor != "D"));
    });
}

#[test]
fn can_list_all_nodes() {
    let graph = create_sample_graph();

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_unstable();

    assert_eq!(nodes, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn can_store_and_miss_coordinates() {
    let coordinates: CoordinateIndex<TestNode> = [("A", GeoPoint::new(1., 2.))].into_iter().collect();

    assert_eq!(coordinates.get(&"A"), Some(GeoPoint::new(1., 2.)));
    assert_eq!(coordinates.get(&"B"), None);
    assert_eq!(coordinates.size(), 1);
}
