//! Foundation tests: relationship records, storage lifecycle, the query
//! surface, and the canonical total order.

use std::collections::BTreeSet;

use relgraph::{Graph, Relation, DEFAULT_KEY};

// ==================== Helper ====================

/// Collect ids into a BTreeSet for easy comparison.
fn ids(values: &[i64]) -> BTreeSet<i64> {
    values.iter().copied().collect()
}

// ==================== Relation Record Tests ====================

#[test]
fn test_relation_constructors() {
    let real = Relation::real(2.5);
    assert!(real.outward);
    assert!((real.magnitude - 2.5).abs() < f64::EPSILON);

    let shadow = Relation::shadow(2.5);
    assert!(!shadow.outward);
    assert!((shadow.magnitude - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_relation_value_sign_flip() {
    assert!((Relation::real(3.0).value() - 3.0).abs() < f64::EPSILON);
    assert!((Relation::shadow(3.0).value() + 3.0).abs() < f64::EPSILON);
}

// ==================== Construction Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let g = Graph::new(true, 0.0);
    assert_eq!(g.size(), 0);
    assert!(g.is_empty());
    assert!(g.vertices().is_empty());
    assert!(g.keys().is_empty());
}

#[test]
fn test_default_configuration() {
    let g = Graph::default();
    assert!(g.directed);
    assert!((g.no_relationship - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_configuration() {
    let g = Graph::new(false, -1.0);
    assert!(!g.directed);
    assert!((g.no_relationship + 1.0).abs() < f64::EPSILON);
}

// ==================== Vertex Lifecycle Tests ====================

#[test]
fn test_vertices_materialize_on_set() {
    let mut g = Graph::default();
    assert!(!g.contains_vertex_undir(7));

    g.set(7, -3, DEFAULT_KEY, 1.5);
    assert_eq!(g.vertices(), ids(&[-3, 7]));
    assert_eq!(g.size(), 2);
}

#[test]
fn test_negative_and_zero_vertex_ids() {
    let mut g = Graph::default();
    g.set(0, -1, DEFAULT_KEY, 1.0);
    g.set(-1, -2, DEFAULT_KEY, 2.0);
    assert_eq!(g.vertices(), ids(&[-2, -1, 0]));
}

#[test]
fn test_size_counts_both_roles() {
    let mut g = Graph::default();
    g.set_dir(1, 2, DEFAULT_KEY, 5.0);
    // Vertex 2 exists only through the shadow mirror.
    assert_eq!(g.size(), 2);
    assert!(g.contains_vertex_undir(2));
    assert!(!g.contains_vertex_dir(2));
}

// ==================== Keys Tests ====================

#[test]
fn test_keys_across_graph() {
    let mut g = Graph::default();
    g.set(1, 2, "", 1.0);
    g.set(1, 2, "a", 2.0);
    g.set(3, 4, "b", 3.0);

    let keys: Vec<String> = g.keys().into_iter().collect();
    assert_eq!(keys, vec!["".to_string(), "a".to_string(), "b".to_string()]);
}

#[test]
fn test_keys_of_vertex_covers_both_roles() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "out", 1.0);
    g.set_dir(3, 1, "in", 2.0);

    let keys = g.keys_of(1);
    assert!(keys.contains("out"));
    assert!(keys.contains("in"));
    assert_eq!(keys.len(), 2);
}

#[test]
fn test_keys_between_includes_shadow_keys() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "k", 4.0);

    // The (2, 1) slot only has a shadow, but the key is still reported.
    assert!(g.keys_between(2, 1).contains("k"));
    assert!(g.contains_undir(2, 1, "k"));
}

#[test]
fn test_keys_on_missing_vertex_are_empty() {
    let g = Graph::default();
    assert!(g.keys_of(99).is_empty());
    assert!(g.keys_between(1, 2).is_empty());
}

#[test]
fn test_keys_between_matches_contains_undir() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "a", 1.0);
    g.set_undir(1, 2, "b", 2.0);
    g.set_dir(2, 1, "c", 3.0);

    for k in ["a", "b", "c"] {
        assert_eq!(g.keys_between(1, 2).contains(k), g.contains_undir(1, 2, k));
        assert_eq!(g.keys_between(2, 1).contains(k), g.contains_undir(2, 1, k));
    }
}

// ==================== Contains Tests ====================

#[test]
fn test_contains_arities_on_directed_edge() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "k", 5.0);

    assert!(g.contains_dir(1, 2, "k"));
    assert!(!g.contains_dir(2, 1, "k"));
    assert!(g.contains_undir(1, 2, "k"));
    assert!(g.contains_undir(2, 1, "k"));

    assert!(g.contains_edge_dir(1, 2));
    assert!(!g.contains_edge_dir(2, 1));
    assert!(g.contains_edge_undir(1, 2));
    assert!(g.contains_edge_undir(2, 1));

    assert!(g.contains_vertex_dir(1));
    assert!(!g.contains_vertex_dir(2));
    assert!(g.contains_vertex_undir(2));
}

#[test]
fn test_unqualified_contains_tracks_directed_flag() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "k", 5.0);

    // directed default: outward records only
    assert!(g.contains(1, 2, "k"));
    assert!(!g.contains(2, 1, "k"));
    assert!(g.contains_edge(1, 2));
    assert!(!g.contains_edge(2, 1));
    assert!(!g.contains_vertex(2));

    g.directed = false;
    assert!(g.contains(2, 1, "k"));
    assert!(g.contains_edge(2, 1));
    assert!(g.contains_vertex(2));
}

#[test]
fn test_contains_on_nonexistent_returns_false() {
    let g = Graph::default();
    assert!(!g.contains(1, 2, "k"));
    assert!(!g.contains_edge(1, 2));
    assert!(!g.contains_vertex(1));
}

// ==================== Neighbor Enumeration Tests ====================

#[test]
fn test_nbrs_from_and_to() {
    let mut g = Graph::default();
    g.set_dir(1, 2, DEFAULT_KEY, 5.0);
    g.set_dir(1, 3, DEFAULT_KEY, 6.0);
    g.set_dir(4, 1, DEFAULT_KEY, 7.0);

    assert_eq!(g.nbrs_from(1), ids(&[2, 3]));
    assert_eq!(g.nbrs_to(1), ids(&[4]));
    assert_eq!(g.nbrs_to(2), ids(&[1]));
    assert!(g.nbrs_from(2).is_empty());
}

#[test]
fn test_nbrs_default_follows_directed_flag() {
    let mut g = Graph::default();
    g.set_dir(1, 2, DEFAULT_KEY, 5.0);
    g.set_dir(3, 1, DEFAULT_KEY, 6.0);

    // Directed graph: unqualified nbrs enumerates outgoing.
    assert_eq!(g.nbrs(1), ids(&[2]));

    // Undirected default: either role counts.
    g.directed = false;
    assert_eq!(g.nbrs(1), ids(&[2, 3]));
}

#[test]
fn test_nbrs_undirected_edges_count_both_ways() {
    let mut g = Graph::default();
    g.set_undir(1, 2, DEFAULT_KEY, 5.0);

    assert_eq!(g.nbrs_from(1), ids(&[2]));
    assert_eq!(g.nbrs_from(2), ids(&[1]));
    assert_eq!(g.nbrs_to(1), ids(&[2]));
    assert_eq!(g.nbrs_to(2), ids(&[1]));
}

#[test]
fn test_nbrs_keyed_filters() {
    let mut g = Graph::default();
    g.set_dir(1, 2, "a", 1.0);
    g.set_dir(1, 3, "b", 2.0);

    assert_eq!(g.nbrs_keyed(1, "a"), ids(&[2]));
    assert_eq!(g.nbrs_keyed(1, "b"), ids(&[3]));
    assert!(g.nbrs_keyed(1, "c").is_empty());
    assert_eq!(g.nbrs_to_keyed(3, "b"), ids(&[1]));
    assert!(g.nbrs_from_keyed(3, "b").is_empty());
}

#[test]
fn test_nbrs_on_missing_vertex_are_empty() {
    let g = Graph::default();
    assert!(g.nbrs(5).is_empty());
    assert!(g.nbrs_to(5).is_empty());
    assert!(g.nbrs_from(5).is_empty());
}

// ==================== Get Tests ====================

#[test]
fn test_get_missing_returns_sentinel() {
    let mut g = Graph::new(true, -9.0);
    assert!((g.get(1, 2, DEFAULT_KEY) + 9.0).abs() < f64::EPSILON);

    g.set(1, 2, DEFAULT_KEY, 3.0);
    assert!((g.get(1, 2, DEFAULT_KEY) - 3.0).abs() < f64::EPSILON);
    assert!((g.get(1, 2, "other") + 9.0).abs() < f64::EPSILON);
}

// ==================== Ordering Tests ====================

#[test]
fn test_empty_sorts_before_nonempty() {
    let a = Graph::default();
    let mut b = Graph::default();
    b.set(1, 2, DEFAULT_KEY, 1.0);
    assert!(a < b);
}

#[test]
fn test_equal_structures_compare_equal() {
    let mut a = Graph::default();
    let mut b = Graph::new(false, 5.0);
    a.set_dir(1, 2, "k", 3.0);
    b.set_dir(1, 2, "k", 3.0);
    // Configuration is not part of the order; the record structure is.
    assert_eq!(a, b);
}

#[test]
fn test_order_by_magnitude() {
    let mut a = Graph::default();
    let mut b = Graph::default();
    a.set_dir(1, 2, "k", 3.0);
    b.set_dir(1, 2, "k", 4.0);
    assert!(a < b);
}

#[test]
fn test_order_recurses_per_vertex() {
    // Vertex 1's neighbor map is compared in full before vertex 2 is
    // considered, so a prefix neighbor map sorts first.
    let mut a = Graph::default();
    a.set_undir(1, 1, "k", 1.0);
    a.set_undir(2, 9, "k", 1.0);

    let mut b = Graph::default();
    b.set_undir(1, 1, "k", 1.0);
    b.set_undir(1, 2, "k", 1.0);

    assert!(a < b);
}

#[test]
fn test_graphs_usable_in_ordered_collections() {
    let mut a = Graph::default();
    a.set(1, 2, DEFAULT_KEY, 1.0);
    let mut b = Graph::default();
    b.set(1, 2, DEFAULT_KEY, 2.0);

    let mut set = BTreeSet::new();
    set.insert(a.clone());
    set.insert(b);
    set.insert(a);
    assert_eq!(set.len(), 2);
}

// ==================== Clone Tests ====================

#[test]
fn test_clone_duplicates_all_records() {
    let mut a = Graph::new(false, 2.0);
    a.set_undir(1, 2, "k", 3.0);
    let b = a.clone();

    assert_eq!(a, b);
    assert!(!b.directed);
    assert!((b.no_relationship - 2.0).abs() < f64::EPSILON);
    assert!((b.get(2, 1, "k") - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_clone_is_independent() {
    let mut a = Graph::default();
    a.set(1, 2, DEFAULT_KEY, 3.0);
    let mut b = a.clone();

    b.set(1, 2, DEFAULT_KEY, 4.0);
    assert!((a.get(1, 2, DEFAULT_KEY) - 3.0).abs() < f64::EPSILON);
    assert!(a < b);
}
