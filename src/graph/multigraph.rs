//! The `Graph` container: weighted, multi-keyed relationships between
//! integer-identified vertices.
//!
//! One storage model serves both directed and undirected semantics. Every
//! outward record at `(i, j, key)` has a mirror at `(j, i, key)`: either an
//! independently created outward record of its own, or a *shadow* — a
//! bookkeeping record whose queried value is the negation of the real
//! edge's magnitude. Directed clears must respect that pairing: removing
//! one direction of an anti-parallel pair demotes the cleared side to a
//! shadow of the survivor rather than deleting it.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Relation, VertexId, WEIGHT_TOLERANCE};

use super::Direction;

type KeyMap = BTreeMap<String, Relation>;
type Adjacency = BTreeMap<VertexId, KeyMap>;

/// In-memory multigraph relationship container.
///
/// Vertices carry no payload and exist only implicitly: a vertex is present
/// exactly while it has at least one relationship record in either role.
/// Every mutation prunes containers it empties, cascading bottom-up, so no
/// key map, neighbor map, or vertex entry is ever left empty.
///
/// The container defines no failure outcomes. Queries on absent structure
/// return empty sets or the `no_relationship` sentinel; mutations create
/// the structure they need; clearing an absent target is a no-op.
#[derive(Debug, Clone)]
pub struct Graph {
    /// vertex -> neighbor -> key -> record. Exclusively owned.
    data: BTreeMap<VertexId, Adjacency>,
    /// Default resolution for direction-unqualified operations.
    pub directed: bool,
    /// The value that denotes absence. Writing a value within
    /// [`WEIGHT_TOLERANCE`] of it deletes the relationship instead of
    /// storing it — callers must not pick a sentinel they intend to store.
    pub no_relationship: f64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(true, 0.0)
    }
}

impl Graph {
    /// Create an empty graph with the given direction default and absence
    /// sentinel.
    pub fn new(directed: bool, no_relationship: f64) -> Self {
        Self {
            data: BTreeMap::new(),
            directed,
            no_relationship,
        }
    }

    // ---- storage internals -------------------------------------------

    fn relation(&self, i: VertexId, j: VertexId, key: &str) -> Option<&Relation> {
        self.data.get(&i)?.get(&j)?.get(key)
    }

    /// Insert or overwrite a single record, creating nesting as needed.
    fn update(&mut self, i: VertexId, j: VertexId, key: &str, outward: bool, x: f64) {
        self.data
            .entry(i)
            .or_default()
            .entry(j)
            .or_default()
            .insert(key.to_string(), Relation { outward, magnitude: x });
    }

    /// Drop any now-empty containers on the `(i, j)` pair, cascading up to
    /// the vertex entries themselves.
    fn prune_pair(&mut self, i: VertexId, j: VertexId) {
        if let Some(adj) = self.data.get_mut(&i) {
            if adj.get(&j).is_some_and(|rels| rels.is_empty()) {
                adj.remove(&j);
            }
        }
        if let Some(adj) = self.data.get_mut(&j) {
            if adj.get(&i).is_some_and(|rels| rels.is_empty()) {
                adj.remove(&i);
            }
        }
        if self.data.get(&i).is_some_and(|adj| adj.is_empty()) {
            self.data.remove(&i);
        }
        if self.data.get(&j).is_some_and(|adj| adj.is_empty()) {
            self.data.remove(&j);
        }
    }

    // ---- query surface -----------------------------------------------

    /// Number of vertices with at least one relationship record. There is
    /// no storage for an isolated vertex, so none are counted.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// True if the graph holds no relationships at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All vertices present in the graph.
    pub fn vertices(&self) -> BTreeSet<VertexId> {
        self.data.keys().copied().collect()
    }

    /// All keys present anywhere in the graph.
    pub fn keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for adj in self.data.values() {
            for rels in adj.values() {
                for key in rels.keys() {
                    out.insert(key.clone());
                }
            }
        }
        out
    }

    /// All keys touching vertex `i`, in either role. Mirror records make
    /// one pass over `i`'s own map sufficient.
    pub fn keys_of(&self, i: VertexId) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if let Some(adj) = self.data.get(&i) {
            for rels in adj.values() {
                for key in rels.keys() {
                    out.insert(key.clone());
                }
            }
        }
        out
    }

    /// All keys between the ordered pair `(i, j)`, shadows included.
    pub fn keys_between(&self, i: VertexId, j: VertexId) -> BTreeSet<String> {
        self.data
            .get(&i)
            .and_then(|adj| adj.get(&j))
            .map(|rels| rels.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn default_direction(&self) -> Direction {
        if self.directed {
            Direction::Outgoing
        } else {
            Direction::Either
        }
    }

    /// Does `rel` (stored at `(i, j, key)`) count for enumeration in `dir`?
    /// A record counts as incoming when it is a shadow, or when the reverse
    /// slot holds a real edge (the undirected case).
    fn follows(&self, i: VertexId, j: VertexId, key: &str, rel: &Relation, dir: Direction) -> bool {
        match dir {
            Direction::Either => true,
            Direction::Outgoing => rel.outward,
            Direction::Incoming => {
                !rel.outward || self.relation(j, i, key).is_some_and(|r| r.outward)
            }
        }
    }

    fn collect_nbrs(&self, i: VertexId, dir: Direction, key: Option<&str>) -> BTreeSet<VertexId> {
        let mut out = BTreeSet::new();
        let Some(adj) = self.data.get(&i) else {
            return out;
        };
        for (&j, rels) in adj {
            match key {
                Some(k) => {
                    if let Some(rel) = rels.get(k) {
                        if self.follows(i, j, k, rel, dir) {
                            out.insert(j);
                        }
                    }
                }
                None => {
                    for (k, rel) in rels {
                        if self.follows(i, j, k, rel, dir) {
                            out.insert(j);
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Neighbors of `i`, per the graph's direction default: outgoing when
    /// the graph is directed, either role when it is not.
    pub fn nbrs(&self, i: VertexId) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, self.default_direction(), None)
    }

    /// Neighbors of `i` related through `key`, per the direction default.
    pub fn nbrs_keyed(&self, i: VertexId, key: &str) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, self.default_direction(), Some(key))
    }

    /// Vertices with a relationship arriving at `i`.
    pub fn nbrs_to(&self, i: VertexId) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, Direction::Incoming, None)
    }

    /// Vertices with a `key` relationship arriving at `i`.
    pub fn nbrs_to_keyed(&self, i: VertexId, key: &str) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, Direction::Incoming, Some(key))
    }

    /// Vertices with a relationship originating at `i`.
    pub fn nbrs_from(&self, i: VertexId) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, Direction::Outgoing, None)
    }

    /// Vertices with a `key` relationship originating at `i`.
    pub fn nbrs_from_keyed(&self, i: VertexId, key: &str) -> BTreeSet<VertexId> {
        self.collect_nbrs(i, Direction::Outgoing, Some(key))
    }

    fn contains_record(&self, i: VertexId, j: VertexId, key: &str, either: bool) -> bool {
        match self.relation(i, j, key) {
            Some(rel) => either || rel.outward,
            None => false,
        }
    }

    /// True iff an outward `key` record exists at `(i, j)`.
    pub fn contains_dir(&self, i: VertexId, j: VertexId, key: &str) -> bool {
        self.contains_record(i, j, key, false)
    }

    /// True iff any `key` record exists at `(i, j)`, shadows included.
    pub fn contains_undir(&self, i: VertexId, j: VertexId, key: &str) -> bool {
        self.contains_record(i, j, key, true)
    }

    /// `contains_dir` or `contains_undir`, per the graph's default.
    pub fn contains(&self, i: VertexId, j: VertexId, key: &str) -> bool {
        self.contains_record(i, j, key, !self.directed)
    }

    /// True iff some relationship originates at `i` toward `j`, any key.
    pub fn contains_edge_dir(&self, i: VertexId, j: VertexId) -> bool {
        self.data
            .get(&i)
            .and_then(|adj| adj.get(&j))
            .is_some_and(|rels| rels.values().any(|rel| rel.outward))
    }

    /// True iff any relationship exists between `i` and `j`, any key.
    pub fn contains_edge_undir(&self, i: VertexId, j: VertexId) -> bool {
        self.data
            .get(&i)
            .and_then(|adj| adj.get(&j))
            .is_some_and(|rels| !rels.is_empty())
    }

    /// Pair containment per the graph's direction default.
    pub fn contains_edge(&self, i: VertexId, j: VertexId) -> bool {
        if self.directed {
            self.contains_edge_dir(i, j)
        } else {
            self.contains_edge_undir(i, j)
        }
    }

    /// True iff some relationship originates at `i`.
    pub fn contains_vertex_dir(&self, i: VertexId) -> bool {
        self.data.get(&i).is_some_and(|adj| {
            adj.values()
                .any(|rels| rels.values().any(|rel| rel.outward))
        })
    }

    /// True iff vertex `i` is present (has any record, in either role).
    pub fn contains_vertex_undir(&self, i: VertexId) -> bool {
        self.data.get(&i).is_some_and(|adj| !adj.is_empty())
    }

    /// Vertex containment per the graph's direction default.
    pub fn contains_vertex(&self, i: VertexId) -> bool {
        if self.directed {
            self.contains_vertex_dir(i)
        } else {
            self.contains_vertex_undir(i)
        }
    }

    /// The value of the `key` relationship at `(i, j)`, or the
    /// `no_relationship` sentinel if there is none.
    ///
    /// A shadow reports the *negation* of its magnitude: reading a directed
    /// edge from its non-originating end yields the opposite-signed value
    /// of the real edge, not the sentinel. `clear_edge_dir` relies on this
    /// convention when it demotes one side of an anti-parallel pair.
    pub fn get(&self, i: VertexId, j: VertexId, key: &str) -> f64 {
        self.relation(i, j, key)
            .map_or(self.no_relationship, Relation::value)
    }

    // ---- mutation ----------------------------------------------------

    /// Write an `(i, j, key)` relationship. With `undirected` both slots
    /// get outward records. Otherwise the mirror slot is (re)written as a
    /// shadow unless it already holds an independent outward record — a
    /// real reverse edge is never clobbered by bookkeeping.
    fn write(&mut self, i: VertexId, j: VertexId, key: &str, undirected: bool, x: f64) {
        // Writing the sentinel is a delete.
        if (x - self.no_relationship).abs() < WEIGHT_TOLERANCE {
            if undirected {
                self.clear_undir(i, j, key);
            } else {
                self.clear_dir(i, j, key);
            }
            return;
        }

        log::trace!("write {i}->{j} key={key:?} x={x} undirected={undirected}");
        self.update(i, j, key, true, x);
        if undirected {
            self.update(j, i, key, true, x);
        } else if !self.relation(j, i, key).is_some_and(|rel| rel.outward) {
            self.update(j, i, key, false, x);
        }
    }

    /// Set the `key` relationship per the graph's direction default.
    /// Creates the relationship if absent, overwrites it if present;
    /// setting the sentinel value clears it instead.
    pub fn set(&mut self, i: VertexId, j: VertexId, key: &str, x: f64) {
        let undirected = !self.directed;
        self.write(i, j, key, undirected, x);
    }

    /// Set a one-directional `key` relationship from `i` to `j`.
    pub fn set_dir(&mut self, i: VertexId, j: VertexId, key: &str, x: f64) {
        self.write(i, j, key, false, x);
    }

    /// Set a symmetric `key` relationship between `i` and `j`.
    pub fn set_undir(&mut self, i: VertexId, j: VertexId, key: &str, x: f64) {
        self.write(i, j, key, true, x);
    }

    // ---- cleanup -----------------------------------------------------

    /// Record-level directed clear of one key, without pruning. If the
    /// mirror is only a shadow the relationship is gone in full; if it is
    /// a real reverse edge, this side is demoted to a shadow of it.
    fn clear_one_dir(&mut self, i: VertexId, j: VertexId, key: &str) {
        let Some(rel) = self.relation(i, j, key).copied() else {
            return;
        };
        if !rel.outward {
            // Only a shadow here; nothing outward to clear.
            return;
        }
        match self.relation(j, i, key).copied() {
            Some(reverse) if reverse.outward => {
                self.update(i, j, key, false, reverse.magnitude);
            }
            _ => {
                if let Some(rels) = self.data.get_mut(&j).and_then(|adj| adj.get_mut(&i)) {
                    rels.remove(key);
                }
                if let Some(rels) = self.data.get_mut(&i).and_then(|adj| adj.get_mut(&j)) {
                    rels.remove(key);
                }
            }
        }
    }

    /// Clear the outward `key` relationship from `i` to `j`.
    pub fn clear_dir(&mut self, i: VertexId, j: VertexId, key: &str) {
        if !self.contains_undir(i, j, key) {
            return;
        }
        self.clear_one_dir(i, j, key);
        self.prune_pair(i, j);
    }

    /// Remove the `key` relationship between `i` and `j` in both
    /// directions, regardless of who originated it.
    pub fn clear_undir(&mut self, i: VertexId, j: VertexId, key: &str) {
        if !self.contains_undir(i, j, key) {
            return;
        }
        if let Some(rels) = self.data.get_mut(&i).and_then(|adj| adj.get_mut(&j)) {
            rels.remove(key);
        }
        if let Some(rels) = self.data.get_mut(&j).and_then(|adj| adj.get_mut(&i)) {
            rels.remove(key);
        }
        self.prune_pair(i, j);
    }

    /// Clear the `key` relationship per the graph's direction default.
    pub fn clear(&mut self, i: VertexId, j: VertexId, key: &str) {
        if self.directed {
            self.clear_dir(i, j, key);
        } else {
            self.clear_undir(i, j, key);
        }
    }

    /// Clear every outward relationship from `i` to `j`, all keys.
    pub fn clear_edge_dir(&mut self, i: VertexId, j: VertexId) {
        let keys: Vec<String> = match self.data.get(&i).and_then(|adj| adj.get(&j)) {
            Some(rels) => rels.keys().cloned().collect(),
            None => return,
        };
        for key in keys {
            self.clear_one_dir(i, j, &key);
        }
        self.prune_pair(i, j);
    }

    /// Remove every relationship between `i` and `j`, all keys, both
    /// directions.
    pub fn clear_edge_undir(&mut self, i: VertexId, j: VertexId) {
        if !self.contains_edge_undir(i, j) {
            return;
        }
        if let Some(adj) = self.data.get_mut(&i) {
            adj.remove(&j);
        }
        if let Some(adj) = self.data.get_mut(&j) {
            adj.remove(&i);
        }
        self.prune_pair(i, j);
    }

    /// Clear all keys between the pair, per the direction default.
    pub fn clear_edge(&mut self, i: VertexId, j: VertexId) {
        if self.directed {
            self.clear_edge_dir(i, j);
        } else {
            self.clear_edge_undir(i, j);
        }
    }

    /// Clear every outward `key` relationship incident to `i`.
    pub fn clear_incident_dir(&mut self, i: VertexId, key: &str) {
        for n in self.collect_nbrs(i, Direction::Either, None) {
            self.clear_dir(i, n, key);
        }
    }

    /// Remove every `key` relationship incident to `i`, both directions.
    pub fn clear_incident_undir(&mut self, i: VertexId, key: &str) {
        for n in self.collect_nbrs(i, Direction::Either, Some(key)) {
            self.clear_undir(i, n, key);
        }
    }

    /// Clear `key` relationships incident to `i`, per the direction
    /// default.
    pub fn clear_incident(&mut self, i: VertexId, key: &str) {
        if self.directed {
            self.clear_incident_dir(i, key);
        } else {
            self.clear_incident_undir(i, key);
        }
    }

    /// Remove vertex `i` entirely: every record involving it in either
    /// role goes, and neighbors left with no records go with it.
    pub fn clear_vertex(&mut self, i: VertexId) {
        let Some(adj) = self.data.remove(&i) else {
            return;
        };
        log::debug!("clear vertex {i} ({} neighbors)", adj.len());
        for &n in adj.keys() {
            let emptied = match self.data.get_mut(&n) {
                Some(nadj) => {
                    nadj.remove(&i);
                    nadj.is_empty()
                }
                None => false,
            };
            if emptied {
                self.data.remove(&n);
            }
        }
    }

    /// Remove every `key` record across the whole graph, pruning any
    /// neighbor or vertex map this empties.
    pub fn clear_key(&mut self, key: &str) {
        self.data.retain(|_, adj| {
            adj.retain(|_, rels| {
                rels.remove(key);
                !rels.is_empty()
            });
            !adj.is_empty()
        });
    }

    /// Remove everything.
    pub fn clear_all(&mut self) {
        self.data.clear();
    }
}

// A deterministic total order over graphs, so they can live in ordered
// collections. Canonical recursive traversal: vertex IDs, then neighbor
// IDs, then keys, then (outward flag, magnitude), independent of any map
// implementation's native iteration quirks.

fn lex_cmp<K: Ord, V>(
    a: &BTreeMap<K, V>,
    b: &BTreeMap<K, V>,
    value_cmp: impl Fn(&V, &V) -> Ordering,
) -> Ordering {
    let mut ai = a.iter();
    let mut bi = b.iter();
    loop {
        match (ai.next(), bi.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((ka, va)), Some((kb, vb))) => {
                let ord = ka.cmp(kb).then_with(|| value_cmp(va, vb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn cmp_records(a: &KeyMap, b: &KeyMap) -> Ordering {
    lex_cmp(a, b, |ra, rb| {
        ra.outward
            .cmp(&rb.outward)
            .then(ra.magnitude.total_cmp(&rb.magnitude))
    })
}

impl Ord for Graph {
    fn cmp(&self, other: &Self) -> Ordering {
        lex_cmp(&self.data, &other.data, |a, b| lex_cmp(a, b, cmp_records))
    }
}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Graph {}
