//! Per-graph accumulation of result records.
//!
//! Graphs are kept in first-announcement order; records within a graph
//! keep log order.

use crate::models::ResultRecord;
use std::collections::HashMap;

/// Result records grouped by graph identifier
#[derive(Debug, Clone, Default)]
pub struct GroupedStore {
    groups: Vec<(String, Vec<ResultRecord>)>,
    index: HashMap<String, usize>,
}

impl GroupedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph; returns `false` if it was already present
    pub fn ensure_graph(&mut self, graph: &str) -> bool {
        if self.index.contains_key(graph) {
            return false;
        }
        self.index.insert(graph.to_string(), self.groups.len());
        self.groups.push((graph.to_string(), Vec::new()));
        true
    }

    /// Append a record to its graph's sequence, registering the graph if needed
    pub fn push(&mut self, record: ResultRecord) {
        let slot = match self.index.get(&record.graph) {
            Some(&slot) => slot,
            None => {
                self.ensure_graph(&record.graph);
                self.groups.len() - 1
            }
        };
        self.groups[slot].1.push(record);
    }

    pub fn get(&self, graph: &str) -> Option<&[ResultRecord]> {
        self.index
            .get(graph)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Iterate `(graph, records)` pairs in first-announcement order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ResultRecord])> {
        self.groups
            .iter()
            .map(|(graph, records)| (graph.as_str(), records.as_slice()))
    }

    pub fn graph_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All records across graphs, concatenated in store order
    pub fn flatten(&self) -> Vec<ResultRecord> {
        self.groups
            .iter()
            .flat_map(|(_, records)| records.iter().cloned())
            .collect()
    }
}
