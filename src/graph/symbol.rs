use std::collections::HashMap;

use crate::graph::traits::MutableGraph;
use crate::{Error, Result};

/// Adapter mapping string names to dense vertex indices over any unweighted
/// graph flavour. The wrapped graph only ever sees indices.
#[derive(Debug, Clone)]
pub struct SymbolGraph<G>
where
    G: MutableGraph,
{
    indices: HashMap<String, usize>,
    names: Vec<String>,
    graph: G,
}

impl<G> SymbolGraph<G>
where
    G: MutableGraph,
{
    /// Builds the graph from adjacency lines of the form
    /// `vertex<sep>neighbor<sep>neighbor...`. Names are numbered in order of
    /// first appearance; blank lines are skipped.
    pub fn from_adjacency_lines<'a, I>(lines: I, sep: &str) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows: Vec<Vec<&str>> = lines
            .into_iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.split(sep).filter(|name| !name.is_empty()).collect())
            .collect();

        let mut indices = HashMap::new();
        let mut names = Vec::new();
        for name in rows.iter().flatten() {
            if !indices.contains_key(*name) {
                indices.insert(name.to_string(), names.len());
                names.push(name.to_string());
            }
        }

        let mut graph = G::with_vertices(names.len());
        for row in &rows {
            if let Some((head, tail)) = row.split_first() {
                let v = indices[*head];
                for name in tail {
                    graph.insert_edge(v, indices[*name])?;
                }
            }
        }
        log::debug!("symbol graph built with {} names", names.len());

        Ok(SymbolGraph {
            indices,
            names,
            graph,
        })
    }

    /// Returns true if `name` is a vertex
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Index of the vertex called `name`
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.indices.get(name).copied().ok_or(Error::LabelNotFound)
    }

    /// Name of vertex `v`
    pub fn name_of(&self, v: usize) -> Result<&str> {
        self.names
            .get(v)
            .map(String::as_str)
            .ok_or(Error::InvalidVertex(v))
    }

    /// The underlying index-based graph
    pub fn graph(&self) -> &G {
        &self.graph
    }
}
