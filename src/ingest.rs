//! Interaction ingestion
//!
//! Turns raw collaboration events between participants into a labeled, weighted
//! [`GraphStore`]. Repeated interactions between the same ordered pair are summed
//! into a single edge weight here, before anything reaches the store.

use crate::graph::{Backing, GraphResult, GraphStore, GraphView, VertexId, VertexTable};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Kind of collaboration event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Commented on someone else's issue or pull request
    Comment,
    /// Closed someone else's issue
    Close,
    /// Reviewed someone else's pull request
    Review,
    /// Merged someone else's pull request
    Merge,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 4] = [
        InteractionKind::Comment,
        InteractionKind::Close,
        InteractionKind::Review,
        InteractionKind::Merge,
    ];

    /// Edge weight contributed by one event of this kind
    pub fn weight(self) -> f64 {
        match self {
            InteractionKind::Comment => 2.0,
            InteractionKind::Close => 3.0,
            InteractionKind::Review => 4.0,
            InteractionKind::Merge => 5.0,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionKind::Comment => "comment",
            InteractionKind::Close => "close",
            InteractionKind::Review => "review",
            InteractionKind::Merge => "merge",
        };
        write!(f, "{}", name)
    }
}

/// One event: `source` acted on something owned by `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub source: String,
    pub target: String,
    pub kind: InteractionKind,
}

impl Interaction {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: InteractionKind) -> Self {
        Interaction {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Accumulates interactions and builds graph views over them.
///
/// Participants get dense vertex ids in first-seen order. Self-interactions register
/// the participant but produce no edge.
#[derive(Debug, Default, Clone)]
pub struct InteractionGraphBuilder {
    ids: FxHashMap<String, VertexId>,
    logins: Vec<String>,
    interactions: Vec<(VertexId, VertexId, InteractionKind)>,
}

impl InteractionGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn participant_id(&mut self, login: &str) -> VertexId {
        if let Some(&id) = self.ids.get(login) {
            return id;
        }
        let id = self.logins.len();
        self.ids.insert(login.to_string(), id);
        self.logins.push(login.to_string());
        id
    }

    /// Record one event
    pub fn record(&mut self, interaction: &Interaction) {
        let source = self.participant_id(&interaction.source);
        let target = self.participant_id(&interaction.target);
        if source != target {
            self.interactions.push((source, target, interaction.kind));
        }
    }

    pub fn participant_count(&self) -> usize {
        self.logins.len()
    }

    /// Recorded events, self-interactions excluded
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// Vertex id of a login, if it has been seen
    pub fn vertex_of(&self, login: &str) -> Option<VertexId> {
        self.ids.get(login).copied()
    }

    /// Summed weight per ordered pair over the selected kinds, in first-seen order
    pub fn aggregate(&self, kinds: &[InteractionKind]) -> IndexMap<(VertexId, VertexId), f64> {
        let mut weights: IndexMap<(VertexId, VertexId), f64> = IndexMap::new();
        for &(u, v, kind) in &self.interactions {
            if kinds.contains(&kind) {
                *weights.entry((u, v)).or_insert(0.0) += kind.weight();
            }
        }
        weights
    }

    /// Graph over every participant with the selected kinds as edges
    pub fn build(&self, backing: Backing, kinds: &[InteractionKind]) -> GraphResult<Box<dyn GraphStore>> {
        let vertices = VertexTable::with_labeler(self.logins.len(), |i| self.logins[i].clone());
        let mut graph = backing.create_with_vertices(vertices);

        let weights = self.aggregate(kinds);
        for (&(u, v), &w) in &weights {
            graph.add_edge(u, v)?;
            graph.set_edge_weight(u, v, w)?;
        }

        debug!("Aggregated {} interactions into {} edges", self.interactions.len(), weights.len());
        info!(
            "Built {} graph with {} vertices and {} edges",
            backing,
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Comment interactions only
    pub fn comments_graph(&self, backing: Backing) -> GraphResult<Box<dyn GraphStore>> {
        self.build(backing, &[InteractionKind::Comment])
    }

    /// Issue closures only
    pub fn closures_graph(&self, backing: Backing) -> GraphResult<Box<dyn GraphStore>> {
        self.build(backing, &[InteractionKind::Close])
    }

    /// Reviews and merges
    pub fn reviews_graph(&self, backing: Backing) -> GraphResult<Box<dyn GraphStore>> {
        self.build(backing, &[InteractionKind::Review, InteractionKind::Merge])
    }

    /// Every kind of interaction, weights summed across kinds
    pub fn integrated_graph(&self, backing: Backing) -> GraphResult<Box<dyn GraphStore>> {
        self.build(backing, &InteractionKind::ALL)
    }
}

impl<'a> Extend<&'a Interaction> for InteractionGraphBuilder {
    fn extend<I: IntoIterator<Item = &'a Interaction>>(&mut self, iter: I) {
        for interaction in iter {
            self.record(interaction);
        }
    }
}

impl<'a> FromIterator<&'a Interaction> for InteractionGraphBuilder {
    fn from_iter<I: IntoIterator<Item = &'a Interaction>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
