//! Arc arena for loop extraction.
//!
//! Nodes are registered in insertion order and identified by point under the
//! configured policy. Every sub-edge becomes an arc; consumption is a flag on
//! the arc, so the arena itself is never reshaped while walking.

use tracing::warn;

use crate::geom2::{ClipCfg, Point, Polygon};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArcId(pub usize);

#[derive(Clone, Debug)]
pub struct Node {
    pub at: Point,
    /// Outgoing arcs in insertion order.
    pub out: Vec<ArcId>,
}

#[derive(Clone, Copy, Debug)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub used: bool,
}

/// Directed multigraph of sub-edges with per-arc consumption flags.
#[derive(Clone, Debug)]
pub struct ArcGraph {
    pub nodes: Vec<Node>,
    pub arcs: Vec<Arc>,
    cfg: ClipCfg,
}

impl ArcGraph {
    pub fn new(cfg: ClipCfg) -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),
            cfg,
        }
    }

    /// Build from sub-edges. All arc tails are registered first, so node order
    /// follows the first appearance of each point as a tail.
    pub fn from_arcs(pairs: &[(Point, Point)], cfg: ClipCfg) -> Self {
        let mut g = Self::new(cfg);
        for &(from, _) in pairs {
            g.node(from);
        }
        for &(from, to) in pairs {
            g.add_arc(from, to);
        }
        g
    }

    /// Existing node for `p`, or a new one appended at the end.
    pub fn node(&mut self, p: Point) -> NodeId {
        if let Some(k) = self.find(p) {
            return k;
        }
        self.nodes.push(Node { at: p, out: Vec::new() });
        NodeId(self.nodes.len() - 1)
    }

    pub fn find(&self, p: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| self.cfg.same_point(n.at, p))
            .map(NodeId)
    }

    pub fn add_arc(&mut self, from: Point, to: Point) -> ArcId {
        let f = self.node(from);
        let t = self.node(to);
        let id = ArcId(self.arcs.len());
        self.arcs.push(Arc {
            from: f,
            to: t,
            used: false,
        });
        self.nodes[f.0].out.push(id);
        id
    }

    /// Number of outgoing arcs of `n` not yet consumed.
    pub fn remaining(&self, n: NodeId) -> usize {
        self.nodes[n.0]
            .out
            .iter()
            .filter(|a| !self.arcs[a.0].used)
            .count()
    }

    /// Consume the most recently inserted unused outgoing arc of `n`.
    pub fn take(&mut self, n: NodeId) -> Option<NodeId> {
        let arcs = &mut self.arcs;
        let id = self.nodes[n.0]
            .out
            .iter()
            .rev()
            .copied()
            .find(|a| !arcs[a.0].used)?;
        arcs[id.0].used = true;
        Some(arcs[id.0].to)
    }

    pub fn unused_arcs(&self) -> usize {
        self.arcs.iter().filter(|a| !a.used).count()
    }

    /// First node in insertion order with exactly one unconsumed outgoing arc.
    fn next_start(&self) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&n| self.remaining(n) == 1)
    }

    /// Walk from `start`, consuming one arc per step, until back at `start`.
    ///
    /// Returns `None` if the walk reaches a node with no unconsumed arc.
    fn walk(&mut self, start: NodeId) -> Option<Vec<Point>> {
        let mut ring = vec![self.nodes[start.0].at];
        let mut cur = self.take(start)?;
        while cur != start {
            ring.push(self.nodes[cur.0].at);
            cur = self.take(cur)?;
        }
        Some(ring)
    }

    /// Extract closed loops until no node has exactly one unconsumed arc left.
    pub fn extract_loops(&mut self) -> Vec<Polygon> {
        let mut out = Vec::new();
        while let Some(start) = self.next_start() {
            match self.walk(start) {
                Some(ring) => out.push(Polygon::new(ring)),
                None => {
                    warn!(
                        start = start.0,
                        at = ?self.nodes[start.0].at,
                        "split walk hit a dead end; loop dropped"
                    );
                }
            }
        }
        out
    }
}
