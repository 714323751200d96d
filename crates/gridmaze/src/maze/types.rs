use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Integer grid point.
///
/// Used directly as the key for adjacency maps and visited sets.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point reached by moving along `offset`, or `None` if a coordinate
    /// leaves the `i32` range.
    pub fn offset(self, offset: Offset) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(offset.dx)?,
            y: self.y.checked_add(offset.dy)?,
        })
    }

    /// Whether both coordinates lie in `[0, grid_size)`.
    pub fn in_bounds(self, grid_size: u32) -> bool {
        let size = i64::from(grid_size);
        (0..size).contains(&i64::from(self.x)) && (0..size).contains(&i64::from(self.y))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Neighbor direction proposed by the builder for every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Axis steps, diagonals, then the four knight-like offsets.
pub const NEIGHBOR_OFFSETS: [Offset; 12] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(2, 1),
    Offset::new(-2, 1),
    Offset::new(1, 2),
    Offset::new(-1, 2),
];

/// Undirected straight-line edge between two distinct points.
/// `from` is always the lesser point so derived equality is unordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: Point,
    to: Point,
}

impl Edge {
    /// Create a canonical edge. Returns `None` when both endpoints coincide.
    pub fn new(a: Point, b: Point) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self { from: a, to: b }),
            Ordering::Greater => Some(Self { from: b, to: a }),
            Ordering::Equal => None,
        }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.from, self.to]
    }

    pub fn has_endpoint(&self, p: Point) -> bool {
        self.from == p || self.to == p
    }

    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.has_endpoint(other.from) || self.has_endpoint(other.to)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.from, self.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Edge set produced by one build pass.
///
/// Edges keep their insertion order; the index only answers membership.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    index: HashSet<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.index.contains(edge)
    }

    /// Append an edge. Returns false if it was already present.
    pub(crate) fn push(&mut self, edge: Edge) -> bool {
        if !self.index.insert(edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Active nodes, deduplicated in first-appearance order.
    pub fn nodes(&self) -> Vec<Point> {
        active_nodes(&self.edges)
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Every point that is an endpoint of at least one edge, in first-appearance order.
pub fn active_nodes(edges: &[Edge]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(edges.len() * 2);
    edges
        .iter()
        .flat_map(Edge::endpoints)
        .filter(|p| seen.insert(*p))
        .collect()
}

/// Generator tuning knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub grid_size: u32,
    /// Probability that a (cell, offset) pair proposes an edge.
    pub edge_probability: f64,
    /// Candidates with fewer edges are discarded.
    pub min_edges: usize,
    /// Candidate graphs to build before giving up. `None` retries forever.
    pub max_attempts: Option<u32>,
    pub offsets: Vec<Offset>,
}

impl GeneratorConfig {
    pub const DEFAULT_GRID_SIZE: u32 = 12;
    pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.7;
    pub const DEFAULT_MIN_EDGES: usize = 10;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    pub fn with_grid_size(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            edge_probability: Self::DEFAULT_EDGE_PROBABILITY,
            min_edges: Self::DEFAULT_MIN_EDGES,
            max_attempts: Some(Self::DEFAULT_MAX_ATTEMPTS),
            offsets: NEIGHBOR_OFFSETS.to_vec(),
        }
    }
}

/// Generator output: a start and goal joined by at least one path through `edges`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub start: Point,
    pub goal: Point,
    pub edges: Vec<Edge>,
    /// Candidate graphs built, including the accepted one.
    pub attempts: u32,
}

impl Scenario {
    pub fn nodes(&self) -> Vec<Point> {
        active_nodes(&self.edges)
    }
}
