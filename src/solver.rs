use std::cmp::Ordering;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::board::{Board, Move};
use crate::error::SolverError;
use crate::pq::MinPq;

#[derive(Debug)]
struct SearchNode {
    board: Board,
    parent: Option<Rc<SearchNode>>,
    moves: u32,
}

impl SearchNode {
    fn root(board: Board) -> Rc<Self> {
        Rc::new(Self {
            board,
            parent: None,
            moves: 0,
        })
    }

    fn child(parent: &Rc<Self>, board: Board) -> Rc<Self> {
        Rc::new(Self {
            board,
            parent: Some(Rc::clone(parent)),
            moves: parent.moves + 1,
        })
    }

    /// A* rank: Manhattan plus moves, then Hamming plus moves.
    fn priority(&self) -> (u32, u32) {
        (
            self.board.manhattan() + self.moves,
            self.board.hamming() + self.moves,
        )
    }

    fn path(&self) -> Vec<Board> {
        let mut path: Vec<Board> = std::iter::successors(Some(self), |node| node.parent.as_deref())
            .map(|node| node.board.clone())
            .collect();
        path.reverse();
        path
    }
}

// Equality here is rank equality; it exists only to order the queue.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority() == other.priority()
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

enum Step {
    Goal(Rc<SearchNode>),
    Expanded,
    Empty,
}

struct SearchContext {
    queue: MinPq<Rc<SearchNode>>,
    previous: Option<Rc<SearchNode>>,
    expanded: usize,
    enqueued: usize,
}

impl SearchContext {
    fn new(seed: Board) -> Self {
        let mut queue = MinPq::new();
        queue.insert(SearchNode::root(seed));
        Self {
            queue,
            previous: None,
            expanded: 0,
            enqueued: 1,
        }
    }

    fn step(&mut self) -> Step {
        let Some(node) = self.queue.extract_min() else {
            return Step::Empty;
        };
        if node.board.is_goal() {
            return Step::Goal(node);
        }

        for neighbor in node.board.neighbors() {
            // Never undo the slide that produced the last extracted board.
            if self
                .previous
                .as_ref()
                .is_some_and(|previous| previous.board == neighbor)
            {
                continue;
            }
            self.queue.insert(SearchNode::child(&node, neighbor));
            self.enqueued += 1;
        }

        self.expanded += 1;
        self.previous = Some(node);
        Step::Expanded
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub expanded: usize,
    pub enqueued: usize,
    pub twin_expanded: usize,
    pub twin_enqueued: usize,
}

impl SolverStats {
    fn collect(primary: &SearchContext, twin: &SearchContext) -> Self {
        Self {
            expanded: primary.expanded,
            enqueued: primary.enqueued,
            twin_expanded: twin.expanded,
            twin_enqueued: twin.enqueued,
        }
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded + self.twin_expanded
    }
}

/// A* from the initial board and its twin in lockstep; only one of the two
/// can reach the goal.
#[derive(Debug)]
pub struct Solver {
    solution: Option<Rc<SearchNode>>,
    stats: SolverStats,
}

impl Solver {
    pub fn new(initial: &Board) -> Result<Self, SolverError> {
        Self::run(initial, None)
    }

    /// Like [`Solver::new`], but gives up once both searches together have
    /// expanded more than `max_expansions` nodes.
    pub fn with_max_expansions(initial: &Board, max_expansions: usize) -> Result<Self, SolverError> {
        Self::run(initial, Some(max_expansions))
    }

    fn run(initial: &Board, limit: Option<usize>) -> Result<Self, SolverError> {
        let mut primary = SearchContext::new(initial.clone());
        let mut twin = SearchContext::new(initial.twin());

        let solution = loop {
            if let Some(max) = limit {
                let expanded = primary.expanded + twin.expanded;
                if expanded > max {
                    warn!(expanded, max, "Expansion limit reached");
                    return Err(SolverError::ExpansionLimit { expanded });
                }
            }

            let primary_empty = match primary.step() {
                Step::Goal(node) => break Some(node),
                Step::Expanded => false,
                Step::Empty => true,
            };
            match twin.step() {
                Step::Goal(_) => break None,
                Step::Empty if primary_empty => return Err(SolverError::Exhausted),
                _ => {}
            }
        };

        let stats = SolverStats::collect(&primary, &twin);
        debug!(
            solvable = solution.is_some(),
            moves = solution.as_ref().map(|node| node.moves),
            expanded = stats.expanded,
            twin_expanded = stats.twin_expanded,
            "Search finished"
        );

        Ok(Self { solution, stats })
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    pub fn moves(&self) -> Option<u32> {
        self.solution.as_ref().map(|node| node.moves)
    }

    pub fn solution(&self) -> Option<Vec<Board>> {
        self.solution.as_ref().map(|node| node.path())
    }

    pub fn directions(&self) -> Option<Vec<Move>> {
        let boards = self.solution()?;
        boards
            .windows(2)
            .map(|pair| Board::move_between(&pair[0], &pair[1]))
            .collect()
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }
}

impl<'a> TryFrom<Option<&'a Board>> for Solver {
    type Error = SolverError;

    fn try_from(initial: Option<&'a Board>) -> Result<Self, Self::Error> {
        Self::new(initial.ok_or(SolverError::MissingBoard)?)
    }
}
