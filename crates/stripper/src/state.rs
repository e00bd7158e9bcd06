use crate::{StripError, TriangleId};

/// Per-triangle strip linkage.
///
/// `next` and `prev` start out empty and are set at most once each, by
/// [`StripState::link`]. A triangle with neither set is free.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripState {
    next: Vec<Option<TriangleId>>,
    prev: Vec<Option<TriangleId>>,
}

impl StripState {
    /// Creates linkage for `len` free triangles.
    pub fn new(len: usize) -> Self {
        Self {
            next: vec![None; len],
            prev: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    pub fn next(&self, id: TriangleId) -> Option<TriangleId> {
        self.next.get(id.index()).copied().flatten()
    }

    pub fn prev(&self, id: TriangleId) -> Option<TriangleId> {
        self.prev.get(id.index()).copied().flatten()
    }

    pub fn is_free(&self, id: TriangleId) -> bool {
        self.next(id).is_none() && self.prev(id).is_none()
    }

    /// Appends `to` after `from`.
    ///
    /// Fails if either id is out of range, `from` already has a successor,
    /// `to` already has a predecessor, or the link would close a cycle.
    pub fn link(&mut self, from: TriangleId, to: TriangleId) -> Result<(), StripError> {
        if let Some(&triangle) = [from, to].iter().find(|t| t.index() >= self.len()) {
            return Err(StripError::UnknownTriangle { triangle });
        }
        if self.next(from).is_some() || self.prev(to).is_some() {
            return Err(StripError::AlreadyLinked { from, to });
        }
        // `to` heads its chain, so a cycle needs `from` to be reachable from it.
        if from == to || (self.next(to).is_some() && self.chain(to).any(|t| t == from)) {
            return Err(StripError::WouldCycle { from, to });
        }
        self.next[from.index()] = Some(to);
        self.prev[to.index()] = Some(from);
        Ok(())
    }

    /// Follows `next` links starting at `start`.
    pub fn chain(&self, start: TriangleId) -> Strip<'_> {
        Strip {
            state: self,
            current: (start.index() < self.len()).then_some(start),
            steps: self.len(),
        }
    }

    /// Enumerates the strips encoded by the linkage.
    ///
    /// Nothing is cached; every call walks the current links again.
    pub fn strips(&self) -> Strips<'_> {
        Strips {
            state: self,
            cursor: 0,
        }
    }
}

/// Iterator over the strips of a [`StripState`], one per strip head.
#[derive(Debug, Clone)]
pub struct Strips<'a> {
    state: &'a StripState,
    cursor: usize,
}

impl<'a> Iterator for Strips<'a> {
    type Item = Strip<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.state.len() {
            let id = TriangleId(self.cursor);
            self.cursor += 1;
            if self.state.prev(id).is_none() {
                return Some(self.state.chain(id));
            }
        }
        None
    }
}

/// The triangles of a single strip, head first.
#[derive(Debug, Clone)]
pub struct Strip<'a> {
    state: &'a StripState,
    current: Option<TriangleId>,
    // Bounds the walk by the triangle count.
    steps: usize,
}

impl<'a> Iterator for Strip<'a> {
    type Item = TriangleId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.steps == 0 {
            self.current = None;
            return None;
        }
        self.steps -= 1;
        self.current = self.state.next(current);
        Some(current)
    }
}
