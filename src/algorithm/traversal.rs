use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Depth-first and breadth-first traversals.
///
/// Both start from `start` and yield vertices in the order they are visited.
/// Among several candidates the smallest vertex goes first.
/// When `end` is given, the traversal stops right after visiting it.
/// A `start` outside the graph yields nothing.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    fn dfs_iter(
        &self,
        start: &Self::Vertex,
        end: Option<&Self::Vertex>,
    ) -> Box<dyn Iterator<Item = Self::Vertex> + '_> {
        Box::new(DfsIter::new(self, start, end))
    }

    fn dfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex> {
        self.dfs_iter(start, end).collect()
    }

    fn bfs_iter(
        &self,
        start: &Self::Vertex,
        end: Option<&Self::Vertex>,
    ) -> Box<dyn Iterator<Item = Self::Vertex> + '_> {
        Box::new(BfsIter::new(self, start, end))
    }

    fn bfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex> {
        self.bfs_iter(start, end).collect()
    }
}

impl<G: QueryableGraph> Traversal for G {}

struct DfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    end: Option<G::Vertex>,
    stack: Vec<G::Vertex>,
    visited: HashSet<G::Vertex, RandomState>,
    finished: bool,
}

impl<'a, G> DfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &G::Vertex, end: Option<&G::Vertex>) -> Self {
        let stack = if graph.contains_vertex(start) {
            vec![start.clone()]
        } else {
            vec![]
        };
        Self {
            graph,
            end: end.cloned(),
            stack,
            visited: HashSet::with_hasher(RandomState::new()),
            finished: false,
        }
    }
}

impl<'a, G> Iterator for DfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some(cur) = self.stack.pop() {
            if !self.visited.insert(cur.clone()) {
                continue;
            }
            if self.end.as_ref() == Some(&cur) {
                self.finished = true;
            } else {
                // pushed in descending order so that the smallest pops first
                let mut next: Vec<_> = self
                    .graph
                    .successors(&cur)
                    .filter(|v| !self.visited.contains(v))
                    .collect();
                next.reverse();
                self.stack.extend(next);
            }
            return Some(cur);
        }
        None
    }
}

struct BfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    end: Option<G::Vertex>,
    queue: VecDeque<G::Vertex>,
    // visited or waiting in `queue`
    discovered: HashSet<G::Vertex, RandomState>,
    finished: bool,
}

impl<'a, G> BfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &G::Vertex, end: Option<&G::Vertex>) -> Self {
        let mut res = Self {
            graph,
            end: end.cloned(),
            queue: VecDeque::new(),
            discovered: HashSet::with_hasher(RandomState::new()),
            finished: false,
        };
        if graph.contains_vertex(start) {
            res.queue.push_back(start.clone());
            res.discovered.insert(start.clone());
        }
        res
    }
}

impl<'a, G> Iterator for BfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let cur = self.queue.pop_front()?;
        if self.end.as_ref() == Some(&cur) {
            self.finished = true;
        } else {
            for v in self.graph.successors(&cur) {
                if self.discovered.insert(v.clone()) {
                    self.queue.push_back(v);
                }
            }
        }
        Some(cur)
    }
}
