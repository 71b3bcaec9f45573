//! RNG module - piece generation
//!
//! The engine pulls piece kinds from an injected [`ShapeSource`]. The default is
//! [`UniformSource`], which picks each kind independently and uniformly at random.
//! [`BagSource`] (7-bag) and [`SequenceSource`] (scripted, cycling) are available
//! for hosts that want a different feel or fully deterministic games.
//!
//! [`PieceQueue`] wraps a source and always holds exactly one look-ahead piece.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// An infinite supply of piece kinds
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random choice among the seven kinds, with no history
#[derive(Debug, Clone)]
pub struct UniformSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> UniformSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSource<StdRng> {
    /// Deterministic source; the same seed yields the same sequence
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ShapeSource for UniformSource<R> {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// 7-bag generator: every run of seven draws contains each kind exactly once
#[derive(Debug, Clone)]
pub struct BagSource<R = StdRng> {
    rng: R,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl<R: Rng> BagSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            bag: PieceKind::ALL,
            // Forces a shuffle on the first draw.
            bag_index: PieceKind::ALL.len(),
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }
}

impl BagSource<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ShapeSource for BagSource<R> {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Scripted source that repeats a fixed sequence forever
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// An empty sequence falls back to `PieceKind::ALL` so the source stays infinite.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds = PieceKind::ALL.to_vec();
        }
        Self { kinds, index: 0 }
    }

    /// Source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

/// Source plus a single look-ahead piece
pub struct PieceQueue {
    source: Box<dyn ShapeSource + Send>,
    next: PieceKind,
}

impl PieceQueue {
    /// Create a queue, drawing the first look-ahead immediately
    pub fn new(source: impl ShapeSource + Send + 'static) -> Self {
        let mut source: Box<dyn ShapeSource + Send> = Box::new(source);
        let next = source.next_kind();
        Self { source, next }
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the look-ahead piece and generate a fresh one behind it
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = self.source.next_kind();
        kind
    }
}

impl fmt::Debug for PieceQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceQueue")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
