//! Combinations of distinct indices.
//!
//! A [Combinations] iterator yields, lazily, every strictly increasing sequence of `size` indices drawn from `[0, bound)`, in lexicographic order.
//! Only the sequence to be yielded next is held, and so an iterator takes space proportional to `size` regardless of how many sequences are yielded.
//!
//! ```rust
//! # use roster_sat::encoder::combinations::combinations;
//! let pairs = combinations(2, 4).collect::<Vec<_>>();
//! assert_eq!(
//!     pairs,
//!     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
//! );
//!
//! assert_eq!(combinations(3, 2).count(), 0);
//! ```
//!
//! Edge cases:
//! - If `bound < size` there are no combinations, and so nothing is yielded.
//!   [Combinations::checked] reports this case as an error instead.
//! - If `size` is zero the empty sequence is the only combination, and is yielded once.

use crate::types::err::{self};

/// An iterator over combinations of `size` distinct indices below `bound`.
#[derive(Clone, Debug)]
pub struct Combinations {
    size: usize,
    bound: usize,
    next: Option<Vec<usize>>,
}

impl Combinations {
    /// Combinations of `size` distinct indices below `bound`, which are none if `bound < size`.
    pub fn new(size: usize, bound: usize) -> Self {
        Self {
            size,
            bound,
            next: (size <= bound).then(|| (0..size).collect()),
        }
    }

    /// Combinations of `size` distinct indices below `bound`, or an error if `bound < size`.
    pub fn checked(size: usize, bound: usize) -> Result<Self, err::CombinationError> {
        match size <= bound {
            true => Ok(Self::new(size, bound)),
            false => Err(err::CombinationError::Bound { size, bound }),
        }
    }

    /// The successor of a combination, in lexicographic order.
    ///
    /// The rightmost index which has not reached its maximum is incremented, and every index to the right is reset to follow it.
    fn successor(&self, combination: &[usize]) -> Option<Vec<usize>> {
        let offset = self.bound - self.size;
        let position = (0..self.size).rev().find(|&i| combination[i] < offset + i)?;

        let mut successor = combination.to_vec();
        successor[position] += 1;
        for i in position + 1..self.size {
            successor[i] = successor[i - 1] + 1;
        }
        Some(successor)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.successor(&current);
        Some(current)
    }
}

/// Combinations of `size` distinct indices below `bound`, see [Combinations::new].
pub fn combinations(size: usize, bound: usize) -> Combinations {
    Combinations::new(size, bound)
}
