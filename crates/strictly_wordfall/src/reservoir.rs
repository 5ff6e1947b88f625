//! Off-screen supply of rows that replenishes the visible grid.

use crate::error::EngineError;
use crate::generator::GridGenerator;
use crate::types::Row;
use crate::word_list::WordList;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

/// Producer of fresh filler rows.
pub trait RowSource {
    /// Returns up to `count` new rows. An empty batch means the source is exhausted.
    fn next_rows(&mut self, count: usize) -> Vec<Row>;
}

/// Default row source: random word batches run through a [`GridGenerator`].
#[derive(Debug)]
pub struct WordBatchSource<'a, R: ?Sized> {
    list: &'a WordList,
    generator: GridGenerator,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> WordBatchSource<'a, R> {
    /// Creates a source drawing words from `list`.
    pub fn new(list: &'a WordList, generator: GridGenerator, rng: &'a mut R) -> Self {
        Self { list, generator, rng }
    }
}

impl<R: Rng + ?Sized> RowSource for WordBatchSource<'_, R> {
    fn next_rows(&mut self, count: usize) -> Vec<Row> {
        self.generator.random_rows(self.list, count, self.rng)
    }
}

/// Queue of pre-generated rows, drained from the front and refilled at the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerReservoir {
    rows: VecDeque<Row>,
    low_water_mark: usize,
    batch_rows: usize,
}

impl FillerReservoir {
    /// Creates an empty reservoir.
    pub fn new(low_water_mark: usize, batch_rows: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            low_water_mark,
            batch_rows: batch_rows.max(1),
        }
    }

    /// Creates a reservoir pre-loaded with `rows`.
    pub fn with_rows(
        rows: impl IntoIterator<Item = Row>,
        low_water_mark: usize,
        batch_rows: usize,
    ) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::new(low_water_mark, batch_rows)
        }
    }

    /// Rows currently queued.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are queued.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Threshold below which the reservoir is refilled.
    pub fn low_water_mark(&self) -> usize {
        self.low_water_mark
    }

    /// Rows requested per refill batch.
    pub fn batch_rows(&self) -> usize {
        self.batch_rows
    }

    /// Next row to be taken, if any.
    pub fn front(&self) -> Option<&Row> {
        self.rows.front()
    }

    /// Returns true once the reservoir has fallen below its low-water mark.
    pub fn needs_refill(&self) -> bool {
        self.rows.len() < self.low_water_mark
    }

    /// Appends batches from `source` until at least `min_rows` rows are queued.
    ///
    /// Returns the number of rows added.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyReservoir`] if the source runs dry first.
    #[instrument(skip(self, source), fields(len = self.rows.len()))]
    pub fn ensure<S: RowSource + ?Sized>(
        &mut self,
        min_rows: usize,
        source: &mut S,
    ) -> Result<usize, EngineError> {
        let mut added = 0;
        while self.rows.len() < min_rows {
            let batch = source.next_rows(self.batch_rows);
            if batch.is_empty() {
                warn!(added, min_rows, "Row source exhausted");
                return Err(EngineError::EmptyReservoir);
            }
            added += batch.len();
            self.rows.extend(batch);
        }
        if added > 0 {
            debug!(added, len = self.rows.len(), "Reservoir replenished");
        }
        Ok(added)
    }

    /// Refills up to the low-water mark.
    pub fn replenish<S: RowSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<usize, EngineError> {
        self.ensure(self.low_water_mark, source)
    }

    /// Pops the front row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyReservoir`] when nothing is queued; callers
    /// must [`ensure`](Self::ensure) first.
    pub fn take(&mut self) -> Result<Row, EngineError> {
        self.rows.pop_front().ok_or(EngineError::EmptyReservoir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Hands out rows of a single repeated letter, `limit` rows in total.
    struct CountingSource {
        width: usize,
        handed_out: usize,
        limit: usize,
    }

    impl RowSource for CountingSource {
        fn next_rows(&mut self, count: usize) -> Vec<Row> {
            let count = count.min(self.limit - self.handed_out);
            self.handed_out += count;
            (0..count).map(|_| vec![Tile::Letter('Z'); self.width]).collect()
        }
    }

    #[test]
    fn test_take_from_empty_fails() {
        let mut reservoir = FillerReservoir::new(1, 3);
        assert_eq!(reservoir.take(), Err(EngineError::EmptyReservoir));
    }

    #[test]
    fn test_ensure_appends_whole_batches() {
        let mut reservoir = FillerReservoir::new(2, 3);
        let mut source = CountingSource { width: 4, handed_out: 0, limit: 100 };
        assert_eq!(reservoir.ensure(4, &mut source), Ok(6));
        assert_eq!(reservoir.len(), 6);
        assert_eq!(reservoir.ensure(4, &mut source), Ok(0));
    }

    #[test]
    fn test_exhausted_source_reports_empty() {
        let mut reservoir = FillerReservoir::new(5, 2);
        let mut source = CountingSource { width: 4, handed_out: 0, limit: 3 };
        assert_eq!(reservoir.replenish(&mut source), Err(EngineError::EmptyReservoir));
        assert_eq!(reservoir.len(), 3);
    }

    #[test]
    fn test_fifo_order() {
        let first = vec![Tile::Letter('A')];
        let second = vec![Tile::Letter('B')];
        let mut reservoir = FillerReservoir::with_rows([first.clone(), second.clone()], 1, 1);
        assert_eq!(reservoir.take(), Ok(first));
        assert!(!reservoir.needs_refill());
        assert_eq!(reservoir.take(), Ok(second));
        assert!(reservoir.needs_refill());
    }

    #[test]
    fn test_word_batch_source() {
        let list = WordList::new(4, ["WORD", "LIST", "GAME"]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut source = WordBatchSource::new(&list, GridGenerator::new(4, 0.0), &mut rng);
        let mut reservoir = FillerReservoir::new(3, 4);
        reservoir.replenish(&mut source).unwrap();
        assert_eq!(reservoir.len(), 4);
        assert!(reservoir.front().is_some_and(|r| r.len() == 4));
    }
}
