use crate::types::RecordId;

/// Draws candidate record ids from the signed 32-bit space.
///
/// The cursor increments between draws for insertion locality in the
/// sorted record table, and is reset to a random position every
/// `interval`th draw so long monotonic runs cannot skew the tree. The
/// allocator never checks for collisions itself; the store verifies
/// each candidate against the record table and asks for a [`redraw`]
/// when it is taken.
///
/// [`redraw`]: IdAllocator::redraw
#[derive(Debug)]
pub(crate) struct IdAllocator {
    cursor: i32,
    draws: u32,
    interval: u32,
}

impl IdAllocator {
    pub(crate) fn new(interval: u32) -> Self {
        Self {
            cursor: rand::random(),
            draws: 0,
            interval: interval.max(1),
        }
    }

    /// Next candidate id.
    pub(crate) fn next(&mut self) -> RecordId {
        self.draws = self.draws.wrapping_add(1);
        if self.draws % self.interval == 0 {
            self.cursor = rand::random();
        } else {
            self.cursor = self.cursor.wrapping_add(1);
        }
        RecordId::new(self.cursor)
    }

    /// Random replacement draw after a collision.
    pub(crate) fn redraw(&mut self) -> RecordId {
        self.cursor = rand::random();
        RecordId::new(self.cursor)
    }
}
