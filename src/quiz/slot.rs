use thiserror::Error;

/// Number of flags shown per round.
pub const SLOT_COUNT: usize = 3;

/// One of the three flag positions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u8);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("slot index {0} is out of range (expected 0..{SLOT_COUNT})")]
    OutOfRange(usize),
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(0), Slot(1), Slot(2)];

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Next slot to the right, wrapping around.
    pub fn next(self) -> Slot {
        Slot((self.0 + 1) % SLOT_COUNT as u8)
    }

    /// Previous slot to the left, wrapping around.
    pub fn prev(self) -> Slot {
        Slot((self.0 + SLOT_COUNT as u8 - 1) % SLOT_COUNT as u8)
    }
}

impl TryFrom<usize> for Slot {
    type Error = SlotError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < SLOT_COUNT {
            Ok(Slot(index as u8))
        } else {
            Err(SlotError::OutOfRange(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_range() {
        assert_eq!(Slot::try_from(0).map(Slot::index), Ok(0));
        assert_eq!(Slot::try_from(2).map(Slot::index), Ok(2));
        assert_eq!(Slot::try_from(3), Err(SlotError::OutOfRange(3)));
        assert_eq!(Slot::try_from(usize::MAX), Err(SlotError::OutOfRange(usize::MAX)));
    }

    #[test]
    fn test_cursor_wraps() {
        assert_eq!(Slot::ALL[2].next(), Slot::ALL[0]);
        assert_eq!(Slot::ALL[0].prev(), Slot::ALL[2]);
        assert_eq!(Slot::ALL[1].next(), Slot::ALL[2]);
    }
}
