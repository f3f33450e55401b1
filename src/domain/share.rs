//! Share and share set types

use crate::field::FieldElement;

use super::Threshold;

/// A point `(x, y)` on the sharing polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Share {
    #[must_use]
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }
}

/// All shares produced by one split, with the threshold they were generated for
#[derive(Debug, Clone)]
pub struct ShareSet {
    threshold: Threshold,
    shares: Vec<Share>,
}

impl ShareSet {
    pub(crate) fn new(threshold: Threshold, shares: Vec<Share>) -> Self {
        Self { threshold, shares }
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl IntoIterator for ShareSet {
    type Item = Share;
    type IntoIter = std::vec::IntoIter<Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}
