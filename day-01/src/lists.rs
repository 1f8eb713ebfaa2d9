use crate::sort;

/// The two columns of location IDs, kept in lockstep so both always hold `count` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    first: Vec<i64>,
    second: Vec<i64>,
}

impl LocationLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, (first, second): (i64, i64)) {
        self.first.push(first);
        self.second.push(second);
    }

    pub fn count(&self) -> usize {
        self.first.len()
    }

    pub fn first(&self) -> &[i64] {
        &self.first
    }

    pub fn second(&self) -> &[i64] {
        &self.second
    }

    // each column on its own, the row pairing is lost
    pub fn sort(&mut self) {
        sort::sort(&mut self.first);
        sort::sort(&mut self.second);
    }
}

impl Extend<(i64, i64)> for LocationLists {
    fn extend<T: IntoIterator<Item = (i64, i64)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let len = iter.size_hint().0;

        self.first.reserve(len);
        self.second.reserve(len);

        iter.for_each(|pair| self.push(pair));
    }
}

impl FromIterator<(i64, i64)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut lists = Self::new();
        lists.extend(iter);
        lists
    }
}
