use chrono::NaiveDate;

/// Inclusive calendar-day range. Empty when `end` precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of calendar days covered, zero for an inverted range
    pub fn days(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: if self.is_empty() { None } else { Some(self.start) },
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }
}
