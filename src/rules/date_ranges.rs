use chrono::NaiveDate;

use crate::cards::bucket::Bucket;
use crate::error::RuleError;
use crate::utilities::constants::DATE_RANGES;

/// Inclusive on both ends. A range without an end is open towards the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    fn overlaps(&self, other: &DateRange) -> bool {
        let starts_before_other_ends = other.end.map_or(true, |end| self.start <= end);
        let other_starts_before_end = self.end.map_or(true, |end| other.start <= end);
        starts_before_other_ends && other_starts_before_end
    }
}

/// Date buckets in declaration order. Construction rejects overlapping
/// ranges, so at most one bucket can ever match a date.
#[derive(Debug, Clone)]
pub struct DateRangeTable {
    ranges: Vec<(Bucket, DateRange)>,
}

impl DateRangeTable {
    pub fn new(ranges: Vec<(Bucket, DateRange)>) -> Result<Self, RuleError> {
        for (index, (bucket, range)) in ranges.iter().enumerate() {
            if !bucket.is_date_range() {
                return Err(RuleError::NotADateBucket(*bucket));
            }
            if range.end.is_some_and(|end| end < range.start) {
                return Err(RuleError::InvertedRange(*bucket));
            }
            for (earlier_bucket, earlier_range) in &ranges[..index] {
                if earlier_bucket == bucket {
                    return Err(RuleError::DuplicateBucket(*bucket));
                }
                if earlier_range.overlaps(range) {
                    return Err(RuleError::OverlappingRanges(*earlier_bucket, *bucket));
                }
            }
        }
        Ok(DateRangeTable { ranges })
    }

    /// The table the site is built with.
    pub fn default_ranges() -> Result<Self, RuleError> {
        let ranges = DATE_RANGES
            .iter()
            .map(|(key, start, end)| -> Result<(Bucket, DateRange), RuleError> {
                let bucket: Bucket = key
                    .parse()
                    .map_err(|_| RuleError::UnknownBucket(key.to_string()))?;
                let start = parse_date(start)?;
                let end = end.map(parse_date).transpose()?;
                Ok((bucket, DateRange::new(start, end)))
            })
            .collect::<Result<Vec<_>, RuleError>>()?;
        DateRangeTable::new(ranges)
    }

    pub fn bucket_for(&self, date: NaiveDate) -> Option<Bucket> {
        self.ranges
            .iter()
            .find(|(_, range)| range.contains(date))
            .map(|(bucket, _)| *bucket)
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, RuleError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| RuleError::InvalidDate(date.to_string()))
}
