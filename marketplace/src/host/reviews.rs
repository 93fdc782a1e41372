//! Review aggregation for the dashboard reviews tab.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use super::types::Review;

/// Average and per-star counts over a set of reviews.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReviewSummary {
    pub count: usize,
    pub average: Option<f64>,
    /// Index 0 holds one-star reviews, index 4 five-star reviews.
    pub histogram: [usize; 5],
}

impl ReviewSummary {
    /// Summarize reviews, ignoring ratings outside 1..=5.
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut histogram = [0usize; 5];
        let mut total = 0u32;
        let mut count = 0u32;
        for review in reviews {
            if !(1..=5).contains(&review.rating) {
                continue;
            }
            histogram[usize::from(review.rating - 1)] += 1;
            total += u32::from(review.rating);
            count += 1;
        }
        let average = (count > 0).then(|| f64::from(total) / f64::from(count));
        Self { count: histogram.iter().sum(), average, histogram }
    }

    /// Share of reviews with `stars` stars, as a percentage.
    #[must_use]
    pub fn percent(&self, stars: u8) -> u32 {
        if self.count == 0 || !(1..=5).contains(&stars) {
            return 0;
        }
        let n = self.histogram[usize::from(stars - 1)];
        u32::try_from(n * 100 / self.count).unwrap_or(100)
    }
}
