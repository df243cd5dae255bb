//! Display data derived from stored reviews: testimonial cards and aggregate stats.
use crate::models::rating::Rating;
use crate::models::review::Review;

pub const DEFAULT_COMPANY_LABEL: &str = "Client";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

impl Star {
    pub fn color(self) -> &'static str {
        match self {
            Star::Filled => "#fbbf24",
            Star::Empty => "#d1d5db",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub name: String,
    pub comment: String,
    pub initials: String,
    pub company_label: String,
    pub stars: [Star; Rating::MAX as usize],
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        let company_label = review
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMPANY_LABEL)
            .to_string();
        ReviewCard {
            name: review.name.clone(),
            comment: review.comment.clone(),
            initials: initials(&review.name),
            company_label,
            stars: stars(review.rating),
        }
    }
}

/// First character of every whitespace-separated word, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn stars(rating: Rating) -> [Star; Rating::MAX as usize] {
    let filled = rating.value() as usize;
    std::array::from_fn(|i| if i < filled { Star::Filled } else { Star::Empty })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewStats {
    pub count: usize,
    /// Mean rating rounded to one decimal place.
    pub average_rating: f64,
    tenths: u64,
}

impl ReviewStats {
    pub fn average_label(&self) -> String {
        format!("{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Aggregate count and mean rating; `None` when there is nothing to aggregate.
pub fn compute_stats(reviews: &[Review]) -> Option<ReviewStats> {
    if reviews.is_empty() {
        return None;
    }
    let count = reviews.len() as u64;
    let sum: u64 = reviews.iter().map(|r| u64::from(r.rating.value())).sum();
    // Integer half-up rounding of sum / count to tenths.
    let tenths = (sum * 20 + count) / (count * 2);
    Some(ReviewStats {
        count: reviews.len(),
        average_rating: tenths as f64 / 10.0,
        tenths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::ReviewFields;
    use chrono::{TimeZone, Utc};

    fn review(name: &str, company: &str, rating: u8) -> Review {
        let fields = ReviewFields {
            name: name.into(),
            email: "j@x.com".into(),
            company: company.into(),
            message: "Great work".into(),
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Review::new(fields, Rating::new(rating).unwrap(), at)
    }

    #[test]
    fn test_card_for_jane_doe() {
        let card = ReviewCard::from(&review("Jane Doe", "", 4));
        assert_eq!(card.initials, "JD");
        assert_eq!(card.company_label, "Client");
        assert_eq!(card.stars.iter().filter(|s| **s == Star::Filled).count(), 4);
        assert_eq!(card.stars[4], Star::Empty);
        assert_eq!(card.stars[..4], [Star::Filled; 4]);
    }

    #[test]
    fn test_card_keeps_company() {
        let card = ReviewCard::from(&review("ann lee", "Acme", 5));
        assert_eq!(card.initials, "AL");
        assert_eq!(card.company_label, "Acme");
        assert_eq!(card.stars, [Star::Filled; 5]);
    }

    #[test]
    fn test_initials_edge_cases() {
        assert_eq!(initials("  mary   jane  watson "), "MJW");
        assert_eq!(initials("élodie"), "É");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_stats_empty_is_none() {
        assert_eq!(compute_stats(&[]), None);
    }

    #[test]
    fn test_stats_average_rounds_to_one_decimal() {
        let reviews: Vec<Review> = [5, 4, 4, 4].iter().map(|r| review("A", "", *r)).collect();
        let stats = compute_stats(&reviews).unwrap();
        assert_eq!(stats.count, 4);
        // 17 / 4 = 4.25, rounded half up
        assert_eq!(stats.average_rating, 4.3);
        assert_eq!(stats.average_label(), "4.3");

        let reviews: Vec<Review> = [5, 4, 4].iter().map(|r| review("A", "", *r)).collect();
        let stats = compute_stats(&reviews).unwrap();
        assert_eq!(stats.average_label(), "4.3");

        let reviews = vec![review("A", "", 5)];
        assert_eq!(compute_stats(&reviews).unwrap().average_label(), "5.0");
    }

    #[test]
    fn test_exact_half_tenth_rounds_up() {
        // 87 / 20 = 4.35 exactly; float formatting would show 4.3.
        let ratings = [5u8; 7].into_iter().chain([4u8; 13]);
        let reviews: Vec<Review> = ratings.map(|r| review("A", "", r)).collect();
        let stats = compute_stats(&reviews).unwrap();
        assert_eq!(stats.count, 20);
        assert_eq!(stats.average_label(), "4.4");
    }
}
