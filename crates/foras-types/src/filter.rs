use serde::{Deserialize, Serialize};

use crate::models::{Opportunity, OpportunityType};

/// Category selector — `All` is the sentinel matching every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    One(OpportunityType),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// The explore-view predicate. A listing matches when all three parts
/// hold:
///
/// 1. the search term is a case-insensitive substring of the title OR
///    the organization (empty search always matches),
/// 2. the category equals the selection, or the selection is `All`,
/// 3. the location filter is empty, or the listing location contains it
///    as a case-sensitive substring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub location: String,
}

impl OpportunityFilter {
    pub fn matches(&self, opp: &Opportunity) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || opp.title.to_lowercase().contains(&search)
            || opp.organization.to_lowercase().contains(&search);

        let matches_category = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::One(kind) => opp.kind == kind,
        };

        let matches_location =
            self.location.is_empty() || opp.location.contains(&self.location);

        matches_search && matches_category && matches_location
    }

    /// Pure, synchronous, order-preserving pass over the collection.
    pub fn apply(&self, opportunities: &[Opportunity]) -> Vec<Opportunity> {
        opportunities
            .iter()
            .filter(|opp| self.matches(opp))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn opportunity(title: &str, organization: &str, location: &str, kind: OpportunityType) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            organization: organization.to_string(),
            location: location.to_string(),
            kind,
            description: String::new(),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            tags: vec![],
            salary: None,
            posted_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            contact_email: "jobs@example.com".to_string(),
            contact_phone: "+9665xxxxxxx".to_string(),
        }
    }

    fn sample() -> Vec<Opportunity> {
        vec![
            opportunity("Backend Engineer", "Acme Corp", "الرياض", OpportunityType::Job),
            opportunity("Summer Internship", "Globex", "جدة", OpportunityType::Internship),
            opportunity("Data Course", "Acme Academy", "عن بعد", OpportunityType::Course),
        ]
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_organization() {
        let opps = sample();
        let filter = OpportunityFilter {
            search: "acme".to_string(),
            ..Default::default()
        };

        let matched = filter.apply(&opps);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].organization, "Acme Corp");
        assert_eq!(matched[1].organization, "Acme Academy");
    }

    #[test]
    fn search_with_no_hits_matches_nothing() {
        let filter = OpportunityFilter {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn category_sentinel_matches_all() {
        let filter = OpportunityFilter::default();
        assert_eq!(filter.apply(&sample()).len(), 3);

        let jobs_only = OpportunityFilter {
            category: CategoryFilter::One(OpportunityType::Job),
            ..Default::default()
        };
        let matched = jobs_only.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Backend Engineer");
    }

    #[test]
    fn location_is_a_case_sensitive_substring() {
        let opps = vec![opportunity("Job", "Org", "Greater Riyadh", OpportunityType::Job)];

        let exact = OpportunityFilter {
            location: "Riyadh".to_string(),
            ..Default::default()
        };
        assert_eq!(exact.apply(&opps).len(), 1);

        let wrong_case = OpportunityFilter {
            location: "riyadh".to_string(),
            ..Default::default()
        };
        assert!(wrong_case.apply(&opps).is_empty());
    }

    #[test]
    fn default_filter_returns_collection_unchanged_and_is_idempotent() {
        let opps = sample();
        let filter = OpportunityFilter::default();

        let once = filter.apply(&opps);
        assert_eq!(once.len(), opps.len());
        let titles: Vec<_> = once.iter().map(|o| o.title.clone()).collect();
        let original: Vec<_> = opps.iter().map(|o| o.title.clone()).collect();
        assert_eq!(titles, original);

        let twice = filter.apply(&once);
        let again: Vec<_> = twice.iter().map(|o| o.title.clone()).collect();
        assert_eq!(again, titles);
    }

    #[test]
    fn all_three_parts_must_hold() {
        let filter = OpportunityFilter {
            search: "engineer".to_string(),
            category: CategoryFilter::One(OpportunityType::Internship),
            location: String::new(),
        };
        // Title matches but the category does not.
        assert!(filter.apply(&sample()).is_empty());
    }
}
