//! Name search.

use crate::scoring::ScoredCompany;

/// Case-insensitive substring match on the company name. A blank query
/// matches everything.
pub fn matches_query(company_name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    company_name.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps only the companies whose name matches `query`.
pub fn search_items(items: Vec<ScoredCompany>, query: &str) -> Vec<ScoredCompany> {
    if query.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|company| matches_query(&company.record.company_name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches_query("株式会社ABC", ""));
        assert!(matches_query("", "   "));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(matches_query("Hiroshima Tech株式会社", "tech"));
        assert!(matches_query("Hiroshima Tech株式会社", "HIROSHIMA"));
        assert!(matches_query("広島電機株式会社", "電機"));
        assert!(!matches_query("広島電機株式会社", "岡山"));
    }

    #[test]
    fn test_query_is_trimmed() {
        assert!(matches_query("呉造船", " 造船 "));
    }
}
