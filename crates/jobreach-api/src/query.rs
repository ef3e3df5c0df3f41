//! Search query construction.

use reqwest::Url;

/// Filters and pagination for one search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub page: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
    /// Free-form location filter. A 5-digit value is sent as `zipCode`,
    /// anything else as `city`.
    pub location: Option<String>,
    /// Program-site filter; the endpoint models sites as cities, so this
    /// also maps to the `city` parameter.
    pub site: Option<String>,
    pub employment_type: Option<String>,
    pub category: Option<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            keyword: None,
            location: None,
            site: None,
            employment_type: None,
            category: None,
        }
    }
}

impl SearchQuery {
    /// Appends this query's parameters to `url`, percent-encoding values
    /// via [`Url::query_pairs_mut`]. Blank filters are omitted entirely.
    pub(crate) fn apply_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("page", &self.page.to_string());
        pairs.append_pair("pageSize", &self.page_size.to_string());

        if let Some(keyword) = non_blank(self.keyword.as_deref()) {
            pairs.append_pair("keyword", keyword);
        }
        if let Some(site) = non_blank(self.site.as_deref()) {
            pairs.append_pair("city", site);
        }
        if let Some(employment_type) = non_blank(self.employment_type.as_deref()) {
            pairs.append_pair("employmentType", employment_type);
        }
        if let Some(category) = non_blank(self.category.as_deref()) {
            pairs.append_pair("category", category);
        }
        if let Some(location) = non_blank(self.location.as_deref()) {
            if is_zip(location) {
                pairs.append_pair("zipCode", location);
            } else {
                pairs.append_pair("city", location);
            }
        }
    }
}

/// True for exactly five ASCII digits — the heuristic separating zip input
/// from city input in the free-form location field.
fn is_zip(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
