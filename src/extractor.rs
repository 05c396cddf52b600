use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// One harvested business. Every field except `url` is independently
/// optional: an empty string means the label was present without a value, or
/// the label was not found at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub url: String,
    pub business_name: String,
    pub phone: String,
    pub address: String,
    pub typical_job_cost: String,
    pub license_number: String,
    pub followers: String,
    pub website: String,
    pub facebook: String,
    pub linkedin: String,
    pub other_website: String,
}

/// Field extraction over a rendered business detail page. Pure: the same
/// markup always yields the same record, and a revisit rebuilds the record
/// from scratch rather than merging with an earlier attempt.
pub struct BusinessExtractor {
    section: Selector,
    cell: Selector,
    heading: Selector,
    value: Selector,
    anchor: Selector,
    facebook: Selector,
    linkedin: Selector,
    other_site: Selector,
}

impl BusinessExtractor {
    pub fn new() -> Self {
        BusinessExtractor {
            section: Selector::parse("section#business").unwrap(),
            cell: Selector::parse(".hui-cell").unwrap(),
            heading: Selector::parse("h3").unwrap(),
            value: Selector::parse("p").unwrap(),
            anchor: Selector::parse("a").unwrap(),
            facebook: Selector::parse(r#"a[aria-label*="Facebook"]"#).unwrap(),
            linkedin: Selector::parse(r#"a[aria-label*="Linkedin"]"#).unwrap(),
            other_site: Selector::parse(r#"a[aria-label*="blog or other site"]"#).unwrap(),
        }
    }

    /// Builds a record from the page markup, or `None` when the business
    /// detail container is missing (a skip, not a failure).
    pub fn extract(&self, url: &str, html: &str) -> Option<BusinessRecord> {
        let document = Html::parse_document(html);
        let section = document.select(&self.section).next()?;
        let cells: Vec<ElementRef> = section.select(&self.cell).collect();

        let website = cells
            .iter()
            .find(|cell| self.heading_text(cell).as_deref() == Some("Website"))
            .and_then(|cell| cell.select(&self.anchor).next())
            .map(|a| normalize_whitespace(&a.text().collect::<String>()))
            .unwrap_or_default();

        Some(BusinessRecord {
            url: url.to_string(),
            business_name: self.labelled_value(&cells, "Business Name"),
            phone: self.labelled_value(&cells, "Phone Number"),
            address: self.labelled_value(&cells, "Address"),
            typical_job_cost: self.labelled_value(&cells, "Typical Job Cost"),
            license_number: self.labelled_value(&cells, "License Number"),
            followers: self.labelled_value(&cells, "Followers"),
            website,
            facebook: link_href(&section, &self.facebook),
            linkedin: link_href(&section, &self.linkedin),
            other_website: link_href(&section, &self.other_site),
        })
    }

    /// Scans the detail cells for one whose heading equals `label` exactly
    /// and returns the adjacent value text, whitespace-normalized. Missing
    /// label or missing value both come back as an empty string.
    fn labelled_value(&self, cells: &[ElementRef], label: &str) -> String {
        for cell in cells {
            if self.heading_text(cell).as_deref() == Some(label) {
                return cell
                    .select(&self.value)
                    .next()
                    .map(|p| normalize_whitespace(&p.text().collect::<String>()))
                    .unwrap_or_default();
            }
        }
        String::new()
    }

    fn heading_text(&self, cell: &ElementRef) -> Option<String> {
        cell.select(&self.heading)
            .next()
            .map(|h3| normalize_whitespace(&h3.text().collect::<String>()))
    }
}

impl Default for BusinessExtractor {
    fn default() -> Self {
        BusinessExtractor::new()
    }
}

fn link_href(section: &ElementRef, selector: &Selector) -> String {
    section
        .select(selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string()
}

/// Runs of whitespace collapsed to a single space, leading/trailing trimmed.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
