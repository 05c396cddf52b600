use std::collections::HashSet;
use std::time::Duration;

use log::warn;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::browser::PageClient;
use crate::config;
use crate::error::Result;

/// Anchor class the directory uses for professional profile cards. It also
/// matches some navigation links, which is why `discover_business_links`
/// filters the hrefs afterwards.
const BUSINESS_LINK_SELECTOR: &str = "a.hui-link.hz-pro-ctl";

/// Listing page URLs over the cursor range, `start` to `end` inclusive in
/// `step` strides. Pure function of the range: restarting the pipeline
/// re-produces the same sequence.
pub fn listing_urls(
    base_url: &str,
    start: usize,
    end: usize,
    step: usize,
) -> impl Iterator<Item = (usize, String)> + '_ {
    (start..=end)
        .step_by(step)
        .map(move |fi| (fi, format!("{}?fi={}", base_url, fi)))
}

/// Navigates to a listing page and returns its markup once lazily rendered
/// cards have had a chance to load: settle, full-height scroll, settle again.
pub async fn fetch_listing<C: PageClient + ?Sized + Sync>(
    client: &C,
    url: &str,
    settle: Duration,
    post_scroll_settle: Duration,
) -> Result<String> {
    client.navigate(url).await?;
    client.wait(settle).await;
    client.scroll_to_bottom().await?;
    client.wait(post_scroll_settle).await;
    client.page_source().await
}

/// Candidate business URLs on a rendered listing page, in document order,
/// deduplicated. Hrefs are resolved against `page_url` and then filtered
/// down to canonical profile URLs: under the professionals prefix, not a
/// category/listing link, no pagination query, trailing numeric identifier.
pub fn discover_business_links(html: &str, page_url: &str) -> Vec<String> {
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Unparsable listing URL {}: {}", page_url, e);
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let selector = Selector::parse(BUSINESS_LINK_SELECTOR).unwrap();
    let profile_id = Regex::new(r"~\d+$").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        let url = resolved.to_string();
        if is_profile_url(&url, &profile_id) && seen.insert(url.clone()) {
            links.push(url);
        }
    }
    links
}

fn is_profile_url(url: &str, profile_id: &Regex) -> bool {
    url.starts_with(config::PROFILE_PREFIX)
        && !url.contains(config::CATEGORY_MARKER)
        && !url.contains("?fi=")
        && profile_id.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_range_is_inclusive_and_strided() {
        let pages: Vec<(usize, String)> =
            listing_urls(config::BASE_URL, config::START_FI, config::END_FI, config::STEP)
                .collect();
        assert_eq!(pages.len(), (config::END_FI - config::START_FI) / config::STEP + 1);
        assert_eq!(pages[0].0, 1);
        assert_eq!(pages[0].1, format!("{}?fi=1", config::BASE_URL));
        assert_eq!(pages.last().unwrap().0, 1411);
    }

    fn listing_page(hrefs: &[&str]) -> String {
        let anchors: String = hrefs
            .iter()
            .map(|href| format!(r#"<a class="hui-link hz-pro-ctl" href="{}">x</a>"#, href))
            .collect();
        format!("<html><body>{}</body></html>", anchors)
    }

    #[test]
    fn filter_keeps_only_canonical_profile_urls() {
        let category_root = config::BASE_URL;
        let paginated = format!("{}?fi=30", config::BASE_URL);
        let non_numeric =
            "https://www.houzz.com/professionals/general-contractor/acme-remodeling";
        let profile =
            "https://www.houzz.com/professionals/general-contractor/acme-remodeling~12345";

        let html = listing_page(&[category_root, paginated.as_str(), non_numeric, profile]);
        let links = discover_business_links(&html, &format!("{}?fi=1", config::BASE_URL));
        assert_eq!(links, vec![profile.to_string()]);
    }

    #[test]
    fn offsite_links_are_dropped() {
        let html = listing_page(&["https://example.com/professionals/fake~1"]);
        let links = discover_business_links(&html, config::BASE_URL);
        assert!(links.is_empty());
    }

    #[test]
    fn relative_hrefs_resolve_against_the_listing_page() {
        let html = listing_page(&["/professionals/general-contractor/acme-remodeling~12345"]);
        let links = discover_business_links(&html, &format!("{}?fi=1", config::BASE_URL));
        assert_eq!(
            links,
            vec![
                "https://www.houzz.com/professionals/general-contractor/acme-remodeling~12345"
                    .to_string()
            ]
        );
    }

    #[test]
    fn duplicate_anchors_are_reported_once_in_document_order() {
        let a = "https://www.houzz.com/professionals/general-contractor/alpha~111";
        let b = "https://www.houzz.com/professionals/general-contractor/bravo~222";
        let html = listing_page(&[a, b, a]);
        let links = discover_business_links(&html, config::BASE_URL);
        assert_eq!(links, vec![a.to_string(), b.to_string()]);
    }
}
