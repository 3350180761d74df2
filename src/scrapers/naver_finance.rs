//! Naver Finance news scraper.
//!
//! Collects article links from the paginated listing pages on
//! [finance.naver.com](https://finance.naver.com/news/news_list.naver) and
//! extracts article contents from the corresponding pages on
//! `n.news.naver.com`.
//!
//! # URL Pattern
//!
//! Listing pages link to articles through a reader URL whose query string
//! carries `office_id` and `article_id`. Those two identifiers are enough to
//! address the article directly, so every candidate href is normalized to
//! `https://n.news.naver.com/mnews/article/{office_id}/{article_id}` — which
//! also serves as the deduplication key across tabs.
//!
//! # Pagination
//!
//! The listing site exposes no reliable "last page" marker; past the end it
//! keeps serving the final page's content. A tab is therefore walked page by
//! page until a page yields no links or exactly repeats the previous page's
//! link set, with a configurable page cap as a backstop.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::fetcher::Fetch;
use crate::models::ArticleRecord;
use crate::utils::truncate_for_log;

/// Listing endpoint; each tab appends its query fragment and a page number.
const BASE_URL: &str = "https://finance.naver.com/news/news_list.naver?";

/// Canonical article host prefix; `{office_id}/{article_id}` is appended.
const ARTICLE_BASE_URL: &str = "https://n.news.naver.com/mnews/article";

/// One content tab of the listing site.
///
/// `tag` and `class` describe the markup wrapping each article teaser on
/// that tab's listing pages; the teaser's first anchor carries the link.
#[derive(Debug)]
pub struct NewsTab {
    pub name: &'static str,
    pub query: &'static str,
    pub tag: &'static str,
    pub class: &'static str,
}

/// The content tabs the listing site exposes.
pub const NEWS_TABS: &[NewsTab] = &[
    NewsTab {
        name: "realtime",
        query: "mode=LSS2D&section_id=101&section_id2=258&page=",
        tag: "dd",
        class: "articleSubject",
    },
    NewsTab {
        name: "most_view",
        query: "mode=RANK&page=",
        tag: "ul",
        class: "simpleNewsList",
    },
];

/// Why a candidate href could not be normalized to a canonical article URL.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The href was not a parseable URL, absolute or listing-relative.
    #[error("unparseable article href {url}: {source}")]
    Unparseable {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The query string lacked a non-empty `office_id` or `article_id`.
    #[error("article href {url} is missing office_id or article_id")]
    MissingIdentifiers { url: String },
}

/// Normalize a listing-site article href to its canonical article URL.
///
/// Extracts `office_id` and `article_id` from the href's query string
/// (first occurrence of each wins; all other parameters are ignored) and
/// rebuilds the direct article URL on `n.news.naver.com`. Relative hrefs
/// resolve against the listing site origin.
pub fn normalize_article_link(href: &str) -> Result<String, NormalizeError> {
    let parsed = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(BASE_URL)
            .and_then(|base| base.join(href))
            .map_err(|source| NormalizeError::Unparseable {
                url: href.to_string(),
                source,
            })?,
        Err(source) => {
            return Err(NormalizeError::Unparseable {
                url: href.to_string(),
                source,
            });
        }
    };

    let mut office_id: Option<String> = None;
    let mut article_id: Option<String> = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "office_id" if office_id.is_none() && !value.is_empty() => {
                office_id = Some(value.into_owned());
            }
            "article_id" if article_id.is_none() && !value.is_empty() => {
                article_id = Some(value.into_owned());
            }
            _ => {}
        }
    }

    match (office_id, article_id) {
        (Some(office), Some(article)) => Ok(format!("{ARTICLE_BASE_URL}/{office}/{article}")),
        _ => Err(NormalizeError::MissingIdentifiers {
            url: href.to_string(),
        }),
    }
}

/// Extract the set of canonical article links from one listing page.
///
/// Selects the tab's teaser elements, takes each teaser's first anchor, and
/// normalizes its href. Candidates that fail normalization are logged at
/// debug level and dropped; duplicates within the page collapse.
pub fn extract_page_links(html: &str, tab: &NewsTab) -> HashSet<String> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(&format!("{}.{}", tab.tag, tab.class)).unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut links = HashSet::new();
    for item in document.select(&item_selector) {
        let Some(href) = item
            .select(&anchor_selector)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
        else {
            continue;
        };

        match normalize_article_link(href) {
            Ok(link) => {
                links.insert(link);
            }
            Err(e) => debug!(error = %e, "Dropping candidate link"),
        }
    }
    links
}

/// Collect every article link one tab exposes, walking its pages in order.
///
/// Stops when a page yields no links, when a page's link set exactly repeats
/// the previous page's (the site loops its final page rather than ending),
/// when a fetch fails (treated as end-of-pagination, no retry), or when
/// `max_pages` pages have been fetched.
#[instrument(level = "info", skip(fetcher, tab), fields(tab = tab.name))]
pub async fn collect_tab_links<F: Fetch + Sync>(
    fetcher: &F,
    tab: &NewsTab,
    max_pages: u32,
) -> HashSet<String> {
    let mut collected: HashSet<String> = HashSet::new();
    let mut previous: HashSet<String> = HashSet::new();
    let mut page: u32 = 1;

    loop {
        if page > max_pages {
            warn!(max_pages, "Reached page limit before pagination converged");
            break;
        }

        let url = format!("{BASE_URL}{}{page}", tab.query);
        let html = match fetcher.fetch_text(&url).await {
            Ok(html) => html,
            Err(e) => {
                debug!(page, error = %e, "List page fetch failed; treating as end of pagination");
                break;
            }
        };

        let current = extract_page_links(&html, tab);
        if current.is_empty() || current == previous {
            debug!(page, "Page contributed no new link set; stopping");
            break;
        }

        collected.extend(current.iter().cloned());
        previous = current;
        page += 1;
    }

    info!(count = collected.len(), "Collected tab links");
    collected
}

/// Collect article links from every tab and union the results.
///
/// Tabs are crawled sequentially; a tab whose first page fails simply
/// contributes nothing. The union is returned sorted so output order is
/// deterministic across runs.
pub async fn collect_news_links<F: Fetch + Sync>(fetcher: &F, max_pages: u32) -> Vec<String> {
    let mut all_links: HashSet<String> = HashSet::new();

    for tab in NEWS_TABS {
        info!(tab = tab.name, "Collecting article links");
        all_links.extend(collect_tab_links(fetcher, tab, max_pages).await);
    }

    let mut links: Vec<String> = all_links.into_iter().collect();
    links.sort();
    links
}

/// Fetch each article page and extract its fields.
///
/// Links are processed in input order. A failed fetch skips the link without
/// emitting a record; a missing element on a fetched page is recorded as an
/// absent field, not an error.
#[instrument(level = "info", skip_all)]
pub async fn fetch_articles<F: Fetch + Sync>(fetcher: &F, links: &[String]) -> Vec<ArticleRecord> {
    let articles: Vec<ArticleRecord> = stream::iter(links)
        .filter_map(|link| async move {
            let html = match fetcher.fetch_text(link).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(url = %link, error = %e, "Article fetch failed; skipping");
                    return None;
                }
            };

            let record = extract_article(&html);
            debug!(
                url = %link,
                title = record.title.as_deref().map(|t| truncate_for_log(t, 80)),
                has_content = record.content.is_some(),
                publish_date = record.publish_date.as_deref(),
                "Extracted article"
            );
            Some(record)
        })
        .collect()
        .await;

    info!(count = articles.len(), "Fetched article contents");
    articles
}

/// Extract title, body, and publish date from one article page.
fn extract_article(html: &str) -> ArticleRecord {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("h2#title_area").unwrap();
    let content_selector = Selector::parse("article#dic_area").unwrap();
    let publish_selector = Selector::parse("span.media_end_head_info_datestamp_time").unwrap();

    ArticleRecord {
        title: document.select(&title_selector).next().map(element_text),
        content: document.select(&content_selector).next().map(element_text),
        publish_date: document
            .select(&publish_selector)
            .next()
            .and_then(|e| e.value().attr("data-date-time"))
            .map(str::to_string),
    }
}

/// Concatenate an element's text nodes with surrounding whitespace stripped.
fn element_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}
