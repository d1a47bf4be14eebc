use crate::models::catalog::Volume;
use crate::models::responses::BookSummary;
use std::collections::HashMap;

/// Aggregate view of one result page: the normalized book list plus the
/// summary statistics shown above it.
#[derive(Debug)]
pub struct BookStats {
    pub books: Vec<BookSummary>,
    pub most_common_author: String,
    pub earliest_pub_date: String,
    pub latest_pub_date: String,
}

pub fn format_authors(authors: &[String]) -> String {
    if authors.is_empty() {
        "Unknown Author".to_string()
    } else {
        authors.join(", ")
    }
}

/// Normalize one raw record. Every field has a default, so this cannot fail.
pub fn summarize_volume(volume: &Volume) -> BookSummary {
    let info = volume.volume_info.clone().unwrap_or_default();

    BookSummary {
        authors: format_authors(&info.authors),
        title: info.title.unwrap_or_else(|| "No Title".to_string()),
        description: info
            .description
            .unwrap_or_else(|| "No description available.".to_string()),
        published_date: info
            .published_date
            .unwrap_or_else(|| "Unknown Date".to_string()),
    }
}

/// Normalize a page of records and compute the summary statistics.
///
/// The most common author counts individual names, not display strings, and
/// ties break toward the name seen first in input order. Date min/max is a
/// plain lexicographic comparison over the raw strings; records defaulted to
/// "Unknown Date" stay in `books` but never feed the min/max.
pub fn process_volumes(items: &[Volume]) -> BookStats {
    let mut books = Vec::with_capacity(items.len());
    let mut all_authors: Vec<String> = Vec::new();
    let mut pub_dates: Vec<String> = Vec::new();

    for item in items {
        let summary = summarize_volume(item);

        if let Some(info) = &item.volume_info {
            all_authors.extend(info.authors.iter().cloned());
        }
        if summary.published_date != "Unknown Date" {
            pub_dates.push(summary.published_date.clone());
        }

        books.push(summary);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for author in &all_authors {
        *counts.entry(author.as_str()).or_default() += 1;
    }

    // Rescan in encounter order so equal counts resolve to the first name seen.
    let mut most_common_author = "No Author".to_string();
    let mut best_count = 0;
    for author in &all_authors {
        let count = counts[author.as_str()];
        if count > best_count {
            best_count = count;
            most_common_author = author.clone();
        }
    }

    let earliest_pub_date = pub_dates
        .iter()
        .min()
        .cloned()
        .unwrap_or_else(|| "N/A".to_string());
    let latest_pub_date = pub_dates
        .iter()
        .max()
        .cloned()
        .unwrap_or_else(|| "N/A".to_string());

    BookStats {
        books,
        most_common_author,
        earliest_pub_date,
        latest_pub_date,
    }
}
