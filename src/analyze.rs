use anyhow::Result;
use reqwest::blocking::Client;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

use crate::config::Config;
use crate::youtube::{self, SearchItem};

/// Per-niche analysis outcome; field order doubles as the CSV column order.
#[derive(Debug, Clone, Serialize)]
pub struct NicheReport {
    pub niche: String,
    pub video_count: usize,
    pub unique_channel_count: usize,
    pub opportunity_score: f64,
}

/// Analyze a single niche with one search request.
///
/// The opportunity score is videos per distinct channel: a high ratio means
/// plenty of content supply concentrated in few creators.
pub fn analyze_niche(client: &Client, config: &Config, niche: &str) -> Result<NicheReport> {
    let url = youtube::build_search_url(niche, config.max_results, &config.api_key);
    let results = youtube::fetch_search_results(client, &url)?;

    let (video_count, unique_channel_count, opportunity_score) =
        summarize_items(&results.items);

    info!(
        action = "complete",
        component = "niche_analysis",
        niche = niche,
        video_count,
        unique_channel_count,
        opportunity_score,
        "Niche analysis completed"
    );

    Ok(NicheReport {
        niche: niche.to_string(),
        video_count,
        unique_channel_count,
        opportunity_score,
    })
}

/// Count videos and distinct channels, then compute the score. Items without
/// a snippet count as videos but contribute no channel.
fn summarize_items(items: &[SearchItem]) -> (usize, usize, f64) {
    let video_count = items.len();

    let channel_ids: HashSet<&str> = items
        .iter()
        .filter_map(|item| item.snippet.as_ref())
        .map(|snippet| snippet.channel_id.as_str())
        .collect();
    let unique_channel_count = channel_ids.len();

    let opportunity_score = if unique_channel_count == 0 {
        0.0
    } else {
        round2(video_count as f64 / unique_channel_count as f64)
    };

    (video_count, unique_channel_count, opportunity_score)
}

/// Round half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::SearchResponse;

    fn items_from_channels(channels: &[Option<&str>]) -> Vec<SearchItem> {
        let json_items: Vec<serde_json::Value> = channels
            .iter()
            .map(|channel| match channel {
                Some(id) => serde_json::json!({ "snippet": { "channelId": id } }),
                None => serde_json::json!({ "id": { "videoId": "x" } }),
            })
            .collect();
        let response: SearchResponse =
            serde_json::from_value(serde_json::json!({ "items": json_items })).unwrap();
        response.items
    }

    #[test]
    fn zero_channels_means_zero_score() {
        let (videos, channels, score) = summarize_items(&[]);
        assert_eq!(videos, 0);
        assert_eq!(channels, 0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn ten_videos_five_channels_scores_two() {
        let ids = ["a", "b", "c", "d", "e", "a", "b", "c", "d", "e"];
        let channels: Vec<Option<&str>> = ids.iter().map(|id| Some(*id)).collect();
        let (videos, unique, score) = summarize_items(&items_from_channels(&channels));
        assert_eq!(videos, 10);
        assert_eq!(unique, 5);
        assert_eq!(score, 2.0);
    }

    #[test]
    fn snippetless_items_count_as_videos_only() {
        let channels = [Some("a"), None, Some("a"), None];
        let (videos, unique, score) = summarize_items(&items_from_channels(&channels));
        assert_eq!(videos, 4);
        assert_eq!(unique, 1);
        assert_eq!(score, 4.0);
    }

    #[test]
    fn all_items_snippetless_guards_division() {
        let channels = [None, None, None];
        let (videos, unique, score) = summarize_items(&items_from_channels(&channels));
        assert_eq!(videos, 3);
        assert_eq!(unique, 0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn channels_never_exceed_videos() {
        let channels = [Some("a"), Some("b"), Some("b"), Some("c")];
        let (videos, unique, _) = summarize_items(&items_from_channels(&channels));
        assert!(unique <= videos);
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let channels = [Some("a"), Some("b"), Some("c"), Some("a"), Some("a")];
        // 5 videos / 3 channels = 1.666... -> 1.67
        let (_, _, score) = summarize_items(&items_from_channels(&channels));
        assert_eq!(score, 1.67);
    }
}
