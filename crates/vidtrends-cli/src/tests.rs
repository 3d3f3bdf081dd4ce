//! Pipeline tests against a stubbed interest source and temp files.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use vidtrends_core::{AppConfig, DateWindow, InterestPoint};
use vidtrends_trends::{TrendsError, TrendsSource};

use crate::pipeline;

/// In-memory source: canned points per keyword, recorded query parameters.
struct StubSource {
    points: HashMap<String, Vec<InterestPoint>>,
    windows: Mutex<Vec<DateWindow>>,
    geos: Mutex<Vec<String>>,
}

impl StubSource {
    fn new(points: HashMap<String, Vec<InterestPoint>>) -> Self {
        Self {
            points,
            windows: Mutex::new(Vec::new()),
            geos: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self::new(HashMap::new())
    }
}

#[async_trait]
impl TrendsSource for StubSource {
    async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<Vec<InterestPoint>, TrendsError> {
        self.windows.lock().unwrap().push(*window);
        self.geos.lock().unwrap().push(geo.to_string());
        Ok(self.points.get(keyword).cloned().unwrap_or_default())
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        request_timeout_secs: 30,
        max_retries: 0,
        retry_backoff_base_ms: 0,
        inter_request_delay_ms: 0,
    }
}

fn write_input(dir: &tempfile::TempDir, rows: &[&str]) -> PathBuf {
    let mut contents = String::from("video_id,trending_date,title\n");
    for (i, token) in rows.iter().enumerate() {
        contents.push_str(&format!("vid{i},{token},Video {i}\n"));
    }
    let path = dir.path().join("videos.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

fn music_points() -> HashMap<String, Vec<InterestPoint>> {
    HashMap::from([(
        "music".to_string(),
        vec![
            InterestPoint {
                date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
                keyword: "music".to_string(),
                score: 42,
            },
            InterestPoint {
                date: NaiveDate::from_ymd_opt(2018, 1, 2).unwrap(),
                keyword: "music".to_string(),
                score: 55,
            },
        ],
    )])
}

#[tokio::test]
async fn query_window_is_the_normalized_min_max() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["17.14.11", "18.01.01"]);
    let output = dir.path().join("out.csv");
    let source = StubSource::empty();

    pipeline::run(&source, &test_config(), &input, &output, "US")
        .await
        .unwrap();

    let windows = source.windows.lock().unwrap();
    assert_eq!(windows.len(), 14, "one query per distinct keyword");
    for window in windows.iter() {
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2017, 11, 14).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
    }
    assert!(source.geos.lock().unwrap().iter().all(|g| g == "US"));
}

#[tokio::test]
async fn matched_categories_land_in_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["18.01.01", "18.02.01"]);
    let output = dir.path().join("out.csv");
    let source = StubSource::new(music_points());

    pipeline::run(&source, &test_config(), &input, &output, "US")
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "date,category_id,keyword,trend_score\n\
         2018-01-01,10,music,42\n\
         2018-01-02,10,music,55\n"
    );
}

#[tokio::test]
async fn identical_runs_produce_byte_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["18.01.01", "18.02.01"]);
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let source = StubSource::new(music_points());

    pipeline::run(&source, &test_config(), &input, &first, "US")
        .await
        .unwrap();
    pipeline::run(&source, &test_config(), &input, &second, "US")
        .await
        .unwrap();

    let first_bytes = std::fs::read(&first).unwrap();
    let second_bytes = std::fs::read(&second).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn empty_fetch_still_writes_the_schema() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["18.01.01"]);
    let output = dir.path().join("out.csv");
    let source = StubSource::empty();

    pipeline::run(&source, &test_config(), &input, &output, "US")
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "date,category_id,keyword,trend_score\n");
}

#[tokio::test]
async fn unmapped_keywords_write_the_schema_and_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["18.01.01"]);
    let output = dir.path().join("out.csv");
    // data comes back, but for a keyword outside the category table
    let source = StubSource::new(HashMap::from([(
        "music".to_string(),
        vec![InterestPoint {
            date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            keyword: "knitting".to_string(),
            score: 90,
        }],
    )]));

    pipeline::run(&source, &test_config(), &input, &output, "US")
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "date,category_id,keyword,trend_score\n");
}

#[tokio::test]
async fn malformed_trending_date_aborts_before_any_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &["18.01.01", "not-a-date"]);
    let output = dir.path().join("out.csv");
    let source = StubSource::empty();

    let result = pipeline::run(&source, &test_config(), &input, &output, "US").await;

    assert!(result.is_err());
    assert!(source.windows.lock().unwrap().is_empty(), "no fetch was issued");
    assert!(!output.exists(), "no output file was written");
}

#[tokio::test]
async fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("out.csv");
    let source = StubSource::empty();

    let result = pipeline::run(&source, &test_config(), &input, &output, "US").await;
    assert!(result.is_err());
}
