//! Smoke tests for the flows the portfolio frontend relies on.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use folio::config::{Config, LayoutSetting};
use folio::profile::Profile;
use http_body_util::BodyExt;
use std::path::{Path, PathBuf};
use tower::ServiceExt;

// BOM, quoted commas, an escaped quote, an embedded newline and a blank line.
const LEGACY_CSV: &str = "\u{feff}Const,Your Rating,Date Rated,Title,Original Title,URL,Title Type,IMDb Rating,Runtime (mins),Year,Genres\n\
tt0068646,10,2023-05-01,\"The Godfather\",,https://www.imdb.com/title/tt0068646/,Movie,9.2,175,1972,\"Crime, Drama\"\n\
tt0903747,9,2023-06-11,\"Breaking \"\"Bad\"\"\",,https://www.imdb.com/title/tt0903747/,TV Series,9.5,49,2008,\"Crime, Drama, Thriller\"\n\
\n\
tt0118715,7,2023-04-20,\"The Big\nLebowski\",,https://www.imdb.com/title/tt0118715/,Movie,8.1,117,1998,Comedy\n";

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-smoke-{label}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_for(dir: &Path, csv: &str) -> Config {
    let csv_path = dir.join("ratings.csv");
    std::fs::write(&csv_path, csv).unwrap();

    let mut config = Config::default();
    config.ratings.source = csv_path.display().to_string();
    config.ratings.data_dir = dir.display().to_string();
    config.server.static_dir = dir.join("dist").display().to_string();
    config.observability.metrics_enabled = false;
    config
}

async fn build_router(config: Config) -> Router {
    let state = folio::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    folio::api::router(state)
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn smoke_legacy_export_flow() {
    let dir = temp_dir("legacy");
    let router = build_router(config_for(&dir, LEGACY_CSV)).await;

    let (status, status_body) = get_json(&router, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_body["data"]["ratings"]["state"], "ready");
    assert_eq!(status_body["data"]["ratings"]["layout"], "legacy");
    assert_eq!(status_body["data"]["ratings"]["count"], 3);

    let (_, body) = get_json(&router, "/api/ratings?sort=title&dir=asc").await;
    let items = body["data"]["items"].as_array().unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Breaking \"Bad\"", "The Big\nLebowski", "The Godfather"]
    );

    // Legacy exports carry runtime but no release date, director or poster.
    let godfather = &items[2];
    assert_eq!(godfather["id"], "tt0068646");
    assert_eq!(godfather["runtime_mins"], 175);
    assert_eq!(godfather["release_date"], "");
    assert_eq!(godfather["director"], "");
    assert_eq!(godfather["genres"], serde_json::json!(["Crime", "Drama"]));

    let (_, body) = get_json(&router, "/api/ratings?search=lebowski").await;
    assert_eq!(body["data"]["total"], 1);

    let (_, summary) = get_json(&router, "/api/ratings/summary").await;
    assert_eq!(summary["data"]["average_score"], 8.7);
    assert_eq!(summary["data"]["timeline"]["min_year"], 1972);
    assert_eq!(summary["data"]["timeline"]["max_year"], 2008);

    let (_, spotlight) = get_json(&router, "/api/ratings/spotlight").await;
    assert!(spotlight["data"]["my_rating"].as_i64().unwrap() >= 8);

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn smoke_forced_layout_override() {
    let dir = temp_dir("forced");
    let mut config = config_for(&dir, LEGACY_CSV);
    config.ratings.layout = LayoutSetting::Extended;
    let router = build_router(config).await;

    let (_, status_body) = get_json(&router, "/api/system/status").await;
    assert_eq!(status_body["data"]["ratings"]["layout"], "extended");

    // Forced extended layout on a legacy header: the trailing columns default.
    let (_, body) = get_json(&router, "/api/ratings?sort=runtime&dir=desc&limit=1").await;
    assert_eq!(body["data"]["items"][0]["runtime_mins"], 175);
    assert_eq!(body["data"]["items"][0]["director"], "");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn smoke_profile_override_from_file() {
    let dir = temp_dir("profile");
    let mut profile = Profile::builtin();
    profile.personal.name = "Smoke Tester".to_string();
    profile.experience.clear();

    let profile_path = dir.join("profile.toml");
    std::fs::write(&profile_path, toml::to_string_pretty(&profile).unwrap()).unwrap();

    let mut config = config_for(&dir, LEGACY_CSV);
    config.profile.path = Some(profile_path.display().to_string());
    let router = build_router(config).await;

    let (status, body) = get_json(&router, "/api/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["personal"]["name"], "Smoke Tester");
    assert!(body["data"]["experience"].as_array().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn smoke_invalid_profile_fails_startup() {
    let dir = temp_dir("bad-profile");
    let profile_path = dir.join("profile.toml");
    std::fs::write(&profile_path, "personal = 3").unwrap();

    let mut config = config_for(&dir, LEGACY_CSV);
    config.profile.path = Some(profile_path.display().to_string());

    let result = folio::api::create_app_state_from_config(config, None).await;
    assert!(result.is_err());

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn smoke_header_only_export() {
    let dir = temp_dir("empty");
    let router = build_router(config_for(
        &dir,
        "Const,Your Rating,Date Rated,Title,Original Title,URL,Title Type,IMDb Rating,Runtime (mins),Year,Genres\n",
    ))
    .await;

    let (_, body) = get_json(&router, "/api/ratings").await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["loading"], false);

    let (_, status_body) = get_json(&router, "/api/system/status").await;
    assert_eq!(status_body["data"]["ratings"]["state"], "ready");

    let (_, summary) = get_json(&router, "/api/ratings/summary").await;
    assert_eq!(summary["data"]["charts"]["path"], "");
    assert_eq!(summary["data"]["histogram"]["max_count"], 0);

    let _ = std::fs::remove_dir_all(dir);
}
