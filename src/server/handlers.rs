//! Request handlers for the dashboard page and JSON API.

use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::aggregate::{self, DashboardMetrics, FilterSelection, ProgressionSeries, StateSummary};
use crate::data::{Region, SalaryRecord};

use super::AppState;

/// The dashboard page, embedded at compile time.
const DASHBOARD_PAGE: &str = include_str!("page.html");

/// Dropdown sentinel meaning "no filter"
const ALL: &str = "ALL";

/// Rows shown in the district-level table
const MAX_TABLE_ROWS: usize = 20;

/// States drawn in the career-progression chart
const MAX_PROGRESSION_STATES: usize = 10;

/// Errors the API reports back to the page.
#[derive(Debug)]
pub enum ApiError {
    UnknownRegion(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnknownRegion(region) => {
                (StatusCode::BAD_REQUEST, format!("unknown region {region:?}"))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Query parameters shared by the filtered endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    region: Option<String>,
    /// Comma-separated state names
    states: Option<String>,
}

impl FilterParams {
    fn selection(&self) -> Result<FilterSelection, ApiError> {
        let region = match self.region.as_deref() {
            None | Some("") | Some(ALL) => None,
            Some(raw) => {
                Some(Region::from_str(raw).map_err(|e| ApiError::UnknownRegion(e.0))?)
            }
        };
        let states = match self.states.as_deref() {
            None | Some("") | Some(ALL) => Vec::new(),
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && s.as_str() != ALL)
                .collect(),
        };
        Ok(FilterSelection { region, states })
    }
}

pub(super) async fn index_handler() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Dropdown options and the district-detail banner flag.
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    regions: Vec<String>,
    states: Vec<String>,
    has_district_detail: bool,
}

pub(super) async fn meta_handler(State(state): State<AppState>) -> Json<MetaResponse> {
    let dataset = &state.dataset;
    Json(MetaResponse {
        regions: Region::ALL.iter().map(|r| r.to_string()).collect(),
        states: aggregate::states_in_region(&dataset.records, None),
        has_district_detail: dataset.has_district_detail,
    })
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    states: Vec<String>,
}

/// States for the cascading state dropdown.
pub(super) async fn states_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<StatesResponse>, ApiError> {
    let selection = params.selection()?;
    Ok(Json(StatesResponse {
        states: aggregate::states_in_region(&state.dataset.records, selection.region),
    }))
}

/// One row of the district-level table, with read-time derived fields.
#[derive(Debug, Serialize)]
pub struct TableRow {
    #[serde(flatten)]
    record: SalaryRecord,
    salary_range: u32,
    growth_pct: f64,
}

impl From<&SalaryRecord> for TableRow {
    fn from(record: &SalaryRecord) -> Self {
        TableRow {
            record: record.clone(),
            salary_range: record.salary_range(),
            growth_pct: record.growth_pct(),
        }
    }
}

/// Everything one dashboard redraw needs.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    metrics: Option<DashboardMetrics>,
    /// Per-state averages, lowest starting salary first
    summaries: Vec<StateSummary>,
    progression: Vec<ProgressionSeries>,
    /// District-level table rows, capped
    records: Vec<TableRow>,
}

pub(super) async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let selection = params.selection()?;
    let filtered = aggregate::filter_records(&state.dataset.records, &selection);

    let metrics = aggregate::dashboard_metrics(&filtered);
    let mut summaries = aggregate::state_summaries(&filtered);
    // Charts rank states by starting pay, lowest first
    summaries.sort_by(|a, b| a.avg_starting_salary.total_cmp(&b.avg_starting_salary));
    let progression = aggregate::progression_series(&summaries, MAX_PROGRESSION_STATES);
    let records = filtered
        .iter()
        .take(MAX_TABLE_ROWS)
        .map(|r| TableRow::from(*r))
        .collect();

    Ok(Json(DashboardResponse {
        metrics,
        summaries,
        progression,
        records,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::data::Dataset;
    use crate::server::build_router;

    use super::*;

    fn make_record(state: &str, region: Region, starting: u32, top: u32) -> SalaryRecord {
        SalaryRecord {
            state: state.to_string(),
            region,
            district: format!("{state} District 1"),
            starting_salary: starting,
            median_salary: (starting + top) / 2,
            top_salary: top,
            years_to_top: 20,
            budget_share_pct: 50.0,
            num_teachers: 200,
            student_teacher_ratio: 16.0,
            avg_raise_pct: 2.5,
            data_source: None,
        }
    }

    fn test_app() -> Router {
        let mut curated = make_record("Alabama", Region::South, 47_000, 72_000);
        curated.district = "Baldwin County Schools".to_string();
        curated.data_source = Some("Baldwin County Board of Education".to_string());

        let dataset = Dataset {
            records: vec![
                make_record("New York", Region::Northeast, 60_000, 100_000),
                make_record("Texas", Region::South, 45_000, 70_000),
                make_record("Ohio", Region::Midwest, 41_000, 64_000),
                curated,
            ],
            has_district_detail: true,
        };
        build_router(AppState {
            dataset: Arc::new(dataset),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_dashboard_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Teacher Salary Comparison Tool"));
    }

    #[tokio::test]
    async fn test_meta_lists_regions_and_states() {
        let (status, body) = get_json(test_app(), "/api/meta").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["regions"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["states"],
            json!(["Alabama", "New York", "Ohio", "Texas"])
        );
        assert_eq!(body["has_district_detail"], json!(true));
    }

    #[tokio::test]
    async fn test_states_cascade_by_region() {
        let (status, body) = get_json(test_app(), "/api/states?region=South").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["states"], json!(["Alabama", "Texas"]));
    }

    #[tokio::test]
    async fn test_dashboard_filters_by_region() {
        let (status, body) = get_json(test_app(), "/api/dashboard?region=South").await;
        assert_eq!(status, StatusCode::OK);

        let summaries = body["summaries"].as_array().unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries
            .iter()
            .all(|s| s["region"] == json!("South")));

        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert!(body["metrics"].is_object());
    }

    #[tokio::test]
    async fn test_dashboard_filters_by_states() {
        let (status, body) = get_json(test_app(), "/api/dashboard?states=Texas,Ohio").await;
        assert_eq!(status, StatusCode::OK);
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r["state"] == json!("Texas") || r["state"] == json!("Ohio")));
    }

    #[tokio::test]
    async fn test_table_rows_carry_derived_fields() {
        let (_, body) = get_json(test_app(), "/api/dashboard?states=Texas").await;
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        let texas = &records[0];
        // 45k -> 70k is a 25k range, 55.6% growth
        assert_eq!(texas["salary_range"], json!(25_000));
        let growth = texas["growth_pct"].as_f64().unwrap();
        assert!((growth - 55.55).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_dashboard_orders_summaries_by_starting_salary() {
        let (_, body) = get_json(test_app(), "/api/dashboard").await;
        let summaries = body["summaries"].as_array().unwrap();
        let starting: Vec<f64> = summaries
            .iter()
            .map(|s| s["avg_starting_salary"].as_f64().unwrap())
            .collect();
        let mut sorted = starting.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(starting, sorted);
    }

    #[tokio::test]
    async fn test_dashboard_empty_filter_has_no_metrics() {
        let (status, body) = get_json(test_app(), "/api/dashboard?states=Nowhere").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["metrics"].is_null());
        assert_eq!(body["records"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_region_is_bad_request() {
        let (status, body) = get_json(test_app(), "/api/dashboard?region=Atlantis").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[test]
    fn test_all_sentinel_clears_filters() {
        let params = FilterParams {
            region: Some("ALL".to_string()),
            states: Some("ALL".to_string()),
        };
        let selection = params.selection().unwrap();
        assert!(selection.region.is_none());
        assert!(selection.states.is_empty());
    }
}
