//! End-to-end flow without network: session -> search service (fake model) -> export to disk.

use lead_scout::adapters::ai::MockSearchAdapter;
use lead_scout::adapters::export::{CsvQuoting, FsExporter};
use lead_scout::adapters::ui::results_view::{Rendered, render};
use lead_scout::domain::{DomainError, SearchView};
use lead_scout::ports::{GroundedPrompt, GroundedSearchPort};
use lead_scout::usecases::{ExportService, LeadSearchService, LeadSession};
use std::sync::Arc;

/// Port that always fails with a transport error.
struct DownSearch;

#[async_trait::async_trait]
impl GroundedSearchPort for DownSearch {
    async fn generate(&self, _request: &GroundedPrompt) -> Result<String, DomainError> {
        Err(DomainError::Search("HTTP request failed: dns error".to_string()))
    }
}

const MODEL_JSON: &str = r#"[
  {"name":"Acme","website":"https://acme.com","phone":null,"email":null,"address":null,"description":"Widgets"},
  {"name":"Blue Door Bakery","website":"https://bluedoor.example","phone":"+44 20 7946 0000","email":"hi@bluedoor.example","address":"12 High Street, London","description":"Sourdough and pastries"}
]"#;

fn session(niche: &str, location: &str) -> LeadSession {
    let mut s = LeadSession::new();
    s.set_niche(niche);
    s.set_location(location);
    s
}

#[tokio::test]
async fn search_then_export_round_trips_fields() {
    let search = LeadSearchService::new(Arc::new(MockSearchAdapter::with_response(MODEL_JSON)));
    let mut s = session("artisan bakeries", "London UK");

    assert!(s.search(&search).await);
    assert_eq!(s.results().len(), 2);
    match render(s.view()) {
        Rendered::Table { title, lines } => {
            assert_eq!(title, "Search Results (2 found)");
            assert_eq!(lines.len(), 2 + 2);
        }
        other => panic!("expected table, got {other:?}"),
    }

    let dir = tempfile::tempdir().unwrap();
    let export = ExportService::new(Arc::new(FsExporter::new(dir.path())), CsvQuoting::Standard);
    let path = export
        .export(s.niche(), s.location(), s.results())
        .await
        .unwrap()
        .expect("file written");

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "leads_artisan_bakeries_London_UK.csv"
    );
    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines[0], "Business Name,Website,Phone,Email,Address,Description");
    assert_eq!(
        lines[1],
        r#""Acme","https://acme.com","","","","Widgets""#
    );
    assert_eq!(
        lines[2],
        r#""Blue Door Bakery","https://bluedoor.example","+44 20 7946 0000","hi@bluedoor.example","12 High Street, London","Sourdough and pastries""#
    );
}

#[tokio::test]
async fn empty_response_shows_empty_state_and_skips_export() {
    let search = LeadSearchService::new(Arc::new(MockSearchAdapter::with_response("")));
    let mut s = session("Dentists", "Nowhere");

    assert!(s.search(&search).await);
    assert_eq!(s.view(), SearchView::Empty);
    assert!(s.state().search_performed());
    assert!(s.state().error().is_none());

    let dir = tempfile::tempdir().unwrap();
    let export = ExportService::new(Arc::new(FsExporter::new(dir.path())), CsvQuoting::Standard);
    let out = export.export(s.niche(), s.location(), s.results()).await.unwrap();
    assert!(out.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn failure_clears_previous_results() {
    let mut s = session("Dentists", "Chicago");

    let ok = LeadSearchService::new(Arc::new(MockSearchAdapter::with_response(MODEL_JSON)));
    assert!(s.search(&ok).await);
    assert_eq!(s.results().len(), 2);

    let down = LeadSearchService::new(Arc::new(DownSearch));
    assert!(s.search(&down).await);
    assert!(s.results().is_empty());
    assert!(s.state().search_performed());
    assert_eq!(
        s.state().error(),
        Some("Failed to fetch business data. Please try again.")
    );
    assert!(matches!(render(s.view()), Rendered::Error(_)));
}

#[tokio::test]
async fn disabled_submit_does_not_call_the_model() {
    let search = LeadSearchService::new(Arc::new(DownSearch));
    let mut s = session("", "Chicago");

    assert!(!s.search(&search).await);
    assert!(!s.state().search_performed());
    assert_eq!(s.view(), SearchView::Blank);
}
