//! Integration tests for the syllabus pipeline
//!
//! Collaborators are replaced by recording stubs so the tests can check
//! which side effects ran, in what order, and with which sub-tasks.

use classradar::extract::{PlainTextExtractor, TextExtractor};
use classradar::heatmap::{RenderError, WorkloadRenderer};
use classradar::pipeline::{process, process_file, Collaborators, RadarConfig};
use classradar::syllabus::{SubStepSequence, SubTask};
use classradar::todoist::{PushError, TaskPusher};
use std::path::PathBuf;
use std::sync::Mutex;

const SYLLABUS: &str = "PHIL 101 Schedule
Feb 10, 2025   Essay on Ethics
Feb 31, 2025   Typo in the syllabus
Jan 5, 2025    Quiz 1
";

#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<Vec<SubTask>>>,
}

impl WorkloadRenderer for RecordingRenderer {
    fn render(&self, subtasks: &[SubTask]) -> Result<Option<PathBuf>, RenderError> {
        self.calls.lock().unwrap().push(subtasks.to_vec());
        Ok(Some(PathBuf::from("heatmap.png")))
    }
}

#[derive(Default)]
struct RecordingPusher {
    pushed: Mutex<Vec<(String, String)>>,
    fail_on: Option<&'static str>,
}

impl TaskPusher for RecordingPusher {
    async fn push(&self, task: &SubTask) -> classradar::todoist::Result<()> {
        self.pushed
            .lock()
            .unwrap()
            .push((task.label.clone(), task.date_string()));
        if self.fail_on.is_some_and(|label| task.label == label) {
            return Err(PushError::Rejected(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(())
    }
}

fn collaborators(
    pusher: RecordingPusher,
) -> Collaborators<PlainTextExtractor, RecordingRenderer, RecordingPusher> {
    Collaborators {
        extractor: PlainTextExtractor,
        renderer: Some(RecordingRenderer::default()),
        pusher: Some(pusher),
    }
}

fn config() -> RadarConfig {
    RadarConfig {
        todoist_token: Some("test-token".to_string()),
        ..RadarConfig::default()
    }
}

#[tokio::test]
async fn test_no_deadlines_skips_side_effects() {
    let c = collaborators(RecordingPusher::default());

    let result = process(b"Welcome to the course.\nNo dates here.\n", &config(), &c)
        .await
        .unwrap();

    assert!(result.is_empty());
    let renderer = c.renderer.as_ref().unwrap();
    let pusher = c.pusher.as_ref().unwrap();
    assert_eq!(renderer.calls.lock().unwrap().len(), 0);
    assert_eq!(pusher.pushed.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn test_full_plan_rendered_and_pushed_in_order() {
    let c = collaborators(RecordingPusher::default());

    let result = process(SYLLABUS.as_bytes(), &config(), &c).await.unwrap();

    let labels: Vec<&str> = result.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Research: Essay on Ethics",
            "Draft: Essay on Ethics",
            "Revise: Essay on Ethics",
            "Submit: Essay on Ethics",
            "Research: Quiz 1",
            "Draft: Quiz 1",
            "Revise: Quiz 1",
            "Submit: Quiz 1",
        ]
    );
    assert_eq!(result[0].date_string(), "2025-02-02");
    assert_eq!(result[4].date_string(), "2024-12-28");

    let renders = c.renderer.as_ref().unwrap().calls.lock().unwrap();
    assert_eq!(renders.len(), 1);
    assert_eq!(renders[0], result);

    let pushed = c.pusher.as_ref().unwrap().pushed.lock().unwrap();
    assert_eq!(pushed.len(), 8);
    assert_eq!(
        pushed[3],
        ("Submit: Essay on Ethics".to_string(), "2025-02-08".to_string())
    );
}

#[tokio::test]
async fn test_custom_sub_steps() {
    let c = collaborators(RecordingPusher::default());
    let config = RadarConfig {
        sub_steps: SubStepSequence::new(["Outline", "Write"]),
        ..config()
    };

    let result = process(b"Feb 10, 2025   Essay\n", &config, &c).await.unwrap();

    let pairs: Vec<(String, String)> = result
        .iter()
        .map(|t| (t.label.clone(), t.date_string()))
        .collect();
    // window 02-06..=02-10, step 2
    assert_eq!(
        pairs,
        vec![
            ("Outline: Essay".to_string(), "2025-02-06".to_string()),
            ("Write: Essay".to_string(), "2025-02-08".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_push_failure_is_not_fatal() {
    let c = collaborators(RecordingPusher {
        fail_on: Some("Draft: Essay on Ethics"),
        ..RecordingPusher::default()
    });

    let result = process(SYLLABUS.as_bytes(), &config(), &c).await.unwrap();

    assert_eq!(result.len(), 8);
    assert_eq!(c.pusher.as_ref().unwrap().pushed.lock().unwrap().len(), 8);
}

#[tokio::test]
async fn test_missing_collaborators_are_skipped() {
    let c: Collaborators<PlainTextExtractor, RecordingRenderer, RecordingPusher> = Collaborators {
        extractor: PlainTextExtractor,
        renderer: None,
        pusher: None,
    };

    let result = process(SYLLABUS.as_bytes(), &RadarConfig::default(), &c)
        .await
        .unwrap();
    assert_eq!(result.len(), 8);
}

struct BrokenExtractor;

impl TextExtractor for BrokenExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> classradar::extract::Result<String> {
        Err(classradar::extract::ExtractError::Pdf("bad xref".to_string()))
    }
}

#[tokio::test]
async fn test_extraction_failure_propagates() {
    let c = Collaborators {
        extractor: BrokenExtractor,
        renderer: Some(RecordingRenderer::default()),
        pusher: Some(RecordingPusher::default()),
    };

    let err = process(b"%PDF-1.4", &config(), &c).await.unwrap_err();
    assert!(format!("{:#}", err).contains("bad xref"));
    let renderer = c.renderer.unwrap();
    assert!(renderer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_process_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("syllabus.txt");
    std::fs::write(&path, SYLLABUS).unwrap();
    let c = collaborators(RecordingPusher::default());

    let result = process_file(&path, &config(), &c).await.unwrap();
    assert_eq!(result.len(), 8);

    let missing = process_file(&dir.path().join("nope.pdf"), &config(), &c).await;
    assert!(missing.is_err());
}
