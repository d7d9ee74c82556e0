/// Integration tests for the merge engine and the application layer
mod test_utilities;

use analyzer_merge::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use test_utilities::mocks::*;

fn id(name: &str) -> Identifier {
    Identifier::new("Maven", "org.example", name, "1.0")
}

fn project_id(name: &str) -> Identifier {
    Identifier::new("Gradle", "org.example", name, "1.0")
}

fn package(name: &str) -> Package {
    Package::new(id(name))
}

/// Two projects sharing `shared`, with `app` pulling `leaf` in transitively
fn sample_results() -> (AnalyzerResult, AnalyzerResult) {
    let shared = package("shared");
    let leaf = package("leaf");
    let only_app = package("only-app");
    let only_tool = package("only-tool");

    let app_scope = Scope::new(
        "compile",
        true,
        BTreeSet::from([
            shared.to_reference_with(BTreeSet::from([leaf.to_reference()])),
            only_app.to_reference(),
        ]),
    );
    let app = AnalyzerResult::new(
        false,
        Project::new(project_id("app"), BTreeSet::from([app_scope])),
        BTreeSet::from([shared.clone(), leaf, only_app]),
        vec!["Could not resolve optional dependency".to_string()],
    );

    let tool_scopes = BTreeSet::from([
        Scope::new("runtime", true, BTreeSet::from([shared.to_reference()])),
        Scope::new("test", false, BTreeSet::from([only_tool.to_reference()])),
    ]);
    let tool = AnalyzerResult::new(
        false,
        Project::new(project_id("tool"), tool_scopes),
        BTreeSet::from([shared, only_tool]),
        vec![],
    );

    (app, tool)
}

fn merge(results: &[(&str, AnalyzerResult)]) -> MergedAnalyzerResult {
    let mut builder = MergedResultsBuilder::new(false, Path::new("/work/repo"), VcsInfo::EMPTY)
        .unwrap();
    for (file, result) in results {
        builder.add_result(file, result.clone()).unwrap();
    }
    builder.build()
}

#[test]
fn test_merge_then_split_restores_inputs() {
    let (app, tool) = sample_results();
    let merged = merge(&[
        ("/app/analyzer-result.yml", app.clone()),
        ("/tool/analyzer-result.yml", tool.clone()),
    ]);

    assert_eq!(merged.projects().len(), 2);
    assert_eq!(merged.packages().len(), 4);
    assert_eq!(merged.repository().name, "repo");
    assert_eq!(merged.repository().normalized_path, "/work/repo");

    let split = merged.create_analyzer_results().unwrap();
    assert_eq!(split, vec![app, tool]);
}

#[test]
fn test_merge_is_independent_of_registration_order() {
    let (app, tool) = sample_results();
    let forward = merge(&[
        ("/app/analyzer-result.yml", app.clone()),
        ("/tool/analyzer-result.yml", tool.clone()),
    ]);
    let backward = merge(&[
        ("/tool/analyzer-result.yml", tool),
        ("/app/analyzer-result.yml", app),
    ]);

    assert_eq!(forward, backward);
    assert_eq!(
        YamlSerializer::new().serialize_merged(&forward).unwrap(),
        YamlSerializer::new().serialize_merged(&backward).unwrap()
    );
}

#[test]
fn test_errors_stay_with_their_project() {
    let (app, tool) = sample_results();
    let merged = merge(&[
        ("/app/analyzer-result.yml", app),
        ("/tool/analyzer-result.yml", tool),
    ]);

    assert!(merged.has_errors());
    assert_eq!(merged.error_count(), 1);

    let split = merged.create_analyzer_results().unwrap();
    assert_eq!(split[0].errors.len(), 1);
    assert!(split[1].errors.is_empty());
}

#[test]
fn test_split_only_includes_reachable_packages() {
    let (app, tool) = sample_results();
    let merged = merge(&[
        ("/app/analyzer-result.yml", app),
        ("/tool/analyzer-result.yml", tool),
    ]);

    let split = merged.create_analyzer_results().unwrap();
    let tool_ids: BTreeSet<Identifier> = split[1].packages.iter().map(|p| p.id.clone()).collect();
    assert_eq!(tool_ids, BTreeSet::from([id("only-tool"), id("shared")]));
}

#[test]
fn test_yaml_and_json_round_trip() {
    let (app, tool) = sample_results();
    let merged = merge(&[
        ("/app/analyzer-result.yml", app),
        ("/tool/analyzer-result.json", tool),
    ]);

    let yaml = YamlSerializer::new();
    let decoded = yaml
        .deserialize_merged(&yaml.serialize_merged(&merged).unwrap())
        .unwrap();
    assert_eq!(decoded, merged);

    let json = JsonSerializer::new();
    let decoded = json
        .deserialize_merged(&json.serialize_merged(&merged).unwrap())
        .unwrap();
    assert_eq!(decoded, merged);
    assert_eq!(
        decoded.results_file_for(&project_id("tool")),
        Some("/tool/analyzer-result.json")
    );
}

#[test]
fn test_round_trip_with_separator_in_identifier_components() {
    let odd = Package::new(Identifier::new("Maven", "org:weird", "a", "1"));
    let scope = Scope::new("compile", true, BTreeSet::from([odd.to_reference()]));
    let app = AnalyzerResult::new(
        false,
        Project::new(
            Identifier::new("Gradle", "org:weird", "app", "1.0"),
            BTreeSet::from([scope]),
        ),
        BTreeSet::from([odd]),
        vec!["Could not resolve optional dependency".to_string()],
    );
    let merged = merge(&[("/app/analyzer-result.yml", app.clone())]);

    let yaml = YamlSerializer::new();
    let decoded = yaml
        .deserialize_merged(&yaml.serialize_merged(&merged).unwrap())
        .unwrap();
    assert_eq!(decoded, merged);

    let json = JsonSerializer::new();
    let decoded = json
        .deserialize_merged(&json.serialize_merged(&merged).unwrap())
        .unwrap();
    assert_eq!(decoded, merged);
    assert_eq!(decoded.create_analyzer_results().unwrap(), vec![app]);
}

#[test]
fn test_reject_policy_reports_conflicting_package() {
    let (app, tool) = sample_results();
    let mut described = package("shared");
    described.description = "A different description".to_string();
    let mut conflicting = tool;
    conflicting.packages.retain(|p| p.id != id("shared"));
    conflicting.packages.insert(described);

    let mut builder = MergedResultsBuilder::new(false, Path::new("/work/repo"), VcsInfo::EMPTY)
        .unwrap()
        .with_conflict_policy(PackageConflictPolicy::Reject);
    builder.add_result("/app/analyzer-result.yml", app).unwrap();

    let err = builder
        .add_result("/tool/analyzer-result.yml", conflicting)
        .unwrap_err();
    match err.downcast_ref::<MergeError>() {
        Some(MergeError::ConflictingPackage { package, .. }) => assert_eq!(package, &id("shared")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(builder.project_count(), 1);
}

#[test]
fn test_merge_use_case_with_mocks() {
    let (app, tool) = sample_results();
    let yaml = YamlSerializer::new();
    let json = JsonSerializer::new();
    let reader = MockResultFileReader::new()
        .with_file(
            "/repo/app/analyzer-result.yml",
            yaml.serialize_analyzer_result(&app).unwrap(),
        )
        .with_file(
            "/repo/tool/analyzer-result.json",
            json.serialize_analyzer_result(&tool).unwrap(),
        );
    let reporter = MockProgressReporter::new();

    let use_case = MergeResultsUseCase::new(reader, reporter.clone());
    let request = MergeRequest::new(
        PathBuf::from("/repo"),
        vec![
            PathBuf::from("/repo/app/analyzer-result.yml"),
            PathBuf::from("/repo/tool/analyzer-result.json"),
        ],
        false,
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.duplicate_projects, 0);
    assert!(response.has_analyzer_errors());
    assert_eq!(response.merged_result.projects().len(), 2);
    assert_eq!(
        response.merged_result.results_file_for(&project_id("app")),
        Some("/repo/app/analyzer-result.yml")
    );

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Progress: 2/2")));
    assert!(messages.iter().any(|m| m.starts_with("Completed: ")));
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_merge_use_case_warns_on_duplicate_project() {
    let (app, _) = sample_results();
    let content = YamlSerializer::new().serialize_analyzer_result(&app).unwrap();
    let reader = MockResultFileReader::new()
        .with_file("/repo/a.yml", content.clone())
        .with_file("/repo/b.yml", content);
    let reporter = MockProgressReporter::new();

    let use_case = MergeResultsUseCase::new(reader, reporter.clone());
    let request = MergeRequest::new(
        PathBuf::from("/repo"),
        vec![PathBuf::from("/repo/a.yml"), PathBuf::from("/repo/b.yml")],
        false,
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.duplicate_projects, 1);
    assert_eq!(
        response.merged_result.results_file_for(&project_id("app")),
        Some("/repo/b.yml")
    );
    assert!(reporter
        .warnings()
        .iter()
        .any(|w| w.contains("already registered")));
}

#[test]
fn test_merge_use_case_missing_file() {
    let use_case = MergeResultsUseCase::new(MockResultFileReader::new(), MockProgressReporter::new());
    let request = MergeRequest::new(
        PathBuf::from("/repo"),
        vec![PathBuf::from("/repo/missing.yml")],
        false,
    );
    let err = use_case.execute(request).unwrap_err();
    assert!(err.to_string().contains("Mock result file not found"));
}

#[test]
fn test_split_use_case_with_mocks() {
    let (app, tool) = sample_results();
    let merged = merge(&[
        ("/app/analyzer-result.yml", app.clone()),
        ("/tool/analyzer-result.json", tool.clone()),
    ]);
    let reader = MockResultFileReader::new().with_file(
        "/out/merged.json",
        JsonSerializer::new().serialize_merged(&merged).unwrap(),
    );

    let use_case = SplitResultsUseCase::new(reader, MockProgressReporter::new());
    let response = use_case
        .execute(SplitRequest::new(PathBuf::from("/out/merged.json")))
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].source_file, "/app/analyzer-result.yml");
    assert_eq!(response.results[0].result, app);
    assert_eq!(response.results[1].source_file, "/tool/analyzer-result.json");
    assert_eq!(response.results[1].result, tool);
}

#[test]
fn test_split_use_case_rejects_unsupported_extension() {
    let reader = MockResultFileReader::new().with_file("/out/merged.txt", "{}");
    let use_case = SplitResultsUseCase::new(reader, MockProgressReporter::new());
    let err = use_case
        .execute(SplitRequest::new(PathBuf::from("/out/merged.txt")))
        .unwrap_err();
    assert!(err.to_string().contains("Unsupported result file format"));
}
