use persona::{ContextProvider, LoadError, PersonaContext, PromptBuilder, ResourcePaths};
use std::fs;
use tempfile::tempdir;

fn write_resources(dir: &std::path::Path) {
    fs::write(
        dir.join("facts.json"),
        r#"{"full_name": "Ada Lovelace", "name": "Ada", "born": 1815}"#,
    )
    .unwrap();
    fs::write(dir.join("summary.txt"), "Mathematician.\n").unwrap();
    fs::write(dir.join("linkedin.txt"), "Analyst, Analytical Engine\n").unwrap();
    fs::write(dir.join("style.txt"), "Precise and poetic.\n").unwrap();
}

#[test]
fn loads_conventional_layout() {
    let dir = tempdir().unwrap();
    write_resources(dir.path());
    let ctx = PersonaContext::load(dir.path()).unwrap();
    assert_eq!(ctx.facts().name().unwrap(), "Ada");
    assert_eq!(ctx.summary(), "Mathematician.\n");
    assert_eq!(ctx.profile(), "Analyst, Analytical Engine\n");
    assert_eq!(ctx.style(), "Precise and poetic.\n");

    let prompt = PromptBuilder::new(ctx).build_system_prompt().unwrap();
    assert!(prompt.contains("\"born\": 1815"));
}

#[test]
fn overridden_path_wins() {
    let dir = tempdir().unwrap();
    write_resources(dir.path());
    let voice = dir.path().join("voice.md");
    fs::write(&voice, "Dry wit.").unwrap();
    let ctx = PersonaContext::load_from(&ResourcePaths::in_dir(dir.path()).style(&voice)).unwrap();
    assert_eq!(ctx.style(), "Dry wit.");
}

#[test]
fn missing_file_names_its_path() {
    let dir = tempdir().unwrap();
    write_resources(dir.path());
    fs::remove_file(dir.path().join("linkedin.txt")).unwrap();
    let err = PersonaContext::load(dir.path()).unwrap_err();
    match &err {
        LoadError::Io { path, .. } => assert!(path.ends_with("linkedin.txt")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("linkedin.txt"));
}

#[test]
fn malformed_facts_are_rejected() {
    let dir = tempdir().unwrap();
    write_resources(dir.path());
    fs::write(dir.path().join("facts.json"), "[\"not\", \"an object\"]").unwrap();
    assert!(matches!(
        PersonaContext::load(dir.path()),
        Err(LoadError::Json { .. })
    ));
}

#[test]
fn nameless_facts_load_but_do_not_render() {
    let dir = tempdir().unwrap();
    write_resources(dir.path());
    fs::write(dir.path().join("facts.json"), r#"{"born": 1815}"#).unwrap();
    let ctx = PersonaContext::load(dir.path()).unwrap();
    assert!(PromptBuilder::new(ctx).build_system_prompt().is_err());
}
