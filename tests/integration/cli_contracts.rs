use canopy::config::{CanopyConfig, StorageConfig};
use canopy::error::ApiError;
use canopy::tooling::cli::{Cli, CliContext, Commands};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn ephemeral_context() -> CliContext {
    let config = CanopyConfig {
        storage: StorageConfig {
            store_path: None,
            ephemeral: true,
        },
        ..CanopyConfig::default()
    };
    let mut context = CliContext::new(&config, false).unwrap();
    context.set_interactive(false);
    context
}

#[test]
fn test_parse_matrix() {
    let accepted: &[&[&str]] = &[
        &["canopy", "show"],
        &["canopy", "show", "--format", "table", "--all"],
        &["canopy", "--ephemeral", "--no-color", "find", "src"],
        &["canopy", "select", "--clear"],
        &["canopy", "create-file", "notes", "--parent", "src"],
        &["canopy", "create-folder"],
        &["canopy", "move", "readme-md", "--to", "src", "--index", "2"],
        &["canopy", "can-drop", "src", "--to", "public"],
        &["canopy", "import", "-"],
        &["canopy", "--store", "/tmp/x", "reset", "--yes"],
        &["canopy", "--log-level", "debug", "shell"],
    ];
    for args in accepted {
        assert!(Cli::try_parse_from(*args).is_ok(), "rejected {:?}", args);
    }

    let rejected: &[&[&str]] = &[
        &["canopy"],
        &["canopy", "select"],
        &["canopy", "select", "src", "--clear"],
        &["canopy", "rename", "src"],
        &["canopy", "move", "src", "--index", "first"],
        &["canopy", "frobnicate"],
    ];
    for args in rejected {
        assert!(Cli::try_parse_from(*args).is_err(), "accepted {:?}", args);
    }
}

#[test]
fn test_show_json_is_the_exported_tree() {
    let mut context = ephemeral_context();
    let output = context
        .execute(&Commands::Show {
            format: "json".to_string(),
            all: false,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let roots = parsed.as_array().unwrap();
    assert_eq!(roots.len(), 6);
    assert_eq!(roots[1]["type"], "folder");
    assert_eq!(roots[1]["isOpen"], true);
}

#[test]
fn test_find_json_contract() {
    let mut context = ephemeral_context();
    let output = context
        .execute(&Commands::Find {
            id: "src-assets-logo-svg".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["type"], "file");
    assert_eq!(parsed["parent"], "src-assets");
    assert_eq!(parsed["index"], 0);
    assert_eq!(
        parsed["path"],
        serde_json::json!(["src", "src-assets", "src-assets-logo-svg"])
    );
    assert_eq!(parsed["visible"], true);
}

#[test]
fn test_move_and_can_drop_contracts() {
    let mut context = ephemeral_context();
    let verdict = context
        .execute(&Commands::CanDrop {
            id: "src".to_string(),
            to: Some("src-styles".to_string()),
        })
        .unwrap();
    assert!(verdict.starts_with("no: "));

    let err = context
        .execute(&Commands::Move {
            id: "src".to_string(),
            to: Some("readme-md".to_string()),
            index: None,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));

    let output = context
        .execute(&Commands::Move {
            id: "readme-md".to_string(),
            to: Some("public".to_string()),
            index: Some(99),
        })
        .unwrap();
    assert_eq!(output, "Moved readme-md into public");
    let path = context
        .execute(&Commands::Path {
            id: "readme-md".to_string(),
        })
        .unwrap();
    assert_eq!(path, "public/readme-md");
}

#[test]
fn test_import_export_through_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.json");
    let output = temp_dir.path().join("out.json");
    fs::write(
        &input,
        r#"[{"id":"docs","name":"docs","type":"folder","isOpen":true,"children":[{"id":"a","name":"a.md","type":"file","content":"hi"}]}]"#,
    )
    .unwrap();

    let mut context = ephemeral_context();
    let message = context
        .execute(&Commands::Import {
            file: input.clone(),
        })
        .unwrap();
    assert_eq!(message, "Imported 2 nodes");

    context
        .execute(&Commands::Export {
            output: Some(output.clone()),
        })
        .unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let original: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&input).unwrap()).unwrap();
    assert_eq!(written, original);

    fs::write(&input, "[{\"name\":\"no id\"}]").unwrap();
    let err = context.execute(&Commands::Import { file: input }).unwrap_err();
    assert!(matches!(err, ApiError::Import(_)));
    assert!(context.session().tree().contains("docs"));
}

#[test]
fn test_table_and_text_views() {
    let mut context = ephemeral_context();
    let table = context
        .execute(&Commands::Show {
            format: "table".to_string(),
            all: false,
        })
        .unwrap();
    assert!(table.contains("src/components/button.rs"));

    let outline = context
        .execute(&Commands::Show {
            format: "text".to_string(),
            all: false,
        })
        .unwrap();
    assert!(outline.contains("components/"));
    assert!(!outline.contains("button.rs"));

    assert!(context
        .execute(&Commands::Show {
            format: "yaml".to_string(),
            all: false,
        })
        .is_err());
}

#[test]
fn test_shell_session_spans_commands() {
    let mut context = ephemeral_context();
    let script = "\
# comments and blank lines are skipped

rename readme-md \"Read Me.md\"
delete public
undo
undo
history
redo
select public
toggle public
quit
";
    let mut out = Vec::new();
    context.run_shell(script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Renamed readme-md to Read Me.md",
            "Deleted public (3 nodes)",
            "Undid last change",
            "Undid last change",
            "History: 1/3 (limit 30), can undo: no, can redo: yes",
            "Redid last change",
            "Selected public",
            "Expanded public",
        ]
    );
}
