//! Compose document loading tests

use cicdez::error::{ComposeError, ErrorKind};
use cicdez::model::Project;
use cicdez::system::RealSystem;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_local_configs() {
    let project = Project::load_from_str(
        r#"
name: test-local-configs
services:
  web:
    image: nginx
    local_configs:
      - source: ./configs/nginx.conf
        target: /etc/nginx/nginx.conf
      - source: ./app/config.yaml
        target: /app/config.yaml
        uid: "1000"
        gid: "1000"
        mode: 0440
"#,
    )
    .unwrap();

    assert_eq!(project.name.as_deref(), Some("test-local-configs"));
    assert_eq!(project.services.len(), 1);

    let service = project.service("web").unwrap();
    assert_eq!(service.local_configs.len(), 2);
    assert_eq!(service.local_configs[0].source, "./configs/nginx.conf");
    assert_eq!(service.local_configs[0].target, "/etc/nginx/nginx.conf");
    assert_eq!(service.local_configs[1].source, "./app/config.yaml");
    assert_eq!(service.local_configs[1].target, "/app/config.yaml");
    assert_eq!(service.local_configs[1].uid, "1000");
    assert_eq!(service.local_configs[1].gid, "1000");
    assert_eq!(service.local_configs[1].mode.bits(), 0o440);
}

#[test]
fn test_load_prebuild() {
    let project = Project::load_from_str(
        r#"
name: test-prebuild
services:
  web:
    image: node:18
    build:
      context: .
    prebuild:
      - name: Test Suite
        runs-on: node:18
        commands:
          - name: Install dependencies
            command: npm ci
          - name: Run tests
            command: npm test
      - name: Lint
        commands:
          - name: Run linter
            command: npm run lint
"#,
    )
    .unwrap();

    let service = project.service("web").unwrap();
    assert_eq!(service.prebuild.len(), 2);

    // First prebuild job
    assert_eq!(service.prebuild[0].name, "Test Suite");
    assert_eq!(service.prebuild[0].runs_on, "node:18");
    assert_eq!(service.prebuild[0].commands.len(), 2);

    // Second prebuild job (without runs-on)
    assert_eq!(service.prebuild[1].name, "Lint");
    assert_eq!(service.prebuild[1].runs_on, "");
    assert_eq!(service.prebuild[1].commands.len(), 1);
}

#[test]
fn test_services_keep_declaration_order() {
    let project = Project::load_from_str(
        r#"
services:
  zeta:
    image: a
  alpha:
    image: b
  mid:
"#,
    )
    .unwrap();

    let names: Vec<&str> = project.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert!(project.service("mid").unwrap().base.is_empty());
    assert!(project.service("missing").is_none());
}

#[test]
fn test_document_without_services() {
    let project = Project::load_from_str("name: empty\n").unwrap();
    assert!(project.services.is_empty());
}

#[test]
fn test_strict_load_reports_every_service() {
    let error = Project::load_from_str(
        r#"
services:
  web:
    local_configs:
      - target: /etc/app.conf
  db:
    sensitive:
      - target: /run/secret
        format: env
        secrets: []
"#,
    )
    .unwrap_err();

    assert_eq!(error.exit_code(), 4);
    let errors = error.validation_errors().unwrap();
    assert_eq!(
        errors.kinds(),
        vec![ErrorKind::MissingRequiredField, ErrorKind::EmptySecretList]
    );

    let message = error.to_string();
    assert!(message.contains("Validation failed with 2 error(s)"));
    assert!(message.contains("services.web.local_configs[0].source"));
    assert!(message.contains("services.db.sensitive[0].secrets"));
}

#[test]
fn test_lenient_load_keeps_valid_services() {
    let (project, errors) = Project::load_lenient_from_str(
        r#"
services:
  broken:
    image: nginx
    prebuild:
      - name: nothing
  fine:
    local_configs:
      - source: ./a
        target: /a
"#,
    )
    .unwrap();

    assert!(errors.has_errors());
    assert_eq!(errors.len(), 1);

    let broken = project.service("broken").unwrap();
    assert!(broken.prebuild.is_empty());
    assert!(broken.base.contains_key("image"));

    let fine = project.service("fine").unwrap();
    assert_eq!(fine.local_configs.len(), 1);
}

#[test]
fn test_invalid_yaml() {
    let error = Project::load_from_str("services:\n  web: [unclosed\n").unwrap_err();
    assert!(matches!(error, ComposeError::Parse { .. }));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_invalid_layout() {
    let error = Project::load_from_str("services:\n  - web\n").unwrap_err();
    assert!(matches!(error, ComposeError::Schema { .. }));
    assert_eq!(error.exit_code(), 3);

    let error = Project::load_from_str("services:\n  web: nginx\n").unwrap_err();
    assert!(matches!(error, ComposeError::Schema { .. }));

    let error = Project::load_from_str("name: [a]\n").unwrap_err();
    assert!(matches!(error, ComposeError::Schema { .. }));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("compose.yaml");

    fs::write(
        &config_path,
        r#"
services:
  db:
    image: postgres:15
    sensitive:
      - target: /run/secrets/postgres_password
        format: raw
        secrets:
          - source: db_password
        uid: "999"
        gid: "999"
        mode: 0440
"#,
    )
    .unwrap();

    let system = RealSystem;
    let project = Project::load_from_file(&system, config_path.to_str().unwrap()).unwrap();

    let service = project.service("db").unwrap();
    assert_eq!(service.sensitive.len(), 1);
    assert_eq!(service.sensitive[0].uid, "999");
    assert_eq!(service.sensitive[0].secrets[0].source, "db_password");
}

#[test]
fn test_merge_keys_bring_in_shared_extensions() {
    let project = Project::load_from_str(
        r#"
x-common: &common
  local_configs:
    - source: ./a
      target: /a
  prebuild:
    - name: Shared
      commands:
        - command: make check

services:
  web:
    <<: *common
    image: nginx
"#,
    )
    .unwrap();

    let service = project.service("web").unwrap();
    assert_eq!(service.local_configs.len(), 1);
    assert_eq!(service.local_configs[0].target, "/a");
    assert_eq!(service.prebuild[0].name, "Shared");
    assert!(service.base.contains_key("image"));
    assert!(!service.base.contains_key("<<"));
}

#[test]
fn test_merged_extensions_are_validated() {
    let error = Project::load_from_str(
        r#"
x-broken: &broken
  local_configs:
    - source: ./a

services:
  web:
    <<: *broken
"#,
    )
    .unwrap_err();

    let errors = error.validation_errors().unwrap();
    assert_eq!(errors.kinds(), vec![ErrorKind::MissingRequiredField]);
    assert_eq!(
        errors.iter().next().unwrap().path().to_string(),
        "services.web.local_configs[0].target"
    );
}

#[test]
fn test_validation_error_message_lists_every_error() {
    let error = Project::load_from_str(
        "services:\n  web:\n    prebuild:\n      - name: a\n      - name: b\n",
    )
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Validation failed with 2 error(s):\n  \
         - services.web.prebuild[0].commands: prebuild job 'a' must declare at least one command\n  \
         - services.web.prebuild[1].commands: prebuild job 'b' must declare at least one command"
    );
}
