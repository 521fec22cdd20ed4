//! End-to-end tests for the full pipeline
//!
//! registry.toml -> load_registry -> RegistryBuilder -> artifacts on disk.

use pretty_assertions::assert_eq;
use registry_core::{BuildOptions, RegistryBuilder};
use registry_fs::compute_file_checksum;
use registry_meta::{load_config, load_registry};
use registry_test_utils::TestSite;
use registry_test_utils::sources::{ALERT_STRIPPED, ALERT_WITH_DIRECTIVES, GLOBALS_CSS, UTILS};
use serde_json::json;

/// Build the site the way the CLI does: config, then registry, then builder.
fn build(site: &TestSite) -> registry_core::BuildReport {
    let root = site.normalized_root();
    let config = load_config(&root).unwrap().build;
    let registry = load_registry(&root.join(&config.registry)).unwrap();
    let options = BuildOptions::from_config(&root, &config).unwrap();
    RegistryBuilder::new(options).build(&registry).unwrap()
}

#[test]
fn test_alert_scenario() {
    let site = TestSite::new();
    site.write_source("ui/alert.tsx", ALERT_WITH_DIRECTIVES);
    site.write_registry(&json!([
        { "name": "alert", "type": "registry:ui", "files": ["ui/alert.tsx"] }
    ]));

    let report = build(&site);
    assert!(report.is_clean());

    assert_eq!(
        site.read_json("public/r/index.json"),
        json!([{
            "name": "alert",
            "type": "registry:ui",
            "files": [{ "path": "ui/alert.tsx", "type": "registry:ui" }]
        }])
    );
    assert_eq!(
        site.read_json("public/r/alert.json"),
        json!({
            "name": "alert",
            "type": "registry:ui",
            "files": [{ "path": "ui/alert.tsx", "type": "registry:ui", "content": ALERT_STRIPPED }]
        })
    );

    let index = site.read("__registry__/index.tsx");
    assert!(index.contains("\"alert\": {\n  name: \"alert\",\n"));
    assert!(index.contains("  files: [\"registry/ui/alert.tsx\"],\n"));
    assert!(index.contains("  component: React.lazy(() => import(\"@/registry/ui/alert\")),\n"));
    assert!(index.contains("  registryDependencies: undefined,\n"));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let site = TestSite::new();
    site.write_source("ui/alert.tsx", ALERT_WITH_DIRECTIVES);
    site.write_source("lib/utils.ts", UTILS);
    site.write_source("styles/globals.css", GLOBALS_CSS);
    site.write_registry(&json!([
        { "name": "alert", "type": "registry:ui", "files": ["ui/alert.tsx"], "registryDependencies": ["utils"] },
        { "name": "utils", "type": "registry:lib", "files": ["lib/utils.ts", { "path": "styles/globals.css", "type": "registry:lib" }] }
    ]));

    let first = build(&site);
    let second = build(&site);
    assert_eq!(first, second);

    for artifact in std::iter::once(&second.manifest)
        .chain(&second.details)
        .chain(std::iter::once(&second.lookup))
    {
        let on_disk = compute_file_checksum(std::path::Path::new(&artifact.path)).unwrap();
        assert_eq!(on_disk, artifact.checksum, "{}", artifact.path);
    }
}

#[test]
fn test_registry_config_redirects_outputs() {
    let site = TestSite::new();
    site.write_file("src/registry/hooks/use-toast.ts", "export function useToast() {}\n");
    site.write_file(
        "registry.toml",
        r#"[build]
registry = "registry.yaml"
registry_dir = "src/registry"
output_dir = "static/r"
index_dir = "generated"
include = ["registry:hook"]
"#,
    );
    site.write_file(
        "registry.yaml",
        "- name: use-toast\n  type: registry:hook\n  files:\n    - hooks/use-toast.ts\n",
    );

    build(&site);

    site.assert_file_exists("static/r/index.json");
    site.assert_file_exists("static/r/use-toast.json");
    site.assert_file_exists("generated/index.tsx");
    site.assert_file_not_exists("public/r/index.json");
    assert_eq!(
        site.read_json("static/r/use-toast.json")["files"][0]["content"],
        "export function useToast() {}\n"
    );
}

#[test]
fn test_stylesheet_content_is_untouched() {
    let site = TestSite::new();
    site.write_source("styles/globals.css", GLOBALS_CSS);
    site.write_registry(&json!([
        { "name": "globals", "type": "registry:lib", "files": ["styles/globals.css"] }
    ]));

    build(&site);
    assert_eq!(
        site.read_json("public/r/globals.json")["files"][0]["content"],
        GLOBALS_CSS
    );
}
