//! End-to-end tests for RegistryBuilder

use pretty_assertions::assert_eq;
use registry_core::{BuildOptions, Diagnostic, Error, RegistryBuilder};
use registry_meta::{ItemType, Registry, validate_list};
use registry_test_utils::TestSite;
use registry_test_utils::sources::{ALERT_STRIPPED, ALERT_WITH_DIRECTIVES, USE_TOAST, UTILS};
use serde_json::json;

fn options(site: &TestSite) -> BuildOptions {
    BuildOptions {
        registry_dir: site.registry_dir(),
        output_dir: site.output_dir(),
        index_dir: site.index_dir(),
        ..BuildOptions::default()
    }
}

fn populated_site() -> (TestSite, Registry) {
    let site = TestSite::new();
    site.write_source("ui/alert.tsx", ALERT_WITH_DIRECTIVES);
    site.write_source("hooks/use-toast.ts", USE_TOAST);
    site.write_source("lib/utils.ts", UTILS);

    let registry = validate_list(json!([
        { "name": "alert", "type": "registry:ui", "files": ["ui/alert.tsx"] },
        { "name": "use-toast", "type": "registry:hook", "files": ["hooks/use-toast.ts"] },
        { "name": "utils", "type": "registry:lib", "files": ["lib/utils.ts"] },
        { "name": "alert-demo", "type": "registry:example", "registryDependencies": ["alert"], "files": ["example/alert-demo.tsx"] }
    ]))
    .unwrap();
    (site, registry)
}

#[test]
fn test_build_writes_every_artifact() {
    let (site, registry) = populated_site();

    let report = RegistryBuilder::new(options(&site)).build(&registry).unwrap();

    site.assert_file_exists("public/r/index.json");
    site.assert_file_exists("__registry__/index.tsx");
    for name in ["alert", "use-toast", "utils", "alert-demo"] {
        site.assert_file_exists(&format!("public/r/{name}.json"));
    }
    assert_eq!(report.details.len(), 4);

    let manifest = site.read_json("public/r/index.json");
    let names: Vec<_> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alert", "use-toast", "utils"]);

    assert_eq!(
        site.read_json("public/r/alert.json")["files"][0]["content"],
        ALERT_STRIPPED
    );
}

#[test]
fn test_missing_source_is_tolerated() {
    let (site, registry) = populated_site();

    let report = RegistryBuilder::new(options(&site)).build(&registry).unwrap();

    assert!(!report.is_clean());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::MissingFile { entry, path, .. }]
            if entry == "alert-demo" && path == "example/alert-demo.tsx"
    ));
    assert_eq!(site.read_json("public/r/alert-demo.json")["files"], json!([]));
    site.assert_file_contains("__registry__/index.tsx", "import(\"@/registry/example/alert-demo\")");
}

#[test]
fn test_build_is_idempotent() {
    let (site, registry) = populated_site();
    let builder = RegistryBuilder::new(options(&site));

    let first = builder.build(&registry).unwrap();
    let index_tsx = site.read("__registry__/index.tsx");
    let alert = site.read("public/r/alert.json");

    let second = builder.build(&registry).unwrap();

    assert_eq!(first, second);
    assert_eq!(site.read("__registry__/index.tsx"), index_tsx);
    assert_eq!(site.read("public/r/alert.json"), alert);
}

#[test]
fn test_build_does_not_modify_registry() {
    let (site, registry) = populated_site();
    let before = registry.clone();

    RegistryBuilder::new(options(&site)).build(&registry).unwrap();
    assert_eq!(registry, before);
}

#[test]
fn test_v0_entry_gets_install_targets() {
    let site = TestSite::new();
    site.write_source("v0/dashboard/page.tsx", "export default function Page() {}\n");
    site.write_source("v0/dashboard/use-stats.ts", "export function useStats() {}\n");
    let registry = validate_list(json!([{
        "name": "v0-dashboard",
        "type": "registry:block",
        "files": [
            "v0/dashboard/page.tsx",
            { "path": "v0/dashboard/use-stats.ts", "type": "registry:hook" }
        ]
    }]))
    .unwrap();

    RegistryBuilder::new(options(&site)).build(&registry).unwrap();

    let detail = site.read_json("public/r/v0-dashboard.json");
    assert_eq!(detail["files"][0]["target"], "components/page.tsx");
    assert_eq!(detail["files"][1]["target"], "hooks/use-stats.ts");
}

#[test]
fn test_include_set_drives_manifest() {
    let (site, registry) = populated_site();
    let options = BuildOptions {
        include: vec![ItemType::Example],
        ..options(&site)
    };

    RegistryBuilder::new(options).build(&registry).unwrap();

    let manifest = site.read_json("public/r/index.json");
    assert_eq!(manifest.as_array().unwrap().len(), 1);
    assert_eq!(manifest[0]["name"], "alert-demo");
}

#[test]
fn test_strict_mode_rejects_duplicates_before_writing() {
    let site = TestSite::new();
    let registry = validate_list(json!([
        { "name": "card", "type": "registry:ui" },
        { "name": "card", "type": "registry:example" }
    ]))
    .unwrap();
    let options = BuildOptions {
        strict: true,
        ..options(&site)
    };

    let err = RegistryBuilder::new(options).build(&registry).unwrap_err();

    assert!(matches!(&err, Error::DuplicateName { names } if names == &["card"]));
    site.assert_file_not_exists("public/r/index.json");
    site.assert_file_not_exists("__registry__/index.tsx");
}

#[test]
fn test_unparseable_source_aborts_build() {
    let site = TestSite::new();
    site.write_source("ui/broken.tsx", "export function Broken( {\n");
    let registry = validate_list(json!([
        { "name": "broken", "type": "registry:ui", "files": ["ui/broken.tsx"] }
    ]))
    .unwrap();

    let err = RegistryBuilder::new(options(&site)).build(&registry).unwrap_err();
    assert!(matches!(err, Error::Content { .. }), "got: {err}");
    site.assert_file_not_exists("__registry__/index.tsx");
}
