//! Registry sources in every supported document format

use assert_fs::prelude::*;
use predicates::prelude::*;
use registry_core::{BuildOptions, RegistryBuilder};
use registry_fs::NormalizedPath;
use registry_meta::{Error, ItemType, load_registry};

fn options(temp: &assert_fs::TempDir) -> BuildOptions {
    let root = NormalizedPath::new(temp.path());
    BuildOptions {
        registry_dir: root.join("registry"),
        output_dir: root.join("public/r"),
        index_dir: root.join("__registry__"),
        ..BuildOptions::default()
    }
}

#[test]
fn test_toml_items_table() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("registry.toml")
        .write_str(
            r#"[[items]]
name = "use-toast"
type = "registry:hook"
files = ["hooks/use-toast.ts"]

[[items]]
name = "login-01"
type = "registry:block"
category = "authentication"

[[items.files]]
path = "blocks/login-01/page.tsx"
type = "registry:block"
target = "app/login/page.tsx"
"#,
        )
        .unwrap();
    temp.child("registry/hooks/use-toast.ts")
        .write_str("export function useToast() {}\n")
        .unwrap();
    temp.child("registry/blocks/login-01/page.tsx")
        .write_str("export const description = \"A login page.\"\nexport default function Page() {}\n")
        .unwrap();

    let registry = load_registry(&NormalizedPath::new(temp.path().join("registry.toml"))).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.entries()[1].item_type, ItemType::Block);

    RegistryBuilder::new(options(&temp)).build(&registry).unwrap();

    temp.child("public/r/login-01.json")
        .assert(predicate::str::contains("\"target\": \"app/login/page.tsx\""))
        .assert(predicate::str::contains("A login page.").not())
        .assert(predicate::str::contains("authentication").not());
    temp.child("__registry__/index.tsx")
        .assert(predicate::str::contains("category: \"authentication\""));
}

#[test]
fn test_yaml_sequence() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("registry.yml")
        .write_str(
            "- name: utils\n  type: registry:lib\n  dependencies: [clsx, tailwind-merge]\n  files: [lib/utils.ts]\n",
        )
        .unwrap();
    temp.child("registry/lib/utils.ts")
        .write_str("export function cn() {}\n")
        .unwrap();

    let registry = load_registry(&NormalizedPath::new(temp.path().join("registry.yml"))).unwrap();
    RegistryBuilder::new(options(&temp)).build(&registry).unwrap();

    temp.child("public/r/index.json")
        .assert(predicate::str::contains("\"tailwind-merge\""));
    temp.child("public/r/utils.json")
        .assert(predicate::str::contains("export function cn() {}"));
}

#[test]
fn test_json_object_without_items_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("registry.json")
        .write_str(r#"{ "entries": [] }"#)
        .unwrap();

    let err = load_registry(&NormalizedPath::new(temp.path().join("registry.json"))).unwrap_err();
    assert!(matches!(err, Error::InvalidRegistry { .. }), "got: {err}");
}

#[test]
fn test_unknown_format_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("registry.xml").write_str("<items/>").unwrap();

    let err = load_registry(&NormalizedPath::new(temp.path().join("registry.xml"))).unwrap_err();
    assert!(matches!(
        err,
        Error::Fs(registry_fs::Error::UnsupportedFormat { .. })
    ));
}
