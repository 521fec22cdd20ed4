//! Tests for preview directive stripping

use pretty_assertions::assert_eq;
use registry_content::{Dialect, EditKind, Error, SourceModule, strip_preview_directives};
use rstest::rstest;

#[rstest]
#[case::bare_const("const description = \"A card\"\n", "")]
#[case::exported("export const iframeHeight = \"600px\"\nexport default function Page() {}\n", "export default function Page() {}\n")]
#[case::let_without_initializer("let description\nexport {}\n", "export {}\n")]
#[case::var_crlf("var containerClassName = \"w-full\";\r\nexport {}\r\n", "export {}\r\n")]
#[case::middle_declarator("const a = 1, description = \"x\", b = 2\n", "const a = 1, b = 2\n")]
#[case::trailing_declarator("const a = 1, description = \"x\"\n", "const a = 1\n")]
#[case::all_declarators("export const description = \"x\", iframeHeight = \"1px\"\nconst keep = 1\n", "const keep = 1\n")]
#[case::shared_line("const containerClassName = \"a\"; export function F() {}\n", " export function F() {}\n")]
#[case::indented("  const description = \"x\"\nconst y = 1\n", "const y = 1\n")]
fn test_strips_directives(#[case] source: &str, #[case] expected: &str) {
    let stripped = strip_preview_directives(source, Dialect::Tsx).unwrap();
    assert_eq!(stripped.content, expected);
    assert!(stripped.is_modified());
}

#[rstest]
#[case::plain_component("export function Alert() {}")]
#[case::nested_declaration("function Page() {\n  const description = \"inner\"\n  return description\n}\n")]
#[case::destructured("const { description } = props\n")]
#[case::jsx_prop("export default function Card() {\n  return <Card description=\"x\" />\n}\n")]
#[case::similar_name("export const descriptionText = \"x\"\n")]
#[case::function_named_like_directive("export function description() {}\n")]
#[case::empty("")]
fn test_leaves_other_sources_untouched(#[case] source: &str) {
    let stripped = strip_preview_directives(source, Dialect::Tsx).unwrap();
    assert_eq!(stripped.content, source);
    assert!(!stripped.is_modified());
}

#[test]
fn test_block_source_snapshot() {
    let source = r#"import { Button } from "@/registry/ui/button"

export const description = "A login form with email and password."

export const iframeHeight = "600px"

export const containerClassName = "w-full h-full"

export default function LoginForm() {
  return <Button>Login</Button>
}
"#;

    let stripped = strip_preview_directives(source, Dialect::Tsx).unwrap();
    let names: Vec<_> = stripped.edits.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["iframeHeight", "containerClassName", "description"]);

    insta::assert_snapshot!(stripped.content.replace("\n\n\n\n\n", "\n<gap>\n"), @r#"
    import { Button } from "@/registry/ui/button"
    <gap>
    export default function LoginForm() {
      return <Button>Login</Button>
    }
    "#);
}

#[test]
fn test_stripping_is_idempotent() {
    let source = "export const description = \"x\"\nexport const Alert = () => null\n";
    let once = strip_preview_directives(source, Dialect::Tsx).unwrap().content;
    let twice = strip_preview_directives(&once, Dialect::Tsx).unwrap().content;
    assert_eq!(once, twice);
}

#[test]
fn test_edits_record_removed_text() {
    let mut module = SourceModule::parse("const a = 1, description = \"x\"\n", Dialect::Tsx).unwrap();
    let edits = module.remove_variable_declaration("description").unwrap();

    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].kind, EditKind::DeleteDeclarator);
    assert_eq!(edits[0].removed, ", description = \"x\"");
    assert!(module.is_modified());
    assert!(!module.has_variable_declaration("description"));
}

#[test]
fn test_removing_absent_name_is_a_no_op() {
    let mut module = SourceModule::parse("export const a = 1\n", Dialect::Tsx).unwrap();
    assert!(module.remove_variable_declaration("iframeHeight").unwrap().is_empty());
    assert!(!module.is_modified());
}

#[rstest]
#[case("export function Alert( {\n")]
#[case("const = 1\n")]
#[case("export default function Page() { return <div> }\n")]
fn test_unparseable_sources_fail(#[case] source: &str) {
    let err = strip_preview_directives(source, Dialect::Tsx).unwrap_err();
    assert!(matches!(err, Error::ParseError { .. }), "got: {err}");
}

#[rstest]
#[case::type_assertion(
    "export const description = \"x\"\nexport function len(v: unknown) { return (<string>v).length }\n",
    "export function len(v: unknown) { return (<string>v).length }\n"
)]
#[case::generic_arrow(
    "export const iframeHeight = \"1px\"\nexport const id = <T>(value: T): T => value\n",
    "export const id = <T>(value: T): T => value\n"
)]
fn test_typescript_sources_use_typescript_grammar(#[case] source: &str, #[case] expected: &str) {
    let dialect = Dialect::from_path("hooks/use-length.ts").unwrap();
    let stripped = strip_preview_directives(source, dialect).unwrap();
    assert_eq!(stripped.content, expected);
}

#[test]
fn test_type_assertion_is_not_tsx() {
    let source = "export function len(v: unknown) { return (<string>v).length }\n";
    assert!(strip_preview_directives(source, Dialect::Tsx).is_err());
    assert!(strip_preview_directives(source, Dialect::TypeScript).is_ok());
}
