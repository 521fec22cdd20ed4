//! Sample registry sources.

/// A `ui` component with the three preview directives a docs page reads.
pub const ALERT_WITH_DIRECTIVES: &str = r#"import * as React from "react"
export const iframeHeight = "600px"
export const containerClassName = "w-full h-full"
export const description = "A simple alert."

export function Alert() {
  return <div role="alert" />
}
"#;

/// [`ALERT_WITH_DIRECTIVES`] after stripping.
pub const ALERT_STRIPPED: &str = r#"import * as React from "react"

export function Alert() {
  return <div role="alert" />
}
"#;

/// A hook with no directives.
pub const USE_TOAST: &str = r#"import * as React from "react"

export function useToast() {
  const [toasts, setToasts] = React.useState([])
  return { toasts, setToasts }
}
"#;

/// A `lib` helper.
pub const UTILS: &str = r#"export function cn(...inputs: string[]) {
  return inputs.filter(Boolean).join(" ")
}
"#;

/// A stylesheet, passed through untouched.
pub const GLOBALS_CSS: &str = r#"@tailwind base;
:root { --description: "kept"; }
"#;
