//! Server side rendering of the root view into a complete HTML document.

use helloview_frontend::RootView;
use yew::ServerRenderer;

const TITLE: &str = "helloview";

/// Tailwind's play CDN resolves the utility classes in the browser.
const TAILWIND: &str = "https://cdn.tailwindcss.com";

pub async fn render() -> String {
    let body = ServerRenderer::<RootView>::new()
        .hydratable(false)
        .render()
        .await;

    wrap(&body)
}

fn wrap(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{TITLE}</title>
    <script src="{TAILWIND}"></script>
</head>
<body>{body}</body>
</html>
"#
    )
}
