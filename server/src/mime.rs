use std::path::Path;

use mime::Mime;

const FALLBACK: Mime = mime::APPLICATION_OCTET_STREAM;

pub fn from_path(path: &Path) -> Mime {
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .map(from_extension)
        .unwrap_or(FALLBACK)
}

pub fn from_extension(ext: &str) -> Mime {
    raw_from_ext(ext).parse().unwrap_or(FALLBACK)
}

fn raw_from_ext(ext: &str) -> &'static str {
    match ext {
        "css" => "text/css",
        "html" => "text/html",
        "ico" => "image/x-icon",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "wasm" => "application/wasm",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_extensions() {
        assert_eq!(from_path(Path::new("helloview-frontend-1a2b.js")).as_ref(), "application/javascript");
        assert_eq!(from_path(Path::new("helloview-frontend-1a2b_bg.wasm")).as_ref(), "application/wasm");
        assert_eq!(from_path(Path::new("index.html")), mime::TEXT_HTML);
        assert_eq!(from_path(Path::new("style.css")), mime::TEXT_CSS);
    }

    #[test]
    fn unknown_falls_back() {
        assert_eq!(from_path(Path::new("LICENSE")), mime::APPLICATION_OCTET_STREAM);
        assert_eq!(from_extension("exe"), mime::APPLICATION_OCTET_STREAM);
    }
}
