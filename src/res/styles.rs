use crate::utils::http::fetch_bytes;
use reqwest;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stylesheets shipped with the reader bundle, fetched in this order
pub const STYLE_FILES: [&str; 4] = [
    "html5reset.css",
    "style-core.css",
    "style-textview.css",
    "style-radio.css",
];

pub struct StylesApi;

impl StylesApi {
    fn get_api_url() -> &'static str {
        "http://cache-res.pressdisplay.com/res/en-us/g1/t170896862/2/WebResource.ashx"
    }

    /// URL serving a single named stylesheet
    pub fn style_url(name: &str) -> String {
        format!("{}?style={}", Self::get_api_url(), name)
    }
}

/// Rewrite font and image paths so they resolve relative to the bundle layout
///
/// Applies two single-pass substring replacements in order: `/fonts/` becomes
/// `../fonts/`, then `images/` becomes `../images/`. Everything outside a
/// match is left untouched.
pub fn rewrite_asset_paths(css: &str) -> String {
    css.replace("/fonts/", "../fonts/")
        .replace("images/", "../images/")
}

/// Decode a fetched stylesheet body, which must be valid UTF-8
pub fn decode_style(name: &str, bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Stylesheet {} is not valid UTF-8: {}", name, e),
        )
    })
}

/// Rewrite a fetched stylesheet and save it under the styles directory
pub fn write_style(styles_dir: &Path, name: &str, css: &str) -> io::Result<PathBuf> {
    let path = styles_dir.join(name);
    fs::write(&path, rewrite_asset_paths(css))?;
    Ok(path)
}

/// Download every bundle stylesheet and save the rewritten copies
pub async fn fetch_styles(base_path: &str) -> io::Result<Vec<String>> {
    let styles_dir = Path::new(base_path).join("styles");
    let client = reqwest::Client::new();
    let mut downloaded_files = Vec::new();

    for name in STYLE_FILES {
        let url = StylesApi::style_url(name);
        println!("Downloading {} from {}", name, url);

        let bytes = fetch_bytes(&client, &url).await?;
        let css = decode_style(name, bytes)?;

        let path = write_style(&styles_dir, name, &css)?;
        downloaded_files.push(path.to_string_lossy().into_owned());
    }

    Ok(downloaded_files)
}
