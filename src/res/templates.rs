use crate::utils::http::fetch_bytes;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Locale tags served by the template endpoint, fetched in this order
pub const LOCALES: [&str; 12] = [
    "en-US", "de-DE", "ru-RU", "es-ES", "fr-FR", "ar-AE", "tr-TR", "it-IT", "pt-PT", "ja-JP",
    "zh-tw", "he-IL",
];

const LOADER_PREFIX: &[u8] = b"TemplatesLoader.onloaded(";
const LOADER_SUFFIX: &[u8] = b");";

pub struct TemplatesApi;

impl TemplatesApi {
    /// Resource id of the UI template set
    const RESOURCE_ID: u32 = 1;

    fn get_api_url() -> &'static str {
        "http://services.pressdisplay.com/services/res/"
    }

    /// URL serving the template resource for one locale
    pub fn template_url(locale: &str) -> String {
        format!(
            "{}?id={}&locale={}&ts=",
            Self::get_api_url(),
            Self::RESOURCE_ID,
            locale
        )
    }
}

/// Wrap a fetched template body in the loader callback invocation
pub fn wrap_loader_callback(body: &[u8]) -> Vec<u8> {
    let mut wrapped = Vec::with_capacity(LOADER_PREFIX.len() + body.len() + LOADER_SUFFIX.len());
    wrapped.extend_from_slice(LOADER_PREFIX);
    wrapped.extend_from_slice(body);
    wrapped.extend_from_slice(LOADER_SUFFIX);
    wrapped
}

/// Output file name for a locale tag: its first two characters plus `.jst`
pub fn template_file_name(locale: &str) -> String {
    let prefix: String = locale.chars().take(2).collect();
    format!("{}.jst", prefix)
}

/// Wrap a template body and save it under the templates directory
///
/// Locale tags sharing a two-letter prefix map to the same file, so the most
/// recent write wins.
pub fn write_template(templates_dir: &Path, locale: &str, body: &[u8]) -> io::Result<PathBuf> {
    let path = templates_dir.join(template_file_name(locale));
    fs::write(&path, wrap_loader_callback(body))?;
    Ok(path)
}

/// Download the UI template for every locale and save the wrapped copies
pub async fn fetch_templates(base_path: &str) -> io::Result<Vec<String>> {
    let templates_dir = Path::new(base_path).join("uitemplates");
    let client = reqwest::Client::new();

    let pb = ProgressBar::new(LOCALES.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut downloaded_files = Vec::new();

    for locale in LOCALES {
        pb.set_message(template_file_name(locale));

        let url = TemplatesApi::template_url(locale);
        let body = fetch_bytes(&client, &url).await?;

        let path = write_template(&templates_dir, locale, &body)?;
        downloaded_files.push(path.to_string_lossy().into_owned());
        pb.inc(1);
    }

    pb.finish_with_message("Download complete!");
    Ok(downloaded_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_wrap_loader_callback_wraps_body_exactly() {
        let body = br#"{"header":"<div class=\"h\"/>"}"#;

        let wrapped = wrap_loader_callback(body);

        let mut expected = b"TemplatesLoader.onloaded(".to_vec();
        expected.extend_from_slice(body);
        expected.extend_from_slice(b");");
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn test_wrap_loader_callback_handles_empty_body() {
        assert_eq!(wrap_loader_callback(b""), b"TemplatesLoader.onloaded();");
    }

    #[test]
    fn test_template_file_name_takes_two_letter_prefix() {
        assert_eq!(template_file_name("en-US"), "en.jst");
        assert_eq!(template_file_name("zh-tw"), "zh.jst");
        assert_eq!(template_file_name("he-IL"), "he.jst");
    }

    #[test]
    fn test_template_url_embeds_locale() {
        assert_eq!(
            TemplatesApi::template_url("en-US"),
            "http://services.pressdisplay.com/services/res/?id=1&locale=en-US&ts="
        );
    }

    #[test]
    fn test_write_template_wraps_on_disk() {
        let dir = tempdir().unwrap();

        let path = write_template(dir.path(), "en-US", b"{\"a\":1}").unwrap();

        assert_eq!(path.file_name().unwrap(), "en.jst");
        let saved = std::fs::read(&path).unwrap();
        assert_eq!(saved, b"TemplatesLoader.onloaded({\"a\":1});");
    }

    #[test]
    fn test_write_template_last_write_wins_for_duplicate_prefix() {
        let dir = tempdir().unwrap();

        let first = write_template(dir.path(), "en-US", b"first").unwrap();
        let second = write_template(dir.path(), "en-GB", b"second").unwrap();

        assert_eq!(first, second);
        let saved = std::fs::read(&second).unwrap();
        assert_eq!(saved, b"TemplatesLoader.onloaded(second);");
    }
}
