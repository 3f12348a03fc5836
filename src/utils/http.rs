use reqwest;
use std::io;

/// Fetch a resource over HTTP GET and return the raw body bytes
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> io::Result<Vec<u8>> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Request error: {}", e)))?;

    if !response.status().is_success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} for URL: {}", response.status(), url),
        ));
    }

    let bytes = response.bytes().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to read response bytes: {}", e),
        )
    })?;

    Ok(bytes.to_vec())
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "ResFetch"
}

// TODO: Add tests with proper test dependencies
