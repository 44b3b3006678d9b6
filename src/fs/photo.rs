use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Reads an image fully into memory and embeds it as a `data:` URI. The MIME type is guessed
/// from the extension.
pub async fn read_as_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read photo {path:?}"))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
