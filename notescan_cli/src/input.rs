use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Marker for reading recognized text from standard input.
pub const STDIN_SOURCE: &str = "-";

/// Read recognized text from a file path, or from stdin when `source` is `-`.
pub async fn read_input(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read recognized text from stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read recognized text from {}", source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("notescan-input-{}.txt", std::process::id()));
        tokio::fs::write(&path, "Scanned page. Second line.").await.unwrap();

        let text = read_input(path.to_str().unwrap()).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(text, "Scanned page. Second line.");
    }

    #[tokio::test]
    async fn test_read_input_missing_file() {
        let err = read_input("/definitely/not/here.txt").await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
