use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{self, AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
};

/// Reads the whole file while holding a shared lock, so a concurrent writer can't hand us half
/// a document.
pub async fn read_locked(file: &mut File) -> Result<String, io::Error> {
    file.lock_shared()?;
    let mut contents = String::new();
    let result = file.read_to_string(&mut contents).await;
    file.unlock_async().await?;
    result.map(|_| contents)
}

/// Replaces the file contents while holding an exclusive lock.
pub async fn overwrite_locked(file: &mut File, contents: &[u8]) -> Result<(), io::Error> {
    // Semi-safe acquire-release for a file
    file.lock_exclusive()?;
    let result = overwrite(file, contents).await;
    file.unlock_async().await?;
    result
}

async fn overwrite(file: &mut File, contents: &[u8]) -> Result<(), io::Error> {
    file.set_len(0).await?;
    file.rewind().await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use anyhow::Result;
    use tempfile::tempfile;
    use tokio::io::AsyncSeekExt;

    use super::{overwrite_locked, read_locked};

    #[tokio::test]
    async fn test_read_locked_reads_everything() -> Result<()> {
        let mut file = tempfile()?;
        file.write_all(b"{\"a\":1}\n{\"b\":2}")?;
        let mut file = tokio::fs::File::from_std(file);
        file.rewind().await?;

        assert_eq!(read_locked(&mut file).await?, "{\"a\":1}\n{\"b\":2}");
        Ok(())
    }

    #[tokio::test]
    async fn test_overwrite_truncates_longer_contents() -> Result<()> {
        let mut file = tempfile()?;
        file.write_all(b"a fairly long previous document")?;
        let mut file = tokio::fs::File::from_std(file);

        overwrite_locked(&mut file, b"short").await?;

        file.rewind().await?;
        assert_eq!(read_locked(&mut file).await?, "short");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_locked_empty() -> Result<()> {
        let mut file = tokio::fs::File::from_std(tempfile()?);
        assert_eq!(read_locked(&mut file).await?, "");
        Ok(())
    }
}
