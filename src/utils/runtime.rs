use anyhow::Result;

/// Commands are processed one at a time, so a current thread runtime is all the CLI needs.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
