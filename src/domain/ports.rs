use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of `path`, used in log and console output.
    fn location(&self, path: &str) -> String;
}

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}
