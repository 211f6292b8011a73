use crate::domain::model::{CountReport, InputSource, OutputFormat, SortOrder, SourceText};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input(&self) -> InputSource;
    fn output_format(&self) -> OutputFormat;
    fn sort_order(&self) -> SortOrder;
    /// `None` means stdout.
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceText>;
    async fn transform(&self, source: SourceText) -> Result<CountReport>;
    async fn load(&self, report: &CountReport) -> Result<String>;
}
