use crate::core::counter::{count_letters, decode_input};
use crate::core::render::render;
use crate::core::{ConfigProvider, CountReport, Pipeline, SourceText, Storage};
use crate::domain::model::{InputSource, SAMPLE_TEXT};
use crate::utils::error::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct CountPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CountPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CountPipeline<S, C> {
    async fn extract(&self) -> Result<SourceText> {
        let source = match self.config.input() {
            InputSource::Inline(text) => SourceText {
                origin: "inline".to_string(),
                text,
            },
            InputSource::File(path) => {
                tracing::debug!("Reading input file: {}", path);
                let bytes = self.storage.read_file(&path).await?;
                SourceText {
                    text: decode_input(bytes, &path)?,
                    origin: path,
                }
            }
            InputSource::Stdin => {
                tracing::debug!("Reading input from stdin");
                let mut bytes = Vec::new();
                tokio::io::stdin().read_to_end(&mut bytes).await?;
                SourceText {
                    origin: "stdin".to_string(),
                    text: decode_input(bytes, "stdin")?,
                }
            }
            InputSource::Sample => SourceText {
                origin: "sample".to_string(),
                text: SAMPLE_TEXT.to_string(),
            },
        };

        tracing::debug!(
            "Extracted {} characters from {}",
            source.text.chars().count(),
            source.origin
        );
        Ok(source)
    }

    async fn transform(&self, source: SourceText) -> Result<CountReport> {
        let counts = count_letters(&source.text).sorted(self.config.sort_order());
        Ok(CountReport::new(source.origin, counts))
    }

    async fn load(&self, report: &CountReport) -> Result<String> {
        let mut rendered = render(report, self.config.output_format())?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {} bytes to {}", rendered.len(), path);
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(rendered.as_bytes()).await?;
                stdout.flush().await?;
                Ok("stdout".to_string())
            }
        }
    }
}
