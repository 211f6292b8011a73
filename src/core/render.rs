use crate::domain::model::{CountReport, OutputFormat};
use crate::utils::error::{CountError, Result};

pub fn render(report: &CountReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Debug => Ok(report.counts.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_delimited(report, b','),
        OutputFormat::Tsv => render_delimited(report, b'\t'),
    }
}

fn render_delimited(report: &CountReport, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["letter", "count"])?;
    for (letter, count) in report.counts.iter() {
        writer.write_record([letter.to_string(), count.to_string()])?;
    }

    let bytes = writer.into_inner().map_err(|e| CountError::OutputError {
        message: format!("Failed to flush CSV writer: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| CountError::OutputError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
