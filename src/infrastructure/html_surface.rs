// HTML page display surface, drawn with Chart.js in the browser
use crate::application::chart_surface::ChartSurface;
use crate::application::error::RenderError;
use crate::domain::chart::BarChart;
use std::path::Path;

const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js";

#[derive(Debug, Clone)]
pub struct HtmlChartSurface {
    document: String,
}

impl HtmlChartSurface {
    /// Wrap an existing HTML document. Drawing fails unless it already holds the target element.
    pub fn new(document: String) -> Self {
        Self { document }
    }

    /// Standalone rainfall page with a single canvas named `element_id`
    pub fn page(element_id: &str) -> Self {
        let element_id = escape_attribute(element_id);
        Self::new(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Rainfall</title>
<script src="{CHART_JS_SRC}"></script>
</head>
<body>
<div style="position: relative; height: 400px;">
<canvas id="{element_id}"></canvas>
</div>
</body>
</html>
"#
        ))
    }

    pub fn into_document(self) -> String {
        self.document
    }

    pub async fn write_to(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        tokio::fs::write(path, &self.document)
            .await
            .map_err(|source| RenderError::Write {
                path: path.display().to_string(),
                source,
            })
    }

    /// Looks for an `id` attribute (single or double quoted) equal to `element_id`
    fn has_element(&self, element_id: &str) -> bool {
        let escaped = escape_attribute(element_id);
        ['"', '\''].into_iter().any(|quote| {
            let needle = format!("id={quote}{escaped}{quote}");
            self.document.match_indices(&needle).any(|(idx, _)| {
                self.document[..idx]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
            })
        })
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ChartSurface for HtmlChartSurface {
    fn draw(&mut self, element_id: &str, chart: &BarChart) -> Result<(), RenderError> {
        if !self.has_element(element_id) {
            return Err(RenderError::MissingElement(element_id.to_string()));
        }

        // "</" would close the script element early
        let config = serde_json::to_string(chart)?.replace("</", "<\\/");
        let id = serde_json::to_string(element_id)?.replace("</", "<\\/");
        let script = format!(
            "<script>\nnew Chart(document.getElementById({id}), {config});\n</script>\n"
        );

        match self.document.rfind("</body>") {
            Some(idx) => self.document.insert_str(idx, &script),
            None => self.document.push_str(&script),
        }
        tracing::debug!(
            "Drew {} days ({} mm) into #{}",
            chart.labels().len(),
            chart.series().iter().sum::<f64>(),
            element_id
        );
        Ok(())
    }
}
