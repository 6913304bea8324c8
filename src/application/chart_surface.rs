// Display surface port for the renderer
use crate::application::error::RenderError;
use crate::domain::chart::BarChart;

/// Something a chart can be drawn into, addressed by element id
pub trait ChartSurface {
    fn draw(&mut self, element_id: &str, chart: &BarChart) -> Result<(), RenderError>;
}
