use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartLayout, ImageFormat, PlotConfig};
use crate::RttPlotError;
use crate::perf_log::{RELAY_EVENT_TYPE, RttSeries};

const SERIES_COLOUR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

fn render_error<E: std::fmt::Display>(e: E) -> RttPlotError {
    RttPlotError::PlotRenderError {
        reason: e.to_string(),
    }
}

/// Draws the RTT chart onto `root` and presents it. Works on any plotters
/// backend; the bitmap and SVG file backends are picked by [`RttPlotter`].
pub fn render_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    config: &PlotConfig,
) -> Result<(), RttPlotError> {
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())
        .map_err(render_error)?;

    // the mesh draws the grid along with the axis labels
    chart
        .configure_mesh()
        .x_desc(&config.x_desc)
        .y_desc(&config.y_desc)
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            layout.points.iter().copied(),
            SERIES_COLOUR.stroke_width(config.line_width),
        ))
        .map_err(render_error)?
        .label(&config.series_label)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], SERIES_COLOUR.stroke_width(2))
        });

    chart
        .draw_series(
            layout
                .points
                .iter()
                .map(|&point| Circle::new(point, config.marker_size, SERIES_COLOUR.filled())),
        )
        .map_err(render_error)?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Renders RTT series into image files
pub struct RttPlotter {
    config: PlotConfig,
    event_type: String,
}

impl RttPlotter {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            event_type: RELAY_EVENT_TYPE.to_string(),
        }
    }

    /// Event type named in the error when there is nothing to plot
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Renders `series` to `output`, overwriting any existing file. Fails
    /// without touching the filesystem when the series is empty.
    pub fn render_to_file(&self, series: &RttSeries, output: &Path) -> Result<(), RttPlotError> {
        let layout = ChartLayout::for_series(series, &self.config, &self.event_type)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(RttPlotError::OutputDirectoryMissing {
                    path: parent.display().to_string(),
                });
            }
        }

        let format = ImageFormat::from_path(output);
        match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(output, self.config.size).into_drawing_area();
                render_chart(&root, &layout, &self.config)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(output, self.config.size).into_drawing_area();
                render_chart(&root, &layout, &self.config)?;
            }
        }

        info!(
            "Rendered {} samples to {:?} as {:?}, y-axis 0 to {}",
            series.len(),
            output,
            format,
            layout.y_range.end
        );
        Ok(())
    }
}
