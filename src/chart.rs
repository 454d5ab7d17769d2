//! Renders the monthly expectations as six stacked bar panels.

use crate::error::UsabilityError;
use crate::expectations::MonthlyAggregate;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (1000, 1200);
const MPH_IN_MS: f64 = 0.44704;

struct BarSeries {
    label: &'static str,
    color: RGBColor,
    values: Vec<f64>,
}

struct Panel {
    title: &'static str,
    series: Vec<BarSeries>,
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    32.0 + celsius * 9.0 / 5.0
}

fn panels(rows: &[MonthlyAggregate]) -> Vec<Panel> {
    let values = |f: fn(&MonthlyAggregate) -> f64| rows.iter().map(f).collect::<Vec<_>>();
    let single = |title, label, color, values| Panel {
        title,
        series: vec![BarSeries {
            label,
            color,
            values,
        }],
    };

    vec![
        Panel {
            title: "Temperature",
            series: vec![
                BarSeries {
                    label: "Average Temp (F)",
                    color: RED,
                    values: values(|r| celsius_to_fahrenheit(r.temp)),
                },
                BarSeries {
                    label: "Average Adjusted Temp (F)",
                    color: BLUE,
                    values: values(|r| celsius_to_fahrenheit(r.feelslike)),
                },
            ],
        },
        single(
            "Humidity",
            "Average Humidity (%)",
            CYAN,
            values(|r| r.humidity * 100.0),
        ),
        single(
            "Usability",
            "Average Usability (%)",
            GREEN,
            values(|r| r.usable_fraction * 100.0),
        ),
        single(
            "Precipitation",
            "Average Precipitation (mm)",
            BLUE,
            values(|r| r.precipitation),
        ),
        single(
            "Pressure",
            "Average Pressure (hPa)",
            MAGENTA,
            values(|r| r.pressure),
        ),
        single(
            "Wind",
            "Average Wind Speed (mph)",
            BLACK,
            values(|r| r.windspeed / MPH_IN_MS),
        ),
    ]
}

/// Writes the chart as SVG to `path`, one bar per month in `rows`.
///
/// # Errors
///
/// Returns [`UsabilityError::Chart`] if the file cannot be written.
pub fn render_chart(rows: &[MonthlyAggregate], path: &Path) -> Result<(), UsabilityError> {
    draw(rows, path).map_err(|message| UsabilityError::Chart {
        path: path.display().to_string(),
        message,
    })
}

fn draw(rows: &[MonthlyAggregate], path: &Path) -> Result<(), String> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let labels: Vec<String> = rows
        .iter()
        .map(|row| row.month.name().chars().take(3).collect())
        .collect();

    for (area, panel) in root.split_evenly((6, 1)).iter().zip(panels(rows)) {
        draw_panel(area, &labels, &panel).map_err(|e| e.to_string())?;
    }
    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    labels: &[String],
    panel: &Panel,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (low, high) = panel
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(low, high), v| (low.min(v), high.max(v)));
    let high = if high > 0.0 { high * 1.15 } else { 1.0 };

    let segments = labels.len().max(1) as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(20)
        .y_label_area_size(50)
        .build_cartesian_2d((0..segments).into_segmented(), low..high)?;

    let format_month = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(idx) => labels.get(*idx as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&format_month)
        .draw()?;

    for series in &panel.series {
        let color = series.color;
        chart
            .draw_series(
                series
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_finite())
                    .map(|(idx, value)| {
                        let idx = idx as u32;
                        Rectangle::new(
                            [
                                (SegmentValue::Exact(idx), 0.0),
                                (SegmentValue::Exact(idx + 1), *value),
                            ],
                            color.mix(0.7).filled(),
                        )
                    }),
            )?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}
