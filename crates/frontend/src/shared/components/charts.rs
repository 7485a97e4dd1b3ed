//! SVG chart components
//!
//! Area chart with a secondary axis, horizontal bar chart and pie chart.
//! Components take already projected series; geometry helpers are plain
//! functions so they can be checked without a DOM.

use leptos::prelude::*;

/// A named series of values, one per category
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// A labelled pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Text drawn next to the slice, e.g. "Aspirin (42.0%)"
    pub label: String,
}

/// Drawing area inside an SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 360.0,
            left: 64.0,
            right: 64.0,
            top: 16.0,
            bottom: 40.0,
        }
    }
}

impl ChartFrame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// Vertical position of `value` on a scale from zero to `max`
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 || !value.is_finite() {
            return self.baseline();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.baseline() - ratio * self.plot_height()
    }

    /// Evenly spread x positions for `count` categories
    pub fn x_positions(&self, count: usize) -> Vec<f64> {
        match count {
            0 => vec![],
            1 => vec![self.left + self.plot_width() / 2.0],
            n => {
                let step = self.plot_width() / (n - 1) as f64;
                (0..n).map(|i| self.left + step * i as f64).collect()
            }
        }
    }
}

/// Upper bound of an axis: the data maximum rounded up to 1, 2 or 5 × 10^k.
/// Empty, non-positive or non-finite data gives 1.
pub fn nice_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Line path and closed area path for one series
pub fn area_paths(values: &[f64], max: f64, frame: &ChartFrame) -> (String, String) {
    let xs = frame.x_positions(values.len());
    if xs.is_empty() {
        return (String::new(), String::new());
    }

    let mut line = String::new();
    for (i, (x, value)) in xs.iter().zip(values).enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        line.push_str(&format!("{}{:.1},{:.1} ", cmd, x, frame.y_for(*value, max)));
    }
    let line = line.trim_end().to_string();

    let baseline = frame.baseline();
    let area = format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line,
        xs[xs.len() - 1],
        baseline,
        xs[0],
        baseline
    );
    (line, area)
}

/// Closed wedge path between two angles (degrees, clockwise from 12 o'clock)
pub fn pie_wedge_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let point = |deg: f64| {
        let rad = (deg - 90.0).to_radians();
        (cx + radius * rad.cos(), cy + radius * rad.sin())
    };
    let (x1, y1) = point(start_deg);
    let (x2, y2) = point(end_deg);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    format!(
        "M{:.1},{:.1} L{:.1},{:.1} A{:.1},{:.1} 0 {} 1 {:.1},{:.1} Z",
        cx, cy, x1, y1, radius, radius, large_arc, x2, y2
    )
}

fn tick_values(max: f64) -> Vec<f64> {
    (0..=4).map(|i| max * i as f64 / 4.0).collect()
}

/// Area chart over categories with a primary (left) and secondary (right) scale
#[component]
pub fn AreaChart(
    categories: Vec<String>,
    /// Series plotted against the left axis
    primary: Vec<ChartSeries>,
    /// Series plotted against the right axis
    secondary: Vec<ChartSeries>,
    /// Formats left axis ticks and tooltips
    format_primary: fn(f64) -> String,
    format_secondary: fn(f64) -> String,
) -> impl IntoView {
    let frame = ChartFrame::default();
    let primary_max = nice_max(primary.iter().flat_map(|s| s.values.iter()));
    let secondary_max = nice_max(secondary.iter().flat_map(|s| s.values.iter()));
    let xs = frame.x_positions(categories.len());

    let grid = tick_values(primary_max)
        .into_iter()
        .zip(tick_values(secondary_max))
        .map(|(left_value, right_value)| {
            let y = frame.y_for(left_value, primary_max);
            view! {
                <g class="chart__grid">
                    <line
                        x1=frame.left
                        y1=y
                        x2={frame.width - frame.right}
                        y2=y
                        stroke="var(--color-border, #e0e0e0)"
                        stroke-dasharray="3,3"
                    />
                    <text x={frame.left - 8.0} y={y + 4.0} text-anchor="end" font-size="11" fill="var(--color-text-secondary, #666)">
                        {format_primary(left_value)}
                    </text>
                    <text x={frame.width - frame.right + 8.0} y={y + 4.0} text-anchor="start" font-size="11" fill="var(--color-text-secondary, #666)">
                        {format_secondary(right_value)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let x_labels = categories
        .iter()
        .zip(xs.iter())
        .map(|(label, x)| {
            view! {
                <text x={*x} y={frame.baseline() + 20.0} text-anchor="middle" font-size="11" fill="var(--color-text-secondary, #666)">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let render_series = move |series: Vec<ChartSeries>, max: f64, format: fn(f64) -> String| {
        let xs = xs.clone();
        let categories = categories.clone();
        series
            .into_iter()
            .map(|s| {
                let (line, area) = area_paths(&s.values, max, &frame);
                let points = s
                    .values
                    .iter()
                    .zip(xs.iter())
                    .zip(categories.iter())
                    .map(|((value, x), category)| {
                        let tooltip = format!("{} · {}: {}", category, s.name, format(*value));
                        view! {
                            <circle cx={*x} cy={frame.y_for(*value, max)} r="3" fill=s.color.clone()>
                                <title>{tooltip}</title>
                            </circle>
                        }
                    })
                    .collect_view();
                view! {
                    <g class="chart__series">
                        <path d=area fill=s.color.clone() fill-opacity="0.3" stroke="none" />
                        <path d=line fill="none" stroke=s.color.clone() stroke-width="2" />
                        {points}
                    </g>
                }
            })
            .collect_view()
    };

    let legend_items: Vec<(String, String)> = primary
        .iter()
        .chain(secondary.iter())
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect();

    let primary_view = render_series(primary, primary_max, format_primary);
    let secondary_view = render_series(secondary, secondary_max, format_secondary);

    view! {
        <div class="chart chart--area">
            <svg viewBox=format!("0 0 {} {}", frame.width, frame.height) preserveAspectRatio="xMidYMid meet" width="100%">
                {grid}
                {primary_view}
                {secondary_view}
                {x_labels}
            </svg>
            <ChartLegend items=legend_items />
        </div>
    }
}

/// Horizontal bars in the given order, one row per item
#[component]
pub fn HorizontalBarChart(
    data: Vec<(String, f64)>,
    #[prop(into)] color: String,
    format_value: fn(f64) -> String,
) -> impl IntoView {
    let label_width = 150.0;
    let value_width = 90.0;
    let row_height = 32.0;
    let width = 720.0;
    let height = (data.len() as f64 * row_height).max(row_height);
    let bar_area = width - label_width - value_width;
    let max = nice_max(data.iter().map(|(_, v)| v));

    let rows = data
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let y = i as f64 * row_height;
            let bar_width = if value.is_finite() && value > 0.0 {
                (value / max).min(1.0) * bar_area
            } else {
                0.0
            };
            let formatted = format_value(value);
            view! {
                <g class="chart__bar">
                    <text x={label_width - 8.0} y={y + row_height / 2.0 + 4.0} text-anchor="end" font-size="12" fill="var(--color-text-primary, #333)">
                        {label.clone()}
                    </text>
                    <rect x=label_width y={y + 6.0} width=bar_width height={row_height - 12.0} fill=color.clone() rx="3">
                        <title>{format!("{}: {}", label, formatted)}</title>
                    </rect>
                    <text x={label_width + bar_width + 6.0} y={y + row_height / 2.0 + 4.0} font-size="11" fill="var(--color-text-secondary, #666)">
                        {formatted.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--bar">
            <svg viewBox=format!("0 0 {} {}", width, height) preserveAspectRatio="xMidYMid meet" width="100%">
                {rows}
            </svg>
        </div>
    }
}

/// Pie chart; slices are drawn in the given order starting at 12 o'clock
#[component]
pub fn PieChart(slices: Vec<PieSlice>, format_value: fn(f64) -> String) -> impl IntoView {
    let size = 360.0;
    let center = size / 2.0;
    let radius = 150.0;
    let total: f64 = slices
        .iter()
        .map(|s| s.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();

    let mut start = 0.0_f64;
    let wedges = slices
        .iter()
        .filter(|s| total > 0.0 && s.value.is_finite() && s.value > 0.0)
        .map(|s| {
            let sweep = s.value / total * 360.0;
            let tooltip = format!("{}: {}", s.label, format_value(s.value));
            let shape = if sweep >= 359.99 {
                view! {
                    <circle cx=center cy=center r=radius fill=s.color.clone()>
                        <title>{tooltip}</title>
                    </circle>
                }
                .into_any()
            } else {
                let d = pie_wedge_path(center, center, radius, start, start + sweep);
                view! {
                    <path d=d fill=s.color.clone() stroke="#fff" stroke-width="1">
                        <title>{tooltip}</title>
                    </path>
                }
                .into_any()
            };
            start += sweep;
            shape
        })
        .collect_view();

    let legend_items: Vec<(String, String)> = slices
        .iter()
        .map(|s| (s.label.clone(), s.color.clone()))
        .collect();

    view! {
        <div class="chart chart--pie">
            <svg viewBox=format!("0 0 {} {}", size, size) preserveAspectRatio="xMidYMid meet" width="100%">
                {wedges}
            </svg>
            <ChartLegend items=legend_items />
        </div>
    }
}

#[component]
fn ChartLegend(items: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {items
                .into_iter()
                .map(|(name, color)| {
                    view! {
                        <span class="chart__legend-item">
                            <span class="chart__legend-swatch" style=format!("background: {};", color)></span>
                            {name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        let empty: [f64; 0] = [];
        assert_eq!(nice_max(&empty), 1.0);
        assert_eq!(nice_max(&[0.0, -5.0]), 1.0);
        assert_eq!(nice_max(&[f64::NAN]), 1.0);
        assert_eq!(nice_max(&[7.0]), 10.0);
        assert_eq!(nice_max(&[120.0, 80.0]), 200.0);
        assert_eq!(nice_max(&[4500.0]), 5000.0);
        assert_eq!(nice_max(&[1000.0]), 1000.0);
    }

    #[test]
    fn test_x_positions() {
        let frame = ChartFrame::default();
        assert!(frame.x_positions(0).is_empty());
        assert_eq!(frame.x_positions(1), vec![frame.left + frame.plot_width() / 2.0]);

        let xs = frame.x_positions(3);
        assert_eq!(xs[0], frame.left);
        assert_eq!(xs[2], frame.width - frame.right);
    }

    #[test]
    fn test_y_for_clamps_and_handles_zero_scale() {
        let frame = ChartFrame::default();
        assert_eq!(frame.y_for(0.0, 100.0), frame.baseline());
        assert_eq!(frame.y_for(100.0, 100.0), frame.top);
        assert_eq!(frame.y_for(250.0, 100.0), frame.top);
        assert_eq!(frame.y_for(5.0, 0.0), frame.baseline());
        assert_eq!(frame.y_for(f64::NAN, 100.0), frame.baseline());
    }

    #[test]
    fn test_area_paths() {
        let frame = ChartFrame {
            width: 100.0,
            height: 100.0,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
        };
        let (line, area) = area_paths(&[0.0, 50.0, 100.0], 100.0, &frame);
        assert_eq!(line, "M0.0,100.0 L50.0,50.0 L100.0,0.0");
        assert_eq!(area, "M0.0,100.0 L50.0,50.0 L100.0,0.0 L100.0,100.0 L0.0,100.0 Z");

        let (line, area) = area_paths(&[], 100.0, &frame);
        assert!(line.is_empty() && area.is_empty());
    }

    #[test]
    fn test_pie_wedge_path() {
        // quarter from 12 o'clock to 3 o'clock
        let d = pie_wedge_path(50.0, 50.0, 10.0, 0.0, 90.0);
        assert_eq!(d, "M50.0,50.0 L50.0,40.0 A10.0,10.0 0 0 1 60.0,50.0 Z");

        let d = pie_wedge_path(50.0, 50.0, 10.0, 0.0, 270.0);
        assert!(d.contains(" 0 1 1 "));
    }
}
