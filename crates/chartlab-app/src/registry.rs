//! The demo catalog: every chart demo the gallery can open

use chartlab_ui::DemoEntry;
use chartlab_views::{
    AreaChartView, BarChartView, CandlestickView, GaugeView, HeatmapView, LineChartView,
    PieChartView, RadarChartView, RealtimeLineView, ScatterChartView, StackedLineView,
    StepLineView, TimeSeriesLineView, TreeView,
};

/// Build the full demo catalog, ordered by category for display
pub fn demo_registry() -> Vec<DemoEntry> {
    vec![
        DemoEntry {
            view_type: "BarChart",
            title: "Bar Chart",
            category: "Basic",
            description: "Basic bar chart with weekly sales data",
            build: |id, title| Box::new(BarChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "LineChart",
            title: "Line Chart",
            category: "Basic",
            description: "Smooth line chart with monthly revenue trend",
            build: |id, title| Box::new(LineChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "AreaChart",
            title: "Area Chart",
            category: "Basic",
            description: "Gradient area chart of weekly website traffic",
            build: |id, title| Box::new(AreaChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "PieChart",
            title: "Pie Chart",
            category: "Basic",
            description: "Sales distribution across product categories",
            build: |id, title| Box::new(PieChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "RadarChart",
            title: "Radar Chart",
            category: "Basic",
            description: "Skill comparison across two candidates",
            build: |id, title| Box::new(RadarChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "ScatterChart",
            title: "Scatter Chart",
            category: "Basic",
            description: "Study hours plotted against exam scores",
            build: |id, title| Box::new(ScatterChartView::new(id, title)),
        },
        DemoEntry {
            view_type: "Candlestick",
            title: "Candlestick Chart",
            category: "Financial",
            description: "OHLC stock prices with technical indicators",
            build: |id, title| Box::new(CandlestickView::new(id, title)),
        },
        DemoEntry {
            view_type: "Gauge",
            title: "Gauge Chart",
            category: "Status",
            description: "Speed, progress and grade gauges with simulation",
            build: |id, title| Box::new(GaugeView::new(id, title)),
        },
        DemoEntry {
            view_type: "Heatmap",
            title: "Heatmap Chart",
            category: "Status",
            description: "Value matrices with color scales and thresholds",
            build: |id, title| Box::new(HeatmapView::new(id, title)),
        },
        DemoEntry {
            view_type: "Tree",
            title: "Tree Chart",
            category: "Hierarchy",
            description: "Collapsible hierarchies in orthogonal and radial layouts",
            build: |id, title| Box::new(TreeView::new(id, title)),
        },
        DemoEntry {
            view_type: "TimeSeriesLine",
            title: "Time Series",
            category: "Line Variants",
            description: "Date-based series with analysis overlays",
            build: |id, title| Box::new(TimeSeriesLineView::new(id, title)),
        },
        DemoEntry {
            view_type: "RealtimeLine",
            title: "Real-time Line",
            category: "Line Variants",
            description: "Live streaming lines over a sliding window",
            build: |id, title| Box::new(RealtimeLineView::new(id, title)),
        },
        DemoEntry {
            view_type: "StepLine",
            title: "Step Line",
            category: "Line Variants",
            description: "Step interpolation with selectable riser position",
            build: |id, title| Box::new(StepLineView::new(id, title)),
        },
        DemoEntry {
            view_type: "StackedLine",
            title: "Stacked Line",
            category: "Line Variants",
            description: "Stacked, overlaid and percentage display modes",
            build: |id, title| Box::new(StackedLineView::new(id, title)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartlab_views::DemoViewId;

    #[test]
    fn registry_covers_all_demos() {
        let registry = demo_registry();
        assert_eq!(registry.len(), 14);

        let mut types: Vec<&str> = registry.iter().map(|entry| entry.view_type).collect();
        types.sort();
        types.dedup();
        assert_eq!(types.len(), 14);
    }

    #[test]
    fn built_views_report_their_registered_type() {
        for entry in demo_registry() {
            let view = (entry.build)(DemoViewId::new_v4(), entry.title.to_string());
            assert_eq!(view.view_type(), entry.view_type);
            assert_eq!(view.display_name(), entry.title);
        }
    }

    #[test]
    fn categories_form_contiguous_groups() {
        let registry = demo_registry();
        let mut seen: Vec<&str> = Vec::new();
        for entry in &registry {
            match seen.last() {
                Some(last) if *last == entry.category => {}
                _ => {
                    assert!(
                        !seen.contains(&entry.category),
                        "category {} repeats after a gap",
                        entry.category
                    );
                    seen.push(entry.category);
                }
            }
        }
        assert_eq!(
            seen,
            vec!["Basic", "Financial", "Status", "Hierarchy", "Line Variants"]
        );
    }
}
