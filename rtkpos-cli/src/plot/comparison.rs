//! Emlid / RTK comparison plots
use plotly::{
    color::NamedColor,
    common::{Marker, MarkerSymbol, Mode},
    Bar, Plot, Scatter,
};
use rtkpos::prelude::Comparison;

use super::{build_bar_plot, build_longitude_plot, build_timedomain_plot};

/// Altitude versus longitude, for all matched epochs of both receivers
pub fn plot_positions(cmp: &Comparison) -> Plot {
    let mut plot = build_longitude_plot("Fixed solutions (matched epochs)", "Altitude [m]");
    for (name, positions, symbol, color) in [
        (
            "Emlid",
            &cmp.alignment.emlid_positions,
            MarkerSymbol::Circle,
            NamedColor::Blue,
        ),
        (
            "RTK",
            &cmp.alignment.rtk_positions,
            MarkerSymbol::Diamond,
            NamedColor::Red,
        ),
    ] {
        let (x, y): (Vec<f64>, Vec<f64>) = positions.iter().copied().unzip();
        let trace = Scatter::new(x, y)
            .name(name)
            .mode(Mode::Markers)
            .hover_text_array(cmp.alignment.timestamps.clone())
            .marker(Marker::new().symbol(symbol).color(color));
        plot.add_trace(trace);
    }
    plot
}

/// Q1 / Q2 percentages of both receivers
pub fn plot_quality(cmp: &Comparison) -> Plot {
    let title = format!(
        "Fix quality - mean height difference: {:.4} m",
        cmp.difference.mean
    );
    let mut plot = build_bar_plot(&title, "Percentage [%]");
    let labels = vec!["Emlid".to_string(), "RTK".to_string()];
    for (name, y, color) in [
        (
            "Q1 (fixed)",
            vec![cmp.emlid_quality.q1_percent, cmp.rtk_quality.q1_percent],
            NamedColor::Green,
        ),
        (
            "Q2 (float)",
            vec![cmp.emlid_quality.q2_percent, cmp.rtk_quality.q2_percent],
            NamedColor::Orange,
        ),
    ] {
        let text = y.iter().map(|pct| format!("{:.2}%", pct)).collect::<Vec<_>>();
        let trace = Bar::new(labels.clone(), y)
            .name(name)
            .text_array(text)
            .marker(Marker::new().color(color));
        plot.add_trace(trace);
    }
    plot
}

/// Absolute height difference versus (emlid) longitude
pub fn plot_height_difference(cmp: &Comparison) -> Plot {
    let mut plot = build_longitude_plot("Height difference |Emlid - RTK|", "|dh| [m]");
    let (x, y): (Vec<f64>, Vec<f64>) = cmp.difference.points.iter().copied().unzip();
    let trace = Scatter::new(x, y)
        .name("|dh|")
        .mode(Mode::LinesMarkers)
        .hover_text_array(cmp.alignment.timestamps.clone())
        .marker(Marker::new().symbol(MarkerSymbol::Cross));
    plot.add_trace(trace);
    plot
}

/// Absolute height difference versus time, for epochs that could be interpreted
pub fn plot_height_difference_timedomain(cmp: &Comparison) -> Plot {
    let mut plot = build_timedomain_plot("Height difference |Emlid - RTK|", "|dh| [m]");
    let (t, y): (Vec<String>, Vec<f64>) = cmp
        .alignment
        .epochs
        .iter()
        .zip(cmp.difference.points.iter())
        .filter_map(|(epoch, (_, dh))| epoch.map(|epoch| (epoch.to_string(), *dh)))
        .unzip();
    let trace = Scatter::new(t, y)
        .name("|dh|")
        .mode(Mode::LinesMarkers)
        .marker(Marker::new().symbol(MarkerSymbol::Cross));
    plot.add_trace(trace);
    plot
}

#[cfg(test)]
mod test {
    use super::{
        plot_height_difference, plot_height_difference_timedomain, plot_positions, plot_quality,
    };
    use rtkpos::prelude::{Comparison, DuplicatePolicy};
    use std::path::PathBuf;

    fn comparison() -> Comparison {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("test_resources")
            .join("POS");
        Comparison::from_files(
            &dir.join("emlid.pos"),
            &dir.join("rtk.pos"),
            DuplicatePolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn comparison_plots() {
        let cmp = comparison();

        let html = plot_positions(&cmp).to_html();
        assert!(html.contains("Emlid"));
        assert!(html.contains("RTK"));

        let html = plot_quality(&cmp).to_html();
        assert!(html.contains("Q1 (fixed)"));
        assert!(html.contains("mean height difference: 0.0650 m"));

        let html = plot_height_difference(&cmp).to_html();
        assert!(html.contains("|dh|"));
    }

    #[test]
    fn quality_labels() {
        let html = plot_quality(&comparison()).to_html();
        // rtk: 9 fixed solutions out of 10
        assert!(html.contains("90.00%"));
        assert!(html.contains("10.00%"));
    }

    #[test]
    fn timedomain_height_difference() {
        let cmp = comparison();
        let html = plot_height_difference_timedomain(&cmp).to_html();
        assert!(html.contains("Epoch"));
        for epoch in cmp.alignment.epochs.iter().flatten() {
            assert!(html.contains(&epoch.to_string()));
        }
    }
}
