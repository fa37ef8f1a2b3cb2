use plotly::{
    common::{Font, Side, Title},
    layout::{Axis, BarMode},
    Layout, Plot,
};

mod comparison;
pub use comparison::{
    plot_height_difference, plot_height_difference_timedomain, plot_positions, plot_quality,
};

/*
 * Builds a Plot
 */
fn build_plot(
    title: &str,
    title_side: Side,
    title_font: Font,
    x_axis_title: &str,
    y_axis_title: &str,
    zero_line: (bool, bool), // plots a bold line @ (x=0,y=0)
    show_legend: bool,
    auto_size: bool,
) -> Plot {
    let layout = Layout::new()
        .title(Title::with_text(title).font(title_font))
        .x_axis(
            Axis::new()
                .title(Title::with_text(x_axis_title).side(title_side))
                .zero_line(zero_line.0)
                .show_tick_labels(true),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text(y_axis_title))
                .zero_line(zero_line.1),
        )
        .show_legend(show_legend)
        .auto_size(auto_size);
    let mut p = Plot::new();
    p.set_layout(layout);
    p
}

/*
 * builds a standard 2D plot, ready to plot data against longitude
 */
pub fn build_longitude_plot(title: &str, y_title: &str) -> Plot {
    build_plot(
        title,
        Side::Top,
        Font::default(),
        "Longitude [°]",
        y_title,
        (false, true), // y=0 line
        true,          // show legend
        true,          // autosize
    )
}

/*
 * builds a standard 2D plot, ready to plot data against time (`Epoch`)
 */
pub fn build_timedomain_plot(title: &str, y_title: &str) -> Plot {
    build_plot(
        title,
        Side::Top,
        Font::default(),
        "Epoch",
        y_title,
        (false, true), // y=0 line
        true,          // show legend
        true,          // autosize
    )
}

/*
 * builds a grouped bar chart, bars are stacked side by side
 */
pub fn build_bar_plot(title: &str, y_title: &str) -> Plot {
    let layout = Layout::new()
        .title(Title::with_text(title).font(Font::default()))
        .y_axis(Axis::new().title(Title::with_text(y_title)).zero_line(true))
        .bar_mode(BarMode::Group)
        .show_legend(true)
        .auto_size(true);
    let mut p = Plot::new();
    p.set_layout(layout);
    p
}
