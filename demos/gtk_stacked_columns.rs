use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use stackbar_rs::api::{ChartEngine, ChartEngineConfig};
use stackbar_rs::core::{Color, Column, SeriesPoint, Viewport};
use stackbar_rs::platform_gtk::GtkChartAdapter;
use stackbar_rs::render::CairoRenderer;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn segment_colors() -> [Color; 4] {
    [
        Color::from_rgb8(0x25, 0x63, 0xeb),
        Color::from_rgb8(0x16, 0xa3, 0x4a),
        Color::from_rgb8(0xf5, 0x9e, 0x0b),
        Color::from_rgb8(0xdc, 0x26, 0x26),
    ]
}

fn column_for_slot(slot: usize) -> Column {
    let [rent, food, transport, savings] = segment_colors();
    let wobble = |base: f64, spread: f64| {
        let phase = (slot as f64) * 0.83;
        base + phase.sin() * spread
    };

    let mut values = vec![
        SeriesPoint::new("Rent", wobble(1200.0, 80.0).round(), rent),
        SeriesPoint::new("Food", wobble(420.0, 60.0).round(), food),
        SeriesPoint::new("Transport", wobble(150.0, 40.0).round(), transport),
    ];
    if slot % 3 == 2 {
        values.push(SeriesPoint::new(
            "Savings",
            wobble(280.0, 50.0).round(),
            savings,
        ));
    }
    Column::new(MONTHS[slot % 12], values)
}

fn main() {
    let _ = stackbar_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.stackbar.examples.gtk_stacked_columns")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let renderer = match CairoRenderer::new(800, 400) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to initialize cairo renderer: {err}");
            return;
        }
    };

    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine = match ChartEngine::new(renderer, config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize stacked column engine: {err}");
            return;
        }
    };

    engine.set_columns((0..6).map(column_for_slot).collect());
    engine.set_on_segment_click(|click| {
        println!("clicked: {} = {} in {}", click.label, click.value, click.month);
    });

    let adapter = Rc::new(GtkChartAdapter::new(engine));

    let scrolled = gtk::ScrolledWindow::new();
    scrolled.set_hexpand(true);
    scrolled.set_vexpand(true);
    scrolled.set_child(Some(adapter.drawing_area()));

    let append_button = gtk::Button::with_label("Append month");
    {
        let adapter = Rc::clone(&adapter);
        append_button.connect_clicked(move |_| {
            adapter.update_engine(|chart| {
                let slot = chart.columns().len();
                chart.append_column(column_for_slot(slot));
            });
        });
    }

    let instructions = gtk::Label::new(Some(
        "Hover a segment for its tooltip, click it to log the segment, and append months until the canvas scrolls.",
    ));
    instructions.set_xalign(0.0);

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    controls.append(&append_button);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);
    root.append(&instructions);
    root.append(&controls);
    root.append(&scrolled);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("stackbar-rs GTK Stacked Columns")
        .default_width(860)
        .default_height(560)
        .build();
    window.set_child(Some(&root));
    window.present();
}
