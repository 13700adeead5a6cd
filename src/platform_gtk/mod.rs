use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::api::ChartEngine;
use crate::render::{CairoContextRenderer, Renderer};

/// Owns a `DrawingArea` wired to a chart engine.
///
/// The adapter requests the full frame size as content size, so hosts
/// that place the widget inside a `ScrolledWindow` get horizontal
/// scrolling once columns overflow the requested viewport. Pointer
/// motion, leave and click are forwarded to the engine and every event
/// queues a redraw.
pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<ChartEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();

        let adapter = Self {
            engine,
            drawing_area,
        };
        adapter.refresh_content_size();
        adapter.attach_draw_func();
        adapter.attach_pointer_controllers();
        adapter
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Mutates the engine, re-requests the frame size and queues a redraw.
    pub fn update_engine(&self, update: impl FnOnce(&mut ChartEngine<R>)) {
        if let Ok(mut chart) = self.engine.try_borrow_mut() {
            update(&mut chart);
        }
        self.refresh_content_size();
        self.drawing_area.queue_draw();
    }

    fn refresh_content_size(&self) {
        if let Ok(chart) = self.engine.try_borrow() {
            let frame_viewport = chart.frame_viewport();
            self.drawing_area
                .set_content_width(frame_viewport.width.min(i32::MAX as u32) as i32);
            self.drawing_area
                .set_content_height(frame_viewport.height.min(i32::MAX as u32) as i32);
        }
    }

    fn attach_draw_func(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let mut chart = match engine.try_borrow_mut() {
                    Ok(chart) => chart,
                    Err(_) => return,
                };
                let _ = chart.render_on_cairo_context(context);
            });
    }

    fn attach_pointer_controllers(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave();
                }
                drawing_area.queue_draw();
            });
        }
        self.drawing_area.add_controller(motion);

        let click = gtk::GestureClick::new();
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            click.connect_released(move |_, _n_press, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_click(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        self.drawing_area.add_controller(click);
    }
}
