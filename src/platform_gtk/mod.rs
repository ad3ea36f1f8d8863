//! GTK4 host for a [`ChartEngine`]: a drawing area sized to the chart plus
//! width/height controls.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::render::{CairoContextRenderer, Renderer};

const SPIN_STEP: f64 = 10.0;
// Upper end of the size controls. The engine itself accepts any pixel count.
const SPIN_MAX: f64 = 100_000.0;

pub type SharedEngine<R> = Rc<RefCell<ChartEngine<R>>>;

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedEngine<R>,
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
    width_spin: gtk::SpinButton,
    height_spin: gtk::SpinButton,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let dimensions = engine.dimensions();
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(dimensions.width as i32);
        drawing_area.set_content_height(dimensions.height as i32);
        drawing_area.set_halign(gtk::Align::Start);
        drawing_area.set_valign(gtk::Align::Start);

        let width_spin = extent_spin(dimensions.width);
        let height_spin = extent_spin(dimensions.height);

        let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        controls.append(&gtk::Label::new(Some("Width")));
        controls.append(&width_spin);
        controls.append(&gtk::Label::new(Some("Height")));
        controls.append(&height_spin);

        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
        root.append(&controls);
        root.append(&drawing_area);

        let adapter = Self {
            engine,
            root,
            drawing_area,
            width_spin,
            height_spin,
        };
        adapter.connect_draw();
        adapter.connect_pointer();
        adapter.connect_size_controls();
        adapter
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }

    /// Top-level widget to place into a window.
    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    fn connect_draw(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area.set_draw_func(move |_, context, _, _| {
            let Ok(mut chart) = engine.try_borrow_mut() else {
                return;
            };
            if let Err(err) = chart.render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
        });
    }

    fn connect_pointer(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_enter(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move_canvas(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move_canvas(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave_canvas();
                }
                drawing_area.queue_draw();
            });
        }
        self.drawing_area.add_controller(motion);
    }

    fn connect_size_controls(&self) {
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            self.width_spin.connect_value_changed(move |spin| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    match chart.set_width(spin.value()) {
                        Ok(()) => {
                            drawing_area.set_content_width(chart.dimensions().width as i32);
                        }
                        Err(err) => warn!(error = %err, "width change rejected"),
                    }
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            self.height_spin.connect_value_changed(move |spin| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    match chart.set_height(spin.value()) {
                        Ok(()) => {
                            drawing_area.set_content_height(chart.dimensions().height as i32);
                        }
                        Err(err) => warn!(error = %err, "height change rejected"),
                    }
                }
                drawing_area.queue_draw();
            });
        }
    }
}

fn extent_spin(initial: u32) -> gtk::SpinButton {
    let spin = gtk::SpinButton::with_range(0.0, SPIN_MAX, SPIN_STEP);
    spin.set_value(f64::from(initial));
    spin.set_width_chars(6);
    spin
}
