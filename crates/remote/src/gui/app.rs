use crate::config;
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use dpad::{DirectionalPad, FnObserver, PadEvent, Phase, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub pad: Rc<RefCell<DirectionalPad>>,
    pub colors: Rc<RefCell<ThemeColors>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    TouchBegin(Point),
    TouchMove(Point),
    TouchEnd,
    TouchCancel,
    Pad(PadEvent),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Pad(e) => AppMsg::Pad(e),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Ends the pad's gesture once. GTK follows a `cancel` with `drag-end`, so
/// the second call finds the pad idle and does nothing.
fn finish_gesture(pad: &mut DirectionalPad, cancelled: bool) -> bool {
    if pad.phase() == Phase::Idle {
        return false;
    }
    if cancelled {
        pad.touch_cancel();
    } else {
        pad.touch_end();
    }
    true
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        DirectionalPad,
        ThemeColors,
        PathBuf,
        async_channel::Sender<AppEvent>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Remote"),
            set_default_size: (400, 400),

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "remote-pad",

                connect_resize[sender] => move |_, w, h| {
                    sender.input(AppMsg::Resize(w, h));
                },

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::TouchBegin(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::TouchMove(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |_, _, _| {
                        sender.input(AppMsg::TouchEnd);
                    },
                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::TouchCancel);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (mut pad, colors, config_path, tx, rx) = init;

        theme::load_css();

        pad.subscribe(FnObserver(move |event: &PadEvent| {
            if let Err(e) = tx.try_send(AppEvent::Pad(*event)) {
                log::warn!("Dropping pad event: {}", e);
            }
        }));

        let model = AppModel {
            pad: Rc::new(RefCell::new(pad)),
            colors: Rc::new(RefCell::new(colors)),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let pad_draw = model.pad.clone();
        let colors_draw = model.colors.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if let Err(e) = view::draw(cr, &pad_draw.borrow(), &colors_draw.borrow()) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(true);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(w, h) => {
                let center = Point::new(w as f64 / 2.0, h as f64 / 2.0);
                self.pad.borrow_mut().layout(center);
                self.drawing_area.queue_draw();
            }
            AppMsg::TouchBegin(point) => {
                let begin = self.pad.borrow_mut().touch_begin(point);
                log::debug!(
                    "touch at {:?}: {}, knob grab: {}",
                    point,
                    begin.direction,
                    begin.knob_grab
                );
                self.drawing_area.queue_draw();
            }
            AppMsg::TouchMove(point) => {
                self.pad.borrow_mut().touch_move(point);
                if self.pad.borrow().state().drag_in_progress() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::TouchEnd => {
                if finish_gesture(&mut self.pad.borrow_mut(), false) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::TouchCancel => {
                if finish_gesture(&mut self.pad.borrow_mut(), true) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Pad(event) => match event {
                PadEvent::DirectionChanged(direction) => log::info!("Direction: {}", direction),
                other => log::trace!("Pad event: {:?}", other),
            },
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    if let Err(e) = self.pad.borrow_mut().configure(new_config.pad) {
                        log::error!("Rejected pad configuration: {}", e);
                        return;
                    }
                    *self.colors.borrow_mut() = ThemeColors::from_config(&new_config.theme);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
