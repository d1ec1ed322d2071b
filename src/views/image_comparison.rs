//! Before/after image comparison slider.
//!
//! The before image fills the widget; the after image is stacked on top and
//! clipped to the region right of the divider. Dragging anywhere in the
//! widget moves the divider, and the drag keeps tracking after the pointer
//! leaves the widget until the button is released.

use crate::image_cache;
use crate::theme::{theme, ThemeColors};
use crate::ui::tokens::{ICON_MD, RADIUS_STD, SPACE_MD, SPACE_XL, SPACE_XS, TEXT_XL};
use gpui::prelude::*;
use gpui::*;
use image_compare_core::{ComparisonConfig, ContainerGeometry, PositionTracker, SliderLayout};
use std::path::PathBuf;

const HANDLE_WIDTH: f32 = 4.0;
const KNOB_WIDTH: f32 = 12.0;
const KNOB_HEIGHT: f32 = 40.0;
const KNOB_HOVER_SCALE: f32 = 1.1;

const GRIP_ICON: &str = "icons/grip-vertical.svg";

/// One of the two stacked images
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Before,
    After,
}

impl Layer {
    fn name(self) -> &'static str {
        match self {
            Layer::Before => "before",
            Layer::After => "after",
        }
    }
}

/// Load progress of a layer's image
#[derive(Clone, Debug, PartialEq)]
pub enum LayerState {
    Loading,
    Ready(PathBuf),
    Failed(String),
}

#[derive(Clone, Copy, PartialEq)]
enum LabelSide {
    Left,
    Right,
}

pub struct ImageComparison {
    config: ComparisonConfig,
    tracker: PositionTracker,
    before: LayerState,
    after: LayerState,
}

impl ImageComparison {
    /// Mount the widget at the configured initial position. Images stay in
    /// `Loading` until [`ImageComparison::load_images`] is called.
    pub fn new(config: ComparisonConfig) -> Self {
        Self {
            tracker: PositionTracker::new(config.initial_position),
            config,
            before: LayerState::Loading,
            after: LayerState::Loading,
        }
    }

    /// Resolve both image sources in the background.
    pub fn load_images(&mut self, cx: &mut Context<Self>) {
        self.load_layer(Layer::Before, cx);
        self.load_layer(Layer::After, cx);
    }

    fn load_layer(&mut self, layer: Layer, cx: &mut Context<Self>) {
        let source = match layer {
            Layer::Before => self.config.before_source(),
            Layer::After => self.config.after_source(),
        };
        self.set_layer_state(layer, LayerState::Loading, cx);

        cx.spawn(async move |this: WeakEntity<ImageComparison>, cx| {
            let result = image_cache::resolve(source.clone()).await;
            let state = match result {
                Ok(path) => {
                    log::debug!("Loaded {} image {} from {}", layer.name(), source, path.display());
                    LayerState::Ready(path)
                }
                Err(e) => {
                    log::warn!("Failed to load {} image {}: {:#}", layer.name(), source, e);
                    LayerState::Failed(format!("{:#}", e))
                }
            };
            let _ = this.update(cx, |this, cx| {
                this.set_layer_state(layer, state, cx);
            });
        })
        .detach();
    }

    pub fn set_layer_state(&mut self, layer: Layer, state: LayerState, cx: &mut Context<Self>) {
        let slot = match layer {
            Layer::Before => &mut self.before,
            Layer::After => &mut self.after,
        };
        if *slot != state {
            *slot = state;
            cx.notify();
        }
    }

    pub fn layer_state(&self, layer: Layer) -> &LayerState {
        match layer {
            Layer::Before => &self.before,
            Layer::After => &self.after,
        }
    }

    pub fn position(&self) -> f32 {
        self.tracker.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn layout(&self) -> SliderLayout {
        SliderLayout::from_percent(self.tracker.position())
    }

    /// Primary button pressed inside the widget.
    pub fn press(&mut self, x: f32, geometry: ContainerGeometry, cx: &mut Context<Self>) {
        let was_dragging = self.is_dragging();
        let moved = self.tracker.press(x, geometry);
        if self.is_dragging() {
            log::debug!("Comparison drag started at {:.1}%", self.position());
        }
        if moved || was_dragging != self.is_dragging() {
            cx.notify();
        }
    }

    /// Pointer moved anywhere in the window.
    pub fn drag_to(&mut self, x: f32, geometry: ContainerGeometry, cx: &mut Context<Self>) {
        if self.tracker.drag_to(x, geometry) {
            cx.notify();
        }
    }

    /// Primary button released anywhere in the window.
    pub fn release(&mut self, cx: &mut Context<Self>) {
        if self.tracker.release() {
            log::debug!("Comparison drag ended at {:.1}%", self.position());
            cx.notify();
        }
    }

    fn alt(&self, layer: Layer) -> SharedString {
        match layer {
            Layer::Before => self.config.before_alt.clone().into(),
            Layer::After => self.config.after_alt.clone().into(),
        }
    }

    fn render_image(&self, layer: Layer, t: ThemeColors) -> AnyElement {
        let alt = self.alt(layer);
        match self.layer_state(layer) {
            LayerState::Ready(path) => img(path.clone())
                .size_full()
                .object_fit(ObjectFit::Cover)
                .with_fallback(move || render_alt_text(alt.clone(), t))
                .into_any_element(),
            LayerState::Loading => div()
                .size_full()
                .bg(rgb(t.bg_placeholder))
                .into_any_element(),
            LayerState::Failed(_) => render_alt_text(alt, t),
        }
    }

    /// The after layer, clipped to the part right of the divider. The inner
    /// box is anchored to the right edge and keeps the full container width
    /// so the two images line up.
    fn render_after_clip(&self, clip_start: f32, inner_width_ratio: f32, t: ThemeColors) -> Div {
        div()
            .absolute()
            .top_0()
            .bottom_0()
            .right_0()
            .left(relative(clip_start))
            .overflow_hidden()
            .child(
                div()
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .right_0()
                    .w(relative(inner_width_ratio))
                    .child(self.render_image(Layer::After, t)),
            )
    }

    /// Input capture: records the widget bounds every frame and registers
    /// window-level listeners for the drag. gpui drops these listeners at the
    /// next frame, so a widget that is no longer rendered stops listening.
    fn render_input_layer(&self, cx: &mut Context<Self>) -> Canvas<Hitbox> {
        let view = cx.entity().downgrade();

        canvas(
            |bounds, window, _cx| window.insert_hitbox(bounds, HitboxBehavior::Normal),
            move |bounds, hitbox, window, _cx| {
                window.set_cursor_style(CursorStyle::ResizeLeftRight, &hitbox);

                let geometry = ContainerGeometry::new(
                    f32::from(bounds.origin.x),
                    f32::from(bounds.size.width),
                );

                let hitbox_id = hitbox.id;
                window.on_mouse_event({
                    let view = view.clone();
                    move |e: &MouseDownEvent, phase, window, cx| {
                        if phase == DispatchPhase::Bubble
                            && e.button == MouseButton::Left
                            && hitbox_id.is_hovered(window)
                        {
                            let x = f32::from(e.position.x);
                            let _ = view.update(cx, |this, cx| this.press(x, geometry, cx));
                            cx.stop_propagation();
                        }
                    }
                });

                window.on_mouse_event({
                    let view = view.clone();
                    move |e: &MouseMoveEvent, phase, _window, cx| {
                        if phase == DispatchPhase::Bubble {
                            let x = f32::from(e.position.x);
                            let _ = view.update(cx, |this, cx| this.drag_to(x, geometry, cx));
                        }
                    }
                });

                window.on_mouse_event(move |e: &MouseUpEvent, phase, _window, cx| {
                    if phase == DispatchPhase::Bubble && e.button == MouseButton::Left {
                        let _ = view.update(cx, |this, cx| this.release(cx));
                    }
                });
            },
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full()
    }
}

impl Render for ImageComparison {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme(cx);
        let layout = self.layout();

        let after = layout
            .inner_width_ratio
            .map(|ratio| self.render_after_clip(layout.clip_start, ratio, t));

        div()
            .id("image-comparison")
            .group("image-comparison")
            .relative()
            .w_full()
            .h(px(self.config.height))
            .overflow_hidden()
            .bg(rgb(t.bg_placeholder))
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .child(self.render_image(Layer::Before, t)),
            )
            .children(after)
            .child(render_handle(layout.handle_center, self.is_dragging(), t))
            .child(render_label("Before", LabelSide::Left, t))
            .child(render_label("After", LabelSide::Right, t))
            .child(self.render_input_layer(cx))
    }
}

/// Knob width and height at the given scale.
fn knob_size(scale: f32) -> (f32, f32) {
    (KNOB_WIDTH * scale, KNOB_HEIGHT * scale)
}

/// Divider bar with the grip knob, centered on `center` (fraction of width).
/// The knob grows while the widget is hovered, and stays grown for the whole
/// drag even when the pointer leaves the widget.
fn render_handle(center: f32, active: bool, t: ThemeColors) -> impl IntoElement {
    let (knob_width, knob_height) = knob_size(if active { KNOB_HOVER_SCALE } else { 1.0 });
    let (hover_width, hover_height) = knob_size(KNOB_HOVER_SCALE);

    div()
        .absolute()
        .top_0()
        .bottom_0()
        .left(relative(center))
        .ml(px(-HANDLE_WIDTH / 2.0))
        .w(px(HANDLE_WIDTH))
        .rounded_full()
        .bg(rgb(t.handle))
        .shadow_lg()
        .child(
            div()
                .absolute()
                .top(relative(0.5))
                .mt(px(-knob_height / 2.0))
                .left(px((HANDLE_WIDTH - knob_width) / 2.0))
                .w(px(knob_width))
                .h(px(knob_height))
                .rounded_full()
                .bg(rgb(t.knob))
                .flex()
                .items_center()
                .justify_center()
                .group_hover("image-comparison", |s| {
                    s.w(px(hover_width))
                        .h(px(hover_height))
                        .mt(px(-hover_height / 2.0))
                        .left(px((HANDLE_WIDTH - hover_width) / 2.0))
                })
                .child(
                    svg()
                        .path(GRIP_ICON)
                        .size(ICON_MD)
                        .text_color(rgb(t.knob_icon)),
                ),
        )
}

fn render_label(text: &'static str, side: LabelSide, t: ThemeColors) -> impl IntoElement {
    div()
        .absolute()
        .bottom(SPACE_XL)
        .when(side == LabelSide::Left, |d| d.left(SPACE_XL))
        .when(side == LabelSide::Right, |d| d.right(SPACE_XL))
        .px(SPACE_MD)
        .py(SPACE_XS)
        .rounded(RADIUS_STD)
        .bg(rgba(t.label_bg))
        .text_color(rgb(t.label_text))
        .text_size(TEXT_XL)
        .child(text)
}

/// Stand-in for an image that cannot be shown: its accessible label.
fn render_alt_text(alt: SharedString, t: ThemeColors) -> AnyElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(rgb(t.bg_placeholder))
        .text_color(rgb(t.text_muted))
        .text_size(TEXT_XL)
        .child(alt)
        .into_any_element()
}
