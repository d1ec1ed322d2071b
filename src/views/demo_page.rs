//! Landing page hosting a single comparison widget.

use crate::theme::{theme, theme_entity};
use crate::ui::tokens::SPACE_XL;
use crate::views::image_comparison::ImageComparison;
use gpui::*;
use image_compare_core::ComparisonConfig;

/// Maximum width of the comparison widget on the page.
const CONTENT_MAX_WIDTH: f32 = 800.0;

pub struct DemoPage {
    comparison: Entity<ImageComparison>,
}

impl DemoPage {
    pub fn new(config: ComparisonConfig, cx: &mut Context<Self>) -> Self {
        let comparison = cx.new(|cx| {
            let mut view = ImageComparison::new(config);
            view.load_images(cx);
            view
        });

        // Repaint when the system appearance flips the theme
        let theme_entity = theme_entity(cx);
        cx.observe(&theme_entity, |_this: &mut Self, _, cx| {
            cx.notify();
        })
        .detach();

        Self { comparison }
    }
}

impl Render for DemoPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme(cx);

        div()
            .id("demo-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .p(SPACE_XL * 2.0)
            .bg(rgb(t.bg_page))
            .text_color(rgb(t.text_primary))
            .child(
                div()
                    .w_full()
                    .max_w(px(CONTENT_MAX_WIDTH))
                    .child(self.comparison.clone()),
            )
    }
}
