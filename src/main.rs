mod assets;
mod image_cache;
mod settings;
mod theme;
mod ui;
mod views;

use gpui::*;

use crate::assets::Assets;
use crate::theme::{is_dark_appearance, AppTheme, GlobalTheme};
use crate::views::DemoPage;

fn main() {
    env_logger::init();

    let settings = settings::load_settings();
    let comparison = settings.comparison_or_demo();
    log::info!("Comparing {} with {}", comparison.before, comparison.after);

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Default to dark until the window reports its appearance
        let theme_entity = cx.new(|_cx| AppTheme::new(settings.theme_mode, true));
        cx.set_global(GlobalTheme(theme_entity.clone()));

        cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Image Comparison".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    size(px(1000.0), px(700.0)),
                    cx,
                ))),
                is_resizable: true,
                window_min_size: Some(Size {
                    width: px(400.0),
                    height: px(300.0),
                }),
                app_id: Some("image-compare".to_string()),
                ..Default::default()
            },
            move |window, cx| {
                let is_dark = is_dark_appearance(window.appearance());
                theme_entity.update(cx, |theme, _cx| {
                    theme.set_system_appearance(is_dark);
                });

                let theme_for_observer = theme_entity.clone();
                window
                    .observe_window_appearance(move |window: &mut Window, cx: &mut App| {
                        let is_dark = is_dark_appearance(window.appearance());
                        theme_for_observer.update(cx, |theme, cx| {
                            theme.set_system_appearance(is_dark);
                            cx.notify();
                        });
                    })
                    .detach();

                cx.new(|cx| DemoPage::new(comparison, cx))
            },
        )
        .expect("Failed to open main window");

        cx.activate(true);
    });
}
