//! Background Carousel Component
//!
//! Decorative grid of portraits drifting left behind the cards.

use campusgate_core::{start_rotation, BackgroundCarousel as Grid, CarouselLayout};
use dioxus::prelude::*;

use crate::context::{use_page_config, use_viewport};

/// Full-screen rotating image grid.
///
/// The ticker is started once per mount and stopped when the component is
/// dropped, so navigating between pages never leaves a rotation running.
#[component]
pub fn BackgroundCarousel() -> Element {
    let config = use_page_config();
    let viewport = use_viewport();
    let images = config.background_images.clone();

    let mut grid = use_signal(|| {
        let layout = CarouselLayout::for_viewport(&viewport);
        tracing::debug!(rows = layout.rows, cols = layout.cols, "generating background grid");
        Grid::generate(layout, images.len(), &mut rand::rng())
    });

    let handle = use_hook(|| {
        let period = grid.peek().layout().period;
        let (handle, mut ticks) = start_rotation(period);
        let ticker = handle.clone();
        spawn(async move {
            while ticks.recv().await.is_some() {
                // Ticks buffered before a stop are discarded
                if ticker.is_stopped() {
                    break;
                }
                grid.write().shift();
            }
        });
        handle
    });

    use_drop(move || handle.stop());

    let layout = *grid.read().layout();
    let rows = grid.read().rows().to_vec();
    let dimension = layout.image_dimension;
    let animation = layout.animation();

    rsx! {
        div {
            id: "background-moving-images",
            class: "background-moving-images",
            style: layout.css_variables(),
            for (r, row) in rows.iter().enumerate() {
                for tile in row.iter() {
                    img {
                        key: "{tile.id}",
                        class: "background-image",
                        alt: "",
                        src: images.get(tile.image).cloned().unwrap_or_default(),
                        style: format!(
                            "left: {}px; top: {}px; width: {dimension}px; height: {dimension}px; animation: {animation};",
                            tile.left,
                            r as f64 * dimension,
                        ),
                    }
                }
            }
        }
    }
}
