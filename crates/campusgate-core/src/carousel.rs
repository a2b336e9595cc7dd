//! Decorative background carousel.
//!
//! A grid of portrait images drifts leftward forever. Each image runs a
//! looping CSS translation of one image width; a ticker with the same
//! period moves the head of every row to its tail so the drift never runs
//! out of images.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::viewport::Viewport;

/// Image edge length on the reference screen, in pixels.
pub const BASE_IMAGE_DIMENSION: f64 = 160.0;

/// Duration of one leftward drift, and of the rotation interval.
pub const ANIMATION_PERIOD: Duration = Duration::from_secs(6);

/// Grid geometry for a given viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    pub rows: usize,
    pub cols: usize,
    pub image_dimension: f64,
    pub period: Duration,
}

impl CarouselLayout {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let image_dimension = (BASE_IMAGE_DIMENSION * viewport.scale).max(1.0).round();
        let cols = (viewport.screen.width as f64 / image_dimension).ceil() as usize + 2;
        let rows = ((viewport.screen.height as f64 / image_dimension).ceil() as usize).max(1);
        Self {
            rows,
            cols,
            image_dimension,
            period: ANIMATION_PERIOD,
        }
    }

    /// Horizontal position of column `col`.
    pub fn column_left(&self, col: usize) -> f64 {
        col as f64 * self.image_dimension
    }

    /// Custom properties the carousel writes on the document root.
    pub fn css_variables(&self) -> String {
        format!(
            "--background-image-dimension: {}px; --number-of-background-images-per-row: {};",
            self.image_dimension, self.cols
        )
    }

    /// `animation` shorthand for every image.
    pub fn animation(&self) -> String {
        format!(
            "backgroundImageScrollLeft {}s linear infinite",
            self.period.as_secs_f64()
        )
    }
}

/// One image in the grid
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Stable identity for keyed rendering
    pub id: usize,
    /// Index into the image pool
    pub image: usize,
    pub left: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundCarousel {
    layout: CarouselLayout,
    rows: Vec<VecDeque<Tile>>,
}

/// Pick a pool index different from `previous`.
///
/// With fewer than two images no alternative exists, so the pick is
/// accepted as is.
fn pick_image<R: Rng + ?Sized>(rng: &mut R, pool_len: usize, previous: Option<usize>) -> usize {
    if pool_len < 2 {
        return 0;
    }
    loop {
        let candidate = rng.random_range(0..pool_len);
        if Some(candidate) != previous {
            return candidate;
        }
    }
}

impl BackgroundCarousel {
    /// Build the grid, sampling images so no row repeats an image in two
    /// adjacent columns.
    pub fn generate<R: Rng + ?Sized>(layout: CarouselLayout, pool_len: usize, rng: &mut R) -> Self {
        let mut next_id = 0;
        let rows = (0..layout.rows)
            .map(|_| {
                let mut previous = None;
                (0..layout.cols)
                    .map(|col| {
                        let image = pick_image(rng, pool_len, previous);
                        previous = Some(image);
                        let tile = Tile {
                            id: next_id,
                            image,
                            left: layout.column_left(col),
                        };
                        next_id += 1;
                        tile
                    })
                    .collect()
            })
            .collect();
        Self { layout, rows }
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[VecDeque<Tile>] {
        &self.rows
    }

    /// Move the leftmost tile of every row to the rightmost slot and
    /// re-seat every tile on its column, so each row stays one tile per
    /// column as the drift animation restarts.
    pub fn shift(&mut self) {
        let layout = self.layout;
        for row in &mut self.rows {
            if let Some(head) = row.pop_front() {
                row.push_back(head);
            }
            for (col, tile) in row.iter_mut().enumerate() {
                tile.left = layout.column_left(col);
            }
        }
    }
}

/// Handle to a running rotation ticker.
#[derive(Clone, Debug)]
pub struct RotationHandle {
    token: CancellationToken,
}

impl RotationHandle {
    /// Stop the ticker. The tick receiver then yields `None`.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Start a ticker that emits a sequence number every `period`.
///
/// Must be called inside a tokio runtime. The task ends when the handle is
/// stopped or the receiver is dropped.
pub fn start_rotation(period: Duration) -> (RotationHandle, mpsc::Receiver<u64>) {
    let token = CancellationToken::new();
    let (tx, rx) = mpsc::channel(4);
    let task_token = token.clone();

    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + period;
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut ticks = 0u64;
        loop {
            tokio::select! {
                _ = task_token.cancelled() => break,
                _ = interval.tick() => {
                    ticks += 1;
                    if tx.send(ticks).await.is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!(ticks, "background rotation stopped");
    });

    (RotationHandle { token }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ScreenSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layout(rows: usize, cols: usize) -> CarouselLayout {
        CarouselLayout {
            rows,
            cols,
            image_dimension: 100.0,
            period: ANIMATION_PERIOD,
        }
    }

    #[test]
    fn layout_covers_reference_screen() {
        let viewport = Viewport::from_screen(ScreenSize::reference());
        let layout = CarouselLayout::for_viewport(&viewport);
        assert_eq!(layout.image_dimension, 160.0);
        assert_eq!(layout.cols, 11 + 2);
        assert_eq!(layout.rows, 7);
        assert_eq!(layout.animation(), "backgroundImageScrollLeft 6s linear infinite");
        assert!(layout.css_variables().contains("--background-image-dimension: 160px;"));
    }

    #[test]
    fn generated_rows_have_no_adjacent_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let carousel = BackgroundCarousel::generate(layout(5, 12), 2, &mut rng);
        for row in carousel.rows() {
            assert_eq!(row.len(), 12);
            for pair in row.iter().collect::<Vec<_>>().windows(2) {
                assert_ne!(pair[0].image, pair[1].image);
            }
        }
    }

    #[test]
    fn single_image_pool_does_not_spin() {
        let mut rng = StdRng::seed_from_u64(1);
        let carousel = BackgroundCarousel::generate(layout(2, 4), 1, &mut rng);
        assert!(carousel.rows().iter().flatten().all(|t| t.image == 0));
    }

    #[test]
    fn tiles_start_at_column_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let carousel = BackgroundCarousel::generate(layout(1, 4), 6, &mut rng);
        let lefts: Vec<f64> = carousel.rows()[0].iter().map(|t| t.left).collect();
        assert_eq!(lefts, vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn shift_moves_head_to_tail() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut carousel = BackgroundCarousel::generate(layout(3, 5), 6, &mut rng);
        let before: Vec<usize> = carousel.rows()[0].iter().map(|t| t.id).collect();
        carousel.shift();
        let after: Vec<usize> = carousel.rows()[0].iter().map(|t| t.id).collect();

        assert_eq!(after[..4], before[1..]);
        assert_eq!(after[4], before[0]);
        assert_eq!(carousel.rows()[0].back().map(|t| t.left), Some(400.0));
        assert!(carousel.rows().iter().all(|r| r.len() == 5));
    }

    #[test]
    fn repeated_shifts_keep_one_tile_per_column() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut carousel = BackgroundCarousel::generate(layout(1, 5), 6, &mut rng);
        let ids: Vec<usize> = carousel.rows()[0].iter().map(|t| t.id).collect();
        for _ in 0..5 {
            carousel.shift();
        }
        let lefts: Vec<f64> = carousel.rows()[0].iter().map(|t| t.left).collect();
        assert_eq!(lefts, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        // A full cycle restores the original order
        let after: Vec<usize> = carousel.rows()[0].iter().map(|t| t.id).collect();
        assert_eq!(after, ids);
    }

    #[test]
    fn shift_slides_remaining_tiles_one_column_left() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut carousel = BackgroundCarousel::generate(layout(2, 4), 6, &mut rng);
        let second = carousel.rows()[1][1].id;
        carousel.shift();
        assert_eq!(carousel.rows()[1][0].id, second);
        assert_eq!(carousel.rows()[1][0].left, 0.0);
    }

    #[test]
    fn shift_on_empty_grid_is_noop() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut carousel = BackgroundCarousel::generate(layout(0, 0), 6, &mut rng);
        carousel.shift();
        assert!(carousel.rows().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_emits_until_stopped() {
        let (handle, mut ticks) = start_rotation(Duration::from_millis(500));
        assert_eq!(ticks.recv().await, Some(1));
        assert_eq!(ticks.recv().await, Some(2));

        handle.stop();
        assert!(handle.is_stopped());
        while ticks.recv().await.is_some() {}
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_waits_one_period_before_first_tick() {
        let (handle, mut ticks) = start_rotation(Duration::from_secs(6));
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(ticks.try_recv().is_err());
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(ticks.try_recv().ok(), Some(1));
        handle.stop();
    }
}
