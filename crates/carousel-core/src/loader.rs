//! Completion-counting join over asynchronous image loads.
//!
//! Loads may finish in any order; the joined list keeps input order. The join
//! resolves exactly once, either with every asset or with the first failure.

use crate::error::CarouselError;
use crate::layout::ImageAsset;

#[derive(Debug)]
pub enum JoinProgress<H> {
    /// Still waiting on at least one load.
    Pending,
    /// Every load finished; assets are in input order.
    Ready(Vec<ImageAsset<H>>),
    /// A load failed; the remaining pipeline must not run.
    Failed(CarouselError),
    /// The join already resolved; the callback is ignored.
    Finished,
}

#[derive(Debug)]
pub struct LoadJoin<H> {
    slots: Vec<Option<ImageAsset<H>>>,
    remaining: usize,
    resolved: bool,
}

impl<H> LoadJoin<H> {
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(|_| None).collect(),
            remaining: count,
            resolved: false,
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Record a successful load of input `index`.
    pub fn complete(
        &mut self,
        index: usize,
        handle: H,
        natural_width: f64,
        natural_height: f64,
    ) -> JoinProgress<H> {
        if self.resolved {
            return JoinProgress::Finished;
        }
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(ImageAsset::new(handle, natural_width, natural_height));
                self.remaining -= 1;
            }
            Some(Some(_)) => {
                log::warn!("[loader] duplicate completion for image #{index}");
                return JoinProgress::Pending;
            }
            None => {
                log::warn!("[loader] completion for unknown image #{index}");
                return JoinProgress::Pending;
            }
        }
        if self.remaining > 0 {
            return JoinProgress::Pending;
        }
        self.resolved = true;
        let assets = std::mem::take(&mut self.slots)
            .into_iter()
            .flatten()
            .collect();
        JoinProgress::Ready(assets)
    }

    /// Record a failed load. The first failure resolves the join.
    pub fn fail(&mut self, index: usize, locator: &str, reason: &str) -> JoinProgress<H> {
        if self.resolved {
            return JoinProgress::Finished;
        }
        self.resolved = true;
        self.slots.clear();
        JoinProgress::Failed(CarouselError::AssetLoadFailure {
            index,
            locator: locator.to_string(),
            reason: reason.to_string(),
        })
    }
}
