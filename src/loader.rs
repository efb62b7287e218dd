//! Image loading through `HtmlImageElement`.
//!
//! Every locator gets its own element with `load`/`error` listeners feeding a
//! shared [`LoadJoin`]. [`LoadAll`] resolves once the join does. The listeners
//! live inside the future, so they are removed as soon as it is dropped.

use carousel_core::{CarouselError, ImageAsset, JoinProgress, LoadJoin};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use web_sys as web;

pub type LoadedImages = Vec<ImageAsset<web::HtmlImageElement>>;

struct Shared {
    join: LoadJoin<web::HtmlImageElement>,
    outcome: Option<Result<LoadedImages, CarouselError>>,
    waker: Option<Waker>,
}

pub struct LoadAll {
    shared: Rc<RefCell<Shared>>,
    _listeners: Vec<EventListener>,
}

/// Start loading every locator; results keep the input order.
pub fn load_images(locators: &[String]) -> anyhow::Result<LoadAll> {
    let shared = Rc::new(RefCell::new(Shared {
        join: LoadJoin::new(locators.len()),
        outcome: None,
        waker: None,
    }));
    let mut listeners = Vec::with_capacity(locators.len() * 2);

    for (index, locator) in locators.iter().enumerate() {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let on_load = {
            let shared = shared.clone();
            let img_done = img.clone();
            EventListener::new(&img, "load", move |_| {
                let progress = shared.borrow_mut().join.complete(
                    index,
                    img_done.clone(),
                    img_done.natural_width() as f64,
                    img_done.natural_height() as f64,
                );
                settle(&shared, progress);
            })
        };
        let on_error = {
            let shared = shared.clone();
            let locator = locator.clone();
            EventListener::new(&img, "error", move |_| {
                let progress = shared
                    .borrow_mut()
                    .join
                    .fail(index, &locator, "image could not be decoded");
                settle(&shared, progress);
            })
        };
        listeners.push(on_load);
        listeners.push(on_error);

        img.set_src(locator);
        log::debug!("[loader] requested #{index} {locator}");
    }

    Ok(LoadAll {
        shared,
        _listeners: listeners,
    })
}

fn settle(shared: &Rc<RefCell<Shared>>, progress: JoinProgress<web::HtmlImageElement>) {
    let outcome = match progress {
        JoinProgress::Ready(assets) => Ok(assets),
        JoinProgress::Failed(err) => Err(err),
        JoinProgress::Pending | JoinProgress::Finished => return,
    };
    let waker = {
        let mut s = shared.borrow_mut();
        s.outcome = Some(outcome);
        s.waker.take()
    };
    if let Some(w) = waker {
        w.wake();
    }
}

impl Future for LoadAll {
    type Output = Result<LoadedImages, CarouselError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut s = self.shared.borrow_mut();
        match s.outcome.take() {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                s.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}
