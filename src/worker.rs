//! Background searches for the interactive front ends
//!
//! Each triggered search runs on its own thread and reports back over a
//! channel. Results are applied in the order they arrive; overlapping searches
//! are neither cancelled nor sequenced, so the last one to settle wins.

use crate::client::TrendsSource;
use crate::error::{ExplorerError, Result};
use crate::model::SearchResult;
use crate::view::SearchView;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Messages from background threads
pub enum BgMessage {
    SearchSettled {
        keyword: String,
        result: Result<SearchResult>,
    },
}

/// Reports a search back when dropped, so a fetch that panics still
/// settles and the in-flight count stays accurate.
struct SettleGuard<F: FnOnce()> {
    keyword: String,
    result: Option<Result<SearchResult>>,
    tx: Sender<BgMessage>,
    notify: Option<F>,
}

impl<F: FnOnce()> Drop for SettleGuard<F> {
    fn drop(&mut self) {
        let result = self
            .result
            .take()
            .unwrap_or_else(|| Err(ExplorerError::Transport("search aborted".to_string())));
        let keyword = std::mem::take(&mut self.keyword);
        let _ = self.tx.send(BgMessage::SearchSettled { keyword, result });
        if let Some(notify) = self.notify.take() {
            notify();
        }
    }
}

pub struct SearchWorker {
    source: Arc<dyn TrendsSource>,
    bg_sender: Sender<BgMessage>,
    bg_receiver: Receiver<BgMessage>,
    in_flight: usize,
}

impl SearchWorker {
    pub fn new(source: Arc<dyn TrendsSource>) -> Self {
        let (tx, rx) = channel();
        Self {
            source,
            bg_sender: tx,
            bg_receiver: rx,
            in_flight: 0,
        }
    }

    /// Number of searches started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a search for `keyword`. `notify` runs on the worker thread once
    /// the result has been queued (the GUI uses it to request a repaint).
    pub fn spawn<F>(&mut self, keyword: String, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.in_flight += 1;
        let source = Arc::clone(&self.source);
        let tx = self.bg_sender.clone();

        log::debug!(target: "SEARCH", "spawning search for {:?}", keyword);
        thread::spawn(move || {
            let mut guard = SettleGuard {
                keyword,
                result: None,
                tx,
                notify: Some(notify),
            };
            guard.result = Some(source.fetch(&guard.keyword));
        });
    }

    /// Apply every settled search to `view`, oldest first.
    ///
    /// Returns how many results were applied.
    pub fn process_messages(&mut self, view: &mut SearchView) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.bg_receiver.try_recv() {
            match msg {
                BgMessage::SearchSettled { keyword, result } => {
                    log::debug!(target: "SEARCH", "settled search for {:?}", keyword);
                    view.apply(result);
                    self.in_flight = self.in_flight.saturating_sub(1);
                    applied += 1;
                }
            }
        }
        applied
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Source that answers from a closure and records the keywords it saw
    pub struct FnSource<F> {
        pub answer: F,
        pub seen: Mutex<Vec<String>>,
    }

    impl<F> FnSource<F>
    where
        F: Fn(&str) -> Result<SearchResult> + Send + Sync,
    {
        pub fn new(answer: F) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl<F> TrendsSource for FnSource<F>
    where
        F: Fn(&str) -> Result<SearchResult> + Send + Sync,
    {
        fn fetch(&self, keyword: &str) -> Result<SearchResult> {
            self.seen.lock().unwrap().push(keyword.to_string());
            (self.answer)(keyword)
        }
    }

    /// Pump `worker` until nothing is in flight, or panic after two seconds.
    pub fn settle(worker: &mut SearchWorker, view: &mut SearchView) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while worker.in_flight() > 0 {
            assert!(Instant::now() < deadline, "search did not settle");
            worker.process_messages(view);
            thread::sleep(Duration::from_millis(5));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{settle, FnSource};
    use super::*;
    use crate::error::ExplorerError;
    use crate::model::ResultEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn settled_search_is_applied() {
        let source = Arc::new(FnSource::new(|kw: &str| {
            Ok(SearchResult::new(vec![ResultEntry::from_raw(
                kw, "", "", "", "http://x",
            )]))
        }));
        let mut worker = SearchWorker::new(source.clone());
        let mut view = SearchView::new();

        worker.spawn("rust".to_string(), || {});
        assert_eq!(worker.in_flight(), 1);
        settle(&mut worker, &mut view);

        assert_eq!(view.rows()[0].title, "rust");
        assert_eq!(*source.seen.lock().unwrap(), vec!["rust".to_string()]);
    }

    #[test]
    fn notify_runs_after_settling() {
        let source = Arc::new(FnSource::new(|_: &str| Err(ExplorerError::HttpStatus(503))));
        let mut worker = SearchWorker::new(source);
        let mut view = SearchView::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        worker.spawn("x".to_string(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        settle(&mut worker, &mut view);

        assert_eq!(view.error(), Some("HTTP error! status: 503"));
        // The message is queued before notify runs.
        thread::sleep(Duration::from_millis(50));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_fetch_still_settles() {
        let source = Arc::new(FnSource::new(|kw: &str| {
            if kw == "boom" {
                panic!("fetch blew up");
            }
            Ok(SearchResult::default())
        }));
        let mut worker = SearchWorker::new(source);
        let mut view = SearchView::new();

        worker.spawn("boom".to_string(), || {});
        settle(&mut worker, &mut view);

        assert_eq!(worker.in_flight(), 0);
        assert_eq!(view.error(), Some("search aborted"));
    }

    #[test]
    fn slow_first_search_overwrites_fast_second() {
        let source = Arc::new(FnSource::new(|kw: &str| {
            if kw == "slow" {
                thread::sleep(Duration::from_millis(150));
                Ok(SearchResult::new(vec![ResultEntry::from_raw(
                    "slow", "", "", "", "http://s",
                )]))
            } else {
                Err(ExplorerError::Application("fast failed".into()))
            }
        }));
        let mut worker = SearchWorker::new(source);
        let mut view = SearchView::new();

        worker.spawn("slow".to_string(), || {});
        worker.spawn("fast".to_string(), || {});
        settle(&mut worker, &mut view);

        assert_eq!(view.error(), None);
        assert_eq!(view.rows()[0].title, "slow");
    }
}
