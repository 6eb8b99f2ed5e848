use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;

/// Runs only the most recent of a burst of calls, once `delay` has passed
/// without another call.
///
/// Pending calls are aborted when the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `f`, replacing whatever was scheduled before.
    pub fn call<F>(&mut self, f: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f.await;
        }));
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    const DELAY: Duration = Duration::from_millis(10);

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> std::future::Ready<()>) {
        let count = Arc::new(AtomicUsize::new(0));
        let inc = {
            let count = Arc::clone(&count);
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                std::future::ready(())
            }
        };
        (count, inc)
    }

    #[tokio::test(start_paused = true)]
    async fn runs_last_call_only() {
        // Arrange
        let last = Arc::new(AtomicUsize::new(0));
        let mut sut = Debouncer::new(DELAY);

        // Act
        for i in 1..=5 {
            let last = Arc::clone(&last);
            sut.call(async move { last.store(i, Ordering::SeqCst) });
            tokio::time::sleep(DELAY / 2).await;
        }
        tokio::time::sleep(DELAY * 2).await;

        // Assert
        assert_eq!(last.load(Ordering::SeqCst), 5);
        assert!(!sut.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts() {
        let (count, inc) = counter();
        let mut sut = Debouncer::new(DELAY);

        sut.call(async move { inc().await });
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let (count2, inc2) = counter();
        sut.call(async move { inc2().await });
        sut.call(async {});
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(count2.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (count, inc) = counter();
        let mut sut = Debouncer::new(DELAY);
        sut.call(async move { inc().await });

        drop(sut);
        tokio::time::sleep(DELAY * 2).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
