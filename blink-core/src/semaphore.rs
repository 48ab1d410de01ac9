use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Semaphore holding at most one permit. Starts empty.
///
/// Giving twice before a take still leaves a single permit.
pub struct BinarySemaphore<M: RawMutex> {
    permit: Signal<M, ()>,
}

impl<M: RawMutex> BinarySemaphore<M> {
    pub const fn new() -> Self {
        Self {
            permit: Signal::new(),
        }
    }

    pub fn give(&self) {
        self.permit.signal(());
    }

    /// Waits for the permit, for as long as it takes.
    pub async fn take(&self) {
        self.permit.wait().await
    }

    pub fn try_take(&self) -> bool {
        self.permit.try_take().is_some()
    }

    pub fn is_available(&self) -> bool {
        self.permit.signaled()
    }
}

impl<M: RawMutex> Default for BinarySemaphore<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySemaphore;
    use core::pin::pin;
    use embassy_futures::poll_once;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use std::task::Poll;
    use tokio;

    #[test]
    fn test_starts_empty() {
        let sem = BinarySemaphore::<NoopRawMutex>::new();
        assert!(!sem.is_available());
        assert!(!sem.try_take());
    }

    #[test]
    fn test_holds_at_most_one_permit() {
        let sem = BinarySemaphore::<NoopRawMutex>::new();
        sem.give();
        sem.give();
        assert!(sem.is_available());
        assert!(sem.try_take());
        assert!(!sem.try_take());
    }

    #[test]
    fn test_take_waits_for_give() {
        let sem = BinarySemaphore::<NoopRawMutex>::new();
        let mut take = pin!(sem.take());
        assert_eq!(poll_once(take.as_mut()), Poll::Pending);
        sem.give();
        assert_eq!(poll_once(take.as_mut()), Poll::Ready(()));
        assert!(!sem.is_available());
    }

    #[tokio::test]
    async fn test_hand_off_between_tasks() {
        static RECEIVED: BinarySemaphore<CriticalSectionRawMutex> = BinarySemaphore::new();
        let arg = 750;

        let worker = tokio::spawn(async move {
            let copy = arg;
            RECEIVED.give();
            copy
        });

        RECEIVED.take().await;
        assert_eq!(worker.await.unwrap(), 750);
        assert!(!RECEIVED.is_available());
    }
}
