// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The lock around the sink policy.

Blocking mutexes are not available on the wasm main thread, so the policy sits behind a
reader/writer spinlock.  Callers only hold it long enough to copy out or replace a few
fields; no I/O ever happens under it.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u32 = 0;
//any other value below WRITER counts readers
const WRITER: u32 = u32::MAX;

pub(crate) struct Spinlock<T> {
    data: UnsafeCell<T>,
    state: AtomicU32,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

/// Releases the lock on drop, so a panicking closure can't leave it held.
struct Unlock<'a>(&'a AtomicU32, bool);

impl Drop for Unlock<'_> {
    fn drop(&mut self) {
        if self.1 {
            self.0.store(UNLOCKED, Release);
        } else {
            self.0.fetch_sub(1, Release);
        }
    }
}

impl<T> Spinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            state: AtomicU32::new(UNLOCKED),
        }
    }

    fn acquire_write(&self) -> Unlock<'_> {
        while self
            .state
            .compare_exchange_weak(UNLOCKED, WRITER, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        Unlock(&self.state, true)
    }

    fn acquire_read(&self) -> Unlock<'_> {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |readers| {
                (readers < WRITER - 1).then_some(readers + 1)
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        Unlock(&self.state, false)
    }

    /// Runs `f` with exclusive access.
    pub(crate) fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let _unlock = self.acquire_write();
        // SAFETY: the write state excludes every other reader and writer until _unlock drops
        unsafe { f(&mut *self.data.get()) }
    }

    /// Runs `f` with shared access.
    pub(crate) fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let _unlock = self.acquire_read();
        // SAFETY: readers only coexist with other readers
        unsafe { f(&*self.data.get()) }
    }
}
