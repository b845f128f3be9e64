// MIT/Apache2 License

use crate::Result;
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError, Weak},
};

/// Lazily creates a shared device handle and hands out clones of it for as long as somebody holds one.
///
/// The cache only keeps a weak reference. Once every handle is dropped, the next request creates a new one.
pub struct DeviceCache<D> {
    cached: Mutex<Weak<D>>,
}

impl<D> DeviceCache<D> {
    #[inline]
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(Weak::new()),
        }
    }

    /// Get the live device, or make a new one with `create`.
    #[inline]
    pub fn get_or_create<F: FnOnce() -> Result<D>>(&self, create: F) -> Result<Arc<D>> {
        // the weak pointer is always valid, even if a previous holder panicked
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(device) = cached.upgrade() {
            return Ok(device);
        }

        log::debug!("Creating a new device handle");
        let device = Arc::new(create()?);
        *cached = Arc::downgrade(&device);
        Ok(device)
    }
}

impl<D> Default for DeviceCache<D> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for DeviceCache<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alive = self
            .cached
            .lock()
            .map(|cached| cached.strong_count() > 0)
            .unwrap_or(false);
        f.debug_struct("DeviceCache").field("alive", &alive).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, NotSupportedOp};
    use std::cell::Cell;

    #[test]
    fn reuses_live_devices() {
        let cache = DeviceCache::new();
        let made = Cell::new(0);
        let create = || {
            made.set(made.get() + 1);
            Ok(made.get())
        };

        let a = cache.get_or_create(create).unwrap();
        let b = cache.get_or_create(create).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(made.get(), 1);

        drop(a);
        drop(b);
        let c = cache.get_or_create(create).unwrap();
        assert_eq!(*c, 2);
    }

    #[test]
    fn creation_errors_are_not_cached() {
        let cache: DeviceCache<u32> = DeviceCache::new();
        assert_eq!(
            cache.get_or_create(|| Err(Error::NotSupported(NotSupportedOp::Devices))),
            Err(Error::NotSupported(NotSupportedOp::Devices))
        );
        assert_eq!(*cache.get_or_create(|| Ok(7)).unwrap(), 7);
    }
}
