// MIT/Apache2 License

use crate::{geometry::Point, Engine, Result};

/// Temporarily replaces an engine's source with the contents of another engine.
///
/// The previous source is put back by [`SourceGuard::restore`], or when the guard is dropped if that never
/// happens. Failures while restoring on drop can't be returned, so they are logged instead.
pub(crate) struct SourceGuard<'a, E: Engine> {
    engine: &'a mut E,
    saved: Option<E::Source>,
}

impl<'a, E: Engine> SourceGuard<'a, E> {
    /// Install `surface`, placed at `origin`, as the source of `engine`.
    #[inline]
    pub(crate) fn with_surface(engine: &'a mut E, surface: &E, origin: Point) -> Result<Self> {
        let saved = engine.source();
        engine.set_source_surface(surface, origin)?;
        Ok(Self {
            engine,
            saved: Some(saved),
        })
    }

    #[inline]
    pub(crate) fn engine(&mut self) -> &mut E {
        self.engine
    }

    /// Put the previous source back, reporting any failure.
    #[inline]
    pub(crate) fn restore(mut self) -> Result {
        match self.saved.take() {
            Some(saved) => self.engine.set_source(&saved),
            None => Ok(()),
        }
    }
}

impl<'a, E: Engine> Drop for SourceGuard<'a, E> {
    #[inline]
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if let Err(e) = self.engine.set_source(&saved) {
                log::error!("Unable to restore the previous source: {}", e);
            }
        }
    }
}

#[cfg(all(test, feature = "recording"))]
mod tests {
    use super::*;
    use crate::{geometry::point, Color, RecordedSource, RecordingEngine};

    #[test]
    fn dropping_the_guard_restores_the_source() {
        let mut engine = RecordingEngine::new(10, 10);
        let other = RecordingEngine::new(10, 10);
        engine.set_brush(&Color::white().into()).unwrap();
        let before = engine.source();

        {
            let mut guard = SourceGuard::with_surface(&mut engine, &other, point(1.0, 2.0)).unwrap();
            assert_eq!(
                guard.engine().source(),
                RecordedSource::Surface {
                    id: other.id(),
                    origin: point(1.0, 2.0)
                }
            );
        }

        assert_eq!(engine.source(), before);
    }

    #[test]
    fn explicit_restore_happens_once() {
        let mut engine = RecordingEngine::new(10, 10);
        let other = RecordingEngine::new(10, 10);
        let before = engine.source();

        let guard = SourceGuard::with_surface(&mut engine, &other, point(0.0, 0.0)).unwrap();
        guard.restore().unwrap();

        assert_eq!(engine.source(), before);
        // one substitution, one restore
        assert_eq!(engine.commands().len(), 2);
    }
}
