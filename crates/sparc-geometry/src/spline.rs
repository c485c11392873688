//! Authoring facade: a mutable control point sequence feeding a lazily
//! rebuilt, shareable snapshot.

use std::sync::Arc;

use sparc_core::{Generation, Result};
use sparc_math::CurveVector;

use crate::ark::ArkParameters;
use crate::control_points::ControlPoints;
use crate::settings::SplineSettings;
use crate::snapshot::Snapshot;
use crate::spline_type::{Kernel, SplineType};

#[derive(Debug, Clone)]
struct CachedSnapshot<V> {
    generation: Generation,
    settings: SplineSettings,
    snapshot: Arc<Snapshot<V>>,
}

/// A curve under construction.
///
/// Mutating the control points or the settings marks the cached snapshot
/// stale; the next call to [`Spline::snapshot`] rebuilds it. With ark mode
/// enabled the snapshot is a linear curve over the resample of the authored
/// points, never of a previous resample.
#[derive(Debug, Clone)]
pub struct Spline<V> {
    points: ControlPoints<V>,
    settings: SplineSettings,
    cache: Option<CachedSnapshot<V>>,
}

impl<V: CurveVector> Spline<V> {
    pub fn new(settings: SplineSettings) -> Self {
        Self::with_points(ControlPoints::new(), settings)
    }

    pub fn with_points(points: ControlPoints<V>, settings: SplineSettings) -> Self {
        Self {
            points,
            settings,
            cache: None,
        }
    }

    pub fn points(&self) -> &ControlPoints<V> {
        &self.points
    }

    /// Mutable access to the control points. Any mutation made through it
    /// invalidates the cached snapshot.
    pub fn points_mut(&mut self) -> &mut ControlPoints<V> {
        &mut self.points
    }

    pub fn settings(&self) -> &SplineSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: SplineSettings) {
        self.settings = settings;
    }

    pub fn set_kernel(&mut self, kernel: Kernel) {
        self.settings.kernel = kernel;
    }

    pub fn set_looped(&mut self, looped: bool) {
        self.settings.looped = looped;
    }

    pub fn set_ark(&mut self, ark: ArkParameters) {
        self.settings.ark = ark;
    }

    /// The type the authored points resolve to, reported as `Linear` in ark
    /// mode.
    ///
    /// This is computed without building a snapshot. A zero-length curve in
    /// ark mode resamples to a single point, so its snapshot resolves to
    /// `Single`; use [`Snapshot::spline_type`] for the type a built snapshot
    /// actually evaluates with.
    pub fn spline_type(&self) -> SplineType {
        let resolved = SplineType::resolve(self.points.len(), self.settings.kernel);
        if self.settings.ark.enabled && resolved.needs_table() {
            SplineType::Linear
        } else {
            resolved
        }
    }

    /// Whether the next [`Spline::snapshot`] call has to rebuild.
    pub fn is_stale(&self) -> bool {
        match &self.cache {
            Some(cache) => {
                cache.generation != self.points.generation() || cache.settings != self.settings
            }
            None => true,
        }
    }

    /// The current snapshot, rebuilt first if the points or settings changed.
    ///
    /// # Errors
    /// Fails only in ark mode, when the step length is not a finite positive
    /// number or the resample would be too dense.
    pub fn snapshot(&mut self) -> Result<Arc<Snapshot<V>>> {
        if !self.is_stale() {
            if let Some(cache) = &self.cache {
                return Ok(Arc::clone(&cache.snapshot));
            }
        }

        let snapshot = Arc::new(self.rebuild()?);
        log::debug!(
            "Rebuilt {:?} snapshot: {} nodes, {} segments, length {}",
            snapshot.spline_type(),
            snapshot.node_count(),
            snapshot.segment_count(),
            snapshot.length()
        );
        self.cache = Some(CachedSnapshot {
            generation: self.points.generation(),
            settings: self.settings,
            snapshot: Arc::clone(&snapshot),
        });
        Ok(snapshot)
    }

    /// Evaluate the current snapshot at `progress`.
    ///
    /// # Errors
    /// See [`Spline::snapshot`].
    pub fn evaluate(&mut self, progress: f64) -> Result<V> {
        Ok(self.snapshot()?.evaluate(progress))
    }

    /// Length of the current snapshot.
    ///
    /// # Errors
    /// See [`Spline::snapshot`].
    pub fn length(&mut self) -> Result<f64> {
        Ok(self.snapshot()?.length())
    }

    /// Drop the cached snapshot. Clones handed out earlier stay valid.
    pub fn release(&mut self) {
        self.cache = None;
    }

    fn rebuild(&self) -> Result<Snapshot<V>> {
        let authored = Snapshot::freeze(&self.points, &self.settings);
        let ark = self.settings.ark;
        if ark.enabled && authored.spline_type().needs_table() {
            authored.ark(ark.step_length, self.settings.resolution)
        } else {
            Ok(authored)
        }
    }
}

impl<V: CurveVector> Default for Spline<V> {
    fn default() -> Self {
        Self::new(SplineSettings::default())
    }
}
