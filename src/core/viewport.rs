use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::description::SceneDescription;
use crate::error::Result;
use crate::scene::{Animator, MaterialPalette, Scene};

use super::backend::{RenderBackend, RenderTarget};
use super::mount::{MountPoint, ViewportSize};
use super::scheduler::{FrameHandle, FrameScheduler};

/// Everything acquired for one shown description
struct Session<T: RenderTarget> {
    scene: Scene,
    target: T,
    frame: Option<FrameHandle>,
    frames_rendered: u64,
}

impl<T: RenderTarget> Session<T> {
    /// Cancel the pending frame, drop the target, detach its surface.
    /// The order matters: no callback may fire against a released target.
    fn release<M: MountPoint, S: FrameScheduler>(self, mount: &mut M, scheduler: &mut S) {
        let Session {
            target,
            frame,
            frames_rendered,
            ..
        } = self;

        if let Some(handle) = frame {
            scheduler.cancel_frame(handle);
        }
        let surface = target.surface_id();
        drop(target);
        mount.detach(surface);

        log::debug!("Released {} after {} frames", surface, frames_rendered);
    }
}

/// Scene renderer bound to one mount point.
///
/// At most one session is active. Showing a new description tears the old
/// one down completely before anything new is acquired, and every exit
/// path (unmount, failed construction, failed frame, drop) goes through the
/// same ordered release.
pub struct Viewport<B: RenderBackend, M: MountPoint, S: FrameScheduler> {
    backend: B,
    mount: M,
    scheduler: S,
    palette: Arc<MaterialPalette>,
    config: ViewerConfig,
    animator: Animator,
    session: Option<Session<B::Target>>,
}

impl<B: RenderBackend, M: MountPoint, S: FrameScheduler> Viewport<B, M, S> {
    pub fn new(
        backend: B,
        mount: M,
        scheduler: S,
        palette: Arc<MaterialPalette>,
        config: ViewerConfig,
    ) -> Self {
        let animator = Animator::new(config.rotation_step);
        Self {
            backend,
            mount,
            scheduler,
            palette,
            config,
            animator,
            session: None,
        }
    }

    /// Build and display `description`, replacing any active scene.
    ///
    /// Malformed descriptions never fail; errors come from the backend only,
    /// and leave the viewport unmounted.
    pub fn show(&mut self, description: &SceneDescription) -> Result<()> {
        self.unmount();

        let size = self.mount.size();
        let scene = Scene::build(description, size, &self.palette, &self.config);
        match scene.metadata.as_ref().and_then(|m| m.label()) {
            Some(label) => log::info!("Showing {} ({} meshes)", label, scene.mesh_count()),
            None => log::info!("Showing scene ({} meshes)", scene.mesh_count()),
        }

        let target = self.backend.create_target(size)?;
        self.mount.attach(target.surface_id());

        let mut session = Session {
            scene,
            target,
            frame: None,
            frames_rendered: 0,
        };

        if let Err(e) = session.target.render(&session.scene) {
            log::error!("Initial frame failed: {}", e);
            session.release(&mut self.mount, &mut self.scheduler);
            return Err(e);
        }
        session.frames_rendered = 1;
        session.frame = Some(self.scheduler.request_frame());

        self.session = Some(session);
        Ok(())
    }

    /// Frame callback. Animates, renders and re-arms the loop.
    ///
    /// Returns `Ok(false)` for a handle that is stale or was cancelled.
    pub fn on_frame(&mut self, handle: FrameHandle, time: f32) -> Result<bool> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if session.frame != Some(handle) {
            log::trace!("Ignoring stale frame {:?}", handle);
            return Ok(false);
        }
        session.frame = None;

        self.animator.advance(&mut session.scene, time);

        if let Err(e) = session.target.render(&session.scene) {
            log::error!("Frame failed, stopping render loop: {}", e);
            self.unmount();
            return Err(e);
        }

        session.frames_rendered += 1;
        session.frame = Some(self.scheduler.request_frame());
        Ok(true)
    }

    pub fn resize(&mut self, size: ViewportSize) {
        if size.is_empty() {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.scene.set_viewport(size);
            session.target.resize(size);
        }
    }

    /// Stop the loop and release everything. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(session) = self.session.take() {
            session.release(&mut self.mount, &mut self.scheduler);
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.session.as_ref().map(|s| &s.scene)
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.session.as_mut().map(|s| &mut s.scene)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.frames_rendered)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.session.as_ref().and_then(|s| s.frame)
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: RenderBackend, M: MountPoint, S: FrameScheduler> Drop for Viewport<B, M, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
