#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Profile {
    pub camera_rays: usize,     // primary rays, one per pixel
    pub shadow_rays: usize,     // rays used to test visibility of the light
    pub reflection_rays: usize, // rays spawned in the mirror direction
    pub env_hits: usize,        // rays that escaped to the background
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        shadow_rays: usize,
        reflection_rays: usize,
        env_hits: usize,
    ) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            reflection_rays,
            env_hits,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.reflection_rays + other.reflection_rays,
            self.env_hits + other.env_hits,
        )
    }

    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.shadow_rays + self.reflection_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            reflection_rays,
            env_hits,
        } = self;
        // a render that finishes within the clock resolution would otherwise divide by zero
        let elapsed = elapsed.max(f32::EPSILON);
        let threads = threads.max(1) as f32;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / threads
        );
        info!(
            "{} total shadow rays at {} per second and {} per second per thread",
            shadow_rays,
            shadow_rays as f32 / elapsed,
            shadow_rays as f32 / elapsed / threads
        );
        info!(
            "{} total reflection rays at {} per second and {} per second per thread",
            reflection_rays,
            reflection_rays as f32 / elapsed,
            reflection_rays as f32 / elapsed / threads
        );
        info!("{} total env hits", env_hits);
        let sum = self.total_rays();
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / threads
        );
    }
}
