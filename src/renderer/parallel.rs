use super::{Film, Renderer};

use crate::camera::PinholeCamera;
use crate::integrator::SamplerIntegrator;
use crate::math::RGBColor;
use crate::profile::Profile;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pbr::ProgressBar;
use rayon::prelude::*;

/// Splits the film into scanlines and traces them on the global rayon pool.
pub struct ParallelRenderer {
    pub show_progress: bool,
}

impl ParallelRenderer {
    pub fn new(show_progress: bool) -> ParallelRenderer {
        ParallelRenderer { show_progress }
    }
}

impl Renderer for ParallelRenderer {
    fn render_film(
        &self,
        integrator: &dyn SamplerIntegrator,
        camera: &PinholeCamera,
    ) -> (Film<RGBColor>, Profile) {
        let (width, height) = camera.resolution();
        let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::BLACK);
        if film.total_pixels() == 0 {
            return (film, Profile::default());
        }

        let rows_done = Arc::new(AtomicUsize::new(0));
        let progress_thread = if self.show_progress {
            let clone = rows_done.clone();
            Some(thread::spawn(move || {
                let mut pb = ProgressBar::new(height as u64);
                let mut local_index = 0;
                while local_index < height {
                    let rows_to_increment = clone.load(Ordering::Relaxed) - local_index;
                    pb.add(rows_to_increment as u64);
                    local_index += rows_to_increment;

                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            }))
        } else {
            None
        };

        let profile = film
            .buffer
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut profile = Profile::default();
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = integrator.color(camera.get_ray(x, y), &mut profile);
                }
                rows_done.fetch_add(1, Ordering::Relaxed);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        if let Some(handle) = progress_thread {
            if let Err(panic) = handle.join() {
                warn!("progress bar thread panicked: {:?}", panic);
            }
        }
        (film, profile)
    }
}
