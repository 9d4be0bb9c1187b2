//! Frame-rate overlay shown above everything else on the stage.

/// Health band used to color the FPS readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpsRating {
    /// 55 fps and up.
    Good,
    /// 30 to 54 fps.
    Moderate,
    Poor,
}

impl FpsRating {
    pub fn classify(fps: u32) -> Self {
        if fps >= 55 {
            FpsRating::Good
        } else if fps >= 30 {
            FpsRating::Moderate
        } else {
            FpsRating::Poor
        }
    }

    /// RGB color the host should draw the label in.
    pub fn color(self) -> u32 {
        match self {
            FpsRating::Good => 0x00ff00,
            FpsRating::Moderate => 0xffff00,
            FpsRating::Poor => 0xff0000,
        }
    }
}

/// Counts frames and samples the rate every `sample_interval` seconds.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    sample_interval: f32,
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl FpsCounter {
    /// Reads 60 until the first sample lands.
    pub fn new(sample_interval: f32) -> Self {
        Self {
            sample_interval,
            frames: 0,
            elapsed: 0.0,
            fps: 60,
        }
    }

    /// Record one frame that took `seconds`.
    pub fn tick(&mut self, seconds: f32) {
        self.frames += 1;
        self.elapsed += seconds;
        if self.elapsed >= self.sample_interval {
            self.fps = (self.frames as f32 / self.elapsed).round() as u32;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn rating(&self) -> FpsRating {
        FpsRating::classify(self.fps)
    }

    pub fn label(&self) -> String {
        format!("FPS: {}", self.fps)
    }
}
