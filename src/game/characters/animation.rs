// Character animation system
//
// Sprite sheets are single horizontal strips: frame `i` is the `i`-th
// equal-width column. Timing is counted in simulation ticks, not seconds.

use glam::Vec2;

use super::ConfigError;
use crate::core::math::Rect;
use crate::engine::assets::ImageHandle;
use crate::engine::renderer::DrawingSink;

/// Every animation a combatant can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationName {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
}

impl AnimationName {
    pub const ALL: [AnimationName; 5] = [
        AnimationName::Idle,
        AnimationName::Run,
        AnimationName::Jump,
        AnimationName::Fall,
        AnimationName::Attack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Attack => "attack",
        }
    }
}

/// A strip image plus its frame timing; immutable once built
#[derive(Debug, Clone)]
pub struct AnimationClip {
    image: ImageHandle,
    frame_count: u32,
    frame_hold_ticks: u32,
}

impl AnimationClip {
    /// Create a clip, rejecting zero frames or a zero hold
    pub fn new(
        image: ImageHandle,
        frame_count: u32,
        frame_hold_ticks: u32,
    ) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::ZeroFrameCount);
        }
        if frame_hold_ticks == 0 {
            return Err(ConfigError::ZeroFrameHold);
        }
        Ok(Self {
            image,
            frame_count,
            frame_hold_ticks,
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn frame_hold_ticks(&self) -> u32 {
        self.frame_hold_ticks
    }

    /// Region of the strip holding `frame_index`; `None` until the image is loaded
    pub fn source_region(&self, frame_index: u32) -> Option<Rect> {
        let (width, height) = self.image.dimensions()?;
        let frame_width = width as f32 / self.frame_count as f32;
        Some(Rect::new(
            frame_index as f32 * frame_width,
            0.0,
            frame_width,
            height as f32,
        ))
    }
}

/// One clip per `AnimationName`, complete by construction
#[derive(Debug, Clone)]
pub struct AnimationSet {
    idle: AnimationClip,
    run: AnimationClip,
    jump: AnimationClip,
    fall: AnimationClip,
    attack: AnimationClip,
}

impl AnimationSet {
    /// Build from named clips; a later duplicate replaces an earlier one
    pub fn new(
        clips: impl IntoIterator<Item = (AnimationName, AnimationClip)>,
    ) -> Result<Self, ConfigError> {
        let (mut idle, mut run, mut jump, mut fall, mut attack) = (None, None, None, None, None);
        for (name, clip) in clips {
            let slot = match name {
                AnimationName::Idle => &mut idle,
                AnimationName::Run => &mut run,
                AnimationName::Jump => &mut jump,
                AnimationName::Fall => &mut fall,
                AnimationName::Attack => &mut attack,
            };
            *slot = Some(clip);
        }

        let missing = |name: AnimationName| ConfigError::MissingAnimation(name.as_str());
        Ok(Self {
            idle: idle.ok_or_else(|| missing(AnimationName::Idle))?,
            run: run.ok_or_else(|| missing(AnimationName::Run))?,
            jump: jump.ok_or_else(|| missing(AnimationName::Jump))?,
            fall: fall.ok_or_else(|| missing(AnimationName::Fall))?,
            attack: attack.ok_or_else(|| missing(AnimationName::Attack))?,
        })
    }

    pub fn get(&self, name: AnimationName) -> &AnimationClip {
        match name {
            AnimationName::Idle => &self.idle,
            AnimationName::Run => &self.run,
            AnimationName::Jump => &self.jump,
            AnimationName::Fall => &self.fall,
            AnimationName::Attack => &self.attack,
        }
    }
}

/// Frame cursor over the clip currently being shown
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    clip: AnimationClip,
    /// Which named clip is showing; `None` for free-standing sprites like scenery
    current: Option<AnimationName>,
    frame_index: u32,
    elapsed_hold_ticks: u32,
}

impl AnimatedSprite {
    /// A sprite that always shows `clip`
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            current: None,
            frame_index: 0,
            elapsed_hold_ticks: 0,
        }
    }

    /// A sprite starting on the named clip of `set`
    pub fn from_set(set: &AnimationSet, initial: AnimationName) -> Self {
        Self {
            current: Some(initial),
            ..Self::new(set.get(initial).clone())
        }
    }

    /// Count one tick; step to the next frame (wrapping) once the hold is reached
    pub fn advance_frame(&mut self) {
        self.elapsed_hold_ticks += 1;
        if self.elapsed_hold_ticks >= self.clip.frame_hold_ticks() {
            self.elapsed_hold_ticks = 0;
            self.frame_index = (self.frame_index + 1) % self.clip.frame_count();
        }
    }

    /// Switch clips; switching to the clip already showing does nothing
    pub fn set_animation(&mut self, name: AnimationName, clip: &AnimationClip) {
        if self.current == Some(name) {
            return;
        }
        self.current = Some(name);
        self.clip = clip.clone();
        self.restart();
    }

    /// Replay the current clip from its first frame
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.elapsed_hold_ticks = 0;
    }

    pub fn current(&self) -> Option<AnimationName> {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    #[cfg(test)]
    pub(crate) fn frame_index(&self) -> u32 {
        self.frame_index
    }

    #[cfg(test)]
    pub(crate) fn elapsed_hold_ticks(&self) -> u32 {
        self.elapsed_hold_ticks
    }

    pub fn is_on_last_frame(&self) -> bool {
        self.frame_index + 1 == self.clip.frame_count()
    }

    pub fn current_source_region(&self) -> Option<Rect> {
        self.clip.source_region(self.frame_index)
    }

    /// Draw the current frame with its top-left at `origin`, scaled
    ///
    /// Nothing is drawn while the image is still loading.
    pub fn draw(&self, sink: &mut dyn DrawingSink, origin: Vec2, scale: f32, flip_x: bool) {
        let Some(src) = self.current_source_region() else {
            return;
        };
        let dst = Rect::from_origin(origin, src.size() * scale);
        sink.draw_image_region(&self.clip.image, src, dst, flip_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::recording::RecordingSink;
    use image::RgbaImage;

    fn strip(name: &str, frames: u32) -> ImageHandle {
        ImageHandle::from_image(name, RgbaImage::new(40 * frames, 60))
    }

    fn clip(name: &str, frames: u32, hold: u32) -> AnimationClip {
        AnimationClip::new(strip(name, frames), frames, hold).unwrap()
    }

    fn full_set() -> AnimationSet {
        AnimationSet::new([
            (AnimationName::Idle, clip("idle", 4, 20)),
            (AnimationName::Run, clip("run", 8, 20)),
            (AnimationName::Jump, clip("jump", 2, 20)),
            (AnimationName::Fall, clip("fall", 2, 20)),
            (AnimationName::Attack, clip("attack", 4, 6)),
        ])
        .unwrap()
    }

    #[test]
    fn test_clip_rejects_zero_frames() {
        let result = AnimationClip::new(ImageHandle::pending("x"), 0, 5);
        assert!(matches!(result, Err(ConfigError::ZeroFrameCount)));
    }

    #[test]
    fn test_clip_rejects_zero_hold() {
        let result = AnimationClip::new(ImageHandle::pending("x"), 3, 0);
        assert!(matches!(result, Err(ConfigError::ZeroFrameHold)));
    }

    #[test]
    fn test_set_reports_missing_clip() {
        let result = AnimationSet::new([
            (AnimationName::Idle, clip("idle", 4, 20)),
            (AnimationName::Run, clip("run", 8, 20)),
            (AnimationName::Jump, clip("jump", 2, 20)),
            (AnimationName::Fall, clip("fall", 2, 20)),
        ]);
        assert!(matches!(result, Err(ConfigError::MissingAnimation("attack"))));
    }

    #[test]
    fn test_advance_holds_then_steps() {
        let mut sprite = AnimatedSprite::new(clip("idle", 4, 3));
        sprite.advance_frame();
        sprite.advance_frame();
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.elapsed_hold_ticks(), 2);

        sprite.advance_frame();
        assert_eq!(sprite.frame_index(), 1);
        assert_eq!(sprite.elapsed_hold_ticks(), 0);
    }

    #[test]
    fn test_advance_wraps_to_first_frame() {
        let mut sprite = AnimatedSprite::new(clip("jump", 2, 1));
        sprite.advance_frame();
        assert!(sprite.is_on_last_frame());
        sprite.advance_frame();
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_source_region_selects_column() {
        let mut sprite = AnimatedSprite::new(clip("run", 8, 1));
        sprite.advance_frame();
        sprite.advance_frame();
        assert_eq!(
            sprite.current_source_region(),
            Some(Rect::new(80.0, 0.0, 40.0, 60.0))
        );
    }

    #[test]
    fn test_source_region_none_while_loading() {
        let pending = AnimationClip::new(ImageHandle::pending("late"), 4, 5).unwrap();
        let sprite = AnimatedSprite::new(pending);
        assert_eq!(sprite.current_source_region(), None);
    }

    #[test]
    fn test_set_animation_is_idempotent() {
        let set = full_set();
        let mut sprite = AnimatedSprite::from_set(&set, AnimationName::Run);
        for _ in 0..45 {
            sprite.advance_frame();
        }
        assert_eq!(sprite.frame_index(), 2);

        sprite.set_animation(AnimationName::Run, set.get(AnimationName::Run));
        assert_eq!(sprite.frame_index(), 2);
        assert_eq!(sprite.elapsed_hold_ticks(), 5);
    }

    #[test]
    fn test_set_animation_resets_cursor() {
        let set = full_set();
        let mut sprite = AnimatedSprite::from_set(&set, AnimationName::Run);
        for _ in 0..45 {
            sprite.advance_frame();
        }

        sprite.set_animation(AnimationName::Jump, set.get(AnimationName::Jump));
        assert_eq!(sprite.current(), Some(AnimationName::Jump));
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.elapsed_hold_ticks(), 0);
        assert_eq!(sprite.clip().frame_count(), 2);

        // Coming back never resumes mid-cycle
        sprite.set_animation(AnimationName::Run, set.get(AnimationName::Run));
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_restart_replays_clip() {
        let set = full_set();
        let mut sprite = AnimatedSprite::from_set(&set, AnimationName::Attack);
        for _ in 0..13 {
            sprite.advance_frame();
        }
        assert_eq!(sprite.frame_index(), 2);

        sprite.restart();
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.elapsed_hold_ticks(), 0);
    }

    #[test]
    fn test_draw_scales_and_flips() {
        let sprite = AnimatedSprite::new(clip("idle", 4, 20));
        let mut sink = RecordingSink::new();
        sprite.draw(&mut sink, Vec2::new(10.0, 20.0), 2.5, true);

        let images = sink.images();
        assert_eq!(images.len(), 1);
        let (_, src, dst, flip) = images[0];
        assert_eq!(src, Rect::new(0.0, 0.0, 40.0, 60.0));
        assert_eq!(dst, Rect::new(10.0, 20.0, 100.0, 150.0));
        assert!(flip);
    }

    #[test]
    fn test_draw_skips_pending_image() {
        let pending = AnimationClip::new(ImageHandle::pending("late"), 4, 5).unwrap();
        let mut sink = RecordingSink::new();
        AnimatedSprite::new(pending).draw(&mut sink, Vec2::ZERO, 1.0, false);
        assert!(sink.commands.is_empty());
    }
}
