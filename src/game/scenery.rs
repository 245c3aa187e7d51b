// Static and animated backdrop drawn behind the fighters

use glam::Vec2;

use crate::engine::assets::ImageHandle;
use crate::engine::renderer::DrawingSink;
use crate::game::characters::{AnimatedSprite, AnimationClip, ConfigError};

/// A sprite fixed in place
#[derive(Debug, Clone)]
pub struct Prop {
    sprite: AnimatedSprite,
    position: Vec2,
    scale: f32,
}

impl Prop {
    pub fn new(
        image: ImageHandle,
        frame_count: u32,
        frame_hold_ticks: u32,
        position: Vec2,
        scale: f32,
    ) -> Result<Self, ConfigError> {
        let clip = AnimationClip::new(image, frame_count, frame_hold_ticks)?;
        Ok(Self {
            sprite: AnimatedSprite::new(clip),
            position,
            scale,
        })
    }

    pub fn tick(&mut self) {
        self.sprite.advance_frame();
    }

    pub fn render(&self, sink: &mut dyn DrawingSink) {
        self.sprite.draw(sink, self.position, self.scale, false);
    }

    #[cfg(test)]
    pub(crate) fn sprite(&self) -> &AnimatedSprite {
        &self.sprite
    }
}

/// Background plus the animated shop, in draw order
#[derive(Debug, Clone)]
pub struct Scenery {
    props: Vec<Prop>,
}

impl Scenery {
    /// The standard arena backdrop
    pub fn standard(mut load_image: impl FnMut(&str) -> ImageHandle) -> Result<Self, ConfigError> {
        let background = Prop::new(load_image("background.png"), 1, 5, Vec2::ZERO, 1.0)?;
        let shop = Prop::new(load_image("shop.png"), 6, 20, Vec2::new(600.0, 128.0), 2.75)?;
        Ok(Self {
            props: vec![background, shop],
        })
    }

    pub fn tick(&mut self) {
        for prop in &mut self.props {
            prop.tick();
        }
    }

    pub fn render(&self, sink: &mut dyn DrawingSink) {
        for prop in &self.props {
            prop.render(sink);
        }
    }

    #[cfg(test)]
    pub(crate) fn props(&self) -> &[Prop] {
        &self.props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Rect;
    use crate::engine::renderer::recording::RecordingSink;
    use image::RgbaImage;

    fn loaded_scenery() -> Scenery {
        Scenery::standard(|path| {
            let image = if path == "shop.png" {
                RgbaImage::new(708, 128)
            } else {
                RgbaImage::new(1024, 576)
            };
            ImageHandle::from_image(path, image)
        })
        .unwrap()
    }

    #[test]
    fn test_background_drawn_before_shop() {
        let scenery = loaded_scenery();
        let mut sink = RecordingSink::new();
        scenery.render(&mut sink);

        let images = sink.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].2, Rect::new(0.0, 0.0, 1024.0, 576.0));
        // Shop frames are 118px wide, scaled by 2.75
        assert_eq!(images[1].1, Rect::new(0.0, 0.0, 118.0, 128.0));
        assert_eq!(images[1].2, Rect::new(600.0, 128.0, 324.5, 352.0));
    }

    #[test]
    fn test_shop_animates_every_twenty_ticks() {
        let mut scenery = loaded_scenery();
        for _ in 0..20 {
            scenery.tick();
        }
        assert_eq!(scenery.props()[1].sprite().frame_index(), 1);
        assert_eq!(scenery.props()[0].sprite().frame_index(), 0);
    }

    #[test]
    fn test_pending_scenery_draws_nothing() {
        let scenery = Scenery::standard(ImageHandle::pending).unwrap();
        let mut sink = RecordingSink::new();
        scenery.render(&mut sink);
        assert!(sink.commands.is_empty());
    }
}
