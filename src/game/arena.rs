// The match: two combatants, a countdown, and the per-frame orchestration

use std::time::Instant;

use log::{info, trace};

use super::characters::{Archetype, Combatant, ConfigError};
use super::combat::resolve_exchange;
use super::config::WorldConfig;
use super::hud;
use super::scenery::Scenery;
use crate::engine::assets::ImageHandle;
use crate::engine::game_loop::{Countdown, FrameClock, FrameTiming};
use crate::engine::input::{Action, GlobalAction, Intent, Side};
use crate::engine::renderer::{Color, DrawingSink, TextStyle};

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Running,
    Ended,
}

/// How a finished match was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(Side),
    Tie,
}

impl MatchOutcome {
    /// Higher health wins; equal health is a tie
    pub fn from_health(player: i32, enemy: i32) -> Self {
        match player.cmp(&enemy) {
            std::cmp::Ordering::Greater => Self::Winner(Side::Player),
            std::cmp::Ordering::Less => Self::Winner(Side::Enemy),
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    pub fn banner_text(&self) -> String {
        match self {
            Self::Winner(side) => format!("{} Wins", side.label()),
            Self::Tie => "Tie".to_string(),
        }
    }
}

/// A single round between the player and the enemy
///
/// Each display frame: clear, update both combatants, resolve hits in both
/// directions, pick animations, then draw the world and the HUD. The match
/// ends when the countdown runs out or either combatant reaches zero health.
pub struct Match {
    world: WorldConfig,
    player: Combatant,
    enemy: Combatant,
    scenery: Scenery,
    clock: FrameClock,
    countdown: Countdown,
    state: MatchState,
    outcome: Option<MatchOutcome>,
    show_hitboxes: bool,
}

impl Match {
    /// Build the standard match, requesting sheets through `load_image`
    pub fn new(
        world: WorldConfig,
        mut load_image: impl FnMut(&str) -> ImageHandle,
    ) -> Result<Self, ConfigError> {
        world.validate()?;

        let player = Combatant::new(&Archetype::player(), &world, &mut load_image)?;
        let enemy = Combatant::new(&Archetype::enemy(), &world, &mut load_image)?;
        let scenery = Scenery::standard(&mut load_image)?;

        info!(
            "Match started: {}s on a {}x{} arena",
            world.match_length.as_secs(),
            world.width,
            world.height
        );

        Ok(Self {
            clock: FrameClock::new(world.target_frame_time, world.max_frame_scale),
            countdown: Countdown::new(world.match_length, world.countdown_step),
            show_hitboxes: world.show_hitboxes,
            state: MatchState::Running,
            outcome: None,
            player,
            enemy,
            scenery,
            world,
        })
    }

    /// Apply an intent between frames; ignored once the match has ended
    pub fn apply_intent(&mut self, intent: Intent) {
        if self.state == MatchState::Ended {
            return;
        }
        trace!("Applying {:?}", intent);

        let combatant = self.combatant_mut(intent.who);
        match intent.action {
            Action::MoveLeft => combatant.apply_horizontal_intent(-1),
            Action::MoveRight => combatant.apply_horizontal_intent(1),
            Action::StopMove => combatant.apply_horizontal_intent(0),
            Action::Jump => {
                combatant.jump();
            }
            Action::FastFall => combatant.fast_fall(),
            Action::StopFastFall => combatant.stop_fast_fall(),
            Action::Attack => {
                combatant.attack();
            }
        }
    }

    pub fn apply_global(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::Pause => self.toggle_pause(),
            GlobalAction::ToggleHitboxes => self.toggle_hitboxes(),
        }
    }

    /// Pause or resume simulation and countdown
    pub fn toggle_pause(&mut self) {
        if self.state == MatchState::Running {
            self.clock.toggle_pause();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn toggle_hitboxes(&mut self) {
        self.show_hitboxes = !self.show_hitboxes;
        info!(
            "Hitbox overlay {}",
            if self.show_hitboxes { "on" } else { "off" }
        );
    }

    /// Run one display frame at wall-clock time `now` and draw it
    pub fn on_frame(&mut self, now: Instant, sink: &mut dyn DrawingSink) {
        let timing = self.clock.begin_frame(now);
        if self.state() == MatchState::Running && !self.is_paused() {
            self.update(timing);
        }
        self.render(sink);
    }

    fn update(&mut self, timing: FrameTiming) {
        let bounds = self.world.bounds();

        self.scenery.tick();
        self.player.tick(&bounds);
        self.enemy.tick(&bounds);

        resolve_exchange(
            &mut self.player,
            &mut self.enemy,
            self.world.base_damage,
            timing.scale,
        );

        self.player.select_animation();
        self.enemy.select_animation();

        self.countdown.advance(timing.elapsed);
        if self.countdown.is_expired()
            || self.player.is_knocked_out()
            || self.enemy.is_knocked_out()
        {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let outcome = MatchOutcome::from_health(self.player.health(), self.enemy.health());
        self.state = MatchState::Ended;
        self.outcome = Some(outcome);
        info!(
            "Match over after {} frames: {} (player {}, enemy {}, {:.1}s left)",
            self.clock.frame_count(),
            outcome.banner_text(),
            self.health(Side::Player),
            self.health(Side::Enemy),
            self.seconds_remaining()
        );
    }

    /// Draw the world and HUD without advancing anything
    pub fn render(&self, sink: &mut dyn DrawingSink) {
        sink.clear(Color::BLACK);

        self.scenery.render(sink);
        self.player.render(sink, self.show_hitboxes());
        self.enemy.render(sink, self.show_hitboxes());

        hud::draw_health_bar(
            sink,
            self.health(Side::Player),
            self.player.max_health(),
            hud::HEALTH_BAR_MARGIN,
            false,
        );
        hud::draw_health_bar(
            sink,
            self.health(Side::Enemy),
            self.enemy.max_health(),
            self.world.width - hud::HEALTH_BAR_WIDTH - hud::HEALTH_BAR_MARGIN,
            true,
        );
        hud::draw_timer(sink, self.countdown.display_seconds(), self.world.width);

        if let Some(outcome) = self.outcome() {
            hud::draw_banner(
                sink,
                &outcome.banner_text(),
                self.world.width,
                self.world.height,
            );
        } else if self.is_paused() {
            let style = TextStyle::new(32.0);
            let width = sink.measure_text_width("Paused", style);
            sink.draw_text(
                "Paused",
                self.world.width / 2.0 - width / 2.0,
                self.world.height / 2.0,
                style,
                Color::WHITE,
            );
        }
    }

    pub fn health(&self, who: Side) -> i32 {
        self.combatant(who).health()
    }

    pub fn seconds_remaining(&self) -> f32 {
        self.countdown.seconds_remaining()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Set once the match has ended
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn show_hitboxes(&self) -> bool {
        self.show_hitboxes
    }

    pub fn combatant(&self, who: Side) -> &Combatant {
        match who {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn combatant_mut(&mut self, who: Side) -> &mut Combatant {
        match who {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}
