//! World clock face
//!
//! Shows the time in a selectable zone under a short user-chosen label,
//! and doubles as the editor for that label and zone.
//!
//! # Controls
//!
//! Display mode:
//! - Alarm long press: enter settings
//! - Anything else not time-related goes to the host's default handling
//!
//! Settings mode:
//! - Light: next page; past the last page, save and return to the time
//! - Alarm: change the field on this page
//! - Mode: save and move to the next face
//! - Timeout: save and return to the first face
//!
//! Pages are label character 0, label character 1, label character 2
//! (custom LCD only) and the zone.

use meridian_display::{LcdType, SegmentDisplay};
use meridian_hal::{DateTime, Event, EventKind, FileStore, Movement, ZoneResolver};

use super::{FaceContext, WatchFace};
use crate::config::FaceConfig;
use crate::cycler;
use crate::registry::{ClockIndex, ClockIndexAllocator};
use crate::render::{render_settings, render_time, RenderTier};
use crate::settings::{PersistOutcome, SettingsSlot, WorldClockSettings};
use crate::state::{EditField, FaceMode};

/// World clock face state
#[derive(Debug, Clone)]
pub struct WorldClockFace {
    clock_index: ClockIndex,
    slot: SettingsSlot,
    settings: WorldClockSettings,
    mode: FaceMode,
    /// Last time drawn, or `DateTime::SENTINEL` to force a full redraw
    previous_date_time: DateTime,
    /// UTC offset of the selected zone, in seconds
    current_offset: i32,
    config: FaceConfig,
}

impl WorldClockFace {
    /// Create a face instance
    ///
    /// Takes the next clock index from `allocator` and loads that
    /// instance's settings, falling back to a blank label in UTC.
    pub fn setup<F, Z>(
        allocator: &mut ClockIndexAllocator,
        files: &mut F,
        zones: &Z,
        config: FaceConfig,
    ) -> Self
    where
        F: FileStore,
        Z: ZoneResolver,
    {
        let clock_index = allocator.allocate();
        let slot = SettingsSlot::new(clock_index);
        let settings = slot.load(files, zones);

        #[cfg(feature = "defmt")]
        defmt::info!("World clock {} set up: {}", clock_index, settings);

        Self {
            clock_index,
            slot,
            settings,
            mode: FaceMode::Display,
            previous_date_time: DateTime::SENTINEL,
            current_offset: 0,
            config,
        }
    }

    pub fn clock_index(&self) -> ClockIndex {
        self.clock_index
    }

    pub fn settings(&self) -> &WorldClockSettings {
        &self.settings
    }

    pub fn mode(&self) -> FaceMode {
        self.mode
    }

    /// Raw screen number: 0 in display mode, else the settings page
    pub fn current_screen(&self) -> u8 {
        self.mode.screen()
    }

    /// Cached UTC offset of the selected zone, in seconds
    pub fn current_offset(&self) -> i32 {
        self.current_offset
    }

    pub fn previous_date_time(&self) -> DateTime {
        self.previous_date_time
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    fn update_timezone_offset<Z: ZoneResolver>(&mut self, zones: &Z) {
        self.current_offset = zones.offset_for_zone(self.settings.timezone_index);
    }

    fn persist<F: FileStore>(&self, files: &mut F) -> PersistOutcome {
        self.slot.persist_if_changed(files, &self.settings)
    }

    fn edit<Z: ZoneResolver>(&mut self, field: EditField, lcd: LcdType, zones: &Z) {
        match field {
            EditField::LabelChar(position) => {
                let character = self.settings.label_char_mut(position);
                *character = cycler::advance(*character, position, lcd);
            }
            EditField::Timezone => {
                let next = self.settings.timezone_index.saturating_add(1);
                self.settings.timezone_index = if next >= zones.zone_count() { 0 } else { next };
            }
        }
    }

    fn handle_display_mode<D, F, M, Z>(
        &mut self,
        event: Event,
        ctx: &mut FaceContext<'_, D, F, M, Z>,
    ) -> bool
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver,
    {
        match event.kind {
            EventKind::Activate | EventKind::Tick | EventKind::LowEnergyUpdate => {
                if event.kind == EventKind::Activate {
                    ctx.display.set_colon();
                    self.previous_date_time = DateTime::SENTINEL;
                }

                let now = ctx.movement.date_time_in_zone(self.settings.timezone_index);
                let previous = core::mem::replace(&mut self.previous_date_time, now);
                let tier = render_time(
                    &mut *ctx.display,
                    &self.settings,
                    now,
                    previous,
                    event.is_low_energy(),
                    &self.config,
                );

                if tier == RenderTier::MinutesSeconds
                    && self.config.is_offset_refresh_minute(now.minute())
                {
                    self.update_timezone_offset(ctx.zones);
                }
                true
            }
            EventKind::AlarmLongPress => {
                ctx.movement
                    .request_tick_frequency(self.config.settings_tick_hz);
                self.mode = self.mode.transition(event.kind, ctx.display.lcd_type());

                #[cfg(feature = "defmt")]
                defmt::debug!("World clock {}: entering settings", self.clock_index);
                true
            }
            _ => ctx.movement.default_loop_handler(event),
        }
    }

    fn handle_settings_mode<D, F, M, Z>(
        &mut self,
        event: Event,
        ctx: &mut FaceContext<'_, D, F, M, Z>,
    ) -> bool
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver,
    {
        let lcd = ctx.display.lcd_type();

        match event.kind {
            EventKind::ModeButtonUp => {
                self.persist(&mut *ctx.files);
                ctx.movement.move_to_next_face();
                return false;
            }
            EventKind::LightButtonDown => {
                self.mode = self.mode.transition(event.kind, lcd);
                if self.mode == FaceMode::Display {
                    ctx.movement
                        .request_tick_frequency(self.config.display_tick_hz);
                    self.update_timezone_offset(ctx.zones);
                    self.persist(&mut *ctx.files);

                    #[cfg(feature = "defmt")]
                    defmt::debug!("World clock {}: leaving settings", self.clock_index);

                    // Draw the time right away rather than one more settings frame
                    return self.handle_display_mode(event.with_kind(EventKind::Activate), ctx);
                }
            }
            EventKind::AlarmButtonDown => {
                if let Some(field) = self.mode.edit_field(lcd) {
                    self.edit(field, lcd, ctx.zones);
                }
            }
            EventKind::Timeout => {
                self.persist(&mut *ctx.files);
                ctx.movement.move_to_face(self.config.timeout_face_index);
            }
            _ => {}
        }

        let zones = ctx.zones;
        let zone_name = zones.zone_name(self.settings.timezone_index);
        render_settings(
            &mut *ctx.display,
            &self.settings,
            zone_name,
            self.mode.edit_field(lcd),
            event.is_blink_phase(),
        );
        true
    }
}

impl WatchFace for WorldClockFace {
    fn activate<D, F, M, Z>(&mut self, ctx: &mut FaceContext<'_, D, F, M, Z>)
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver,
    {
        self.mode = FaceMode::Display;
        self.update_timezone_offset(ctx.zones);

        if ctx.display.sleep_animation_is_running() {
            ctx.display.stop_sleep_animation();
            ctx.display.stop_blink();
        }
    }

    fn handle_event<D, F, M, Z>(&mut self, event: Event, ctx: &mut FaceContext<'_, D, F, M, Z>) -> bool
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver,
    {
        match self.mode {
            FaceMode::Display => self.handle_display_mode(event, ctx),
            FaceMode::Settings(_) => self.handle_settings_mode(event, ctx),
        }
    }

    fn resign<D, F, M, Z>(&mut self, _ctx: &mut FaceContext<'_, D, F, M, Z>)
    where
        D: SegmentDisplay,
        F: FileStore,
        M: Movement,
        Z: ZoneResolver,
    {
    }
}
