//! Vitals Model
//!
//! The player's five coupled survival gauges (health, stamina, hunger,
//! thirst, infection) with their regeneration, decay and damage rules.
//!
//! Every committed mutation queues a [`VitalsEvent`] in an outbox that the
//! owner drains once per tick. Health reaching zero queues exactly one
//! [`VitalsEvent::Died`]; after that, damage and healing are ignored.

use bevy_ecs::prelude::*;
use survival_events::{Gauge, VitalsEvent};

use crate::capabilities::Damageable;
use crate::config::VitalsConfig;

/// Survival state of one player.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    config: VitalsConfig,
    health: f32,
    stamina: f32,
    hunger: f32,
    thirst: f32,
    infection: f32,
    /// Seconds since the last `apply_damage`
    since_damage: f32,
    /// Seconds since the last successful `use_stamina`
    since_stamina_use: f32,
    dead: bool,
    outbox: Vec<VitalsEvent>,
}

impl Vitals {
    /// Creates vitals at full health, stamina, hunger and thirst with no
    /// infection, and queues the initial value of every gauge.
    pub fn new(config: VitalsConfig) -> Self {
        let mut vitals = Self {
            health: config.max_health,
            stamina: config.max_stamina,
            hunger: config.max_hunger,
            thirst: config.max_thirst,
            infection: 0.0,
            config,
            since_damage: 0.0,
            since_stamina_use: 0.0,
            dead: false,
            outbox: Vec::new(),
        };
        for gauge in Gauge::ALL {
            vitals.notify(gauge);
        }
        vitals
    }

    /// Overrides a starting level, clamped to the gauge's bounds.
    ///
    /// Starting with zero health yields vitals that are already dead and
    /// never publish a death notification.
    pub fn with_level(mut self, gauge: Gauge, value: f32) -> Self {
        let max = self.config.max(gauge);
        *self.level_mut(gauge) = value.clamp(0.0, max);
        self.dead = self.health <= 0.0;
        self.notify(gauge);
        self
    }

    pub fn config(&self) -> &VitalsConfig {
        &self.config
    }

    /// Current value of a gauge.
    pub fn level(&self, gauge: Gauge) -> f32 {
        match gauge {
            Gauge::Health => self.health,
            Gauge::Stamina => self.stamina,
            Gauge::Hunger => self.hunger,
            Gauge::Thirst => self.thirst,
            Gauge::Infection => self.infection,
        }
    }

    pub fn max(&self, gauge: Gauge) -> f32 {
        self.config.max(gauge)
    }

    /// Current value as a fraction of the gauge's maximum.
    pub fn fraction(&self, gauge: Gauge) -> f32 {
        self.level(gauge) / self.max(gauge)
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn time_since_damage(&self) -> f32 {
        self.since_damage
    }

    pub fn time_since_stamina_use(&self) -> f32 {
        self.since_stamina_use
    }

    /// Notifications queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[VitalsEvent] {
        &self.outbox
    }

    /// Takes every queued notification.
    pub fn drain_events(&mut self) -> Vec<VitalsEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Lowers health by `amount`. Ignored once health is at zero.
    pub fn apply_damage(&mut self, amount: f32) {
        if self.health <= 0.0 {
            return;
        }

        self.health = (self.health - amount.max(0.0)).max(0.0);
        self.since_damage = 0.0;
        self.notify(Gauge::Health);

        if self.health <= 0.0 && !self.dead {
            self.dead = true;
            self.outbox.push(VitalsEvent::Died);
            tracing::info!("Player died");
        }
    }

    /// Raises health by `amount`, up to the maximum. Ignored at full health
    /// and after death.
    pub fn heal(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        self.raise(Gauge::Health, amount);
    }

    /// Spends stamina. Returns false without changing anything when less
    /// than `amount` is available.
    pub fn use_stamina(&mut self, amount: f32) -> bool {
        let amount = amount.max(0.0);
        if self.stamina < amount {
            return false;
        }

        self.stamina -= amount;
        self.since_stamina_use = 0.0;
        self.notify(Gauge::Stamina);
        true
    }

    pub fn restore_stamina(&mut self, amount: f32) {
        self.raise(Gauge::Stamina, amount);
    }

    pub fn consume_food(&mut self, amount: f32) {
        self.raise(Gauge::Hunger, amount);
    }

    pub fn consume_water(&mut self, amount: f32) {
        self.raise(Gauge::Thirst, amount);
    }

    pub fn add_infection(&mut self, amount: f32) {
        self.raise(Gauge::Infection, amount);
    }

    /// Runs one tick of `dt` seconds: regeneration, then hunger and thirst
    /// decay, then infection damage. Each step sees the previous step's
    /// result; nothing is netted across steps.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.since_damage += dt;
        self.since_stamina_use += dt;

        self.regenerate(dt);

        let hunger_decay = self.config.hunger_decay_rate * dt;
        let hunger_damage = self.config.hunger_damage_rate * dt;
        self.deplete(Gauge::Hunger, hunger_decay, hunger_damage);

        let thirst_decay = self.config.thirst_decay_rate * dt;
        let thirst_damage = self.config.thirst_damage_rate * dt;
        self.deplete(Gauge::Thirst, thirst_decay, thirst_damage);

        if self.infection > 0.0 {
            self.apply_damage(self.config.infection_damage_rate * dt);
        }
    }

    fn regenerate(&mut self, dt: f32) {
        if self.config.health_regen_rate > 0.0
            && self.since_damage >= self.config.health_regen_delay
        {
            self.heal(self.config.health_regen_rate * dt);
        }

        if self.since_stamina_use >= self.config.stamina_regen_delay {
            self.restore_stamina(self.config.stamina_regen_rate * dt);
        }
    }

    /// Decays a gauge that is still above zero; the tick it bottoms out
    /// also deals `damage`.
    fn deplete(&mut self, gauge: Gauge, decay: f32, damage: f32) {
        let level = self.level_mut(gauge);
        if *level <= 0.0 {
            return;
        }

        *level = (*level - decay).max(0.0);
        let emptied = *level <= 0.0;
        self.notify(gauge);

        if emptied {
            self.apply_damage(damage);
        }
    }

    fn raise(&mut self, gauge: Gauge, amount: f32) {
        let max = self.config.max(gauge);
        let level = self.level_mut(gauge);
        if *level >= max {
            return;
        }

        *level = (*level + amount.max(0.0)).min(max);
        self.notify(gauge);
    }

    fn level_mut(&mut self, gauge: Gauge) -> &mut f32 {
        match gauge {
            Gauge::Health => &mut self.health,
            Gauge::Stamina => &mut self.stamina,
            Gauge::Hunger => &mut self.hunger,
            Gauge::Thirst => &mut self.thirst,
            Gauge::Infection => &mut self.infection,
        }
    }

    fn notify(&mut self, gauge: Gauge) {
        let value = self.level(gauge);
        self.outbox.push(VitalsEvent::GaugeChanged { gauge, value });
    }
}

impl Damageable for Vitals {
    fn take_damage(&mut self, amount: f32) {
        self.apply_damage(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn fresh() -> Vitals {
        let mut vitals = Vitals::new(VitalsConfig::default());
        vitals.drain_events();
        vitals
    }

    fn deaths(events: &[VitalsEvent]) -> usize {
        events.iter().filter(|e| **e == VitalsEvent::Died).count()
    }

    fn changes_of(events: &[VitalsEvent], gauge: Gauge) -> Vec<f32> {
        events
            .iter()
            .filter_map(|e| match e {
                VitalsEvent::GaugeChanged { gauge: g, value } if *g == gauge => Some(*value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_publishes_initial_levels() {
        let mut vitals = Vitals::new(VitalsConfig::default());
        let events = vitals.drain_events();

        assert_eq!(events.len(), 5);
        assert_eq!(changes_of(&events, Gauge::Health), vec![100.0]);
        assert_eq!(changes_of(&events, Gauge::Infection), vec![0.0]);
        assert!(vitals.pending_events().is_empty());
    }

    #[test]
    fn test_with_level_clamps() {
        let vitals = fresh().with_level(Gauge::Hunger, 250.0).with_level(Gauge::Thirst, -3.0);
        assert_eq!(vitals.level(Gauge::Hunger), 100.0);
        assert_eq!(vitals.level(Gauge::Thirst), 0.0);
    }

    #[test]
    fn test_fraction() {
        let vitals = fresh().with_level(Gauge::Stamina, 25.0);
        assert_relative_eq!(vitals.fraction(Gauge::Stamina), 0.25);
        assert_relative_eq!(vitals.fraction(Gauge::Health), 1.0);
    }

    #[test]
    fn test_apply_damage_clamps_and_notifies() {
        let mut vitals = fresh();
        vitals.advance(0.5);
        vitals.drain_events();

        vitals.apply_damage(30.0);
        assert_eq!(vitals.level(Gauge::Health), 70.0);
        assert_eq!(vitals.time_since_damage(), 0.0);
        assert_eq!(changes_of(&vitals.drain_events(), Gauge::Health), vec![70.0]);

        vitals.apply_damage(500.0);
        assert_eq!(vitals.level(Gauge::Health), 0.0);
        assert!(vitals.is_dead());
    }

    #[test]
    fn test_death_fires_exactly_once() {
        let mut vitals = fresh();

        vitals.apply_damage(100.0);
        for _ in 0..10 {
            vitals.apply_damage(5.0);
        }

        let events = vitals.drain_events();
        assert_eq!(deaths(&events), 1);
        // Post-death damage is ignored entirely, including notifications
        assert_eq!(changes_of(&events, Gauge::Health), vec![0.0]);
    }

    #[test]
    fn test_death_event_follows_health_change() {
        let mut vitals = fresh();
        vitals.apply_damage(100.0);
        let events = vitals.drain_events();
        assert_eq!(
            events,
            vec![
                VitalsEvent::GaugeChanged { gauge: Gauge::Health, value: 0.0 },
                VitalsEvent::Died,
            ]
        );
    }

    #[test]
    fn test_heal_after_death_is_ignored() {
        let mut vitals = fresh();
        vitals.apply_damage(100.0);
        vitals.heal(50.0);
        vitals.apply_damage(10.0);

        assert_eq!(vitals.level(Gauge::Health), 0.0);
        assert_eq!(deaths(&vitals.drain_events()), 1);
    }

    #[test]
    fn test_heal_at_full_is_noop() {
        let mut vitals = fresh();
        vitals.heal(10.0);
        assert!(vitals.pending_events().is_empty());

        vitals.apply_damage(5.0);
        vitals.heal(20.0);
        assert_eq!(vitals.level(Gauge::Health), 100.0);
    }

    #[test]
    fn test_use_stamina() {
        let mut vitals = fresh().with_level(Gauge::Stamina, 12.0);
        vitals.drain_events();

        assert!(!vitals.use_stamina(12.5));
        assert_eq!(vitals.level(Gauge::Stamina), 12.0);
        assert!(vitals.pending_events().is_empty());

        assert!(vitals.use_stamina(12.0));
        assert_eq!(vitals.level(Gauge::Stamina), 0.0);
        assert_eq!(vitals.time_since_stamina_use(), 0.0);
        assert_eq!(changes_of(&vitals.drain_events(), Gauge::Stamina), vec![0.0]);
    }

    #[test]
    fn test_raise_operations_are_bounded() {
        let mut vitals = fresh()
            .with_level(Gauge::Hunger, 90.0)
            .with_level(Gauge::Thirst, 10.0);
        vitals.drain_events();

        vitals.consume_food(25.0);
        vitals.consume_water(25.0);
        vitals.add_infection(130.0);
        vitals.restore_stamina(5.0);

        assert_eq!(vitals.level(Gauge::Hunger), 100.0);
        assert_eq!(vitals.level(Gauge::Thirst), 35.0);
        assert_eq!(vitals.level(Gauge::Infection), 100.0);
        assert_eq!(vitals.level(Gauge::Stamina), 100.0);

        let events = vitals.drain_events();
        assert_eq!(changes_of(&events, Gauge::Stamina), Vec::<f32>::new());

        // At their bounds these are all no-ops
        vitals.consume_food(1.0);
        vitals.add_infection(1.0);
        assert!(vitals.pending_events().is_empty());
    }

    #[test]
    fn test_starvation_damages_on_the_emptying_tick() {
        let config = VitalsConfig {
            max_health: 100.0,
            hunger_decay_rate: 1.0,
            hunger_damage_rate: 1.0,
            ..VitalsConfig::default()
        };
        let mut vitals = Vitals::new(config).with_level(Gauge::Hunger, 0.5);
        vitals.drain_events();

        vitals.advance(1.0);

        assert_eq!(vitals.level(Gauge::Hunger), 0.0);
        assert_eq!(vitals.level(Gauge::Health), 99.0);
        let events = vitals.drain_events();
        assert_eq!(changes_of(&events, Gauge::Hunger), vec![0.0]);
        assert_eq!(changes_of(&events, Gauge::Health), vec![99.0]);
    }

    #[test]
    fn test_empty_gauge_stays_silent() {
        let mut vitals = fresh().with_level(Gauge::Thirst, 0.0);
        vitals.drain_events();

        vitals.advance(1.0);

        let events = vitals.drain_events();
        assert!(changes_of(&events, Gauge::Thirst).is_empty());
        assert_eq!(vitals.level(Gauge::Health), 100.0);
    }

    #[test]
    fn test_decay_notifies_every_tick() {
        let mut vitals = fresh();
        for _ in 0..4 {
            vitals.advance(0.01);
        }
        let events = vitals.drain_events();
        assert_eq!(changes_of(&events, Gauge::Hunger).len(), 4);
        assert_eq!(changes_of(&events, Gauge::Thirst).len(), 4);
    }

    #[test]
    fn test_infection_damage_is_steady() {
        let config = VitalsConfig {
            infection_damage_rate: 2.0,
            ..VitalsConfig::default()
        };
        let mut vitals = Vitals::new(config).with_level(Gauge::Infection, 10.0);

        for _ in 0..5 {
            vitals.advance(1.0);
        }

        assert_eq!(vitals.level(Gauge::Health), 90.0);
        assert_eq!(vitals.level(Gauge::Infection), 10.0);
    }

    #[test]
    fn test_regeneration_runs_before_damage() {
        let config = VitalsConfig {
            health_regen_rate: 10.0,
            health_regen_delay: 0.0,
            hunger_decay_rate: 1.0,
            hunger_damage_rate: 4.0,
            ..VitalsConfig::default()
        };

        // Below max: heal then starve
        let mut wounded = Vitals::new(config.clone())
            .with_level(Gauge::Health, 50.0)
            .with_level(Gauge::Hunger, 0.5);
        wounded.advance(1.0);
        assert_eq!(wounded.level(Gauge::Health), 56.0);

        // At max: heal is a no-op, the damage still lands in full
        let mut healthy = Vitals::new(config).with_level(Gauge::Hunger, 0.5);
        healthy.advance(1.0);
        assert_eq!(healthy.level(Gauge::Health), 96.0);
    }

    #[test]
    fn test_health_regen_waits_for_delay() {
        let config = VitalsConfig {
            health_regen_rate: 5.0,
            health_regen_delay: 2.0,
            ..VitalsConfig::default()
        };
        let mut vitals = Vitals::new(config);
        vitals.apply_damage(20.0);

        vitals.advance(1.0);
        assert_eq!(vitals.level(Gauge::Health), 80.0);

        vitals.advance(1.0);
        assert_eq!(vitals.level(Gauge::Health), 85.0);
    }

    #[test]
    fn test_stamina_regen_waits_for_delay() {
        let mut vitals = fresh();
        assert!(vitals.use_stamina(50.0));

        vitals.advance(0.5);
        assert_eq!(vitals.level(Gauge::Stamina), 50.0);

        vitals.advance(0.5);
        assert_eq!(vitals.level(Gauge::Stamina), 55.0);
    }

    #[test]
    fn test_damageable_routes_to_apply_damage() {
        let mut vitals = fresh();
        let target: &mut dyn Damageable = &mut vitals;
        target.take_damage(15.0);
        assert_eq!(vitals.level(Gauge::Health), 85.0);
    }

    #[test]
    fn test_gauges_stay_in_bounds_under_random_operations() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut vitals = fresh();

        for _ in 0..5_000 {
            let amount: f32 = rng.gen_range(0.0..40.0);
            match rng.gen_range(0..8) {
                0 => vitals.apply_damage(amount),
                1 => vitals.heal(amount),
                2 => {
                    vitals.use_stamina(amount);
                }
                3 => vitals.restore_stamina(amount),
                4 => vitals.consume_food(amount),
                5 => vitals.consume_water(amount),
                6 => vitals.add_infection(amount * 0.1),
                _ => vitals.advance(rng.gen_range(0.0..2.0)),
            }

            for gauge in Gauge::ALL {
                let level = vitals.level(gauge);
                assert!(level >= 0.0 && level <= vitals.max(gauge), "{} out of bounds: {}", gauge, level);
            }
        }

        assert!(deaths(&vitals.drain_events()) <= 1);
    }
}
