use tracing::{debug, info, warn};

use super::{CombatState, FirstLivingOpponent, Participant, Roster, TargetingStrategy};
use crate::ai::{DecisionPolicy, EnemyAi};
use crate::config::BattleConfig;
use crate::event::GameEvent;

/// Drives one battle from preparation to the confirmed result.
///
/// Per `Fighting` tick the order is fixed: cooldowns and buffs, then enemy
/// policies in roster order, then the end check (defeat before victory).
#[derive(Debug)]
pub struct BattleManager {
    config: BattleConfig,
    state: CombatState,
    phase_timer: f32,
    roster: Roster,
    policies: Vec<Box<dyn DecisionPolicy>>,
    targeting: Box<dyn TargetingStrategy>,
    result_confirmed: bool,
    events: Vec<GameEvent>,
}

impl BattleManager {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            state: CombatState::Idle,
            phase_timer: 0.0,
            roster: Roster::default(),
            policies: Vec::new(),
            targeting: Box::new(FirstLivingOpponent),
            result_confirmed: false,
            events: Vec::new(),
        }
    }

    /// Replaces the strategy used to target player casts.
    #[must_use]
    pub fn with_targeting(mut self, targeting: Box<dyn TargetingStrategy>) -> Self {
        self.targeting = targeting;
        self
    }

    /// Installs the roster and enters `Preparing`.
    ///
    /// Every non-player participant gets an [`EnemyAi`]. A roster without
    /// players or without enemies is accepted but ends on the first
    /// fighting tick.
    pub fn initialize(&mut self, participants: Vec<Participant>) {
        let roster = Roster::new(participants);
        let policies = roster
            .iter()
            .enumerate()
            .filter(|(_, participant)| !participant.is_player)
            .map(|(index, _)| {
                Box::new(EnemyAi::seeded(index, &self.config.ai, self.config.seed))
                    as Box<dyn DecisionPolicy>
            })
            .collect();
        self.initialize_with_policies(roster, policies);
    }

    /// Like [`initialize`](Self::initialize) with caller-supplied policies.
    pub fn initialize_with_policies(
        &mut self,
        roster: Roster,
        policies: Vec<Box<dyn DecisionPolicy>>,
    ) {
        if roster.side_defeated(true) || roster.side_defeated(false) {
            warn!(participants = roster.len(), "battle starts with a side already defeated");
        }
        info!(
            participants = roster.len(),
            enemies = policies.len(),
            "battle initialized"
        );
        self.roster = roster;
        self.policies = policies;
        self.state = CombatState::Preparing;
        self.phase_timer = 0.0;
        self.result_confirmed = false;
    }

    /// Advances the battle by `dt` time units.
    pub fn update(&mut self, dt: f32) {
        if self.state == CombatState::Idle {
            return;
        }
        self.phase_timer += dt;

        match self.state {
            CombatState::Idle => {}
            CombatState::Preparing => {
                if self.phase_timer >= self.config.preparation_time {
                    self.start_fighting();
                }
            }
            CombatState::Fighting => {
                self.roster.tick(dt);
                self.run_policies(dt);
                self.check_end();
            }
            CombatState::Victory | CombatState::Defeat => {
                if !self.result_confirmed && self.phase_timer >= self.config.result_display_time
                {
                    self.result_confirmed = true;
                    info!(state = %self.state, "battle result confirmed");
                    self.events.push(GameEvent::BattleResultConfirmed {
                        victory: self.state == CombatState::Victory,
                    });
                }
            }
        }
    }

    /// Casts skill `skill` of player `caster` at the target chosen by the
    /// targeting strategy. Only accepted while fighting.
    pub fn cast_player_skill(&mut self, caster: usize, skill: usize) -> bool {
        if self.state != CombatState::Fighting {
            debug!(state = %self.state, "player cast outside of fighting");
            return false;
        }
        let Some(participant) = self.roster.get(caster) else {
            return false;
        };
        if !participant.is_player || !participant.is_alive() {
            debug!(caster = %participant.id, "caster cannot act");
            return false;
        }
        let Some(target) = self.targeting.select(&self.roster, caster) else {
            return false;
        };
        match self.roster.cast(caster, skill, target) {
            Some(event) => {
                self.events.push(event);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Time spent in the current phase.
    pub fn phase_timer(&self) -> f32 {
        self.phase_timer
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn policies(&self) -> &[Box<dyn DecisionPolicy>] {
        &self.policies
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn is_result_confirmed(&self) -> bool {
        self.result_confirmed
    }

    /// Applies `difficulty` to every enemy policy.
    pub fn set_difficulty(&mut self, difficulty: f32) {
        for policy in &mut self.policies {
            policy.set_difficulty(difficulty);
        }
    }

    /// Takes the events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn start_fighting(&mut self) {
        self.enter(CombatState::Fighting);
        self.events.push(GameEvent::BattleStarted);
    }

    fn run_policies(&mut self, dt: f32) {
        for policy in &mut self.policies {
            let Some(decision) = policy.update(dt, &self.roster) else {
                continue;
            };
            let Some(skill) = decision.skill else {
                continue;
            };
            if let Some(event) = self.roster.cast(policy.owner(), skill, decision.target) {
                self.events.push(event);
            }
        }
    }

    fn check_end(&mut self) {
        if self.roster.side_defeated(true) {
            self.finish(false);
        } else if self.roster.side_defeated(false) {
            self.finish(true);
        }
    }

    fn finish(&mut self, victory: bool) {
        self.enter(if victory {
            CombatState::Victory
        } else {
            CombatState::Defeat
        });
        self.events.push(GameEvent::BattleEnded { victory });
        if victory {
            let recipient = self
                .roster
                .living(true)
                .next()
                .and_then(|index| self.roster.get(index))
                .map(|player| player.id.clone());
            let reward = &self.config.reward;
            info!(
                recipient = ?recipient,
                experience = reward.experience,
                items = reward.items.len(),
                "battle reward granted"
            );
            self.events.push(GameEvent::BattleReward {
                recipient,
                experience: reward.experience,
                items: reward.items.clone(),
            });
        }
    }

    fn enter(&mut self, state: CombatState) {
        info!(from = %self.state, to = %state, "battle state changed");
        self.state = state;
        self.phase_timer = 0.0;
    }
}

impl Default for BattleManager {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{BasicAttack, CombatStats, Position};

    const FRAME: f32 = 0.1;

    fn participant(id: &str, hp: f32, attack: f32, defense: f32, is_player: bool) -> Participant {
        Participant::new(id, id, CombatStats::new(hp, 30.0, attack, defense, 5.0), is_player)
            .with_skill(Box::new(BasicAttack::default()))
    }

    fn seeded() -> BattleManager {
        BattleManager::new(BattleConfig::default().with_seed(7))
    }

    fn run(manager: &mut BattleManager, seconds: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let frames = (seconds / FRAME).round() as usize;
        for _ in 0..frames {
            manager.update(FRAME);
            events.extend(manager.drain_events());
        }
        events
    }

    #[test]
    fn idle_until_initialized() {
        let mut manager = seeded();
        manager.update(10.0);
        assert_eq!(manager.state(), CombatState::Idle);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn buffs_expire_during_fighting() {
        let mut manager = seeded();
        manager.initialize(vec![
            Participant::new("hero", "Hero", CombatStats::new(100.0, 30.0, 20.0, 10.0, 5.0), true),
            Participant::new("wolf", "Wolf", CombatStats::new(50.0, 30.0, 10.0, 5.0, 5.0), false),
        ]);
        let hero_stats = manager.roster().get(0).unwrap().stats;
        manager.roster_mut().get_mut(0).unwrap().buffs.apply("guard", 0.45, None);
        manager.roster_mut().get_mut(1).unwrap().buffs.apply("slow", 2.0, None);

        manager.update(3.0);
        assert_eq!(manager.state(), CombatState::Fighting);
        assert!(manager.roster().get(0).unwrap().buffs.contains("guard"));

        run(&mut manager, 0.5);
        let hero = manager.roster().get(0).unwrap();
        assert!(hero.buffs.is_empty());
        assert_eq!(hero.stats, hero_stats);
        let slow = manager.roster().get(1).unwrap().buffs.get("slow").unwrap();
        assert!((slow.remaining - 1.5).abs() < 1e-3);
        assert_eq!(manager.state(), CombatState::Fighting);
    }

    #[test]
    fn preparation_then_fighting() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 100.0, 20.0, 10.0, true),
            participant("wolf", 50.0, 10.0, 5.0, false),
        ]);
        assert_eq!(manager.state(), CombatState::Preparing);
        assert_eq!(manager.policies().len(), 1);

        manager.update(2.9);
        assert_eq!(manager.state(), CombatState::Preparing);
        manager.update(0.1);
        assert_eq!(manager.state(), CombatState::Fighting);
        assert_eq!(manager.phase_timer(), 0.0);
        assert_eq!(manager.drain_events(), vec![GameEvent::BattleStarted]);
    }

    #[test]
    fn player_hit_on_first_fighting_frame() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 100.0, 20.0, 10.0, true),
            participant("wolf", 50.0, 10.0, 5.0, false),
        ]);
        manager.update(3.0);
        manager.drain_events();

        assert!(manager.cast_player_skill(0, 0));
        assert_eq!(manager.roster().get(1).unwrap().stats.hp, 26.5);
        assert!(!manager.cast_player_skill(0, 0));
        assert!(!manager.cast_player_skill(1, 0));
    }

    #[test]
    fn player_cast_rejected_outside_fighting() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 100.0, 20.0, 10.0, true),
            participant("wolf", 50.0, 10.0, 5.0, false),
        ]);
        assert!(!manager.cast_player_skill(0, 0));
        assert_eq!(manager.roster().get(1).unwrap().stats.hp, 50.0);
    }

    #[test]
    fn dead_player_defeats_on_first_fighting_tick() {
        let mut manager = seeded();
        let mut fallen = participant("hero", 100.0, 20.0, 10.0, true);
        fallen.stats.hp = 0.0;
        manager.initialize(vec![fallen, participant("wolf", 50.0, 10.0, 5.0, false)]);

        for _ in 0..29 {
            manager.update(FRAME);
        }
        assert_eq!(manager.state(), CombatState::Preparing);
        manager.update(FRAME * 2.0);
        assert_eq!(manager.state(), CombatState::Fighting);
        manager.update(FRAME);
        assert_eq!(manager.state(), CombatState::Defeat);

        let events = manager.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::BattleStarted, GameEvent::BattleEnded { victory: false }]
        );
    }

    #[test]
    fn defeat_wins_when_both_sides_fall() {
        let mut manager = seeded();
        let mut hero = participant("hero", 100.0, 20.0, 10.0, true);
        hero.stats.hp = 0.0;
        let mut wolf = participant("wolf", 50.0, 10.0, 5.0, false);
        wolf.stats.hp = 0.0;
        manager.initialize(vec![hero, wolf]);
        manager.update(3.0);
        manager.update(FRAME);
        assert_eq!(manager.state(), CombatState::Defeat);
    }

    #[test]
    fn victory_rewards_once_and_confirms_once() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 500.0, 60.0, 10.0, true),
            participant("wolf", 50.0, 10.0, 5.0, false),
        ]);
        manager.update(3.0);

        let mut events = manager.drain_events();
        while !manager.state().is_finished() {
            manager.cast_player_skill(0, 0);
            manager.update(FRAME);
            events.extend(manager.drain_events());
        }
        assert_eq!(manager.state(), CombatState::Victory);
        events.extend(run(&mut manager, 20.0));

        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BattleEnded { victory: true }))
            .count();
        let rewards: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BattleReward { .. }))
            .collect();
        let confirmed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BattleResultConfirmed { victory: true }))
            .count();
        assert_eq!(ended, 1);
        assert_eq!(confirmed, 1);
        assert_eq!(
            rewards,
            vec![&GameEvent::BattleReward {
                recipient: Some("hero".into()),
                experience: 100,
                items: vec!["potion_health".into()],
            }]
        );
        assert!(manager.is_result_confirmed());
    }

    #[test]
    fn result_confirmed_after_display_window() {
        let mut manager = seeded();
        let mut wolf = participant("wolf", 50.0, 10.0, 5.0, false);
        wolf.stats.hp = 0.0;
        manager.initialize(vec![participant("hero", 100.0, 20.0, 10.0, true), wolf]);
        manager.update(3.0);
        manager.update(FRAME);
        assert_eq!(manager.state(), CombatState::Victory);
        manager.drain_events();

        manager.update(4.9);
        assert!(manager.drain_events().is_empty());
        manager.update(0.1);
        assert_eq!(
            manager.drain_events(),
            vec![GameEvent::BattleResultConfirmed { victory: true }]
        );
        manager.update(10.0);
        assert!(manager.drain_events().is_empty());
        assert_eq!(manager.state(), CombatState::Victory);
    }

    #[test]
    fn enemies_attack_until_defeat() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 30.0, 1.0, 0.0, true).with_position(Position::new(100.0, 200.0)),
            participant("wolf", 50.0, 10.0, 5.0, false),
            participant("tiger", 80.0, 15.0, 8.0, false),
        ]);
        let events = run(&mut manager, 30.0);

        assert_eq!(manager.state(), CombatState::Defeat);
        let casts = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SkillCast { .. }))
            .count();
        assert!(casts >= 2);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::BattleReward { .. })));
    }

    #[test]
    fn seeded_battles_replay_identically() {
        let roster = || {
            vec![
                participant("hero", 200.0, 5.0, 10.0, true),
                participant("wolf", 50.0, 10.0, 5.0, false),
                participant("tiger", 80.0, 15.0, 8.0, false),
            ]
        };
        let mut a = seeded();
        let mut b = seeded();
        a.initialize(roster());
        b.initialize(roster());
        assert_eq!(run(&mut a, 20.0), run(&mut b, 20.0));
    }

    #[test]
    fn difficulty_reaches_every_policy() {
        let mut manager = seeded();
        manager.initialize(vec![
            participant("hero", 100.0, 20.0, 10.0, true),
            participant("wolf", 50.0, 10.0, 5.0, false),
            participant("tiger", 80.0, 15.0, 8.0, false),
        ]);
        manager.set_difficulty(9.0);
        assert!(manager.policies().iter().all(|p| p.difficulty() == 3.0));
    }
}
