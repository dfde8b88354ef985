//! High-level battle orchestrator.
//!
//! The arena wires the creature catalog, the battle engine, and the account
//! service together: it picks random opponent creatures, runs the pure engine,
//! and records each outcome exactly once.

use battle_content::CreatureCatalog;
use battle_core::{
    AccountName, BattleConfig, BattleEngine, BattleOutcome, Combatant, Creature, Participant,
    RecordUpdate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::accounts::AccountService;
use crate::api::{Result, RuntimeError};
use crate::repository::AccountRepository;

/// Everything a client needs to narrate one finished battle.
#[derive(Debug, Clone)]
pub struct BattleReport {
    /// First combatant at the start of the battle.
    pub first: Combatant,
    /// Second combatant at the start of the battle.
    pub second: Combatant,
    pub outcome: BattleOutcome,
    /// Accounts whose counters moved.
    pub update: RecordUpdate,
}

/// Battle orchestrator over an account repository.
pub struct Arena<R> {
    accounts: AccountService<R>,
    catalog: CreatureCatalog,
    engine: BattleEngine,
    rng: StdRng,
}

impl<R: AccountRepository> Arena<R> {
    /// Create a new arena builder
    pub fn builder(repository: R) -> ArenaBuilder<R> {
        ArenaBuilder::new(repository)
    }

    pub fn accounts(&self) -> &AccountService<R> {
        &self.accounts
    }

    pub fn catalog(&self) -> &CreatureCatalog {
        &self.catalog
    }

    /// Draw a uniformly random creature from the catalog.
    pub fn pick_opponent_creature(&mut self) -> Creature {
        let creatures = self.catalog.as_slice();
        creatures[self.rng.random_range(0..creatures.len())].clone()
    }

    /// Battle the computer, which fights with a random creature.
    pub fn battle_computer(
        &mut self,
        player: &AccountName,
        creature: Creature,
    ) -> Result<BattleReport> {
        let opponent_creature = self.pick_opponent_creature();
        self.battle(
            Combatant::new(Participant::Registered(player.clone()), creature),
            Combatant::new(Participant::Computer, opponent_creature),
        )
    }

    /// Battle another account, whose creature is chosen at random.
    pub fn battle_account(
        &mut self,
        player: &AccountName,
        creature: Creature,
        opponent: &AccountName,
    ) -> Result<BattleReport> {
        let opponent_creature = self.pick_opponent_creature();
        self.battle(
            Combatant::new(Participant::Registered(player.clone()), creature),
            Combatant::new(Participant::Registered(opponent.clone()), opponent_creature),
        )
    }

    /// Resolve a battle and record its outcome once.
    pub fn battle(&self, first: Combatant, second: Combatant) -> Result<BattleReport> {
        if let (Some(a), Some(b)) = (first.participant.account(), second.participant.account())
            && a == b
        {
            return Err(RuntimeError::SelfBattle(a.clone()));
        }

        tracing::info!(
            "Battle start: {}'s {} (HP {}) vs {}'s {} (HP {})",
            first.participant,
            first.creature.name,
            first.current_health,
            second.participant,
            second.creature.name,
            second.current_health
        );

        let outcome = self.engine.resolve(&first, &second);

        for event in &outcome.events {
            tracing::debug!(
                "Round {}: {}'s {} hits {}'s {} for {} (HP now {})",
                event.round,
                event.attacker,
                event.attacker_creature,
                event.defender,
                event.defender_creature,
                event.damage,
                event.defender_health
            );
        }

        match (outcome.winner(), outcome.loser()) {
            (Some(winner), Some(loser)) => tracing::info!(
                "Battle over after {} rounds: {} defeated {}",
                outcome.rounds,
                winner,
                loser
            ),
            _ => tracing::info!("Battle ended in a draw"),
        }

        let update = self.accounts.record_outcome(&outcome)?;

        Ok(BattleReport {
            first,
            second,
            outcome,
            update,
        })
    }
}

/// Builder for [`Arena`].
pub struct ArenaBuilder<R> {
    repository: R,
    catalog: CreatureCatalog,
    battle: BattleConfig,
    /// Fixed seed for opponent creature picks; `None` draws from the OS.
    seed: Option<u64>,
}

impl<R: AccountRepository> ArenaBuilder<R> {
    fn new(repository: R) -> Self {
        Self {
            repository,
            catalog: CreatureCatalog::builtin(),
            battle: BattleConfig::default(),
            seed: None,
        }
    }

    /// Replace the built-in catalog.
    pub fn catalog(mut self, catalog: CreatureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn battle_config(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Arena<R>> {
        let engine = BattleEngine::new(self.battle).map_err(RuntimeError::Config)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Arena {
            accounts: AccountService::new(self.repository),
            catalog: self.catalog,
            engine,
            rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use battle_core::Record;

    use super::*;
    use crate::repository::InMemoryAccountRepo;

    fn arena() -> Arena<InMemoryAccountRepo> {
        Arena::builder(InMemoryAccountRepo::new())
            .seed(7)
            .build()
            .unwrap()
    }

    #[test]
    fn seeded_picks_are_reproducible() {
        let mut first = arena();
        let mut second = arena();
        for _ in 0..20 {
            assert_eq!(first.pick_opponent_creature(), second.pick_opponent_creature());
        }
    }

    #[test]
    fn picks_come_from_catalog() {
        let mut arena = arena();
        for _ in 0..50 {
            let creature = arena.pick_opponent_creature();
            assert!(arena.catalog().find(&creature.name).is_some());
        }
    }

    #[test]
    fn self_battle_is_rejected() {
        let arena = arena();
        let ash = arena.accounts().register("ash", "p", "p").unwrap();
        let creature = arena.catalog().select(1).unwrap().clone();

        let err = arena
            .battle(
                Combatant::new(Participant::Registered(ash.clone()), creature.clone()),
                Combatant::new(Participant::Registered(ash.clone()), creature),
            )
            .unwrap_err();

        assert!(matches!(err, RuntimeError::SelfBattle(_)));
        assert_eq!(arena.accounts().record(&ash).unwrap(), Record::default());
    }

    #[test]
    fn zero_damage_floor_fails_to_build() {
        let result = Arena::builder(InMemoryAccountRepo::new())
            .battle_config(BattleConfig::with_minimum_damage(0))
            .build();
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }

    #[test]
    fn report_names_only_the_credited_account() {
        let mut arena = arena();
        let ash = arena.accounts().register("ash", "p", "p").unwrap();
        let snorlax = arena.catalog().find("Snorlax").unwrap().clone();

        let report = arena.battle_computer(&ash, snorlax).unwrap();

        let credited = [&report.update.win_credited, &report.update.loss_credited];
        assert_eq!(credited.iter().filter(|name| name.is_some()).count(), 1);
        assert!(credited.iter().flat_map(|name| name.as_ref()).all(|name| *name == ash));
    }
}
