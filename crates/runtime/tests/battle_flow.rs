use std::sync::Arc;
use std::thread;

use battle_core::{
    AccountName, BattleOutcome, BattleResult, Combatant, Participant, Record,
};
use battle_runtime::{AccountService, Arena, FileAccountRepository, RuntimeError};

fn file_arena(dir: &tempfile::TempDir) -> Arena<FileAccountRepository> {
    let repository = FileAccountRepository::new(dir.path().join("users.json")).unwrap();
    Arena::builder(repository).seed(42).build().unwrap()
}

/// Charmander (red) against Geodude (brock): brock wins in two rounds and both
/// records are persisted to disk.
#[test]
fn account_battle_is_recorded_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let arena = file_arena(&dir);
    let red = arena.accounts().register("red", "pw", "pw").unwrap();
    let brock = arena.accounts().register("brock", "pw", "pw").unwrap();
    let charmander = arena.catalog().find("Charmander").unwrap().clone();
    let geodude = arena.catalog().find("Geodude").unwrap().clone();

    let report = arena
        .battle(
            Combatant::new(Participant::Registered(red.clone()), charmander),
            Combatant::new(Participant::Registered(brock.clone()), geodude),
        )
        .unwrap();

    assert_eq!(
        report.outcome.result,
        BattleResult::Victory {
            winner: Participant::Registered(brock.clone()),
            loser: Participant::Registered(red.clone()),
        }
    );
    assert_eq!(report.outcome.rounds, 2);
    assert_eq!(report.outcome.strike_count(), 4);
    assert_eq!(report.first.current_health, 39);

    // Re-open from disk to prove the write happened.
    let reopened = file_arena(&dir);
    assert_eq!(reopened.accounts().record(&brock).unwrap(), Record::new(1, 0));
    assert_eq!(reopened.accounts().record(&red).unwrap(), Record::new(0, 1));
}

#[test]
fn computer_battles_only_touch_the_player() {
    let dir = tempfile::tempdir().unwrap();
    let mut arena = file_arena(&dir);
    let ash = arena.accounts().register("ash", "pw", "pw").unwrap();
    let snorlax = arena.catalog().find("Snorlax").unwrap().clone();

    let mut expected = Record::default();
    for _ in 0..5 {
        let report = arena.battle_computer(&ash, snorlax.clone()).unwrap();
        assert_eq!(report.second.participant, Participant::Computer);
        match report.outcome.winner() {
            Some(Participant::Registered(_)) => expected.wins += 1,
            Some(Participant::Computer) => expected.losses += 1,
            None => unreachable!("full-health battles never draw"),
        }
    }

    assert_eq!(arena.accounts().record(&ash).unwrap(), expected);
    assert_eq!(arena.accounts().opponents(&ash).unwrap().len(), 0);
}

#[test]
fn unregistered_participant_is_fatal_and_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let arena = file_arena(&dir);
    let ash = arena.accounts().register("ash", "pw", "pw").unwrap();
    let pikachu = arena.catalog().find("Pikachu").unwrap().clone();

    let err = arena
        .battle(
            Combatant::new(Participant::Registered(ash.clone()), pikachu.clone()),
            Combatant::new(Participant::registered("ghost"), pikachu),
        )
        .unwrap_err();

    assert!(matches!(err, RuntimeError::Account(_)));
    assert_eq!(arena.accounts().record(&ash).unwrap(), Record::default());
    assert!(arena.accounts().record(&AccountName::new("ghost")).is_err());
}

/// Concurrent writers on one service must not lose each other's updates.
#[test]
fn concurrent_outcomes_are_all_recorded() {
    const THREADS: u32 = 8;
    const BATTLES_PER_THREAD: u32 = 25;

    let dir = tempfile::tempdir().unwrap();
    let repository = FileAccountRepository::new(dir.path().join("users.json")).unwrap();
    let accounts = Arc::new(AccountService::new(repository));
    let ash = accounts.register("ash", "pw", "pw").unwrap();
    let outcome = BattleOutcome {
        result: BattleResult::Victory {
            winner: Participant::Registered(ash.clone()),
            loser: Participant::Computer,
        },
        rounds: 1,
        events: Vec::new(),
    };

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let accounts = Arc::clone(&accounts);
            let outcome = outcome.clone();
            thread::spawn(move || {
                for _ in 0..BATTLES_PER_THREAD {
                    accounts.record_outcome(&outcome).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        accounts.record(&ash).unwrap(),
        Record::new(THREADS * BATTLES_PER_THREAD, 0)
    );
}
