//! Property tests checking the engines against brute-force enumeration.

use proptest::prelude::*;
use u_roster::exact::{ExactConfig, ExactRunner, SearchStatus};
use u_roster::model::{Category, Constraints, Player, PlayerPool, Quotas};
use u_roster::sa::{SaConfig, SaRunner};
use u_roster::sink::CollectSink;
use u_roster::state::{Roster, SolutionState};

fn player_strategy() -> impl Strategy<Value = Player> {
    (0..Category::COUNT, 1u64..20, 0u64..30).prop_map(|(c, price, score)| {
        let category = Category::ALL[c];
        Player::new(format!("{}-{price}-{score}", category.code()), category, price, score)
    })
}

fn instance_strategy() -> impl Strategy<Value = (Vec<Player>, Constraints)> {
    (
        prop::collection::vec(player_strategy(), 0..12),
        0usize..3,
        0usize..3,
        0usize..2,
        0u64..60,
        1u64..20,
    )
        .prop_map(|(players, def, mid, att, budget, cap)| {
            (players, Constraints::new(Quotas::new(def, mid, att), budget, cap))
        })
}

fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn go(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            go(i + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    go(0, n, k, &mut Vec::new(), &mut out);
    out
}

/// Best feasible score by enumerating every roster.
fn brute_force(pool: &PlayerPool, constraints: &Constraints) -> Option<u64> {
    fn go(pool: &PlayerPool, constraints: &Constraints, c: usize, price: u64, score: u64) -> Option<u64> {
        if c == Category::COUNT {
            return (price <= constraints.total_budget).then_some(score);
        }
        let category = Category::ALL[c];
        let players = pool.category(category);
        combinations(players.len(), constraints.quota(category))
            .into_iter()
            .filter(|combo| combo.iter().all(|&i| constraints.within_cap(players[i].price)))
            .filter_map(|combo| {
                let p: u64 = combo.iter().map(|&i| players[i].price).sum();
                let s: u64 = combo.iter().map(|&i| players[i].score).sum();
                go(pool, constraints, c + 1, price + p, score + s)
            })
            .max()
    }
    go(pool, constraints, 0, 0, 0)
}

fn assert_valid(roster: &Roster, constraints: &Constraints) {
    assert!(roster.price <= constraints.total_budget);
    assert_eq!(roster.price, roster.players.iter().map(|p| p.price).sum::<u64>());
    assert_eq!(roster.score, roster.players.iter().map(|p| p.score).sum::<u64>());
    for p in &roster.players {
        assert!(constraints.within_cap(p.price));
    }
    for category in Category::ALL {
        assert_eq!(roster.names(category).len(), constraints.quota(category));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pushing then popping any valid sequence restores the empty state.
    #[test]
    fn prop_push_pop_restores_state(
        (players, constraints) in instance_strategy(),
        picks in prop::collection::vec((0..Category::COUNT, 0usize..12), 0..20),
    ) {
        let pool = PlayerPool::new(players);
        let empty = SolutionState::new(&pool, constraints);
        let mut state = empty.clone();

        let mut pushed = 0;
        for (c, i) in picks {
            if state.push(Category::ALL[c], i).is_ok() {
                pushed += 1;
                prop_assert!(state.check_invariants());
            }
        }
        prop_assert_eq!(state.len(), pushed);
        for _ in 0..pushed {
            state.pop().unwrap();
            prop_assert!(state.check_invariants());
        }
        prop_assert_eq!(state, empty);
    }

    /// A completed exact search returns the brute-force optimum.
    #[test]
    fn prop_exact_matches_brute_force(
        (players, constraints) in instance_strategy(),
        bound_pruning in any::<bool>(),
    ) {
        let pool = PlayerPool::new(players);
        let config = ExactConfig::default().with_bound_pruning(bound_pruning);
        let mut sink = CollectSink::new();
        let result = ExactRunner::run(&pool, &constraints, &config, &mut sink).unwrap();

        let expected = brute_force(&pool, &constraints);
        prop_assert_eq!(result.best.as_ref().map(|r| r.score), expected);
        match expected {
            Some(_) => prop_assert_eq!(result.status, SearchStatus::Optimal),
            None => prop_assert_eq!(result.status, SearchStatus::Infeasible),
        }
        if let Some(best) = &result.best {
            assert_valid(best, &constraints);
        }
        let scores = sink.scores();
        for w in scores.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }

    /// The annealer only ever reports valid rosters and never beats the
    /// optimum.
    #[test]
    fn prop_anneal_respects_constraints(
        (players, constraints) in instance_strategy(),
        seed in any::<u64>(),
    ) {
        let pool = PlayerPool::new(players);
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_max_rounds(20)
            .with_seed(seed);
        let mut sink = CollectSink::new();
        if let Ok(result) = SaRunner::run(&pool, &constraints, &config, &mut sink) {
            assert_valid(&result.best, &constraints);
            for improvement in &sink.improvements {
                assert_valid(&improvement.roster, &constraints);
            }
            let optimum = brute_force(&pool, &constraints);
            prop_assert!(optimum.is_some_and(|best| result.best.score <= best));
        }
    }
}
