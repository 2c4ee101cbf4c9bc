//! Seeded sample pool generation.
//!
//! Stands in for a real data feed: produces a priced, statted player pool
//! with the same shape as league data. Scores follow standard Supercoach
//! weights and prices track scoring output with noise. Fully deterministic
//! for a given seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Exp, Normal, Uniform};
use types::{Player, PlayerId, Position, Price};

const CLUBS: [&str; 18] = [
    "Adelaide",
    "Brisbane",
    "Carlton",
    "Collingwood",
    "Essendon",
    "Fremantle",
    "Geelong",
    "Gold Coast",
    "GWS",
    "Hawthorn",
    "Melbourne",
    "North Melbourne",
    "Port Adelaide",
    "Richmond",
    "St Kilda",
    "Sydney",
    "West Coast",
    "Western Bulldogs",
];

const SURNAMES: [&str; 10] = [
    "Smith", "Jones", "Brown", "Wilson", "Taylor", "Johnson", "Williams", "Davis", "Miller",
    "Anderson",
];

const GIVEN_NAMES: [&str; 10] = [
    "Jack", "Tom", "Sam", "Luke", "Matt", "Josh", "Ben", "Dan", "Jake", "Alex",
];

/// Per-game stat line drawn for one player.
struct StatLine {
    kicks: f64,
    handballs: f64,
    marks: f64,
    tackles: f64,
    goals: f64,
    behinds: f64,
    hitouts: f64,
}

impl StatLine {
    /// Supercoach scoring: kicks 3, handballs 2, marks 3, tackles 4,
    /// goals 6, behinds 1, hitouts 1.
    fn score(&self) -> f64 {
        self.kicks * 3.0
            + self.handballs * 2.0
            + self.marks * 3.0
            + self.tackles * 4.0
            + self.goals * 6.0
            + self.behinds * 1.0
            + self.hitouts * 1.0
    }
}

fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev)
        .map(|d| d.sample(rng))
        .unwrap_or(mean)
        .max(0.0)
}

fn draw_stats(rng: &mut StdRng, position: Position) -> StatLine {
    let (disposal_mean, disposal_sd) = match position {
        Position::Midfielder => (25.0, 5.0),
        Position::Defender => (20.0, 4.0),
        Position::Forward => (18.0, 4.0),
        Position::Ruck => (15.0, 3.0),
    };
    let disposals = normal(rng, disposal_mean, disposal_sd);
    let kick_share = match position {
        Position::Defender => rng.sample(Uniform::new(0.6, 0.7)),
        _ => rng.sample(Uniform::new(0.5, 0.6)),
    };
    let kicks = disposals * kick_share;

    let (marks, tackles, goals, hitouts) = match position {
        Position::Midfielder => (
            normal(rng, 5.0, 2.0),
            normal(rng, 5.0, 2.0),
            normal(rng, 0.8, 0.4),
            normal(rng, 0.5, 0.3),
        ),
        Position::Defender => (
            normal(rng, 6.0, 2.0),
            normal(rng, 4.0, 2.0),
            normal(rng, 0.3, 0.2),
            normal(rng, 0.2, 0.2),
        ),
        Position::Forward => (
            normal(rng, 5.0, 2.0),
            normal(rng, 3.0, 1.5),
            normal(rng, 2.0, 0.8),
            normal(rng, 0.3, 0.2),
        ),
        Position::Ruck => (
            normal(rng, 4.0, 1.5),
            normal(rng, 3.0, 1.5),
            normal(rng, 0.5, 0.3),
            normal(rng, 30.0, 8.0),
        ),
    };

    StatLine {
        kicks,
        handballs: disposals - kicks,
        marks,
        tackles,
        goals,
        behinds: normal(rng, 0.5, 0.3),
        hitouts,
    }
}

/// Generate a deterministic sample pool of `size` players.
pub fn generate_pool(size: usize, seed: u64) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = Vec::with_capacity(size);

    for i in 0..size {
        let position = *Position::ALL.choose(&mut rng).unwrap_or(&Position::Midfielder);
        let club = CLUBS.choose(&mut rng).copied().unwrap_or("Adelaide");
        let surname = SURNAMES.choose(&mut rng).copied().unwrap_or("Smith");
        let given = GIVEN_NAMES.choose(&mut rng).copied().unwrap_or("Jack");

        let age = (normal(&mut rng, 25.0, 4.0) as u32).clamp(18, 35);
        let games_played = {
            let exp = Exp::new(1.0 / 50.0)
                .map(|d| d.sample(&mut rng))
                .unwrap_or(50.0);
            ((exp * f64::from(age - 17) / 10.0) as u32).min(300)
        };

        let stats = draw_stats(&mut rng, position);
        let avg_score = stats.score();

        let price = {
            let base = avg_score * 6000.0 + normal(&mut rng, 50_000.0, 30_000.0);
            Price(base.clamp(100_000.0, 800_000.0) as u64)
        };

        // The league feed fields the scoring stage relies on.
        let draft_pick = rng.gen_range(1..=80);
        let potential = if age <= 23 {
            rng.sample(Uniform::new(1.0, 1.5))
        } else {
            rng.sample(Uniform::new(1.0, 1.1))
        };
        let injury_history = (Exp::new(1.0)
            .map(|d| d.sample(&mut rng))
            .unwrap_or(0.0)) as u32;
        let injured_last_year = injury_history > 0 && rng.gen_bool(0.3);

        let mut player = Player::new(
            PlayerId(i as u32),
            format!("{surname} {given}"),
            club,
            position,
            price,
        );
        player.age = age;
        player.games_played = games_played;
        player.avg_score = avg_score;
        player.potential = potential;
        player.draft_pick = draft_pick;
        player.injury_history = injury_history;
        player.injured_last_year = injured_last_year;

        pool.push(player);
    }

    pool
}
