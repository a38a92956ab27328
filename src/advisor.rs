use crate::round::{Choice, Outcome, Round};
use crate::stats::Tally;

pub const GRID_RESOLUTION: usize = 128;

/// Suggests moves from a Dirichlet posterior over "which move tends to win".
///
/// `alphas` counts evidence per move, starting from a uniform prior, so the
/// density is proportional to `prod(mu_i ^ alphas_i)`. The posterior mode is
/// searched on a triangular grid over the simplex rather than solved in
/// closed form.
pub struct Advisor {
    grid: Vec<[f64; 3]>,
    alphas: [u64; 3],
    history: Vec<[u64; 3]>,
}

fn linspace(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

fn round_to_10_places(x: f64) -> f64 {
    let rounded = (x * 1e10).round() / 1e10;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Grid points `[mu_rock, mu_paper, mu_scissors]` in row-major order, rows
/// stepping `mu_paper` and columns stepping `mu_rock`.
fn simplex_grid(resolution: usize) -> Vec<[f64; 3]> {
    let steps = linspace(resolution);
    let mut grid = Vec::new();
    for &paper in &steps {
        for &rock in &steps {
            let scissors = round_to_10_places(1.0 - rock - paper);
            if scissors >= 0.0 {
                grid.push([rock, paper, scissors]);
            }
        }
    }
    grid
}

fn log_density(mu: &[f64; 3], alphas: &[u64; 3]) -> f64 {
    mu.iter()
        .zip(alphas.iter())
        .map(|(&m, &a)| {
            if a == 0 {
                0.0
            } else if m == 0.0 {
                f64::NEG_INFINITY
            } else {
                a as f64 * m.ln()
            }
        })
        .sum()
}

fn argmax_choice(mu: &[f64; 3]) -> Choice {
    let mut best = Choice::Rock;
    for choice in Choice::ALL {
        if mu[choice.index()] > mu[best.index()] {
            best = choice;
        }
    }
    best
}

impl Advisor {
    pub fn new() -> Advisor {
        Advisor::with_resolution(GRID_RESOLUTION)
    }

    pub fn with_resolution(resolution: usize) -> Advisor {
        Advisor {
            grid: simplex_grid(resolution),
            alphas: [0; 3],
            history: Vec::new(),
        }
    }

    /// Seeds the posterior with how often each move won in past rounds.
    pub fn from_tally(tally: &Tally) -> Advisor {
        let mut advisor = Advisor::new();
        advisor.update(tally.winning_moves);
        advisor
    }

    pub fn update(&mut self, evidence: [u64; 3]) {
        for (alpha, e) in self.alphas.iter_mut().zip(evidence) {
            *alpha += e;
        }
        self.history.push(self.alphas);
        tracing::debug!("posterior update #{}: alphas={:?}", self.history.len(), self.alphas);
    }

    /// Records a live round. Ties carry no evidence and leave the posterior alone.
    pub fn observe(&mut self, mine: Choice, theirs: Choice) -> Outcome {
        let round = Round::new(mine, theirs);
        if let Some(winner) = round.winning_choice() {
            let mut evidence = [0; 3];
            evidence[winner.index()] = 1;
            self.update(evidence);
        }
        round.outcome()
    }

    pub fn alphas(&self) -> [u64; 3] {
        self.alphas
    }

    /// Alpha vectors after each update, oldest first.
    pub fn history(&self) -> &[[u64; 3]] {
        &self.history
    }

    /// Grid point with the highest density; the first one wins ties.
    pub fn mode(&self) -> [f64; 3] {
        let mut best: Option<(f64, [f64; 3])> = None;
        for mu in &self.grid {
            let density = log_density(mu, &self.alphas);
            let better = match best {
                Some((top, _)) => density > top,
                None => true,
            };
            if better {
                best = Some((density, *mu));
            }
        }
        best.map(|(_, mu)| mu).unwrap_or([1.0, 0.0, 0.0])
    }

    pub fn suggest(&self) -> Choice {
        argmax_choice(&self.mode())
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Advisor::new()
    }
}
