//! Proportional division of a fixed number of cells between weighted items.
//!
//! ### Workflow
//! 1. `eliminate_small` drops items too small to earn a cell on their own.
//! 2. `proportional` runs the Hagenbach–Bischoff divisor method with a
//!    largest-remainder pass for the cells the quota leaves over.
//! 3. `correct_min_width` moves single cells from the widest to the
//!    narrowest segment until every segment reaches the floor, or no move
//!    helps any more.
//!
//! `proportional` always returns allocations that sum to `nseats` (for a
//! non-empty weight list).  The min-width pass is best effort: an
//! infeasible floor (`min_width * items > width`) leaves some segments short.

use std::cmp::Ordering;

/// Treat negative, NaN and infinite weights as 0; all-zero weights as all-1.
fn sanitize(weights: &[f64]) -> Vec<f64> {
    let w: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    if w.iter().sum::<f64>() > 0.0 {
        w
    } else {
        vec![1.0; w.len()]
    }
}

/// Assign `nseats` cells to `weights` using the Hagenbach–Bischoff quota.
///
/// Cells left over after flooring go to the largest fractional remainders;
/// everyone tied at the cut-off remainder qualifies, in input order, until
/// the cells run out.  If flooring overshoots, cells are withdrawn from the
/// smallest remainders (later items first on ties).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn proportional(nseats: usize, weights: &[f64]) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }
    let weights = sanitize(weights);
    let quota = weights.iter().sum::<f64>() / (1.0 + nseats as f64);

    let frac: Vec<f64> = weights.iter().map(|w| w / quota).collect();
    let mut seats: Vec<usize> = frac.iter().map(|f| f.floor() as usize).collect();
    let remainders: Vec<f64> = frac
        .iter()
        .zip(&seats)
        .map(|(f, &s)| f - s as f64)
        .collect();

    let allocated: usize = seats.iter().sum();
    match allocated.cmp(&nseats) {
        Ordering::Equal => {}
        Ordering::Less => grant_largest_remainders(&mut seats, &remainders, nseats - allocated),
        Ordering::Greater => {
            for s in &mut seats {
                *s = (*s).min(nseats);
            }
            let allocated: usize = seats.iter().sum();
            withdraw_smallest_remainders(&mut seats, &remainders, allocated.saturating_sub(nseats));
        }
    }
    seats
}

fn grant_largest_remainders(seats: &mut [usize], remainders: &[f64], mut remaining: usize) {
    let mut sorted = remainders.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let Some(&limit) = sorted.get(remaining.min(sorted.len()) - 1) else {
        return;
    };

    for (seat, &r) in seats.iter_mut().zip(remainders) {
        if remaining == 0 {
            return;
        }
        if r >= limit {
            *seat += 1;
            remaining -= 1;
        }
    }

    // Only reachable through float rounding; keep the sum exact regardless.
    let len = seats.len();
    for i in (0..remaining).map(|k| k % len) {
        seats[i] += 1;
    }
}

fn withdraw_smallest_remainders(seats: &mut [usize], remainders: &[f64], excess: usize) {
    for _ in 0..excess {
        let victim = seats
            .iter()
            .zip(remainders)
            .enumerate()
            .filter(|(_, (s, _))| **s > 0)
            .min_by(|(i, (_, a)), (j, (_, b))| a.total_cmp(b).then(j.cmp(i)))
            .map(|(i, _)| i);
        match victim {
            Some(i) => seats[i] -= 1,
            None => return,
        }
    }
}

/// Outcome of [`correct_min_width`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Correction {
    /// Nothing was below the floor.
    Untouched,
    /// Every segment now meets the floor.
    Satisfied,
    /// The floor can't be met; some segments stay below it.
    GaveUp,
}

/// Move one cell at a time from the widest to the narrowest segment while
/// any segment is below `min_width`.
///
/// Stops when the floor is met, when a move would leave the allocation
/// identical to the previous one, or when the widest segment is at most one
/// cell wider than the narrowest (a further move would only swap them).
pub fn correct_min_width(bars: &mut [usize], min_width: usize) -> Correction {
    if !bars.iter().any(|&b| b < min_width) {
        return Correction::Untouched;
    }

    let mut last: Option<Vec<usize>> = None;
    while bars.iter().any(|&b| b < min_width) {
        if last.as_deref() == Some(&*bars) {
            return Correction::GaveUp;
        }
        let (Some(small), Some(large)) = (position_of_min(bars), position_of_max(bars)) else {
            return Correction::GaveUp;
        };
        if bars[large] <= bars[small] + 1 {
            return Correction::GaveUp;
        }
        last = Some(bars.to_vec());
        bars[small] += 1;
        bars[large] -= 1;
    }
    Correction::Satisfied
}

/// First index holding the minimum.
fn position_of_min(v: &[usize]) -> Option<usize> {
    let min = v.iter().min()?;
    v.iter().position(|x| x == min)
}

/// First index holding the maximum.
fn position_of_max(v: &[usize]) -> Option<usize> {
    let max = v.iter().max()?;
    v.iter().position(|x| x == max)
}

/// Indices of the items that survive small-value elimination.
///
/// Repeatedly drops the first item (in order) whose weight is below
/// `total / width` of what is left, recomputing after every removal.
/// Disabled entirely when `keep_all` is set.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn eliminate_small(weights: &[f64], width: usize, keep_all: bool) -> Vec<usize> {
    let mut survivors: Vec<usize> = (0..weights.len()).collect();
    if keep_all || width == 0 {
        return survivors;
    }
    loop {
        let total: f64 = survivors.iter().map(|&i| weights[i]).sum();
        let cell = total / width as f64;
        match survivors.iter().position(|&i| weights[i] < cell) {
            Some(pos) => {
                survivors.remove(pos);
            }
            None => return survivors,
        }
    }
}
