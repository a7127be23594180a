//! One tick of one agent.

use ants_colony::{Agent, AgentState, Pheromone, TrailState};
use ants_core::{
    Distance, RandomSource, ReturnPolicy, SimParams, Turn, bearing_to, distance, movement,
    segment_distance,
};

use crate::{BehaviorError, BehaviorResult};

/// How close a returning agent's step must pass to its target pheromone for
/// the pheromone to count as visited.
pub const PASS_EPSILON: f32 = 0.001;

/// The outcome of [`step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<R> {
    /// The agent after this tick.
    pub agent: Agent,

    /// `true` if a pheromone should be dropped at `agent.position`.
    pub drop_pheromone: bool,

    /// The agent's private trail counter after this tick.
    pub trail: TrailState,

    /// The generator to use for the next draw anywhere in the world.
    pub rng: R,
}

/// Advance `agent` by one tick.
///
/// `nearby` holds the pheromones within the detection radius of the agent,
/// in ascending id order.  That order is the tie-break when two pheromones
/// are equally near: the lower id wins.
pub fn step<R: RandomSource>(
    params: &SimParams,
    rng:    R,
    agent:  &Agent,
    nearby: &[Pheromone],
    trail:  TrailState,
) -> BehaviorResult<Transition<R>> {
    match agent.state {
        AgentState::Inside    => inside(params, rng, agent, trail),
        AgentState::Outside   => outside(params, rng, agent, trail),
        AgentState::Returning => returning(params, rng, agent, nearby, trail),
    }
}

// ── Inside ────────────────────────────────────────────────────────────────────

fn inside<R: RandomSource>(
    params: &SimParams,
    rng:    R,
    agent:  &Agent,
    trail:  TrailState,
) -> BehaviorResult<Transition<R>> {
    let (go_out, rng) = rng.next_bool_with_probability(params.outside_probability)?;
    let agent = if go_out { agent.with_state(AgentState::Outside) } else { agent.clone() };
    Ok(Transition { agent, drop_pheromone: false, trail, rng })
}

// ── Outside ───────────────────────────────────────────────────────────────────

fn outside<R: RandomSource>(
    params: &SimParams,
    rng:    R,
    agent:  &Agent,
    trail:  TrailState,
) -> BehaviorResult<Transition<R>> {
    let (turns, rng) = rng.next_bool_with_probability(params.turn_probability)?;
    let (turn, rng) = if turns {
        let (degrees, rng) = rng.next_f32_in(-params.turn_magnitude, params.turn_magnitude);
        (Turn::new(degrees)?, rng)
    } else {
        (Turn::ZERO, rng)
    };

    let step = params.move_distance()?;
    let orientation = agent.orientation.turn(turn);
    let candidate = agent.position + movement(orientation, step);

    if !params.world.contains(candidate) {
        // Stay put, face home.  Draws made this tick are still consumed.
        return Ok(Transition { agent: agent.turned_back(), drop_pheromone: false, trail, rng });
    }

    let (drop_pheromone, trail) = trail.advance(step, params.drop_distance()?)?;
    Ok(Transition { agent: agent.moved(candidate, orientation), drop_pheromone, trail, rng })
}

// ── Returning ─────────────────────────────────────────────────────────────────

fn returning<R: RandomSource>(
    params: &SimParams,
    rng:    R,
    agent:  &Agent,
    nearby: &[Pheromone],
    trail:  TrailState,
) -> BehaviorResult<Transition<R>> {
    // `min_by_key` keeps the first of equal minima, so ties go to the lowest id.
    let target = nearby
        .iter()
        .filter(|p| !agent.has_visited(p.id))
        .map(|p| (p, distance(agent.position, p.position)))
        .filter(|(_, d)| *d > Distance::ZERO)
        .min_by_key(|(_, d)| *d)
        .map(|(p, _)| p);

    let Some(target) = target else {
        return trail_lost(params, rng, agent, trail);
    };

    let orientation = bearing_to(agent.position, target.position)?;
    let position = agent.position + movement(orientation, params.move_distance()?);
    let passed = segment_distance((agent.position, position), target.position).raw() < PASS_EPSILON;

    let moved = agent.moved(position, orientation);
    let agent = if passed { moved.visiting(target.id) } else { moved };
    Ok(Transition { agent, drop_pheromone: false, trail, rng })
}

fn trail_lost<R: RandomSource>(
    params: &SimParams,
    rng:    R,
    agent:  &Agent,
    trail:  TrailState,
) -> BehaviorResult<Transition<R>> {
    match params.return_policy {
        ReturnPolicy::EnterNest => Ok(Transition {
            agent:          agent.entered_nest(params.world.center()),
            drop_pheromone: false,
            trail:          TrailState::new(params.drop_distance()?),
            rng,
        }),
        ReturnPolicy::Idle => Ok(Transition {
            agent:          agent.clone(),
            drop_pheromone: false,
            trail,
            rng,
        }),
        ReturnPolicy::Fail => Err(BehaviorError::TrailLost(agent.id)),
    }
}
