//! Ray casts with exclusion filters.
use log::*;

use sightline_geometry::V2;
use sightline_physics::{
    BodyHandle, FixtureHandle, ObjectId, PhysicsWorld, RayCastCandidate, RayCastControl,
};

use crate::*;

/// What a cast struck.
///
/// The fixture, its body and the body's object always come together, so a result either has all three or none.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RayHit {
    pub fixture: FixtureHandle,
    pub body: BodyHandle,
    pub object: ObjectId,
}

/// The outcome of one cast.  All points are in display units.
///
/// A cast that hits nothing is not an error: it has a zero hit point, normal and fraction, and no [RayHit].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayCastResult {
    start_point: V2,
    end_point: V2,
    hit_point: V2,
    normal: V2,
    fraction: f64,
    hit: Option<RayHit>,
}

impl RayCastResult {
    pub(crate) fn miss(start_point: V2, end_point: V2) -> RayCastResult {
        RayCastResult {
            start_point,
            end_point,
            hit_point: V2::ZERO,
            normal: V2::ZERO,
            fraction: 0.0,
            hit: None,
        }
    }

    pub fn get_start_point(&self) -> V2 {
        self.start_point
    }

    pub fn get_end_point(&self) -> V2 {
        self.end_point
    }

    pub fn get_hit_point(&self) -> V2 {
        self.hit_point
    }

    pub fn get_normal(&self) -> V2 {
        self.normal
    }

    pub fn get_fraction(&self) -> f64 {
        self.fraction
    }

    pub fn get_hit(&self) -> Option<&RayHit> {
        self.hit.as_ref()
    }

    pub fn get_fixture(&self) -> Option<FixtureHandle> {
        self.hit.map(|h| h.fixture)
    }

    pub fn get_body(&self) -> Option<BodyHandle> {
        self.hit.map(|h| h.body)
    }

    pub fn get_object(&self) -> Option<ObjectId> {
        self.hit.map(|h| h.object)
    }

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// Casts rays through a world and keeps a history of the results.
///
/// Each `RayQuery` owns its history, so separate callers (or threads) should each use their own.
#[derive(Debug, Clone)]
pub struct RayQuery {
    config: QueryConfig,
    history: RayCastHistory,
}

impl RayQuery {
    pub fn new(config: QueryConfig) -> RayQuery {
        RayQuery {
            history: RayCastHistory::new(config.history_capacity),
            config,
        }
    }

    pub fn get_config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn history(&self) -> &RayCastHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut RayCastHistory {
        &mut self.history
    }

    /// Cast from `point_a` to `point_b`, passing through every fixture of `exclude`, if given.
    pub fn cast<W, O>(
        &mut self,
        world: &W,
        point_a: V2,
        point_b: V2,
        exclude: Option<&O>,
    ) -> RayCastResult
    where
        W: PhysicsWorld,
        O: GameObject + ?Sized,
    {
        let exclusions = match exclude {
            Some(o) => ExclusionSet::from_object(world, o),
            None => ExclusionSet::new(),
        };
        self.cast_fixture_filter(world, point_a, point_b, &exclusions)
    }

    /// Cast from `point_a` to `point_b`, passing through every fixture of every object in `exclude`.
    pub fn cast_excluding<W, O>(
        &mut self,
        world: &W,
        point_a: V2,
        point_b: V2,
        exclude: &[O],
    ) -> RayCastResult
    where
        W: PhysicsWorld,
        O: GameObject,
    {
        let exclusions = ExclusionSet::from_objects(world, exclude);
        self.cast_fixture_filter(world, point_a, point_b, &exclusions)
    }

    /// Cast from `point_a` to `point_b`, passing through the fixtures in `exclude`.
    ///
    /// The other cast methods build an exclusion set and then call this.
    pub fn cast_fixture_filter<W: PhysicsWorld>(
        &mut self,
        world: &W,
        point_a: V2,
        point_b: V2,
        exclude: &ExclusionSet,
    ) -> RayCastResult {
        let units = self.config.units;
        let sim_a = units.to_sim_units(point_a);
        let sim_b = units.to_sim_units(point_b);

        let chosen = match self.config.mode {
            CastMode::Nearest => nearest_candidate(world, sim_a, sim_b, exclude),
            CastMode::FirstAccepted => first_accepted_candidate(world, sim_a, sim_b, exclude),
        };

        let result = match chosen.and_then(|c| build_hit(world, &c).map(|hit| (c, hit))) {
            Some((c, hit)) => RayCastResult {
                start_point: point_a,
                end_point: point_b,
                hit_point: units.to_display_units(c.point),
                normal: c.normal,
                fraction: c.fraction,
                hit: Some(hit),
            },
            None => RayCastResult::miss(point_a, point_b),
        };

        debug!(
            "Ray cast {:?} -> {:?} excluding {} fixtures: {:?}",
            point_a,
            point_b,
            exclude.len(),
            result.hit
        );
        self.history.push(result);
        result
    }
}

impl Default for RayQuery {
    fn default() -> RayQuery {
        RayQuery::new(Default::default())
    }
}

/// Visit every candidate and keep the non-excluded one with the smallest fraction.
fn nearest_candidate<W: PhysicsWorld>(
    world: &W,
    sim_a: V2,
    sim_b: V2,
    exclude: &ExclusionSet,
) -> Option<RayCastCandidate> {
    let mut best: Option<RayCastCandidate> = None;
    world.ray_cast(sim_a, sim_b, |candidate| {
        if !exclude.contains(candidate.fixture)
            && best.map_or(true, |b| candidate.fraction < b.fraction)
        {
            best = Some(*candidate);
        }
        RayCastControl::Continue
    });
    best
}

/// Each candidate replaces the last; the first non-excluded one stops the query.
///
/// An excluded candidate clears the tentative result rather than recording itself, so that running off the end of
/// the shapes after skipping one reports nothing.
fn first_accepted_candidate<W: PhysicsWorld>(
    world: &W,
    sim_a: V2,
    sim_b: V2,
    exclude: &ExclusionSet,
) -> Option<RayCastCandidate> {
    let mut tentative: Option<RayCastCandidate> = None;
    world.ray_cast(sim_a, sim_b, |candidate| {
        if exclude.contains(candidate.fixture) {
            tentative = None;
            return RayCastControl::Continue;
        }
        tentative = Some(*candidate);
        RayCastControl::Stop
    });
    tentative
}

fn build_hit<W: PhysicsWorld>(world: &W, candidate: &RayCastCandidate) -> Option<RayHit> {
    let Some(fixture) = world.get_fixture(candidate.fixture) else {
        warn!("The world reported {}, which it doesn't have", candidate.fixture);
        return None;
    };
    let body = fixture.get_body();
    let Some(owner) = world.get_body(body) else {
        warn!("{} belongs to {}, which isn't in the world", candidate.fixture, body);
        return None;
    };

    Some(RayHit {
        fixture: candidate.fixture,
        body,
        object: owner.get_user_data(),
    })
}
