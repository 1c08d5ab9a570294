//! End-to-end coverage of the ranking pipeline's contract.

use geo::Coord;
use hangspot_core::{
    Budget, Category, ConvergenceVerdict, GroupType, InMemorySession, Place, RankRequest,
    RankingEngine, Session, TransportMode, evaluate_convergence,
};
use rstest::{fixture, rstest};

const CENTER: Coord<f64> = Coord { x: 80.25, y: 13.05 };

/// Roughly 0.108 km per 0.001 degrees of longitude at 13 degrees north.
fn venue(id: u64, category: Category, dx_degrees: f64) -> Place {
    Place::new(
        id,
        format!("Venue {id}"),
        category,
        Coord {
            x: CENTER.x + dx_degrees,
            y: CENTER.y,
        },
    )
}

#[fixture]
fn request() -> RankRequest {
    RankRequest {
        center: CENTER,
        group: GroupType::Friends,
        budget: Budget::High,
        max_distance_km: 2.0,
        transport: Some(TransportMode::Car),
    }
}

#[rstest]
fn adjacent_results_never_increase_in_score(request: RankRequest) {
    let candidates: Vec<Place> = vec![
        venue(1, Category::Cafe, 0.010),
        venue(2, Category::Restaurant, 0.002),
        venue(3, Category::Leisure, 0.006),
        venue(4, Category::Cafe, 0.001),
        venue(5, Category::Restaurant, 0.012),
        venue(6, Category::Cafe, 0.004),
    ];

    let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[rstest]
fn rejecting_then_re_requesting_never_returns_the_id(request: RankRequest) {
    let session = InMemorySession::new();
    let candidates = vec![
        venue(1, Category::Cafe, 0.001),
        venue(2, Category::Cafe, 0.002),
        venue(3, Category::Cafe, 0.003),
    ];
    let engine = RankingEngine::default();

    let first = engine.rank(&candidates, &request, &session);
    let top_id = first[0].id;
    session.reject(&top_id.to_string());

    let second = engine.rank(&candidates, &request, &session);
    assert!(second.iter().all(|p| p.id != top_id));

    // Rejecting again must not grow the set.
    session.reject(&top_id.to_string());
    assert_eq!(session.rejected_count(), 1);
}

#[rstest]
fn close_cafe_for_friends_reads_extremely_close(request: RankRequest) {
    // 0.002 degrees is roughly 0.22 km: inside the 0.3 km doorstep band.
    let candidates = vec![venue(1, Category::Cafe, 0.002)];

    let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

    assert!(ranked[0].distance_km < 0.3);
    assert_eq!(ranked[0].reason, "Extremely close");
}

#[rstest]
fn empty_survivor_set_yields_empty_response_and_neutral_verdict(request: RankRequest) {
    // Low budget allows fast food only; every candidate is a restaurant.
    let low_request = RankRequest {
        budget: Budget::Low,
        ..request
    };
    let candidates = vec![
        venue(1, Category::Restaurant, 0.001),
        venue(2, Category::Restaurant, 0.002),
    ];

    let ranked = RankingEngine::default().rank(&candidates, &low_request, &InMemorySession::new());

    assert!(ranked.is_empty());
    assert_eq!(
        evaluate_convergence(&ranked, 0),
        ConvergenceVerdict::Undecided
    );
}

#[rstest]
fn eta_uses_the_transport_mode(request: RankRequest) {
    let walk_request = RankRequest {
        transport: Some(TransportMode::Walk),
        ..request
    };
    let candidates = vec![venue(1, Category::Cafe, 0.010)];
    let engine = RankingEngine::default();

    let by_car = engine.rank(&candidates, &request, &InMemorySession::new());
    let by_foot = engine.rank(&candidates, &walk_request, &InMemorySession::new());

    assert!(by_foot[0].eta_minutes > by_car[0].eta_minutes);
}
