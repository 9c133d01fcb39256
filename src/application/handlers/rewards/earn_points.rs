//! EarnPoints - Awards points and reports tier crossings.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionToken, StateStore};
use crate::domain::notification::Notification;
use crate::domain::rewards::{EarnOutcome, EarnRange, RewardState, RewardSummary, TierTable};
use crate::ports::{NotificationSink, RandomSource};

/// Draws an amount from `range` and applies it to `state`.
///
/// Pure apart from the single draw taken from `random`.
pub fn earn_points(
    state: &RewardState,
    table: &TierTable,
    range: EarnRange,
    random: &dyn RandomSource,
) -> EarnOutcome {
    let amount = random.between(range.min(), range.max());
    state.earn(amount, table)
}

/// Owns the session's reward state.
pub struct EarnPointsHandler {
    table: Arc<TierTable>,
    range: EarnRange,
    random: Arc<dyn RandomSource>,
    notifier: Arc<dyn NotificationSink>,
    state: StateStore<RewardState>,
}

impl EarnPointsHandler {
    pub fn new(
        table: Arc<TierTable>,
        range: EarnRange,
        random: Arc<dyn RandomSource>,
        notifier: Arc<dyn NotificationSink>,
        seed_points: u64,
        token: SessionToken,
    ) -> Self {
        let state = StateStore::new(RewardState::seeded(seed_points, &table), token);
        Self {
            table,
            range,
            random,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> RewardState {
        self.state.get()
    }

    pub fn summary(&self) -> RewardSummary {
        self.table.summary(self.state.get().points)
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<RewardState> {
        self.state.subscribe()
    }

    /// Awards a random amount of points.
    ///
    /// Emits an achievement notification when the award lifts the user
    /// into a higher tier.
    pub fn handle(&self) -> Result<EarnOutcome, DomainError> {
        // Draw and write under one lock so concurrent awards never share a base.
        let outcome = self.state.try_update(|state| {
            let outcome = earn_points(state, &self.table, self.range, self.random.as_ref());
            *state = outcome.state;
            Ok(outcome)
        })?;

        tracing::debug!(
            earned = outcome.earned,
            points = outcome.state.points,
            tier = %outcome.tier.name,
            "points earned"
        );

        if outcome.crossed_tier {
            tracing::info!(tier = %outcome.tier.name, points = outcome.state.points, "tier reached");
            self.notifier.notify(Notification::tier_achieved(&outcome.tier));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryNotificationSink, SequenceRandomSource};
    use crate::domain::foundation::{ErrorCode, SessionGuard};
    use crate::domain::notification::NotificationCategory;
    use crate::domain::rewards::TierId;

    fn handler(
        session: &SessionGuard,
        amounts: Vec<u64>,
        seed_points: u64,
    ) -> (EarnPointsHandler, Arc<InMemoryNotificationSink>) {
        let sink = Arc::new(InMemoryNotificationSink::new());
        let handler = EarnPointsHandler::new(
            Arc::new(TierTable::standard()),
            EarnRange::default(),
            Arc::new(SequenceRandomSource::new().with_amounts(amounts)),
            sink.clone(),
            seed_points,
            session.token(),
        );
        (handler, sink)
    }

    #[test]
    fn earn_points_uses_one_draw() {
        let state = RewardState {
            points: 90,
            previous_tier_id: TierId(0),
        };
        let random = SequenceRandomSource::new().with_amounts(vec![15]);

        let outcome = earn_points(&state, &TierTable::standard(), EarnRange::default(), &random);

        assert_eq!(outcome.earned, 15);
        assert_eq!(outcome.state.points, 105);
        assert!(outcome.crossed_tier);
    }

    #[test]
    fn crossing_a_tier_notifies_once() {
        let session = SessionGuard::new();
        let (handler, sink) = handler(&session, vec![15, 20], 90);

        let first = handler.handle().unwrap();
        let second = handler.handle().unwrap();

        assert!(first.crossed_tier);
        assert!(!second.crossed_tier);
        assert_eq!(handler.state().points, 125);
        let achievements = sink.of_category(NotificationCategory::Achievement);
        assert_eq!(achievements.len(), 1);
        assert!(achievements[0].message.contains("Bronze"));
    }

    #[test]
    fn points_only_increase() {
        let session = SessionGuard::new();
        let (handler, _) = handler(&session, vec![10, 50, 33], 0);

        let mut last = handler.state().points;
        for _ in 0..9 {
            let outcome = handler.handle().unwrap();
            assert!(EarnRange::default().contains(outcome.earned));
            assert!(outcome.state.points > last);
            last = outcome.state.points;
        }
    }

    #[test]
    fn summary_tracks_state() {
        let session = SessionGuard::new();
        let (handler, _) = handler(&session, vec![50], 200);

        handler.handle().unwrap();

        let summary = handler.summary();
        assert_eq!(summary.points, 250);
        assert_eq!(summary.current.name, "Silver");
        assert_eq!(summary.points_to_next, Some(250));
    }

    #[test]
    fn concurrent_awards_are_all_counted() {
        let session = SessionGuard::new();
        let (handler, sink) = handler(&session, vec![10], 0);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..250 {
                        handler.handle().unwrap();
                    }
                });
            }
        });

        assert_eq!(handler.state().points, 10_000);
        assert_eq!(handler.state().previous_tier_id, TierId(4));
        // Bronze, Silver, Gold and Platinum, each announced exactly once.
        assert_eq!(sink.count_of(NotificationCategory::Achievement), 4);
    }

    #[test]
    fn earning_after_teardown_is_refused() {
        let session = SessionGuard::new();
        let (handler, sink) = handler(&session, vec![50], 90);
        session.close();

        let err = handler.handle().unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionClosed);
        assert_eq!(handler.state().points, 90);
        assert!(sink.is_empty());
    }
}
