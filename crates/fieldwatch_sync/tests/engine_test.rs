//! Tests for the synchronization decision engine.

mod common;

use common::{MemoryChannel, ScriptedSource, offline, online};
use fieldwatch_core::ReportColour;
use fieldwatch_status::FetchOutcome;
use fieldwatch_sync::{PublishAction, StatusQuery, SyncEngine, SyncSettings, TickOutcome};
use std::time::{Duration, Instant};

const COOLDOWN: Duration = Duration::from_secs(60);

fn settings() -> SyncSettings {
    SyncSettings {
        poll_interval: Duration::from_secs(10),
        cooldown: COOLDOWN,
    }
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[tokio::test]
async fn test_first_tick_always_publishes() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(3))]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());

    let outcome = engine.tick_at(Instant::now()).await;

    assert!(matches!(
        outcome,
        TickOutcome::Published {
            action: PublishAction::Created(_),
            forced: false
        }
    ));
    assert_eq!(channel.sends(), 1);
    assert!(engine.state().last_published_online());
    assert_eq!(engine.state().last_published_players(), 3);
}

#[tokio::test]
async fn test_offline_at_startup_publishes_placeholder() {
    let source = ScriptedSource::new([offline()]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());

    let outcome = engine.tick_at(Instant::now()).await;

    assert!(matches!(outcome, TickOutcome::Published { forced: true, .. }));
    let reports = channel.reports();
    let report = reports[0].report.as_ref().unwrap();
    assert_eq!(report.colour, ReportColour::Offline);
    assert!(report.description.contains("Server Offline"));
    assert!(report.fields.is_empty());
    assert_eq!(engine.metrics().snapshot().fetch_failures, 1);
}

#[tokio::test]
async fn test_identical_ticks_within_cooldown_do_not_publish() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(3))]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source.clone(), channel.clone(), settings());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    assert_eq!(engine.tick_at(t0 + secs(10)).await, TickOutcome::Unchanged);
    assert_eq!(engine.tick_at(t0 + secs(45)).await, TickOutcome::Unchanged);

    assert_eq!(source.fetches(), 3);
    assert_eq!(channel.writes(), 1);
}

#[tokio::test]
async fn test_change_waits_for_cooldown() {
    let source = ScriptedSource::new([
        FetchOutcome::Online(online(3)),
        FetchOutcome::Online(online(4)),
    ]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    assert_eq!(engine.tick_at(t0 + secs(20)).await, TickOutcome::CoolingDown);
    assert_eq!(engine.tick_at(t0 + secs(60)).await, TickOutcome::CoolingDown);

    let outcome = engine.tick_at(t0 + secs(61)).await;
    assert!(matches!(
        outcome,
        TickOutcome::Published {
            action: PublishAction::Edited(_),
            forced: false
        }
    ));
    assert_eq!(engine.state().last_published_players(), 4);
    assert_eq!(engine.state().last_publish_time(), Some(t0 + secs(61)));
}

#[tokio::test]
async fn test_going_offline_shows_last_known_configuration() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(5)), offline()]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    let outcome = engine.tick_at(t0 + secs(90)).await;

    assert!(matches!(outcome, TickOutcome::Published { .. }));
    assert_eq!(channel.writes(), 2);

    let reports = channel.reports();
    assert_eq!(reports.len(), 1);
    let report = reports[0].report.as_ref().unwrap();
    assert_eq!(report.colour, ReportColour::Offline);
    assert!(report.description.contains("**Valley Co-op**"));
    assert!(report.description.contains("**Elmcreek**"));
    assert!(report.description.contains("**Offline**"));
    assert!(report.description.contains("**Players:** - 👥"));
    assert!(report.fields[0].value.contains("Courseplay"));

    assert!(!engine.state().last_published_online());
    assert_eq!(engine.state().last_published_players(), 0);
    assert_eq!(
        engine.state().last_known_good().map(|s| *s.players()),
        Some(5)
    );
}

#[tokio::test]
async fn test_stale_report_is_force_refreshed() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(2))]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    assert_eq!(engine.tick_at(t0 + secs(200)).await, TickOutcome::Unchanged);
    assert_eq!(engine.tick_at(t0 + secs(300)).await, TickOutcome::Unchanged);

    let outcome = engine.tick_at(t0 + secs(301)).await;

    assert!(matches!(
        outcome,
        TickOutcome::Published {
            action: PublishAction::Edited(_),
            forced: true
        }
    ));
    assert_eq!(channel.sends(), 1);
    assert_eq!(channel.edits(), 1);
}

#[tokio::test]
async fn test_huge_cooldown_never_forces_refresh() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(2))]);
    let channel = MemoryChannel::new();
    let settings = SyncSettings {
        poll_interval: Duration::from_secs(10),
        cooldown: Duration::from_secs(u64::MAX / 2),
    };
    let mut engine = SyncEngine::new(source, channel.clone(), settings);
    let t0 = Instant::now();

    assert_eq!(settings.forced_refresh_after(), Duration::MAX);
    assert!(matches!(
        engine.tick_at(t0).await,
        TickOutcome::Published { .. }
    ));
    assert_eq!(engine.tick_at(t0 + secs(10)).await, TickOutcome::Unchanged);
    assert_eq!(channel.writes(), 1);
}

#[tokio::test]
async fn test_failed_publish_is_retried() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(3))]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());
    let t0 = Instant::now();

    channel.set_failing(true);
    assert_eq!(engine.tick_at(t0).await, TickOutcome::PublishFailed);
    assert_eq!(engine.state().last_publish_time(), None);
    assert!(!engine.state().last_published_online());

    channel.set_failing(false);
    let outcome = engine.tick_at(t0 + secs(10)).await;

    assert!(matches!(outcome, TickOutcome::Published { .. }));
    assert_eq!(channel.sends(), 1);

    let metrics = engine.metrics().snapshot();
    assert_eq!(metrics.ticks, 2);
    assert_eq!(metrics.publishes, 1);
    assert_eq!(metrics.publish_failures, 1);
}

#[tokio::test]
async fn test_failed_edit_keeps_cooldown_clock() {
    let source = ScriptedSource::new([
        FetchOutcome::Online(online(3)),
        FetchOutcome::Online(online(6)),
    ]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source, channel.clone(), settings());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    channel.set_failing(true);
    assert_eq!(
        engine.tick_at(t0 + secs(70)).await,
        TickOutcome::PublishFailed
    );
    assert_eq!(engine.state().last_publish_time(), Some(t0));
    assert_eq!(engine.state().last_published_players(), 3);

    channel.set_failing(false);
    assert!(matches!(
        engine.tick_at(t0 + secs(80)).await,
        TickOutcome::Published { .. }
    ));
    assert_eq!(engine.state().last_published_players(), 6);
}

#[tokio::test]
async fn test_query_inside_cooldown_is_fresh_and_leaves_engine_alone() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(3))]);
    let channel = MemoryChannel::new();
    let mut engine = SyncEngine::new(source.clone(), channel.clone(), settings());
    let query = StatusQuery::new(source.clone());
    let t0 = Instant::now();

    engine.tick_at(t0).await;
    source.push(FetchOutcome::Online(online(7)));
    assert_eq!(engine.tick_at(t0 + secs(5)).await, TickOutcome::CoolingDown);

    source.push(FetchOutcome::Online(online(8)));
    let report = query.report().await;

    assert!(report.description.contains("**8**/16"));
    assert_eq!(report.footer, None);
    assert_eq!(source.fetches(), 3);
    assert_eq!(engine.state().last_publish_time(), Some(t0));
    assert_eq!(engine.state().last_published_players(), 3);
    assert_eq!(channel.writes(), 1);

    let outcome = engine.tick_at(t0 + secs(61)).await;
    assert!(matches!(outcome, TickOutcome::Published { .. }));
    assert_eq!(engine.state().last_published_players(), 8);
}

#[tokio::test(start_paused = true)]
async fn test_run_loop_polls_each_interval() {
    let source = ScriptedSource::new([FetchOutcome::Online(online(1))]);
    let channel = MemoryChannel::new();
    let engine = SyncEngine::new(source.clone(), channel.clone(), settings());

    let handle = tokio::spawn(engine.run());
    tokio::time::sleep(Duration::from_secs(35)).await;
    handle.abort();

    assert!(source.fetches() >= 4);
    assert_eq!(channel.writes(), 1);
    assert!(channel.reports()[0].report.as_ref().unwrap().footer.is_some());
}
