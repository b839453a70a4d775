// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the map chooser controller.
//!
//! These tests drive a full [`MapChooser`] through map sessions with the mock
//! host's virtual clock: gating, countdown, voting, resolution and the final
//! level change.

use mapchooser_core::{
    testing::{make_players, MockHost, StaticLoader},
    MapChooser, MapChooserConfig, MapId, Phase, Resolution, VoteOption,
};
use mapchooser_traits::{
    MenuKind, Message, PlayerId, PlayerInfo, RoundEndReason, Team, TimerId, TimerTask,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

const POOL: &str = "m1\nm2\nm3\nm4\n";

fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}

/// A controller on `m1` with a 20 minute time limit, primed by the first round.
fn primed(
    config: MapChooserConfig,
    maps: &str,
    players: u64,
) -> MapChooser<MockHost, StaticLoader> {
    let host = MockHost::new("m1", 20.0).with_players(make_players(players));
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, maps),
        StdRng::seed_from_u64(7),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();
    chooser
}

fn instant_gate() -> MapChooserConfig {
    MapChooserConfig {
        rtv_delay_minutes: 0.0,
        ..MapChooserConfig::default()
    }
}

fn option_index(chooser: &MapChooser<MockHost, StaticLoader>, label: &str) -> usize {
    chooser
        .vote_session()
        .expect("vote should be open")
        .options()
        .iter()
        .position(|option| option.label() == label)
        .unwrap_or_else(|| panic!("{} is not on the ballot", label))
}

fn ballot_maps(chooser: &MapChooser<MockHost, StaticLoader>) -> HashSet<String> {
    chooser
        .vote_session()
        .expect("vote should be open")
        .options()
        .iter()
        .filter_map(VoteOption::as_map)
        .map(|map| map.name().to_string())
        .collect()
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn rtv(chooser: &mut MapChooser<MockHost, StaticLoader>, players: &[u64]) {
    for id in players {
        chooser.on_command(PlayerId(*id), "!rtv");
    }
}

// ----------------------------------------------------------------------
// Priming
// ----------------------------------------------------------------------

#[test]
fn test_prime_arms_gate_and_countdown() {
    let chooser = primed(MapChooserConfig::default(), POOL, 4);

    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(!chooser.gate().is_unlocked());
    assert_eq!(chooser.host().pending(TimerTask::GateUnlock).unwrap().1, secs(180));
    assert_eq!(chooser.host().pending(TimerTask::Countdown).unwrap().1, secs(17 * 60));
}

#[test]
fn test_round_start_primes_once() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 4);
    let (countdown, _) = chooser.host().pending(TimerTask::Countdown).unwrap();

    chooser.advance_time(secs(30));
    chooser.on_round_start();

    assert_eq!(chooser.host().pending(TimerTask::Countdown).unwrap().0, countdown);
}

#[test]
fn test_time_limit_failure_leaves_idle() {
    let mut host = MockHost::new("m1", 20.0).with_players(make_players(4));
    host.time_limit = None;
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(instant_gate(), POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();

    assert_eq!(chooser.phase(), Phase::Idle);
    assert_eq!(chooser.host().pending_count(), 0);

    chooser.on_command(PlayerId(1), "!rtv");
    assert_eq!(chooser.host().replies_to(PlayerId(1)), vec![&Message::RtvNotAvailable]);
}

#[test]
fn test_out_of_range_config_keeps_defaults() {
    let config = MapChooserConfig {
        rtv_delay_minutes: 1e18,
        ..MapChooserConfig::default()
    };
    let chooser = primed(config, POOL, 4);

    assert_eq!(chooser.config(), &MapChooserConfig::default());
    assert_eq!(chooser.phase(), Phase::Gated);
    assert_eq!(
        chooser.host().pending(TimerTask::GateUnlock).map(|(_, left)| left),
        Some(secs(180))
    );
}

#[test]
fn test_huge_time_limit_is_clamped() {
    let host = MockHost::new("m1", 1e30).with_players(make_players(4));
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(MapChooserConfig::default(), POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();

    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(chooser.is_timer_armed(TimerTask::Countdown));
    assert!(chooser.time_remaining().is_some());

    chooser.advance_time(secs(60));
    assert!(chooser.time_remaining().is_some());
}

#[test]
fn test_zero_time_limit_arms_gate_only() {
    let mut host = MockHost::new("m1", 0.0).with_players(make_players(4));
    host.time_limit = Some(0.0);
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(MapChooserConfig::default(), POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();

    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(chooser.is_timer_armed(TimerTask::GateUnlock));
    assert!(!chooser.is_timer_armed(TimerTask::Countdown));
    assert_eq!(chooser.time_remaining(), None);
}

#[test]
fn test_hot_attach_primes_after_delay() {
    let host = MockHost::new("m2", 20.0).with_players(make_players(2));
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(MapChooserConfig::default(), POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.attach(true);

    assert_eq!(chooser.phase(), Phase::Idle);
    assert_eq!(chooser.host().pending(TimerTask::HotAttach).unwrap().1, secs(3));

    // The latch is already set, round starts do not prime
    chooser.on_round_start();
    assert_eq!(chooser.phase(), Phase::Idle);

    chooser.advance_time(secs(3));
    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(chooser.is_timer_armed(TimerTask::Countdown));
}

// ----------------------------------------------------------------------
// Early-vote gate
// ----------------------------------------------------------------------

#[test]
fn test_gate_locked_until_delay() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 4);

    chooser.on_command(PlayerId(1), "rtv");
    assert_eq!(chooser.host().replies_to(PlayerId(1)), vec![&Message::RtvNotAvailable]);
    assert_eq!(chooser.gate().count(), 0);

    chooser.advance_time(secs(180));
    assert!(chooser.gate().is_unlocked());
    // The first unlock of a session is silent
    assert!(!chooser.host().broadcasts.contains(&Message::RtvReopened));

    chooser.on_command(PlayerId(1), "rtv");
    assert_eq!(chooser.gate().count(), 1);
}

#[test]
fn test_rtv_disabled() {
    let config = MapChooserConfig {
        allow_rtv: false,
        ..instant_gate()
    };
    let mut chooser = primed(config, POOL, 4);

    chooser.on_command(PlayerId(1), "css_rtv");
    assert_eq!(chooser.host().replies_to(PlayerId(1)), vec![&Message::RtvNotAvailable]);
    assert_eq!(chooser.gate().count(), 0);
}

#[test]
fn test_rtv_counted_once_and_retract() {
    let mut chooser = primed(instant_gate(), POOL, 5);

    rtv(&mut chooser, &[1, 1]);
    assert_eq!(chooser.gate().count(), 1);
    assert_eq!(
        chooser.host().broadcasts,
        vec![Message::RtvProgress {
            player: "player1".to_string(),
            count: 1,
            required: 3,
        }]
    );

    chooser.on_command(PlayerId(1), "!unrtv");
    assert_eq!(chooser.gate().count(), 0);
    assert_eq!(
        chooser.host().broadcasts.last(),
        Some(&Message::RtvRetracted {
            player: "player1".to_string(),
            count: 0,
            required: 3,
        })
    );

    // Retracting again changes nothing
    chooser.on_command(PlayerId(1), "!unrtv");
    assert_eq!(chooser.host().broadcasts.len(), 2);

    rtv(&mut chooser, &[1]);
    assert_eq!(chooser.gate().count(), 1);
}

#[test]
fn test_rtv_threshold_starts_early_vote() {
    let mut chooser = primed(instant_gate(), POOL, 5);

    rtv(&mut chooser, &[1, 2]);
    assert_eq!(chooser.phase(), Phase::Gated);

    rtv(&mut chooser, &[3]);
    assert_eq!(chooser.phase(), Phase::VoteActive);
    assert!(chooser.gate().is_active());
    assert!(!chooser.is_timer_armed(TimerTask::Countdown));
    assert_eq!(chooser.host().pending(TimerTask::VoteDeadline).unwrap().1, secs(15));
    assert!(chooser.host().broadcasts.contains(&Message::RtvVoteStarting));

    let vote = chooser.vote_session().unwrap();
    assert!(vote.was_early_vote());
    assert_eq!(vote.options()[0], VoteOption::DontChange);
    assert!(!vote.options().contains(&VoteOption::Extend));

    // Every human player gets the ballot
    assert_eq!(chooser.host().menus.len(), 5);
    assert!(chooser
        .host()
        .menus
        .iter()
        .all(|(_, menu)| menu.kind == MenuKind::MapVote));

    // Requests after the threshold are not counted
    rtv(&mut chooser, &[4]);
    assert_eq!(chooser.gate().count(), 0);
}

#[test]
fn test_rtv_threshold_ignores_spectators_and_bots() {
    let players = vec![
        PlayerInfo::new(1, "a"),
        PlayerInfo::new(2, "b").with_team(Team::CounterTerrorist),
        PlayerInfo::new(3, "c").with_team(Team::Spectator),
        PlayerInfo::new(4, "d").with_team(Team::Unassigned),
        PlayerInfo::new(5, "bot").as_bot(),
    ];
    let config = MapChooserConfig {
        rtv_percent: 1.0,
        ..instant_gate()
    };

    let host = MockHost::new("m1", 20.0).with_players(players.clone());
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config.clone(), POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();
    rtv(&mut chooser, &[1]);
    assert!(matches!(
        chooser.host().broadcasts[0],
        Message::RtvProgress { required: 2, .. }
    ));

    let host = MockHost::new("m1", 20.0).with_players(players);
    let config = MapChooserConfig {
        ignore_spectators: false,
        ..config
    };
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, POOL),
        StdRng::seed_from_u64(1),
    );
    chooser.on_session_start("m1");
    chooser.on_round_start();
    rtv(&mut chooser, &[1]);
    assert!(matches!(
        chooser.host().broadcasts[0],
        Message::RtvProgress { required: 4, .. }
    ));
}

#[test]
fn test_early_vote_no_ballots_reopens_gate() {
    let config = MapChooserConfig {
        rtv_delay_minutes: 1.0,
        ..MapChooserConfig::default()
    };
    let mut chooser = primed(config, POOL, 5);

    chooser.advance_time(secs(60));
    rtv(&mut chooser, &[1, 2, 3]);
    assert_eq!(chooser.phase(), Phase::VoteActive);

    chooser.advance_time(secs(15));
    assert_eq!(chooser.phase(), Phase::Gated);
    assert_eq!(chooser.last_resolution(), Some(Resolution::Reopened));
    assert_eq!(chooser.next_map(), None);
    assert!(!chooser.gate().is_unlocked());
    assert_eq!(chooser.host().pending(TimerTask::GateUnlock).unwrap().1, secs(60));
    // Countdown resumes for the original time limit: 17:00 minus 1:15 elapsed
    assert_eq!(chooser.host().pending(TimerTask::Countdown).unwrap().1, secs(945));

    chooser.advance_time(secs(60));
    assert!(chooser.gate().is_unlocked());
    assert_eq!(chooser.host().broadcasts.last(), Some(&Message::RtvReopened));
}

#[test]
fn test_early_vote_dont_change_wins() {
    let mut chooser = primed(instant_gate(), POOL, 3);
    rtv(&mut chooser, &[1, 2]);
    assert_eq!(chooser.phase(), Phase::VoteActive);

    chooser.on_menu_choice(PlayerId(1), MenuKind::MapVote, 0);
    chooser.on_menu_choice(PlayerId(2), MenuKind::MapVote, 0);
    chooser.advance_time(secs(15));

    assert!(chooser.host().broadcasts.contains(&Message::MapNotChanged));
    assert_eq!(chooser.phase(), Phase::Gated);
    assert_eq!(chooser.last_resolution(), Some(Resolution::Reopened));
    assert_eq!(chooser.next_map(), None);
    // With no unlock delay the gate reopens at once
    assert!(chooser.gate().is_unlocked());
    assert_eq!(chooser.host().broadcasts.last(), Some(&Message::RtvReopened));
}

#[test]
fn test_early_vote_map_wins_switches_after_grace() {
    let mut chooser = primed(instant_gate(), POOL, 3);
    rtv(&mut chooser, &[1, 2]);

    let m3 = option_index(&chooser, "m3");
    chooser.vote(PlayerId(1), m3);
    chooser.advance_time(secs(15));

    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchNow));
    assert_eq!(chooser.next_map(), Some(&MapId::new("m3", false)));
    assert_eq!(chooser.host().pending(TimerTask::SwitchMap).unwrap().1, secs(5));
    assert!(chooser.host().level_changes.is_empty());

    chooser.advance_time(secs(5));
    assert_eq!(chooser.host().level_changes.len(), 1);
    assert_eq!(chooser.host().level_changes[0].command(), "changelevel m3");
}

#[test]
fn test_rtv_with_known_next_map_switches() {
    let mut chooser = primed(instant_gate(), POOL, 3);
    assert!(chooser.fire(TimerTask::Countdown));
    let m2 = option_index(&chooser, "m2");
    chooser.vote(PlayerId(1), m2);
    chooser.advance_time(secs(15));
    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchLater));
    assert!(chooser.is_timer_armed(TimerTask::RoundEnd));

    rtv(&mut chooser, &[1, 2]);

    assert_eq!(
        chooser.host().broadcasts.last(),
        Some(&Message::RtvSwitching {
            map: "m2".to_string()
        })
    );
    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchNow));
    assert!(!chooser.is_timer_armed(TimerTask::RoundEnd));
    assert!(chooser.vote_session().is_none());

    chooser.advance_time(secs(5));
    assert_eq!(chooser.host().level_changes[0].map, "m2");
}

// ----------------------------------------------------------------------
// Scheduled vote
// ----------------------------------------------------------------------

#[test]
fn test_scheduled_vote_offers_eligible_maps() {
    let config = MapChooserConfig {
        exclude_count: 0,
        include_count: 3,
        ..MapChooserConfig::default()
    };
    let mut chooser = primed(config, POOL, 2);

    chooser.advance_time(secs(17 * 60));
    assert_eq!(chooser.phase(), Phase::VoteActive);
    assert_eq!(ballot_maps(&chooser), set(&["m2", "m3", "m4"]));

    let options = chooser.vote_session().unwrap().options();
    assert_eq!(options.last(), Some(&VoteOption::Extend));
    assert!(!options.contains(&VoteOption::DontChange));
}

#[test]
fn test_scheduled_vote_winner_waits_for_match_end() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 3);
    assert!(chooser.fire(TimerTask::Countdown));

    let m3 = option_index(&chooser, "m3");
    chooser.vote(PlayerId(1), m3);
    chooser.vote(PlayerId(2), m3);
    chooser.advance_time(secs(15));

    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchLater));
    assert_eq!(chooser.next_map(), Some(&MapId::new("m3", false)));
    assert!(chooser.host().broadcasts.contains(&Message::NextMapChosen {
        map: "m3".to_string()
    }));
    assert_eq!(chooser.host().pending(TimerTask::RoundEnd).unwrap().1, secs(165));

    chooser.advance_time(secs(165));
    assert_eq!(
        chooser.host().round_ends,
        vec![(secs(5), RoundEndReason::RoundDraw)]
    );
    assert!(chooser.host().level_changes.is_empty());

    chooser.on_match_end();
    assert_eq!(chooser.host().level_changes.len(), 1);
    assert_eq!(chooser.host().level_changes[0].map, "m3");
}

#[test]
fn test_enforce_time_limit_off() {
    let config = MapChooserConfig {
        enforce_time_limit: false,
        ..MapChooserConfig::default()
    };
    let mut chooser = primed(config, POOL, 3);
    chooser.fire(TimerTask::Countdown);
    chooser.vote(PlayerId(1), option_index(&chooser, "m4"));
    chooser.advance_time(secs(15));

    assert_eq!(chooser.next_map().map(MapId::name), Some("m4"));
    assert!(!chooser.is_timer_armed(TimerTask::RoundEnd));
}

#[test]
fn test_scheduled_vote_no_ballots_picks_random_map() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 3);
    chooser.fire(TimerTask::Countdown);
    chooser.advance_time(secs(15));

    let next = chooser.next_map().expect("a map should be picked").name().to_string();
    assert!(set(&["m2", "m3", "m4"]).contains(&next));
    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchLater));
    assert!(chooser.is_timer_armed(TimerTask::RoundEnd));
}

#[test]
fn test_no_ballots_with_empty_pool() {
    let mut chooser = primed(MapChooserConfig::default(), "m1\n", 3);
    chooser.fire(TimerTask::Countdown);
    assert_eq!(ballot_maps(&chooser), HashSet::new());

    chooser.advance_time(secs(15));
    assert_eq!(chooser.next_map(), None);
    assert_eq!(chooser.phase(), Phase::Resolved(Resolution::SwitchLater));

    // Switching without a next map is a no-op
    chooser.on_match_end();
    assert!(chooser.host().level_changes.is_empty());
}

#[test]
fn test_tie_goes_to_first_to_reach_count() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 4);
    chooser.fire(TimerTask::Countdown);

    let m2 = option_index(&chooser, "m2");
    let m3 = option_index(&chooser, "m3");
    chooser.vote(PlayerId(1), m3);
    chooser.vote(PlayerId(2), m2);
    chooser.vote(PlayerId(3), m2);
    chooser.vote(PlayerId(4), m3);
    chooser.advance_time(secs(15));

    assert_eq!(chooser.next_map().map(MapId::name), Some("m2"));
}

#[test]
fn test_vote_change_counts_once() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.fire(TimerTask::Countdown);
    chooser.host_mut().clear_messages();

    let m2 = option_index(&chooser, "m2");
    let m4 = option_index(&chooser, "m4");
    chooser.vote(PlayerId(1), m2);
    chooser.vote(PlayerId(1), m4);
    chooser.vote(PlayerId(1), m4);

    let vote = chooser.vote_session().unwrap();
    assert_eq!(vote.total_ballots(), 1);
    assert_eq!(vote.tally().iter().map(|(_, count)| count).sum::<usize>(), 1);
    assert_eq!(
        chooser.host().broadcasts,
        vec![
            Message::VoteCast {
                player: "player1".to_string(),
                option: "m2".to_string(),
            },
            Message::VoteCast {
                player: "player1".to_string(),
                option: "m4".to_string(),
            },
        ]
    );
}

#[test]
fn test_ballot_without_vote() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.on_menu_choice(PlayerId(2), MenuKind::MapVote, 0);
    assert_eq!(chooser.host().replies_to(PlayerId(2)), vec![&Message::NoVoteActive]);
}

// ----------------------------------------------------------------------
// Extend
// ----------------------------------------------------------------------

#[test]
fn test_extend_wins() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.fire(TimerTask::Countdown);

    let extend = option_index(&chooser, "Extend");
    chooser.vote(PlayerId(1), extend);
    chooser.advance_time(secs(15));

    assert_eq!(chooser.host().time_limit, Some(30.0));
    assert_eq!(chooser.extends_used(), 1);
    assert_eq!(chooser.phase(), Phase::Gated);
    assert_eq!(chooser.last_resolution(), Some(Resolution::Extended));
    assert!(chooser
        .host()
        .broadcasts
        .contains(&Message::MapExtended { minutes: 10.0 }));
    // New vote at 27:00, clock at 17:15
    assert_eq!(chooser.host().pending(TimerTask::Countdown).unwrap().1, secs(585));
    assert!(chooser.is_timer_armed(TimerTask::GateUnlock));
}

#[test]
fn test_extend_not_offered_at_limit() {
    let config = MapChooserConfig {
        extend_limit: 1,
        ..MapChooserConfig::default()
    };
    let mut chooser = primed(config, POOL, 2);

    chooser.fire(TimerTask::Countdown);
    let extend = option_index(&chooser, "Extend");
    chooser.vote(PlayerId(1), extend);
    chooser.advance_time(secs(15));
    assert_eq!(chooser.extends_used(), 1);

    chooser.fire(TimerTask::Countdown);
    let options = chooser.vote_session().unwrap().options();
    assert!(!options.contains(&VoteOption::Extend));
}

#[test]
fn test_extend_write_failure() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.host_mut().reject_time_limit_writes = true;
    chooser.fire(TimerTask::Countdown);

    let extend = option_index(&chooser, "Extend");
    chooser.vote(PlayerId(1), extend);
    chooser.advance_time(secs(15));

    assert_eq!(chooser.extends_used(), 0);
    assert_eq!(chooser.host().time_limit, Some(20.0));
    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(!chooser.is_timer_armed(TimerTask::Countdown));
}

// ----------------------------------------------------------------------
// Nominations
// ----------------------------------------------------------------------

#[test]
fn test_nominate_by_name() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 3);

    chooser.on_command(PlayerId(1), "!nominate M3");
    assert_eq!(
        chooser.host().broadcasts.last(),
        Some(&Message::NominationConfirmed {
            player: "player1".to_string(),
            map: "m3".to_string(),
        })
    );

    chooser.on_command(PlayerId(2), "!nominate m3");
    chooser.on_command(PlayerId(2), "!nominate m1");
    assert_eq!(
        chooser.host().replies_to(PlayerId(2)),
        vec![
            &Message::NominateNominated {
                map: "m3".to_string()
            },
            &Message::NominateCurrentMap {
                map: "m1".to_string()
            },
        ]
    );
    assert_eq!(chooser.nominations().len(), 1);
}

#[test]
fn test_nominate_partial_names() {
    let maps = "de_dust\nde_dust2\nde_nuke\ncs_office\n";
    let mut chooser = primed(MapChooserConfig::default(), maps, 1);

    chooser.on_command(PlayerId(1), "nominate dust");
    chooser.on_command(PlayerId(1), "nominate vertigo");
    assert_eq!(
        chooser.host().replies_to(PlayerId(1)),
        vec![
            &Message::NominationAmbiguous {
                query: "dust".to_string()
            },
            &Message::NominationNoMatch {
                query: "vertigo".to_string()
            },
        ]
    );

    chooser.on_command(PlayerId(1), "nominate de_dust");
    assert_eq!(
        chooser.nominations().nomination_of(PlayerId(1)),
        Some(&MapId::new("de_dust", false))
    );

    chooser.on_command(PlayerId(1), "nominate offi");
    assert_eq!(
        chooser.nominations().nomination_of(PlayerId(1)),
        Some(&MapId::new("cs_office", false))
    );
    assert_eq!(chooser.nominations().len(), 1);
}

#[test]
fn test_nominated_map_makes_the_ballot() {
    let config = MapChooserConfig {
        include_count: 1,
        ..MapChooserConfig::default()
    };
    let mut chooser = primed(config, POOL, 2);
    chooser.nominate(PlayerId(2), Some("m4"));

    chooser.fire(TimerTask::Countdown);
    assert_eq!(ballot_maps(&chooser), set(&["m4"]));
}

#[test]
fn test_nominations_closed_during_vote() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.fire(TimerTask::Countdown);

    chooser.on_command(PlayerId(1), "!nominate m2");
    chooser.on_command(PlayerId(1), "!nominate");
    assert_eq!(
        chooser.host().replies_to(PlayerId(1)),
        vec![&Message::NominationsClosed, &Message::NominationsClosed]
    );
}

#[test]
fn test_nominations_cleared_on_resolution() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.nominate(PlayerId(1), Some("m2"));
    chooser.fire(TimerTask::Countdown);
    chooser.advance_time(secs(15));

    assert!(chooser.nominations().is_empty());
}

#[test]
fn test_nomination_menu() {
    let config = MapChooserConfig {
        exclude_count: 1,
        ..MapChooserConfig::default()
    };
    let host = MockHost::new("m2", 20.0).with_players(make_players(2));
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, POOL),
        StdRng::seed_from_u64(3),
    );
    chooser.on_session_start("m2");
    chooser.on_session_end();
    chooser.on_session_start("m1");
    chooser.on_round_start();

    chooser.nominate(PlayerId(1), Some("m3"));
    chooser.on_command(PlayerId(2), "css_nominate");

    let (to, menu) = chooser.host().menus.last().unwrap().clone();
    assert_eq!(to, PlayerId(2));
    assert_eq!(menu.kind, MenuKind::Nominate);
    assert_eq!(menu.title, Message::NominateHeader);
    let entries: Vec<(Message, bool)> = menu
        .entries
        .iter()
        .map(|entry| (entry.label.clone(), entry.enabled))
        .collect();
    assert_eq!(
        entries,
        vec![
            (Message::NominateCurrentMap { map: "m1".to_string() }, false),
            (Message::NominateRecent { map: "m2".to_string() }, false),
            (Message::NominateNominated { map: "m3".to_string() }, false),
            (Message::Label("m4".to_string()), true),
        ]
    );

    chooser.on_menu_choice(PlayerId(2), MenuKind::Nominate, 3);
    assert_eq!(
        chooser.nominations().nomination_of(PlayerId(2)),
        Some(&MapId::new("m4", false))
    );
}

// ----------------------------------------------------------------------
// Session lifecycle
// ----------------------------------------------------------------------

#[test]
fn test_history_trimmed_oldest_first() {
    let config = MapChooserConfig {
        exclude_count: 2,
        ..MapChooserConfig::default()
    };
    let host = MockHost::new("m1", 20.0);
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, POOL),
        StdRng::seed_from_u64(3),
    );

    for map in ["m1", "m2", "m3", "m4"] {
        chooser.on_session_start(map);
        assert!(chooser.history().len() <= 2);
        chooser.on_session_end();
    }
    chooser.on_session_start("m1");

    let history: Vec<&str> = chooser.history().iter().map(MapId::name).collect();
    assert_eq!(history, vec!["m3", "m4"]);
}

#[test]
fn test_history_keeps_recent_maps_off_the_ballot() {
    let config = MapChooserConfig {
        exclude_count: 1,
        ..MapChooserConfig::default()
    };
    let host = MockHost::new("m1", 20.0).with_players(make_players(2));
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, POOL),
        StdRng::seed_from_u64(3),
    );
    chooser.on_session_start("m3");
    chooser.on_session_end();
    chooser.on_session_start("m1");
    chooser.on_round_start();

    chooser.fire(TimerTask::Countdown);
    assert_eq!(ballot_maps(&chooser), set(&["m2", "m4"]));
}

#[test]
fn test_session_end_clears_state() {
    let mut chooser = primed(instant_gate(), POOL, 5);
    chooser.nominate(PlayerId(1), Some("m2"));
    rtv(&mut chooser, &[1]);

    chooser.on_session_end();

    assert_eq!(chooser.phase(), Phase::Idle);
    assert_eq!(chooser.host().pending_count(), 0);
    assert!(chooser.nominations().is_empty());
    assert_eq!(chooser.gate().count(), 0);
    assert!(chooser.pool().is_empty());
    assert!(chooser.history().contains("m1"));
}

#[test]
fn test_history_keeps_hosted_flag() {
    let host = MockHost::new("surf_mesa", 20.0);
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(MapChooserConfig::default(), "ws:surf_mesa\nm2\n"),
        StdRng::seed_from_u64(3),
    );
    chooser.on_session_start("surf_mesa");
    chooser.on_session_end();

    assert!(chooser.history().iter().next().unwrap().is_hosted());
}

#[test]
fn test_config_failure_keeps_previous() {
    let config = MapChooserConfig {
        include_count: 2,
        ..MapChooserConfig::default()
    };
    let host = MockHost::new("m1", 20.0);
    let mut chooser = MapChooser::with_rng(
        host,
        StaticLoader::new(config, POOL),
        StdRng::seed_from_u64(3),
    );
    chooser.on_session_start("m1");
    assert_eq!(chooser.config().include_count, 2);

    chooser.loader_mut().config = None;
    chooser.on_session_end();
    chooser.on_session_start("m2");
    assert_eq!(chooser.config().include_count, 2);

    chooser.loader_mut().config = Some(MapChooserConfig {
        rtv_percent: 2.0,
        include_count: 4,
        ..MapChooserConfig::default()
    });
    chooser.on_session_end();
    chooser.on_session_start("m3");
    assert_eq!(chooser.config().include_count, 2);
}

#[test]
fn test_pool_failure_runs_empty() {
    let host = MockHost::new("m1", 20.0).with_players(make_players(1));
    let mut loader = StaticLoader::new(MapChooserConfig::default(), POOL);
    loader.maps = None;
    let mut chooser = MapChooser::with_rng(host, loader, StdRng::seed_from_u64(3));
    chooser.on_session_start("m1");
    chooser.on_round_start();

    assert!(chooser.pool().is_empty());
    chooser.fire(TimerTask::Countdown);
    assert_eq!(
        chooser.vote_session().unwrap().options(),
        &[VoteOption::Extend]
    );
}

// ----------------------------------------------------------------------
// Map switch
// ----------------------------------------------------------------------

#[test]
fn test_match_end_with_restart_delay() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    chooser.host_mut().restart_delay = Some(secs(10));
    chooser.fire(TimerTask::Countdown);
    chooser.vote(PlayerId(1), option_index(&chooser, "m2"));
    chooser.advance_time(secs(15));

    chooser.on_match_end();
    assert_eq!(
        chooser.host().pending(TimerTask::SwitchMap).unwrap().1,
        Duration::from_millis(9500)
    );
    assert!(chooser.host().level_changes.is_empty());

    chooser.advance_time(secs(10));
    assert_eq!(chooser.host().level_changes.len(), 1);

    // The level change is issued at most once
    chooser.host_mut().restart_delay = None;
    chooser.on_match_end();
    assert_eq!(chooser.host().level_changes.len(), 1);
}

#[test]
fn test_hosted_map_uses_hosted_command() {
    let mut chooser = primed(MapChooserConfig::default(), "m1\nws:surf_mesa\n", 2);
    chooser.fire(TimerTask::Countdown);
    chooser.vote(PlayerId(1), option_index(&chooser, "surf_mesa"));
    chooser.advance_time(secs(15));
    chooser.on_match_end();

    let change = &chooser.host().level_changes[0];
    assert!(change.hosted);
    assert_eq!(change.command(), "ds_workshop_changelevel surf_mesa");
}

#[test]
fn test_stale_timer_ignored() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);

    chooser.on_timer(TimerId(999), TimerTask::Countdown);
    assert_eq!(chooser.phase(), Phase::Gated);
    assert!(chooser.vote_session().is_none());
}

// ----------------------------------------------------------------------
// Queries
// ----------------------------------------------------------------------

#[test]
fn test_timeleft_and_nextmap() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);

    chooser.on_command(PlayerId(1), "!timeleft");
    chooser.advance_time(secs(65));
    chooser.on_command(PlayerId(1), "timeleft");
    chooser.on_command(PlayerId(1), "!nextmap");
    assert_eq!(
        chooser.host().replies_to(PlayerId(1)),
        vec![
            &Message::TimeLeft {
                time: "20:00.".to_string()
            },
            &Message::TimeLeft {
                time: "18:55.".to_string()
            },
            &Message::NextMapUnknown,
        ]
    );

    chooser.fire(TimerTask::Countdown);
    chooser.vote(PlayerId(1), option_index(&chooser, "m4"));
    chooser.advance_time(secs(15));
    chooser.on_command(PlayerId(2), "css_nextmap");
    assert_eq!(
        chooser.host().replies_to(PlayerId(2)),
        vec![&Message::NextMap {
            map: "m4".to_string()
        }]
    );
}

#[test]
fn test_unknown_command_not_handled() {
    let mut chooser = primed(MapChooserConfig::default(), POOL, 2);
    assert!(!chooser.on_command(PlayerId(1), "gg"));
    assert!(chooser.on_command(PlayerId(1), "!rtv"));
}
