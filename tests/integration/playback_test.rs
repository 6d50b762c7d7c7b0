//! End-to-end playback over a caption track loaded from disk.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tempo::captions::{Caption, CaptionTrack};
use tempo::display::Renderer;
use tempo::playback::{Player, PlayerOptions, TimeWindow};

use super::helpers::fixture;

#[derive(Default)]
struct ProbeState {
    frames: Vec<u32>,
    captions: Vec<String>,
    clocks: Vec<String>,
}

#[derive(Clone, Default)]
struct Probe(Rc<RefCell<ProbeState>>);

impl Renderer for Probe {
    fn frame(&mut self, frame: u32) {
        self.0.borrow_mut().frames.push(frame);
    }
    fn clock(&mut self, text: &str) {
        self.0.borrow_mut().clocks.push(text.to_string());
    }
    fn caption(&mut self, caption: &Caption) {
        self.0.borrow_mut().captions.push(caption.text.clone());
    }
}

fn fixture_player(options: PlayerOptions) -> (Player, Probe) {
    let track = CaptionTrack::load(fixture("debate_excerpt.json")).unwrap();
    let (start, end) = track.bounds().unwrap();
    let window = TimeWindow::new(start, end).unwrap();

    let probe = Probe::default();
    let mut player = Player::new(window, options, Box::new(probe.clone())).unwrap();
    player.set_captions(track);
    (player, probe)
}

#[test]
fn plays_a_full_cycle_over_the_fixture() {
    // The excerpt spans 292 000 ms; 20 steps divide it exactly (14 600 ms).
    let options = PlayerOptions {
        steps: 20,
        fps: 25.0,
        clock: true,
        captions: true,
        ..PlayerOptions::default()
    };
    let (mut player, probe) = fixture_player(options);

    player.play();
    let generation = player.generation();
    for _ in 0..21 {
        player.tick(generation).unwrap();
    }

    let state = probe.0.borrow();
    let expected: Vec<u32> = (1..=20).chain(std::iter::once(0)).collect();
    assert_eq!(state.frames, expected);

    // The cursor sweeps through the first three Lehrer records in order,
    // then crosses the transcript gap where nothing is pushed. The later
    // records are shorter than one step and fall between cursor positions.
    assert_eq!(state.captions.len(), 3);
    assert!(state.captions[0].contains("Magness Arena"));
    assert!(state.captions[1].contains("Commission on Presidential Debates"));
    assert!(state.captions[2].contains("domestic issues"));

    // A clock string accompanies every tick.
    assert_eq!(state.clocks.len(), 21);
    assert!(state.clocks[0].starts_with("Thu Oct 04 2012"));
}

#[test]
fn hold_delays_only_the_prewrap_tick_on_uneven_steps() {
    // 292 000 ms / 23 steps floors to 12 695 ms, leaving 15 ms of slack:
    // tick 24 overshoots the end and tick 25 wraps.
    let options = PlayerOptions {
        steps: 23,
        fps: 25.0,
        hold: Duration::from_millis(2500),
        ..PlayerOptions::default()
    };
    let interval = options.interval();
    let (mut player, _) = fixture_player(options);

    player.play();
    let generation = player.generation();
    let delays: Vec<Duration> = (0..25).map(|_| player.tick(generation).unwrap()).collect();

    for (i, delay) in delays.iter().enumerate() {
        if i == 23 {
            assert_eq!(*delay, interval + Duration::from_millis(2500));
        } else {
            assert_eq!(*delay, interval);
        }
    }
    assert_eq!(player.frame(), 0);
}

#[test]
fn stopping_mid_cycle_freezes_the_frame() {
    let options = PlayerOptions {
        steps: 20,
        ..PlayerOptions::default()
    };
    let (mut player, probe) = fixture_player(options);

    player.play();
    let generation = player.generation();
    for _ in 0..5 {
        player.tick(generation).unwrap();
    }
    player.stop();

    for _ in 0..10 {
        assert!(player.tick(generation).is_none());
    }
    assert_eq!(player.frame(), 5);
    assert_eq!(probe.0.borrow().frames.len(), 5);
}
