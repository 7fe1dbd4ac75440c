use std::io;
use std::time::Duration;

use frog_crossing::entities::{Event, GameState};
use frog_crossing::events::Message;
use frog_crossing::{Error, Session};

fn ignore(_: &GameState) -> io::Result<()> {
    Ok(())
}

#[test]
fn run_requires_start() {
    let mut session = Session::new(None);
    let result = session.run(&mut ignore);
    assert!(matches!(result, Err(Error::NotStarted)));
}

#[test]
fn start_only_once() {
    let mut session = Session::new(None);
    session.start().unwrap();
    assert!(matches!(session.start(), Err(Error::AlreadyStarted)));
}

#[test]
fn every_event_reaches_the_sink_in_order() {
    let mut session = Session::new(None);
    let handle = session.handle().unwrap();
    session.start().unwrap();

    assert!(handle.send(Event::Move { dx: 0.0, dy: -50.0 }));
    assert!(handle.send(Event::Tick { elapsed: 1 }));
    assert!(handle.send(Event::Tick { elapsed: 2 }));
    assert!(handle.send(Message::Quit));
    assert!(handle.send(Event::Tick { elapsed: 3 })); // after Quit, never folded

    let mut seen: Vec<GameState> = Vec::new();
    let last = session
        .run(&mut |s: &GameState| -> io::Result<()> {
            seen.push(s.clone());
            Ok(())
        })
        .unwrap();

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].player.pos.y, 500.0);
    assert_eq!(seen[1].score, 1);
    assert_eq!(seen[2].time, 2);
    assert_eq!(&last, seen.last().unwrap());
    session.stop().unwrap();
}

#[test]
fn stream_cannot_be_run_twice() {
    let mut session = Session::new(None);
    session.start().unwrap();
    session.handle().unwrap().send(Message::Quit);
    session.run(&mut ignore).unwrap();

    assert!(matches!(session.run(&mut ignore), Err(Error::Consumed)));
    assert!(matches!(session.handle(), Err(Error::Consumed)));
}

#[test]
fn run_ends_when_all_sources_hang_up() {
    let mut session = Session::new(None);
    session
        .attach_source("burst", |handle, _stop| {
            for elapsed in 0..4 {
                handle.send(Event::Tick { elapsed });
            }
        })
        .unwrap();
    session.start().unwrap();

    let mut count = 0;
    let last = session
        .run(&mut |_: &GameState| -> io::Result<()> {
            count += 1;
            Ok(())
        })
        .unwrap();
    assert_eq!(count, 4);
    assert_eq!(last.time, 3);
    session.stop().unwrap();
}

#[test]
fn sink_failures_do_not_stop_the_fold() {
    let mut session = Session::new(None);
    let handle = session.handle().unwrap();
    session.start().unwrap();
    for elapsed in 0..3 {
        handle.send(Event::Tick { elapsed });
    }
    handle.send(Message::Quit);

    let mut calls = 0;
    let last = session
        .run(&mut |_: &GameState| -> io::Result<()> {
            calls += 1;
            Err(io::Error::new(io::ErrorKind::Other, "display gone"))
        })
        .unwrap();
    assert_eq!(calls, 3);
    assert_eq!(last.time, 2);
}

#[test]
fn clock_ticks_count_up_from_zero() {
    let mut session = Session::new(Some(Duration::from_millis(1)));
    let handle = session.handle().unwrap();
    session.start().unwrap();

    let mut times = Vec::new();
    session
        .run(&mut |s: &GameState| -> io::Result<()> {
            times.push(s.time);
            if times.len() == 5 {
                handle.send(Message::Quit);
            }
            Ok(())
        })
        .unwrap();
    session.stop().unwrap();

    // Ticks queued ahead of the Quit are folded in too.
    assert!(times.len() >= 5);
    assert_eq!(times[..5], [0, 1, 2, 3, 4]);
    assert!(times.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn panicking_source_is_reported_on_stop() {
    let mut session = Session::new(None);
    session
        .attach_source("faulty", |_handle, _stop| panic!("source blew up"))
        .unwrap();
    session.start().unwrap();
    session.run(&mut ignore).unwrap();

    let stopped = session.stop();
    assert!(matches!(stopped, Err(Error::SourcePanicked("faulty"))));
}
