use super::*;

#[test]
fn script_parses_every_step_kind() {
    let steps = parse_script("wait:5000, next,prev ,dot:2,hover,leave,swipe:300:120").expect("parse");
    assert_eq!(
        steps,
        vec![
            Step::Wait(Duration::from_millis(5000)),
            Step::Send(Intent::Next),
            Step::Send(Intent::Prev),
            Step::Send(Intent::Dot(2)),
            Step::Send(Intent::PointerEnter),
            Step::Send(Intent::PointerLeave),
            Step::Swipe {
                start: 300.0,
                end: 120.0
            },
        ]
    );
}

#[test]
fn script_rejects_unknown_or_incomplete_steps() {
    assert!(parse_script("jump").is_err());
    assert!(parse_script("dot").is_err());
    assert!(parse_script("wait:soon").is_err());
    assert!(parse_script("next:3").is_err());
}

#[test]
fn script_arguments_must_be_exact() {
    assert!(parse_script("dot:-1").is_err());
    assert!(parse_script("dot:1.9").is_err());
    assert!(parse_script("wait:1e12").is_err());
    assert!(parse_script("wait:-5").is_err());
    assert!(parse_script("wait:3600001").is_err());
    assert!(parse_script("swipe:NaN:100").is_err());
    assert_eq!(
        parse_script("wait:3600000,dot:3").expect("parse"),
        vec![
            Step::Wait(Duration::from_millis(3_600_000)),
            Step::Send(Intent::Dot(3)),
        ]
    );
}

#[test]
fn simulation_follows_autoplay_and_manual_steps() {
    let steps = parse_script("wait:10000,next,wait:4999,swipe:100:300").expect("parse");
    let log = simulate(CarouselConfig::project(), 4, &steps).expect("simulate");

    assert_eq!(log[0].trim(), "5000ms autoplay -> slide 1");
    assert_eq!(log[1].trim(), "10000ms autoplay -> slide 2");
    assert_eq!(log[2].trim(), "10000ms Next -> slide 3");
    assert_eq!(log[3].trim(), "14999ms swipe 100->300 -> slide 2");
    assert_eq!(log.last().map(String::as_str), Some("track offset -200%, active dots [2]"));
}

#[test]
fn simulation_needs_slides() {
    assert!(simulate(CarouselConfig::about(), 0, &[]).is_err());
}
