use std::time::Duration;

use tokio::time::sleep;

use super::*;
use crate::{config::CarouselConfig, surface::MemorySurface};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn running(slides: usize, config: CarouselConfig) -> (CarouselHandle<MemorySurface>, MemorySurface) {
    let surface = MemorySurface::new(slides);
    let carousel = Carousel::mount(config, Some(surface.clone())).expect("mounted");
    (spawn(carousel), surface)
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_on_each_interval() {
    let (handle, surface) = running(3, CarouselConfig::about());

    sleep(ms(3999)).await;
    assert_eq!(handle.current_index(), 0);
    sleep(ms(2)).await;
    assert_eq!(handle.current_index(), 1);
    sleep(ms(4000)).await;
    assert_eq!(handle.current_index(), 2);
    sleep(ms(4000)).await;
    assert_eq!(handle.current_index(), 0);
    assert_eq!(surface.snapshot().active_dots(), vec![0]);
}

#[tokio::test(start_paused = true)]
async fn manual_click_restarts_the_interval() {
    let (handle, _surface) = running(4, CarouselConfig::project());

    sleep(ms(4500)).await;
    handle.send(Intent::Next).expect("send");
    sleep(ms(1)).await;
    assert_eq!(handle.current_index(), 1);

    // Without the reset this tick would have come at 5000 ms.
    sleep(ms(4998)).await;
    assert_eq!(handle.current_index(), 1);
    sleep(ms(2)).await;
    assert_eq!(handle.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn hover_pauses_and_leave_gives_a_fresh_interval() {
    let (handle, _surface) = running(3, CarouselConfig::project());

    sleep(ms(4000)).await;
    handle.send(Intent::PointerEnter).expect("send");
    sleep(ms(20_000)).await;
    assert_eq!(handle.current_index(), 0);

    handle.send(Intent::PointerLeave).expect("send");
    sleep(ms(1)).await;
    assert_eq!(handle.current_index(), 0);
    sleep(ms(4998)).await;
    assert_eq!(handle.current_index(), 0);
    sleep(ms(2)).await;
    assert_eq!(handle.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn instances_run_independently() {
    let (project, _) = running(3, CarouselConfig::project());
    let (about, _) = running(3, CarouselConfig::about());

    sleep(ms(4001)).await;
    assert_eq!(project.current_index(), 0);
    assert_eq!(about.current_index(), 1);

    project.send(Intent::Dot(2)).expect("send");
    sleep(ms(1)).await;
    assert_eq!(project.current_index(), 2);
    assert_eq!(about.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn destroy_stops_autoplay() {
    let (handle, surface) = running(3, CarouselConfig::project());
    let mut index = handle.subscribe();

    let returned = handle.destroy().await.expect("destroy");
    sleep(ms(60_000)).await;
    assert_eq!(returned.snapshot().active_dots(), vec![0]);
    assert_eq!(surface.snapshot().track_offset_percent, 0);
    assert!(index.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn swipe_gestures_reach_the_task() {
    let (handle, _surface) = running(3, CarouselConfig::about());

    handle.send(Intent::TouchStart { x: 10.0 }).expect("send");
    handle.send(Intent::TouchEnd { x: 200.0 }).expect("send");
    sleep(ms(1)).await;
    assert_eq!(handle.current_index(), 2);
}
