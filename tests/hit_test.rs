use floating_counter::widget::counters::TAB_COUNT;
use floating_counter::widget::{classify, Layout, Point, Target};

#[test]
fn tab_centers_select_their_tab() {
    let layout = Layout::default();
    for tab in 0..TAB_COUNT {
        let center = layout.tabs.center(tab).unwrap();
        assert_eq!(classify(center, &layout), Target::Tab(tab));
    }
    assert_eq!(classify(Point::new(62.0, 16.0), &layout), Target::Tab(2));
}

#[test]
fn just_outside_tab_radius_is_background() {
    let layout = Layout::default();
    let center = layout.tabs.center(0).unwrap();
    assert_eq!(classify(center.offset(0.0, 5.01), &layout), Target::Background);
    assert_eq!(classify(center.offset(0.0, 5.0), &layout), Target::Tab(0));
}

#[test]
fn button_centers_map_to_buttons() {
    let layout = Layout::default();
    assert_eq!(classify(layout.increment.center, &layout), Target::Increment);
    assert_eq!(classify(layout.decrement.center, &layout), Target::Decrement);
    assert_eq!(classify(layout.close.center, &layout), Target::Close);
    assert_eq!(classify(layout.reset.center, &layout), Target::Reset);
}

#[test]
fn hit_radius_extends_past_drawn_circle() {
    let layout = Layout::default();
    // One unit outside the drawn increment circle still counts.
    let edge = layout.increment.center.offset(-14.5, 0.0);
    assert_eq!(classify(edge, &layout), Target::Increment);
    let beyond = layout.increment.center.offset(-15.5, 0.0);
    assert_eq!(classify(beyond, &layout), Target::Background);

    let close_edge = layout.close.center.offset(0.0, 11.5);
    assert_eq!(classify(close_edge, &layout), Target::Close);
}

#[test]
fn transparent_corners_and_display_are_background() {
    let layout = Layout::default();
    assert_eq!(classify(Point::new(1.0, 1.0), &layout), Target::Background);
    assert_eq!(classify(layout.display.rect.center(), &layout), Target::Background);
}
