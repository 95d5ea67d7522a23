use floating_counter::widget::render::Stroke;
use floating_counter::widget::{render, Color, CounterModel, Layout, Primitive};

fn kind(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::RoundedRect { .. } => "rrect",
        Primitive::Circle { .. } => "circle",
        Primitive::Line { .. } => "line",
        Primitive::Polyline { .. } => "polyline",
        Primitive::Text { .. } => "text",
    }
}

#[test]
fn draw_order_is_fixed() {
    let out = render(&CounterModel::new(), &Layout::default());
    let kinds: Vec<&str> = out.iter().map(kind).collect();
    assert_eq!(
        kinds,
        vec![
            // frame fill, frame border, display, number
            "rrect", "rrect", "rrect", "text",
            // five dots with the ring after the active one
            "circle", "circle", "circle", "circle", "circle", "circle",
            // increment
            "circle", "line", "line",
            // decrement
            "circle", "line",
            // reset
            "circle", "polyline", "polyline",
            // close
            "circle", "line", "line",
        ]
    );
}

#[test]
fn ring_follows_active_dot() {
    let layout = Layout::default();
    let mut model = CounterModel::new();
    model.select_tab(2);
    let out = render(&model, &layout);

    // dots 0, 1, 2 then the ring
    match &out[7] {
        Primitive::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke),
        } => {
            assert_eq!(*center, layout.tabs.center(2).unwrap());
            assert_eq!(*radius, layout.tabs.ring_radius);
            assert_eq!(*stroke, Stroke::new(1.5, Color::WHITE));
        }
        other => panic!("expected ring, got {other:?}"),
    }
}

#[test]
fn buttons_use_layout_colors_and_radii() {
    let layout = Layout::default();
    let out = render(&CounterModel::new(), &layout);
    let buttons: Vec<(f32, Option<Color>)> = out
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle {
                radius,
                fill,
                stroke: Some(_),
                ..
            } if *radius > layout.tabs.ring_radius => Some((*radius, *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(
        buttons,
        vec![
            (14.0, Some(Color::hex(0x63BAAA))),
            (14.0, Some(Color::hex(0x8B275D))),
            (11.0, Some(Color::BLACK)),
            (11.0, Some(Color::BLACK)),
        ]
    );
}

#[test]
fn number_is_centered_in_display() {
    let layout = Layout::default();
    let out = render(&CounterModel::new(), &layout);
    match &out[3] {
        Primitive::Text {
            rect, text, color, ..
        } => {
            assert_eq!(*rect, layout.display.rect);
            assert_eq!(text, "00");
            assert_eq!(*color, Color::BLACK);
        }
        other => panic!("expected text, got {other:?}"),
    }
}
