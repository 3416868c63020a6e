//! End-to-end paint scenarios through the public API.

use boxpaint::background::{BackgroundPaintInput, BackgroundPainter, BoxShadow};
use boxpaint::border::{BorderPaintInput, BorderPainter, BorderStyle, Sides};
use boxpaint::compare::{diff, Tolerance};
use boxpaint::coords::{Rect, Vec2};
use boxpaint::decoration::{DecorationLine, DecorationLines, DecorationStyle};
use boxpaint::logging::{init_logging, LoggingConfig};
use boxpaint::paint::{Color, PaintFlags, PaintStyle, Shadow, Visibility};
use boxpaint::scene::{DisplayList, DrawCmd, StateIds};
use boxpaint::text::{
    EmphasisMark, FontDescriptor, GlyphRun, SymbolMarker, SymbolMarkerKind, TextPaintInput, TextPainter,
};

const STATE: StateIds = StateIds::new(7, 8, 9);

fn border(widths: Sides<f32>) -> BorderPaintInput {
    BorderPaintInput {
        geometry: Rect::new(0.0, 0.0, 100.0, 40.0),
        widths,
        colors: Sides::all(Color::black()),
        styles: Some(Sides::all(BorderStyle::Solid)),
        state: STATE,
        ..Default::default()
    }
}

fn text(decorations: Vec<DecorationLine>) -> TextPaintInput {
    let mut input = TextPaintInput {
        bbox: Rect::new(0.0, 30.0, 80.0, 25.0),
        decorations,
        state: STATE,
        ..Default::default()
    };
    input.fragment.text = "abc".into();
    input.fragment.to = 3;
    input.fragment.shape.runs = vec![GlyphRun {
        font: FontDescriptor { size: 20.0, ascent: 18.0, descent: 5.0, ..Default::default() },
        glyphs: vec![68, 69, 70],
        positions: vec![0.0, 11.0, 22.0],
        ..Default::default()
    }];
    input.style.fill_color = Color::black();
    input
}

fn assert_same(expected: &DisplayList, actual: &DisplayList, tolerance: Tolerance) {
    let diffs = diff(expected, actual, tolerance);
    assert!(diffs.is_empty(), "unexpected differences: {diffs:#?}");
}

fn kinds(list: &DisplayList) -> Vec<&'static str> {
    list.cmds().map(DrawCmd::name).collect()
}

// ── borders ───────────────────────────────────────────────────────────────

#[test]
fn uniform_border_is_one_stroked_rect() {
    init_logging(LoggingConfig::default());

    let list = BorderPainter::new().paint(&border(Sides::all(2.0)));

    let mut expected = DisplayList::new();
    expected.push_rect(STATE, Rect::from_ltrb(1.0, 1.0, 99.0, 39.0), PaintFlags::stroke(Color::black(), 2.0));
    assert_same(&expected, &list, Tolerance::exact());
}

#[test]
fn mixed_widths_paint_four_filled_rects() {
    let list = BorderPainter::new().paint(&border(Sides::new(4.0, 2.0, 4.0, 2.0)));

    let mut expected = DisplayList::new();
    for rect in [
        Rect::from_ltrb(0.0, 0.0, 100.0, 4.0),
        Rect::from_ltrb(98.0, 0.0, 100.0, 40.0),
        Rect::from_ltrb(0.0, 36.0, 100.0, 40.0),
        Rect::from_ltrb(0.0, 0.0, 2.0, 40.0),
    ] {
        expected.push_fill_rect(STATE, rect, Color::black());
    }
    assert_same(&expected, &list, Tolerance::default());
}

#[test]
fn invisible_boxes_paint_nothing() {
    let mut b = border(Sides::all(2.0));
    b.visibility = Visibility::Hidden;
    assert!(BorderPainter::new().paint(&b).is_empty());

    let mut t = text(vec![]);
    t.visibility = Visibility::Collapse;
    assert!(TextPainter::new().paint(&t).is_empty());

    // Hidden wins over every other field.
    let mut t = text(vec![DecorationLine::new(
        DecorationLines::UNDERLINE | DecorationLines::LINE_THROUGH,
        DecorationStyle::Wavy,
        Color::black(),
    )]);
    t.visibility = Visibility::Hidden;
    t.style.shadows = Some(vec![Shadow::new(1.0, 1.0, 2.0, Color::black())]);
    t.emphasis_mark = Some(EmphasisMark { mark: "•".into(), offset: -20.0 });
    t.symbol_marker = Some(SymbolMarker {
        kind: SymbolMarkerKind::Disc,
        rect: Rect::new(0.0, 0.0, 6.0, 6.0),
        color: Color::black(),
        rtl: false,
    });
    assert!(TextPainter::new().paint(&t).is_empty());

    t.symbol_marker = None;
    assert!(TextPainter::new().paint(&t).is_empty());

    let bg = BackgroundPaintInput {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        color: Some(Color::white()),
        visibility: Visibility::Hidden,
        ..Default::default()
    };
    assert!(BackgroundPainter::new().paint(&bg).is_empty());
}

// ── text ──────────────────────────────────────────────────────────────────

#[test]
fn automatic_underline_thickness_and_offset() {
    let underline = DecorationLine::new(DecorationLines::UNDERLINE, DecorationStyle::Solid, Color::black());
    let list = TextPainter::new().paint(&text(vec![underline]));
    assert_eq!(kinds(&list), ["rect", "text_blob"]);

    let DrawCmd::Rect(line) = &list.items()[0].cmd else { panic!("expected underline rect") };
    // thickness = 20 / 10, offset = descent
    assert_eq!(line.rect, Rect::new(0.0, 35.0, 80.0, 2.0));
    assert_eq!(line.flags.style, PaintStyle::Fill);
    assert!(list.items().iter().all(|item| item.state == STATE));
}

#[test]
fn text_shadow_protocol_around_decorations() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let mut input = text(vec![DecorationLine::new(
        DecorationLines::UNDERLINE | DecorationLines::LINE_THROUGH,
        DecorationStyle::Solid,
        red,
    )]);
    input.style.shadows = Some(vec![
        Shadow::new(1.0, 1.0, 0.0, Color::black()),
        Shadow::new(2.0, 2.0, 4.0, Color::white()),
    ]);
    let list = TextPainter::new().paint(&input);

    assert_eq!(
        kinds(&list),
        [
            "shadow", "shadow", "rect", "clear_shadow", "rect",
            "text_blob",
            "shadow", "shadow", "rect", "clear_shadow", "rect",
        ]
    );

    // Last-declared shadow is installed first.
    let DrawCmd::Shadow(first) = &list.items()[0].cmd else { unreachable!() };
    assert_eq!(first.offset, Vec2::new(2.0, 2.0));
    assert_eq!(first.blur_sigma, 2.0);

    let colors: Vec<_> = list
        .cmds()
        .filter_map(|cmd| match cmd {
            DrawCmd::Rect(r) => Some(r.flags.color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, [Color::black(), red, Color::black(), red]);
}

// ── background ────────────────────────────────────────────────────────────

#[test]
fn background_carries_outer_box_shadows() {
    let shadow = Shadow::new(0.0, 4.0, 8.0, Color::black());
    let input = BackgroundPaintInput {
        rect: Rect::new(0.0, 0.0, 100.0, 40.0),
        color: Some(Color::white()),
        shadows: vec![BoxShadow::outer(shadow), BoxShadow::inset(shadow)],
        state: STATE,
        ..Default::default()
    };
    let list = BackgroundPainter::new().paint(&input);

    let mut flags = PaintFlags::fill(Color::white());
    flags.shadows = vec![shadow];
    let mut expected = DisplayList::new();
    expected.push_rect(STATE, input.rect, flags);
    assert_same(&expected, &list, Tolerance::default());
}
