//! End-to-end tests driving real widgets through the render pipeline.

use folio_core::{
    BoxConstraints, Color, EdgeInsets, Point, Rect, RecordingSink, SinkCommand, Size,
};
use folio_render::{PipelineOptions, RenderPipeline};
use folio_widgets::{
    Container, CrossAxisAlignment, Flex, Padding, SizedBox, Stack, StackAlignment, StackFit, Text,
};

fn fill_colors(sink: &RecordingSink) -> Vec<Color> {
    sink.commands()
        .iter()
        .filter_map(|c| match c {
            SinkCommand::SetFillColor(color) => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn hit_test_returns_leaf_not_container() {
    // A container wrapping two stacked 50x25 leaves.
    let root = Container::new().child(
        Stack::new()
            .child(SizedBox::exact(50.0, 25.0))
            .child(SizedBox::exact(50.0, 25.0)),
    );
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(200.0, 100.0)))
        .unwrap();

    let hit = pipeline.hit_test(Point::new(10.0, 10.0)).unwrap().unwrap();
    let tree = pipeline.tree().unwrap();

    // The hit node is a leaf of the mirrored tree, two levels below the
    // container, and the topmost of the two stacked siblings.
    let stack = tree.node(tree.root()).children[0];
    let top_leaf = tree.node(stack).children[1];
    assert_eq!(hit, top_leaf);
    assert!(tree.node(hit).children.is_empty());
}

#[test]
fn invalidate_grandchild_dirties_chain_and_paint_clears_it() {
    let root = Container::new().child(
        Padding::new(
            EdgeInsets::all(10.0),
            Container::new().color(Color::BLACK).width(30.0).height(30.0),
        ),
    );
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(100.0, 100.0)))
        .unwrap();

    let mut sink = RecordingSink::new();
    pipeline.paint(&mut sink, None).unwrap();
    assert!(!pipeline.tree().unwrap().any_dirty());

    let tree = pipeline.tree().unwrap();
    let child = tree.node(tree.root()).children[0];
    let grandchild = tree.node(child).children[0];
    pipeline.invalidate(grandchild).unwrap();

    {
        let tree = pipeline.tree().unwrap();
        assert!(tree.node(grandchild).needs_repaint);
        assert!(tree.node(child).needs_repaint);
        assert!(tree.node(tree.root()).needs_repaint);
    }

    let mut sink = RecordingSink::new();
    pipeline.paint(&mut sink, None).unwrap();
    assert_eq!(fill_colors(&sink), vec![Color::BLACK]);
    assert!(!pipeline.tree().unwrap().any_dirty());
}

#[test]
fn flex_document_lays_out_and_paints_balanced_save_restore() {
    let root = Flex::column()
        .spacing(8.0)
        .child(Text::new("Folio").with_label("title"))
        .expanded(
            Flex::row()
                .cross_axis_alignment(CrossAxisAlignment::Stretch)
                .expanded(Container::new().color(Color::rgb(0.9, 0.2, 0.2)))
                .expanded_flex(Container::new().color(Color::rgb(0.2, 0.9, 0.2)), 2.0)
                .expanded(Container::new().color(Color::rgb(0.2, 0.2, 0.9))),
        );
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(400.0, 300.0)))
        .unwrap();

    let tree = pipeline.tree().unwrap();
    let row = tree.node(tree.root()).children[1];
    let panels: Vec<Size> = tree
        .node(row)
        .children
        .iter()
        .map(|&id| tree.node(id).size)
        .collect();
    assert_eq!(panels.iter().map(|s| s.width).collect::<Vec<_>>(), vec![
        100.0, 200.0, 100.0
    ]);

    let mut sink = RecordingSink::new();
    pipeline.paint(&mut sink, None).unwrap();
    assert_eq!(sink.save_depth(), 0);
    let saves = sink
        .commands()
        .iter()
        .filter(|c| matches!(c, SinkCommand::SaveState))
        .count();
    let restores = sink
        .commands()
        .iter()
        .filter(|c| matches!(c, SinkCommand::RestoreState))
        .count();
    assert_eq!(saves, restores);
    // All three panels painted, plus the title text run.
    assert_eq!(fill_colors(&sink).len(), 4);
    assert!(sink
        .commands()
        .iter()
        .any(|c| matches!(c, SinkCommand::ShowText(text) if text == "Folio")));
}

#[test]
fn each_paint_emits_the_full_document() {
    // A page encoder may consume the same built tree more than once; every
    // paint call must reproduce the complete content, dirty flags or not.
    let root = Container::new().color(Color::BLACK);
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(100.0, 100.0)))
        .unwrap();

    let mut first = RecordingSink::new();
    pipeline.paint(&mut first, None).unwrap();
    let fill_count = |sink: &RecordingSink| {
        sink.commands()
            .iter()
            .filter(|c| matches!(c, SinkCommand::FillPath))
            .count()
    };
    assert_eq!(fill_count(&first), 1);

    let mut second = RecordingSink::new();
    pipeline.paint(&mut second, None).unwrap();
    assert_eq!(fill_count(&second), 1);
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn relayout_after_build_updates_geometry_in_place() {
    let root = Flex::row().expanded(Container::new().color(Color::BLACK));
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(100.0, 50.0)))
        .unwrap();
    let node_count = pipeline.tree().unwrap().len();

    pipeline.layout().unwrap();
    let tree = pipeline.tree().unwrap();
    assert_eq!(tree.len(), node_count);
    assert_eq!(tree.node(tree.root()).size, Size::new(100.0, 50.0));
}

#[test]
fn clip_skips_offscreen_panel_until_visible() {
    let root = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Stretch)
        .expanded(Container::new().color(Color::BLACK))
        .expanded(Container::new().color(Color::WHITE));
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(200.0, 100.0)))
        .unwrap();

    let mut sink = RecordingSink::new();
    pipeline
        .paint(&mut sink, Some(Rect::new(0.0, 0.0, 80.0, 100.0)))
        .unwrap();
    assert_eq!(fill_colors(&sink), vec![Color::BLACK]);

    // Moving the clip uncovers the second panel and hides the first.
    let mut sink = RecordingSink::new();
    pipeline
        .paint(&mut sink, Some(Rect::new(100.0, 0.0, 100.0, 100.0)))
        .unwrap();
    assert_eq!(fill_colors(&sink), vec![Color::WHITE]);
}

#[test]
fn stack_alignment_positions_mirrored_nodes() {
    let root = Stack::new()
        .alignment(StackAlignment::BottomRight)
        .fit(StackFit::Expand)
        .child(SizedBox::exact(40.0, 20.0));
    let mut pipeline = RenderPipeline::new(root);
    pipeline
        .build(BoxConstraints::tight(Size::new(100.0, 100.0)))
        .unwrap();

    let tree = pipeline.tree().unwrap();
    let leaf = tree.node(tree.root()).children[0];
    assert_eq!(tree.node(leaf).position, Point::new(60.0, 80.0));
    assert_eq!(
        pipeline.hit_test(Point::new(90.0, 90.0)).unwrap(),
        Some(leaf)
    );
}

#[test]
fn validation_catches_widget_derived_bad_constraints() {
    // A well-formed tree passes with validation enabled.
    let root = Padding::new(EdgeInsets::all(4.0), Text::new("ok"));
    let mut pipeline = RenderPipeline::new(root).options(PipelineOptions {
        validate_constraints: true,
        sample_performance: true,
    });
    pipeline
        .build(BoxConstraints::tight(Size::new(100.0, 100.0)))
        .unwrap();
    assert!(!pipeline.performance_samples().is_empty());
}
