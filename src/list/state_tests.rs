//! Tests for ListState planning.

use super::*;
use crate::grouping::{group_items, GroupSpec};
use crate::list::options::ScrollSeekConfig;
use crate::list::scroll_seek::IDLE_RESET;
use std::time::Duration;

fn options_without_seek() -> ListOptions {
    ListOptions::default().with_scroll_seek(None)
}

fn state_with_viewport(options: ListOptions, height: u16) -> ListState {
    let mut state = ListState::new(options);
    state.set_viewport(height);
    state
}

fn kinds(frame: &ListFrame) -> Vec<RowKind> {
    frame.rows.iter().map(|row| row.kind).collect()
}

fn ys(frame: &ListFrame) -> Vec<u16> {
    frame.rows.iter().map(|row| row.y).collect()
}

mod populated {
    use super::*;

    #[test]
    fn shows_only_rows_inside_viewport() {
        let mut state = state_with_viewport(options_without_seek(), 4);
        let frame = state.plan(&PlanInput::flat(10), Instant::now());

        assert_eq!(frame.phase, ListPhase::Populated);
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(ys(&frame), vec![0, 1, 2, 3]);
        assert_eq!(frame.total_height, 10);
        assert_eq!(frame.visible_items.start_index, 0);
        assert_eq!(frame.visible_items.end_index, 4);
        assert!(!frame.end_reached);
    }

    #[test]
    fn scroll_offset_is_clamped_to_content() {
        let mut state = state_with_viewport(options_without_seek(), 4);
        let now = Instant::now();
        state.plan(&PlanInput::flat(10), now);
        assert_eq!(state.max_offset(), 6);

        state.scroll_by_at(100, now);
        assert_eq!(state.scroll_offset().get(), 6);
        let frame = state.plan(&PlanInput::flat(10), now);
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![6, 7, 8, 9]);

        state.scroll_by_at(-100, now);
        assert_eq!(state.scroll_offset().get(), 0);
    }

    #[test]
    fn shrinking_data_reclamps_offset() {
        let mut state = state_with_viewport(options_without_seek(), 4);
        let now = Instant::now();
        state.plan(&PlanInput::flat(10), now);
        state.scroll_to_bottom();

        let frame = state.plan(&PlanInput::flat(5), now);
        assert_eq!(frame.scroll_offset.get(), 1);
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn tall_items_are_clipped_at_both_edges() {
        let hint = |_: usize| LineHeight::saturating(2);
        let input = PlanInput::flat(3).item_height(&hint);
        let mut state = state_with_viewport(options_without_seek(), 3);
        let now = Instant::now();

        let frame = state.plan(&input, now);
        assert_eq!(
            frame.rows,
            vec![
                FrameRow { y: 0, skip: 0, height: 2, kind: RowKind::Item { index: 0 } },
                FrameRow { y: 2, skip: 0, height: 1, kind: RowKind::Item { index: 1 } },
            ]
        );

        state.scroll_by_at(1, now);
        let frame = state.plan(&input, now);
        assert_eq!(
            frame.rows,
            vec![
                FrameRow { y: 0, skip: 1, height: 1, kind: RowKind::Item { index: 0 } },
                FrameRow { y: 1, skip: 0, height: 2, kind: RowKind::Item { index: 1 } },
            ]
        );
    }

    #[test]
    fn page_down_moves_by_viewport_less_one() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        state.plan(&PlanInput::flat(50), Instant::now());
        state.page_down();
        assert_eq!(state.scroll_offset().get(), 4);
        state.page_up();
        assert_eq!(state.scroll_offset().get(), 0);
    }
}

mod loading {
    use super::*;

    #[test]
    fn appends_fixed_skeleton_footer_after_items() {
        let mut state = state_with_viewport(options_without_seek(), 20);
        let frame = state.plan(&PlanInput::flat(10).loading(true), Instant::now());

        assert_eq!(frame.phase, ListPhase::Loading);
        assert_eq!(frame.item_indices().count(), 10);
        assert_eq!(frame.skeleton_count(), 3);
        assert_eq!(frame.total_height, 13);
        let tail: Vec<RowKind> = kinds(&frame)[10..].to_vec();
        assert_eq!(
            tail,
            vec![
                RowKind::Skeleton { ordinal: 0 },
                RowKind::Skeleton { ordinal: 1 },
                RowKind::Skeleton { ordinal: 2 },
            ]
        );
    }

    #[test]
    fn initial_load_without_data_shows_only_skeletons() {
        let mut state = state_with_viewport(options_without_seek(), 20);
        let frame = state.plan(&PlanInput::flat(0).loading(true), Instant::now());

        assert_eq!(frame.phase, ListPhase::Loading);
        assert_eq!(frame.skeleton_count(), 3);
        assert_eq!(frame.item_indices().count(), 0);
        assert_eq!(ys(&frame), vec![0, 1, 2]);
    }

    #[test]
    fn footer_outside_viewport_is_not_planned() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        let input = PlanInput::flat(10).loading(true);

        let frame = state.plan(&input, now);
        assert_eq!(frame.skeleton_count(), 0);
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        state.scroll_to_bottom();
        assert_eq!(state.scroll_offset().get(), 8);
        let frame = state.plan(&input, now);
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![8, 9]);
        assert_eq!(frame.skeleton_count(), 3);
    }

    #[test]
    fn skeleton_count_and_height_follow_options() {
        let options = options_without_seek()
            .with_skeleton_count(2)
            .with_skeleton_height(3)
            .unwrap();
        let mut state = state_with_viewport(options, 20);
        let frame = state.plan(&PlanInput::flat(0).loading(true), Instant::now());
        assert_eq!(ys(&frame), vec![0, 3]);
        assert!(frame.rows.iter().all(|row| row.height == 3));
    }

    #[test]
    fn never_reports_end_reached() {
        let mut state = state_with_viewport(options_without_seek(), 20);
        let frame = state.plan(&PlanInput::flat(3).loading(true), Instant::now());
        assert!(!frame.end_reached);
    }
}

mod empty {
    use super::*;

    #[test]
    fn empty_phase_has_no_rows_and_never_reaches_end() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        for _ in 0..3 {
            let frame = state.plan(&PlanInput::flat(0), Instant::now());
            assert_eq!(frame.phase, ListPhase::Empty);
            assert!(frame.rows.is_empty());
            assert!(!frame.end_reached);
        }
    }

    #[test]
    fn grouped_input_with_no_items_is_empty() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        let frame = state.plan(&PlanInput::grouped(&[], 0), Instant::now());
        assert_eq!(frame.phase, ListPhase::Empty);
    }
}

mod end_reached {
    use super::*;

    #[test]
    fn short_list_reaches_end_once() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        assert!(state.plan(&PlanInput::flat(3), now).end_reached);
        assert!(!state.plan(&PlanInput::flat(3), now).end_reached);
    }

    #[test]
    fn fires_once_per_crossing_not_per_scroll_event() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        let input = PlanInput::flat(20);

        let mut fired = 0;
        for _ in 0..30 {
            let frame = state.plan(&input, now);
            fired += usize::from(frame.end_reached);
            state.scroll_by_at(1, now);
        }
        assert_eq!(fired, 1);

        // Wiggling around the tail does not re-fire without new data
        state.scroll_by_at(-2, now);
        assert!(!state.plan(&input, now).end_reached);
        state.scroll_by_at(2, now);
        assert!(!state.plan(&input, now).end_reached);
    }

    #[test]
    fn new_page_rearms_the_callback() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        state.plan(&PlanInput::flat(20), now);
        state.scroll_to_bottom();
        assert!(state.plan(&PlanInput::flat(20), now).end_reached);

        // Page arrives: the tail moved away from the viewport
        assert!(!state.plan(&PlanInput::flat(30), now).end_reached);
        state.scroll_to_bottom();
        assert!(state.plan(&PlanInput::flat(30), now).end_reached);
    }

    #[test]
    fn empty_page_does_not_loop() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        assert!(state.plan(&PlanInput::flat(2), now).end_reached);
        // Caller fetched, got nothing back
        assert!(!state.plan(&PlanInput::flat(2).loading(true), now).end_reached);
        assert!(!state.plan(&PlanInput::flat(2), now).end_reached);
    }

    #[test]
    fn threshold_fires_before_last_item() {
        let options = options_without_seek().with_end_reached_threshold(3);
        let mut state = state_with_viewport(options, 5);
        let now = Instant::now();
        state.plan(&PlanInput::flat(10), now);

        state.scroll_to_at(1, now);
        assert!(!state.plan(&PlanInput::flat(10), now).end_reached, "Last visible is 5");
        state.scroll_to_at(2, now);
        assert!(state.plan(&PlanInput::flat(10), now).end_reached, "Last visible is 6");
    }

    #[test]
    fn reset_rearms_for_same_length() {
        let mut state = state_with_viewport(options_without_seek(), 5);
        let now = Instant::now();
        assert!(state.plan(&PlanInput::flat(2), now).end_reached);
        state.reset_end_reached();
        assert!(state.plan(&PlanInput::flat(2), now).end_reached);
    }

    #[test]
    fn unmeasured_viewport_never_fires() {
        let options = options_without_seek().with_initial_item_count(5);
        let mut state = ListState::new(options);
        assert!(!state.plan(&PlanInput::flat(2), Instant::now()).end_reached);
    }
}

mod grouped {
    use super::*;

    #[test]
    fn header_precedes_first_item_of_each_group() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        let frame = state.plan(&PlanInput::grouped(&[2, 1], 3), Instant::now());

        assert_eq!(
            kinds(&frame),
            vec![
                RowKind::Header { group: 0 },
                RowKind::Item { index: 0 },
                RowKind::Item { index: 1 },
                RowKind::Header { group: 1 },
                RowKind::Item { index: 2 },
            ]
        );
        assert_eq!(frame.sticky_header, None);
    }

    #[test]
    fn layout_from_grouping_engine_drives_rows() {
        let layout = group_items(vec![0, 1, 2, 3, 4], Some(|id: &i32| match *id {
            1 | 2 => GroupSpec::new("Charlie").with_order(1),
            0 | 4 => GroupSpec::new("Bravo").with_order(2),
            _ => GroupSpec::new("Alpha").with_order(3),
        }));
        let mut state = state_with_viewport(options_without_seek(), 20);
        let frame = state.plan(&PlanInput::from_layout(&layout), Instant::now());

        let headers: Vec<(usize, usize)> = frame
            .rows
            .windows(2)
            .filter_map(|pair| match (pair[0].kind, pair[1].kind) {
                (RowKind::Header { group }, RowKind::Item { index }) => Some((group, index)),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec![(0, 0), (1, 2), (2, 4)]);
        assert_eq!(frame.rows.len(), 8);
    }

    #[test]
    fn sticky_header_tracks_group_of_top_item() {
        let mut state = state_with_viewport(options_without_seek(), 2);
        let now = Instant::now();
        let input = PlanInput::grouped(&[2, 1], 3);
        state.plan(&input, now);

        state.scroll_to_at(2, now);
        let frame = state.plan(&input, now);
        assert_eq!(
            kinds(&frame),
            vec![RowKind::Item { index: 1 }, RowKind::Header { group: 1 }]
        );
        assert_eq!(frame.sticky_header, Some(0));

        state.scroll_to_at(3, now);
        let frame = state.plan(&input, now);
        assert_eq!(frame.sticky_header, None);
    }

    #[test]
    fn scroll_to_item_keeps_first_of_group_below_its_header() {
        let mut state = state_with_viewport(options_without_seek(), 2);
        let now = Instant::now();
        let input = PlanInput::grouped(&[2, 1], 3);
        state.plan(&input, now);

        state.scroll_to_item(2);
        assert_eq!(state.scroll_offset().get(), 3);
        let frame = state.plan(&input, now);
        assert_eq!(
            kinds(&frame),
            vec![RowKind::Header { group: 1 }, RowKind::Item { index: 2 }]
        );
        assert_eq!(frame.sticky_header, None);
    }

    #[test]
    fn scroll_to_item_is_not_hidden_by_sticky_header() {
        let mut state = state_with_viewport(options_without_seek(), 2);
        let now = Instant::now();
        let input = PlanInput::grouped(&[3, 1], 4);
        state.plan(&input, now);

        state.scroll_to_item(2);
        let frame = state.plan(&input, now);
        // line 0 is covered by the sticky header, the target is on line 1
        assert_eq!(frame.sticky_header, Some(0));
        let target = frame
            .rows
            .iter()
            .find(|row| row.kind == RowKind::Item { index: 2 })
            .unwrap();
        assert_eq!(target.y, 1);
    }

    #[test]
    fn scroll_to_item_flat_lands_on_top_line() {
        let mut state = state_with_viewport(options_without_seek(), 2);
        let now = Instant::now();
        let input = PlanInput::flat(10);
        state.plan(&input, now);

        state.scroll_to_item(5);
        assert_eq!(state.scroll_offset().get(), 5);
    }

    #[test]
    fn end_reached_uses_grouped_length() {
        let mut state = state_with_viewport(options_without_seek(), 3);
        let now = Instant::now();
        let input = PlanInput::grouped(&[2, 1], 3);
        assert!(!state.plan(&input, now).end_reached);
        state.scroll_to_bottom();
        assert!(state.plan(&input, now).end_reached);
    }
}

mod initial_items {
    use super::*;

    #[test]
    fn renders_initial_items_before_measurement() {
        let options = options_without_seek().with_initial_item_count(2);
        let mut state = ListState::new(options);
        let frame = state.plan(&PlanInput::flat(10), Instant::now());
        assert_eq!(frame.item_indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn initial_items_include_group_headers() {
        let options = options_without_seek().with_initial_item_count(3);
        let mut state = ListState::new(options);
        let frame = state.plan(&PlanInput::grouped(&[2, 3], 5), Instant::now());
        assert_eq!(
            kinds(&frame),
            vec![
                RowKind::Header { group: 0 },
                RowKind::Item { index: 0 },
                RowKind::Item { index: 1 },
                RowKind::Header { group: 1 },
                RowKind::Item { index: 2 },
            ]
        );
    }

    #[test]
    fn zero_initial_items_renders_nothing_before_measurement() {
        let mut state = ListState::new(options_without_seek());
        let frame = state.plan(&PlanInput::flat(10), Instant::now());
        assert!(frame.rows.is_empty());
    }
}

mod scroll_seek {
    use super::*;

    fn seek_state() -> ListState {
        let options = ListOptions::default()
            .with_scroll_seek(Some(ScrollSeekConfig::new(200.0, 50.0).unwrap()));
        state_with_viewport(options, 10)
    }

    #[test]
    fn fast_scroll_swaps_items_for_placeholders() {
        let mut state = seek_state();
        let t0 = Instant::now();
        let input = PlanInput::flat(100);
        state.plan(&input, t0);

        state.scroll_by_at(30, t0);
        state.scroll_by_at(30, t0 + Duration::from_millis(50));
        assert!(state.is_seeking());

        let frame = state.plan(&input, t0 + Duration::from_millis(60));
        assert!(frame.is_seeking());
        assert_eq!(frame.item_indices().count(), 0);
        assert!(frame
            .rows
            .iter()
            .all(|row| matches!(row.kind, RowKind::SeekPlaceholder { .. })));
    }

    #[test]
    fn slowing_inside_band_keeps_placeholders() {
        let mut state = seek_state();
        let t0 = Instant::now();
        let input = PlanInput::flat(100);
        state.plan(&input, t0);

        state.scroll_by_at(30, t0);
        state.scroll_by_at(30, t0 + Duration::from_millis(50));
        // 10 lines in 100ms = 100 lines/s, between exit (50) and enter (200)
        state.scroll_by_at(10, t0 + Duration::from_millis(150));
        assert!(state.plan(&input, t0 + Duration::from_millis(160)).is_seeking());

        // 1 line in 100ms = 10 lines/s, below exit
        state.scroll_by_at(1, t0 + Duration::from_millis(250));
        assert!(!state.plan(&input, t0 + Duration::from_millis(260)).is_seeking());
    }

    #[test]
    fn resting_restores_real_items() {
        let mut state = seek_state();
        let t0 = Instant::now();
        let input = PlanInput::flat(100);
        state.plan(&input, t0);

        state.scroll_by_at(30, t0);
        let t1 = t0 + Duration::from_millis(50);
        state.scroll_by_at(30, t1);

        let frame = state.plan(&input, t1 + IDLE_RESET);
        assert!(!frame.is_seeking());
        assert_eq!(frame.item_indices().count(), 10);
    }

    #[test]
    fn headers_stay_real_while_seeking() {
        let mut state = seek_state();
        let t0 = Instant::now();
        let input = PlanInput::grouped(&[50, 50], 100);
        state.plan(&input, t0);

        state.scroll_by_at(20, t0);
        state.scroll_by_at(30, t0 + Duration::from_millis(50));
        let frame = state.plan(&input, t0 + Duration::from_millis(60));
        assert!(frame.is_seeking());
        assert!(kinds(&frame).contains(&RowKind::Header { group: 1 }));
    }

    #[test]
    fn loading_phase_does_not_use_placeholders() {
        let mut state = seek_state();
        let t0 = Instant::now();
        state.plan(&PlanInput::flat(100), t0);

        state.scroll_by_at(30, t0);
        state.scroll_by_at(30, t0 + Duration::from_millis(50));
        let frame = state.plan(&PlanInput::flat(100).loading(true), t0 + Duration::from_millis(60));
        assert!(!frame.is_seeking());
        assert_eq!(frame.item_indices().count(), 10);
    }

    #[test]
    fn disabled_seek_never_activates() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        let t0 = Instant::now();
        state.plan(&PlanInput::flat(100), t0);
        state.scroll_by_at(80, t0);
        state.scroll_by_at(-80, t0 + Duration::from_millis(1));
        assert!(!state.is_seeking());
    }
}

mod options {
    use super::*;

    #[test]
    fn new_item_height_rebuilds_row_model() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        let now = Instant::now();
        assert_eq!(state.plan(&PlanInput::flat(4), now).total_height, 4);

        state.set_options(&options_without_seek().with_default_item_height(3));
        assert_eq!(state.plan(&PlanInput::flat(4), now).total_height, 12);
    }

    #[test]
    fn enabling_seek_installs_a_sampler() {
        let mut state = state_with_viewport(options_without_seek(), 10);
        let t0 = Instant::now();
        state.plan(&PlanInput::flat(100), t0);

        state.set_options(&ListOptions::default());
        state.scroll_by_at(0, t0);
        state.scroll_by_at(40, t0 + Duration::from_millis(10));
        assert!(state.is_seeking());
    }

    #[test]
    fn identical_options_keep_seek_state() {
        let mut state = state_with_viewport(ListOptions::default(), 10);
        let t0 = Instant::now();
        state.plan(&PlanInput::flat(100), t0);
        state.scroll_by_at(0, t0);
        state.scroll_by_at(40, t0 + Duration::from_millis(10));

        state.set_options(&ListOptions::default());
        assert!(state.is_seeking());
    }
}
