//! Source → paginator → grouped collection → list windowing, wired by hand
//! the way the browser wires them, without a terminal.

use mpdx_list::grouping::GroupedCollection;
use mpdx_list::i18n::Translator;
use mpdx_list::list::{ListOptions, ListPhase, ListState, PlanInput, RowKind};
use mpdx_list::model::{Contact, GroupMode};
use mpdx_list::source::{JsonlSource, Paginator};
use std::time::Instant;

fn jsonl(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let status = if i % 2 == 0 { "PARTNER_FINANCIAL" } else { "NEVER_CONTACTED" };
        out.push_str(&format!(
            "{{\"id\":\"c{i}\",\"name\":\"Person {i:02}\",\"status\":\"{status}\"}}\n"
        ));
    }
    out.push_str("{\"name\":\"missing id\"}\n");
    out
}

struct Flow {
    pager: Paginator<JsonlSource>,
    collection: GroupedCollection<Contact>,
    list: ListState,
}

impl Flow {
    fn new(count: usize, page_size: usize, viewport: u16) -> Self {
        let source = JsonlSource::from_reader(jsonl(count).as_bytes()).unwrap();
        assert_eq!(source.skipped().len(), 1);
        let mut pager = Paginator::new(source, page_size);
        pager.request();
        let mut list = ListState::new(ListOptions::default().with_scroll_seek(None));
        list.set_viewport(viewport);
        Self {
            pager,
            collection: GroupedCollection::new(),
            list,
        }
    }

    /// One render pass: plan, and request a page when the tail shows.
    fn render(&mut self) -> ListPhase {
        let layout = self.collection.cached_layout();
        let input = PlanInput::from_layout(layout)
            .loading(self.pager.is_loading())
            .revision(self.collection.revision());
        let frame = self.list.plan(&input, Instant::now());
        if frame.end_reached {
            self.pager.request();
        }
        frame.phase
    }

    /// One tick: deliver whatever was requested.
    fn tick(&mut self) {
        if let Some(page) = self.pager.deliver().unwrap() {
            self.collection.extend(page.contacts);
            self.collection.refresh();
        }
    }
}

#[test]
fn first_render_is_loading_and_delivery_populates() {
    let mut flow = Flow::new(3, 10, 10);
    assert_eq!(flow.render(), ListPhase::Loading);
    flow.tick();
    assert_eq!(flow.render(), ListPhase::Populated);
    assert_eq!(flow.collection.len(), 3);
    assert!(!flow.pager.has_more());
}

#[test]
fn pages_load_only_as_the_tail_comes_into_view() {
    let mut flow = Flow::new(40, 5, 8);
    for _ in 0..6 {
        flow.render();
        flow.tick();
    }
    // the viewport fills after two pages; nothing more without scrolling
    assert_eq!(flow.collection.len(), 10);

    flow.list.scroll_to_bottom();
    flow.render();
    assert!(flow.pager.is_loading());
    flow.tick();
    assert_eq!(flow.collection.len(), 15);
}

#[test]
fn reaching_the_last_page_stops_requests() {
    let mut flow = Flow::new(12, 5, 4);
    for _ in 0..20 {
        flow.list.scroll_to_bottom();
        flow.render();
        flow.tick();
    }
    assert_eq!(flow.collection.len(), 12);
    assert_eq!(flow.pager.pages_loaded(), 3);
    assert!(!flow.pager.request());
}

#[test]
fn regrouping_keeps_every_loaded_contact() {
    let mut flow = Flow::new(6, 10, 20);
    flow.render();
    flow.tick();

    let translator = Translator::new();
    flow.collection
        .set_classifier(GroupMode::Status.classifier(&translator));
    flow.collection.refresh();
    flow.list.scroll_to_top();

    let layout = flow.collection.cached_layout();
    let input = PlanInput::from_layout(layout).revision(flow.collection.revision());
    let frame = flow.list.plan(&input, Instant::now());

    let headers = frame
        .rows
        .iter()
        .filter(|row| matches!(row.kind, RowKind::Header { .. }))
        .count();
    assert_eq!(headers, 2);
    assert_eq!(frame.item_indices().count(), 6);

    let first = flow.collection.item(0).unwrap();
    assert_eq!(first.name, "Person 01");
}
