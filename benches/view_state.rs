use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use galleria::{
    core::{
        cmd::{Cmd, FetchMode},
        msg::ListMsg,
        state::ListState,
        view_state::{FetchOutcome, ViewState},
    },
    domain::{artwork::Artwork, catalog::PageRequest},
    test_helpers::artwork_page,
};

const PAGE_SIZE: u32 = 50;
const PAGES: u32 = 40;

/// Load every page through `update`, the way the executor would report them
fn paginate(pages: u32) -> ListState<Artwork> {
    let mut state = ListState::new(PAGE_SIZE);
    let mut cmds = state.update(ListMsg::LoadInitial);
    while let Some(Cmd::Fetch(request)) = cmds.pop() {
        let result = Ok(artwork_page(request.query, pages));
        cmds = state.update(ListMsg::PageFetched {
            ticket: request.ticket,
            result,
        });
        if let Some(last) = state.items().last().map(|artwork| artwork.id) {
            cmds.extend(state.update(ListMsg::LoadMoreIfNeeded(last)));
        }
    }
    state
}

fn benchmark(c: &mut Criterion) {
    let failed = FetchOutcome::Failed {
        message: "offline".into(),
        mode: FetchMode::Incremental,
    };
    c.bench_function("derive-view-state", |b| {
        b.iter(|| {
            ViewState::derive(
                black_box(2_000),
                black_box(false),
                black_box(&failed),
                black_box("Nothing here."),
            )
        })
    });

    c.bench_function("paginate-40-pages", |b| {
        b.iter(|| paginate(black_box(PAGES)))
    });

    c.bench_function("artwork-page", |b| {
        b.iter(|| artwork_page(black_box(PageRequest::new(7, PAGE_SIZE)), black_box(PAGES)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
