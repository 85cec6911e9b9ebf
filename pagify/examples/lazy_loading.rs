use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pagify::{LayoutConfig, LoadError, PageOrder, PageSink, Pagify};

fn main() {
    // Simulate a paged feed: each load appends a batch of placeholders until the feed runs dry.
    let next_id = Arc::new(AtomicU64::new(0));
    let config = LayoutConfig::new(50.0, 100.0)
        .with_ordering(PageOrder::ColumnMajor)
        .with_column_load_buffer(1)
        .with_load_on_init(true);

    let mut p = Pagify::with_loader(config, {
        let next_id = Arc::clone(&next_id);
        move |sink: &mut PageSink<'_, u64>| -> Result<bool, LoadError> {
            let start = next_id.load(Ordering::Relaxed);
            if start >= 12 {
                return Ok(false);
            }
            for id in start..start + 4 {
                sink.push_placeholder(id);
            }
            next_id.store(start + 4, Ordering::Relaxed);
            Ok(true)
        }
    })
    .expect("valid layout");
    p.set_on_page_change(Some(|c: &pagify::PageChange| {
        println!(
            "page {} -> {} (offset {}%)",
            c.previous_page, c.current_page, c.target_offset_percent
        );
    }));

    println!("initial pages: {}", p.total_pages());
    while p.go_to_next_column().is_some() {
        p.finish_transition();
        // The host would fetch content here and resolve the placeholders it now shows.
        let range = p.current_view_range();
        for index in range.first..=range.last {
            if p.page(index).is_some_and(|pg| pg.is_placeholder) {
                p.resolve_placeholder(index, 1_000 + index as u64);
            }
        }
    }
    println!(
        "stopped at page {} of {} ({} placeholders left)",
        p.current_page(),
        p.total_pages(),
        p.pages().placeholder_count()
    );
}
