use pagify::{LayoutConfig, PageOrder, Pagify};

fn main() {
    // A 2x2 grid per view (pages are 50% x 50% of the viewport), row-major ordering.
    let config = LayoutConfig::new(50.0, 50.0).with_ordering(PageOrder::RowMajor);
    let mut p = Pagify::with_pages(config, 1..=10u64).expect("valid layout");

    for page in p.pages() {
        println!(
            "page {} -> row {} col {} (top {}%, left {}%)",
            page.index,
            page.placement.cell.row,
            page.placement.cell.column,
            page.placement.top_percent,
            page.placement.left_percent
        );
    }

    // Page 10 lives past the last full view; the view is clamped so no blank column shows.
    if let Some(turn) = p.go_to_page(10) {
        println!(
            "go_to_page(10): landed on {} at column {} (offset {}%)",
            turn.change.current_page,
            turn.target_column,
            turn.target_offset_percent()
        );
    }
    p.finish_transition();

    println!(
        "view {} holds pages {:?}",
        p.current_view(),
        p.current_view_range()
    );
}
